use std::sync::LazyLock;

use regex::Regex;

static DISALLOWED_CHARACTERS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^a-zA-Z0-9 ]").expect("valid sanitiser pattern"));

/// Message shown on the login page after logging out.
///
/// Earlier login failures are forwarded to the logout endpoint as query
/// parameters; they only change the query of the local logout path.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum LogoutNotice {
    #[default]
    LoggedOut,
    OAuthError(String),
}

impl LogoutNotice {
    /// Build a notice from a sanitised, free-form error code.
    pub fn oauth_error(raw: &str) -> Self {
        Self::OAuthError(sanitize(raw))
    }

    /// Read the legacy error parameters of a logout request. First match wins.
    pub fn from_params<'a>(param: impl Fn(&str) -> Option<&'a str>) -> Self {
        if param("oAuth2AuthenticationErrorWeb").is_some() {
            return Self::OAuthError("userAlreadyExistsWeb".to_owned());
        }
        if let Some(message) = param("errorOAuth") {
            return Self::oauth_error(message);
        }
        for flag in [
            "oAuth2AutoCreateDisabled",
            "oAuth2AdminBlockedUser",
            "userIsDisabled",
        ] {
            if param(flag).is_some() {
                return Self::OAuthError(flag.to_owned());
            }
        }
        if let Some(message) = param("error") {
            return Self::oauth_error(message);
        }
        if param("badCredentials").is_some() {
            return Self::OAuthError("badCredentials".to_owned());
        }

        Self::LoggedOut
    }

    /// Query string (without `?`) appended to the local login route.
    pub fn query(&self) -> String {
        match self {
            Self::LoggedOut => "logout=true".to_owned(),
            Self::OAuthError(code) => format!("errorOAuth={}", urlencoding::encode(code)),
        }
    }
}

fn sanitize(input: &str) -> String {
    DISALLOWED_CHARACTERS.replace_all(input, "").into_owned()
}
