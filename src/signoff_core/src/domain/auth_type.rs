use std::fmt;

/// Authentication modalities whose logout can be delegated to an identity provider.
///
/// Plain web (username/password) logins carry `WEB` or no tag at all; those
/// are deliberately not represented here and always log out locally.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AuthType {
    OAuth2,
    Saml2,
}

impl AuthType {
    /// Parse the value of an `authType` claim.
    ///
    /// Matching is ASCII case-insensitive. Returns `None` for anything that
    /// is not a delegated modality.
    pub fn from_claim(value: &str) -> Option<Self> {
        let value = value.trim();
        if value.eq_ignore_ascii_case("OAUTH2") {
            Some(Self::OAuth2)
        } else if value.eq_ignore_ascii_case("SAML2") {
            Some(Self::Saml2)
        } else {
            None
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::OAuth2 => "OAUTH2",
            Self::Saml2 => "SAML2",
        }
    }
}

impl fmt::Display for AuthType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
