pub const ACCEPT_HEADER: &str = "accept";
pub const REQUESTED_WITH_HEADER: &str = "x-requested-with";

const JSON_MEDIA_TYPE: &str = "application/json";
const XHR_MARKER: &str = "XMLHttpRequest";

/// What kind of response the client expects from the logout endpoint.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ClientIntent {
    /// API or XHR caller: answer with a JSON body carrying the logout URL.
    WantsJson,

    /// Browser navigation: answer with a redirect.
    #[default]
    WantsRedirect,
}

impl ClientIntent {
    /// Classify a request from its `Accept` and `X-Requested-With` header values.
    ///
    /// `Accept` is checked first; either signal alone is enough for JSON.
    pub fn from_headers(accept: Option<&str>, requested_with: Option<&str>) -> Self {
        let accepts_json = accept
            .map(|value| value.to_ascii_lowercase().contains(JSON_MEDIA_TYPE))
            .unwrap_or(false);
        if accepts_json {
            return Self::WantsJson;
        }

        let is_xhr = requested_with
            .map(|value| value == XHR_MARKER)
            .unwrap_or(false);
        if is_xhr {
            return Self::WantsJson;
        }

        Self::WantsRedirect
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_headers_default_to_redirect() {
        assert_eq!(
            ClientIntent::from_headers(None, None),
            ClientIntent::WantsRedirect
        );
    }

    #[test]
    fn test_json_accept_header_wants_json() {
        assert_eq!(
            ClientIntent::from_headers(Some("application/json"), None),
            ClientIntent::WantsJson
        );
        assert_eq!(
            ClientIntent::from_headers(Some("text/html, Application/JSON;q=0.9"), None),
            ClientIntent::WantsJson
        );
    }

    #[test]
    fn test_xhr_header_alone_wants_json() {
        assert_eq!(
            ClientIntent::from_headers(Some("text/html"), Some("XMLHttpRequest")),
            ClientIntent::WantsJson
        );
    }

    #[test]
    fn test_xhr_marker_must_match_exactly() {
        for marker in ["xmlhttprequest", "XMLHTTPREQUEST", " XMLHttpRequest"] {
            assert_eq!(
                ClientIntent::from_headers(None, Some(marker)),
                ClientIntent::WantsRedirect
            );
        }
    }

    #[test]
    fn test_browser_headers_want_redirect() {
        assert_eq!(
            ClientIntent::from_headers(Some("text/html,application/xhtml+xml"), None),
            ClientIntent::WantsRedirect
        );
        assert_eq!(
            ClientIntent::from_headers(Some("*/*"), Some("fetch")),
            ClientIntent::WantsRedirect
        );
    }

    #[quickcheck_macros::quickcheck]
    fn prop_accept_without_json_redirects(accept: String) -> bool {
        accept.to_ascii_lowercase().contains(JSON_MEDIA_TYPE)
            || ClientIntent::from_headers(Some(&accept), None) == ClientIntent::WantsRedirect
    }

    #[quickcheck_macros::quickcheck]
    fn prop_xhr_always_wants_json(accept: Option<String>) -> bool {
        ClientIntent::from_headers(accept.as_deref(), Some(XHR_MARKER)) == ClientIntent::WantsJson
    }
}
