use super::logout_notice::LogoutNotice;

/// Route of the local login page, relative to the context path.
pub const LOGIN_ROUTE: &str = "/login";

/// Where the logout request came from, used to build local logout URLs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestOrigin {
    scheme: String,
    host: String,
    context_path: String,
    notice: LogoutNotice,
}

impl RequestOrigin {
    /// `host` is taken as sent by the client and may carry a port.
    pub fn new(scheme: impl Into<String>, host: impl Into<String>) -> Self {
        Self {
            scheme: scheme.into(),
            host: host.into(),
            context_path: String::new(),
            notice: LogoutNotice::default(),
        }
    }

    /// Mount point of the application. Normalised to `""` or `/segment` form.
    pub fn with_context_path(mut self, context_path: &str) -> Self {
        let trimmed = context_path.trim().trim_matches('/');
        self.context_path = if trimmed.is_empty() {
            String::new()
        } else {
            format!("/{trimmed}")
        };
        self
    }

    pub fn with_notice(mut self, notice: LogoutNotice) -> Self {
        self.notice = notice;
        self
    }

    pub fn scheme(&self) -> &str {
        &self.scheme
    }

    pub fn host(&self) -> &str {
        &self.host
    }

    pub fn context_path(&self) -> &str {
        &self.context_path
    }

    pub fn notice(&self) -> &LogoutNotice {
        &self.notice
    }

    /// `{context_path}/login?{notice}`
    pub fn local_logout_path(&self) -> String {
        format!(
            "{}{}?{}",
            self.context_path,
            LOGIN_ROUTE,
            self.notice.query()
        )
    }

    /// Absolute form of [`Self::local_logout_path`], for providers to redirect back to.
    pub fn local_logout_url(&self) -> String {
        format!(
            "{}://{}{}",
            self.scheme,
            self.host,
            self.local_logout_path()
        )
    }
}
