use signoff_core::{LogoutRequest, RequestOrigin};

use crate::config::{ServerSettings, constants::defaults};

pub const HOST_HEADER: &str = "host";
pub const FORWARDED_HOST_HEADER: &str = "x-forwarded-host";
pub const FORWARDED_PROTO_HEADER: &str = "x-forwarded-proto";

/// Builds the [`RequestOrigin`] of a logout request.
///
/// The scheme comes from configuration and the host from the `Host` header.
/// Behind a trusted proxy the `X-Forwarded-*` headers take precedence.
#[derive(Debug, Clone)]
pub struct OriginPolicy {
    scheme: String,
    context_path: String,
    trust_forwarded_headers: bool,
}

impl OriginPolicy {
    pub fn new(scheme: impl Into<String>, context_path: impl Into<String>) -> Self {
        Self {
            scheme: scheme.into(),
            context_path: context_path.into(),
            trust_forwarded_headers: false,
        }
    }

    pub fn trust_forwarded_headers(mut self, trust: bool) -> Self {
        self.trust_forwarded_headers = trust;
        self
    }

    pub fn origin_for<R>(&self, request: &R) -> RequestOrigin
    where
        R: LogoutRequest + ?Sized,
    {
        let scheme = self
            .forwarded(request, FORWARDED_PROTO_HEADER)
            .unwrap_or(&self.scheme);
        let host = self
            .forwarded(request, FORWARDED_HOST_HEADER)
            .or_else(|| first_value(request.header(HOST_HEADER)))
            .unwrap_or(defaults::HOST);

        RequestOrigin::new(scheme, host).with_context_path(&self.context_path)
    }

    fn forwarded<'a, R>(&self, request: &'a R, name: &str) -> Option<&'a str>
    where
        R: LogoutRequest + ?Sized,
    {
        if self.trust_forwarded_headers {
            first_value(request.header(name))
        } else {
            None
        }
    }
}

impl From<&ServerSettings> for OriginPolicy {
    fn from(settings: &ServerSettings) -> Self {
        Self::new(&settings.scheme, &settings.context_path)
            .trust_forwarded_headers(settings.trust_forwarded_headers)
    }
}

// Proxies append to forwarded headers; the first entry is the client-facing one
fn first_value(value: Option<&str>) -> Option<&str> {
    value
        .and_then(|v| v.split(',').next())
        .map(str::trim)
        .filter(|v| !v.is_empty())
}
