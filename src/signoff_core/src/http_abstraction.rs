//! Zero-cost HTTP abstraction traits for the logout flow.
//!
//! This module defines trait-based HTTP abstractions that frameworks implement directly
//! on their own types (via newtype wrappers), keeping the decision engine free of any
//! web framework.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────┐
//! │  signoff_core: Defines HTTP traits       │
//! └──────────────┬───────────────────────────┘
//!                │
//!                ▼
//! ┌──────────────────────────────────────────┐
//! │  signoff_axum: Newtype wrappers          │
//! │  struct AxumRequest(axum::Request)       │
//! │  impl LogoutRequest for AxumRequest { }  │
//! └──────────────┬───────────────────────────┘
//!                │
//!                ▼
//! ┌──────────────────────────────────────────┐
//! │  Logout handler uses LogoutRequest and   │
//! │  LogoutResponse (generic over framework) │
//! └──────────────────────────────────────────┘
//! ```

use thiserror::Error;

use crate::domain::{
    client_intent::{ACCEPT_HEADER, ClientIntent, REQUESTED_WITH_HEADER},
    logout_notice::LogoutNotice,
};

/// Trait for HTTP requests reaching the logout endpoint.
///
/// # Implementation Notes
///
/// - Return `&str` references directly from the framework's data structures
/// - Case-insensitive header lookup should be handled by implementor
/// - Query parameter values are returned percent-decoded
pub trait LogoutRequest {
    /// Get a header value by name.
    ///
    /// Returns `None` if the header doesn't exist or isn't valid UTF-8.
    fn header(&self, name: &str) -> Option<&str>;

    /// Get a cookie value by name.
    fn cookie(&self, name: &str) -> Option<&str>;

    /// Get a decoded query parameter by name.
    fn query_param(&self, name: &str) -> Option<&str>;

    /// Get the HTTP method (GET, POST, etc.)
    fn method(&self) -> &str;

    /// Get the request path
    fn path(&self) -> &str;
}

/// Request-derived facts the decision engine needs.
///
/// Automatically implemented for every `LogoutRequest`.
pub trait LogoutRequestExt: LogoutRequest {
    fn client_intent(&self) -> ClientIntent {
        ClientIntent::from_headers(
            self.header(ACCEPT_HEADER),
            self.header(REQUESTED_WITH_HEADER),
        )
    }

    fn logout_notice(&self) -> LogoutNotice {
        LogoutNotice::from_params(|name| self.query_param(name))
    }

    /// Bearer token from the `Authorization` header, if any.
    fn bearer_token(&self) -> Option<&str> {
        let value = self.header("authorization")?;
        let (scheme, token) = value.split_once(' ')?;
        scheme
            .eq_ignore_ascii_case("bearer")
            .then(|| token.trim())
            .filter(|token| !token.is_empty())
    }
}

impl<T: LogoutRequest + ?Sized> LogoutRequestExt for T {}

/// Failure while writing the logout response.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("Invalid value for header {name}: {value}")]
    InvalidHeader { name: &'static str, value: String },
    #[error("Failed to serialize response body: {0}")]
    Serialization(#[from] serde_json::Error),
    #[error("Failed to write response: {0}")]
    Io(#[from] std::io::Error),
}

/// Trait for the response side of the logout endpoint.
///
/// Mirrors a servlet-style response: it can already be committed by an
/// upstream component, in which case nothing must be written to it.
pub trait LogoutResponse {
    /// Whether a terminal response action has already been taken.
    fn is_committed(&self) -> bool;

    /// Hook for session-id URL rewriting; identity by default.
    fn encode_redirect_url(&self, url: &str) -> String {
        url.to_owned()
    }

    /// Issue a redirect to `location` and commit the response.
    fn send_redirect(&mut self, location: &str) -> Result<(), RenderError>;

    fn set_status(&mut self, code: u16);

    fn set_content_type(&mut self, content_type: &str);

    fn set_character_encoding(&mut self, charset: &str);

    /// Write the response body and commit the response.
    fn write_body(&mut self, body: &str) -> Result<(), RenderError>;
}
