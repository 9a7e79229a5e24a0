//! Axum framework adapters for the logout HTTP abstraction.
//!
//! This module implements `LogoutRequest` and `LogoutResponse` for Axum's types
//! using wrappers to avoid the orphan rule.
//!
//! # Architecture
//!
//! The traits are defined in `signoff_core`, and we implement them here:
//!
//! ```text
//! ┌────────────────────────────────────────────┐
//! │  signoff_core::LogoutRequest (trait)       │
//! └────────────────┬───────────────────────────┘
//!                  │
//!                  ▼
//! ┌────────────────────────────────────────────┐
//! │  AxumRequest(request::Parts)               │
//! │  impl LogoutRequest for AxumRequest { }    │
//! └────────────────────────────────────────────┘
//! ```
//!
//! Only the request head is kept. The body is never read by the logout flow,
//! and dropping it keeps the wrapper `Sync` so it can be held across awaits.

use std::collections::HashMap;

use axum::{
    body::Body,
    extract::{Query, Request},
    http::{
        HeaderMap, HeaderValue, StatusCode,
        header::{CONTENT_TYPE, LOCATION},
        request::Parts,
    },
    response::{IntoResponse, Response},
};
use signoff_core::{LogoutRequest, LogoutResponse, RenderError};

/// Request extension marking a response that an earlier layer already produced.
///
/// When present, the logout route writes nothing of its own.
#[derive(Debug, Clone, Copy, Default)]
pub struct ResponseCommitted;

/// Wrapper around the head of an Axum request.
pub struct AxumRequest {
    parts: Parts,
    query: HashMap<String, String>,
}

impl AxumRequest {
    pub fn from_parts(parts: Parts) -> Self {
        // A malformed query string is treated as an empty one
        let query = Query::<HashMap<String, String>>::try_from_uri(&parts.uri)
            .map(|Query(query)| query)
            .unwrap_or_default();

        Self { parts, query }
    }

    /// Whether an upstream layer marked the response as already committed.
    pub fn is_committed(&self) -> bool {
        self.parts.extensions.get::<ResponseCommitted>().is_some()
    }
}

impl From<Request> for AxumRequest {
    fn from(req: Request) -> Self {
        let (parts, _body) = req.into_parts();
        Self::from_parts(parts)
    }
}

impl LogoutRequest for AxumRequest {
    fn header(&self, name: &str) -> Option<&str> {
        self.parts.headers.get(name)?.to_str().ok()
    }

    fn cookie(&self, name: &str) -> Option<&str> {
        // Browsers may send several Cookie headers
        self.parts
            .headers
            .get_all("cookie")
            .iter()
            .filter_map(|value| value.to_str().ok())
            .flat_map(|header| header.split(';'))
            .find_map(|pair| {
                let (key, value) = pair.trim().split_once('=')?;
                (key == name).then_some(value)
            })
    }

    fn query_param(&self, name: &str) -> Option<&str> {
        self.query.get(name).map(String::as_str)
    }

    fn method(&self) -> &str {
        self.parts.method.as_str()
    }

    fn path(&self) -> &str {
        self.parts.uri.path()
    }
}

/// Response sink for the logout route.
///
/// Collects what the responder writes and turns it into an Axum response.
/// A sink that was never written to becomes `204 No Content`.
#[derive(Debug)]
pub struct AxumLogoutResponse {
    committed: bool,
    written: bool,
    status: StatusCode,
    content_type: Option<String>,
    charset: Option<String>,
    headers: HeaderMap,
    body: String,
}

impl AxumLogoutResponse {
    pub fn new() -> Self {
        Self {
            committed: false,
            written: false,
            status: StatusCode::OK,
            content_type: None,
            charset: None,
            headers: HeaderMap::new(),
            body: String::new(),
        }
    }

    /// Sink for `request`, committed if an upstream layer said so.
    pub fn for_request(request: &AxumRequest) -> Self {
        Self {
            committed: request.is_committed(),
            ..Self::new()
        }
    }

    fn content_type_header(&self) -> Option<String> {
        let content_type = self.content_type.as_deref()?;
        Some(match self.charset.as_deref() {
            Some(charset) => format!("{content_type};charset={charset}"),
            None => content_type.to_owned(),
        })
    }
}

impl Default for AxumLogoutResponse {
    fn default() -> Self {
        Self::new()
    }
}

impl LogoutResponse for AxumLogoutResponse {
    fn is_committed(&self) -> bool {
        self.committed
    }

    fn send_redirect(&mut self, location: &str) -> Result<(), RenderError> {
        let value = HeaderValue::from_str(location).map_err(|_| RenderError::InvalidHeader {
            name: "location",
            value: location.to_owned(),
        })?;

        self.status = StatusCode::SEE_OTHER;
        self.headers.insert(LOCATION, value);
        self.committed = true;
        self.written = true;
        Ok(())
    }

    fn set_status(&mut self, code: u16) {
        match StatusCode::from_u16(code) {
            Ok(status) => self.status = status,
            Err(_) => tracing::warn!(code, "Ignoring invalid status code"),
        }
    }

    fn set_content_type(&mut self, content_type: &str) {
        self.content_type = Some(content_type.to_owned());
    }

    fn set_character_encoding(&mut self, charset: &str) {
        self.charset = Some(charset.to_owned());
    }

    fn write_body(&mut self, body: &str) -> Result<(), RenderError> {
        if let Some(content_type) = self.content_type_header() {
            let value =
                HeaderValue::from_str(&content_type).map_err(|_| RenderError::InvalidHeader {
                    name: "content-type",
                    value: content_type.clone(),
                })?;
            self.headers.insert(CONTENT_TYPE, value);
        }

        self.body.push_str(body);
        self.committed = true;
        self.written = true;
        Ok(())
    }
}

impl IntoResponse for AxumLogoutResponse {
    fn into_response(self) -> Response {
        if !self.written {
            return StatusCode::NO_CONTENT.into_response();
        }

        (self.status, self.headers, Body::from(self.body)).into_response()
    }
}
