//! Axum-specific logout route.

use axum::{
    Json,
    extract::{Request, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use signoff_adapters::{handlers, http::OriginPolicy};
use signoff_core::{AuthContextResolver, ProviderDirectory, RenderError};
use thiserror::Error;

use crate::adapters::{AxumLogoutResponse, AxumRequest};

/// Shared state of the logout route.
#[derive(Clone)]
pub struct LogoutState<A, P> {
    pub resolver: A,
    pub providers: P,
    pub origin: OriginPolicy,
}

impl<A, P> LogoutState<A, P> {
    pub fn new(resolver: A, providers: P, origin: OriginPolicy) -> Self {
        Self {
            resolver,
            providers,
            origin,
        }
    }
}

/// Axum logout route.
///
/// This route is Axum-specific - it uses Axum's extractors and error handling.
/// The actual logout logic is in the framework-agnostic handler.
#[tracing::instrument(name = "Logout", skip_all)]
pub async fn logout<A, P>(
    State(state): State<LogoutState<A, P>>,
    req: Request,
) -> Result<Response, LogoutError>
where
    A: AuthContextResolver,
    P: ProviderDirectory + Clone + 'static,
{
    let request = AxumRequest::from(req);
    let mut response = AxumLogoutResponse::for_request(&request);

    handlers::handle_logout(
        &state.resolver,
        &state.providers,
        &state.origin,
        &request,
        &mut response,
    )
    .await?;

    Ok(response.into_response())
}

/// Errors that can occur during logout
#[derive(Debug, Error)]
pub enum LogoutError {
    #[error("Failed to write logout response: {0}")]
    Render(#[from] RenderError),
}

impl IntoResponse for LogoutError {
    fn into_response(self) -> Response {
        tracing::error!(error = %self, "Logout failed");

        let (status, message) = match self {
            LogoutError::Render(e) => (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()),
        };

        (status, Json(serde_json::json!({ "error": message }))).into_response()
    }
}
