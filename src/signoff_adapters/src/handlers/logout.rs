//! Framework-agnostic logout handler.

use signoff_application::{DecideLogoutUseCase, respond};
use signoff_core::{
    AuthContextResolver, LogoutOutcome, LogoutRequest, LogoutRequestExt, LogoutResponse,
    ProviderDirectory, RenderError,
};

use crate::http::OriginPolicy;

/// Handle a logout request - framework agnostic.
///
/// Resolves the auth context, decides the outcome and writes it to `response`.
/// Framework-specific routes call this after wrapping their request and response.
///
/// # Arguments
///
/// * `resolver` - Finds the authentication carried by the request
/// * `providers` - Current identity provider settings
/// * `origin` - Builds the request origin for local logout URLs
/// * `request` - The HTTP request (implements LogoutRequest trait)
/// * `response` - Response sink (framework-specific but implements our trait)
///
/// # Returns
///
/// The outcome that was decided, whether or not it had to be written.
///
/// # Example
///
/// ```ignore
/// // In an Axum route:
/// pub async fn logout(State(state): State<LogoutState>, req: Request) -> Result<Response, LogoutError> {
///     let request = AxumRequest::from(req);
///     let mut response = AxumLogoutResponse::for_request(&request);
///     handle_logout(&state.resolver, &state.providers, &state.origin, &request, &mut response).await?;
///     Ok(response.into_response())
/// }
/// ```
#[tracing::instrument(
    name = "handle_logout",
    skip_all,
    fields(method = request.method(), path = request.path())
)]
pub async fn handle_logout<A, P, R, W>(
    resolver: &A,
    providers: P,
    origin: &OriginPolicy,
    request: &R,
    response: &mut W,
) -> Result<LogoutOutcome, RenderError>
where
    A: AuthContextResolver,
    P: ProviderDirectory,
    R: LogoutRequest + Sync,
    W: LogoutResponse + ?Sized,
{
    let auth_context = resolver.resolve(request).await;
    let origin = origin
        .origin_for(request)
        .with_notice(request.logout_notice());

    let outcome = DecideLogoutUseCase::new(providers).execute(
        &auth_context,
        request.client_intent(),
        &origin,
    );

    respond(&outcome, response)?;

    Ok(outcome)
}
