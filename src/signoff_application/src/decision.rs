//! The logout decision engine.
//!
//! Pure: it only looks at request-scoped values and never performs I/O, so it
//! can run under any web framework and is tested without one.

use signoff_core::{AuthContext, ClientIntent, LogoutOutcome, ProviderConfig, RequestOrigin};

use crate::end_session::{provider_logout_url, resolve_end_session_endpoint};

/// Decide how a logout request is answered.
///
/// * No authentication or a local session: redirect to the local logout page.
/// * A JWT without a delegated `authType`: same as a local session.
/// * A delegated JWT: the provider's end-session URL when one can be resolved
///   from `provider`, the local logout page otherwise, presented as JSON or as
///   a redirect depending on `intent`.
pub fn decide(
    auth_context: &AuthContext,
    provider: Option<&ProviderConfig>,
    intent: ClientIntent,
    origin: &RequestOrigin,
) -> LogoutOutcome {
    let token = match auth_context {
        AuthContext::None | AuthContext::LocalSession => {
            return LogoutOutcome::RedirectTo(origin.local_logout_path());
        }
        AuthContext::JwtDelegated(token) => token,
    };

    let Some(auth_type) = token.auth_type() else {
        tracing::debug!(
            auth_type = token.raw_auth_type(),
            "Token does not request delegated logout"
        );
        return LogoutOutcome::RedirectTo(origin.local_logout_path());
    };

    let provider_logout = provider.and_then(|provider| {
        resolve_end_session_endpoint(token, provider)
            .map(|endpoint| provider_logout_url(&endpoint, provider.client_id(), origin))
    });

    let logout_url = match provider_logout {
        Some(url) => url,
        None => {
            tracing::info!(
                %auth_type,
                "No end-session endpoint available, falling back to local logout"
            );
            origin.local_logout_path()
        }
    };

    LogoutOutcome::for_intent(intent, logout_url)
}
