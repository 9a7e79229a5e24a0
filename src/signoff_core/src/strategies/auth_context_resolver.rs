use async_trait::async_trait;

use crate::{domain::auth_context::AuthContext, http_abstraction::LogoutRequest};

/// Trait for turning an incoming logout request into an [`AuthContext`].
///
/// Different deployments authenticate differently:
/// - JWT: bearer header or cookie, signature verified locally
/// - Session: a server-side session cookie
/// - Introspection: token checked against the identity provider
///
/// # Implementation Note
///
/// Resolution never fails. Missing, expired or malformed credentials map to
/// [`AuthContext::None`] (or [`AuthContext::LocalSession`] when a session is
/// still present) because logging out must always succeed for the user.
#[async_trait]
pub trait AuthContextResolver: Clone + Send + Sync + 'static {
    async fn resolve<R>(&self, request: &R) -> AuthContext
    where
        R: LogoutRequest + Sync;
}
