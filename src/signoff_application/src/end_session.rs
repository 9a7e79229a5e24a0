//! End-session endpoint resolution.
//!
//! Sources are tried in order and the first one that yields an endpoint wins.
//! New provider flavours slot into [`END_SESSION_SOURCES`].

use signoff_core::{DelegatedToken, ProviderConfig, RequestOrigin};

type EndpointSource = fn(&DelegatedToken, &ProviderConfig) -> Option<String>;

const END_SESSION_SOURCES: [(&str, EndpointSource); 2] = [
    ("configured", configured_endpoint),
    ("keycloak", keycloak_endpoint),
];

/// Find the provider's end-session endpoint for `token`, if any can be built.
pub fn resolve_end_session_endpoint(
    token: &DelegatedToken,
    provider: &ProviderConfig,
) -> Option<String> {
    END_SESSION_SOURCES.iter().find_map(|(source, resolve)| {
        let endpoint = resolve(token, provider)?;
        tracing::debug!(source, %endpoint, "Resolved end-session endpoint");
        Some(endpoint)
    })
}

fn configured_endpoint(_token: &DelegatedToken, provider: &ProviderConfig) -> Option<String> {
    provider.end_session_endpoint().map(str::to_owned)
}

/// `{issuer}/protocol/openid-connect/logout` for Keycloak realms.
///
/// The token's own issuer wins over the configured one.
fn keycloak_endpoint(token: &DelegatedToken, provider: &ProviderConfig) -> Option<String> {
    let keycloak = provider.keycloak_realm()?;

    let issuer_base = token
        .issuer()
        .or_else(|| provider.issuer())
        .map(str::to_owned)
        .or_else(|| keycloak.realm_issuer())?;

    let logout_path = keycloak.logout_path();
    let separator = if logout_path.starts_with('/') { "" } else { "/" };

    Some(format!(
        "{}{separator}{logout_path}",
        issuer_base.trim_end_matches('/')
    ))
}

/// Append the OIDC RP-initiated logout parameters to `endpoint`.
pub fn provider_logout_url(endpoint: &str, client_id: &str, origin: &RequestOrigin) -> String {
    let separator = if endpoint.contains('?') { '&' } else { '?' };
    let post_logout_redirect_uri = origin.local_logout_url();

    format!(
        "{endpoint}{separator}client_id={}&post_logout_redirect_uri={}",
        urlencoding::encode(client_id),
        urlencoding::encode(&post_logout_redirect_uri)
    )
}
