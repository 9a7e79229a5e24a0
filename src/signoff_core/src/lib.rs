pub mod domain;
pub mod http_abstraction;
pub mod ports;
pub mod strategies;

// Re-export commonly used types for convenience
pub use domain::{
    auth_context::{AUTH_TYPE_CLAIM, AuthContext, Claims, DelegatedToken, ISSUER_CLAIM},
    auth_type::AuthType,
    client_intent::ClientIntent,
    logout_notice::LogoutNotice,
    logout_outcome::{LogoutOutcome, LogoutUrlBody},
    provider_config::{DEFAULT_KEYCLOAK_LOGOUT_PATH, KeycloakConfig, ProviderConfig},
    request_origin::{LOGIN_ROUTE, RequestOrigin},
};

pub use ports::services::{ProviderDirectory, Resource, ResourceResolver};

pub use strategies::auth_context_resolver::AuthContextResolver;

pub use http_abstraction::{LogoutRequest, LogoutRequestExt, LogoutResponse, RenderError};
