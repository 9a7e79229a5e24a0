pub mod constants;
pub mod settings;
pub mod store;

pub use constants::*;
pub use settings::{
    AllowedOrigins, AuthSettings, JwtSettings, KeycloakSettings, OAuth2Settings,
    ResourceSettings, Saml2Settings, SecuritySettings, ServerSettings, Settings, SettingsError,
};
pub use store::SettingsStore;
