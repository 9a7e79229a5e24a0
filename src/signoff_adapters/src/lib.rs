pub mod auth_validation;
pub mod config;
pub mod handlers;
pub mod http;
pub mod resources;

pub use auth_validation::{JwtAuthConfig, JwtContextResolver};
pub use config::{Settings, SettingsStore};
pub use handlers::handle_logout;
pub use http::OriginPolicy;
pub use resources::BundledResourceResolver;
