pub mod auth_context;
pub mod auth_type;
pub mod client_intent;
pub mod logout_notice;
pub mod logout_outcome;
pub mod provider_config;
pub mod request_origin;
