pub mod logout_service;
pub mod tracing;

pub use logout_service::{LogoutService, logout_route, report_missing_saml2_credentials};
