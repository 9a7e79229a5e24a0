//! Application layer of the logout flow.
//!
//! - [`decision::decide`]: the pure decision engine
//! - [`end_session`]: ordered end-session endpoint resolution
//! - [`responder::respond`]: renders an outcome onto a `LogoutResponse`
//! - [`DecideLogoutUseCase`]: wires a `ProviderDirectory` into the engine

pub mod decision;
pub mod end_session;
pub mod responder;
pub mod use_cases;

pub use decision::decide;
pub use end_session::{provider_logout_url, resolve_end_session_endpoint};
pub use responder::{JSON_CONTENT_TYPE, UTF_8, respond};
pub use use_cases::DecideLogoutUseCase;
