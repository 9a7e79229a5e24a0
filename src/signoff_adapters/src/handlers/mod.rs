//! Framework-agnostic logout handlers.
//!
//! These handlers contain the logout flow without any framework dependencies.
//! Framework-specific routes (Axum, Actix, etc.) wrap their request and response
//! types, call these handlers, and turn the written response back into their own.

pub mod logout;

pub use logout::handle_logout;
