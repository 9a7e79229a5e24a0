//! Axum-specific route handlers.
//!
//! These routes are Axum-specific - they use Axum's extractors to get data from requests,
//! call the framework-agnostic handlers, and convert results to Axum responses.

pub mod logout;

pub use logout::{LogoutError, LogoutState, logout};
