//! Axum integration for the signoff logout engine.
//!
//! This crate provides Axum adapters for the framework-agnostic logout flow
//! defined in `signoff_core` and `signoff_adapters`.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────┐
//! │  signoff_core: HTTP trait definitions    │
//! └──────────────┬───────────────────────────┘
//!                │
//!                ▼
//! ┌──────────────────────────────────────────┐
//! │  signoff_axum: Axum implementations      │
//! │  - AxumRequest wrapper                   │
//! │  - AxumLogoutResponse sink               │
//! │  - Axum logout route                     │
//! └──────────────────────────────────────────┘
//! ```
//!
//! # Usage
//!
//! ```ignore
//! use signoff_axum::routes::{self, LogoutState};
//! use signoff_adapters::{JwtContextResolver, SettingsStore};
//!
//! let app = Router::new()
//!     .route(
//!         "/logout",
//!         get(routes::logout::<JwtContextResolver, SettingsStore>)
//!             .post(routes::logout::<JwtContextResolver, SettingsStore>),
//!     )
//!     .with_state(LogoutState::new(resolver, store, origin));
//! ```

pub mod adapters;
pub mod routes;

// Re-export for convenience
pub use adapters::{AxumLogoutResponse, AxumRequest, ResponseCommitted};
pub use routes::{LogoutError, LogoutState};
