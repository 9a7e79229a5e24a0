//! # Signoff - Logout Service Library
//!
//! This is a facade crate that re-exports all public APIs from the logout service components.
//! Use this crate to get access to all logout functionality in one place.
//!
//! ## Usage
//!
//! Add to your `Cargo.toml`:
//! ```toml
//! [dependencies]
//! signoff = { path = "../signoff" }
//! ```
//!
//! ## Structure
//!
//! - **Core domain types**: `AuthContext`, `ClientIntent`, `LogoutOutcome`, etc.
//! - **Port traits**: `ProviderDirectory`, `ResourceResolver`, `AuthContextResolver`
//! - **Decision engine**: `decide`, `respond`, `DecideLogoutUseCase`
//! - **Adapters**: `Settings`, `SettingsStore`, `JwtContextResolver`, `BundledResourceResolver`
//! - **Service**: `LogoutService` - The main entry point for the logout service

// ============================================================================
// Core Domain Types
// ============================================================================

/// Core domain types and value objects
pub mod core {
    pub use signoff_core::*;
}

// Re-export most commonly used core types at the root level
pub use signoff_core::{
    AuthContext, AuthType, ClientIntent, DelegatedToken, KeycloakConfig, LogoutNotice,
    LogoutOutcome, ProviderConfig, RequestOrigin,
};

// ============================================================================
// Port Traits
// ============================================================================

/// Port trait definitions
pub mod ports {
    pub use signoff_core::{
        AuthContextResolver, LogoutRequest, LogoutRequestExt, LogoutResponse, ProviderDirectory,
        RenderError, Resource, ResourceResolver,
    };
}

// Re-export port traits at root level
pub use ports::{
    AuthContextResolver, LogoutRequest, LogoutResponse, ProviderDirectory, RenderError,
    Resource, ResourceResolver,
};

// ============================================================================
// Decision Engine (Application Layer)
// ============================================================================

/// Logout decision engine and responder
pub mod engine {
    pub use signoff_application::*;
}

// Re-export the engine at root level
pub use signoff_application::{DecideLogoutUseCase, decide, respond};

// ============================================================================
// Adapters (Infrastructure)
// ============================================================================

/// Infrastructure adapters
pub mod adapters {
    /// Framework-agnostic handlers
    pub mod handlers {
        pub use signoff_adapters::handlers::*;
    }

    /// Request origin policy
    pub mod http {
        pub use signoff_adapters::http::*;
    }

    /// Certificate and key resolution
    pub mod resources {
        pub use signoff_adapters::resources::*;
    }

    /// JWT auth context resolution
    pub mod auth {
        pub use signoff_adapters::auth_validation::*;
    }

    /// Configuration
    pub mod config {
        pub use signoff_adapters::config::*;
    }

    /// Axum integration
    pub mod axum {
        pub use signoff_axum::*;
    }
}

// Re-export commonly used adapters at root level
pub use signoff_adapters::{
    BundledResourceResolver, JwtAuthConfig, JwtContextResolver, OriginPolicy, Settings,
    SettingsStore,
};

// ============================================================================
// Logout Service (Main Entry Point)
// ============================================================================

/// Main logout service
pub use signoff_service::LogoutService;

// ============================================================================
// Re-export common external dependencies
// ============================================================================

/// Re-export async-trait for implementing resolver traits
pub use async_trait::async_trait;

/// Re-export secrecy for working with secrets
pub use secrecy::{ExposeSecret, Secret};

pub use http;
