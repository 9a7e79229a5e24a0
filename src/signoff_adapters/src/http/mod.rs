pub mod origin;

// Re-export HTTP traits from signoff_core for convenience
pub use signoff_core::{LogoutRequest, LogoutRequestExt, LogoutResponse, RenderError};

pub use origin::{FORWARDED_HOST_HEADER, FORWARDED_PROTO_HEADER, HOST_HEADER, OriginPolicy};
