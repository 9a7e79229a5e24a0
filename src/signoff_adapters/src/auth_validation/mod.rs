pub mod jwt_context_resolver;

pub use jwt_context_resolver::{
    JwtAuthConfig, JwtContextResolver, TokenAuthError, decode_claims, extract_token,
};
