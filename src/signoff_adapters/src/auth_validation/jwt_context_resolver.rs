use async_trait::async_trait;
use jsonwebtoken::{DecodingKey, Validation, decode};
use secrecy::{ExposeSecret, Secret};
use signoff_core::{
    AuthContext, AuthContextResolver, Claims, DelegatedToken, LogoutRequest, LogoutRequestExt,
};
use thiserror::Error;

use crate::config::AuthSettings;

#[derive(Clone)]
pub struct JwtAuthConfig {
    pub jwt_cookie_name: String,
    pub jwt_secret: Secret<String>,
    pub jwt_audience: Option<String>,
    pub session_cookie_name: String,
}

impl JwtAuthConfig {
    pub fn as_bytes(&self) -> &[u8] {
        self.jwt_secret.expose_secret().as_bytes()
    }
}

impl From<&AuthSettings> for JwtAuthConfig {
    fn from(settings: &AuthSettings) -> Self {
        Self {
            jwt_cookie_name: settings.jwt.cookie_name.clone(),
            jwt_secret: settings.jwt.secret.clone(),
            jwt_audience: settings.jwt.audience.clone(),
            session_cookie_name: settings.session_cookie_name.clone(),
        }
    }
}

/// Resolves the auth context from a locally signed JWT, falling back to the
/// session cookie.
#[derive(Clone)]
pub struct JwtContextResolver {
    config: JwtAuthConfig,
}

impl JwtContextResolver {
    pub fn new(config: JwtAuthConfig) -> Self {
        Self { config }
    }
}

#[async_trait]
impl AuthContextResolver for JwtContextResolver {
    async fn resolve<R>(&self, request: &R) -> AuthContext
    where
        R: LogoutRequest + Sync,
    {
        if let Some(token) = extract_token(request, &self.config.jwt_cookie_name) {
            match decode_claims(token, &self.config) {
                Ok(claims) => {
                    return AuthContext::JwtDelegated(DelegatedToken::from_claims(claims));
                }
                // Logging out with a stale token is normal; the session may still be live.
                Err(e) => tracing::debug!(error = %e, "Ignoring unusable token on logout"),
            }
        }

        if request.cookie(&self.config.session_cookie_name).is_some() {
            AuthContext::LocalSession
        } else {
            AuthContext::None
        }
    }
}

#[derive(Debug, Error)]
pub enum TokenAuthError {
    #[error("Token error: {0}")]
    TokenError(#[from] jsonwebtoken::errors::Error),
}

/// Bearer header first, then the JWT cookie.
pub fn extract_token<'a, R>(request: &'a R, cookie_name: &str) -> Option<&'a str>
where
    R: LogoutRequest,
{
    request
        .bearer_token()
        .or_else(|| request.cookie(cookie_name))
        .filter(|token| !token.is_empty())
}

// Check the JWT signature and expiry, returning every claim it carries
pub fn decode_claims(token: &str, config: &JwtAuthConfig) -> Result<Claims, TokenAuthError> {
    let claims = decode::<Claims>(
        token,
        &DecodingKey::from_secret(config.as_bytes()),
        &validation(config),
    )?
    .claims;

    Ok(claims)
}

// Provider-issued tokens usually carry an `aud`; only check it when one is configured
fn validation(config: &JwtAuthConfig) -> Validation {
    let mut validation = Validation::default();
    match config.jwt_audience.as_deref() {
        Some(audience) => validation.set_audience(&[audience]),
        None => validation.validate_aud = false,
    }
    validation
}
