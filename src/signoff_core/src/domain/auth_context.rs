use serde_json::{Map, Value};

use super::auth_type::AuthType;

/// Claim carrying the authentication modality of a JWT.
pub const AUTH_TYPE_CLAIM: &str = "authType";

/// Standard JWT issuer claim.
pub const ISSUER_CLAIM: &str = "iss";

pub type Claims = Map<String, Value>;

/// The authentication state of a request reaching the logout endpoint.
///
/// Resolved once at the HTTP boundary and matched exhaustively by the
/// decision engine.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum AuthContext {
    /// No authentication was found on the request.
    #[default]
    None,

    /// A server-side session without a delegating token.
    LocalSession,

    /// A validated JWT whose claims may request provider-delegated logout.
    JwtDelegated(DelegatedToken),
}

impl AuthContext {
    pub fn kind(&self) -> &'static str {
        match self {
            AuthContext::None => "none",
            AuthContext::LocalSession => "local_session",
            AuthContext::JwtDelegated(_) => "jwt_delegated",
        }
    }
}

/// Claims of a JWT that was issued after an external or local login.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DelegatedToken {
    auth_type: Option<String>,
    issuer: Option<String>,
    claims: Claims,
}

impl DelegatedToken {
    pub fn new(auth_type: Option<String>, issuer: Option<String>, claims: Claims) -> Self {
        Self {
            auth_type,
            issuer,
            claims,
        }
    }

    /// Build a token view from a decoded claim set.
    ///
    /// `authType` and `iss` are read when they are strings; the full claim
    /// set is kept untouched.
    pub fn from_claims(claims: Claims) -> Self {
        let string_claim = |name: &str| {
            claims
                .get(name)
                .and_then(Value::as_str)
                .map(str::to_owned)
        };

        Self {
            auth_type: string_claim(AUTH_TYPE_CLAIM),
            issuer: string_claim(ISSUER_CLAIM),
            claims,
        }
    }

    /// The delegated modality, if the `authType` claim names one.
    pub fn auth_type(&self) -> Option<AuthType> {
        self.auth_type.as_deref().and_then(AuthType::from_claim)
    }

    /// The raw `authType` claim as carried by the token.
    pub fn raw_auth_type(&self) -> Option<&str> {
        self.auth_type.as_deref()
    }

    /// The token issuer; blank values count as absent.
    pub fn issuer(&self) -> Option<&str> {
        self.issuer
            .as_deref()
            .map(str::trim)
            .filter(|issuer| !issuer.is_empty())
    }

    pub fn claims(&self) -> &Claims {
        &self.claims
    }
}
