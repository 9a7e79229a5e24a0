use serde::{Deserialize, Serialize};

use super::client_intent::ClientIntent;

/// The single terminal action the logout endpoint takes for a request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogoutOutcome {
    RedirectTo(String),
    JsonBody { logout_url: String },
}

impl LogoutOutcome {
    /// Present `logout_url` the way the client asked for it.
    pub fn for_intent(intent: ClientIntent, logout_url: String) -> Self {
        match intent {
            ClientIntent::WantsJson => Self::JsonBody { logout_url },
            ClientIntent::WantsRedirect => Self::RedirectTo(logout_url),
        }
    }

    pub fn logout_url(&self) -> &str {
        match self {
            Self::RedirectTo(url) => url,
            Self::JsonBody { logout_url } => logout_url,
        }
    }
}

/// JSON body returned to API and XHR callers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogoutUrlBody {
    #[serde(rename = "logoutUrl")]
    pub logout_url: String,
}
