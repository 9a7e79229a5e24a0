/// Logout path Keycloak exposes under a realm issuer.
pub const DEFAULT_KEYCLOAK_LOGOUT_PATH: &str = "/protocol/openid-connect/logout";

/// Per-provider logout settings, snapshotted from configuration for one request.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProviderConfig {
    pub end_session_endpoint: Option<String>,
    pub client_id: String,
    pub issuer: Option<String>,
    pub keycloak: Option<KeycloakConfig>,
}

impl ProviderConfig {
    pub fn new(client_id: impl Into<String>) -> Self {
        Self {
            client_id: client_id.into(),
            ..Self::default()
        }
    }

    pub fn with_end_session_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.end_session_endpoint = Some(endpoint.into());
        self
    }

    pub fn with_issuer(mut self, issuer: impl Into<String>) -> Self {
        self.issuer = Some(issuer.into());
        self
    }

    pub fn with_keycloak(mut self, keycloak: KeycloakConfig) -> Self {
        self.keycloak = Some(keycloak);
        self
    }

    pub fn end_session_endpoint(&self) -> Option<&str> {
        non_blank(self.end_session_endpoint.as_deref())
    }

    pub fn issuer(&self) -> Option<&str> {
        non_blank(self.issuer.as_deref())
    }

    pub fn client_id(&self) -> &str {
        &self.client_id
    }

    /// Keycloak settings, only when a realm is configured.
    pub fn keycloak_realm(&self) -> Option<&KeycloakConfig> {
        self.keycloak
            .as_ref()
            .filter(|keycloak| keycloak.realm().is_some())
    }
}

/// Keycloak-specific overrides for synthesising the end-session endpoint.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeycloakConfig {
    pub realm: Option<String>,
    pub server_url: Option<String>,
    pub logout_path: Option<String>,
}

impl KeycloakConfig {
    pub fn realm(&self) -> Option<&str> {
        non_blank(self.realm.as_deref())
    }

    pub fn server_url(&self) -> Option<&str> {
        non_blank(self.server_url.as_deref())
    }

    pub fn logout_path(&self) -> &str {
        non_blank(self.logout_path.as_deref()).unwrap_or(DEFAULT_KEYCLOAK_LOGOUT_PATH)
    }

    /// `{server_url}/realms/{realm}`, the issuer Keycloak stamps on its tokens.
    pub fn realm_issuer(&self) -> Option<String> {
        let server_url = self.server_url()?.trim_end_matches('/');
        let realm = self.realm()?;
        Some(format!("{server_url}/realms/{realm}"))
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|value| !value.is_empty())
}
