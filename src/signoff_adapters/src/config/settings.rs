use std::path::{Path, PathBuf};

use axum::http::HeaderValue;
use secrecy::Secret;
use serde::Deserialize;
use signoff_core::{
    AuthType, KeycloakConfig, ProviderConfig, ProviderDirectory, Resource, ResourceResolver,
};
use thiserror::Error;

use super::constants::{defaults, env};

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("Failed to load configuration: {0}")]
    Config(#[from] config::ConfigError),
}

/// Full service configuration.
///
/// Sources, later ones overriding earlier ones:
/// 1. `{config_dir}/base.json`
/// 2. `{config_dir}/{APP_ENVIRONMENT}.json`
/// 3. `SIGNOFF__SECTION__KEY` environment variables
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub server: ServerSettings,
    pub auth: AuthSettings,
    #[serde(default)]
    pub security: SecuritySettings,
    #[serde(default)]
    pub resources: ResourceSettings,
}

impl Settings {
    /// Load settings from the default locations, reading `.env` first.
    pub fn load() -> Result<Self, SettingsError> {
        dotenvy::dotenv().ok();

        let environment = std::env::var(env::APP_ENVIRONMENT_ENV_VAR)
            .unwrap_or_else(|_| defaults::APP_ENVIRONMENT.to_owned());
        let config_dir = std::env::var(env::CONFIG_DIR_ENV_VAR)
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(defaults::CONFIG_DIR));

        Self::load_from(&config_dir, &environment)
    }

    pub fn load_from(config_dir: &Path, environment: &str) -> Result<Self, SettingsError> {
        let base = config_dir.join("base");
        let overrides = config_dir.join(environment);

        let settings = config::Config::builder()
            .add_source(config::File::with_name(&base.to_string_lossy()).required(false))
            .add_source(config::File::with_name(&overrides.to_string_lossy()).required(false))
            .add_source(
                config::Environment::with_prefix(env::ENV_PREFIX)
                    .prefix_separator(env::ENV_SEPARATOR)
                    .separator(env::ENV_SEPARATOR)
                    .try_parsing(true)
                    .list_separator(",")
                    .with_list_parse_key("auth.allowed_origins"),
            )
            .build()?;

        Ok(settings.try_deserialize()?)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    #[serde(default = "default_address")]
    pub address: String,
    #[serde(default = "default_scheme")]
    pub scheme: String,
    /// Mount point of the application, e.g. `/pdf`. Empty for the root.
    #[serde(default)]
    pub context_path: String,
    #[serde(default = "default_assets_dir")]
    pub assets_dir: String,
    /// Honour `X-Forwarded-Proto` and `X-Forwarded-Host` from a reverse proxy.
    #[serde(default)]
    pub trust_forwarded_headers: bool,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            address: default_address(),
            scheme: default_scheme(),
            context_path: String::new(),
            assets_dir: default_assets_dir(),
            trust_forwarded_headers: false,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct AuthSettings {
    pub jwt: JwtSettings,
    #[serde(default = "default_session_cookie_name")]
    pub session_cookie_name: String,
    #[serde(default)]
    pub allowed_origins: AllowedOrigins,
}

#[derive(Debug, Clone, Deserialize)]
pub struct JwtSettings {
    #[serde(default = "default_jwt_cookie_name")]
    pub cookie_name: String,
    pub secret: Secret<String>,
    /// Expected `aud` claim. Unset means the audience is not checked.
    #[serde(default)]
    pub audience: Option<String>,
}

/// Origins allowed to call the service cross-site.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(from = "Vec<String>")]
pub struct AllowedOrigins(Vec<String>);

impl AllowedOrigins {
    pub fn contains(&self, origin: &HeaderValue) -> bool {
        origin
            .to_str()
            .map(|origin| self.0.iter().any(|allowed| allowed == origin))
            .unwrap_or(false)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<Vec<String>> for AllowedOrigins {
    fn from(origins: Vec<String>) -> Self {
        Self(
            origins
                .into_iter()
                .map(|origin| origin.trim().trim_end_matches('/').to_owned())
                .filter(|origin| !origin.is_empty())
                .collect(),
        )
    }
}

/// Identity provider settings, one optional section per delegated modality.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SecuritySettings {
    #[serde(default)]
    pub oauth2: Option<OAuth2Settings>,
    #[serde(default)]
    pub saml2: Option<Saml2Settings>,
}

impl ProviderDirectory for SecuritySettings {
    fn provider_config(&self, auth_type: AuthType) -> Option<ProviderConfig> {
        match auth_type {
            AuthType::OAuth2 => self
                .oauth2
                .as_ref()
                .filter(|oauth2| oauth2.enabled)
                .map(OAuth2Settings::provider_config),
            AuthType::Saml2 => self
                .saml2
                .as_ref()
                .filter(|saml2| saml2.enabled)
                .map(Saml2Settings::provider_config),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct OAuth2Settings {
    #[serde(default = "enabled")]
    pub enabled: bool,
    pub client_id: String,
    #[serde(default)]
    pub client_secret: Option<Secret<String>>,
    #[serde(default)]
    pub issuer: Option<String>,
    #[serde(default)]
    pub end_session_endpoint: Option<String>,
    #[serde(default)]
    pub keycloak: Option<KeycloakSettings>,
}

impl OAuth2Settings {
    pub fn provider_config(&self) -> ProviderConfig {
        ProviderConfig {
            end_session_endpoint: self.end_session_endpoint.clone(),
            client_id: self.client_id.clone(),
            issuer: self.issuer.clone(),
            keycloak: self.keycloak.as_ref().map(|keycloak| KeycloakConfig {
                realm: keycloak.realm.clone(),
                server_url: keycloak.server_url.clone(),
                logout_path: keycloak.logout_path.clone(),
            }),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct KeycloakSettings {
    #[serde(default)]
    pub realm: Option<String>,
    #[serde(default)]
    pub server_url: Option<String>,
    #[serde(default)]
    pub logout_path: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Saml2Settings {
    #[serde(default = "enabled")]
    pub enabled: bool,
    pub registration_id: String,
    #[serde(default)]
    pub idp_issuer: Option<String>,
    #[serde(default)]
    pub idp_single_logout_url: Option<String>,
    #[serde(default)]
    pub sp_cert: Option<String>,
    #[serde(default)]
    pub private_key: Option<String>,
    #[serde(default)]
    pub idp_cert: Option<String>,
}

impl Saml2Settings {
    pub fn provider_config(&self) -> ProviderConfig {
        ProviderConfig {
            end_session_endpoint: self.idp_single_logout_url.clone(),
            client_id: self.registration_id.clone(),
            issuer: self.idp_issuer.clone(),
            keycloak: None,
        }
    }

    pub fn sp_cert_resource<R: ResourceResolver>(&self, resolver: &R) -> Option<R::Resource> {
        resolver.resolve(self.sp_cert.as_deref())
    }

    pub fn sp_private_key_resource<R: ResourceResolver>(
        &self,
        resolver: &R,
    ) -> Option<R::Resource> {
        resolver.resolve(self.private_key.as_deref())
    }

    pub fn idp_cert_resource<R: ResourceResolver>(&self, resolver: &R) -> Option<R::Resource> {
        resolver.resolve(self.idp_cert.as_deref())
    }

    /// Configured credentials whose resource cannot be found, as `(name, path)`.
    pub fn missing_credentials<R: ResourceResolver>(
        &self,
        resolver: &R,
    ) -> Vec<(&'static str, PathBuf)> {
        [
            ("sp_cert", self.sp_cert_resource(resolver)),
            ("private_key", self.sp_private_key_resource(resolver)),
            ("idp_cert", self.idp_cert_resource(resolver)),
        ]
        .into_iter()
        .filter_map(|(name, resource)| {
            resource
                .filter(|resource| !resource.exists())
                .map(|resource| (name, resource.path().to_path_buf()))
        })
        .collect()
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct ResourceSettings {
    /// Directory `classpath:` references resolve against.
    #[serde(default = "default_bundled_root")]
    pub bundled_root: PathBuf,
}

impl Default for ResourceSettings {
    fn default() -> Self {
        Self {
            bundled_root: default_bundled_root(),
        }
    }
}

fn enabled() -> bool {
    true
}

fn default_address() -> String {
    defaults::APP_ADDRESS.to_owned()
}

fn default_scheme() -> String {
    defaults::SCHEME.to_owned()
}

fn default_assets_dir() -> String {
    defaults::ASSETS_DIR.to_owned()
}

fn default_session_cookie_name() -> String {
    defaults::SESSION_COOKIE_NAME.to_owned()
}

fn default_jwt_cookie_name() -> String {
    defaults::JWT_COOKIE_NAME.to_owned()
}

fn default_bundled_root() -> PathBuf {
    PathBuf::from(defaults::BUNDLED_RESOURCES_DIR)
}
