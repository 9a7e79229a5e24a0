use chrono::Utc;
use jsonwebtoken::{EncodingKey, Header, encode};
use reqwest::{Client, RequestBuilder, redirect::Policy};
use secrecy::Secret;
use serde_json::Value;
use signoff_adapters::{
    JwtAuthConfig, JwtContextResolver, SettingsStore,
    config::{OAuth2Settings, Saml2Settings, SecuritySettings, constants::test},
    http::OriginPolicy,
};
use signoff_service::LogoutService;
use tokio::net::TcpListener;

pub const ISSUER: &str = "https://keycloak.example.com/realms/test";
pub const END_SESSION_ENDPOINT: &str =
    "https://keycloak.example.com/realms/test/protocol/openid-connect/logout";
pub const SAML_LOGOUT_URL: &str = "https://idp.example.com/saml2/slo";

pub struct TestApp {
    pub address: String,
    pub http_client: Client,
    pub store: SettingsStore,
}

impl TestApp {
    pub async fn new(security: SecuritySettings) -> Self {
        Self::with_context_path(security, "").await
    }

    pub async fn with_context_path(security: SecuritySettings, context_path: &str) -> Self {
        let store = SettingsStore::new(security);
        let resolver = JwtContextResolver::new(JwtAuthConfig {
            jwt_cookie_name: "jwt".to_owned(),
            jwt_secret: Secret::from(test::JWT_SECRET.to_owned()),
            jwt_audience: None,
            session_cookie_name: "SESSION".to_owned(),
        });

        let service = LogoutService::new(
            resolver,
            store.clone(),
            OriginPolicy::new("http", context_path),
            context_path,
            "assets",
        );

        let listener = TcpListener::bind(test::APP_ADDRESS)
            .await
            .expect("Failed to bind test listener");
        let address = format!("http://{}", listener.local_addr().unwrap());

        tokio::spawn(service.run_standalone(listener, None));

        let http_client = Client::builder()
            .redirect(Policy::none())
            .build()
            .unwrap();

        Self {
            address,
            http_client,
            store,
        }
    }

    pub fn get_logout(&self, path: &str) -> RequestBuilder {
        self.http_client.get(format!("{}{}", &self.address, path))
    }

    pub fn post_logout(&self, path: &str) -> RequestBuilder {
        self.http_client.post(format!("{}{}", &self.address, path))
    }

    /// `post_logout_redirect_uri` value the service sends back for this app.
    pub fn encoded_local_logout_url(&self, context_path: &str) -> String {
        let url = format!("{}{}/login?logout=true", &self.address, context_path);
        url.replace(':', "%3A")
            .replace('/', "%2F")
            .replace('?', "%3F")
            .replace('=', "%3D")
    }
}

pub fn oauth2(end_session_endpoint: Option<&str>) -> OAuth2Settings {
    OAuth2Settings {
        enabled: true,
        client_id: "stirling-pdf".to_owned(),
        client_secret: None,
        issuer: None,
        end_session_endpoint: end_session_endpoint.map(str::to_owned),
        keycloak: None,
    }
}

pub fn saml2(single_logout_url: Option<&str>) -> Saml2Settings {
    Saml2Settings {
        enabled: true,
        registration_id: "stirling".to_owned(),
        idp_issuer: None,
        idp_single_logout_url: single_logout_url.map(str::to_owned),
        sp_cert: None,
        private_key: None,
        idp_cert: None,
    }
}

pub fn security(oauth2: Option<OAuth2Settings>, saml2: Option<Saml2Settings>) -> SecuritySettings {
    SecuritySettings { oauth2, saml2 }
}

/// Sign `claims` with the test secret, valid for ten minutes.
pub fn jwt(mut claims: Value) -> String {
    claims["sub"] = Value::from("user@example.com");
    claims["exp"] = Value::from(Utc::now().timestamp() + 600);

    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(test::JWT_SECRET.as_bytes()),
    )
    .unwrap()
}
