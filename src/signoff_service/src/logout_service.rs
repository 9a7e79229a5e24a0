use axum::{
    Router,
    http::{HeaderValue, Method, request},
    routing::get,
};
use signoff_adapters::{
    BundledResourceResolver, JwtAuthConfig, JwtContextResolver, Settings, SettingsStore,
    config::{AllowedOrigins, SecuritySettings},
    http::OriginPolicy,
};
use signoff_axum::routes::{LogoutState, logout};
use signoff_core::{AuthContextResolver, ProviderDirectory};
use tokio::net::TcpListener;
use tower_http::{
    cors::{AllowOrigin, CorsLayer},
    services::{ServeDir, ServeFile},
    trace::TraceLayer,
};

use crate::tracing::{make_span_with_request_id, on_request, on_response};

/// Logout service that mounts the logout endpoint under the context path
pub struct LogoutService {
    router: Router,
}

impl LogoutService {
    /// Create a new LogoutService
    ///
    /// # Arguments
    /// * `resolver` - Finds the authentication carried by a request (must be Clone)
    /// * `providers` - Identity provider settings (must be Clone)
    /// * `origin` - Builds local logout URLs from a request
    /// * `context_path` - Mount point of the application, may be empty
    /// * `assets_dir` - Static files served for every other path
    pub fn new<A, P>(
        resolver: A,
        providers: P,
        origin: OriginPolicy,
        context_path: &str,
        assets_dir: &str,
    ) -> Self
    where
        A: AuthContextResolver,
        P: ProviderDirectory + Clone + 'static,
    {
        let assets_service = ServeDir::new(assets_dir)
            .fallback(ServeFile::new(format!("{assets_dir}/index.html")));

        let router = Router::new()
            .route(
                &logout_route(context_path),
                get(logout::<A, P>).post(logout::<A, P>),
            )
            .with_state(LogoutState::new(resolver, providers, origin))
            .fallback_service(assets_service);

        Self { router }
    }

    /// Create the service from loaded settings, reading providers from `store`
    pub fn from_settings(settings: &Settings, store: SettingsStore) -> Self {
        report_missing_saml2_credentials(
            &settings.security,
            &BundledResourceResolver::new(&settings.resources.bundled_root),
        );

        Self::new(
            JwtContextResolver::new(JwtAuthConfig::from(&settings.auth)),
            store,
            OriginPolicy::from(&settings.server),
            &settings.server.context_path,
            &settings.server.assets_dir,
        )
    }

    fn with_trace_layer(mut self) -> Self {
        self.router = self.router.layer(
            TraceLayer::new_for_http()
                .make_span_with(make_span_with_request_id)
                .on_request(on_request)
                .on_response(on_response),
        );
        self
    }

    /// Convert the LogoutService into a nested router that can be mounted on another router
    ///
    /// # Arguments
    /// * `allowed_origins` - Optional list of allowed CORS origins
    ///
    /// # Returns
    /// An Axum Router that can be nested into another application
    pub fn as_nested_router(mut self, allowed_origins: Option<AllowedOrigins>) -> Router {
        if let Some(allowed_origins) = allowed_origins.filter(|origins| !origins.is_empty()) {
            let cors = CorsLayer::new()
                .allow_methods([Method::GET, Method::POST])
                .allow_credentials(true)
                .allow_origin(AllowOrigin::predicate(
                    move |origin: &HeaderValue, _request_parts: &request::Parts| {
                        allowed_origins.contains(origin)
                    },
                ));

            self.router = self.router.layer(cors);
        }
        self.with_trace_layer().router
    }

    /// Run the logout service as a standalone server
    ///
    /// # Arguments
    /// * `listener` - TCP listener to bind the server to
    /// * `allowed_origins` - Optional list of allowed CORS origins
    ///
    /// # Returns
    /// Result indicating success or error
    pub async fn run_standalone(
        self,
        listener: TcpListener,
        allowed_origins: Option<AllowedOrigins>,
    ) -> Result<(), std::io::Error> {
        let router = self.as_nested_router(allowed_origins);

        tracing::info!("Logout service listening on {}", listener.local_addr()?);

        axum_server::Server::<std::net::SocketAddr>::from_listener(listener)
            .serve(router.into_make_service())
            .await
    }
}

/// `{context_path}/logout`, with the context path normalised.
pub fn logout_route(context_path: &str) -> String {
    let context_path = context_path.trim().trim_matches('/');
    if context_path.is_empty() {
        "/logout".to_owned()
    } else {
        format!("/{context_path}/logout")
    }
}

/// Warn about configured SAML2 credentials that cannot be found.
///
/// Startup continues; the files are only needed once SAML2 messages are signed.
pub fn report_missing_saml2_credentials(
    security: &SecuritySettings,
    resolver: &BundledResourceResolver,
) {
    let Some(saml2) = security.saml2.as_ref().filter(|saml2| saml2.enabled) else {
        return;
    };

    for (credential, path) in saml2.missing_credentials(resolver) {
        tracing::warn!(
            credential,
            path = %path.display(),
            "SAML2 credential not found"
        );
    }
}
