use signoff_core::{
    AuthContext, ClientIntent, LogoutOutcome, ProviderConfig, ProviderDirectory, RequestOrigin,
};

use crate::decision::decide;

/// Decide logout use case - looks up the provider for the token and runs the
/// decision engine
pub struct DecideLogoutUseCase<P>
where
    P: ProviderDirectory,
{
    providers: P,
}

impl<P> DecideLogoutUseCase<P>
where
    P: ProviderDirectory,
{
    pub fn new(providers: P) -> Self {
        Self { providers }
    }

    /// Execute the decide logout use case
    ///
    /// # Arguments
    /// * `auth_context` - Authentication found on the request
    /// * `intent` - Whether the client wants JSON or a redirect
    /// * `origin` - Scheme, host and context path of the request
    ///
    /// # Returns
    /// The single outcome to render for this request
    #[tracing::instrument(
        name = "DecideLogoutUseCase::execute",
        skip(self, auth_context, origin),
        fields(auth = auth_context.kind())
    )]
    pub fn execute(
        &self,
        auth_context: &AuthContext,
        intent: ClientIntent,
        origin: &RequestOrigin,
    ) -> LogoutOutcome {
        let provider = self.provider_for(auth_context);

        decide(auth_context, provider.as_ref(), intent, origin)
    }

    fn provider_for(&self, auth_context: &AuthContext) -> Option<ProviderConfig> {
        match auth_context {
            AuthContext::JwtDelegated(token) => token
                .auth_type()
                .and_then(|auth_type| self.providers.provider_config(auth_type)),
            AuthContext::None | AuthContext::LocalSession => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use signoff_core::{AuthType, Claims, DelegatedToken};

    use super::*;

    // Mock provider directory for testing
    #[derive(Default)]
    struct MockProviders {
        providers: HashMap<AuthType, ProviderConfig>,
    }

    impl ProviderDirectory for MockProviders {
        fn provider_config(&self, auth_type: AuthType) -> Option<ProviderConfig> {
            self.providers.get(&auth_type).cloned()
        }
    }

    fn jwt(auth_type: &str) -> AuthContext {
        AuthContext::JwtDelegated(DelegatedToken::new(
            Some(auth_type.to_owned()),
            None,
            Claims::new(),
        ))
    }

    fn use_case() -> DecideLogoutUseCase<MockProviders> {
        let mut providers = MockProviders::default();
        providers.providers.insert(
            AuthType::OAuth2,
            ProviderConfig::new("oidc-client")
                .with_end_session_endpoint("https://oidc.example.com/logout"),
        );
        providers.providers.insert(
            AuthType::Saml2,
            ProviderConfig::new("saml-client")
                .with_end_session_endpoint("https://saml.example.com/slo"),
        );
        DecideLogoutUseCase::new(providers)
    }

    #[test]
    fn test_picks_provider_by_auth_type() {
        let use_case = use_case();
        let origin = RequestOrigin::new("https", "pdf.example.com");

        let oauth = use_case.execute(&jwt("OAUTH2"), ClientIntent::WantsJson, &origin);
        assert!(oauth.logout_url().starts_with("https://oidc.example.com/logout?client_id=oidc-client"));

        let saml = use_case.execute(&jwt("SAML2"), ClientIntent::WantsJson, &origin);
        assert!(saml.logout_url().starts_with("https://saml.example.com/slo?client_id=saml-client"));
    }

    #[test]
    fn test_missing_provider_falls_back_locally() {
        let use_case = DecideLogoutUseCase::new(MockProviders::default());
        let origin = RequestOrigin::new("https", "pdf.example.com");

        let outcome = use_case.execute(&jwt("OAUTH2"), ClientIntent::WantsRedirect, &origin);
        assert_eq!(
            outcome,
            LogoutOutcome::RedirectTo("/login?logout=true".to_owned())
        );
    }

    #[test]
    fn test_local_session_never_consults_providers() {
        let use_case = use_case();
        let origin = RequestOrigin::new("https", "pdf.example.com");

        let outcome = use_case.execute(&AuthContext::LocalSession, ClientIntent::WantsJson, &origin);
        assert_eq!(
            outcome,
            LogoutOutcome::RedirectTo("/login?logout=true".to_owned())
        );
    }
}
