use reqwest::{
    StatusCode,
    header::{CONTENT_TYPE, LOCATION},
};
use serde_json::{Value, json};
use signoff_adapters::config::KeycloakSettings;

use crate::helpers::{
    END_SESSION_ENDPOINT, ISSUER, SAML_LOGOUT_URL, TestApp, jwt, oauth2, saml2, security,
};

fn location(response: &reqwest::Response) -> &str {
    response
        .headers()
        .get(LOCATION)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
}

async fn logout_url(response: reqwest::Response) -> String {
    let body: Value = response.json().await.unwrap();
    body["logoutUrl"].as_str().unwrap().to_owned()
}

#[tokio::test]
async fn logout_without_auth_redirects_to_login() {
    let app = TestApp::new(security(Some(oauth2(Some(END_SESSION_ENDPOINT))), None)).await;

    let response = app.get_logout("/logout").send().await.unwrap();

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), "/login?logout=true");
}

#[tokio::test]
async fn logout_without_auth_redirects_even_for_api_clients() {
    let app = TestApp::new(security(Some(oauth2(Some(END_SESSION_ENDPOINT))), None)).await;

    let response = app
        .post_logout("/logout")
        .header("Accept", "application/json")
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), "/login?logout=true");
}

#[tokio::test]
async fn session_logout_redirects_to_login() {
    let app = TestApp::new(security(None, None)).await;

    let response = app
        .post_logout("/logout")
        .header("Cookie", "SESSION=abc123")
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), "/login?logout=true");
}

#[tokio::test]
async fn oauth2_api_logout_returns_provider_url_as_json() {
    let app = TestApp::new(security(Some(oauth2(Some(END_SESSION_ENDPOINT))), None)).await;
    let token = jwt(json!({ "authType": "OAUTH2", "iss": ISSUER }));

    let response = app
        .post_logout("/logout")
        .bearer_auth(token)
        .header("Accept", "application/json")
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok()),
        Some("application/json;charset=UTF-8")
    );
    assert_eq!(
        logout_url(response).await,
        format!(
            "{END_SESSION_ENDPOINT}?client_id=stirling-pdf&post_logout_redirect_uri={}",
            app.encoded_local_logout_url("")
        )
    );
}

#[tokio::test]
async fn oauth2_browser_logout_redirects_to_provider() {
    let app = TestApp::new(security(Some(oauth2(Some(END_SESSION_ENDPOINT))), None)).await;
    let token = jwt(json!({ "authType": "OAUTH2" }));

    let response = app
        .get_logout("/logout")
        .header("Cookie", format!("jwt={token}"))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert!(location(&response).starts_with(&format!(
        "{END_SESSION_ENDPOINT}?client_id=stirling-pdf&post_logout_redirect_uri="
    )));
}

#[tokio::test]
async fn xhr_requests_receive_json() {
    let app = TestApp::new(security(Some(oauth2(Some(END_SESSION_ENDPOINT))), None)).await;
    let token = jwt(json!({ "authType": "OAUTH2" }));

    let response = app
        .post_logout("/logout")
        .bearer_auth(token)
        .header("X-Requested-With", "XMLHttpRequest")
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert!(logout_url(response).await.starts_with(END_SESSION_ENDPOINT));
}

#[tokio::test]
async fn keycloak_endpoint_is_synthesised_from_token_issuer() {
    let mut oauth2 = oauth2(None);
    oauth2.keycloak = Some(KeycloakSettings {
        realm: Some("test".to_owned()),
        ..KeycloakSettings::default()
    });
    let app = TestApp::new(security(Some(oauth2), None)).await;
    let token = jwt(json!({ "authType": "OAUTH2", "iss": ISSUER }));

    let response = app
        .post_logout("/logout")
        .bearer_auth(token)
        .header("Accept", "application/json")
        .send()
        .await
        .unwrap();

    assert!(
        logout_url(response)
            .await
            .starts_with(&format!("{END_SESSION_ENDPOINT}?client_id=stirling-pdf"))
    );
}

#[tokio::test]
async fn missing_end_session_endpoint_falls_back_to_local_logout() {
    let app = TestApp::new(security(Some(oauth2(None)), None)).await;
    let token = jwt(json!({ "authType": "OAUTH2", "iss": ISSUER }));

    let response = app
        .post_logout("/logout")
        .bearer_auth(token)
        .header("Accept", "application/json")
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(logout_url(response).await, "/login?logout=true");
}

#[tokio::test]
async fn saml2_logout_uses_idp_single_logout_url() {
    let app = TestApp::new(security(None, Some(saml2(Some(SAML_LOGOUT_URL))))).await;
    let token = jwt(json!({ "authType": "SAML2" }));

    let response = app
        .post_logout("/logout")
        .bearer_auth(token)
        .header("Accept", "application/json")
        .send()
        .await
        .unwrap();

    assert_eq!(
        logout_url(response).await,
        format!(
            "{SAML_LOGOUT_URL}?client_id=stirling&post_logout_redirect_uri={}",
            app.encoded_local_logout_url("")
        )
    );
}

#[tokio::test]
async fn unconfigured_saml2_falls_back_to_local_logout() {
    let app = TestApp::new(security(Some(oauth2(Some(END_SESSION_ENDPOINT))), None)).await;
    let token = jwt(json!({ "authType": "SAML2" }));

    let response = app
        .post_logout("/logout")
        .bearer_auth(token)
        .header("Accept", "application/json")
        .send()
        .await
        .unwrap();

    assert_eq!(logout_url(response).await, "/login?logout=true");
}

#[tokio::test]
async fn disabled_provider_falls_back_to_local_logout() {
    let mut oauth2 = oauth2(Some(END_SESSION_ENDPOINT));
    oauth2.enabled = false;
    let app = TestApp::new(security(Some(oauth2), None)).await;
    let token = jwt(json!({ "authType": "OAUTH2" }));

    let response = app.get_logout("/logout").bearer_auth(token).send().await.unwrap();

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), "/login?logout=true");
}

#[tokio::test]
async fn web_token_logs_out_locally() {
    let app = TestApp::new(security(Some(oauth2(Some(END_SESSION_ENDPOINT))), None)).await;
    let token = jwt(json!({ "authType": "WEB" }));

    let response = app
        .post_logout("/logout")
        .bearer_auth(token)
        .header("Accept", "application/json")
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), "/login?logout=true");
}

#[tokio::test]
async fn context_path_prefixes_route_and_redirect() {
    let app = TestApp::with_context_path(security(None, None), "/pdf").await;

    let response = app.get_logout("/pdf/logout").send().await.unwrap();

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), "/pdf/login?logout=true");
}

#[tokio::test]
async fn oauth_error_params_are_sanitised_into_redirect() {
    let app = TestApp::new(security(None, None)).await;

    let response = app
        .get_logout("/logout?errorOAuth=invalid_grant%3Cscript%3E")
        .send()
        .await
        .unwrap();

    assert_eq!(location(&response), "/login?errorOAuth=invalidgrantscript");
}

#[tokio::test]
async fn reloaded_provider_settings_apply_to_next_request() {
    let app = TestApp::new(security(Some(oauth2(None)), None)).await;
    let token = jwt(json!({ "authType": "OAUTH2" }));

    let before = app
        .post_logout("/logout")
        .bearer_auth(&token)
        .header("Accept", "application/json")
        .send()
        .await
        .unwrap();
    assert_eq!(logout_url(before).await, "/login?logout=true");

    app.store
        .replace(security(Some(oauth2(Some(END_SESSION_ENDPOINT))), None));

    let after = app
        .post_logout("/logout")
        .bearer_auth(&token)
        .header("Accept", "application/json")
        .send()
        .await
        .unwrap();
    assert!(logout_url(after).await.starts_with(END_SESSION_ENDPOINT));
}
