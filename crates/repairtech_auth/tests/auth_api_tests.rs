use axum::body::Body;
use axum::http::{Request, StatusCode};
use repairtech_auth::{routes, AuthClient};
use repairtech_config::{AppConfig, AppUrls, AuthConfig, ServerConfig, StoreConfig};
use repairtech_store::StoreClient;
use serde_json::{json, Value};
use std::sync::Arc;
use tower::ServiceExt;
use wiremock::matchers::{bearer_token, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn test_config(collaborator_url: &str) -> Arc<AppConfig> {
    Arc::new(AppConfig {
        server: ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 8080,
        },
        use_store: true,
        use_auth: true,
        use_mailer: false,
        store: Some(StoreConfig {
            url: collaborator_url.to_string(),
            anon_key: "anon-key".to_string(),
            service_key: None,
            feed_poll_secs: None,
        }),
        auth: Some(AuthConfig {
            url: collaborator_url.to_string(),
            anon_key: "anon-key".to_string(),
            redirect_url: Some("https://repair.example/auth/callback".to_string()),
        }),
        mailer: None,
        app: Some(AppUrls {
            public_url: "https://repair.example".to_string(),
            login_path: "/auth/login".to_string(),
            dashboard_path: "/dashboard".to_string(),
        }),
    })
}

fn auth_router(config: Arc<AppConfig>) -> axum::Router {
    let auth_config = config.auth.clone().unwrap();
    let store_config = config.store.clone().unwrap();
    let client = Arc::new(AuthClient::new(&auth_config));
    let store = Arc::new(StoreClient::new(&store_config));
    routes(config, client, store)
}

async fn body_json(response: axum::response::Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

fn session_body() -> Value {
    json!({
        "access_token": "token-abc",
        "token_type": "bearer",
        "expires_in": 3600,
        "refresh_token": "refresh-abc",
        "user": {
            "id": "user-1",
            "email": "tech@repair.example",
            "confirmed_at": "2025-06-01T00:00:00Z"
        }
    })
}

#[tokio::test]
async fn login_returns_session_for_valid_credentials() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/auth/v1/token"))
        .and(query_param("grant_type", "password"))
        .respond_with(ResponseTemplate::new(200).set_body_json(session_body()))
        .mount(&server)
        .await;

    let app = auth_router(test_config(&server.uri()));
    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/auth/login")
                .header("content-type", "application/json")
                .body(Body::from(
                    json!({ "email": "tech@repair.example", "password": "secret1" }).to_string(),
                ))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["access_token"], "token-abc");
    assert_eq!(body["user"]["id"], "user-1");
}

#[tokio::test]
async fn login_validation_failure_reports_every_field() {
    let server = MockServer::start().await;
    // No collaborator mock on purpose: validation must fail first.
    let app = auth_router(test_config(&server.uri()));
    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/auth/login")
                .header("content-type", "application/json")
                .body(Body::from(
                    json!({ "email": "nope", "password": "short" }).to_string(),
                ))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    let details = body["error"]["details"].as_array().unwrap();
    assert_eq!(details.len(), 2);
}

#[tokio::test]
async fn unconfirmed_email_offers_resend_action() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/auth/v1/token"))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({
            "error_description": "Email not confirmed"
        })))
        .mount(&server)
        .await;

    let app = auth_router(test_config(&server.uri()));
    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/auth/login")
                .header("content-type", "application/json")
                .body(Body::from(
                    json!({ "email": "tech@repair.example", "password": "secret1" }).to_string(),
                ))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    let body = body_json(response).await;
    assert_eq!(body["email_not_confirmed"], true);
}

#[tokio::test]
async fn register_reports_confirmation_requirement() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/auth/v1/signup"))
        .and(query_param(
            "redirect_to",
            "https://repair.example/auth/callback",
        ))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "user-2",
            "email": "nuevo@ejemplo.com",
            "confirmed_at": null
        })))
        .mount(&server)
        .await;

    let app = auth_router(test_config(&server.uri()));
    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/auth/register")
                .header("content-type", "application/json")
                .body(Body::from(
                    json!({
                        "full_name": "Nuevo Usuario",
                        "email": "nuevo@ejemplo.com",
                        "password": "secret1",
                        "confirm_password": "secret1"
                    })
                    .to_string(),
                ))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::CREATED);
    let body = body_json(response).await;
    assert_eq!(body["needs_confirmation"], true);
}

#[tokio::test]
async fn password_mismatch_is_rejected_before_any_collaborator_call() {
    let server = MockServer::start().await;
    let app = auth_router(test_config(&server.uri()));
    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/auth/register")
                .header("content-type", "application/json")
                .body(Body::from(
                    json!({
                        "full_name": "Nuevo Usuario",
                        "email": "nuevo@ejemplo.com",
                        "password": "secret1",
                        "confirm_password": "secret2"
                    })
                    .to_string(),
                ))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    let details = body["error"]["details"].as_array().unwrap();
    assert_eq!(details[0]["field"], "confirm_password");
    // Nothing reached the collaborator.
    assert!(server.received_requests().await.unwrap().is_empty());
}

#[tokio::test]
async fn protected_route_rejects_missing_session_with_login_url() {
    let server = MockServer::start().await;
    let app = auth_router(test_config(&server.uri()));
    let response = app
        .oneshot(
            Request::builder()
                .method("GET")
                .uri("/profile")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    let body = body_json(response).await;
    assert_eq!(
        body["error"]["login_url"],
        "https://repair.example/auth/login"
    );
}

#[tokio::test]
async fn profile_round_trip_through_the_gate() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/auth/v1/user"))
        .and(bearer_token("token-abc"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "user-1",
            "email": "tech@repair.example",
            "confirmed_at": "2025-06-01T00:00:00Z"
        })))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/rest/v1/profiles"))
        .and(query_param("id", "eq.user-1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([{
            "id": "user-1",
            "full_name": "Ana García",
            "email": "tech@repair.example",
            "phone": null,
            "created_at": "2025-06-01T00:00:00Z"
        }])))
        .mount(&server)
        .await;

    let app = auth_router(test_config(&server.uri()));
    let response = app
        .oneshot(
            Request::builder()
                .method("GET")
                .uri("/profile")
                .header("Authorization", "Bearer token-abc")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["full_name"], "Ana García");
}

#[tokio::test]
async fn callback_errors_redirect_back_to_login() {
    let server = MockServer::start().await;
    let app = auth_router(test_config(&server.uri()));
    let response = app
        .oneshot(
            Request::builder()
                .method("GET")
                .uri("/auth/callback?error=access_denied&error_description=Enlace%20expirado")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert!(response.status().is_redirection());
    let location = response
        .headers()
        .get("location")
        .unwrap()
        .to_str()
        .unwrap();
    assert!(location.starts_with("https://repair.example/auth/login?error="));
}

#[tokio::test]
async fn callback_with_code_redirects_to_dashboard() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/auth/v1/token"))
        .and(query_param("grant_type", "authorization_code"))
        .respond_with(ResponseTemplate::new(200).set_body_json(session_body()))
        .mount(&server)
        .await;

    let app = auth_router(test_config(&server.uri()));
    let response = app
        .oneshot(
            Request::builder()
                .method("GET")
                .uri("/auth/callback?code=pkce-code-123")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert!(response.status().is_redirection());
    let location = response
        .headers()
        .get("location")
        .unwrap()
        .to_str()
        .unwrap();
    assert_eq!(location, "https://repair.example/dashboard");
}
