use axum::body::Body;
use axum::http::{Request, StatusCode};
use repairtech_auth::{AuthClient, AuthGateState};
use repairtech_config::{AppConfig, AppUrls, AuthConfig, MailerConfig, ServerConfig, StoreConfig};
use repairtech_mailer::MailerClient;
use repairtech_store::StoreClient;
use serde_json::{json, Value};
use std::sync::Arc;
use std::time::Duration;
use tower::ServiceExt;
use wiremock::matchers::{body_partial_json, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn test_config(collaborator_url: &str, use_mailer: bool) -> Arc<AppConfig> {
    Arc::new(AppConfig {
        server: ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 8080,
        },
        use_store: true,
        use_auth: true,
        use_mailer,
        store: Some(StoreConfig {
            url: collaborator_url.to_string(),
            anon_key: "anon-key".to_string(),
            service_key: None,
            feed_poll_secs: None,
        }),
        auth: Some(AuthConfig {
            url: collaborator_url.to_string(),
            anon_key: "anon-key".to_string(),
            redirect_url: None,
        }),
        mailer: use_mailer.then(|| MailerConfig {
            api_url: Some(collaborator_url.to_string()),
            from: "RepairTech <onboarding@resend.dev>".to_string(),
            reply_to: None,
        }),
        app: Some(AppUrls {
            public_url: "https://repair.example".to_string(),
            login_path: "/auth/login".to_string(),
            dashboard_path: "/dashboard".to_string(),
        }),
    })
}

fn records_router(config: Arc<AppConfig>) -> axum::Router {
    let store = Arc::new(StoreClient::new(config.store.as_ref().unwrap()));
    let mailer = config
        .mailer
        .as_ref()
        .map(|mailer| Arc::new(MailerClient::new(mailer)));
    let auth_client = Arc::new(AuthClient::new(config.auth.as_ref().unwrap()));
    let gate = Arc::new(AuthGateState {
        config: config.clone(),
        client: auth_client,
    });
    repairtech_records::routes(config, store, mailer, gate)
}

async fn mount_session(server: &MockServer) {
    Mock::given(method("GET"))
        .and(path("/auth/v1/user"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "user-1",
            "email": "tech@repair.example",
            "confirmed_at": "2025-06-01T00:00:00Z"
        })))
        .mount(server)
        .await;
}

fn record_row(ticket: &str) -> Value {
    json!({
        "id": "rec-1",
        "owner_id": "user-1",
        "ticket_number": ticket,
        "customer_name": "Juan Pérez",
        "customer_email": "a@b.com",
        "customer_phone": null,
        "brand": "Dell",
        "model": "Inspiron 15",
        "serial_number": null,
        "issue_description": "No enciende después de una caída",
        "status": "pending",
        "technician_notes": null,
        "estimated_cost": null,
        "created_at": "2025-06-15T10:00:00Z",
        "updated_at": "2025-06-15T10:00:00Z"
    })
}

fn create_request() -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/records")
        .header("Authorization", "Bearer token-abc")
        .header("content-type", "application/json")
        .body(Body::from(
            json!({
                "customer_name": "Juan Pérez",
                "customer_email": "a@b.com",
                "brand": "Dell",
                "model": "Inspiron 15",
                "issue_description": "No enciende después de una caída",
                "status": "pending"
            })
            .to_string(),
        ))
        .unwrap()
}

async fn body_json(response: axum::response::Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn create_dispatches_email_with_the_assigned_ticket_number() {
    std::env::set_var("MAILER_API_KEY", "re_test_key");
    let server = MockServer::start().await;
    mount_session(&server).await;
    Mock::given(method("POST"))
        .and(path("/rest/v1/computers"))
        .respond_with(
            ResponseTemplate::new(201).set_body_json(json!([record_row("RT-20250615-0007")])),
        )
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/emails"))
        .and(body_partial_json(json!({
            "to": ["a@b.com"],
            "subject": "Ticket de Reparación #RT-20250615-0007 - RepairTech"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "id": "email-1" })))
        .expect(1)
        .mount(&server)
        .await;

    let app = records_router(test_config(&server.uri(), true));
    let response = app.oneshot(create_request()).await.unwrap();

    assert_eq!(response.status(), StatusCode::CREATED);
    let body = body_json(response).await;
    assert_eq!(body["ticket_number"], "RT-20250615-0007");

    // The dispatch runs on its own task; give it a beat, then the mock's
    // expect(1) verifies the send happened with exactly that ticket.
    tokio::time::sleep(Duration::from_millis(200)).await;
}

#[tokio::test]
async fn creation_still_succeeds_when_the_email_provider_fails() {
    std::env::set_var("MAILER_API_KEY", "re_test_key");
    let server = MockServer::start().await;
    mount_session(&server).await;
    Mock::given(method("POST"))
        .and(path("/rest/v1/computers"))
        .respond_with(
            ResponseTemplate::new(201).set_body_json(json!([record_row("RT-20250615-0007")])),
        )
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/emails"))
        .respond_with(ResponseTemplate::new(500).set_body_json(json!({
            "message": "provider exploded"
        })))
        .mount(&server)
        .await;

    let app = records_router(test_config(&server.uri(), true));
    let response = app.oneshot(create_request()).await.unwrap();

    // The provider failure is logged, never surfaced to the caller.
    assert_eq!(response.status(), StatusCode::CREATED);
    let body = body_json(response).await;
    assert_eq!(body["ticket_number"], "RT-20250615-0007");
    tokio::time::sleep(Duration::from_millis(200)).await;
}

#[tokio::test]
async fn create_validation_failure_reports_every_failing_field() {
    let server = MockServer::start().await;
    mount_session(&server).await;

    let app = records_router(test_config(&server.uri(), false));
    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/records")
                .header("Authorization", "Bearer token-abc")
                .header("content-type", "application/json")
                .body(Body::from(
                    json!({
                        "customer_name": "J",
                        "customer_email": "nope",
                        "brand": "",
                        "model": "",
                        "issue_description": "short"
                    })
                    .to_string(),
                ))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert_eq!(body["error"]["details"].as_array().unwrap().len(), 5);
}

#[tokio::test]
async fn records_require_a_session() {
    let server = MockServer::start().await;
    let app = records_router(test_config(&server.uri(), false));
    let response = app
        .oneshot(
            Request::builder()
                .method("GET")
                .uri("/records")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn track_normalizes_lowercase_input_and_matches() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/rest/v1/computers"))
        .and(query_param("ticket_number", "eq.RT-20250615-0007"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!([record_row("RT-20250615-0007")])),
        )
        .mount(&server)
        .await;

    let app = records_router(test_config(&server.uri(), false));
    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/track")
                .header("content-type", "application/json")
                .body(Body::from(
                    json!({ "ticket_number": "rt-20250615-0007" }).to_string(),
                ))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["record"]["ticket_number"], "RT-20250615-0007");
    assert_eq!(body["status_display"]["label"], "Pendiente");
}

#[tokio::test]
async fn track_rejects_malformed_tickets_without_touching_storage() {
    let server = MockServer::start().await;
    let app = records_router(test_config(&server.uri(), false));
    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/track")
                .header("content-type", "application/json")
                .body(Body::from(json!({ "ticket_number": "RT-123" }).to_string()))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body = body_json(response).await;
    assert_eq!(body["error"]["message"], "Ticket no encontrado");
    assert!(server.received_requests().await.unwrap().is_empty());
}

#[tokio::test]
async fn track_miss_reads_the_same_as_a_malformed_ticket() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/rest/v1/computers"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(&server)
        .await;

    let app = records_router(test_config(&server.uri(), false));
    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/track")
                .header("content-type", "application/json")
                .body(Body::from(
                    json!({ "ticket_number": "RT-20250615-9999" }).to_string(),
                ))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body = body_json(response).await;
    assert_eq!(body["error"]["message"], "Ticket no encontrado");
}

#[tokio::test]
async fn delete_miss_is_a_404() {
    let server = MockServer::start().await;
    mount_session(&server).await;
    Mock::given(method("DELETE"))
        .and(path("/rest/v1/computers"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(&server)
        .await;

    let app = records_router(test_config(&server.uri(), false));
    let response = app
        .oneshot(
            Request::builder()
                .method("DELETE")
                .uri("/records/rec-404")
                .header("Authorization", "Bearer token-abc")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn notification_watch_answers_with_an_event_stream() {
    let server = MockServer::start().await;
    mount_session(&server).await;
    Mock::given(method("GET"))
        .and(path("/rest/v1/notifications"))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("content-range", "*/1")
                .set_body_json(json!([])),
        )
        .mount(&server)
        .await;

    let app = records_router(test_config(&server.uri(), false));
    let response = app
        .oneshot(
            Request::builder()
                .method("GET")
                .uri("/notifications/watch")
                .header("Authorization", "Bearer token-abc")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    // Only the headers: the body is an endless stream by design.
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response
            .headers()
            .get("content-type")
            .unwrap()
            .to_str()
            .unwrap(),
        "text/event-stream"
    );
}

#[tokio::test]
async fn dashboard_summary_aggregates_counts() {
    let server = MockServer::start().await;
    mount_session(&server).await;
    // Status-filtered mocks first: the unfiltered mock would match any
    // counting request, and earlier-mounted mocks win.
    for (status, total) in [
        (Some("pending"), 4u64),
        (Some("in_progress"), 3),
        (Some("needs_repair"), 1),
        (Some("completed"), 2),
        (None, 10),
    ] {
        let mut mock = Mock::given(method("GET")).and(path("/rest/v1/computers"));
        mock = mock.and(query_param("owner_id", "eq.user-1"));
        if let Some(status) = status {
            mock = mock.and(query_param("status", format!("eq.{status}")));
        }
        mock.respond_with(
            ResponseTemplate::new(200)
                .insert_header("content-range", format!("*/{total}").as_str())
                .set_body_json(json!([])),
        )
        .mount(&server)
        .await;
    }

    let app = records_router(test_config(&server.uri(), false));
    let response = app
        .oneshot(
            Request::builder()
                .method("GET")
                .uri("/dashboard/summary")
                .header("Authorization", "Bearer token-abc")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["total"], 10);
    assert_eq!(body["pending"], 4);
    assert_eq!(body["completed"], 2);
}
