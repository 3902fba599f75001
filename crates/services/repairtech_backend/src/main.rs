// File: services/repairtech_backend/src/main.rs
use axum::{routing::get, Router};
use repairtech_config::load_config;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing::info;

mod app_state;
mod service_factory;

use app_state::AppState;

#[cfg(feature = "records")]
use repairtech_auth::AuthGateState;

#[tokio::main]
async fn main() {
    let config = Arc::new(load_config().expect("Failed to load config"));
    repairtech_common::logging::init();

    let state = AppState::new(config.clone());
    let factory = state.service_factory.clone();

    let api_router = Router::new()
        .route("/", get(|| async { "Welcome to RepairTech API!" }))
        .route("/health", get(|| async { "ok" }));

    // --- Auth routes (login, register, callback, profile) ---
    #[cfg(feature = "auth")]
    let auth_router = match (factory.auth_client(), factory.store_client()) {
        (Some(auth_client), Some(store_client)) => {
            repairtech_auth::routes(config.clone(), auth_client, store_client)
        }
        _ => {
            info!("ℹ️ Auth routes not mounted (client or store unavailable).");
            Router::new()
        }
    };

    // --- Mailer routes (ticket email endpoint) ---
    #[cfg(feature = "mailer")]
    let mailer_router = repairtech_mailer::routes(config.clone(), factory.mailer_client());

    // --- Record routes (CRUD, dashboard, tracking, notifications) ---
    #[cfg(feature = "records")]
    let records_router = match (factory.store_client(), factory.auth_client()) {
        (Some(store_client), Some(auth_client)) => {
            let gate = Arc::new(AuthGateState {
                config: config.clone(),
                client: auth_client,
            });
            repairtech_records::routes(
                config.clone(),
                store_client,
                factory.mailer_client(),
                gate,
            )
        }
        _ => {
            info!("ℹ️ Record routes not mounted (store or auth unavailable).");
            Router::new()
        }
    };

    let api_router = Router::new().nest("/api", {
        #[allow(unused_mut)] // for the features it needs to be mutable
        let mut router = api_router;
        #[cfg(feature = "auth")]
        {
            router = router.merge(auth_router);
        }
        #[cfg(feature = "mailer")]
        {
            router = router.merge(mailer_router);
        }
        #[cfg(feature = "records")]
        {
            router = router.merge(records_router);
        }
        router
    });

    let mut app = api_router;

    // Conditionally add Swagger UI and JSON endpoint if openapi feature enabled
    #[cfg(feature = "openapi")]
    {
        #[cfg(feature = "auth")]
        use repairtech_auth::doc::AuthApiDoc;
        #[cfg(feature = "mailer")]
        use repairtech_mailer::doc::MailerApiDoc;
        #[cfg(feature = "records")]
        use repairtech_records::doc::RecordsApiDoc;
        use utoipa::OpenApi;
        use utoipa_swagger_ui::SwaggerUi;

        #[derive(OpenApi)]
        #[openapi(
            info(
                title = "RepairTech API",
                version = "0.1.0",
                description = "RepairTech repair-shop service API docs",
                license(name = "MIT", url = "https://opensource.org/licenses/MIT")
            ),
            components(),
            tags( (name = "RepairTech", description = "Core service endpoints")),
            servers( (url = "/api", description = "Main API Prefix")),
        )]
        struct ApiDoc;

        #[allow(unused_mut)] // for the features it needs to be mutable
        let mut openapi_doc = ApiDoc::openapi();
        #[cfg(feature = "auth")]
        openapi_doc.merge(AuthApiDoc::openapi());
        #[cfg(feature = "mailer")]
        openapi_doc.merge(MailerApiDoc::openapi());
        #[cfg(feature = "records")]
        openapi_doc.merge(RecordsApiDoc::openapi());
        info!("📖 Adding Swagger UI at /api/docs");

        let swagger_ui =
            SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", openapi_doc.clone());
        app = app.merge(swagger_ui);
    }

    let app = app.layer(TraceLayer::new_for_http());

    // Bind and serve
    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = TcpListener::bind(&addr).await.expect("Failed to bind");
    info!("Starting server at http://{}", addr);
    info!("API endpoints available at http://{}/api", addr);

    axum::serve(listener, app.into_make_service())
        .await
        .expect("Server error");
}
