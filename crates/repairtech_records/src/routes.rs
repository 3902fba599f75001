// --- File: crates/repairtech_records/src/routes.rs ---

use crate::handlers::{
    create_record_handler, dashboard_summary_handler, delete_record_handler, get_record_handler,
    list_records_handler, track_handler, update_record_handler, RecordsState,
};
use crate::notifications::{
    list_notifications_handler, mark_all_read_handler, mark_read_handler, unread_count_handler,
    watch_notifications_handler,
};
use axum::{
    middleware,
    routing::{get, post},
    Router,
};
use repairtech_auth::{session_gate, AuthGateState};
use repairtech_config::AppConfig;
use repairtech_mailer::MailerClient;
use repairtech_store::{NotificationRepository, RepairRecordRepository, StoreClient};
use std::sync::Arc;

/// Creates a router containing all routes for the records feature.
///
/// Everything except the public tracking endpoint sits behind the session
/// gate: records are visible and mutable only through their owner's
/// session.
pub fn routes(
    config: Arc<AppConfig>,
    store: Arc<StoreClient>,
    mailer: Option<Arc<MailerClient>>,
    gate: Arc<AuthGateState>,
) -> Router {
    let records_state = Arc::new(RecordsState {
        config,
        records: RepairRecordRepository::new(store.clone()),
        notifications: NotificationRepository::new(store),
        mailer,
    });

    let protected = Router::new()
        .route(
            "/records",
            get(list_records_handler).post(create_record_handler),
        )
        .route(
            "/records/{id}",
            get(get_record_handler)
                .put(update_record_handler)
                .delete(delete_record_handler),
        )
        .route("/dashboard/summary", get(dashboard_summary_handler))
        .route("/notifications", get(list_notifications_handler))
        .route("/notifications/unread-count", get(unread_count_handler))
        .route("/notifications/watch", get(watch_notifications_handler))
        .route("/notifications/{id}/read", post(mark_read_handler))
        .route("/notifications/read-all", post(mark_all_read_handler))
        .with_state(records_state.clone())
        .layer(middleware::from_fn_with_state(gate, session_gate));

    let public = Router::new()
        .route("/track", post(track_handler))
        .with_state(records_state);

    protected.merge(public)
}
