use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};
use taskdesk_core::TaskdeskConfig;
use taskdesk_store::TaskStore;
use tower_http::services::ServeDir;

/// Central shared state — passed as Arc<AppState> to all Axum handlers.
pub struct AppState {
    pub config: TaskdeskConfig,
    pub tasks: TaskStore,
}

impl AppState {
    pub fn new(config: TaskdeskConfig, tasks: TaskStore) -> Self {
        Self { config, tasks }
    }
}

/// Assemble the full Axum router. Unmatched paths fall through to the
/// static web UI.
pub fn build_router(state: Arc<AppState>) -> Router {
    let web_dir = state.config.web.dir.clone();
    Router::new()
        .route("/health", get(crate::http::health::health_handler))
        .route("/api/nextdate", get(crate::http::nextdate::nextdate_handler))
        .route(
            "/api/task",
            get(crate::http::tasks::get_task)
                .post(crate::http::tasks::create_task)
                .put(crate::http::tasks::update_task)
                .delete(crate::http::tasks::delete_task),
        )
        .route("/api/tasks", get(crate::http::tasks::list_tasks))
        .route("/api/task/done", post(crate::http::tasks::done_task))
        .fallback_service(ServeDir::new(web_dir))
        .with_state(state)
        .layer(tower_http::trace::TraceLayer::new_for_http())
}
