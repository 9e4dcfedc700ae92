pub mod health;

use axum::{
    routing::{get, post},
    Json, Router,
};
use serde_json::{json, Value};

use crate::applied::handlers as applied_handlers;
use crate::rewrite::handle_rewrite;
use crate::search::handlers as search_handlers;
use crate::sheets::handle_sync_sheet;
use crate::state::AppState;

/// GET /
/// JSON index of the service's operations; view rendering lives in a frontend.
async fn home() -> Json<Value> {
    Json(json!({
        "service": env!("CARGO_PKG_NAME"),
        "endpoints": {
            "search": "POST /job_results (keywords, location, page)",
            "manual_apply": "POST /manual_apply (title, company, location)",
            "auto_apply": "POST /auto_apply (search_id, keyword?, resume?)",
            "dashboard": "GET /dashboard",
            "sync_sheet": "POST /sync_sheet",
            "rewrite": "POST /rewrite (bullet, tone)",
            "health": "GET /health"
        }
    }))
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(home))
        .route("/health", get(health::health_handler))
        .route("/job_results", post(search_handlers::handle_job_results))
        .route("/manual_apply", post(applied_handlers::handle_manual_apply))
        .route("/auto_apply", post(applied_handlers::handle_auto_apply))
        .route("/dashboard", get(applied_handlers::handle_dashboard))
        .route("/sync_sheet", post(handle_sync_sheet))
        .route("/rewrite", post(handle_rewrite))
        .with_state(state)
}
