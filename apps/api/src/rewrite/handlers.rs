use axum::{extract::State, Form, Json};
use serde::{Deserialize, Serialize};

use crate::state::AppState;

fn default_tone() -> String {
    "assertive".to_string()
}

#[derive(Deserialize)]
pub struct RewriteForm {
    pub bullet: String,
    #[serde(default = "default_tone")]
    pub tone: String,
}

#[derive(Serialize)]
pub struct RewriteResponse {
    pub rewritten: String,
}

/// POST /rewrite
/// Placeholder and upstream-error strings ride the success path, so this
/// handler is infallible.
pub async fn handle_rewrite(
    State(state): State<AppState>,
    Form(form): Form<RewriteForm>,
) -> Json<RewriteResponse> {
    let rewritten = state.rewriter.rewrite(&form.bullet, &form.tone).await;
    Json(RewriteResponse { rewritten })
}
