use axum::{
    extract::{Multipart, State},
    response::Redirect,
    Form, Json,
};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};
use uuid::Uuid;

use crate::applied::aggregate::{by_location, top_roles, FieldCount};
use crate::applied::orchestrator::{apply_all, apply_one};
use crate::errors::AppError;
use crate::models::AppliedRecord;
use crate::state::AppState;

#[derive(Deserialize)]
pub struct ManualApplyForm {
    pub title: String,
    pub company: String,
    pub location: String,
}

/// POST /manual_apply
/// Records one apply event and sends the client to the dashboard.
pub async fn handle_manual_apply(
    State(state): State<AppState>,
    Form(form): Form<ManualApplyForm>,
) -> Redirect {
    let record = apply_one(&state.store, &form.title, &form.company, &form.location, "");
    info!("Marked applied: {} at {}", record.job_title, record.company);
    Redirect::to("/dashboard")
}

/// POST /auto_apply
/// Bulk-applies to every job in the cached search session. Multipart body:
/// `search_id` (required), `keyword` (optional), `resume` (optional file,
/// saved for reference only). Unknown session id -> 400.
pub async fn handle_auto_apply(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Redirect, AppError> {
    let mut search_id: Option<Uuid> = None;
    let mut keyword = String::new();
    let mut resume: Option<(String, Vec<u8>)> = None;

    while let Some(field) = multipart.next_field().await? {
        let name = field.name().unwrap_or_default().to_string();
        match name.as_str() {
            "search_id" => {
                let raw = field.text().await?;
                search_id = Some(
                    raw.parse()
                        .map_err(|_| AppError::SessionExpiredOrInvalid)?,
                );
            }
            "keyword" => keyword = field.text().await?,
            "resume" => {
                let filename = field.file_name().unwrap_or("resume").to_string();
                let bytes = field.bytes().await?;
                if !bytes.is_empty() {
                    resume = Some((filename, bytes.to_vec()));
                }
            }
            other => {
                warn!("Ignoring unexpected auto_apply field '{other}'");
            }
        }
    }

    let search_id =
        search_id.ok_or_else(|| AppError::Validation("search_id is required".to_string()))?;

    let records = apply_all(&state.store, &state.sessions, search_id, &keyword)?;
    info!("Auto-applied to {} jobs from session {search_id}", records.len());

    // Resume upload is reference-only; failure must not undo the applies.
    if let Some((filename, bytes)) = resume {
        if let Err(e) = save_resume(&state, &filename, &bytes) {
            warn!("Failed to save uploaded resume '{filename}': {e:#}");
        }
    }

    Ok(Redirect::to("/dashboard"))
}

fn save_resume(state: &AppState, filename: &str, bytes: &[u8]) -> anyhow::Result<()> {
    std::fs::create_dir_all(&state.config.uploads_dir)?;
    let tag = Uuid::new_v4().simple().to_string();
    let path = state
        .config
        .uploads_dir
        .join(format!("resume_{}_{filename}", &tag[..8]));
    std::fs::write(&path, bytes)?;
    info!("Saved resume upload to {}", path.display());
    Ok(())
}

/// Dashboard view model: the full applied table plus the two chart datasets.
#[derive(Serialize)]
pub struct DashboardResponse {
    pub columns: [&'static str; 5],
    pub applied: Vec<AppliedRecord>,
    pub top_roles: Vec<FieldCount>,
    pub by_location: Vec<FieldCount>,
    pub google_configured: bool,
}

/// GET /dashboard
/// Store trouble degrades to an empty table; this endpoint never errors.
pub async fn handle_dashboard(State(state): State<AppState>) -> Json<DashboardResponse> {
    let applied = state.store.load_all();
    let top_roles = top_roles(&applied);
    let by_location = by_location(&applied);
    Json(DashboardResponse {
        columns: AppliedRecord::COLUMNS,
        applied,
        top_roles,
        by_location,
        google_configured: state.config.sheets_configured(),
    })
}
