use axum::{
    extract::State,
    response::{IntoResponse, Redirect, Response},
    Json,
};
use serde_json::json;

use crate::errors::AppError;
use crate::state::AppState;

/// POST /sync_sheet
/// 400 when the spreadsheet id or token is unset, `no_data` JSON when there
/// is nothing to sync, 500 when the Sheets API rejects the sync, otherwise a
/// redirect back to the dashboard.
pub async fn handle_sync_sheet(State(state): State<AppState>) -> Result<Response, AppError> {
    if !state.sheets.is_configured() {
        return Err(AppError::Misconfigured(
            "Google Sheets credentials or sheet id not configured.".to_string(),
        ));
    }

    let records = state.store.load_all();
    if records.is_empty() {
        return Ok(Json(json!({
            "status": "no_data",
            "message": "No applied jobs to sync."
        }))
        .into_response());
    }

    state
        .sheets
        .sync(&records)
        .await
        .map_err(|e| AppError::SheetSync(format!("Google Sheets sync failed: {e:#}")))?;

    Ok(Redirect::to("/dashboard").into_response())
}
