use axum::{extract::State, Form, Json};
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use crate::models::SearchResult;
use crate::state::AppState;

fn default_page() -> u32 {
    1
}

#[derive(Deserialize)]
pub struct SearchForm {
    pub keywords: String,
    pub location: String,
    #[serde(default = "default_page")]
    pub page: u32,
}

/// Job listing view model. `search_id` is what the auto-apply form posts back.
#[derive(Serialize)]
pub struct JobResultsResponse {
    pub search_id: Uuid,
    pub keywords: String,
    pub location: String,
    pub jobs: Vec<SearchResult>,
}

/// POST /job_results
/// Runs a search and caches the result list under a fresh session id so a
/// later auto-apply can recover exactly what the user saw.
pub async fn handle_job_results(
    State(state): State<AppState>,
    Form(form): Form<SearchForm>,
) -> Json<JobResultsResponse> {
    let jobs = state
        .job_source
        .search(&form.keywords, &form.location, form.page)
        .await;
    let search_id = state.sessions.create(jobs.clone());
    info!(
        "Search '{}' in '{}' page {} -> {} jobs (session {search_id})",
        form.keywords,
        form.location,
        form.page,
        jobs.len()
    );
    Json(JobResultsResponse {
        search_id,
        keywords: form.keywords,
        location: form.location,
        jobs,
    })
}
