use chrono::Local;
use uuid::Uuid;

use crate::applied::store::AppliedStore;
use crate::errors::AppError;
use crate::models::applied::format_applied_on;
use crate::models::AppliedRecord;
use crate::search::session::SearchSessionCache;

/// Records a single manual apply: stamp the current time, build the record,
/// append once. No retries, no deduplication.
pub fn apply_one(
    store: &AppliedStore,
    title: &str,
    company: &str,
    location: &str,
    keyword: &str,
) -> AppliedRecord {
    let record = AppliedRecord {
        applied_on: format_applied_on(Local::now()),
        company: company.to_string(),
        job_title: title.to_string(),
        location: location.to_string(),
        keyword: keyword.to_string(),
    };
    store.append(&record);
    record
}

/// Bulk "auto-apply": one record per job in the cached search session.
///
/// The timestamp is captured once before the loop so the whole bulk action
/// reads as a single event on the dashboard's time axis. Records are appended
/// individually, so a failure mid-loop leaves a committed prefix with no
/// rollback (appends are best-effort anyway).
///
/// An unknown session id is the one hard failure in the core: it aborts with
/// zero appends instead of silently applying to nothing.
pub fn apply_all(
    store: &AppliedStore,
    sessions: &SearchSessionCache,
    session_id: Uuid,
    keyword: &str,
) -> Result<Vec<AppliedRecord>, AppError> {
    let jobs = sessions
        .get(session_id)
        .ok_or(AppError::SessionExpiredOrInvalid)?;

    let applied_on = format_applied_on(Local::now());
    let mut records = Vec::with_capacity(jobs.len());
    for job in jobs.iter() {
        let record = AppliedRecord {
            applied_on: applied_on.clone(),
            company: job.company.clone(),
            job_title: job.title.clone(),
            location: job.location.clone(),
            keyword: keyword.to_string(),
        };
        store.append(&record);
        records.push(record);
    }
    Ok(records)
}
