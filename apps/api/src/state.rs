use std::sync::Arc;

use crate::applied::store::AppliedStore;
use crate::config::Config;
use crate::rewrite::RewriteClient;
use crate::search::client::JobSource;
use crate::search::session::SearchSessionCache;
use crate::sheets::SheetSyncClient;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Durable applied-jobs log. One instance per process; its internal lock
    /// serializes concurrent appends.
    pub store: Arc<AppliedStore>,
    /// Ephemeral search-id → job-list cache consumed by auto-apply.
    pub sessions: Arc<SearchSessionCache>,
    /// Pluggable job-listing source. Production: JoobleClient.
    pub job_source: Arc<dyn JobSource>,
    pub rewriter: RewriteClient,
    pub sheets: SheetSyncClient,
}
