mod applied;
mod config;
mod errors;
mod models;
mod rewrite;
mod routes;
mod search;
mod sheets;
mod state;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::applied::store::AppliedStore;
use crate::config::Config;
use crate::rewrite::RewriteClient;
use crate::routes::build_router;
use crate::search::client::JoobleClient;
use crate::search::session::SearchSessionCache;
use crate::sheets::SheetSyncClient;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_CRATE_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Job Bot API v{}", env!("CARGO_PKG_VERSION"));

    // Durable applied-jobs log
    let store = Arc::new(AppliedStore::new(config.applied_store_path.clone()));
    info!("Applied store at {}", store.path().display());

    // In-memory search sessions (lost on restart; auto-apply then 400s)
    let sessions = Arc::new(SearchSessionCache::new());

    // Job board client
    let job_source = Arc::new(JoobleClient::new(config.jooble_api_key.clone()));
    info!("Job search client initialized");

    // Bullet rewriter (degrades to a placeholder when unconfigured)
    let rewriter = RewriteClient::new(config.openai_api_key.clone());
    if !config.rewrite_configured() {
        info!("OPENAI_API_KEY not set; rewriter will return a placeholder");
    }

    // Optional Google Sheets sync
    let sheets = SheetSyncClient::new(
        config.google_sheet_id.clone(),
        config.google_sheets_token.clone(),
    );
    info!("Google Sheets sync configured: {}", sheets.is_configured());

    let state = AppState {
        config: config.clone(),
        store,
        sessions,
        job_source,
        rewriter,
        sheets,
    };

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
