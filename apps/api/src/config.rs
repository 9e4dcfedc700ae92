use std::path::PathBuf;

use anyhow::{Context, Result};

/// Application configuration loaded from environment variables.
///
/// Everything beyond the port is optional: the job board key falls back to a
/// demo key, and the rewrite/sheets integrations simply stay unconfigured when
/// their variables are absent (the endpoints then degrade per their contracts).
#[derive(Debug, Clone)]
pub struct Config {
    /// Jooble-style job board API key.
    pub jooble_api_key: String,
    /// OpenAI key for the bullet rewriter; empty means "not configured".
    pub openai_api_key: String,
    /// Spreadsheet id for the optional sheet sync.
    pub google_sheet_id: String,
    /// OAuth bearer token for the Sheets API.
    pub google_sheets_token: String,
    /// Path of the applied-jobs JSON store.
    pub applied_store_path: PathBuf,
    /// Directory where uploaded resumes are kept.
    pub uploads_dir: PathBuf,
    pub port: u16,
    pub rust_log: String,
}

/// Demo key shipped with the original tool so search works out of the box.
const DEFAULT_JOOBLE_API_KEY: &str = "f3610c6c-eeb8-4742-bec8-eee2a995315f";

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            jooble_api_key: optional_env("JOOBLE_API_KEY")
                .unwrap_or_else(|| DEFAULT_JOOBLE_API_KEY.to_string()),
            openai_api_key: optional_env("OPENAI_API_KEY").unwrap_or_default(),
            google_sheet_id: optional_env("GOOGLE_SHEET_ID").unwrap_or_default(),
            google_sheets_token: optional_env("GOOGLE_SHEETS_TOKEN").unwrap_or_default(),
            applied_store_path: optional_env("APPLIED_STORE")
                .unwrap_or_else(|| "applied_jobs.json".to_string())
                .into(),
            uploads_dir: optional_env("UPLOADS_DIR")
                .unwrap_or_else(|| "static".to_string())
                .into(),
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8000".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }

    pub fn rewrite_configured(&self) -> bool {
        !self.openai_api_key.is_empty()
    }

    pub fn sheets_configured(&self) -> bool {
        !self.google_sheet_id.is_empty() && !self.google_sheets_token.is_empty()
    }
}

/// Reads an env var, treating empty/whitespace values as unset.
fn optional_env(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
