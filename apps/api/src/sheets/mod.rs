//! Optional Google Sheets sync. Mirrors the applied-jobs store into the first
//! sheet of a configured spreadsheet: clear, write header + one row per
//! record, then stamp `A1` with the sync time. No schema validation against
//! the remote sheet is attempted.

mod handlers;

pub use handlers::handle_sync_sheet;

use anyhow::{Context, Result};
use chrono::Local;
use reqwest::Client;
use serde_json::json;
use tracing::info;

use crate::models::applied::format_applied_on;
use crate::models::AppliedRecord;

const SHEETS_API_BASE: &str = "https://sheets.googleapis.com/v4/spreadsheets";
/// The sync always targets the first sheet, as the original tool did.
const SHEET_RANGE: &str = "Sheet1";

/// Google Sheets v4 values-API wrapper. Needs two pieces of configuration:
/// the spreadsheet id and an OAuth bearer token.
#[derive(Clone)]
pub struct SheetSyncClient {
    client: Client,
    sheet_id: String,
    token: String,
}

impl SheetSyncClient {
    pub fn new(sheet_id: String, token: String) -> Self {
        Self {
            client: Client::builder()
                .timeout(std::time::Duration::from_secs(30))
                .build()
                .expect("Failed to build HTTP client"),
            sheet_id,
            token,
        }
    }

    pub fn is_configured(&self) -> bool {
        !self.sheet_id.is_empty() && !self.token.is_empty()
    }

    /// Replaces the sheet contents with the full record set.
    pub async fn sync(&self, records: &[AppliedRecord]) -> Result<()> {
        self.clear().await.context("clearing sheet")?;
        self.append_rows(build_rows(records))
            .await
            .context("appending rows")?;
        let stamp = format!("Last synced: {}", format_applied_on(Local::now()));
        self.write_a1(&stamp).await.context("writing sync stamp")?;
        info!("Synced {} applied records to sheet {}", records.len(), self.sheet_id);
        Ok(())
    }

    async fn clear(&self) -> Result<()> {
        let url = format!("{SHEETS_API_BASE}/{}/values/{SHEET_RANGE}:clear", self.sheet_id);
        self.client
            .post(&url)
            .bearer_auth(&self.token)
            .json(&json!({}))
            .send()
            .await?
            .error_for_status()?;
        Ok(())
    }

    async fn append_rows(&self, rows: Vec<Vec<String>>) -> Result<()> {
        let url = format!(
            "{SHEETS_API_BASE}/{}/values/{SHEET_RANGE}:append?valueInputOption=RAW",
            self.sheet_id
        );
        self.client
            .post(&url)
            .bearer_auth(&self.token)
            .json(&json!({ "values": rows }))
            .send()
            .await?
            .error_for_status()?;
        Ok(())
    }

    async fn write_a1(&self, value: &str) -> Result<()> {
        let url = format!(
            "{SHEETS_API_BASE}/{}/values/{SHEET_RANGE}!A1?valueInputOption=RAW",
            self.sheet_id
        );
        self.client
            .put(&url)
            .bearer_auth(&self.token)
            .json(&json!({ "values": [[value]] }))
            .send()
            .await?
            .error_for_status()?;
        Ok(())
    }
}

/// Header row plus one row per record, columns in store order.
fn build_rows(records: &[AppliedRecord]) -> Vec<Vec<String>> {
    let mut rows = Vec::with_capacity(records.len() + 1);
    rows.push(AppliedRecord::COLUMNS.map(str::to_string).to_vec());
    for record in records {
        rows.push(record.row().map(str::to_string).to_vec());
    }
    rows
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_rows_header_first() {
        let rows = build_rows(&[]);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0][0], "Applied On");
        assert_eq!(rows[0][4], "Keyword");
    }

    #[test]
    fn test_build_rows_mirrors_record_columns() {
        let record = AppliedRecord {
            applied_on: "01-Jan-2026 09:00 AM".to_string(),
            company: "Acme".to_string(),
            job_title: "Data Analyst".to_string(),
            location: "Pune".to_string(),
            keyword: "data".to_string(),
        };
        let rows = build_rows(&[record]);
        assert_eq!(
            rows[1],
            vec!["01-Jan-2026 09:00 AM", "Acme", "Data Analyst", "Pune", "data"]
        );
    }

    #[test]
    fn test_is_configured_requires_both_pieces() {
        assert!(!SheetSyncClient::new(String::new(), String::new()).is_configured());
        assert!(!SheetSyncClient::new("id".into(), String::new()).is_configured());
        assert!(!SheetSyncClient::new(String::new(), "tok".into()).is_configured());
        assert!(SheetSyncClient::new("id".into(), "tok".into()).is_configured());
    }
}
