use serde::{Deserialize, Serialize};

/// Display-time timestamp format: day-month-year with a 12-hour clock,
/// e.g. "07-Mar-2026 04:15 PM". English month abbreviations regardless of locale.
pub const APPLIED_ON_FORMAT: &str = "%d-%b-%Y %I:%M %p";

/// One apply event. Rows are append-only: never mutated, never deleted,
/// never deduplicated — applying to the same job twice is two rows.
///
/// The serde keys are the interop column names shared by the JSON store,
/// the dashboard table, and the spreadsheet export. Order matters for the
/// sheet export, so keep the fields in column order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppliedRecord {
    #[serde(rename = "Applied On")]
    pub applied_on: String,
    #[serde(rename = "Company")]
    pub company: String,
    #[serde(rename = "Job Title")]
    pub job_title: String,
    #[serde(rename = "Location")]
    pub location: String,
    /// Search keyword that surfaced this job; empty for manual applies.
    #[serde(rename = "Keyword", default)]
    pub keyword: String,
}

impl AppliedRecord {
    /// Column headers in store order, used by the dashboard table and sheet sync.
    pub const COLUMNS: [&'static str; 5] =
        ["Applied On", "Company", "Job Title", "Location", "Keyword"];

    /// Cell values in the same order as [`Self::COLUMNS`].
    pub fn row(&self) -> [&str; 5] {
        [
            &self.applied_on,
            &self.company,
            &self.job_title,
            &self.location,
            &self.keyword,
        ]
    }
}

/// Formats a timestamp for the `Applied On` column.
pub fn format_applied_on(ts: chrono::DateTime<chrono::Local>) -> String {
    ts.format(APPLIED_ON_FORMAT).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_serde_uses_interop_keys() {
        let rec = AppliedRecord {
            applied_on: "01-Jan-2026 09:00 AM".to_string(),
            company: "Acme".to_string(),
            job_title: "Data Analyst".to_string(),
            location: "Mumbai".to_string(),
            keyword: "data".to_string(),
        };
        let json = serde_json::to_value(&rec).unwrap();
        assert_eq!(json["Applied On"], "01-Jan-2026 09:00 AM");
        assert_eq!(json["Job Title"], "Data Analyst");
        assert_eq!(json["Keyword"], "data");
    }

    #[test]
    fn test_missing_keyword_defaults_empty() {
        // Older store files may predate the Keyword column.
        let rec: AppliedRecord = serde_json::from_str(
            r#"{"Applied On":"x","Company":"c","Job Title":"t","Location":"l"}"#,
        )
        .unwrap();
        assert_eq!(rec.keyword, "");
    }

    #[test]
    fn test_applied_on_format() {
        let ts = chrono::Local.with_ymd_and_hms(2026, 3, 7, 16, 5, 0).unwrap();
        assert_eq!(format_applied_on(ts), "07-Mar-2026 04:05 PM");
    }
}
