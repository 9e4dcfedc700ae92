use async_trait::async_trait;
use reqwest::Client;
use serde::Serialize;
use serde_json::Value;
use tracing::warn;

use crate::models::SearchResult;

/// Cap on results per search, matching what the listing view shows.
const RESULT_LIMIT: usize = 40;
const REQUEST_TIMEOUT_SECS: u64 = 15;

/// Source of job listings. Object-safe so handlers depend on
/// `Arc<dyn JobSource>` and tests can substitute a stub.
#[async_trait]
pub trait JobSource: Send + Sync {
    /// Never fails: transport or parse trouble degrades to the fallback list
    /// so the listing view is never empty.
    async fn search(&self, keywords: &str, location: &str, page: u32) -> Vec<SearchResult>;
}

/// Jooble free-tier client. POSTs the query and normalizes the provider's
/// heterogeneous field names into [`SearchResult`].
pub struct JoobleClient {
    client: Client,
    api_key: String,
}

#[derive(Serialize)]
struct JoobleQuery<'a> {
    keywords: &'a str,
    location: &'a str,
    page: u32,
}

impl JoobleClient {
    pub fn new(api_key: String) -> Self {
        Self {
            client: Client::builder()
                .timeout(std::time::Duration::from_secs(REQUEST_TIMEOUT_SECS))
                .build()
                .expect("Failed to build HTTP client"),
            api_key,
        }
    }

    async fn fetch(&self, keywords: &str, location: &str, page: u32) -> anyhow::Result<Value> {
        let url = format!("https://jooble.org/api/{}", self.api_key);
        let body = self
            .client
            .post(&url)
            .json(&JoobleQuery {
                keywords,
                location,
                page,
            })
            .send()
            .await?
            .error_for_status()?
            .json::<Value>()
            .await?;
        Ok(body)
    }
}

#[async_trait]
impl JobSource for JoobleClient {
    async fn search(&self, keywords: &str, location: &str, page: u32) -> Vec<SearchResult> {
        let jobs = match self.fetch(keywords, location, page).await {
            Ok(body) => normalize_jobs(&body),
            Err(e) => {
                warn!("Job search fetch error: {e:#}");
                Vec::new()
            }
        };
        if jobs.is_empty() {
            // Canned sample so the UI is never empty; the original tool made
            // the same choice over returning an empty list.
            return fallback_results();
        }
        jobs
    }
}

/// Maps the provider's `{"jobs": [...]}` body onto [`SearchResult`]s.
/// Upstream rows are inconsistent about key names; each field tries its
/// aliases in order and falls back to a placeholder.
pub fn normalize_jobs(body: &Value) -> Vec<SearchResult> {
    let jobs = match body.get("jobs").and_then(Value::as_array) {
        Some(jobs) => jobs,
        None => return Vec::new(),
    };
    jobs.iter()
        .take(RESULT_LIMIT)
        .map(|j| SearchResult {
            title: pick(j, &["title", "position"], "Unknown"),
            company: pick(j, &["company", "employer"], "Unknown"),
            location: pick(j, &["location", "city"], "Unknown"),
            salary: pick(j, &["salary", "compensation"], "Not disclosed"),
            apply_link: pick(j, &["link", "url"], "#"),
        })
        .collect()
}

/// First non-empty string among `keys`, else `default`.
fn pick(job: &Value, keys: &[&str], default: &str) -> String {
    keys.iter()
        .filter_map(|k| job.get(*k).and_then(Value::as_str))
        .find(|s| !s.is_empty())
        .unwrap_or(default)
        .to_string()
}

/// Two-job sample shown when the provider returns nothing.
pub fn fallback_results() -> Vec<SearchResult> {
    vec![
        SearchResult {
            title: "Data Analyst".to_string(),
            company: "Acme Analytics".to_string(),
            location: "Bengaluru".to_string(),
            salary: "₹10–15 LPA".to_string(),
            apply_link: "https://example.com/1".to_string(),
        },
        SearchResult {
            title: "Business Intelligence Analyst".to_string(),
            company: "InsightWorks".to_string(),
            location: "Mumbai".to_string(),
            salary: "Not disclosed".to_string(),
            apply_link: "https://example.com/2".to_string(),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_normalize_primary_keys() {
        let body = json!({"jobs": [{
            "title": "Data Analyst",
            "company": "Acme",
            "location": "Pune",
            "salary": "10 LPA",
            "link": "https://example.com/j"
        }]});
        let jobs = normalize_jobs(&body);
        assert_eq!(jobs.len(), 1);
        assert_eq!(jobs[0].title, "Data Analyst");
        assert_eq!(jobs[0].apply_link, "https://example.com/j");
    }

    #[test]
    fn test_normalize_alias_keys() {
        let body = json!({"jobs": [{
            "position": "Analyst",
            "employer": "Acme",
            "city": "Pune",
            "compensation": "10 LPA",
            "url": "https://example.com/j"
        }]});
        let jobs = normalize_jobs(&body);
        assert_eq!(jobs[0].title, "Analyst");
        assert_eq!(jobs[0].company, "Acme");
        assert_eq!(jobs[0].location, "Pune");
        assert_eq!(jobs[0].salary, "10 LPA");
        assert_eq!(jobs[0].apply_link, "https://example.com/j");
    }

    #[test]
    fn test_normalize_missing_fields_get_placeholders() {
        let body = json!({"jobs": [{}]});
        let jobs = normalize_jobs(&body);
        assert_eq!(jobs[0].title, "Unknown");
        assert_eq!(jobs[0].company, "Unknown");
        assert_eq!(jobs[0].location, "Unknown");
        assert_eq!(jobs[0].salary, "Not disclosed");
        assert_eq!(jobs[0].apply_link, "#");
    }

    #[test]
    fn test_normalize_caps_at_limit() {
        let rows: Vec<Value> = (0..100).map(|i| json!({"title": format!("t{i}")})).collect();
        let body = json!({ "jobs": rows });
        assert_eq!(normalize_jobs(&body).len(), RESULT_LIMIT);
    }

    #[test]
    fn test_body_without_jobs_array_is_empty() {
        assert!(normalize_jobs(&json!({"totalCount": 0})).is_empty());
    }

    #[test]
    fn test_fallback_is_nonempty() {
        assert_eq!(fallback_results().len(), 2);
    }
}
