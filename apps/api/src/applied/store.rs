use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use anyhow::{Context, Result};
use tracing::warn;

use crate::models::AppliedRecord;

/// Durable append-only log of apply events, stored as a pretty-printed JSON
/// array so the file stays hand-inspectable.
///
/// Persistence is best-effort: a failed append is logged and dropped, and an
/// unreadable store reads as empty history. The dashboard must render even
/// when the file is corrupt or missing, so neither operation ever surfaces an
/// error to callers.
///
/// Appends are read-modify-write over the whole file. The `write_lock`
/// serializes writers within this process so two concurrent appends cannot
/// each read the same prior state and lose an update. Cross-process writers
/// are not protected; this is a single-operator tool.
pub struct AppliedStore {
    path: PathBuf,
    write_lock: Mutex<()>,
}

impl AppliedStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Durably adds one record after all previously stored records.
    /// Failures are logged and swallowed; the record may be silently dropped
    /// if the existing collection cannot be read or rewritten.
    pub fn append(&self, record: &AppliedRecord) {
        let _guard = self.write_lock.lock().unwrap_or_else(|e| e.into_inner());
        if let Err(e) = self.try_append(record) {
            warn!("Failed to append applied record: {e:#}");
        }
    }

    fn try_append(&self, record: &AppliedRecord) -> Result<()> {
        let mut records = self.read_records()?;
        records.push(record.clone());
        let json = serde_json::to_string_pretty(&records)?;
        fs::write(&self.path, json)
            .with_context(|| format!("writing {}", self.path.display()))?;
        Ok(())
    }

    /// Every record ever appended, in insertion order. A missing, unreadable,
    /// or corrupt store degrades to empty history rather than an error.
    pub fn load_all(&self) -> Vec<AppliedRecord> {
        match self.read_records() {
            Ok(records) => records,
            Err(e) => {
                warn!("Failed to load applied store, treating as empty: {e:#}");
                Vec::new()
            }
        }
    }

    fn read_records(&self) -> Result<Vec<AppliedRecord>> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }
        let raw = fs::read_to_string(&self.path)
            .with_context(|| format!("reading {}", self.path.display()))?;
        serde_json::from_str(&raw)
            .with_context(|| format!("parsing {}", self.path.display()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rec(title: &str) -> AppliedRecord {
        AppliedRecord {
            applied_on: "01-Jan-2026 09:00 AM".to_string(),
            company: "Acme".to_string(),
            job_title: title.to_string(),
            location: "Pune".to_string(),
            keyword: String::new(),
        }
    }

    fn store_in(dir: &tempfile::TempDir) -> AppliedStore {
        AppliedStore::new(dir.path().join("applied_jobs.json"))
    }

    #[test]
    fn test_empty_start_loads_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);
        assert!(store.load_all().is_empty());
    }

    #[test]
    fn test_append_then_load_preserves_order() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);
        for title in ["first", "second", "third"] {
            store.append(&rec(title));
        }
        let loaded = store.load_all();
        assert_eq!(loaded.len(), 3);
        let titles: Vec<&str> = loaded.iter().map(|r| r.job_title.as_str()).collect();
        assert_eq!(titles, ["first", "second", "third"]);
    }

    #[test]
    fn test_reopen_preserves_history() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("applied_jobs.json");
        AppliedStore::new(&path).append(&rec("kept"));
        let reopened = AppliedStore::new(&path);
        reopened.append(&rec("added"));
        let titles: Vec<String> = reopened
            .load_all()
            .into_iter()
            .map(|r| r.job_title)
            .collect();
        assert_eq!(titles, ["kept", "added"]);
    }

    #[test]
    fn test_corrupt_store_reads_as_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("applied_jobs.json");
        fs::write(&path, "{not json").unwrap();
        let store = AppliedStore::new(&path);
        assert!(store.load_all().is_empty());
    }

    #[test]
    fn test_append_onto_corrupt_store_does_not_panic() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("applied_jobs.json");
        fs::write(&path, "[[[").unwrap();
        let store = AppliedStore::new(&path);
        // Best-effort: the append is dropped, the caller survives.
        store.append(&rec("dropped"));
        assert!(store.load_all().is_empty());
    }

    #[test]
    fn test_duplicate_appends_are_not_deduplicated() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);
        store.append(&rec("same"));
        store.append(&rec("same"));
        assert_eq!(store.load_all().len(), 2);
    }
}
