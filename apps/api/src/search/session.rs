use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use uuid::Uuid;

use crate::models::SearchResult;

/// Ephemeral map from a search id to the exact job list that search returned,
/// so a later auto-apply can recover the list the user saw.
///
/// Sessions live only in process memory: a restart invalidates every id, and
/// auto-apply surfaces that as a session-expired error. Sessions are read-only
/// after creation and are never evicted; unbounded growth under a long-running
/// process is a known gap kept for compatibility with the original tool.
///
/// Injectable rather than a process-wide global so tests get isolated
/// instances. Safe for concurrent create/get.
#[derive(Default)]
pub struct SearchSessionCache {
    sessions: RwLock<HashMap<Uuid, Arc<Vec<SearchResult>>>>,
}

impl SearchSessionCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores a result list under a fresh 128-bit random id. Repeating an
    /// identical search still creates a new session.
    pub fn create(&self, results: Vec<SearchResult>) -> Uuid {
        let id = Uuid::new_v4();
        self.sessions
            .write()
            .unwrap_or_else(|e| e.into_inner())
            .insert(id, Arc::new(results));
        id
    }

    /// The stored list, or `None` for an unknown id.
    pub fn get(&self, id: Uuid) -> Option<Arc<Vec<SearchResult>>> {
        self.sessions
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .get(&id)
            .cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn job(title: &str) -> SearchResult {
        SearchResult {
            title: title.to_string(),
            company: "Acme".to_string(),
            location: "Mumbai".to_string(),
            salary: "Not disclosed".to_string(),
            apply_link: "#".to_string(),
        }
    }

    #[test]
    fn test_round_trip_returns_exact_list() {
        let cache = SearchSessionCache::new();
        let jobs = vec![job("one"), job("two")];
        let id = cache.create(jobs.clone());
        assert_eq!(*cache.get(id).unwrap(), jobs);
    }

    #[test]
    fn test_unknown_id_is_none() {
        let cache = SearchSessionCache::new();
        assert!(cache.get(Uuid::new_v4()).is_none());
    }

    #[test]
    fn test_identical_searches_get_distinct_sessions() {
        let cache = SearchSessionCache::new();
        let jobs = vec![job("one")];
        let a = cache.create(jobs.clone());
        let b = cache.create(jobs);
        assert_ne!(a, b);
        assert_eq!(cache.get(a).unwrap(), cache.get(b).unwrap());
    }

    #[test]
    fn test_get_does_not_consume_session() {
        let cache = SearchSessionCache::new();
        let id = cache.create(vec![job("one")]);
        assert!(cache.get(id).is_some());
        assert!(cache.get(id).is_some());
    }
}
