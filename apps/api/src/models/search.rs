use serde::{Deserialize, Serialize};

/// One job as shown on the listing view, already normalized from the
/// upstream provider's heterogeneous field names.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResult {
    pub title: String,
    pub company: String,
    pub location: String,
    /// Display string; "Not disclosed" when the provider omits it.
    pub salary: String,
    /// Absolute URL, or "#" when the provider gives none.
    pub apply_link: String,
}
