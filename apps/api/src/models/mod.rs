pub mod applied;
pub mod search;

pub use applied::AppliedRecord;
pub use search::SearchResult;
