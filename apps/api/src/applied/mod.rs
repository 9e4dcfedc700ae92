//! Applied-jobs persistence and aggregation: the append-only record store,
//! the dashboard aggregator, and the apply orchestrator that feeds the store.

pub mod aggregate;
pub mod handlers;
pub mod orchestrator;
pub mod store;
