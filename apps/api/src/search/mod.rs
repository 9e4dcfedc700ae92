//! Job search: the upstream job-board client, the ephemeral search session
//! cache that auto-apply reads back from, and the listing handler.

pub mod client;
pub mod handlers;
pub mod session;
