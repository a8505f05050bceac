//! Search orchestration.
//!
//! Answers one search request: "which stops does train X make between A and
//! B on this date?". The orchestrator decides whether the provider needs to
//! be called at all, and populates the cache when it does.

mod orchestrator;

pub use orchestrator::{SearchError, SearchOrchestrator};
