//! Concurrent spell-check core: coordinator, per-file workers, and the
//! shared run-wide summary.

pub mod coordinator;
pub mod report;
pub mod summary;
pub mod worker;

pub use coordinator::{Coordinator, WorkerMode};
pub use summary::{SummaryAggregator, SummaryData, TOP_MISSPELLINGS, WordCounter};
