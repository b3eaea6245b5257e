//! Output
//!
//! Field statistics and JSONL frame reports.

pub mod report;
pub mod stats;

pub use report::ReportWriter;
pub use stats::{field_stats, StatsCollector};
