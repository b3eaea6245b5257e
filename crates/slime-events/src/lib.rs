//! Shared report types and serialization for the slime trail simulation.
//!
//! This crate contains pure data structures with no simulation logic.
//! The core crate fills them in once per frame; the headless runner
//! writes them out as JSON lines.

pub mod report;
pub mod summary;

pub use report::{FieldStats, FrameReport};
pub use summary::RunSummary;
