//! Run Summary
//!
//! Totals reported once the frame loop stops.

use serde::{Deserialize, Serialize};

use crate::FieldStats;

/// Outcome of a complete simulation run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunSummary {
    /// Seed the agent RNG was created from, if known
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
    /// Frames advanced before the presenter asked to stop
    pub frames: u64,
    /// Sum of every frame's dt
    pub simulated_seconds: f64,
    /// Field state after the last frame
    pub final_field: FieldStats,
}

impl RunSummary {
    /// Average simulated frame length, zero when no frame ran.
    pub fn mean_dt(&self) -> f64 {
        if self.frames == 0 {
            0.0
        } else {
            self.simulated_seconds / self.frames as f64
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mean_dt() {
        let summary = RunSummary {
            seed: Some(42),
            frames: 4,
            simulated_seconds: 0.5,
            final_field: FieldStats::default(),
        };
        assert!((summary.mean_dt() - 0.125).abs() < 1e-12);

        let empty = RunSummary { frames: 0, simulated_seconds: 0.0, ..summary };
        assert_eq!(empty.mean_dt(), 0.0);
    }

    #[test]
    fn test_seed_omitted_when_unknown() {
        let summary = RunSummary {
            seed: None,
            frames: 1,
            simulated_seconds: 0.1,
            final_field: FieldStats::default(),
        };
        let json = serde_json::to_string(&summary).unwrap();
        assert!(!json.contains("seed"));

        let parsed: RunSummary = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, summary);
    }
}
