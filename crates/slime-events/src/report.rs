//! Frame Reports
//!
//! Per-frame observations of the trail field, emitted after every frame.

use serde::{Deserialize, Serialize};

/// Aggregate brightness figures for a trail field.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct FieldStats {
    /// Pixels with at least one non-zero channel
    pub lit_pixels: usize,
    /// Brightest channel value anywhere in the field
    pub peak: u8,
    /// Mean over every channel of every pixel (0.0 to 255.0)
    pub mean_intensity: f32,
}

impl FieldStats {
    /// True when every channel of every pixel is zero.
    pub fn is_black(&self) -> bool {
        self.lit_pixels == 0
    }
}

/// What happened during one frame.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FrameReport {
    /// Frame number, starting at 1 for the first advanced frame
    pub frame: u64,
    /// Seconds of simulated time applied this frame
    pub dt: f32,
    /// Number of agents that stepped and stamped
    pub agents: usize,
    /// Field state after the frame's stamps
    pub field: FieldStats,
}

impl FrameReport {
    /// Serializes the report as a single JSON line.
    pub fn to_jsonl(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Deserializes a report from a JSON line.
    pub fn from_jsonl(line: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(line)
    }
}
