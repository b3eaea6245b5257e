//! Field Statistics
//!
//! Brightness figures derived from the trail field, and the running totals for a whole run.

use slime_events::{FieldStats, FrameReport, RunSummary};

use crate::components::field::{TrailField, BLACK, CHANNELS};

/// Count lit pixels, find the peak channel and average every channel.
pub fn field_stats(field: &TrailField) -> FieldStats {
    let pixels = field.pixels();
    let mut lit_pixels = 0;
    let mut peak = 0u8;
    let mut total = 0u64;

    for pixel in pixels {
        if *pixel != BLACK {
            lit_pixels += 1;
        }
        for &channel in pixel {
            peak = peak.max(channel);
            total += u64::from(channel);
        }
    }

    let channels = (pixels.len() * CHANNELS) as f64;
    FieldStats {
        lit_pixels,
        peak,
        mean_intensity: (total as f64 / channels) as f32,
    }
}

/// Accumulates frame reports into a [`RunSummary`]
#[derive(Debug, Default)]
pub struct StatsCollector {
    seed: Option<u64>,
    frames: u64,
    simulated_seconds: f64,
    last_field: FieldStats,
}

impl StatsCollector {
    pub fn new(seed: Option<u64>) -> Self {
        Self {
            seed,
            ..Self::default()
        }
    }

    /// Record one finished frame
    pub fn record(&mut self, report: &FrameReport) {
        self.frames += 1;
        self.simulated_seconds += f64::from(report.dt);
        self.last_field = report.field;
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }

    pub fn summary(&self) -> RunSummary {
        RunSummary {
            seed: self.seed,
            frames: self.frames,
            simulated_seconds: self.simulated_seconds,
            final_field: self.last_field,
        }
    }
}
