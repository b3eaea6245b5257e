//! Presentation Boundary
//!
//! The frame loop and the contracts it shares with whatever shows the field:
//! a clock that supplies each frame's delta, and a presenter that reads the
//! finished field and decides when to stop.
//!
//! Window size never feeds back into the simulation. A resize only changes the
//! [`Viewport`] the field is scaled into.

use std::time::Instant;

use slime_events::{FrameReport, RunSummary};

use crate::components::field::{Rgb, TrailField};
use crate::error::SimError;
use crate::output::{ReportWriter, StatsCollector};
use crate::simulation::Simulation;

/// Frames between progress log lines unless configured otherwise
pub const DEFAULT_REPORT_INTERVAL: u64 = 60;

/// Supplies the elapsed time for each frame
pub trait FrameClock {
    /// Seconds since the previous tick
    fn tick(&mut self) -> f32;
}

/// The same delta every frame, for reproducible runs
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub f32);

impl FrameClock for FixedClock {
    fn tick(&mut self) -> f32 {
        self.0
    }
}

/// Measured wall-clock time between ticks
#[derive(Debug, Clone, Copy)]
pub struct WallClock {
    last: Instant,
}

impl WallClock {
    pub fn new() -> Self {
        Self {
            last: Instant::now(),
        }
    }
}

impl Default for WallClock {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameClock for WallClock {
    fn tick(&mut self) -> f32 {
        let now = Instant::now();
        let dt = now.duration_since(self.last).as_secs_f32();
        self.last = now;
        dt
    }
}

/// What the presenter wants the loop to do next
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Signal {
    Continue,
    Quit,
}

/// Consumer of finished frames. Gets read-only access once per frame.
pub trait Presenter {
    fn present(&mut self, field: &TrailField, report: &FrameReport) -> Signal;

    /// Display size changed. The simulation resolution is unaffected.
    fn resize(&mut self, _width: usize, _height: usize) {}
}

/// Display area the field is scaled into
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: usize,
    pub height: usize,
}

impl Viewport {
    pub fn new(width: usize, height: usize) -> Self {
        Self { width, height }
    }

    /// Adopt a new display size. A zero-sized (minimised) window keeps the old one.
    pub fn resize(&mut self, width: usize, height: usize) {
        if width == 0 || height == 0 {
            tracing::debug!("ignoring {}x{} resize", width, height);
            return;
        }
        self.width = width;
        self.height = height;
    }

    /// The field scaled to this viewport
    pub fn scale(&self, field: &TrailField) -> Vec<Rgb> {
        scale_nearest(field, self.width, self.height)
    }
}

/// Nearest-neighbour scale of the field to `width` x `height`, row-major.
pub fn scale_nearest(field: &TrailField, width: usize, height: usize) -> Vec<Rgb> {
    let mut out = Vec::with_capacity(width * height);
    let (src_w, src_h) = (field.width(), field.height());
    let rows: Vec<&[Rgb]> = field.rows().collect();
    for y in 0..height {
        let row = rows[y * src_h / height];
        out.extend((0..width).map(|x| row[x * src_w / width]));
    }
    out
}

/// Presenter with no display: runs a fixed number of frames, logs progress
/// and optionally emits every frame report as a JSON line.
pub struct HeadlessPresenter {
    frame_budget: u64,
    report_interval: u64,
    viewport: Viewport,
    reports: ReportWriter,
    presented: u64,
}

impl HeadlessPresenter {
    /// Quit after `frame_budget` frames (always at least one).
    pub fn new(frame_budget: u64, viewport: Viewport) -> Self {
        Self {
            frame_budget,
            report_interval: DEFAULT_REPORT_INTERVAL,
            viewport,
            reports: ReportWriter::null(),
            presented: 0,
        }
    }

    pub fn with_report_interval(mut self, interval: u64) -> Self {
        self.report_interval = interval.max(1);
        self
    }

    pub fn with_reports(mut self, reports: ReportWriter) -> Self {
        self.reports = reports;
        self
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn presented(&self) -> u64 {
        self.presented
    }

    /// Frame reports handed to the report writer so far
    pub fn reports_written(&self) -> u64 {
        self.reports.written()
    }

    /// Emit the run summary to the report writer
    pub fn finish(&mut self, summary: &RunSummary) {
        tracing::debug!("{} frame reports written", self.reports.written());
        if let Err(e) = self
            .reports
            .write_summary(summary)
            .and_then(|_| self.reports.flush())
        {
            tracing::warn!("Could not write run summary: {}", e);
        }
    }
}

impl Presenter for HeadlessPresenter {
    fn present(&mut self, field: &TrailField, report: &FrameReport) -> Signal {
        self.presented += 1;

        if let Err(e) = self.reports.write_frame(report) {
            tracing::warn!("Could not write report for frame {}: {}", report.frame, e);
        }

        if report.frame % self.report_interval == 0 {
            tracing::info!(
                "[Frame {:>5}] dt {:.4}s - {} lit pixels, peak {}, mean {:.2} ({}x{} -> {}x{})",
                report.frame,
                report.dt,
                report.field.lit_pixels,
                report.field.peak,
                report.field.mean_intensity,
                field.width(),
                field.height(),
                self.viewport.width,
                self.viewport.height,
            );
        }

        if self.presented >= self.frame_budget {
            Signal::Quit
        } else {
            Signal::Continue
        }
    }

    fn resize(&mut self, width: usize, height: usize) {
        self.viewport.resize(width, height);
    }
}

/// Drive the simulation until the presenter quits.
///
/// Each iteration takes `dt` from the clock, advances one frame, then hands
/// the finished field to the presenter.
pub fn run<C, P>(sim: &mut Simulation, clock: &mut C, presenter: &mut P) -> Result<RunSummary, SimError>
where
    C: FrameClock + ?Sized,
    P: Presenter + ?Sized,
{
    let mut stats = StatsCollector::new(sim.seed());

    loop {
        let dt = clock.tick();
        let report = sim.advance(dt)?;
        stats.record(&report);

        if presenter.present(sim.field(), &report) == Signal::Quit {
            break;
        }
    }

    let summary = stats.summary();
    tracing::info!(
        frames = summary.frames,
        simulated_seconds = summary.simulated_seconds,
        "run finished"
    );
    Ok(summary)
}
