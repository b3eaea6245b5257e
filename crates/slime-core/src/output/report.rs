//! Report Writer
//!
//! Writes frame reports as JSON lines to any writer (stdout for the headless runner).

use std::io::{self, Write};

use slime_events::{FrameReport, RunSummary};

/// Sink for per-frame JSONL reports
pub struct ReportWriter {
    writer: Option<Box<dyn Write + Send>>,
    written: u64,
}

impl ReportWriter {
    /// Write reports to `writer`
    pub fn new(writer: impl Write + Send + 'static) -> Self {
        Self {
            writer: Some(Box::new(writer)),
            written: 0,
        }
    }

    /// Report to standard output
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }

    /// A writer that discards reports
    pub fn null() -> Self {
        Self {
            writer: None,
            written: 0,
        }
    }

    /// Reports accepted so far, including discarded ones
    pub fn written(&self) -> u64 {
        self.written
    }

    pub fn write_frame(&mut self, report: &FrameReport) -> io::Result<()> {
        self.written += 1;
        if let Some(ref mut writer) = self.writer {
            let json = report.to_jsonl()?;
            writeln!(writer, "{}", json)?;
        }
        Ok(())
    }

    pub fn write_summary(&mut self, summary: &RunSummary) -> io::Result<()> {
        if let Some(ref mut writer) = self.writer {
            let json = serde_json::to_string(summary)?;
            writeln!(writer, "{}", json)?;
        }
        Ok(())
    }

    pub fn flush(&mut self) -> io::Result<()> {
        if let Some(ref mut writer) = self.writer {
            writer.flush()?;
        }
        Ok(())
    }
}
