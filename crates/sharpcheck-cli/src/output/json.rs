//! JSON output adapter.

use std::io::{self, Write};
use std::path::Path;
use std::sync::Mutex;

use anyhow::Result;
use serde::Serialize;
use sharpcheck_core::{BlurReport, Classification, PixelBuffer};

/// One analyzed image, as emitted on stdout.
#[derive(Debug, Clone, Serialize)]
pub struct AnalysisRecord {
    /// Path to the analyzed image.
    pub path: String,
    /// Image width in pixels.
    pub width: u32,
    /// Image height in pixels.
    pub height: u32,
    /// Blur/clear decision.
    pub classification: Classification,
    /// Focus score rounded to two decimal places for display.
    pub focus_score: f64,
    /// Threshold the score was compared against.
    pub threshold: f64,
}

impl AnalysisRecord {
    /// Builds a record from an analysis outcome.
    #[must_use]
    pub fn new(path: &Path, pixels: &PixelBuffer, report: &BlurReport) -> Self {
        Self {
            path: path.display().to_string(),
            width: pixels.width(),
            height: pixels.height(),
            classification: report.classification,
            focus_score: report.rounded_score(),
            threshold: report.threshold,
        }
    }
}

/// JSON Lines output adapter.
pub struct JsonOutput {
    writer: Mutex<Box<dyn Write + Send>>,
}

impl JsonOutput {
    /// Creates a new JSON output writing to stdout.
    #[must_use]
    pub fn stdout() -> Self {
        Self {
            writer: Mutex::new(Box::new(io::stdout())),
        }
    }

    /// Writes a single record as one JSON line.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or writing fails.
    #[allow(clippy::significant_drop_tightening)]
    pub fn write(&self, record: &AnalysisRecord) -> Result<()> {
        let json = serde_json::to_string(record)?;
        let mut writer = self
            .writer
            .lock()
            .map_err(|e| anyhow::anyhow!("Lock poisoned: {e}"))?;
        writeln!(writer, "{json}")?;
        Ok(())
    }

    /// Writes a batch of records as a JSON array.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or writing fails.
    #[allow(clippy::significant_drop_tightening)]
    pub fn write_array(&self, records: &[AnalysisRecord], pretty: bool) -> Result<()> {
        let json = if pretty {
            serde_json::to_string_pretty(records)?
        } else {
            serde_json::to_string(records)?
        };
        let mut writer = self
            .writer
            .lock()
            .map_err(|e| anyhow::anyhow!("Lock poisoned: {e}"))?;
        writeln!(writer, "{json}")?;
        Ok(())
    }

    /// Flushes buffered output.
    ///
    /// # Errors
    ///
    /// Returns an error if flushing fails.
    #[allow(clippy::significant_drop_tightening)]
    pub fn flush(&self) -> Result<()> {
        let mut writer = self
            .writer
            .lock()
            .map_err(|e| anyhow::anyhow!("Lock poisoned: {e}"))?;
        writer.flush()?;
        Ok(())
    }
}
