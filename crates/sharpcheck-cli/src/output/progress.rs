//! Progress reporting using indicatif.

use indicatif::{ProgressBar as IndicatifBar, ProgressStyle};

use super::AnalysisRecord;

/// Progress reporter for CLI output.
///
/// Shows a bar when requested, falls back to per-image status lines on
/// stderr otherwise, and stays silent under `--quiet`.
pub struct ProgressBar {
    bar: Option<IndicatifBar>,
    quiet: bool,
}

impl ProgressBar {
    /// Creates a new progress reporter.
    #[must_use]
    pub fn new(total: u64, quiet: bool, show_bar: bool) -> Self {
        if quiet {
            return Self {
                bar: None,
                quiet: true,
            };
        }

        let bar = if show_bar {
            let bar = IndicatifBar::new(total);
            if let Ok(style) = ProgressStyle::default_bar().template(
                "{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} ({eta})",
            ) {
                bar.set_style(style.progress_chars("#>-"));
            }
            Some(bar)
        } else {
            None
        };

        Self { bar, quiet }
    }

    /// Analysis started for an image.
    pub fn started(&self, path: &str) {
        if let Some(bar) = &self.bar {
            bar.set_message(path.to_string());
        }
    }

    /// Analysis completed for an image.
    pub fn completed(&self, record: &AnalysisRecord) {
        if self.quiet {
            return;
        }
        if let Some(bar) = &self.bar {
            bar.inc(1);
        } else {
            eprintln!(
                "{}: {} (score {:.2})",
                record.path, record.classification, record.focus_score
            );
        }
    }

    /// A file was skipped due to an error.
    pub fn skipped(&self, path: &str, reason: &str) {
        if self.quiet {
            return;
        }
        if let Some(bar) = &self.bar {
            bar.inc(1);
        }
        eprintln!("WARN: Skipping {path}: {reason}");
    }

    /// All files have been processed.
    pub fn finished(&self, processed: usize, skipped: usize) {
        if let Some(bar) = &self.bar {
            bar.finish_with_message(format!("Done: {processed} processed, {skipped} skipped"));
        }
    }
}
