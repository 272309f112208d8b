//! Output formatting for CLI.

mod json;
mod progress;

pub use json::{AnalysisRecord, JsonOutput};
pub use progress::ProgressBar;
