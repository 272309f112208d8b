//! CLI definition and the check command.

pub mod check;

use clap::Parser;

/// Sharpcheck - blur detection via the variance of the Laplacian
#[derive(Parser)]
#[command(name = "sharpcheck")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Check arguments (paths, threshold, output flags).
    #[command(flatten)]
    pub check: check::CheckArgs,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,
}

/// Process exit codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// All images analyzed, none blurry.
    Success,
    /// At least one image classified as blurry.
    BlurryFound,
    /// Analysis could not run.
    Error,
}

impl From<ExitCode> for std::process::ExitCode {
    fn from(code: ExitCode) -> Self {
        match code {
            ExitCode::Success => Self::from(0),
            ExitCode::BlurryFound => Self::from(1),
            ExitCode::Error => Self::from(2),
        }
    }
}
