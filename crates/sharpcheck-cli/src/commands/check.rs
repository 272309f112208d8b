//! Check command - classify images as blurry or clear.

use std::io::IsTerminal;
use std::path::PathBuf;

use anyhow::Result;
use clap::{Args, ValueEnum};
use sharpcheck_adapters::{collect_image_files, load_pixels};
use sharpcheck_core::{BlurAnalyzer, DEFAULT_THRESHOLD};
use tracing::{debug, info};

use super::ExitCode;
use crate::config::AppConfig;
use crate::output::{AnalysisRecord, JsonOutput, ProgressBar};

/// Output format for results.
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum OutputFormat {
    /// JSON Lines (one JSON object per line)
    #[default]
    Jsonl,
    /// Single JSON array
    Json,
}

/// Parse and validate a threshold value (finite, greater than zero).
fn parse_threshold(s: &str) -> Result<f64, String> {
    let value: f64 = s
        .parse()
        .map_err(|_| format!("'{s}' is not a valid number"))?;
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(format!("{value} is not a finite positive number"))
    }
}

/// Arguments for image analysis.
#[derive(Args, Clone)]
pub struct CheckArgs {
    /// Files or directories to analyze
    pub paths: Vec<PathBuf>,

    /// Recurse into subdirectories
    #[arg(short, long)]
    pub recursive: bool,

    /// Focus score threshold; images scoring below it are blurry
    #[arg(short, long, value_parser = parse_threshold)]
    pub threshold: Option<f64>,

    /// Show progress bar
    #[arg(long)]
    pub progress: bool,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Output format
    #[arg(long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Pretty-print JSON output (only affects --format json)
    #[arg(long)]
    pub pretty: bool,
}

impl CheckArgs {
    /// Apply configuration file values, respecting CLI precedence.
    ///
    /// Layering priority (lowest to highest): hardcoded defaults, config
    /// file values (XDG, then project-local), CLI arguments.
    pub fn with_config(mut args: Self, config: &AppConfig) -> Self {
        if !args.recursive {
            args.recursive = config.general.recursive.unwrap_or(false);
        }

        args.threshold = args.threshold.or(config.analysis.threshold);

        if args.format.is_none() {
            args.format = config
                .output
                .format
                .as_ref()
                .and_then(|s| match s.as_str() {
                    "json" => Some(OutputFormat::Json),
                    "jsonl" => Some(OutputFormat::Jsonl),
                    _ => None,
                });
        }
        if !args.pretty {
            args.pretty = config.output.pretty.unwrap_or(false);
        }
        if !args.progress {
            args.progress = config.output.progress.unwrap_or(false);
        }

        args
    }

    /// Threshold with fallback to the pipeline default.
    fn threshold(&self) -> f64 {
        self.threshold.unwrap_or(DEFAULT_THRESHOLD)
    }

    /// Output format with fallback to JSONL.
    fn format(&self) -> OutputFormat {
        self.format.unwrap_or(OutputFormat::Jsonl)
    }
}

/// Result of running the check command.
pub struct CheckResult {
    /// Number of images analyzed.
    pub processed: usize,
    /// Number of files skipped.
    pub skipped: usize,
    /// Number of images classified as blurry.
    pub blurry: usize,
    /// Exit code.
    pub exit_code: ExitCode,
}

/// Run the check command.
///
/// Expects `args` to have been processed through `with_config()` first.
pub fn run(args: &CheckArgs) -> Result<CheckResult> {
    info!("Running check on {} paths", args.paths.len());

    if args.paths.is_empty() {
        anyhow::bail!("No paths specified");
    }

    let files = collect_image_files(&args.paths, args.recursive);
    debug!("Found {} image files", files.len());

    let analyzer = BlurAnalyzer::new(args.threshold());
    let output = JsonOutput::stdout();

    let show_progress = !args.quiet && (args.progress || std::io::stderr().is_terminal());
    let progress = ProgressBar::new(files.len() as u64, args.quiet, show_progress);

    let mut processed = 0usize;
    let mut skipped = 0usize;
    let mut blurry = 0usize;
    let mut all_records: Vec<AnalysisRecord> = Vec::new();

    for path in &files {
        progress.started(&path.display().to_string());

        let analyzed = load_pixels(path)
            .and_then(|pixels| Ok((analyzer.analyze(&pixels)?, pixels)));
        let record = match analyzed {
            Ok((report, pixels)) => {
                if report.is_blurry() {
                    blurry += 1;
                }
                processed += 1;
                let record = AnalysisRecord::new(path, &pixels, &report);
                progress.completed(&record);
                record
            }
            Err(e) => {
                progress.skipped(&path.display().to_string(), &format!("{e:#}"));
                skipped += 1;
                continue;
            }
        };

        match args.format() {
            OutputFormat::Jsonl => output.write(&record)?,
            OutputFormat::Json => all_records.push(record),
        }
    }

    if matches!(args.format(), OutputFormat::Json) {
        output.write_array(&all_records, args.pretty)?;
    }
    output.flush()?;

    progress.finished(processed, skipped);

    let exit_code = if blurry > 0 {
        ExitCode::BlurryFound
    } else {
        ExitCode::Success
    };

    Ok(CheckResult {
        processed,
        skipped,
        blurry,
        exit_code,
    })
}
