//! Configuration file support for sharpcheck.
//!
//! Supports TOML configuration from:
//! - XDG config: `~/.config/sharpcheck/config.toml` (lowest priority)
//! - Project-local: `.sharpcheck.toml` (searched up directory tree)
//! - CLI flags (highest priority, applied separately)

use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::{debug, info};

/// Top-level configuration structure.
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// General options.
    pub general: GeneralConfig,
    /// Analysis settings.
    pub analysis: AnalysisConfig,
    /// Output formatting settings.
    pub output: OutputConfig,
}

/// General configuration options.
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    /// Recurse into subdirectories by default.
    pub recursive: Option<bool>,
}

/// Analysis configuration.
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(default)]
pub struct AnalysisConfig {
    /// Focus score threshold; images scoring below it are blurry.
    pub threshold: Option<f64>,
}

/// Output formatting configuration.
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Output format: "json" or "jsonl".
    pub format: Option<String>,
    /// Pretty-print JSON output.
    pub pretty: Option<bool>,
    /// Show progress bar.
    pub progress: Option<bool>,
}

impl AppConfig {
    /// Load configuration from XDG and project-local files.
    ///
    /// Missing files are silently ignored. Invalid values are logged as
    /// warnings.
    pub fn load() -> Self {
        let mut config = Self::default();

        if let Some(xdg_path) = xdg_config_path() {
            if xdg_path.exists() {
                info!("Loading XDG config: {}", xdg_path.display());
                if let Some(xdg_config) = load_file(&xdg_path) {
                    config = xdg_config;
                }
            } else {
                debug!("XDG config not found: {}", xdg_path.display());
            }
        }

        if let Some(project_path) = find_project_config() {
            info!("Loading project config: {}", project_path.display());
            if let Some(project_config) = load_file(&project_path) {
                config.merge(project_config);
            }
        }

        if let Err(e) = config.validate() {
            eprintln!("warning: {e}");
        }

        config
    }

    /// Validate configuration values are within acceptable ranges.
    fn validate(&self) -> Result<(), String> {
        if let Some(t) = self.analysis.threshold {
            if !t.is_finite() || t <= 0.0 {
                return Err(format!(
                    "analysis.threshold must be a finite positive number, got {t}"
                ));
            }
        }

        if let Some(ref f) = self.output.format {
            if f != "json" && f != "jsonl" {
                return Err(format!("output.format must be 'json' or 'jsonl', got '{f}'"));
            }
        }

        Ok(())
    }

    /// Merge another config into this one.
    /// Values from `other` override values in `self` when present.
    fn merge(&mut self, other: Self) {
        self.general.recursive = other.general.recursive.or(self.general.recursive);
        self.analysis.threshold = other.analysis.threshold.or(self.analysis.threshold);
        self.output.format = other.output.format.or_else(|| self.output.format.take());
        self.output.pretty = other.output.pretty.or(self.output.pretty);
        self.output.progress = other.output.progress.or(self.output.progress);
    }
}

/// Get the XDG config file path.
fn xdg_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("sharpcheck").join("config.toml"))
}

/// Find project-local config by searching up from current directory.
fn find_project_config() -> Option<PathBuf> {
    let cwd = std::env::current_dir().ok()?;
    find_config_in_parents(&cwd)
}

/// Search for `.sharpcheck.toml` in the given directory and its parents.
fn find_config_in_parents(start: &Path) -> Option<PathBuf> {
    let mut current = Some(start);

    while let Some(dir) = current {
        let config_path = dir.join(".sharpcheck.toml");
        if config_path.exists() {
            return Some(config_path);
        }
        current = dir.parent();
    }

    None
}

/// Load and parse a TOML config file.
fn load_file(path: &Path) -> Option<AppConfig> {
    let content = match std::fs::read_to_string(path) {
        Ok(c) => c,
        Err(e) => {
            tracing::warn!("Failed to read config file {}: {}", path.display(), e);
            return None;
        }
    };

    match toml::from_str(&content) {
        Ok(config) => Some(config),
        Err(e) => {
            tracing::warn!("Failed to parse config file {}: {}", path.display(), e);
            None
        }
    }
}

#[cfg(test)]
#[allow(clippy::expect_used, clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert!(config.analysis.threshold.is_none());
        assert!(config.general.recursive.is_none());
        assert!(config.output.format.is_none());
    }

    #[test]
    fn test_parse_empty_config() {
        let config: AppConfig = toml::from_str("").expect("parse empty config");
        assert!(config.analysis.threshold.is_none());
    }

    #[test]
    fn test_parse_full_config() {
        let toml = r"
[general]
recursive = true

[analysis]
threshold = 750.0

[output]
format = 'json'
pretty = true
progress = false
";
        let config: AppConfig = toml::from_str(toml).expect("parse full config");

        assert_eq!(config.general.recursive, Some(true));
        assert_eq!(config.analysis.threshold, Some(750.0));
        assert_eq!(config.output.format, Some("json".to_string()));
        assert_eq!(config.output.pretty, Some(true));
        assert_eq!(config.output.progress, Some(false));
    }

    #[test]
    fn test_merge_override_wins() {
        let mut base: AppConfig = toml::from_str(
            r"
[analysis]
threshold = 500.0

[output]
pretty = true
",
        )
        .expect("parse base");

        let override_config: AppConfig = toml::from_str(
            r"
[analysis]
threshold = 2000.0
",
        )
        .expect("parse override");

        base.merge(override_config);

        assert_eq!(base.analysis.threshold, Some(2000.0));
        // Untouched values preserved from base
        assert_eq!(base.output.pretty, Some(true));
    }

    #[test]
    fn test_merge_empty_override_preserves_base() {
        let mut base: AppConfig = toml::from_str(
            r"
[analysis]
threshold = 1250.0
",
        )
        .expect("parse base");

        base.merge(AppConfig::default());
        assert_eq!(base.analysis.threshold, Some(1250.0));
    }

    #[test]
    fn test_validate_threshold_not_positive() {
        let mut config = AppConfig::default();
        config.analysis.threshold = Some(0.0);

        let result = config.validate();
        assert!(result.is_err());
        assert!(result.unwrap_err().contains("analysis.threshold"));
    }

    #[test]
    fn test_validate_threshold_not_finite() {
        let mut config = AppConfig::default();
        config.analysis.threshold = Some(f64::NAN);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_output_format_invalid() {
        let mut config = AppConfig::default();
        config.output.format = Some("xml".to_string());

        let result = config.validate();
        assert!(result.is_err());
        assert!(result.unwrap_err().contains("output.format"));
    }

    #[test]
    fn test_validate_valid_config_passes() {
        let config: AppConfig = toml::from_str(
            r"
[analysis]
threshold = 1000.0

[output]
format = 'jsonl'
",
        )
        .expect("parse valid config");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_invalid_toml_syntax_handled() {
        let toml = r"
[analysis
threshold = 1000.0
";
        let result: Result<AppConfig, _> = toml::from_str(toml);
        assert!(result.is_err(), "invalid TOML should return error");
    }

    #[test]
    fn test_invalid_field_type_handled() {
        let toml = r#"
[analysis]
threshold = "not a number"
"#;
        let result: Result<AppConfig, _> = toml::from_str(toml);
        assert!(result.is_err(), "type mismatch should return error");
    }
}
