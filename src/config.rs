//! Configuration for the audit tool
//!
//! Configuration is loaded in order of precedence:
//! 1. Environment variables (highest priority)
//! 2. Config file (~/.config/huelint/config.toml)
//! 3. Built-in defaults (lowest priority)
//!
//! The WCAG threshold table and color-blindness threshold live here as
//! explicit data, so the engine stays a pure function of what it's handed.

use crate::audit::Level;
use crate::contrast::{Category, RequirementTable, Thresholds};
use crate::report::ReportFormat;
use serde::Deserialize;
use std::path::PathBuf;

/// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// ─────────────────────────────────────────────────────────────────────────────
// Application Configuration
// ─────────────────────────────────────────────────────────────────────────────

/// Application configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Conformance level the summary and exit code enforce
    pub level: Level,

    /// Report output settings
    pub report: ReportConfig,

    /// Color-blindness screening settings
    pub colorblind: ColorBlindConfig,

    /// WCAG minimum-ratio table (overridable per category)
    pub thresholds: RequirementTable,

    /// Logging configuration
    pub logging: LoggingConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            level: Level::Aa,
            report: ReportConfig::default(),
            colorblind: ColorBlindConfig::default(),
            thresholds: RequirementTable::default(),
            logging: LoggingConfig::default(),
        }
    }
}

/// Report output settings
#[derive(Debug, Clone)]
pub struct ReportConfig {
    /// Default output format when --format is not given
    pub format: ReportFormat,
    /// Directory for report files written with --out
    pub dir: PathBuf,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            format: ReportFormat::Console,
            dir: PathBuf::from("./reports"),
        }
    }
}

/// Color-blindness screening settings
#[derive(Debug, Clone)]
pub struct ColorBlindConfig {
    pub enabled: bool,
    /// Pairs whose separation ratio falls below this are flagged.
    /// The 0.3 default is a screening heuristic, not a published standard.
    pub threshold: f64,
}

impl Default for ColorBlindConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            threshold: 0.3,
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Logging Configuration
// ─────────────────────────────────────────────────────────────────────────────

/// Log file rotation strategy
#[derive(Debug, Clone, Default, PartialEq)]
pub enum LogRotation {
    /// Rotate log files hourly
    Hourly,
    /// Rotate log files daily (default)
    #[default]
    Daily,
    /// Never rotate - single log file
    Never,
}

impl LogRotation {
    /// Parse rotation string from config
    pub fn from_str(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "hourly" => Self::Hourly,
            "daily" => Self::Daily,
            "never" => Self::Never,
            _ => Self::Daily, // Default to daily for unknown values
        }
    }

    /// Convert to string for TOML serialization
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Hourly => "hourly",
            Self::Daily => "daily",
            Self::Never => "never",
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Log level: trace, debug, info, warn, error
    pub level: String,
    /// Enable file logging (in addition to stderr)
    pub file_enabled: bool,
    /// Directory for log files
    pub file_dir: PathBuf,
    /// Log file rotation strategy
    pub file_rotation: LogRotation,
    /// Prefix for log file names (e.g., "huelint" -> "huelint.2024-01-15.log")
    pub file_prefix: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            file_enabled: false, // Opt-in feature
            file_dir: PathBuf::from("./logs"),
            file_rotation: LogRotation::Daily,
            file_prefix: "huelint".to_string(),
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// File Configuration (deserialization layer)
// ─────────────────────────────────────────────────────────────────────────────

/// Config file structure (subset of Config that makes sense to persist)
#[derive(Debug, Deserialize, Default)]
pub(crate) struct FileConfig {
    pub level: Option<String>,

    /// Optional [report] section
    pub report: Option<FileReport>,

    /// Optional [colorblind] section
    pub colorblind: Option<FileColorBlind>,

    /// Optional [thresholds.*] sections
    pub thresholds: Option<FileThresholds>,

    /// Optional [logging] section
    pub logging: Option<FileLogging>,
}

#[derive(Debug, Deserialize, Default)]
pub(crate) struct FileReport {
    pub format: Option<String>,
    pub dir: Option<String>,
}

#[derive(Debug, Deserialize, Default)]
pub(crate) struct FileColorBlind {
    pub enabled: Option<bool>,
    pub threshold: Option<f64>,
}

#[derive(Debug, Deserialize, Default)]
pub(crate) struct FileThresholds {
    pub normal_text: Option<FileThresholdEntry>,
    pub large_text: Option<FileThresholdEntry>,
    pub ui_components: Option<FileThresholdEntry>,
    pub graphical_objects: Option<FileThresholdEntry>,
}

#[derive(Debug, Deserialize, Default)]
pub(crate) struct FileThresholdEntry {
    pub aa: Option<f64>,
    pub aaa: Option<f64>,
}

#[derive(Debug, Deserialize, Default)]
pub(crate) struct FileLogging {
    pub level: Option<String>,
    pub file_enabled: Option<bool>,
    pub file_dir: Option<String>,
    pub file_rotation: Option<String>,
    pub file_prefix: Option<String>,
}

// ─────────────────────────────────────────────────────────────────────────────
// Configuration Loading
// ─────────────────────────────────────────────────────────────────────────────

impl Config {
    /// Get the config file path: ~/.config/huelint/config.toml
    /// Uses Unix-style ~/.config on all platforms for consistency
    pub fn config_path() -> Option<PathBuf> {
        dirs::home_dir().map(|p| p.join(".config").join("huelint").join("config.toml"))
    }

    /// Create config file with defaults if it doesn't exist
    /// Called during startup to help users discover configuration options
    pub fn ensure_config_exists() {
        let Some(path) = Self::config_path() else {
            return;
        };

        // Don't overwrite existing config
        if path.exists() {
            return;
        }

        // Create parent directory
        if let Some(parent) = path.parent() {
            if std::fs::create_dir_all(parent).is_err() {
                return; // Silently fail - config is optional
            }
        }

        // Use Config::default().to_toml() as single source of truth
        let template = Self::default().to_toml();

        // Write config (ignore errors - config is optional)
        let _ = std::fs::write(&path, template);
    }

    /// Load file config if it exists
    ///
    /// A config file that exists but cannot be parsed fails fast with a
    /// clear error instead of silently falling back to defaults while the
    /// user debugs the wrong thing.
    fn load_file_config() -> FileConfig {
        let Some(path) = Self::config_path() else {
            return FileConfig::default();
        };

        match std::fs::read_to_string(&path) {
            Ok(contents) => match toml::from_str(&contents) {
                Ok(config) => config,
                Err(e) => {
                    eprintln!(
                        "\n╔══════════════════════════════════════════════════════════════╗"
                    );
                    eprintln!("║  CONFIG ERROR - Failed to parse configuration file          ║");
                    eprintln!(
                        "╚══════════════════════════════════════════════════════════════╝\n"
                    );
                    eprintln!("  File: {}\n", path.display());
                    eprintln!("  Error: {}\n", e);
                    eprintln!("  To reset, delete the file and rerun huelint.\n");
                    std::process::exit(1);
                }
            },
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                // Config file doesn't exist - use defaults
                FileConfig::default()
            }
            Err(e) => {
                eprintln!("\n╔══════════════════════════════════════════════════════════════╗");
                eprintln!("║  CONFIG ERROR - Cannot read configuration file              ║");
                eprintln!("╚══════════════════════════════════════════════════════════════╝\n");
                eprintln!("  File: {}\n", path.display());
                eprintln!("  Error: {}\n", e);
                std::process::exit(1);
            }
        }
    }

    /// Load configuration: env vars > file > defaults
    pub fn from_env() -> Self {
        let file = Self::load_file_config();
        Self::from_file_config(file)
    }

    /// Apply precedence over a parsed file config (separated for tests)
    fn from_file_config(file: FileConfig) -> Self {
        // Level: env > file > default
        let level = std::env::var("HUELINT_LEVEL")
            .ok()
            .or(file.level)
            .map(|s| Level::from_str(&s))
            .unwrap_or_default();

        let file_report = file.report.unwrap_or_default();
        let format = std::env::var("HUELINT_FORMAT")
            .ok()
            .or(file_report.format)
            .map(|s| ReportFormat::from_str(&s))
            .unwrap_or_default();
        let dir = std::env::var("HUELINT_REPORT_DIR")
            .ok()
            .or(file_report.dir)
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from("./reports"));

        let file_cb = file.colorblind.unwrap_or_default();
        let colorblind = ColorBlindConfig {
            enabled: file_cb.enabled.unwrap_or(true),
            threshold: file_cb.threshold.unwrap_or(0.3),
        };

        let thresholds = Self::thresholds_from_file(file.thresholds);

        let file_logging = file.logging.unwrap_or_default();
        let logging = LoggingConfig {
            level: std::env::var("HUELINT_LOG_LEVEL")
                .ok()
                .or(file_logging.level)
                .unwrap_or_else(|| "info".to_string()),
            file_enabled: file_logging.file_enabled.unwrap_or(false),
            file_dir: file_logging
                .file_dir
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from("./logs")),
            file_rotation: file_logging
                .file_rotation
                .map(|s| LogRotation::from_str(&s))
                .unwrap_or_default(),
            file_prefix: file_logging
                .file_prefix
                .unwrap_or_else(|| "huelint".to_string()),
        };

        Self {
            level,
            report: ReportConfig { format, dir },
            colorblind,
            thresholds,
            logging,
        }
    }

    /// Merge per-category overrides into the default WCAG table.
    /// A partially-specified entry keeps the default for the other tier.
    fn thresholds_from_file(file: Option<FileThresholds>) -> RequirementTable {
        let mut table = RequirementTable::default();
        let Some(file) = file else {
            return table;
        };

        let entries = [
            (Category::NormalText, file.normal_text),
            (Category::LargeText, file.large_text),
            (Category::UiComponents, file.ui_components),
            (Category::GraphicalObjects, file.graphical_objects),
        ];

        for (category, entry) in entries {
            if let Some(entry) = entry {
                // Defaults exist for every category, lookup cannot fail here
                let current = table.get(category).expect("default table is complete");
                table.set(
                    category,
                    Thresholds {
                        aa: entry.aa.unwrap_or(current.aa),
                        aaa: entry.aaa.unwrap_or(current.aaa),
                    },
                );
            }
        }

        table
    }

    /// Serialize to TOML - the single source of truth for the config
    /// file template
    pub fn to_toml(&self) -> String {
        let mut out = String::new();

        out.push_str("# huelint configuration\n");
        out.push_str("# Delete this file and rerun huelint to regenerate defaults.\n\n");

        out.push_str("# Conformance level enforced by the summary and exit code: \"aa\" or \"aaa\"\n");
        out.push_str(&format!("level = \"{}\"\n\n", self.level.as_str()));

        out.push_str("[report]\n");
        out.push_str("# Default output format: console, markdown, html, json\n");
        out.push_str(&format!("format = \"{}\"\n", self.report.format.as_str()));
        out.push_str("# Directory for report files written with --out\n");
        out.push_str(&format!("dir = \"{}\"\n\n", self.report.dir.display()));

        out.push_str("[colorblind]\n");
        out.push_str(&format!("enabled = {}\n", self.colorblind.enabled));
        out.push_str("# Separation ratios below this flag a pair. Screening heuristic,\n");
        out.push_str("# not a published standard - tune with care.\n");
        out.push_str(&format!("threshold = {}\n\n", self.colorblind.threshold));

        out.push_str("# WCAG 2.1 minimum ratios. Override per category if your policy differs.\n");
        let sections = [
            (Category::NormalText, "thresholds.normal_text"),
            (Category::LargeText, "thresholds.large_text"),
            (Category::UiComponents, "thresholds.ui_components"),
            (Category::GraphicalObjects, "thresholds.graphical_objects"),
        ];
        for (category, section) in sections {
            // Defaults exist for every category, lookup cannot fail here
            let t = self.thresholds.get(category).expect("table is complete");
            out.push_str(&format!("[{}]\n", section));
            out.push_str(&format!("aa = {}\n", t.aa));
            out.push_str(&format!("aaa = {}\n\n", t.aaa));
        }

        out.push_str("[logging]\n");
        out.push_str("# Log level: trace, debug, info, warn, error\n");
        out.push_str(&format!("level = \"{}\"\n", self.logging.level));
        out.push_str("# Write JSON logs to rotating files in addition to stderr\n");
        out.push_str(&format!("file_enabled = {}\n", self.logging.file_enabled));
        out.push_str(&format!(
            "file_dir = \"{}\"\n",
            self.logging.file_dir.display()
        ));
        out.push_str("# Rotation: hourly, daily, never\n");
        out.push_str(&format!(
            "file_rotation = \"{}\"\n",
            self.logging.file_rotation.as_str()
        ));
        out.push_str(&format!(
            "file_prefix = \"{}\"\n",
            self.logging.file_prefix
        ));

        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Verify that the generated template parses back. This catches TOML
    /// syntax errors in to_toml before they reach a user's config file.
    #[test]
    fn test_config_roundtrip_default() {
        let config = Config::default();
        let toml_str = config.to_toml();

        let parsed: Result<FileConfig, _> = toml::from_str(&toml_str);
        assert!(
            parsed.is_ok(),
            "Default config should round-trip.\nTOML:\n{}\nError: {:?}",
            toml_str,
            parsed.err()
        );
    }

    #[test]
    fn test_roundtrip_preserves_values() {
        let toml_str = Config::default().to_toml();
        let file: FileConfig = toml::from_str(&toml_str).unwrap();
        let config = Config::from_file_config(file);

        assert_eq!(config.level, Level::Aa);
        assert_eq!(config.colorblind.threshold, 0.3);
        assert_eq!(
            config.thresholds.get(Category::NormalText).unwrap(),
            Thresholds { aa: 4.5, aaa: 7.0 }
        );
        assert_eq!(config.logging.file_rotation, LogRotation::Daily);
    }

    #[test]
    fn test_partial_threshold_override() {
        let file: FileConfig = toml::from_str(
            r#"
            [thresholds.normal_text]
            aa = 5.0
            "#,
        )
        .unwrap();
        let config = Config::from_file_config(file);

        let t = config.thresholds.get(Category::NormalText).unwrap();
        assert_eq!(t.aa, 5.0);
        // aaa keeps its default when not overridden
        assert_eq!(t.aaa, 7.0);
        // Other categories untouched
        assert_eq!(
            config.thresholds.get(Category::LargeText).unwrap(),
            Thresholds { aa: 3.0, aaa: 4.5 }
        );
    }

    #[test]
    fn test_level_parsing() {
        let file: FileConfig = toml::from_str(r#"level = "aaa""#).unwrap();
        let config = Config::from_file_config(file);
        assert_eq!(config.level, Level::Aaa);
    }

    #[test]
    fn test_empty_file_is_defaults() {
        let file: FileConfig = toml::from_str("").unwrap();
        let config = Config::from_file_config(file);
        assert_eq!(config.level, Level::Aa);
        assert!(config.colorblind.enabled);
        assert_eq!(config.report.format, ReportFormat::Console);
    }
}
