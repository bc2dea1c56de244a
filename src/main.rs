// huelint - WCAG contrast auditor for VS Code color themes
//
// Loads a color theme (bundled, user-installed, or a path), runs a fixed
// plan of background/foreground contrast checks through the WCAG engine,
// screens confusable semantic colors for color-blindness separation, and
// renders a report to the console or a file.
//
// Architecture:
// - contrast: pure color math (parsing, luminance, ratio, classification)
// - theme: VS Code theme JSON loading, bundled themes
// - audit: the check plan and batch runner
// - report: console/markdown/html/json presenters
// - cli/config: argument handling and TOML configuration

mod audit;
mod cli;
mod config;
mod contrast;
mod report;
mod theme;

use anyhow::{Context, Result};
use cli::CliAction;
use config::{Config, LogRotation};
use report::ReportFormat;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn main() -> Result<()> {
    // Management commands (config, themes) handle themselves and exit early
    let args = match cli::handle_cli() {
        CliAction::Handled => return Ok(()),
        CliAction::Check(args) => args,
    };

    // Ensure config template and bundled themes exist (helps discovery)
    Config::ensure_config_exists();
    theme::ensure_themes_extracted();

    let mut config = Config::from_env();

    // CLI flags take precedence over env and file
    if let Some(level) = &args.level {
        config.level = audit::Level::from_str(level);
    }
    if let Some(format) = &args.format {
        config.report.format = ReportFormat::from_str(format);
    }
    if args.no_colorblind {
        config.colorblind.enabled = false;
    }

    // The guard must be kept alive for the duration of the program so
    // buffered file logs flush on exit
    let _file_guard = init_tracing(&config);

    let input = args.theme.as_deref().unwrap_or("Dusk Ember");
    let loaded = theme::Theme::resolve(input)?;
    tracing::info!(
        "auditing {:?} ({} workbench colors, {} token rules)",
        loaded.display_name(),
        loaded.colors.len(),
        loaded.token_colors.len()
    );

    let options = audit::AuditOptions {
        level: config.level,
        table: config.thresholds.clone(),
        colorblind_enabled: config.colorblind.enabled,
        colorblind_threshold: config.colorblind.threshold,
    };
    let audit_report = audit::run(&loaded, &options);

    let rendered = report::render(&audit_report, config.report.format)?;

    match &args.out {
        Some(path) => {
            // Relative --out paths land in the configured report directory
            let path = if path.is_absolute() {
                path.clone()
            } else {
                config.report.dir.join(path)
            };
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent)
                    .with_context(|| format!("failed to create {}", parent.display()))?;
            }
            std::fs::write(&path, &rendered)
                .with_context(|| format!("failed to write report to {}", path.display()))?;
            tracing::info!("report written to {}", path.display());
        }
        None => print!("{}", rendered),
    }

    if audit_report.has_critical_failures() {
        tracing::error!(
            "{} critical pair(s) fail {} - failing the run",
            audit_report.summary.critical_failures,
            config.level
        );
        std::process::exit(1);
    }

    Ok(())
}

/// Initialize tracing: stderr fmt layer (keeps stdout clean for the
/// report) plus an optional rotating JSON file layer.
///
/// Precedence: RUST_LOG env var > config file > default "info"
fn init_tracing(config: &Config) -> Option<tracing_appender::non_blocking::WorkerGuard> {
    let default_filter = format!("huelint={}", config.logging.level);
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter.into());

    let stderr_layer = tracing_subscriber::fmt::layer().with_writer(std::io::stderr);

    if !config.logging.file_enabled {
        tracing_subscriber::registry()
            .with(filter)
            .with(stderr_layer)
            .init();
        return None;
    }

    // Create log directory; fall back to stderr-only logging on failure
    if let Err(e) = std::fs::create_dir_all(&config.logging.file_dir) {
        eprintln!(
            "Warning: Could not create log directory {:?}: {}",
            config.logging.file_dir, e
        );
        tracing_subscriber::registry()
            .with(filter)
            .with(stderr_layer)
            .init();
        return None;
    }

    // Rolling file appender based on configured rotation
    let file_appender = match config.logging.file_rotation {
        LogRotation::Hourly => {
            tracing_appender::rolling::hourly(&config.logging.file_dir, &config.logging.file_prefix)
        }
        LogRotation::Daily => {
            tracing_appender::rolling::daily(&config.logging.file_dir, &config.logging.file_prefix)
        }
        LogRotation::Never => {
            tracing_appender::rolling::never(&config.logging.file_dir, &config.logging.file_prefix)
        }
    };

    // Non-blocking writer: file writes happen in a background thread.
    // File layer uses JSON format for structured log parsing.
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    tracing_subscriber::registry()
        .with(filter)
        .with(stderr_layer)
        .with(
            tracing_subscriber::fmt::layer()
                .json()
                .with_writer(non_blocking)
                .with_ansi(false),
        )
        .init();

    Some(guard)
}
