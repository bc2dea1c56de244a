// CLI module - command-line argument parsing and handlers
//
// Subcommands:
// - check [THEME]: audit a theme (the default command)
// - themes: list bundled and user themes
// - config --show/--reset/--edit/--update/--path: configuration management

use crate::config::{Config, VERSION};
use crate::theme;
use clap::{Parser, Subcommand};
use std::io::Write;
use std::path::PathBuf;
use std::process::Command;

/// huelint - WCAG contrast auditor for VS Code color themes
#[derive(Parser)]
#[command(name = "huelint")]
#[command(version = VERSION)]
#[command(about = "WCAG contrast auditor for VS Code color themes", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Audit a theme's contrast (default command)
    Check {
        /// Theme name or path to a theme JSON file
        theme: Option<String>,

        /// Output format: console, markdown, html, json
        #[arg(long)]
        format: Option<String>,

        /// Write the report to a file instead of stdout
        #[arg(long)]
        out: Option<PathBuf>,

        /// Conformance level to enforce: aa or aaa
        #[arg(long)]
        level: Option<String>,

        /// Skip the color-blindness separation checks
        #[arg(long)]
        no_colorblind: bool,
    },

    /// List available themes
    Themes,

    /// Manage configuration
    Config {
        /// Show effective configuration
        #[arg(long)]
        show: bool,

        /// Reset config file to defaults
        #[arg(long)]
        reset: bool,

        /// Open config file in $EDITOR
        #[arg(long)]
        edit: bool,

        /// Update config with new defaults (preserves user values)
        #[arg(long)]
        update: bool,

        /// Show config file path
        #[arg(long)]
        path: bool,
    },
}

/// What main should do after argument handling
pub enum CliAction {
    /// A management command ran to completion; exit
    Handled,
    /// Run an audit with these arguments
    Check(CheckArgs),
}

/// Arguments for the audit run
#[derive(Default)]
pub struct CheckArgs {
    pub theme: Option<String>,
    pub format: Option<String>,
    pub out: Option<PathBuf>,
    pub level: Option<String>,
    pub no_colorblind: bool,
}

/// Parse arguments and handle management commands in place
pub fn handle_cli() -> CliAction {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Check {
            theme,
            format,
            out,
            level,
            no_colorblind,
        }) => CliAction::Check(CheckArgs {
            theme,
            format,
            out,
            level,
            no_colorblind,
        }),
        Some(Commands::Themes) => {
            handle_themes();
            CliAction::Handled
        }
        Some(Commands::Config {
            show,
            reset,
            edit,
            update,
            path,
        }) => {
            if path {
                handle_config_path();
            } else if show {
                handle_config_show();
            } else if reset {
                handle_config_reset();
            } else if edit {
                handle_config_edit();
            } else if update {
                handle_config_update();
            } else {
                // No flag provided, show help
                println!("Usage: huelint config [--show|--reset|--edit|--update|--path]");
                println!();
                println!("Options:");
                println!("  --show    Display effective configuration");
                println!("  --reset   Reset config file to defaults");
                println!("  --edit    Open config file in $EDITOR");
                println!("  --update  Update config with new defaults (preserves user values)");
                println!("  --path    Show config file path");
            }
            CliAction::Handled
        }
        // No subcommand: audit the default theme
        None => CliAction::Check(CheckArgs::default()),
    }
}

fn handle_themes() {
    let bundled = theme::bundled::list_bundled_themes();

    println!("Available themes:");
    for name in theme::list_available() {
        if bundled.iter().any(|b| b.eq_ignore_ascii_case(&name)) {
            println!("  {} (bundled)", name);
        } else {
            println!("  {}", name);
        }
    }
    if let Some(dir) = theme::themes_dir() {
        println!();
        println!("User themes directory: {}", dir.display());
    }
}

fn handle_config_path() {
    match Config::config_path() {
        Some(path) => println!("{}", path.display()),
        None => {
            eprintln!("Error: Could not determine config path");
            std::process::exit(1);
        }
    }
}

fn handle_config_show() {
    let config = Config::from_env();

    println!("# Effective configuration (env > file > defaults)");
    println!();
    println!("level = {:?}", config.level.as_str());
    println!();
    println!("[report]");
    println!("format = {:?}", config.report.format.as_str());
    println!("dir = {:?}", config.report.dir.display().to_string());
    println!();
    println!("[colorblind]");
    println!("enabled = {}", config.colorblind.enabled);
    println!("threshold = {}", config.colorblind.threshold);
    println!();
    println!("[logging]");
    println!("level = {:?}", config.logging.level);
    println!("file_enabled = {}", config.logging.file_enabled);

    // Show source info
    println!();
    if let Some(path) = Config::config_path() {
        if path.exists() {
            println!("# Source: {}", path.display());
        } else {
            println!("# Source: defaults (no config file)");
        }
    }
}

fn handle_config_reset() {
    let Some(path) = Config::config_path() else {
        eprintln!("Error: Could not determine config path");
        std::process::exit(1);
    };

    // Confirm if file exists
    if path.exists() {
        eprint!(
            "Config file exists at {}. Overwrite? [y/N] ",
            path.display()
        );
        std::io::stderr().flush().unwrap();

        let mut input = String::new();
        std::io::stdin().read_line(&mut input).unwrap();

        if !input.trim().eq_ignore_ascii_case("y") {
            println!("Aborted.");
            return;
        }
    }

    // Create parent directory
    if let Some(parent) = path.parent() {
        if let Err(e) = std::fs::create_dir_all(parent) {
            eprintln!("Error creating directory: {}", e);
            std::process::exit(1);
        }
    }

    // Write the default config (using Config's single source of truth)
    if let Err(e) = std::fs::write(&path, Config::default().to_toml()) {
        eprintln!("Error writing config: {}", e);
        std::process::exit(1);
    }

    println!("Config reset to defaults: {}", path.display());
}

fn handle_config_edit() {
    let Some(path) = Config::config_path() else {
        eprintln!("Error: Could not determine config path");
        std::process::exit(1);
    };

    // Ensure config exists
    if !path.exists() {
        Config::ensure_config_exists();
        println!("Created new config file: {}", path.display());
    }

    // Get editor from environment
    let editor = std::env::var("EDITOR")
        .or_else(|_| std::env::var("VISUAL"))
        .unwrap_or_else(|_| {
            // Platform-specific fallback
            if cfg!(windows) {
                "notepad".to_string()
            } else {
                "nano".to_string()
            }
        });

    println!("Opening {} with {}", path.display(), editor);

    let status = Command::new(&editor).arg(&path).status();

    match status {
        Ok(s) if s.success() => {}
        Ok(s) => {
            eprintln!("Editor exited with status: {}", s);
            std::process::exit(1);
        }
        Err(e) => {
            eprintln!("Failed to launch editor '{}': {}", editor, e);
            eprintln!("Set $EDITOR environment variable to your preferred editor");
            std::process::exit(1);
        }
    }
}

fn handle_config_update() {
    let Some(path) = Config::config_path() else {
        eprintln!("Error: Could not determine config path");
        std::process::exit(1);
    };

    if !path.exists() {
        // No existing config, just create default
        Config::ensure_config_exists();
        println!("Created new config file: {}", path.display());
        return;
    }

    // Read existing config and generate updated TOML preserving user values
    let existing = Config::from_env();
    let updated = existing.to_toml();

    // Backup existing
    let backup_path = path.with_extension("toml.bak");
    if let Err(e) = std::fs::copy(&path, &backup_path) {
        eprintln!("Warning: Could not create backup: {}", e);
    } else {
        println!("Backup created: {}", backup_path.display());
    }

    // Write updated config
    if let Err(e) = std::fs::write(&path, updated) {
        eprintln!("Error writing config: {}", e);
        std::process::exit(1);
    }

    println!("Config updated with latest structure: {}", path.display());
    println!("Your values have been preserved.");
}
