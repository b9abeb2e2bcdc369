//! CLI structure and command definitions.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use sawmill_core::{config, log};
use sawmill_types::LogLevel;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "sawmill")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Validate and smoke-test rotating log configurations", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Validate a logging configuration and show what it resolves to
    Check {
        /// Path to the YAML configuration
        config: PathBuf,
    },

    /// Initialize the logger from a configuration and emit test entries
    Emit {
        /// Path to the YAML configuration
        config: PathBuf,

        /// Rounds of entries to emit, one entry per severity per round
        #[arg(short, long, default_value_t = 1)]
        count: u32,
    },
}

impl Cli {
    pub fn execute(self) -> Result<()> {
        match self.command {
            Commands::Check { config } => check(&config),
            Commands::Emit { config, count } => emit(&config, count),
        }
    }
}

fn check(path: &Path) -> Result<()> {
    init_diagnostics();

    let config = config::load(path)
        .with_context(|| format!("configuration '{}' is not usable", path.display()))?;

    println!("configuration ok: {}", path.display());
    println!("  file:      {}", config.filename.display());
    println!("  rotate at: {} MB", config.max_size);
    println!("  backups:   {}", config.max_backups);
    println!("  max age:   {} days", config.max_age);
    println!("  compress:  {}", config.compress);
    println!("  threshold: {}", config.level());

    // Surface the lenient fallback so an operator's typo is visible.
    if !config.log_level.is_empty() && config.log_level.parse::<LogLevel>().is_err() {
        println!(
            "  note: loglevel '{}' is not recognized and falls back to info",
            config.log_level
        );
    }

    Ok(())
}

fn emit(path: &Path, count: u32) -> Result<()> {
    let config = config::load(path)
        .with_context(|| format!("configuration '{}' is not usable", path.display()))?;

    // Holding the guard until we return flushes everything emitted below.
    let _guard = log::init(&config).context("logger initialization failed")?;

    for round in 0..count {
        tracing::debug!(round, "debug entry");
        tracing::info!(round, "info entry");
        tracing::warn!(round, "warn entry");
        tracing::error!(round, "error entry");
    }

    println!(
        "emitted {} round(s) to {}",
        count,
        config.filename.display()
    );
    Ok(())
}

/// Stderr diagnostics for commands that do not install the configured
/// pipeline themselves.
fn init_diagnostics() {
    use tracing_subscriber::{fmt, EnvFilter};

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("sawmill=info"));

    let _ = fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}
