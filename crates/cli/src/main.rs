use std::{
    fs::{self, OpenOptions},
    path::PathBuf,
    sync::{Arc, Mutex},
};

use anyhow::{Context, Result};
use clap::Parser;
use tracing::warn;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};
use trackchain_types::MatchMode;
use trackchain_util::{UserPreferences, default_log_path, load_config};

mod commands;

use commands::{Cli, Command};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let runs_tui = cli.command.is_none();
    init_tracing(runs_tui)?;

    let mut config = load_config(cli.config.as_deref()).context("load configuration")?;
    if cli.substring_match {
        config.route_matching = MatchMode::Substring;
    }

    let Some(command) = cli.command else {
        let preferences = UserPreferences::new().unwrap_or_else(|error| {
            warn!(error = %error, "preferences unavailable; changes will not be saved");
            UserPreferences::ephemeral()
        });
        return trackchain_tui::run(config, Arc::new(preferences)).await;
    };

    let report = match command {
        Command::Nav(args) => commands::nav(&config, &args)?,
        Command::Classify(args) => commands::classify(&config, &args)?,
        Command::Validate(args) => commands::validate(&config, &args)?,
    };
    println!("{report}");
    Ok(())
}

/// Installs the global subscriber. The TUI owns the terminal, so it logs to
/// a file; headless commands log to stderr and keep stdout for JSON.
fn init_tracing(to_file: bool) -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    if !to_file {
        let _ = tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().with_writer(std::io::stderr))
            .try_init();
        return Ok(());
    }

    let path: PathBuf = default_log_path();
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).with_context(|| format!("create log directory {}", parent.display()))?;
    }
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .with_context(|| format!("open log file {}", path.display()))?;
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_ansi(false).with_writer(Mutex::new(file)))
        .try_init();
    Ok(())
}
