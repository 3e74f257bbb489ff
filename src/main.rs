//! Time travel tic-tac-toe - CLI entry point.

use anyhow::{Context, Result};
use clap::Parser;
use std::sync::Arc;
use timetravel_tictactoe::{AppConfig, Cli, Command, SortOrder, format_text, replay_view, run_tui};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = AppConfig::load(cli.config.as_deref())?;
    let command = cli.command.unwrap_or(Command::Play);
    if command.logs_to_file() {
        init_logging(&config)?;
    }

    match command {
        Command::Play => run_tui(*config.sort_order()),
        Command::Replay {
            moves,
            jump,
            descending,
            json,
        } => {
            let config = if descending {
                config.with_sort_order(SortOrder::Descending)
            } else {
                config
            };
            let (game, view) = replay_view(&moves, jump, *config.sort_order());
            if json {
                println!("{}", serde_json::to_string_pretty(&view)?);
            } else {
                print!("{}", format_text(&game, &view));
            }
            Ok(())
        }
    }
}

/// Sends logs to the configured file so they stay off the terminal.
fn init_logging(config: &AppConfig) -> Result<()> {
    let log_file = std::fs::File::create(config.log_file()).with_context(|| {
        format!("Failed to create log file {}", config.log_file().display())
    })?;

    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config.log_filter())),
        )
        .with_writer(Arc::new(log_file))
        .with_ansi(false)
        .try_init();

    info!(log_file = %config.log_file().display(), "Logging initialized");
    Ok(())
}
