//! tictac - tic-tac-toe against a computer that never loses.

#![warn(missing_docs)]

use anyhow::{Context, Result};
use clap::Parser;
use std::io::Write;
use tictac::{
    AppConfig,
    cli::{Cli, Command},
    logging::init_stderr_tracing,
    simulate, tui,
};
use tracing::info;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = AppConfig::load(&cli.config)
        .with_context(|| format!("Failed to load {}", cli.config.display()))?;

    match cli.command.unwrap_or(Command::Play) {
        Command::Play => tui::run_tui(&config),
        Command::Simulate {
            player,
            opponent,
            games,
            json,
        } => {
            init_stderr_tracing(config.log_filter());
            info!(?player, ?opponent, games, "Starting simulation");

            let stdout = std::io::stdout();
            let mut out = stdout.lock();
            simulate::run(player, opponent, games, json, &mut out)?;
            out.flush()?;
            Ok(())
        }
    }
}
