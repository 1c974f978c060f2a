//! Command-line interface for tictac.

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use tictac_core::{FirstEmpty, Minimax, Strategy};

use crate::config::DEFAULT_CONFIG_PATH;

/// Tic-tac-toe against a computer that never loses
#[derive(Parser, Debug)]
#[command(name = "tictac")]
#[command(about = "Play tic-tac-toe against a minimax opponent", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the TOML config file
    #[arg(long, global = true, env = "TICTAC_CONFIG", default_value = DEFAULT_CONFIG_PATH)]
    pub config: PathBuf,

    /// Subcommand to run (defaults to `play`)
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Play in the terminal
    Play,

    /// Pit two strategies against each other without a UI
    Simulate {
        /// Strategy for the side that moves first (X)
        #[arg(long, value_enum, default_value_t = StrategyArg::Minimax)]
        player: StrategyArg,

        /// Strategy for the side that moves second (O)
        #[arg(long, value_enum, default_value_t = StrategyArg::Minimax)]
        opponent: StrategyArg,

        /// Number of games
        #[arg(short = 'n', long, default_value = "1")]
        games: u32,

        /// Print one JSON record per game
        #[arg(long)]
        json: bool,
    },
}

/// Strategy selectable from the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum StrategyArg {
    /// Exhaustive minimax search
    Minimax,
    /// First empty cell in reading order
    FirstEmpty,
}

impl StrategyArg {
    /// Builds the strategy.
    pub fn build(self) -> Box<dyn Strategy> {
        match self {
            StrategyArg::Minimax => Box::new(Minimax),
            StrategyArg::FirstEmpty => Box::new(FirstEmpty),
        }
    }
}
