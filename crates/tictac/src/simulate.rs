//! Headless self-play from the command line.

use anyhow::{Context, Result};
use derive_getters::Getters;
use std::io::Write;
use tictac_core::{Outcome, Record, play_out};
use tracing::{info, instrument};

use crate::cli::StrategyArg;

/// Tally of finished games.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Getters)]
pub struct Summary {
    player_wins: u32,
    opponent_wins: u32,
    draws: u32,
}

impl Summary {
    fn record(&mut self, outcome: Outcome) {
        match outcome {
            Outcome::PlayerWin => self.player_wins += 1,
            Outcome::OpponentWin => self.opponent_wins += 1,
            Outcome::Draw => self.draws += 1,
            Outcome::InProgress => {}
        }
    }
}

/// Plays `games` games and writes each result to `out`.
///
/// Text mode prints the final board and outcome of every game followed by
/// a tally; JSON mode prints one [`Record`] per line and nothing else.
#[instrument(skip(out))]
pub fn run(
    player: StrategyArg,
    opponent: StrategyArg,
    games: u32,
    json: bool,
    out: &mut impl Write,
) -> Result<Summary> {
    let mut player_strategy = player.build();
    let mut opponent_strategy = opponent.build();
    let mut summary = Summary::default();

    for game in 1..=games {
        let record = play_out(&mut *player_strategy, &mut *opponent_strategy)
            .with_context(|| format!("Game {} could not be completed", game))?;
        summary.record(record.outcome);

        if json {
            write_json(out, &record)?;
        } else {
            write_text(out, game, &record)?;
        }
    }

    if !json {
        writeln!(
            out,
            "X ({}) wins: {}, O ({}) wins: {}, draws: {}",
            player_strategy.name(),
            summary.player_wins,
            opponent_strategy.name(),
            summary.opponent_wins,
            summary.draws
        )?;
    }

    info!(?summary, "Simulation finished");
    Ok(summary)
}

fn write_json(out: &mut impl Write, record: &Record) -> Result<()> {
    serde_json::to_writer(&mut *out, record).context("Failed to serialize game record")?;
    writeln!(out)?;
    Ok(())
}

fn write_text(out: &mut impl Write, game: u32, record: &Record) -> Result<()> {
    let moves: Vec<String> = record.moves.iter().map(ToString::to_string).collect();
    writeln!(out, "Game {}: {}", game, record.outcome)?;
    writeln!(out, "Moves: {}", moves.join(" "))?;
    writeln!(out, "{}", record.board)?;
    Ok(())
}
