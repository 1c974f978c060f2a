//! Tic-tac-toe against an exhaustive minimax opponent.
//!
//! # Architecture
//!
//! - **Board model**: [`Board`], [`GameState`] and the pure [`rules`]
//! - **Move selector**: [`find_best_move`] backed by full-depth [`minimax`]
//! - **Controller**: [`Game`], the command/observation surface a frontend drives
//!
//! # Example
//!
//! ```
//! use tictac_core::{Game, Outcome};
//!
//! let mut game = Game::new();
//! let turn = game.attempt_move(0, 0)?;
//! assert_eq!(turn.outcome, Outcome::InProgress);
//! assert!(turn.reply.is_some());
//! # Ok::<(), tictac_core::MoveError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod board;
mod controller;
mod engine;
mod error;
mod game;
mod outcome;
mod position;
mod selfplay;
mod strategy;
mod types;

pub mod rules;

// Crate-level exports - board model
pub use board::{Board, BoardParseError};
pub use game::{GameState, GameStateError};
pub use outcome::Outcome;
pub use position::Move;
pub use types::{Cell, Mark};

// Crate-level exports - errors
pub use error::{MoveError, SearchError};

// Crate-level exports - move selection
pub use engine::{WIN_SCORE, find_best_move, find_best_reply, minimax, score_moves};
pub use strategy::{FirstEmpty, Minimax, Strategy};

// Crate-level exports - controller and self-play
pub use controller::{Game, GameEvent, Turn};
pub use selfplay::{Record, play_out};
