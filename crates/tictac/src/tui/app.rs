//! Application state and key handling.

use crossterm::event::KeyCode;
use derive_getters::Getters;
use tictac_core::{Cell, Game, GameEvent, Mark, Move, Outcome};
use tracing::{debug, instrument};

use super::input::{digit_cell, move_cursor};
use crate::config::AppConfig;

/// Main application state.
#[derive(Debug, Getters)]
pub struct App {
    game: Game,
    cursor: Move,
    status_message: String,
    should_quit: bool,
    player_symbol: char,
    opponent_symbol: char,
}

impl App {
    /// Creates the app with a fresh game against the minimax opponent.
    pub fn new(config: &AppConfig) -> Self {
        Self::with_game(Game::new(), config)
    }

    /// Creates the app around an existing game.
    pub fn with_game(game: Game, config: &AppConfig) -> Self {
        let mut app = Self {
            game,
            cursor: Move::ALL[4],
            status_message: String::new(),
            should_quit: false,
            player_symbol: *config.player_symbol(),
            opponent_symbol: *config.opponent_symbol(),
        };
        app.status_message = app.your_move();
        app
    }

    /// Window title naming both sides.
    pub fn title(&self) -> String {
        format!(
            "Tic-Tac-Toe - You ({}) vs Computer ({})",
            self.player_symbol, self.opponent_symbol
        )
    }

    /// Character drawn for a cell.
    pub fn symbol(&self, cell: Cell) -> char {
        match cell.mark() {
            Some(Mark::Player) => self.player_symbol,
            Some(Mark::Opponent) => self.opponent_symbol,
            None => ' ',
        }
    }

    /// Handles one key press.
    #[instrument(skip(self))]
    pub fn handle_key(&mut self, key: KeyCode) {
        match key {
            KeyCode::Char('q') | KeyCode::Esc => {
                debug!("Quit requested");
                self.should_quit = true;
            }
            KeyCode::Char('r') => self.restart(),
            KeyCode::Enter | KeyCode::Char(' ') => self.select(self.cursor),
            KeyCode::Char(c) => {
                if let Some(at) = digit_cell(c) {
                    self.cursor = at;
                    self.select(at);
                }
            }
            arrow => self.cursor = move_cursor(self.cursor, arrow),
        }
    }

    /// Starts a new game.
    pub fn restart(&mut self) {
        self.game.reset();
        self.apply_events();
    }

    fn select(&mut self, at: Move) {
        if self.game.on_cell_selected(at.row(), at.col()).is_some() {
            self.apply_events();
        }
    }

    fn apply_events(&mut self) {
        for event in self.game.drain_events() {
            debug!(?event, "Handling game event");
            self.status_message = match event {
                GameEvent::MarkPlaced {
                    mark: Mark::Opponent,
                    at,
                } => format!("Computer played {}. {}", at, self.your_move()),
                GameEvent::MarkPlaced { .. } => continue,
                GameEvent::GameOver { outcome } => Self::game_over(outcome),
                GameEvent::Reset => format!("New game. {}", self.your_move()),
            };
        }
    }

    fn your_move(&self) -> String {
        format!("Your move ({}).", self.player_symbol)
    }

    fn game_over(outcome: Outcome) -> String {
        let verdict = match outcome {
            Outcome::PlayerWin => "You win!",
            Outcome::OpponentWin => "The computer wins!",
            Outcome::Draw => "It's a draw.",
            Outcome::InProgress => "Game stopped.",
        };
        format!("{} Press 'r' for a new game or 'q' to quit.", verdict)
    }
}
