//! Terminal front end and command-line tools for `tictac_core`.
//!
//! - [`tui`]: the interactive game
//! - [`simulate`]: headless strategy-versus-strategy runs
//! - [`config`] and [`logging`]: ambient setup shared by both

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod cli;
pub mod config;
pub mod logging;
pub mod simulate;
pub mod tui;

pub use config::{AppConfig, ConfigError};
