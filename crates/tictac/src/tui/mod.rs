//! Terminal UI for playing against the computer.

mod app;
mod input;
mod ui;

pub use app::App;

use anyhow::{Context, Result};
use crossterm::{
    cursor::Show,
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{self, Stdout, Write};
use tracing::{error, info, instrument, warn};

use crate::config::AppConfig;
use crate::logging::init_file_tracing;

type Term = Terminal<CrosstermBackend<Stdout>>;

/// Leaves raw mode and the alternate screen when dropped.
struct TerminalGuard<W: Write> {
    out: W,
}

impl<W: Write> TerminalGuard<W> {
    fn new(out: W) -> Self {
        Self { out }
    }
}

impl<W: Write> Drop for TerminalGuard<W> {
    fn drop(&mut self) {
        if let Err(e) = restore_terminal(&mut self.out) {
            warn!(error = %e, "Failed to restore terminal");
        }
    }
}

fn restore_terminal(out: &mut impl Write) -> io::Result<()> {
    disable_raw_mode()?;
    execute!(out, LeaveAlternateScreen, Show)
}

/// Runs the interactive game until the user quits.
pub fn run_tui(config: &AppConfig) -> Result<()> {
    // Setup logging to file to avoid interfering with TUI
    init_file_tracing(config.log_file(), config.log_filter())?;
    info!("Starting tictac TUI");

    enable_raw_mode().context("Failed to enable raw mode")?;
    let guard = TerminalGuard::new(io::stdout());

    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).context("Failed to enter alternate screen")?;
    let mut terminal = Terminal::new(CrosstermBackend::new(stdout))?;

    let mut app = App::new(config);
    let result = run_loop(&mut terminal, &mut app, config);
    drop(guard);

    if let Err(e) = &result {
        error!(error = %e, "TUI exited with error");
    } else {
        info!("TUI exited");
    }
    result
}

#[instrument(skip_all)]
fn run_loop(terminal: &mut Term, app: &mut App, config: &AppConfig) -> Result<()> {
    while !*app.should_quit() {
        terminal.draw(|frame| ui::draw(frame, app))?;

        if event::poll(config.tick())? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    app.handle_key(key.code);
                }
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const LEAVE_ALTERNATE_SCREEN: &[u8] = b"\x1b[?1049l";
    const SHOW_CURSOR: &[u8] = b"\x1b[?25h";

    fn contains(haystack: &[u8], needle: &[u8]) -> bool {
        haystack.windows(needle.len()).any(|w| w == needle)
    }

    #[test]
    fn test_guard_restores_on_early_return() {
        fn fails_after_setup(out: &mut Vec<u8>) -> Result<()> {
            let _guard = TerminalGuard::new(out);
            anyhow::bail!("terminal setup failed")
        }

        let mut out = Vec::new();
        assert!(fails_after_setup(&mut out).is_err());
        assert!(contains(&out, LEAVE_ALTERNATE_SCREEN));
        assert!(contains(&out, SHOW_CURSOR));
    }

    #[test]
    fn test_restore_writes_leave_sequences() {
        let mut out = Vec::new();
        restore_terminal(&mut out).unwrap();
        assert!(contains(&out, LEAVE_ALTERNATE_SCREEN));
        assert!(contains(&out, SHOW_CURSOR));
    }
}
