//! Raw-mode terminal lifecycle.
//!
//! The dashboard draws into the alternate screen buffer with raw mode
//! enabled. Setup is not transactional: every step that can fail after
//! raw mode is on rolls it back before reporting, so a failed start
//! never leaves the shell in raw mode. Teardown is expected to run on
//! every exit path, error or not.

use std::io::{self, IsTerminal, Stdout};

use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::{Terminal, backend::CrosstermBackend};

use crate::Result;

/// The concrete terminal type the dashboard draws into.
pub type Tui = Terminal<CrosstermBackend<Stdout>>;

/// Switches stdout to raw mode on the alternate screen and hands back a
/// ratatui terminal for it.
///
/// # Errors
///
/// Fails when stdout is not a TTY or when the terminal rejects one of
/// the mode switches.
pub fn setup_terminal() -> Result<Tui> {
    if !io::stdout().is_terminal() {
        return Err(io::Error::other(
            "stdout is not a TTY; the dashboard needs an interactive terminal",
        )
        .into());
    }

    enable_raw_mode()?;
    rollback_raw_mode_on_failure(|| {
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        Terminal::new(CrosstermBackend::new(stdout))
    })
}

/// Runs a post-raw-mode setup step, undoing raw mode when it fails.
fn rollback_raw_mode_on_failure<T>(step: impl FnOnce() -> io::Result<T>) -> Result<T> {
    step().map_err(|e| {
        let _ = disable_raw_mode();
        e.into()
    })
}

/// Leaves the alternate screen and returns the terminal to the shell.
///
/// # Errors
///
/// Fails when any of the restore steps is rejected by the terminal.
pub fn restore_terminal(terminal: &mut Tui) -> Result<()> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::TradersError;

    #[test]
    fn io_failures_convert_to_crate_errors() {
        let err: TradersError = io::Error::other("terminal too small").into();
        assert!(matches!(err, TradersError::Io(_)));
        assert!(err.to_string().contains("terminal too small"));
    }

    #[test]
    fn rollback_helper_propagates_the_original_error() {
        let result: Result<()> =
            rollback_raw_mode_on_failure(|| Err(io::Error::other("no alternate screen")));
        let err = result.unwrap_err();
        assert!(err.to_string().contains("no alternate screen"));
    }
}
