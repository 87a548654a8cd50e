//! Terminal lifecycle with RAII restore.
//!
//! # Example
//!
//! ```no_run
//! use dashshell::terminal::{setup_panic_hook, TerminalManager};
//!
//! fn main() -> color_eyre::Result<()> {
//!     setup_panic_hook();
//!     let mut manager = TerminalManager::new()?;
//!     manager.terminal().draw(|_frame| {})?;
//!     // restored on drop
//!     Ok(())
//! }
//! ```

mod panic;
mod setup;

pub use panic::{run_guarded, setup_panic_hook};
pub use setup::{emergency_restore, enter_tui_mode, leave_tui_mode};

use crossterm::terminal::enable_raw_mode;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, Stdout};

use crate::error::{ShellResult, UiError};

/// Restores the terminal when dropped unless already restored.
pub struct TerminalGuard {
    cleaned_up: bool,
}

impl TerminalGuard {
    fn new() -> Self {
        Self { cleaned_up: false }
    }

    pub fn cleanup(&mut self) {
        if self.cleaned_up {
            return;
        }
        self.cleaned_up = true;
        leave_tui_mode(&mut io::stdout());
    }

    pub fn is_cleaned_up(&self) -> bool {
        self.cleaned_up
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        self.cleanup();
    }
}

/// Owns the ratatui terminal for the lifetime of the shell.
///
/// Creating one enables raw mode, switches to the alternate screen and
/// turns on mouse capture. Dropping it reverses all three.
pub struct TerminalManager {
    terminal: Terminal<CrosstermBackend<Stdout>>,
    guard: TerminalGuard,
}

impl TerminalManager {
    pub fn new() -> ShellResult<Self> {
        enable_raw_mode().map_err(init_error)?;

        // From here on the guard undoes partial setup if a later step fails.
        let mut guard = TerminalGuard::new();
        let mut stdout = io::stdout();

        if let Err(e) = enter_tui_mode(&mut stdout) {
            guard.cleanup();
            return Err(init_error(e));
        }

        let mut terminal = Terminal::new(CrosstermBackend::new(stdout)).map_err(init_error)?;
        terminal.clear().map_err(init_error)?;

        tracing::debug!("Terminal entered TUI mode");

        Ok(Self { terminal, guard })
    }

    pub fn terminal(&mut self) -> &mut Terminal<CrosstermBackend<Stdout>> {
        &mut self.terminal
    }

    /// Current terminal size as `(width, height)`.
    pub fn size(&self) -> ShellResult<(u16, u16)> {
        let size = self.terminal.size().map_err(|e| UiError::TerminalInit {
            message: e.to_string(),
        })?;
        Ok((size.width, size.height))
    }

    /// Restore now instead of at drop.
    pub fn restore(&mut self) -> ShellResult<()> {
        if self.guard.is_cleaned_up() {
            return Ok(());
        }
        self.guard.cleanup();
        self.terminal
            .show_cursor()
            .map_err(|e| UiError::TerminalRestore {
                message: e.to_string(),
            })?;
        tracing::debug!("Terminal restored");
        Ok(())
    }
}

fn init_error(e: io::Error) -> UiError {
    UiError::TerminalInit {
        message: e.to_string(),
    }
}
