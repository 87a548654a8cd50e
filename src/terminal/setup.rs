//! Low-level enter/leave of TUI mode.

use crossterm::{
    cursor::{Hide, Show},
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use std::io::{self, Write};

/// Enter the alternate screen and enable mouse capture.
///
/// Raw mode is handled separately by the caller so this can be exercised
/// against an in-memory writer.
pub fn enter_tui_mode<W: Write>(writer: &mut W) -> io::Result<()> {
    execute!(writer, EnterAlternateScreen, EnableMouseCapture, Hide)
}

/// Undo [`enter_tui_mode`] and raw mode. Safe to call more than once;
/// errors are ignored.
pub fn leave_tui_mode<W: Write>(writer: &mut W) {
    let _ = disable_raw_mode();
    let _ = execute!(writer, DisableMouseCapture, LeaveAlternateScreen, Show);
    let _ = writer.flush();
}

/// Best-effort restore on stdout, used from the panic hook.
pub fn emergency_restore() {
    leave_tui_mode(&mut io::stdout());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_enter_writes_escape_sequences() {
        let mut buffer = Vec::new();
        enter_tui_mode(&mut buffer).unwrap();
        // ESC [ ? 1049 h
        assert!(String::from_utf8_lossy(&buffer).contains("1049h"));
    }

    #[test]
    fn test_leave_tui_mode_twice_does_not_panic() {
        let mut buffer = Vec::new();
        leave_tui_mode(&mut buffer);
        leave_tui_mode(&mut buffer);
        assert!(String::from_utf8_lossy(&buffer).contains("1049l"));
    }
}
