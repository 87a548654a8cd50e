//! Shell error types.

use thiserror::Error;

use super::category::ErrorCategory;

/// Errors raised by the dashboard shell.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UiError {
    /// A switch was requested to a view name that is not registered.
    #[error("Unknown view '{name}'")]
    UnknownView { name: String },

    /// Neither a global shortcut nor the active view claimed a key.
    #[error("Key '{key}' not available in {view} view")]
    UnhandledKey { key: String, view: String },

    /// A region handle was used after it was detached, or never existed.
    #[error("Region handle {handle} is not attached")]
    StaleRegion { handle: u64 },

    /// Terminal initialization failed.
    #[error("Terminal initialization failed: {message}")]
    TerminalInit { message: String },

    /// Terminal restore failed.
    #[error("Terminal restore failed: {message}")]
    TerminalRestore { message: String },
}

impl UiError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            UiError::UnknownView { .. } | UiError::StaleRegion { .. } => ErrorCategory::Local,
            UiError::UnhandledKey { .. } => ErrorCategory::Notify,
            UiError::TerminalInit { .. } | UiError::TerminalRestore { .. } => {
                ErrorCategory::Fatal
            }
        }
    }

    /// Check if this error is recoverable (the shell can keep running).
    pub fn is_recoverable(&self) -> bool {
        self.category().is_recoverable()
    }

    /// Get a user-friendly error message.
    pub fn user_message(&self) -> String {
        match self {
            UiError::UnknownView { name } => format!("There is no '{}' view.", name),
            UiError::UnhandledKey { .. } => self.to_string(),
            UiError::StaleRegion { .. } => {
                "A display region went out of sync. This may be a bug.".to_string()
            }
            UiError::TerminalInit { .. } => {
                "Failed to initialize the terminal. Please check your terminal settings.".to_string()
            }
            UiError::TerminalRestore { .. } => {
                "Failed to restore terminal. You may need to run `reset`.".to_string()
            }
        }
    }

    /// Get a short error code for logging.
    pub fn error_code(&self) -> &'static str {
        match self {
            UiError::UnknownView { .. } => "E_UI_UNKNOWN_VIEW",
            UiError::UnhandledKey { .. } => "E_UI_UNHANDLED_KEY",
            UiError::StaleRegion { .. } => "E_UI_STALE_REGION",
            UiError::TerminalInit { .. } => "E_UI_TERM_INIT",
            UiError::TerminalRestore { .. } => "E_UI_TERM_RESTORE",
        }
    }
}
