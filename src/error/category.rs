//! Error category classification.
//!
//! Every shell error belongs to one category, and the category decides
//! which channel reports it: the log, the status bar, or process exit.

use std::fmt;

/// High-level categorization of errors for handling decisions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCategory {
    /// Logged and recovered in place. State is left untouched.
    Local,

    /// Shown to the interactive user as a status-bar notification.
    Notify,

    /// Not recoverable. Propagates to `main`, which exits with code 1.
    Fatal,
}

impl ErrorCategory {
    /// Returns true if the shell keeps running after an error of this category.
    pub fn is_recoverable(&self) -> bool {
        !matches!(self, ErrorCategory::Fatal)
    }
}

impl fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            ErrorCategory::Local => "local",
            ErrorCategory::Notify => "notify",
            ErrorCategory::Fatal => "fatal",
        };
        f.write_str(label)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_recoverable() {
        assert!(ErrorCategory::Local.is_recoverable());
        assert!(ErrorCategory::Notify.is_recoverable());
        assert!(!ErrorCategory::Fatal.is_recoverable());
    }

    #[test]
    fn test_category_display() {
        assert_eq!(ErrorCategory::Local.to_string(), "local");
        assert_eq!(ErrorCategory::Notify.to_string(), "notify");
        assert_eq!(format!("{}", ErrorCategory::Fatal), "fatal");
    }
}
