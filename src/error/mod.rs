//! Error handling for the dashboard shell.
//!
//! | Category | Example | Channel |
//! |----------|---------|---------|
//! | Local | unknown view name | log only, state unchanged |
//! | Notify | unhandled key | status-bar warning |
//! | Fatal | terminal setup failed | `main` exits with code 1 |
//!
//! Termination signals are not errors. They take the clean shutdown path.

mod category;
mod result;
mod ui;

pub use category::ErrorCategory;
pub use result::ShellResult;
pub use ui::UiError;
