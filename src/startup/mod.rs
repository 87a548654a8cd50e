//! Startup: configuration and logging.
//!
//! # Components
//!
//! - [`config`] - [`ShellConfig`] with defaults and environment overrides
//! - [`logging`] - File-backed tracing subscriber
//!
//! # Usage
//!
//! ```ignore
//! use dashshell::startup::{init_tracing, ShellConfig};
//!
//! let config = ShellConfig::from_env();
//! init_tracing(config.log_file.as_deref())?;
//! for warning in &config.warnings {
//!     tracing::warn!("{}", warning);
//! }
//! ```

pub mod config;
pub mod logging;

pub use config::{default_log_file, ShellConfig};
pub use logging::init_tracing;
