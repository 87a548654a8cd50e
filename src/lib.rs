//! dashshell - a four-region terminal dashboard shell.
//!
//! This library exposes modules for use in integration tests and benches.

pub mod app;
pub mod error;
pub mod events;
pub mod input;
pub mod notifications;
pub mod startup;
pub mod terminal;
pub mod traits;
pub mod ui;
pub mod views;
