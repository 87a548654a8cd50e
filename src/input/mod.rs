//! Input handling.
//!
//! ```text
//! crossterm Event -> InputEvent -> InputDispatcher -> Dispatch -> App
//! ```
//!
//! # Modules
//!
//! - [`command`] - The [`Command`] enum for shell-level actions
//! - [`keybindings`] - [`KeyCombo`] and the default binding table
//! - [`dispatcher`] - [`InputDispatcher`] and the [`Dispatch`] outcome

pub mod command;
pub mod dispatcher;
pub mod keybindings;

pub use command::{Command, Direction, ReservedInput, WheelDirection};
pub use dispatcher::{unhandled_notice, Dispatch, InputDispatcher};
pub use keybindings::{KeyCombo, KeybindingConfig};
