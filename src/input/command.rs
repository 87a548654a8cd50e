//! Command definitions for input handling.
//!
//! [`Command`] is what a global binding resolves to. Views never see
//! commands; they receive the raw [`KeyCombo`](super::KeyCombo) instead.

use crate::app::ViewId;

/// Arrow key direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub fn name(self) -> &'static str {
        match self {
            Direction::Up => "up",
            Direction::Down => "down",
            Direction::Left => "left",
            Direction::Right => "right",
        }
    }
}

/// Mouse wheel direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WheelDirection {
    Up,
    Down,
}

/// Inputs that are bound but have no behavior yet. Each one produces a
/// fixed informational notification and changes no state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReservedInput {
    Escape,
    Tab,
    Enter,
    Arrow(Direction),
    MouseClick { column: u16, row: u16 },
    MouseWheel(WheelDirection),
}

impl ReservedInput {
    pub fn message(&self) -> String {
        match self {
            ReservedInput::Escape => "Escape key pressed".to_string(),
            ReservedInput::Tab => "Tab navigation coming soon".to_string(),
            ReservedInput::Enter => "Enter key pressed".to_string(),
            ReservedInput::Arrow(direction) => format!("Arrow {} pressed", direction.name()),
            ReservedInput::MouseClick { column, row } => {
                format!("Mouse clicked at ({}, {})", column, row)
            }
            ReservedInput::MouseWheel(WheelDirection::Up) => "Mouse wheel up".to_string(),
            ReservedInput::MouseWheel(WheelDirection::Down) => "Mouse wheel down".to_string(),
        }
    }
}

/// Shell-level actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    /// Quit the application (`q`, Ctrl+C)
    Quit,
    /// Activate a view (`1`-`4`)
    SwitchView(ViewId),
    /// Flip between light and dark (`t`)
    ToggleTheme,
    /// Acknowledge a reserved input
    Reserved(ReservedInput),
}
