//! Terminal input events.
//!
//! [`InputEvent`] is the subset of crossterm events the shell reacts to.
//! Key releases, mouse motion, focus changes and paste are dropped here,
//! before dispatch.

use crossterm::event::{Event, KeyEventKind, MouseButton, MouseEvent, MouseEventKind};

use crate::input::{KeyCombo, WheelDirection};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    Key(KeyCombo),
    MouseClick { column: u16, row: u16 },
    MouseWheel(WheelDirection),
    Resize { width: u16, height: u16 },
}

impl InputEvent {
    pub fn from_crossterm(event: Event) -> Option<Self> {
        match event {
            Event::Key(key) if key.kind != KeyEventKind::Release => {
                Some(InputEvent::Key(KeyCombo::from(key)))
            }
            Event::Mouse(mouse) => Self::from_mouse(mouse),
            Event::Resize(width, height) => Some(InputEvent::Resize { width, height }),
            _ => None,
        }
    }

    fn from_mouse(mouse: MouseEvent) -> Option<Self> {
        match mouse.kind {
            MouseEventKind::Down(
                MouseButton::Left | MouseButton::Right | MouseButton::Middle,
            ) => Some(InputEvent::MouseClick {
                column: mouse.column,
                row: mouse.row,
            }),
            MouseEventKind::ScrollUp => Some(InputEvent::MouseWheel(WheelDirection::Up)),
            MouseEventKind::ScrollDown => Some(InputEvent::MouseWheel(WheelDirection::Down)),
            _ => None,
        }
    }
}
