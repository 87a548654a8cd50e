//! Input dispatch.
//!
//! Every input resolves to exactly one [`Dispatch`]:
//!
//! 1. Global bindings (quit, view digits, theme, reserved keys)
//! 2. The active view's key handler
//! 3. A fallback warning naming the key and the view
//!
//! Nothing is dropped silently.

use super::command::{Command, ReservedInput};
use super::keybindings::{KeyCombo, KeybindingConfig};
use crate::app::ViewId;
use crate::error::{ShellResult, UiError};
use crate::events::InputEvent;
use crate::notifications::Notice;
use crate::views::KeyOutcome;

/// Which layer claimed an input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Dispatch {
    /// A shell command. The caller executes it.
    Global(Command),
    /// The active view consumed the key. Its notice, if any, still has to
    /// be shown.
    ViewHandled {
        view: ViewId,
        notice: Option<Notice>,
    },
    /// Nobody claimed the key.
    Fallback(Notice),
}

/// Routes inputs through the global layer, then the active view.
#[derive(Debug, Clone, Default)]
pub struct InputDispatcher {
    config: KeybindingConfig,
}

impl InputDispatcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Dispatch a key press. `offer_to_view` is only called when no global
    /// binding matches.
    pub fn dispatch_key<F>(
        &self,
        key: KeyCombo,
        active: ViewId,
        offer_to_view: F,
    ) -> ShellResult<Dispatch>
    where
        F: FnOnce(&KeyCombo) -> ShellResult<KeyOutcome>,
    {
        let key = key.normalized();

        if let Some(command) = self.config.lookup(&key) {
            return Ok(Dispatch::Global(command));
        }

        match offer_to_view(&key)? {
            KeyOutcome::Handled { notice, .. } => Ok(Dispatch::ViewHandled {
                view: active,
                notice,
            }),
            KeyOutcome::Unhandled => Ok(Dispatch::Fallback(unhandled_notice(&key, active))),
        }
    }

    /// Dispatch any input event. Resize events are not input and yield `None`.
    pub fn dispatch_event<F>(
        &self,
        event: &InputEvent,
        active: ViewId,
        offer_to_view: F,
    ) -> ShellResult<Option<Dispatch>>
    where
        F: FnOnce(&KeyCombo) -> ShellResult<KeyOutcome>,
    {
        let dispatch = match *event {
            InputEvent::Key(key) => self.dispatch_key(key, active, offer_to_view)?,
            InputEvent::MouseClick { column, row } => {
                Dispatch::Global(Command::Reserved(ReservedInput::MouseClick { column, row }))
            }
            InputEvent::MouseWheel(direction) => {
                Dispatch::Global(Command::Reserved(ReservedInput::MouseWheel(direction)))
            }
            InputEvent::Resize { .. } => return Ok(None),
        };
        Ok(Some(dispatch))
    }
}

/// The warning shown when no layer claims a key.
pub fn unhandled_notice(key: &KeyCombo, view: ViewId) -> Notice {
    let err = UiError::UnhandledKey {
        key: key.label(),
        view: view.name().to_string(),
    };
    Notice::warning(err.user_message())
}
