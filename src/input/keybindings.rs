//! Default keybindings for the shell.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::collections::HashMap;

use super::command::{Command, Direction, ReservedInput};
use crate::app::ViewId;

/// Represents a key combination (key code + modifiers).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeyCombo {
    pub code: KeyCode,
    pub modifiers: KeyModifiers,
}

impl KeyCombo {
    /// Creates a new key combo with the given code and modifiers.
    pub const fn new(code: KeyCode, modifiers: KeyModifiers) -> Self {
        Self { code, modifiers }
    }

    /// Creates a key combo with no modifiers.
    pub const fn plain(code: KeyCode) -> Self {
        Self::new(code, KeyModifiers::NONE)
    }

    /// Creates a key combo with Control modifier.
    pub const fn ctrl(code: KeyCode) -> Self {
        Self::new(code, KeyModifiers::CONTROL)
    }

    /// Creates a key combo with Shift modifier.
    pub const fn shift(code: KeyCode) -> Self {
        Self::new(code, KeyModifiers::SHIFT)
    }

    /// Drop SHIFT from character keys. The shifted character already
    /// carries it (`Q`, `!`), and terminals disagree on reporting it.
    pub fn normalized(self) -> Self {
        match self.code {
            KeyCode::Char(_) => Self::new(self.code, self.modifiers.difference(KeyModifiers::SHIFT)),
            _ => self,
        }
    }

    /// Readable name for messages, e.g. `x`, `Ctrl+x`, `F5`.
    pub fn label(&self) -> String {
        let mut prefix = String::new();
        if self.modifiers.contains(KeyModifiers::CONTROL) {
            prefix.push_str("Ctrl+");
        }
        if self.modifiers.contains(KeyModifiers::ALT) {
            prefix.push_str("Alt+");
        }
        let key = match self.code {
            KeyCode::Char(' ') => "Space".to_string(),
            KeyCode::Char(c) => c.to_string(),
            KeyCode::F(n) => format!("F{}", n),
            KeyCode::BackTab => "Shift+Tab".to_string(),
            KeyCode::PageUp => "PageUp".to_string(),
            KeyCode::PageDown => "PageDown".to_string(),
            KeyCode::Esc => "Escape".to_string(),
            other => format!("{:?}", other),
        };
        prefix + &key
    }
}

impl From<KeyEvent> for KeyCombo {
    fn from(event: KeyEvent) -> Self {
        KeyCombo::new(event.code, event.modifiers).normalized()
    }
}

/// Keybinding configuration for the shell.
#[derive(Debug, Clone)]
pub struct KeybindingConfig {
    /// Shell shortcuts (always checked first)
    pub global: HashMap<KeyCombo, Command>,
    /// Bound but not yet implemented inputs
    pub reserved: HashMap<KeyCombo, ReservedInput>,
}

impl Default for KeybindingConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl KeybindingConfig {
    /// Creates a new keybinding configuration with default bindings.
    pub fn new() -> Self {
        let mut config = Self {
            global: HashMap::new(),
            reserved: HashMap::new(),
        };

        config.setup_global_bindings();
        config.setup_reserved_bindings();

        config
    }

    fn setup_global_bindings(&mut self) {
        self.global
            .insert(KeyCombo::plain(KeyCode::Char('q')), Command::Quit);
        self.global
            .insert(KeyCombo::ctrl(KeyCode::Char('c')), Command::Quit);

        for view in ViewId::ALL {
            self.global.insert(
                KeyCombo::plain(KeyCode::Char(view.digit())),
                Command::SwitchView(view),
            );
        }

        self.global
            .insert(KeyCombo::plain(KeyCode::Char('t')), Command::ToggleTheme);
    }

    fn setup_reserved_bindings(&mut self) {
        self.reserved
            .insert(KeyCombo::plain(KeyCode::Esc), ReservedInput::Escape);
        self.reserved
            .insert(KeyCombo::plain(KeyCode::Tab), ReservedInput::Tab);
        self.reserved
            .insert(KeyCombo::plain(KeyCode::Enter), ReservedInput::Enter);

        for (code, direction) in [
            (KeyCode::Up, Direction::Up),
            (KeyCode::Down, Direction::Down),
            (KeyCode::Left, Direction::Left),
            (KeyCode::Right, Direction::Right),
        ] {
            self.reserved
                .insert(KeyCombo::plain(code), ReservedInput::Arrow(direction));
        }
    }

    /// Look up a key: shell shortcuts first, then reserved inputs.
    pub fn lookup(&self, combo: &KeyCombo) -> Option<Command> {
        let combo = combo.normalized();
        self.global
            .get(&combo)
            .copied()
            .or_else(|| self.reserved.get(&combo).map(|r| Command::Reserved(*r)))
    }
}
