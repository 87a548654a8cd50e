//! Settings view: an in-memory settings record with toggles.
//!
//! Nothing here is persisted. Save, export and import only acknowledge
//! the request.

use std::fmt;

use super::{plain_char, KeyOutcome, ViewContext};
use crate::app::ViewId;
use crate::input::KeyCombo;
use crate::notifications::Notice;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogLevel {
    Error,
    Warn,
    #[default]
    Info,
    Debug,
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            LogLevel::Error => "error",
            LogLevel::Warn => "warn",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Settings {
    pub show_borders: bool,
    pub show_status_bar: bool,
    pub show_navigation: bool,
    pub compact_mode: bool,
    pub auto_save: bool,
    pub notifications: bool,
    pub debug_mode: bool,
    pub log_level: LogLevel,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            show_borders: true,
            show_status_bar: true,
            show_navigation: true,
            compact_mode: false,
            auto_save: true,
            notifications: true,
            debug_mode: false,
            log_level: LogLevel::Info,
        }
    }
}

fn enabled(value: bool) -> &'static str {
    if value {
        "Enabled"
    } else {
        "Disabled"
    }
}

#[derive(Debug, Clone, Default)]
pub struct SettingsView {
    settings: Settings,
}

impl SettingsView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    fn toggle(&mut self, name: &str, flag: fn(&mut Settings) -> &mut bool) -> KeyOutcome {
        let value = flag(&mut self.settings);
        *value = !*value;
        let state = if *value { "enabled" } else { "disabled" };
        KeyOutcome::rerender(Notice::info(format!("{} {}", name, state)))
    }

    pub fn content(&self, ctx: &ViewContext) -> String {
        let s = &self.settings;
        let mut out = String::new();
        out.push_str(&format!("{} {}\n\n", ViewId::Settings.icon(), ViewId::Settings.title()));

        out.push_str("Theme Settings:\n");
        out.push_str(&format!(
            "• Current Theme: {} {}\n",
            ctx.theme.name(),
            ctx.theme.icon()
        ));
        out.push_str("• Available Themes: Light, Dark\n");
        out.push_str("• Press t to toggle theme\n");

        out.push_str("\nDisplay Settings:\n");
        out.push_str(&format!("• Show borders: {}\n", enabled(s.show_borders)));
        out.push_str(&format!("• Show status bar: {}\n", enabled(s.show_status_bar)));
        out.push_str(&format!("• Show navigation: {}\n", enabled(s.show_navigation)));
        out.push_str(&format!("• Compact mode: {}\n", enabled(s.compact_mode)));

        out.push_str("\nApplication Settings:\n");
        out.push_str(&format!("• Auto-save: {}\n", enabled(s.auto_save)));
        out.push_str(&format!("• Notifications: {}\n", enabled(s.notifications)));
        out.push_str(&format!("• Debug mode: {}\n", enabled(s.debug_mode)));
        out.push_str(&format!("• Log level: {}\n", s.log_level));

        out.push_str("\nSystem Information:\n");
        out.push_str(&format!("• Platform: {}\n", ctx.platform()));
        out.push_str(&format!("• Architecture: {}\n", ctx.arch()));
        out.push_str(&format!("• Uptime: {} seconds\n", ctx.uptime.as_secs()));

        out.push_str("\nInstructions:\n");
        out.push_str("• Press r to reset to defaults\n");
        out.push_str("• Press s to save settings\n");
        out.push_str("• Press e to export settings\n");
        out.push_str("• Press i to import settings\n");
        out.push_str("• Press b, n or d to toggle borders, notifications or debug mode\n");

        out.push_str("\nKeyboard Shortcuts:\n");
        out.push_str("• Tab - Focus next element (coming soon)\n");
        out.push_str("• Enter - Activate/Confirm (coming soon)\n");

        out.push_str("\nConfiguration:\n");
        out.push_str("• Configuration file: config.json (coming soon)\n");
        out.push_str("• Export settings: Available (coming soon)\n");
        out
    }

    pub fn handle_key(&mut self, key: &KeyCombo) -> KeyOutcome {
        match plain_char(key) {
            Some('r') => {
                self.settings = Settings::default();
                KeyOutcome::rerender(Notice::success("Settings reset to defaults"))
            }
            Some('s') => KeyOutcome::notify(Notice::success("Settings saved")),
            Some('e') => KeyOutcome::notify(Notice::info("Settings exported")),
            Some('i') => KeyOutcome::notify(Notice::info("Settings imported")),
            Some('b') => self.toggle("show_borders", |s| &mut s.show_borders),
            Some('n') => self.toggle("notifications", |s| &mut s.notifications),
            Some('d') => self.toggle("debug_mode", |s| &mut s.debug_mode),
            _ => KeyOutcome::Unhandled,
        }
    }
}
