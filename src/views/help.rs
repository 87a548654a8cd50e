//! Help view: static documentation.

use super::{plain_char, KeyOutcome, ViewContext};
use crate::app::ViewId;
use crate::input::KeyCombo;
use crate::notifications::Notice;

const SHORTCUTS: &[(&str, &str)] = &[
    ("q / Ctrl+C", "Quit application"),
    ("1-4", "Switch between views"),
    ("t", "Toggle theme (light/dark)"),
    ("Tab", "Focus next element (coming soon)"),
    ("Enter", "Activate/Confirm (coming soon)"),
    ("Escape", "Cancel/Go back (coming soon)"),
];

const VIEW_SHORTCUTS: &[(ViewId, &[(&str, &str)])] = &[
    (ViewId::Dashboard, &[("r", "Refresh dashboard")]),
    (
        ViewId::DataBrowser,
        &[
            ("s", "Sort by status"),
            ("n", "Sort by name"),
            ("v", "Sort by value"),
            ("r", "Refresh data"),
        ],
    ),
    (
        ViewId::Settings,
        &[
            ("r", "Reset to defaults"),
            ("s", "Save settings"),
            ("e", "Export settings"),
            ("i", "Import settings"),
            ("b", "Toggle borders"),
            ("n", "Toggle notifications"),
            ("d", "Toggle debug mode"),
        ],
    ),
];

#[derive(Debug, Clone, Default)]
pub struct HelpView;

impl HelpView {
    pub fn new() -> Self {
        Self
    }

    pub fn content(&self, ctx: &ViewContext) -> String {
        let mut out = String::new();
        out.push_str(&format!("{} Help & Documentation\n\n", ViewId::Help.icon()));

        out.push_str("Navigation:\n");
        for view in ViewId::ALL {
            out.push_str(&format!(
                "{} - {}: {}\n",
                view.digit(),
                view.title(),
                view.description()
            ));
        }

        out.push_str("\nKeyboard Shortcuts:\n");
        for (keys, action) in SHORTCUTS {
            out.push_str(&format!("{} - {}\n", keys, action));
        }

        out.push_str("\nView-Specific Shortcuts:\n");
        for (view, bindings) in VIEW_SHORTCUTS {
            out.push_str(&format!("{}:\n", view.title()));
            for (key, action) in *bindings {
                out.push_str(&format!("  {} - {}\n", key, action));
            }
        }

        out.push_str("\nTips:\n");
        out.push_str("• Resize your terminal to see the layout adapt\n");
        out.push_str("• Check the status bar for the current view and messages\n");
        out.push_str("• For best results use a terminal of at least 80x24\n");

        out.push_str("\nVersion Information:\n");
        out.push_str(&format!("• dashshell {}\n", env!("CARGO_PKG_VERSION")));
        out.push_str(&format!("• Platform: {} ({})\n", ctx.platform(), ctx.arch()));
        out
    }

    pub fn handle_key(&mut self, key: &KeyCombo) -> KeyOutcome {
        match plain_char(key) {
            Some('h') => KeyOutcome::notify(Notice::info("You are already in the help view!")),
            _ => KeyOutcome::Unhandled,
        }
    }
}
