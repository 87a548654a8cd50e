//! Dashboard view: overview and quick actions.

use super::{plain_char, KeyOutcome, ViewContext};
use crate::app::ViewId;
use crate::input::KeyCombo;
use crate::notifications::Notice;

#[derive(Debug, Clone, Default)]
pub struct DashboardView;

impl DashboardView {
    pub fn new() -> Self {
        Self
    }

    pub fn content(&self, ctx: &ViewContext) -> String {
        let mut out = String::new();
        out.push_str(&format!("{} Dashboard\n\n", ViewId::Dashboard.icon()));
        out.push_str("Welcome to dashshell!\n\n");

        out.push_str("Features:\n");
        for feature in [
            "Four-region terminal layout",
            "Responsive resizing",
            "Keyboard navigation",
            "Multiple views",
            "Light and dark themes",
            "Status notifications",
        ] {
            out.push_str(&format!("• {}\n", feature));
        }

        out.push_str("\nQuick Stats:\n");
        out.push_str(&format!("• Views: {}\n", ViewId::ALL.len()));
        out.push_str("• Themes: 2\n");
        out.push_str(&format!(
            "• Current Theme: {} {}\n",
            ctx.theme.name(),
            ctx.theme.icon()
        ));

        out.push_str("\nGetting Started:\n");
        out.push_str("Use the number keys (1-4) to navigate between views:\n");
        for view in ViewId::ALL {
            let marker = if view == ViewId::Dashboard { " (current)" } else { "" };
            out.push_str(&format!("{} - {}{}\n", view.digit(), view.title(), marker));
        }
        out.push_str("Press q or Ctrl+C to quit.\n");
        out.push_str("Press t to toggle theme.\n");
        out.push_str("Press r to refresh.\n");

        out.push_str("\nSystem Information:\n");
        out.push_str(&format!("• Version: {}\n", env!("CARGO_PKG_VERSION")));
        out.push_str(&format!("• Platform: {}\n", ctx.platform()));
        out.push_str(&format!("• Architecture: {}\n", ctx.arch()));
        out.push_str(&format!("• Uptime: {} seconds\n", ctx.uptime.as_secs()));
        out
    }

    pub fn handle_key(&mut self, key: &KeyCombo) -> KeyOutcome {
        match plain_char(key) {
            Some('r') => KeyOutcome::rerender(Notice::success("Dashboard refreshed")),
            _ => KeyOutcome::Unhandled,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notifications::Severity;
    use crate::ui::theme::ThemeId;
    use crossterm::event::KeyCode;
    use std::time::Duration;

    #[test]
    fn test_content_reflects_theme_and_uptime() {
        let view = DashboardView::new();
        let content = view.content(&ViewContext::new(ThemeId::Dark, Duration::from_secs(42)));
        assert!(content.contains("Current Theme: dark"));
        assert!(content.contains("Uptime: 42 seconds"));
        assert!(content.contains("1 - Dashboard (current)"));
    }

    #[test]
    fn test_refresh_key() {
        let mut view = DashboardView::new();
        let outcome = view.handle_key(&KeyCombo::plain(KeyCode::Char('r')));
        match outcome {
            KeyOutcome::Handled {
                rerender: true,
                notice: Some(notice),
            } => {
                assert_eq!(notice.message, "Dashboard refreshed");
                assert_eq!(notice.severity, Severity::Success);
            }
            other => panic!("unexpected outcome: {:?}", other),
        }
    }

    #[test]
    fn test_other_keys_unhandled() {
        let mut view = DashboardView::new();
        assert_eq!(
            view.handle_key(&KeyCombo::plain(KeyCode::Char('x'))),
            KeyOutcome::Unhandled
        );
        assert_eq!(
            view.handle_key(&KeyCombo::plain(KeyCode::F(5))),
            KeyOutcome::Unhandled
        );
    }
}
