//! Text and styles for the fixed chrome: header, sidebar, status bar, and
//! the quit overlay.

use crate::app::ViewId;
use crate::notifications::{Notification, Severity};
use crate::traits::{BorderKind, RegionSpec, RegionStyle};
use crate::ui::layout::{centered, Region};
use crate::ui::theme::{resolve, Role, StyleSpec, ThemeId};

pub const APP_TITLE: &str = "dashshell - Terminal Dashboard";

pub const GOODBYE_MESSAGE: &str = "Thanks for using dashshell!";

/// Size of the quit overlay.
pub const GOODBYE_WIDTH: u16 = 30;
pub const GOODBYE_HEIGHT: u16 = 5;

// ============================================================================
// Content Producers
// ============================================================================

pub fn header_text(theme: ThemeId) -> String {
    format!(
        "{}\nTheme: {} {} | Press 't' to toggle",
        APP_TITLE,
        theme.name(),
        theme.icon()
    )
}

pub fn sidebar_text(active: ViewId) -> String {
    let mut out = String::from("Navigation\n\n");
    for view in ViewId::ALL {
        let marker = if view == active { "▶" } else { " " };
        out.push_str(&format!("{} {} {}\n", marker, view.digit(), view.title()));
    }
    out
}

pub fn status_text(active: ViewId, notification: Option<&Notification>) -> String {
    let base = format!(
        "View: {} | Press 'q' to quit | 1-4 for navigation | 't' to toggle theme",
        active.name()
    );
    match notification {
        Some(notification) => format!("{} | {}", notification.message, base),
        None => base,
    }
}

// ============================================================================
// Region Styles
// ============================================================================

pub fn header_style(theme: ThemeId) -> RegionStyle {
    let header = resolve(theme, Role::Header);
    RegionStyle::plain(header)
        .with_border(BorderKind::Bottom, header)
        .centered()
}

pub fn sidebar_style(theme: ThemeId) -> RegionStyle {
    RegionStyle::plain(resolve(theme, Role::Sidebar))
        .with_border(BorderKind::All, resolve(theme, Role::Border))
}

pub fn content_style(theme: ThemeId) -> RegionStyle {
    RegionStyle::plain(resolve(theme, Role::Content))
        .with_border(BorderKind::All, resolve(theme, Role::Border))
}

/// Status bar style. A live notification tints the text with its severity.
pub fn status_style(theme: ThemeId, severity: Option<Severity>) -> RegionStyle {
    let base = resolve(theme, Role::StatusBar);
    let body = match severity {
        Some(severity) => StyleSpec {
            fg: resolve(theme, severity.role()).fg,
            bg: base.bg,
            bold: true,
        },
        None => base,
    };
    RegionStyle::plain(body)
}

pub fn goodbye_style(theme: ThemeId) -> RegionStyle {
    let palette = theme.palette();
    RegionStyle::plain(resolve(theme, Role::Title).on(palette.background))
        .with_border(BorderKind::All, resolve(theme, Role::Border))
        .centered()
}

// ============================================================================
// Region Specs
// ============================================================================

pub fn header_spec(area: Region, theme: ThemeId) -> RegionSpec {
    RegionSpec::new(area, header_style(theme), header_text(theme))
}

pub fn sidebar_spec(area: Region, theme: ThemeId, active: ViewId) -> RegionSpec {
    RegionSpec::new(area, sidebar_style(theme), sidebar_text(active))
}

pub fn status_spec(
    area: Region,
    theme: ThemeId,
    active: ViewId,
    notification: Option<&Notification>,
) -> RegionSpec {
    RegionSpec::new(
        area,
        status_style(theme, notification.map(|n| n.severity)),
        status_text(active, notification),
    )
}

/// The quit overlay, centered on a `width` x `height` screen.
pub fn goodbye_spec(width: u16, height: u16, theme: ThemeId) -> RegionSpec {
    RegionSpec::new(
        centered(width, height, GOODBYE_WIDTH, GOODBYE_HEIGHT),
        goodbye_style(theme),
        format!("\n{}", GOODBYE_MESSAGE),
    )
}
