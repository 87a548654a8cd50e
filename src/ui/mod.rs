//! UI rendering for the dashboard shell.
//!
//! The shell writes into a [`RetainedSurface`]; [`render`] paints that
//! surface into a ratatui frame. Regions are drawn in creation order, each
//! one clearing its rectangle first, so later regions (the quit overlay)
//! sit on top.

pub mod chrome;
pub mod layout;
pub mod surface;
pub mod theme;

pub use layout::{centered, compute_layout, Region, ScreenLayout, Slot};
pub use surface::RetainedSurface;
pub use theme::{resolve, resolve_named, Role, StyleSpec, ThemeId};

use ratatui::{
    layout::{Alignment, Rect},
    style::Style,
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::traits::{BorderKind, RegionSpec};

// ============================================================================
// Main UI Rendering
// ============================================================================

/// Paint every attached region.
pub fn render(frame: &mut Frame, surface: &RetainedSurface) {
    let screen = frame.area();
    for (_, region) in surface.regions() {
        render_region(frame, screen, region);
    }
}

fn render_region(frame: &mut Frame, screen: Rect, region: &RegionSpec) {
    let area = Rect::from(region.geometry).intersection(screen);
    if area.is_empty() {
        return;
    }

    let body: Style = region.style.body.into();
    let borders = match region.style.border {
        BorderKind::None => Borders::NONE,
        BorderKind::All => Borders::ALL,
        BorderKind::Bottom => Borders::BOTTOM,
    };
    let block = Block::default()
        .borders(borders)
        .border_style(Style::from(region.style.border_style))
        .style(body);

    let alignment = if region.style.centered {
        Alignment::Center
    } else {
        Alignment::Left
    };

    let paragraph = Paragraph::new(region.content.as_str())
        .style(body)
        .block(block)
        .alignment(alignment);

    frame.render_widget(Clear, area);
    frame.render_widget(paragraph, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::traits::{DisplaySurface, RegionStyle};
    use ratatui::{backend::TestBackend, Terminal};

    fn buffer_text(terminal: &Terminal<TestBackend>) -> String {
        let buffer = terminal.backend().buffer();
        let area = buffer.area;
        let mut out = String::new();
        for y in 0..area.height {
            for x in 0..area.width {
                out.push_str(buffer[(x, y)].symbol());
            }
            out.push('\n');
        }
        out
    }

    #[test]
    fn test_render_draws_region_text() {
        let mut surface = RetainedSurface::new();
        surface.create_region(RegionSpec::new(
            Region::new(0, 0, 20, 1),
            RegionStyle::plain(resolve(ThemeId::Light, Role::Text)),
            "hello",
        ));

        let mut terminal = Terminal::new(TestBackend::new(20, 3)).unwrap();
        terminal.draw(|f| render(f, &surface)).unwrap();
        assert!(buffer_text(&terminal).starts_with("hello"));
    }

    #[test]
    fn test_later_regions_paint_on_top() {
        let mut surface = RetainedSurface::new();
        let style = RegionStyle::plain(resolve(ThemeId::Light, Role::Text));
        surface.create_region(RegionSpec::new(Region::new(0, 0, 10, 1), style, "aaaaaaaaaa"));
        surface.create_region(RegionSpec::new(Region::new(0, 0, 3, 1), style, "bbb"));

        let mut terminal = Terminal::new(TestBackend::new(10, 1)).unwrap();
        terminal.draw(|f| render(f, &surface)).unwrap();
        assert_eq!(buffer_text(&terminal), "bbbaaaaaaa\n");
    }

    #[test]
    fn test_offscreen_region_is_skipped() {
        let mut surface = RetainedSurface::new();
        surface.create_region(RegionSpec::new(
            Region::new(50, 50, 10, 1),
            RegionStyle::plain(resolve(ThemeId::Dark, Role::Text)),
            "nowhere",
        ));
        let mut terminal = Terminal::new(TestBackend::new(10, 2)).unwrap();
        terminal.draw(|f| render(f, &surface)).unwrap();
        assert!(!buffer_text(&terminal).contains("nowhere"));
    }
}
