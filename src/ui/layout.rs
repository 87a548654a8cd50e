//! Fixed four-region layout.
//!
//! The screen is split into a header band, a sidebar, a content area and a
//! single status row:
//!
//! ```text
//! +--------------------------------------+
//! | header (3 rows)                      |
//! +------------+-------------------------+
//! | sidebar    | content                 |
//! | (20 cols)  |                         |
//! +------------+-------------------------+
//! | status bar (last row)                |
//! +--------------------------------------+
//! ```
//!
//! All arithmetic saturates: terminals smaller than the chrome collapse
//! regions to zero size instead of producing negative geometry.

use ratatui::layout::Rect;

// ============================================================================
// Constants
// ============================================================================

/// Rows taken by the header.
pub const HEADER_HEIGHT: u16 = 3;

/// Columns taken by the sidebar.
pub const SIDEBAR_WIDTH: u16 = 20;

/// Rows taken by the status bar.
pub const STATUS_BAR_HEIGHT: u16 = 1;

/// Terminal width assumed before the first resize event.
pub const DEFAULT_WIDTH: u16 = 80;

/// Terminal height assumed before the first resize event.
pub const DEFAULT_HEIGHT: u16 = 24;

// ============================================================================
// Regions
// ============================================================================

/// Named layout slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Slot {
    Header,
    Sidebar,
    Content,
    StatusBar,
}

impl Slot {
    pub const ALL: [Slot; 4] = [Slot::Header, Slot::Sidebar, Slot::Content, Slot::StatusBar];
}

/// Rectangle in character cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Region {
    pub left: u16,
    pub top: u16,
    pub width: u16,
    pub height: u16,
}

impl Region {
    pub const fn new(left: u16, top: u16, width: u16, height: u16) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    /// One past the last column.
    pub fn right(&self) -> u16 {
        self.left.saturating_add(self.width)
    }

    /// One past the last row.
    pub fn bottom(&self) -> u16 {
        self.top.saturating_add(self.height)
    }

    pub fn area(&self) -> u32 {
        self.width as u32 * self.height as u32
    }

    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// True when the two regions share at least one cell.
    pub fn intersects(&self, other: &Region) -> bool {
        !self.is_empty()
            && !other.is_empty()
            && self.left < other.right()
            && other.left < self.right()
            && self.top < other.bottom()
            && other.top < self.bottom()
    }
}

impl From<Region> for Rect {
    fn from(region: Region) -> Self {
        Rect::new(region.left, region.top, region.width, region.height)
    }
}

impl From<Rect> for Region {
    fn from(rect: Rect) -> Self {
        Region::new(rect.x, rect.y, rect.width, rect.height)
    }
}

// ============================================================================
// Screen Layout
// ============================================================================

/// Geometry of all four slots for one terminal size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenLayout {
    pub header: Region,
    pub sidebar: Region,
    pub content: Region,
    pub status_bar: Region,
}

impl ScreenLayout {
    pub fn region(&self, slot: Slot) -> Region {
        match slot {
            Slot::Header => self.header,
            Slot::Sidebar => self.sidebar,
            Slot::Content => self.content,
            Slot::StatusBar => self.status_bar,
        }
    }

    pub fn regions(&self) -> [(Slot, Region); 4] {
        Slot::ALL.map(|slot| (slot, self.region(slot)))
    }
}

/// Compute the four regions for a `width` x `height` terminal.
///
/// For `width >= 20` and `height >= 4` this is exactly:
///
/// | slot       | left | top        | width      | height     |
/// |------------|------|------------|------------|------------|
/// | header     | 0    | 0          | width      | 3          |
/// | sidebar    | 0    | 3          | 20         | height - 4 |
/// | content    | 20   | 3          | width - 20 | height - 4 |
/// | status bar | 0    | height - 1 | width      | 1          |
///
/// Below that the status bar keeps the last row, the header shrinks to what
/// is left above it, and the sidebar keeps at most `width` columns.
pub fn compute_layout(width: u16, height: u16) -> ScreenLayout {
    let status_height = STATUS_BAR_HEIGHT.min(height);
    let header_height = HEADER_HEIGHT.min(height - status_height);
    let middle_height = height - status_height - header_height;
    let sidebar_width = SIDEBAR_WIDTH.min(width);

    ScreenLayout {
        header: Region::new(0, 0, width, header_height),
        sidebar: Region::new(0, header_height, sidebar_width, middle_height),
        content: Region::new(
            sidebar_width,
            header_height,
            width - sidebar_width,
            middle_height,
        ),
        status_bar: Region::new(0, height - status_height, width, status_height),
    }
}

/// A `width` x `height` box centered on a `screen_width` x `screen_height`
/// screen, shrunk to fit when the screen is smaller.
pub fn centered(screen_width: u16, screen_height: u16, width: u16, height: u16) -> Region {
    let width = width.min(screen_width);
    let height = height.min(screen_height);
    Region::new(
        (screen_width - width) / 2,
        (screen_height - height) / 2,
        width,
        height,
    )
}
