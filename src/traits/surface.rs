//! Display surface trait abstraction.
//!
//! The shell never draws cells directly. It creates retained regions on a
//! [`DisplaySurface`], updates them through opaque [`RegionHandle`]s, and
//! asks for a frame with [`DisplaySurface::render`]. The production
//! implementation is [`crate::ui::surface::RetainedSurface`]; tests swap
//! in a recording mock.

use std::fmt;

use crate::error::ShellResult;
use crate::ui::layout::Region;
use crate::ui::theme::StyleSpec;

/// Opaque reference to a region created on a surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RegionHandle(u64);

impl RegionHandle {
    pub const fn from_raw(raw: u64) -> Self {
        Self(raw)
    }

    pub const fn raw(self) -> u64 {
        self.0
    }
}

impl fmt::Display for RegionHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Which edges of a region carry a border.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BorderKind {
    #[default]
    None,
    All,
    Bottom,
}

/// Visual attributes of a region.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RegionStyle {
    pub body: StyleSpec,
    pub border: BorderKind,
    pub border_style: StyleSpec,
    /// Center each line horizontally.
    pub centered: bool,
}

impl RegionStyle {
    pub fn plain(body: StyleSpec) -> Self {
        Self {
            body,
            border: BorderKind::None,
            border_style: body,
            centered: false,
        }
    }

    pub fn with_border(mut self, border: BorderKind, style: StyleSpec) -> Self {
        self.border = border;
        self.border_style = style;
        self
    }

    pub fn centered(mut self) -> Self {
        self.centered = true;
        self
    }
}

/// Everything needed to create a region.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegionSpec {
    pub geometry: Region,
    pub style: RegionStyle,
    pub content: String,
}

impl RegionSpec {
    pub fn new(geometry: Region, style: RegionStyle, content: impl Into<String>) -> Self {
        Self {
            geometry,
            style,
            content: content.into(),
        }
    }
}

/// Retained-mode drawing target.
///
/// Every mutating call on a detached or unknown handle fails with
/// [`UiError::StaleRegion`](crate::error::UiError::StaleRegion) and leaves
/// the surface unchanged.
pub trait DisplaySurface {
    /// Attach a new region and return its handle.
    fn create_region(&mut self, spec: RegionSpec) -> RegionHandle;

    /// Replace the text of a region.
    fn set_content(&mut self, handle: RegionHandle, text: &str) -> ShellResult<()>;

    /// Move or resize a region.
    fn set_geometry(&mut self, handle: RegionHandle, geometry: Region) -> ShellResult<()>;

    /// Replace the visual attributes of a region.
    fn set_style(&mut self, handle: RegionHandle, style: RegionStyle) -> ShellResult<()>;

    /// Remove a region from the surface. The handle becomes stale.
    fn detach(&mut self, handle: RegionHandle) -> ShellResult<()>;

    /// Request that the next frame be painted.
    fn render(&mut self);
}
