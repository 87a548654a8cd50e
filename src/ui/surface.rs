//! In-memory [`DisplaySurface`] painted by [`crate::ui::render`].

use std::collections::BTreeMap;

use crate::error::{ShellResult, UiError};
use crate::traits::{DisplaySurface, RegionHandle, RegionSpec, RegionStyle};
use crate::ui::layout::Region;

/// Region table kept between frames.
///
/// Handles are allocated from a monotonically increasing counter, so
/// iteration order is creation order and later regions paint on top.
#[derive(Debug, Default)]
pub struct RetainedSurface {
    regions: BTreeMap<RegionHandle, RegionSpec>,
    next_handle: u64,
    frame_requested: bool,
}

impl RetainedSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, handle: RegionHandle) -> Option<&RegionSpec> {
        self.regions.get(&handle)
    }

    pub fn contains(&self, handle: RegionHandle) -> bool {
        self.regions.contains_key(&handle)
    }

    /// Attached regions, bottom first.
    pub fn regions(&self) -> impl Iterator<Item = (RegionHandle, &RegionSpec)> {
        self.regions.iter().map(|(handle, spec)| (*handle, spec))
    }

    pub fn len(&self) -> usize {
        self.regions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.regions.is_empty()
    }

    /// Whether [`DisplaySurface::render`] was called since the last take.
    pub fn take_frame_request(&mut self) -> bool {
        std::mem::take(&mut self.frame_requested)
    }

    fn region_mut(&mut self, handle: RegionHandle) -> ShellResult<&mut RegionSpec> {
        self.regions
            .get_mut(&handle)
            .ok_or(UiError::StaleRegion {
                handle: handle.raw(),
            })
    }
}

impl DisplaySurface for RetainedSurface {
    fn create_region(&mut self, spec: RegionSpec) -> RegionHandle {
        let handle = RegionHandle::from_raw(self.next_handle);
        self.next_handle += 1;
        self.regions.insert(handle, spec);
        handle
    }

    fn set_content(&mut self, handle: RegionHandle, text: &str) -> ShellResult<()> {
        self.region_mut(handle)?.content = text.to_string();
        Ok(())
    }

    fn set_geometry(&mut self, handle: RegionHandle, geometry: Region) -> ShellResult<()> {
        self.region_mut(handle)?.geometry = geometry;
        Ok(())
    }

    fn set_style(&mut self, handle: RegionHandle, style: RegionStyle) -> ShellResult<()> {
        self.region_mut(handle)?.style = style;
        Ok(())
    }

    fn detach(&mut self, handle: RegionHandle) -> ShellResult<()> {
        self.regions
            .remove(&handle)
            .map(|_| ())
            .ok_or(UiError::StaleRegion {
                handle: handle.raw(),
            })
    }

    fn render(&mut self) {
        self.frame_requested = true;
    }
}
