//! Mock display surfaces for integration tests.

use dashshell::error::ShellResult;
use dashshell::traits::{DisplaySurface, RegionHandle, RegionSpec, RegionStyle};
use dashshell::ui::{Region, RetainedSurface};

/// Number of calls per [`DisplaySurface`] operation.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct CallCounts {
    pub create: usize,
    pub set_content: usize,
    pub set_geometry: usize,
    pub set_style: usize,
    pub detach: usize,
    pub render: usize,
}

impl CallCounts {
    pub fn total(&self) -> usize {
        self.create + self.set_content + self.set_geometry + self.set_style + self.detach + self.render
    }
}

/// A [`RetainedSurface`] that counts every call made to it.
#[derive(Debug, Default)]
pub struct RecordingSurface {
    inner: RetainedSurface,
    calls: CallCounts,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn calls(&self) -> CallCounts {
        self.calls
    }

    pub fn reset_calls(&mut self) {
        self.calls = CallCounts::default();
    }

    pub fn inner(&self) -> &RetainedSurface {
        &self.inner
    }
}

impl DisplaySurface for RecordingSurface {
    fn create_region(&mut self, spec: RegionSpec) -> RegionHandle {
        self.calls.create += 1;
        self.inner.create_region(spec)
    }

    fn set_content(&mut self, handle: RegionHandle, text: &str) -> ShellResult<()> {
        self.calls.set_content += 1;
        self.inner.set_content(handle, text)
    }

    fn set_geometry(&mut self, handle: RegionHandle, geometry: Region) -> ShellResult<()> {
        self.calls.set_geometry += 1;
        self.inner.set_geometry(handle, geometry)
    }

    fn set_style(&mut self, handle: RegionHandle, style: RegionStyle) -> ShellResult<()> {
        self.calls.set_style += 1;
        self.inner.set_style(handle, style)
    }

    fn detach(&mut self, handle: RegionHandle) -> ShellResult<()> {
        self.calls.detach += 1;
        self.inner.detach(handle)
    }

    fn render(&mut self) {
        self.calls.render += 1;
        self.inner.render();
    }
}
