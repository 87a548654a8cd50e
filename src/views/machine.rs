//! View state machine.
//!
//! Holds the active [`ViewId`] and the one content region currently on the
//! surface. A transition detaches the old view's region, activates the new
//! view, and creates a region holding its content. Switching to the view
//! that is already active touches nothing.

use super::{KeyOutcome, ViewContext, ViewTable};
use crate::app::ViewId;
use crate::error::{ShellResult, UiError};
use crate::input::KeyCombo;
use crate::traits::{DisplaySurface, RegionHandle, RegionSpec};
use crate::ui::chrome;
use crate::ui::layout::Region;
use crate::ui::theme::ThemeId;

/// What a switch request did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// Target was already active.
    Unchanged,
    Switched { from: ViewId, to: ViewId },
}

#[derive(Debug)]
pub struct ViewStateMachine {
    views: ViewTable,
    active: ViewId,
    content: Option<RegionHandle>,
}

impl ViewStateMachine {
    pub fn new(initial: ViewId) -> Self {
        Self {
            views: ViewTable::new(),
            active: initial,
            content: None,
        }
    }

    pub fn active(&self) -> ViewId {
        self.active
    }

    pub fn views(&self) -> &ViewTable {
        &self.views
    }

    /// Handle of the content region, if the active view is on the surface.
    pub fn content_handle(&self) -> Option<RegionHandle> {
        self.content
    }

    /// Put the active view on the surface. Does nothing if it already is.
    pub fn render_view<S: DisplaySurface>(
        &mut self,
        surface: &mut S,
        area: Region,
        ctx: &ViewContext,
    ) -> RegionHandle {
        if let Some(handle) = self.content {
            return handle;
        }
        let text = self.views[self.active].content(ctx);
        let handle = surface.create_region(RegionSpec::new(area, chrome::content_style(ctx.theme), text));
        self.content = Some(handle);
        handle
    }

    /// Take the active view's region off the surface. The view keeps its state.
    /// A failed detach leaves the handle in place.
    pub fn clear_current<S: DisplaySurface>(&mut self, surface: &mut S) -> ShellResult<()> {
        if let Some(handle) = self.content {
            surface.detach(handle)?;
            self.content = None;
        }
        Ok(())
    }

    pub fn switch_to<S: DisplaySurface>(
        &mut self,
        target: ViewId,
        surface: &mut S,
        area: Region,
        ctx: &ViewContext,
    ) -> ShellResult<Transition> {
        if target == self.active && self.content.is_some() {
            return Ok(Transition::Unchanged);
        }
        let from = self.active;
        self.clear_current(surface)?;
        self.active = target;
        self.render_view(surface, area, ctx);
        tracing::debug!("View transition: {} -> {}", from.name(), target.name());
        Ok(Transition::Switched { from, to: target })
    }

    /// Switch by view name. Unknown names leave the machine untouched.
    pub fn switch_to_named<S: DisplaySurface>(
        &mut self,
        name: &str,
        surface: &mut S,
        area: Region,
        ctx: &ViewContext,
    ) -> ShellResult<Transition> {
        let target = ViewId::from_name(name).ok_or_else(|| UiError::UnknownView {
            name: name.to_string(),
        })?;
        self.switch_to(target, surface, area, ctx)
    }

    /// Push the active view's current content again.
    pub fn refresh<S: DisplaySurface>(&mut self, surface: &mut S, ctx: &ViewContext) -> ShellResult<()> {
        if let Some(handle) = self.content {
            surface.set_content(handle, &self.views[self.active].content(ctx))?;
        }
        Ok(())
    }

    pub fn relayout<S: DisplaySurface>(&mut self, surface: &mut S, area: Region) -> ShellResult<()> {
        if let Some(handle) = self.content {
            surface.set_geometry(handle, area)?;
        }
        Ok(())
    }

    pub fn restyle<S: DisplaySurface>(&mut self, surface: &mut S, theme: ThemeId) -> ShellResult<()> {
        if let Some(handle) = self.content {
            surface.set_style(handle, chrome::content_style(theme))?;
        }
        Ok(())
    }

    /// Offer a key to the active view and re-push its content if it asks.
    pub fn handle_key<S: DisplaySurface>(
        &mut self,
        key: &KeyCombo,
        surface: &mut S,
        ctx: &ViewContext,
    ) -> ShellResult<KeyOutcome> {
        let outcome = self.views[self.active].handle_key(key);
        if let KeyOutcome::Handled { rerender: true, .. } = outcome {
            self.refresh(surface, ctx)?;
        }
        Ok(outcome)
    }
}
