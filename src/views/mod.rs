//! The four dashboard views and the state machine that switches them.
//!
//! Views are plain data: they produce their content as text and react to
//! keys by returning a [`KeyOutcome`]. They never hold region handles or
//! call into the shell; [`ViewStateMachine`] and the shell apply the
//! effects they describe.

mod dashboard;
mod data_browser;
mod help;
mod machine;
mod settings;

pub use dashboard::DashboardView;
pub use data_browser::{DataBrowserView, DataRow, SortColumn, SortDirection, SortOrder};
pub use help::HelpView;
pub use machine::{Transition, ViewStateMachine};
pub use settings::{LogLevel, Settings, SettingsView};

use std::ops::{Index, IndexMut};
use std::time::Duration;

use crossterm::event::{KeyCode, KeyModifiers};

use crate::app::ViewId;
use crate::input::KeyCombo;
use crate::notifications::Notice;
use crate::ui::theme::ThemeId;

// ============================================================================
// View Context and Outcomes
// ============================================================================

/// Read-only data a view may show.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewContext {
    pub theme: ThemeId,
    pub uptime: Duration,
}

impl ViewContext {
    pub fn new(theme: ThemeId, uptime: Duration) -> Self {
        Self { theme, uptime }
    }

    pub fn platform(&self) -> &'static str {
        std::env::consts::OS
    }

    pub fn arch(&self) -> &'static str {
        std::env::consts::ARCH
    }
}

/// Result of offering a key to a view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyOutcome {
    /// The view does not use this key.
    Unhandled,
    /// The view consumed the key.
    Handled {
        /// Content changed and must be pushed again.
        rerender: bool,
        notice: Option<Notice>,
    },
}

impl KeyOutcome {
    pub fn rerender(notice: Notice) -> Self {
        KeyOutcome::Handled {
            rerender: true,
            notice: Some(notice),
        }
    }

    pub fn notify(notice: Notice) -> Self {
        KeyOutcome::Handled {
            rerender: false,
            notice: Some(notice),
        }
    }

    pub fn is_handled(&self) -> bool {
        matches!(self, KeyOutcome::Handled { .. })
    }
}

/// The character of an unmodified key press, if it is one.
pub(crate) fn plain_char(key: &KeyCombo) -> Option<char> {
    match key.code {
        KeyCode::Char(c) if key.modifiers.difference(KeyModifiers::SHIFT).is_empty() => Some(c),
        _ => None,
    }
}

// ============================================================================
// View
// ============================================================================

/// One of the four views, with its private state.
#[derive(Debug, Clone)]
pub enum View {
    Dashboard(DashboardView),
    DataBrowser(DataBrowserView),
    Settings(SettingsView),
    Help(HelpView),
}

impl View {
    pub fn new(id: ViewId) -> Self {
        match id {
            ViewId::Dashboard => View::Dashboard(DashboardView::new()),
            ViewId::DataBrowser => View::DataBrowser(DataBrowserView::new()),
            ViewId::Settings => View::Settings(SettingsView::new()),
            ViewId::Help => View::Help(HelpView::new()),
        }
    }

    pub fn id(&self) -> ViewId {
        match self {
            View::Dashboard(_) => ViewId::Dashboard,
            View::DataBrowser(_) => ViewId::DataBrowser,
            View::Settings(_) => ViewId::Settings,
            View::Help(_) => ViewId::Help,
        }
    }

    pub fn content(&self, ctx: &ViewContext) -> String {
        match self {
            View::Dashboard(view) => view.content(ctx),
            View::DataBrowser(view) => view.content(ctx),
            View::Settings(view) => view.content(ctx),
            View::Help(view) => view.content(ctx),
        }
    }

    pub fn handle_key(&mut self, key: &KeyCombo) -> KeyOutcome {
        match self {
            View::Dashboard(view) => view.handle_key(key),
            View::DataBrowser(view) => view.handle_key(key),
            View::Settings(view) => view.handle_key(key),
            View::Help(view) => view.handle_key(key),
        }
    }
}

/// All views, created once and indexed by [`ViewId`].
#[derive(Debug, Clone)]
pub struct ViewTable {
    views: [View; 4],
}

impl ViewTable {
    pub fn new() -> Self {
        Self {
            views: ViewId::ALL.map(View::new),
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &View> {
        self.views.iter()
    }
}

impl Default for ViewTable {
    fn default() -> Self {
        Self::new()
    }
}

impl Index<ViewId> for ViewTable {
    type Output = View;

    fn index(&self, id: ViewId) -> &View {
        &self.views[id.index()]
    }
}

impl IndexMut<ViewId> for ViewTable {
    fn index_mut(&mut self, id: ViewId) -> &mut View {
        &mut self.views[id.index()]
    }
}
