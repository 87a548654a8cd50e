//! Type definitions for the application state.
//!
//! - [`ViewId`] - Which view is active
//! - [`ApplicationState`] - Everything the shell owns about the session

use crate::ui::layout::{DEFAULT_HEIGHT, DEFAULT_WIDTH};
use crate::ui::theme::ThemeId;

/// Identifier of one of the four views. The set is closed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ViewId {
    #[default]
    Dashboard,
    DataBrowser,
    Settings,
    Help,
}

impl ViewId {
    /// Every view in declaration order. Digit `n` selects `ALL[n - 1]`.
    pub const ALL: [ViewId; 4] = [
        ViewId::Dashboard,
        ViewId::DataBrowser,
        ViewId::Settings,
        ViewId::Help,
    ];

    pub const fn index(self) -> usize {
        match self {
            ViewId::Dashboard => 0,
            ViewId::DataBrowser => 1,
            ViewId::Settings => 2,
            ViewId::Help => 3,
        }
    }

    /// Stable lowercase name, used in the status bar and in messages.
    pub fn name(self) -> &'static str {
        match self {
            ViewId::Dashboard => "dashboard",
            ViewId::DataBrowser => "data",
            ViewId::Settings => "settings",
            ViewId::Help => "help",
        }
    }

    /// Human-readable title shown in the sidebar.
    pub fn title(self) -> &'static str {
        match self {
            ViewId::Dashboard => "Dashboard",
            ViewId::DataBrowser => "Data Browser",
            ViewId::Settings => "Settings",
            ViewId::Help => "Help",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            ViewId::Dashboard => "Overview and quick actions",
            ViewId::DataBrowser => "Browse and manage data",
            ViewId::Settings => "Application configuration",
            ViewId::Help => "Documentation and help",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            ViewId::Dashboard => "📊",
            ViewId::DataBrowser => "📁",
            ViewId::Settings => "⚙",
            ViewId::Help => "❓",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        ViewId::ALL.into_iter().find(|view| view.name() == name)
    }

    pub fn digit(self) -> char {
        match self {
            ViewId::Dashboard => '1',
            ViewId::DataBrowser => '2',
            ViewId::Settings => '3',
            ViewId::Help => '4',
        }
    }
}

/// State owned exclusively by the shell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ApplicationState {
    pub active_view: ViewId,
    pub width: u16,
    pub height: u16,
    pub theme: ThemeId,
    pub quit_requested: bool,
}

impl Default for ApplicationState {
    fn default() -> Self {
        Self {
            active_view: ViewId::default(),
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            theme: ThemeId::default(),
            quit_requested: false,
        }
    }
}
