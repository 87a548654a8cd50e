//! The application shell.
//!
//! [`App`] owns [`ApplicationState`], the chrome regions, the view state
//! machine and the notification slot, and wires them together:
//! - [`handlers`] - input and message handling
//! - [`navigation`] - view switching and theme changes
//! - [`AppMessage`] - messages from timer tasks

mod handlers;
mod messages;
mod navigation;
mod types;

pub use messages::{AppMessage, LoopControl};
pub use types::{ApplicationState, ViewId};

use std::time::Instant;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use crate::error::ShellResult;
use crate::input::InputDispatcher;
use crate::notifications::{Notice, NotificationTimer};
use crate::startup::ShellConfig;
use crate::traits::{DisplaySurface, RegionHandle};
use crate::ui::chrome;
use crate::ui::layout::{centered, compute_layout, ScreenLayout};
use crate::ui::surface::RetainedSurface;
use crate::views::{ViewContext, ViewStateMachine};

/// Handles of the regions the shell owns for its whole lifetime.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChromeHandles {
    pub header: RegionHandle,
    pub sidebar: RegionHandle,
    pub status: RegionHandle,
}

/// Main application state.
pub struct App<S: DisplaySurface = RetainedSurface> {
    /// Active view, terminal size, theme and quit flag
    pub state: ApplicationState,
    pub config: ShellConfig,
    views: ViewStateMachine,
    notifications: NotificationTimer,
    dispatcher: InputDispatcher,
    surface: S,
    chrome: ChromeHandles,
    /// Goodbye overlay, present once quit was requested
    overlay: Option<RegionHandle>,
    /// Receiver for timer messages. The run loop takes it out.
    pub message_rx: Option<mpsc::UnboundedReceiver<AppMessage>>,
    /// Sender for timer messages (clone this to pass to async tasks)
    pub message_tx: mpsc::UnboundedSender<AppMessage>,
    quit_task: Option<JoinHandle<()>>,
    started_at: Instant,
    /// Uptime second last shown by the dashboard
    last_uptime_secs: u64,
    /// Dirty flag: when true, the UI needs to be redrawn.
    /// Set on every surface flush, cleared after each draw.
    pub needs_redraw: bool,
}

impl App {
    /// Create an app drawing into a [`RetainedSurface`] with default config.
    pub fn new() -> Self {
        Self::with_config(ShellConfig::default())
    }

    pub fn with_config(config: ShellConfig) -> Self {
        Self::with_surface(config, RetainedSurface::new())
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: DisplaySurface> App<S> {
    /// Create an app on an arbitrary surface and mount the chrome and the
    /// initial view at the default 80x24 size.
    pub fn with_surface(config: ShellConfig, mut surface: S) -> Self {
        let (message_tx, message_rx) = mpsc::unbounded_channel();

        let state = ApplicationState {
            theme: config.initial_theme,
            ..ApplicationState::default()
        };
        let layout = compute_layout(state.width, state.height);
        let started_at = Instant::now();

        let chrome = ChromeHandles {
            header: surface.create_region(chrome::header_spec(layout.header, state.theme)),
            sidebar: surface.create_region(chrome::sidebar_spec(
                layout.sidebar,
                state.theme,
                state.active_view,
            )),
            status: surface.create_region(chrome::status_spec(
                layout.status_bar,
                state.theme,
                state.active_view,
                None,
            )),
        };

        let mut views = ViewStateMachine::new(state.active_view);
        let ctx = ViewContext::new(state.theme, started_at.elapsed());
        views.render_view(&mut surface, layout.content, &ctx);
        surface.render();

        tracing::debug!(
            theme = state.theme.name(),
            view = state.active_view.name(),
            "Shell mounted"
        );

        Self {
            state,
            views,
            notifications: NotificationTimer::new(message_tx.clone()),
            dispatcher: InputDispatcher::new(),
            surface,
            chrome,
            overlay: None,
            message_rx: Some(message_rx),
            message_tx,
            quit_task: None,
            started_at,
            last_uptime_secs: 0,
            needs_redraw: true,
            config,
        }
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    pub fn views(&self) -> &ViewStateMachine {
        &self.views
    }

    pub fn notifications(&self) -> &NotificationTimer {
        &self.notifications
    }

    pub fn chrome(&self) -> ChromeHandles {
        self.chrome
    }

    pub fn overlay(&self) -> Option<RegionHandle> {
        self.overlay
    }

    pub fn active_view(&self) -> ViewId {
        self.state.active_view
    }

    pub fn is_quitting(&self) -> bool {
        self.state.quit_requested
    }

    pub fn layout(&self) -> ScreenLayout {
        compute_layout(self.state.width, self.state.height)
    }

    pub fn view_context(&self) -> ViewContext {
        ViewContext::new(self.state.theme, self.started_at.elapsed())
    }

    /// Mark the UI as needing a redraw.
    pub fn mark_dirty(&mut self) {
        self.needs_redraw = true;
    }

    pub fn terminal_width(&self) -> u16 {
        self.state.width
    }

    pub fn terminal_height(&self) -> u16 {
        self.state.height
    }

    /// Ask the surface for a frame and mark the app dirty.
    fn flush(&mut self) {
        self.surface.render();
        self.mark_dirty();
    }

    /// Periodic tick from the run loop. Keeps the dashboard uptime current.
    pub fn tick(&mut self) -> ShellResult<()> {
        if self.state.active_view != ViewId::Dashboard {
            return Ok(());
        }
        let secs = self.started_at.elapsed().as_secs();
        if secs == self.last_uptime_secs {
            return Ok(());
        }
        self.last_uptime_secs = secs;
        let ctx = self.view_context();
        self.views.refresh(&mut self.surface, &ctx)?;
        self.flush();
        Ok(())
    }

    /// Apply a new terminal size and move every region to its new slot.
    pub fn update_terminal_dimensions(&mut self, width: u16, height: u16) -> ShellResult<()> {
        if width == self.state.width && height == self.state.height {
            return Ok(());
        }
        tracing::debug!("Resize {}x{} -> {}x{}", self.state.width, self.state.height, width, height);

        self.state.width = width;
        self.state.height = height;
        let layout = self.layout();

        self.surface.set_geometry(self.chrome.header, layout.header)?;
        self.surface.set_geometry(self.chrome.sidebar, layout.sidebar)?;
        self.surface.set_geometry(self.chrome.status, layout.status_bar)?;
        self.views.relayout(&mut self.surface, layout.content)?;
        if let Some(overlay) = self.overlay {
            self.surface.set_geometry(
                overlay,
                centered(width, height, chrome::GOODBYE_WIDTH, chrome::GOODBYE_HEIGHT),
            )?;
        }

        self.flush();
        Ok(())
    }

    /// Show a notice in the status bar, replacing any live one.
    pub fn show_notification(&mut self, notice: Notice) -> ShellResult<()> {
        self.notifications
            .show_notice(notice, self.config.notification_duration);
        self.refresh_status()?;
        self.flush();
        Ok(())
    }

    pub fn clear_notification(&mut self) -> ShellResult<()> {
        if self.notifications.current().is_none() {
            return Ok(());
        }
        self.notifications.clear();
        self.refresh_status()?;
        self.flush();
        Ok(())
    }

    pub(crate) fn refresh_status(&mut self) -> ShellResult<()> {
        let notification = self.notifications.current();
        let text = chrome::status_text(self.state.active_view, notification);
        let style = chrome::status_style(self.state.theme, notification.map(|n| n.severity));
        self.surface.set_content(self.chrome.status, &text)?;
        self.surface.set_style(self.chrome.status, style)
    }

    pub(crate) fn refresh_header(&mut self) -> ShellResult<()> {
        self.surface
            .set_content(self.chrome.header, &chrome::header_text(self.state.theme))?;
        self.surface
            .set_style(self.chrome.header, chrome::header_style(self.state.theme))
    }

    pub(crate) fn refresh_sidebar(&mut self) -> ShellResult<()> {
        self.surface
            .set_content(self.chrome.sidebar, &chrome::sidebar_text(self.state.active_view))
    }

    /// Regions paint in creation order, so a freshly mounted view would
    /// cover the goodbye overlay. Remount the overlay after it.
    pub(crate) fn raise_overlay(&mut self) -> ShellResult<()> {
        if let Some(overlay) = self.overlay {
            self.surface.detach(overlay)?;
            let spec = chrome::goodbye_spec(self.state.width, self.state.height, self.state.theme);
            self.overlay = Some(self.surface.create_region(spec));
        }
        Ok(())
    }
}

impl<S: DisplaySurface> Drop for App<S> {
    fn drop(&mut self) {
        if let Some(task) = self.quit_task.take() {
            task.abort();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notifications::Severity;
    use crate::ui::layout::Region;
    use crate::ui::theme::ThemeId;

    #[test]
    fn test_new_app_mounts_four_regions() {
        let app = App::new();
        assert_eq!(app.surface().len(), 4);
        assert_eq!(app.active_view(), ViewId::Dashboard);
        assert_eq!(app.state.theme, ThemeId::Light);
        assert_eq!(app.terminal_width(), 80);
        assert_eq!(app.terminal_height(), 24);
        assert!(app.needs_redraw);
        assert!(app.message_rx.is_some());
    }

    #[test]
    fn test_initial_theme_from_config() {
        let app = App::with_config(ShellConfig::default().with_initial_theme(ThemeId::Dark));
        assert_eq!(app.state.theme, ThemeId::Dark);
        let header = app.surface().get(app.chrome().header).unwrap();
        assert!(header.content.contains("Theme: dark"));
    }

    #[test]
    fn test_status_bar_shows_view_name() {
        let app = App::new();
        let status = app.surface().get(app.chrome().status).unwrap();
        assert!(status.content.starts_with("View: dashboard | Press 'q' to quit"));
    }

    #[test]
    fn test_resize_moves_regions() {
        let mut app = App::new();
        app.needs_redraw = false;
        app.update_terminal_dimensions(100, 40).unwrap();
        let sidebar = app.surface().get(app.chrome().sidebar).unwrap();
        assert_eq!(sidebar.geometry, Region::new(0, 3, 20, 36));
        let content = app.views().content_handle().unwrap();
        assert_eq!(
            app.surface().get(content).unwrap().geometry,
            Region::new(20, 3, 80, 36)
        );
        assert!(app.needs_redraw);
    }

    #[test]
    fn test_tick_within_same_second_is_quiet() {
        let mut app = App::new();
        app.needs_redraw = false;
        app.tick().unwrap();
        assert!(!app.needs_redraw);
    }

    #[test]
    fn test_resize_to_same_size_is_noop() {
        let mut app = App::new();
        app.needs_redraw = false;
        app.update_terminal_dimensions(80, 24).unwrap();
        assert!(!app.needs_redraw);
    }

    #[test]
    fn test_notification_prefixes_status() {
        let mut app = App::new();
        app.show_notification(Notice::warning("careful")).unwrap();
        let status = app.surface().get(app.chrome().status).unwrap();
        assert!(status.content.starts_with("careful | View: dashboard"));
        assert_eq!(
            app.notifications().current().map(|n| n.severity),
            Some(Severity::Warning)
        );

        app.clear_notification().unwrap();
        let status = app.surface().get(app.chrome().status).unwrap();
        assert!(status.content.starts_with("View: dashboard"));
    }
}
