//! View switching and theme changes.

use super::{App, ViewId};
use crate::error::{ShellResult, UiError};
use crate::traits::DisplaySurface;
use crate::ui::chrome;
use crate::ui::theme::ThemeId;
use crate::views::Transition;

impl<S: DisplaySurface> App<S> {
    /// Activate `target`. Switching to the active view touches nothing.
    pub fn switch_view(&mut self, target: ViewId) -> ShellResult<Transition> {
        let area = self.layout().content;
        let ctx = self.view_context();
        let transition = self
            .views
            .switch_to(target, &mut self.surface, area, &ctx)?;

        if let Transition::Switched { to, .. } = transition {
            self.state.active_view = to;
            self.refresh_sidebar()?;
            self.refresh_status()?;
            self.raise_overlay()?;
            self.flush();
        }
        Ok(transition)
    }

    /// Activate a view by name. Unknown names are logged and leave all
    /// state untouched.
    pub fn switch_view_named(&mut self, name: &str) -> ShellResult<Transition> {
        match ViewId::from_name(name) {
            Some(target) => self.switch_view(target),
            None => {
                let err = UiError::UnknownView {
                    name: name.to_string(),
                };
                tracing::error!(code = err.error_code(), "{}", err);
                Err(err)
            }
        }
    }

    /// Flip between light and dark and restyle every region.
    pub fn toggle_theme(&mut self) -> ShellResult<ThemeId> {
        let theme = self.state.theme.toggle();
        self.state.theme = theme;
        tracing::debug!("Theme changed to {}", theme.name());

        self.refresh_header()?;
        self.surface
            .set_style(self.chrome.sidebar, chrome::sidebar_style(theme))?;
        self.refresh_status()?;

        let ctx = self.view_context();
        self.views.restyle(&mut self.surface, theme)?;
        // The dashboard prints the theme name.
        self.views.refresh(&mut self.surface, &ctx)?;

        if let Some(overlay) = self.overlay {
            self.surface.set_style(overlay, chrome::goodbye_style(theme))?;
        }

        self.flush();
        Ok(theme)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_switch_updates_state_and_sidebar() {
        let mut app = crate::app::App::new();
        let transition = app.switch_view(ViewId::Settings).unwrap();
        assert_eq!(
            transition,
            Transition::Switched {
                from: ViewId::Dashboard,
                to: ViewId::Settings
            }
        );
        assert_eq!(app.active_view(), ViewId::Settings);
        let sidebar = app.surface().get(app.chrome().sidebar).unwrap();
        assert!(sidebar.content.contains("▶ 3 Settings"));
    }

    #[test]
    fn test_self_switch_does_not_flush() {
        let mut app = crate::app::App::new();
        app.needs_redraw = false;
        app.surface_mut().take_frame_request();
        assert_eq!(app.switch_view(ViewId::Dashboard).unwrap(), Transition::Unchanged);
        assert!(!app.needs_redraw);
        assert!(!app.surface_mut().take_frame_request());
    }

    #[test]
    fn test_unknown_view_changes_nothing() {
        let mut app = crate::app::App::new();
        let before = app.state;
        let err = app.switch_view_named("reports").unwrap_err();
        assert_eq!(
            err,
            UiError::UnknownView {
                name: "reports".to_string()
            }
        );
        assert_eq!(app.state, before);
    }

    #[test]
    fn test_switch_by_name() {
        let mut app = crate::app::App::new();
        app.switch_view_named("help").unwrap();
        assert_eq!(app.active_view(), ViewId::Help);
    }

    #[test]
    fn test_toggle_theme_restyles_header_and_content() {
        let mut app = crate::app::App::new();
        assert_eq!(app.toggle_theme().unwrap(), ThemeId::Dark);

        let header = app.surface().get(app.chrome().header).unwrap();
        assert!(header.content.contains("Theme: dark ☾"));
        assert_eq!(header.style, chrome::header_style(ThemeId::Dark));

        let content = app.views().content_handle().unwrap();
        let content = app.surface().get(content).unwrap();
        assert_eq!(content.style, chrome::content_style(ThemeId::Dark));

        assert_eq!(app.toggle_theme().unwrap(), ThemeId::Light);
    }

    #[test]
    fn test_switch_during_grace_keeps_overlay_last() {
        let mut app = crate::app::App::new();
        app.quit();
        app.switch_view(ViewId::DataBrowser).unwrap();

        let overlay = app.overlay().unwrap();
        let content = app.views().content_handle().unwrap();
        assert!(overlay > content);
        let goodbye = app.surface().get(overlay).unwrap();
        assert!(goodbye.content.contains(chrome::GOODBYE_MESSAGE));
    }

    #[test]
    fn test_stale_content_handle_is_reported() {
        let mut app = crate::app::App::new();
        let content = app.views().content_handle().unwrap();
        app.surface_mut().detach(content).unwrap();
        assert!(matches!(
            app.toggle_theme(),
            Err(UiError::StaleRegion { .. })
        ));
    }
}
