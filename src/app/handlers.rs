//! Input and message handling for the App.

use std::time::Duration;

use super::{App, AppMessage, LoopControl};
use crate::error::ShellResult;
use crate::events::InputEvent;
use crate::input::{Command, Dispatch};
use crate::notifications::Notice;
use crate::traits::DisplaySurface;
use crate::ui::chrome;

impl<S: DisplaySurface> App<S> {
    /// Handle one input event to completion.
    pub fn handle_input(&mut self, event: InputEvent) -> ShellResult<()> {
        if let InputEvent::Resize { width, height } = event {
            return self.update_terminal_dimensions(width, height);
        }

        let ctx = self.view_context();
        let active = self.views.active();
        let dispatcher = &self.dispatcher;
        let views = &mut self.views;
        let surface = &mut self.surface;

        let dispatch = dispatcher.dispatch_event(&event, active, |key| {
            views.handle_key(key, surface, &ctx)
        })?;

        match dispatch {
            Some(Dispatch::Global(command)) => self.execute_command(command),
            Some(Dispatch::ViewHandled { notice, .. }) => match notice {
                Some(notice) => self.show_notification(notice),
                None => {
                    self.flush();
                    Ok(())
                }
            },
            Some(Dispatch::Fallback(notice)) => self.show_notification(notice),
            None => Ok(()),
        }
    }

    pub fn execute_command(&mut self, command: Command) -> ShellResult<()> {
        match command {
            Command::Quit => {
                self.quit();
                Ok(())
            }
            Command::SwitchView(view) => self.switch_view(view).map(|_| ()),
            Command::ToggleTheme => self.toggle_theme().map(|_| ()),
            Command::Reserved(input) => self.show_notification(Notice::info(input.message())),
        }
    }

    /// Show the goodbye overlay and arm the grace timer. Repeated calls do
    /// nothing.
    pub fn quit(&mut self) {
        if self.state.quit_requested {
            return;
        }
        self.state.quit_requested = true;
        tracing::info!("Quit requested");

        let spec = chrome::goodbye_spec(self.state.width, self.state.height, self.state.theme);
        self.overlay = Some(self.surface.create_region(spec));
        self.flush();

        let grace = self.config.quit_grace;
        let message_tx = self.message_tx.clone();
        match tokio::runtime::Handle::try_current() {
            Ok(handle) => {
                self.quit_task = Some(handle.spawn(async move {
                    if grace > Duration::ZERO {
                        tokio::time::sleep(grace).await;
                    }
                    let _ = message_tx.send(AppMessage::QuitGraceElapsed);
                }));
            }
            Err(_) => {
                let _ = message_tx.send(AppMessage::QuitGraceElapsed);
            }
        }
    }

    /// Handle a message from a timer task.
    pub fn handle_message(&mut self, msg: AppMessage) -> ShellResult<LoopControl> {
        match msg {
            AppMessage::NotificationExpired { generation } => {
                if self.notifications.expire(generation) {
                    self.refresh_status()?;
                    self.flush();
                }
                Ok(LoopControl::Continue)
            }
            AppMessage::QuitGraceElapsed => {
                tracing::info!("Quit grace elapsed, exiting");
                Ok(LoopControl::Exit)
            }
        }
    }
}
