//! Common test utilities for integration tests.
//!
//! # Example
//!
//! ```ignore
//! mod common;
//! use common::{press, recording_app};
//!
//! let mut app = recording_app();
//! press(&mut app, '2');
//! ```

#![allow(dead_code)]

pub mod mocks;

pub use mocks::*;

use crossterm::event::KeyCode;
use dashshell::app::App;
use dashshell::events::InputEvent;
use dashshell::input::KeyCombo;
use dashshell::startup::ShellConfig;
use dashshell::traits::DisplaySurface;

/// App on a [`RecordingSurface`] with its mount-time calls cleared.
pub fn recording_app() -> App<RecordingSurface> {
    let mut app = App::with_surface(ShellConfig::default().with_log_file(None), RecordingSurface::new());
    app.surface_mut().reset_calls();
    app.needs_redraw = false;
    app
}

pub fn key(c: char) -> InputEvent {
    InputEvent::Key(KeyCombo::plain(KeyCode::Char(c)))
}

/// Feed a plain character key into the app.
pub fn press<S: DisplaySurface>(app: &mut App<S>, c: char) {
    app.handle_input(key(c)).expect("key handling failed");
}

/// Text of the status bar region.
pub fn status_text(app: &App) -> String {
    app.surface()
        .get(app.chrome().status)
        .map(|region| region.content.clone())
        .unwrap_or_default()
}

/// Text of the active content region.
pub fn content_text(app: &App) -> String {
    app.views()
        .content_handle()
        .and_then(|handle| app.surface().get(handle))
        .map(|region| region.content.clone())
        .unwrap_or_default()
}
