//! Full-frame rendering through ratatui's TestBackend.

use crossterm::event::KeyCode;
use dashshell::app::App;
use dashshell::events::InputEvent;
use dashshell::input::KeyCombo;
use dashshell::startup::ShellConfig;
use dashshell::ui::{self, chrome};
use ratatui::{backend::TestBackend, Terminal};

fn draw(app: &App, width: u16, height: u16) -> Vec<String> {
    let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
    terminal.draw(|f| ui::render(f, app.surface())).unwrap();

    let buffer = terminal.backend().buffer();
    (0..height)
        .map(|y| (0..width).map(|x| buffer[(x, y)].symbol()).collect::<String>())
        .collect()
}

fn app() -> App {
    App::with_config(ShellConfig::default().with_log_file(None))
}

#[test]
fn test_frame_draws_every_region() {
    let app = app();
    let rows = draw(&app, 80, 24);

    assert!(rows[0].contains(chrome::APP_TITLE));
    assert!(rows[1].contains("Theme: light"));
    assert!(rows[4].contains("Navigation"));
    assert!(rows[4].contains("Dashboard"));
    assert!(rows[23].starts_with("View: dashboard"));
}

#[test]
fn test_sidebar_and_content_borders_meet() {
    let app = app();
    let rows = draw(&app, 80, 24);
    let border_row: Vec<char> = rows[3].chars().collect();
    // sidebar top-left, sidebar top-right, content top-left
    assert_eq!(border_row[0], '┌');
    assert_eq!(border_row[19], '┐');
    assert_eq!(border_row[20], '┌');
}

#[test]
fn test_resized_frame_uses_new_geometry() {
    let mut app = app();
    app.update_terminal_dimensions(100, 40).unwrap();
    let rows = draw(&app, 100, 40);
    assert!(rows[39].starts_with("View: dashboard"));
    assert_eq!(rows[38].chars().nth(20), Some('└'));
}

#[test]
fn test_quit_overlay_is_drawn_on_top() {
    let mut app = app();
    app.quit();
    let rows = draw(&app, 80, 24);
    let line = rows
        .iter()
        .position(|row| row.contains(chrome::GOODBYE_MESSAGE))
        .expect("goodbye message on screen");
    assert!((9..14).contains(&line));
}

#[test]
fn test_overlay_stays_on_top_after_switch_during_grace() {
    let mut app = app();
    app.quit();
    app.handle_input(InputEvent::Key(KeyCombo::plain(KeyCode::Char('2'))))
        .unwrap();

    let rows = draw(&app, 80, 24);
    let line = rows
        .iter()
        .position(|row| row.contains(chrome::GOODBYE_MESSAGE))
        .expect("goodbye message survives the view switch");
    assert!((9..14).contains(&line));
    assert!(rows[23].starts_with("View: data"));
}

#[test]
fn test_tiny_terminal_does_not_panic() {
    let mut app = app();
    app.update_terminal_dimensions(5, 2).unwrap();
    let rows = draw(&app, 5, 2);
    assert_eq!(rows.len(), 2);
}
