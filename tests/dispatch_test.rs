//! Every key resolves to exactly one dispatch outcome.

use crossterm::event::{KeyCode, KeyModifiers};
use dashshell::app::ViewId;
use dashshell::input::{Command, Dispatch, InputDispatcher, KeyCombo};
use dashshell::notifications::Severity;
use dashshell::views::View;

fn all_codes() -> Vec<KeyCode> {
    let mut codes: Vec<KeyCode> = (' '..='~').map(KeyCode::Char).collect();
    codes.extend((1..=12).map(KeyCode::F));
    codes.extend([
        KeyCode::Backspace,
        KeyCode::Enter,
        KeyCode::Left,
        KeyCode::Right,
        KeyCode::Up,
        KeyCode::Down,
        KeyCode::Home,
        KeyCode::End,
        KeyCode::PageUp,
        KeyCode::PageDown,
        KeyCode::Tab,
        KeyCode::BackTab,
        KeyCode::Delete,
        KeyCode::Insert,
        KeyCode::Esc,
    ]);
    codes
}

fn all_modifiers() -> [KeyModifiers; 4] {
    [
        KeyModifiers::NONE,
        KeyModifiers::SHIFT,
        KeyModifiers::CONTROL,
        KeyModifiers::ALT,
    ]
}

#[test]
fn test_every_key_has_exactly_one_outcome() {
    let dispatcher = InputDispatcher::new();

    for active in ViewId::ALL {
        for code in all_codes() {
            for modifiers in all_modifiers() {
                let key = KeyCombo::new(code, modifiers);
                let mut view = View::new(active);
                let mut consulted = false;

                let dispatch = dispatcher
                    .dispatch_key(key, active, |k| {
                        consulted = true;
                        Ok(view.handle_key(k))
                    })
                    .unwrap();

                match dispatch {
                    Dispatch::Global(_) => assert!(!consulted, "{:?} reached the view", key),
                    Dispatch::ViewHandled { view, .. } => {
                        assert!(consulted);
                        assert_eq!(view, active);
                    }
                    Dispatch::Fallback(notice) => {
                        assert!(consulted);
                        assert_eq!(notice.severity, Severity::Warning);
                        assert!(notice.message.ends_with(&format!("{} view", active.name())));
                    }
                }
            }
        }
    }
}

#[test]
fn test_global_bindings_are_view_independent() {
    let dispatcher = InputDispatcher::new();
    let expected = [
        (KeyCombo::plain(KeyCode::Char('q')), Command::Quit),
        (KeyCombo::ctrl(KeyCode::Char('c')), Command::Quit),
        (KeyCombo::plain(KeyCode::Char('t')), Command::ToggleTheme),
        (
            KeyCombo::plain(KeyCode::Char('4')),
            Command::SwitchView(ViewId::Help),
        ),
    ];

    for active in ViewId::ALL {
        for (key, command) in expected {
            let dispatch = dispatcher
                .dispatch_key(key, active, |_| panic!("view consulted for {:?}", key))
                .unwrap();
            assert_eq!(dispatch, Dispatch::Global(command));
        }
    }
}

#[test]
fn test_view_keys_only_work_in_their_view() {
    let dispatcher = InputDispatcher::new();
    let sort = KeyCombo::plain(KeyCode::Char('s'));

    let mut browser = View::new(ViewId::DataBrowser);
    let dispatch = dispatcher
        .dispatch_key(sort, ViewId::DataBrowser, |k| Ok(browser.handle_key(k)))
        .unwrap();
    assert!(matches!(dispatch, Dispatch::ViewHandled { .. }));

    let mut help = View::new(ViewId::Help);
    let dispatch = dispatcher
        .dispatch_key(sort, ViewId::Help, |k| Ok(help.handle_key(k)))
        .unwrap();
    match dispatch {
        Dispatch::Fallback(notice) => {
            assert_eq!(notice.message, "Key 's' not available in help view")
        }
        other => panic!("expected fallback, got {:?}", other),
    }
}
