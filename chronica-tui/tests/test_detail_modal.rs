//! Detail overlay behavior
//!
//! Opening is reentrant (newest content wins), navigation is suspended
//! while open, and every dismissal converges on the same close path.

use crossterm::event::{KeyCode, KeyEvent};

use chronica_tui::app::{reduce, Action, AppState, Overlay};
use libchronica::types::{Event, ReferenceDoc};
use libchronica::Config;

fn loaded_state() -> AppState {
    let events = [7, 9]
        .into_iter()
        .map(|id| Event {
            id,
            year: 1990 + id as i32,
            era: "gen4".to_string(),
            category: "console-release".to_string(),
            manufacturer: "Sega".to_string(),
            console: format!("Console {}", id),
            title: format!("Event {}", id),
            ..Event::default()
        })
        .collect();

    let state = AppState::new(&Config::default_config(), ReferenceDoc::default());
    reduce(state, Action::LoadCompleted(events))
}

#[test]
fn test_opening_second_detail_replaces_first() {
    let state = reduce(loaded_state(), Action::OpenDetail(7));
    let state = reduce(state, Action::OpenDetail(9));

    match &state.overlay {
        Overlay::Detail(view) => {
            assert_eq!(view.id, 9);
            assert_eq!(view.title, "Event 9");
        }
        other => panic!("Expected detail overlay, got {:?}", other),
    }
}

#[test]
fn test_unknown_id_leaves_overlay_untouched() {
    let state = reduce(loaded_state(), Action::OpenDetail(42));
    assert_eq!(state.overlay, Overlay::None);
}

#[test]
fn test_activate_selected_opens_detail_with_console_link() {
    let state = reduce(loaded_state(), Action::ActivateSelected);

    match &state.overlay {
        Overlay::Detail(view) => {
            assert_eq!(view.id, 7);
            assert_eq!(view.console_link.as_deref(), Some("consoles/console-7.html"));
        }
        other => panic!("Expected detail overlay, got {:?}", other),
    }
}

#[test]
fn test_all_dismissals_converge_on_close() {
    for key in [KeyCode::Esc, KeyCode::Char('x'), KeyCode::Enter] {
        let state = reduce(loaded_state(), Action::OpenDetail(7));
        let state = reduce(state, Action::Key(KeyEvent::from(key)));
        assert_eq!(state.overlay, Overlay::None, "key {:?} must close", key);
    }
}

#[test]
fn test_navigation_suspended_while_open() {
    let state = reduce(loaded_state(), Action::OpenDetail(7));
    let state = reduce(state, Action::Key(KeyEvent::from(KeyCode::Down)));
    assert_eq!(state.timeline.selected, 0);

    let state = reduce(state, Action::Key(KeyEvent::from(KeyCode::Right)));
    assert_eq!(state.timeline.store.filter().token(), "all");
}
