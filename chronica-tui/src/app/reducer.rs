//! Pure reducer for state transitions
//!
//! `(AppState, Action) -> AppState` with no I/O. The feed fetch itself runs
//! in the main loop; its outcome arrives here as `LoadCompleted` or
//! `LoadFailed`.

use crossterm::event::{KeyCode, KeyEvent};

use libchronica::render::detail_view;

use super::actions::{Action, Direction, Screen};
use super::state::{AppState, FeedPhase, Overlay};

/// Apply an action to the state, returning the new state.
///
/// Deterministic and side-effect free: no network, no terminal, no clock.
pub fn reduce(state: AppState, action: Action) -> AppState {
    let mut state = state;

    match action {
        // === UI events ===
        Action::Key(key) => return handle_key(state, key),
        Action::Tick => {}
        Action::Resize(_, rows) => {
            state.config.viewport_rows = rows;
            sync_viewport(&mut state);
        }

        // === Feed lifecycle ===
        Action::LoadRequested => {
            // The fetch is spawned by the main loop; nothing changes here.
        }
        Action::LoadStarted => {
            state.feed = FeedPhase::Loading;
            state.status = Some("Loading timeline…".to_string());
        }
        Action::LoadCompleted(events) => {
            let count = events.len();
            state.feed = FeedPhase::Ready;
            state.timeline.set_events(events);
            state.status = Some(format!("{} events loaded", count));
            sync_viewport(&mut state);
        }
        Action::LoadFailed(message) => {
            // Exactly one visible error state, never a half-rendered view
            state.feed = FeedPhase::Failed(message);
            state.timeline.set_events(Vec::new());
            state.status = None;
        }

        // === Navigation ===
        Action::NavigateTo(screen) => {
            state.screen = screen;
        }
        Action::SelectNext => {
            state.timeline.select_next();
            sync_viewport(&mut state);
        }
        Action::SelectPrevious => {
            state.timeline.select_previous();
            sync_viewport(&mut state);
        }
        Action::CycleFilter(direction) => {
            let ring = state.timeline.store.filter_ring();
            if !ring.is_empty() {
                let len = ring.len();
                let index = match direction {
                    Direction::Forward => (state.timeline.filter_index + 1) % len,
                    Direction::Back => (state.timeline.filter_index + len - 1) % len,
                };
                state.timeline.filter_index = index;
                state.timeline.apply_filter(ring[index].clone());
                sync_viewport(&mut state);
            }
        }
        Action::SetFilter(filter) => {
            let ring = state.timeline.store.filter_ring();
            state.timeline.filter_index =
                ring.iter().position(|f| f == &filter).unwrap_or(0);
            state.timeline.apply_filter(filter);
            sync_viewport(&mut state);
        }
        Action::ActivateSelected => {
            if let Some(event) = state.timeline.selected_event() {
                state.overlay = Overlay::Detail(detail_view(event));
            }
        }
        Action::OpenDetail(id) => {
            // Reentrant: opening while open simply replaces the content
            if let Some(event) = state.timeline.store.event_by_id(id) {
                state.overlay = Overlay::Detail(detail_view(event));
            }
        }
        Action::CloseOverlay => {
            // The single exit path: every dismissal lands here
            state.overlay = Overlay::None;
            state.gallery.close();
        }

        // === Gallery ===
        Action::GalleryStep(direction) => match direction {
            Direction::Forward => state.gallery.advance(),
            Direction::Back => state.gallery.retreat(),
        },
        Action::OpenLightbox => {
            let cursor = state.gallery.cursor();
            state.gallery.open(cursor);
        }

        // === Stats ===
        Action::SliderStep(direction) => match direction {
            Direction::Forward => state.slider.advance(),
            Direction::Back => state.slider.retreat(),
        },

        // === Overlays ===
        Action::ShowHelp => {
            state.overlay = Overlay::Help;
        }
        Action::Quit => {
            state.should_quit = true;
        }
    }

    state
}

fn sync_viewport(state: &mut AppState) {
    let rows = state.config.list_rows();
    let margin = state.config.reveal_margin_rows as usize;
    state.timeline.sync_viewport(rows, margin);
}

/// Map keyboard input to actions. Overlays capture input first so timeline
/// navigation is suspended while a detail view or the lightbox is open.
fn handle_key(state: AppState, key: KeyEvent) -> AppState {
    // Quit works everywhere
    if key.code == KeyCode::Char('q') {
        return reduce(state, Action::Quit);
    }

    if state.overlay_open() {
        return handle_overlay_key(state, key);
    }

    // Global keys
    match key.code {
        KeyCode::F(1) | KeyCode::Char('?') => return reduce(state, Action::ShowHelp),
        KeyCode::Char('1') => return reduce(state, Action::NavigateTo(Screen::Timeline)),
        KeyCode::Char('2') => return reduce(state, Action::NavigateTo(Screen::Gallery)),
        KeyCode::Char('3') => return reduce(state, Action::NavigateTo(Screen::Stats)),
        KeyCode::Tab => {
            let next = match state.screen {
                Screen::Timeline => Screen::Gallery,
                Screen::Gallery => Screen::Stats,
                Screen::Stats => Screen::Timeline,
            };
            return reduce(state, Action::NavigateTo(next));
        }
        KeyCode::Char('r') if state.feed != FeedPhase::Loading => {
            return reduce(state, Action::LoadRequested);
        }
        _ => {}
    }

    match state.screen {
        Screen::Timeline => handle_timeline_key(state, key),
        Screen::Gallery => handle_gallery_key(state, key),
        Screen::Stats => handle_stats_key(state, key),
    }
}

fn handle_overlay_key(state: AppState, key: KeyEvent) -> AppState {
    match key.code {
        // Close control, overlay-area activation and Escape all converge
        // on the same exit action
        KeyCode::Esc | KeyCode::Char('x') | KeyCode::Enter => {
            reduce(state, Action::CloseOverlay)
        }
        KeyCode::Right | KeyCode::Char('l') if state.gallery.is_active() => {
            reduce(state, Action::GalleryStep(Direction::Forward))
        }
        KeyCode::Left | KeyCode::Char('h') if state.gallery.is_active() => {
            reduce(state, Action::GalleryStep(Direction::Back))
        }
        _ => state,
    }
}

fn handle_timeline_key(state: AppState, key: KeyEvent) -> AppState {
    match key.code {
        KeyCode::Down | KeyCode::Char('j') => reduce(state, Action::SelectNext),
        KeyCode::Up | KeyCode::Char('k') => reduce(state, Action::SelectPrevious),
        KeyCode::Right | KeyCode::Char('l') => {
            reduce(state, Action::CycleFilter(Direction::Forward))
        }
        KeyCode::Left | KeyCode::Char('h') => {
            reduce(state, Action::CycleFilter(Direction::Back))
        }
        KeyCode::Enter | KeyCode::Char(' ') => reduce(state, Action::ActivateSelected),
        _ => state,
    }
}

fn handle_gallery_key(state: AppState, key: KeyEvent) -> AppState {
    match key.code {
        KeyCode::Right | KeyCode::Char('l') => {
            reduce(state, Action::GalleryStep(Direction::Forward))
        }
        KeyCode::Left | KeyCode::Char('h') => {
            reduce(state, Action::GalleryStep(Direction::Back))
        }
        KeyCode::Enter | KeyCode::Char(' ') => reduce(state, Action::OpenLightbox),
        _ => state,
    }
}

fn handle_stats_key(state: AppState, key: KeyEvent) -> AppState {
    match key.code {
        KeyCode::Right | KeyCode::Char('l') => {
            reduce(state, Action::SliderStep(Direction::Forward))
        }
        KeyCode::Left | KeyCode::Char('h') => {
            reduce(state, Action::SliderStep(Direction::Back))
        }
        _ => state,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use libchronica::types::{Event, ReferenceDoc};
    use libchronica::Config;

    fn fresh_state() -> AppState {
        AppState::new(&Config::default_config(), ReferenceDoc::default())
    }

    fn sample_events() -> Vec<Event> {
        vec![
            Event {
                id: 1,
                year: 1983,
                era: "gen3".to_string(),
                category: "console-release".to_string(),
                manufacturer: "Nintendo".to_string(),
                console: "Famicom".to_string(),
                title: "Famicom launch".to_string(),
                ..Event::default()
            },
            Event {
                id: 2,
                year: 1989,
                era: "gen4".to_string(),
                category: "handheld".to_string(),
                manufacturer: "Nintendo".to_string(),
                console: "Game Boy".to_string(),
                title: "Game Boy launch".to_string(),
                ..Event::default()
            },
        ]
    }

    #[test]
    fn test_reducer_is_pure() {
        let state = fresh_state();
        let before = state.clone();

        let _ = reduce(state.clone(), Action::Quit);

        assert!(!before.should_quit);
        assert_eq!(before.screen, state.screen);
    }

    #[test]
    fn test_load_completed_enters_ready() {
        let state = fresh_state();
        let state = reduce(state, Action::LoadCompleted(sample_events()));

        assert_eq!(state.feed, FeedPhase::Ready);
        assert_eq!(state.timeline.visible_count(), 2);
        assert_eq!(state.status.as_deref(), Some("2 events loaded"));
    }

    #[test]
    fn test_load_failed_is_single_error_state() {
        let state = reduce(fresh_state(), Action::LoadCompleted(sample_events()));
        let state = reduce(state, Action::LoadFailed("connection refused".to_string()));

        assert_eq!(state.feed, FeedPhase::Failed("connection refused".to_string()));
        // No partially rendered view survives the failure
        assert_eq!(state.timeline.visible_count(), 0);
    }

    #[test]
    fn test_open_detail_is_reentrant() {
        let state = reduce(fresh_state(), Action::LoadCompleted(sample_events()));

        let state = reduce(state, Action::OpenDetail(1));
        let state = reduce(state, Action::OpenDetail(2));

        match &state.overlay {
            Overlay::Detail(view) => assert_eq!(view.id, 2),
            other => panic!("Expected detail overlay, got {:?}", other),
        }
    }

    #[test]
    fn test_close_overlay_single_exit() {
        let state = reduce(fresh_state(), Action::LoadCompleted(sample_events()));
        let state = reduce(state, Action::OpenDetail(1));
        let state = reduce(state, Action::CloseOverlay);
        assert_eq!(state.overlay, Overlay::None);
    }

    #[test]
    fn test_filter_cycle_applies_ring_value() {
        let state = reduce(fresh_state(), Action::LoadCompleted(sample_events()));

        // Ring: all, console-release, handheld, manufacturer-nintendo
        let state = reduce(state, Action::CycleFilter(Direction::Forward));
        assert_eq!(state.timeline.store.filter().token(), "console-release");
        assert_eq!(state.timeline.visible_count(), 1);

        let state = reduce(state, Action::CycleFilter(Direction::Back));
        assert_eq!(state.timeline.store.filter().token(), "all");
        assert_eq!(state.timeline.visible_count(), 2);
    }

    #[test]
    fn test_detail_keys_suspend_timeline_navigation() {
        let state = reduce(fresh_state(), Action::LoadCompleted(sample_events()));
        let state = reduce(state, Action::OpenDetail(1));
        let selected = state.timeline.selected;

        let state = reduce(state, Action::Key(KeyEvent::from(KeyCode::Down)));
        assert_eq!(state.timeline.selected, selected);

        // Escape converges on the close path
        let state = reduce(state, Action::Key(KeyEvent::from(KeyCode::Esc)));
        assert_eq!(state.overlay, Overlay::None);
    }

    #[test]
    fn test_quit_key_works_everywhere() {
        let state = reduce(fresh_state(), Action::Key(KeyEvent::from(KeyCode::Char('q'))));
        assert!(state.should_quit);
    }
}
