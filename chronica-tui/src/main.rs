//! chronica-tui - terminal browser for the console-history timeline
//!
//! Loads the event feed, then lets the user filter the timeline, open event
//! details, browse the gallery lightbox and flip through the stats widgets.

use crossbeam_channel::Receiver;

use chronica_tui::{
    app::{event::EventHandler, reduce, Action, AppState, FeedPhase},
    error::Result,
    services::{FeedOutcome, ServiceHandle},
    terminal::{install_panic_hook, restore_terminal, setup_terminal, Tui},
    ui,
};
use libchronica::{feed, Config, ReferenceDoc};

fn main() -> Result<()> {
    install_panic_hook();

    let mut terminal = setup_terminal()?;
    let result = run_app(&mut terminal);
    restore_terminal(terminal)?;

    result
}

fn run_app(terminal: &mut Tui) -> Result<()> {
    // Config is optional for browsing: a missing file falls back to defaults
    let config = Config::load().unwrap_or_else(|_| Config::default_config());

    let reference = match &config.reference {
        Some(reference) => feed::load_reference(std::path::Path::new(&reference.path)),
        None => ReferenceDoc::default(),
    };

    let mut state = AppState::new(&config, reference);
    let services = ServiceHandle::new()?;
    let event_handler = EventHandler::new(state.config.tick_rate_ms);

    // Kick off the initial load; at most one fetch is ever in flight
    let mut pending: Option<Receiver<FeedOutcome>> = Some(
        services.fetch_feed(config.feed.source.clone(), config.feed.timeout_secs),
    );
    state = reduce(state, Action::LoadStarted);

    loop {
        terminal.draw(|frame| ui::render(frame, &state))?;

        // Deliver a finished fetch before handling input
        if let Some(rx) = &pending {
            if let Ok(outcome) = rx.try_recv() {
                pending = None;
                let action = match outcome {
                    Ok(events) => Action::LoadCompleted(events),
                    Err(message) => Action::LoadFailed(message),
                };
                state = reduce(state, action);
            }
        }

        let action: Action = event_handler.next()?.into();
        let requested_load = wants_reload(&state, &action);
        state = reduce(state, action);

        if requested_load && pending.is_none() {
            pending = Some(
                services.fetch_feed(config.feed.source.clone(), config.feed.timeout_secs),
            );
            state = reduce(state, Action::LoadStarted);
        }

        if state.should_quit {
            break;
        }
    }

    Ok(())
}

/// Does this action ask for a feed load we are allowed to start?
fn wants_reload(state: &AppState, action: &Action) -> bool {
    match action {
        Action::LoadRequested => state.feed != FeedPhase::Loading,
        Action::Key(key) => {
            key.code == crossterm::event::KeyCode::Char('r')
                && !state.overlay_open()
                && state.feed != FeedPhase::Loading
        }
        _ => false,
    }
}
