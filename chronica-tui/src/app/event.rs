//! Terminal event polling
//!
//! Polls crossterm for input with a tick timeout so the main loop can drain
//! the feed channel even when the user is idle.

use std::time::Duration;

use crossterm::event::{self, Event as CrosstermEvent, KeyEvent, KeyEventKind};

use crate::app::Action;

/// Raw terminal events before they become actions
#[derive(Debug, Clone)]
pub enum TuiEvent {
    Key(KeyEvent),
    Resize(u16, u16),
    Tick,
}

impl From<TuiEvent> for Action {
    fn from(event: TuiEvent) -> Self {
        match event {
            TuiEvent::Key(key) => Action::Key(key),
            TuiEvent::Resize(w, h) => Action::Resize(w, h),
            TuiEvent::Tick => Action::Tick,
        }
    }
}

/// Event handler that polls for terminal events
pub struct EventHandler {
    tick_rate: Duration,
}

impl EventHandler {
    pub fn new(tick_rate_ms: u64) -> Self {
        Self {
            tick_rate: Duration::from_millis(tick_rate_ms),
        }
    }

    /// Poll for the next event, blocking up to the tick rate.
    ///
    /// A timeout produces a `Tick`; key releases are filtered out so a
    /// single press maps to a single action.
    pub fn next(&self) -> std::io::Result<TuiEvent> {
        if event::poll(self.tick_rate)? {
            match event::read()? {
                CrosstermEvent::Key(key) if key.kind != KeyEventKind::Release => {
                    Ok(TuiEvent::Key(key))
                }
                CrosstermEvent::Resize(w, h) => Ok(TuiEvent::Resize(w, h)),
                _ => Ok(TuiEvent::Tick),
            }
        } else {
            Ok(TuiEvent::Tick)
        }
    }
}
