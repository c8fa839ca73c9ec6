//! Actions for the reducer pattern
//!
//! All state transitions are triggered by actions; the reducer applies them
//! to state. Side-effectful actions (feed loading) are detected in the main
//! loop after reduction.

use crossterm::event::KeyEvent;

use libchronica::types::{Event, FilterState};

/// Actions that trigger state transitions
#[derive(Debug, Clone)]
pub enum Action {
    // === UI events ===
    /// Keyboard input event
    Key(KeyEvent),

    /// Periodic tick
    Tick,

    /// Terminal resize event
    Resize(u16, u16),

    // === Feed lifecycle ===
    /// User requested a (re)load; the fetch is spawned by the main loop
    LoadRequested,

    /// Fetch is in flight
    LoadStarted,

    /// Feed loaded successfully
    LoadCompleted(Vec<Event>),

    /// Feed failed; the message becomes the single visible error state
    LoadFailed(String),

    // === Navigation ===
    /// Switch to a different screen
    NavigateTo(Screen),

    /// Move timeline selection down
    SelectNext,

    /// Move timeline selection up
    SelectPrevious,

    /// Cycle the filter ring forward / backward
    CycleFilter(Direction),

    /// Set a specific filter value
    SetFilter(FilterState),

    /// Activate the selected timeline item (opens its detail)
    ActivateSelected,

    /// Open the detail overlay for a specific event id
    OpenDetail(i64),

    /// Close whatever overlay is open. Every dismissal path converges here.
    CloseOverlay,

    // === Gallery ===
    /// Move the gallery cursor / lightbox
    GalleryStep(Direction),

    /// Open the lightbox at the current gallery cursor
    OpenLightbox,

    // === Stats ===
    /// Step the generation comparison slider
    SliderStep(Direction),

    // === Overlays ===
    /// Show the help overlay
    ShowHelp,

    /// Quit the application
    Quit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Forward,
    Back,
}

/// Screen identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Timeline,
    Gallery,
    Stats,
}
