//! Application state
//!
//! Single source of truth for the browser. All transitions happen through
//! the reducer (see `reducer.rs`); the store, cursors and overlay are owned
//! values here, never module-level globals.

use std::collections::HashSet;

use libchronica::gallery::Gallery;
use libchronica::render::{timeline_rows, DetailView, TimelineRow};
use libchronica::store::TimelineStore;
use libchronica::types::{Event, FilterState, ReferenceDoc};
use libchronica::viz::Slider;

use super::actions::Screen;

/// Root application state
#[derive(Debug, Clone)]
pub struct AppState {
    /// Should the application quit?
    pub should_quit: bool,

    /// Current active screen
    pub screen: Screen,

    /// Feed lifecycle phase
    pub feed: FeedPhase,

    /// Timeline browsing state
    pub timeline: TimelineState,

    /// Gallery cursor and lightbox
    pub gallery: Gallery,

    /// Generation comparison slider (stats screen)
    pub slider: Slider,

    /// Reference data for the stats screen
    pub reference: ReferenceDoc,

    /// Currently open overlay, if any
    pub overlay: Overlay,

    /// Status line message
    pub status: Option<String>,

    /// UI configuration
    pub config: UiConfig,
}

/// Feed lifecycle. Rendering is suspended while loading; a failure is shown
/// as exactly one error message in place of the timeline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FeedPhase {
    Loading,
    Ready,
    Failed(String),
}

/// Overlays above the current screen. The lightbox is tracked by the
/// gallery itself; `AppState::overlay_open` accounts for both.
#[derive(Debug, Clone, PartialEq)]
pub enum Overlay {
    None,
    Detail(DetailView),
    Help,
}

/// Timeline browsing state
#[derive(Debug, Clone, Default)]
pub struct TimelineState {
    pub store: TimelineStore,

    /// Selection index into the visible events
    pub selected: usize,

    /// First display row in the viewport
    pub scroll_offset: usize,

    /// Ids that have entered the viewport at least once. Monotonic: ids are
    /// inserted, never removed. Presentation only, independent of the
    /// filter.
    pub revealed: HashSet<i64>,

    /// Position in the filter ring
    pub filter_index: usize,
}

impl TimelineState {
    pub fn visible_count(&self) -> usize {
        self.store.visible_events().count()
    }

    pub fn selected_event(&self) -> Option<&Event> {
        self.store.visible_events().nth(self.selected)
    }

    /// Replace the loaded events, reapplying the active filter and resetting
    /// the cursor. Revealed ids are kept; the set only grows.
    pub fn set_events(&mut self, events: Vec<Event>) {
        let filter = self.store.filter().clone();
        self.store = TimelineStore::new(events);
        self.store.set_filter(filter);
        self.selected = 0;
        self.scroll_offset = 0;
    }

    pub fn apply_filter(&mut self, filter: FilterState) {
        self.store.set_filter(filter);
        self.selected = 0;
        self.scroll_offset = 0;
    }

    pub fn select_next(&mut self) {
        let count = self.visible_count();
        if count > 0 && self.selected + 1 < count {
            self.selected += 1;
        }
    }

    pub fn select_previous(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    /// Keep the selected row inside the viewport and mark every item row
    /// that has entered it as revealed. An item counts as seen once it
    /// clears the bottom margin, mirroring the reveal-on-scroll threshold.
    pub fn sync_viewport(&mut self, viewport_rows: usize, reveal_margin: usize) {
        if viewport_rows == 0 {
            return;
        }

        let rows = timeline_rows(&self.store);

        // Display row of the selected item
        let mut item_index = 0;
        let mut selected_row = 0;
        for (row_index, row) in rows.iter().enumerate() {
            if let TimelineRow::Item(_) = row {
                if item_index == self.selected {
                    selected_row = row_index;
                    break;
                }
                item_index += 1;
            }
        }

        if selected_row < self.scroll_offset {
            self.scroll_offset = selected_row;
        } else if selected_row >= self.scroll_offset + viewport_rows {
            self.scroll_offset = selected_row + 1 - viewport_rows;
        }

        let seen_rows = viewport_rows.saturating_sub(reveal_margin);
        for row in rows.iter().skip(self.scroll_offset).take(seen_rows) {
            if let TimelineRow::Item(event) = row {
                self.revealed.insert(event.id);
            }
        }
    }

    pub fn is_revealed(&self, id: i64) -> bool {
        self.revealed.contains(&id)
    }
}

/// UI configuration
#[derive(Debug, Clone)]
pub struct UiConfig {
    /// Tick rate in milliseconds
    pub tick_rate_ms: u64,

    /// Bottom margin rows excluded from the reveal window
    pub reveal_margin_rows: u16,

    /// Terminal height, updated on resize
    pub viewport_rows: u16,
}

impl UiConfig {
    /// Rows available to the timeline list (terminal minus chrome)
    pub fn list_rows(&self) -> usize {
        self.viewport_rows.saturating_sub(6).max(3) as usize
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        let tick_rate_ms = std::env::var("CHRONICA_TUI_TICK_MS")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(100);

        Self {
            tick_rate_ms,
            reveal_margin_rows: 2,
            viewport_rows: 24,
        }
    }
}

impl AppState {
    /// Create application state from configuration and reference data
    pub fn new(config: &libchronica::Config, reference: ReferenceDoc) -> Self {
        let ui = UiConfig {
            tick_rate_ms: config.ui.tick_rate_ms,
            reveal_margin_rows: config.ui.reveal_margin_rows,
            ..UiConfig::default()
        };

        Self {
            should_quit: false,
            screen: Screen::Timeline,
            feed: FeedPhase::Loading,
            timeline: TimelineState::default(),
            gallery: Gallery::new(reference.gallery.clone()),
            slider: Slider::new(reference.generations.clone()),
            reference,
            overlay: Overlay::None,
            status: None,
            config: ui,
        }
    }

    /// Is any overlay (detail, help, or lightbox) above the screen?
    pub fn overlay_open(&self) -> bool {
        !matches!(self.overlay, Overlay::None) || self.gallery.is_active()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use libchronica::Config;

    fn events(n: i64) -> Vec<Event> {
        (1..=n)
            .map(|id| Event {
                id,
                year: 1980 + id as i32,
                era: "gen3".to_string(),
                category: "console-release".to_string(),
                manufacturer: "Nintendo".to_string(),
                title: format!("Event {}", id),
                ..Event::default()
            })
            .collect()
    }

    #[test]
    fn test_selection_clamps_at_ends() {
        let mut timeline = TimelineState::default();
        timeline.set_events(events(2));

        timeline.select_previous();
        assert_eq!(timeline.selected, 0);

        timeline.select_next();
        timeline.select_next();
        timeline.select_next();
        assert_eq!(timeline.selected, 1);
    }

    #[test]
    fn test_set_events_reapplies_filter() {
        let mut timeline = TimelineState::default();
        timeline.apply_filter(FilterState::parse("manufacturer-nintendo"));
        timeline.set_events(events(3));
        assert_eq!(timeline.store.filter().token(), "manufacturer-nintendo");
        assert_eq!(timeline.visible_count(), 3);
    }

    #[test]
    fn test_sync_viewport_reveals_visible_window_only() {
        let mut timeline = TimelineState::default();
        timeline.set_events(events(20));

        // Viewport of 5 rows with a 1-row margin: the divider takes row 0,
        // so items on rows 1..4 are revealed.
        timeline.sync_viewport(5, 1);
        assert!(timeline.is_revealed(1));
        assert!(timeline.is_revealed(3));
        assert!(!timeline.is_revealed(4));
        assert!(!timeline.is_revealed(20));
    }

    #[test]
    fn test_reveal_is_monotonic_across_scrolling() {
        let mut timeline = TimelineState::default();
        timeline.set_events(events(20));

        timeline.sync_viewport(5, 0);
        assert!(timeline.is_revealed(1));

        // Scroll to the bottom, then back up: early ids stay revealed
        for _ in 0..19 {
            timeline.select_next();
            timeline.sync_viewport(5, 0);
        }
        assert!(timeline.is_revealed(20));

        for _ in 0..19 {
            timeline.select_previous();
            timeline.sync_viewport(5, 0);
        }
        assert!(timeline.is_revealed(1));
        assert!(timeline.is_revealed(20));
    }

    #[test]
    fn test_overlay_open_accounts_for_lightbox() {
        let config = Config::default_config();
        let mut reference = ReferenceDoc::default();
        reference.gallery.push(libchronica::types::GalleryItem::default());

        let mut state = AppState::new(&config, reference);
        assert!(!state.overlay_open());

        state.gallery.open(0);
        assert!(state.overlay_open());

        state.gallery.close();
        state.overlay = Overlay::Help;
        assert!(state.overlay_open());
    }
}
