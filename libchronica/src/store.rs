//! In-memory timeline store
//!
//! Holds the loaded events (immutable for the session) and the single active
//! filter. The visible subset is recomputed on every call; there is no
//! caching and no mutation of the event list itself.

use crate::types::{Event, FilterState};

#[derive(Debug, Clone, Default)]
pub struct TimelineStore {
    events: Vec<Event>,
    filter: FilterState,
}

impl TimelineStore {
    /// Wrap a loaded event list. Events are kept in feed order and never
    /// re-sorted.
    pub fn new(events: Vec<Event>) -> Self {
        Self {
            events,
            filter: FilterState::All,
        }
    }

    /// Replace the active filter. Idempotent for the same value.
    pub fn set_filter(&mut self, filter: FilterState) {
        self.filter = filter;
    }

    pub fn filter(&self) -> &FilterState {
        &self.filter
    }

    /// All loaded events in feed order
    pub fn events(&self) -> &[Event] {
        &self.events
    }

    /// Events passing the current filter, in original order.
    ///
    /// Side-effect-free and recomputed per call.
    pub fn visible_events(&self) -> impl Iterator<Item = &Event> {
        self.events.iter().filter(|e| self.filter.matches(e))
    }

    /// Resolve an activation back to its source event. Linear scan, first
    /// match wins.
    pub fn event_by_id(&self, id: i64) -> Option<&Event> {
        self.events.iter().find(|e| e.id == id)
    }

    /// Filter ring for interactive cycling: `all`, each category, then each
    /// manufacturer (prefixed), in first-appearance order.
    pub fn filter_ring(&self) -> Vec<FilterState> {
        let mut ring = vec![FilterState::All];

        for event in &self.events {
            let category = FilterState::Category(event.category.clone());
            if !event.category.is_empty() && !ring.contains(&category) {
                ring.push(category);
            }
        }

        for event in &self.events {
            let manufacturer =
                FilterState::Manufacturer(event.manufacturer.to_lowercase());
            if !event.manufacturer.is_empty() && !ring.contains(&manufacturer) {
                ring.push(manufacturer);
            }
        }

        ring
    }
}
