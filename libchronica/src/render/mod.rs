//! Timeline rendering
//!
//! Turns the store's filtered view into renderable structures: era groups
//! with dividers, a flat row model for list display, and escaped HTML
//! fragments built through the typed node tree.
//!
//! Grouping is keyed by era identity rather than adjacency: groups form in
//! order of first appearance and events with the same era key merge under a
//! single divider even when they are not contiguous in the feed. A divider
//! is visible exactly when at least one event under its era key passes the
//! active filter.

pub mod format;
pub mod node;

use crate::store::TimelineStore;
use crate::types::{Event, FilterState};
use format::{era_label, format_category, manufacturer_class, slugify};
use node::{Element, Node};

/// Events sharing one era divider
#[derive(Debug, Clone)]
pub struct EraGroup<'a> {
    pub era: String,
    pub label: String,
    pub events: Vec<&'a Event>,
}

impl EraGroup<'_> {
    /// Divider visibility: at least one event under this era key passes the
    /// filter. Compared by era key, never by position.
    pub fn is_visible(&self, filter: &FilterState) -> bool {
        self.events.iter().any(|e| filter.matches(e))
    }
}

/// Group events by era identity, preserving feed order within each group and
/// first-appearance order across groups.
pub fn timeline_groups(events: &[Event]) -> Vec<EraGroup<'_>> {
    let mut groups: Vec<EraGroup<'_>> = Vec::new();

    for event in events {
        match groups.iter_mut().find(|g| g.era == event.era) {
            Some(group) => group.events.push(event),
            None => groups.push(EraGroup {
                era: event.era.clone(),
                label: era_label(&event.era).to_string(),
                events: vec![event],
            }),
        }
    }

    groups
}

/// One row of the rendered timeline
#[derive(Debug, Clone)]
pub enum TimelineRow<'a> {
    Divider { era: String, label: String },
    Item(&'a Event),
}

/// Flatten the store's filtered view into display rows: a divider per
/// visible era group followed by that group's visible events.
pub fn timeline_rows(store: &TimelineStore) -> Vec<TimelineRow<'_>> {
    let filter = store.filter();
    let mut rows = Vec::new();

    for group in timeline_groups(store.events()) {
        if !group.is_visible(filter) {
            continue;
        }
        rows.push(TimelineRow::Divider {
            era: group.era.clone(),
            label: group.label.clone(),
        });
        for event in group.events.iter().filter(|e| filter.matches(e)) {
            rows.push(TimelineRow::Item(event));
        }
    }

    rows
}

/// The full timeline as a markup fragment for the current filter
pub fn timeline_fragment(store: &TimelineStore) -> Node {
    let mut container = Element::new("div").attr("class", "timeline");

    for row in timeline_rows(store) {
        container = match row {
            TimelineRow::Divider { era, label } => container.child(
                Element::new("div")
                    .attr("class", "era-divider")
                    .attr("data-era", era)
                    .child(Element::new("h3").text(label)),
            ),
            TimelineRow::Item(event) => container.child(timeline_item(event)),
        };
    }

    container.into()
}

/// One clickable timeline entry carrying its source id for later lookup
fn timeline_item(event: &Event) -> Element {
    let meta = Element::new("div")
        .attr("class", "timeline-meta")
        .child(
            Element::new("span")
                .attr("class", format!("timeline-badge badge-{}", event.category))
                .text(format_category(&event.category)),
        )
        .child(
            Element::new("span")
                .attr("class", format!("badge {}", manufacturer_class(&event.manufacturer)))
                .text(&event.manufacturer),
        );

    Element::new("div")
        .attr("class", "timeline-item")
        .attr("data-id", event.id.to_string())
        .attr("data-era", &event.era)
        .child(
            Element::new("div")
                .attr("class", "timeline-content")
                .child(Element::new("span").attr("class", "timeline-year").text(event.year.to_string()))
                .child(Element::new("h3").attr("class", "timeline-title").text(&event.title))
                .child(Element::new("p").attr("class", "timeline-description").text(&event.description))
                .child(meta),
        )
}

// ============================================================================
// Detail view
// ============================================================================

/// View model for one event's full detail, shared by the terminal overlay
/// and the HTML fragment.
#[derive(Debug, Clone, PartialEq)]
pub struct DetailView {
    pub id: i64,
    pub title: String,
    pub year: i32,
    pub manufacturer: String,
    pub category_label: String,
    pub console: String,
    pub description: String,
    /// Present only for console releases
    pub console_link: Option<String>,
}

/// Build the detail view for an event
pub fn detail_view(event: &Event) -> DetailView {
    let console_link = if event.category == "console-release" {
        Some(format!("consoles/{}.html", slugify(&event.console)))
    } else {
        None
    };

    DetailView {
        id: event.id,
        title: event.title.clone(),
        year: event.year,
        manufacturer: event.manufacturer.clone(),
        category_label: format_category(&event.category),
        console: event.console.clone(),
        description: event.description.clone(),
        console_link,
    }
}

/// The detail view as a markup fragment
pub fn detail_fragment(view: &DetailView) -> Node {
    let mut body = Element::new("div")
        .attr("class", "modal-content-text")
        .child(Element::new("p").text(&view.description))
        .child(Element::new("hr"))
        .child(Element::new("h3").text("Details"))
        .child(
            Element::new("p")
                .child(Element::new("strong").text("Console/Platform:"))
                .text(format!(" {}", view.console)),
        )
        .child(
            Element::new("p")
                .child(Element::new("strong").text("Type:"))
                .text(format!(" {}", view.category_label)),
        );

    if let Some(link) = &view.console_link {
        body = body.child(
            Element::new("p").child(
                Element::new("a")
                    .attr("href", link)
                    .attr("class", "btn btn-primary")
                    .text("View Console Page"),
            ),
        );
    }

    Element::new("div")
        .attr("class", "modal-body")
        .child(
            Element::new("div")
                .attr("class", "modal-header")
                .child(
                    Element::new("span")
                        .attr("class", format!("badge {}", manufacturer_class(&view.manufacturer)))
                        .text(&view.manufacturer),
                )
                .child(Element::new("h2").attr("class", "modal-title").text(&view.title))
                .child(Element::new("span").attr("class", "timeline-year").text(view.year.to_string())),
        )
        .child(body)
        .into()
}
