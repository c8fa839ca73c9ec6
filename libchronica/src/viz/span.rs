//! Era span strip: events positioned along a year axis

use crate::render::node::{Element, Node};
use crate::types::Event;

#[derive(Debug, Clone, PartialEq)]
pub struct EraSpan {
    pub min_year: i32,
    pub max_year: i32,
    pub markers: Vec<EventMarker>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct EventMarker {
    pub title: String,
    pub year: i32,
    /// Horizontal position along the axis, 0..=100
    pub position_pct: f64,
}

/// Lay events out along a year axis. Returns `None` for an empty list.
///
/// The year range is clamped to at least 1 so a single-year span still
/// produces finite positions.
pub fn era_span(events: &[Event]) -> Option<EraSpan> {
    let min_year = events.iter().map(|e| e.year).min()?;
    let max_year = events.iter().map(|e| e.year).max()?;
    let range = (max_year - min_year).max(1) as f64;

    let markers = events
        .iter()
        .map(|event| EventMarker {
            title: event.title.clone(),
            year: event.year,
            position_pct: (event.year - min_year) as f64 / range * 100.0,
        })
        .collect();

    Some(EraSpan {
        min_year,
        max_year,
        markers,
    })
}

/// The span as a markup fragment: a year axis plus positioned markers
pub fn span_fragment(span: &EraSpan) -> Node {
    let axis = Element::new("div")
        .attr("class", "timeline-axis")
        .children((span.min_year..=span.max_year).map(|year| {
            Element::new("div")
                .attr("class", "year-marker")
                .text(year.to_string())
                .into()
        }));

    let markers = Element::new("div")
        .attr("class", "timeline-events")
        .children(span.markers.iter().map(|marker| {
            Element::new("div")
                .attr("class", "timeline-event-marker")
                .attr("style", format!("left: {:.1}%", marker.position_pct))
                .attr("title", format!("{} ({})", marker.title, marker.year))
                .child(Element::new("div").attr("class", "event-dot"))
                .child(
                    Element::new("div")
                        .attr("class", "event-label")
                        .text(&marker.title),
                )
                .into()
        }));

    Element::new("div")
        .attr("class", "era-timeline-viz")
        .child(axis)
        .child(markers)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn event(year: i32, title: &str) -> Event {
        Event {
            year,
            title: title.to_string(),
            ..Event::default()
        }
    }

    #[test]
    fn test_positions_span_the_axis() {
        let span = era_span(&[
            event(1983, "Famicom"),
            event(1988, "Mega Drive"),
            event(1993, "3DO"),
        ])
        .unwrap();

        assert_eq!(span.min_year, 1983);
        assert_eq!(span.max_year, 1993);
        assert_eq!(span.markers[0].position_pct, 0.0);
        assert_eq!(span.markers[1].position_pct, 50.0);
        assert_eq!(span.markers[2].position_pct, 100.0);
    }

    #[test]
    fn test_empty_events_yield_none() {
        assert!(era_span(&[]).is_none());
    }

    #[test]
    fn test_single_year_span_is_finite() {
        let span = era_span(&[event(1990, "SNES"), event(1990, "Game Gear")]).unwrap();
        assert_eq!(span.markers[0].position_pct, 0.0);
        assert!(span.markers.iter().all(|m| m.position_pct.is_finite()));
    }

    #[test]
    fn test_span_fragment_has_marker_per_event() {
        let span = era_span(&[event(1983, "Famicom"), event(1985, "NES")]).unwrap();
        let html = crate::render::node::to_html(&span_fragment(&span));
        assert_eq!(html.matches("timeline-event-marker").count(), 2);
        assert_eq!(html.matches("year-marker").count(), 3);
    }
}
