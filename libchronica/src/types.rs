//! Core types for Chronica

use serde::{Deserialize, Serialize};

/// A single timeline event from the feed.
///
/// Every field defaults so a record with absent fields still loads; missing
/// display strings render as blanks rather than failing the whole feed.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Event {
    pub id: i64,
    pub year: i32,
    pub era: String,
    pub manufacturer: String,
    pub console: String,
    pub category: String,
    pub title: String,
    pub description: String,
}

/// The active timeline filter: exactly one selected value.
///
/// The string form round-trips: `all`, `manufacturer-<name>`, or a bare
/// category key.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum FilterState {
    #[default]
    All,
    Manufacturer(String),
    Category(String),
}

impl FilterState {
    /// Parse a filter token as emitted by filter controls
    pub fn parse(token: &str) -> Self {
        if token == "all" {
            FilterState::All
        } else if let Some(name) = token.strip_prefix("manufacturer-") {
            FilterState::Manufacturer(name.to_string())
        } else {
            FilterState::Category(token.to_string())
        }
    }

    /// The token form of this filter
    pub fn token(&self) -> String {
        match self {
            FilterState::All => "all".to_string(),
            FilterState::Manufacturer(name) => format!("manufacturer-{}", name),
            FilterState::Category(key) => key.clone(),
        }
    }

    /// Does `event` pass this filter?
    ///
    /// Manufacturer comparison is case-insensitive; category comparison is
    /// exact.
    pub fn matches(&self, event: &Event) -> bool {
        match self {
            FilterState::All => true,
            FilterState::Manufacturer(name) => event.manufacturer.eq_ignore_ascii_case(name),
            FilterState::Category(key) => &event.category == key,
        }
    }
}

impl std::fmt::Display for FilterState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.token())
    }
}

// ============================================================================
// Reference document
// ============================================================================

/// Static reference data rendered alongside the timeline: console spec
/// sheets, generation summaries, market share and gallery media.
///
/// The whole document is optional; a missing file or section degrades to
/// empty widgets.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ReferenceDoc {
    pub consoles: Vec<ConsoleSpec>,
    pub generations: Vec<Generation>,
    pub market_share: Vec<MarketShare>,
    pub gallery: Vec<GalleryItem>,
}

/// Free-form spec sheet for one console. Values keep their display form
/// ("3.58 MHz"); numeric comparison extracts the leading number.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ConsoleSpec {
    pub name: String,
    pub manufacturer: String,
    pub cpu: String,
    pub memory: String,
    pub units_sold: String,
}

/// One hardware generation for the comparison slider
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Generation {
    pub name: String,
    pub years: String,
    pub resolution: String,
    pub colors: String,
    pub innovation: String,
    pub glyph: Option<String>,
}

/// One slice of the market-share pie
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct MarketShare {
    pub label: String,
    pub value: f64,
    pub color: String,
}

/// One gallery entry. The media kind is not stored; it is resolved at render
/// time from which source fields are present (see `gallery::media_kind`).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct GalleryItem {
    pub title: String,
    pub description: String,
    pub source: Option<String>,
    pub video_source: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn event(manufacturer: &str, category: &str) -> Event {
        Event {
            id: 1,
            year: 1985,
            era: "gen3".to_string(),
            manufacturer: manufacturer.to_string(),
            console: "NES".to_string(),
            category: category.to_string(),
            title: "NES launch".to_string(),
            description: "US launch".to_string(),
        }
    }

    #[test]
    fn test_filter_parse_all() {
        assert_eq!(FilterState::parse("all"), FilterState::All);
    }

    #[test]
    fn test_filter_parse_manufacturer() {
        assert_eq!(
            FilterState::parse("manufacturer-nintendo"),
            FilterState::Manufacturer("nintendo".to_string())
        );
    }

    #[test]
    fn test_filter_parse_category() {
        assert_eq!(
            FilterState::parse("console-release"),
            FilterState::Category("console-release".to_string())
        );
    }

    #[test]
    fn test_filter_token_round_trip() {
        for token in ["all", "manufacturer-sega", "handheld"] {
            assert_eq!(FilterState::parse(token).token(), token);
        }
    }

    #[test]
    fn test_filter_all_matches_everything() {
        assert!(FilterState::All.matches(&event("Nintendo", "console-release")));
        assert!(FilterState::All.matches(&Event::default()));
    }

    #[test]
    fn test_filter_manufacturer_case_insensitive() {
        let filter = FilterState::parse("manufacturer-nintendo");
        assert!(filter.matches(&event("Nintendo", "console-release")));
        assert!(filter.matches(&event("NINTENDO", "console-release")));
        assert!(!filter.matches(&event("Sega", "console-release")));
    }

    #[test]
    fn test_filter_category_exact() {
        let filter = FilterState::parse("console-release");
        assert!(filter.matches(&event("Nintendo", "console-release")));
        assert!(!filter.matches(&event("Nintendo", "handheld")));
        // Category is not case-folded
        assert!(!filter.matches(&event("Nintendo", "Console-Release")));
    }

    #[test]
    fn test_event_deserializes_with_missing_fields() {
        let event: Event = serde_json::from_str(r#"{"id": 7, "year": 1994}"#).unwrap();
        assert_eq!(event.id, 7);
        assert_eq!(event.year, 1994);
        assert_eq!(event.title, "");
        assert_eq!(event.manufacturer, "");
    }

    #[test]
    fn test_reference_doc_deserializes_empty() {
        let doc: ReferenceDoc = serde_json::from_str("{}").unwrap();
        assert!(doc.consoles.is_empty());
        assert!(doc.gallery.is_empty());
    }

    #[test]
    fn test_gallery_item_sources_optional() {
        let item: GalleryItem =
            serde_json::from_str(r#"{"title": "Crowd at a launch event"}"#).unwrap();
        assert!(item.source.is_none());
        assert!(item.video_source.is_none());
    }
}
