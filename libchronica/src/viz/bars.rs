//! Console spec comparison bars

use regex::Regex;
use std::sync::OnceLock;

use crate::render::format::manufacturer_class;
use crate::render::node::{Element, Node};
use crate::types::ConsoleSpec;

/// One bar chart comparing a single spec column across consoles
#[derive(Debug, Clone)]
pub struct SpecChart {
    pub title: String,
    pub bars: Vec<Bar>,
}

#[derive(Debug, Clone)]
pub struct Bar {
    pub label: String,
    /// Original display string, e.g. "3.58 MHz"
    pub display: String,
    pub value: f64,
    /// Bar width as a percentage of the column maximum
    pub fill_pct: f64,
    pub class: String,
}

/// First numeric run of a free-form spec string; anything else is 0.
///
/// `extract_numeric("3.58 MHz") == 3.58`
pub fn extract_numeric(spec: &str) -> f64 {
    static NUMBER: OnceLock<Regex> = OnceLock::new();
    let number = NUMBER.get_or_init(|| Regex::new(r"\d+(?:\.\d+)?").expect("static pattern"));

    number
        .find(spec)
        .and_then(|m| m.as_str().parse().ok())
        .unwrap_or(0.0)
}

/// Build the three standard comparison charts: CPU speed, RAM, units sold
pub fn spec_charts(consoles: &[ConsoleSpec]) -> Vec<SpecChart> {
    [
        ("CPU Speed (MHz)", (|c| &c.cpu) as fn(&ConsoleSpec) -> &String),
        ("RAM (KB)", |c| &c.memory),
        ("Units Sold (millions)", |c| &c.units_sold),
    ]
    .into_iter()
    .map(|(title, column)| spec_chart(title, consoles, column))
    .collect()
}

fn spec_chart(title: &str, consoles: &[ConsoleSpec], column: fn(&ConsoleSpec) -> &String) -> SpecChart {
    let max = consoles
        .iter()
        .map(|c| extract_numeric(column(c)))
        .fold(0.0_f64, f64::max);

    let bars = consoles
        .iter()
        .map(|console| {
            let value = extract_numeric(column(console));
            let fill_pct = if max > 0.0 { value / max * 100.0 } else { 0.0 };
            Bar {
                label: console.name.clone(),
                display: column(console).clone(),
                value,
                fill_pct,
                class: manufacturer_class(&console.manufacturer),
            }
        })
        .collect();

    SpecChart {
        title: title.to_string(),
        bars,
    }
}

/// A spec chart as a markup fragment
pub fn bars_fragment(chart: &SpecChart) -> Node {
    let mut rows = Element::new("div").attr("class", "chart-bars");

    for bar in &chart.bars {
        rows = rows.child(
            Element::new("div")
                .attr("class", "chart-bar-container")
                .child(Element::new("div").attr("class", "chart-label").text(&bar.label))
                .child(
                    Element::new("div").attr("class", "chart-bar-wrapper").child(
                        Element::new("div")
                            .attr("class", format!("chart-bar {}", bar.class))
                            .attr("style", format!("width: {:.1}%", bar.fill_pct))
                            .child(
                                Element::new("span")
                                    .attr("class", "chart-value")
                                    .text(&bar.display),
                            ),
                    ),
                ),
        );
    }

    Element::new("div")
        .attr("class", "spec-chart")
        .child(Element::new("h4").text(&chart.title))
        .child(rows)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn consoles() -> Vec<ConsoleSpec> {
        vec![
            ConsoleSpec {
                name: "NES".to_string(),
                manufacturer: "Nintendo".to_string(),
                cpu: "1.79 MHz".to_string(),
                memory: "2 KB".to_string(),
                units_sold: "61.91 million".to_string(),
            },
            ConsoleSpec {
                name: "Mega Drive".to_string(),
                manufacturer: "Sega".to_string(),
                cpu: "7.6 MHz".to_string(),
                memory: "64 KB".to_string(),
                units_sold: "30.75 million".to_string(),
            },
        ]
    }

    #[test]
    fn test_extract_numeric() {
        assert_eq!(extract_numeric("3.58 MHz"), 3.58);
        assert_eq!(extract_numeric("64 KB"), 64.0);
        assert_eq!(extract_numeric("unknown"), 0.0);
        assert_eq!(extract_numeric(""), 0.0);
    }

    #[test]
    fn test_fill_pct_relative_to_column_max() {
        let charts = spec_charts(&consoles());
        let cpu = &charts[0];

        assert_eq!(cpu.bars[1].fill_pct, 100.0);
        assert!((cpu.bars[0].fill_pct - 1.79 / 7.6 * 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_zero_column_yields_zero_fill() {
        let specs = vec![ConsoleSpec {
            name: "Mystery".to_string(),
            cpu: "n/a".to_string(),
            ..ConsoleSpec::default()
        }];
        let charts = spec_charts(&specs);
        assert_eq!(charts[0].bars[0].fill_pct, 0.0);
    }

    #[test]
    fn test_display_string_preserved() {
        let charts = spec_charts(&consoles());
        assert_eq!(charts[2].bars[0].display, "61.91 million");
    }

    #[test]
    fn test_bars_fragment_includes_widths() {
        let charts = spec_charts(&consoles());
        let html = crate::render::node::to_html(&bars_fragment(&charts[0]));
        assert!(html.contains("width: 100.0%"));
        assert!(html.contains("manufacturer-sega"));
    }
}
