//! Market-share pie chart
//!
//! Slice geometry on a 200x200 viewBox, radius 80, centered at (100, 100),
//! starting at 12 o'clock and sweeping clockwise.

use crate::render::node::{Element, Node};
use crate::types::MarketShare;

const CENTER: f64 = 100.0;
const RADIUS: f64 = 80.0;

#[derive(Debug, Clone, PartialEq)]
pub struct PieSlice {
    pub label: String,
    pub color: String,
    /// Share of the total, 0..=100, one-decimal display
    pub pct: f64,
    pub start_angle: f64,
    pub end_angle: f64,
    pub large_arc: bool,
    /// SVG path data for the slice
    pub path: String,
}

/// Compute slice geometry for a share table. Entries with non-positive
/// values contribute nothing; an empty or zero-total table yields no slices.
pub fn pie_slices(data: &[MarketShare]) -> Vec<PieSlice> {
    let total: f64 = data.iter().map(|d| d.value.max(0.0)).sum();
    if total <= 0.0 {
        return Vec::new();
    }

    let mut slices = Vec::with_capacity(data.len());
    let mut angle = 0.0_f64;

    for item in data {
        let value = item.value.max(0.0);
        if value == 0.0 {
            continue;
        }

        let sweep = value / total * 360.0;
        let start_angle = angle;
        let end_angle = angle + sweep;
        angle = end_angle;

        let (x1, y1) = point_at(start_angle);
        let (x2, y2) = point_at(end_angle);
        let large_arc = sweep > 180.0;

        slices.push(PieSlice {
            label: item.label.clone(),
            color: item.color.clone(),
            pct: value / total * 100.0,
            start_angle,
            end_angle,
            large_arc,
            path: format!(
                "M {} {} L {:.2} {:.2} A {} {} 0 {} 1 {:.2} {:.2} Z",
                CENTER,
                CENTER,
                x1,
                y1,
                RADIUS,
                RADIUS,
                large_arc as u8,
                x2,
                y2
            ),
        });
    }

    slices
}

/// Point on the circle at `angle` degrees clockwise from 12 o'clock
fn point_at(angle: f64) -> (f64, f64) {
    let radians = (angle - 90.0).to_radians();
    (
        CENTER + RADIUS * radians.cos(),
        CENTER + RADIUS * radians.sin(),
    )
}

/// The pie plus its legend as a markup fragment
pub fn pie_fragment(data: &[MarketShare]) -> Node {
    let slices = pie_slices(data);

    let svg = Element::new("svg")
        .attr("viewBox", "0 0 200 200")
        .attr("class", "pie-chart")
        .children(slices.iter().map(|slice| {
            Element::new("path")
                .attr("d", &slice.path)
                .attr("fill", format!("var(--{})", slice.color))
                .attr("class", "pie-slice")
                .attr("data-label", &slice.label)
                .attr("data-percentage", format!("{:.1}", slice.pct))
                .into()
        }));

    let legend = Element::new("div")
        .attr("class", "pie-legend")
        .children(slices.iter().map(|slice| {
            Element::new("div")
                .attr("class", "legend-item")
                .child(
                    Element::new("div")
                        .attr("class", "legend-color")
                        .attr("style", format!("background: var(--{})", slice.color)),
                )
                .child(Element::new("span").text(format!("{}: {:.1}%", slice.label, slice.pct)))
                .into()
        }));

    Element::new("div")
        .attr("class", "pie-chart-container")
        .child(svg)
        .child(legend)
        .into()
}
