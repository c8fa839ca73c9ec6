//! Generation comparison slider

use crate::render::node::{Element, Node};
use crate::types::Generation;

/// Paginated cursor over the generation records, wrapping both ways
#[derive(Debug, Clone, Default)]
pub struct Slider {
    generations: Vec<Generation>,
    cursor: usize,
}

impl Slider {
    pub fn new(generations: Vec<Generation>) -> Self {
        Self {
            generations,
            cursor: 0,
        }
    }

    pub fn len(&self) -> usize {
        self.generations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.generations.is_empty()
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn current(&self) -> Option<&Generation> {
        self.generations.get(self.cursor)
    }

    pub fn advance(&mut self) {
        if !self.generations.is_empty() {
            self.cursor = (self.cursor + 1) % self.generations.len();
        }
    }

    pub fn retreat(&mut self) {
        if !self.generations.is_empty() {
            self.cursor = (self.cursor + self.generations.len() - 1) % self.generations.len();
        }
    }

    /// Position indicator, `2 / 9`
    pub fn indicator(&self) -> String {
        format!("{} / {}", self.cursor + 1, self.generations.len())
    }
}

/// One generation as a comparison slide fragment
pub fn slide_fragment(generation: &Generation) -> Node {
    let spec_item = |name: &str, value: &str| -> Node {
        Element::new("div")
            .attr("class", "spec-item")
            .child(Element::new("strong").text(format!("{}:", name)))
            .text(format!(" {}", value))
            .into()
    };

    Element::new("div")
        .attr("class", "gen-comparison-slide")
        .child(
            Element::new("div")
                .attr("class", "gen-info")
                .child(Element::new("h3").text(&generation.name))
                .child(Element::new("p").attr("class", "gen-years").text(&generation.years)),
        )
        .child(
            Element::new("div")
                .attr("class", "gen-specs")
                .child(spec_item("Resolution", &generation.resolution))
                .child(spec_item("Colors", &generation.colors))
                .child(spec_item("Key Innovation", &generation.innovation)),
        )
        .child(
            Element::new("div").attr("class", "gen-visual").child(
                Element::new("div")
                    .attr("class", "visual-placeholder")
                    .text(generation.glyph.as_deref().unwrap_or("🎮")),
            ),
        )
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn generations(n: usize) -> Vec<Generation> {
        (0..n)
            .map(|i| Generation {
                name: format!("Generation {}", i + 1),
                ..Generation::default()
            })
            .collect()
    }

    #[test]
    fn test_advance_wraps() {
        let mut slider = Slider::new(generations(3));
        for _ in 0..3 {
            slider.advance();
        }
        assert_eq!(slider.cursor(), 0);
    }

    #[test]
    fn test_retreat_from_zero_wraps_to_last() {
        let mut slider = Slider::new(generations(3));
        slider.retreat();
        assert_eq!(slider.cursor(), 2);
        assert_eq!(slider.indicator(), "3 / 3");
    }

    #[test]
    fn test_empty_slider_navigation_is_noop() {
        let mut slider = Slider::new(Vec::new());
        slider.advance();
        slider.retreat();
        assert_eq!(slider.cursor(), 0);
        assert!(slider.current().is_none());
    }

    #[test]
    fn test_slide_fragment_carries_specs() {
        let generation = Generation {
            name: "4th Generation".to_string(),
            years: "1987-1996".to_string(),
            resolution: "320x224".to_string(),
            colors: "512".to_string(),
            innovation: "16-bit graphics".to_string(),
            glyph: None,
        };
        let html = crate::render::node::to_html(&slide_fragment(&generation));
        assert!(html.contains("320x224"));
        assert!(html.contains("Key Innovation:"));
    }
}
