//! Gallery and lightbox
//!
//! A fixed list of media items with a single cursor. Navigation wraps in
//! both directions. The content variant of an item is not stored metadata;
//! it is resolved at render time from which source fields are present.

use crate::render::node::{Element, Node};
use crate::types::GalleryItem;

/// Glyph shown when an item carries no media source
pub const PLACEHOLDER_GLYPH: &str = "🎮";

/// Content variant for one item, resolved at render time
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaKind<'a> {
    Video(&'a str),
    Image(&'a str),
    Placeholder,
}

/// Resolve an item's content variant: a video source wins, then a still
/// image source, then the placeholder glyph.
pub fn media_kind(item: &GalleryItem) -> MediaKind<'_> {
    if let Some(src) = item.video_source.as_deref() {
        MediaKind::Video(src)
    } else if let Some(src) = item.source.as_deref() {
        MediaKind::Image(src)
    } else {
        MediaKind::Placeholder
    }
}

/// Lightbox state over a fixed item list
#[derive(Debug, Clone, Default)]
pub struct Gallery {
    items: Vec<GalleryItem>,
    cursor: usize,
    active: bool,
}

impl Gallery {
    pub fn new(items: Vec<GalleryItem>) -> Self {
        Self {
            items,
            cursor: 0,
            active: false,
        }
    }

    pub fn items(&self) -> &[GalleryItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Open the lightbox at `index`. Out-of-range indices wrap.
    pub fn open(&mut self, index: usize) {
        if self.items.is_empty() {
            return;
        }
        self.cursor = index % self.items.len();
        self.active = true;
    }

    /// Close the lightbox, leaving the cursor where it was
    pub fn close(&mut self) {
        self.active = false;
    }

    /// Move to the next item, wrapping past the end
    pub fn advance(&mut self) {
        if !self.items.is_empty() {
            self.cursor = (self.cursor + 1) % self.items.len();
        }
    }

    /// Move to the previous item, wrapping before the start
    pub fn retreat(&mut self) {
        if !self.items.is_empty() {
            self.cursor = (self.cursor + self.items.len() - 1) % self.items.len();
        }
    }

    pub fn current(&self) -> Option<&GalleryItem> {
        self.items.get(self.cursor)
    }

    /// Position caption, `Image 3 of 12`
    pub fn position_caption(&self) -> String {
        format!("Image {} of {}", self.cursor + 1, self.items.len())
    }
}

/// The current lightbox content as a markup fragment
pub fn lightbox_fragment(gallery: &Gallery) -> Option<Node> {
    let item = gallery.current()?;

    let media: Node = match media_kind(item) {
        MediaKind::Video(src) => Element::new("video")
            .attr("class", "lightbox-video")
            .attr("controls", "controls")
            .child(
                Element::new("source")
                    .attr("src", src)
                    .attr("type", "video/mp4"),
            )
            .into(),
        MediaKind::Image(src) => Element::new("img")
            .attr("src", src)
            .attr("alt", &item.title)
            .attr("class", "lightbox-image")
            .into(),
        MediaKind::Placeholder => Element::new("div")
            .attr("class", "gallery-placeholder")
            .text(PLACEHOLDER_GLYPH)
            .into(),
    };

    Some(
        Element::new("div")
            .attr("class", "lightbox-content")
            .child(media)
            .child(
                Element::new("div")
                    .attr("class", "lightbox-caption")
                    .child(Element::new("h3").text(&item.title))
                    .child(Element::new("p").text(&item.description))
                    .child(Element::new("small").text(gallery.position_caption())),
            )
            .into(),
    )
}

/// A gallery grid fragment for a full item list
pub fn gallery_fragment(items: &[GalleryItem]) -> Node {
    let mut grid = Element::new("div").attr("class", "gallery-grid");

    for item in items {
        let media: Node = match media_kind(item) {
            MediaKind::Video(src) | MediaKind::Image(src) => Element::new("img")
                .attr("src", src)
                .attr("alt", &item.title)
                .attr("class", "gallery-image")
                .into(),
            MediaKind::Placeholder => Element::new("div")
                .attr("class", "gallery-placeholder")
                .text(PLACEHOLDER_GLYPH)
                .into(),
        };

        grid = grid.child(
            Element::new("div")
                .attr("class", "gallery-item")
                .child(media)
                .child(
                    Element::new("div")
                        .attr("class", "gallery-caption")
                        .child(Element::new("h4").text(&item.title))
                        .child(Element::new("p").text(&item.description)),
                ),
        );
    }

    grid.into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::node::to_html;

    fn items(n: usize) -> Vec<GalleryItem> {
        (0..n)
            .map(|i| GalleryItem {
                title: format!("Item {}", i),
                description: String::new(),
                source: Some(format!("img-{}.png", i)),
                video_source: None,
            })
            .collect()
    }

    #[test]
    fn test_advance_wraps_back_to_start() {
        let mut gallery = Gallery::new(items(4));
        gallery.open(0);
        for _ in 0..4 {
            gallery.advance();
        }
        assert_eq!(gallery.cursor(), 0);
    }

    #[test]
    fn test_retreat_from_zero_wraps_to_last() {
        let mut gallery = Gallery::new(items(4));
        gallery.open(0);
        gallery.retreat();
        assert_eq!(gallery.cursor(), 3);
    }

    #[test]
    fn test_open_close_toggles_active_only() {
        let mut gallery = Gallery::new(items(3));
        gallery.open(2);
        assert!(gallery.is_active());
        assert_eq!(gallery.cursor(), 2);

        gallery.close();
        assert!(!gallery.is_active());
        assert_eq!(gallery.cursor(), 2);
    }

    #[test]
    fn test_open_on_empty_gallery_is_noop() {
        let mut gallery = Gallery::new(Vec::new());
        gallery.open(0);
        assert!(!gallery.is_active());
        gallery.advance();
        gallery.retreat();
        assert_eq!(gallery.cursor(), 0);
    }

    #[test]
    fn test_media_kind_resolution() {
        let video = GalleryItem {
            video_source: Some("clip.mp4".to_string()),
            source: Some("poster.png".to_string()),
            ..GalleryItem::default()
        };
        assert_eq!(media_kind(&video), MediaKind::Video("clip.mp4"));

        let image = GalleryItem {
            source: Some("nes.png".to_string()),
            ..GalleryItem::default()
        };
        assert_eq!(media_kind(&image), MediaKind::Image("nes.png"));

        assert_eq!(media_kind(&GalleryItem::default()), MediaKind::Placeholder);
    }

    #[test]
    fn test_position_caption() {
        let mut gallery = Gallery::new(items(12));
        gallery.open(2);
        assert_eq!(gallery.position_caption(), "Image 3 of 12");
    }

    #[test]
    fn test_lightbox_fragment_variants() {
        let mut gallery = Gallery::new(vec![GalleryItem {
            title: "Launch day".to_string(),
            description: "Queue outside the store".to_string(),
            source: None,
            video_source: None,
        }]);
        gallery.open(0);

        let html = to_html(&lightbox_fragment(&gallery).unwrap());
        assert!(html.contains("gallery-placeholder"));
        assert!(html.contains("Launch day"));
        assert!(html.contains("Image 1 of 1"));
    }

    #[test]
    fn test_gallery_fragment_lists_every_item() {
        let html = to_html(&gallery_fragment(&items(3)));
        assert_eq!(html.matches("gallery-item").count(), 3);
    }
}
