//! Data-visualization builders
//!
//! Pure builders that turn reference data into renderable chart structures
//! and markup fragments: spec comparison bars, an era span strip, the
//! generation comparison slider, and the market-share pie.

pub mod bars;
pub mod pie;
pub mod slider;
pub mod span;

pub use bars::{extract_numeric, spec_charts, SpecChart};
pub use pie::{pie_slices, PieSlice};
pub use slider::Slider;
pub use span::{era_span, EraSpan};
