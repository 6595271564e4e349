//! Style attributes for the segmented strip.
//!
//! One grouped configuration struct instead of per-concern traits: every
//! attribute applies globally to all segments, and only one concrete control
//! exists to consume them.

use serde::{Deserialize, Serialize};

use super::Color;

/// Font description used for title measurement and rasterization.
///
/// The strip never sizes segments from text, so the only attribute layout
/// cares about is the point size; the renderer resolves the actual face.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FontSpec {
    pub size: f32,
}

impl Default for FontSpec {
    fn default() -> Self {
        Self { size: 14.0 }
    }
}

impl FontSpec {
    pub fn new(size: f32) -> Self {
        Self { size }
    }
}

/// All mutable styling of a [`SegmentedControl`](super::control::SegmentedControl).
///
/// Defaults mirror the stock appearance: blue resting titles, red selection
/// accent, hairline gray decorations.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SegmentStyle {
    pub title_font: FontSpec,
    pub title_color: Color,
    pub selected_title_font: FontSpec,
    pub selected_title_color: Color,

    pub background_color: Color,
    pub indicator_color: Color,
    pub indicator_height: f32,

    pub shadow_color: Color,
    pub border_color: Color,
    pub border_width: f32,
    pub divider_color: Color,
    pub divider_width: f32,

    pub show_border: bool,
    pub show_vertical_divider: bool,
    /// Left/right border strips. Off by default; the stock control only ever
    /// shipped top/bottom borders.
    pub show_side_borders: bool,
}

impl Default for SegmentStyle {
    fn default() -> Self {
        Self {
            title_font: FontSpec::default(),
            title_color: Color::TITLE,
            selected_title_font: FontSpec::default(),
            selected_title_color: Color::ACCENT,

            background_color: Color::WHITE,
            indicator_color: Color::ACCENT,
            indicator_height: 2.0,

            shadow_color: Color::SHADOW,
            border_color: Color::HAIRLINE,
            border_width: 1.0,
            divider_color: Color::HAIRLINE,
            divider_width: 1.0,

            show_border: false,
            show_vertical_divider: false,
            show_side_borders: false,
        }
    }
}
