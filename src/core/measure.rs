//! Title measurement seam.
//!
//! Measured size is used only to vertically center a title inside its
//! segment; it never drives segment width. Keeping the seam as a trait lets
//! the pure core (and its tests) run without any font file while the
//! renderer supplies real fontdue metrics.

use super::style::FontSpec;
use super::Size;

/// Measures a title string under a given font.
pub trait TextMeasure {
    fn measure(&self, text: &str, font: &FontSpec) -> Size;
}

impl<T: TextMeasure + ?Sized> TextMeasure for std::sync::Arc<T> {
    fn measure(&self, text: &str, font: &FontSpec) -> Size {
        (**self).measure(text, font)
    }
}

/// Deterministic fixed-advance measurement.
///
/// Approximates every character as `advance_ratio * size` wide and every
/// line as `size` tall. Used by tests and as a fallback when no system
/// font can be loaded.
#[derive(Debug, Clone, Copy)]
pub struct CellMeasure {
    pub advance_ratio: f32,
}

impl Default for CellMeasure {
    fn default() -> Self {
        Self { advance_ratio: 0.6 }
    }
}

impl TextMeasure for CellMeasure {
    fn measure(&self, text: &str, font: &FontSpec) -> Size {
        if text.is_empty() {
            return Size::ZERO;
        }
        let chars = text.chars().count() as f32;
        Size::new(chars * self.advance_ratio * font.size, font.size)
    }
}
