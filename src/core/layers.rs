//! Retained display list for the strip.
//!
//! A redraw rebuilds the full list from scratch rather than diffing — the
//! strip holds at most a few dozen layers, and a rebuild keeps positions
//! trivially consistent with state. Renderers just iterate in paint order.

use super::{Color, Rect};

/// What a layer paints.
#[derive(Debug, Clone, PartialEq)]
pub enum LayerKind {
    /// Full-bounds background fill.
    Background,
    /// Border backdrop placed behind the strips when borders are shown.
    BorderBackdrop,
    /// One border strip (top/bottom, optionally left/right).
    Border,
    /// Divider strip left of a segment.
    Divider,
    /// One title, center-aligned within its frame.
    Title {
        index: usize,
        text: String,
        selected: bool,
        font_size: f32,
    },
    /// The selection indicator strip.
    Indicator,
}

/// One entry of the display list.
///
/// `frame` is in content coordinates (scroll space) for everything hosted by
/// the scroll surface; the renderer subtracts the scroll offset. Background
/// and border layers sit in viewport coordinates and don't scroll.
#[derive(Debug, Clone, PartialEq)]
pub struct Layer {
    pub kind: LayerKind,
    pub frame: Rect,
    pub color: Color,
}

impl Layer {
    pub fn new(kind: LayerKind, frame: Rect, color: Color) -> Self {
        Self { kind, frame, color }
    }

    /// Layers that scroll with the content; decorations pinned to the
    /// viewport do not.
    pub fn scrolls(&self) -> bool {
        matches!(
            self.kind,
            LayerKind::Divider | LayerKind::Title { .. } | LayerKind::Indicator
        )
    }
}
