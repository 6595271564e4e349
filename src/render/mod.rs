//! CPU rendering of the control's layer list into a pixel buffer.
//!
//! The renderer is stateless apart from the font: hosts hand it the layer
//! list rebuilt by the control plus the scroll offset and device scale, and
//! it rasterizes into the softbuffer-style 0RGB `u32` buffer.

pub mod font;
pub mod primitives;
pub mod types;

pub use font::FontStore;
pub use types::RenderTarget;

use crate::core::geometry::{Point, Rect};
use crate::core::layers::{Layer, LayerKind};

/// Integer pixel rectangle after device scaling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PixelRect {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
}

/// Scales a logical rect to physical pixels, rounding edges so adjacent
/// rects stay gap-free.
pub fn to_physical(frame: Rect, scale: f32) -> PixelRect {
    let x0 = (frame.x * scale).round() as i32;
    let y0 = (frame.y * scale).round() as i32;
    let x1 = ((frame.x + frame.width) * scale).round() as i32;
    let y1 = ((frame.y + frame.height) * scale).round() as i32;
    PixelRect {
        x: x0,
        y: y0,
        w: x1 - x0,
        h: y1 - y0,
    }
}

/// Paints one control frame.
///
/// `origin` places the control inside the window (logical coordinates);
/// `scroll_offset_x` translates the content-space layers; `indicator_frame`
/// overrides the indicator layer's resting frame while a slide is running.
/// Title layers are skipped when no font is available.
pub fn render_control(
    target: &mut RenderTarget<'_>,
    font: Option<&FontStore>,
    layers: &[Layer],
    origin: Point,
    scroll_offset_x: f32,
    indicator_frame: Option<Rect>,
    scale: f32,
) {
    for layer in layers {
        let mut frame = layer.frame;
        if matches!(layer.kind, LayerKind::Indicator) {
            if let Some(display) = indicator_frame {
                frame = display;
            }
        }
        if layer.scrolls() {
            frame.x -= scroll_offset_x;
        }
        frame.x += origin.x;
        frame.y += origin.y;

        let px = to_physical(frame, scale);
        match &layer.kind {
            LayerKind::Title {
                text, font_size, ..
            } => {
                if let Some(font) = font {
                    font.draw_text_centered(target, text, font_size * scale, layer.color, px);
                }
            }
            _ => primitives::fill_rect(target, px, layer.color),
        }
    }
}
