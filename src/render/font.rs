//! Font loading, title measurement, and glyph compositing.
//!
//! No fonts ship with the crate; the store picks up a common system face at
//! runtime. Measurement implements the core [`TextMeasure`] seam so the
//! control itself stays font-free.

use anyhow::{anyhow, Result};
use fontdue::{Font, FontSettings};

use crate::core::geometry::Size;
use crate::core::measure::TextMeasure;
use crate::core::style::FontSpec;
use crate::core::Color;

use super::primitives::blend_pixel;
use super::types::RenderTarget;
use super::PixelRect;

/// Well-known sans faces, searched in order.
const SYSTEM_FONT_PATHS: &[&str] = &[
    "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/TTF/DejaVuSans.ttf",
    "/usr/share/fonts/truetype/liberation/LiberationSans-Regular.ttf",
    "/usr/share/fonts/noto/NotoSans-Regular.ttf",
    "/System/Library/Fonts/Helvetica.ttc",
    "/System/Library/Fonts/Supplemental/Arial.ttf",
    "C:\\Windows\\Fonts\\arial.ttf",
    "C:\\Windows\\Fonts\\segoeui.ttf",
];

/// A loaded face plus the glyph plumbing built on it.
pub struct FontStore {
    font: Font,
}

impl FontStore {
    /// Builds a store from raw TTF/OTF bytes.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        let font = Font::from_bytes(bytes, FontSettings::default())
            .map_err(|err| anyhow!("failed to parse font: {err}"))?;
        Ok(Self { font })
    }

    /// Loads the first available system face.
    pub fn load_system() -> Result<Self> {
        for path in SYSTEM_FONT_PATHS {
            let Ok(bytes) = std::fs::read(path) else {
                continue;
            };
            if let Ok(store) = Self::from_bytes(&bytes) {
                return Ok(store);
            }
        }
        Err(anyhow!(
            "no usable system font found (searched {} paths)",
            SYSTEM_FONT_PATHS.len()
        ))
    }

    fn line_height(&self, px_size: f32) -> f32 {
        self.font
            .horizontal_line_metrics(px_size)
            .map(|m| m.ascent - m.descent)
            .unwrap_or(px_size)
    }

    fn text_width(&self, text: &str, px_size: f32) -> f32 {
        text.chars()
            .map(|c| self.font.metrics(c, px_size).advance_width)
            .sum()
    }

    /// Draws `text` center-aligned inside `frame` (physical pixels) at the
    /// given already-scaled pixel size.
    pub fn draw_text_centered(
        &self,
        target: &mut RenderTarget<'_>,
        text: &str,
        px_size: f32,
        color: Color,
        frame: PixelRect,
    ) {
        let total_width = self.text_width(text, px_size);
        let ascent = self
            .font
            .horizontal_line_metrics(px_size)
            .map(|m| m.ascent)
            .unwrap_or(px_size);

        let mut pen_x = frame.x as f32 + (frame.w as f32 - total_width) / 2.0;
        let baseline_y = frame.y as f32 + ascent;

        for c in text.chars() {
            let (metrics, bitmap) = self.font.rasterize(c, px_size);
            let glyph_x = pen_x as i32 + metrics.xmin;
            let glyph_y = baseline_y as i32 - (metrics.height as i32 + metrics.ymin);
            for gy in 0..metrics.height {
                for gx in 0..metrics.width {
                    let alpha = bitmap[gy * metrics.width + gx];
                    blend_pixel(
                        target,
                        glyph_x + gx as i32,
                        glyph_y + gy as i32,
                        alpha,
                        color,
                    );
                }
            }
            pen_x += metrics.advance_width;
        }
    }
}

impl TextMeasure for FontStore {
    fn measure(&self, text: &str, font: &FontSpec) -> Size {
        if text.is_empty() {
            return Size::ZERO;
        }
        Size::new(
            self.text_width(text, font.size),
            self.line_height(font.size),
        )
    }
}
