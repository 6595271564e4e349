//! Pixel-level drawing helpers.

use crate::core::Color;

use super::types::RenderTarget;
use super::PixelRect;

/// Fills a rectangle, clipped to the target bounds.
pub fn fill_rect(target: &mut RenderTarget<'_>, rect: PixelRect, color: Color) {
    if rect.w <= 0 || rect.h <= 0 || target.width == 0 || target.height == 0 {
        return;
    }
    let pixel = color.to_pixel();
    let x0 = (rect.x.max(0) as usize).min(target.width);
    let y0 = (rect.y.max(0) as usize).min(target.height);
    let x1 = ((rect.x + rect.w).max(0) as usize).min(target.width);
    let y1 = ((rect.y + rect.h).max(0) as usize).min(target.height);
    if x0 >= x1 {
        return;
    }

    for py in y0..y1 {
        let row = py * target.width;
        target.buffer[row + x0..row + x1].fill(pixel);
    }
}

/// Blends one coverage sample over the existing pixel.
pub fn blend_pixel(target: &mut RenderTarget<'_>, x: i32, y: i32, alpha: u8, fg: Color) {
    if alpha == 0 || x < 0 || y < 0 {
        return;
    }
    let (x, y) = (x as usize, y as usize);
    if x >= target.width || y >= target.height {
        return;
    }
    let idx = y * target.width + x;
    let a = alpha as u32;
    let inv_a = 255 - a;
    let bg_pixel = target.buffer[idx];
    let bg_r = (bg_pixel >> 16) & 0xFF;
    let bg_g = (bg_pixel >> 8) & 0xFF;
    let bg_b = bg_pixel & 0xFF;
    let r = (fg.r as u32 * a + bg_r * inv_a) / 255;
    let g = (fg.g as u32 * a + bg_g * inv_a) / 255;
    let b = (fg.b as u32 * a + bg_b * inv_a) / 255;
    target.buffer[idx] = (r << 16) | (g << 8) | b;
}
