//! Pure layout math for the segmented strip.
//!
//! Every function here is a pure calculation: given a container size, a
//! segment count, and style widths it returns coordinates and sizes. No
//! layer management, no side effects.

use super::{Rect, Size};

/// Duration of the indicator slide, in milliseconds.
pub const INDICATOR_SLIDE_MS: u64 = 150;

/// Uniform segment width for a container of `container_width` split into
/// `count` segments.
///
/// Returns `None` when `count` is zero so callers keep their previous width
/// (the stock control guards the division the same way).
pub fn segment_width(container_width: f32, count: usize) -> Option<f32> {
    if count == 0 {
        return None;
    }
    Some(container_width / count as f32)
}

/// Scrollable content width: segments exactly tile it with no gaps.
pub fn content_width(segment_width: f32, count: usize) -> f32 {
    segment_width * count as f32
}

/// Bottom-aligned indicator strip under segment `index`.
pub fn indicator_frame(
    segment_width: f32,
    index: usize,
    container_height: f32,
    indicator_height: f32,
) -> Rect {
    Rect::new(
        segment_width * index as f32,
        container_height - indicator_height,
        segment_width,
        indicator_height,
    )
}

/// Vertically-centered title frame for segment `index`, snapped to whole
/// pixels to avoid sub-pixel blur.
pub fn title_frame(
    segment_width: f32,
    index: usize,
    container_height: f32,
    title_size: Size,
) -> Rect {
    Rect::new(
        segment_width * index as f32,
        (container_height - title_size.height) / 2.0,
        segment_width,
        title_size.height,
    )
    .ceiled()
}

/// Thin divider strip immediately left of segment `index`, full container
/// height.
pub fn divider_frame(
    segment_width: f32,
    index: usize,
    divider_width: f32,
    container_height: f32,
) -> Rect {
    Rect::new(
        segment_width * index as f32 - divider_width,
        0.0,
        divider_width,
        container_height,
    )
}

/// Top and bottom border strips for the strip bounds; left and right strips
/// only when `side_borders` is set.
pub fn border_strips(bounds: Size, border_width: f32, side_borders: bool) -> Vec<Rect> {
    let mut strips = vec![
        Rect::new(0.0, 0.0, bounds.width, border_width),
        Rect::new(
            0.0,
            bounds.height - border_width,
            bounds.width,
            border_width,
        ),
    ];
    if side_borders {
        strips.push(Rect::new(0.0, 0.0, border_width, bounds.height));
        strips.push(Rect::new(
            bounds.width - border_width,
            0.0,
            border_width,
            bounds.height,
        ));
    }
    strips
}

/// Scroll origin that horizontally centers a segment rect in a viewport of
/// `container_width`.
///
/// The segment's leading edge minus half the visual excess around it.
/// Unclamped: the scroll surface owns clamping against its own bounds.
pub fn centered_scroll_origin(leading: f32, width: f32, container_width: f32) -> f32 {
    leading - (container_width / 2.0 - width / 2.0)
}
