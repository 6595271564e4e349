//! Scrollable viewport hosting the segment layers.
//!
//! The surface has one non-standard behavior: while no drag is active every
//! pointer event is forwarded unmodified to the parent responder, so a plain
//! tap is never swallowed by scroll recognition. Only once horizontal travel
//! exceeds the drag threshold (and scrolling is enabled) does the surface
//! start consuming events and panning.

use super::layout;
use super::{Rect, Size};

/// Horizontal travel (logical px) before a press turns into a drag.
const DRAG_THRESHOLD: f32 = 4.0;

/// Pointer event phase, the touch began/moved/ended triple.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerPhase {
    Down,
    Moved,
    Up,
}

/// What the surface did with a pointer event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventFlow {
    /// Not dragging: the parent responder should handle the event.
    Forwarded,
    /// Actively dragging: the surface handled it.
    Consumed,
}

struct DragTracker {
    start_x: f32,
    start_offset: f32,
    active: bool,
}

/// Viewport state for the segment strip.
pub struct ScrollSurface {
    viewport: Size,
    content_width: f32,
    offset_x: f32,
    scroll_enabled: bool,
    drag: Option<DragTracker>,
}

impl Default for ScrollSurface {
    fn default() -> Self {
        Self::new()
    }
}

impl ScrollSurface {
    pub fn new() -> Self {
        Self {
            viewport: Size::ZERO,
            content_width: 0.0,
            offset_x: 0.0,
            scroll_enabled: false,
            drag: None,
        }
    }

    pub fn viewport(&self) -> Size {
        self.viewport
    }

    pub fn content_width(&self) -> f32 {
        self.content_width
    }

    pub fn offset_x(&self) -> f32 {
        self.offset_x
    }

    pub fn is_scroll_enabled(&self) -> bool {
        self.scroll_enabled
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.as_ref().is_some_and(|d| d.active)
    }

    pub fn set_viewport(&mut self, viewport: Size) {
        self.viewport = viewport;
        self.set_offset(self.offset_x);
    }

    pub fn set_content_width(&mut self, width: f32) {
        self.content_width = width.max(0.0);
        self.set_offset(self.offset_x);
    }

    pub fn set_scroll_enabled(&mut self, enabled: bool) {
        self.scroll_enabled = enabled;
        if !enabled {
            self.drag = None;
        }
    }

    /// Largest reachable offset; zero when content fits the viewport.
    pub fn max_offset(&self) -> f32 {
        (self.content_width - self.viewport.width).max(0.0)
    }

    /// Sets the offset, clamped to `[0, max_offset]`.
    pub fn set_offset(&mut self, offset: f32) {
        self.offset_x = offset.clamp(0.0, self.max_offset());
    }

    /// Scrolls so `rect` (content coordinates) is horizontally centered in
    /// the viewport, clamped to scrollable bounds.
    pub fn scroll_to_rect_centered(&mut self, rect: Rect) {
        self.set_offset(layout::centered_scroll_origin(
            rect.x,
            rect.width,
            self.viewport.width,
        ));
    }

    /// Routes one pointer event.
    ///
    /// Returns [`EventFlow::Forwarded`] whenever no drag is active so the
    /// parent control sees the full began/moved/ended sequence for taps.
    pub fn handle_pointer(&mut self, phase: PointerPhase, x: f32) -> EventFlow {
        match phase {
            PointerPhase::Down => {
                if self.scroll_enabled {
                    self.drag = Some(DragTracker {
                        start_x: x,
                        start_offset: self.offset_x,
                        active: false,
                    });
                }
                EventFlow::Forwarded
            }
            PointerPhase::Moved => {
                let Some(drag) = self.drag.as_mut() else {
                    return EventFlow::Forwarded;
                };
                if !drag.active && (x - drag.start_x).abs() >= DRAG_THRESHOLD {
                    drag.active = true;
                }
                if drag.active {
                    let offset = drag.start_offset - (x - drag.start_x);
                    self.set_offset(offset);
                    EventFlow::Consumed
                } else {
                    EventFlow::Forwarded
                }
            }
            PointerPhase::Up => {
                let was_dragging = self.is_dragging();
                self.drag = None;
                if was_dragging {
                    EventFlow::Consumed
                } else {
                    EventFlow::Forwarded
                }
            }
        }
    }
}
