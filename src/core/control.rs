//! The segmented control: section titles, styling, selection state, and the
//! layer tree hosted by its scroll surface.
//!
//! The control never errors: out-of-range indices are no-ops, `-1` is the
//! "no selection" sentinel, and an empty title list simply produces no title
//! layers.

use std::time::Instant;

use super::animation::IndicatorAnimation;
use super::hit_test;
use super::layers::{Layer, LayerKind};
use super::layout;
use super::measure::TextMeasure;
use super::scroll::{EventFlow, PointerPhase, ScrollSurface};
use super::style::SegmentStyle;
use super::{Point, Rect, Size};

/// Notifications drained by the embedding host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlEvent {
    /// The selection changed; read `selected_index` off the control.
    SelectionChanged,
}

pub struct SegmentedControl {
    frame: Rect,
    section_titles: Vec<String>,
    style: SegmentStyle,

    selected_index: i32,
    draggable: bool,

    // Derived: container width / section count, recomputed on layout.
    segment_width: f32,

    scroll: ScrollSurface,

    indicator_attached: bool,
    indicator_frame: Rect,
    animation: Option<IndicatorAnimation>,

    // Mirrors "has a superview": detached controls never notify.
    attached: bool,
    needs_display: bool,
    pending_events: Vec<ControlEvent>,

    measure: Box<dyn TextMeasure>,
}

impl SegmentedControl {
    pub fn new(frame: Rect, measure: Box<dyn TextMeasure>) -> Self {
        let mut control = Self {
            frame,
            section_titles: Vec::new(),
            style: SegmentStyle::default(),
            selected_index: 0,
            draggable: false,
            segment_width: 100.0,
            scroll: ScrollSurface::new(),
            indicator_attached: false,
            indicator_frame: Rect::ZERO,
            animation: None,
            attached: false,
            needs_display: true,
            pending_events: Vec::new(),
            measure,
        };
        control.update_segment_rects();
        control
    }

    /// Constructs with a title list and a zero frame; the host assigns the
    /// real frame when embedding.
    pub fn with_titles(titles: Vec<String>, measure: Box<dyn TextMeasure>) -> Self {
        let mut control = Self::new(Rect::ZERO, measure);
        control.section_titles = titles;
        control.update_segment_rects();
        control
    }

    // ── Accessors ───────────────────────────────────────────────────

    pub fn frame(&self) -> Rect {
        self.frame
    }

    pub fn bounds(&self) -> Rect {
        Rect::new(0.0, 0.0, self.frame.width, self.frame.height)
    }

    pub fn section_titles(&self) -> &[String] {
        &self.section_titles
    }

    pub fn section_count(&self) -> usize {
        self.section_titles.len()
    }

    pub fn selected_index(&self) -> i32 {
        self.selected_index
    }

    pub fn segment_width(&self) -> f32 {
        self.segment_width
    }

    pub fn style(&self) -> &SegmentStyle {
        &self.style
    }

    pub fn set_style(&mut self, style: SegmentStyle) {
        self.style = style;
        self.needs_display = true;
    }

    pub fn is_draggable(&self) -> bool {
        self.draggable
    }

    pub fn set_draggable(&mut self, draggable: bool) {
        self.draggable = draggable;
        self.update_segment_rects();
    }

    pub fn scroll(&self) -> &ScrollSurface {
        &self.scroll
    }

    pub fn is_attached(&self) -> bool {
        self.attached
    }

    /// Marks the control as embedded in (or removed from) a visible
    /// hierarchy. Only attached controls emit change events.
    pub fn set_attached(&mut self, attached: bool) {
        self.attached = attached;
    }

    pub fn needs_display(&self) -> bool {
        self.needs_display
    }

    /// Drains pending change notifications.
    pub fn drain_events(&mut self) -> Vec<ControlEvent> {
        std::mem::take(&mut self.pending_events)
    }

    // ── Section titles and frame ────────────────────────────────────

    /// Replaces the section list. Duplicate titles are not validated.
    pub fn set_section_titles(&mut self, titles: Vec<String>) {
        self.section_titles = titles;
        self.update_segment_rects();
        self.needs_display = true;
    }

    pub fn set_frame(&mut self, frame: Rect) {
        self.frame = frame;
        self.update_segment_rects();
        self.needs_display = true;
    }

    /// Layout pass: recomputes the derived segment width and sizes the
    /// scroll surface. Runs on every frame or title-list change.
    fn update_segment_rects(&mut self) {
        self.scroll
            .set_viewport(Size::new(self.frame.width, self.frame.height));

        // Guarded division: an empty list keeps the previous width.
        if let Some(width) = layout::segment_width(self.frame.width, self.section_count()) {
            self.segment_width = width;
        }

        self.scroll.set_scroll_enabled(self.draggable);
        self.scroll
            .set_content_width(layout::content_width(self.segment_width, self.section_count()));
    }

    // ── Selection ───────────────────────────────────────────────────

    /// Bare state transition without scrolling, animation, or notification.
    pub fn set_selected_segment(&mut self, index: i32) {
        self.selected_index = index;
        self.needs_display = true;
    }

    /// Selects `index`, scrolling it into view and repositioning the
    /// indicator (animated or instant), then notifies listeners.
    pub fn select(&mut self, index: i32, animated: bool) {
        self.select_at(index, animated, true, Instant::now());
    }

    /// Selection with an explicit clock, for deterministic tests.
    pub fn select_at(&mut self, index: i32, animated: bool, notify: bool, now: Instant) {
        self.set_selected_segment(index);

        if index < 0 {
            // No selection: the indicator leaves the display entirely.
            self.indicator_attached = false;
            self.animation = None;
            return;
        }

        self.scroll_to_selected();

        let target = self.indicator_resting_frame();
        if animated {
            if !self.indicator_attached {
                // First appearance: attach and snap silently, then animate
                // (and notify) from the resting position.
                self.select_at(index, false, false, now);
            }
            if notify {
                self.notify_segment_changed();
            }
            // Retarget from wherever the indicator currently shows; a
            // first-appearance snap lands exactly on target and needs no
            // transition at all.
            let from = self.indicator_display_frame(now);
            if from != target {
                self.animation = Some(IndicatorAnimation::new(from, target, now));
            }
            self.indicator_frame = target;
        } else {
            // Instant path: drop any in-flight transition and snap.
            self.animation = None;
            self.indicator_frame = target;
            self.indicator_attached = true;
            if notify {
                self.notify_segment_changed();
            }
        }
    }

    fn notify_segment_changed(&mut self) {
        if self.attached {
            self.pending_events.push(ControlEvent::SelectionChanged);
        }
    }

    /// Centers the selected segment in the viewport, clamped to content.
    fn scroll_to_selected(&mut self) {
        let rect = Rect::new(
            self.segment_width * self.selected_index as f32,
            0.0,
            self.segment_width,
            self.frame.height,
        );
        self.scroll.scroll_to_rect_centered(rect);
    }

    // ── Touch ───────────────────────────────────────────────────────

    /// Routes a pointer event (control-local coordinates) through the
    /// scroll surface; forwarded releases become tap selection.
    pub fn handle_pointer(&mut self, phase: PointerPhase, point: Point) {
        self.handle_pointer_at(phase, point, Instant::now());
    }

    pub fn handle_pointer_at(&mut self, phase: PointerPhase, point: Point, now: Instant) {
        let flow = self.scroll.handle_pointer(phase, point.x);
        if flow == EventFlow::Forwarded && phase == PointerPhase::Up {
            self.touch_ended(point, now);
        }
    }

    fn touch_ended(&mut self, point: Point, now: Instant) {
        if !self.bounds().contains(point) {
            return;
        }
        let Some(segment) = hit_test::segment_at(
            point.x,
            self.scroll.offset_x(),
            self.segment_width,
            self.section_count(),
        ) else {
            return;
        };
        if segment as i32 != self.selected_index {
            self.select_at(segment as i32, true, true, now);
        }
    }

    // ── Text measurement ────────────────────────────────────────────

    /// Measured size of the title at `index` under the applicable font.
    /// Out-of-range indices measure as zero.
    pub fn title_size(&self, index: usize) -> Size {
        let Some(title) = self.section_titles.get(index) else {
            return Size::ZERO;
        };
        let selected = index as i32 == self.selected_index;
        let font = if selected {
            &self.style.selected_title_font
        } else {
            &self.style.title_font
        };
        self.measure.measure(title, font)
    }

    // ── Indicator ───────────────────────────────────────────────────

    /// Resting frame for the current selection: a bottom-aligned strip one
    /// segment wide.
    pub fn indicator_resting_frame(&self) -> Rect {
        layout::indicator_frame(
            self.segment_width,
            self.selected_index.max(0) as usize,
            self.frame.height,
            self.style.indicator_height,
        )
    }

    /// Frame to paint the indicator at: mid-transition position while a
    /// slide runs, the resting frame otherwise.
    pub fn indicator_display_frame(&self, now: Instant) -> Rect {
        match &self.animation {
            Some(animation) => animation.frame_at(now),
            None => self.indicator_frame,
        }
    }

    pub fn is_animating(&self) -> bool {
        self.animation.is_some()
    }

    /// Next wakeup deadline while the indicator slide runs.
    pub fn animation_schedule(&self, now: Instant) -> Option<Instant> {
        self.animation.as_ref().and_then(|a| a.schedule(now))
    }

    /// Clears a settled transition. Hosts call this once per redraw.
    pub fn tick(&mut self, now: Instant) {
        if self.animation.as_ref().is_some_and(|a| a.is_finished(now)) {
            self.animation = None;
        }
    }

    // ── Display list ────────────────────────────────────────────────

    /// Rebuilds the full layer list for the current state, in paint order.
    ///
    /// Full rebuild every pass, not incremental: background, border chrome,
    /// per-section divider + title, then the indicator on top.
    pub fn rebuild_layers(&mut self) -> Vec<Layer> {
        self.needs_display = false;

        let bounds = self.bounds();
        let mut layers = vec![Layer::new(
            LayerKind::Background,
            bounds,
            self.style.background_color,
        )];

        if self.style.show_border {
            layers.push(Layer::new(
                LayerKind::BorderBackdrop,
                bounds,
                self.style.background_color,
            ));
            for strip in layout::border_strips(
                Size::new(bounds.width, bounds.height),
                self.style.border_width,
                self.style.show_side_borders,
            ) {
                layers.push(Layer::new(LayerKind::Border, strip, self.style.border_color));
            }
        }

        for (index, title) in self.section_titles.iter().enumerate() {
            if self.style.show_vertical_divider {
                layers.push(Layer::new(
                    LayerKind::Divider,
                    layout::divider_frame(
                        self.segment_width,
                        index,
                        self.style.divider_width,
                        self.frame.height,
                    ),
                    self.style.divider_color,
                ));
            }

            let selected = index as i32 == self.selected_index;
            let size = self.title_size(index);
            let font = if selected {
                self.style.selected_title_font
            } else {
                self.style.title_font
            };
            let color = if selected {
                self.style.selected_title_color
            } else {
                self.style.title_color
            };
            layers.push(Layer::new(
                LayerKind::Title {
                    index,
                    text: title.clone(),
                    selected,
                    font_size: font.size,
                },
                layout::title_frame(self.segment_width, index, self.frame.height, size),
                color,
            ));
        }

        // A redraw attaches the indicator on first sight, but never while
        // the selection sentinel is -1.
        if !self.indicator_attached && self.selected_index >= 0 {
            self.indicator_frame = self.indicator_resting_frame();
            self.indicator_attached = true;
        }
        if self.indicator_attached {
            layers.push(Layer::new(
                LayerKind::Indicator,
                self.indicator_frame,
                self.style.indicator_color,
            ));
        }

        layers
    }
}

#[cfg(test)]
#[path = "../../tests/unit/control_selection.rs"]
mod selection_tests;

#[cfg(test)]
#[path = "../../tests/unit/control_layers.rs"]
mod layer_tests;
