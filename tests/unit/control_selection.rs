use std::time::{Duration, Instant};

use super::*;
use crate::core::measure::CellMeasure;

fn control(titles: &[&str], width: f32) -> SegmentedControl {
    let mut c = SegmentedControl::new(
        Rect::new(0.0, 0.0, width, 48.0),
        Box::new(CellMeasure::default()),
    );
    c.set_section_titles(titles.iter().map(|t| t.to_string()).collect());
    c
}

#[test]
fn segment_width_divides_container() {
    let c = control(&["A", "B", "C"], 300.0);
    assert_eq!(c.segment_width(), 100.0);
    assert_eq!(c.scroll().content_width(), 300.0);
}

#[test]
fn content_width_tiles_for_any_count() {
    for count in 1..=6 {
        let titles: Vec<&str> = ["A", "B", "C", "D", "E", "F"][..count].to_vec();
        let c = control(&titles, 420.0);
        assert_eq!(
            c.scroll().content_width(),
            c.segment_width() * count as f32
        );
    }
}

#[test]
fn empty_titles_keep_previous_segment_width() {
    let mut c = control(&["A", "B", "C"], 300.0);
    assert_eq!(c.segment_width(), 100.0);
    c.set_section_titles(Vec::new());
    assert_eq!(c.segment_width(), 100.0);
    assert_eq!(c.scroll().content_width(), 0.0);
}

#[test]
fn instant_select_positions_indicator() {
    let mut c = control(&["A", "B", "C"], 300.0);
    c.select_at(1, false, true, Instant::now());
    let frame = c.indicator_display_frame(Instant::now());
    assert_eq!(frame, Rect::new(100.0, 46.0, 100.0, 2.0));
}

#[test]
fn indicator_frame_formula_holds_for_every_index() {
    let mut c = control(&["A", "B", "C", "D"], 400.0);
    for i in 0..4 {
        c.select_at(i, false, false, Instant::now());
        let frame = c.indicator_resting_frame();
        assert_eq!(frame.x, c.segment_width() * i as f32);
        assert_eq!(frame.y, 48.0 - c.style().indicator_height);
        assert_eq!(frame.width, c.segment_width());
        assert_eq!(frame.height, c.style().indicator_height);
    }
}

#[test]
fn selecting_middle_of_three_keeps_viewport_at_origin() {
    // 300pt container, segment 1 spans 100..200: already centered.
    let mut c = control(&["A", "B", "C"], 300.0);
    c.select_at(1, false, false, Instant::now());
    assert_eq!(c.scroll().offset_x(), 0.0);
}

#[test]
fn detached_control_never_notifies() {
    let mut c = control(&["A", "B", "C"], 300.0);
    assert!(!c.is_attached());
    c.select_at(2, false, true, Instant::now());
    c.select_at(1, true, true, Instant::now());
    assert!(c.drain_events().is_empty());
}

#[test]
fn attached_control_notifies_exactly_once_per_change() {
    let mut c = control(&["A", "B", "C"], 300.0);
    c.set_attached(true);
    c.select_at(2, false, true, Instant::now());
    assert_eq!(c.drain_events().len(), 1);
    c.select_at(1, true, true, Instant::now());
    assert_eq!(c.drain_events().len(), 1);
}

#[test]
fn first_animated_select_snaps_and_notifies_once() {
    let mut c = control(&["A", "B", "C"], 300.0);
    c.set_attached(true);
    let now = Instant::now();
    c.select_at(1, true, true, now);
    // First appearance attaches without a visible transition.
    assert!(!c.is_animating());
    assert_eq!(c.indicator_display_frame(now), Rect::new(100.0, 46.0, 100.0, 2.0));
    assert_eq!(c.drain_events().len(), 1);
}

#[test]
fn animated_select_runs_linear_150ms_slide() {
    let mut c = control(&["A", "B", "C"], 300.0);
    let t0 = Instant::now();
    c.select_at(0, false, false, t0);
    c.select_at(2, true, false, t0);
    assert!(c.is_animating());

    assert_eq!(c.indicator_display_frame(t0).x, 0.0);
    let mid = c.indicator_display_frame(t0 + Duration::from_millis(75));
    assert!((mid.x - 100.0).abs() < 1.0);
    let end = c.indicator_display_frame(t0 + Duration::from_millis(150));
    assert_eq!(end, Rect::new(200.0, 46.0, 100.0, 2.0));

    assert!(c.animation_schedule(t0).is_some());
    assert_eq!(c.animation_schedule(t0 + Duration::from_millis(200)), None);
    c.tick(t0 + Duration::from_millis(200));
    assert!(!c.is_animating());
}

#[test]
fn retargeting_mid_slide_starts_from_current_position() {
    let mut c = control(&["A", "B", "C"], 300.0);
    let t0 = Instant::now();
    c.select_at(0, false, false, t0);
    c.select_at(2, true, false, t0);

    let mid = t0 + Duration::from_millis(75);
    let mid_frame = c.indicator_display_frame(mid);
    c.select_at(1, true, false, mid);
    assert_eq!(c.indicator_display_frame(mid), mid_frame);
}

#[test]
fn negative_index_clears_selection_silently() {
    let mut c = control(&["A", "B", "C"], 300.0);
    c.set_attached(true);
    c.select_at(1, true, true, Instant::now());
    c.drain_events();

    c.select_at(-1, true, true, Instant::now());
    assert_eq!(c.selected_index(), -1);
    assert!(!c.is_animating());
    // The -1 path skips scrolling and notification entirely.
    assert!(c.drain_events().is_empty());
}

#[test]
fn touch_selects_segment_under_point() {
    // x=250, offset 0, segment width 100 -> segment 2.
    let mut c = control(&["A", "B", "C"], 300.0);
    c.set_attached(true);
    assert_eq!(c.selected_index(), 0);

    c.handle_pointer_at(PointerPhase::Up, Point::new(250.0, 24.0), Instant::now());
    assert_eq!(c.selected_index(), 2);
    assert_eq!(c.drain_events().len(), 1);
}

#[test]
fn touch_on_current_selection_is_a_noop() {
    let mut c = control(&["A", "B", "C"], 300.0);
    c.set_attached(true);
    c.handle_pointer_at(PointerPhase::Up, Point::new(50.0, 24.0), Instant::now());
    assert_eq!(c.selected_index(), 0);
    assert!(c.drain_events().is_empty());
}

#[test]
fn touch_outside_bounds_is_ignored() {
    let mut c = control(&["A", "B", "C"], 300.0);
    c.set_attached(true);
    c.handle_pointer_at(PointerPhase::Up, Point::new(250.0, 60.0), Instant::now());
    c.handle_pointer_at(PointerPhase::Up, Point::new(-5.0, 24.0), Instant::now());
    assert_eq!(c.selected_index(), 0);
    assert!(c.drain_events().is_empty());
}

#[test]
fn touch_with_no_sections_is_ignored() {
    let mut c = control(&[], 300.0);
    c.set_attached(true);
    c.handle_pointer_at(PointerPhase::Up, Point::new(150.0, 24.0), Instant::now());
    assert_eq!(c.selected_index(), 0);
    assert!(c.drain_events().is_empty());
}

#[test]
fn drag_release_does_not_select() {
    let mut c = control(&["A", "B", "C"], 300.0);
    c.set_attached(true);
    c.set_draggable(true);
    assert!(c.scroll().is_scroll_enabled());

    let now = Instant::now();
    c.handle_pointer_at(PointerPhase::Down, Point::new(250.0, 24.0), now);
    c.handle_pointer_at(PointerPhase::Moved, Point::new(200.0, 24.0), now);
    c.handle_pointer_at(PointerPhase::Up, Point::new(200.0, 24.0), now);
    // The surface consumed the release; no tap selection happened.
    assert_eq!(c.selected_index(), 0);
    assert!(c.drain_events().is_empty());
}

#[test]
fn bare_transition_skips_scroll_and_notification() {
    let mut c = control(&["A", "B", "C"], 300.0);
    c.set_attached(true);
    c.set_selected_segment(2);
    assert_eq!(c.selected_index(), 2);
    assert!(c.drain_events().is_empty());
}

#[test]
fn title_size_out_of_range_is_zero() {
    let c = control(&["A", "B", "C"], 300.0);
    assert_eq!(c.title_size(3), Size::ZERO);
    assert!(c.title_size(0).height > 0.0);
}

#[test]
fn title_size_uses_selected_font_for_selection() {
    let mut c = control(&["A", "B", "C"], 300.0);
    let mut style = c.style().clone();
    style.selected_title_font.size = 28.0;
    c.set_style(style);
    assert_eq!(c.title_size(0).height, 28.0);
    assert_eq!(c.title_size(1).height, 14.0);
}
