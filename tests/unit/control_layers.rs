use std::time::Instant;

use super::*;
use crate::core::color::Color;
use crate::core::measure::CellMeasure;

fn control(titles: &[&str], width: f32) -> SegmentedControl {
    let mut c = SegmentedControl::new(
        Rect::new(0.0, 0.0, width, 48.0),
        Box::new(CellMeasure::default()),
    );
    c.set_section_titles(titles.iter().map(|t| t.to_string()).collect());
    c
}

fn titles_of(layers: &[Layer]) -> Vec<&Layer> {
    layers
        .iter()
        .filter(|l| matches!(l.kind, LayerKind::Title { .. }))
        .collect()
}

fn indicator_of(layers: &[Layer]) -> Option<&Layer> {
    layers.iter().find(|l| matches!(l.kind, LayerKind::Indicator))
}

#[test]
fn plain_strip_is_background_titles_indicator() {
    let mut c = control(&["A", "B", "C"], 300.0);
    let layers = c.rebuild_layers();
    assert_eq!(layers.len(), 5);
    assert_eq!(layers[0].kind, LayerKind::Background);
    assert_eq!(titles_of(&layers).len(), 3);
    assert!(indicator_of(&layers).is_some());
    assert!(!c.needs_display());
}

#[test]
fn title_layers_tile_the_strip_on_whole_pixels() {
    let mut c = control(&["First", "Second", "Third"], 299.0);
    let layers = c.rebuild_layers();
    for (i, layer) in titles_of(&layers).iter().enumerate() {
        let expected_x = (c.segment_width() * i as f32).ceil();
        assert_eq!(layer.frame.x, expected_x);
        assert_eq!(layer.frame.width, c.segment_width().ceil());
        assert_eq!(layer.frame.y, layer.frame.y.ceil());
    }
}

#[test]
fn selected_title_carries_accent_color_and_flag() {
    let mut c = control(&["A", "B", "C"], 300.0);
    c.select_at(1, false, false, Instant::now());
    let layers = c.rebuild_layers();
    let titles = titles_of(&layers);
    assert_eq!(
        titles[1].kind,
        LayerKind::Title {
            index: 1,
            text: "B".to_string(),
            selected: true,
            font_size: 14.0,
        }
    );
    assert_eq!(titles[1].color, Color::ACCENT);
    assert_eq!(titles[0].color, Color::TITLE);
}

#[test]
fn first_rebuild_attaches_indicator_under_default_selection() {
    let mut c = control(&["A", "B", "C"], 300.0);
    let layers = c.rebuild_layers();
    let indicator = indicator_of(&layers).expect("indicator attached on redraw");
    assert_eq!(indicator.frame, Rect::new(0.0, 46.0, 100.0, 2.0));
    assert_eq!(indicator.color, Color::ACCENT);
}

#[test]
fn no_selection_leaves_no_indicator_layer() {
    let mut c = control(&["A", "B", "C"], 300.0);
    c.select_at(-1, false, true, Instant::now());
    let layers = c.rebuild_layers();
    assert!(indicator_of(&layers).is_none());

    // Redraws while unselected must not re-attach it either.
    let layers = c.rebuild_layers();
    assert!(indicator_of(&layers).is_none());

    c.select_at(1, false, false, Instant::now());
    let layers = c.rebuild_layers();
    assert_eq!(
        indicator_of(&layers).expect("reattached").frame,
        Rect::new(100.0, 46.0, 100.0, 2.0)
    );
}

#[test]
fn dividers_sit_left_of_each_segment() {
    let mut c = control(&["A", "B", "C"], 300.0);
    let mut style = c.style().clone();
    style.show_vertical_divider = true;
    c.set_style(style);

    let layers = c.rebuild_layers();
    let dividers: Vec<&Layer> = layers
        .iter()
        .filter(|l| matches!(l.kind, LayerKind::Divider))
        .collect();
    assert_eq!(dividers.len(), 3);
    for (i, divider) in dividers.iter().enumerate() {
        assert_eq!(divider.frame.x, 100.0 * i as f32 - 1.0);
        assert_eq!(divider.frame.height, 48.0);
        assert_eq!(divider.color, Color::HAIRLINE);
    }
}

#[test]
fn border_adds_backdrop_and_two_strips() {
    let mut c = control(&["A", "B"], 300.0);
    let mut style = c.style().clone();
    style.show_border = true;
    c.set_style(style);

    let layers = c.rebuild_layers();
    assert_eq!(layers[1].kind, LayerKind::BorderBackdrop);
    let borders: Vec<&Layer> = layers
        .iter()
        .filter(|l| matches!(l.kind, LayerKind::Border))
        .collect();
    assert_eq!(borders.len(), 2);
    assert_eq!(borders[0].frame, Rect::new(0.0, 0.0, 300.0, 1.0));
    assert_eq!(borders[1].frame, Rect::new(0.0, 47.0, 300.0, 1.0));
}

#[test]
fn side_borders_are_opt_in() {
    let mut c = control(&["A", "B"], 300.0);
    let mut style = c.style().clone();
    style.show_border = true;
    style.show_side_borders = true;
    c.set_style(style);

    let layers = c.rebuild_layers();
    let borders: Vec<&Layer> = layers
        .iter()
        .filter(|l| matches!(l.kind, LayerKind::Border))
        .collect();
    assert_eq!(borders.len(), 4);
    assert_eq!(borders[2].frame, Rect::new(0.0, 0.0, 1.0, 48.0));
    assert_eq!(borders[3].frame, Rect::new(299.0, 0.0, 1.0, 48.0));
}

#[test]
fn empty_titles_redraw_has_no_title_layers() {
    let mut c = control(&["A", "B", "C"], 300.0);
    c.set_section_titles(Vec::new());
    let layers = c.rebuild_layers();
    assert!(titles_of(&layers).is_empty());
}

#[test]
fn indicator_paints_last() {
    let mut c = control(&["A", "B", "C"], 300.0);
    let mut style = c.style().clone();
    style.show_border = true;
    style.show_vertical_divider = true;
    c.set_style(style);

    let layers = c.rebuild_layers();
    assert!(matches!(
        layers.last().map(|l| &l.kind),
        Some(LayerKind::Indicator)
    ));
}
