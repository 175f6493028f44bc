#![allow(clippy::float_cmp)]

use geometry::sector::sector_span;
use geometry::{PathSeg, RadiiConfig, Ring, SectorOrder, classify};

use super::*;
use crate::surface::surface_test::{Call, RecordingSurface};

fn ready_state(css: f64, dpr: f64) -> BoardState {
    let mut state = BoardState::new(RadiiConfig::default(), SectorOrder::default());
    state.apply_resize(css, css, dpr);
    state
}

fn draw_state(state: &BoardState, options: &BoardOptions) -> RecordingSurface {
    let mut surface = RecordingSurface::default();
    draw(&mut surface, state, options).expect("draw");
    surface
}

fn outer_arc(path: &[PathSeg]) -> Option<(f64, f64, f64)> {
    path.iter().find_map(|seg| match seg {
        PathSeg::Arc { radius, start_deg, end_deg, clockwise: true, .. } => Some((*radius, *start_deg, *end_deg)),
        _ => None,
    })
}

// --- Board layers ---

#[test]
fn draws_eighty_wedges_and_twenty_labels() {
    let surface = draw_state(&ready_state(200.0, 1.0), &BoardOptions::default());
    assert_eq!(surface.paths().len(), 80);
    assert_eq!(surface.texts().len(), 20);
    assert_eq!(surface.rects(), 0);
}

#[test]
fn clears_before_drawing() {
    let surface = draw_state(&ready_state(200.0, 2.0), &BoardOptions::default());
    assert_eq!(surface.calls.first(), Some(&Call::Clear(400.0)));
}

#[test]
fn background_and_bulls_are_disks() {
    let state = ready_state(200.0, 1.0);
    let options = BoardOptions::default();
    let surface = draw_state(&state, &options);
    let circles = surface.circles();
    assert_eq!(circles.len(), 3);
    assert_eq!(circles[0], (Point::new(100.0, 100.0), 100.0, options.palette.background.as_str()));
    assert_eq!(circles[1].1, state.pixel_radii.outer_bull);
    assert_eq!(circles[1].2, options.palette.green);
    assert_eq!(circles[2].1, state.pixel_radii.inner_bull);
    assert_eq!(circles[2].2, options.palette.red);
}

#[test]
fn wedge_spans_match_the_classifier_for_every_sector() {
    let state = ready_state(200.0, 1.0);
    let surface = draw_state(&state, &BoardOptions::default());
    let paths = surface.paths();

    // Singles come in pairs per sector, then 20 triples, then 20 doubles.
    for i in 0..SECTOR_COUNT {
        let span = sector_span(i);
        for path in [paths[2 * i].0, paths[2 * i + 1].0, paths[40 + i].0, paths[60 + i].0] {
            let (_, start, end) = outer_arc(path).expect("outer arc");
            assert_eq!((start, end), span, "sector {i}");
        }

        let mid = (span.0 + span.1) * 0.5;
        let probe = polar_point(Point::default(), state.pixel_radii.double_inner + 1.0, mid);
        let hit = classify(probe, &state.pixel_radii, &state.order);
        assert_eq!(hit.ring, Ring::Double);
        assert_eq!(hit.sector_index, i);
    }
}

#[test]
fn rings_use_the_configured_radii() {
    let state = ready_state(200.0, 1.0);
    let surface = draw_state(&state, &BoardOptions::default());
    let paths = surface.paths();
    let r = state.pixel_radii;
    assert_eq!(outer_arc(paths[0].0).map(|a| a.0), Some(r.triple_inner));
    assert_eq!(outer_arc(paths[1].0).map(|a| a.0), Some(r.double_inner));
    assert_eq!(outer_arc(paths[40].0).map(|a| a.0), Some(r.triple_outer));
    assert_eq!(outer_arc(paths[60].0).map(|a| a.0), Some(r.double_outer));
}

#[test]
fn sector_colors_alternate() {
    let options = BoardOptions::default();
    let surface = draw_state(&ready_state(200.0, 1.0), &options);
    let paths = surface.paths();
    assert_eq!(paths[0].1, options.palette.dark);
    assert_eq!(paths[2].1, options.palette.light);
    assert_eq!(paths[40].1, options.palette.red);
    assert_eq!(paths[41].1, options.palette.green);
}

#[test]
fn labels_follow_the_sector_order() {
    let surface = draw_state(&ready_state(200.0, 1.0), &BoardOptions::default());
    let expected = SectorOrder::default().labels().iter().map(ToString::to_string).collect::<Vec<_>>();
    assert_eq!(surface.texts(), expected);
}

fn label_anchors(surface: &RecordingSurface) -> Vec<(Point, f64)> {
    surface
        .calls
        .iter()
        .filter_map(|call| match call {
            Call::Text { at, font_px, .. } => Some((*at, *font_px)),
            _ => None,
        })
        .collect()
}

#[test]
fn labels_sit_outside_the_double_ring_on_large_boards() {
    let state = ready_state(1200.0, 2.0);
    let surface = draw_state(&state, &BoardOptions::default());
    let center = state.center();
    for (at, font_px) in label_anchors(&surface) {
        let r = (at.x - center.x).hypot(at.y - center.y);
        assert!((r - (state.pixel_radii.double_outer + 36.0)).abs() < 1e-9, "r = {r}");
        assert_eq!(font_px, 28.0);
    }
}

#[test]
fn labels_stay_on_small_boards() {
    for (css, dpr) in [(200.0, 1.0), (300.0, 1.0), (400.0, 2.0), (600.0, 1.5)] {
        let state = ready_state(css, dpr);
        let size = f64::from(state.size_px);
        let surface = draw_state(&state, &BoardOptions::default());
        let anchors = label_anchors(&surface);
        assert_eq!(anchors.len(), 20);
        for (at, font_px) in anchors {
            let half = font_px / 2.0;
            assert!(at.x - half >= 0.0 && at.x + half <= size, "css {css}: x = {}", at.x);
            assert!(at.y - half >= 0.0 && at.y + half <= size, "css {css}: y = {}", at.y);
        }
    }
}

#[test]
fn clamped_labels_stay_on_the_double_ring_or_beyond() {
    let state = ready_state(300.0, 1.0);
    let surface = draw_state(&state, &BoardOptions::default());
    let center = state.center();
    for (at, _) in label_anchors(&surface) {
        let r = (at.x - center.x).hypot(at.y - center.y);
        assert!((r - (state.half_size() - 9.0)).abs() < 1e-9, "r = {r}");
        assert!(r > state.pixel_radii.double_inner);
    }
}

// --- Highlight ---

#[test]
fn bull_highlight_is_a_padded_disk() {
    let mut state = ready_state(200.0, 1.0);
    state.last_hit = Some(classify(Point::new(1.0, 1.0), &state.pixel_radii, &state.order));
    let options = BoardOptions::default();
    let surface = draw_state(&state, &options);
    let last = surface.circles().last().copied().expect("highlight");
    assert_eq!(last.1, state.pixel_radii.inner_bull + 6.0);
    assert_eq!(last.2, options.palette.bull_highlight);
    assert_eq!(surface.paths().len(), 80);
}

#[test]
fn band_highlight_covers_the_hit_sector_plus_marker() {
    let mut state = ready_state(200.0, 1.0);
    let hit = classify(polar_point(Point::default(), 90.0, 9.0), &state.pixel_radii, &state.order);
    assert_eq!(hit.ring, Ring::Double);
    state.last_hit = Some(hit);
    let options = BoardOptions::default();
    let surface = draw_state(&state, &options);

    let paths = surface.paths();
    assert_eq!(paths.len(), 81);
    let (highlight, color) = paths[80];
    assert_eq!(color, options.palette.highlight);
    let (radius, start, end) = outer_arc(highlight).expect("arc");
    assert_eq!((start, end), (0.0, 18.0));
    assert_eq!(radius, state.pixel_radii.double_outer + 2.0);

    let (at, marker_r, marker_color) = surface.circles().last().copied().expect("marker");
    assert_eq!(marker_color, options.palette.marker);
    assert_eq!(marker_r, 6.0);
    // The double band is 10px wide, so the marker centers in it.
    let d = (at.x - 100.0).hypot(at.y - 100.0);
    assert!((d - 90.0).abs() < 1e-9);
}

#[test]
fn miss_draws_no_highlight() {
    let mut state = ready_state(200.0, 1.0);
    state.last_hit = Some(classify(Point::new(0.0, -99.0), &state.pixel_radii, &state.order));
    let surface = draw_state(&state, &BoardOptions::default());
    assert_eq!(surface.paths().len(), 80);
    assert_eq!(surface.circles().len(), 3);
}

// --- Debug overlay ---

#[test]
fn debug_overlay_needs_flag_and_hit() {
    let mut state = ready_state(200.0, 1.0);
    let mut options = BoardOptions { debug: true, ..BoardOptions::default() };
    assert_eq!(draw_state(&state, &options).rects(), 0);

    state.last_hit = Some(classify(Point::new(0.0, -99.0), &state.pixel_radii, &state.order));
    let surface = draw_state(&state, &options);
    assert_eq!(surface.rects(), 1);
    let texts = surface.texts();
    assert_eq!(texts.len(), 25);
    assert!(texts[20].starts_with("angle: "));
    assert_eq!(texts[22], "sector: none");
    assert_eq!(texts[24], "ring: miss");

    options.debug = false;
    assert_eq!(draw_state(&state, &options).rects(), 0);
}

#[test]
fn debug_backdrop_scales_with_dpr() {
    let mut state = ready_state(100.0, 2.0);
    state.last_hit = Some(classify(Point::default(), &state.pixel_radii, &state.order));
    let surface = draw_state(&state, &BoardOptions { debug: true, ..BoardOptions::default() });
    let rect = surface.calls.iter().find_map(|c| match c {
        Call::Rect { origin, width, height, .. } => Some((*origin, *width, *height)),
        _ => None,
    });
    assert_eq!(rect, Some((Point::new(12.0, 12.0), 320.0, 164.0)));
}

// --- Errors ---

#[test]
fn surface_errors_propagate() {
    let mut surface = RecordingSurface { broken: true, ..RecordingSurface::default() };
    let result = draw(&mut surface, &ready_state(200.0, 1.0), &BoardOptions::default());
    assert_eq!(result, Err("surface lost".to_owned()));
}
