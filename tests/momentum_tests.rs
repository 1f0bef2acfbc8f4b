// Host-side tests for drag/inertia scrolling.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/core/constants.rs");
}
mod momentum {
    include!("../src/core/momentum.rs");
}

use momentum::*;

fn extent(scroll_left: f64) -> ScrollExtent {
    ScrollExtent {
        scroll_left,
        scroll_width: 10_500.0,
        viewport_width: 500.0,
    }
}

/// Drag from `from` to `to` (one move event) and let go.
fn fling(s: &mut MomentumScroller, scroll_left: f64, from: f64, to: f64) {
    s.pointer_down(from, 0.0, scroll_left);
    s.pointer_move(to, 0.0);
    assert!(s.pointer_release());
}

#[test]
fn starts_idle_with_leftward_autoplay() {
    let mut s = MomentumScroller::new();
    assert_eq!(s.phase(), ScrollPhase::Idle);
    assert!(s.drag().should_slide);
    let next = s.step(extent(100.0)).unwrap();
    assert_eq!(next, 101.0);
    assert_eq!(s.phase(), ScrollPhase::Coasting);
}

#[test]
fn drag_positions_relative_to_drag_start() {
    let mut s = MomentumScroller::new();
    s.pointer_down(300.0, 100.0, 500.0);
    assert_eq!(s.phase(), ScrollPhase::Dragging);
    assert_eq!(s.drag().x, 200.0);

    assert_eq!(s.pointer_move(250.0, 100.0), Some(550.0));
    assert_eq!(s.drag().slide_speed, -50.0);
    assert_eq!(s.pointer_move(350.0, 100.0), Some(450.0));
    assert_eq!(s.drag().slide_speed, 100.0);
    assert_eq!(s.drag().old_x, 350.0);

    // the decay loop stays out of the way while dragging
    assert_eq!(s.step(extent(450.0)), None);
}

#[test]
fn moves_without_a_drag_are_ignored() {
    let mut s = MomentumScroller::new();
    assert_eq!(s.pointer_move(10.0, 0.0), None);
    assert!(!s.pointer_release());
}

#[test]
fn bounces_off_the_start() {
    let mut s = MomentumScroller::new();
    fling(&mut s, 0.0, 500.0, 480.0);
    assert!(s.drag().slide_speed < 0.0);

    let next = s.step(extent(0.0)).unwrap();
    assert!(s.drag().slide_speed > 0.0, "speed sign flips at the edge");
    assert_eq!(next, 0.0);
}

#[test]
fn bounces_off_the_end() {
    let mut s = MomentumScroller::new();
    let end = extent(0.0).max_scroll();
    fling(&mut s, end, 500.0, 480.0);
    let next = s.step(extent(end)).unwrap();
    assert!(s.drag().slide_speed > 0.0);
    assert!(next < end);
}

#[test]
fn decay_converges_then_snaps_to_autoplay() {
    let mut s = MomentumScroller::new();
    let mut pos = 5_000.0;
    fling(&mut s, pos, 100.0, 120.0);
    assert_eq!(s.drag().slide_speed, 20.0);

    let mut iterations = 0;
    while s.drag().slide_speed.abs() > 1.5 {
        pos = s.step(extent(pos)).unwrap();
        iterations += 1;
        assert!(iterations < 100);
    }
    assert_eq!(iterations, 25);

    pos = s.step(extent(pos)).unwrap();
    assert_eq!(s.drag().slide_speed, 1.0);
    let before = pos;
    pos = s.step(extent(pos)).unwrap();
    assert_eq!(pos, before - 1.0);
}

#[test]
fn hovering_freezes_the_marquee() {
    let mut s = MomentumScroller::new();
    s.hover_enter();
    let mut pos = 5_000.0;
    fling(&mut s, pos, 100.0, 120.0);

    for _ in 0..26 {
        pos = s.step(extent(pos)).unwrap();
    }
    assert_eq!(s.drag().slide_speed, 0.0);
    let settled = pos;
    for _ in 0..50 {
        pos = s.step(extent(pos)).unwrap();
    }
    assert_eq!(pos, settled);

    // leaving resumes autoplay in the direction of the last fling
    s.hover_leave();
    pos = s.step(extent(pos)).unwrap();
    assert_eq!(s.drag().slide_speed, 1.0);
    assert_eq!(pos, settled - 1.0);
}

#[test]
fn content_narrower_than_viewport_stays_put() {
    let mut s = MomentumScroller::new();
    let narrow = ScrollExtent {
        scroll_left: 0.0,
        scroll_width: 300.0,
        viewport_width: 500.0,
    };
    assert_eq!(narrow.max_scroll(), 0.0);
    for _ in 0..10 {
        assert_eq!(s.step(narrow), Some(0.0));
    }
}
