// Host-side tests for constants and their mathematical relationships.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}
mod core_constants {
    include!("../src/core/constants.rs");
}

use constants::*;
use core_constants::*;

#[test]
#[allow(clippy::assertions_on_constants)]
fn weight_axis_is_the_full_variable_range() {
    assert_eq!(MIN_WEIGHT, 100);
    assert_eq!(MAX_WEIGHT, 900);
    assert_eq!(WEIGHT_RANGE, 800);
    // default resolution lands exactly on the heaviest weight
    assert_eq!(WEIGHT_RANGE % DEFAULT_STEPS, 0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn grid_and_wave_defaults_are_positive() {
    assert!(DEFAULT_CELL_SIZE > 0);
    assert!(DEFAULT_STEPS > 0);
    assert!(DEFAULT_LINE_OFFSET_LINES > 0);
    assert!(DEFAULT_WAVE_STEP > 0.0);
    assert!(DEFAULT_WAVE_ANGLE > 0.0);
    assert!(DEFAULT_CURSOR_SIZE > 0.0);
    assert!(DEFAULT_FRAME_INTERVAL_MS > 0.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn default_color_survives_full_ladder_without_clipping() {
    let darkest = DEFAULT_STEPS * DEFAULT_DARKEN_FACTOR;
    for shift in [0, 8, 16] {
        assert!((DEFAULT_COLOR >> shift) & 0xFF >= darkest);
    }
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn momentum_constants_have_logical_relationships() {
    // decay must shrink speed
    assert!(MOMENTUM_DECAY > 0.0 && MOMENTUM_DECAY < 1.0);
    // snapping to autoplay must not re-enter the decay branch
    assert!(AUTOPLAY_SPEED <= MOMENTUM_SNAP_THRESHOLD);
    assert!(AUTOPLAY_SPEED > 0.0);
}

#[test]
fn browser_wiring_constants_are_sane() {
    assert!(RESIZE_THROTTLE_MS > 0.0);
    assert!(DATA_OVERRIDE_KEYS.contains(&"spotlight"));
    assert!(DATA_OVERRIDE_KEYS.contains(&"mode"));
    assert_ne!(FONTS_LOADED_CLASS, FONTS_FAILED_CLASS);
    assert!(WAVE_CANVAS_SELECTOR.starts_with("canvas"));
    assert!(!MOMENTUM_SCROLL_SELECTOR.is_empty());
    assert!(DATA_OVERRIDE_KEYS.contains(&"font"));
    assert!(DEFAULT_FONT_FAMILY.starts_with("\"Arapey\""));
}
