// Host-side tests for color parsing and ladder darkening.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/core/constants.rs");
}
mod color {
    include!("../src/core/color.rs");
}

use color::*;

#[test]
fn parses_six_and_three_digit_hex() {
    assert_eq!("#eeeeee".parse::<Rgb>().unwrap().value(), 0xEEEEEE);
    assert_eq!("1A2b3C".parse::<Rgb>().unwrap().value(), 0x1A2B3C);
    assert_eq!("#abc".parse::<Rgb>().unwrap().value(), 0xAABBCC);
    assert_eq!("  #000000 ".parse::<Rgb>().unwrap().value(), 0);
}

#[test]
fn rejects_malformed_hex() {
    assert!(matches!("#eeee".parse::<Rgb>(), Err(ColorError::BadLength(_))));
    assert!(matches!("#gggggg".parse::<Rgb>(), Err(ColorError::BadDigit(_))));
    assert!(matches!("".parse::<Rgb>(), Err(ColorError::BadLength(_))));
    assert!(matches!("#+12345".parse::<Rgb>(), Err(ColorError::BadDigit(_))));
}

#[test]
fn darken_matches_uniform_integer_subtraction() {
    // steps=16, darken=2: last rung is 32 units darker on every channel
    let base = Rgb::new(0xEEEEEE);
    let darkened = base.darken(16 * 2);
    assert_eq!(darkened.value(), 0xEEEEEE - 32 * 0x010101);
    assert_eq!(darkened.value(), 0xCECECE);
}

#[test]
fn darken_saturates_each_channel_at_zero() {
    let base = Rgb::new(0x10_80_FF);
    let darkened = base.darken(0x20);
    assert_eq!(darkened.channels(), [0x00, 0x60, 0xDF]);
    assert_eq!(Rgb::new(0x050505).darken(1000).value(), 0);
}

#[test]
fn darken_by_zero_is_identity() {
    let base = Rgb::new(0x123456);
    assert_eq!(base.darken(0), base);
}

#[test]
fn css_form_round_trips_through_parse() {
    let c = Rgb::new(0x0A0B0C);
    assert_eq!(c.to_css(), "#0a0b0c");
    assert_eq!(c.to_css().parse::<Rgb>().unwrap(), c);
    assert_eq!(Rgb::default().value(), constants::DEFAULT_COLOR);
}

#[test]
fn new_masks_to_24_bits() {
    assert_eq!(Rgb::new(0xFF_12_34_56).value(), 0x12_34_56);
}
