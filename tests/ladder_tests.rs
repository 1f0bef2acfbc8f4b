// Host-side tests for the glyph weight ladder and its cache.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/core/constants.rs");
}
mod color {
    include!("../src/core/color.rs");
}
mod ladder {
    include!("../src/core/ladder.rs");
}

use color::Rgb;
use ladder::*;

/// Records every glyph it is asked to draw; the "image" is the `GlyphSpec` it was given.
#[derive(Default)]
struct RecordingRasterizer {
    calls: usize,
    fail_at: Option<usize>,
}

impl GlyphRasterizer for RecordingRasterizer {
    type Image = GlyphSpec;

    fn rasterize(&mut self, glyph: &GlyphSpec) -> anyhow::Result<GlyphSpec> {
        if self.fail_at == Some(self.calls) {
            anyhow::bail!("rasterizer gave up");
        }
        self.calls += 1;
        Ok(glyph.clone())
    }
}

fn params(steps: u32) -> LadderParams {
    LadderParams {
        letter: 'A',
        color: Rgb::new(0xEEEEEE),
        cell_size: 40,
        steps,
        darken_factor: 2,
    }
}

#[test]
fn ladder_has_steps_plus_one_rungs_with_rising_weights() {
    for steps in 1..=64u32 {
        let mut r = RecordingRasterizer::default();
        let ladder = WeightLadder::build(&mut r, params(steps)).unwrap();
        assert_eq!(ladder.len(), steps as usize + 1);
        assert_eq!(r.calls, steps as usize + 1);

        let step = (800.0f64 / steps as f64).round() as u32;
        let mut prev = 0;
        for i in 0..=steps {
            let glyph = ladder.get(i as usize).unwrap();
            assert_eq!(glyph.weight, 100 + i * step, "steps={steps} i={i}");
            assert!(glyph.weight >= prev);
            prev = glyph.weight;
        }
    }
}

#[test]
fn ladder_ends_match_reference_scenario() {
    let mut r = RecordingRasterizer::default();
    let ladder = WeightLadder::build(&mut r, params(16)).unwrap();
    let first = ladder.get(0).unwrap();
    let last = ladder.get(16).unwrap();
    assert_eq!(first.weight, 100);
    assert_eq!(last.weight, 900);
    assert_eq!(first.color.value(), 0xEEEEEE);
    assert_eq!(last.color.value(), 0xCECECE);
    for i in 0..ladder.len() {
        assert_eq!(ladder.get(i).unwrap().cell_size, 40);
    }
}

#[test]
fn out_of_range_lookups_clamp_to_heaviest_rung() {
    let mut r = RecordingRasterizer::default();
    let ladder = WeightLadder::build(&mut r, params(8)).unwrap();
    assert_eq!(ladder.clamp_index(8), 8);
    assert_eq!(ladder.clamp_index(9), 8);
    assert_eq!(ladder.clamp_index(usize::MAX), 8);
    assert_eq!(ladder.get(1000).unwrap().weight, weight_for_index(8, 8));
}

#[test]
fn rasterizer_failure_aborts_build() {
    let mut r = RecordingRasterizer {
        calls: 0,
        fail_at: Some(3),
    };
    assert!(WeightLadder::build(&mut r, params(16)).is_err());
}

#[test]
fn cache_rebuilds_only_on_change() {
    let mut cache = GlyphWeightCache::new(RecordingRasterizer::default(), params(16)).unwrap();
    assert_eq!(cache.rasterizer().calls, 17);

    // same letter, color inherited: nothing to do
    assert!(!cache.set_letter('A', None).unwrap());
    assert_eq!(cache.rasterizer().calls, 17);

    assert!(cache.set_letter('g', None).unwrap());
    assert_eq!(cache.rasterizer().calls, 34);
    assert_eq!(cache.ladder().get(0).unwrap().letter, 'g');
    assert_eq!(cache.ladder().params().color.value(), 0xEEEEEE);

    assert!(cache.set_letter('g', Some(Rgb::new(0x336699))).unwrap());
    assert_eq!(cache.ladder().get(0).unwrap().color.value(), 0x336699);

    // identical parameters are a no-op
    let current = *cache.ladder().params();
    assert!(!cache.update(current).unwrap());
    assert_eq!(cache.rasterizer().calls, 51);
}

#[test]
fn cache_rerasterizes_for_a_new_cell_size() {
    let mut cache = GlyphWeightCache::new(RecordingRasterizer::default(), params(16)).unwrap();
    let hidpi = LadderParams {
        cell_size: 80,
        ..params(16)
    };
    assert!(cache.update(hidpi).unwrap());
    assert_eq!(cache.ladder().len(), 17);
    assert!((0..17).all(|i| cache.ladder().get(i).unwrap().cell_size == 80));

    // a later letter change keeps the rescaled cell size
    assert!(cache.set_letter('b', None).unwrap());
    assert_eq!(cache.ladder().get(16).unwrap().cell_size, 80);
}

#[test]
fn fill_colors_darken_monotonically() {
    let base = Rgb::new(0x808080);
    let mut prev = base.value();
    for i in 0..=64 {
        let c = fill_for_index(base, i, 3).value();
        assert!(c <= prev);
        prev = c;
    }
    assert_eq!(fill_for_index(base, 64, 3).value(), 0);
}
