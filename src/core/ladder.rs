// Pre-rendered glyph images across the variable weight axis.
//
// A ladder holds `steps + 1` images of one letter, index `i` rasterized at
// weight `100 + i * round(800 / steps)` and filled with the base color
// darkened by `i * darken_factor`. Building one costs `steps + 1`
// rasterizations, so it only happens when the letter, color or resolution
// changes.

use super::color::Rgb;
use super::constants::{MIN_WEIGHT, WEIGHT_RANGE};

/// Distance between adjacent ladder weights.
#[inline]
pub fn weight_step(steps: u32) -> u32 {
    (WEIGHT_RANGE as f64 / steps.max(1) as f64).round() as u32
}

#[inline]
pub fn weight_for_index(index: u32, steps: u32) -> u32 {
    MIN_WEIGHT + index * weight_step(steps)
}

#[inline]
pub fn fill_for_index(base: Rgb, index: u32, darken_factor: u32) -> Rgb {
    base.darken(index.saturating_mul(darken_factor))
}

/// Everything a rasterizer needs to draw one ladder rung.
#[derive(Clone, Debug, PartialEq)]
pub struct GlyphSpec {
    pub letter: char,
    pub weight: u32,
    pub color: Rgb,
    pub cell_size: u32,
}

/// Draws a single glyph centered in a `cell_size` square.
pub trait GlyphRasterizer {
    type Image;

    fn rasterize(&mut self, glyph: &GlyphSpec) -> anyhow::Result<Self::Image>;
}

/// Parameters that determine a ladder's contents.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LadderParams {
    pub letter: char,
    pub color: Rgb,
    pub cell_size: u32,
    pub steps: u32,
    pub darken_factor: u32,
}

pub struct WeightLadder<I> {
    params: LadderParams,
    images: Vec<I>,
}

impl<I> WeightLadder<I> {
    pub fn build<R>(rasterizer: &mut R, params: LadderParams) -> anyhow::Result<Self>
    where
        R: GlyphRasterizer<Image = I>,
    {
        let mut images = Vec::with_capacity(params.steps as usize + 1);
        for i in 0..=params.steps {
            let glyph = GlyphSpec {
                letter: params.letter,
                weight: weight_for_index(i, params.steps),
                color: fill_for_index(params.color, i, params.darken_factor),
                cell_size: params.cell_size,
            };
            images.push(rasterizer.rasterize(&glyph)?);
        }
        log::debug!(
            "[ladder] built '{}' {} rungs color={}",
            params.letter,
            images.len(),
            params.color
        );
        Ok(Self { params, images })
    }

    pub fn params(&self) -> &LadderParams {
        &self.params
    }

    pub fn len(&self) -> usize {
        self.images.len()
    }

    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }

    /// Clamp `index` into `[0, len - 1]`. Returns 0 for an empty ladder.
    #[inline]
    pub fn clamp_index(&self, index: usize) -> usize {
        index.min(self.images.len().saturating_sub(1))
    }

    /// Look up a rung, clamping out-of-range indices to the heaviest one.
    #[inline]
    pub fn get(&self, index: usize) -> Option<&I> {
        self.images.get(self.clamp_index(index))
    }
}

/// Owns a rasterizer and the ladder it produced, rebuilding on change.
pub struct GlyphWeightCache<R: GlyphRasterizer> {
    rasterizer: R,
    ladder: WeightLadder<R::Image>,
}

impl<R: GlyphRasterizer> GlyphWeightCache<R> {
    pub fn new(mut rasterizer: R, params: LadderParams) -> anyhow::Result<Self> {
        let ladder = WeightLadder::build(&mut rasterizer, params)?;
        Ok(Self { rasterizer, ladder })
    }

    pub fn ladder(&self) -> &WeightLadder<R::Image> {
        &self.ladder
    }

    pub fn rasterizer(&self) -> &R {
        &self.rasterizer
    }

    /// Switch letter and optionally color. Returns whether a rebuild happened.
    pub fn set_letter(&mut self, letter: char, color: Option<Rgb>) -> anyhow::Result<bool> {
        let params = LadderParams {
            letter,
            color: color.unwrap_or(self.ladder.params.color),
            ..self.ladder.params
        };
        self.update(params)
    }

    /// Rebuild for new parameters, e.g. a cell size rescaled for another
    /// pixel ratio. The color is taken from `params`. Returns whether a
    /// rebuild happened.
    pub fn update(&mut self, params: LadderParams) -> anyhow::Result<bool> {
        if params == self.ladder.params {
            return Ok(false);
        }
        self.ladder = WeightLadder::build(&mut self.rasterizer, params)?;
        Ok(true)
    }
}
