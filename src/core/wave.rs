// Procedural weight field for the glyph wave canvases.
//
// Each frame walks the cell grid row-major and picks a ladder index per cell
// from a cyclic weight map, optionally boosted by a pointer spotlight. The
// field itself never touches a drawing surface: `render_frame` reports
// `(ladder index, x, y)` blits to a caller-supplied sink.

use std::collections::VecDeque;
use std::str::FromStr;

use glam::Vec2;

use super::color::{ColorError, Rgb};
use super::constants::*;
use super::grid::Grid;
use super::ladder::LadderParams;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigError {
    #[error("unknown wave mode `{0}` (expected `wave` or `flat`)")]
    UnknownMode(String),
    #[error("{0} must be greater than zero")]
    NotPositive(&'static str),
    #[error("{0} must be a finite number")]
    NotFinite(&'static str),
    #[error("invalid value `{value}` for `{key}`")]
    BadValue { key: String, value: String },
    #[error("letter must be exactly one character, got `{0}`")]
    BadLetter(String),
    #[error(transparent)]
    Color(#[from] ColorError),
}

/// How the weight map is laid out.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum WaveMode {
    /// Front-loaded ramp: the field animates.
    #[default]
    Wave,
    /// Every entry is 0: static display, only the spotlight moves weights.
    Flat,
}

impl FromStr for WaveMode {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "wave" => Ok(Self::Wave),
            "flat" => Ok(Self::Flat),
            other => Err(ConfigError::UnknownMode(other.to_string())),
        }
    }
}

/// Cyclic sequence of ladder indices read by an ever-growing counter.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WeightMap(Vec<usize>);

impl WeightMap {
    pub fn new(mode: WaveMode, steps: u32) -> Self {
        let rungs = steps as usize + 1;
        match mode {
            WaveMode::Flat => Self(vec![0; rungs]),
            WaveMode::Wave => {
                let mut map = VecDeque::with_capacity(rungs * (WAVE_FRONT_REPEATS + 1));
                for i in 0..rungs {
                    map.push_back(i);
                    for _ in 0..WAVE_FRONT_REPEATS {
                        map.push_front(i);
                    }
                }
                Self(map.into())
            }
        }
    }

    /// Entry at `counter` modulo the map length. Any counter, including a
    /// negative one, lands inside the map; an empty map reads as 0.
    #[inline]
    pub fn at(&self, counter: i64) -> usize {
        if self.0.is_empty() {
            return 0;
        }
        self.0[counter.rem_euclid(self.0.len() as i64) as usize]
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_slice(&self) -> &[usize] {
        &self.0
    }
}

/// Animation counters, advanced once per rendered frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WaveState {
    pub wave_offset: f64,
    pub wave_step: f64,
    pub wave_angle: f64,
    pub line_offset_lines: u32,
}

impl WaveState {
    fn from_config(config: &WaveConfig) -> Self {
        Self {
            wave_offset: 0.0,
            wave_step: config.wave_step,
            wave_angle: config.wave_angle,
            line_offset_lines: config.line_offset_lines,
        }
    }
}

/// Last known pointer position in viewport coordinates.
#[derive(Default, Clone, Copy, Debug, PartialEq)]
pub struct PointerState {
    pub x: f32,
    pub y: f32,
}

impl PointerState {
    pub fn on_pointer_move(&mut self, x: f32, y: f32) {
        self.x = x;
        self.y = y;
    }

    /// Pointer position relative to a surface whose top-left sits at `origin`.
    #[inline]
    pub fn relative_to(&self, origin: Vec2) -> Vec2 {
        Vec2::new(self.x, self.y) - origin
    }
}

/// Per-canvas tuning.
#[derive(Clone, Debug, PartialEq)]
pub struct WaveConfig {
    pub mode: WaveMode,
    pub letter: char,
    pub color: Rgb,
    pub font_family: String,
    pub cell_size: u32,
    pub steps: u32,
    pub wave_step: f64,
    pub wave_angle: f64,
    pub line_offset_lines: u32,
    pub darken_factor: u32,
    pub cursor_size: f32,
    pub spotlight: bool,
    pub frame_interval_ms: f64,
}

impl Default for WaveConfig {
    fn default() -> Self {
        Self {
            mode: WaveMode::Wave,
            letter: DEFAULT_LETTER,
            color: Rgb::new(DEFAULT_COLOR),
            font_family: DEFAULT_FONT_FAMILY.to_string(),
            cell_size: DEFAULT_CELL_SIZE,
            steps: DEFAULT_STEPS,
            wave_step: DEFAULT_WAVE_STEP,
            wave_angle: DEFAULT_WAVE_ANGLE,
            line_offset_lines: DEFAULT_LINE_OFFSET_LINES,
            darken_factor: DEFAULT_DARKEN_FACTOR,
            cursor_size: DEFAULT_CURSOR_SIZE,
            spotlight: false,
            frame_interval_ms: DEFAULT_FRAME_INTERVAL_MS,
        }
    }
}

impl WaveConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.font_family.trim().is_empty() {
            return Err(ConfigError::BadValue {
                key: "font".to_string(),
                value: self.font_family.clone(),
            });
        }
        if self.cell_size == 0 {
            return Err(ConfigError::NotPositive("cell size"));
        }
        if self.steps == 0 {
            return Err(ConfigError::NotPositive("steps"));
        }
        if self.line_offset_lines == 0 {
            return Err(ConfigError::NotPositive("line offset"));
        }
        if !self.cursor_size.is_finite() {
            return Err(ConfigError::NotFinite("cursor size"));
        }
        if self.cursor_size <= 0.0 {
            return Err(ConfigError::NotPositive("cursor size"));
        }
        if !self.wave_step.is_finite() {
            return Err(ConfigError::NotFinite("wave step"));
        }
        if !self.wave_angle.is_finite() {
            return Err(ConfigError::NotFinite("wave angle"));
        }
        if !self.frame_interval_ms.is_finite() || self.frame_interval_ms < 0.0 {
            return Err(ConfigError::NotFinite("frame interval"));
        }
        Ok(())
    }

    /// Apply one `data-*` style override, e.g. `("cell-size", "32")`.
    /// Unknown keys are ignored and reported as `Ok(false)`.
    pub fn apply_override(&mut self, key: &str, value: &str) -> Result<bool, ConfigError> {
        fn parse<T: FromStr>(key: &str, value: &str) -> Result<T, ConfigError> {
            value.trim().parse().map_err(|_| ConfigError::BadValue {
                key: key.to_string(),
                value: value.to_string(),
            })
        }
        match key {
            "mode" => self.mode = value.parse()?,
            "letter" => self.letter = parse_letter(value)?,
            "color" => self.color = value.parse()?,
            "cell-size" => self.cell_size = parse(key, value)?,
            "steps" => self.steps = parse(key, value)?,
            "wave-step" => self.wave_step = parse(key, value)?,
            "wave-angle" => self.wave_angle = parse(key, value)?,
            "line-offset" => self.line_offset_lines = parse(key, value)?,
            "darken" => self.darken_factor = parse(key, value)?,
            "cursor-size" => self.cursor_size = parse(key, value)?,
            "spotlight" => self.spotlight = parse(key, value)?,
            "interval" => self.frame_interval_ms = parse(key, value)?,
            "font" => {
                let family = value.trim();
                if family.is_empty() {
                    return Err(ConfigError::BadValue {
                        key: key.to_string(),
                        value: value.to_string(),
                    });
                }
                self.font_family = family.to_string();
            }
            _ => return Ok(false),
        }
        Ok(true)
    }

    pub fn ladder_params(&self) -> LadderParams {
        LadderParams {
            letter: self.letter,
            color: self.color,
            cell_size: self.cell_size,
            steps: self.steps,
            darken_factor: self.darken_factor,
        }
    }
}

pub fn parse_letter(value: &str) -> Result<char, ConfigError> {
    let mut chars = value.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Ok(c),
        _ => Err(ConfigError::BadLetter(value.to_string())),
    }
}

/// Ladder index contributed by pointer proximity; closer cells are heavier.
///
/// Distances are normalised per axis by the column and row counts, and the
/// horizontal term is rescaled by `columns / rows` so the spotlight stays
/// round on non-square grids.
pub fn spotlight_weight(
    cell: Vec2,
    pointer: Vec2,
    rows: u32,
    columns: u32,
    steps: u32,
    cursor_size: f32,
) -> usize {
    if rows == 0 || columns == 0 || cursor_size <= 0.0 {
        return 0;
    }
    let dx = (cell.x - pointer.x).abs() / columns as f32;
    let dy = (cell.y - pointer.y).abs() / rows as f32;
    let aspect = columns as f32 / rows as f32;
    let distance = (dx * aspect).hypot(dy);
    let weight = steps as f32 - distance / cursor_size;
    weight.round().clamp(0.0, steps as f32) as usize
}

/// Cell side in backing-store pixels for a CSS cell size.
#[inline]
pub fn device_cell_size(cell_size: u32, pixel_ratio: f64) -> u32 {
    ((cell_size as f64 * pixel_ratio).round() as u32).max(1)
}

pub struct WaveField {
    config: WaveConfig,
    grid: Grid,
    weight_map: WeightMap,
    state: WaveState,
    pixel_ratio: f64,
}

impl WaveField {
    pub fn new(config: WaveConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            weight_map: WeightMap::new(config.mode, config.steps),
            state: WaveState::from_config(&config),
            grid: Grid::default(),
            pixel_ratio: 1.0,
            config,
        })
    }

    pub fn config(&self) -> &WaveConfig {
        &self.config
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn weight_map(&self) -> &WeightMap {
        &self.weight_map
    }

    pub fn state(&self) -> &WaveState {
        &self.state
    }

    pub fn set_spotlight(&mut self, enabled: bool) {
        self.config.spotlight = enabled;
    }

    pub fn spotlight(&self) -> bool {
        self.config.spotlight
    }

    /// Track letter/color changes so the config mirrors the active ladder.
    pub fn set_letter(&mut self, letter: char, color: Option<Rgb>) {
        self.config.letter = letter;
        if let Some(color) = color {
            self.config.color = color;
        }
    }

    pub fn pixel_ratio(&self) -> f64 {
        self.pixel_ratio
    }

    /// Backing-store pixels per CSS pixel. Non-finite or non-positive
    /// ratios fall back to 1. Takes effect on the next `resize`.
    pub fn set_pixel_ratio(&mut self, ratio: f64) {
        self.pixel_ratio = if ratio.is_finite() && ratio > 0.0 { ratio } else { 1.0 };
    }

    /// Ladder parameters at the current pixel ratio.
    pub fn ladder_params(&self) -> LadderParams {
        LadderParams {
            cell_size: device_cell_size(self.config.cell_size, self.pixel_ratio),
            ..self.config.ladder_params()
        }
    }

    /// Re-tile for a new surface size in backing-store pixels. The ladder and
    /// wave state are untouched.
    pub fn resize(&mut self, width: u32, height: u32) {
        let cell_size = device_cell_size(self.config.cell_size, self.pixel_ratio);
        self.grid = Grid::tile(width, height, cell_size);
    }

    /// Compute one frame. `pointer` is the pointer in CSS pixels relative to
    /// the surface and only matters while spotlight mode is on. `blit` receives the clamped
    /// ladder index and the target position for every cell, in grid order.
    pub fn render_frame(
        &mut self,
        ladder_len: usize,
        pointer: Option<Vec2>,
        mut blit: impl FnMut(usize, f32, f32),
    ) {
        if ladder_len > 0 {
            let max_index = ladder_len - 1;
            let cell_size = self.grid.cell_size as f32;
            let lines = self.state.line_offset_lines.max(1);
            let spot = pointer.filter(|_| self.config.spotlight);
            let ratio = self.pixel_ratio as f32;

            let mut phase = self.state.wave_offset;
            let mut wave_index: i64 = 0;
            let mut row_counter: u32 = 0;
            let mut offset_x = 0.0f32;
            let mut last_y: Option<f32> = None;

            for cell in &self.grid.cells {
                if last_y != Some(cell.y) {
                    last_y = Some(cell.y);
                    phase += self.state.wave_angle;
                    wave_index = phase.round() as i64;
                    offset_x = (row_counter % lines) as f32 / lines as f32 * cell_size;
                    row_counter = row_counter.wrapping_add(1);
                } else {
                    wave_index += 1;
                }

                let mut weight = self.weight_map.at(wave_index);
                if let Some(p) = spot {
                    let lit = spotlight_weight(
                        Vec2::new(cell.x, cell.y) / ratio,
                        p,
                        self.grid.rows,
                        self.grid.columns,
                        self.config.steps,
                        self.config.cursor_size,
                    );
                    weight = weight.max(lit);
                }
                blit(weight.min(max_index), (cell.x - offset_x).round(), cell.y);
            }
        }
        self.state.wave_offset += self.state.wave_step;
    }
}
