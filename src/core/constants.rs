// Tuning constants for the glyph wave canvases and the momentum scroller.
//
// These are the defaults behind `WaveConfig::default()`; individual canvases
// can override most of them through `data-*` attributes.

// Grid and weight ladder
pub const DEFAULT_CELL_SIZE: u32 = 40; // px, square cell side
pub const DEFAULT_STEPS: u32 = 16; // ladder resolution; ladder holds STEPS + 1 images
pub const MIN_WEIGHT: u32 = 100;
pub const MAX_WEIGHT: u32 = 900;
pub const WEIGHT_RANGE: u32 = MAX_WEIGHT - MIN_WEIGHT;

// Color falloff across the ladder, in RGB units per step
pub const DEFAULT_DARKEN_FACTOR: u32 = 2;
pub const DEFAULT_COLOR: u32 = 0xEE_EE_EE;
pub const DEFAULT_LETTER: char = 'A';
// Variable typeface the ladder is rasterized with (CSS font-family list)
pub const DEFAULT_FONT_FAMILY: &str = "\"Arapey\", serif";

// Procedural wave
pub const DEFAULT_WAVE_STEP: f64 = 0.35; // phase advance per frame
pub const DEFAULT_WAVE_ANGLE: f64 = 1.5; // phase advance per row
pub const DEFAULT_LINE_OFFSET_LINES: u32 = 4; // rows per horizontal stagger cycle
pub const WAVE_FRONT_REPEATS: usize = 3; // front-loaded copies of each ladder index

// Pointer spotlight
pub const DEFAULT_CURSOR_SIZE: f32 = 3.0;

// Frame cadence
pub const DEFAULT_FRAME_INTERVAL_MS: f64 = 1000.0 / 30.0;

// Momentum scroller
pub const MOMENTUM_DECAY: f64 = 0.9; // per-frame speed multiplier while coasting
pub const MOMENTUM_SNAP_THRESHOLD: f64 = 1.5; // |speed| at or below which speed snaps
pub const AUTOPLAY_SPEED: f64 = 1.0; // px per frame once snapped while sliding
