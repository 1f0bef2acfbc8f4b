pub mod cadence;
pub mod color;
pub mod constants;
pub mod grid;
pub mod ladder;
pub mod momentum;
pub mod wave;

pub use cadence::{Cadence, ThrottleAction, ThrottleGate};
pub use color::Rgb;
pub use ladder::{GlyphRasterizer, GlyphSpec, GlyphWeightCache};
pub use momentum::{MomentumScroller, ScrollExtent};
pub use wave::{parse_letter, PointerState, WaveConfig, WaveField, WaveMode};
