// Browser-facing wiring constants.

// Canvases carrying this attribute get a wave renderer at startup
pub const WAVE_CANVAS_SELECTOR: &str = "canvas[data-glyphwave]";
// Containers carrying this attribute get a momentum scroller
pub const MOMENTUM_SCROLL_SELECTOR: &str = "[data-momentum-scroll]";

// Per-canvas override keys, read from data-<key> (e.g. data-cell-size="32")
pub const DATA_OVERRIDE_KEYS: &[&str] = &[
    "mode",
    "letter",
    "color",
    "cell-size",
    "steps",
    "wave-step",
    "wave-angle",
    "line-offset",
    "darken",
    "cursor-size",
    "spotlight",
    "interval",
    "font",
];

// Viewport resize events are throttled to this cadence
pub const RESIZE_THROTTLE_MS: f64 = 100.0;

// Classes set on <html> once the font loader settles
pub const FONTS_LOADED_CLASS: &str = "fonts-loaded";
pub const FONTS_FAILED_CLASS: &str = "fonts-failed";
