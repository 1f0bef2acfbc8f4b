use std::fmt;
use std::str::FromStr;

/// Error raised when a hex color string cannot be parsed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ColorError {
    #[error("color `{0}` must have 3 or 6 hex digits")]
    BadLength(String),
    #[error("color `{0}` contains a non-hex digit")]
    BadDigit(String),
}

/// 24-bit RGB color stored as `0xRRGGBB`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Rgb(u32);

impl Rgb {
    pub const fn new(value: u32) -> Self {
        Self(value & 0x00FF_FFFF)
    }

    pub const fn value(self) -> u32 {
        self.0
    }

    pub const fn channels(self) -> [u8; 3] {
        [(self.0 >> 16) as u8, (self.0 >> 8) as u8, self.0 as u8]
    }

    pub const fn from_channels(r: u8, g: u8, b: u8) -> Self {
        Self(((r as u32) << 16) | ((g as u32) << 8) | b as u32)
    }

    /// Darken every channel by `amount` RGB units.
    ///
    /// While no channel would drop below zero this is exactly
    /// `value - amount * 0x010101`. Channels that would underflow stop at 0
    /// instead of borrowing from their neighbour.
    pub fn darken(self, amount: u32) -> Self {
        let by = amount.min(u8::MAX as u32) as u8;
        let [r, g, b] = self.channels();
        Self::from_channels(r.saturating_sub(by), g.saturating_sub(by), b.saturating_sub(by))
    }

    /// CSS `#rrggbb` form, suitable for `fillStyle`.
    pub fn to_css(self) -> String {
        format!("#{:06x}", self.0)
    }
}

impl Default for Rgb {
    fn default() -> Self {
        Self::new(super::constants::DEFAULT_COLOR)
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:06x}", self.0)
    }
}

impl FromStr for Rgb {
    type Err = ColorError;

    /// Accepts `#rrggbb`, `rrggbb`, `#rgb` and `rgb`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let digits = s.trim().trim_start_matches('#');
        if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(ColorError::BadDigit(s.to_string()));
        }
        let expanded = match digits.len() {
            6 => digits.to_string(),
            3 => digits.chars().flat_map(|c| [c, c]).collect(),
            _ => return Err(ColorError::BadLength(s.to_string())),
        };
        u32::from_str_radix(&expanded, 16)
            .map(Self::new)
            .map_err(|_| ColorError::BadDigit(s.to_string()))
    }
}
