//! Icon dimensions and the 64-unit reference grid

use serde::Deserialize;
use std::fmt;

/// Side length of the reference design that all shape coordinates use
pub const REFERENCE_UNITS: u32 = 64;

/// Pixel dimensions of one rendered icon
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(from = "SizeRepr")]
pub struct IconSize {
    pub width: u32,
    pub height: u32,
}

impl IconSize {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    pub const fn square(side: u32) -> Self {
        Self::new(side, side)
    }

    /// Both sides are non-zero
    pub fn is_valid(&self) -> bool {
        self.width > 0 && self.height > 0
    }

    /// Length of the shorter side, which drives the scale factor
    pub fn min_side(&self) -> u32 {
        self.width.min(self.height)
    }

    pub fn area(&self) -> u64 {
        self.width as u64 * self.height as u64
    }

    pub fn scale(&self) -> Scale {
        Scale::new(self.min_side())
    }
}

impl fmt::Display for IconSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

/// Accepted config spellings: `16`, `[16, 16]` or `{ width = 16, height = 16 }`
#[derive(Deserialize)]
#[serde(untagged)]
enum SizeRepr {
    Square(u32),
    Pair([u32; 2]),
    Table { width: u32, height: u32 },
}

impl From<SizeRepr> for IconSize {
    fn from(repr: SizeRepr) -> Self {
        match repr {
            SizeRepr::Square(side) => IconSize::square(side),
            SizeRepr::Pair([width, height]) => IconSize::new(width, height),
            SizeRepr::Table { width, height } => IconSize::new(width, height),
        }
    }
}

/// Maps reference-grid units onto pixels for one canvas.
///
/// A value of `units` becomes `floor(units * min_side / 64)`. The product is
/// taken in integers so small sizes come out the same on every platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Scale {
    min_side: u32,
}

impl Scale {
    pub const fn new(min_side: u32) -> Self {
        Self { min_side }
    }

    /// Scaled pixel coordinate, truncated toward zero
    pub fn px(&self, units: u32) -> i64 {
        (units as u64 * self.min_side as u64 / REFERENCE_UNITS as u64) as i64
    }

    /// Floating-point scale factor, for display only
    pub fn factor(&self) -> f64 {
        self.min_side as f64 / REFERENCE_UNITS as f64
    }
}
