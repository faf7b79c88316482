//! The fixed 12-step shade scale.
//!
//! Shade 400 is the base color. Lower keys blend toward white, higher keys
//! scale toward black:
//!
//! ```text
//!   25   50  100  200  300 │ 400 │ 500  600  700  800  900  950
//!  0.1  0.2  0.4  0.6  0.8 │ 1.0 │ 1.2  1.4  1.6  1.8  2.0  2.2
//!  ◄──── lighten ──────────┤base ├──────────── darken ────────►
//! ```
//!
//! The model is linear in sRGB, not perceptual. Shades of different base
//! hues will not line up in perceived lightness; a yellow 700 looks lighter
//! than a blue 700.

use std::fmt;
use std::str::FromStr;

use serde::{Serialize, Serializer};

use crate::color::Rgb;
use crate::error::PaletteError;

// ---------------------------------------------------------------------------
// ShadeKey
// ---------------------------------------------------------------------------

/// One of the twelve shade steps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ShadeKey {
    S25,
    S50,
    S100,
    S200,
    S300,
    S400,
    S500,
    S600,
    S700,
    S800,
    S900,
    S950,
}

impl ShadeKey {
    /// Every key, lightest first.
    pub const ALL: [Self; 12] = [
        Self::S25,
        Self::S50,
        Self::S100,
        Self::S200,
        Self::S300,
        Self::S400,
        Self::S500,
        Self::S600,
        Self::S700,
        Self::S800,
        Self::S900,
        Self::S950,
    ];

    /// The identity shade.
    pub const BASE: Self = Self::S400;

    /// Numeric key used in variable names (`25`, `50`, … `950`).
    #[must_use]
    pub const fn value(self) -> u16 {
        match self {
            Self::S25 => 25,
            Self::S50 => 50,
            Self::S100 => 100,
            Self::S200 => 200,
            Self::S300 => 300,
            Self::S400 => 400,
            Self::S500 => 500,
            Self::S600 => 600,
            Self::S700 => 700,
            Self::S800 => 800,
            Self::S900 => 900,
            Self::S950 => 950,
        }
    }

    /// Adjustment factor passed to [`adjust_shade`].
    #[must_use]
    pub const fn factor(self) -> f64 {
        match self {
            Self::S25 => 0.1,
            Self::S50 => 0.2,
            Self::S100 => 0.4,
            Self::S200 => 0.6,
            Self::S300 => 0.8,
            Self::S400 => 1.0,
            Self::S500 => 1.2,
            Self::S600 => 1.4,
            Self::S700 => 1.6,
            Self::S800 => 1.8,
            Self::S900 => 2.0,
            Self::S950 => 2.2,
        }
    }

    /// Look up a key by its numeric value.
    #[must_use]
    pub fn from_value(value: u16) -> Option<Self> {
        Self::ALL.into_iter().find(|key| key.value() == value)
    }

    /// Compute this shade of `base`. Shade 400 returns `base` unchanged.
    #[must_use]
    pub fn apply(self, base: Rgb) -> Rgb {
        if self == Self::BASE {
            base
        } else {
            adjust_shade(base, self.factor())
        }
    }
}

impl fmt::Display for ShadeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value())
    }
}

impl FromStr for ShadeKey {
    type Err = PaletteError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse::<u16>()
            .ok()
            .and_then(Self::from_value)
            .ok_or_else(|| PaletteError::UnknownShade { input: s.to_owned() })
    }
}

impl Serialize for ShadeKey {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u16(self.value())
    }
}

// ---------------------------------------------------------------------------
// adjust_shade
// ---------------------------------------------------------------------------

/// Lighten or darken `rgb` by `factor`.
///
/// - `factor < 1`: each channel moves toward 255 by `1 - factor` of its
///   remaining distance, `c + (255 - c) * (1 - factor)`.
/// - `factor >= 1`: each channel is scaled by `1 - (factor - 1) * 0.5` and
///   clamped to 0–255. At 2.2 a channel keeps 40% of its value.
///
/// Channels are left fractional; rounding happens at hex encoding.
#[must_use]
pub fn adjust_shade(rgb: Rgb, factor: f64) -> Rgb {
    if factor < 1.0 {
        let t = 1.0 - factor;
        rgb.map(|c| (255.0 - c).mul_add(t, c))
    } else {
        let scale = (factor - 1.0).mul_add(-0.5, 1.0);
        rgb.map(|c| (c * scale).clamp(0.0, 255.0))
    }
}

// ---------------------------------------------------------------------------
// ShadeScale
// ---------------------------------------------------------------------------

/// All twelve shades of one base color, in ascending key order.
#[derive(Debug, Clone, PartialEq)]
pub struct ShadeScale {
    shades: [(ShadeKey, Rgb); 12],
}

impl ShadeScale {
    /// Generate the full scale for `base`.
    #[must_use]
    pub fn generate(base: Rgb) -> Self {
        Self {
            shades: ShadeKey::ALL.map(|key| (key, key.apply(base))),
        }
    }

    /// The color at `key`.
    #[must_use]
    pub fn get(&self, key: ShadeKey) -> Rgb {
        // ALL is ordered the same way the enum discriminants are.
        self.shades[key as usize].1
    }

    /// The unmodified base color (shade 400).
    #[must_use]
    pub fn base(&self) -> Rgb {
        self.get(ShadeKey::BASE)
    }

    /// Iterate `(key, color)` pairs from lightest to darkest.
    pub fn iter(&self) -> impl Iterator<Item = (ShadeKey, Rgb)> + '_ {
        self.shades.iter().copied()
    }

    /// Always 12.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.shades.len()
    }

    /// Always false; present for API symmetry with `len`.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.shades.is_empty()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
