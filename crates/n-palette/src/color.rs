//! sRGB colors and `#RRGGBB` hex conversion.
//!
//! Channels are kept as `f64` in the 0–255 range. Intermediate shade math
//! may produce fractional values; they are only rounded and clamped when a
//! color is encoded back to hex.

use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

use crate::contrast;
use crate::error::PaletteError;

static HEX_COLOR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^#[0-9a-fA-F]{6}$").expect("hex color pattern compiles"));

// ─── Rgb ─────────────────────────────────────────────────────────────────────

/// An sRGB color with channels in 0.0–255.0.
///
/// ```
/// use n_palette::color::Rgb;
///
/// let blue = Rgb::from_hex("#3B82F6").unwrap();
/// assert_eq!(blue, Rgb::new(59.0, 130.0, 246.0));
/// assert_eq!(blue.to_hex(), "#3b82f6");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Rgb {
    pub r: f64,
    pub g: f64,
    pub b: f64,
}

impl Rgb {
    /// Pure black.
    pub const BLACK: Self = Self::new(0.0, 0.0, 0.0);

    /// Pure white.
    pub const WHITE: Self = Self::new(255.0, 255.0, 255.0);

    #[inline]
    #[must_use]
    pub const fn new(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b }
    }

    /// Parse a `#RRGGBB` string. Hex digits may be upper or lower case.
    ///
    /// # Errors
    ///
    /// Returns [`PaletteError::InvalidColorInput`] for anything that is not
    /// exactly a `#` followed by six hex digits.
    pub fn from_hex(s: &str) -> Result<Self, PaletteError> {
        if !HEX_COLOR.is_match(s) {
            return Err(PaletteError::InvalidColorInput { input: s.to_owned() });
        }
        let byte = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&s[range], 16)
                .map(f64::from)
                .map_err(|_| PaletteError::InvalidColorInput { input: s.to_owned() })
        };
        Ok(Self::new(byte(1..3)?, byte(3..5)?, byte(5..7)?))
    }

    /// Encode as lowercase `#rrggbb`, rounding and clamping each channel.
    #[must_use]
    pub fn to_hex(self) -> String {
        let (r, g, b) = self.to_rgb8();
        format!("#{r:02x}{g:02x}{b:02x}")
    }

    /// Round and clamp to 8-bit channels.
    #[must_use]
    pub fn to_rgb8(self) -> (u8, u8, u8) {
        (to_u8(self.r), to_u8(self.g), to_u8(self.b))
    }

    /// Apply `f` to every channel.
    #[must_use]
    pub fn map(self, f: impl Fn(f64) -> f64) -> Self {
        Self::new(f(self.r), f(self.g), f(self.b))
    }

    /// The channels as an array, in `[r, g, b]` order.
    #[inline]
    #[must_use]
    pub const fn channels(self) -> [f64; 3] {
        [self.r, self.g, self.b]
    }

    /// WCAG relative luminance, see [`contrast::relative_luminance`].
    #[must_use]
    pub fn luminance(self) -> f64 {
        contrast::relative_luminance(self.r, self.g, self.b)
    }

    /// Black or white, whichever reads better on top of this color.
    #[must_use]
    pub fn contrast_color(self) -> Self {
        contrast::contrast_color(self.r, self.g, self.b)
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl FromStr for Rgb {
    type Err = PaletteError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

// ─── Free functions ──────────────────────────────────────────────────────────

/// Parse `#RRGGBB` into channels. Alias for [`Rgb::from_hex`].
///
/// # Errors
///
/// Returns [`PaletteError::InvalidColorInput`] on malformed input.
pub fn hex_to_rgb(hex: &str) -> Result<Rgb, PaletteError> {
    Rgb::from_hex(hex)
}

/// Encode three channels as `#rrggbb`.
///
/// Channels are rounded to the nearest integer and then clamped to 0–255, so
/// the result always matches `^#[0-9a-f]{6}$`, even for out-of-range or
/// fractional input. `NaN` encodes as `00`.
#[must_use]
pub fn rgb_to_hex(r: f64, g: f64, b: f64) -> String {
    Rgb::new(r, g, b).to_hex()
}

#[inline]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn to_u8(v: f64) -> u8 {
    if v.is_nan() {
        return 0;
    }
    // Clamp runs after rounding, so the cast never truncates.
    v.round().clamp(0.0, 255.0) as u8
}

// ─── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    // ── Parsing ──────────────────────────────────────────────────────────

    #[test]
    fn parses_upper_and_lower_case() {
        let upper = Rgb::from_hex("#3B82F6").unwrap();
        let lower = Rgb::from_hex("#3b82f6").unwrap();
        assert_eq!(upper, lower);
        assert_eq!(upper, Rgb::new(59.0, 130.0, 246.0));
    }

    #[test]
    fn parses_extremes() {
        assert_eq!(Rgb::from_hex("#000000").unwrap(), Rgb::BLACK);
        assert_eq!(Rgb::from_hex("#ffffff").unwrap(), Rgb::WHITE);
    }

    #[test]
    fn rejects_malformed_input() {
        let malformed = [
            "", "#", "3b82f6", "#3b82f", "#3b82f6a", "#fff", "#gg0000", " #3b82f6", "#3b82f6 ",
            "#+12345",
        ];
        for bad in malformed {
            assert_eq!(
                Rgb::from_hex(bad),
                Err(PaletteError::InvalidColorInput { input: bad.to_owned() }),
                "accepted {bad:?}"
            );
        }
    }

    #[test]
    fn rejects_multibyte_input_without_panicking() {
        assert!(Rgb::from_hex("#ééé").is_err());
        assert!(Rgb::from_hex("#12345é").is_err());
    }

    #[test]
    fn from_str_matches_from_hex() {
        let parsed: Rgb = "#ef4444".parse().unwrap();
        assert_eq!(parsed, Rgb::new(239.0, 68.0, 68.0));
    }

    // ── Encoding ─────────────────────────────────────────────────────────

    #[test]
    fn encodes_lowercase_two_digits() {
        assert_eq!(rgb_to_hex(1.0, 10.0, 171.0), "#010aab");
    }

    #[test]
    fn rounds_fractional_channels() {
        assert_eq!(rgb_to_hex(0.4, 0.5, 254.6), "#0001ff");
    }

    #[test]
    fn clamps_out_of_range_channels() {
        assert_eq!(rgb_to_hex(-12.0, 300.0, 255.4), "#00ffff");
        assert_eq!(rgb_to_hex(-0.6, 255.5, 1e9), "#00ffff");
    }

    #[test]
    fn nan_encodes_as_zero() {
        assert_eq!(rgb_to_hex(f64::NAN, 255.0, f64::NAN), "#00ff00");
    }

    #[test]
    fn display_is_hex() {
        assert_eq!(Rgb::new(59.0, 130.0, 246.0).to_string(), "#3b82f6");
    }

    // ── Properties ───────────────────────────────────────────────────────

    proptest! {
        #[test]
        fn hex_roundtrip_is_lossless(r in 0u8..=255, g in 0u8..=255, b in 0u8..=255) {
            let hex = format!("#{r:02x}{g:02x}{b:02x}");
            let rgb = hex_to_rgb(&hex).unwrap();
            prop_assert_eq!(rgb_to_hex(rgb.r, rgb.g, rgb.b), hex);
        }

        #[test]
        fn any_channels_encode_to_valid_hex(
            r in -1e6f64..1e6,
            g in -1e6f64..1e6,
            b in -1e6f64..1e6,
        ) {
            let hex = rgb_to_hex(r, g, b);
            prop_assert!(HEX_COLOR.is_match(&hex));
            prop_assert_eq!(hex.to_lowercase(), hex);
        }
    }
}
