// SPDX-License-Identifier: MIT
//
// Terminal colors for swatch painting.
//
// The presentation layer only ever paints colors that arrive as hex strings
// from the palette engine, so this module deliberately stops at 24-bit RGB:
// parse `#RRGGBB`, carry three bytes, and let `ansi` encode them.

use std::fmt;

// ─── CellColor ───────────────────────────────────────────────────────────────

/// A color as the terminal sees it.
///
/// ```
/// use n_term::color::CellColor;
///
/// let blue = CellColor::from_hex("#3b82f6").unwrap();
/// assert_eq!(blue, CellColor::Rgb(0x3b, 0x82, 0xf6));
/// assert_eq!(blue.to_string(), "#3b82f6");
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CellColor {
    /// 24-bit `TrueColor`.
    Rgb(u8, u8, u8),

    /// Terminal default color (inherits from terminal settings).
    #[default]
    Default,
}

impl CellColor {
    /// Parse `#RRGGBB`.
    ///
    /// Returns `None` if the string is not a valid hex color.
    #[must_use]
    pub fn from_hex(s: &str) -> Option<Self> {
        let bytes = s.strip_prefix('#')?.as_bytes();
        if bytes.len() != 6 {
            return None;
        }

        let r = parse_hex_byte(&bytes[0..2])?;
        let g = parse_hex_byte(&bytes[2..4])?;
        let b = parse_hex_byte(&bytes[4..6])?;
        Some(Self::Rgb(r, g, b))
    }

    /// Whether this is the terminal default color.
    #[inline]
    #[must_use]
    pub const fn is_default(self) -> bool {
        matches!(self, Self::Default)
    }
}

impl fmt::Debug for CellColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Rgb(r, g, b) => write!(f, "#{r:02x}{g:02x}{b:02x}"),
            Self::Default => write!(f, "default"),
        }
    }
}

impl fmt::Display for CellColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

// ─── Hex Parsing ─────────────────────────────────────────────────────────────

#[inline]
const fn parse_hex_digit(c: u8) -> Option<u8> {
    match c {
        b'0'..=b'9' => Some(c - b'0'),
        b'a'..=b'f' => Some(c - b'a' + 10),
        b'A'..=b'F' => Some(c - b'A' + 10),
        _ => None,
    }
}

#[inline]
fn parse_hex_byte(bytes: &[u8]) -> Option<u8> {
    let hi = parse_hex_digit(bytes[0])?;
    let lo = parse_hex_digit(bytes[1])?;
    Some(hi << 4 | lo)
}

// ─── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_long_form() {
        assert_eq!(CellColor::from_hex("#ef4444"), Some(CellColor::Rgb(239, 68, 68)));
        assert_eq!(CellColor::from_hex("#EF4444"), Some(CellColor::Rgb(239, 68, 68)));
    }

    #[test]
    fn parse_requires_full_form() {
        assert_eq!(CellColor::from_hex("#fa0"), None);
        assert_eq!(CellColor::from_hex("ef4444"), None);
    }

    #[test]
    fn parse_rejects_garbage() {
        assert_eq!(CellColor::from_hex("#12345"), None);
        assert_eq!(CellColor::from_hex("#zzzzzz"), None);
        assert_eq!(CellColor::from_hex(""), None);
        // Multibyte input has the right byte length but is not hex.
        assert_eq!(CellColor::from_hex("#ééé"), None);
    }

    #[test]
    fn display_roundtrip() {
        let c = CellColor::Rgb(1, 2, 255);
        assert_eq!(c.to_string(), "#0102ff");
        assert_eq!(CellColor::from_hex(&c.to_string()), Some(c));
    }

    #[test]
    fn default_is_default() {
        assert!(CellColor::default().is_default());
        assert_eq!(CellColor::Default.to_string(), "default");
        assert!(!CellColor::Rgb(0, 0, 0).is_default());
    }
}
