// SPDX-License-Identifier: MIT
//
// Text styling: attribute flags plus foreground/background colors.
//
// A `Style` is applied around a single run of text. `paint` emits exactly the
// SGR sequences the style needs, the text, and a reset, or just the text
// when styling is disabled, so callers never branch on color support.

use std::io::{self, Write};

use crate::ansi;
use crate::color::CellColor;

bitflags::bitflags! {
    /// Text attributes stored as a compact bitfield.
    ///
    /// These map directly to SGR (Select Graphic Rendition) parameters:
    ///
    /// ```
    /// use n_term::style::Attr;
    ///
    /// let heading = Attr::BOLD | Attr::UNDERLINE;
    /// assert!(heading.contains(Attr::BOLD));
    /// assert!(!heading.contains(Attr::DIM));
    /// ```
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
    pub struct Attr: u8 {
        /// SGR 1: increased intensity.
        const BOLD      = 1 << 0;
        /// SGR 2: decreased intensity (faint).
        const DIM       = 1 << 1;
        /// SGR 3: italic or oblique.
        const ITALIC    = 1 << 2;
        /// SGR 4: single underline.
        const UNDERLINE = 1 << 3;
        /// SGR 7: swap foreground and background.
        const INVERSE   = 1 << 4;
    }
}

/// Colors and attributes for one run of text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Style {
    pub fg: CellColor,
    pub bg: CellColor,
    pub attr: Attr,
}

impl Style {
    /// An empty style: terminal default colors, no attributes.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            fg: CellColor::Default,
            bg: CellColor::Default,
            attr: Attr::empty(),
        }
    }

    #[must_use]
    pub const fn fg(self, fg: CellColor) -> Self {
        Self { fg, ..self }
    }

    #[must_use]
    pub const fn bg(self, bg: CellColor) -> Self {
        Self { bg, ..self }
    }

    #[must_use]
    pub const fn attr(self, attr: Attr) -> Self {
        Self { attr, ..self }
    }

    /// Whether painting with this style would emit any escape codes.
    #[must_use]
    pub const fn is_plain(self) -> bool {
        self.fg.is_default() && self.bg.is_default() && self.attr.is_empty()
    }

    /// Write `text` in this style.
    ///
    /// With `enabled == false` (no TTY, `NO_COLOR`) only the text is written.
    ///
    /// # Errors
    ///
    /// Propagates any error from the underlying writer.
    pub fn paint(self, w: &mut impl Write, text: &str, enabled: bool) -> io::Result<()> {
        if !enabled || self.is_plain() {
            return w.write_all(text.as_bytes());
        }
        ansi::attrs(w, self.attr)?;
        if !self.fg.is_default() {
            ansi::fg(w, self.fg)?;
        }
        if !self.bg.is_default() {
            ansi::bg(w, self.bg)?;
        }
        w.write_all(text.as_bytes())?;
        ansi::reset(w)
    }
}

// ─── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn painted(style: Style, text: &str, enabled: bool) -> String {
        let mut out = Vec::new();
        style.paint(&mut out, text, enabled).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn plain_style_writes_only_text() {
        assert_eq!(painted(Style::new(), "hi", true), "hi");
        assert!(Style::default().is_plain());
    }

    #[test]
    fn disabled_styling_writes_only_text() {
        let style = Style::new().fg(CellColor::Rgb(1, 2, 3)).attr(Attr::BOLD);
        assert_eq!(painted(style, "hi", false), "hi");
    }

    #[test]
    fn full_style_sequence() {
        let style = Style::new()
            .fg(CellColor::Rgb(0, 0, 0))
            .bg(CellColor::Rgb(255, 255, 255))
            .attr(Attr::BOLD);
        assert_eq!(
            painted(style, "400", true),
            "\x1b[1m\x1b[38;2;0;0;0m\x1b[48;2;255;255;255m400\x1b[0m"
        );
    }

    #[test]
    fn background_only() {
        let style = Style::new().bg(CellColor::Rgb(59, 130, 246));
        assert_eq!(painted(style, "  ", true), "\x1b[48;2;59;130;246m  \x1b[0m");
    }
}
