// SPDX-License-Identifier: MIT
//
// ANSI escape sequence generation.
//
// Pure functions that write escape sequences to any `impl Write`. No state,
// no decisions about when to emit; that's the caller's job. This module
// just knows the byte-level encoding of every terminal command we need:
// truecolor SGR for swatches, attributes for headings, and OSC 52 for
// handing text to the terminal's clipboard.
//
// All functions return `io::Result` propagated from the underlying writer.

use std::io::{self, Write};

use base64::Engine;
use base64::engine::general_purpose::STANDARD;

use crate::color::CellColor;
use crate::style::Attr;

/// Reset all SGR attributes to terminal defaults (SGR 0).
#[inline]
pub fn reset(w: &mut impl Write) -> io::Result<()> {
    w.write_all(b"\x1b[0m")
}

// ─── Foreground Color ────────────────────────────────────────────────────────

/// Set the foreground (text) color using 24-bit `TrueColor`.
pub fn fg(w: &mut impl Write, color: CellColor) -> io::Result<()> {
    match color {
        CellColor::Default => w.write_all(b"\x1b[39m"),
        CellColor::Rgb(r, g, b) => write!(w, "\x1b[38;2;{r};{g};{b}m"),
    }
}

// ─── Background Color ────────────────────────────────────────────────────────

/// Set the background color.
///
/// Same encoding strategy as [`fg`] but with BG-specific SGR codes
/// (49, 48;2;R;G;B).
pub fn bg(w: &mut impl Write, color: CellColor) -> io::Result<()> {
    match color {
        CellColor::Default => w.write_all(b"\x1b[49m"),
        CellColor::Rgb(r, g, b) => write!(w, "\x1b[48;2;{r};{g};{b}m"),
    }
}

// ─── Text Attributes ─────────────────────────────────────────────────────────

/// Emit SGR codes for text attributes as a single CSI sequence.
///
/// Multiple attributes are semicolon-separated: `\x1b[1;4m` for
/// bold + underline. Does nothing if no attributes are set.
pub fn attrs(w: &mut impl Write, attr: Attr) -> io::Result<()> {
    if attr.is_empty() {
        return Ok(());
    }

    let codes: Vec<&str> = [
        (Attr::BOLD, "1"),
        (Attr::DIM, "2"),
        (Attr::ITALIC, "3"),
        (Attr::UNDERLINE, "4"),
        (Attr::INVERSE, "7"),
    ]
    .into_iter()
    .filter(|(flag, _)| attr.contains(*flag))
    .map(|(_, code)| code)
    .collect();

    write!(w, "\x1b[{}m", codes.join(";"))
}

// ─── Clipboard ──────────────────────────────────────────────────────────────

/// Ask the terminal to place `text` on the system clipboard (OSC 52).
///
/// Encoded as `ESC ] 52 ; c ; <base64> BEL`. Supported by most modern
/// terminals (Kitty, `WezTerm`, iTerm2, foot, Alacritty, tmux with
/// `set-clipboard on`). The terminal gives no acknowledgement, so a
/// successful write only means the request was sent.
pub fn clipboard_copy(w: &mut impl Write, text: &str) -> io::Result<()> {
    write!(w, "\x1b]52;c;{}\x07", STANDARD.encode(text))
}

// ─── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn emitted(f: impl FnOnce(&mut Vec<u8>) -> io::Result<()>) -> String {
        let mut out = Vec::new();
        f(&mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn truecolor_fg_and_bg() {
        assert_eq!(emitted(|w| fg(w, CellColor::Rgb(1, 2, 3))), "\x1b[38;2;1;2;3m");
        assert_eq!(emitted(|w| bg(w, CellColor::Rgb(4, 5, 6))), "\x1b[48;2;4;5;6m");
    }

    #[test]
    fn default_colors() {
        assert_eq!(emitted(|w| fg(w, CellColor::Default)), "\x1b[39m");
        assert_eq!(emitted(|w| bg(w, CellColor::Default)), "\x1b[49m");
    }

    #[test]
    fn attrs_joined() {
        assert_eq!(emitted(|w| attrs(w, Attr::BOLD | Attr::UNDERLINE)), "\x1b[1;4m");
        assert_eq!(emitted(|w| attrs(w, Attr::DIM)), "\x1b[2m");
    }

    #[test]
    fn attrs_empty_writes_nothing() {
        assert_eq!(emitted(|w| attrs(w, Attr::empty())), "");
    }

    #[test]
    fn osc52_encodes_base64() {
        assert_eq!(
            emitted(|w| clipboard_copy(w, "--primary-400: #3b82f6;")),
            "\x1b]52;c;LS1wcmltYXJ5LTQwMDogIzNiODJmNjs=\x07"
        );
    }
}
