// SPDX-License-Identifier: MIT
//
// n-term — Terminal presentation layer for n-shades.
//
// Everything the palette engine leaves to its consumer: painting swatches
// in truecolor, one-line notices, and getting text onto a clipboard. This
// crate knows nothing about shades or palettes; it paints hex colors and
// copies strings.
//
// Like the rest of the workspace it talks to the terminal through plain
// ANSI escape sequences rather than a TUI framework.

pub mod ansi;
pub mod clipboard;
pub mod color;
pub mod notify;
pub mod style;
pub mod swatch;
