//! # n-palette — Tonal Shade Palette Engine
//!
//! Turns up to four named base colors into twelve-step shade scales and
//! emits them as CSS custom properties, Tailwind `@theme` variables, and
//! preview swatches with legible label colors.
//!
//! # Architecture
//!
//! ```text
//! (name, #RRGGBB) × 1..=4
//!     │
//!     ▼
//! color.rs:    parse hex → Rgb (reject anything but #RRGGBB)
//! name.rs:     sanitize name → [a-z0-9-] namespace
//!     │
//!     ▼
//! shade.rs:    12 fixed factors → ShadeScale (400 = base)
//!     │
//!     ▼
//! contrast.rs: WCAG luminance → black/white label per shade
//!     │
//!     ▼
//! palette.rs:  PaletteEntry + Swatch records, in input order
//!     │
//!     ▼
//! emit.rs:     :root { … } and @theme { … } text blocks
//! ```
//!
//! Everything is pure and synchronous. The only failures are input
//! validation errors ([`PaletteError`]); once input validates, every step is
//! total.
//!
//! ```
//! use n_palette::{ColorInput, Palette};
//!
//! let palette = Palette::generate(&[ColorInput::new("Primary", "#3B82F6")]).unwrap();
//! assert!(palette.css().contains("--primary-400: #3b82f6;"));
//! assert!(palette.theme().contains("--color-primary-400: #3b82f6;"));
//! ```

// Channel math uses r, g, b, c, t.
#![allow(clippy::many_single_char_names)]
// Variable names like lum/lums and r_lin/g_lin are inherently similar.
#![allow(clippy::similar_names)]

pub mod builtin;
pub mod color;
pub mod contrast;
pub mod emit;
pub mod error;
pub mod name;
pub mod palette;
pub mod shade;

pub use color::Rgb;
pub use error::PaletteError;
pub use palette::{ColorInput, Palette, PaletteEntry, Swatch};
pub use shade::{ShadeKey, ShadeScale};
