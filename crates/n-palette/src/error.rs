//! Error type for palette generation.
//!
//! Every failure happens while validating input. Once a base color parses
//! and its name sanitizes, the rest of the pipeline is total.

use thiserror::Error;

/// Errors produced while validating palette input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PaletteError {
    /// The color is not a `#RRGGBB` hex string.
    #[error("invalid color {input:?}: expected #RRGGBB")]
    InvalidColorInput { input: String },

    /// The name is blank or has no usable characters after sanitizing.
    #[error("invalid color name {input:?}: needs at least one letter or digit")]
    InvalidName { input: String },

    /// Two inputs sanitize to the same variable namespace.
    #[error("duplicate color name {name:?}")]
    DuplicateName { name: String },

    /// Too few or too many inputs.
    #[error("expected 1 to {max} colors, got {count}", max = crate::palette::MAX_INPUTS)]
    InputCount { count: usize },

    /// A `NAME=#RRGGBB` pair without the `=` separator.
    #[error("malformed color pair {input:?}: expected NAME=#RRGGBB")]
    MalformedPair { input: String },

    /// A shade key or `{name}-{shade}` variable that does not exist.
    #[error("unknown shade {input:?}")]
    UnknownShade { input: String },
}
