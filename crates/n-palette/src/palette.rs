//! Palette orchestration: inputs in, shade entries and swatches out.
//!
//! [`Palette::generate`] is the only entry point. It validates every input
//! up front, then builds one [`PaletteEntry`] per input in input order.
//! Nothing is cached; calling it twice with the same input yields equal
//! palettes and byte-identical emitted blocks.

use std::collections::HashSet;
use std::str::FromStr;

use serde::Serialize;

use crate::color::Rgb;
use crate::emit::{self, BlockStyle};
use crate::error::PaletteError;
use crate::name::sanitize_name;
use crate::shade::{ShadeKey, ShadeScale};

/// Maximum number of base colors in one palette.
pub const MAX_INPUTS: usize = 4;

// ---------------------------------------------------------------------------
// ColorInput
// ---------------------------------------------------------------------------

/// A user-supplied base color and its display name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ColorInput {
    pub name: String,
    pub hex: String,
}

impl ColorInput {
    #[must_use]
    pub fn new(name: impl Into<String>, hex: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            hex: hex.into(),
        }
    }
}

impl FromStr for ColorInput {
    type Err = PaletteError;

    /// Parse `NAME=#RRGGBB`. Only the split is checked here; the name and
    /// color are validated by [`Palette::generate`].
    ///
    /// Whitespace around the pair belongs to the list it came from, so both
    /// halves are trimmed. Spaces inside the name are kept.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (name, hex) = s
            .rsplit_once('=')
            .ok_or_else(|| PaletteError::MalformedPair { input: s.to_owned() })?;
        Ok(Self::new(name.trim(), hex.trim()))
    }
}

// ---------------------------------------------------------------------------
// Swatch
// ---------------------------------------------------------------------------

/// Everything a renderer needs to draw one shade.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Swatch {
    pub shade: ShadeKey,
    /// Swatch fill, `#rrggbb`.
    pub hex: String,
    /// Label color on top of the fill, `#000000` or `#ffffff`.
    pub foreground: String,
    /// The single CSS declaration copied when the swatch is activated.
    pub declaration: String,
}

// ---------------------------------------------------------------------------
// PaletteEntry
// ---------------------------------------------------------------------------

/// One named base color and its twelve shades.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PaletteEntry {
    /// Name as the user typed it.
    pub name: String,
    /// Sanitized variable namespace.
    pub id: String,
    #[serde(skip)]
    pub scale: ShadeScale,
    pub swatches: Vec<Swatch>,
}

impl PaletteEntry {
    /// Validate one input and compute its shades.
    ///
    /// # Errors
    ///
    /// [`PaletteError::InvalidColorInput`] or [`PaletteError::InvalidName`].
    pub fn new(input: &ColorInput) -> Result<Self, PaletteError> {
        let base = Rgb::from_hex(&input.hex)?;
        let id = sanitize_name(&input.name)?;
        let scale = ShadeScale::generate(base);

        let swatches = scale
            .iter()
            .map(|(shade, color)| {
                let hex = color.to_hex();
                Swatch {
                    shade,
                    foreground: color.contrast_color().to_hex(),
                    declaration: BlockStyle::Css.declaration(&id, shade, &hex),
                    hex,
                }
            })
            .collect();

        log::debug!("generated {id} from {}", input.hex);

        Ok(Self {
            name: input.name.clone(),
            id,
            scale,
            swatches,
        })
    }

    /// The swatch for `shade`.
    #[must_use]
    pub fn swatch(&self, shade: ShadeKey) -> &Swatch {
        &self.swatches[shade as usize]
    }

    /// The base color as `#rrggbb`.
    #[must_use]
    pub fn base_hex(&self) -> &str {
        &self.swatch(ShadeKey::BASE).hex
    }

    /// Variable stem for `shade`, e.g. `primary-400`.
    #[must_use]
    pub fn variable(&self, shade: ShadeKey) -> String {
        format!("{}-{shade}", self.id)
    }
}

// ---------------------------------------------------------------------------
// Palette
// ---------------------------------------------------------------------------

/// A validated set of 1–[`MAX_INPUTS`] entries.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Palette {
    entries: Vec<PaletteEntry>,
}

impl Palette {
    /// Generate a palette from `inputs`, in order.
    ///
    /// # Errors
    ///
    /// - [`PaletteError::InputCount`] for zero or more than [`MAX_INPUTS`]
    ///   inputs.
    /// - [`PaletteError::InvalidColorInput`] / [`PaletteError::InvalidName`]
    ///   from the first bad input.
    /// - [`PaletteError::DuplicateName`] when two names sanitize alike.
    pub fn generate(inputs: &[ColorInput]) -> Result<Self, PaletteError> {
        if inputs.is_empty() || inputs.len() > MAX_INPUTS {
            return Err(PaletteError::InputCount { count: inputs.len() });
        }

        let mut seen = HashSet::with_capacity(inputs.len());
        let mut entries = Vec::with_capacity(inputs.len());
        for input in inputs {
            let entry = PaletteEntry::new(input)?;
            if !seen.insert(entry.id.clone()) {
                return Err(PaletteError::DuplicateName { name: entry.id });
            }
            entries.push(entry);
        }

        Ok(Self { entries })
    }

    #[must_use]
    pub fn entries(&self) -> &[PaletteEntry] {
        &self.entries
    }

    /// Total swatches across all entries (12 per entry).
    #[must_use]
    pub fn shade_count(&self) -> usize {
        self.entries.iter().map(|e| e.swatches.len()).sum()
    }

    /// The first base color. Used as the application accent.
    #[must_use]
    pub fn accent(&self) -> &str {
        self.first().base_hex()
    }

    /// The first color's lightest shade. Used as a page/background tint.
    #[must_use]
    pub fn tint(&self) -> &str {
        &self.first().swatch(ShadeKey::S25).hex
    }

    fn first(&self) -> &PaletteEntry {
        // generate() rejects empty input.
        &self.entries[0]
    }

    /// The `:root { … }` custom-property block.
    #[must_use]
    pub fn css(&self) -> String {
        emit::render_block(BlockStyle::Css, &self.entries)
    }

    /// The `@theme { … }` block with `--color-` prefixed variables.
    #[must_use]
    pub fn theme(&self) -> String {
        emit::render_block(BlockStyle::Theme, &self.entries)
    }

    /// Find a swatch by its variable stem, e.g. `primary-400`.
    ///
    /// # Errors
    ///
    /// Returns [`PaletteError::UnknownShade`] if no entry/shade matches.
    pub fn find(&self, variable: &str) -> Result<&Swatch, PaletteError> {
        let unknown = || PaletteError::UnknownShade { input: variable.to_owned() };
        let variable = variable.strip_prefix("--").unwrap_or(variable);
        let (id, shade) = variable.rsplit_once('-').ok_or_else(unknown)?;
        let shade: ShadeKey = shade.parse().map_err(|_| unknown())?;
        self.entries
            .iter()
            .find(|e| e.id == id)
            .map(|e| e.swatch(shade))
            .ok_or_else(unknown)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
