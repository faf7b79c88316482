// SPDX-License-Identifier: MIT
//
// Swatch grid rendering.
//
// Each swatch is a two-line block painted in its own color with a label and
// caption drawn in a contrasting ink:
//
//   ┌──────────┐ ┌──────────┐ ┌──────────┐
//   │ 25       │ │ 50       │ │ 100      │   ← label
//   │ #ebf3fe  │ │ #d8e6fd  │ │ #b1cdfb  │   ← caption
//   └──────────┘ └──────────┘ └──────────┘
//
// (Borders shown for illustration only; swatches are solid fills.)
//
// Every cell in a render shares one width so columns line up across groups.
// With styling disabled the same layout is printed as plain text.

use std::io::{self, Write};

use crate::color::CellColor;
use crate::style::{Attr, Style};

/// Default number of swatches per row.
pub const DEFAULT_COLUMNS: usize = 3;

/// One painted block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SwatchCell {
    /// First line, e.g. the shade key.
    pub label: String,
    /// Second line, e.g. the hex value.
    pub caption: String,
    /// Block color.
    pub fill: CellColor,
    /// Text color on top of `fill`.
    pub ink: CellColor,
}

/// A titled run of cells.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SwatchGroup {
    pub title: String,
    pub cells: Vec<SwatchCell>,
}

/// Lays out groups of swatches in fixed-width columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SwatchGrid {
    columns: usize,
    color: bool,
}

impl SwatchGrid {
    /// `columns` is clamped to at least 1.
    #[must_use]
    pub fn new(columns: usize, color: bool) -> Self {
        Self {
            columns: columns.max(1),
            color,
        }
    }

    #[must_use]
    pub const fn columns(&self) -> usize {
        self.columns
    }

    /// Write a one-line banner filled with `fill`.
    ///
    /// # Errors
    ///
    /// Propagates writer errors.
    pub fn banner(
        &self,
        w: &mut impl Write,
        text: &str,
        fill: CellColor,
        ink: CellColor,
    ) -> io::Result<()> {
        let style = Style::new().fg(ink).bg(fill).attr(Attr::BOLD);
        style.paint(w, &format!(" {text} "), self.color)?;
        w.write_all(b"\n")
    }

    /// Render every group, separated by blank lines.
    ///
    /// # Errors
    ///
    /// Propagates writer errors.
    pub fn render(&self, w: &mut impl Write, groups: &[SwatchGroup]) -> io::Result<()> {
        let inner = groups
            .iter()
            .flat_map(|g| &g.cells)
            .map(|c| c.label.chars().count().max(c.caption.chars().count()))
            .max()
            .unwrap_or(0);

        for (i, group) in groups.iter().enumerate() {
            if i > 0 {
                w.write_all(b"\n")?;
            }
            Style::new().attr(Attr::BOLD).paint(w, &group.title, self.color)?;
            w.write_all(b"\n")?;

            for row in group.cells.chunks(self.columns) {
                self.render_line(w, row, inner, |c| &c.label)?;
                self.render_line(w, row, inner, |c| &c.caption)?;
            }
        }
        Ok(())
    }

    fn render_line(
        &self,
        w: &mut impl Write,
        row: &[SwatchCell],
        inner: usize,
        text: impl Fn(&SwatchCell) -> &str,
    ) -> io::Result<()> {
        for (i, cell) in row.iter().enumerate() {
            if i > 0 {
                w.write_all(b" ")?;
            }
            let style = Style::new().fg(cell.ink).bg(cell.fill);
            style.paint(w, &format!(" {:<inner$} ", text(cell)), self.color)?;
        }
        w.write_all(b"\n")
    }
}

// ─── Tests ───────────────────────────────────────────────────────────────────
