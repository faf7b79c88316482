// SPDX-License-Identifier: MIT
//
// Transient one-line notices for copy results.

use std::io::{self, Write};

use crate::color::CellColor;
use crate::style::{Attr, Style};

/// Outcome a notice reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Failure,
}

impl NoticeKind {
    const fn icon(self) -> &'static str {
        match self {
            Self::Success => "✔",
            Self::Failure => "✘",
        }
    }

    /// Pale green or pale red strip with dark ink.
    const fn style(self) -> Style {
        let (fill, ink) = match self {
            Self::Success => (CellColor::Rgb(0xe1, 0xfc, 0xe9), CellColor::Rgb(0x16, 0x65, 0x34)),
            Self::Failure => (CellColor::Rgb(0xfe, 0xe2, 0xe2), CellColor::Rgb(0x99, 0x1b, 0x1b)),
        };
        Style::new().fg(ink).bg(fill)
    }
}

/// A title plus a short hint, shown once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub title: String,
    pub body: String,
}

impl Notice {
    #[must_use]
    pub fn success(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Success,
            title: title.into(),
            body: body.into(),
        }
    }

    #[must_use]
    pub fn failure(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Failure,
            title: title.into(),
            body: body.into(),
        }
    }

    /// Write the notice as one line.
    ///
    /// # Errors
    ///
    /// Propagates writer errors.
    pub fn render(&self, w: &mut impl Write, color: bool) -> io::Result<()> {
        let style = self.kind.style();
        let head = format!(" {} {} ", self.kind.icon(), self.title);
        style.attr(Attr::BOLD).paint(w, &head, color)?;
        if !self.body.is_empty() {
            style.paint(w, &format!("{} ", self.body), color)?;
        }
        w.write_all(b"\n")?;
        w.flush()
    }
}

// ─── Tests ───────────────────────────────────────────────────────────────────
