//! Text emitters for the CSS and Tailwind `@theme` blocks.
//!
//! Both blocks share one layout: an opener, one commented group per entry
//! separated by a blank line, two-space indented declarations, and a closing
//! brace with no trailing newline.
//!
//! ```text
//! :root {
//!   /* primary colors */
//!   --primary-25: #ebf3fe;
//!   …
//!   --primary-950: #183462;
//!
//!   /* danger colors */
//!   …
//! }
//! ```

use std::fmt::Write;

use crate::palette::PaletteEntry;
use crate::shade::ShadeKey;

/// Which block is being written.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockStyle {
    /// Plain CSS custom properties under `:root`.
    Css,
    /// Tailwind v4 theme variables under `@theme`.
    Theme,
}

impl BlockStyle {
    /// The selector or at-rule opening the block.
    #[must_use]
    pub const fn opener(self) -> &'static str {
        match self {
            Self::Css => ":root",
            Self::Theme => "@theme",
        }
    }

    /// Prefix placed before `{name}-{shade}`.
    #[must_use]
    pub const fn prefix(self) -> &'static str {
        match self {
            Self::Css => "--",
            Self::Theme => "--color-",
        }
    }

    /// One declaration, without indentation.
    #[must_use]
    pub fn declaration(self, id: &str, shade: ShadeKey, hex: &str) -> String {
        format!("{}{id}-{shade}: {hex};", self.prefix())
    }
}

/// Render every entry into a single block.
#[must_use]
pub fn render_block(style: BlockStyle, entries: &[PaletteEntry]) -> String {
    let mut out = String::with_capacity(64 + entries.len() * 480);
    out.push_str(style.opener());
    out.push_str(" {\n");

    for (i, entry) in entries.iter().enumerate() {
        if i > 0 {
            out.push('\n');
        }
        // Writing into a String cannot fail.
        let _ = writeln!(out, "  /* {} colors */", entry.id);
        for swatch in &entry.swatches {
            let _ = writeln!(out, "  {}", style.declaration(&entry.id, swatch.shade, &swatch.hex));
        }
    }

    out.push('}');
    out
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::palette::{ColorInput, Palette};

    fn palette(inputs: &[(&str, &str)]) -> Palette {
        let inputs: Vec<ColorInput> = inputs.iter().map(|(n, h)| ColorInput::new(*n, *h)).collect();
        Palette::generate(&inputs).unwrap()
    }

    #[test]
    fn css_block_for_white() {
        let p = palette(&[("White", "#ffffff")]);
        assert_eq!(
            p.css(),
            ":root {
  /* white colors */
  --white-25: #ffffff;
  --white-50: #ffffff;
  --white-100: #ffffff;
  --white-200: #ffffff;
  --white-300: #ffffff;
  --white-400: #ffffff;
  --white-500: #e6e6e6;
  --white-600: #cccccc;
  --white-700: #b3b3b3;
  --white-800: #999999;
  --white-900: #808080;
  --white-950: #666666;
}"
        );
    }

    #[test]
    fn theme_block_for_black() {
        let p = palette(&[("Ink", "#000000")]);
        assert_eq!(
            p.theme(),
            "@theme {
  /* ink colors */
  --color-ink-25: #e6e6e6;
  --color-ink-50: #cccccc;
  --color-ink-100: #999999;
  --color-ink-200: #666666;
  --color-ink-300: #333333;
  --color-ink-400: #000000;
  --color-ink-500: #000000;
  --color-ink-600: #000000;
  --color-ink-700: #000000;
  --color-ink-800: #000000;
  --color-ink-900: #000000;
  --color-ink-950: #000000;
}"
        );
    }

    #[test]
    fn groups_are_separated_by_blank_line() {
        let p = palette(&[("A", "#ffffff"), ("B", "#000000")]);
        let css = p.css();
        assert!(css.contains("  --a-950: #666666;\n\n  /* b colors */\n  --b-25: #e6e6e6;"));
        assert!(css.ends_with("  --b-950: #000000;\n}"));
        assert_eq!(css.matches("/* ").count(), 2);
    }

    #[test]
    fn theme_and_css_have_parallel_lines() {
        let p = palette(&[("Primary", "#3b82f6"), ("Danger", "#ef4444")]);
        let css: Vec<String> = p.css().lines().skip(1).map(str::to_owned).collect();
        let theme: Vec<String> = p
            .theme()
            .lines()
            .skip(1)
            .map(|l| l.replacen("--color-", "--", 1))
            .collect();
        assert_eq!(css, theme);
    }

    #[test]
    fn declaration_format() {
        assert_eq!(
            BlockStyle::Theme.declaration("primary", ShadeKey::S50, "#ebf3fe"),
            "--color-primary-50: #ebf3fe;"
        );
        assert_eq!(
            BlockStyle::Css.declaration("primary", ShadeKey::S50, "#ebf3fe"),
            "--primary-50: #ebf3fe;"
        );
    }

    #[test]
    fn every_shade_line_is_present() {
        let p = palette(&[("Primary", "#3B82F6")]);
        let css = p.css();
        for key in ShadeKey::ALL {
            assert!(css.contains(&format!("  --primary-{key}: #")), "missing {key}");
        }
        assert!(css.contains("  --primary-400: #3b82f6;\n"));
    }
}
