// SPDX-License-Identifier: MIT
//
// n-shades — tonal shade palettes for CSS and Tailwind.
//
// This is the binary that wires the two crates together:
//
//   n-palette → validation, shade math, CSS / @theme text, swatch records
//   n-term    → truecolor swatch grid, notices, clipboard strategies
//
// One invocation is one generation. Each run flows through:
//
//   argv / env → Config → Palette::generate → outputs on stdout
//                                           → optional copy → notice on stderr
//
// stdout carries only the requested output so it can be redirected into a
// stylesheet. Notices, logs, and the OSC 52 clipboard request go to stderr.

use std::convert::Infallible;
use std::env;
use std::io::{self, IsTerminal, Write};
use std::process;
use std::str::FromStr;

use clap::{Parser, ValueEnum};
use thiserror::Error;

use n_palette::builtin::{builtin_inputs, builtin_names};
use n_palette::{ColorInput, Palette, PaletteError, ShadeKey};

use n_term::clipboard::{ClipboardChain, ClipboardError};
use n_term::color::CellColor;
use n_term::notify::Notice;
use n_term::swatch::{DEFAULT_COLUMNS, SwatchCell, SwatchGrid, SwatchGroup};

// ─── Command line ───────────────────────────────────────────────────────────

/// Generate 12-step shade palettes from up to four base colors.
#[derive(Debug, Parser)]
#[command(name = "n-shades", version, about)]
struct Cli {
    /// Base color as NAME=#RRGGBB. Repeat for up to four colors.
    #[arg(
        short,
        long = "color",
        value_name = "NAME=#RRGGBB",
        env = "N_SHADES_COLORS",
        value_delimiter = ','
    )]
    colors: Vec<ColorInput>,

    /// Preset color set used when no --color is given.
    #[arg(short, long, default_value = "default")]
    preset: String,

    /// What to print.
    #[arg(short, long, value_enum, default_value_t = Format::All, env = "N_SHADES_FORMAT")]
    format: Format,

    /// Copy `css`, `theme`, or a single declaration such as `primary-400`.
    #[arg(long, value_name = "TARGET")]
    copy: Option<CopyTarget>,

    /// Swatches per row in the preview.
    #[arg(long, default_value_t = DEFAULT_COLUMNS)]
    columns: usize,

    /// Disable ANSI styling (also honors NO_COLOR).
    #[arg(long)]
    no_color: bool,

    /// Print the preset names and exit.
    #[arg(long)]
    list_presets: bool,
}

/// Output selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    /// `:root { … }` custom properties.
    Css,
    /// Tailwind `@theme { … }` variables.
    Theme,
    /// Swatch grid.
    Preview,
    /// Swatch records as JSON.
    Json,
    /// CSS, theme, and preview.
    All,
}

/// What `--copy` puts on the clipboard.
#[derive(Debug, Clone, PartialEq, Eq)]
enum CopyTarget {
    Css,
    Theme,
    /// One `{name}-{shade}` declaration.
    Shade(String),
}

impl FromStr for CopyTarget {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "css" => Self::Css,
            "theme" | "tailwind" => Self::Theme,
            other => Self::Shade(other.to_owned()),
        })
    }
}

// ─── Errors ─────────────────────────────────────────────────────────────────

#[derive(Debug, Error)]
enum AppError {
    #[error(transparent)]
    Palette(#[from] PaletteError),

    #[error("unknown preset {0:?} (see --list-presets)")]
    UnknownPreset(String),

    #[error(transparent)]
    Clipboard(#[from] ClipboardError),

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error("{0}")]
    Io(#[from] io::Error),
}

impl AppError {
    const fn exit_code(&self) -> i32 {
        match self {
            Self::Clipboard(_) => 2,
            _ => 1,
        }
    }
}

// ─── Config ─────────────────────────────────────────────────────────────────

/// Which output streams may carry ANSI styling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Terminals {
    stdout: bool,
    stderr: bool,
}

impl Terminals {
    /// Probe both streams. A non-empty `NO_COLOR` turns styling off for both.
    fn detect() -> Self {
        let allowed = env::var_os("NO_COLOR").is_none_or(|v| v.is_empty());
        Self {
            stdout: allowed && io::stdout().is_terminal(),
            stderr: allowed && io::stderr().is_terminal(),
        }
    }
}

/// Resolved settings for one run.
#[derive(Debug)]
struct Config {
    inputs: Vec<ColorInput>,
    format: Format,
    copy: Option<CopyTarget>,
    columns: usize,
    /// Style the output written to stdout.
    color: bool,
    /// Style the notices written to stderr.
    notice_color: bool,
}

impl Config {
    /// Resolve CLI values against presets and the detected terminals.
    fn resolve(cli: Cli, terminals: Terminals) -> Result<Self, AppError> {
        let inputs = if cli.colors.is_empty() {
            builtin_inputs(&cli.preset).ok_or(AppError::UnknownPreset(cli.preset))?
        } else {
            cli.colors
        };

        Ok(Self {
            inputs,
            format: cli.format,
            copy: cli.copy,
            columns: cli.columns,
            color: terminals.stdout && !cli.no_color,
            notice_color: terminals.stderr && !cli.no_color,
        })
    }
}

// ─── Output ─────────────────────────────────────────────────────────────────

/// Convert palette entries into drawable swatch groups.
fn swatch_groups(palette: &Palette) -> Vec<SwatchGroup> {
    palette
        .entries()
        .iter()
        .map(|entry| SwatchGroup {
            title: entry.id.clone(),
            cells: entry
                .swatches
                .iter()
                .map(|s| SwatchCell {
                    label: s.shade.to_string(),
                    caption: s.hex.clone(),
                    fill: CellColor::from_hex(&s.hex).unwrap_or_default(),
                    ink: CellColor::from_hex(&s.foreground).unwrap_or_default(),
                })
                .collect(),
        })
        .collect()
}

fn write_preview(out: &mut impl Write, palette: &Palette, config: &Config) -> io::Result<()> {
    let grid = SwatchGrid::new(config.columns, config.color);
    let names: Vec<&str> = palette.entries().iter().map(|e| e.id.as_str()).collect();
    let title = format!("n-shades · {} · {} shades", names.join(", "), palette.shade_count());
    grid.banner(
        out,
        &title,
        CellColor::from_hex(palette.tint()).unwrap_or_default(),
        CellColor::from_hex(palette.accent()).unwrap_or_default(),
    )?;
    writeln!(out)?;
    grid.render(out, &swatch_groups(palette))?;
    writeln!(out)?;
    let example = palette.entries()[0].variable(ShadeKey::BASE);
    writeln!(out, "copy a shade with: n-shades --copy {example}")
}

fn write_outputs(out: &mut impl Write, palette: &Palette, config: &Config) -> Result<(), AppError> {
    match config.format {
        Format::Css => writeln!(out, "{}", palette.css())?,
        Format::Theme => writeln!(out, "{}", palette.theme())?,
        Format::Preview => write_preview(out, palette, config)?,
        Format::Json => writeln!(out, "{}", serde_json::to_string_pretty(palette)?)?,
        Format::All => {
            writeln!(out, "{}\n", palette.css())?;
            writeln!(out, "{}\n", palette.theme())?;
            write_preview(out, palette, config)?;
        }
    }
    Ok(())
}

/// Copy the requested target and report the outcome as a notice.
fn copy(
    target: &CopyTarget,
    palette: &Palette,
    clipboard: &mut ClipboardChain,
    notices: &mut impl Write,
    color: bool,
) -> Result<(), AppError> {
    let (text, title, hint) = match target {
        CopyTarget::Css => (
            palette.css(),
            "Copied CSS Properties".to_owned(),
            "Paste them directly into your CSS file.",
        ),
        CopyTarget::Theme => (
            palette.theme(),
            "Copied Tailwind Colors".to_owned(),
            "Paste them in your CSS file to use with Tailwind.",
        ),
        CopyTarget::Shade(variable) => {
            let swatch = palette.find(variable)?;
            (swatch.declaration.clone(), format!("Copied {}", swatch.declaration), "")
        }
    };

    match clipboard.copy(&text) {
        Ok(method) => {
            let body = if hint.is_empty() {
                format!("(via {method})")
            } else {
                format!("{hint} (via {method})")
            };
            Notice::success(title, body).render(notices, color)?;
            Ok(())
        }
        Err(e) => {
            Notice::failure("Copy failed", "").render(notices, color)?;
            Err(e.into())
        }
    }
}

fn run(
    config: &Config,
    out: &mut impl Write,
    notices: &mut impl Write,
    clipboard: &mut ClipboardChain,
) -> Result<(), AppError> {
    let palette = Palette::generate(&config.inputs)?;
    write_outputs(out, &palette, config)?;
    out.flush()?;

    if let Some(target) = &config.copy {
        copy(target, &palette, clipboard, notices, config.notice_color)?;
    }
    Ok(())
}

// ─── Main ───────────────────────────────────────────────────────────────────

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    if cli.list_presets {
        for name in builtin_names() {
            println!("{name}");
        }
        return;
    }

    let config = Config::resolve(cli, Terminals::detect()).unwrap_or_else(|e| {
        eprintln!("n-shades: {e}");
        process::exit(e.exit_code());
    });
    log::debug!("resolved {config:?}");

    let mut clipboard = ClipboardChain::standard();
    if let Err(e) = run(&config, &mut io::stdout().lock(), &mut io::stderr(), &mut clipboard) {
        eprintln!("n-shades: {e}");
        process::exit(e.exit_code());
    }
}

// ─── Tests ──────────────────────────────────────────────────────────────────
