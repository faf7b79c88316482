// SPDX-License-Identifier: MIT
//
// Clipboard capability with ordered fallback strategies.
//
// Copying is the one operation in the pipeline that can fail for reasons
// outside our control: no display server, a sandbox, a headless SSH session.
// Each way of reaching a clipboard is a `Clipboard` strategy. A
// `ClipboardChain` tries them in order and reports which one worked, or
// every reason they all failed. A copy is never silently dropped.
//
//   SystemClipboard  → OS clipboard via arboard (X11/Wayland/macOS/Windows)
//   Osc52Clipboard   → OSC 52 escape, the terminal forwards to its clipboard
//
// On Linux the selection is served by the process that set it, and this
// process exits right after copying. The terminal goes first there whenever
// stderr reaches one; the OS clipboard is held for a short hand-off window
// when it is used.

use std::io::{self, IsTerminal, Write};
#[cfg(target_os = "linux")]
use std::time::{Duration, Instant};

use thiserror::Error;

use crate::ansi;

// ─── Errors ─────────────────────────────────────────────────────────────────

/// Why a copy did not happen.
#[derive(Debug, Error)]
pub enum ClipboardError {
    /// The strategy cannot be used in this environment.
    #[error("clipboard unavailable: {0}")]
    Unavailable(String),

    /// Writing the request failed.
    #[error("clipboard write failed: {0}")]
    Write(#[from] io::Error),

    /// Every strategy in a chain failed; one message per strategy.
    #[error("all clipboard strategies failed: {}", .0.join("; "))]
    AllFailed(Vec<String>),
}

// ─── Clipboard trait ────────────────────────────────────────────────────────

/// One way of putting text on a clipboard.
pub trait Clipboard {
    /// Short name used in logs and success messages.
    fn name(&self) -> &'static str;

    /// Copy `text`.
    ///
    /// # Errors
    ///
    /// Returns a [`ClipboardError`] describing why the copy failed.
    fn copy(&mut self, text: &str) -> Result<(), ClipboardError>;
}

// ─── SystemClipboard ────────────────────────────────────────────────────────

/// The operating system clipboard.
///
/// A fresh handle is opened for every copy. On Linux the copy blocks for up
/// to [`SystemClipboard::HANDOFF`] so a clipboard manager can take ownership
/// of the selection before the process exits.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClipboard;

impl SystemClipboard {
    /// How long a Linux copy keeps serving the selection.
    #[cfg(target_os = "linux")]
    pub const HANDOFF: Duration = Duration::from_millis(500);

    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Clipboard for SystemClipboard {
    fn name(&self) -> &'static str {
        "system clipboard"
    }

    fn copy(&mut self, text: &str) -> Result<(), ClipboardError> {
        let unavailable = |e: arboard::Error| ClipboardError::Unavailable(e.to_string());
        let mut clipboard = arboard::Clipboard::new().map_err(unavailable)?;

        #[cfg(target_os = "linux")]
        {
            use arboard::SetExtLinux;

            clipboard
                .set()
                .wait_until(Instant::now() + Self::HANDOFF)
                .text(text)
                .map_err(unavailable)
        }

        #[cfg(not(target_os = "linux"))]
        {
            clipboard.set_text(text).map_err(unavailable)
        }
    }
}

// ─── Osc52Clipboard ─────────────────────────────────────────────────────────

/// Copy by asking the terminal, via an OSC 52 escape sequence.
///
/// Only meaningful when the writer is an interactive terminal; otherwise the
/// escape would end up in a file or pipe, so the strategy reports itself
/// unavailable instead.
pub struct Osc52Clipboard<W: Write> {
    out: W,
    interactive: bool,
}

impl<W: Write> Osc52Clipboard<W> {
    /// Wrap `out`. `interactive` says whether `out` reaches a terminal.
    pub const fn new(out: W, interactive: bool) -> Self {
        Self { out, interactive }
    }

    /// Consume the strategy and return the writer.
    pub fn into_inner(self) -> W {
        self.out
    }
}

impl Osc52Clipboard<io::Stderr> {
    /// Write through stderr, which stays attached to the terminal when
    /// stdout is piped.
    #[must_use]
    pub fn stderr() -> Self {
        let err = io::stderr();
        let interactive = err.is_terminal();
        Self::new(err, interactive)
    }
}

impl<W: Write> Clipboard for Osc52Clipboard<W> {
    fn name(&self) -> &'static str {
        "terminal (OSC 52)"
    }

    fn copy(&mut self, text: &str) -> Result<(), ClipboardError> {
        if !self.interactive {
            return Err(ClipboardError::Unavailable("not attached to a terminal".to_owned()));
        }
        ansi::clipboard_copy(&mut self.out, text)?;
        self.out.flush()?;
        Ok(())
    }
}

// ─── ClipboardChain ─────────────────────────────────────────────────────────

/// Strategies tried in order until one succeeds.
#[derive(Default)]
pub struct ClipboardChain {
    strategies: Vec<Box<dyn Clipboard>>,
}

impl ClipboardChain {
    /// An empty chain. Copying with no strategies always fails.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The usual chain: the OS clipboard and OSC 52 through stderr.
    ///
    /// On Linux with stderr on a terminal, OSC 52 is tried first. Everywhere
    /// else the OS clipboard leads.
    #[must_use]
    pub fn standard() -> Self {
        let terminal = Osc52Clipboard::stderr();
        let terminal_first = cfg!(target_os = "linux") && terminal.interactive;
        Self::ordered(SystemClipboard::new(), terminal, terminal_first)
    }

    fn ordered(
        system: impl Clipboard + 'static,
        terminal: impl Clipboard + 'static,
        terminal_first: bool,
    ) -> Self {
        if terminal_first {
            Self::new().with(terminal).with(system)
        } else {
            Self::new().with(system).with(terminal)
        }
    }

    /// Append a strategy.
    #[must_use]
    pub fn with(mut self, strategy: impl Clipboard + 'static) -> Self {
        self.strategies.push(Box::new(strategy));
        self
    }

    /// Number of strategies.
    #[must_use]
    pub fn len(&self) -> usize {
        self.strategies.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.strategies.is_empty()
    }

    /// Strategy names in the order they are tried.
    #[must_use]
    pub fn names(&self) -> Vec<&'static str> {
        self.strategies.iter().map(|s| s.name()).collect()
    }

    /// Copy `text` with the first strategy that works.
    ///
    /// Returns the name of the strategy that succeeded.
    ///
    /// # Errors
    ///
    /// [`ClipboardError::AllFailed`] with one message per strategy tried.
    pub fn copy(&mut self, text: &str) -> Result<&'static str, ClipboardError> {
        let mut failures = Vec::with_capacity(self.strategies.len());

        for strategy in &mut self.strategies {
            match strategy.copy(text) {
                Ok(()) => {
                    log::info!("copied {} bytes via {}", text.len(), strategy.name());
                    return Ok(strategy.name());
                }
                Err(e) => {
                    log::warn!("{} failed: {e}", strategy.name());
                    failures.push(format!("{}: {e}", strategy.name()));
                }
            }
        }

        Err(ClipboardError::AllFailed(failures))
    }
}

// ─── Tests ───────────────────────────────────────────────────────────────────
