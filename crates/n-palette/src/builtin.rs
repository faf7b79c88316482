//! Named preset inputs: ready-to-use base color sets.
//!
//! Each preset is a full set of four named colors, used when the caller
//! supplies none of its own.

use crate::palette::ColorInput;

/// Look up a preset by name.
///
/// Returns `None` if the name is not recognized.
#[must_use]
pub fn builtin_inputs(name: &str) -> Option<Vec<ColorInput>> {
    let pairs: &[(&str, &str)] = match name {
        "default" | "brand" => &[
            ("Primary", "#3b82f6"),
            ("Secondary", "#8b5cf6"),
            ("Success", "#22c55e"),
            ("Danger", "#ef4444"),
        ],
        "neutral" => &[
            ("Gray", "#6b7280"),
            ("Slate", "#64748b"),
            ("Stone", "#78716c"),
            ("Zinc", "#71717a"),
        ],
        "warm" => &[
            ("Orange", "#f97316"),
            ("Amber", "#f59e0b"),
            ("Rose", "#f43f5e"),
            ("Brown", "#92400e"),
        ],
        "cool" => &[
            ("Teal", "#14b8a6"),
            ("Cyan", "#06b6d4"),
            ("Sky", "#0ea5e9"),
            ("Indigo", "#6366f1"),
        ],
        _ => return None,
    };
    Some(pairs.iter().map(|&(n, h)| ColorInput::new(n, h)).collect())
}

/// List all preset names.
#[must_use]
pub const fn builtin_names() -> &'static [&'static str] {
    &["default", "brand", "neutral", "warm", "cool"]
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
