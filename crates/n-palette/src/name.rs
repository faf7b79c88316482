//! Display names to CSS identifier fragments.

use std::sync::LazyLock;

use regex::Regex;

use crate::error::PaletteError;

static DISALLOWED: LazyLock<Regex> =
    LazyLock::new(|| Regex::new("[^a-z0-9-]").expect("name pattern compiles"));

/// Reduce a display name to `[a-z0-9-]` for use in variable names.
///
/// The name is lowercased and every remaining character outside the set is
/// replaced with `-`, one dash per character. Leading and trailing
/// whitespace is not trimmed; `" Primary"` becomes `"-primary"`.
///
/// # Errors
///
/// Returns [`PaletteError::InvalidName`] if the name is blank or if nothing
/// but dashes is left after sanitizing.
pub fn sanitize_name(name: &str) -> Result<String, PaletteError> {
    let invalid = || PaletteError::InvalidName { input: name.to_owned() };

    if name.trim().is_empty() {
        return Err(invalid());
    }

    let lowered = name.to_lowercase();
    let sanitized = DISALLOWED.replace_all(&lowered, "-").into_owned();

    if sanitized.bytes().any(|b| b.is_ascii_alphanumeric()) {
        Ok(sanitized)
    } else {
        Err(invalid())
    }
}
