// src/escape.rs

use serde::{Deserialize, Serialize};

/// The SQL keyword emitted for absent or placeholder cells.
pub const NULL: &str = "NULL";

/// How a cell is rendered into a VALUES clause.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, Clone, Copy, Default)]
#[serde(rename_all = "lowercase")]
pub enum EscapeMode {
    #[default]
    Text,
    Numeric,
}

/// Escape a raw CSV cell for direct interpolation into a VALUES clause.
///
/// - absent, blank, or `N/A` (any casing) → `NULL`
/// - `Numeric` → only the ASCII digits and periods, unquoted
/// - `Text` → trimmed, single quotes doubled, wrapped in single quotes
pub fn escape_sql(raw: Option<&str>, mode: EscapeMode) -> String {
    let value = match raw.map(str::trim) {
        Some(v) if !is_placeholder(v) => v,
        _ => return NULL.to_string(),
    };

    match mode {
        EscapeMode::Numeric => escape_numeric(value),
        EscapeMode::Text => escape_text(value),
    }
}

fn is_placeholder(trimmed: &str) -> bool {
    trimmed.is_empty() || trimmed.eq_ignore_ascii_case("N/A")
}

/// Keep digits (any script) and periods. Does not check that the result is a
/// well-formed number.
pub fn escape_numeric(value: &str) -> String {
    let digits: String = value
        .chars()
        .filter(|c| c.is_numeric() || *c == '.')
        .collect();
    if digits.is_empty() {
        NULL.to_string()
    } else {
        digits
    }
}

/// Quote a text literal, doubling embedded single quotes.
pub fn escape_text(value: &str) -> String {
    format!("'{}'", value.replace('\'', "''"))
}

/// Inverse of [`escape_text`]. Returns `None` for anything that is not a quoted literal.
#[cfg(test)]
pub(crate) fn unescape_text(literal: &str) -> Option<String> {
    let inner = literal.strip_prefix('\'')?.strip_suffix('\'')?;
    Some(inner.replace("''", "'"))
}
