//! Value filter applied to merged parameters.

use super::ParamValue;

/// Rendered values that callers use to mean "no value".
pub const FILLER_TOKENS: [&str; 5] = ["", "''", "\"\"", "undefined", "null"];

/// Whether a merged entry belongs in the canonical query.
///
/// Absent and falsy values are dropped, and so is any value whose rendered
/// form is a filler token (compared case-sensitively).
pub fn is_retained(value: Option<&ParamValue>) -> bool {
    match value {
        None => false,
        Some(v) if v.is_falsy() => false,
        Some(v) => !FILLER_TOKENS.contains(&v.render().as_str()),
    }
}
