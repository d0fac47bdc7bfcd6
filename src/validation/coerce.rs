//! Coercion rules shared by the schema validators.
//!
//! Every function takes a raw, loosely-typed value and returns `None` when the
//! value cannot be coerced. Callers decide whether `None` means "use the
//! default" or "report an error".

use serde_json::Value;

use crate::domain::search::SortDirection;

/// Largest page or limit accepted. Store queries bind paging as signed
/// 64-bit integers.
pub const MAX_POSITIVE_INT: u64 = i64::MAX as u64;

/// Coerces a value to an integer in `1..=MAX_POSITIVE_INT`.
///
/// Accepts JSON integers, integral floats (`2.0`) and numeric strings
/// (surrounding whitespace ignored). Fractions, non-numeric strings, zero,
/// negative and out-of-range values yield `None`.
pub fn positive_int(value: Option<&Value>) -> Option<u64> {
    let number = match value? {
        Value::Number(number) => number
            .as_u64()
            .or_else(|| number.as_f64().and_then(integral)),
        Value::String(text) => {
            let text = text.trim();
            text.parse::<u64>()
                .ok()
                .or_else(|| text.parse::<f64>().ok().and_then(integral))
        }
        _ => None,
    };

    number.filter(|n| (1..=MAX_POSITIVE_INT).contains(n))
}

/// Converts a float holding a whole non-negative number.
fn integral(value: f64) -> Option<u64> {
    if value.is_finite() && value.fract() == 0.0 && value >= 0.0 && value <= u64::MAX as f64 {
        Some(value as u64)
    } else {
        None
    }
}

/// Trims a string value; blank strings and non-strings yield `None`.
pub fn trimmed_string(value: Option<&Value>) -> Option<String> {
    match value? {
        Value::String(text) => {
            let text = text.trim();
            (!text.is_empty()).then(|| text.to_string())
        }
        _ => None,
    }
}

/// Keeps a string value as given when it contains a non-whitespace character.
///
/// Numbers are rendered to their string form so numeric fields can be
/// filtered by exact match.
pub fn non_blank_string(value: Option<&Value>) -> Option<String> {
    match value? {
        Value::String(text) if !text.trim().is_empty() => Some(text.clone()),
        Value::Number(number) => Some(number.to_string()),
        _ => None,
    }
}

/// Lower-cases and trims a string and matches it against `asc|desc`.
pub fn sort_direction(value: Option<&Value>) -> Option<SortDirection> {
    match value? {
        Value::String(text) => SortDirection::parse(text),
        _ => None,
    }
}
