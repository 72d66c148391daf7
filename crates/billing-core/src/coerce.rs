//! # Lenient Coercion
//!
//! Turns loosely typed JSON values into the numbers and strings the document
//! holds, following the browser's `Number(x)` / `String(x)` rules.
//!
//! ## Why Lenient?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Stored and imported documents were written by a browser form.          │
//! │                                                                         │
//! │    "qty": 2          → 2                                                │
//! │    "qty": "2"        → 2        (text input that was never converted)   │
//! │    "qty": ""         → 0                                                │
//! │    "qty": null       → 0        (NaN was saved as null)                 │
//! │    "qty": "abc"      → NaN      (propagates through the totals)         │
//! │    "barcode": 1078068 → "1078068"                                       │
//! │                                                                         │
//! │  A strict deserializer would throw the whole document away for one     │
//! │  odd cell. These helpers keep the document and let the engine's        │
//! │  NaN handling decide what shows on screen.                              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Deserializer};
use serde_json::Value;

use crate::format::format_number;

/// Coerces a JSON value to a number the way `Number(x)` does.
///
/// ## Rules
/// - number → itself
/// - `null` → 0
/// - `true` / `false` → 1 / 0
/// - string → see [`coerce_str`]
/// - `[]` → 0
/// - one-element array → its element as text, so `[5]` and `["5"]` are 5
///   while `[true]` is NaN
/// - any other array or object → NaN
///
/// ## Example
/// ```rust
/// use billing_core::coerce_number;
/// use serde_json::json;
///
/// assert_eq!(coerce_number(&json!(12.5)), 12.5);
/// assert_eq!(coerce_number(&json!(" 40 ")), 40.0);
/// assert_eq!(coerce_number(&json!(null)), 0.0);
/// assert!(coerce_number(&json!("abc")).is_nan());
/// ```
pub fn coerce_number(value: &Value) -> f64 {
    match value {
        Value::Null => 0.0,
        Value::Bool(flag) => {
            if *flag {
                1.0
            } else {
                0.0
            }
        }
        Value::Number(number) => number.as_f64().unwrap_or(f64::NAN),
        Value::String(text) => coerce_str(text),
        Value::Array(values) => match values.as_slice() {
            [] => 0.0,
            [single] => coerce_single_element(single),
            _ => f64::NAN,
        },
        Value::Object(_) => f64::NAN,
    }
}

/// `Number([x])` reads `x` back from its text form.
fn coerce_single_element(value: &Value) -> f64 {
    match value {
        Value::Null => 0.0,
        Value::Bool(_) | Value::Object(_) => f64::NAN,
        Value::Number(_) | Value::String(_) | Value::Array(_) => coerce_number(value),
    }
}

/// Coerces text to a number the way `Number("...")` does.
///
/// Surrounding whitespace (including a byte order mark) is ignored and
/// empty text is zero. Decimal literals, `Infinity` and `0x` / `0o` / `0b` integers are accepted;
/// anything else is NaN. Note that Rust's own float parser accepts
/// `inf` and `nan`, which the browser rejects, so those are filtered out.
pub fn coerce_str(text: &str) -> f64 {
    let trimmed = text.trim_matches(|c: char| c.is_whitespace() || c == '\u{feff}');
    if trimmed.is_empty() {
        return 0.0;
    }

    match trimmed {
        "Infinity" | "+Infinity" => return f64::INFINITY,
        "-Infinity" => return f64::NEG_INFINITY,
        _ => {}
    }

    if let Some(value) = parse_radix_literal(trimmed) {
        return value;
    }

    let is_decimal_literal = trimmed
        .chars()
        .all(|c| c.is_ascii_digit() || matches!(c, '+' | '-' | '.' | 'e' | 'E'));

    if is_decimal_literal {
        trimmed.parse::<f64>().unwrap_or(f64::NAN)
    } else {
        f64::NAN
    }
}

/// Parses `0x1A`, `0o17`, `0b101` style literals. Returns `None` when the
/// text has no radix prefix.
fn parse_radix_literal(text: &str) -> Option<f64> {
    let radix = match text.get(..2) {
        Some("0x") | Some("0X") => 16,
        Some("0o") | Some("0O") => 8,
        Some("0b") | Some("0B") => 2,
        _ => return None,
    };

    let digits = &text[2..];
    if digits.is_empty() {
        return Some(f64::NAN);
    }

    let value = digits.chars().try_fold(0.0_f64, |acc, c| {
        c.to_digit(radix)
            .map(|digit| acc * f64::from(radix) + f64::from(digit))
    });

    Some(value.unwrap_or(f64::NAN))
}

/// Coerces a JSON value to display text the way `String(x)` does.
///
/// `null` becomes empty text rather than `"null"` so a blank cell stays
/// blank after a round trip.
pub fn coerce_text(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(text) => text.clone(),
        Value::Bool(flag) => flag.to_string(),
        Value::Number(number) => number
            .as_f64()
            .map(format_number)
            .unwrap_or_else(|| number.to_string()),
        other => other.to_string(),
    }
}

// =============================================================================
// Serde Helpers
// =============================================================================

/// `deserialize_with` helper for numeric document fields.
pub fn lenient_number<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(coerce_number(&value))
}

/// `deserialize_with` helper for text document fields.
pub fn lenient_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(coerce_text(&value))
}

/// Default for a numeric field that is absent from the document.
///
/// An absent property reads as `undefined`, and arithmetic on it is NaN.
pub fn missing_number() -> f64 {
    f64::NAN
}

// =============================================================================
// Unit Tests
// =============================================================================
