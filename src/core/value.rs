//! Ordering and stringification of extracted field values.
//!
//! Field values are plain `serde_json::Value`s. An absent field and a JSON
//! `null` are the same thing as far as the table is concerned: both are
//! represented as `None` once extracted.

use serde_json::{Number, Value};
use std::cmp::Ordering;

fn kind_rank(value: &Value) -> u8 {
    match value {
        Value::Null => 0,
        Value::Bool(_) => 1,
        Value::Number(_) => 2,
        Value::String(_) => 3,
        Value::Array(_) => 4,
        Value::Object(_) => 5,
    }
}

fn compare_numbers(a: &Number, b: &Number) -> Ordering {
    if let (Some(x), Some(y)) = (a.as_i64(), b.as_i64()) {
        return x.cmp(&y);
    }
    if let (Some(x), Some(y)) = (a.as_u64(), b.as_u64()) {
        return x.cmp(&y);
    }
    let x = a.as_f64().unwrap_or(f64::NAN);
    let y = b.as_f64().unwrap_or(f64::NAN);
    x.partial_cmp(&y).unwrap_or(Ordering::Equal)
}

/// Compare two present values.
///
/// Values of the same kind compare naturally: `false < true`, numbers
/// numerically, strings by code point. Arrays and objects compare by their
/// JSON text. Values of different kinds order by kind:
/// bool < number < string < array < object.
///
/// # Example
///
/// ```rust
/// use datatable::core::compare_present;
/// use serde_json::json;
/// use std::cmp::Ordering;
///
/// assert_eq!(compare_present(&json!(100), &json!(200)), Ordering::Less);
/// assert_eq!(compare_present(&json!("b"), &json!("a")), Ordering::Greater);
/// assert_eq!(compare_present(&json!(1.5), &json!(1.5)), Ordering::Equal);
/// ```
pub fn compare_present(a: &Value, b: &Value) -> Ordering {
    match (a, b) {
        (Value::Bool(x), Value::Bool(y)) => x.cmp(y),
        (Value::Number(x), Value::Number(y)) => compare_numbers(x, y),
        (Value::String(x), Value::String(y)) => x.cmp(y),
        (Value::Array(_), Value::Array(_)) | (Value::Object(_), Value::Object(_)) => {
            a.to_string().cmp(&b.to_string())
        }
        _ => kind_rank(a).cmp(&kind_rank(b)),
    }
}

/// Whether a value counts as "filled in" for display purposes.
///
/// `null`, `false`, zero and the empty string are falsy; everything else,
/// including empty arrays and objects, is truthy.
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

fn format_number(n: &Number) -> String {
    if n.is_f64() {
        if let Some(f) = n.as_f64() {
            // Integral floats print without a trailing ".0"
            if f.is_finite() && f.fract() == 0.0 && f.abs() < 1e15 {
                return format!("{}", f as i64);
            }
        }
    }
    n.to_string()
}

fn stringify(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        Value::Number(n) => format_number(n),
        Value::Array(items) => items.iter().map(stringify).collect::<Vec<_>>().join(","),
        other => other.to_string(),
    }
}

/// Text shown for a field value when the column has no custom renderer.
///
/// Absent and falsy values render as the empty string.
///
/// # Example
///
/// ```rust
/// use datatable::core::display_text;
/// use serde_json::json;
///
/// assert_eq!(display_text(Some(&json!("Item 1"))), "Item 1");
/// assert_eq!(display_text(Some(&json!(300))), "300");
/// assert_eq!(display_text(Some(&json!(null))), "");
/// assert_eq!(display_text(None), "");
/// ```
pub fn display_text(value: Option<&Value>) -> String {
    match value {
        Some(v) if is_truthy(v) => stringify(v),
        _ => String::new(),
    }
}
