//! Stringification of token values
//!
//! Token documents are JSON, so a leaf value may be any JSON value. Emitters and the reference
//! resolver need text; this module defines the single conversion they share:
//!
//! - strings are used as-is
//! - numbers use their shortest form (`16`, `1.5`), integral floats drop the fraction
//! - booleans and null use their JSON spelling
//! - lists join their stringified elements with `,` (null elements become empty)
//! - objects are rendered as compact JSON

use serde_json::{Number, Value};
use std::borrow::Cow;

/// Text form of a token value
pub fn display_text(value: &Value) -> Cow<'_, str> {
    match value {
        Value::String(text) => Cow::Borrowed(text.as_str()),
        Value::Number(number) => Cow::Owned(number_text(number)),
        Value::Bool(flag) => Cow::Owned(flag.to_string()),
        Value::Null => Cow::Borrowed("null"),
        Value::Array(items) => Cow::Owned(
            items
                .iter()
                .map(|item| match item {
                    Value::Null => Cow::Borrowed(""),
                    other => display_text(other),
                })
                .collect::<Vec<_>>()
                .join(","),
        ),
        Value::Object(_) => Cow::Owned(value.to_string()),
    }
}

fn number_text(number: &Number) -> String {
    match number.as_f64() {
        Some(float) if number.is_f64() && float.fract() == 0.0 && float.abs() < 1e21 => {
            format!("{}", float as i64)
        }
        _ => number.to_string(),
    }
}

/// Whether a value is a string that still contains the reference-open delimiter
pub fn has_reference_delimiter(value: &Value) -> bool {
    matches!(value, Value::String(text) if text.contains('{'))
}
