//! Token types and shape-based type inference

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Serialize, Serializer};
use serde_json::Value;
use std::fmt;

static ALL_DIGITS: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[0-9]+$").unwrap());

/// The kind of value a token holds
///
/// The five well-known kinds drive per-target literal coercion. Any other explicit type name in
/// the source is preserved as [`TokenType::Other`] and emitted like a plain string.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TokenType {
    Color,
    Dimension,
    FontFamily,
    FontWeight,
    String,
    Other(String),
}

impl TokenType {
    /// Map an explicit `$type`/`type` name onto a token type
    pub fn from_name(name: &str) -> Self {
        match name {
            "color" => TokenType::Color,
            "dimension" => TokenType::Dimension,
            "fontFamily" => TokenType::FontFamily,
            "fontWeight" => TokenType::FontWeight,
            "string" => TokenType::String,
            other => TokenType::Other(other.to_string()),
        }
    }

    /// Infer a type from the shape of an untyped value
    ///
    /// Only strings are inspected, in this order:
    /// - starts with `#` → color
    /// - contains `px` or `rem` → dimension
    /// - all digits → fontWeight
    ///
    /// Everything else, including non-string values, is a string token.
    pub fn infer(value: &Value) -> Self {
        let Value::String(text) = value else {
            return TokenType::String;
        };
        if text.starts_with('#') {
            TokenType::Color
        } else if text.contains("px") || text.contains("rem") {
            TokenType::Dimension
        } else if ALL_DIGITS.is_match(text) {
            TokenType::FontWeight
        } else {
            TokenType::String
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            TokenType::Color => "color",
            TokenType::Dimension => "dimension",
            TokenType::FontFamily => "fontFamily",
            TokenType::FontWeight => "fontWeight",
            TokenType::String => "string",
            TokenType::Other(name) => name,
        }
    }
}

impl fmt::Display for TokenType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl Serialize for TokenType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}
