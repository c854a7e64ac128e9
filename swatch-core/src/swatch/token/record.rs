//! Flattened token record

use super::kind::TokenType;
use serde::Serialize;
use serde_json::Value;

/// One leaf token after flattening
///
/// The dotted join of `path` is the record's key in a [`TokenSet`](super::TokenSet) and the name
/// references use to point at it. Only `value` changes after flattening, and only during
/// reference resolution.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TokenRecord {
    pub path: Vec<String>,
    #[serde(rename = "type")]
    pub token_type: TokenType,
    pub value: Value,
}

impl TokenRecord {
    pub fn new(path: Vec<String>, token_type: TokenType, value: Value) -> Self {
        Self {
            path,
            token_type,
            value,
        }
    }

    /// Dotted lookup key (`color.brand.primary`)
    pub fn key(&self) -> String {
        self.path.join(".")
    }

    /// Copy of this record carrying a different value
    pub fn with_value(&self, value: Value) -> Self {
        Self {
            path: self.path.clone(),
            token_type: self.token_type.clone(),
            value,
        }
    }
}
