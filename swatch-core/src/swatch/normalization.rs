//! Token node normalization
//!
//! Token documents come in two field-naming conventions (`$value`/`$type` and `value`/`type`),
//! and leaves may or may not declare a type. This stage collapses all of them into one tagged
//! shape before anything downstream looks at the tree:
//!
//! ```text
//! { "brand": { "$value": "#4F46E5", "$type": "color" } }   ─┐
//! { "brand": { "value": "#4F46E5" } }                        ├─ Category[brand → Leaf{color, "#4F46E5"}]
//! { "brand": { "$value": "#4F46E5" } }                      ─┘
//! ```
//!
//! Rules:
//! - A mapping with any of `$value`, `value`, `$type`, `type` is a leaf. Leaf detection wins over
//!   category treatment, so other keys of a leaf are ignored.
//! - `$`-prefixed fields win when both conventions are present.
//! - A leaf without a value gets an empty string; a leaf without a type gets an inferred one.
//! - Category entries that are not mappings, and `$`-prefixed metadata keys, are skipped.
//!
//! Normalization never fails.

use crate::swatch::token::TokenType;
use serde_json::{Map, Value};
use tracing::trace;

/// A normalized leaf definition
#[derive(Debug, Clone, PartialEq)]
pub struct TokenLeaf {
    pub token_type: TokenType,
    pub value: Value,
}

/// Tagged leaf-or-category node
#[derive(Debug, Clone, PartialEq)]
pub enum TokenNode {
    Leaf(TokenLeaf),
    /// Named children in document order
    Category(Vec<(String, TokenNode)>),
}

impl TokenNode {
    /// Number of leaves below (or at) this node
    pub fn leaf_count(&self) -> usize {
        match self {
            TokenNode::Leaf(_) => 1,
            TokenNode::Category(children) => {
                children.iter().map(|(_, child)| child.leaf_count()).sum()
            }
        }
    }
}

/// Whether a raw mapping is a leaf definition
pub fn is_leaf(node: &Map<String, Value>) -> bool {
    ["$value", "value", "$type", "type"]
        .iter()
        .any(|field| node.contains_key(*field))
}

/// Normalize one raw node and everything below it
pub fn normalize(node: &Map<String, Value>) -> TokenNode {
    if is_leaf(node) {
        return TokenNode::Leaf(normalize_leaf(node));
    }
    normalize_category(node)
}

/// Normalize a whole document
///
/// The document root is always a category: a top-level `value` key names a token group, not a
/// token.
pub fn normalize_document(root: &Map<String, Value>) -> TokenNode {
    normalize_category(root)
}

fn normalize_category(node: &Map<String, Value>) -> TokenNode {
    let mut children = Vec::with_capacity(node.len());
    for (name, child) in node {
        if name.starts_with('$') {
            trace!(key = %name, "skipping category metadata");
            continue;
        }
        match child {
            Value::Object(map) => children.push((name.clone(), normalize(map))),
            other => {
                trace!(key = %name, value = %other, "skipping non-mapping category entry");
            }
        }
    }
    TokenNode::Category(children)
}

fn normalize_leaf(node: &Map<String, Value>) -> TokenLeaf {
    let value = node
        .get("$value")
        .or_else(|| node.get("value"))
        .cloned()
        .unwrap_or_else(|| Value::String(String::new()));

    let token_type = match node.get("$type").or_else(|| node.get("type")) {
        Some(Value::String(name)) => TokenType::from_name(name),
        _ => TokenType::infer(&value),
    };

    TokenLeaf { token_type, value }
}
