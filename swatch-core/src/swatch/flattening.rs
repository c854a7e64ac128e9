//! Tree flattening
//!
//! Walks a normalized [`TokenNode`] tree depth-first in document order and emits one
//! [`TokenRecord`] per leaf. Categories only contribute their name to the path of their
//! descendants.
//!
//! Several documents can be flattened into the same [`TokenSet`]; a leaf whose key already exists
//! replaces the earlier record's type and value but keeps its position.

use crate::swatch::normalization::TokenNode;
use crate::swatch::token::{TokenRecord, TokenSet};
use tracing::debug;

/// Flatten a single tree into a new collection
pub fn flatten(root: &TokenNode) -> TokenSet {
    let mut tokens = TokenSet::new();
    flatten_into(root, &mut tokens);
    tokens
}

/// Flatten a tree into an existing collection
pub fn flatten_into(root: &TokenNode, tokens: &mut TokenSet) {
    let mut path = Vec::new();
    walk(root, &mut path, tokens);
}

/// Flatten several trees in order; later trees override earlier keys
pub fn flatten_all<'a>(roots: impl IntoIterator<Item = &'a TokenNode>) -> TokenSet {
    let mut tokens = TokenSet::new();
    for root in roots {
        flatten_into(root, &mut tokens);
    }
    tokens
}

fn walk(node: &TokenNode, path: &mut Vec<String>, tokens: &mut TokenSet) {
    match node {
        TokenNode::Leaf(leaf) => {
            let record = TokenRecord::new(path.clone(), leaf.token_type.clone(), leaf.value.clone());
            if let Some(previous) = tokens.insert(record) {
                debug!(key = %previous.key(), "token overridden by later definition");
            }
        }
        TokenNode::Category(children) => {
            for (name, child) in children {
                path.push(name.clone());
                walk(child, path, tokens);
                path.pop();
            }
        }
    }
}
