//! Individual transformation stages
//!
//! Each stage wraps one step of token compilation behind the `Runnable` trait.

use crate::swatch::flattening::flatten_all;
use crate::swatch::loader::Source;
use crate::swatch::normalization::{normalize_document, TokenNode};
use crate::swatch::resolution::{resolve, Resolution};
use crate::swatch::token::TokenSet;
use crate::swatch::transforms::{Runnable, TransformError};
use serde_json::{Map, Value};
use tracing::debug;

/// Parsed token documents, root objects in load order
pub type Documents = Vec<Map<String, Value>>;

/// Source text → root objects
///
/// The one fallible stage: a source that is not JSON, or whose root is not an object, stops the
/// pipeline before any token is looked at.
pub struct Parsing;

impl Runnable<Vec<Source>, Documents> for Parsing {
    fn run(&self, input: Vec<Source>) -> Result<Documents, TransformError> {
        input.iter().map(parse_document).collect()
    }
}

fn parse_document(source: &Source) -> Result<Map<String, Value>, TransformError> {
    let malformed = |message: String| TransformError::MalformedDocument {
        label: source.label.clone(),
        message,
    };
    match serde_json::from_str::<Value>(&source.text) {
        Ok(Value::Object(root)) => Ok(root),
        Ok(other) => Err(malformed(format!(
            "expected an object at the top level, found {}",
            json_kind(&other)
        ))),
        Err(err) => Err(malformed(err.to_string())),
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

/// Documents → normalized trees
pub struct Normalization;

impl Runnable<Documents, Vec<TokenNode>> for Normalization {
    fn run(&self, input: Documents) -> Result<Vec<TokenNode>, TransformError> {
        let trees: Vec<TokenNode> = input.iter().map(normalize_document).collect();
        debug!(
            documents = trees.len(),
            leaves = trees.iter().map(TokenNode::leaf_count).sum::<usize>(),
            "normalized token documents"
        );
        Ok(trees)
    }
}

/// Normalized trees → flat token collection
pub struct Flattening;

impl Runnable<Vec<TokenNode>, TokenSet> for Flattening {
    fn run(&self, input: Vec<TokenNode>) -> Result<TokenSet, TransformError> {
        let tokens = flatten_all(&input);
        debug!(documents = input.len(), tokens = tokens.len(), "flattened token documents");
        Ok(tokens)
    }
}

/// Flat collection → resolved collection plus diagnostics
pub struct Resolving;

impl Runnable<TokenSet, Resolution> for Resolving {
    fn run(&self, input: TokenSet) -> Result<Resolution, TransformError> {
        Ok(resolve(input))
    }
}
