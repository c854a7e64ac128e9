//! Transform pipeline infrastructure
//!
//! Every step of token compilation is a stage with a typed input and output. Stages compose into
//! a [`Transform`] whose intermediate types are checked by the compiler:
//!
//! ```rust,ignore
//! let pipeline = Transform::new(Parsing)    // Vec<Source> → Documents
//!     .then(Normalization)                  // Documents → Vec<TokenNode>
//!     .then(Flattening)                     // Vec<TokenNode> → TokenSet
//!     .then(Resolving);                     // TokenSet → Resolution
//! ```
//!
//! ## The `Runnable` Trait
//!
//! Implemented by the individual stages in [`stages`]. Only [`Parsing`](stages::Parsing) can
//! fail; the later stages report problems as diagnostics on their output.
//!
//! ## Standard Transforms
//!
//! Common pipelines are pre-built as statics in [`standard`] and are what the
//! [`DocumentLoader`](crate::swatch::loader::DocumentLoader) runs.

pub mod stages;
pub mod standard;

use thiserror::Error;

/// Error that can occur during transformation
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransformError {
    /// A source is not JSON, or its root is not an object
    #[error("Malformed token document {label}: {message}")]
    MalformedDocument { label: String, message: String },
}

/// Trait for anything that can transform an input to an output
pub trait Runnable<I, O> {
    /// Execute this transformation on the input
    fn run(&self, input: I) -> Result<O, TransformError>;
}

/// A composable transformation pipeline from `I` to `O`
pub struct Transform<I, O> {
    run_fn: Box<dyn Fn(I) -> Result<O, TransformError> + Send + Sync>,
}

impl<I, O> Transform<I, O> {
    /// Start a pipeline with its first stage
    pub fn new<S>(stage: S) -> Self
    where
        S: Runnable<I, O> + Send + Sync + 'static,
    {
        Transform {
            run_fn: Box::new(move |input| stage.run(input)),
        }
    }

    /// Chain a stage after this transform
    pub fn then<O2, S>(self, stage: S) -> Transform<I, O2>
    where
        S: Runnable<O, O2> + Send + Sync + 'static,
        I: 'static,
        O: 'static,
        O2: 'static,
    {
        let prev_run = self.run_fn;
        Transform {
            run_fn: Box::new(move |input| {
                let intermediate = prev_run(input)?;
                stage.run(intermediate)
            }),
        }
    }

    /// Execute this transform on the given input
    pub fn run(&self, input: I) -> Result<O, TransformError> {
        (self.run_fn)(input)
    }
}

#[cfg(test)]
mod tests {
    use super::stages::{Flattening, Normalization, Parsing};
    use super::*;
    use crate::swatch::loader::Source;
    use crate::swatch::token::TokenSet;

    /// Fails on any collection holding more than `limit` tokens
    struct AtMost {
        limit: usize,
    }

    impl Runnable<TokenSet, TokenSet> for AtMost {
        fn run(&self, input: TokenSet) -> Result<TokenSet, TransformError> {
            if input.len() > self.limit {
                return Err(TransformError::MalformedDocument {
                    label: "<limit>".to_string(),
                    message: format!("{} tokens", input.len()),
                });
            }
            Ok(input)
        }
    }

    fn source(text: &str) -> Vec<Source> {
        vec![Source {
            label: "tokens.json".to_string(),
            text: text.to_string(),
        }]
    }

    #[test]
    fn test_type_changing_stages() {
        let transform = Transform::new(Parsing)
            .then(Normalization)
            .then(Flattening);
        let tokens = transform
            .run(source(r#"{"space": {"sm": {"value": "4px"}}}"#))
            .unwrap();
        assert_eq!(tokens.keys().collect::<Vec<_>>(), vec!["space.sm"]);
    }

    #[test]
    fn test_error_in_first_stage_skips_later_stages() {
        let transform = Transform::new(Parsing)
            .then(Normalization)
            .then(Flattening)
            .then(AtMost { limit: 0 });
        let err = transform.run(source("{ nope")).unwrap_err();
        assert!(matches!(
            err,
            TransformError::MalformedDocument { ref label, .. } if label == "tokens.json"
        ));
    }

    #[test]
    fn test_error_in_later_stage() {
        let transform = Transform::new(Parsing)
            .then(Normalization)
            .then(Flattening)
            .then(AtMost { limit: 1 });
        let err = transform
            .run(source(r#"{"a": {"value": "1"}, "b": {"value": "2"}}"#))
            .unwrap_err();
        assert_eq!(err.to_string(), "Malformed token document <limit>: 2 tokens");
    }
}
