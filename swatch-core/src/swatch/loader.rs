//! Token document loading
//!
//! `DocumentLoader` holds the raw text of one or more token documents, parses them, and runs
//! transforms on the result. Documents are parsed in the order they were added; a later document
//! overrides tokens of an earlier one with the same path.
//!
//! # Example
//!
//! ```rust,ignore
//! use swatch_core::swatch::loader::DocumentLoader;
//!
//! let resolution = DocumentLoader::from_paths(["tokens/primitives.json", "tokens/semantics.json"])?
//!     .resolve()?;
//! for diagnostic in &resolution.diagnostics {
//!     eprintln!("{}", diagnostic);
//! }
//! ```
//!
//! Missing files are fatal when the loader is built. Documents that are not JSON objects are fatal
//! as soon as a transform runs; see [`Parsing`](crate::swatch::transforms::stages::Parsing).

use crate::swatch::resolution::Resolution;
use crate::swatch::transforms::standard::TO_RESOLVED;
use crate::swatch::transforms::{Transform, TransformError};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

/// Error that can occur when loading token documents
#[derive(Debug, Error)]
pub enum LoaderError {
    /// A required token document does not exist
    #[error("Missing token source: {}", path.display())]
    MissingSource { path: PathBuf },
    /// A token document exists but could not be read
    #[error("Failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    /// A token document failed to parse or transform
    #[error(transparent)]
    Transform(#[from] TransformError),
}

/// Raw text of one token document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Source {
    /// File path or a descriptive name for in-memory sources
    pub label: String,
    pub text: String,
}

/// Token document loader with transform shortcuts
#[derive(Debug, Clone, Default)]
pub struct DocumentLoader {
    sources: Vec<Source>,
}

impl DocumentLoader {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a single document from a file path
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, LoaderError> {
        Self::new().with_path(path)
    }

    /// Load several documents, in order
    pub fn from_paths<I, P>(paths: I) -> Result<Self, LoaderError>
    where
        I: IntoIterator<Item = P>,
        P: AsRef<Path>,
    {
        paths
            .into_iter()
            .try_fold(Self::new(), |loader, path| loader.with_path(path))
    }

    /// Load a single document from a string
    pub fn from_string<S: Into<String>>(text: S) -> Self {
        Self::new().with_source("<string>", text)
    }

    /// Add a document read from `path`
    pub fn with_path<P: AsRef<Path>>(mut self, path: P) -> Result<Self, LoaderError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| match source.kind() {
            io::ErrorKind::NotFound => LoaderError::MissingSource {
                path: path.to_path_buf(),
            },
            _ => LoaderError::Io {
                path: path.to_path_buf(),
                source,
            },
        })?;
        debug!(path = %path.display(), bytes = text.len(), "loaded token source");
        self.sources.push(Source {
            label: path.display().to_string(),
            text,
        });
        Ok(self)
    }

    /// Add an in-memory document
    pub fn with_source(mut self, label: impl Into<String>, text: impl Into<String>) -> Self {
        self.sources.push(Source {
            label: label.into(),
            text: text.into(),
        });
        self
    }

    /// Labels of all sources, in load order
    pub fn labels(&self) -> Vec<&str> {
        self.sources.iter().map(|s| s.label.as_str()).collect()
    }

    /// Run a custom transform on the loaded sources
    pub fn with<O: 'static>(&self, transform: &Transform<Vec<Source>, O>) -> Result<O, LoaderError> {
        Ok(transform.run(self.sources.clone())?)
    }

    /// Resolved tokens and diagnostics
    pub fn resolve(&self) -> Result<Resolution, LoaderError> {
        self.with(&TO_RESOLVED)
    }
}
