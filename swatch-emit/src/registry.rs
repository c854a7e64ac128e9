//! Format registry for format discovery and selection
//!
//! This module provides a centralized registry for all artifact formats.
//! Formats can be registered and retrieved by name.

use crate::error::FormatError;
use crate::format::Format;
use std::collections::HashMap;
use swatch_core::swatch::TokenSet;

/// Registry of artifact formats
///
/// # Examples
///
/// ```ignore
/// let mut registry = FormatRegistry::with_defaults();
/// registry.register(DartFormat::new(options));
///
/// let css = registry.serialize(&resolution.tokens, "css")?;
/// ```
pub struct FormatRegistry {
    formats: HashMap<String, Box<dyn Format>>,
}

impl FormatRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        FormatRegistry {
            formats: HashMap::new(),
        }
    }

    /// Register a format
    ///
    /// If a format with the same name already exists, it will be replaced. This is how callers
    /// swap in a configured variant of a built-in format.
    pub fn register<F: Format + 'static>(&mut self, format: F) {
        self.formats
            .insert(format.name().to_string(), Box::new(format));
    }

    /// Get a format by name
    pub fn get(&self, name: &str) -> Result<&dyn Format, FormatError> {
        self.formats
            .get(name)
            .map(|f| f.as_ref())
            .ok_or_else(|| FormatError::FormatNotFound(name.to_string()))
    }

    /// Check if a format exists
    pub fn has(&self, name: &str) -> bool {
        self.formats.contains_key(name)
    }

    /// List all available format names (sorted)
    pub fn list_formats(&self) -> Vec<String> {
        let mut names: Vec<_> = self.formats.keys().cloned().collect();
        names.sort();
        names
    }

    /// Serialize tokens using the specified format
    pub fn serialize(&self, tokens: &TokenSet, format: &str) -> Result<String, FormatError> {
        self.get(format)?.serialize(tokens)
    }

    /// Create a registry with default formats
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();

        registry.register(crate::formats::css::CssFormat);
        registry.register(crate::formats::dart::DartFormat::default());
        registry.register(crate::formats::json::JsonFormat);

        registry
    }
}

impl Default for FormatRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}
