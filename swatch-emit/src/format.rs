//! Format trait definition
//!
//! Every target artifact implements [`Format`]. A format is a pure function of the resolved token
//! collection: the same tokens always produce the same text.

use crate::error::FormatError;
use swatch_core::swatch::TokenSet;

/// Trait for artifact formats
///
/// # Examples
///
/// ```ignore
/// struct KeysFormat;
///
/// impl Format for KeysFormat {
///     fn name(&self) -> &str {
///         "keys"
///     }
///
///     fn file_extension(&self) -> &str {
///         "txt"
///     }
///
///     fn serialize(&self, tokens: &TokenSet) -> Result<String, FormatError> {
///         Ok(tokens.keys().collect::<Vec<_>>().join("\n"))
///     }
/// }
/// ```
pub trait Format: Send + Sync {
    /// The name of this format (e.g., "css", "dart")
    fn name(&self) -> &str;

    /// Optional description of this format
    fn description(&self) -> &str {
        ""
    }

    /// Extension of the artifact file, without the dot
    fn file_extension(&self) -> &str;

    /// Render resolved tokens into artifact text
    fn serialize(&self, tokens: &TokenSet) -> Result<String, FormatError>;
}
