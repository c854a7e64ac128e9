//! Resolved tokens as JSON
//!
//! An object keyed by dotted token key, in collection order, each entry carrying `path`, `type`
//! and the resolved `value`. Useful to inspect what the other formats were fed.

use crate::error::FormatError;
use crate::format::Format;
use swatch_core::swatch::TokenSet;

pub struct JsonFormat;

impl Format for JsonFormat {
    fn name(&self) -> &str {
        "json"
    }

    fn description(&self) -> &str {
        "Resolved tokens keyed by dotted path"
    }

    fn file_extension(&self) -> &str {
        "json"
    }

    fn serialize(&self, tokens: &TokenSet) -> Result<String, FormatError> {
        let mut output = serde_json::to_string_pretty(tokens)?;
        output.push('\n');
        Ok(output)
    }
}
