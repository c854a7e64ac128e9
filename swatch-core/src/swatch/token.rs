//! Token data model
//!
//! A token is a named design value addressed by its path through the source tree.
//!
//! ## Types
//!
//! - [`TokenType`] - The declared or inferred kind of a token (color, dimension, ...)
//! - [`TokenRecord`] - One flattened leaf: path, type and value
//! - [`TokenSet`] - Ordered collection of records keyed by dotted path
//!
//! Values are kept as [`serde_json::Value`] so that numbers, booleans and lists from the source
//! survive until emission. Only string values can carry `{dotted.path}` references; see
//! [`value::display_text`] for how everything else is stringified.

pub mod kind;
pub mod record;
pub mod set;
pub mod value;

pub use kind::TokenType;
pub use record::TokenRecord;
pub use set::TokenSet;
