//! Format implementations
//!
//! One module per target artifact. Each renders a resolved [`TokenSet`] into text and never fails
//! on a token value.
//!
//! [`TokenSet`]: swatch_core::swatch::TokenSet

pub mod css;
pub mod dart;
pub mod json;

pub use css::CssFormat;
pub use dart::{DartFormat, DartOptions};
pub use json::JsonFormat;
