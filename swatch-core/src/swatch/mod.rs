//! Main module for swatch library functionality

pub mod coercion;
pub mod color;
pub mod diagnostics;
pub mod flattening;
pub mod loader;
pub mod normalization;
pub mod resolution;
pub mod token;
pub mod transforms;

pub use diagnostics::{Diagnostic, DiagnosticKind, DiagnosticSeverity};
pub use resolution::{resolve, Resolution};
pub use token::{TokenRecord, TokenSet, TokenType};
