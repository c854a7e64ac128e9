//! Target artifacts for resolved design tokens
//!
//!     This crate renders a resolved token collection into the text of each target artifact. Every
//!     target is a format behind the same trait, so the CLI (and tests) pick them by name.
//!
//! Architecture
//!
//!     - Format trait: uniform interface for all targets (name, extension, serialize)
//!     - FormatRegistry: discovery and selection of formats by name
//!     - Format implementations: one module per target
//!
//!     This is a pure lib: it never touches the file system, the environment or stdout. Choosing
//!     where an artifact goes and creating its directory is the caller's job.
//!
//!     The file structure :
//!     .
//!     ├── error.rs
//!     ├── format.rs               # Format trait definition
//!     ├── registry.rs             # FormatRegistry for discovery and selection
//!     ├── formats
//!     │   ├── css                 # `:root { --color-brand: rgb(...); }`
//!     │   ├── dart                # `class AppTokens { static const Color ... }`
//!     │   └── json                # resolved tokens, for inspection
//!     ├── lib.rs
//!
//! Coercion
//!
//!     Emitters never fail on a token value. Parsing colors, numeric prefixes and integer weights
//!     is shared through swatch_core::swatch::coercion; each format only decides the spelling and
//!     the fallback. Unresolved reference text reaches the formats as an ordinary string.
//!
//! Identifier collisions
//!
//!     Different paths can sanitize to the same identifier (`a.b` and `a-b` both become `--a-b`).
//!     Both declarations are emitted in collection order, so the later one wins wherever the
//!     artifact is consumed.

pub mod error;
pub mod format;
pub mod formats;
pub mod registry;

pub use error::FormatError;
pub use format::Format;
pub use registry::FormatRegistry;
