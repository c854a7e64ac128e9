//! # swatch-core
//!
//! Design token compilation core.
//!
//! File Layout
//!
//! The crate turns token documents (nested JSON categories ending in leaf definitions) into a flat,
//! fully resolved token collection. Everything here is shell agnostic: reading files is confined to
//! the [loader](swatch::loader), and nothing prints. Warnings travel as returned
//! [diagnostics](swatch::diagnostics) and fatal conditions as error values.
//!
//! src/swatch
//!   ├── token          Token records, types, values and the ordered collection
//!   ├── normalization  Raw node → tagged leaf-or-category tree
//!   ├── flattening     Tree → flat collection keyed by dotted path
//!   ├── resolution     `{dotted.path}` substitution to a fixed point
//!   ├── color          CSS color parsing and rendering
//!   ├── coercion       Per-type literal coercion shared by the emitters
//!   ├── transforms     Composable pipeline stages
//!   └── loader         Reading and parsing token documents
//!
//! Emitters live in swatch-emit; they only ever see a resolved collection.

pub mod swatch;
