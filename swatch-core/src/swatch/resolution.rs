//! Reference resolution
//!
//! Token values may embed references to other tokens as `{dotted.path}`, any number of times and
//! mixed with literal text (`"{space.sm} {space.md}"`). Resolution substitutes each occurrence with
//! the referenced token's own resolved text.
//!
//! ## Algorithm
//!
//! One pass resolves every record against the collection produced by the previous pass; records
//! never see partial updates from the pass they are part of. Resolving a single occurrence
//! recurses into the target's value, carrying the chain of paths visited so far:
//!
//! - target missing from the collection → `missing-reference`, occurrence kept verbatim
//! - target already on the chain → `circular-reference`, occurrence kept verbatim
//! - otherwise → target resolved recursively with the chain extended by the target path
//!
//! Passes repeat up to [`MAX_PASSES`] and stop early when no value contains `{` any more, or when
//! a pass leaves the collection unchanged. Whatever reference text survives is passed through to
//! the emitters as an opaque literal, with one `unresolved-reference` diagnostic per target not
//! already reported as missing or circular.
//!
//! The chain is an explicit argument of the recursion, so resolving a record is a pure function
//! of (collection, record); diagnostics are the only accumulated output.

pub mod chain;
pub mod reference;
pub mod resolver;

pub use chain::Chain;
pub use reference::{reference_targets, REFERENCE};
pub use resolver::{resolve, resolve_pass, resolve_with_budget, Resolution, MAX_PASSES};
