//! Standard transform definitions
//!
//! Pre-built pipelines over raw [`Source`]s, defined as statics with `once_cell::sync::Lazy`.

use crate::swatch::loader::Source;
use crate::swatch::resolution::Resolution;
use crate::swatch::transforms::stages::{Flattening, Normalization, Parsing, Resolving};
use crate::swatch::transforms::Transform;
use once_cell::sync::Lazy;

/// Sources → resolved tokens and diagnostics
///
/// This is the standard transform for producing artifacts.
pub static TO_RESOLVED: Lazy<Transform<Vec<Source>, Resolution>> = Lazy::new(|| {
    Transform::new(Parsing)
        .then(Normalization)
        .then(Flattening)
        .then(Resolving)
});
