//! Whole-collection resolution passes

use super::chain::Chain;
use super::reference::{reference_targets, REFERENCE};
use crate::swatch::diagnostics::{Diagnostic, DiagnosticKind, Diagnostics};
use crate::swatch::token::value::display_text;
use crate::swatch::token::TokenSet;
use regex::Captures;
use serde_json::Value;
use tracing::debug;

/// Upper bound on whole-collection passes
pub const MAX_PASSES: usize = 10;

/// Outcome of resolving a collection
#[derive(Debug, Clone)]
pub struct Resolution {
    pub tokens: TokenSet,
    pub diagnostics: Vec<Diagnostic>,
    /// Number of passes actually run
    pub passes: usize,
}

impl Resolution {
    pub fn count(&self, kind: DiagnosticKind) -> usize {
        self.diagnostics.iter().filter(|d| d.kind == kind).count()
    }
}

/// Resolve all references with the default pass budget
pub fn resolve(tokens: TokenSet) -> Resolution {
    resolve_with_budget(tokens, MAX_PASSES)
}

/// Resolve all references, running at most `max_passes` passes
pub fn resolve_with_budget(tokens: TokenSet, max_passes: usize) -> Resolution {
    let mut diagnostics = Diagnostics::new();
    let mut current = tokens;
    let mut passes = 0;

    while passes < max_passes && current.has_reference_delimiters() {
        let next = resolve_pass(&current, &mut diagnostics);
        passes += 1;
        let settled = next == current;
        current = next;
        if settled {
            debug!(passes, "resolution reached a fixed point");
            break;
        }
    }

    report_leftovers(&current, &mut diagnostics);
    debug!(
        passes,
        tokens = current.len(),
        diagnostics = diagnostics.len(),
        "resolution finished"
    );

    Resolution {
        tokens: current,
        diagnostics: diagnostics.into_vec(),
        passes,
    }
}

/// Resolve every record once against `tokens`
///
/// Each record sees the input collection only, never values rewritten earlier in the same pass.
pub fn resolve_pass(tokens: &TokenSet, diagnostics: &mut Diagnostics) -> TokenSet {
    tokens
        .iter()
        .map(|record| match &record.value {
            Value::String(text) if text.contains('{') => {
                let key = record.key();
                let expansion = resolve_text(tokens, text, &key, &Chain::empty(), diagnostics);
                record.with_value(Value::String(expansion.text))
            }
            _ => record.clone(),
        })
        .collect()
}

/// Result of expanding one value
struct Expansion {
    text: String,
    /// The expansion ran into a token already on the chain
    circular: bool,
}

/// Substitute every reference in `text`
///
/// `referrer` is the key of the token `text` belongs to; `chain` holds the paths already being
/// resolved above this call. An occurrence whose expansion reached a cycle keeps its literal text,
/// so values on or behind a cycle never grow from pass to pass.
fn resolve_text(
    tokens: &TokenSet,
    text: &str,
    referrer: &str,
    chain: &Chain<'_>,
    diagnostics: &mut Diagnostics,
) -> Expansion {
    let mut circular = false;
    let text = REFERENCE
        .replace_all(text, |captures: &Captures<'_>| {
            let occurrence = &captures[0];
            let target = &captures[1];

            if chain.contains(target) {
                diagnostics.push(Diagnostic::circular_reference(referrer, target));
                circular = true;
                return occurrence.to_string();
            }

            let Some(record) = tokens.get(target) else {
                diagnostics.push(Diagnostic::missing_reference(referrer, target));
                return occurrence.to_string();
            };

            match &record.value {
                Value::String(inner) => {
                    let expansion =
                        resolve_text(tokens, inner, target, &chain.with(target), diagnostics);
                    if expansion.circular {
                        circular = true;
                        occurrence.to_string()
                    } else {
                        expansion.text
                    }
                }
                other => display_text(other).into_owned(),
            }
        })
        .into_owned();
    Expansion { text, circular }
}

fn report_leftovers(tokens: &TokenSet, diagnostics: &mut Diagnostics) {
    for record in tokens {
        let Value::String(text) = &record.value else {
            continue;
        };
        for target in reference_targets(text) {
            let explained = diagnostics.reported(DiagnosticKind::MissingReference, target)
                || diagnostics.reported(DiagnosticKind::CircularReference, target);
            if !explained {
                diagnostics.push(Diagnostic::unresolved_reference(&record.key(), target));
            }
        }
    }
}
