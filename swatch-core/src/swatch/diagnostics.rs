//! Non-fatal diagnostics
//!
//! Everything that can go wrong once a token document has parsed is reported here instead of
//! failing the run: broken or circular references, references left over when the pass budget runs
//! out, and values that cannot be coerced to their declared type. Output is always produced; the
//! caller decides how to surface these (the CLI logs them as warnings).
//!
//! ## Deduplication
//!
//! Resolution visits the same reference edge from several starting records and across several
//! passes. [`Diagnostics`] collapses the repeats so that each run reports:
//!
//! - one circular warning per cycle edge (referring token, target)
//! - one missing or unresolved warning per target path
//! - one coercion finding per token

use std::collections::HashSet;
use std::fmt;

/// How much a diagnostic affects the output
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DiagnosticSeverity {
    /// Literal text was left in place
    Warning,
    /// A default value was substituted
    Degraded,
}

impl fmt::Display for DiagnosticSeverity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DiagnosticSeverity::Warning => write!(f, "warning"),
            DiagnosticSeverity::Degraded => write!(f, "degraded"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DiagnosticKind {
    /// `{path}` names a token that does not exist
    MissingReference,
    /// `{path}` names a token already on the active resolution chain
    CircularReference,
    /// `{path}` text survived the whole pass budget
    UnresolvedReference,
    /// Value could not be coerced to its token type
    UnrepresentableValue,
}

impl DiagnosticKind {
    pub fn code(&self) -> &'static str {
        match self {
            DiagnosticKind::MissingReference => "missing-reference",
            DiagnosticKind::CircularReference => "circular-reference",
            DiagnosticKind::UnresolvedReference => "unresolved-reference",
            DiagnosticKind::UnrepresentableValue => "unrepresentable-value",
        }
    }

    pub fn severity(&self) -> DiagnosticSeverity {
        match self {
            DiagnosticKind::UnrepresentableValue => DiagnosticSeverity::Degraded,
            _ => DiagnosticSeverity::Warning,
        }
    }
}

/// A single non-fatal finding
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub kind: DiagnosticKind,
    /// Key of the token whose value produced the finding
    pub key: String,
    /// Referenced path, for reference diagnostics
    pub target: Option<String>,
    pub message: String,
}

impl Diagnostic {
    pub fn missing_reference(key: &str, target: &str) -> Self {
        Self {
            kind: DiagnosticKind::MissingReference,
            key: key.to_string(),
            target: Some(target.to_string()),
            message: format!("Reference not found: {}", target),
        }
    }

    pub fn circular_reference(key: &str, target: &str) -> Self {
        Self {
            kind: DiagnosticKind::CircularReference,
            key: key.to_string(),
            target: Some(target.to_string()),
            message: format!("Circular reference detected: {}", target),
        }
    }

    pub fn unresolved_reference(key: &str, target: &str) -> Self {
        Self {
            kind: DiagnosticKind::UnresolvedReference,
            key: key.to_string(),
            target: Some(target.to_string()),
            message: format!("Reference left unresolved: {}", target),
        }
    }

    pub fn unrepresentable(key: &str, message: impl Into<String>) -> Self {
        Self {
            kind: DiagnosticKind::UnrepresentableValue,
            key: key.to_string(),
            target: None,
            message: message.into(),
        }
    }

    pub fn severity(&self) -> DiagnosticSeverity {
        self.kind.severity()
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} [{}]: {} (in {})",
            self.severity(),
            self.kind.code(),
            self.message,
            self.key
        )
    }
}

/// Ordered diagnostic collection that drops repeats
#[derive(Debug, Clone, Default)]
pub struct Diagnostics {
    items: Vec<Diagnostic>,
    seen: HashSet<(DiagnosticKind, Option<String>, String)>,
    targets: HashSet<(DiagnosticKind, String)>,
}

impl Diagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a diagnostic unless an equivalent one is already recorded
    ///
    /// Circular references are told apart by edge, other reference diagnostics by target and
    /// targetless ones by token key.
    pub fn push(&mut self, diagnostic: Diagnostic) -> bool {
        let identity = match (&diagnostic.kind, &diagnostic.target) {
            (DiagnosticKind::CircularReference, Some(target)) => {
                (Some(diagnostic.key.clone()), target.clone())
            }
            (_, Some(target)) => (None, target.clone()),
            (_, None) => (None, diagnostic.key.clone()),
        };
        if !self.seen.insert((diagnostic.kind, identity.0, identity.1)) {
            return false;
        }
        if let Some(target) = &diagnostic.target {
            self.targets.insert((diagnostic.kind, target.clone()));
        }
        self.items.push(diagnostic);
        true
    }

    /// Whether a diagnostic of this kind was recorded for `target`
    pub fn reported(&self, kind: DiagnosticKind, target: &str) -> bool {
        self.targets.contains(&(kind, target.to_string()))
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Diagnostic> {
        self.items.iter()
    }

    pub fn into_vec(self) -> Vec<Diagnostic> {
        self.items
    }
}
