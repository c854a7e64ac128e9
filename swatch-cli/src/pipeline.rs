//! One compilation run: load, resolve, report, write
//!
//! Everything before writing is delegated to the library crates. This module owns the parts the
//! pure pipeline leaves to its caller: turning diagnostics into log lines, creating destination
//! directories and writing the artifacts.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use swatch_config::SwatchConfig;
use swatch_core::swatch::coercion::coercion_diagnostics;
use swatch_core::swatch::loader::{DocumentLoader, LoaderError};
use swatch_core::swatch::{Diagnostic, DiagnosticKind};
use swatch_emit::formats::DartFormat;
use swatch_emit::{FormatError, FormatRegistry};
use thiserror::Error;
use tracing::{debug, info, warn};

/// Conditions that abort a run
#[derive(Debug, Error)]
pub enum BuildError {
    #[error("Invalid configuration: {0}")]
    Config(#[from] config::ConfigError),
    #[error(transparent)]
    Load(#[from] LoaderError),
    #[error(transparent)]
    Format(#[from] FormatError),
    #[error("Cannot write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("Cannot watch {path}: {source}")]
    Watch {
        path: PathBuf,
        #[source]
        source: notify::Error,
    },
}

/// Outcome of a successful run
#[derive(Debug)]
pub struct BuildReport {
    pub tokens: usize,
    pub passes: usize,
    pub diagnostics: Vec<Diagnostic>,
    pub written: Vec<PathBuf>,
}

/// Registry with the Dart format configured from `config`
pub fn registry(config: &SwatchConfig) -> FormatRegistry {
    let mut registry = FormatRegistry::with_defaults();
    registry.register(DartFormat::new(config.dart.options()));
    registry
}

/// Run the whole pipeline once and write both artifacts
pub fn build(config: &SwatchConfig) -> Result<BuildReport, BuildError> {
    let loader = DocumentLoader::from_paths(&config.sources)?;
    let resolution = loader.resolve()?;
    debug!(
        sources = %loader.labels().join(", "),
        tokens = resolution.tokens.len(),
        passes = resolution.passes,
        circular = resolution.count(DiagnosticKind::CircularReference),
        missing = resolution.count(DiagnosticKind::MissingReference),
        "resolved"
    );

    let mut diagnostics = resolution.diagnostics;
    diagnostics.extend(coercion_diagnostics(&resolution.tokens));
    for diagnostic in &diagnostics {
        warn!("{}", diagnostic);
    }

    let registry = registry(config);
    let mut written = Vec::new();
    for (format, path) in [("css", &config.output.css), ("dart", &config.output.dart)] {
        let text = registry.serialize(&resolution.tokens, format)?;
        write_artifact(path, &text)?;
        info!("✓ {} written to {}", format, path.display());
        written.push(path.clone());
    }

    Ok(BuildReport {
        tokens: resolution.tokens.len(),
        passes: resolution.passes,
        diagnostics,
        written,
    })
}

fn write_artifact(path: &Path, text: &str) -> Result<(), BuildError> {
    let to_error = |source| BuildError::Write {
        path: path.to_path_buf(),
        source,
    };
    if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(to_error)?;
    }
    fs::write(path, text).map_err(to_error)
}
