//! Shared configuration loader for the swatch token compiler.
//!
//! `defaults/swatch.default.toml` is embedded into the binary so that docs and
//! runtime behavior stay in sync. The CLI layers the project file and flag
//! overrides on top of those defaults via [`Loader`] before deserializing into
//! [`SwatchConfig`].

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, File, FileFormat, ValueKind};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;
use swatch_emit::formats::DartOptions;

const DEFAULT_TOML: &str = include_str!("../defaults/swatch.default.toml");

/// Top-level configuration consumed by the swatch CLI.
#[derive(Debug, Clone, Deserialize)]
pub struct SwatchConfig {
    /// Token documents, merged in order
    pub sources: Vec<PathBuf>,
    pub output: OutputConfig,
    pub dart: DartConfig,
    pub watch: WatchConfig,
}

/// Destination of each artifact.
#[derive(Debug, Clone, Deserialize)]
pub struct OutputConfig {
    pub css: PathBuf,
    pub dart: PathBuf,
}

/// Mirrors the knobs exposed by the Dart format.
#[derive(Debug, Clone, Deserialize)]
pub struct DartConfig {
    pub class_name: String,
    pub source_label: String,
    pub scale_helper: bool,
}

impl DartConfig {
    pub fn options(&self) -> DartOptions {
        DartOptions {
            class_name: self.class_name.clone(),
            source_label: self.source_label.clone(),
            scale_helper: self.scale_helper,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct WatchConfig {
    pub poll_interval_ms: u64,
    pub debounce_ms: u64,
}

impl WatchConfig {
    pub fn poll_interval(&self) -> Duration {
        Duration::from_millis(self.poll_interval_ms)
    }

    pub fn debounce(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }
}

/// Helper for layering user overrides over the built-in defaults.
#[derive(Debug, Clone)]
pub struct Loader {
    builder: ConfigBuilder<DefaultState>,
}

impl Loader {
    /// Start a loader seeded with the embedded defaults.
    pub fn new() -> Self {
        let builder = Config::builder().add_source(File::from_str(DEFAULT_TOML, FileFormat::Toml));
        Self { builder }
    }

    /// Layer a configuration file. Missing files trigger an error.
    pub fn with_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(true);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Layer an optional configuration file (ignored if the file is absent).
    pub fn with_optional_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(false);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Apply a single key/value override (useful for CLI settings).
    pub fn set_override<I>(mut self, key: &str, value: I) -> Result<Self, ConfigError>
    where
        I: Into<ValueKind>,
    {
        self.builder = self.builder.set_override(key, value)?;
        Ok(self)
    }

    /// Finalize the builder and deserialize the resulting configuration.
    pub fn build(self) -> Result<SwatchConfig, ConfigError> {
        self.builder.build()?.try_deserialize()
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

/// Convenience helper for callers that only need the defaults.
pub fn load_defaults() -> Result<SwatchConfig, ConfigError> {
    Loader::new().build()
}
