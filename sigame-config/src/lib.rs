//! Shared configuration loader for the sigame toolchain.
//!
//! `defaults/sigame.default.toml` is embedded into every binary so that docs and
//! runtime behavior stay in sync. Applications layer user-specific files on top
//! of those defaults via [`Loader`] before deserializing into [`SigameConfig`].

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, File, FileFormat, ValueKind};
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;

pub use config::ConfigError;

const DEFAULT_TOML: &str = include_str!("../defaults/sigame.default.toml");

/// Top-level configuration consumed by sigame applications.
#[derive(Debug, Clone, Deserialize)]
pub struct SigameConfig {
    pub convert: ConvertConfig,
}

/// Format-specific conversion knobs.
#[derive(Debug, Clone, Deserialize)]
pub struct ConvertConfig {
    pub markup: MarkupConfig,
    pub structured: StructuredConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MarkupConfig {
    pub indent: String,
    pub xml_declaration: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct StructuredConfig {
    pub pretty: bool,
}

impl ConvertConfig {
    /// Serializer options for the `siq` format.
    pub fn markup_options(&self) -> HashMap<String, String> {
        HashMap::from([
            ("indent".to_string(), self.markup.indent.clone()),
            (
                "xml-declaration".to_string(),
                self.markup.xml_declaration.to_string(),
            ),
        ])
    }

    /// Serializer options for the `jsiq` format.
    pub fn structured_options(&self) -> HashMap<String, String> {
        HashMap::from([("pretty".to_string(), self.structured.pretty.to_string())])
    }

    /// Options for the named target format; unknown formats get none.
    pub fn options_for(&self, format: &str) -> HashMap<String, String> {
        match format {
            "siq" => self.markup_options(),
            "jsiq" => self.structured_options(),
            _ => HashMap::new(),
        }
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

    /// Apply a single key/value override.
    pub fn set_override<I>(mut self, key: &str, value: I) -> Result<Self, ConfigError>
    where
        I: Into<ValueKind>,
    {
        self.builder = self.builder.set_override(key, value)?;
        Ok(self)
    }

    pub fn build(self) -> Result<SigameConfig, ConfigError> {
        self.builder.build()?.try_deserialize()
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

/// Convenience helper for callers that only need the defaults.
pub fn load_defaults() -> Result<SigameConfig, ConfigError> {
    Loader::new().build()
}
