//! Format registry for format discovery and selection
//!
//! This module provides a centralized registry for the package encodings.
//! Formats can be registered and retrieved by tag, or detected from a filename.

use crate::error::FormatError;
use crate::format::Format;
use crate::model::Package;
use std::collections::HashMap;

/// Registry of package formats
///
/// # Examples
///
/// ```ignore
/// let registry = FormatRegistry::default();
///
/// let format = registry.detect_format_from_filename("quiz.siq").unwrap();
/// let package = registry.parse(&content, &format)?;
/// let json = registry.serialize(&package, "jsiq")?;
/// ```
pub struct FormatRegistry {
    formats: HashMap<String, Box<dyn Format>>,
}

impl FormatRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        FormatRegistry {
            formats: HashMap::new(),
        }
    }

    /// Register a format
    ///
    /// If a format with the same name already exists, it will be replaced.
    pub fn register<F: Format + 'static>(&mut self, format: F) {
        self.formats
            .insert(format.name().to_string(), Box::new(format));
    }

    /// Get a format by tag or alias
    pub fn get(&self, name: &str) -> Result<&dyn Format, FormatError> {
        if let Some(format) = self.formats.get(name) {
            return Ok(format.as_ref());
        }
        self.formats
            .values()
            .find(|f| f.aliases().contains(&name))
            .map(|f| f.as_ref())
            .ok_or_else(|| FormatError::FormatNotFound(name.to_string()))
    }

    /// Check if a format exists
    pub fn has(&self, name: &str) -> bool {
        self.get(name).is_ok()
    }

    /// List all available format names (sorted)
    pub fn list_formats(&self) -> Vec<String> {
        let mut names: Vec<_> = self.formats.keys().cloned().collect();
        names.sort();
        names
    }

    /// Detect format from filename based on its suffix
    ///
    /// Suffixes may contain dots (`jsiq.zip`), so the longest matching suffix wins.
    ///
    /// # Examples
    ///
    /// ```ignore
    /// let registry = FormatRegistry::default();
    /// assert_eq!(registry.detect_format_from_filename("quiz.siq"), Some("siq".to_string()));
    /// assert_eq!(registry.detect_format_from_filename("quiz.jsiq.zip"), Some("jsiq".to_string()));
    /// assert_eq!(registry.detect_format_from_filename("quiz.zip"), None);
    /// ```
    pub fn detect_format_from_filename(&self, filename: &str) -> Option<String> {
        let file_name = std::path::Path::new(filename)
            .file_name()
            .and_then(|name| name.to_str())?;

        self.formats
            .values()
            .flat_map(|format| {
                format
                    .file_extensions()
                    .iter()
                    .map(move |ext| (format.name(), *ext))
            })
            .filter(|(_, ext)| {
                file_name.len() > ext.len() + 1
                    && file_name.ends_with(ext)
                    && file_name[..file_name.len() - ext.len()].ends_with('.')
            })
            .max_by_key(|(_, ext)| ext.len())
            .map(|(name, _)| name.to_string())
    }

    /// Primary filename suffix of a format (without the leading dot)
    pub fn file_extension(&self, format: &str) -> Result<String, FormatError> {
        let fmt = self.get(format)?;
        fmt.file_extensions()
            .first()
            .map(|ext| ext.to_string())
            .ok_or_else(|| FormatError::FormatNotFound(format!("{format} (no file extension)")))
    }

    /// Archive entry that holds the content of the given format
    pub fn content_entry(&self, format: &str) -> Result<String, FormatError> {
        Ok(self.get(format)?.content_entry().to_string())
    }

    /// Decode a content entry using the specified format
    pub fn parse(&self, source: &[u8], format: &str) -> Result<Package, FormatError> {
        self.get(format)?.parse(source)
    }

    /// Encode a package using the specified format
    pub fn serialize(&self, package: &Package, format: &str) -> Result<String, FormatError> {
        self.get(format)?.serialize(package)
    }

    /// Encode a package using the specified format and options
    pub fn serialize_with_options(
        &self,
        package: &Package,
        format: &str,
        options: &HashMap<String, String>,
    ) -> Result<String, FormatError> {
        self.get(format)?.serialize_with_options(package, options)
    }

    /// Create a registry with default formats
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();

        registry.register(crate::formats::markup::MarkupFormat);
        registry.register(crate::formats::structured::StructuredFormat);

        registry
    }
}

impl Default for FormatRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}
