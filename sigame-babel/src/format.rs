//! Format trait definition
//!
//! This module defines the core Format trait that both package encodings implement.
//! The trait provides a uniform interface for decoding and encoding the content
//! entry of a package archive.

use crate::error::FormatError;
use crate::model::Package;
use std::collections::HashMap;

/// Trait for package content encodings
///
/// Implementors provide bidirectional conversion between the bytes of an archive's
/// content entry and the [`Package`] tree.
///
/// # Examples
///
/// ```ignore
/// struct MyFormat;
///
/// impl Format for MyFormat {
///     fn name(&self) -> &str {
///         "my-format"
///     }
///
///     fn content_entry(&self) -> &str {
///         "content.my"
///     }
///
///     fn parse(&self, source: &[u8]) -> Result<Package, FormatError> {
///         todo!()
///     }
///
///     fn serialize(&self, package: &Package) -> Result<String, FormatError> {
///         todo!()
///     }
/// }
/// ```
pub trait Format: Send + Sync {
    /// The format tag (e.g., "siq", "jsiq")
    fn name(&self) -> &str;

    /// Optional description of this format
    fn description(&self) -> &str {
        ""
    }

    /// Archive filename suffixes associated with this format, without the leading dot
    /// (e.g., ["siq"], ["jsiq.zip"]).
    ///
    /// Suffixes may span several dots, so detection matches on the end of the
    /// filename rather than on [`std::path::Path::extension`].
    fn file_extensions(&self) -> &[&str] {
        &[]
    }

    /// Alternative tags accepted when the format is named explicitly.
    fn aliases(&self) -> &[&str] {
        &[]
    }

    /// Name of the archive entry holding the encoded package
    fn content_entry(&self) -> &str;

    /// Decode a content entry into a Package
    fn parse(&self, source: &[u8]) -> Result<Package, FormatError>;

    /// Encode a Package into content entry text
    fn serialize(&self, package: &Package) -> Result<String, FormatError>;

    /// Encode a Package, optionally using extra parameters.
    ///
    /// Formats without options can rely on the default implementation, which
    /// delegates to [`Format::serialize`] and rejects any parameter.
    fn serialize_with_options(
        &self,
        package: &Package,
        options: &HashMap<String, String>,
    ) -> Result<String, FormatError> {
        if options.is_empty() {
            self.serialize(package)
        } else {
            Err(FormatError::SerializationError(format!(
                "Format '{}' does not support extra parameters",
                self.name()
            )))
        }
    }
}

/// Reads a boolean serializer option, accepting `true`/`false`.
pub(crate) fn bool_option(
    options: &HashMap<String, String>,
    key: &str,
    default: bool,
) -> Result<bool, FormatError> {
    match options.get(key).map(|v| v.as_str()) {
        None => Ok(default),
        Some("true") => Ok(true),
        Some("false") => Ok(false),
        Some(other) => Err(FormatError::SerializationError(format!(
            "Option '{key}' expects true or false, got '{other}'"
        ))),
    }
}

/// Rejects options a format does not understand.
pub(crate) fn reject_unknown_options(
    format: &str,
    options: &HashMap<String, String>,
    known: &[&str],
) -> Result<(), FormatError> {
    let mut unknown: Vec<&str> = options
        .keys()
        .map(|k| k.as_str())
        .filter(|k| !known.contains(k))
        .collect();
    if unknown.is_empty() {
        return Ok(());
    }
    unknown.sort_unstable();
    Err(FormatError::SerializationError(format!(
        "Format '{format}' does not support parameters: {}",
        unknown.join(", ")
    )))
}
