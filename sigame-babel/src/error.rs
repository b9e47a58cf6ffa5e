//! Error types for format and archive operations

use thiserror::Error;

/// Errors that can occur while loading, converting or saving a package
#[derive(Debug, Error)]
pub enum FormatError {
    /// Format tag not found in registry, or not detectable from a filename
    #[error("Format '{0}' not found")]
    FormatNotFound(String),
    /// Malformed or structurally incomplete content entry
    #[error("Parse error: {0}")]
    ParseError(String),
    /// Error during serialization
    #[error("Serialization error: {0}")]
    SerializationError(String),
    /// File could not be read or written
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// Archive could not be opened, read or written
    #[error("Archive error: {0}")]
    Archive(#[from] zip::result::ZipError),
}

impl FormatError {
    /// Shorthand used by the codecs to build a [`FormatError::ParseError`].
    pub fn parse(msg: impl Into<String>) -> Self {
        FormatError::ParseError(msg.into())
    }

    /// True for the IO kind (filesystem or archive failures).
    pub fn is_io(&self) -> bool {
        matches!(self, FormatError::Io(_) | FormatError::Archive(_))
    }
}
