//! Structured format implementation (`.jsiq.zip`, `content.json`)
//!
//! A JSON rendition of the package tree. Entities are not tagged with their type;
//! the parser infers each object's entity from its discriminator key (see
//! [`parser`]). Unlike the markup format, a `simple` question type that carries
//! parameters is preserved here.

pub mod parser;
pub mod serializer;

use crate::error::FormatError;
use crate::format::{bool_option, reject_unknown_options, Format};
use crate::model::Package;
use std::collections::HashMap;

pub const CONTENT_ENTRY: &str = "content.json";

/// Format implementation for the structured encoding
pub struct StructuredFormat;

impl Format for StructuredFormat {
    fn name(&self) -> &str {
        "jsiq"
    }

    fn description(&self) -> &str {
        "SIGame package with JSON content"
    }

    fn file_extensions(&self) -> &[&str] {
        &["jsiq.zip"]
    }

    fn aliases(&self) -> &[&str] {
        &["jsiq.zip"]
    }

    fn content_entry(&self) -> &str {
        CONTENT_ENTRY
    }

    fn parse(&self, source: &[u8]) -> Result<Package, FormatError> {
        parser::parse_package(source)
    }

    fn serialize(&self, package: &Package) -> Result<String, FormatError> {
        serializer::serialize_package(package, false)
    }

    fn serialize_with_options(
        &self,
        package: &Package,
        options: &HashMap<String, String>,
    ) -> Result<String, FormatError> {
        reject_unknown_options(self.name(), options, &["pretty"])?;
        serializer::serialize_package(package, bool_option(options, "pretty", false)?)
    }
}
