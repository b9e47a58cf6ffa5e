//! Markup format implementation (`.siq`, `content.xml`)
//!
//! The native SIGame encoding: a tag/attribute tree rooted at `<package>`.
//!
//! # Library Choice
//!
//! Parsing uses `roxmltree`, a read-only DOM that gives direct access to children
//! and attributes. Serialization writes tags directly; the tree is small and the
//! layout fixed, so no XML writer crate is needed.
//!
//! # Element Mapping
//!
//! | Model         | Markup                                                   |
//! |---------------|----------------------------------------------------------|
//! | Package       | `<package name version id ... difficulty>`               |
//! | tags          | `<tags><tag>..</tag></tags>`                             |
//! | Info          | `<info><authors/><sources/><comments/></info>`           |
//! | Round         | `<rounds><round name [type="final"]>`                    |
//! | Theme         | `<themes><theme name>`                                   |
//! | Question      | `<questions><question price>`                            |
//! | QuestionType  | `<type name><param name>value</param></type>`            |
//! | Atom          | `<scenario><atom [time] [type]>text</atom></scenario>`   |
//! | answers       | `<right><answer/></right>`, `<wrong><answer/></wrong>`   |
//!
//! # Lossy Conversions
//!
//! A question type named `simple` is never written, so any parameters it carries
//! are dropped. Only the structured format can represent them.

pub mod parser;
pub mod serializer;

use crate::error::FormatError;
use crate::format::{bool_option, reject_unknown_options, Format};
use crate::model::Package;
use serializer::MarkupOptions;
use std::collections::HashMap;

pub const CONTENT_ENTRY: &str = "content.xml";

/// Format implementation for the markup encoding
pub struct MarkupFormat;

impl Format for MarkupFormat {
    fn name(&self) -> &str {
        "siq"
    }

    fn description(&self) -> &str {
        "SIGame package with XML content"
    }

    fn file_extensions(&self) -> &[&str] {
        &["siq"]
    }

    fn content_entry(&self) -> &str {
        CONTENT_ENTRY
    }

    fn parse(&self, source: &[u8]) -> Result<Package, FormatError> {
        parser::parse_package(source)
    }

    fn serialize(&self, package: &Package) -> Result<String, FormatError> {
        Ok(serializer::serialize_package(
            package,
            &MarkupOptions::default(),
        ))
    }

    fn serialize_with_options(
        &self,
        package: &Package,
        options: &HashMap<String, String>,
    ) -> Result<String, FormatError> {
        reject_unknown_options(self.name(), options, &["indent", "xml-declaration"])?;
        let defaults = MarkupOptions::default();
        let markup_options = MarkupOptions {
            indent: options.get("indent").cloned().unwrap_or(defaults.indent),
            xml_declaration: bool_option(options, "xml-declaration", defaults.xml_declaration)?,
        };
        Ok(serializer::serialize_package(package, &markup_options))
    }
}
