//! Package documents backed by an origin archive.
//!
//! A [`Document`] pairs a decoded [`Package`] with the bytes of the archive it
//! was loaded from. Saving re-encodes the package into a brand-new archive and
//! carries the origin's assets over unchanged, so a document can only be
//! obtained by loading one.

use crate::archive;
use crate::error::FormatError;
use crate::model::Package;
use crate::registry::FormatRegistry;
use std::collections::HashMap;
use std::fs::{self, File};
use std::io::{BufWriter, Cursor, Seek, Write};
use std::path::Path;
use tracing::debug;
use zip::{ZipArchive, ZipWriter};

/// A loaded package together with its origin archive.
#[derive(Debug, Clone)]
pub struct Document {
    package: Package,
    origin: Vec<u8>,
}

impl Document {
    /// Decodes the content entry of an in-memory archive.
    pub fn load(bytes: Vec<u8>, format: &str) -> Result<Self, FormatError> {
        let registry = FormatRegistry::default();
        let fmt = registry.get(format)?;

        let content = {
            let mut archive = ZipArchive::new(Cursor::new(bytes.as_slice()))?;
            archive::read_content_entry(&mut archive, fmt.content_entry())?
        };
        let package = fmt.parse(&content)?;
        debug!(
            format = fmt.name(),
            rounds = package.rounds.len(),
            "loaded package"
        );

        Ok(Document {
            package,
            origin: bytes,
        })
    }

    /// Reads an archive from disk and decodes it.
    pub fn open(path: impl AsRef<Path>, format: &str) -> Result<Self, FormatError> {
        let path = path.as_ref();
        debug!(path = %path.display(), format, "opening package");
        Self::load(fs::read(path)?, format)
    }

    pub fn package(&self) -> &Package {
        &self.package
    }

    pub fn package_mut(&mut self) -> &mut Package {
        &mut self.package
    }

    pub fn into_package(self) -> Package {
        self.package
    }

    /// Raw bytes of the archive this document was loaded from.
    pub fn origin(&self) -> &[u8] {
        &self.origin
    }

    /// Writes the document to `path` in the given format.
    pub fn save(&self, path: impl AsRef<Path>, format: &str) -> Result<(), FormatError> {
        self.save_with_options(path, format, &HashMap::new())
    }

    /// Writes the document to `path`, passing serializer options to the format.
    ///
    /// The content is encoded before the file is created, so an encoding error
    /// leaves no file behind. Later failures may leave a partial archive.
    pub fn save_with_options(
        &self,
        path: impl AsRef<Path>,
        format: &str,
        options: &HashMap<String, String>,
    ) -> Result<(), FormatError> {
        let path = path.as_ref();
        let registry = FormatRegistry::default();
        let fmt = registry.get(format)?;
        let content = fmt.serialize_with_options(&self.package, options)?;

        let file = File::create(path)?;
        let mut writer = self.write_encoded(BufWriter::new(file), fmt.content_entry(), &content)?;
        writer.flush()?;
        debug!(path = %path.display(), format, "saved package");
        Ok(())
    }

    /// Writes the archive into any seekable writer and returns the writer.
    pub fn write_to<W: Write + Seek>(
        &self,
        writer: W,
        format: &str,
        options: &HashMap<String, String>,
    ) -> Result<W, FormatError> {
        let registry = FormatRegistry::default();
        let fmt = registry.get(format)?;
        let content = fmt.serialize_with_options(&self.package, options)?;
        self.write_encoded(writer, fmt.content_entry(), &content)
    }

    /// Encodes the document into a fresh in-memory archive.
    pub fn to_bytes(&self, format: &str) -> Result<Vec<u8>, FormatError> {
        let cursor = self.write_to(Cursor::new(Vec::new()), format, &HashMap::new())?;
        Ok(cursor.into_inner())
    }

    fn write_encoded<W: Write + Seek>(
        &self,
        writer: W,
        entry: &str,
        content: &str,
    ) -> Result<W, FormatError> {
        let mut origin = ZipArchive::new(Cursor::new(self.origin.as_slice()))?;
        let mut dest = ZipWriter::new(writer);
        archive::write_content_entry(&mut dest, entry, content.as_bytes())?;
        archive::copy_assets(&mut origin, &mut dest)?;
        Ok(dest.finish()?)
    }
}
