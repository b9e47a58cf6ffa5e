//! Package archive access.
//!
//! A package archive holds exactly one content entry (`content.xml` or
//! `content.json`) plus asset entries under [`ASSET_DIRECTORIES`]. Assets are
//! never decoded: they are copied raw, compressed bytes and all, from the origin
//! archive into the destination.

use crate::error::FormatError;
use std::io::{Read, Seek, Write};
use tracing::{debug, info, trace};
use zip::write::SimpleFileOptions;
use zip::{ZipArchive, ZipWriter};

/// Entry prefixes that hold package assets.
pub const ASSET_DIRECTORIES: [&str; 4] = ["Texts/", "Images/", "Audio/", "Video/"];

const MAX_PREALLOCATION: u64 = 1 << 20;

/// True when `path` lives under one of the asset directories.
pub fn is_asset_path(path: &str) -> bool {
    ASSET_DIRECTORIES
        .iter()
        .any(|prefix| path.starts_with(prefix))
}

/// Reads the whole content entry into memory.
pub fn read_content_entry<R: Read + Seek>(
    archive: &mut ZipArchive<R>,
    entry: &str,
) -> Result<Vec<u8>, FormatError> {
    let mut file = archive.by_name(entry)?;
    let mut content = Vec::with_capacity(capacity_hint(file.size()));
    file.read_to_end(&mut content)?;
    debug!(entry, bytes = content.len(), "read content entry");
    Ok(content)
}

// The declared size comes from the archive header and is not trusted.
fn capacity_hint(declared: u64) -> usize {
    usize::try_from(declared.min(MAX_PREALLOCATION)).unwrap_or(0)
}

/// Writes the content entry as a new deflated file.
pub fn write_content_entry<W: Write + Seek>(
    dest: &mut ZipWriter<W>,
    entry: &str,
    content: &[u8],
) -> Result<(), FormatError> {
    dest.start_file(entry, SimpleFileOptions::default())?;
    dest.write_all(content)?;
    debug!(entry, bytes = content.len(), "wrote content entry");
    Ok(())
}

/// Copies every asset entry of `origin` into `dest` under the same path.
///
/// Returns the number of entries copied. A failure midway leaves the entries
/// copied so far in `dest`.
pub fn copy_assets<R, W>(
    origin: &mut ZipArchive<R>,
    dest: &mut ZipWriter<W>,
) -> Result<usize, FormatError>
where
    R: Read + Seek,
    W: Write + Seek,
{
    let mut copied = 0;
    for idx in 0..origin.len() {
        let entry = origin.by_index_raw(idx)?;
        if !is_asset_path(entry.name()) {
            continue;
        }
        trace!(name = entry.name(), size = entry.size(), "copying asset");
        dest.raw_copy_file(entry)?;
        copied += 1;
    }
    info!(copied, "copied package assets");
    Ok(copied)
}
