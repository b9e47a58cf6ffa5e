//! Asset passthrough through the document façade.

use crate::common::{archive_entries, archive_entry, build_archive};
use sigame_babel::{Document, FormatError};
use std::collections::HashMap;

const CONTENT_XML: &str = r#"<package name="With assets"><rounds><round name="R"><themes><theme name="T"><questions>
    <question price="100"><scenario><atom type="image">@photo.jpg</atom></scenario>
    <right><answer>A</answer></right></question>
</questions></theme></themes></round></rounds></package>"#;

fn source_archive() -> Vec<u8> {
    build_archive(&[
        ("content.xml", CONTENT_XML.as_bytes()),
        ("Images/photo.jpg", &[0xff, 0xd8, 0xff, 0xe0, 0x00, 0x10]),
        ("Audio/anthem.mp3", b"ID3\x03\x00fake audio"),
        ("Video/clip.mp4", b"\x00\x00\x00\x18ftypmp42"),
        ("Texts/authors.xml", b"<authors/>"),
        ("[Content_Types].xml", b"<Types/>"),
        ("Thumbs/photo.jpg", b"thumb"),
    ])
}

#[test]
fn test_assets_copied_byte_identical() {
    let source = source_archive();
    let doc = Document::load(source.clone(), "siq").unwrap();
    let converted = doc.to_bytes("jsiq").unwrap();

    let source_assets: Vec<_> = archive_entries(&source)
        .into_iter()
        .filter(|(path, _)| sigame_babel::archive::is_asset_path(path))
        .collect();
    let converted_entries = archive_entries(&converted);

    let converted_assets: Vec<_> = converted_entries
        .iter()
        .filter(|(path, _)| path != "content.json")
        .cloned()
        .collect();
    assert_eq!(converted_assets, source_assets);
    assert_eq!(converted_entries.len(), source_assets.len() + 1);
}

#[test]
fn test_non_asset_entries_not_copied() {
    let doc = Document::load(source_archive(), "siq").unwrap();
    let converted = doc.to_bytes("jsiq").unwrap();

    assert!(archive_entry(&converted, "[Content_Types].xml").is_none());
    assert!(archive_entry(&converted, "Thumbs/photo.jpg").is_none());
    assert!(archive_entry(&converted, "content.xml").is_none());
    assert!(archive_entry(&converted, "content.json").is_some());
}

#[test]
fn test_save_to_disk_and_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let src_path = dir.path().join("quiz.siq");
    let dst_path = dir.path().join("quiz.jsiq.zip");
    std::fs::write(&src_path, source_archive()).unwrap();

    let doc = Document::open(&src_path, "siq").unwrap();
    doc.save(&dst_path, "jsiq").unwrap();

    let reopened = Document::open(&dst_path, "jsiq").unwrap();
    assert_eq!(reopened.package(), doc.package());

    let written = std::fs::read(&dst_path).unwrap();
    assert_eq!(
        archive_entry(&written, "Audio/anthem.mp3").unwrap(),
        b"ID3\x03\x00fake audio"
    );
}

#[test]
fn test_save_with_options() {
    let dir = tempfile::tempdir().unwrap();
    let dst_path = dir.path().join("pretty.siq");
    let doc = Document::load(source_archive(), "siq").unwrap();

    let mut options = HashMap::new();
    options.insert("indent".to_string(), "  ".to_string());
    options.insert("xml-declaration".to_string(), "false".to_string());
    doc.save_with_options(&dst_path, "siq", &options).unwrap();

    let written = std::fs::read(&dst_path).unwrap();
    let xml = String::from_utf8(archive_entry(&written, "content.xml").unwrap()).unwrap();
    assert!(xml.starts_with("<package "));
    assert!(xml.contains("\n  <rounds>\n"));
}

#[test]
fn test_invalid_option_leaves_no_file() {
    let dir = tempfile::tempdir().unwrap();
    let dst_path = dir.path().join("never.siq");
    let doc = Document::load(source_archive(), "siq").unwrap();

    let mut options = HashMap::new();
    options.insert("colour".to_string(), "blue".to_string());
    let err = doc.save_with_options(&dst_path, "siq", &options).unwrap_err();

    assert!(matches!(err, FormatError::SerializationError(_)));
    assert!(!dst_path.exists());
}

#[test]
fn test_open_missing_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = Document::open(dir.path().join("missing.siq"), "siq").unwrap_err();
    assert!(matches!(err, FormatError::Io(_)));
}
