//! Test fixtures for dashboard service tests

use std::fs;
use std::path::Path;
use tempfile::TempDir;

use crate::catalogue::{DOWNLOADS, MAP_IMAGE};

/// Bytes standing in for a PDF; content is never validated
pub const FAKE_PDF: &[u8] = b"%PDF-1.4\n% test fixture\n";

/// Bytes standing in for the map PNG
pub const FAKE_PNG: &[u8] = b"\x89PNG\r\n\x1a\n";

/// Assets directory holding every catalogued file
pub fn create_full_assets_dir() -> TempDir {
    let dir = TempDir::new().unwrap();
    for asset in DOWNLOADS.iter() {
        write_file(dir.path(), asset.file_name, FAKE_PDF);
    }
    write_file(dir.path(), MAP_IMAGE, FAKE_PNG);
    dir
}

/// Assets directory with nothing in it
pub fn create_empty_assets_dir() -> TempDir {
    TempDir::new().unwrap()
}

pub fn write_file(base: &Path, relative: &str, content: &[u8]) {
    let path = base.join(relative);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, content).unwrap();
}
