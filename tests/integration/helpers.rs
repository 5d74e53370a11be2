//! Shared helpers for integration tests

use std::fs;
use std::path::{Path, PathBuf};

/// Directory holding test fixtures.
pub fn fixtures_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("tests").join("fixtures")
}

/// Read a fixture file as a string.
pub fn load_fixture(name: &str) -> String {
    fs::read_to_string(fixtures_dir().join(name))
        .unwrap_or_else(|e| panic!("Failed to load fixture {}: {}", name, e))
}

/// Names of the `.css` files in `dir`, sorted, excluding `except`.
pub fn css_files(dir: &Path, except: &str) -> Vec<String> {
    let mut names: Vec<String> = fs::read_dir(dir)
        .unwrap()
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.file_name().to_string_lossy().into_owned())
        .filter(|name| name.ends_with(".css") && name != except)
        .collect();
    names.sort();
    names
}
