use std::fs;
use tempfile::TempDir;

use crate::io::PAGES_DIR;

/// Empty content root with its `pages` directory in place.
pub fn create_test_content_dir() -> TempDir {
    let dir = TempDir::new().expect("Failed to create temp dir");
    fs::create_dir(dir.path().join(PAGES_DIR)).expect("Failed to create pages dir");
    dir
}

/// Write a page file, creating intermediate directories.
pub fn create_test_page(content_dir: &TempDir, relative: &str, content: &str) {
    let path = content_dir.path().join(PAGES_DIR).join(relative);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).expect("Failed to create page dir");
    }
    fs::write(path, content).expect("Failed to write page");
}
