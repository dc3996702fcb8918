use crate::models::{Document, SiteData};
use relative_path::{RelativePath, RelativePathBuf};
use std::fs;
use std::path::{Path, PathBuf};

/// Directory under the content root holding one JSON file per document.
pub const PAGES_DIR: &str = "pages";
/// Site-wide shared data, next to the pages directory.
pub const SITE_FILE: &str = "site.json";

#[derive(Debug, thiserror::Error)]
pub enum IoError {
    #[error("File not found: {0}")]
    NotFound(PathBuf),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid JSON in {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("Invalid content directory: {0}")]
    InvalidContentDir(String),
}

/// Read one document, addressed relative to the pages directory.
pub fn read_document(
    relative_path: &RelativePath,
    content_root: &Path,
) -> Result<Document, IoError> {
    let absolute_path = relative_path.to_path(content_root.join(PAGES_DIR));
    if !absolute_path.exists() {
        return Err(IoError::NotFound(absolute_path));
    }
    let json = fs::read_to_string(&absolute_path)?;
    serde_json::from_str(&json).map_err(|source| IoError::Json {
        path: absolute_path,
        source,
    })
}

/// Read shared site data. A content root without `site.json` has none.
pub fn read_site_data(content_root: &Path) -> Result<SiteData, IoError> {
    let path = content_root.join(SITE_FILE);
    if !path.exists() {
        log::debug!(
            "No {SITE_FILE} in {}, using empty site data",
            content_root.display()
        );
        return Ok(SiteData::default());
    }
    let json = fs::read_to_string(&path)?;
    serde_json::from_str(&json).map_err(|source| IoError::Json { path, source })
}

/// All document files under the pages directory, relative to it and sorted.
pub fn scan_documents(content_root: &Path) -> Result<Vec<RelativePathBuf>, IoError> {
    validate_content_dir(content_root)?;
    let pages_root = content_root.join(PAGES_DIR);

    let mut files = Vec::new();
    scan_directory_recursive(&pages_root, &mut files)?;

    let mut documents: Vec<_> = files
        .iter()
        .filter_map(|file| file.strip_prefix(&pages_root).ok())
        .filter_map(|relative| RelativePathBuf::from_path(relative).ok())
        .collect();
    documents.sort();
    Ok(documents)
}

fn scan_directory_recursive(dir: &Path, files: &mut Vec<PathBuf>) -> Result<(), IoError> {
    let entries = fs::read_dir(dir)?;

    for entry in entries {
        let entry = entry?;
        let path = entry.path();

        if path.is_dir() {
            scan_directory_recursive(&path, files)?;
        } else if let Some(ext) = path.extension()
            && ext == "json"
        {
            files.push(path);
        }
    }

    Ok(())
}

/// A content root must be a directory with a `pages` subdirectory.
pub fn validate_content_dir(path: &Path) -> Result<(), IoError> {
    if !path.is_dir() {
        return Err(IoError::InvalidContentDir(
            "Directory does not exist".to_string(),
        ));
    }
    if !path.join(PAGES_DIR).is_dir() {
        return Err(IoError::InvalidContentDir(format!(
            "missing `{PAGES_DIR}` directory in {}",
            path.display()
        )));
    }

    Ok(())
}
