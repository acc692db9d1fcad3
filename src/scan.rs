//! Directory traversal
//!
//! Walks a tree with walkdir and yields candidate files in a stable order.
//! Image files are filtered by extension before any read is attempted.

use anyhow::{ensure, Result};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// File suffixes that are never tokenized
const IMAGE_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "gif", "bmp", "tiff", "webp"];

/// Check whether a path carries an image extension (ASCII case-insensitive)
pub fn is_image_path(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| {
            IMAGE_EXTENSIONS
                .iter()
                .any(|img| ext.eq_ignore_ascii_case(img))
        })
        .unwrap_or(false)
}

/// Collect every non-image regular file under `root`, sorted by file name
///
/// A missing root is fatal; enumeration errors deeper in the tree (e.g. an
/// unreadable subdirectory) skip that entry and the walk continues.
pub fn walk_files(root: &Path) -> Result<Vec<PathBuf>> {
    ensure!(
        root.is_dir(),
        "root directory not found: {}",
        root.display()
    );

    let mut files = Vec::new();
    for entry in WalkDir::new(root).sort_by_file_name() {
        let entry = match entry {
            Ok(e) => e,
            Err(_) => continue,
        };

        if !entry.file_type().is_file() {
            continue;
        }

        let path = entry.into_path();
        if is_image_path(&path) {
            continue;
        }

        files.push(path);
    }

    Ok(files)
}
