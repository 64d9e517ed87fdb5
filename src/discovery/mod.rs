//! # Discovery Module
//!
//! @title Manifest and Source File Discovery
//! @author Ramprasad
//!
//! Walks a directory tree and collects the files the scanner cares about:
//! `package.json` manifests and front-end source files. Any directory named
//! `node_modules` is pruned from the walk entirely.
//!
//! Traversal order is deterministic: entries within a directory are visited
//! sorted by file name, so two scans of an unchanged tree yield identical
//! sequences.

use std::path::{Path, PathBuf};
use walkdir::{DirEntry, WalkDir};

/// File name of the dependency manifest.
pub const MANIFEST_FILE_NAME: &str = "package.json";

/// Directory holding installed packages, never scanned.
pub const DEPENDENCY_CACHE_DIR: &str = "node_modules";

/// Source file extensions searched by the directive heuristic.
pub const SOURCE_EXTENSIONS: [&str; 4] = ["js", "jsx", "ts", "tsx"];

/// Collects every `package.json` below `root`.
///
/// If `root` is itself a manifest file, it is returned as the only entry.
/// Unreadable directories are skipped silently.
///
/// # Arguments
///
/// * `root` - The directory (or manifest file) to scan
///
/// # Returns
///
/// Manifest paths in traversal order.
pub fn find_manifests(root: &Path) -> Vec<PathBuf> {
    if root.is_file() {
        return if is_manifest(root) {
            vec![root.to_path_buf()]
        } else {
            Vec::new()
        };
    }

    walk(root)
        .filter(|e| e.file_type().is_file() && is_manifest(e.path()))
        .map(|e| e.into_path())
        .collect()
}

/// Collects up to `limit` source files below `dir`.
///
/// Candidates are gathered in traversal order and the walk stops as soon as
/// the cap is reached.
pub fn find_source_files(dir: &Path, limit: usize) -> Vec<PathBuf> {
    walk(dir)
        .filter(|e| e.file_type().is_file() && is_source_file(e.path()))
        .map(|e| e.into_path())
        .take(limit)
        .collect()
}

/// Returns true if any component of `path` is the dependency cache directory.
pub fn is_in_dependency_cache(path: &Path) -> bool {
    path.components()
        .any(|c| c.as_os_str() == DEPENDENCY_CACHE_DIR)
}

fn walk(root: &Path) -> impl Iterator<Item = DirEntry> {
    WalkDir::new(root)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|e| e.depth() == 0 || !is_cache_dir(e))
        .filter_map(|entry| match entry {
            Ok(e) => Some(e),
            Err(err) => {
                log::debug!("Skipping unreadable entry: {}", err);
                None
            }
        })
}

fn is_cache_dir(entry: &DirEntry) -> bool {
    entry.file_type().is_dir() && entry.file_name() == DEPENDENCY_CACHE_DIR
}

fn is_manifest(path: &Path) -> bool {
    path.file_name().map_or(false, |name| name == MANIFEST_FILE_NAME)
        && !is_in_dependency_cache(path)
}

fn is_source_file(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map_or(false, |ext| SOURCE_EXTENSIONS.contains(&ext))
}
