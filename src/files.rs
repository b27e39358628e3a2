// Copyright (c) 2025 Brian G. Milnes
// SPDX-License-Identifier: MIT

//! Stylesheet discovery and fixed-source write-back

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use walkdir::WalkDir;

/// File extensions recognized as stylesheets.
pub const STYLESHEET_EXTENSIONS: &[&str] = &["less", "css"];

fn is_excluded_dir(name: &str) -> bool {
    name == "target" || name == "attic" || name == "node_modules" || name.starts_with('.')
}

fn is_stylesheet(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| STYLESHEET_EXTENSIONS.contains(&ext))
}

/// Find all stylesheet files under the given paths. Files are listed
/// directly; directories are searched recursively, skipping `target`,
/// `attic`, `node_modules`, and dot-directories.
///
/// Results are sorted for deterministic, reproducible output.
pub fn find_stylesheet_files(paths: &[PathBuf]) -> Vec<PathBuf> {
    let mut files = Vec::new();

    for path in paths {
        if path.is_file() {
            if is_stylesheet(path) {
                files.push(path.clone());
            }
            continue;
        }
        let walker = WalkDir::new(path).into_iter().filter_entry(|entry| {
            entry.depth() == 0
                || entry
                    .file_name()
                    .to_str()
                    .map(|name| !is_excluded_dir(name))
                    .unwrap_or(true)
        });
        for entry in walker.filter_map(|entry| entry.ok()) {
            if entry.file_type().is_file() && is_stylesheet(entry.path()) {
                files.push(entry.path().to_path_buf());
            }
        }
    }

    files.sort();
    files
}

/// Write the fixed source over the original, saving the pristine text
/// to `<path>.bak` first. The backup always precedes the overwrite.
pub fn backup_and_write(path: &Path, original: &str, fixed: &str) -> Result<()> {
    let mut backup = path.as_os_str().to_os_string();
    backup.push(".bak");
    let backup = PathBuf::from(backup);

    fs::write(&backup, original)
        .with_context(|| format!("Failed to write backup: {}", backup.display()))?;
    fs::write(path, fixed)
        .with_context(|| format!("Failed to write fixed file: {}", path.display()))?;
    Ok(())
}
