#![deny(missing_docs)]

//! # File Discovery
//!
//! Expands the paths given on the command line into the list of Go files
//! to rewrite. Directories are walked recursively; explicitly named files
//! are taken as-is so users can point the tool at any file they like.

use std::path::PathBuf;

use walkdir::WalkDir;

use crate::error::{CliError, CliResult};

/// Collects every Go file reachable from `paths`, sorted and deduplicated.
///
/// A path that is neither a file nor a directory is an error; silently
/// skipping a typo would make a run look clean when nothing was scanned.
pub fn collect_go_files(paths: &[PathBuf]) -> CliResult<Vec<PathBuf>> {
    let mut files = Vec::new();

    for path in paths {
        if path.is_file() {
            // Explicit files bypass the extension filter.
            files.push(path.clone());
        } else if path.is_dir() {
            let walker = WalkDir::new(path).into_iter();
            for entry in walker.filter_map(|e| e.ok()) {
                let entry_path = entry.path();
                if entry_path.extension().is_some_and(|ext| ext == "go") {
                    files.push(entry_path.to_path_buf());
                }
            }
        } else {
            return Err(CliError::General(format!("Path not found: {:?}", path)));
        }
    }

    files.sort();
    files.dedup();
    Ok(files)
}
