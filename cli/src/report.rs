#![deny(missing_docs)]

//! # Run Reports
//!
//! Aggregates per-file results into a run summary that can be printed as
//! text or serialized to JSON with `--json`.

use std::path::Path;

use serde::Serialize;

use crate::error::CliResult;

/// Result for a single rewritten file.
#[derive(Debug, Serialize)]
pub struct FileReport {
    /// Path as given on the command line or found by the walker.
    pub path: String,
    /// Number of tags modified in this file.
    pub tags_rewritten: usize,
}

/// Accumulated results for one invocation.
#[derive(Debug, Default, Serialize)]
pub struct RunReport {
    /// Total files examined.
    pub files_scanned: usize,
    /// Files that were (or would be) modified.
    pub files_changed: usize,
    /// Files that could not be processed.
    pub files_failed: usize,
    /// Total tags modified across all files.
    pub tags_rewritten: usize,
    /// Per-file breakdown, changed files only.
    pub files: Vec<FileReport>,
}

impl RunReport {
    /// Records a successfully processed file. Files with zero rewritten
    /// tags count as scanned but do not appear in the breakdown.
    pub fn record(&mut self, path: &Path, tags_rewritten: usize) {
        self.files_scanned += 1;
        if tags_rewritten > 0 {
            self.files_changed += 1;
            self.tags_rewritten += tags_rewritten;
            self.files.push(FileReport {
                path: path.display().to_string(),
                tags_rewritten,
            });
        }
    }

    /// Records a file that failed to process.
    pub fn record_failure(&mut self) {
        self.files_scanned += 1;
        self.files_failed += 1;
    }

    /// Renders the report as pretty-printed JSON.
    pub fn to_json(&self) -> CliResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
