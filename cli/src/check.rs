#![deny(missing_docs)]

//! # Check Command
//!
//! Dry-run counterpart to `fix`: reports which files would be rewritten
//! without modifying anything on disk. Exits nonzero when files need
//! rewriting, so CI can gate on tag hygiene.

use std::fs;
use std::path::PathBuf;

use omitempty_core::rewrite_source;

use crate::error::{CliError, CliResult};
use crate::report::RunReport;
use crate::walk::collect_go_files;

/// Arguments for the check command.
#[derive(clap::Args, Debug, Clone)]
pub struct CheckArgs {
    /// Files or directories to check. Directories are walked recursively
    /// for `.go` files.
    #[clap(required = true)]
    pub paths: Vec<PathBuf>,

    /// Emit the run report as JSON instead of the text summary.
    #[clap(long)]
    pub json: bool,
}

/// Executes the check command. Returns whether every file is clean.
///
/// # Arguments
///
/// * `args` - Command arguments.
pub fn execute(args: &CheckArgs) -> CliResult<bool> {
    let files = collect_go_files(&args.paths)?;
    let mut report = RunReport::default();

    for path in &files {
        let source = match fs::read_to_string(path) {
            Ok(source) => source,
            Err(e) => {
                eprintln!("Warning: failed to read {}: {}", path.display(), e);
                report.record_failure();
                continue;
            }
        };

        match rewrite_source(&source) {
            Ok(rewritten) => {
                if rewritten.tags_rewritten > 0 && !args.json {
                    println!("{}", path.display());
                }
                report.record(path, rewritten.tags_rewritten);
            }
            Err(e) => {
                let e = e.bubble(&path.display().to_string());
                eprintln!("Warning: {}", e);
                report.record_failure();
            }
        }
    }

    if args.json {
        println!("{}", report.to_json()?);
    } else if report.files_changed > 0 {
        println!(
            "{} of {} files need rewriting",
            report.files_changed, report.files_scanned
        );
    } else {
        println!("{} files clean", report.files_scanned);
    }

    if report.files_failed > 0 {
        return Err(CliError::General(format!(
            "{} of {} files could not be checked",
            report.files_failed, report.files_scanned
        )));
    }

    Ok(report.files_changed == 0)
}

#[cfg(test)]
mod tests {
    use super::*;

    const TAGGED: &str = "package main\n\ntype User struct {\n\tName string `json:\"name\"`\n}\n";

    fn args_for(paths: Vec<PathBuf>) -> CheckArgs {
        CheckArgs { paths, json: false }
    }

    #[test]
    fn test_flags_dirty_file_without_touching_it() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("user.go");
        fs::write(&path, TAGGED).unwrap();

        let clean = execute(&args_for(vec![path.clone()])).unwrap();
        assert!(!clean);
        assert_eq!(fs::read_to_string(&path).unwrap(), TAGGED);
    }

    #[test]
    fn test_passes_clean_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("user.go");
        fs::write(
            &path,
            "package main\n\ntype User struct {\n\tName string `json:\"name,omitempty\"`\n}\n",
        )
        .unwrap();

        let clean = execute(&args_for(vec![path])).unwrap();
        assert!(clean);
    }

    #[test]
    fn test_unparseable_file_is_failure() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.go");
        fs::write(&path, "package main\n\ntype User struct {\n").unwrap();

        let err = execute(&args_for(vec![path])).unwrap_err();
        assert!(matches!(err, CliError::General(_)));
    }
}
