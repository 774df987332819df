#![deny(missing_docs)]

//! # Fix Command
//!
//! Rewrites Go files in place, adding `omitempty` to every `json:` struct
//! tag that lacks it.
//!
//! 1. **Discover**: expand the given paths into a list of Go files.
//! 2. **Rewrite**: run each file through the core rewriter.
//! 3. **Report**: print a summary, or the full report as JSON.
//!
//! A file that fails to parse is reported and skipped; the remaining files
//! are still processed so one broken file does not block a whole tree.

use std::path::PathBuf;

use omitempty_core::add_omitempty_to_file;

use crate::error::{CliError, CliResult};
use crate::report::RunReport;
use crate::walk::collect_go_files;

/// Arguments for the fix command.
#[derive(clap::Args, Debug, Clone)]
pub struct FixArgs {
    /// Files or directories to rewrite. Directories are walked recursively
    /// for `.go` files.
    #[clap(required = true)]
    pub paths: Vec<PathBuf>,

    /// Emit the run report as JSON instead of the text summary.
    #[clap(long)]
    pub json: bool,
}

/// Executes the fix command.
///
/// # Arguments
///
/// * `args` - Command arguments.
pub fn execute(args: &FixArgs) -> CliResult<()> {
    let files = collect_go_files(&args.paths)?;
    let mut report = RunReport::default();

    for path in &files {
        match add_omitempty_to_file(path) {
            Ok(outcome) => {
                if outcome.changed && !args.json {
                    println!("rewrote {} ({} tags)", path.display(), outcome.tags_rewritten);
                }
                report.record(path, outcome.tags_rewritten);
            }
            Err(e) => {
                eprintln!("Warning: {}", e);
                report.record_failure();
            }
        }
    }

    if args.json {
        println!("{}", report.to_json()?);
    } else {
        println!(
            "{} files scanned, {} rewritten, {} tags updated",
            report.files_scanned, report.files_changed, report.tags_rewritten
        );
    }

    if report.files_failed > 0 {
        return Err(CliError::General(format!(
            "{} of {} files could not be rewritten",
            report.files_failed, report.files_scanned
        )));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    const TAGGED: &str = "package main\n\ntype User struct {\n\tName string `json:\"name\"`\n}\n";

    fn args_for(paths: Vec<PathBuf>) -> FixArgs {
        FixArgs { paths, json: false }
    }

    #[test]
    fn test_rewrites_tree_and_is_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("user.go");
        fs::write(&path, TAGGED).unwrap();

        execute(&args_for(vec![dir.path().to_path_buf()])).unwrap();
        let rewritten = fs::read_to_string(&path).unwrap();
        assert!(rewritten.contains("`json:\"name,omitempty\"`"));

        // Second run leaves the file as-is.
        execute(&args_for(vec![dir.path().to_path_buf()])).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), rewritten);
    }

    #[test]
    fn test_broken_file_reported_but_others_processed() {
        let dir = tempfile::tempdir().unwrap();
        let good = dir.path().join("good.go");
        let bad = dir.path().join("bad.go");
        fs::write(&good, TAGGED).unwrap();
        fs::write(&bad, "package main\n\ntype User struct {\n").unwrap();

        let err = execute(&args_for(vec![dir.path().to_path_buf()])).unwrap_err();
        assert!(matches!(err, CliError::General(_)));
        assert!(fs::read_to_string(&good)
            .unwrap()
            .contains("`json:\"name,omitempty\"`"));
    }

    #[test]
    fn test_json_mode_succeeds() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("user.go");
        fs::write(&path, TAGGED).unwrap();

        let args = FixArgs {
            paths: vec![path],
            json: true,
        };
        execute(&args).unwrap();
    }
}
