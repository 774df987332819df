#![deny(missing_docs)]

//! # Omitempty CLI
//!
//! Command Line Interface for adding `omitempty` to `json:` struct tags in
//! Go source trees.
//!
//! Supported Commands:
//! - `fix`: Rewrites files in place.
//! - `check`: Reports files that would be rewritten, without touching them.

use clap::{Parser, Subcommand};

use crate::error::CliResult;

mod check;
mod error;
mod fix;
mod report;
mod walk;

#[derive(Parser, Debug)]
#[clap(
    author,
    version,
    about = "Adds omitempty to json struct tags in Go source files"
)]
struct Cli {
    #[clap(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Rewrites Go files in place, adding omitempty where it is missing.
    Fix(fix::FixArgs),
    /// Reports files that need rewriting; exits nonzero if any do.
    Check(check::CheckArgs),
}

fn main() -> CliResult<()> {
    let cli = Cli::parse();

    match &cli.command {
        Commands::Fix(args) => {
            fix::execute(args)?;
        }
        Commands::Check(args) => {
            let clean = check::execute(args)?;
            if !clean {
                std::process::exit(1);
            }
        }
    }

    Ok(())
}
