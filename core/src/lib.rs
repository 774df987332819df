#![deny(missing_docs)]

//! # Omitempty Core
//!
//! Core library for adding `omitempty` to `json:` struct tags in Go source.
//!
//! The crate exposes two layers: [`rewrite_tag`] transforms a single raw
//! tag literal, and [`rewrite_source`] / [`add_omitempty_to_file`] apply
//! that transformation to whole files through span-level edits that leave
//! all other formatting intact.

/// Shared error types.
pub mod error;

/// Pure struct tag transformation.
pub mod tag;

/// Whole-source and file rewriting.
pub mod rewriter;

mod syntax;

pub use error::{RewriteError, RewriteResult};
pub use rewriter::{add_omitempty_to_file, rewrite_source, RewriteOutcome, RewrittenSource};
pub use tag::{rewrite_tag, OMIT_OPTION};
