#![deny(missing_docs)]

//! # Source Rewriting
//!
//! Drives the full pipeline: parse the Go source, rewrite every struct
//! field tag through [`crate::tag::rewrite_tag`], splice the results back
//! into the original text, and (for the file entry point) persist the
//! result.
//!
//! Rewrites are pure span replacements on the original bytes. Untouched
//! source keeps its exact formatting, comments included, because nothing
//! is ever re-rendered from the tree.

use std::fs;
use std::fs::File;
use std::io::Write;
use std::ops::Range;
use std::path::Path;

use serde::Serialize;

use crate::error::{RewriteError, RewriteResult};
use crate::syntax;
use crate::tag::{rewrite_tag, OMIT_OPTION};

/// Result of rewriting a source buffer in memory.
#[derive(Debug, Clone)]
pub struct RewrittenSource {
    /// The full rewritten text. Equal to the input when no tag changed.
    pub text: String,
    /// Number of tag literals that were actually modified.
    pub tags_rewritten: usize,
}

/// Result of rewriting a file on disk.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct RewriteOutcome {
    /// Number of tag literals that were actually modified.
    pub tags_rewritten: usize,
    /// Whether the file was written back. False when every tag was already
    /// in its final form.
    pub changed: bool,
}

/// One pending span replacement, in source order.
struct TagEdit {
    range: Range<usize>,
    replacement: String,
}

/// Rewrites every struct field tag in `source`, returning the new text.
///
/// Fails with [`RewriteError::Parse`] when the input is not valid Go, and
/// with [`RewriteError::Format`] when the spliced output no longer parses.
/// The latter indicates a rewrite bug rather than a user error, but callers
/// get a diagnostic either way instead of corrupted output.
pub fn rewrite_source(source: &str) -> RewriteResult<RewrittenSource> {
    let tree = syntax::parse_tree(source)?;
    if let Some(diag) = syntax::syntax_error(&tree) {
        return Err(RewriteError::Parse(diag));
    }

    let mut edits = Vec::new();
    for tag in syntax::collect_field_tags(tree.root_node()) {
        let range = tag.byte_range();
        let raw = &source[range.clone()];
        let rewritten = rewrite_tag(raw);
        if rewritten != raw {
            edits.push(TagEdit {
                range,
                replacement: rewritten,
            });
        }
    }

    if edits.is_empty() {
        return Ok(RewrittenSource {
            text: source.to_string(),
            tags_rewritten: 0,
        });
    }

    // The walk reaches a field before the fields of its own anonymous struct
    // type, yet that field's tag sits after the nested ones in the source.
    edits.sort_by_key(|edit| edit.range.start);

    let tags_rewritten = edits.len();
    let text = splice(source, &edits);

    // Tag literals cannot break the surrounding syntax, so a parse failure
    // here means the splice itself went wrong.
    let check = syntax::parse_tree(&text)?;
    if let Some(diag) = syntax::syntax_error(&check) {
        return Err(RewriteError::Format(format!(
            "rewritten source is no longer valid Go: {}",
            diag
        )));
    }

    Ok(RewrittenSource {
        text,
        tags_rewritten,
    })
}

/// Replaces each edit's byte range with its replacement text. Edits are in
/// source order and disjoint, so a single forward pass suffices.
fn splice(source: &str, edits: &[TagEdit]) -> String {
    let mut out = String::with_capacity(source.len() + edits.len() * (OMIT_OPTION.len() + 1));
    let mut cursor = 0;
    for edit in edits {
        debug_assert!(edit.range.start >= cursor, "edits out of order");
        out.push_str(&source[cursor..edit.range.start]);
        out.push_str(&edit.replacement);
        cursor = edit.range.end;
    }
    out.push_str(&source[cursor..]);
    out
}

/// Rewrites the Go file at `path` in place, adding `omitempty` to every
/// `json:` struct tag that lacks it.
///
/// Files that need no change are left untouched on disk. On any error the
/// original file is preserved, except when the write itself fails partway;
/// the file is truncated before writing, so an interrupted write can leave
/// it incomplete.
// TODO: write to a temp file and rename over the target to survive partial writes.
pub fn add_omitempty_to_file(path: &Path) -> RewriteResult<RewriteOutcome> {
    let source = fs::read_to_string(path)
        .map_err(|e| RewriteError::from(e).bubble(&format!("failed to read {}", path.display())))?;

    let rewritten = rewrite_source(&source).map_err(|e| e.bubble(&path.display().to_string()))?;

    if rewritten.tags_rewritten == 0 {
        return Ok(RewriteOutcome {
            tags_rewritten: 0,
            changed: false,
        });
    }

    let mut file = File::create(path).map_err(|e| {
        RewriteError::from(e).bubble(&format!("failed to create {}", path.display()))
    })?;
    file.write_all(rewritten.text.as_bytes()).map_err(|e| {
        RewriteError::from(e).bubble(&format!("failed to write {}", path.display()))
    })?;

    Ok(RewriteOutcome {
        tags_rewritten: rewritten.tags_rewritten,
        changed: true,
    })
}
