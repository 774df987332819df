//! # Go Syntax Trees
//!
//! Thin facade over `tree-sitter` with the Go grammar. The rewriter only
//! needs three things from the tree: parse the source, report syntax
//! problems with a location, and enumerate struct field tag literals.

use tree_sitter::{Node, Parser, Tree};

use crate::error::{RewriteError, RewriteResult};

/// Node kinds a `field_declaration` tag child can have. Go allows both
/// backtick and double-quoted string literals in the tag position.
const TAG_KINDS: [&str; 2] = ["raw_string_literal", "interpreted_string_literal"];

/// Parses `source` as a Go compilation unit.
///
/// The grammar is error-tolerant, so a returned tree can still contain
/// error nodes. Callers gate on [`syntax_error`] before trusting it.
pub(crate) fn parse_tree(source: &str) -> RewriteResult<Tree> {
    let mut parser = Parser::new();
    parser
        .set_language(&tree_sitter_go::LANGUAGE.into())
        .map_err(|e| RewriteError::Parse(format!("failed to load Go grammar: {}", e)))?;
    parser
        .parse(source, None)
        .ok_or_else(|| RewriteError::Parse("parser produced no syntax tree".to_string()))
}

/// Returns a human-readable diagnostic for the first syntax problem in the
/// tree, or `None` when the tree is clean.
pub(crate) fn syntax_error(tree: &Tree) -> Option<String> {
    let root = tree.root_node();
    if !root.has_error() {
        return None;
    }

    let node = first_problem(root)?;
    let pos = node.start_position();
    // tree-sitter positions are zero-based; diagnostics are one-based.
    let (line, column) = (pos.row + 1, pos.column + 1);
    if node.is_missing() {
        Some(format!(
            "missing {} at line {}, column {}",
            node.kind(),
            line,
            column
        ))
    } else {
        Some(format!("syntax error at line {}, column {}", line, column))
    }
}

/// Depth-first search for the first error or missing node. Subtrees without
/// errors are pruned, so this touches only the broken path.
fn first_problem(node: Node<'_>) -> Option<Node<'_>> {
    if node.is_error() || node.is_missing() {
        return Some(node);
    }
    if !node.has_error() {
        return None;
    }
    let mut cursor = node.walk();
    let children: Vec<Node<'_>> = node.children(&mut cursor).collect();
    children.into_iter().find_map(first_problem)
}

/// Collects the tag literal of every struct field declaration under `root`,
/// in source order.
pub(crate) fn collect_field_tags(root: Node<'_>) -> Vec<Node<'_>> {
    let mut tags = Vec::new();
    collect_into(root, &mut tags);
    tags
}

fn collect_into<'tree>(node: Node<'tree>, tags: &mut Vec<Node<'tree>>) {
    // `field_declaration` only occurs inside struct field lists, so no
    // extra ancestor check is needed.
    if node.kind() == "field_declaration" {
        if let Some(tag) = node.child_by_field_name("tag") {
            if TAG_KINDS.contains(&tag.kind()) {
                tags.push(tag);
            }
        }
    }
    let mut cursor = node.walk();
    let children: Vec<Node<'tree>> = node.children(&mut cursor).collect();
    for child in children {
        collect_into(child, tags);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TAGGED: &str = "package main\n\ntype User struct {\n\tName string `json:\"name\"`\n\tAge  int\n}\n";

    #[test]
    fn test_parse_clean_source() {
        let tree = parse_tree(TAGGED).unwrap();
        assert!(syntax_error(&tree).is_none());
    }

    #[test]
    fn test_collects_only_tagged_fields() {
        let tree = parse_tree(TAGGED).unwrap();
        let tags = collect_field_tags(tree.root_node());
        assert_eq!(tags.len(), 1);
        assert_eq!(&TAGGED[tags[0].byte_range()], "`json:\"name\"`");
    }

    #[test]
    fn test_syntax_error_reports_location() {
        let broken = "package main\n\ntype User struct {\n";
        let tree = parse_tree(broken).unwrap();
        let diag = syntax_error(&tree).unwrap();
        assert!(diag.contains("line"), "diagnostic was: {}", diag);
    }

    #[test]
    fn test_nested_struct_tags_found() {
        let source = "package main\n\nfunc handler() {\n\ttype payload struct {\n\t\tID int `json:\"id\"`\n\t}\n}\n";
        let tree = parse_tree(source).unwrap();
        let tags = collect_field_tags(tree.root_node());
        assert_eq!(tags.len(), 1);
    }
}
