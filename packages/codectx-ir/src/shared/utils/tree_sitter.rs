//! Tree-sitter Utility Functions
//!
//! Common utilities for working with tree-sitter AST nodes. Source
//! reconstruction is a byte-slice of the original text; when a node's span
//! cannot be sliced, it degrades to a placeholder token rather than failing.

use tree_sitter::Node;

/// Placeholder stored when source reconstruction is impossible
pub const COMPLEX_VALUE: &str = "'<Complex Value>'";

/// Find a direct child node by kind
#[inline]
pub fn find_child_by_kind<'a>(node: &Node<'a>, kind: &str) -> Option<Node<'a>> {
    for i in 0..node.child_count() {
        if let Some(child) = node.child(i) {
            if child.kind() == kind {
                return Some(child);
            }
        }
    }
    None
}

/// Named children of a node, in source order, with comments skipped
///
/// Comments are named nodes in the Python grammar but are never statements;
/// every statement walk in the crate goes through this helper.
pub fn named_statements<'a>(node: &Node<'a>) -> Vec<Node<'a>> {
    let mut result = Vec::new();
    for i in 0..node.named_child_count() {
        if let Some(child) = node.named_child(i) {
            if child.kind() != "comment" {
                result.push(child);
            }
        }
    }
    result
}

/// Extract text content from a node
#[inline]
pub fn node_text<'a>(node: &Node, source: &'a str) -> Option<&'a str> {
    source.get(node.start_byte()..node.end_byte())
}

/// Extract text content from a node as an owned String
///
/// Degrades to [`COMPLEX_VALUE`] when the span is not sliceable.
#[inline]
pub fn node_text_or_placeholder(node: &Node, source: &str) -> String {
    node_text(node, source)
        .map(str::to_string)
        .unwrap_or_else(|| COMPLEX_VALUE.to_string())
}

/// 1-based line of the first ERROR or missing node, if the tree has one
pub fn first_error_line(root: &Node) -> Option<usize> {
    let mut stack = vec![*root];
    let mut best: Option<usize> = None;
    while let Some(current) = stack.pop() {
        if current.is_error() || current.is_missing() {
            let line = current.start_position().row + 1;
            best = Some(best.map_or(line, |b| b.min(line)));
            continue;
        }
        if !current.has_error() {
            continue;
        }
        for i in (0..current.child_count()).rev() {
            if let Some(child) = current.child(i) {
                stack.push(child);
            }
        }
    }
    best
}

/// Extract a leading documentation string from a block node
///
/// The first statement of the block must be a bare string expression; the
/// returned text is the string content, without quote delimiters.
pub fn extract_docstring(block: &Node, source: &str) -> Option<String> {
    let first = named_statements(block).into_iter().next()?;
    if first.kind() != "expression_statement" {
        return None;
    }
    let string_node = first.child(0)?;
    if string_node.kind() != "string" {
        return None;
    }
    // f-strings parse as string nodes but are not documentation
    if find_child_by_kind(&string_node, "interpolation").is_some() {
        return None;
    }
    string_content(&string_node, source)
}

/// Content of a string node, without quote delimiters
pub fn string_content(string_node: &Node, source: &str) -> Option<String> {
    if let Some(content) = find_child_by_kind(string_node, "string_content") {
        return node_text(&content, source).map(str::to_string);
    }
    // Empty string: string_start directly followed by string_end
    if find_child_by_kind(string_node, "string_start").is_some() {
        return Some(String::new());
    }
    // Older grammars without string_start/string_content nodes
    let raw = node_text(string_node, source)?;
    let trimmed = raw
        .trim_start_matches("\"\"\"")
        .trim_end_matches("\"\"\"")
        .trim_start_matches("'''")
        .trim_end_matches("'''")
        .trim_start_matches('"')
        .trim_end_matches('"')
        .trim_start_matches('\'')
        .trim_end_matches('\'');
    Some(trimmed.to_string())
}

/// Split a `decorated_definition` into decorator texts and the inner node
///
/// Decorator texts are stored without the leading `@`; the renderer adds it
/// back. For any other node kind, returns no decorators and the node itself.
pub fn unwrap_decorated<'a>(node: Node<'a>, source: &str) -> (Vec<String>, Node<'a>) {
    if node.kind() != "decorated_definition" {
        return (Vec::new(), node);
    }
    let mut decorators = Vec::new();
    for i in 0..node.named_child_count() {
        if let Some(child) = node.named_child(i) {
            if child.kind() == "decorator" {
                let text = node_text_or_placeholder(&child, source);
                decorators.push(text.trim_start_matches('@').to_string());
            }
        }
    }
    let inner = node
        .child_by_field_name("definition")
        .unwrap_or(node);
    (decorators, inner)
}
