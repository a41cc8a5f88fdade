/*
 * Variable Assignment Extractor
 *
 * Dissects a top-level (or class-level) assignment into the name targets it
 * binds and the reconstructed value text. Chained assignments (a = b = 1)
 * bind every identifier target to the same value. Annotated and augmented
 * assignments are not plain name bindings and are skipped.
 */

use crate::shared::utils::tree_sitter::node_text_or_placeholder;
use tree_sitter::Node;

/// Name targets plus the rendered value of one assignment statement
#[derive(Debug, Clone)]
pub struct AssignmentBinding {
    pub names: Vec<String>,
    pub value_text: String,
}

/// Dissect an `assignment` node into its bindings
///
/// Returns `None` when the assignment binds no plain identifier, or carries
/// a type annotation.
pub fn extract_assignment(node: &Node, source: &str) -> Option<AssignmentBinding> {
    if node.kind() != "assignment" {
        return None;
    }
    if node.child_by_field_name("type").is_some() {
        return None;
    }

    let mut names = Vec::new();
    let mut current = *node;
    let value = loop {
        if let Some(left) = current.child_by_field_name("left") {
            if left.kind() == "identifier" {
                names.push(node_text_or_placeholder(&left, source));
            }
        }
        let right = current.child_by_field_name("right")?;
        if right.kind() == "assignment" {
            current = right;
        } else {
            break right;
        }
    };

    if names.is_empty() {
        return None;
    }

    Some(AssignmentBinding {
        names,
        value_text: node_text_or_placeholder(&value, source),
    })
}
