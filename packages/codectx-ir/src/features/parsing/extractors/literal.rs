/*
 * Literal Evaluation
 *
 * Closed mapping from node kinds to LiteralKind. Containers count as
 * literals only when every element is itself a literal; anything else is
 * not-a-literal and degrades to "no literal value present".
 */

use crate::shared::models::LiteralKind;
use tree_sitter::Node;

/// Evaluate a node as a literal constant of a recognized kind
pub fn evaluate_literal(node: &Node) -> Option<LiteralKind> {
    match node.kind() {
        "string" | "concatenated_string" => Some(LiteralKind::Str),
        "integer" => Some(LiteralKind::Int),
        "true" | "false" => Some(LiteralKind::Bool),
        "none" => Some(LiteralKind::NoneValue),
        "list" => all_elements_literal(node).then_some(LiteralKind::List),
        "dictionary" => all_pairs_literal(node).then_some(LiteralKind::Dict),
        "unary_operator" => signed_integer(node).then_some(LiteralKind::Int),
        _ => None,
    }
}

/// `-1` / `+1` are integer literals; `~` and float arguments carry no kind
fn signed_integer(node: &Node) -> bool {
    let sign = node
        .child_by_field_name("operator")
        .map(|op| matches!(op.kind(), "-" | "+"))
        .unwrap_or(false);
    let argument = node
        .child_by_field_name("argument")
        .map(|arg| arg.kind() == "integer")
        .unwrap_or(false);
    sign && argument
}

fn all_elements_literal(node: &Node) -> bool {
    for i in 0..node.named_child_count() {
        if let Some(child) = node.named_child(i) {
            if child.kind() == "comment" {
                continue;
            }
            if !is_literal_node(&child) {
                return false;
            }
        }
    }
    true
}

fn all_pairs_literal(node: &Node) -> bool {
    for i in 0..node.named_child_count() {
        if let Some(pair) = node.named_child(i) {
            match pair.kind() {
                "comment" => continue,
                "pair" => {
                    let key = pair.child_by_field_name("key");
                    let value = pair.child_by_field_name("value");
                    match (key, value) {
                        (Some(k), Some(v)) if is_literal_node(&k) && is_literal_node(&v) => {}
                        _ => return false,
                    }
                }
                // dictionary splat or anything unexpected
                _ => return false,
            }
        }
    }
    true
}

fn is_literal_node(node: &Node) -> bool {
    match node.kind() {
        "string" | "concatenated_string" | "integer" | "float" | "true" | "false" | "none" => {
            true
        }
        "list" | "tuple" | "set" => all_elements_literal(node),
        "dictionary" => all_pairs_literal(node),
        "unary_operator" => node
            .child_by_field_name("argument")
            .map(|arg| matches!(arg.kind(), "integer" | "float"))
            .unwrap_or(false),
        _ => false,
    }
}
