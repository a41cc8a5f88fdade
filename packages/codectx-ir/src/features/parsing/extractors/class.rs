/*
 * Class Describer
 *
 * Transforms a class_definition node into a ClassDescriptor:
 * - Verbatim base-class texts (keyword arguments such as metaclass= are not
 *   bases and are skipped)
 * - Methods from direct function declarations only, one level deep
 * - Class-level variables in insertion order
 */

use crate::features::parsing::extractors::function::describe_function;
use crate::features::parsing::extractors::variable::extract_assignment;
use crate::shared::models::ClassDescriptor;
use crate::shared::utils::tree_sitter::{
    extract_docstring, named_statements, node_text_or_placeholder, unwrap_decorated,
};
use indexmap::IndexMap;
use tree_sitter::Node;

/// Describe a class_definition node
pub fn describe_class(
    node: &Node,
    source: &str,
    decorators: Vec<String>,
) -> Option<ClassDescriptor> {
    if node.kind() != "class_definition" {
        return None;
    }

    let name_node = node.child_by_field_name("name")?;
    let name = node_text_or_placeholder(&name_node, source);

    let bases = node
        .child_by_field_name("superclasses")
        .map(|args| extract_bases(&args, source))
        .unwrap_or_default();

    let body = node.child_by_field_name("body");

    let docstring = body.as_ref().and_then(|b| extract_docstring(b, source));

    let mut methods = Vec::new();
    let mut variables = IndexMap::new();

    if let Some(body) = body {
        for stmt in named_statements(&body) {
            match stmt.kind() {
                "function_definition" => {
                    if let Some(f) = describe_function(&stmt, source, Vec::new()) {
                        methods.push(f);
                    }
                }
                "decorated_definition" => {
                    let (method_decorators, inner) = unwrap_decorated(stmt, source);
                    if let Some(f) = describe_function(&inner, source, method_decorators) {
                        methods.push(f);
                    }
                }
                "expression_statement" => {
                    if let Some(assignment) = stmt.child(0) {
                        if let Some(binding) = extract_assignment(&assignment, source) {
                            for target in binding.names {
                                variables.insert(target, binding.value_text.clone());
                            }
                        }
                    }
                }
                _ => {}
            }
        }
    }

    Some(ClassDescriptor {
        name,
        bases,
        decorators,
        docstring,
        methods,
        variables,
    })
}

/// Verbatim base-class texts from the superclasses argument list
fn extract_bases(args: &Node, source: &str) -> Vec<String> {
    let mut bases = Vec::new();
    for i in 0..args.named_child_count() {
        if let Some(arg) = args.named_child(i) {
            match arg.kind() {
                "comment" | "keyword_argument" => {}
                _ => bases.push(node_text_or_placeholder(&arg, source)),
            }
        }
    }
    bases
}
