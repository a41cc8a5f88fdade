/*
 * Function Describer
 *
 * Transforms a function_definition node into a FunctionDescriptor:
 * - Name, verbatim parameter-list text, explicit return annotation
 * - Return expression: last return-with-value, scanning the body backward
 *   over direct statements only
 * - Constructor self-assignments, collected only for `__init__` and only
 *   from direct statements whose target is an attribute on `self`
 */

use crate::features::parsing::extractors::literal::evaluate_literal;
use crate::shared::models::FunctionDescriptor;
use crate::shared::utils::tree_sitter::{
    extract_docstring, named_statements, node_text, node_text_or_placeholder,
};
use tree_sitter::Node;

/// Marker name for constructors
const CONSTRUCTOR_NAME: &str = "__init__";

/// Describe a function_definition node
///
/// `decorators` come from the caller, which unwraps any surrounding
/// decorated_definition.
pub fn describe_function(
    node: &Node,
    source: &str,
    decorators: Vec<String>,
) -> Option<FunctionDescriptor> {
    if node.kind() != "function_definition" {
        return None;
    }

    let name_node = node.child_by_field_name("name")?;
    let name = node_text_or_placeholder(&name_node, source);

    let params = node
        .child_by_field_name("parameters")
        .map(|p| parameter_list_text(&p, source))
        .unwrap_or_default();

    let return_hint = node
        .child_by_field_name("return_type")
        .map(|t| node_text_or_placeholder(&t, source));

    let body = node.child_by_field_name("body");

    let docstring = body.as_ref().and_then(|b| extract_docstring(b, source));

    let (return_expression, return_literal) = body
        .as_ref()
        .and_then(|b| find_return_value(b, source))
        .map(|(text, lit)| (Some(text), lit))
        .unwrap_or((None, None));

    let init_assignments = if name == CONSTRUCTOR_NAME {
        body.as_ref()
            .map(|b| collect_self_assignments(b, source))
            .unwrap_or_default()
    } else {
        Vec::new()
    };

    Some(FunctionDescriptor {
        name,
        params,
        decorators,
        return_hint,
        return_expression,
        return_literal,
        docstring,
        init_assignments,
    })
}

/// Parameter-list text without the surrounding parentheses
fn parameter_list_text(params_node: &Node, source: &str) -> String {
    let raw = node_text_or_placeholder(params_node, source);
    raw.strip_prefix('(')
        .and_then(|s| s.strip_suffix(')'))
        .unwrap_or(&raw)
        .to_string()
}

/// Last return-with-value in the body, scanning end-to-start
///
/// Bare `return` statements do not stop the scan. A function with no
/// return-with-value anywhere yields `None`, meaning it implicitly returns
/// no value.
fn find_return_value(body: &Node, source: &str) -> Option<(String, Option<crate::shared::models::LiteralKind>)> {
    for stmt in named_statements(body).into_iter().rev() {
        if stmt.kind() != "return_statement" {
            continue;
        }
        let Some(value) = stmt.named_child(0) else {
            continue;
        };
        let text = node_text_or_placeholder(&value, source);
        let literal = evaluate_literal(&value);
        return Some((text, literal));
    }
    None
}

/// Direct `self.<attr> = ...` statements in a constructor body, in order
fn collect_self_assignments(body: &Node, source: &str) -> Vec<String> {
    let mut assignments = Vec::new();
    for stmt in named_statements(body) {
        if stmt.kind() != "expression_statement" {
            continue;
        }
        let Some(assignment) = stmt.child(0) else {
            continue;
        };
        if assignment.kind() != "assignment" {
            continue;
        }
        let Some(left) = assignment.child_by_field_name("left") else {
            continue;
        };
        if left.kind() != "attribute" {
            continue;
        }
        let is_self = left
            .child_by_field_name("object")
            .filter(|obj| obj.kind() == "identifier")
            .and_then(|obj| node_text(&obj, source))
            == Some("self");
        if is_self {
            assignments.push(node_text_or_placeholder(&assignment, source));
        }
    }
    assignments
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::models::LiteralKind;
    use tree_sitter::Parser;

    fn describe(code: &str) -> FunctionDescriptor {
        let mut parser = Parser::new();
        parser
            .set_language(&tree_sitter_python::language())
            .unwrap();
        let tree = parser.parse(code, None).unwrap();
        let func = tree.root_node().named_child(0).unwrap();
        describe_function(&func, code, Vec::new()).unwrap()
    }

    #[test]
    fn test_name_and_params() {
        let f = describe("def add(x, y=1, *args, **kwargs):\n    pass\n");
        assert_eq!(f.name, "add");
        assert_eq!(f.params, "x, y=1, *args, **kwargs");
    }

    #[test]
    fn test_explicit_return_hint() {
        let f = describe("def f() -> dict[str, int]:\n    return build()\n");
        assert_eq!(f.return_hint, Some("dict[str, int]".to_string()));
        assert_eq!(f.return_expression, Some("build()".to_string()));
        assert_eq!(f.return_literal, None);
    }

    #[test]
    fn test_string_literal_return() {
        let f = describe("def greet():\n    return 'hello'\n");
        assert_eq!(f.return_expression, Some("'hello'".to_string()));
        assert_eq!(f.return_literal, Some(LiteralKind::Str));
    }

    #[test]
    fn test_backward_scan_picks_last_return() {
        let code = "def f(flag):\n    if flag:\n        return 1\n    x = 2\n    return 'done'\n";
        let f = describe(code);
        // Nested returns are invisible; the last direct statement wins
        assert_eq!(f.return_expression, Some("'done'".to_string()));
        assert_eq!(f.return_literal, Some(LiteralKind::Str));
    }

    #[test]
    fn test_bare_return_does_not_stop_scan() {
        let code = "def f():\n    return 42\n    return\n";
        let f = describe(code);
        assert_eq!(f.return_expression, Some("42".to_string()));
        assert_eq!(f.return_literal, Some(LiteralKind::Int));
    }

    #[test]
    fn test_no_return_value() {
        let f = describe("def f():\n    x = 1\n");
        assert_eq!(f.return_expression, None);
        assert_eq!(f.return_literal, None);
    }

    #[test]
    fn test_docstring() {
        let f = describe("def f():\n    \"does things\"\n    pass\n");
        assert_eq!(f.docstring, Some("does things".to_string()));
    }

    #[test]
    fn test_constructor_self_assignments() {
        let code = "def __init__(self, x, y):\n    self.x = x\n    self.y = y\n    other = 1\n";
        let f = describe(code);
        assert_eq!(
            f.init_assignments,
            vec!["self.x = x".to_string(), "self.y = y".to_string()]
        );
    }

    #[test]
    fn test_conditional_self_assignment_not_collected() {
        let code = "def __init__(self, flag):\n    if flag:\n        self.flag = flag\n";
        let f = describe(code);
        assert!(f.init_assignments.is_empty());
    }

    #[test]
    fn test_non_constructor_skips_self_assignments() {
        let code = "def setup(self):\n    self.x = 1\n";
        let f = describe(code);
        assert!(f.init_assignments.is_empty());
    }
}
