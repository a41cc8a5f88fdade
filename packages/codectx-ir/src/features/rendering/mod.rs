/*
 * Text Renderer
 *
 * Deterministically serializes a Context to human-readable text. Pure
 * function of its input: the same Context always renders to byte-identical
 * text. Block order and blank-line placement are load-bearing; downstream
 * consumers treat the output as a stable format.
 */

use crate::shared::models::{Context, FunctionDescriptor};
use rustc_hash::FxHashSet;

/// Render one Context
///
/// An error Context renders as its diagnostic text alone; nothing else is
/// emitted for it.
pub fn render(context: &Context) -> String {
    if let Some(error) = &context.error {
        return error.clone();
    }

    let mut lines: Vec<String> = Vec::new();
    lines.push(context.module_name.clone());
    lines.push("=".repeat(context.module_name.chars().count()));

    if !context.imports.is_empty() {
        for import in &context.imports {
            lines.push(import.statement.clone());
        }
        lines.push(String::new());
    }

    if !context.variables.is_empty() {
        for (name, value) in &context.variables {
            lines.push(format!("{name} = {value}"));
        }
        lines.push(String::new());
    }

    for function in &context.functions {
        push_function(&mut lines, function, "", false);
    }

    for class in &context.classes {
        for decorator in &class.decorators {
            lines.push(format!("@{decorator}"));
        }
        let bases = if class.bases.is_empty() {
            String::new()
        } else {
            format!("({})", class.bases.join(", "))
        };
        lines.push(format!("class {}{}:", class.name, bases));
        if let Some(doc) = &class.docstring {
            lines.push(format!("    \"\"\"{doc}\"\"\""));
        }
        lines.push(String::new());
        for (name, value) in &class.variables {
            lines.push(format!("    {name} = {value}"));
        }
        if !class.variables.is_empty() {
            lines.push(String::new());
        }
        for method in &class.methods {
            push_function(&mut lines, method, "    ", true);
        }
        lines.push(String::new());
    }

    lines.join("\n")
}

/// Return annotation chosen by priority: explicit hint, then `None` for
/// bodies with no return-with-value (constructors always), then the
/// literal-kind label, else nothing.
fn return_annotation(function: &FunctionDescriptor, as_method: bool) -> String {
    if let Some(hint) = &function.return_hint {
        return format!(" -> {hint}");
    }
    if (as_method && function.name == "__init__") || function.return_expression.is_none() {
        return " -> None".to_string();
    }
    match function.return_literal.and_then(|kind| kind.label()) {
        Some(label) => format!(" -> {label}"),
        None => String::new(),
    }
}

fn push_function(
    lines: &mut Vec<String>,
    function: &FunctionDescriptor,
    indent: &str,
    as_method: bool,
) {
    for decorator in &function.decorators {
        lines.push(format!("{indent}@{decorator}"));
    }
    lines.push(format!(
        "{indent}def {}({}){}:",
        function.name,
        function.params,
        return_annotation(function, as_method)
    ));
    if let Some(doc) = &function.docstring {
        lines.push(format!("{indent}    \"\"\"{doc}\"\"\""));
    }
    if as_method {
        for assignment in &function.init_assignments {
            lines.push(format!("{indent}    {assignment}"));
        }
    }
    lines.push(format!("{indent}    # some code lines"));
    if let Some(expression) = &function.return_expression {
        let constructor_with_state =
            as_method && function.name == "__init__" && !function.init_assignments.is_empty();
        if !constructor_with_state {
            lines.push(format!("{indent}    return {expression}"));
        }
    }
    lines.push(String::new());
}

/// Render the entrypoint Context, then each distinct resolved import
///
/// Imports are deduplicated by target module identity and emitted in
/// first-encountered order under a single separating banner.
pub fn render_with_imports(context: &Context) -> String {
    let mut output = vec![render(context)];

    let mut rendered_modules: FxHashSet<&str> = FxHashSet::default();
    let mut import_blocks: Vec<String> = Vec::new();
    for import in &context.imports {
        if let (Some(resolved), Some(module)) = (&import.resolved, &import.module) {
            if rendered_modules.insert(module.as_str()) {
                import_blocks.push(render(resolved));
            }
        }
    }

    if !import_blocks.is_empty() {
        output.push("\nImported files content".to_string());
        output.push("======================".to_string());
        output.extend(import_blocks);
    }

    output.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::models::{ClassDescriptor, ImportRecord, LiteralKind};
    use indexmap::IndexMap;
    use pretty_assertions::assert_eq;

    fn function(name: &str) -> FunctionDescriptor {
        FunctionDescriptor {
            name: name.to_string(),
            params: String::new(),
            decorators: Vec::new(),
            return_hint: None,
            return_expression: None,
            return_literal: None,
            docstring: None,
            init_assignments: Vec::new(),
        }
    }

    #[test]
    fn test_error_context_renders_diagnostic_only() {
        let ctx = Context::from_error("bad.py", "File contains multiple errors.");
        assert_eq!(render(&ctx), "File contains multiple errors.");
    }

    #[test]
    fn test_header_rule_matches_name_length() {
        let ctx = Context::new("mod.py");
        assert_eq!(render(&ctx), "mod.py\n======");
    }

    #[test]
    fn test_variable_and_import_blocks() {
        let mut ctx = Context::new("m.py");
        ctx.imports.push(ImportRecord {
            statement: "import os".to_string(),
            module: None,
            resolved: None,
        });
        ctx.variables.insert("x".to_string(), "1".to_string());
        assert_eq!(render(&ctx), "m.py\n====\nimport os\n\nx = 1\n");
    }

    #[test]
    fn test_function_annotation_priority() {
        let mut ctx = Context::new("m.py");

        let mut explicit = function("a");
        explicit.return_hint = Some("int".to_string());
        explicit.return_expression = Some("compute()".to_string());
        ctx.functions.push(explicit);

        let no_return = function("b");
        ctx.functions.push(no_return);

        let mut literal = function("c");
        literal.return_expression = Some("'hi'".to_string());
        literal.return_literal = Some(LiteralKind::Str);
        ctx.functions.push(literal);

        let mut opaque = function("d");
        opaque.return_expression = Some("compute()".to_string());
        ctx.functions.push(opaque);

        let expected = "m.py\n\
                        ====\n\
                        def a() -> int:\n    # some code lines\n    return compute()\n\n\
                        def b() -> None:\n    # some code lines\n\n\
                        def c() -> str:\n    # some code lines\n    return 'hi'\n\n\
                        def d():\n    # some code lines\n    return compute()\n";
        assert_eq!(render(&ctx), expected);
    }

    #[test]
    fn test_none_literal_return_has_no_label() {
        let mut ctx = Context::new("m.py");
        let mut f = function("f");
        f.return_expression = Some("None".to_string());
        f.return_literal = Some(LiteralKind::NoneValue);
        ctx.functions.push(f);

        assert_eq!(
            render(&ctx),
            "m.py\n====\ndef f():\n    # some code lines\n    return None\n"
        );
    }

    #[test]
    fn test_class_rendering_with_constructor() {
        let mut ctx = Context::new("m.py");
        let mut init = function("__init__");
        init.params = "self, x".to_string();
        init.init_assignments = vec!["self.x = x".to_string()];
        init.return_expression = Some("None".to_string());

        ctx.classes.push(ClassDescriptor {
            name: "Point".to_string(),
            bases: vec!["Base".to_string()],
            decorators: Vec::new(),
            docstring: Some("A point".to_string()),
            methods: vec![init],
            variables: IndexMap::new(),
        });

        let expected = "m.py\n\
                        ====\n\
                        class Point(Base):\n\
                        \x20   \"\"\"A point\"\"\"\n\
                        \n\
                        \x20   def __init__(self, x) -> None:\n\
                        \x20       self.x = x\n\
                        \x20       # some code lines\n\
                        \n\
                        ";
        assert_eq!(render(&ctx), expected);
    }

    #[test]
    fn test_rendering_is_deterministic() {
        let mut ctx = Context::new("m.py");
        ctx.variables.insert("a".to_string(), "1".to_string());
        ctx.functions.push(function("f"));
        assert_eq!(render(&ctx), render(&ctx));
    }

    #[test]
    fn test_resolved_imports_deduplicated_by_module() {
        let mut ctx = Context::new("main.py");
        let resolved = Box::new(Context::new("helpers.py"));
        for statement in ["from helpers import a", "from helpers import b"] {
            ctx.imports.push(ImportRecord {
                statement: statement.to_string(),
                module: Some("helpers".to_string()),
                resolved: Some(resolved.clone()),
            });
        }

        let text = render_with_imports(&ctx);
        assert_eq!(text.matches("helpers.py\n==========").count(), 1);
        assert!(text.contains("Imported files content"));
    }

    #[test]
    fn test_no_banner_without_resolved_imports() {
        let mut ctx = Context::new("main.py");
        ctx.imports.push(ImportRecord {
            statement: "import os".to_string(),
            module: None,
            resolved: None,
        });
        assert!(!render_with_imports(&ctx).contains("Imported files content"));
    }
}
