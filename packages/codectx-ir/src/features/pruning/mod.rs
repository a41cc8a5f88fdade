/*
 * Context Pruner
 *
 * Filters a resolved import's full Context per the active mode:
 * - full        : identity
 * - intelligent : drops names carrying the leading-underscore privacy marker,
 *                 independent of what was actually imported
 * - pruned      : keeps exactly the names bound by the triggering from-import
 *
 * In both non-full cases the pruned Context's own import list is cleared:
 * rendering never recurses two levels deep into transitive imports.
 */

use crate::shared::models::{Context, Mode};
use rustc_hash::FxHashSet;

/// Naming-policy predicate for the conventional "private" marker
pub fn is_private_name(name: &str) -> bool {
    name.starts_with('_')
}

/// Prune a full Context per mode
///
/// The result is always a subset of the input; the cached full Context is
/// never mutated.
pub fn prune(full: &Context, imported_names: &FxHashSet<String>, mode: Mode) -> Context {
    if mode == Mode::Full {
        return full.clone();
    }

    let keep: Box<dyn Fn(&str) -> bool> = match mode {
        Mode::Intelligent => Box::new(|name: &str| !is_private_name(name)),
        Mode::Pruned => Box::new(|name: &str| imported_names.contains(name)),
        Mode::Full => unreachable!(),
    };

    Context {
        module_name: full.module_name.clone(),
        imports: Vec::new(),
        variables: full
            .variables
            .iter()
            .filter(|(name, _)| keep(name))
            .map(|(name, value)| (name.clone(), value.clone()))
            .collect(),
        functions: full
            .functions
            .iter()
            .filter(|f| keep(&f.name))
            .cloned()
            .collect(),
        classes: full
            .classes
            .iter()
            .filter(|c| keep(&c.name))
            .cloned()
            .collect(),
        error: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::models::{FunctionDescriptor, ImportRecord};

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

    fn sample() -> Context {
        let mut ctx = Context::new("m.py");
        ctx.imports.push(ImportRecord {
            statement: "import os".to_string(),
            module: None,
            resolved: None,
        });
        ctx.variables.insert("VERSION".to_string(), "'1.0'".to_string());
        ctx.variables.insert("_secret".to_string(), "0".to_string());
        ctx.functions.push(function("greet"));
        ctx.functions.push(function("_internal"));
        ctx
    }

    fn names_of(ctx: &Context) -> Vec<&str> {
        ctx.functions.iter().map(|f| f.name.as_str()).collect()
    }

    #[test]
    fn test_full_is_identity() {
        let ctx = sample();
        let pruned = prune(&ctx, &FxHashSet::default(), Mode::Full);
        assert_eq!(pruned.imports.len(), 1);
        assert_eq!(names_of(&pruned), vec!["greet", "_internal"]);
    }

    #[test]
    fn test_intelligent_drops_private_names() {
        let ctx = sample();
        let pruned = prune(&ctx, &FxHashSet::default(), Mode::Intelligent);
        assert!(pruned.imports.is_empty());
        assert_eq!(names_of(&pruned), vec!["greet"]);
        assert!(pruned.variables.contains_key("VERSION"));
        assert!(!pruned.variables.contains_key("_secret"));
    }

    #[test]
    fn test_pruned_keeps_only_imported_names() {
        let ctx = sample();
        let mut imported = FxHashSet::default();
        imported.insert("_internal".to_string());
        let pruned = prune(&ctx, &imported, Mode::Pruned);
        // Pruned mode ignores the privacy convention entirely
        assert_eq!(names_of(&pruned), vec!["_internal"]);
        assert!(pruned.variables.is_empty());
    }

    #[test]
    fn test_is_private_name() {
        assert!(is_private_name("_helper"));
        assert!(is_private_name("__all__"));
        assert!(!is_private_name("public"));
    }
}
