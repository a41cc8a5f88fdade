/*
 * Import Statement Extractor
 *
 * Dissects import statements into the raw source text, the target module
 * dotted path (from-style imports only), and the set of names the statement
 * binds:
 * - import module [as alias]         -> no target module, no bound names
 * - from module import a, b as c     -> target "module", binds {a, b}
 * - from .module import x            -> target "module" (dots stripped)
 * - from . import x                  -> no target module
 * - from module import *             -> target "module", binds nothing
 *
 * Bound names are the original (pre-alias) names; that is what pruned-mode
 * filtering matches against.
 */

use crate::shared::utils::tree_sitter::{find_child_by_kind, node_text, node_text_or_placeholder};
use rustc_hash::FxHashSet;
use tree_sitter::Node;

/// Raw statement plus resolution inputs for one import
#[derive(Debug, Clone)]
pub struct ImportExtract {
    /// Raw import statement source text
    pub statement: String,

    /// Dotted module path for from-style imports, leading dots stripped
    pub module: Option<String>,

    /// Original names bound by a from-import
    pub bound_names: FxHashSet<String>,
}

/// Extract import info from an import statement node
///
/// Accepts `import_statement`, `import_from_statement` and
/// `future_import_statement`; returns `None` for anything else.
pub fn extract_import(node: &Node, source: &str) -> Option<ImportExtract> {
    let statement = node_text_or_placeholder(node, source);
    match node.kind() {
        "import_statement" => Some(ImportExtract {
            statement,
            module: None,
            bound_names: FxHashSet::default(),
        }),
        "import_from_statement" => {
            let module = node
                .child_by_field_name("module_name")
                .and_then(|m| module_path(&m, source));
            Some(ImportExtract {
                statement,
                module,
                bound_names: bound_names(node, source),
            })
        }
        "future_import_statement" => Some(ImportExtract {
            statement,
            module: Some("__future__".to_string()),
            bound_names: bound_names(node, source),
        }),
        _ => None,
    }
}

/// Dotted path of the module part, with relative-import dots stripped
///
/// A dots-only module (`from . import x`) has no path and yields `None`.
fn module_path(module_node: &Node, source: &str) -> Option<String> {
    let dotted = match module_node.kind() {
        "dotted_name" => Some(*module_node),
        "relative_import" => find_child_by_kind(module_node, "dotted_name"),
        _ => None,
    }?;
    node_text(&dotted, source).map(str::to_string)
}

/// Original names bound by a from-import
///
/// Wildcard imports bind no concrete name here; pruned-mode filtering then
/// retains nothing, which matches treating `*` as an unmatchable name.
fn bound_names(node: &Node, source: &str) -> FxHashSet<String> {
    let mut names = FxHashSet::default();
    let mut cursor = node.walk();
    for name_node in node.children_by_field_name("name", &mut cursor) {
        let target = match name_node.kind() {
            "aliased_import" => name_node.child_by_field_name("name"),
            _ => Some(name_node),
        };
        if let Some(target) = target {
            if let Some(text) = node_text(&target, source) {
                names.insert(text.to_string());
            }
        }
    }
    names
}
