/*
 * Definition Extractor
 *
 * Walks only the top-level statements of a parsed tree, in source order,
 * populating a Context:
 * - Name-target assignments -> variable entries
 * - Function / class declarations -> descriptors
 * - Import statements -> ImportRecords; from-imports naming a resolvable
 *   module trigger the import resolver and attach its pruned result
 *
 * Order within each category matches source order; the renderer depends on
 * this.
 */

use crate::features::cross_file::{resolve, ParseCache, Resolution};
use crate::features::parsing::extractors::{
    describe_class, describe_function, extract_assignment, extract_import,
};
use crate::features::parsing::ParsedSource;
use crate::features::pruning::prune;
use crate::shared::models::{Context, ImportRecord, Mode};
use crate::shared::utils::tree_sitter::{named_statements, unwrap_decorated};
use std::path::Path;
use tree_sitter::Node;

/// Extract all top-level definitions of a parsed file into a Context
pub fn extract_definitions(
    parsed: &ParsedSource,
    module_name: &str,
    base_dir: &Path,
    mode: Mode,
    cache: &mut ParseCache,
) -> Context {
    let source = parsed.text.as_str();
    let mut context = Context::new(module_name);

    for stmt in named_statements(&parsed.tree.root_node()) {
        match stmt.kind() {
            "expression_statement" => {
                if let Some(assignment) = stmt.child(0) {
                    if let Some(binding) = extract_assignment(&assignment, source) {
                        for target in binding.names {
                            context.variables.insert(target, binding.value_text.clone());
                        }
                    }
                }
            }
            "function_definition" => {
                if let Some(f) = describe_function(&stmt, source, Vec::new()) {
                    context.functions.push(f);
                }
            }
            "class_definition" => {
                if let Some(c) = describe_class(&stmt, source, Vec::new()) {
                    context.classes.push(c);
                }
            }
            "decorated_definition" => {
                let (decorators, inner) = unwrap_decorated(stmt, source);
                match inner.kind() {
                    "function_definition" => {
                        if let Some(f) = describe_function(&inner, source, decorators) {
                            context.functions.push(f);
                        }
                    }
                    "class_definition" => {
                        if let Some(c) = describe_class(&inner, source, decorators) {
                            context.classes.push(c);
                        }
                    }
                    _ => {}
                }
            }
            "import_statement" | "import_from_statement" | "future_import_statement" => {
                if let Some(record) = build_import_record(&stmt, source, base_dir, mode, cache) {
                    context.imports.push(record);
                }
            }
            _ => {}
        }
    }

    context
}

fn build_import_record(
    stmt: &Node,
    source: &str,
    base_dir: &Path,
    mode: Mode,
    cache: &mut ParseCache,
) -> Option<ImportRecord> {
    let extract = extract_import(stmt, source)?;

    let resolved = match &extract.module {
        Some(module) => match resolve(module, base_dir, mode, cache) {
            Resolution::Found(full) => {
                Some(Box::new(prune(&full, &extract.bound_names, mode)))
            }
            Resolution::NotFound | Resolution::ParseFailed(_) | Resolution::Cycle => None,
        },
        None => None,
    };

    Some(ImportRecord {
        statement: extract.statement,
        module: extract.module,
        resolved,
    })
}
