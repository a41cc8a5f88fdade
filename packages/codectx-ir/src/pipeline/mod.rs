/*
 * Pipeline Orchestration
 *
 * Entry text -> parse driver -> extractor (which recurses through the
 * import resolver per from-import) -> Context tree -> renderer.
 *
 * Execution is single-threaded and synchronous; one invocation processes
 * exactly one entrypoint to a single terminal result. The caller owns the
 * ParseCache; a fresh cache per independent run keeps results from leaking
 * across unrelated inputs.
 */

use crate::features::cross_file::ParseCache;
use crate::features::extraction::extract_definitions;
use crate::features::parsing::{parse_fault_tolerant, ParseOutcome};
use crate::features::rendering::render_with_imports;
use crate::shared::models::{Context, Mode};
use std::path::Path;
use std::sync::Arc;

/// Absolute form of a path, resolving symlinks when the file exists
///
/// The entrypoint may be virtual (content supplied directly, no file on
/// disk); imported files always exist by the time they are built.
fn absolutize(path: &Path) -> std::path::PathBuf {
    path.canonicalize()
        .or_else(|_| std::path::absolute(path))
        .unwrap_or_else(|_| path.to_path_buf())
}

/// Build the Context for one file from its text
///
/// The result is cached by absolute path and the path is marked in-flight
/// for the duration of extraction, so import cycles back into this file
/// resolve to a placeholder instead of recursing.
pub fn build_context(path: &Path, text: &str, mode: Mode, cache: &mut ParseCache) -> Arc<Context> {
    let abs = absolutize(path);
    let module_name = abs
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| abs.display().to_string());
    let base_dir = abs
        .parent()
        .map(Path::to_path_buf)
        .unwrap_or_default();

    if let Some(cached) = cache.get(&abs) {
        return cached;
    }

    cache.begin(&abs);
    let context = match parse_fault_tolerant(text) {
        ParseOutcome::Parsed(parsed) => {
            extract_definitions(&parsed, &module_name, &base_dir, mode, cache)
        }
        ParseOutcome::Failed(message) => Context::from_error(module_name, message),
    };
    cache.finish(&abs);

    let context = Arc::new(context);
    cache.insert(abs, context.clone());
    context
}

/// One complete invocation: entrypoint text in, primary output text out
///
/// An unparseable entrypoint yields its error text instead of rendered
/// content.
pub fn run(entry_path: &Path, text: &str, mode: Mode) -> String {
    let mut cache = ParseCache::new();
    let context = build_context(entry_path, text, mode, &mut cache);
    if let Some(error) = &context.error {
        return format!("Error parsing file: {error}");
    }
    render_with_imports(&context)
}
