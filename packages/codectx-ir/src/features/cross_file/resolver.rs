/*
 * Import Resolver
 *
 * Maps a dotted import path to a file path relative to the importing
 * file's directory, then recursively runs the parse driver and extractor
 * on that file with the same mode. Results are memoized by absolute path.
 *
 * Most imports target libraries with no local file; a missing candidate is
 * expected and non-fatal.
 */

use crate::features::cross_file::ParseCache;
use crate::pipeline::build_context;
use crate::shared::models::{Context, Mode};
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Outcome of resolving one from-import target
#[derive(Debug, Clone)]
pub enum Resolution {
    /// Full (unpruned) context of the target module
    Found(Arc<Context>),
    /// No local file for this dotted path
    NotFound,
    /// The target file exists but failed to parse even after repair
    ParseFailed(String),
    /// The target is already on the active resolution stack
    Cycle,
}

/// Dotted path -> relative file path (`pkg.mod` -> `pkg/mod.py`)
fn module_file_path(dotted: &str) -> PathBuf {
    let mut path = PathBuf::new();
    for part in dotted.split('.') {
        path.push(part);
    }
    path.set_extension("py");
    path
}

/// Resolve a dotted import path against the importing file's directory
pub fn resolve(dotted: &str, base_dir: &Path, mode: Mode, cache: &mut ParseCache) -> Resolution {
    let candidate = base_dir.join(module_file_path(dotted));
    if !candidate.is_file() {
        tracing::debug!(module = dotted, path = %candidate.display(), "no local file for import");
        return Resolution::NotFound;
    }

    let abs = candidate
        .canonicalize()
        .unwrap_or_else(|_| candidate.clone());

    if let Some(context) = cache.get(&abs) {
        return match &context.error {
            Some(error) => Resolution::ParseFailed(error.clone()),
            None => Resolution::Found(context),
        };
    }

    if cache.is_in_flight(&abs) {
        tracing::warn!(path = %abs.display(), "import cycle detected, leaving import unresolved");
        return Resolution::Cycle;
    }

    let text = match fs::read_to_string(&abs) {
        Ok(text) => text,
        Err(e) => {
            tracing::warn!(path = %abs.display(), error = %e, "failed to read import target");
            return Resolution::NotFound;
        }
    };

    let context = build_context(&abs, &text, mode, cache);
    match &context.error {
        Some(error) => Resolution::ParseFailed(error.clone()),
        None => Resolution::Found(context),
    }
}
