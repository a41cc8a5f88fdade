/*
 * Parse Cache
 *
 * Explicit cache object owned by the top-level invocation and passed by
 * reference through the resolution calls; never implicit global state.
 *
 * Keyed by absolute file path, populated exactly once per path per run,
 * not keyed by mode: the cache stores the full (unpruned) Context and
 * pruning is applied per import statement after retrieval. Entries are
 * never evicted mid-run; independent runs use a fresh cache.
 *
 * The in-flight set marks paths currently on the active resolution stack,
 * so a true import cycle resolves to a placeholder instead of recursing
 * without bound.
 */

use crate::shared::models::Context;
use rustc_hash::{FxHashMap, FxHashSet};
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Per-run memo of parsed file contexts
#[derive(Debug, Default)]
pub struct ParseCache {
    entries: FxHashMap<PathBuf, Arc<Context>>,
    in_flight: FxHashSet<PathBuf>,
}

impl ParseCache {
    pub fn new() -> Self {
        ParseCache::default()
    }

    pub fn get(&self, path: &Path) -> Option<Arc<Context>> {
        self.entries.get(path).cloned()
    }

    pub fn insert(&mut self, path: PathBuf, context: Arc<Context>) {
        self.entries.insert(path, context);
    }

    /// Mark a path as being resolved on the active stack
    pub fn begin(&mut self, path: &Path) {
        self.in_flight.insert(path.to_path_buf());
    }

    /// Unmark a path once its resolution fully completes
    pub fn finish(&mut self, path: &Path) {
        self.in_flight.remove(path);
    }

    pub fn is_in_flight(&self, path: &Path) -> bool {
        self.in_flight.contains(path)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Drop all entries; required between independent top-level runs when a
    /// cache object is reused
    pub fn clear(&mut self) {
        self.entries.clear();
        self.in_flight.clear();
    }
}
