/*
 * codectx-ir - Python Source Context Extraction
 *
 * Feature-First Architecture:
 * - shared/      : Data model (Context, descriptors, Mode) and tree-sitter utilities
 * - features/    : Vertical slices (parsing -> extraction -> cross_file -> pruning -> rendering)
 * - pipeline/    : Orchestration (single entrypoint to rendered text)
 *
 * Given an entrypoint file's text and a pruning mode, produces a
 * deterministic, human-readable rendering of the file's top-level
 * declarations plus a bounded view of each directly imported module.
 */

pub mod errors;
pub mod features;
pub mod pipeline;
pub mod shared;

pub use errors::{CodectxError, Result};
pub use features::cross_file::{ParseCache, Resolution};
pub use features::pruning::prune;
pub use features::rendering::{render, render_with_imports};
pub use pipeline::{build_context, run};
pub use shared::models::{
    ClassDescriptor, Context, FunctionDescriptor, ImportRecord, LiteralKind, Mode,
};
