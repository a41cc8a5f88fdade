//! Core data model
//!
//! One `Context` per source file, built once and immutable afterwards.

mod context;
mod mode;

pub use context::{ClassDescriptor, Context, FunctionDescriptor, ImportRecord, LiteralKind};
pub use mode::Mode;
