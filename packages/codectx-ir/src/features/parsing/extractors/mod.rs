//! Per-node describers
//!
//! Pure, deterministic transforms from a tree-sitter node plus source text
//! into the structured descriptors of the data model.

pub mod class;
pub mod function;
pub mod import;
pub mod literal;
pub mod variable;

pub use class::describe_class;
pub use function::describe_function;
pub use import::{extract_import, ImportExtract};
pub use literal::evaluate_literal;
pub use variable::{extract_assignment, AssignmentBinding};
