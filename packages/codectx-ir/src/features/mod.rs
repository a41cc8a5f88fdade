//! Vertical feature slices
//!
//! parsing -> extraction -> cross_file -> pruning -> rendering

pub mod cross_file;
pub mod extraction;
pub mod parsing;
pub mod pruning;
pub mod rendering;
