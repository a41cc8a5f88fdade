//! Cross-file import resolution and the per-run parse cache

mod cache;
mod resolver;

pub use cache::ParseCache;
pub use resolver::{resolve, Resolution};
