//! Fault-tolerant parsing and per-node describers

pub mod extractors;
pub mod parser;

pub use parser::{parse_fault_tolerant, ParseOutcome, ParsedSource};
