//! Common test utilities
//!
//! Shared fixtures for integration tests: on-disk module layouts under a
//! temp directory, plus a one-call entrypoint runner.

use codectx_ir::{run, Mode};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Write one Python module into the project directory
pub fn write_module(dir: &Path, name: &str, content: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, content).expect("write fixture module");
    path
}

/// Create a temp project directory
pub fn project() -> TempDir {
    TempDir::new().expect("create temp project dir")
}

/// Write the entrypoint and run the full pipeline on it
pub fn run_entry(dir: &Path, name: &str, content: &str, mode: Mode) -> String {
    let path = write_module(dir, name, content);
    run(&path, content, mode)
}
