//! codectx CLI
//!
//! Reads the entrypoint's content from stdin (imported files are read from
//! disk relative to the entrypoint's directory) and writes the rendered
//! context to stdout. Diagnostics go to stderr and never interleave with
//! primary output.
//!
//! # Usage
//!
//! ```bash
//! codectx path/to/main.py --mode intelligent < path/to/main.py
//! codectx path/to/main.py --json < path/to/main.py
//! ```

use clap::Parser;
use codectx_ir::{build_context, render_with_imports, Mode, ParseCache};
use std::io::Read;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "codectx")]
#[command(about = "Context summary of a Python file and its direct imports", long_about = None)]
struct Cli {
    /// Entrypoint file path; its content is read from stdin
    file: Option<PathBuf>,

    /// Pruning mode: full | intelligent | pruned (unrecognized values fall
    /// back to intelligent)
    #[arg(short, long, default_value = "intelligent")]
    mode: String,

    /// Emit the raw context as JSON instead of rendered text
    #[arg(long)]
    json: bool,
}

fn main() -> codectx_ir::Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let cli = Cli::parse();
    tracing::info!("python context extraction started");

    let Some(path) = cli.file else {
        println!("Error: No file path provided.");
        return Ok(());
    };

    let mode = Mode::from_cli(&cli.mode);

    let mut text = String::new();
    std::io::stdin().read_to_string(&mut text)?;

    tracing::info!(mode = %mode, file = %path.display(), "running");

    let mut cache = ParseCache::new();
    let context = build_context(&path, &text, mode, &mut cache);

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&*context)?);
    } else if let Some(error) = &context.error {
        println!("Error parsing file: {error}");
    } else {
        println!("{}", render_with_imports(&context));
    }

    Ok(())
}
