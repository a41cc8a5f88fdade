/*
 * Fault-Tolerant Parse Driver
 *
 * Attempts a full parse. On a syntax error at line L, deletes line L from
 * the text and retries exactly once. A second failure halts extraction for
 * the file; the caller builds an error-only Context from the message.
 *
 * tree-sitter never hard-fails on malformed input: it produces a tree with
 * ERROR or missing nodes. A tree containing any such node counts as a
 * structured failure carrying the 1-based line of the first one.
 */

use crate::shared::utils::tree_sitter::first_error_line;
use tree_sitter::{Parser, Tree};

/// A successfully parsed source text
///
/// Extraction must slice `text`, not the caller's original: after a repair
/// retry the offending line is gone and byte offsets have shifted.
pub struct ParsedSource {
    pub tree: Tree,
    pub text: String,
}

/// Result of the parse driver
pub enum ParseOutcome {
    Parsed(ParsedSource),
    /// Unrecoverable: both the original text and the repaired text failed
    Failed(String),
}

fn python_parser() -> Result<Parser, String> {
    let mut parser = Parser::new();
    parser
        .set_language(&tree_sitter_python::language())
        .map_err(|e| format!("failed to load Python grammar: {e}"))?;
    Ok(parser)
}

fn attempt(parser: &mut Parser, text: &str) -> Result<Tree, ParseError> {
    let tree = parser
        .parse(text, None)
        .ok_or(ParseError { line: 1 })?;
    match first_error_line(&tree.root_node()) {
        None => Ok(tree),
        Some(line) => Err(ParseError { line }),
    }
}

struct ParseError {
    line: usize,
}

/// Remove the given 1-based line from the text
fn delete_line(text: &str, line: usize) -> String {
    text.lines()
        .enumerate()
        .filter(|(i, _)| i + 1 != line)
        .map(|(_, l)| l)
        .collect::<Vec<_>>()
        .join("\n")
}

/// Parse `text`, repairing at most one bad line
pub fn parse_fault_tolerant(text: &str) -> ParseOutcome {
    let mut parser = match python_parser() {
        Ok(p) => p,
        Err(msg) => return ParseOutcome::Failed(msg),
    };

    let first = match attempt(&mut parser, text) {
        Ok(tree) => {
            return ParseOutcome::Parsed(ParsedSource {
                tree,
                text: text.to_string(),
            })
        }
        Err(e) => e,
    };

    tracing::warn!(
        line = first.line,
        "handled syntax error, reparsing without the offending line"
    );

    let repaired = delete_line(text, first.line);
    match attempt(&mut parser, &repaired) {
        Ok(tree) => ParseOutcome::Parsed(ParsedSource {
            tree,
            text: repaired,
        }),
        Err(second) => ParseOutcome::Failed(format!(
            "File contains multiple errors. Last error: syntax error near line {} \
             (after removing line {})",
            second.line, first.line
        )),
    }
}
