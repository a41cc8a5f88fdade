/*
 * Context Model
 *
 * Structured description of one source file's top-level declarations:
 * - Imports (with optionally resolved, pruned sub-contexts)
 * - Variables (insertion order preserved)
 * - Functions and classes (source order)
 *
 * A Context is built once per file and never mutated afterwards. An error
 * Context carries only `module_name` and `error`; every other field is void
 * and must not be rendered.
 */

use indexmap::IndexMap;
use serde::Serialize;

/// Recognized literal kinds for return-value inference
///
/// Closed set: anything outside it degrades to "no literal value present".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LiteralKind {
    Str,
    Int,
    Bool,
    List,
    Dict,
    /// The `None` literal: recognized, but rendered without a label
    NoneValue,
}

impl LiteralKind {
    /// Annotation label shown by the renderer, if any
    pub fn label(self) -> Option<&'static str> {
        match self {
            LiteralKind::Str => Some("str"),
            LiteralKind::Int => Some("int"),
            LiteralKind::Bool => Some("bool"),
            LiteralKind::List => Some("list"),
            LiteralKind::Dict => Some("dict"),
            LiteralKind::NoneValue => None,
        }
    }
}

/// One import statement found at the top level of a file
#[derive(Debug, Clone, Serialize)]
pub struct ImportRecord {
    /// Raw import statement source text
    pub statement: String,

    /// Target module dotted path (set only for "from"-style imports)
    pub module: Option<String>,

    /// Resolved and pruned context of the target module
    ///
    /// Absent when resolution failed, the target is external, or the
    /// statement is not a from-style module import.
    pub resolved: Option<Box<Context>>,
}

/// Structured summary of one function declaration
#[derive(Debug, Clone, Serialize)]
pub struct FunctionDescriptor {
    pub name: String,

    /// Parameter-list source text, without the surrounding parentheses
    pub params: String,

    /// Decorator source texts in declaration order, without the leading `@`
    pub decorators: Vec<String>,

    /// Explicit return-type annotation text, verbatim
    pub return_hint: Option<String>,

    /// Source text of the last return-with-value in the body
    pub return_expression: Option<String>,

    /// Literal kind of the return expression, when it is a recognized literal
    pub return_literal: Option<LiteralKind>,

    pub docstring: Option<String>,

    /// `self.<attr> = ...` statements, populated only for constructors
    pub init_assignments: Vec<String>,
}

/// Structured summary of one class declaration
#[derive(Debug, Clone, Serialize)]
pub struct ClassDescriptor {
    pub name: String,

    /// Base-class source texts in declaration order
    pub bases: Vec<String>,

    pub decorators: Vec<String>,

    pub docstring: Option<String>,

    /// Direct function declarations in the class body (one level only)
    pub methods: Vec<FunctionDescriptor>,

    /// Class-level variables, insertion order preserved
    pub variables: IndexMap<String, String>,
}

/// Top-level description of one source file
#[derive(Debug, Clone, Default, Serialize)]
pub struct Context {
    pub module_name: String,
    pub imports: Vec<ImportRecord>,
    pub variables: IndexMap<String, String>,
    pub functions: Vec<FunctionDescriptor>,
    pub classes: Vec<ClassDescriptor>,

    /// Present only on unrecoverable parse failure
    pub error: Option<String>,
}

impl Context {
    /// Empty context for a module
    pub fn new(module_name: impl Into<String>) -> Self {
        Context {
            module_name: module_name.into(),
            ..Default::default()
        }
    }

    /// Error-only context for a file that could not be parsed
    pub fn from_error(module_name: impl Into<String>, error: impl Into<String>) -> Self {
        Context {
            module_name: module_name.into(),
            error: Some(error.into()),
            ..Default::default()
        }
    }

    pub fn is_error(&self) -> bool {
        self.error.is_some()
    }
}
