//! # msharp
//!
//! msharp is an interpreter for M#, a small statement-oriented scripting
//! language with two kinds of values (numbers and text), variables,
//! `if`/`while` control flow and a fixed set of builtin methods.
//!
//! Source text goes through a lexer, a recursive-descent parser and a
//! tree-walking evaluator:
//!
//! ```
//! use std::io::Cursor;
//!
//! use msharp::Interpreter;
//!
//! let source = r#"
//!     count has value 3;
//!     while count {
//!         say do concat and use "left: ", count;
//!         set count to do sub and use count, 1;
//!     }
//! "#;
//!
//! let mut interpreter = Interpreter::new(Cursor::new(""), Vec::new());
//! interpreter.execute_source(source).unwrap();
//!
//! assert_eq!(interpreter.output(), b"left: 3\nleft: 2\nleft: 1\n");
//! ```

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

/// Defines the structure of parsed code.
///
/// This module declares the `Expr` and `Statement` enums that represent the
/// syntactic structure of a program as a tree. The AST is built by the parser
/// and walked by the evaluator.
///
/// # Responsibilities
/// - Defines expression and statement types for all language constructs.
/// - Keeps the starting token of every node for error reporting.
pub mod ast;
/// Provides unified error types for lexing, parsing and evaluation.
///
/// This module defines all errors that can be raised while running a program.
/// Each failure carries its category, a message and the line and column of
/// the offending token.
///
/// # Responsibilities
/// - Defines one error enum per failure category (lexer, parser, evaluator).
/// - Combines them in [`Error`](error::Error) for callers of the pipeline.
/// - Supports integration with standard error handling traits.
pub mod error;
/// Orchestrates the entire process of code execution.
///
/// This module ties together lexing, parsing, evaluation, value
/// representations and the builtin registry to provide a complete runtime
/// for M# programs.
///
/// # Responsibilities
/// - Coordinates all core components: lexer, parser, evaluator, and value
///   types.
/// - Provides entry points for running source text.
/// - Manages the flow of data and errors between phases.
pub mod interpreter;
/// The interactive loop.
///
/// Accumulates typed lines until they look like a complete statement and
/// submits them to a long-lived interpreter.
pub mod repl;

pub use error::{Error, ErrorKind};
pub use interpreter::evaluator::core::{Interpreter, StdioInterpreter};

/// Runs a program against the process's standard input and output.
///
/// A fresh interpreter is used, so no variables carry over between calls.
///
/// # Errors
/// Returns the first lexical, syntax or runtime failure. Output written
/// before a runtime failure stays written.
///
/// # Examples
/// ```
/// use msharp::{ErrorKind, run_source};
///
/// assert!(run_source("x has value 2;").is_ok());
///
/// // 'y' is never assigned.
/// let err = run_source("say y;").unwrap_err();
/// assert_eq!(err.kind(), ErrorKind::Runtime);
/// ```
pub fn run_source(source: &str) -> Result<(), Error> {
    StdioInterpreter::stdio().execute_source(source)
}
