/// Core evaluation logic for statements and expressions.
///
/// Defines the [`Interpreter`](core::Interpreter), which owns the
/// environment, the builtin registry and the program's input and output.
pub mod core;

/// Builtin methods.
///
/// The fixed, case-insensitive table of native operations callable with
/// `do <name> and use ...`, and their implementations.
pub mod function;

/// Input and output handles passed to builtins.
pub mod io;

/// Utility functions for the evaluator.
///
/// Argument-count validation shared by every builtin.
pub mod utils;
