/// The variable store.
///
/// A single flat, case-sensitive mapping from name to value shared by every
/// statement of a program.
pub mod environment;
/// The evaluator module executes AST nodes and produces side effects.
///
/// The evaluator walks statements in order, evaluates expressions, updates
/// the environment, calls builtins and writes `say` output. It is the core
/// execution engine of the interpreter.
///
/// # Responsibilities
/// - Executes statements and evaluates expressions.
/// - Dispatches method calls to the builtin registry.
/// - Reports runtime errors such as undefined variables or division by zero.
pub mod evaluator;
/// The lexer module tokenizes source code for further parsing.
///
/// The lexer reads the raw source text and produces a sequence of positioned
/// tokens: keywords, identifiers, numbers, text literals and punctuation. This
/// is the first stage of interpretation.
///
/// # Responsibilities
/// - Converts the input character stream into tokens with line and column.
/// - Applies escape sequences inside text literals.
/// - Reports lexical errors for invalid or malformed input.
pub mod lexer;
/// The parser module builds the abstract syntax tree (AST) from tokens.
///
/// A recursive-descent parser with one token of lookahead. It never
/// backtracks and stops at the first malformed construct.
///
/// # Responsibilities
/// - Converts tokens into statement and expression nodes.
/// - Converts numeric literal text to numbers.
/// - Reports syntax errors positioned at the offending token.
pub mod parser;
/// Lexical token categories and the positioned token value.
pub mod token;
/// The value module defines the runtime data types for evaluation.
///
/// A value is either a number or a text. This module also defines how values
/// are displayed, compared and interpreted as conditions.
pub mod value;
