/// Token cursor and the shared parser result type.
///
/// Provides one-token lookahead over the lexer's output and the helpers used
/// to require a specific token.
pub mod core;

/// Expression parsing.
///
/// Literals, variable references and `do ... and use ...` calls.
pub mod expression;

/// Statement parsing.
///
/// Assignments, `say`, calls, `set`, blocks, `if` and `while`.
pub mod statement;

use crate::{
    ast::Statement,
    interpreter::{
        parser::{
            core::{ParseResult, TokenCursor},
            statement::parse_statement,
        },
        token::Token,
    },
};

/// Parses a whole program into its statements.
///
/// Parsing stops at the first malformed construct; there is no error
/// recovery.
///
/// # Errors
/// Returns a [`ParseError`](crate::error::ParseError) positioned at the
/// offending token.
///
/// # Example
/// ```
/// use msharp::{
///     ast::Statement,
///     interpreter::{lexer::tokenize, parser::parse},
/// };
///
/// let tokens = tokenize("x has value 1; say x;").unwrap();
/// let program = parse(&tokens).unwrap();
///
/// assert_eq!(program.len(), 2);
/// assert!(matches!(program[1], Statement::Say { .. }));
/// ```
pub fn parse(tokens: &[Token]) -> ParseResult<Vec<Statement>> {
    let mut cursor = TokenCursor::new(tokens);
    let mut statements = Vec::new();

    while !cursor.is_at_end() {
        statements.push(parse_statement(&mut cursor)?);
    }

    Ok(statements)
}
