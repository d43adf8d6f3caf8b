use crate::{
    error::RuntimeError,
    interpreter::{evaluator::core::EvalResult, token::Token},
};

/// Verifies that a builtin received exactly `expected` arguments.
///
/// # Errors
/// `ArgumentCountMismatch` at the call token, citing the method and both
/// counts.
///
/// # Example
/// ```
/// use msharp::interpreter::{
///     evaluator::utils::check_arity,
///     token::{Position, Token, TokenKind},
/// };
///
/// let token = Token::new(TokenKind::Do, "do", Position::new(2, 5));
///
/// assert!(check_arity(&[1, 2], 2, "add", &token).is_ok());
/// assert!(check_arity(&[1], 2, "add", &token).is_err());
/// ```
pub fn check_arity<T>(args: &[T],
                      expected: usize,
                      method: &'static str,
                      token: &Token)
                      -> EvalResult<()> {
    if args.len() == expected {
        Ok(())
    } else {
        Err(RuntimeError::ArgumentCountMismatch { method,
                                                  expected,
                                                  found: args.len(),
                                                  at: token.position() })
    }
}
