use crate::interpreter::{
    evaluator::{core::EvalResult, io::Io, utils::check_arity},
    token::Token,
    value::Value,
};

/// Converts any value to its display text.
///
/// Registered as `toString`.
pub fn to_text(args: &[Value], token: &Token, _: &mut Io<'_>) -> EvalResult<Value> {
    check_arity(args, 1, "toString", token)?;

    Ok(Value::Text(args[0].to_string()))
}

/// Joins the display text of two values.
///
/// # Example
/// ```
/// use std::io::Cursor;
///
/// use msharp::interpreter::{
///     evaluator::{function::text::concat, io::Io},
///     token::{Position, Token, TokenKind},
///     value::Value,
/// };
///
/// let token = Token::new(TokenKind::Do, "do", Position::new(1, 1));
/// let (mut input, mut output) = (Cursor::new(""), Vec::new());
/// let mut io = Io::new(&mut input, &mut output);
///
/// let joined = concat(&["total: ".into(), Value::Number(2.5)], &token, &mut io).unwrap();
///
/// assert_eq!(joined, Value::from("total: 2.5"));
/// ```
pub fn concat(args: &[Value], token: &Token, _: &mut Io<'_>) -> EvalResult<Value> {
    check_arity(args, 2, "concat", token)?;

    Ok(Value::Text(format!("{}{}", args[0], args[1])))
}
