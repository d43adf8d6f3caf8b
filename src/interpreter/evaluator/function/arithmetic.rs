use crate::{
    error::RuntimeError,
    interpreter::{
        evaluator::{core::EvalResult, io::Io, utils::check_arity},
        token::Token,
        value::{EPSILON, Value},
    },
};

/// Applies a binary arithmetic operator to two numbers.
///
/// The generated functions accept exactly two arguments, both of which must
/// be numbers.
///
/// # Example
/// ```
/// use std::io::Cursor;
///
/// use msharp::interpreter::{
///     evaluator::{function::arithmetic::sub, io::Io},
///     token::{Position, Token, TokenKind},
///     value::Value,
/// };
///
/// let token = Token::new(TokenKind::Do, "do", Position::new(1, 1));
/// let (mut input, mut output) = (Cursor::new(""), Vec::new());
/// let mut io = Io::new(&mut input, &mut output);
///
/// let r = sub(&[Value::Number(10.0), Value::Number(4.0)], &token, &mut io).unwrap();
///
/// assert_eq!(r, Value::Number(6.0));
/// ```
macro_rules! arithmetic_builtin {
    ($fname:ident, $method:literal, $op:tt) => {
        pub fn $fname(args: &[Value], token: &Token, _: &mut Io<'_>) -> EvalResult<Value> {
            check_arity(args, 2, $method, token)?;

            Ok(Value::Number(args[0].as_number(token)? $op args[1].as_number(token)?))
        }
    };
}

arithmetic_builtin!(add, "add", +);
arithmetic_builtin!(sub, "sub", -);
arithmetic_builtin!(mul, "mul", *);

/// Divides the first number by the second.
///
/// A divisor whose magnitude does not exceed [`EPSILON`] is rejected rather
/// than producing an infinity or NaN.
pub fn div(args: &[Value], token: &Token, _: &mut Io<'_>) -> EvalResult<Value> {
    check_arity(args, 2, "div", token)?;

    let dividend = args[0].as_number(token)?;
    let divisor = args[1].as_number(token)?;
    if divisor.abs() <= EPSILON {
        return Err(RuntimeError::DivisionByZero { at: token.position() });
    }

    Ok(Value::Number(dividend / divisor))
}
