use crate::interpreter::{
    evaluator::{core::EvalResult, io::Io, utils::check_arity},
    token::Token,
    value::Value,
};

/// Returns `1` if the two values are equal and `0` otherwise.
///
/// See [`Value::equals`] for the equality rule.
pub fn eq(args: &[Value], token: &Token, _: &mut Io<'_>) -> EvalResult<Value> {
    check_arity(args, 2, "eq", token)?;

    Ok(args[0].equals(&args[1]).into())
}

/// Returns `0` if the two values are equal and `1` otherwise.
pub fn neq(args: &[Value], token: &Token, _: &mut Io<'_>) -> EvalResult<Value> {
    check_arity(args, 2, "neq", token)?;

    Ok((!args[0].equals(&args[1])).into())
}
