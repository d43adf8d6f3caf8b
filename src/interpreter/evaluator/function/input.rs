use crate::{
    error::RuntimeError,
    interpreter::{
        evaluator::{
            core::EvalResult,
            io::{Io, positioned},
            utils::check_arity,
        },
        token::Token,
        value::Value,
    },
};

/// Written after a line that does not parse as a number.
pub const INVALID_NUMBER_NOTICE: &str = "Invalid number. Try again.";

/// Prompts for a number until one is entered.
///
/// The prompt text is written without a newline. Each line read is trimmed
/// and parsed; on failure [`INVALID_NUMBER_NOTICE`] is written and the prompt
/// repeats.
///
/// # Errors
/// - `ExpectedText` if the prompt is not text.
/// - `InputExhausted` if input ends before a valid number arrives.
pub fn read_number(args: &[Value], token: &Token, io: &mut Io<'_>) -> EvalResult<Value> {
    check_arity(args, 1, "readNumber", token)?;
    let prompt = args[0].as_text(token)?;

    loop {
        positioned(io.prompt(prompt), token)?;

        let Some(line) = positioned(io.read_line(), token)? else {
            return Err(RuntimeError::InputExhausted { at: token.position() });
        };

        if let Ok(number) = line.trim().parse::<f64>() {
            return Ok(Value::Number(number));
        }

        positioned(io.write_line(INVALID_NUMBER_NOTICE), token)?;
    }
}

/// Prompts for one line of text and returns it verbatim.
///
/// At the end of input the line is taken to be empty.
///
/// # Example
/// ```
/// use std::io::Cursor;
///
/// use msharp::interpreter::{
///     evaluator::{function::input::read_string, io::Io},
///     token::{Position, Token, TokenKind},
///     value::Value,
/// };
///
/// let token = Token::new(TokenKind::Do, "do", Position::new(1, 1));
/// let mut input = Cursor::new("Ada\n");
/// let mut output = Vec::new();
///
/// let name = read_string(&["Name: ".into()], &token, &mut Io::new(&mut input, &mut output))
///     .unwrap();
///
/// assert_eq!(name, Value::from("Ada"));
/// assert_eq!(output, b"Name: ");
/// ```
pub fn read_string(args: &[Value], token: &Token, io: &mut Io<'_>) -> EvalResult<Value> {
    check_arity(args, 1, "readString", token)?;
    let prompt = args[0].as_text(token)?;

    positioned(io.prompt(prompt), token)?;
    let line = positioned(io.read_line(), token)?.unwrap_or_default();

    Ok(Value::Text(line))
}
