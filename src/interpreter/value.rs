use std::fmt;

use crate::{
    error::RuntimeError,
    interpreter::{evaluator::core::EvalResult, token::Token},
};

/// Tolerance used for truthiness, number equality and the division guard.
pub const EPSILON: f64 = f64::EPSILON;

/// Maximum number of fractional digits in a number's display form.
const MAX_FRACTION_DIGITS: usize = 16;

/// Represents a runtime value in the interpreter.
///
/// Every expression evaluates to exactly one of these; there is no null.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// A numeric value (double precision floating-point).
    Number(f64),
    /// A text value.
    Text(String),
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Self::Number(v)
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Self::Text(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Self::Text(v.to_string())
    }
}

impl From<bool> for Value {
    /// Booleans have no value kind of their own; they become `1` or `0`.
    fn from(v: bool) -> Self {
        Self::Number(if v { 1.0 } else { 0.0 })
    }
}

impl Value {
    /// Returns the number, or an error at `token` if the value is text.
    ///
    /// # Example
    /// ```
    /// use msharp::interpreter::{
    ///     token::{Position, Token, TokenKind},
    ///     value::Value,
    /// };
    ///
    /// let token = Token::new(TokenKind::Do, "do", Position::new(1, 1));
    ///
    /// assert_eq!(Value::Number(4.0).as_number(&token).unwrap(), 4.0);
    /// assert!(Value::from("four").as_number(&token).is_err());
    /// ```
    pub fn as_number(&self, token: &Token) -> EvalResult<f64> {
        match self {
            Self::Number(n) => Ok(*n),
            Self::Text(_) => Err(RuntimeError::ExpectedNumber { at: token.position() }),
        }
    }

    /// Returns the text, or an error at `token` if the value is a number.
    pub fn as_text(&self, token: &Token) -> EvalResult<&str> {
        match self {
            Self::Text(s) => Ok(s),
            Self::Number(_) => Err(RuntimeError::ExpectedText { at: token.position() }),
        }
    }

    /// Interprets the value in a condition position.
    ///
    /// A number is truthy when its magnitude exceeds [`EPSILON`]; text is
    /// truthy when it is not empty.
    #[must_use]
    pub fn is_truthy(&self) -> bool {
        match self {
            Self::Number(n) => n.abs() > EPSILON,
            Self::Text(s) => !s.is_empty(),
        }
    }

    /// Compares two values the way the `eq` and `neq` builtins do.
    ///
    /// Values of different kinds are never equal. Numbers are equal when they
    /// differ by at most [`EPSILON`]; text compares exactly.
    ///
    /// # Example
    /// ```
    /// use msharp::interpreter::value::Value;
    ///
    /// assert!(Value::Number(0.1 + 0.2).equals(&Value::Number(0.3)));
    /// assert!(!Value::Number(1.0).equals(&Value::from("1")));
    /// ```
    #[must_use]
    pub fn equals(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Number(a), Self::Number(b)) => (a - b).abs() <= EPSILON,
            (Self::Text(a), Self::Text(b)) => a == b,
            _ => false,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => f.write_str(&format_number(*n)),
            Self::Text(s) => f.write_str(s),
        }
    }
}

/// Renders a number in plain decimal notation.
///
/// At most sixteen fractional digits are kept, trailing zeros are dropped and
/// the separator is always `.`. Negative zero renders as `0`.
///
/// # Example
/// ```
/// use msharp::interpreter::value::format_number;
///
/// assert_eq!(format_number(5.0), "5");
/// assert_eq!(format_number(-2.25), "-2.25");
/// assert_eq!(format_number(1.0 / 3.0), "0.3333333333333333");
/// assert_eq!(format_number(1e-20), "0");
/// ```
#[must_use]
pub fn format_number(n: f64) -> String {
    if !n.is_finite() {
        return n.to_string();
    }

    let shortest = n.to_string();
    let text = match shortest.split_once('.') {
        Some((_, fraction)) if fraction.len() > MAX_FRACTION_DIGITS => {
            let fixed = format!("{n:.MAX_FRACTION_DIGITS$}");
            fixed.trim_end_matches('0').trim_end_matches('.').to_string()
        },
        _ => shortest,
    };

    if text == "-0" { "0".to_string() } else { text }
}
