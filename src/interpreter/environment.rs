use std::collections::HashMap;

use crate::{
    error::RuntimeError,
    interpreter::{evaluator::core::EvalResult, token::Token, value::Value},
};

/// The program's variable store.
///
/// A single flat mapping from case-sensitive name to value. There are no
/// scopes: blocks, `if` and `while` bodies all read and write the same
/// variables, and an assignment to an existing name overwrites it.
#[derive(Debug, Clone, Default)]
pub struct Environment {
    variables: HashMap<String, Value>,
}

impl Environment {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts or overwrites a variable.
    pub fn set(&mut self, name: impl Into<String>, value: Value) {
        self.variables.insert(name.into(), value);
    }

    /// Returns a copy of the variable's value.
    ///
    /// # Errors
    /// `UnknownVariable` at `token` if the name was never assigned.
    ///
    /// # Example
    /// ```
    /// use msharp::interpreter::{
    ///     environment::Environment,
    ///     token::{Position, Token, TokenKind},
    ///     value::Value,
    /// };
    ///
    /// let mut env = Environment::new();
    /// let token = Token::new(TokenKind::Identifier, "x", Position::new(1, 1));
    ///
    /// env.set("x", Value::Number(2.0));
    /// assert_eq!(env.get("x", &token).unwrap(), Value::Number(2.0));
    /// assert!(env.get("X", &token).is_err());
    /// ```
    pub fn get(&self, name: &str, token: &Token) -> EvalResult<Value> {
        self.variables
            .get(name)
            .cloned()
            .ok_or_else(|| RuntimeError::UnknownVariable { name: name.to_string(),
                                                           at:   token.position(), })
    }

    /// Looks a variable up without failing.
    ///
    /// Read-only inspection of program state for embedders and the
    /// interactive loop; evaluation itself goes through [`Environment::get`].
    #[must_use]
    pub fn lookup(&self, name: &str) -> Option<&Value> {
        self.variables.get(name)
    }
}
