use crate::interpreter::token::Position;

#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur during evaluation and runtime.
pub enum RuntimeError {
    /// Tried to read a variable that was never assigned.
    UnknownVariable {
        /// The name of the variable.
        name: String,
        /// Position of the variable reference.
        at:   Position,
    },
    /// Called a method that is not in the builtin registry.
    UnknownMethod {
        /// The method name as written in the call.
        name: String,
        /// Position of the call.
        at:   Position,
    },
    /// The wrong number of arguments was supplied to a builtin.
    ArgumentCountMismatch {
        /// The builtin's canonical name.
        method:   &'static str,
        /// The number of arguments the builtin takes.
        expected: usize,
        /// The number of arguments supplied.
        found:    usize,
        /// Position of the call.
        at:       Position,
    },
    /// A number was expected, but a text value was found.
    ExpectedNumber {
        /// Position of the call.
        at: Position,
    },
    /// A text value was expected, but a number was found.
    ExpectedText {
        /// Position of the call.
        at: Position,
    },
    /// Attempted division by a divisor indistinguishable from zero.
    DivisionByZero {
        /// Position of the call.
        at: Position,
    },
    /// Standard input ended while `readNumber` was still waiting for a number.
    InputExhausted {
        /// Position of the call.
        at: Position,
    },
    /// Reading input or writing output failed.
    Io {
        /// The underlying I/O error message.
        details: String,
        /// Position of the statement or call performing the I/O.
        at:      Position,
    },
}

impl RuntimeError {
    #[must_use]
    pub const fn position(&self) -> Position {
        match self {
            Self::UnknownVariable { at, .. }
            | Self::UnknownMethod { at, .. }
            | Self::ArgumentCountMismatch { at, .. }
            | Self::ExpectedNumber { at }
            | Self::ExpectedText { at }
            | Self::DivisionByZero { at }
            | Self::InputExhausted { at }
            | Self::Io { at, .. } => *at,
        }
    }
}

impl std::fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownVariable { name, at } => write!(f, "Undefined variable '{name}'. ({at})"),
            Self::UnknownMethod { name, at } => write!(f, "Unknown method '{name}'. ({at})"),
            Self::ArgumentCountMismatch { method,
                                          expected,
                                          found,
                                          at, } => write!(f,
                                                          "Method '{method}' expects {expected} argument(s), got {found}. ({at})"),
            Self::ExpectedNumber { at } => write!(f, "Expected a number. ({at})"),
            Self::ExpectedText { at } => write!(f, "Expected a string. ({at})"),
            Self::DivisionByZero { at } => write!(f, "Division by zero. ({at})"),
            Self::InputExhausted { at } => {
                write!(f, "Input ended before a valid number was read. ({at})")
            },
            Self::Io { details, at } => write!(f, "I/O failure: {details}. ({at})"),
        }
    }
}

impl std::error::Error for RuntimeError {}
