use std::fmt;

use crate::interpreter::token::Position;

/// Lexical errors.
///
/// Raised while turning source text into tokens: unterminated text literals,
/// a `-` that does not start a number, and characters no token can start
/// with.
pub mod lex_error;
/// Parsing errors.
///
/// Defines all error types that can occur while matching the token stream
/// against the grammar. The parser stops at the first one; there is no
/// recovery.
pub mod parse_error;
/// Runtime errors.
///
/// Contains all error types that can be raised during evaluation: undefined
/// variables, unknown methods, wrong argument counts, mismatched value kinds
/// and division by zero.
pub mod runtime_error;

pub use lex_error::LexError;
pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;

/// The failure category of an [`Error`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Lexical,
    Syntax,
    Runtime,
}

/// Any failure raised by the pipeline.
///
/// The first failure aborts the execution unit it occurred in; nothing inside
/// the pipeline catches or recovers from one.
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// The character stream is malformed.
    Lexical(LexError),
    /// The token stream does not match the grammar.
    Syntax(ParseError),
    /// Evaluation failed.
    Runtime(RuntimeError),
}

impl Error {
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::Lexical(_) => ErrorKind::Lexical,
            Self::Syntax(_) => ErrorKind::Syntax,
            Self::Runtime(_) => ErrorKind::Runtime,
        }
    }

    /// Returns the source position of the offending token or character.
    #[must_use]
    pub const fn position(&self) -> Position {
        match self {
            Self::Lexical(e) => e.position(),
            Self::Syntax(e) => e.position(),
            Self::Runtime(e) => e.position(),
        }
    }
}

impl From<LexError> for Error {
    fn from(e: LexError) -> Self {
        Self::Lexical(e)
    }
}

impl From<ParseError> for Error {
    fn from(e: ParseError) -> Self {
        Self::Syntax(e)
    }
}

impl From<RuntimeError> for Error {
    fn from(e: RuntimeError) -> Self {
        Self::Runtime(e)
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Lexical(e) => write!(f, "{e}"),
            Self::Syntax(e) => write!(f, "{e}"),
            Self::Runtime(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Lexical(e) => Some(e),
            Self::Syntax(e) => Some(e),
            Self::Runtime(e) => Some(e),
        }
    }
}
