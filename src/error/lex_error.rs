use crate::interpreter::token::Position;

#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur during lexing.
pub enum LexError {
    /// A character that cannot start any token.
    UnexpectedCharacter {
        /// The offending character.
        character: char,
        /// Where the character appears.
        at:        Position,
    },
    /// A text literal did not close before a line break or the end of input.
    UnterminatedText {
        /// Position of the opening quote.
        at: Position,
    },
    /// A `-` that is not immediately followed by a digit.
    InvalidNumber {
        /// Position of the literal's first character.
        at: Position,
    },
}

impl LexError {
    #[must_use]
    pub const fn position(&self) -> Position {
        match self {
            Self::UnexpectedCharacter { at, .. }
            | Self::UnterminatedText { at }
            | Self::InvalidNumber { at } => *at,
        }
    }
}

impl std::fmt::Display for LexError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnexpectedCharacter { character, at } => {
                write!(f, "Unexpected character '{character}'. ({at})")
            },
            Self::UnterminatedText { at } => write!(f, "Unterminated string literal. ({at})"),
            Self::InvalidNumber { at } => write!(f, "Invalid number literal. ({at})"),
        }
    }
}

impl std::error::Error for LexError {}
