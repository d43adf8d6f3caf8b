use crate::interpreter::token::Position;

#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur during parsing.
///
/// Every variant is positioned at the offending token, i.e. the token that was
/// found where something else was expected.
pub enum ParseError {
    /// A token that cannot start a statement.
    UnexpectedToken {
        /// The token encountered.
        token: String,
        /// Where the token appears.
        at:    Position,
    },
    /// A token that cannot start an expression.
    UnexpectedTokenInExpression {
        /// The token encountered.
        token: String,
        /// Where the token appears.
        at:    Position,
    },
    /// A specific keyword, name or literal was required but not found.
    Expected {
        /// Human-readable description of what was expected.
        expected: &'static str,
        /// Where the offending token appears.
        at:       Position,
    },
    /// A statement was not terminated with `;`.
    MissingSemicolon {
        /// The kind of statement that needed the semicolon.
        context: &'static str,
        /// Where the offending token appears.
        at:      Position,
    },
    /// An identifier led a statement without `has value` or `means` after it.
    StandaloneIdentifier {
        /// The identifier.
        name: String,
        /// Where the identifier appears.
        at:   Position,
    },
    /// A numeric literal whose text does not parse as a number.
    InvalidNumberLiteral {
        /// The literal text.
        literal: String,
        /// Where the literal appears.
        at:      Position,
    },
    /// `set <name> to` was not followed by a method call.
    ExpectedCallAfterSet {
        /// Where the offending token appears.
        at: Position,
    },
    /// A control-flow keyword was not followed by a `{`.
    ExpectedBlock {
        /// The keyword whose block is missing.
        keyword: &'static str,
        /// Where the offending token appears.
        at:      Position,
    },
    /// A block reached the end of input before its `}`.
    UnclosedBlock {
        /// Where the offending token appears.
        at: Position,
    },
}

impl ParseError {
    #[must_use]
    pub const fn position(&self) -> Position {
        match self {
            Self::UnexpectedToken { at, .. }
            | Self::UnexpectedTokenInExpression { at, .. }
            | Self::Expected { at, .. }
            | Self::MissingSemicolon { at, .. }
            | Self::StandaloneIdentifier { at, .. }
            | Self::InvalidNumberLiteral { at, .. }
            | Self::ExpectedCallAfterSet { at }
            | Self::ExpectedBlock { at, .. }
            | Self::UnclosedBlock { at } => *at,
        }
    }
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnexpectedToken { token, at } => write!(f, "Unexpected token '{token}'. ({at})"),

            Self::UnexpectedTokenInExpression { token, at } => {
                write!(f, "Unexpected token '{token}' in expression. ({at})")
            },

            Self::Expected { expected, at } => write!(f, "{expected} ({at})"),

            Self::MissingSemicolon { context, at } => {
                write!(f, "Missing semicolon ';' after {context}. ({at})")
            },

            Self::StandaloneIdentifier { name, at } => write!(f,
                                                              "Undefined variable '{name}'. Standalone identifiers are not valid statements. ({at})"),

            Self::InvalidNumberLiteral { literal, at } => {
                write!(f, "Invalid number literal '{literal}'. ({at})")
            },

            Self::ExpectedCallAfterSet { at } => write!(f,
                                                        "Expected method call after 'set <name> to'. Use: set x to do method and use ...; ({at})"),

            Self::ExpectedBlock { keyword, at } => {
                write!(f, "Expected '{{' to start {keyword} block. ({at})")
            },

            Self::UnclosedBlock { at } => write!(f, "Expected '}}' to close block. ({at})"),
        }
    }
}

impl std::error::Error for ParseError {}
