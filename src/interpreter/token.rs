use std::fmt;

use logos::Logos;

use crate::interpreter::lexer::{LexIssue, LexerExtras, lex_text, newline, reject_sign};

/// Represents the category of a lexical token.
///
/// Keywords are matched case-sensitively; an identifier that spells a keyword
/// exactly always becomes the keyword. `EndOfInput` is never produced by the
/// generated lexer itself, it is appended by [`tokenize`] once the source is
/// exhausted.
///
/// [`tokenize`]: crate::interpreter::lexer::tokenize
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[logos(extras = LexerExtras)]
#[logos(error = LexIssue)]
pub enum TokenKind {
    /// `has`
    #[token("has")]
    Has,
    /// `value`
    #[token("value")]
    Value,
    /// `means`
    #[token("means")]
    Means,
    /// `say`
    #[token("say")]
    Say,
    /// `do`
    #[token("do")]
    Do,
    /// `and`
    #[token("and")]
    And,
    /// `use`
    #[token("use")]
    Use,
    /// `set`
    #[token("set")]
    Set,
    /// `to`
    #[token("to")]
    To,
    /// `if`
    #[token("if")]
    If,
    /// `else`
    #[token("else")]
    Else,
    /// `while`
    #[token("while")]
    While,
    /// Identifier tokens; variable or method names such as `total` or `add`.
    #[regex(r"[\p{L}_][\p{L}\p{N}_]*")]
    Identifier,
    /// Numeric literals such as `42`, `-3.5` or `7.`.
    ///
    /// A `-` that is not directly followed by a digit is rejected here, since
    /// the language has no operator tokens.
    #[regex(r"-?[0-9]+(\.[0-9]*)?")]
    #[token("-", reject_sign)]
    Number,
    /// Double quoted text literals. The token text holds the unescaped
    /// contents.
    #[token("\"", lex_text)]
    Text,
    /// `;`
    #[token(";")]
    Semicolon,
    /// `,`
    #[token(",")]
    Comma,
    /// `{`
    #[token("{")]
    LeftBrace,
    /// `}`
    #[token("}")]
    RightBrace,
    /// `// Comments.`
    #[regex(r"//[^\n]*", logos::skip, allow_greedy = true)]
    Comment,
    /// Line breaks; skipped after advancing the line counter.
    #[token("\n", newline)]
    NewLine,
    /// Spaces, tabs, carriage returns and other non-breaking whitespace.
    #[regex(r"[^\S\n]+", logos::skip)]
    Ignored,
    /// Terminal token appended after the last real token.
    EndOfInput,
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Has => "has",
            Self::Value => "value",
            Self::Means => "means",
            Self::Say => "say",
            Self::Do => "do",
            Self::And => "and",
            Self::Use => "use",
            Self::Set => "set",
            Self::To => "to",
            Self::If => "if",
            Self::Else => "else",
            Self::While => "while",
            Self::Identifier => "identifier",
            Self::Number => "number",
            Self::Text => "string",
            Self::Semicolon => ";",
            Self::Comma => ",",
            Self::LeftBrace => "{",
            Self::RightBrace => "}",
            Self::Comment => "comment",
            Self::NewLine => "newline",
            Self::Ignored => "whitespace",
            Self::EndOfInput => "end of input",
        };

        f.write_str(name)
    }
}

/// A 1-based line and column in the source text.
///
/// Columns count characters, not bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct Position {
    /// Source line, starting at 1.
    pub line:   usize,
    /// Character column within the line, starting at 1.
    pub column: usize,
}

impl Position {
    #[must_use]
    pub const fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {}, col {}", self.line, self.column)
    }
}

/// A classified, positioned lexical unit.
///
/// `text` is the literal source slice, except for [`TokenKind::Text`] tokens
/// where it holds the literal's contents with escapes already applied.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub kind:   TokenKind,
    pub text:   String,
    pub line:   usize,
    pub column: usize,
}

impl Token {
    /// Creates a token at the given position.
    ///
    /// # Example
    /// ```
    /// use msharp::interpreter::token::{Position, Token, TokenKind};
    ///
    /// let token = Token::new(TokenKind::Identifier, "total", Position::new(3, 7));
    ///
    /// assert_eq!(token.position(), Position::new(3, 7));
    /// assert_eq!(token.text, "total");
    /// ```
    #[must_use]
    pub fn new(kind: TokenKind, text: impl Into<String>, at: Position) -> Self {
        Self { kind,
               text: text.into(),
               line: at.line,
               column: at.column }
    }

    #[must_use]
    pub const fn position(&self) -> Position {
        Position::new(self.line, self.column)
    }

    /// Returns the token text, or the kind name when the text is empty.
    ///
    /// Used when quoting a token in an error message, so that the end of
    /// input still reads as something.
    #[must_use]
    pub fn describe(&self) -> String {
        if self.text.is_empty() {
            self.kind.to_string()
        } else {
            self.text.clone()
        }
    }
}
