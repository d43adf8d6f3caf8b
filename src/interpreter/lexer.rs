use logos::{Lexer, Logos, Skip};

use crate::{
    error::LexError,
    interpreter::token::{Position, Token, TokenKind},
};

/// Additional information carried by the lexer during tokenization.
///
/// Tracks the current line and the byte offset at which it starts, so that a
/// byte span can be turned into a line and character column.
#[derive(Default)]
pub struct LexerExtras {
    /// The current line number in the source being tokenized.
    pub line:       usize,
    /// Byte offset of the first character of the current line.
    pub line_start: usize,
}

impl LexerExtras {
    /// Converts a byte offset on the current line into a [`Position`].
    fn position_of(&self, source: &str, offset: usize) -> Position {
        let column = source.get(self.line_start..offset)
                           .map_or(0, |prefix| prefix.chars().count());

        Position::new(self.line, column + 1)
    }

    /// Advances the line counter over any line breaks inside `slice`, which
    /// begins at byte offset `start`.
    fn advance_over(&mut self, slice: &str, start: usize) {
        for (offset, _) in slice.match_indices('\n') {
            self.line += 1;
            self.line_start = start + offset + 1;
        }
    }
}

/// Lexical failure reported by the generated lexer before it is positioned.
///
/// The default variant is what the lexer yields for input no rule accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LexIssue {
    #[default]
    UnexpectedCharacter,
    UnterminatedText,
    InvalidNumber,
}

impl LexIssue {
    fn at(self, slice: &str, at: Position) -> LexError {
        match self {
            Self::UnexpectedCharacter => {
                LexError::UnexpectedCharacter { character: slice.chars().next().unwrap_or('\0'),
                                                at }
            },
            Self::UnterminatedText => LexError::UnterminatedText { at },
            Self::InvalidNumber => LexError::InvalidNumber { at },
        }
    }
}

/// Converts raw source text into a sequence of positioned tokens.
///
/// Whitespace and `//` line comments are skipped. The returned sequence always
/// ends with a single [`TokenKind::EndOfInput`] token positioned just past the
/// last character of the source.
///
/// # Errors
/// Returns a [`LexError`] at the first malformed character: an unterminated
/// text literal (positioned at its opening quote), a `-` that does not start
/// a number, or any character no token can start with.
///
/// # Example
/// ```
/// use msharp::interpreter::{lexer::tokenize, token::TokenKind};
///
/// let tokens = tokenize("x has value -2.5;").unwrap();
/// let kinds = tokens.iter().map(|t| t.kind).collect::<Vec<_>>();
///
/// assert_eq!(kinds,
///            [TokenKind::Identifier,
///             TokenKind::Has,
///             TokenKind::Value,
///             TokenKind::Number,
///             TokenKind::Semicolon,
///             TokenKind::EndOfInput]);
/// assert_eq!(tokens[3].text, "-2.5");
/// ```
pub fn tokenize(source: &str) -> Result<Vec<Token>, LexError> {
    let mut lexer = TokenKind::lexer_with_extras(source, LexerExtras { line:       1,
                                                                       line_start: 0, });
    let mut tokens = Vec::new();

    while let Some(kind) = lexer.next() {
        let span = lexer.span();
        let slice = lexer.slice();
        let at = lexer.extras.position_of(source, span.start);

        match kind {
            Ok(TokenKind::Text) => {
                let body = &slice[1..slice.len() - 1];
                tokens.push(Token::new(TokenKind::Text, unescape(body), at));
                lexer.extras.advance_over(slice, span.start);
            },
            Ok(kind) => tokens.push(Token::new(kind, slice, at)),
            Err(issue) => return Err(issue.at(slice, at)),
        }
    }

    let end = lexer.extras.position_of(source, source.len());
    tokens.push(Token::new(TokenKind::EndOfInput, "", end));

    Ok(tokens)
}

/// Consumes a text literal after its opening quote.
///
/// The literal must close on the same line; an escaped line break does not
/// end the literal. On success the lexer is bumped past the closing quote.
pub(crate) fn lex_text(lex: &mut Lexer<'_, TokenKind>) -> Result<(), LexIssue> {
    let mut chars = lex.remainder().char_indices();

    while let Some((offset, c)) = chars.next() {
        match c {
            '"' => {
                lex.bump(offset + 1);
                return Ok(());
            },
            '\\' => {
                if chars.next().is_none() {
                    break;
                }
            },
            '\n' => break,
            _ => {},
        }
    }

    Err(LexIssue::UnterminatedText)
}

/// A lone `-` is not an operator; it is only valid as a number sign.
pub(crate) fn reject_sign(_: &mut Lexer<'_, TokenKind>) -> Result<(), LexIssue> {
    Err(LexIssue::InvalidNumber)
}

pub(crate) fn newline(lex: &mut Lexer<'_, TokenKind>) -> Skip {
    lex.extras.line += 1;
    lex.extras.line_start = lex.span().end;
    Skip
}

/// Applies the escape sequences `\n`, `\r`, `\t`, `\"` and `\\`. Any other
/// escaped character stands for itself.
fn unescape(body: &str) -> String {
    let mut text = String::with_capacity(body.len());
    let mut chars = body.chars();

    while let Some(c) = chars.next() {
        if c != '\\' {
            text.push(c);
            continue;
        }

        match chars.next() {
            Some('n') => text.push('\n'),
            Some('r') => text.push('\r'),
            Some('t') => text.push('\t'),
            Some(other) => text.push(other),
            None => break,
        }
    }

    text
}
