use crate::{
    error::ParseError,
    interpreter::token::{Position, Token, TokenKind},
};

pub type ParseResult<T> = Result<T, ParseError>;

/// A forward-only cursor over a token sequence with one token of lookahead.
///
/// The cursor never moves past the end-of-input token. If the sequence does
/// not end with one, a synthetic end-of-input token is used in its place, so
/// that [`TokenCursor::peek`] always has something to return.
pub struct TokenCursor<'a> {
    tokens:  &'a [Token],
    current: usize,
    end:     Token,
}

impl<'a> TokenCursor<'a> {
    #[must_use]
    pub fn new(tokens: &'a [Token]) -> Self {
        let at = tokens.last().map_or(Position::new(1, 1), Token::position);

        Self { tokens,
               current: 0,
               end: Token::new(TokenKind::EndOfInput, "", at) }
    }

    /// The next unconsumed token.
    #[must_use]
    pub fn peek(&self) -> &Token {
        self.tokens.get(self.current).unwrap_or(&self.end)
    }

    #[must_use]
    pub fn is_at_end(&self) -> bool {
        self.peek().kind == TokenKind::EndOfInput
    }

    /// Returns `true` if the next token has the given kind.
    #[must_use]
    pub fn check(&self, kind: TokenKind) -> bool {
        self.peek().kind == kind
    }

    /// Consumes and returns the next token. At the end of input the
    /// end-of-input token is returned and the cursor stays put.
    pub fn advance(&mut self) -> Token {
        let token = self.peek().clone();
        if !self.is_at_end() {
            self.current += 1;
        }
        token
    }

    /// Consumes the next token if it has the given kind.
    pub fn next_if(&mut self, kind: TokenKind) -> Option<Token> {
        self.check(kind).then(|| self.advance())
    }

    /// Consumes a token of the given kind, or fails at the offending token
    /// with the given expectation message.
    pub fn expect(&mut self, kind: TokenKind, expected: &'static str) -> ParseResult<Token> {
        self.next_if(kind)
            .ok_or_else(|| ParseError::Expected { expected,
                                                  at: self.peek().position() })
    }

    /// Consumes the `;` that ends a statement of the given kind.
    pub fn expect_semicolon(&mut self, context: &'static str) -> ParseResult<()> {
        match self.next_if(TokenKind::Semicolon) {
            Some(_) => Ok(()),
            None => Err(ParseError::MissingSemicolon { context,
                                                       at: self.peek().position() }),
        }
    }
}
