use crate::{
    ast::{Call, Expr},
    error::ParseError,
    interpreter::{
        parser::core::{ParseResult, TokenCursor},
        token::{Token, TokenKind},
    },
};

/// Parses a single expression.
///
/// Grammar: `expression := NUMBER | STRING | IDENT | call`
///
/// There are no operators; arithmetic and comparison go through builtin
/// calls.
///
/// # Errors
/// `UnexpectedTokenInExpression` if the next token cannot start an
/// expression, or `InvalidNumberLiteral` for unparsable numeric text.
pub fn parse_expression(cursor: &mut TokenCursor<'_>) -> ParseResult<Expr> {
    match cursor.peek().kind {
        TokenKind::Number => {
            let token = cursor.advance();
            let value = parse_number(&token)?;
            Ok(Expr::Number { value, token })
        },
        TokenKind::Text => {
            let token = cursor.advance();
            Ok(Expr::Text { value: token.text.clone(),
                            token })
        },
        TokenKind::Identifier => {
            let token = cursor.advance();
            Ok(Expr::Variable { name: token.text.clone(),
                                token })
        },
        TokenKind::Do => Ok(Expr::Call(parse_call(cursor)?)),
        _ => {
            let bad = cursor.peek();
            Err(ParseError::UnexpectedTokenInExpression { token: bad.describe(),
                                                          at:    bad.position(), })
        },
    }
}

/// Parses a method call.
///
/// Grammar: `call := "do" IDENT "and" "use" (expression ("," expression)*)?`
///
/// The argument list is optional. It is absent when the token after `use`
/// is `;`, `{`, `}` or the end of input.
pub fn parse_call(cursor: &mut TokenCursor<'_>) -> ParseResult<Call> {
    let token = cursor.expect(TokenKind::Do, "Expected 'do'.")?;
    let name = cursor.expect(TokenKind::Identifier, "Expected method name after 'do'.")?;
    cursor.expect(TokenKind::And, "Expected keyword 'and' after method name.")?;
    cursor.expect(TokenKind::Use, "Expected keyword 'use' after 'and'.")?;

    let mut arguments = Vec::new();
    if !is_expression_terminator(cursor.peek().kind) {
        arguments.push(parse_expression(cursor)?);
        while cursor.next_if(TokenKind::Comma).is_some() {
            arguments.push(parse_expression(cursor)?);
        }
    }

    Ok(Call { name: name.text,
              arguments,
              token })
}

/// Converts a numeric literal token to its value.
///
/// # Example
/// ```
/// use msharp::interpreter::{
///     parser::expression::parse_number,
///     token::{Position, Token, TokenKind},
/// };
///
/// let token = Token::new(TokenKind::Number, "-12.5", Position::new(1, 1));
///
/// assert_eq!(parse_number(&token).unwrap(), -12.5);
/// ```
pub fn parse_number(token: &Token) -> ParseResult<f64> {
    token.text
         .parse()
         .map_err(|_| ParseError::InvalidNumberLiteral { literal: token.text.clone(),
                                                         at:      token.position(), })
}

const fn is_expression_terminator(kind: TokenKind) -> bool {
    matches!(kind,
             TokenKind::Semicolon
             | TokenKind::LeftBrace
             | TokenKind::RightBrace
             | TokenKind::EndOfInput)
}
