use crate::{
    ast::{Block, Statement},
    error::ParseError,
    interpreter::{
        parser::{
            core::{ParseResult, TokenCursor},
            expression::{parse_call, parse_expression, parse_number},
        },
        token::{Token, TokenKind},
    },
};

/// Parses a single statement.
///
/// A statement may be one of:
/// - a block (`{ ... }`).
/// - a `say` statement.
/// - a method call used as a statement.
/// - a `set ... to` assignment from a call.
/// - an `if` or `while` statement.
/// - an identifier-led assignment (`has value` or `means`).
///
/// The statement kind is decided by the first token alone; nothing is
/// attempted and rolled back.
///
/// # Parameters
/// - `cursor`: Token cursor positioned at the statement's first token.
///
/// # Returns
/// A parsed [`Statement`] node.
pub fn parse_statement(cursor: &mut TokenCursor<'_>) -> ParseResult<Statement> {
    match cursor.peek().kind {
        TokenKind::LeftBrace => {
            let brace = cursor.advance();
            Ok(Statement::Block(parse_block(cursor, brace)?))
        },
        TokenKind::Say => {
            let token = cursor.advance();
            let expr = parse_expression(cursor)?;
            cursor.expect_semicolon("say statement")?;
            Ok(Statement::Say { expr, token })
        },
        TokenKind::Do => {
            let call = parse_call(cursor)?;
            cursor.expect_semicolon("method call")?;
            Ok(Statement::Call(call))
        },
        TokenKind::Set => parse_set(cursor),
        TokenKind::If => parse_if(cursor),
        TokenKind::While => parse_while(cursor),
        TokenKind::Identifier => parse_identifier_led(cursor),
        _ => {
            let token = cursor.peek();
            Err(ParseError::UnexpectedToken { token: token.describe(),
                                              at:    token.position(), })
        },
    }
}

/// Parses an assignment introduced by a variable name.
///
/// Grammar:
/// ```text
///     IDENT "has" "value" NUMBER ";"
///     IDENT "means" STRING ";"
/// ```
///
/// # Errors
/// `StandaloneIdentifier` if the name is followed by anything else.
fn parse_identifier_led(cursor: &mut TokenCursor<'_>) -> ParseResult<Statement> {
    let identifier = cursor.expect(TokenKind::Identifier, "Expected identifier.")?;

    if cursor.next_if(TokenKind::Has).is_some() {
        cursor.expect(TokenKind::Value, "Expected keyword 'value' after 'has'.")?;
        let number = cursor.expect(TokenKind::Number, "Expected numeric literal after 'has value'.")?;
        let value = parse_number(&number)?;
        cursor.expect_semicolon("numeric assignment")?;

        return Ok(Statement::NumberAssignment { name: identifier.text.clone(),
                                                value,
                                                token: identifier });
    }

    if cursor.next_if(TokenKind::Means).is_some() {
        let text = cursor.expect(TokenKind::Text,
                                 "Expected string literal after 'means'. Text values must use double quotes.")?;
        cursor.expect_semicolon("text assignment")?;

        return Ok(Statement::TextAssignment { name:  identifier.text.clone(),
                                              value: text.text,
                                              token: identifier, });
    }

    let at = identifier.position();
    Err(ParseError::StandaloneIdentifier { name: identifier.text,
                                           at })
}

/// Parses `set <name> to <call>;`.
///
/// Only a method call may appear on the right-hand side.
fn parse_set(cursor: &mut TokenCursor<'_>) -> ParseResult<Statement> {
    let token = cursor.expect(TokenKind::Set, "Expected 'set'.")?;
    let name = cursor.expect(TokenKind::Identifier, "Expected variable name after 'set'.")?;
    cursor.expect(TokenKind::To, "Expected keyword 'to' after variable name.")?;

    if !cursor.check(TokenKind::Do) {
        return Err(ParseError::ExpectedCallAfterSet { at: cursor.peek().position() });
    }

    let call = parse_call(cursor)?;
    cursor.expect_semicolon("set statement")?;

    Ok(Statement::SetFromCall { name: name.text,
                                call,
                                token })
}

/// Parses an `if` statement with an optional `else` block.
///
/// Syntax:
/// ```text
///     if <condition> { ... }
///     if <condition> { ... } else { ... }
/// ```
/// There is no `else if`; nest an `if` inside the `else` block instead.
fn parse_if(cursor: &mut TokenCursor<'_>) -> ParseResult<Statement> {
    let token = cursor.expect(TokenKind::If, "Expected 'if'.")?;
    let condition = parse_expression(cursor)?;
    let then_block = parse_required_block(cursor, "if")?;

    let else_block = match cursor.next_if(TokenKind::Else) {
        Some(_) => Some(parse_required_block(cursor, "else")?),
        None => None,
    };

    Ok(Statement::If { condition,
                       then_block,
                       else_block,
                       token })
}

/// Parses `while <condition> { ... }`.
fn parse_while(cursor: &mut TokenCursor<'_>) -> ParseResult<Statement> {
    let token = cursor.expect(TokenKind::While, "Expected 'while'.")?;
    let condition = parse_expression(cursor)?;
    let body = parse_required_block(cursor, "while")?;

    Ok(Statement::While { condition,
                          body,
                          token })
}

fn parse_required_block(cursor: &mut TokenCursor<'_>,
                        keyword: &'static str)
                        -> ParseResult<Block> {
    match cursor.next_if(TokenKind::LeftBrace) {
        Some(brace) => parse_block(cursor, brace),
        None => Err(ParseError::ExpectedBlock { keyword,
                                                at: cursor.peek().position() }),
    }
}

/// Parses the statements of a block up to and including its closing brace.
///
/// Grammar: `block := "{" statement* "}"`
///
/// # Parameters
/// - `cursor`: Token cursor positioned after the opening brace.
/// - `brace`: The opening brace token, kept as the block's position.
fn parse_block(cursor: &mut TokenCursor<'_>, brace: Token) -> ParseResult<Block> {
    let mut statements = Vec::new();

    while !cursor.check(TokenKind::RightBrace) && !cursor.is_at_end() {
        statements.push(parse_statement(cursor)?);
    }

    if cursor.next_if(TokenKind::RightBrace).is_none() {
        return Err(ParseError::UnclosedBlock { at: cursor.peek().position() });
    }

    Ok(Block { statements,
               token: brace })
}
