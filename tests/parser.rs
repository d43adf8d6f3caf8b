use msharp::{
    ast::{Expr, Statement},
    error::ParseError,
    interpreter::{
        lexer::tokenize,
        parser::{core::ParseResult, parse},
        token::Position,
    },
};

fn parse_source(src: &str) -> ParseResult<Vec<Statement>> {
    let tokens = tokenize(src).expect("source should lex");
    parse(&tokens)
}

fn parse_one(src: &str) -> Statement {
    let mut program = parse_source(src).unwrap_or_else(|e| panic!("Failed to parse {src:?}: {e}"));
    assert_eq!(program.len(), 1, "expected a single statement in {src:?}");
    program.remove(0)
}

#[test]
fn number_assignment() {
    let Statement::NumberAssignment { name, value, token } = parse_one("total has value -4.5;")
    else {
        panic!("expected a numeric assignment");
    };

    assert_eq!(name, "total");
    assert_eq!(value, -4.5);
    assert_eq!(token.position(), Position::new(1, 1));
}

#[test]
fn text_assignment() {
    let Statement::TextAssignment { name, value, .. } = parse_one(r#"greeting means "hi\tthere";"#)
    else {
        panic!("expected a text assignment");
    };

    assert_eq!(name, "greeting");
    assert_eq!(value, "hi\tthere");
}

#[test]
fn set_from_call_keeps_arguments_in_order() {
    let Statement::SetFromCall { name, call, .. } = parse_one("set x to do add and use a, 2;")
    else {
        panic!("expected a set statement");
    };

    assert_eq!(name, "x");
    assert_eq!(call.name, "add");
    assert_eq!(call.token.position(), Position::new(1, 10));
    assert!(matches!(&call.arguments[..],
                     [Expr::Variable { name, .. }, Expr::Number { value, .. }]
                     if name == "a" && *value == 2.0));
}

#[test]
fn call_without_arguments() {
    let Statement::Call(call) = parse_one("do readString and use;") else {
        panic!("expected a call statement");
    };

    assert_eq!(call.name, "readString");
    assert!(call.arguments.is_empty());
}

#[test]
fn nested_call_takes_the_remaining_arguments() {
    let Statement::Say { expr: Expr::Call(outer), .. } =
        parse_one("say do concat and use do toString and use 1, 2;")
    else {
        panic!("expected say with a call");
    };

    assert_eq!(outer.arguments.len(), 1);
    let Expr::Call(inner) = &outer.arguments[0] else {
        panic!("expected a nested call");
    };
    assert_eq!(inner.arguments.len(), 2);
}

#[test]
fn call_arguments_stop_at_a_block() {
    let Statement::If { condition: Expr::Call(call),
                        then_block,
                        else_block: None,
                        .. } = parse_one("if do readNumber and use { say 1; }")
    else {
        panic!("expected if without else");
    };

    assert!(call.arguments.is_empty());
    assert_eq!(then_block.statements.len(), 1);
}

#[test]
fn if_with_else() {
    let Statement::If { then_block,
                        else_block: Some(else_block),
                        .. } = parse_one("if x { say 1; say 2; } else { }")
    else {
        panic!("expected if with else");
    };

    assert_eq!(then_block.statements.len(), 2);
    assert!(else_block.statements.is_empty());
    assert_eq!(else_block.token.position(), Position::new(1, 29));
}

#[test]
fn while_and_nested_blocks() {
    let Statement::While { condition: Expr::Variable { name, .. },
                           body,
                           .. } = parse_one("while n { { say n; } }")
    else {
        panic!("expected a while loop");
    };

    assert_eq!(name, "n");
    assert!(matches!(&body.statements[..], [Statement::Block(inner)] if inner.statements.len() == 1));
}

#[test]
fn empty_program_parses_to_nothing() {
    assert_eq!(parse_source("// only a comment\n").unwrap(), []);
}

#[test]
fn missing_semicolon_points_at_the_next_token() {
    assert_eq!(parse_source("say 1\nsay 2;"),
               Err(ParseError::MissingSemicolon { context: "say statement",
                                                  at:      Position::new(2, 1), }));
}

#[test]
fn set_requires_a_call() {
    assert_eq!(parse_source("set x to 5;"),
               Err(ParseError::ExpectedCallAfterSet { at: Position::new(1, 10) }));
}

#[test]
fn has_value_requires_a_number() {
    let err = parse_source(r#"x has value "5";"#).unwrap_err();

    assert_eq!(err.position(), Position::new(1, 13));
    assert!(matches!(err, ParseError::Expected { .. }));
}

#[test]
fn means_requires_text() {
    let err = parse_source("x means 5;").unwrap_err();

    assert_eq!(err.position(), Position::new(1, 9));
    assert!(err.to_string().contains("double quotes"), "{err}");
}

#[test]
fn standalone_identifier_is_rejected() {
    assert_eq!(parse_source("say 1; count;"),
               Err(ParseError::StandaloneIdentifier { name: "count".to_string(),
                                                      at:   Position::new(1, 8), }));
}

#[test]
fn if_requires_a_block() {
    assert_eq!(parse_source("if x say 1;"),
               Err(ParseError::ExpectedBlock { keyword: "if",
                                               at:      Position::new(1, 6), }));
    assert_eq!(parse_source("if x { } else say 1;"),
               Err(ParseError::ExpectedBlock { keyword: "else",
                                               at:      Position::new(1, 15), }));
}

#[test]
fn unclosed_block_is_reported_at_end_of_input() {
    assert_eq!(parse_source("while x {\n  say x;\n"),
               Err(ParseError::UnclosedBlock { at: Position::new(3, 1) }));
}

#[test]
fn stray_tokens_cannot_start_statements() {
    assert_eq!(parse_source("}"),
               Err(ParseError::UnexpectedToken { token: "}".to_string(),
                                                 at:    Position::new(1, 1), }));
    assert_eq!(parse_source("say ;"),
               Err(ParseError::UnexpectedTokenInExpression { token: ";".to_string(),
                                                             at:    Position::new(1, 5), }));
}

#[test]
fn call_needs_and_use() {
    let err = parse_source("do add 1, 2;").unwrap_err();

    assert_eq!(err.position(), Position::new(1, 8));
    assert!(err.to_string().starts_with("Expected keyword 'and'"), "{err}");
}

#[test]
fn end_of_input_is_described_by_name() {
    let err = parse_source("say").unwrap_err();

    assert_eq!(err.to_string(),
               "Unexpected token 'end of input' in expression. (line 1, col 4)");
}
