use msharp::{
    error::LexError,
    interpreter::{
        lexer::tokenize,
        token::{Position, TokenKind},
    },
};

fn kinds(src: &str) -> Vec<TokenKind> {
    tokenize(src).unwrap().iter().map(|t| t.kind).collect()
}

#[test]
fn keywords_and_punctuation() {
    assert_eq!(kinds("has value means say do and use set to if else while ; , { }"),
               [TokenKind::Has,
                TokenKind::Value,
                TokenKind::Means,
                TokenKind::Say,
                TokenKind::Do,
                TokenKind::And,
                TokenKind::Use,
                TokenKind::Set,
                TokenKind::To,
                TokenKind::If,
                TokenKind::Else,
                TokenKind::While,
                TokenKind::Semicolon,
                TokenKind::Comma,
                TokenKind::LeftBrace,
                TokenKind::RightBrace,
                TokenKind::EndOfInput]);
}

#[test]
fn keywords_are_case_sensitive_and_whole_words() {
    let tokens = tokenize("Say hasValue says _do").unwrap();

    assert!(tokens[..4].iter().all(|t| t.kind == TokenKind::Identifier));
    assert_eq!(tokens[1].text, "hasValue");
    assert_eq!(tokens[3].text, "_do");
}

#[test]
fn identifiers_may_be_unicode() {
    let tokens = tokenize("größe has value 1; say größe;").unwrap();

    assert_eq!(tokens[0].kind, TokenKind::Identifier);
    assert_eq!(tokens[0].text, "größe");
    // Columns count characters, not bytes.
    assert_eq!(tokens[6].position(), Position::new(1, 24));
}

#[test]
fn numbers_keep_their_source_text() {
    let tokens = tokenize("12 -3.5 7. 007").unwrap();
    let texts = tokens.iter().map(|t| t.text.as_str()).collect::<Vec<_>>();

    assert!(tokens[..4].iter().all(|t| t.kind == TokenKind::Number));
    assert_eq!(texts, ["12", "-3.5", "7.", "007", ""]);
}

#[test]
fn lone_minus_is_rejected() {
    assert_eq!(tokenize("say - 1;"),
               Err(LexError::InvalidNumber { at: Position::new(1, 5) }));
}

#[test]
fn unexpected_character_is_positioned() {
    assert_eq!(tokenize("x has value 1;\n  say x # y;"),
               Err(LexError::UnexpectedCharacter { character: '#',
                                                   at:        Position::new(2, 9), }));
}

#[test]
fn text_tokens_hold_unescaped_contents() {
    let tokens = tokenize(r#"say "a\nb\"c";"#).unwrap();

    assert_eq!(tokens[1].kind, TokenKind::Text);
    assert_eq!(tokens[1].text, "a\nb\"c");
    assert_eq!(tokens[1].position(), Position::new(1, 5));
    assert_eq!(tokens[2].position(), Position::new(1, 14));
}

#[test]
fn text_cannot_span_a_line_break() {
    assert_eq!(tokenize("say \"abc\nsay 1;"),
               Err(LexError::UnterminatedText { at: Position::new(1, 5) }));
    assert_eq!(tokenize("x means \"open"),
               Err(LexError::UnterminatedText { at: Position::new(1, 9) }));
}

#[test]
fn escaped_line_break_stays_in_the_literal() {
    let tokens = tokenize("say \"a\\\nb\";\nsay 2;").unwrap();

    assert_eq!(tokens[1].text, "a\nb");
    assert_eq!(tokens[2].position(), Position::new(2, 3));
    assert_eq!(tokens[3].position(), Position::new(3, 1));
}

#[test]
fn comments_and_whitespace_are_skipped() {
    let tokens = tokenize("// header\n\tsay 1; // trailing\r\n\n  say 2;").unwrap();
    let positions = tokens.iter()
                          .map(|t| (t.kind, t.position()))
                          .collect::<Vec<_>>();

    assert_eq!(positions,
               [(TokenKind::Say, Position::new(2, 2)),
                (TokenKind::Number, Position::new(2, 6)),
                (TokenKind::Semicolon, Position::new(2, 7)),
                (TokenKind::Say, Position::new(4, 3)),
                (TokenKind::Number, Position::new(4, 7)),
                (TokenKind::Semicolon, Position::new(4, 8)),
                (TokenKind::EndOfInput, Position::new(4, 9))]);
}

#[test]
fn empty_source_is_just_end_of_input() {
    let tokens = tokenize("").unwrap();

    assert_eq!(tokens.len(), 1);
    assert_eq!(tokens[0].kind, TokenKind::EndOfInput);
    assert_eq!(tokens[0].position(), Position::new(1, 1));
}

#[test]
fn end_of_input_follows_a_trailing_newline() {
    let tokens = tokenize("say 1;\n").unwrap();

    assert_eq!(tokens.last().unwrap().position(), Position::new(2, 1));
}
