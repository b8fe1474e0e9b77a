//! Unit tests for the lexer module.
//!
//! This module contains tests for tokenization including:
//! - Keywords and identifiers
//! - Integer literals
//! - Operators and punctuation
//! - Row/column tracking across lines
//! - Illegal characters and end of input

use super::{
    lexer::{tokenize, Lexer},
    tokens::{Token, TokenKind},
};
use crate::Position;

fn assert_tokens(source: &str, expected: &[(TokenKind, &str, usize, usize)]) {
    let tokens = tokenize(source);
    assert_eq!(tokens.len(), expected.len(), "token count for {:?}: {:?}", source, tokens);

    for (token, (kind, literal, row, col)) in tokens.iter().zip(expected) {
        assert_eq!(token.kind, *kind, "kind of {}", token);
        assert_eq!(token.literal, *literal, "literal of {}", token);
        assert_eq!(token.position, Position::new(*row, *col), "position of {}", token);
    }
}

#[test]
fn test_tokenize_assignment() {
    assert_tokens(
        "num = 1",
        &[
            (TokenKind::Ident, "num", 0, 0),
            (TokenKind::Assign, "=", 0, 4),
            (TokenKind::Number, "1", 0, 6),
            (TokenKind::Eof, "", 0, 7),
        ],
    );
}

#[test]
fn test_tokenize_multiline_positions() {
    let source = "
num = 1
other = num == 1
other = num != 1

afunc = fn(a, b) {
\ta = a+b
}
!1
2*3
2/3
2%3
2<3>4
";

    assert_tokens(
        source,
        &[
            (TokenKind::Ident, "num", 1, 0),
            (TokenKind::Assign, "=", 1, 4),
            (TokenKind::Number, "1", 1, 6),
            (TokenKind::Ident, "other", 2, 0),
            (TokenKind::Assign, "=", 2, 6),
            (TokenKind::Ident, "num", 2, 8),
            (TokenKind::Eq, "==", 2, 12),
            (TokenKind::Number, "1", 2, 15),
            (TokenKind::Ident, "other", 3, 0),
            (TokenKind::Assign, "=", 3, 6),
            (TokenKind::Ident, "num", 3, 8),
            (TokenKind::NotEq, "!=", 3, 12),
            (TokenKind::Number, "1", 3, 15),
            (TokenKind::Ident, "afunc", 5, 0),
            (TokenKind::Assign, "=", 5, 6),
            (TokenKind::Function, "fn", 5, 8),
            (TokenKind::LParen, "(", 5, 10),
            (TokenKind::Ident, "a", 5, 11),
            (TokenKind::Comma, ",", 5, 12),
            (TokenKind::Ident, "b", 5, 14),
            (TokenKind::RParen, ")", 5, 15),
            (TokenKind::LBrace, "{", 5, 17),
            (TokenKind::Ident, "a", 6, 1),
            (TokenKind::Assign, "=", 6, 3),
            (TokenKind::Ident, "a", 6, 5),
            (TokenKind::Add, "+", 6, 6),
            (TokenKind::Ident, "b", 6, 7),
            (TokenKind::RBrace, "}", 7, 0),
            (TokenKind::Bang, "!", 8, 0),
            (TokenKind::Number, "1", 8, 1),
            (TokenKind::Number, "2", 9, 0),
            (TokenKind::Asterisk, "*", 9, 1),
            (TokenKind::Number, "3", 9, 2),
            (TokenKind::Number, "2", 10, 0),
            (TokenKind::Slash, "/", 10, 1),
            (TokenKind::Number, "3", 10, 2),
            (TokenKind::Number, "2", 11, 0),
            (TokenKind::Percent, "%", 11, 1),
            (TokenKind::Number, "3", 11, 2),
            (TokenKind::Number, "2", 12, 0),
            (TokenKind::Lt, "<", 12, 1),
            (TokenKind::Number, "3", 12, 2),
            (TokenKind::Gt, ">", 12, 3),
            (TokenKind::Number, "4", 12, 4),
            (TokenKind::Eof, "", 13, 0),
        ],
    );
}

#[test]
fn test_tokenize_identifiers() {
    let tokens = tokenize("foo bar baz_123 _underscore CamelCase fnord");

    let literals = tokens
        .iter()
        .take_while(|t| t.kind == TokenKind::Ident)
        .map(|t| t.literal.as_str())
        .collect::<Vec<_>>();

    assert_eq!(literals, ["foo", "bar", "baz_123", "_underscore", "CamelCase", "fnord"]);
    assert_eq!(tokens[6].kind, TokenKind::Eof);
}

#[test]
fn test_tokenize_keyword() {
    let tokens = tokenize("fn f");

    assert_eq!(tokens[0].kind, TokenKind::Function);
    assert_eq!(tokens[0].literal, "fn");
    assert_eq!(tokens[1].kind, TokenKind::Ident);
    assert_eq!(tokens[1].literal, "f");
}

#[test]
fn test_tokenize_number_then_identifier() {
    assert_tokens(
        "123abc",
        &[
            (TokenKind::Number, "123", 0, 0),
            (TokenKind::Ident, "abc", 0, 3),
            (TokenKind::Eof, "", 0, 6),
        ],
    );
}

#[test]
fn test_tokenize_two_char_operators() {
    assert_tokens(
        "a==b!=c=!d",
        &[
            (TokenKind::Ident, "a", 0, 0),
            (TokenKind::Eq, "==", 0, 1),
            (TokenKind::Ident, "b", 0, 3),
            (TokenKind::NotEq, "!=", 0, 4),
            (TokenKind::Ident, "c", 0, 6),
            (TokenKind::Assign, "=", 0, 7),
            (TokenKind::Bang, "!", 0, 8),
            (TokenKind::Ident, "d", 0, 9),
            (TokenKind::Eof, "", 0, 10),
        ],
    );
}

#[test]
fn test_tokenize_illegal() {
    assert_tokens(
        "a @ é",
        &[
            (TokenKind::Ident, "a", 0, 0),
            (TokenKind::Illegal, "@", 0, 2),
            (TokenKind::Illegal, "é", 0, 4),
            (TokenKind::Eof, "", 0, 5),
        ],
    );
}

#[test]
fn test_tokenize_carriage_return_rows() {
    // `\r` and `\n` each start a new row
    assert_tokens(
        "a\r\nb",
        &[
            (TokenKind::Ident, "a", 0, 0),
            (TokenKind::Ident, "b", 2, 0),
            (TokenKind::Eof, "", 2, 1),
        ],
    );
}

#[test]
fn test_tokenize_empty_and_whitespace() {
    assert_tokens("", &[(TokenKind::Eof, "", 0, 0)]);
    assert_tokens(" \t\n ", &[(TokenKind::Eof, "", 1, 1)]);
}

#[test]
fn test_eof_is_idempotent() {
    let mut lexer = Lexer::from_source("x");

    assert_eq!(lexer.next_token().kind, TokenKind::Ident);
    assert!(lexer.at_eof());

    let eof = Token {
        kind: TokenKind::Eof,
        literal: String::new(),
        position: Position::new(0, 1),
    };
    for _ in 0..3 {
        assert_eq!(lexer.next_token(), eof);
    }
}

#[test]
fn test_lexer_iterator_stops_before_eof() {
    let kinds = Lexer::new("-a + 2".chars())
        .map(|t| t.kind)
        .collect::<Vec<_>>();

    assert_eq!(
        kinds,
        [TokenKind::Sub, TokenKind::Ident, TokenKind::Add, TokenKind::Number]
    );
}
