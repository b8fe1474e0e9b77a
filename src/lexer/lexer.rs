use std::{iter::Fuse, str::Chars};

use crate::{Position, MK_TOKEN};

use super::tokens::{Token, TokenKind, RESERVED_LOOKUP, SINGLE_CHAR_LOOKUP};

/// Pull-based scanner over a character source.
///
/// Keeps a two-character window (`current`, `peek`) and hands out one token per
/// call to [`Lexer::next_token`].
pub struct Lexer<I: Iterator<Item = char>> {
    source: Fuse<I>,
    current: Option<char>,
    peek: Option<char>,
    position: Position,
}

impl<'a> Lexer<Chars<'a>> {
    pub fn from_source(source: &'a str) -> Self {
        Lexer::new(source.chars())
    }
}

impl<I: Iterator<Item = char>> Lexer<I> {
    pub fn new(source: I) -> Self {
        let mut lexer = Lexer {
            source: source.fuse(),
            current: None,
            peek: None,
            position: Position::default(),
        };

        lexer.advance();
        lexer.advance();
        lexer.position = Position::default();
        lexer
    }

    /// Returns the next token. Once the source is exhausted this returns an
    /// `Eof` token on every call.
    pub fn next_token(&mut self) -> Token {
        self.skip_whitespace();

        let Some(current) = self.current else {
            return MK_TOKEN!(TokenKind::Eof, String::new(), self.position);
        };

        if is_ident_start(current) {
            return self.read_identifier();
        }

        if current == '!' && self.peek == Some('=') {
            return self.read_pair(TokenKind::NotEq, "!=");
        }

        if current == '=' && self.peek == Some('=') {
            return self.read_pair(TokenKind::Eq, "==");
        }

        if let Some(kind) = SINGLE_CHAR_LOOKUP.get(&current) {
            return self.read_single(*kind, current);
        }

        if current.is_ascii_digit() {
            return self.read_number();
        }

        self.read_single(TokenKind::Illegal, current)
    }

    pub fn at_eof(&self) -> bool {
        self.current.is_none()
    }

    fn advance(&mut self) {
        self.position.col += 1;
        if matches!(self.current, Some('\n' | '\r')) {
            self.position.row += 1;
            self.position.col = 0;
        }

        self.current = self.peek.take();
        self.peek = self.source.next();
    }

    fn skip_whitespace(&mut self) {
        while matches!(self.current, Some(' ' | '\t' | '\n' | '\r')) {
            self.advance();
        }
    }

    fn read_single(&mut self, kind: TokenKind, current: char) -> Token {
        let token = MK_TOKEN!(kind, current.to_string(), self.position);
        self.advance();
        token
    }

    fn read_pair(&mut self, kind: TokenKind, literal: &str) -> Token {
        let token = MK_TOKEN!(kind, String::from(literal), self.position);
        self.advance();
        self.advance();
        token
    }

    fn read_while(&mut self, accept: fn(char) -> bool) -> (String, Position) {
        let start = self.position;
        let mut literal = String::new();

        while let Some(c) = self.current.filter(|c| accept(*c)) {
            literal.push(c);
            self.advance();
        }

        (literal, start)
    }

    fn read_identifier(&mut self) -> Token {
        let (literal, start) = self.read_while(is_ident_char);

        match RESERVED_LOOKUP.get(literal.as_str()) {
            Some(kind) => MK_TOKEN!(*kind, literal, start),
            None => MK_TOKEN!(TokenKind::Ident, literal, start),
        }
    }

    fn read_number(&mut self) -> Token {
        let (literal, start) = self.read_while(|c| c.is_ascii_digit());
        MK_TOKEN!(TokenKind::Number, literal, start)
    }
}

/// Yields every token before `Eof`.
impl<I: Iterator<Item = char>> Iterator for Lexer<I> {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        let token = self.next_token();
        (token.kind != TokenKind::Eof).then_some(token)
    }
}

fn is_ident_start(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_'
}

fn is_ident_char(c: char) -> bool {
    is_ident_start(c) || c.is_ascii_digit()
}

/// Scans `source` to completion, returning every token including the final
/// `Eof`.
pub fn tokenize(source: &str) -> Vec<Token> {
    let mut lex = Lexer::from_source(source);
    let mut tokens = vec![];

    loop {
        let token = lex.next_token();
        let done = token.kind == TokenKind::Eof;
        tokens.push(token);

        if done {
            return tokens;
        }
    }
}
