use lazy_static::lazy_static;
use std::{collections::HashMap, fmt::Display};

use crate::Position;

lazy_static! {
    pub static ref RESERVED_LOOKUP: HashMap<&'static str, TokenKind> = {
        let mut map = HashMap::new();
        map.insert("fn", TokenKind::Function);
        map
    };

    pub static ref SINGLE_CHAR_LOOKUP: HashMap<char, TokenKind> = {
        let mut map = HashMap::new();
        map.insert('=', TokenKind::Assign);
        map.insert('+', TokenKind::Add);
        map.insert('-', TokenKind::Sub);
        map.insert('*', TokenKind::Asterisk);
        map.insert('/', TokenKind::Slash);
        map.insert('%', TokenKind::Percent);
        map.insert('<', TokenKind::Lt);
        map.insert('>', TokenKind::Gt);
        map.insert('!', TokenKind::Bang);
        map.insert('{', TokenKind::LBrace);
        map.insert('}', TokenKind::RBrace);
        map.insert('(', TokenKind::LParen);
        map.insert(')', TokenKind::RParen);
        map.insert(',', TokenKind::Comma);
        map
    };
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum TokenKind {
    Ident,
    Number,
    Eof,
    Illegal,

    Assign, // =
    Eq,     // ==
    NotEq,  // !=
    Bang,   // !

    Add,
    Sub,
    Asterisk,
    Slash,
    Percent,

    Lt,
    Gt,

    LParen,
    RParen,
    LBrace,
    RBrace,
    Comma,

    // Reserved
    Function,
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub literal: String,
    pub position: Position,
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {:?} ({})", self.kind, self.literal, self.position)
    }
}
