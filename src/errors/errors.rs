use std::{fmt::Display, num::ParseIntError};

use thiserror::Error;

use crate::{
    lexer::tokens::{Token, TokenKind},
    Position,
};

/// A single parse failure, tied to the token that caused it.
#[derive(Debug, Clone, PartialEq)]
pub struct ParserError {
    internal_error: ErrorImpl,
    token: Token,
}

impl ParserError {
    pub fn new(error_impl: ErrorImpl, token: Token) -> Self {
        ParserError {
            internal_error: error_impl,
            token,
        }
    }

    pub fn message(&self) -> String {
        self.internal_error.to_string()
    }

    pub fn get_kind(&self) -> &ErrorImpl {
        &self.internal_error
    }

    pub fn get_token(&self) -> &Token {
        &self.token
    }

    pub fn get_position(&self) -> Position {
        self.token.position
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::NoPrefixParseRule { .. } => "NoPrefixParseRule",
            ErrorImpl::IntParseError { .. } => "IntParseError",
            ErrorImpl::UnexpectedToken { .. } => "UnexpectedToken",
            ErrorImpl::NestingTooDeep { .. } => "NestingTooDeep",
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        match &self.internal_error {
            ErrorImpl::NoPrefixParseRule { kind: TokenKind::Illegal, literal } => {
                ErrorTip::Suggestion(format!("`{}` is not a recognised character", literal))
            }
            ErrorImpl::NoPrefixParseRule { kind: TokenKind::Eof, .. } => {
                ErrorTip::Suggestion(String::from("Expected an expression before end of input"))
            }
            ErrorImpl::NoPrefixParseRule { literal, .. } => ErrorTip::Suggestion(format!(
                "`{}` cannot start an expression",
                literal
            )),
            ErrorImpl::IntParseError { literal, .. } => ErrorTip::Suggestion(format!(
                "Invalid integer: `{}`, is it above the 64-bit integer limit?",
                literal
            )),
            ErrorImpl::UnexpectedToken { .. } => ErrorTip::None,
            ErrorImpl::NestingTooDeep { limit } => ErrorTip::Suggestion(format!(
                "Expressions may nest at most {} levels deep",
                limit
            )),
        }
    }
}

impl Display for ParserError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.internal_error, self.token.position)
    }
}

impl std::error::Error for ParserError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.internal_error)
    }
}

pub enum ErrorTip {
    None,
    Suggestion(String),
}

impl Display for ErrorTip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorTip::None => write!(f, ""),
            ErrorTip::Suggestion(suggestion) => write!(f, "{}", suggestion),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ErrorImpl {
    #[error("no prefix parse rule for {kind} token {literal:?}")]
    NoPrefixParseRule { kind: TokenKind, literal: String },
    #[error("could not parse {literal:?} as int: {source}")]
    IntParseError { literal: String, source: ParseIntError },
    #[error("expected next token {expected}, got {received}")]
    UnexpectedToken { expected: TokenKind, received: TokenKind },
    #[error("expression nested deeper than {limit} levels")]
    NestingTooDeep { limit: usize },
}
