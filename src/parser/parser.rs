//! Parser implementation for building the Abstract Syntax Tree.
//!
//! This module contains the main Parser struct and the `parse` entry point.
//! The parser uses a Pratt parser approach with NUD/LED handlers for
//! expression parsing and a two-token window (`current`, `peek`) over the
//! lexer's output.
//!
//! It maintains lookup tables for:
//! - NUD (null denotation) handlers for prefix expressions
//! - LED (left denotation) handlers for infix expressions
//! - Binding powers for operator precedence

use std::{collections::HashMap, str::Chars};

use crate::{
    ast::ast::Program,
    errors::errors::{ErrorImpl, ParserError},
    lexer::{
        lexer::Lexer,
        tokens::{Token, TokenKind},
    },
};

use super::{
    lookups::{
        create_token_lookups, BPLookup, BindingPower, LEDHandler, LEDLookup, NUDHandler, NUDLookup,
    },
    stmt::parse_stmt,
};

/// The main parser structure that maintains parsing state.
///
/// Tokens are pulled from the lexer on demand. Errors are accumulated rather
/// than returned, so a parse always produces a `Program`.
pub struct Parser<I: Iterator<Item = char>> {
    /// The token source
    lexer: Lexer<I>,
    /// The token under examination
    current: Token,
    /// One token of lookahead
    peek: Token,
    /// Errors recorded so far, in source order
    errors: Vec<ParserError>,
    /// Lookup table for null denotation (prefix) expression handlers
    nud_lookup: NUDLookup<I>,
    /// Lookup table for left denotation (infix) expression handlers
    led_lookup: LEDLookup<I>,
    /// Lookup table for infix binding powers (precedence)
    binding_power_lookup: BPLookup,
    /// How many `parse_expr` calls are currently active
    depth: usize,
}

impl<I: Iterator<Item = char>> Parser<I> {
    /// Creates a new Parser over `lexer` with the default rule tables.
    ///
    /// Reads two tokens ahead to fill the `current`/`peek` window.
    pub fn new(mut lexer: Lexer<I>) -> Self {
        let current = lexer.next_token();
        let peek = lexer.next_token();

        let mut parser = Parser {
            lexer,
            current,
            peek,
            errors: vec![],
            nud_lookup: HashMap::new(),
            led_lookup: HashMap::new(),
            binding_power_lookup: HashMap::new(),
            depth: 0,
        };
        create_token_lookups(&mut parser);
        parser
    }

    /// Parses statements until `Eof`.
    ///
    /// Statements that could not be built are left out of the program; the
    /// reason is recorded in [`Parser::errors`].
    pub fn parse_program(&mut self) -> Program {
        let mut statements = vec![];

        while self.current_token_kind() != TokenKind::Eof {
            if let Some(stmt) = parse_stmt(self) {
                statements.push(stmt);
            }
            self.advance();
        }

        Program { statements }
    }

    pub fn errors(&self) -> &[ParserError] {
        &self.errors
    }

    /// Returns the current token without advancing.
    pub fn current_token(&self) -> &Token {
        &self.current
    }

    /// Returns the kind of the current token.
    pub fn current_token_kind(&self) -> TokenKind {
        self.current.kind
    }

    pub fn peek_token(&self) -> &Token {
        &self.peek
    }

    pub fn peek_token_kind(&self) -> TokenKind {
        self.peek.kind
    }

    /// Shifts the window forward by one token.
    pub fn advance(&mut self) {
        let next = self.lexer.next_token();
        self.current = std::mem::replace(&mut self.peek, next);
    }

    /// Advances onto the peek token if it has the expected kind, otherwise
    /// records an error against the peek token and stays put.
    pub fn expect_peek(&mut self, expected_kind: TokenKind) -> bool {
        if self.peek.kind == expected_kind {
            self.advance();
            true
        } else {
            let error = ErrorImpl::UnexpectedToken {
                expected: expected_kind,
                received: self.peek.kind,
            };
            self.push_error(error, self.peek.clone());
            false
        }
    }

    /// Binding power of the current token, `Lowest` when it is not an operator.
    pub fn current_binding_power(&self) -> BindingPower {
        self.binding_power(self.current.kind)
    }

    /// Binding power of the peek token, `Lowest` when it is not an operator.
    pub fn peek_binding_power(&self) -> BindingPower {
        self.binding_power(self.peek.kind)
    }

    fn binding_power(&self, kind: TokenKind) -> BindingPower {
        self.binding_power_lookup
            .get(&kind)
            .copied()
            .unwrap_or(BindingPower::Lowest)
    }

    /// Current expression nesting depth.
    pub fn depth(&self) -> usize {
        self.depth
    }

    pub fn enter_nesting(&mut self) {
        self.depth += 1;
    }

    pub fn exit_nesting(&mut self) {
        self.depth = self.depth.saturating_sub(1);
    }

    pub fn push_error(&mut self, error: ErrorImpl, token: Token) {
        self.errors.push(ParserError::new(error, token));
    }

    /// Returns a reference to the NUD (null denotation) lookup table.
    pub fn get_nud_lookup(&self) -> &NUDLookup<I> {
        &self.nud_lookup
    }

    /// Returns a reference to the LED (left denotation) lookup table.
    pub fn get_led_lookup(&self) -> &LEDLookup<I> {
        &self.led_lookup
    }

    /// Registers a left denotation (infix) handler for a token.
    ///
    /// # Arguments
    ///
    /// * `kind` - The token kind to register
    /// * `binding_power` - The precedence/binding power for this operator
    /// * `led_fn` - The handler function for this infix operator
    pub fn led(&mut self, kind: TokenKind, binding_power: BindingPower, led_fn: LEDHandler<I>) {
        self.binding_power_lookup.insert(kind, binding_power);
        self.led_lookup.insert(kind, led_fn);
    }

    /// Registers a null denotation (prefix) handler for a token.
    ///
    /// # Arguments
    ///
    /// * `kind` - The token kind to register
    /// * `nud_fn` - The handler function for this prefix operator
    pub fn nud(&mut self, kind: TokenKind, nud_fn: NUDHandler<I>) {
        self.nud_lookup.insert(kind, nud_fn);
    }
}

impl<'a> Parser<Chars<'a>> {
    pub fn from_source(source: &'a str) -> Self {
        Parser::new(Lexer::from_source(source))
    }
}

/// Parses `source` into a program.
///
/// This is the main entry point for parsing. The returned errors should be
/// checked before the program is trusted; when it is non-empty the program is
/// missing the statements that failed.
pub fn parse(source: &str) -> (Program, Vec<ParserError>) {
    let mut parser = Parser::from_source(source);
    let program = parser.parse_program();

    (program, parser.errors)
}
