use std::collections::HashMap;

use crate::{ast::ast::Expression, lexer::tokens::TokenKind};

use super::{expr::*, parser::Parser};

#[derive(PartialEq, PartialOrd, Clone, Copy, Debug)]
pub enum BindingPower {
    Lowest,
    Equals,
    LessGreater,
    Sum,
    Product,
    Prefix,
    Call,
}

pub type NUDHandler<I> = fn(&mut Parser<I>) -> Option<Expression>;
pub type LEDHandler<I> = fn(&mut Parser<I>, Expression) -> Option<Expression>;

pub fn create_token_lookups<I: Iterator<Item = char>>(parser: &mut Parser<I>) {
    // Equality and relational
    parser.led(TokenKind::Eq, BindingPower::Equals, parse_infix_expr);
    parser.led(TokenKind::NotEq, BindingPower::Equals, parse_infix_expr);
    parser.led(TokenKind::Lt, BindingPower::LessGreater, parse_infix_expr);
    parser.led(TokenKind::Gt, BindingPower::LessGreater, parse_infix_expr);

    // Additive and multiplicative
    parser.led(TokenKind::Add, BindingPower::Sum, parse_infix_expr);
    parser.led(TokenKind::Sub, BindingPower::Sum, parse_infix_expr);
    parser.led(TokenKind::Asterisk, BindingPower::Product, parse_infix_expr);
    parser.led(TokenKind::Slash, BindingPower::Product, parse_infix_expr);

    // Literals, symbols and unary operators
    parser.nud(TokenKind::Ident, parse_identifier_expr);
    parser.nud(TokenKind::Number, parse_int_literal_expr);
    parser.nud(TokenKind::Bang, parse_prefix_expr);
    parser.nud(TokenKind::Sub, parse_prefix_expr);
}

// Lookup tables inside parser struct, so it's easier
pub type NUDLookup<I> = HashMap<TokenKind, NUDHandler<I>>;
pub type LEDLookup<I> = HashMap<TokenKind, LEDHandler<I>>;
pub type BPLookup = HashMap<TokenKind, BindingPower>;
