use std::num::ParseIntError;

use lazy_static::lazy_static;
use regex::Regex;

use crate::{
    ast::{
        ast::Expression,
        expressions::{Identifier, InfixExpression, IntLiteral, PrefixExpression},
    },
    errors::errors::ErrorImpl,
};

use super::{lookups::BindingPower, parser::Parser};

lazy_static! {
    static ref RADIX_PREFIXED_INT: Regex = Regex::new("^0([xXoObB]?)([0-9a-fA-F_]+)$").unwrap();
}

/// Deepest expression nesting the parser will recurse into.
pub const MAX_NESTING_DEPTH: usize = 256;

/// Parses an expression whose operators bind tighter than `bp`.
///
/// Returns `None` when no expression could be built; the cause has already
/// been recorded on the parser.
pub fn parse_expr<I: Iterator<Item = char>>(parser: &mut Parser<I>, bp: BindingPower) -> Option<Expression> {
    if parser.depth() >= MAX_NESTING_DEPTH {
        let token = parser.current_token().clone();
        parser.push_error(ErrorImpl::NestingTooDeep { limit: MAX_NESTING_DEPTH }, token);
        return None;
    }

    parser.enter_nesting();
    let expr = parse_nested_expr(parser, bp);
    parser.exit_nesting();
    expr
}

fn parse_nested_expr<I: Iterator<Item = char>>(parser: &mut Parser<I>, bp: BindingPower) -> Option<Expression> {
    // First parse NUD
    let token_kind = parser.current_token_kind();
    let Some(nud) = parser.get_nud_lookup().get(&token_kind).copied() else {
        let token = parser.current_token().clone();
        parser.push_error(
            ErrorImpl::NoPrefixParseRule { kind: token.kind, literal: token.literal.clone() },
            token,
        );
        return None;
    };

    let mut left = nud(parser)?;

    // While the next operator binds tighter than bp, fold it into lhs
    while parser.peek_binding_power() > bp {
        let Some(led) = parser.get_led_lookup().get(&parser.peek_token_kind()).copied() else {
            return Some(left);
        };

        parser.advance();
        left = led(parser, left)?;
    }

    Some(left)
}

pub fn parse_identifier_expr<I: Iterator<Item = char>>(parser: &mut Parser<I>) -> Option<Expression> {
    let token = parser.current_token().clone();

    Some(Expression::Identifier(Identifier {
        name: token.literal.clone(),
        token,
    }))
}

pub fn parse_int_literal_expr<I: Iterator<Item = char>>(parser: &mut Parser<I>) -> Option<Expression> {
    let token = parser.current_token().clone();

    let parsed = parse_int(&token.literal);

    match parsed {
        Ok(value) => Some(Expression::IntLiteral(IntLiteral { token, value })),
        Err(source) => {
            parser.push_error(
                ErrorImpl::IntParseError { literal: token.literal.clone(), source },
                token,
            );
            None
        }
    }
}

/// Parses integer literal text with base prefixes: `0x` hex, `0o` or a bare
/// leading `0` octal (`010` is 8, `09` is an error), `0b` binary, otherwise
/// decimal. `_` separators are allowed after the leading `0`.
pub fn parse_int(text: &str) -> Result<i64, ParseIntError> {
    if let Some(captures) = RADIX_PREFIXED_INT.captures(text) {
        let radix = match &captures[1] {
            "x" | "X" => 16,
            "b" | "B" => 2,
            _ => 8,
        };
        return i64::from_str_radix(&captures[2].replace('_', ""), radix);
    }

    text.parse()
}

pub fn parse_prefix_expr<I: Iterator<Item = char>>(parser: &mut Parser<I>) -> Option<Expression> {
    let operator_token = parser.current_token().clone();
    parser.advance();

    let operand = parse_expr(parser, BindingPower::Prefix)?;

    Some(Expression::Prefix(PrefixExpression {
        operator: operator_token.literal.clone(),
        token: operator_token,
        operand: Box::new(operand),
    }))
}

pub fn parse_infix_expr<I: Iterator<Item = char>>(parser: &mut Parser<I>, left: Expression) -> Option<Expression> {
    let operator_token = parser.current_token().clone();
    let bp = parser.current_binding_power();
    parser.advance();

    let right = parse_expr(parser, bp)?;

    Some(Expression::Infix(InfixExpression {
        operator: operator_token.literal.clone(),
        token: operator_token,
        left: Box::new(left),
        right: Box::new(right),
    }))
}
