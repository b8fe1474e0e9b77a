use crate::{
    ast::{
        ast::Statement,
        expressions::Identifier,
        statements::{AssignmentStatement, ExpressionStatement},
    },
    lexer::tokens::TokenKind,
    parser::{expr::parse_expr, lookups::BindingPower},
};

use super::parser::Parser;

pub fn parse_stmt<I: Iterator<Item = char>>(parser: &mut Parser<I>) -> Option<Statement> {
    if parser.current_token_kind() == TokenKind::Ident && parser.peek_token_kind() == TokenKind::Assign {
        return parse_assignment_stmt(parser);
    }

    parse_expression_stmt(parser)
}

pub fn parse_assignment_stmt<I: Iterator<Item = char>>(parser: &mut Parser<I>) -> Option<Statement> {
    let name_token = parser.current_token().clone();
    let name = Identifier {
        name: name_token.literal.clone(),
        token: name_token,
    };

    if !parser.expect_peek(TokenKind::Assign) {
        return None;
    }
    let token = parser.current_token().clone();
    parser.advance();

    let value = parse_expr(parser, BindingPower::Lowest)?;

    Some(Statement::Assignment(AssignmentStatement { token, name, value }))
}

pub fn parse_expression_stmt<I: Iterator<Item = char>>(parser: &mut Parser<I>) -> Option<Statement> {
    let token = parser.current_token().clone();
    let expression = parse_expr(parser, BindingPower::Lowest)?;

    Some(Statement::Expression(ExpressionStatement { token, expression }))
}
