use std::fmt::Display;

use crate::lexer::tokens::Token;

use super::{
    ast::{Expression, Node},
    expressions::Identifier,
};

/// Assignment Statement
/// `name = value`. The anchor token is the `=`.
#[derive(Debug, Clone, PartialEq)]
pub struct AssignmentStatement {
    pub token: Token,
    pub name: Identifier,
    pub value: Expression,
}

impl Node for AssignmentStatement {
    fn token_literal(&self) -> &str {
        &self.token.literal
    }
}

impl Display for AssignmentStatement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} = {}", self.name, self.value)
    }
}

/// Expression Statement
/// A bare expression; the token is the expression's first token.
#[derive(Debug, Clone, PartialEq)]
pub struct ExpressionStatement {
    pub token: Token,
    pub expression: Expression,
}

impl Node for ExpressionStatement {
    fn token_literal(&self) -> &str {
        &self.token.literal
    }
}

impl Display for ExpressionStatement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.expression)
    }
}
