//! Lexical analysis module.
//!
//! This module contains the lexer (scanner) that converts source text into a
//! stream of tokens for parsing. It handles:
//!
//! - Character-by-character scanning with a two-character lookahead
//! - Recognition of the `fn` keyword, identifiers, integers and operators
//! - Row/column tracking for every token
//! - Illegal characters, which are passed on as `Illegal` tokens

pub mod lexer;
pub mod tokens;

#[cfg(test)]
mod tests;
