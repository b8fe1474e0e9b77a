#![allow(clippy::module_inception)]

use std::fmt::{Display, Write};

use crate::errors::errors::{ErrorTip, ParserError};

pub mod ast;
pub mod errors;
pub mod lexer;
pub mod macros;
pub mod parser;
pub mod repl;

extern crate regex;

/// A 0-based location in the source, counted character by character.
///
/// Moving past `\n` or `\r` starts a new row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    pub fn new(row: usize, col: usize) -> Self {
        Position { row, col }
    }
}

impl Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "line: {} col: {}", self.row, self.col)
    }
}

/// Returns the text of row `row`, splitting on `\n` and `\r` individually so
/// the numbering agrees with the lexer (`\r\n` spans two rows).
pub fn get_line_at_row(source: &str, row: usize) -> Option<&str> {
    source.split(['\n', '\r']).nth(row)
}


/// Renders a caret diagnostic for `error` against `source`.
pub fn render_error(error: &ParserError, source: &str) -> String {
    let mut out = String::new();
    // Writing into a `String` cannot fail.
    let _ = write_error(&mut out, error, source);
    out
}

fn write_error<W: Write>(out: &mut W, error: &ParserError, source: &str) -> std::fmt::Result {
    let position = error.get_position();
    let line_text = get_line_at_row(source, position.row).unwrap_or("");
    let line_string = position.row.to_string();
    let padding = line_string.len() + 2;

    if let ErrorTip::None = error.get_tip() {
        writeln!(out, "Error: {}", error.get_error_name())?;
    } else {
        writeln!(out, "Error: {} ({})", error.get_error_name(), error.get_tip())?;
    }
    writeln!(out, "-> {}", position)?;
    writeln!(out, "{:>padding$}", "|")?;

    let (line_text_removed, removed_whitespace) = remove_starting_whitespace(line_text);
    writeln!(out, "{} | {}", line_string, line_text_removed.trim_end())?;

    let arrows = position.col.saturating_sub(removed_whitespace) + 1;
    writeln!(out, "{:>padding$} {:->arrows$}", "|", "^")
}

fn remove_starting_whitespace(string: &str) -> (&str, usize) {
    let start = string
        .chars()
        .take_while(|c| *c == ' ' || *c == '\t')
        .count();

    (&string[start..], start)
}
