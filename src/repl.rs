//! Line-oriented interactive loop.
//!
//! Each line gets a fresh lexer, so rows always start at 0.

use std::io::{self, BufRead, Write};

use clap::ValueEnum;

use crate::{
    lexer::lexer::Lexer,
    parser::parser::Parser,
};

pub const PROMPT: &str = ">> ";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum Mode {
    /// Print every token of the line
    Tokens,
    /// Parse the line and print the rendered program
    #[default]
    Ast,
}

pub fn start<R: BufRead, W: Write>(input: R, mut output: W, mode: Mode) -> io::Result<()> {
    write!(output, "{}", PROMPT)?;
    output.flush()?;

    for line in input.lines() {
        let line = line?;

        match mode {
            Mode::Tokens => {
                for token in Lexer::from_source(&line) {
                    writeln!(output, "{:?}", token)?;
                }
            }
            Mode::Ast => {
                let mut parser = Parser::new(Lexer::from_source(&line));
                let program = parser.parse_program();

                if parser.errors().is_empty() {
                    if !program.statements.is_empty() {
                        writeln!(output, "{}", program)?;
                    }
                } else {
                    for error in parser.errors() {
                        writeln!(output, "{}", error)?;
                    }
                }
            }
        }

        write!(output, "{}", PROMPT)?;
        output.flush()?;
    }

    Ok(())
}
