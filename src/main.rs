//! brev front end.
//!
//! Without a file argument this starts the REPL on stdin/stdout. With a file
//! it tokenizes and parses the whole file and reports the result.
//!
//! ```text
//! brev
//! brev --mode tokens
//! brev program.brev
//! ```

use std::{fs::read_to_string, io, path::PathBuf, process, time::Instant};

use brev::{
    lexer::lexer::tokenize,
    parser::parser::parse,
    render_error,
    repl::{self, Mode},
};
use clap::Parser;

#[derive(Parser)]
#[command(name = "brev")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Lexer and parser front end for brev", long_about = None)]
struct Cli {
    /// What to print for each line or file
    #[arg(long, value_enum, default_value_t = Mode::Ast)]
    mode: Mode,

    /// Source file to process instead of starting the REPL
    file: Option<PathBuf>,
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.file {
        Some(file) => run_file(file, cli.mode),
        None => run_repl(cli.mode),
    };

    match result {
        Ok(true) => {}
        Ok(false) => process::exit(1),
        Err(err) => {
            eprintln!("Error: {}", err);
            process::exit(1);
        }
    }
}

fn run_repl(mode: Mode) -> io::Result<bool> {
    println!("Brev Repl ({})", env!("CARGO_PKG_VERSION"));

    let stdin = io::stdin();
    repl::start(stdin.lock(), io::stdout(), mode)?;
    Ok(true)
}

/// Returns `Ok(false)` when the file had parse errors.
fn run_file(file: PathBuf, mode: Mode) -> io::Result<bool> {
    let source = read_to_string(&file)?;

    let start = Instant::now();

    if mode == Mode::Tokens {
        for token in tokenize(&source) {
            println!("{}", token);
        }
        println!("Tokenized in {:?}", start.elapsed());
        return Ok(true);
    }

    let (program, errors) = parse(&source);

    println!("Parsed in {:?}", start.elapsed());

    if !errors.is_empty() {
        println!("-> {}", file.as_os_str().to_string_lossy());
        for error in &errors {
            print!("{}", render_error(error, &source));
        }
        return Ok(false);
    }

    println!("{}", program);
    Ok(true)
}
