//! LOLCODE: lexer, parser and tree-walking interpreter.
//!
//! The embedding surface is three free functions mirroring the phases of
//! the pipeline: [`tokenize`], [`parse`] and [`run`]. A [`Host`] supplies
//! the I/O boundary so the interpreter never touches `stdin`/`stdout`
//! directly.

pub mod error;
pub mod interpreter;
pub mod lexer;
pub mod parser;
pub mod symtab;
pub mod value;

pub use error::Error;
pub use interpreter::{Host, Interpreter, StdHost};
pub use lexer::{Token, TokenKind};
pub use parser::Program;

/// Lexes `source` into a token stream, stopping at the first [`Error`].
pub fn tokenize(source: &str) -> Result<Vec<Token>, Error> {
    lexer::tokenize(source)
}

/// Parses a token stream into a [`Program`].
pub fn parse(tokens: Vec<Token>) -> Result<Program, Error> {
    parser::parse(tokens)
}

/// Runs a parsed program against `host`.
pub fn run(program: &Program, host: &mut dyn Host) -> Result<(), Error> {
    Interpreter::new(host).run(program)
}

/// Tokenizes, parses and runs `source` in one call, feeding the token
/// stream to `host.on_tokens` before parsing (spec §6.5).
pub fn execute(source: &str, host: &mut dyn Host) -> Result<(), Error> {
    let tokens = tokenize(source)?;
    host.on_tokens(&tokens);
    let program = parse(tokens)?;
    run(&program, host)
}
