//! The host/embedding boundary (spec §6.5): the interpreter never touches
//! `stdin`/`stdout` directly, only this trait. The CLI binary supplies
//! [`StdHost`]; tests supply an in-memory host that captures output.

use std::io::{self, BufRead, Write};

use crate::lexer::Token;

/// Three callables a host provides: blocking write, blocking read, and two
/// optional debug sinks called after tokenization and after execution.
pub trait Host {
    fn write(&mut self, text: &str);
    fn read_line(&mut self) -> io::Result<String>;

    fn on_tokens(&mut self, _tokens: &[Token]) {}
    fn on_symbols(&mut self, _ctx: &crate::symtab::Context) {}
}

/// The CLI's `Host`: unbuffered stdout, line-buffered stdin.
pub struct StdHost {
    stdout: io::Stdout,
    stdin: io::Stdin,
}

impl StdHost {
    pub fn new() -> Self {
        Self {
            stdout: io::stdout(),
            stdin: io::stdin(),
        }
    }
}

impl Default for StdHost {
    fn default() -> Self {
        Self::new()
    }
}

impl Host for StdHost {
    fn write(&mut self, text: &str) {
        let _ = self.stdout.write_all(text.as_bytes());
        let _ = self.stdout.flush();
    }

    fn read_line(&mut self) -> io::Result<String> {
        let mut line = String::new();
        self.stdin.lock().read_line(&mut line)?;
        if line.ends_with('\n') {
            line.pop();
            if line.ends_with('\r') {
                line.pop();
            }
        }
        Ok(line)
    }
}
