//! The one error shape shared by the lexer, parser and interpreter.
//!
//! All three phases surface errors unmodified to the host; nothing is
//! recovered inside the interpreter. See spec §4.6/§7 for the wire format.

use std::fmt;

/// A single frame of the parser's context stack, snapshotted into a
/// `SyntaxError` so the host can print a traceback.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseFrame {
    pub function_name: &'static str,
    pub line: usize,
    pub col: usize,
}

/// The three error kinds a program can fail with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ErrorKind {
    Lex,
    Syntax,
    Runtime,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorKind::Lex => f.write_str("LexError"),
            ErrorKind::Syntax => f.write_str("SyntaxError"),
            ErrorKind::Runtime => f.write_str("RuntimeError"),
        }
    }
}

/// A lex, syntax or runtime error, carrying enough context to render the
/// stable diagnostic format of spec §7.
#[derive(Debug, Clone, thiserror::Error, PartialEq, Eq)]
#[error("{}", self.render())]
pub struct Error {
    pub kind: ErrorKind,
    pub line: usize,
    pub col: usize,
    pub message: String,
    pub expected: Option<String>,
    pub found: Option<String>,
    pub category: Option<String>,
    pub parse_stack: Vec<ParseFrame>,
    pub hint: Option<String>,
}

impl Error {
    pub fn lex(line: usize, col: usize, message: impl Into<String>) -> Self {
        Self {
            kind: ErrorKind::Lex,
            line,
            col,
            message: message.into(),
            expected: None,
            found: None,
            category: None,
            parse_stack: Vec::new(),
            hint: None,
        }
    }

    pub fn syntax(
        line: usize,
        col: usize,
        message: impl Into<String>,
        expected: impl Into<String>,
        found: impl Into<String>,
        category: impl Into<String>,
        parse_stack: Vec<ParseFrame>,
    ) -> Self {
        Self {
            kind: ErrorKind::Syntax,
            line,
            col,
            message: message.into(),
            expected: Some(expected.into()),
            found: Some(found.into()),
            category: Some(category.into()),
            parse_stack,
            hint: None,
        }
    }

    pub fn runtime(line: usize, col: usize, message: impl Into<String>) -> Self {
        Self {
            kind: ErrorKind::Runtime,
            line,
            col,
            message: message.into(),
            expected: None,
            found: None,
            category: None,
            parse_stack: Vec::new(),
            hint: None,
        }
    }

    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }

    pub fn render(&self) -> String {
        let mut out = String::new();
        if self.kind == ErrorKind::Syntax && !self.parse_stack.is_empty() {
            out.push_str("Traceback (most recent call last):\n");
            for frame in &self.parse_stack {
                out.push_str(&format!(
                    "  in {} at {}:{}\n",
                    frame.function_name, frame.line, frame.col
                ));
            }
        }
        out.push_str(&format!("Line {}:{}\n", self.line, self.col));
        out.push_str(&format!("{}: {}\n", self.kind, self.message));
        if let Some(hint) = &self.hint {
            out.push_str(&format!("  at: {hint}\n"));
        }
        out
    }
}
