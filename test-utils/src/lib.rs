use std::collections::VecDeque;

use lolcode::{Error, Host, Token};

/// An in-memory [`Host`]: captures everything `VISIBLE` writes and answers
/// `GIMMEH` from a pre-loaded queue of lines, so tests never touch real
/// `stdin`/`stdout`.
#[derive(Default)]
pub struct CapturingHost {
    pub output: String,
    pub input_lines: VecDeque<String>,
    pub tokens_seen: Vec<Token>,
}

impl CapturingHost {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_input(lines: impl IntoIterator<Item = &'static str>) -> Self {
        Self {
            input_lines: lines.into_iter().map(str::to_string).collect(),
            ..Self::default()
        }
    }
}

impl Host for CapturingHost {
    fn write(&mut self, text: &str) {
        self.output.push_str(text);
    }

    fn read_line(&mut self) -> std::io::Result<String> {
        Ok(self.input_lines.pop_front().unwrap_or_default())
    }

    fn on_tokens(&mut self, tokens: &[Token]) {
        self.tokens_seen = tokens.to_vec();
    }
}

pub struct Expected<'a> {
    pub stdout: &'a str,
}

impl<'a> Expected<'a> {
    fn assert_matches(self, host: &CapturingHost) {
        assert_eq!(host.output, self.stdout);
    }
}

/// Runs `source` to completion, asserting it succeeds and its captured
/// output matches `expected`.
pub fn check_program(source: &str, expected: Expected) {
    let mut host = CapturingHost::new();
    let result = lolcode::execute(source, &mut host);
    assert!(result.is_ok(), "program failed: {:?}", result.err().map(|e| e.render()));
    expected.assert_matches(&host);
}

/// Runs `source` with queued `GIMMEH` input, asserting success and output.
pub fn check_program_with_input(
    source: &str,
    input_lines: impl IntoIterator<Item = &'static str>,
    expected: Expected,
) {
    let mut host = CapturingHost::with_input(input_lines);
    let result = lolcode::execute(source, &mut host);
    assert!(result.is_ok(), "program failed: {:?}", result.err().map(|e| e.render()));
    expected.assert_matches(&host);
}

/// Runs `source`, asserting it fails, and returns the error for the caller
/// to inspect (kind, message, hint).
pub fn check_failing(source: &str) -> Error {
    let mut host = CapturingHost::new();
    match lolcode::execute(source, &mut host) {
        Ok(()) => panic!("expected program to fail, but it ran to completion"),
        Err(e) => e,
    }
}
