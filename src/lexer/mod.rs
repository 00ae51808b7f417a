//! The lexer: a pure function from source text to a token stream.
//!
//! Two-mode character scanner (code mode / inside-string mode per spec
//! §4.1), longest-match-first over an ordered keyword table (`rules.rs`).
//! No I/O; `tokenize` either returns the full token list or the first
//! `Error` it hits and stops.

mod ellipsis;
mod rules;
mod token;

pub use token::{Lexeme, Token, TokenKind};

use crate::error::Error;
use log::trace;

fn is_ident_start(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_'
}

fn is_ident_continue(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

#[derive(Debug, Clone, Copy)]
struct Mark {
    pos: usize,
    line: usize,
    col: usize,
}

struct Lexer {
    chars: Vec<char>,
    pos: usize,
    line: usize,
    col: usize,
    tokens: Vec<Token>,
}

impl Lexer {
    fn new(source: &str) -> Self {
        Self {
            chars: source.chars().collect(),
            pos: 0,
            line: 1,
            col: 1,
            tokens: Vec::new(),
        }
    }

    fn mark(&self) -> Mark {
        Mark {
            pos: self.pos,
            line: self.line,
            col: self.col,
        }
    }

    fn restore(&mut self, m: Mark) {
        self.pos = m.pos;
        self.line = m.line;
        self.col = m.col;
    }

    fn peek_char(&self, offset: usize) -> Option<char> {
        self.chars.get(self.pos + offset).copied()
    }

    fn at_end(&self) -> bool {
        self.pos >= self.chars.len()
    }

    fn advance(&mut self) -> Option<char> {
        let c = self.chars.get(self.pos).copied();
        if let Some(ch) = c {
            self.pos += 1;
            if ch == '\n' {
                self.line += 1;
                self.col = 1;
            } else {
                self.col += 1;
            }
        }
        c
    }

    fn skip_spaces_tabs(&mut self) {
        while matches!(self.peek_char(0), Some(' ') | Some('\t')) {
            self.advance();
        }
    }

    fn emit(&mut self, kind: TokenKind, lexeme: impl Into<String>, value: Lexeme, line: usize, col: usize) {
        self.tokens.push(Token::new(kind, lexeme, value, line, col));
    }

    fn read_ident_word(&mut self) -> String {
        let mut s = String::new();
        while let Some(c) = self.peek_char(0) {
            if is_ident_continue(c) {
                s.push(c);
                self.advance();
            } else {
                break;
            }
        }
        s
    }

    fn run(&mut self) -> Result<(), Error> {
        loop {
            self.skip_spaces_tabs();
            if self.at_end() {
                return Ok(());
            }
            let c = self.peek_char(0).unwrap();
            match c {
                '\n' => {
                    let m = self.mark();
                    self.advance();
                    self.emit(TokenKind::Newline, "\n", Lexeme::None, m.line, m.col);
                }
                '"' => self.scan_string()?,
                '-' if self.peek_char(1).map_or(false, |d| d.is_ascii_digit()) => {
                    self.scan_number()?
                }
                d if d.is_ascii_digit() => self.scan_number()?,
                c if is_ident_start(c) => self.scan_word()?,
                ',' => {
                    let m = self.mark();
                    self.advance();
                    self.emit(TokenKind::Comma, ",", Lexeme::None, m.line, m.col);
                }
                '!' => {
                    let m = self.mark();
                    self.advance();
                    self.emit(TokenKind::Exclamation, "!", Lexeme::None, m.line, m.col);
                }
                '+' => {
                    let m = self.mark();
                    self.advance();
                    self.emit(TokenKind::Plus, "+", Lexeme::None, m.line, m.col);
                }
                '[' => {
                    let m = self.mark();
                    self.advance();
                    self.emit(TokenKind::LBracket, "[", Lexeme::None, m.line, m.col);
                }
                ']' => {
                    let m = self.mark();
                    self.advance();
                    self.emit(TokenKind::RBracket, "]", Lexeme::None, m.line, m.col);
                }
                '.' if self.peek_char(1) == Some('.') && self.peek_char(2) == Some('.') => {
                    let m = self.mark();
                    self.advance();
                    self.advance();
                    self.advance();
                    self.emit(TokenKind::Ellipsis, "...", Lexeme::None, m.line, m.col);
                }
                other => {
                    return Err(Error::lex(
                        self.line,
                        self.col,
                        format!("unexpected character '{other}'"),
                    ));
                }
            }
        }
    }

    fn scan_word(&mut self) -> Result<(), Error> {
        let start = self.mark();
        let word1 = self.read_ident_word();

        match word1.as_str() {
            "BTW" => {
                self.skip_line_comment();
                return Ok(());
            }
            "OBTW" => {
                self.skip_block_comment(start)?;
                return Ok(());
            }
            "TLDR" => {
                return Err(Error::lex(
                    start.line,
                    start.col,
                    "'TLDR' without a matching 'OBTW'",
                ));
            }
            _ => {}
        }

        let mut candidate = word1.clone();
        let mut best: Option<(TokenKind, Mark)> = rules::lookup(&candidate).map(|k| (k, self.mark()));
        if let Some((kind, _)) = &best {
            trace!("lexer: rule match '{candidate}' -> {kind:?}");
        }

        loop {
            if self.peek_char(0) == Some('?') {
                let with_q = format!("{candidate}?");
                if let Some(kind) = rules::lookup(&with_q) {
                    trace!("lexer: rule match '{with_q}' -> {kind:?}");
                    self.advance();
                    best = Some((kind, self.mark()));
                }
                break;
            }

            if !rules::can_extend(&candidate) {
                break;
            }

            let ws_mark = self.mark();
            self.skip_spaces_tabs();
            if !self.peek_char(0).map_or(false, is_ident_start) {
                self.restore(ws_mark);
                break;
            }

            let word_n = self.read_ident_word();
            if rules::is_comment_word(&word_n) {
                self.restore(ws_mark);
                break;
            }

            candidate = format!("{candidate} {word_n}");
            if let Some(kind) = rules::lookup(&candidate) {
                trace!("lexer: rule match '{candidate}' -> {kind:?}");
                best = Some((kind, self.mark()));
            }
        }

        match best {
            Some((kind, end)) => {
                let lexeme: String = self.chars[start.pos..end.pos].iter().collect();
                self.restore(end);
                self.emit(kind, lexeme.clone(), Lexeme::Str(lexeme), start.line, start.col);
            }
            None => {
                self.restore(start);
                let ident = self.read_ident_word();
                self.emit(
                    TokenKind::Identifier,
                    ident.clone(),
                    Lexeme::Str(ident),
                    start.line,
                    start.col,
                );
            }
        }

        Ok(())
    }

    fn skip_line_comment(&mut self) {
        while let Some(c) = self.peek_char(0) {
            if c == '\n' {
                break;
            }
            self.advance();
        }
    }

    fn skip_block_comment(&mut self, start: Mark) -> Result<(), Error> {
        loop {
            if self.at_end() {
                return Err(Error::lex(
                    start.line,
                    start.col,
                    "unterminated block comment ('OBTW' without a matching 'TLDR')",
                ));
            }
            let c = self.peek_char(0).unwrap();
            if is_ident_start(c) {
                let word = self.read_ident_word();
                if word == "TLDR" {
                    return Ok(());
                }
                continue;
            }
            self.advance();
        }
    }

    fn scan_number(&mut self) -> Result<(), Error> {
        let start = self.mark();
        if self.peek_char(0) == Some('-') {
            self.advance();
        }
        while self.peek_char(0).map_or(false, |c| c.is_ascii_digit()) {
            self.advance();
        }

        let mut is_float = false;
        if self.peek_char(0) == Some('.') && self.peek_char(1).map_or(false, |c| c.is_ascii_digit()) {
            is_float = true;
            self.advance();
            while self.peek_char(0).map_or(false, |c| c.is_ascii_digit()) {
                self.advance();
            }
        }

        let end = self.mark();
        let text: String = self.chars[start.pos..end.pos].iter().collect();

        if is_float {
            let v: f64 = text
                .parse()
                .map_err(|_| Error::lex(start.line, start.col, format!("invalid float literal '{text}'")))?;
            self.emit(TokenKind::Float, text, Lexeme::Float(v), start.line, start.col);
        } else {
            let v: i64 = text
                .parse()
                .map_err(|_| Error::lex(start.line, start.col, format!("invalid integer literal '{text}'")))?;
            self.emit(TokenKind::Integer, text, Lexeme::Int(v), start.line, start.col);
        }
        Ok(())
    }

    fn scan_string(&mut self) -> Result<(), Error> {
        let q_start = self.mark();
        self.advance();
        self.emit(TokenKind::Quote, "\"", Lexeme::None, q_start.line, q_start.col);

        let str_start = self.mark();
        let mut decoded = String::new();
        let mut raw = String::new();

        loop {
            match self.peek_char(0) {
                None => {
                    return Err(Error::lex(
                        str_start.line,
                        str_start.col,
                        "unterminated string literal",
                    ))
                }
                Some('"') => break,
                Some('\n') => {
                    return Err(Error::lex(
                        self.line,
                        self.col,
                        "unescaped newline inside string literal",
                    ))
                }
                Some(':') => {
                    let esc_mark = self.mark();
                    self.advance();
                    raw.push(':');
                    match self.peek_char(0) {
                        Some(')') => {
                            self.advance();
                            raw.push(')');
                            decoded.push('\n');
                        }
                        Some('>') => {
                            self.advance();
                            raw.push('>');
                            decoded.push('\t');
                        }
                        Some('o') => {
                            self.advance();
                            raw.push('o');
                            decoded.push('\u{7}');
                        }
                        Some('"') => {
                            self.advance();
                            raw.push('"');
                            decoded.push('"');
                        }
                        Some(':') => {
                            self.advance();
                            raw.push(':');
                            decoded.push(':');
                        }
                        _ => {
                            return Err(Error::lex(
                                esc_mark.line,
                                esc_mark.col,
                                "invalid escape sequence in string literal",
                            ))
                        }
                    }
                }
                Some(c) => {
                    self.advance();
                    raw.push(c);
                    decoded.push(c);
                }
            }
        }

        self.emit(TokenKind::String, raw, Lexeme::Str(decoded), str_start.line, str_start.col);

        let close_mark = self.mark();
        self.advance();
        self.emit(TokenKind::Quote, "\"", Lexeme::None, close_mark.line, close_mark.col);

        Ok(())
    }
}

/// Tokenize LOLCODE source text. Pure function; no I/O.
pub fn tokenize(source: &str) -> Result<Vec<Token>, Error> {
    let mut lexer = Lexer::new(source);
    lexer.run()?;
    Ok(ellipsis::strip_ellipsis_continuations(lexer.tokens))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(src: &str) -> Vec<TokenKind> {
        tokenize(src).unwrap().into_iter().map(|t| t.kind).collect()
    }

    #[test]
    fn keyword_priority_i_has_a() {
        assert_eq!(kinds("I HAS A"), vec![TokenKind::IHasA]);
        assert_eq!(kinds("I"), vec![TokenKind::Identifier]);
        assert_eq!(kinds("I IZ"), vec![TokenKind::IIz]);
    }

    #[test]
    fn o_rly_requires_question_mark() {
        assert_eq!(kinds("O RLY?"), vec![TokenKind::ORly]);
        assert_eq!(kinds("O"), vec![TokenKind::Identifier]);
    }

    #[test]
    fn single_line_comment_discarded() {
        assert_eq!(kinds("HAI BTW this is ignored\nKTHXBYE"), vec![
            TokenKind::Hai,
            TokenKind::Newline,
            TokenKind::Kthxbye,
        ]);
    }

    #[test]
    fn block_comment_discarded() {
        assert_eq!(
            kinds("HAI OBTW\nmulti\nline\nTLDR\nKTHXBYE"),
            vec![TokenKind::Hai, TokenKind::Newline, TokenKind::Kthxbye]
        );
    }

    #[test]
    fn string_escapes() {
        let tokens = tokenize(r#""a:)b:>c:"d:::e""#).unwrap();
        let TokenKind::String = tokens[1].kind else {
            panic!("expected string token")
        };
        assert_eq!(tokens[1].value, Lexeme::Str("a\nb\tc\"d:e".to_string()));
    }

    #[test]
    fn negative_float_literal() {
        let tokens = tokenize("-3.5").unwrap();
        assert_eq!(tokens[0].kind, TokenKind::Float);
        assert_eq!(tokens[0].value, Lexeme::Float(-3.5));
    }

    #[test]
    fn ellipsis_continuation_removed() {
        assert_eq!(
            kinds("VISIBLE 1 AN 2 ...\n    AN 3"),
            kinds("VISIBLE 1 AN 2 AN 3")
        );
    }

    #[test]
    fn unterminated_string_is_lex_error() {
        assert!(tokenize("\"abc").is_err());
    }

    #[test]
    fn reserved_tldr_outside_comment_errors() {
        assert!(tokenize("TLDR").is_err());
    }
}
