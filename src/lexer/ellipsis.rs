//! Post-pass: a line ending in `...` is a continuation of the next line, so
//! the `ELLIPSIS` token and the `NEWLINE` token immediately following it are
//! dropped together before the parser ever sees them (spec §4.1/§8).

use super::token::{Token, TokenKind};

pub fn strip_ellipsis_continuations(tokens: Vec<Token>) -> Vec<Token> {
    let mut out = Vec::with_capacity(tokens.len());
    let mut i = 0;
    while i < tokens.len() {
        if tokens[i].kind == TokenKind::Ellipsis
            && tokens.get(i + 1).map(|t| t.kind) == Some(TokenKind::Newline)
        {
            i += 2;
            continue;
        }
        out.push(tokens[i].clone());
        i += 1;
    }
    out
}
