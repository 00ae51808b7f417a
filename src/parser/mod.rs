//! Recursive-descent parser: turns a token list into a [`Program`] or a
//! structured `SyntaxError` (spec §4.2). One token of lookahead plus an
//! auxiliary `peek(k)`; no backtracking, no recovery — the first error
//! returns immediately.

pub mod ast;
mod expr;
mod stmt;

use std::rc::Rc;

use log::trace;

use crate::error::{Error, ParseFrame};
use crate::lexer::{Token, TokenKind};

pub use ast::Program;

/// Tags pushed onto the control-flow stack so `GTFO` (and, by extension,
/// `FOUND YR`) can be validated against their enclosing construct (spec
/// §4.2 "control-flow stack").
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlFlow {
    Switch,
    Loop,
    Function,
}

pub struct Parser {
    tokens: Vec<Token>,
    pos: usize,
    context_stack: Vec<(&'static str, Token)>,
    control_stack: Vec<ControlFlow>,
}

pub fn parse(tokens: Vec<Token>) -> Result<Program, Error> {
    Parser::new(tokens).parse_program()
}

impl Parser {
    fn new(tokens: Vec<Token>) -> Self {
        Self {
            tokens,
            pos: 0,
            context_stack: Vec::new(),
            control_stack: Vec::new(),
        }
    }

    // --- cursor -----------------------------------------------------

    fn current(&self) -> &Token {
        self.tokens.get(self.pos).unwrap_or_else(|| self.tokens.last().expect("empty token stream"))
    }

    fn peek(&self, k: usize) -> Option<&Token> {
        self.tokens.get(self.pos + k)
    }

    fn at_end(&self) -> bool {
        self.pos >= self.tokens.len()
    }

    fn check(&self, kind: TokenKind) -> bool {
        !self.at_end() && self.current().kind == kind
    }

    fn advance(&mut self) -> Token {
        let t = self.current().clone();
        if !self.at_end() {
            self.pos += 1;
        }
        t
    }

    fn found_desc(&self) -> String {
        if self.at_end() {
            "end of input".to_string()
        } else {
            let t = self.current();
            if t.lexeme.is_empty() {
                format!("{:?}", t.kind)
            } else {
                t.lexeme.clone()
            }
        }
    }

    fn expect(&mut self, kind: TokenKind, expected: &str, category: &str) -> Result<Token, Error> {
        if self.check(kind) {
            Ok(self.advance())
        } else {
            Err(self.syntax_error(expected, category))
        }
    }

    fn syntax_error(&self, expected: &str, category: &str) -> Error {
        let (line, col) = if self.at_end() {
            let last = self.tokens.last();
            (last.map_or(1, |t| t.line), last.map_or(1, |t| t.col))
        } else {
            (self.current().line, self.current().col)
        };
        let frames = self
            .context_stack
            .iter()
            .map(|(name, tok)| ParseFrame {
                function_name: name,
                line: tok.line,
                col: tok.col,
            })
            .collect();
        Error::syntax(
            line,
            col,
            format!("expected {expected}, found {}", self.found_desc()),
            expected,
            self.found_desc(),
            category,
            frames,
        )
    }

    fn push_frame(&mut self, name: &'static str) {
        trace!("parser: push frame '{name}' (depth {})", self.context_stack.len() + 1);
        let tok = self.current().clone();
        self.context_stack.push((name, tok));
    }

    fn pop_frame(&mut self) {
        if let Some((name, _)) = self.context_stack.pop() {
            trace!("parser: pop frame '{name}' (depth {})", self.context_stack.len());
        }
    }

    fn skip_newlines(&mut self) {
        while self.check(TokenKind::Newline) {
            self.advance();
        }
    }

    fn skip_separators(&mut self) {
        while self.check(TokenKind::Newline) || self.check(TokenKind::Comma) {
            self.advance();
        }
    }

    // --- top level ----------------------------------------------------

    fn parse_program(&mut self) -> Result<Program, Error> {
        self.push_frame("program");
        let mut hoisted = Vec::new();

        self.skip_newlines();
        while self.check(TokenKind::HowIzI) {
            hoisted.push(self.parse_func_def()?);
            self.skip_newlines();
        }

        self.expect(TokenKind::Hai, "'HAI'", "Program")?;
        if matches!(self.current().kind, TokenKind::Integer | TokenKind::Float) {
            self.advance();
        }
        self.skip_newlines();

        let var_section = if self.check(TokenKind::Wazzup) {
            self.parse_var_section()?
        } else {
            Vec::new()
        };

        let body = self.parse_stmt_list(&[TokenKind::Kthxbye])?;
        self.expect(TokenKind::Kthxbye, "'KTHXBYE'", "Program")?;

        self.skip_newlines();
        while self.check(TokenKind::HowIzI) {
            hoisted.push(self.parse_func_def()?);
            self.skip_newlines();
        }

        if !self.at_end() {
            return Err(self.syntax_error("end of input", "Program"));
        }

        self.pop_frame();
        Ok(Program {
            hoisted_funcs: hoisted,
            var_section,
            body,
        })
    }

    fn parse_var_section(&mut self) -> Result<Vec<ast::Stmt>, Error> {
        self.push_frame("var_section");
        self.advance(); // WAZZUP
        self.skip_newlines();
        let mut decls = Vec::new();
        while self.check(TokenKind::IHasA) {
            decls.push(self.parse_var_decl()?);
            self.skip_separators();
        }
        self.expect(TokenKind::Buhbye, "'BUHBYE'", "Variable Section")?;
        self.skip_newlines();
        self.pop_frame();
        Ok(decls)
    }

    fn parse_stmt_list(&mut self, terminators: &[TokenKind]) -> Result<Vec<ast::Stmt>, Error> {
        self.push_frame("stmt_list");
        let mut stmts = Vec::new();
        self.skip_separators();
        while !self.at_end() && !terminators.contains(&self.current().kind) {
            stmts.push(self.parse_stmt()?);
            self.skip_separators();
        }
        self.pop_frame();
        Ok(stmts)
    }

    pub(super) fn func_def_rc(def: ast::FunctionDef) -> Rc<ast::FunctionDef> {
        Rc::new(def)
    }
}
