//! Statement-level productions (spec §4.2 `Stmt`, `VarDecl`, if/switch/loop/
//! function, array ops) plus the `GTFO`/`FOUND YR` control-flow validation.

use std::rc::Rc;

use super::ast::{FunctionDef, GuardKind, LoopOp, Stmt, StmtKind};
use super::{ControlFlow, Parser};
use crate::error::Error;
use crate::lexer::TokenKind;
use crate::value::TypeTag;

impl Parser {
    pub(super) fn parse_stmt(&mut self) -> Result<Stmt, Error> {
        let tok = self.current().clone();
        match tok.kind {
            TokenKind::IHasA => self.parse_var_decl(),
            TokenKind::Visible => self.parse_print(),
            TokenKind::Gimmeh => self.parse_input(),
            TokenKind::ORly => self.parse_if(),
            TokenKind::Wtf => self.parse_switch(),
            TokenKind::ImInYr => self.parse_loop(),
            TokenKind::HowIzI => {
                let def = self.parse_func_def()?;
                Ok(Stmt::new(StmtKind::FuncDef(def), tok.line, tok.col))
            }
            TokenKind::Gtfo => {
                if !self.control_stack.iter().any(|c| {
                    matches!(c, ControlFlow::Loop | ControlFlow::Switch | ControlFlow::Function)
                }) {
                    return Err(self.syntax_error(
                        "'GTFO' inside a loop, switch, or function",
                        "Break",
                    ));
                }
                self.advance();
                Ok(Stmt::new(StmtKind::Break, tok.line, tok.col))
            }
            TokenKind::FoundYr => {
                if !self.control_stack.contains(&ControlFlow::Function) {
                    return Err(self.syntax_error("'FOUND YR' inside a function", "Return"));
                }
                self.advance();
                let expr = self.parse_expr()?;
                Ok(Stmt::new(StmtKind::Return(expr), tok.line, tok.col))
            }
            TokenKind::Confine => self.parse_array_confine(),
            TokenKind::Discharge => self.parse_array_discharge(),
            TokenKind::Identifier => self.parse_assignment_or_expr_stmt(),
            _ => {
                let expr = self.parse_expr()?;
                Ok(Stmt::new(StmtKind::ExprStmt(expr), tok.line, tok.col))
            }
        }
    }

    fn parse_var_decl(&mut self) -> Result<Stmt, Error> {
        self.push_frame("var_decl");
        let start = self.advance(); // I HAS A
        let name_tok = self.expect(TokenKind::Identifier, "a variable name", "Variable Declaration")?;

        let stmt = if self.check(TokenKind::Itz) {
            self.advance();
            if self.check(TokenKind::A) && matches!(self.peek(1).map(|t| t.kind), Some(TokenKind::Noob | TokenKind::Numbr | TokenKind::Numbar | TokenKind::Yarn | TokenKind::Troof))
            {
                self.advance(); // A
                let elem_type = self.parse_type_tag("Array Declaration")?;
                self.expect(TokenKind::Uhs, "'UHS'", "Array Declaration")?;
                self.expect(TokenKind::Of, "'OF'", "Array Declaration")?;
                let size = self.parse_expr()?;
                Stmt::new(
                    StmtKind::ArrayDecl {
                        name: name_tok.lexeme.clone(),
                        elem_type,
                        size,
                    },
                    start.line,
                    start.col,
                )
            } else {
                let init = self.parse_expr()?;
                Stmt::new(
                    StmtKind::VarDecl {
                        name: name_tok.lexeme.clone(),
                        init: Some(init),
                    },
                    start.line,
                    start.col,
                )
            }
        } else {
            Stmt::new(
                StmtKind::VarDecl {
                    name: name_tok.lexeme.clone(),
                    init: None,
                },
                start.line,
                start.col,
            )
        };

        self.pop_frame();
        Ok(stmt)
    }

    pub(super) fn parse_type_tag(&mut self, category: &str) -> Result<TypeTag, Error> {
        let tok = self.current().clone();
        let tag = match tok.kind {
            TokenKind::Noob => TypeTag::Noob,
            TokenKind::Troof => TypeTag::Troof,
            TokenKind::Numbr => TypeTag::Numbr,
            TokenKind::Numbar => TypeTag::Numbar,
            TokenKind::Yarn => TypeTag::Yarn,
            _ => return Err(self.syntax_error("a type name", category)),
        };
        self.advance();
        Ok(tag)
    }

    fn parse_print(&mut self) -> Result<Stmt, Error> {
        self.push_frame("print");
        let start = self.advance(); // VISIBLE
        let mut operands = vec![self.parse_expr()?];
        loop {
            if self.check(TokenKind::An) {
                self.advance();
                operands.push(self.parse_expr()?);
            } else if self.check(TokenKind::Plus) {
                self.advance();
                operands.push(self.parse_expr()?);
            } else {
                break;
            }
        }
        let suppress_newline = if self.check(TokenKind::Exclamation) {
            self.advance();
            true
        } else {
            false
        };
        self.pop_frame();
        Ok(Stmt::new(
            StmtKind::Print {
                operands,
                suppress_newline,
            },
            start.line,
            start.col,
        ))
    }

    fn parse_input(&mut self) -> Result<Stmt, Error> {
        let start = self.advance(); // GIMMEH
        let name = self.expect(TokenKind::Identifier, "a variable name", "Input")?;
        Ok(Stmt::new(
            StmtKind::Input {
                var_name: name.lexeme,
            },
            start.line,
            start.col,
        ))
    }

    fn parse_if(&mut self) -> Result<Stmt, Error> {
        self.push_frame("if");
        let start = self.advance(); // O RLY?
        self.skip_newlines();
        self.expect(TokenKind::YaRly, "'YA RLY'", "If Statement")?;
        self.skip_newlines();
        let then_stmts = self.parse_stmt_list(&[TokenKind::Mebbe, TokenKind::NoWai, TokenKind::Oic])?;

        let mut elifs = Vec::new();
        while self.check(TokenKind::Mebbe) {
            self.advance();
            let cond = self.parse_expr()?;
            self.skip_newlines();
            let stmts = self.parse_stmt_list(&[TokenKind::Mebbe, TokenKind::NoWai, TokenKind::Oic])?;
            elifs.push((cond, stmts));
        }

        let else_stmts = if self.check(TokenKind::NoWai) {
            self.advance();
            self.skip_newlines();
            Some(self.parse_stmt_list(&[TokenKind::Oic])?)
        } else {
            None
        };

        self.expect(TokenKind::Oic, "'OIC'", "If Statement")?;
        self.pop_frame();
        Ok(Stmt::new(
            StmtKind::If {
                then_stmts,
                elifs,
                else_stmts,
            },
            start.line,
            start.col,
        ))
    }

    fn parse_switch(&mut self) -> Result<Stmt, Error> {
        self.push_frame("switch");
        self.control_stack.push(ControlFlow::Switch);
        let start = self.advance(); // WTF?
        self.skip_newlines();

        let mut cases = Vec::new();
        while self.check(TokenKind::Omg) {
            self.advance();
            let lit = self.parse_literal_for_case()?;
            self.skip_newlines();
            let stmts = self.parse_stmt_list(&[TokenKind::Omg, TokenKind::Omgwtf, TokenKind::Oic])?;
            cases.push((lit, stmts));
        }

        let default = if self.check(TokenKind::Omgwtf) {
            self.advance();
            self.skip_newlines();
            self.parse_stmt_list(&[TokenKind::Oic])?
        } else {
            Vec::new()
        };

        self.expect(TokenKind::Oic, "'OIC'", "Switch Statement")?;
        self.control_stack.pop();
        self.pop_frame();
        Ok(Stmt::new(StmtKind::Switch { cases, default }, start.line, start.col))
    }

    fn parse_literal_for_case(&mut self) -> Result<super::ast::Expr, Error> {
        let tok = self.current().clone();
        match tok.kind {
            TokenKind::Integer | TokenKind::Float | TokenKind::Win | TokenKind::Fail | TokenKind::Quote => {
                self.parse_expr()
            }
            _ => Err(self.syntax_error("a literal ('OMG' case label)", "Switch Statement")),
        }
    }

    fn parse_loop(&mut self) -> Result<Stmt, Error> {
        self.push_frame("loop");
        self.control_stack.push(ControlFlow::Loop);
        let start = self.advance(); // IM IN YR
        let label = self.expect(TokenKind::Identifier, "a loop label", "Loop")?;

        let op = match self.current().kind {
            TokenKind::Uppin => LoopOp::Uppin,
            TokenKind::Nerfin => LoopOp::Nerfin,
            _ => return Err(self.syntax_error("'UPPIN' or 'NERFIN'", "Loop")),
        };
        self.advance();
        self.expect(TokenKind::Yr, "'YR'", "Loop")?;
        let var = self.expect(TokenKind::Identifier, "the loop variable", "Loop")?;

        let guard = match self.current().kind {
            TokenKind::Til => {
                self.advance();
                Some((GuardKind::Til, self.parse_expr()?))
            }
            TokenKind::Wile => {
                self.advance();
                Some((GuardKind::Wile, self.parse_expr()?))
            }
            _ => None,
        };

        self.skip_newlines();
        let body = self.parse_stmt_list(&[TokenKind::ImOuttaYr])?;
        self.expect(TokenKind::ImOuttaYr, "'IM OUTTA YR'", "Loop")?;
        let end_label = self.expect(TokenKind::Identifier, "the loop label", "Loop")?;
        if end_label.lexeme != label.lexeme {
            return Err(self.syntax_error(
                &format!("loop label '{}' to match 'IM IN YR {}'", label.lexeme, label.lexeme),
                "Loop",
            ));
        }

        self.control_stack.pop();
        self.pop_frame();
        Ok(Stmt::new(
            StmtKind::Loop {
                label: label.lexeme,
                op,
                var: var.lexeme,
                guard,
                body,
            },
            start.line,
            start.col,
        ))
    }

    pub(super) fn parse_func_def(&mut self) -> Result<Rc<FunctionDef>, Error> {
        self.push_frame("func_def");
        self.control_stack.push(ControlFlow::Function);
        let start = self.advance(); // HOW IZ I
        let name = self.expect(TokenKind::Identifier, "a function name", "Function Definition")?;

        let mut params = Vec::new();
        if self.check(TokenKind::Yr) {
            self.advance();
            params.push(self.expect(TokenKind::Identifier, "a parameter name", "Function Definition")?.lexeme);
            while self.check(TokenKind::An) {
                self.advance();
                self.expect(TokenKind::Yr, "'YR'", "Function Definition")?;
                params.push(self.expect(TokenKind::Identifier, "a parameter name", "Function Definition")?.lexeme);
            }
        }

        self.skip_newlines();
        let body = self.parse_stmt_list(&[TokenKind::IfUSaySo])?;
        self.expect(TokenKind::IfUSaySo, "'IF U SAY SO'", "Function Definition")?;

        self.control_stack.pop();
        self.pop_frame();
        Ok(Parser::func_def_rc(FunctionDef {
            name: name.lexeme,
            params,
            body,
            line: start.line,
        }))
    }

    fn parse_array_confine(&mut self) -> Result<Stmt, Error> {
        self.push_frame("array_confine");
        let start = self.advance(); // CONFINE
        let value = self.parse_expr()?;
        self.expect(TokenKind::In, "'IN'", "Array Write")?;
        let name = self.expect(TokenKind::Identifier, "an array name", "Array Write")?;
        self.expect(TokenKind::At, "'AT'", "Array Write")?;
        let index = self.parse_expr()?;
        self.pop_frame();
        Ok(Stmt::new(
            StmtKind::ArrayConfine {
                value,
                array_name: name.lexeme,
                index,
            },
            start.line,
            start.col,
        ))
    }

    fn parse_array_discharge(&mut self) -> Result<Stmt, Error> {
        self.push_frame("array_discharge");
        let start = self.advance(); // DISCHARGE
        let name = self.expect(TokenKind::Identifier, "an array name", "Array Write")?;
        self.expect(TokenKind::At, "'AT'", "Array Write")?;
        let index = self.parse_expr()?;
        self.pop_frame();
        Ok(Stmt::new(
            StmtKind::ArrayDischarge {
                array_name: name.lexeme,
                index,
            },
            start.line,
            start.col,
        ))
    }

    fn parse_assignment_or_expr_stmt(&mut self) -> Result<Stmt, Error> {
        let name_tok = self.current().clone();

        if matches!(self.peek(1).map(|t| t.kind), Some(TokenKind::R)) {
            self.advance(); // identifier
            self.advance(); // R
            let expr = self.parse_expr()?;
            return Ok(Stmt::new(
                StmtKind::VarAssign {
                    name: name_tok.lexeme,
                    expr,
                },
                name_tok.line,
                name_tok.col,
            ));
        }

        if matches!(self.peek(1).map(|t| t.kind), Some(TokenKind::IsNowA)) {
            self.advance(); // identifier
            self.advance(); // IS NOW A
            let target = self.parse_type_tag("Typecast Assignment")?;
            let var_ref = super::ast::Expr::new(
                super::ast::ExprKind::VarRef(name_tok.lexeme.clone()),
                name_tok.line,
                name_tok.col,
            );
            let expr = super::ast::Expr::new(
                super::ast::ExprKind::Typecast(Box::new(var_ref), target),
                name_tok.line,
                name_tok.col,
            );
            return Ok(Stmt::new(
                StmtKind::VarAssign {
                    name: name_tok.lexeme,
                    expr,
                },
                name_tok.line,
                name_tok.col,
            ));
        }

        let expr = self.parse_expr()?;
        Ok(Stmt::new(StmtKind::ExprStmt(expr), name_tok.line, name_tok.col))
    }
}
