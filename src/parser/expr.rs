//! Expression-level productions (spec §4.2). Operators are prefix keyword
//! forms (`SUM OF x AN y`), not infix with precedence, so parsing is a flat
//! dispatch on the current token kind rather than a climbing parser.
//!
//! `SMOOSH` and `ALL OF`/`ANY OF` are *non-nestable*: forbidden as the
//! operand of another operator (spec §4.2). `parse_expr` is the top-level
//! entry (allows them); `parse_operand` is used for every nested position.

use super::ast::{ArithOp, BoolOp, BoolVariadicOp, CompareOp, Expr, ExprKind};
use super::Parser;
use crate::error::Error;
use crate::lexer::{Lexeme, TokenKind};

impl Parser {
    pub(super) fn parse_expr(&mut self) -> Result<Expr, Error> {
        self.parse_expr_inner(true)
    }

    fn parse_operand(&mut self) -> Result<Expr, Error> {
        self.parse_expr_inner(false)
    }

    fn parse_expr_inner(&mut self, allow_variadic: bool) -> Result<Expr, Error> {
        self.push_frame("expr");
        let tok = self.current().clone();
        let expr = match tok.kind {
            TokenKind::Integer => {
                self.advance();
                let Lexeme::Int(n) = tok.value else { unreachable!() };
                Expr::new(ExprKind::IntLit(n), tok.line, tok.col)
            }
            TokenKind::Float => {
                self.advance();
                let Lexeme::Float(n) = tok.value else { unreachable!() };
                Expr::new(ExprKind::FloatLit(n), tok.line, tok.col)
            }
            TokenKind::Win => {
                self.advance();
                Expr::new(ExprKind::BoolLit(true), tok.line, tok.col)
            }
            TokenKind::Fail => {
                self.advance();
                Expr::new(ExprKind::BoolLit(false), tok.line, tok.col)
            }
            TokenKind::Noob => {
                self.advance();
                Expr::new(ExprKind::NoobLit, tok.line, tok.col)
            }
            TokenKind::Quote => self.parse_string_lit()?,
            TokenKind::SumOf | TokenKind::DiffOf | TokenKind::ProduktOf | TokenKind::QuoshuntOf
            | TokenKind::ModOf | TokenKind::BiggrOf | TokenKind::SmallrOf => self.parse_arith_bin_op()?,
            TokenKind::BothOf | TokenKind::EitherOf | TokenKind::WonOf => self.parse_bool_bin_op()?,
            TokenKind::Not => self.parse_bool_un_op()?,
            TokenKind::AllOf | TokenKind::AnyOf => {
                if !allow_variadic {
                    return Err(self.syntax_error(
                        "a nestable expression ('ALL OF'/'ANY OF' cannot nest)",
                        "Expression",
                    ));
                }
                self.parse_bool_variadic()?
            }
            TokenKind::BothSaem | TokenKind::Diffrint => self.parse_compare()?,
            TokenKind::Maek => self.parse_typecast()?,
            TokenKind::Smoosh => {
                if !allow_variadic {
                    return Err(self.syntax_error(
                        "a nestable expression ('SMOOSH' cannot nest)",
                        "Expression",
                    ));
                }
                self.parse_smoosh()?
            }
            TokenKind::IIz => self.parse_func_call()?,
            TokenKind::Identifier => {
                self.advance();
                if self.check(TokenKind::LBracket) {
                    self.advance();
                    let index = self.parse_expr()?;
                    self.expect(TokenKind::RBracket, "']'", "Array Access")?;
                    Expr::new(
                        ExprKind::ArrayAccess(tok.lexeme.clone(), Box::new(index)),
                        tok.line,
                        tok.col,
                    )
                } else {
                    Expr::new(ExprKind::VarRef(tok.lexeme.clone()), tok.line, tok.col)
                }
            }
            _ => return Err(self.syntax_error("an expression", "Expression")),
        };
        self.pop_frame();
        Ok(expr)
    }

    fn parse_string_lit(&mut self) -> Result<Expr, Error> {
        let open = self.advance(); // opening QUOTE
        let s = self.expect(TokenKind::String, "a string literal", "String Literal")?;
        self.expect(TokenKind::Quote, "closing '\"'", "String Literal")?;
        let Lexeme::Str(text) = s.value else { unreachable!() };
        Ok(Expr::new(ExprKind::StringLit(text), open.line, open.col))
    }

    fn parse_arith_bin_op(&mut self) -> Result<Expr, Error> {
        let tok = self.advance();
        let op = match tok.kind {
            TokenKind::SumOf => ArithOp::Sum,
            TokenKind::DiffOf => ArithOp::Diff,
            TokenKind::ProduktOf => ArithOp::Produkt,
            TokenKind::QuoshuntOf => ArithOp::Quoshunt,
            TokenKind::ModOf => ArithOp::Mod,
            TokenKind::BiggrOf => ArithOp::Biggr,
            TokenKind::SmallrOf => ArithOp::Smallr,
            _ => unreachable!(),
        };
        let left = self.parse_operand()?;
        self.expect(TokenKind::An, "'AN'", "Arithmetic Expression")?;
        let right = self.parse_operand()?;
        Ok(Expr::new(
            ExprKind::ArithBinOp(op, Box::new(left), Box::new(right)),
            tok.line,
            tok.col,
        ))
    }

    fn parse_bool_bin_op(&mut self) -> Result<Expr, Error> {
        let tok = self.advance();
        let op = match tok.kind {
            TokenKind::BothOf => BoolOp::Both,
            TokenKind::EitherOf => BoolOp::Either,
            TokenKind::WonOf => BoolOp::Won,
            _ => unreachable!(),
        };
        let left = self.parse_operand()?;
        self.expect(TokenKind::An, "'AN'", "Boolean Expression")?;
        let right = self.parse_operand()?;
        Ok(Expr::new(
            ExprKind::BoolBinOp(op, Box::new(left), Box::new(right)),
            tok.line,
            tok.col,
        ))
    }

    fn parse_bool_un_op(&mut self) -> Result<Expr, Error> {
        let tok = self.advance(); // NOT
        let operand = self.parse_operand()?;
        Ok(Expr::new(ExprKind::BoolUnOp(Box::new(operand)), tok.line, tok.col))
    }

    fn parse_bool_variadic(&mut self) -> Result<Expr, Error> {
        let tok = self.advance();
        let op = match tok.kind {
            TokenKind::AllOf => BoolVariadicOp::All,
            TokenKind::AnyOf => BoolVariadicOp::Any,
            _ => unreachable!(),
        };
        let mut operands = vec![self.parse_operand()?];
        while self.check(TokenKind::An) {
            self.advance();
            operands.push(self.parse_operand()?);
        }
        if self.check(TokenKind::Mkay) {
            self.advance();
        }
        Ok(Expr::new(
            ExprKind::BoolVariadic(op, operands),
            tok.line,
            tok.col,
        ))
    }

    fn parse_compare(&mut self) -> Result<Expr, Error> {
        let tok = self.advance();
        let op = match tok.kind {
            TokenKind::BothSaem => CompareOp::Same,
            TokenKind::Diffrint => CompareOp::Diffrint,
            _ => unreachable!(),
        };
        let left = self.parse_operand()?;
        self.expect(TokenKind::An, "'AN'", "Comparison")?;
        let right = self.parse_operand()?;
        Ok(Expr::new(
            ExprKind::Compare(op, Box::new(left), Box::new(right)),
            tok.line,
            tok.col,
        ))
    }

    /// `MAEK expr A Type` or `MAEK A expr Type` — both produce the same
    /// `Typecast` node (spec §4.2 "`MAEK` has two surface forms").
    fn parse_typecast(&mut self) -> Result<Expr, Error> {
        let tok = self.advance(); // MAEK
        if self.check(TokenKind::A) {
            self.advance();
            let operand = self.parse_operand()?;
            let target = self.parse_type_tag("Typecast")?;
            Ok(Expr::new(
                ExprKind::Typecast(Box::new(operand), target),
                tok.line,
                tok.col,
            ))
        } else {
            let operand = self.parse_operand()?;
            self.expect(TokenKind::A, "'A'", "Typecast")?;
            let target = self.parse_type_tag("Typecast")?;
            Ok(Expr::new(
                ExprKind::Typecast(Box::new(operand), target),
                tok.line,
                tok.col,
            ))
        }
    }

    fn parse_smoosh(&mut self) -> Result<Expr, Error> {
        let tok = self.advance(); // SMOOSH
        let mut operands = vec![self.parse_operand()?];
        while self.check(TokenKind::An) {
            self.advance();
            operands.push(self.parse_operand()?);
        }
        if self.check(TokenKind::Mkay) {
            self.advance();
        }
        Ok(Expr::new(ExprKind::StrConcat(operands), tok.line, tok.col))
    }

    fn parse_func_call(&mut self) -> Result<Expr, Error> {
        let tok = self.advance(); // I IZ
        let name = self.expect(TokenKind::Identifier, "a function name", "Function Call")?;
        let mut args = Vec::new();
        if self.check(TokenKind::Yr) {
            self.advance();
            args.push(self.parse_operand()?);
            while self.check(TokenKind::An) {
                self.advance();
                self.expect(TokenKind::Yr, "'YR'", "Function Call")?;
                args.push(self.parse_operand()?);
            }
        }
        self.expect(TokenKind::Mkay, "'MKAY'", "Function Call")?;
        Ok(Expr::new(
            ExprKind::FuncCall(name.lexeme, args),
            tok.line,
            tok.col,
        ))
    }
}
