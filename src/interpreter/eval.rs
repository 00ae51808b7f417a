//! Expression evaluation (spec §4.3). Every arm returns a plain `Value` —
//! `Break`/`Return` only ever originate from statements, never from an
//! expression, so callers don't need to check for them here.

use std::rc::Rc;

use super::Interpreter;
use crate::error::Error;
use crate::parser::ast::{ArithOp, BoolOp, BoolVariadicOp, CompareOp, Expr, ExprKind};
use crate::symtab::Context;
use crate::value::{Number, Value};

impl<'h> Interpreter<'h> {
    pub(super) fn eval_expr(&mut self, expr: &Expr, ctx: &Context) -> Result<Value, Error> {
        match &expr.kind {
            ExprKind::IntLit(n) => Ok(Value::Int(*n)),
            ExprKind::FloatLit(n) => Ok(Value::Float(*n)),
            ExprKind::BoolLit(b) => Ok(Value::Bool(*b)),
            ExprKind::StringLit(s) => Ok(Value::str(s.clone())),
            ExprKind::NoobLit => Ok(Value::Noob),

            ExprKind::VarRef(name) => ctx.scope.borrow().get(name).ok_or_else(|| {
                Error::runtime(expr.line, expr.col, format!("undeclared variable '{name}'"))
                    .with_hint(format!("Declare it first with 'I HAS A {name}'."))
            }),

            ExprKind::ArithBinOp(op, l, r) => {
                let lv = self.eval_expr(l, ctx)?.as_number(l.line, l.col)?;
                let rv = self.eval_expr(r, ctx)?.as_number(r.line, r.col)?;
                eval_arith(*op, lv, rv, expr.line, expr.col)
            }

            ExprKind::BoolBinOp(op, l, r) => {
                let lv = self.eval_expr(l, ctx)?.truthy(l.line, l.col)?;
                let rv = self.eval_expr(r, ctx)?.truthy(r.line, r.col)?;
                Ok(Value::Bool(match op {
                    BoolOp::Both => lv && rv,
                    BoolOp::Either => lv || rv,
                    BoolOp::Won => lv != rv,
                }))
            }

            ExprKind::BoolUnOp(operand) => {
                let v = self.eval_expr(operand, ctx)?.truthy(operand.line, operand.col)?;
                Ok(Value::Bool(!v))
            }

            ExprKind::BoolVariadic(op, operands) => {
                let mut result = *op == BoolVariadicOp::All;
                for operand in operands {
                    let v = self.eval_expr(operand, ctx)?.truthy(operand.line, operand.col)?;
                    match op {
                        BoolVariadicOp::All => result &= v,
                        BoolVariadicOp::Any => result |= v,
                    }
                }
                Ok(Value::Bool(result))
            }

            ExprKind::Compare(op, l, r) => {
                let lv = self.eval_expr(l, ctx)?;
                let rv = self.eval_expr(r, ctx)?;
                let eq = lv.numeric_eq(&rv, expr.line, expr.col)?;
                Ok(Value::Bool(match op {
                    CompareOp::Same => eq,
                    CompareOp::Diffrint => !eq,
                }))
            }

            ExprKind::StrConcat(operands) => {
                let mut out = String::new();
                for operand in operands {
                    let v = self.eval_expr(operand, ctx)?;
                    out.push_str(&v.as_str_implicit(operand.line, operand.col)?);
                }
                Ok(Value::str(out))
            }

            ExprKind::Typecast(operand, target) => {
                let v = self.eval_expr(operand, ctx)?;
                v.cast(*target, expr.line, expr.col)
            }

            ExprKind::FuncCall(name, args) => self.eval_func_call(name, args, expr, ctx),

            ExprKind::ArrayAccess(name, index) => {
                let arr = ctx.scope.borrow().get(name).ok_or_else(|| {
                    Error::runtime(expr.line, expr.col, format!("undeclared array '{name}'"))
                })?;
                let Value::Array(cell) = arr else {
                    return Err(Error::runtime(
                        expr.line,
                        expr.col,
                        format!("'{name}' is not an array"),
                    ));
                };
                let idx_v = self.eval_expr(index, ctx)?;
                let idx = idx_v.as_index(index.line, index.col)?;
                let data = cell.borrow();
                if idx < 0 || idx as usize >= data.items.len() {
                    return Err(Error::runtime(expr.line, expr.col, "array index out of range"));
                }
                Ok(data.items[idx as usize].clone())
            }
        }
    }

    fn eval_func_call(
        &mut self,
        name: &str,
        args: &[Expr],
        expr: &Expr,
        ctx: &Context,
    ) -> Result<Value, Error> {
        let callee = ctx.scope.borrow().get(name).ok_or_else(|| {
            Error::runtime(expr.line, expr.col, format!("undeclared function '{name}'"))
        })?;
        let Value::Function(closure) = callee else {
            return Err(Error::runtime(
                expr.line,
                expr.col,
                format!("'{name}' is not a function"),
            ));
        };

        if args.len() != closure.def.params.len() {
            return Err(Error::runtime(
                expr.line,
                expr.col,
                format!(
                    "'{}' expects {} argument(s), got {}",
                    name,
                    closure.def.params.len(),
                    args.len()
                ),
            ));
        }

        let mut values = Vec::with_capacity(args.len());
        for arg in args {
            values.push(self.eval_expr(arg, ctx)?);
        }

        let call_ctx = Context::from_parent(name.to_string(), Rc::clone(&closure.captured));
        for (param, value) in closure.def.params.iter().zip(values) {
            call_ctx.scope.borrow_mut().declare(param.clone(), value);
        }

        let result = self.exec_stmt_list(&closure.def.body, &call_ctx)?;
        Ok(match result {
            Value::Return(v) => *v,
            _ => Value::Noob,
        })
    }
}

fn eval_arith(
    op: ArithOp,
    l: Number,
    r: Number,
    line: usize,
    col: usize,
) -> Result<Value, Error> {
    use ArithOp::*;
    if matches!(op, Quoshunt | Mod) {
        let divisor_zero = match r {
            Number::Int(n) => n == 0,
            Number::Float(n) => n == 0.0,
        };
        if divisor_zero {
            return Err(Error::runtime(line, col, "division by zero"));
        }
    }

    let is_float = matches!(l, Number::Float(_)) || matches!(r, Number::Float(_));
    Ok(match op {
        Sum if is_float => Value::Float(l.as_f64() + r.as_f64()),
        Sum => Value::Int(as_int(l) + as_int(r)),
        Diff if is_float => Value::Float(l.as_f64() - r.as_f64()),
        Diff => Value::Int(as_int(l) - as_int(r)),
        Produkt if is_float => Value::Float(l.as_f64() * r.as_f64()),
        Produkt => Value::Int(as_int(l) * as_int(r)),
        Quoshunt if is_float => Value::Float(l.as_f64() / r.as_f64()),
        Quoshunt => Value::Int(as_int(l) / as_int(r)),
        Mod if is_float => Value::Float(l.as_f64() % r.as_f64()),
        Mod => Value::Int(as_int(l) % as_int(r)),
        Biggr if is_float => Value::Float(l.as_f64().max(r.as_f64())),
        Biggr => Value::Int(as_int(l).max(as_int(r))),
        Smallr if is_float => Value::Float(l.as_f64().min(r.as_f64())),
        Smallr => Value::Int(as_int(l).min(as_int(r))),
    })
}

fn as_int(n: Number) -> i64 {
    match n {
        Number::Int(n) => n,
        Number::Float(n) => n as i64,
    }
}
