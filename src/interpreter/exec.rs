//! Statement execution (spec §4.3). Each handler returns a plain `Value`,
//! or the `Break`/`Return` sentinel that the nearest enclosing loop,
//! switch, or function call consumes — LOLCODE's control flow runs through
//! the same `Result<Value, Error>` every expression uses, per spec's
//! "result wrapper that tracks early error exit".

use std::cell::RefCell;
use std::rc::Rc;

use log::trace;

use super::Interpreter;
use crate::error::Error;
use crate::parser::ast::{GuardKind, LoopOp, Stmt, StmtKind};
use crate::symtab::Context;
use crate::value::{ArrayData, Closure, Number, Value};

impl<'h> Interpreter<'h> {
    pub(super) fn exec_stmt_list(&mut self, stmts: &[Stmt], ctx: &Context) -> Result<Value, Error> {
        for stmt in stmts {
            let result = self.exec_stmt(stmt, ctx)?;
            if matches!(result, Value::Break | Value::Return(_)) {
                return Ok(result);
            }
        }
        Ok(Value::Noob)
    }

    fn exec_stmt(&mut self, stmt: &Stmt, ctx: &Context) -> Result<Value, Error> {
        match &stmt.kind {
            StmtKind::ExprStmt(expr) => {
                let v = self.eval_expr(expr, ctx)?;
                if matches!(v, Value::Break | Value::Return(_)) {
                    return Ok(v);
                }
                ctx.set_it(v);
                Ok(Value::Noob)
            }

            StmtKind::VarDecl { name, init } => {
                let v = match init {
                    Some(e) => self.eval_expr(e, ctx)?,
                    None => Value::Noob,
                };
                ctx.scope.borrow_mut().declare(name.clone(), v);
                Ok(Value::Noob)
            }

            StmtKind::VarAssign { name, expr } => {
                let v = self.eval_expr(expr, ctx)?;
                if !ctx.scope.borrow_mut().assign(name, v) {
                    return Err(Error::runtime(
                        stmt.line,
                        stmt.col,
                        format!("undeclared variable '{name}'"),
                    )
                    .with_hint(format!("Declare it first with 'I HAS A {name}'.")));
                }
                Ok(Value::Noob)
            }

            StmtKind::Print {
                operands,
                suppress_newline,
            } => {
                let mut out = String::new();
                for op in operands {
                    let v = self.eval_expr(op, ctx)?;
                    out.push_str(&v.as_str_implicit(op.line, op.col)?);
                }
                if !suppress_newline {
                    out.push('\n');
                }
                self.host.write(&out);
                Ok(Value::Noob)
            }

            StmtKind::Input { var_name } => {
                if ctx.scope.borrow().get(var_name).is_none() {
                    return Err(Error::runtime(
                        stmt.line,
                        stmt.col,
                        format!("undeclared variable '{var_name}'"),
                    )
                    .with_hint(format!("Declare it first with 'I HAS A {var_name}'.")));
                }
                let line = self.host.read_line().map_err(|e| {
                    Error::runtime(stmt.line, stmt.col, format!("failed to read input: {e}"))
                })?;
                if !ctx.scope.borrow_mut().assign(var_name, Value::str(line)) {
                    return Err(Error::runtime(
                        stmt.line,
                        stmt.col,
                        format!("undeclared variable '{var_name}'"),
                    ));
                }
                Ok(Value::Noob)
            }

            StmtKind::If {
                then_stmts,
                elifs,
                else_stmts,
            } => {
                if ctx.get_it().truthy(stmt.line, stmt.col)? {
                    return self.exec_stmt_list(then_stmts, &ctx.nested_block());
                }
                for (cond, body) in elifs {
                    let v = self.eval_expr(cond, ctx)?;
                    if v.truthy(cond.line, cond.col)? {
                        return self.exec_stmt_list(body, &ctx.nested_block());
                    }
                }
                if let Some(body) = else_stmts {
                    return self.exec_stmt_list(body, &ctx.nested_block());
                }
                Ok(Value::Noob)
            }

            StmtKind::Switch { cases, default } => {
                let it = ctx.get_it();
                for (lit, body) in cases {
                    let case_val = self.eval_expr(lit, ctx)?;
                    if it.switch_eq(&case_val) {
                        let result = self.exec_stmt_list(body, &ctx.nested_block())?;
                        return Ok(match result {
                            Value::Break => Value::Noob,
                            other => other,
                        });
                    }
                }
                let result = self.exec_stmt_list(default, &ctx.nested_block())?;
                Ok(match result {
                    Value::Break => Value::Noob,
                    other => other,
                })
            }

            StmtKind::Loop {
                var, op, guard, body, ..
            } => {
                loop {
                    if let Some((kind, expr)) = guard {
                        let v = self.eval_expr(expr, ctx)?;
                        let truthy = v.truthy(expr.line, expr.col)?;
                        let exit = match kind {
                            GuardKind::Til => truthy,
                            GuardKind::Wile => !truthy,
                        };
                        trace!("loop '{var}': guard {kind:?} evaluated to {truthy}, exit={exit}");
                        if exit {
                            break;
                        }
                    }

                    let result = self.exec_stmt_list(body, &ctx.nested_block())?;
                    match result {
                        Value::Break => break,
                        Value::Return(v) => return Ok(Value::Return(v)),
                        _ => {}
                    }

                    let cur = ctx.scope.borrow().get(var).ok_or_else(|| {
                        Error::runtime(
                            stmt.line,
                            stmt.col,
                            format!("loop variable '{var}' is not declared"),
                        )
                    })?;
                    let step = cur.as_number(stmt.line, stmt.col)?;
                    let next = match (op, step) {
                        (LoopOp::Uppin, Number::Int(n)) => Value::Int(n + 1),
                        (LoopOp::Uppin, Number::Float(n)) => Value::Float(n + 1.0),
                        (LoopOp::Nerfin, Number::Int(n)) => Value::Int(n - 1),
                        (LoopOp::Nerfin, Number::Float(n)) => Value::Float(n - 1.0),
                    };
                    ctx.scope.borrow_mut().assign(var, next);
                }
                Ok(Value::Noob)
            }

            StmtKind::FuncDef(def) => {
                let closure = Value::Function(Rc::new(Closure {
                    def: Rc::clone(def),
                    captured: Rc::clone(&ctx.scope),
                }));
                ctx.scope.borrow_mut().declare(def.name.clone(), closure);
                Ok(Value::Noob)
            }

            StmtKind::Break => Ok(Value::Break),

            StmtKind::Return(expr) => {
                let v = self.eval_expr(expr, ctx)?;
                Ok(Value::Return(Box::new(v)))
            }

            StmtKind::ArrayDecl {
                name,
                elem_type,
                size,
            } => {
                let size_v = self.eval_expr(size, ctx)?;
                let n = size_v.as_index(size.line, size.col)?;
                if n <= 0 {
                    return Err(Error::runtime(
                        stmt.line,
                        stmt.col,
                        "array size must be a positive integer",
                    ));
                }
                let arr = Value::Array(Rc::new(RefCell::new(ArrayData {
                    elem_type: *elem_type,
                    capacity: n as usize,
                    items: Vec::with_capacity(n as usize),
                })));
                ctx.scope.borrow_mut().declare(name.clone(), arr);
                Ok(Value::Noob)
            }

            StmtKind::ArrayConfine {
                value,
                array_name,
                index,
            } => {
                let v = self.eval_expr(value, ctx)?;
                let idx_v = self.eval_expr(index, ctx)?;
                let idx = idx_v.as_index(index.line, index.col)?;
                let arr = ctx.scope.borrow().get(array_name).ok_or_else(|| {
                    Error::runtime(
                        stmt.line,
                        stmt.col,
                        format!("undeclared array '{array_name}'"),
                    )
                })?;
                let Value::Array(cell) = arr else {
                    return Err(Error::runtime(
                        stmt.line,
                        stmt.col,
                        format!("'{array_name}' is not an array"),
                    ));
                };
                let mut data = cell.borrow_mut();
                if idx < 0 {
                    return Err(Error::runtime(stmt.line, stmt.col, "array index out of range"));
                }
                let idx = idx as usize;
                if idx == data.items.len() {
                    if data.items.len() >= data.capacity {
                        return Err(Error::runtime(stmt.line, stmt.col, "array is at capacity"));
                    }
                    data.items.push(v);
                } else if idx < data.items.len() {
                    data.items[idx] = v;
                } else {
                    return Err(Error::runtime(stmt.line, stmt.col, "array index out of range"));
                }
                Ok(Value::Noob)
            }

            StmtKind::ArrayDischarge { array_name, index } => {
                let idx_v = self.eval_expr(index, ctx)?;
                let idx = idx_v.as_index(index.line, index.col)?;
                let arr = ctx.scope.borrow().get(array_name).ok_or_else(|| {
                    Error::runtime(
                        stmt.line,
                        stmt.col,
                        format!("undeclared array '{array_name}'"),
                    )
                })?;
                let Value::Array(cell) = arr else {
                    return Err(Error::runtime(
                        stmt.line,
                        stmt.col,
                        format!("'{array_name}' is not an array"),
                    ));
                };
                let mut data = cell.borrow_mut();
                if idx < 0 || idx as usize >= data.items.len() {
                    return Err(Error::runtime(stmt.line, stmt.col, "array index out of range"));
                }
                let removed = data.items.remove(idx as usize);
                drop(data);
                ctx.set_it(removed);
                Ok(Value::Noob)
            }
        }
    }
}
