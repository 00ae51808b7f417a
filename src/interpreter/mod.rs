//! Tree-walking evaluator: ties the [`Host`] boundary, statement execution
//! and expression evaluation together behind one `run` entry point (spec
//! §4.3, §6.5).

mod eval;
mod exec;
mod io;

pub use io::{Host, StdHost};

use crate::error::Error;
use crate::parser::ast::Program;
use crate::symtab::Context;
use crate::value::{Closure, Value};
use std::rc::Rc;

pub struct Interpreter<'h> {
    host: &'h mut dyn Host,
}

impl<'h> Interpreter<'h> {
    pub fn new(host: &'h mut dyn Host) -> Self {
        Self { host }
    }

    /// Runs a whole program: hoisted functions are declared into the global
    /// scope before anything else executes, then the `WAZZUP` section, then
    /// the main body (spec §4.2 "functions... hoisted ahead of the main
    /// body").
    pub fn run(&mut self, program: &Program) -> Result<(), Error> {
        let ctx = Context::global();

        for def in &program.hoisted_funcs {
            let closure = Value::Function(Rc::new(Closure {
                def: Rc::clone(def),
                captured: Rc::clone(&ctx.scope),
            }));
            ctx.scope.borrow_mut().declare(def.name.clone(), closure);
        }

        self.exec_stmt_list(&program.var_section, &ctx)?;
        self.exec_stmt_list(&program.body, &ctx)?;

        self.host.on_symbols(&ctx);
        Ok(())
    }
}
