//! Lexically-scoped symbol tables and the call-stack `Context` chain
//! (spec §4.5). Each scope owns its own bindings; lookups walk outward
//! through parent scopes, and `IT` is just another binding in the
//! innermost scope.

use std::collections::HashMap;
use std::rc::Rc;

use log::trace;

use crate::value::Value;

pub const IMPLICIT_VAR: &str = "IT";

/// A single lexical scope: one `HashMap` plus a link to its parent.
#[derive(Debug)]
pub struct SymbolTable {
    vars: HashMap<String, Value>,
    parent: Option<Rc<SymbolTableCell>>,
}

/// Shared, mutably-borrowed handle to a `SymbolTable`, so nested scopes can
/// hold a cheap reference to an enclosing one without lifetimes.
pub type SymbolTableCell = std::cell::RefCell<SymbolTable>;

impl SymbolTable {
    pub fn new(parent: Option<Rc<SymbolTableCell>>) -> Rc<SymbolTableCell> {
        Rc::new(std::cell::RefCell::new(Self {
            vars: HashMap::new(),
            parent,
        }))
    }

    pub fn declare(&mut self, name: impl Into<String>, value: Value) {
        self.vars.insert(name.into(), value);
    }

    /// Walks outward through parent scopes; returns a clone since `Value`
    /// is cheap to clone (scalars copy, heap data is `Rc`-shared).
    pub fn get(&self, name: &str) -> Option<Value> {
        if let Some(v) = self.vars.get(name) {
            return Some(v.clone());
        }
        match &self.parent {
            Some(p) => p.borrow().get(name),
            None => {
                trace!("symtab: get miss for '{name}'");
                None
            }
        }
    }

    pub fn has_local(&self, name: &str) -> bool {
        self.vars.contains_key(name)
    }

    /// Assigns to the nearest scope (innermost to outermost) that already
    /// declares `name`; returns `false` if no scope declares it, in which
    /// case the caller should raise an undeclared-variable error.
    pub fn assign(&mut self, name: &str, value: Value) -> bool {
        if self.vars.contains_key(name) {
            self.vars.insert(name.to_string(), value);
            return true;
        }
        match &self.parent {
            Some(p) => p.borrow_mut().assign(name, value),
            None => {
                trace!("symtab: assign miss for '{name}'");
                false
            }
        }
    }
}

/// One frame of the interpreter's call stack: a name (for tracebacks) plus
/// the symbol table rooted at that frame.
pub struct Context {
    pub name: String,
    pub scope: Rc<SymbolTableCell>,
}

impl Context {
    pub fn global() -> Self {
        let scope = SymbolTable::new(None);
        scope.borrow_mut().declare(IMPLICIT_VAR, Value::Noob);
        Self {
            name: "main".to_string(),
            scope,
        }
    }

    /// A fresh call frame: `IT` is *not* redeclared here — spec §4.5 puts it
    /// only in the outermost scope, and lookups/assignments walk up to it.
    pub fn child(&self, name: impl Into<String>) -> Self {
        let scope = SymbolTable::new(Some(Rc::clone(&self.scope)));
        Self {
            name: name.into(),
            scope,
        }
    }

    /// A function call frame rooted at the function's *captured* scope
    /// rather than the caller's — lexical, not dynamic, scoping (spec §4.3
    /// "the function's captured context becomes the parent of a fresh
    /// child context").
    pub fn from_parent(name: impl Into<String>, parent: Rc<SymbolTableCell>) -> Self {
        Self {
            name: name.into(),
            scope: SymbolTable::new(Some(parent)),
        }
    }

    pub fn nested_block(&self) -> Self {
        Self {
            name: self.name.clone(),
            scope: SymbolTable::new(Some(Rc::clone(&self.scope))),
        }
    }

    pub fn get_it(&self) -> Value {
        self.scope.borrow().get(IMPLICIT_VAR).unwrap_or(Value::Noob)
    }

    pub fn set_it(&self, value: Value) {
        if !self.scope.borrow_mut().assign(IMPLICIT_VAR, value.clone()) {
            self.scope.borrow_mut().declare(IMPLICIT_VAR, value);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn declare_and_get() {
        let ctx = Context::global();
        ctx.scope.borrow_mut().declare("X", Value::Int(42));
        assert!(matches!(ctx.scope.borrow().get("X"), Some(Value::Int(42))));
    }

    #[test]
    fn child_scope_sees_parent() {
        let ctx = Context::global();
        ctx.scope.borrow_mut().declare("X", Value::Int(1));
        let inner = ctx.nested_block();
        assert!(matches!(inner.scope.borrow().get("X"), Some(Value::Int(1))));
    }

    #[test]
    fn assign_updates_outer_scope() {
        let ctx = Context::global();
        ctx.scope.borrow_mut().declare("X", Value::Int(1));
        let inner = ctx.nested_block();
        assert!(inner.scope.borrow_mut().assign("X", Value::Int(2)));
        assert!(matches!(ctx.scope.borrow().get("X"), Some(Value::Int(2))));
    }

    #[test]
    fn assign_to_undeclared_fails() {
        let ctx = Context::global();
        assert!(!ctx.scope.borrow_mut().assign("NOPE", Value::Int(1)));
    }
}
