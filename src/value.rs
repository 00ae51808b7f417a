//! The runtime `Value` tagged union and its coercion matrix (spec §4.4).
//!
//! Arithmetic and boolean operators coerce both operands first and never
//! fail on type mismatch alone; only `BOTH SAEM`/`DIFFRINT` and explicit
//! `YARN`-to-number conversions can fail on an untypeable operand.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use crate::error::Error;
use crate::parser::ast::FunctionDef;
use crate::symtab::SymbolTableCell;

#[derive(Debug, Clone)]
pub enum Value {
    Noob,
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(Rc<String>),
    Array(Rc<RefCell<ArrayData>>),
    Function(Rc<Closure>),
    /// A `GTFO` in flight, unwinding to the nearest loop or switch.
    Break,
    /// A `FOUND YR <expr>` in flight, unwinding to the nearest function call.
    Return(Box<Value>),
}

/// A one-dimensional, homogeneous, zero-indexed array (spec §3.3): a fixed
/// capacity, a current length (`items.len()`), and an element type tag used
/// only to pick the zero value for newly-appended slots.
#[derive(Debug)]
pub struct ArrayData {
    pub elem_type: TypeTag,
    pub capacity: usize,
    pub items: Vec<Value>,
}

/// A function value: its definition plus the context active when `HOW IZ I`
/// ran, so the body can see variables declared in its enclosing scope at
/// call time (spec §3.3, §5.3 — functions capture, they don't copy).
#[derive(Debug)]
pub struct Closure {
    pub def: Rc<FunctionDef>,
    pub captured: Rc<SymbolTableCell>,
}

/// The four user-visible type tags a value can be explicitly cast to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypeTag {
    Noob,
    Troof,
    Numbr,
    Numbar,
    Yarn,
}

impl fmt::Display for TypeTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            TypeTag::Noob => "NOOB",
            TypeTag::Troof => "TROOF",
            TypeTag::Numbr => "NUMBR",
            TypeTag::Numbar => "NUMBAR",
            TypeTag::Yarn => "YARN",
        })
    }
}

impl TypeTag {
    /// The zero value of this type, used to fill freshly-declared array
    /// slots (spec §4.3: "initialized to the element type's zero value").
    pub fn zero_value(self) -> Value {
        match self {
            TypeTag::Noob => Value::Noob,
            TypeTag::Troof => Value::Bool(false),
            TypeTag::Numbr => Value::Int(0),
            TypeTag::Numbar => Value::Float(0.0),
            TypeTag::Yarn => Value::str(""),
        }
    }
}

impl Value {
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Noob => "NOOB",
            Value::Bool(_) => "TROOF",
            Value::Int(_) => "NUMBR",
            Value::Float(_) => "NUMBAR",
            Value::Str(_) => "YARN",
            Value::Array(_) => "BUKKIT",
            Value::Function(_) => "FUNCTION",
            Value::Break => "BREAK",
            Value::Return(_) => "RETURN",
        }
    }

    pub fn str(s: impl Into<String>) -> Self {
        Value::Str(Rc::new(s.into()))
    }

    /// Implicit coercion to `YARN`, used by `SMOOSH` operands (spec §4.3/
    /// §4.4): `NOOB` and non-scalar values have no implicit string form.
    pub fn as_str_implicit(&self, line: usize, col: usize) -> Result<String, Error> {
        match self {
            Value::Noob => Err(Error::runtime(
                line,
                col,
                "cannot implicitly cast NOOB to YARN",
            )
            .with_hint("use explicit typecasting with MAEK or IS NOW A")),
            Value::Array(_) | Value::Function(_) | Value::Break | Value::Return(_) => {
                Err(Error::runtime(
                    line,
                    col,
                    format!("cannot cast {} to YARN", self.type_name()),
                ))
            }
            other => Ok(other.display_string()),
        }
    }

    /// Implicit coercion to `TROOF`, used by `O RLY?`/`WILE`/`TIL` guards.
    /// `NOOB` implicitly coerces to `FAIL` (spec §4.4 matrix, confirmed by
    /// the original's `Noob.typecast(Boolean)`), unlike the implicit `YARN`
    /// and number coercions, which do error on `NOOB`.
    pub fn truthy(&self, line: usize, col: usize) -> Result<bool, Error> {
        match self {
            Value::Noob => Ok(false),
            Value::Bool(b) => Ok(*b),
            Value::Int(n) => Ok(*n != 0),
            Value::Float(n) => Ok(*n != 0.0),
            Value::Str(s) => Ok(!s.is_empty()),
            other => Err(Error::runtime(
                line,
                col,
                format!("cannot cast {} to TROOF", other.type_name()),
            )),
        }
    }

    /// Implicit coercion to a number, used by arithmetic operators: both
    /// operands are cast to `NUMBR`/`NUMBAR` before the operation runs.
    pub fn as_number(&self, line: usize, col: usize) -> Result<Number, Error> {
        match self {
            Value::Int(n) => Ok(Number::Int(*n)),
            Value::Float(n) => Ok(Number::Float(*n)),
            Value::Bool(b) => Ok(Number::Int(if *b { 1 } else { 0 })),
            Value::Str(s) => parse_number_str(s, line, col),
            Value::Noob => Err(Error::runtime(
                line,
                col,
                "cannot implicitly cast NOOB to a number",
            )
            .with_hint("use explicit typecasting with MAEK or IS NOW A")),
            other => Err(Error::runtime(
                line,
                col,
                format!("cannot cast {} to a number", other.type_name()),
            )),
        }
    }

    /// Implicit coercion to an array index/size, used by `ArrayDecl`'s size
    /// expression and `ArrayConfine`/`ArrayDischarge`'s index expression
    /// (spec §4.3/§4.4): coerces through `as_number` first, same as the
    /// original's `typecast(Number)` + `is_integer` check, so a `NUMBAR`
    /// holding a whole number or a numeric `YARN` are valid indices, and
    /// only a genuinely non-integral result errors.
    pub fn as_index(&self, line: usize, col: usize) -> Result<i64, Error> {
        match self.as_number(line, col)? {
            Number::Int(n) => Ok(n),
            Number::Float(n) if n.fract() == 0.0 => Ok(n as i64),
            Number::Float(_) => {
                Err(Error::runtime(line, col, "array index must be an integer (NUMBR)"))
            }
        }
    }

    pub fn cast(&self, to: TypeTag, line: usize, col: usize) -> Result<Value, Error> {
        match to {
            TypeTag::Noob => match self {
                Value::Noob => Ok(Value::Noob),
                _ => Err(Error::runtime(
                    line,
                    col,
                    format!("cannot cast {} to NOOB", self.type_name()),
                )),
            },
            TypeTag::Troof => match self {
                Value::Array(_) | Value::Function(_) | Value::Break | Value::Return(_) => {
                    Err(Error::runtime(
                        line,
                        col,
                        format!("cannot cast {} to TROOF", self.type_name()),
                    ))
                }
                _ => Ok(Value::Bool(self.cast_troof())),
            },
            TypeTag::Numbr => match self {
                Value::Noob => Ok(Value::Int(0)),
                _ => match self.as_number(line, col)? {
                    Number::Int(n) => Ok(Value::Int(n)),
                    Number::Float(n) => Ok(Value::Int(n as i64)),
                },
            },
            TypeTag::Numbar => match self {
                Value::Noob => Ok(Value::Float(0.0)),
                _ => match self.as_number(line, col)? {
                    Number::Int(n) => Ok(Value::Float(n as f64)),
                    Number::Float(n) => Ok(Value::Float(n)),
                },
            },
            TypeTag::Yarn => match self {
                Value::Array(_) | Value::Function(_) | Value::Break | Value::Return(_) => {
                    Err(Error::runtime(
                        line,
                        col,
                        format!("cannot cast {} to YARN", self.type_name()),
                    ))
                }
                _ => Ok(Value::str(self.display_string())),
            },
        }
    }

    /// Explicit `TROOF` cast never fails for scalar types; unlike `truthy`,
    /// `NOOB` explicitly casts to `FAIL` rather than erroring (spec §4.4).
    pub fn cast_troof(&self) -> bool {
        match self {
            Value::Noob => false,
            Value::Bool(b) => *b,
            Value::Int(n) => *n != 0,
            Value::Float(n) => *n != 0.0,
            Value::Str(s) => !s.is_empty(),
            _ => false,
        }
    }

    pub fn display_string(&self) -> String {
        match self {
            Value::Noob => String::new(),
            Value::Bool(true) => "WIN".to_string(),
            Value::Bool(false) => "FAIL".to_string(),
            Value::Int(n) => n.to_string(),
            Value::Float(n) => format_float(*n),
            Value::Str(s) => s.as_str().to_string(),
            Value::Array(_) => "BUKKIT".to_string(),
            Value::Function(_) => "FUNCTION".to_string(),
            Value::Break | Value::Return(_) => String::new(),
        }
    }

    /// Numeric-only equality used by `BOTH SAEM`/`DIFFRINT` (spec §4.4,
    /// confirmed by the original's `is_equal`: comparing anything but two
    /// numbers is a `RuntimeError`, never a silent `FAIL`).
    pub fn numeric_eq(&self, other: &Value, line: usize, col: usize) -> Result<bool, Error> {
        let a = self.as_number(line, col).map_err(|_| incomparable(self, other, line, col))?;
        let b = other.as_number(line, col).map_err(|_| incomparable(self, other, line, col))?;
        if !matches!(self, Value::Int(_) | Value::Float(_))
            || !matches!(other, Value::Int(_) | Value::Float(_))
        {
            return Err(incomparable(self, other, line, col));
        }
        Ok(match (a, b) {
            (Number::Int(x), Number::Int(y)) => x == y,
            (Number::Float(x), Number::Float(y)) => x == y,
            (Number::Int(x), Number::Float(y)) | (Number::Float(y), Number::Int(x)) => {
                x as f64 == y
            }
        })
    }

    /// Same-type structural equality used only by `WTF?`/`OMG` case matching
    /// (see DESIGN.md, Open Question #1): numbers compare by value, strings
    /// by bytes, booleans by value; values of different runtime types never
    /// match, and no coercion happens.
    pub fn switch_eq(&self, other: &Value) -> bool {
        match (self, other) {
            (Value::Int(a), Value::Int(b)) => a == b,
            (Value::Float(a), Value::Float(b)) => a == b,
            (Value::Int(a), Value::Float(b)) | (Value::Float(b), Value::Int(a)) => *a as f64 == *b,
            (Value::Str(a), Value::Str(b)) => a == b,
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::Noob, Value::Noob) => true,
            _ => false,
        }
    }
}

fn incomparable(a: &Value, b: &Value, line: usize, col: usize) -> Error {
    Error::runtime(
        line,
        col,
        "Cannot compare non-numeric types. Only NUMBR and NUMBAR can be compared.",
    )
    .with_hint(format!(
        "Convert {} and {} to numbers first using explicit typecasting.",
        a.type_name(),
        b.type_name()
    ))
}

#[derive(Debug, Clone, Copy)]
pub enum Number {
    Int(i64),
    Float(f64),
}

impl Number {
    pub fn to_value(self) -> Value {
        match self {
            Number::Int(n) => Value::Int(n),
            Number::Float(n) => Value::Float(n),
        }
    }

    pub fn as_f64(self) -> f64 {
        match self {
            Number::Int(n) => n as f64,
            Number::Float(n) => n,
        }
    }
}

/// `YARN`-to-number coercion: `^-?\d+$` is an integer, `^-?\d*\.\d+$` is a
/// float; anything else cannot be cast (spec §4.4, mirrors the original's
/// regex-based `String.typecast`).
fn parse_number_str(s: &str, line: usize, col: usize) -> Result<Number, Error> {
    let bad = || {
        Error::runtime(line, col, format!("cannot cast \"{s}\" to a number"))
            .with_hint("YARN must look like an integer or a decimal to cast to NUMBR/NUMBAR")
    };

    let body = s.strip_prefix('-').unwrap_or(s);
    if body.is_empty() {
        return Err(bad());
    }

    if let Some((int_part, frac_part)) = body.split_once('.') {
        if frac_part.is_empty() || !frac_part.bytes().all(|b| b.is_ascii_digit()) {
            return Err(bad());
        }
        if !int_part.bytes().all(|b| b.is_ascii_digit()) {
            return Err(bad());
        }
        return s.parse::<f64>().map(Number::Float).map_err(|_| bad());
    }

    if !body.bytes().all(|b| b.is_ascii_digit()) {
        return Err(bad());
    }
    s.parse::<i64>().map(Number::Int).map_err(|_| bad())
}

/// `NUMBAR` prints to exactly two decimal places (spec §4.4 matrix, §4.3
/// `SMOOSH`: "floats to two decimal places").
fn format_float(n: f64) -> String {
    format!("{n:.2}")
}
