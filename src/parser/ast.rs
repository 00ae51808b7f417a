//! AST node variants (spec §3.2): a closed set of expression and statement
//! kinds, each carrying at least a source line for diagnostics.

use crate::value::TypeTag;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArithOp {
    Sum,
    Diff,
    Produkt,
    Quoshunt,
    Mod,
    Biggr,
    Smallr,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoolOp {
    Both,
    Either,
    Won,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoolVariadicOp {
    All,
    Any,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompareOp {
    Same,
    Diffrint,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopOp {
    Uppin,
    Nerfin,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardKind {
    Til,
    Wile,
}

#[derive(Debug, Clone)]
pub struct Expr {
    pub kind: ExprKind,
    pub line: usize,
    pub col: usize,
}

impl Expr {
    pub fn new(kind: ExprKind, line: usize, col: usize) -> Self {
        Self { kind, line, col }
    }
}

#[derive(Debug, Clone)]
pub enum ExprKind {
    IntLit(i64),
    FloatLit(f64),
    BoolLit(bool),
    StringLit(String),
    NoobLit,
    VarRef(String),
    ArithBinOp(ArithOp, Box<Expr>, Box<Expr>),
    BoolBinOp(BoolOp, Box<Expr>, Box<Expr>),
    BoolUnOp(Box<Expr>),
    BoolVariadic(BoolVariadicOp, Vec<Expr>),
    Compare(CompareOp, Box<Expr>, Box<Expr>),
    StrConcat(Vec<Expr>),
    Typecast(Box<Expr>, TypeTag),
    FuncCall(String, Vec<Expr>),
    ArrayAccess(String, Box<Expr>),
}

#[derive(Debug, Clone)]
pub struct Stmt {
    pub kind: StmtKind,
    pub line: usize,
    pub col: usize,
}

impl Stmt {
    pub fn new(kind: StmtKind, line: usize, col: usize) -> Self {
        Self { kind, line, col }
    }
}

#[derive(Debug, Clone)]
pub enum StmtKind {
    VarDecl {
        name: String,
        init: Option<Expr>,
    },
    VarAssign {
        name: String,
        expr: Expr,
    },
    Print {
        operands: Vec<Expr>,
        suppress_newline: bool,
    },
    Input {
        var_name: String,
    },
    If {
        then_stmts: Vec<Stmt>,
        elifs: Vec<(Expr, Vec<Stmt>)>,
        else_stmts: Option<Vec<Stmt>>,
    },
    Switch {
        cases: Vec<(Expr, Vec<Stmt>)>,
        default: Vec<Stmt>,
    },
    Loop {
        label: String,
        op: LoopOp,
        var: String,
        guard: Option<(GuardKind, Expr)>,
        body: Vec<Stmt>,
    },
    FuncDef(std::rc::Rc<FunctionDef>),
    Break,
    Return(Expr),
    ArrayDecl {
        name: String,
        elem_type: TypeTag,
        size: Expr,
    },
    ArrayConfine {
        value: Expr,
        array_name: String,
        index: Expr,
    },
    ArrayDischarge {
        array_name: String,
        index: Expr,
    },
    /// A bare expression used as a statement; per spec §4.3 its value (when
    /// not `Break`/`Return`) updates `IT`.
    ExprStmt(Expr),
}

/// A function definition: `HOW IZ I name [YR p (AN YR p)*] body [FOUND YR e] IF U SAY SO`.
#[derive(Debug, Clone)]
pub struct FunctionDef {
    pub name: String,
    pub params: Vec<String>,
    pub body: Vec<Stmt>,
    pub line: usize,
}

/// The top-level program: functions declared before `HAI` or after `KTHXBYE`
/// are hoisted ahead of the main body (spec §4.2, Open Question #2).
#[derive(Debug, Clone)]
pub struct Program {
    pub hoisted_funcs: Vec<std::rc::Rc<FunctionDef>>,
    pub var_section: Vec<Stmt>,
    pub body: Vec<Stmt>,
}
