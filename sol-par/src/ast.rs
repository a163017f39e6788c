//! Abstract syntax tree node definitions.
//!
//! Every node is owned by the parser's [`sol_util::Arena`] and carries its
//! source [`Position`]. Children are non-owning references into the same
//! arena (`&'ast Expr<'ast>`), never boxes: the arena, not the node, owns
//! the memory. The tree is acyclic by construction — the recursive-descent
//! walk always produces children before the parent that references them.

use sol_util::{LiteralValue, Position, TokenKind};

/// The kind of a literal node. `INTEGER`/`FLOAT` carry their pre-decoded
/// value from the token; `STRING` carries the interned lexeme; `BOOL` and
/// `NULL` are self-describing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LiteralKind<'ast> {
    Integer(i64),
    Float(f64),
    String(&'ast str),
    Bool(bool),
    Null,
}

impl<'ast> From<LiteralValue> for LiteralKind<'ast> {
    fn from(value: LiteralValue) -> Self {
        match value {
            LiteralValue::Int(n) => LiteralKind::Integer(n),
            LiteralValue::Float(f) => LiteralKind::Float(f),
        }
    }
}

/// A single expression node.
///
/// Reserved-but-unconstructed variants (`Call`) are declared to mark the
/// design space; the statement-level reserved kinds (`Function`, `Class`,
/// `If`, `While`, `For`, `Block`) live on [`Stmt`] instead, since they are
/// statements rather than expressions in this grammar.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Expr<'ast> {
    Literal {
        kind: LiteralKind<'ast>,
        position: Position<'ast>,
    },
    Identifier {
        name: &'ast str,
        position: Position<'ast>,
    },
    Binary {
        left: &'ast Expr<'ast>,
        op: TokenKind,
        right: &'ast Expr<'ast>,
        position: Position<'ast>,
    },
    Unary {
        op: TokenKind,
        operand: &'ast Expr<'ast>,
        position: Position<'ast>,
    },
    Assignment {
        target: &'ast Expr<'ast>,
        value: &'ast Expr<'ast>,
        position: Position<'ast>,
    },
    /// Reserved for a later phase; the grammar in this crate never
    /// constructs one.
    Call {
        callee: &'ast Expr<'ast>,
        args: &'ast [&'ast Expr<'ast>],
        position: Position<'ast>,
    },
}

impl<'ast> Expr<'ast> {
    pub fn position(&self) -> Position<'ast> {
        match self {
            Expr::Literal { position, .. }
            | Expr::Identifier { position, .. }
            | Expr::Binary { position, .. }
            | Expr::Unary { position, .. }
            | Expr::Assignment { position, .. }
            | Expr::Call { position, .. } => *position,
        }
    }
}

/// A single statement node.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Stmt<'ast> {
    VarDeclaration {
        declared_type: TokenKind,
        name: &'ast str,
        initializer: Option<&'ast Expr<'ast>>,
        position: Position<'ast>,
    },
    ExpressionStatement {
        expr: &'ast Expr<'ast>,
        position: Position<'ast>,
    },
    ReturnStatement {
        value: Option<&'ast Expr<'ast>>,
        position: Position<'ast>,
    },
    /// Reserved; not produced by this grammar.
    Function {
        name: &'ast str,
        body: &'ast [&'ast Stmt<'ast>],
        position: Position<'ast>,
    },
    /// Reserved; not produced by this grammar.
    Class {
        name: &'ast str,
        members: &'ast [&'ast Stmt<'ast>],
        position: Position<'ast>,
    },
    /// Reserved; not produced by this grammar.
    If {
        condition: &'ast Expr<'ast>,
        then_branch: &'ast Stmt<'ast>,
        else_branch: Option<&'ast Stmt<'ast>>,
        position: Position<'ast>,
    },
    /// Reserved; not produced by this grammar.
    While {
        condition: &'ast Expr<'ast>,
        body: &'ast Stmt<'ast>,
        position: Position<'ast>,
    },
    /// Reserved; not produced by this grammar.
    For {
        init: Option<&'ast Stmt<'ast>>,
        condition: Option<&'ast Expr<'ast>>,
        update: Option<&'ast Expr<'ast>>,
        body: &'ast Stmt<'ast>,
        position: Position<'ast>,
    },
    /// Reserved; not produced by this grammar.
    Block {
        statements: &'ast [&'ast Stmt<'ast>],
        position: Position<'ast>,
    },
}

impl<'ast> Stmt<'ast> {
    pub fn position(&self) -> Position<'ast> {
        match self {
            Stmt::VarDeclaration { position, .. }
            | Stmt::ExpressionStatement { position, .. }
            | Stmt::ReturnStatement { position, .. }
            | Stmt::Function { position, .. }
            | Stmt::Class { position, .. }
            | Stmt::If { position, .. }
            | Stmt::While { position, .. }
            | Stmt::For { position, .. }
            | Stmt::Block { position, .. } => *position,
        }
    }
}

/// The parse root. `statements` is built up in a `Vec` during parsing, then
/// copied into the arena once the top-level loop finishes — the slice
/// itself lives in the arena like every other node, but the builder doesn't
/// know its final length up front.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Program<'ast> {
    pub statements: &'ast [&'ast Stmt<'ast>],
}
