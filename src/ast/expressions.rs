use crate::{lexer::tokens::TokenKind, Position};

use super::ast::Ident;

#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    Unary(UnaryExpr),
    Binary(BinaryExpr),
    Var(VarExpr),
    Assign(AssignExpr),
    Call(CallExpr),
    BasicLit(BasicLitExpr),
}

impl Expr {
    /// Position of the first token of the expression.
    pub fn position(&self) -> Position {
        match self {
            Expr::Unary(unary) => unary.position,
            Expr::Binary(binary) => binary.left.position(),
            Expr::Var(var) => var.name.position,
            Expr::Assign(assign) => assign.target.position(),
            Expr::Call(call) => call.callee.position,
            Expr::BasicLit(lit) => lit.position,
        }
    }
}

/// Prefix operator applied to an operand: `-x`, `~x`, `!x`.
#[derive(Debug, Clone, PartialEq)]
pub struct UnaryExpr {
    pub op: TokenKind,
    pub operand: Box<Expr>,
    pub position: Position,
}

#[derive(Debug, Clone, PartialEq)]
pub struct BinaryExpr {
    pub op: TokenKind,
    pub left: Box<Expr>,
    pub right: Box<Expr>,
}

/// A variable reference.
#[derive(Debug, Clone, PartialEq)]
pub struct VarExpr {
    pub name: Ident,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AssignExpr {
    pub target: Box<Expr>,
    pub value: Box<Expr>,
}

/// A call through a plain function name: `name(args)`.
#[derive(Debug, Clone, PartialEq)]
pub struct CallExpr {
    pub callee: Ident,
    pub args: Vec<Expr>,
}

/// Integer or bool literal; `value` is the literal text as written.
#[derive(Debug, Clone, PartialEq)]
pub struct BasicLitExpr {
    pub kind: TokenKind,
    pub value: String,
    pub position: Position,
}
