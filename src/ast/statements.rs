use std::slice::Iter;

use super::{declarations::Decl, expressions::Expr};

#[derive(Debug, Clone, PartialEq)]
pub enum Stmt {
    Block(BlockStmt),
    Return(ReturnStmt),
    Expr(ExprStmt),
    Decl(DeclStmt),
    If(IfStmt),
    Loop(LoopStmt),
    Break(BreakStmt),
    Continue(ContinueStmt),
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct BlockStmt {
    pub list: Vec<Stmt>,
}

impl BlockStmt {
    pub fn iter(&self) -> Iter<'_, Stmt> {
        self.list.iter()
    }

    pub fn len(&self) -> usize {
        self.list.len()
    }

    pub fn is_empty(&self) -> bool {
        self.list.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ReturnStmt {
    pub result: Expr,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ExprStmt {
    pub expr: Expr,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DeclStmt {
    pub decl: Decl,
}

#[derive(Debug, Clone, PartialEq)]
pub struct IfStmt {
    pub cond: Expr,
    pub then: Box<Stmt>,
    pub otherwise: Option<Box<Stmt>>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct LoopStmt {
    pub cond: Expr,
    pub body: BlockStmt,
    pub label: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct BreakStmt {
    pub label: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ContinueStmt {
    pub label: Option<String>,
}
