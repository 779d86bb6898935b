use std::collections::HashMap;

use crate::{
    ast::{declarations::Decl, expressions::Expr, statements::Stmt},
    errors::errors::Error,
    lexer::tokens::TokenKind,
};

use super::{decl::*, expr::*, parser::Parser, stmt::*};

/// Binding strength of each binary operator class.
///
/// Higher binds tighter. `Default` is the floor an expression starts from.
#[derive(PartialEq, PartialOrd, Clone, Copy, Debug)]
pub enum BindingPower {
    Default = 0,
    Assignment = 1,
    LogicalOr = 5,
    LogicalAnd = 10,
    Equality = 30,
    Relational = 35,
    Additive = 45,
    Multiplicative = 50,
}

impl BindingPower {
    pub fn strength(self) -> i32 {
        self as i32
    }
}

pub type DeclHandler = fn(&mut Parser<'_>) -> Result<Decl, Error>;
pub type StmtHandler = fn(&mut Parser<'_>) -> Result<Stmt, Error>;
pub type NUDHandler = fn(&mut Parser<'_>) -> Result<Expr, Error>;
pub type LEDHandler = fn(&mut Parser<'_>, Expr, BindingPower) -> Result<Expr, Error>;

pub fn create_token_lookups(parser: &mut Parser<'_>) {
    parser.led(TokenKind::Assign, BindingPower::Assignment, parse_assignment_expr);

    // Logical
    parser.led(TokenKind::LOr, BindingPower::LogicalOr, parse_binary_expr);
    parser.led(TokenKind::LAnd, BindingPower::LogicalAnd, parse_binary_expr);

    // Equality and relational
    parser.led(TokenKind::Eql, BindingPower::Equality, parse_binary_expr);
    parser.led(TokenKind::Neq, BindingPower::Equality, parse_binary_expr);
    parser.led(TokenKind::Lss, BindingPower::Relational, parse_binary_expr);
    parser.led(TokenKind::Leq, BindingPower::Relational, parse_binary_expr);
    parser.led(TokenKind::Gtr, BindingPower::Relational, parse_binary_expr);
    parser.led(TokenKind::Geq, BindingPower::Relational, parse_binary_expr);

    // Additive and multiplicative
    parser.led(TokenKind::Add, BindingPower::Additive, parse_binary_expr);
    parser.led(TokenKind::Sub, BindingPower::Additive, parse_binary_expr);
    parser.led(TokenKind::Mul, BindingPower::Multiplicative, parse_binary_expr);
    parser.led(TokenKind::Quo, BindingPower::Multiplicative, parse_binary_expr);
    parser.led(TokenKind::Rem, BindingPower::Multiplicative, parse_binary_expr);

    // Factors
    parser.nud(TokenKind::Int, parse_basic_lit_expr);
    parser.nud(TokenKind::Bool, parse_basic_lit_expr);
    parser.nud(TokenKind::Ident, parse_ident_expr);
    parser.nud(TokenKind::LParen, parse_grouping_expr);
    parser.nud(TokenKind::Sub, parse_unary_expr);
    parser.nud(TokenKind::Tilde, parse_unary_expr);
    parser.nud(TokenKind::Not, parse_unary_expr);

    // Statements
    parser.stmt(TokenKind::LBrace, parse_block_stmt);
    parser.stmt(TokenKind::Return, parse_return_stmt);
    parser.stmt(TokenKind::Let, parse_decl_stmt);
    parser.stmt(TokenKind::If, parse_if_stmt);
    parser.stmt(TokenKind::Loop, parse_loop_stmt);
    parser.stmt(TokenKind::Break, parse_break_stmt);
    parser.stmt(TokenKind::Continue, parse_continue_stmt);

    // Declarations
    parser.decl(TokenKind::Fn, parse_func_decl);
    parser.decl(TokenKind::Let, parse_var_decl);
}

// Lookup tables inside parser struct, so it's easier
pub type DeclLookup = HashMap<TokenKind, DeclHandler>;
pub type StmtLookup = HashMap<TokenKind, StmtHandler>;
pub type NUDLookup = HashMap<TokenKind, NUDHandler>;
pub type LEDLookup = HashMap<TokenKind, LEDHandler>;
pub type BPLookup = HashMap<TokenKind, BindingPower>;
