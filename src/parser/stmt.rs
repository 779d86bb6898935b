use tracing::instrument;

use crate::{
    ast::statements::{
        BlockStmt, BreakStmt, ContinueStmt, DeclStmt, ExprStmt, IfStmt, LoopStmt, ReturnStmt,
        Stmt,
    },
    errors::errors::Error,
    lexer::tokens::TokenKind,
    parser::{decl::parse_decl, expr::parse_expr, lookups::BindingPower},
};

use super::parser::Parser;

#[instrument(level = "trace", name = "Stmt", skip_all)]
pub fn parse_stmt(parser: &mut Parser<'_>) -> Result<Stmt, Error> {
    parser.enter_nesting()?;
    let stmt = parse_stmt_dispatch(parser);
    parser.leave_nesting();
    stmt
}

fn parse_stmt_dispatch(parser: &mut Parser<'_>) -> Result<Stmt, Error> {
    if let Some(handler) = parser.get_stmt_handler(parser.current_token_kind()) {
        return handler(parser);
    }

    let expr = parse_expr(parser, BindingPower::Default.strength())?;
    parser.expect(TokenKind::Semicolon)?;

    Ok(Stmt::Expr(ExprStmt { expr }))
}

pub fn parse_block_stmt(parser: &mut Parser<'_>) -> Result<Stmt, Error> {
    Ok(Stmt::Block(parse_block(parser)?))
}

/// `{ stmt* }`, shared by block statements, function bodies and loops.
#[instrument(level = "trace", name = "BlockStmt", skip_all)]
pub fn parse_block(parser: &mut Parser<'_>) -> Result<BlockStmt, Error> {
    parser.expect(TokenKind::LBrace)?;

    let mut list = Vec::new();
    while parser.current_token_kind() != TokenKind::RBrace && parser.has_tokens() {
        list.push(parse_stmt(parser)?);
    }

    parser.expect(TokenKind::RBrace)?;

    Ok(BlockStmt { list })
}

#[instrument(level = "trace", name = "ReturnStmt", skip_all)]
pub fn parse_return_stmt(parser: &mut Parser<'_>) -> Result<Stmt, Error> {
    parser.expect(TokenKind::Return)?;
    let result = parse_expr(parser, BindingPower::Default.strength())?;
    parser.expect(TokenKind::Semicolon)?;

    Ok(Stmt::Return(ReturnStmt { result }))
}

#[instrument(level = "trace", name = "DeclStmt", skip_all)]
pub fn parse_decl_stmt(parser: &mut Parser<'_>) -> Result<Stmt, Error> {
    Ok(Stmt::Decl(DeclStmt {
        decl: parse_decl(parser)?,
    }))
}

#[instrument(level = "trace", name = "IfStmt", skip_all)]
pub fn parse_if_stmt(parser: &mut Parser<'_>) -> Result<Stmt, Error> {
    parser.expect(TokenKind::If)?;
    parser.expect(TokenKind::LParen)?;
    let cond = parse_expr(parser, BindingPower::Default.strength())?;
    parser.expect(TokenKind::RParen)?;

    let then = parse_stmt(parser)?;

    let otherwise = if parser.current_token_kind() == TokenKind::Else {
        parser.advance()?;
        Some(Box::new(parse_stmt(parser)?))
    } else {
        None
    };

    Ok(Stmt::If(IfStmt {
        cond,
        then: Box::new(then),
        otherwise,
    }))
}

/// `loop [label] (cond) { ... }`
#[instrument(level = "trace", name = "LoopStmt", skip_all)]
pub fn parse_loop_stmt(parser: &mut Parser<'_>) -> Result<Stmt, Error> {
    parser.expect(TokenKind::Loop)?;
    let label = parser.parse_optional_label()?;

    parser.expect(TokenKind::LParen)?;
    let cond = parse_expr(parser, BindingPower::Default.strength())?;
    parser.expect(TokenKind::RParen)?;

    let body = parse_block(parser)?;

    Ok(Stmt::Loop(LoopStmt { cond, body, label }))
}

#[instrument(level = "trace", name = "BreakStmt", skip_all)]
pub fn parse_break_stmt(parser: &mut Parser<'_>) -> Result<Stmt, Error> {
    parser.expect(TokenKind::Break)?;
    let label = parser.parse_optional_label()?;
    parser.expect(TokenKind::Semicolon)?;

    Ok(Stmt::Break(BreakStmt { label }))
}

#[instrument(level = "trace", name = "ContinueStmt", skip_all)]
pub fn parse_continue_stmt(parser: &mut Parser<'_>) -> Result<Stmt, Error> {
    parser.expect(TokenKind::Continue)?;
    let label = parser.parse_optional_label()?;
    parser.expect(TokenKind::Semicolon)?;

    Ok(Stmt::Continue(ContinueStmt { label }))
}
