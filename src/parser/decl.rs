use tracing::instrument;

use crate::{
    ast::declarations::{Decl, FuncDecl, Param, VarDecl},
    errors::errors::Error,
    lexer::tokens::TokenKind,
};

use super::{expr::parse_expr, lookups::BindingPower, parser::Parser, stmt::parse_block};

#[instrument(level = "trace", name = "Decl", skip_all)]
pub fn parse_decl(parser: &mut Parser<'_>) -> Result<Decl, Error> {
    match parser.get_decl_handler(parser.current_token_kind()) {
        Some(handler) => handler(parser),
        None => Err(parser.unexpected("expected declaration")),
    }
}

/// `let [mut] name: type = expr;`
#[instrument(level = "trace", name = "VarDecl", skip_all)]
pub fn parse_var_decl(parser: &mut Parser<'_>) -> Result<Decl, Error> {
    parser.expect(TokenKind::Let)?;

    let mutable = if parser.current_token_kind() == TokenKind::Mut {
        parser.advance()?;
        true
    } else {
        false
    };

    let name = parser.parse_ident()?;
    parser.expect(TokenKind::Colon)?;
    let ty = parser.parse_type_name()?;

    parser.expect(TokenKind::Assign)?;
    let value = parse_expr(parser, BindingPower::Default.strength())?;
    parser.expect(TokenKind::Semicolon)?;

    Ok(Decl::Var(VarDecl {
        name,
        mutable,
        ty,
        value,
    }))
}

/// `fn name(a: t, b: t) [-> t] { ... }`
#[instrument(level = "trace", name = "FuncDecl", skip_all)]
pub fn parse_func_decl(parser: &mut Parser<'_>) -> Result<Decl, Error> {
    parser.expect(TokenKind::Fn)?;
    let name = parser.parse_ident()?;

    parser.expect(TokenKind::LParen)?;

    let mut params = Vec::new();
    if parser.current_token_kind() != TokenKind::RParen {
        loop {
            let param_name = parser.parse_ident()?;
            parser.expect(TokenKind::Colon)?;
            let ty = parser.parse_type_name()?;
            params.push(Param {
                name: param_name,
                ty,
            });

            if parser.current_token_kind() != TokenKind::Comma {
                break;
            }
            parser.advance()?;
        }
    }

    parser.expect(TokenKind::RParen)?;

    let return_type = if parser.current_token_kind() == TokenKind::Arrow {
        parser.advance()?;
        Some(parser.parse_type_name()?)
    } else {
        None
    };

    let body = parse_block(parser)?;

    Ok(Decl::Func(FuncDecl {
        name,
        params,
        return_type,
        body,
    }))
}
