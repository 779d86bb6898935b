use tracing::instrument;

use crate::{
    ast::ast::Ident,
    ast::expressions::{AssignExpr, BasicLitExpr, BinaryExpr, CallExpr, Expr, UnaryExpr, VarExpr},
    errors::errors::Error,
    lexer::tokens::TokenKind,
};

use super::{lookups::BindingPower, parser::Parser};

/// Precedence climbing over factors and binary operators.
///
/// Keeps folding operators into `left` while the current token binds
/// strictly tighter than `min_strength`.
#[instrument(level = "trace", name = "Expr", skip(parser))]
pub fn parse_expr(parser: &mut Parser<'_>, min_strength: i32) -> Result<Expr, Error> {
    parser.enter_nesting()?;
    let expr = parse_expr_climbing(parser, min_strength);
    parser.leave_nesting();
    expr
}

fn parse_expr_climbing(parser: &mut Parser<'_>, min_strength: i32) -> Result<Expr, Error> {
    let Some(nud) = parser.get_nud_handler(parser.current_token_kind()) else {
        return Err(parser.unexpected("expected expression"));
    };

    let mut left = nud(parser)?;

    loop {
        let kind = parser.current_token_kind();
        let (Some(bp), Some(led)) = (parser.get_binding_power(kind), parser.get_led_handler(kind))
        else {
            break;
        };

        if bp.strength() <= min_strength {
            break;
        }

        left = led(parser, left, bp)?;
    }

    Ok(left)
}

#[instrument(level = "trace", name = "BasicLit", skip_all)]
pub fn parse_basic_lit_expr(parser: &mut Parser<'_>) -> Result<Expr, Error> {
    let token = parser.advance()?;

    Ok(Expr::BasicLit(BasicLitExpr {
        kind: token.kind,
        value: token.literal,
        position: token.position,
    }))
}

/// An identifier is a call when directly followed by `(`, else a variable.
#[instrument(level = "trace", name = "Ident", skip_all)]
pub fn parse_ident_expr(parser: &mut Parser<'_>) -> Result<Expr, Error> {
    let name = parser.parse_ident()?;

    if parser.current_token_kind() == TokenKind::LParen {
        return parse_call_expr(parser, name);
    }

    Ok(Expr::Var(VarExpr { name }))
}

#[instrument(level = "trace", name = "Unary", skip_all)]
pub fn parse_unary_expr(parser: &mut Parser<'_>) -> Result<Expr, Error> {
    let operator = parser.advance()?;
    let operand = parse_expr(parser, BindingPower::Default.strength())?;

    Ok(Expr::Unary(UnaryExpr {
        op: operator.kind,
        operand: Box::new(operand),
        position: operator.position,
    }))
}

#[instrument(level = "trace", name = "Grouping", skip_all)]
pub fn parse_grouping_expr(parser: &mut Parser<'_>) -> Result<Expr, Error> {
    parser.expect(TokenKind::LParen)?;
    let expr = parse_expr(parser, BindingPower::Default.strength())?;
    parser.expect(TokenKind::RParen)?;

    Ok(expr)
}

/// Left-associative: the right operand must bind tighter than `bp`.
#[instrument(level = "trace", name = "BinaryExpr", skip_all)]
pub fn parse_binary_expr(
    parser: &mut Parser<'_>,
    left: Expr,
    bp: BindingPower,
) -> Result<Expr, Error> {
    let operator = parser.advance()?;
    let right = parse_expr(parser, bp.strength() + 1)?;

    Ok(Expr::Binary(BinaryExpr {
        op: operator.kind,
        left: Box::new(left),
        right: Box::new(right),
    }))
}

/// Right-associative: the value may itself be another assignment.
#[instrument(level = "trace", name = "AssignExpr", skip_all)]
pub fn parse_assignment_expr(
    parser: &mut Parser<'_>,
    left: Expr,
    bp: BindingPower,
) -> Result<Expr, Error> {
    parser.expect(TokenKind::Assign)?;
    let value = parse_expr(parser, bp.strength() - 1)?;

    Ok(Expr::Assign(AssignExpr {
        target: Box::new(left),
        value: Box::new(value),
    }))
}

#[instrument(level = "trace", name = "CallExpr", skip_all)]
fn parse_call_expr(parser: &mut Parser<'_>, callee: Ident) -> Result<Expr, Error> {
    parser.expect(TokenKind::LParen)?;

    let mut args = vec![];
    if parser.current_token_kind() != TokenKind::RParen {
        loop {
            args.push(parse_expr(parser, BindingPower::Default.strength())?);

            if parser.current_token_kind() != TokenKind::Comma {
                break;
            }
            parser.advance()?;
        }
    }

    parser.expect(TokenKind::RParen)?;

    Ok(Expr::Call(CallExpr { callee, args }))
}
