use log::debug;

use crate::{
    ast::{
        ast::{AstNode, Node, NodeKind},
        expressions::{BinaryExp, CallExp, IdentifierExp, NumExp, SpawnExp, StrExp},
        types::BinaryOp,
    },
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::TokenKind,
};

use super::{
    lookups::{binary_operator, BindingPower},
    parser::Parser,
};

pub fn parse_expr(parser: &mut Parser) -> Result<Node, Error> {
    parse_expr_bp(parser, BindingPower::Default)
}

/// An expression in statement or initializer position. Only here may a
/// spawned call stand in for the whole expression; it never becomes an
/// operand or an argument.
pub fn parse_spawnable_expr(parser: &mut Parser) -> Result<Node, Error> {
    if parser.at(TokenKind::Spawn) {
        return parse_spawn_expr(parser);
    }

    parse_expr(parser)
}

/// Parses a primary expression, then folds in every following binary
/// operator that binds tighter than `bp`.
pub fn parse_expr_bp(parser: &mut Parser, bp: BindingPower) -> Result<Node, Error> {
    let mut left = parse_primary_expr(parser)?;

    while let Some((op, op_bp)) = binary_operator(parser.current_token_kind()) {
        if op_bp <= bp {
            break;
        }

        left = parse_binary_op_expr(parser, op, op_bp, left)?;
    }

    Ok(left)
}

pub fn parse_primary_expr(parser: &mut Parser) -> Result<Node, Error> {
    match parser.current_token_kind() {
        TokenKind::Number => {
            let text = parser.current_value();

            match text.parse::<i32>() {
                Ok(value) => {
                    parser.advance();
                    Ok(Node::NumExp(NumExp::new(value)))
                }
                Err(_) => Err(Error::new(
                    ErrorImpl::NumberParseError { token: text },
                    parser.get_position(),
                )),
            }
        }
        TokenKind::String => {
            let value = parser.current_value();
            parser.advance();
            Ok(Node::StrExp(StrExp::new(value)))
        }
        TokenKind::Identifier => {
            let callee = Node::IdentifierExp(IdentifierExp::new(parser.current_value()));
            parser.advance();

            if parser.at(TokenKind::OpenParen) {
                parse_call_expr(parser, callee, false)
            } else {
                Ok(callee)
            }
        }
        TokenKind::OpenParen => parse_grouping_expr(parser),
        _ => Err(parser.error_expected("an expression")),
    }
}

/// Consumes the operator token and parses the right-hand operand.
///
/// A missing right-hand side fails the whole expression; the left operand
/// is dropped with it.
pub fn parse_binary_op_expr(
    parser: &mut Parser,
    op: BinaryOp,
    bp: BindingPower,
    lhs: Node,
) -> Result<Node, Error> {
    let position = parser.get_position();
    parser.advance();

    let rhs = parse_expr_bp(parser, bp)?;

    BinaryExp::new(op, lhs, rhs)
        .map(Node::BinaryExp)
        .map_err(|error| Error::new(error, position))
}

/// Parses `( args )` after an already parsed callee.
///
/// When `is_spawned` is set the call comes back wrapped in a [`SpawnExp`].
pub fn parse_call_expr(parser: &mut Parser, callee: Node, is_spawned: bool) -> Result<Node, Error> {
    let position = parser.get_position();

    let name = match callee.kind() {
        NodeKind::IdentifierExp => callee.name().unwrap_or_default().to_string(),
        _ => {
            return Err(Error::new(
                ErrorImpl::IncompleteNode {
                    kind: NodeKind::CallExp.to_string(),
                },
                position,
            ))
        }
    };

    parser.expect_error(TokenKind::OpenParen, "`(` to open argument list")?;

    let mut args = Vec::new();

    while !parser.at(TokenKind::CloseParen) {
        args.push(parse_expr(parser)?);

        match parser.current_token_kind() {
            TokenKind::CloseParen => break,
            TokenKind::Comma => {
                parser.advance();
                if parser.at(TokenKind::CloseParen) {
                    return Err(parser.error_expected("an argument after `,`"));
                }
            }
            TokenKind::Semicolon => {
                return Err(parser.error_expected("`)` before `;` to close argument list"))
            }
            _ => return Err(parser.error_expected("`,` or `)` in argument list")),
        }
    }

    parser.advance();

    let call = CallExp::new(name, args).map_err(|error| Error::new(error, position))?;
    debug!("Parsed call to {} (spawned: {})", call.called_fun_name(), is_spawned);

    if is_spawned {
        Ok(Node::SpawnExp(SpawnExp::new(call)))
    } else {
        Ok(Node::CallExp(call))
    }
}

/// `spawn NAME(args)`
pub fn parse_spawn_expr(parser: &mut Parser) -> Result<Node, Error> {
    parser.advance();

    let name = parser.expect_error(TokenKind::Identifier, "a function call after `spawn`")?;

    if !parser.at(TokenKind::OpenParen) {
        return Err(parser.error_expected("`(` after spawned function name"));
    }

    parse_call_expr(parser, Node::IdentifierExp(IdentifierExp::new(name)), true)
}

pub fn parse_grouping_expr(parser: &mut Parser) -> Result<Node, Error> {
    parser.advance();
    let expr = parse_expr(parser)?;
    parser.expect_error(TokenKind::CloseParen, "`)` to close group")?;

    Ok(expr)
}
