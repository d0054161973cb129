use log::debug;

use crate::{
    ast::{
        declarations::{FunDecl, VarDecl, VarParamDecl},
        types::DeclaredType,
    },
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::TokenKind,
};

use super::{expr::parse_spawnable_expr, parser::Parser, stmt::parse_block};

/// `var NAME : TYPE (= EXPR)? ;`
///
/// The declared type comes from the lexer and is checked before anything
/// after `var` is read, so a `void` variable fails straight away.
pub fn parse_var_decl(parser: &mut Parser) -> Result<VarDecl, Error> {
    debug!("Entering variable declaration");

    let declared = parser.current_type();
    let position = parser.get_position();
    parser.advance();

    if declared == Some(DeclaredType::Void) {
        return Err(Error::new(ErrorImpl::VoidVariableType, position));
    }

    let name = parser.expect_error(
        TokenKind::Identifier,
        "identifier during variable declaration",
    )?;

    let var_type = parse_type_annotation(parser, &name, declared)?;

    let initializer = if parser.at(TokenKind::Assignment) {
        parser.advance();
        Some(parse_spawnable_expr(parser)?)
    } else {
        None
    };

    parser.expect_error(TokenKind::Semicolon, "`;` after variable declaration")?;

    VarDecl::new(name, var_type, initializer, position.clone())
        .map_err(|error| Error::new(error, position))
}

/// Consumes `: TYPE`. `declared` is what the lexer resolved for the
/// declaration; a type token always resolves to itself.
fn parse_type_annotation(
    parser: &mut Parser,
    name: &str,
    declared: Option<DeclaredType>,
) -> Result<DeclaredType, Error> {
    let missing = || ErrorImpl::MissingTypeAnnotation {
        name: name.to_string(),
    };

    if !parser.at(TokenKind::Colon) {
        return Err(Error::new(missing(), parser.get_position()));
    }

    parser.advance();

    let position = parser.get_position();
    let annotated = parser.current_type();
    parser.expect_error(TokenKind::Type, "a type name")?;

    declared
        .or(annotated)
        .ok_or_else(|| Error::new(missing(), position))
}

/// `( NAME : TYPE, ... )`. Each parameter becomes a [`VarDecl`] without an
/// initializer.
pub fn parse_var_param_decl(parser: &mut Parser) -> Result<VarParamDecl, Error> {
    parser.expect_error(TokenKind::OpenParen, "`(` to open parameter list")?;

    let mut params = Vec::new();

    if parser.at(TokenKind::CloseParen) {
        parser.advance();
        return Ok(VarParamDecl::new(params));
    }

    loop {
        params.push(parse_param(parser)?);

        match parser.current_token_kind() {
            TokenKind::Comma => {
                parser.advance();
            }
            TokenKind::CloseParen => {
                parser.advance();
                break;
            }
            _ => return Err(parser.error_expected("`,` or `)` in parameter list")),
        }
    }

    Ok(VarParamDecl::new(params))
}

fn parse_param(parser: &mut Parser) -> Result<VarDecl, Error> {
    let position = parser.get_position();
    let name = parser.expect_error(TokenKind::Identifier, "a parameter name")?;
    let param_type = parse_type_annotation(parser, &name, None)?;

    VarDecl::new(name, param_type, None, position.clone())
        .map_err(|error| Error::new(error, position))
}

/// `fn NAME ( PARAMS ) (: TYPE)? { BODY }`
///
/// The return type comes from the lexer and defaults to `void`.
pub fn parse_function_decl(parser: &mut Parser) -> Result<FunDecl, Error> {
    debug!("Entering function declaration");

    let return_type = parser.current_type().unwrap_or(DeclaredType::Void);
    let position = parser.get_position();
    parser.advance();

    let name = parser.expect_error(TokenKind::Identifier, "a function name")?;
    let params = parse_var_param_decl(parser)?;

    if parser.at(TokenKind::Colon) {
        parser.advance();
        parser.expect_error(TokenKind::Type, "a return type")?;
    }

    let body = match parse_block(parser) {
        Some((body, true)) => body,
        Some((_, false)) => return Err(parser.error_expected("`}` to close function body")),
        None => return Err(parser.error_expected("`{` to open function body")),
    };

    Ok(FunDecl::new(name, return_type, params, body, position))
}
