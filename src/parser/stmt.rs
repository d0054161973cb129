use log::debug;

use crate::{
    ast::{
        ast::Node,
        statements::{CompoundStmt, ReturnStmt},
    },
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::TokenKind,
};

use super::{
    decl::parse_var_decl,
    expr::{parse_expr, parse_spawnable_expr},
    parser::{NestedFunctionPolicy, Parser},
};

/// Parses `{ statements }`.
///
/// Returns `None` without consuming anything when the current token is not
/// `{`. Statement errors are recorded and recovered from inside the block;
/// a missing `}` is reported and the partial block is still returned.
pub fn parse_compound_stmt(parser: &mut Parser) -> Option<CompoundStmt> {
    let open = parser.get_position();
    let (block, closed) = parse_block(parser)?;

    if !closed {
        parser.report(Error::new(ErrorImpl::MissingClosingBrace, open));
    }

    Some(block)
}

/// Like [`parse_compound_stmt`], but leaves an unclosed block to the caller.
///
/// The flag is false when input ran out before the closing `}`.
pub fn parse_block(parser: &mut Parser) -> Option<(CompoundStmt, bool)> {
    if !parser.at(TokenKind::OpenCurly) {
        return None;
    }

    debug!("Entering compound statement");

    parser.advance();

    let mut statements = Vec::new();

    while !parser.at(TokenKind::CloseCurly) && !parser.at(TokenKind::EOF) {
        let start = parser.consumed();

        let result = match parser.current_token_kind() {
            TokenKind::Var => parse_var_decl(parser).map(|decl| Some(Node::VarDecl(decl))),
            TokenKind::Identifier | TokenKind::Spawn => parse_expr_stmt(parser).map(Some),
            TokenKind::Return => parse_return_stmt(parser).map(|stmt| Some(Node::ReturnStmt(stmt))),
            TokenKind::Fn => {
                let error = skip_nested_function(parser);
                parser.report(error);
                Ok(Some(Node::Error))
            }
            TokenKind::Semicolon => {
                parser.advance();
                Ok(None)
            }
            _ => {
                let error = parser.error_expected("a statement");
                parser.report(error);
                parser.synchronize_statement();
                Ok(None)
            }
        };

        match result {
            Ok(Some(node)) => statements.push(node),
            Ok(None) => {}
            Err(error) => {
                parser.report(error);
                statements.push(Node::Error);
                parser.synchronize_statement();
            }
        }

        if parser.consumed() == start {
            parser.advance();
        }
    }

    let closed = parser.at(TokenKind::CloseCurly);
    if closed {
        parser.advance();
    }

    Some((CompoundStmt::new(statements), closed))
}

/// An expression followed by `;`. The expression itself is the statement node.
pub fn parse_expr_stmt(parser: &mut Parser) -> Result<Node, Error> {
    let expr = parse_spawnable_expr(parser)?;
    parser.expect_error(TokenKind::Semicolon, "`;` after expression")?;

    Ok(expr)
}

/// `return;` or `return EXPR;`
pub fn parse_return_stmt(parser: &mut Parser) -> Result<ReturnStmt, Error> {
    let position = parser.get_position();
    parser.advance();

    let value = if parser.at(TokenKind::Semicolon) {
        None
    } else {
        Some(parse_expr(parser)?)
    };

    parser.expect_error(TokenKind::Semicolon, "`;` after return statement")?;

    ReturnStmt::new(value, position.clone()).map_err(|error| Error::new(error, position))
}

/// Skips a function declaration found inside a block and returns the
/// diagnostic for it. How much is skipped depends on the parser options.
fn skip_nested_function(parser: &mut Parser) -> Error {
    let position = parser.get_position();
    parser.advance();

    let function = if parser.at(TokenKind::Identifier) {
        parser.current_value()
    } else {
        String::from("<anonymous>")
    };

    debug!("Skipping nested function {}", function);

    match parser.options().nested_functions {
        NestedFunctionPolicy::SkipDeclaration => skip_declaration(parser),
        NestedFunctionPolicy::DiscardBlock => skip_to_block_end(parser),
    }

    Error::new(ErrorImpl::UnsupportedNestedDeclaration { function }, position)
}

/// Skips a declaration header and its brace-balanced body.
fn skip_declaration(parser: &mut Parser) {
    loop {
        match parser.current_token_kind() {
            TokenKind::OpenCurly => break,
            TokenKind::CloseCurly | TokenKind::EOF => return,
            TokenKind::Semicolon => {
                parser.advance();
                return;
            }
            _ => {
                parser.advance();
            }
        }
    }

    let mut depth = 0usize;

    loop {
        match parser.current_token_kind() {
            TokenKind::OpenCurly => depth += 1,
            TokenKind::CloseCurly => {
                depth -= 1;
                if depth == 0 {
                    parser.advance();
                    return;
                }
            }
            TokenKind::EOF => return,
            _ => {}
        }

        parser.advance();
    }
}

/// Skips up to, but not including, the `}` closing the enclosing block.
fn skip_to_block_end(parser: &mut Parser) {
    let mut depth = 0usize;

    loop {
        match parser.current_token_kind() {
            TokenKind::OpenCurly => depth += 1,
            TokenKind::CloseCurly => {
                if depth == 0 {
                    return;
                }
                depth -= 1;
            }
            TokenKind::EOF => return,
            _ => {}
        }

        parser.advance();
    }
}
