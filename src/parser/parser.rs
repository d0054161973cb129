//! Parser state and the program-level entry points.
//!
//! The parser owns the token stream and the single lookahead token. Every
//! production receives `&mut Parser`, so there is no ambient state shared
//! between productions beyond what is threaded through here.

use log::{debug, info};

use crate::{
    ast::{
        declarations::{Decl, Program},
        types::DeclaredType,
    },
    errors::errors::{Error, ErrorImpl},
    lexer::{
        stream::{TokenCursor, TokenStream},
        tokens::TokenKind,
    },
    Position,
};

use super::decl::{parse_function_decl, parse_var_decl};

/// What to do with a function declaration found inside a block.
///
/// Both policies report `UnsupportedNestedDeclaration` and leave an error
/// node where the declaration was.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NestedFunctionPolicy {
    /// Skip only the nested declaration; the rest of the block is parsed.
    #[default]
    SkipDeclaration,
    /// Discard everything up to the enclosing block's closing brace.
    DiscardBlock,
}

#[derive(Debug, Clone, Default)]
pub struct ParserOptions {
    pub nested_functions: NestedFunctionPolicy,
}

/// The main parser structure that maintains parsing state.
pub struct Parser {
    /// Source of tokens, consumed strictly one at a time
    lexer: Box<dyn TokenStream>,
    /// Kind of the current lookahead token
    current: TokenKind,
    options: ParserOptions,
    /// Diagnostics recorded by recovering productions
    errors: Vec<Error>,
    /// Number of tokens pulled so far
    consumed: usize,
}

impl Parser {
    /// Creates a parser. No token is read until the first [`Parser::advance`].
    pub fn new(lexer: Box<dyn TokenStream>, options: ParserOptions) -> Self {
        Parser {
            lexer,
            current: TokenKind::EOF,
            options,
            errors: Vec::new(),
            consumed: 0,
        }
    }

    /// Returns the kind of the current token.
    pub fn current_token_kind(&self) -> TokenKind {
        self.current
    }

    /// Returns the literal text of the current token.
    pub fn current_value(&self) -> String {
        self.lexer.current_str().to_string()
    }

    /// Returns the declared type the lexer associates with the current token.
    pub fn current_type(&self) -> Option<DeclaredType> {
        self.lexer.current_type()
    }

    /// Returns the source position of the current token.
    pub fn get_position(&self) -> Position {
        self.lexer.current_location()
    }

    /// Pulls the next token and returns its kind.
    pub fn advance(&mut self) -> TokenKind {
        self.current = self.lexer.next_token();
        self.consumed += 1;
        self.current
    }

    pub fn at(&self, kind: TokenKind) -> bool {
        self.current == kind
    }

    /// Number of tokens pulled so far. Used to guarantee loop progress.
    pub fn consumed(&self) -> usize {
        self.consumed
    }

    pub fn options(&self) -> &ParserOptions {
        &self.options
    }

    /// Builds an "expected ..." error for the current token.
    pub fn error_expected(&self, expected: &str) -> Error {
        let internal = if self.current == TokenKind::EOF {
            ErrorImpl::UnexpectedEndOfInput {
                expected: expected.to_string(),
            }
        } else {
            ErrorImpl::UnexpectedTokenDetailed {
                token: self.current_value(),
                message: format!("expected {}", expected),
            }
        };

        Error::new(internal, self.get_position())
    }

    /// Consumes a token of the given kind and returns its text, or fails
    /// with a description of what was expected.
    pub fn expect_error(&mut self, expected_kind: TokenKind, expected: &str) -> Result<String, Error> {
        if self.current != expected_kind {
            return Err(self.error_expected(expected));
        }

        let value = self.current_value();
        self.advance();
        Ok(value)
    }

    /// Records a diagnostic and carries on.
    pub fn report(&mut self, error: Error) {
        debug!("{}: {}", error.get_error_name(), error);
        self.errors.push(error);
    }

    pub fn errors(&self) -> &[Error] {
        &self.errors
    }

    pub fn into_errors(self) -> Vec<Error> {
        self.errors
    }

    /// Skips tokens until the start of the next declaration or end of input.
    pub fn synchronize_declaration(&mut self) {
        while !self.current.starts_declaration() && self.current != TokenKind::EOF {
            self.advance();
        }

        debug!("Resuming at {}", self.current);
    }

    /// Skips to just past the next `;`, stopping early at a block end,
    /// end of input, or a statement-introducing keyword.
    pub fn synchronize_statement(&mut self) {
        while !matches!(self.current, TokenKind::CloseCurly | TokenKind::EOF) {
            if self.current == TokenKind::Semicolon {
                self.advance();
                return;
            }

            if self.current.starts_statement() {
                return;
            }

            self.advance();
        }
    }
}

/// Parses a whole program.
///
/// Never fails: a malformed declaration becomes an error node, its
/// diagnostic is recorded, and parsing resumes at the next `var` or `fn`.
pub fn parse_program(parser: &mut Parser) -> Program {
    parser.advance();

    let mut decls = Vec::new();

    while !parser.at(TokenKind::EOF) {
        let start = parser.consumed();

        let result = match parser.current_token_kind() {
            TokenKind::Var => parse_var_decl(parser).map(Decl::Var),
            TokenKind::Fn => parse_function_decl(parser).map(Decl::Fun),
            _ => Err(parser.error_expected("a `var` or `fn` declaration")),
        };

        match result {
            Ok(decl) => decls.push(decl),
            Err(error) => {
                parser.report(error);
                decls.push(Decl::Error);
            }
        }

        if parser.consumed() == start {
            parser.advance();
        }

        parser.synchronize_declaration();
    }

    Program::new(decls)
}

/// Parses everything the stream yields.
///
/// Returns the program together with every diagnostic recorded on the way.
pub fn parse<S: TokenStream + 'static>(stream: S, options: ParserOptions) -> (Program, Vec<Error>) {
    info!("Beginning parse phase");

    let mut parser = Parser::new(Box::new(stream), options);
    let program = parse_program(&mut parser);

    info!(
        "Parsed {} declarations with {} diagnostics",
        program.decls().len(),
        parser.errors().len()
    );

    (program, parser.into_errors())
}

/// Tokenizes and parses `source` with default options.
///
/// Only a tokenizer failure is returned as `Err`; grammar errors come back
/// alongside the best-effort program.
pub fn parse_source(source: &str, file: Option<String>) -> Result<(Program, Vec<Error>), Error> {
    parse_source_with(source, file, ParserOptions::default())
}

pub fn parse_source_with(
    source: &str,
    file: Option<String>,
    options: ParserOptions,
) -> Result<(Program, Vec<Error>), Error> {
    let cursor = TokenCursor::from_source(source, file)?;
    Ok(parse(cursor, options))
}
