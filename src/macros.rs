//! Token construction helpers for the lexer's pattern table.

/// Builds a [`crate::lexer::tokens::Token`] from its kind, text and span.
#[macro_export]
macro_rules! MK_TOKEN {
    ($kind:expr, $value:expr, $span:expr) => {
        Token {
            kind: $kind,
            value: $value,
            span: $span,
        }
    };
}

/// Handler for a pattern that always matches the same literal text.
///
/// The pushed token spans exactly `$value`, and the lexer moves past it.
///
/// ```ignore
/// RegexPattern {
///     regex: Regex::new(r"^;").unwrap(),
///     handler: MK_DEFAULT_HANDLER!(TokenKind::Semicolon, ";"),
/// }
/// ```
#[macro_export]
macro_rules! MK_DEFAULT_HANDLER {
    ($kind:expr, $value:literal) => {
        |lexer: &mut Lexer, _regex: &Regex| {
            let width = $value.len();
            let span = lexer.span_of(width);
            lexer.push(MK_TOKEN!($kind, String::from($value), span));
            lexer.advance_n(width);
        }
    };
}
