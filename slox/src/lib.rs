//! Front end for a small expression language: a scanner that turns source
//! text into tokens and a recursive descent parser that turns tokens into an
//! expression tree. Errors from both stages flow through a [`Reporter`].

pub mod ast_printer;
pub mod config;
pub mod diagnostics;
pub mod error;
pub mod expr;
pub mod parser;
pub mod scanner;
pub mod token;
pub mod token_type;

pub use diagnostics::{ErrorReporter, Reporter};
pub use error::{LoxError, ParseError};
pub use expr::Expr;
pub use parser::Parser;
pub use scanner::Scanner;
pub use token::Token;
pub use token_type::TokenTy;

/// Scans and parses `source`.
///
/// Fails if the reporter has recorded any error, so a tree built from a
/// token stream with lexical errors is never handed out.
pub fn parse_source<'a, R: Reporter + ?Sized>(
    source: &'a str,
    reporter: &mut R,
) -> error::Result<Expr<'a>> {
    let tokens = Scanner::new(source, &mut *reporter).scan_tokens();
    parse_tokens(tokens, reporter)
}

pub fn parse_tokens<'a, R: Reporter + ?Sized>(
    tokens: Vec<Token<'a>>,
    reporter: &mut R,
) -> error::Result<Expr<'a>> {
    let expr = Parser::new(tokens, &mut *reporter).parse()?;
    if reporter.had_error() {
        return Err(LoxError::Source {
            errors: reporter.error_count(),
        });
    }
    Ok(expr)
}
