use std::io::{self, Write};

use crate::{token::Token, token_type::TokenTy};

/// Sink for lexical and syntax errors.
///
/// Reporting never halts scanning or parsing; the driver consults
/// [`Reporter::had_error`] to decide whether a run failed, and is the only
/// party that resets the state between independent runs.
pub trait Reporter {
    fn report(&mut self, line: usize, location: &str, message: &str);

    fn error_count(&self) -> usize;

    fn had_error(&self) -> bool {
        self.error_count() > 0
    }

    fn error(&mut self, line: usize, message: &str) {
        self.report(line, "", message);
    }

    fn error_at(&mut self, token: &Token<'_>, message: &str) {
        self.report(token.line, &location(token), message);
    }
}

/// Renders where in the input a syntax error was found.
pub fn location(token: &Token<'_>) -> String {
    if token.ty == TokenTy::Eof {
        " at end".to_string()
    } else {
        format!(" at '{}'", token.lexeme.unwrap_or_default())
    }
}

pub fn format_diagnostic(line: usize, location: &str, message: &str) -> String {
    format!("[line {line}] Error{location}: {message}")
}

/// Writes each diagnostic as a line to `out` and counts them.
pub struct ErrorReporter<W> {
    out: W,
    errors: usize,
}

impl ErrorReporter<io::Stderr> {
    pub fn stderr() -> Self {
        Self::new(io::stderr())
    }
}

impl<W: Write> ErrorReporter<W> {
    pub fn new(out: W) -> Self {
        Self { out, errors: 0 }
    }

    pub fn reset(&mut self) {
        self.errors = 0;
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Reporter for ErrorReporter<W> {
    fn report(&mut self, line: usize, location: &str, message: &str) {
        log::debug!("reporting error on line {line}: {message}");
        let text = format_diagnostic(line, location, message);
        if let Err(err) = writeln!(self.out, "{text}") {
            log::warn!("could not emit diagnostic `{text}`: {err}");
        }
        self.errors += 1;
    }

    fn error_count(&self) -> usize {
        self.errors
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn output(reporter: ErrorReporter<Vec<u8>>) -> String {
        String::from_utf8(reporter.into_inner()).unwrap()
    }

    #[test]
    fn line_form_has_empty_location() {
        let mut reporter = ErrorReporter::new(Vec::new());
        assert!(!reporter.had_error());
        reporter.error(4, "Unexpected character.");
        assert!(reporter.had_error());
        assert_eq!(output(reporter), "[line 4] Error: Unexpected character.\n");
    }

    #[test]
    fn token_form_names_lexeme_or_end() {
        let mut reporter = ErrorReporter::new(Vec::new());
        let semicolon = Token::new(TokenTy::Semicolon, Some(";"), None, 2);
        reporter.error_at(&semicolon, "Expect expression.");
        reporter.error_at(&Token::eof(3), "Expect ')' after expression.");
        assert_eq!(reporter.error_count(), 2);
        assert_eq!(
            output(reporter),
            "[line 2] Error at ';': Expect expression.\n\
             [line 3] Error at end: Expect ')' after expression.\n"
        );
    }

    #[test]
    fn reset_is_explicit() {
        let mut reporter = ErrorReporter::new(io::sink());
        reporter.error(1, "Unterminated string.");
        reporter.error(1, "Unterminated string.");
        assert_eq!(reporter.error_count(), 2);
        reporter.reset();
        assert!(!reporter.had_error());
    }
}
