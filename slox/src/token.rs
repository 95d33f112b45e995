use crate::token_type::TokenTy;

/// A classified, positioned slice of the source text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'a> {
    pub ty: TokenTy,
    /// `None` only for an `Eof` emitted with nothing pending.
    pub lexeme: Option<&'a str>,
    pub literal: Option<&'a str>,
    pub line: usize,
}

impl<'a> Token<'a> {
    pub fn new(ty: TokenTy, lexeme: Option<&'a str>, literal: Option<&'a str>, line: usize) -> Self {
        Token {
            ty,
            lexeme,
            literal,
            line,
        }
    }

    pub fn eof(line: usize) -> Self {
        Token::new(TokenTy::Eof, None, None, line)
    }
}

impl std::fmt::Display for Token<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{:?} {} {}",
            self.ty,
            self.lexeme.unwrap_or("nil"),
            self.literal.unwrap_or("nil")
        )
    }
}
