use std::str::CharIndices;

use itertools::{Itertools, MultiPeek};

use crate::{diagnostics::Reporter, token::Token, token_type::TokenTy};

static KEYWORDS: phf::Map<&'static str, TokenTy> = phf::phf_map! {
    "and" =>    TokenTy::And,
    "class" =>  TokenTy::Class,
    "else" =>   TokenTy::Else,
    "false" =>  TokenTy::False,
    "for" =>    TokenTy::For,
    "fun" =>    TokenTy::Fun,
    "if" =>     TokenTy::If,
    "nil" =>    TokenTy::Nil,
    "or" =>     TokenTy::Or,
    "print" =>  TokenTy::Print,
    "return" => TokenTy::Return,
    "super" =>  TokenTy::Super,
    "this" =>   TokenTy::This,
    "true" =>   TokenTy::True,
    "var" =>    TokenTy::Var,
    "while" =>  TokenTy::While,
};

/// Turns source text into tokens in a single pass.
///
/// Lexical errors go to the reporter and the offending input is skipped, so
/// [`Scanner::scan_tokens`] always returns a sequence ending in one `Eof`.
pub struct Scanner<'a, 'r, R: Reporter + ?Sized> {
    source: &'a str,
    current: MultiPeek<CharIndices<'a>>,
    start: usize,
    line: usize,
    tokens: Vec<Token<'a>>,
    reporter: &'r mut R,
}

impl<'a, 'r, R: Reporter + ?Sized> Scanner<'a, 'r, R> {
    pub fn new(source: &'a str, reporter: &'r mut R) -> Self {
        Self {
            source,
            current: source.char_indices().multipeek(),
            start: 0,
            line: 1,
            tokens: Vec::new(),
            reporter,
        }
    }

    pub fn scan_tokens(mut self) -> Vec<Token<'a>> {
        while let Some(ch) = self.advance() {
            self.scan_token(ch);
        }
        self.add_token(TokenTy::Eof);
        log::debug!("scanned {} tokens over {} lines", self.tokens.len(), self.line);
        self.tokens
    }

    fn scan_token(&mut self, ch: char) {
        match ch {
            '(' => self.add_token(TokenTy::LeftParen),
            ')' => self.add_token(TokenTy::RightParen),
            '{' => self.add_token(TokenTy::LeftBrace),
            '}' => self.add_token(TokenTy::RightBrace),
            ',' => self.add_token(TokenTy::Comma),
            '.' => self.add_token(TokenTy::Dot),
            '-' => self.add_token(TokenTy::Minus),
            '+' => self.add_token(TokenTy::Plus),
            ';' => self.add_token(TokenTy::Semicolon),
            '*' => self.add_token(TokenTy::Star),
            '!' => {
                let ty = if self.matches('=') {
                    TokenTy::BangEqual
                } else {
                    TokenTy::Bang
                };
                self.add_token(ty);
            }
            '=' => {
                let ty = if self.matches('=') {
                    TokenTy::EqualEqual
                } else {
                    TokenTy::Equal
                };
                self.add_token(ty);
            }
            '<' => {
                let ty = if self.matches('=') {
                    TokenTy::LessEqual
                } else {
                    TokenTy::Less
                };
                self.add_token(ty);
            }
            '>' => {
                let ty = if self.matches('=') {
                    TokenTy::GreaterEqual
                } else {
                    TokenTy::Greater
                };
                self.add_token(ty);
            }
            '/' => {
                if self.matches('/') {
                    self.line_comment();
                } else if self.matches('*') {
                    self.block_comment();
                } else {
                    self.add_token(TokenTy::Slash);
                }
            }
            // skip
            ' ' | '\r' | '\t' => self.discard(),
            '\n' => {
                self.line += 1;
                self.discard();
            }
            '"' => self.string(),
            ch if ch.is_ascii_digit() => self.number(),
            ch if is_alpha(ch) => self.identifier(),
            _ => {
                self.reporter.error(self.line, "Unexpected character.");
                self.discard();
            }
        }
    }

    fn line_comment(&mut self) {
        while !matches!(self.peek(), Some('\n') | None) {
            self.advance();
        }
        self.discard();
    }

    /// Block comments nest: every `/*` needs its own `*/`.
    fn block_comment(&mut self) {
        let opened_on = self.line;
        let mut depth = 1usize;
        while depth > 0 {
            match (self.peek(), self.peek_next()) {
                (None, _) => break,
                (Some('*'), Some('/')) => {
                    self.advance();
                    self.advance();
                    depth -= 1;
                }
                (Some('/'), Some('*')) => {
                    self.advance();
                    self.advance();
                    depth += 1;
                }
                (Some(ch), _) => {
                    if ch == '\n' {
                        self.line += 1;
                    }
                    self.advance();
                }
            }
        }
        if depth != 0 {
            self.reporter
                .error(opened_on, "Unterminated multi-line comment.");
        }
        self.discard();
    }

    fn string(&mut self) {
        loop {
            match self.peek() {
                Some('"') => break,
                Some(ch) => {
                    if ch == '\n' {
                        self.line += 1;
                    }
                    self.advance();
                }
                None => {
                    self.reporter.error(self.line, "Unterminated string.");
                    self.discard();
                    return;
                }
            }
        }

        // closing "
        self.advance();

        // trim the quotes, both one byte wide
        let source = self.source;
        let end = self.offset();
        let value = &source[self.start + 1..end - 1];
        self.add_literal(TokenTy::String, value);
    }

    fn number(&mut self) {
        while self.peek().map_or(false, |ch| ch.is_ascii_digit()) {
            self.advance();
        }

        // a trailing '.' belongs to the next token
        if self.peek() == Some('.') && self.peek_next().map_or(false, |ch| ch.is_ascii_digit()) {
            self.advance();

            while self.peek().map_or(false, |ch| ch.is_ascii_digit()) {
                self.advance();
            }
        }

        let text = self.text().unwrap_or_default();
        self.add_literal(TokenTy::Number, text);
    }

    fn identifier(&mut self) {
        while self.peek().map_or(false, is_alpha_numeric) {
            self.advance();
        }

        let ty = self
            .text()
            .and_then(|text| KEYWORDS.get(text))
            .copied()
            .unwrap_or(TokenTy::Identifier);
        self.add_token(ty);
    }

    /// Byte offset of the next unread character.
    #[inline]
    fn offset(&mut self) -> usize {
        let offset = self
            .current
            .peek()
            .map(|&(offset, _)| offset)
            .unwrap_or(self.source.len());
        self.current.reset_peek();
        offset
    }

    #[inline]
    fn peek(&mut self) -> Option<char> {
        let ch = self.current.peek().map(|&(_, ch)| ch);
        self.current.reset_peek();
        ch
    }

    fn peek_next(&mut self) -> Option<char> {
        self.current.peek();
        let ch = self.current.peek().map(|&(_, ch)| ch);
        self.current.reset_peek();
        ch
    }

    #[inline]
    fn advance(&mut self) -> Option<char> {
        self.current.next().map(|(_, ch)| ch)
    }

    fn matches(&mut self, expected: char) -> bool {
        if self.peek() == Some(expected) {
            self.advance();
            true
        } else {
            false
        }
    }

    fn text(&mut self) -> Option<&'a str> {
        let source = self.source;
        let end = self.offset();
        (self.start != end).then(|| &source[self.start..end])
    }

    #[inline]
    fn add_token(&mut self, ty: TokenTy) {
        self.add_token_or_literal(ty, None)
    }

    #[inline]
    fn add_literal(&mut self, ty: TokenTy, literal: &'a str) {
        self.add_token_or_literal(ty, Some(literal))
    }

    fn add_token_or_literal(&mut self, ty: TokenTy, literal: Option<&'a str>) {
        let token = Token::new(ty, self.text(), literal, self.line);
        log::trace!("scanned {token} on line {}", token.line);
        self.tokens.push(token);
        self.discard();
    }

    fn discard(&mut self) {
        self.start = self.offset();
    }
}

fn is_alpha(ch: char) -> bool {
    ch.is_ascii_alphabetic() || ch == '_'
}

fn is_alpha_numeric(ch: char) -> bool {
    is_alpha(ch) || ch.is_ascii_digit()
}
