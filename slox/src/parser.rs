use crate::{
    diagnostics::Reporter, error::ParseError, expr::Expr, token::Token, token_type::TokenTy,
};

type Result<T> = std::result::Result<T, ParseError>;

/// Recursive descent parser over one scanned token sequence.
///
/// Each precedence level is one method, lowest first:
///
/// ```text
/// expression → equality
/// equality   → comparison ( ( "!=" | "==" ) comparison )*
/// comparison → term ( ( ">" | ">=" | "<" | "<=" ) term )*
/// term       → factor ( ( "-" | "+" ) factor )*
/// factor     → unary ( ( "/" | "*" ) unary )*
/// unary      → ( "!" | "-" ) unary | primary
/// primary    → "false" | "true" | "nil" | NUMBER | STRING | "(" expression ")"
/// ```
pub struct Parser<'a, 'r, R: Reporter + ?Sized> {
    tokens: Vec<Token<'a>>,
    current: usize,
    reporter: &'r mut R,
}

impl<'a, 'r, R: Reporter + ?Sized> Parser<'a, 'r, R> {
    pub fn new(mut tokens: Vec<Token<'a>>, reporter: &'r mut R) -> Self {
        if tokens.last().map_or(true, |token| token.ty != TokenTy::Eof) {
            let line = tokens.last().map_or(1, |token| token.line);
            tokens.push(Token::eof(line));
        }
        Self {
            tokens,
            current: 0,
            reporter,
        }
    }

    /// Parses a single expression. On `Err` the cause has already been
    /// reported.
    pub fn parse(mut self) -> Result<Expr<'a>> {
        log::debug!("parsing {} tokens", self.tokens.len());
        let expr = self.expression();
        if let Err(err) = &expr {
            log::debug!("parse abandoned: {err}");
        }
        expr
    }

    fn expression(&mut self) -> Result<Expr<'a>> {
        self.equality()
    }

    fn equality(&mut self) -> Result<Expr<'a>> {
        let mut expr = self.comparison()?;

        while self.matches([TokenTy::BangEqual, TokenTy::EqualEqual]) {
            let operator = self.previous();
            let right = self.comparison()?;
            expr = Expr::Binary {
                left: Box::new(expr),
                operator,
                right: Box::new(right),
            };
        }

        Ok(expr)
    }

    fn comparison(&mut self) -> Result<Expr<'a>> {
        let mut expr = self.term()?;

        while self.matches([
            TokenTy::Greater,
            TokenTy::GreaterEqual,
            TokenTy::Less,
            TokenTy::LessEqual,
        ]) {
            let operator = self.previous();
            let right = self.term()?;
            expr = Expr::Binary {
                left: Box::new(expr),
                operator,
                right: Box::new(right),
            };
        }

        Ok(expr)
    }

    fn term(&mut self) -> Result<Expr<'a>> {
        let mut expr = self.factor()?;

        while self.matches([TokenTy::Minus, TokenTy::Plus]) {
            let operator = self.previous();
            let right = self.factor()?;
            expr = Expr::Binary {
                left: Box::new(expr),
                operator,
                right: Box::new(right),
            };
        }

        Ok(expr)
    }

    fn factor(&mut self) -> Result<Expr<'a>> {
        let mut expr = self.unary()?;

        while self.matches([TokenTy::Slash, TokenTy::Star]) {
            let operator = self.previous();
            let right = self.unary()?;
            expr = Expr::Binary {
                left: Box::new(expr),
                operator,
                right: Box::new(right),
            };
        }

        Ok(expr)
    }

    fn unary(&mut self) -> Result<Expr<'a>> {
        if self.matches([TokenTy::Bang, TokenTy::Minus]) {
            let operator = self.previous();
            let right = self.unary()?;
            Ok(Expr::Unary {
                operator,
                right: Box::new(right),
            })
        } else {
            self.primary()
        }
    }

    fn primary(&mut self) -> Result<Expr<'a>> {
        if self.matches([TokenTy::False]) {
            Ok(Expr::Literal(Some("false")))
        } else if self.matches([TokenTy::True]) {
            Ok(Expr::Literal(Some("true")))
        } else if self.matches([TokenTy::Nil]) {
            Ok(Expr::Literal(Some("nil")))
        } else if self.matches([TokenTy::Number, TokenTy::String]) {
            Ok(Expr::Literal(self.previous().literal))
        } else if self.matches([TokenTy::LeftParen]) {
            let expr = self.expression()?;
            self.consume(TokenTy::RightParen, "Expect ')' after expression.")?;
            Ok(Expr::Grouping(Box::new(expr)))
        } else {
            Err(self.error(self.peek(), "Expect expression."))
        }
    }

    /// Skips ahead to the next likely statement boundary after a syntax
    /// error. Only expressions are parsed today, so nothing calls this yet.
    #[allow(dead_code)]
    fn synchronize(&mut self) {
        self.advance();

        while !self.is_at_end() {
            if self.previous().ty == TokenTy::Semicolon || self.peek().ty.starts_statement() {
                return;
            }
            self.advance();
        }
    }

    fn error(&mut self, token: Token<'a>, message: &'static str) -> ParseError {
        self.reporter.error_at(&token, message);
        ParseError::new(&token, message)
    }

    fn consume(&mut self, ty: TokenTy, message: &'static str) -> Result<Token<'a>> {
        if self.check(ty) {
            Ok(self.advance())
        } else {
            Err(self.error(self.peek(), message))
        }
    }

    fn matches<const N: usize>(&mut self, tys: [TokenTy; N]) -> bool {
        if tys.iter().any(|&ty| self.check(ty)) {
            self.advance();
            true
        } else {
            false
        }
    }

    fn check(&self, ty: TokenTy) -> bool {
        !self.is_at_end() && self.peek().ty == ty
    }

    fn advance(&mut self) -> Token<'a> {
        if !self.is_at_end() {
            self.current += 1;
        }
        self.previous()
    }

    fn is_at_end(&self) -> bool {
        self.peek().ty == TokenTy::Eof
    }

    fn peek(&self) -> Token<'a> {
        self.tokens[self.current]
    }

    fn previous(&self) -> Token<'a> {
        self.tokens[self.current.saturating_sub(1)]
    }
}
