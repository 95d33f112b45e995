use crate::token::Token;

/// Parsed expression tree. Every child is owned by its parent.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr<'a> {
    Binary {
        left: Box<Expr<'a>>,
        operator: Token<'a>,
        right: Box<Expr<'a>>,
    },
    Grouping(Box<Expr<'a>>),
    /// Textual value: `nil`, `true`, `false`, or the scanned literal payload.
    Literal(Option<&'a str>),
    Unary {
        operator: Token<'a>,
        right: Box<Expr<'a>>,
    },
}
