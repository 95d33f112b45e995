use std::path::PathBuf;

use thiserror::Error;

use crate::{diagnostics, token::Token};

/// A syntax error that stopped the parser. It has already been reported
/// by the time a caller sees it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("[line {line}] Error{location}: {message}")]
pub struct ParseError {
    pub line: usize,
    pub location: String,
    pub message: &'static str,
}

impl ParseError {
    pub fn new(token: &Token<'_>, message: &'static str) -> Self {
        Self {
            line: token.line,
            location: diagnostics::location(token),
            message,
        }
    }
}

#[derive(Debug, Error)]
pub enum LoxError {
    #[error("Usage: slox [--tokens] [script]")]
    Usage,
    #[error("source contained {errors} reported error(s)")]
    Source { errors: usize },
    #[error(transparent)]
    Syntax(#[from] ParseError),
    #[error("could not read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl LoxError {
    pub fn exit_code(&self) -> i32 {
        match self {
            LoxError::Usage => 64,
            LoxError::Source { .. } | LoxError::Syntax(_) => 65,
            LoxError::Io { .. } => 66,
        }
    }
}

pub type Result<T, E = LoxError> = std::result::Result<T, E>;
