//! Token types for the Quill lexer.

mod kind;
mod list;

pub use kind::TokenKind;
pub use list::TokenList;

use std::fmt;

use super::{Position, Span};

/// A classified token together with its source text and location.
#[derive(Clone, Eq, PartialEq, Hash)]
pub struct Token {
    pub kind: TokenKind,
    /// Exact source text of the token (empty for `Eof`).
    pub lexeme: String,
    pub span: Span,
    pub position: Position,
}

impl Token {
    #[inline]
    pub fn new(kind: TokenKind, lexeme: impl Into<String>, span: Span, position: Position) -> Self {
        Token {
            kind,
            lexeme: lexeme.into(),
            span,
            position,
        }
    }

    /// Create a dummy token for testing.
    pub fn dummy(kind: TokenKind) -> Self {
        Token {
            kind,
            lexeme: kind.friendly_name().to_string(),
            span: Span::DUMMY,
            position: Position::START,
        }
    }

    /// How the token reads in a message: its text, or `end of input`.
    pub fn describe(&self) -> String {
        match self.kind {
            TokenKind::Eof => "end of input".to_string(),
            _ => format!("`{}`", self.lexeme),
        }
    }
}

impl fmt::Debug for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}({:?}) @ {}", self.kind, self.lexeme, self.position)
    }
}
