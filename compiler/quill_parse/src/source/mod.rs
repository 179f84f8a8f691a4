//! Token source: the parser's only view of its input.
//!
//! The parser pulls tokens one at a time and never looks further ahead
//! than [`TokenSource::peek`], so any producer that can hand out tokens in
//! order (a buffered list, a streaming lexer) can drive it.

use quill_ir::{Token, TokenKind, TokenList};
use tracing::trace;

/// A forward-only stream of tokens ending in an `Eof` sentinel.
///
/// Implementations must keep returning the sentinel from `peek` once the
/// stream is exhausted; `advance` at the sentinel returns it again without
/// moving.
pub trait TokenSource {
    /// The current lookahead token.
    fn peek(&self) -> &Token;

    /// Consume and return the current token.
    fn advance(&mut self) -> Token;

    /// Total number of tokens, including the sentinel.
    fn len(&self) -> usize;

    fn at_end(&self) -> bool {
        self.peek().kind == TokenKind::Eof
    }

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Cursor over a buffered [`TokenList`].
#[derive(Clone, Debug)]
pub struct Cursor<'a> {
    tokens: &'a TokenList,
    pos: usize,
}

impl<'a> Cursor<'a> {
    /// Create a cursor at the start of the token list.
    pub fn new(tokens: &'a TokenList) -> Self {
        Cursor { tokens, pos: 0 }
    }

    /// Index of the current token.
    #[inline]
    pub fn position(&self) -> usize {
        self.pos
    }
}

impl TokenSource for Cursor<'_> {
    /// Invariant: `pos` is always in bounds because the last token is `Eof`
    /// and `advance` never moves past it.
    #[inline]
    fn peek(&self) -> &Token {
        &self.tokens[self.pos]
    }

    fn advance(&mut self) -> Token {
        let token = self.tokens[self.pos].clone();
        trace!(
            pos = self.pos,
            kind = %token.kind.display_name(),
            span_start = token.span.start,
            span_end = token.span.end,
            "advance"
        );
        if token.kind != TokenKind::Eof {
            self.pos += 1;
        }
        token
    }

    #[inline]
    fn len(&self) -> usize {
        self.tokens.len()
    }
}
