//! Token list produced by the lexer.

use std::ops::Index;

use super::{Token, TokenKind};
use crate::{Position, Span};

/// An owned sequence of tokens that always ends with an `Eof` sentinel.
///
/// The sentinel lets the parser peek unconditionally: the current token
/// is always valid, and the last token is always `Eof`.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct TokenList {
    tokens: Vec<Token>,
}

impl TokenList {
    /// Build a token list, appending an `Eof` sentinel when missing.
    ///
    /// Any `Eof` token before the end is dropped so the sentinel is unique.
    pub fn new(mut tokens: Vec<Token>) -> Self {
        let sentinel = tokens
            .iter()
            .rposition(|t| t.kind == TokenKind::Eof)
            .map(|i| tokens[i].clone());
        tokens.retain(|t| t.kind != TokenKind::Eof);
        let eof = sentinel.unwrap_or_else(|| match tokens.last() {
            Some(last) => Token::new(
                TokenKind::Eof,
                "",
                Span::point(last.span.end),
                last.position,
            ),
            None => Token::new(TokenKind::Eof, "", Span::DUMMY, Position::START),
        });
        tokens.push(eof);
        TokenList { tokens }
    }

    /// Build a token list from bare kinds (test and tooling helper).
    ///
    /// Lexemes are the kinds' spellings (`x` for identifiers, `0` for
    /// integers); spans are laid out as if tokens were separated by one space.
    pub fn from_kinds(kinds: &[TokenKind]) -> Self {
        let mut offset = 0u32;
        let mut column = 1u32;
        let tokens = kinds
            .iter()
            .map(|&kind| {
                let lexeme = match kind {
                    TokenKind::Ident => "x",
                    TokenKind::Int => "0",
                    TokenKind::Error => "?",
                    TokenKind::Eof => "",
                    _ => kind.friendly_name(),
                };
                #[expect(
                    clippy::cast_possible_truncation,
                    reason = "lexemes here are at most 8 bytes"
                )]
                let len = lexeme.len() as u32;
                let token = Token::new(
                    kind,
                    lexeme,
                    Span::new(offset, offset + len),
                    Position::new(1, column),
                );
                offset += len + 1;
                column += len + 1;
                token
            })
            .collect();
        Self::new(tokens)
    }

    /// Number of tokens, including the `Eof` sentinel.
    #[inline]
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// A token list always holds at least the sentinel.
    #[inline]
    pub fn is_empty(&self) -> bool {
        false
    }

    /// The `Eof` sentinel.
    #[inline]
    pub fn eof(&self) -> &Token {
        &self.tokens[self.tokens.len() - 1]
    }

    #[inline]
    pub fn get(&self, index: usize) -> Option<&Token> {
        self.tokens.get(index)
    }

    /// Iterate over all tokens, sentinel included.
    pub fn iter(&self) -> std::slice::Iter<'_, Token> {
        self.tokens.iter()
    }

    /// Token kinds in order, sentinel included.
    pub fn kinds(&self) -> Vec<TokenKind> {
        self.tokens.iter().map(|t| t.kind).collect()
    }

    pub fn as_slice(&self) -> &[Token] {
        &self.tokens
    }
}

impl Index<usize> for TokenList {
    type Output = Token;

    fn index(&self, index: usize) -> &Token {
        &self.tokens[index]
    }
}

impl<'a> IntoIterator for &'a TokenList {
    type Item = &'a Token;
    type IntoIter = std::slice::Iter<'a, Token>;

    fn into_iter(self) -> Self::IntoIter {
        self.tokens.iter()
    }
}
