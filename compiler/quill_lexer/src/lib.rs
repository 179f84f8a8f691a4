//! Tokenizer for Quill source text.
//!
//! Produces the `TokenList` the parser reads through its token source:
//! keywords, punctuation, identifiers and integer constants, with
//! whitespace and `//` line comments dropped. Characters that start no
//! token become `TokenKind::Error` tokens plus an `E0001` diagnostic, so the
//! parser still sees (and accounts for) them.

mod raw_token;

use logos::Logos;
use quill_diagnostic::{Diagnostic, ErrorCode};
use quill_ir::{Position, Span, SpanError, Token, TokenKind, TokenList};
use tracing::debug;

use raw_token::RawToken;

/// Result of lexing one source text.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct LexOutput {
    /// Tokens, always ending with the `Eof` sentinel.
    pub tokens: TokenList,
    /// One `E0001` per invalid character run.
    pub diagnostics: Vec<Diagnostic>,
}

/// Tracks line/column while walking the source front to back.
struct LineTracker<'src> {
    source: &'src str,
    offset: usize,
    line: u32,
    column: u32,
}

impl<'src> LineTracker<'src> {
    fn new(source: &'src str) -> Self {
        LineTracker {
            source,
            offset: 0,
            line: 1,
            column: 1,
        }
    }

    /// Position of byte `offset`. Offsets must be non-decreasing.
    fn position(&mut self, offset: usize) -> Position {
        for c in self.source[self.offset..offset].chars() {
            if c == '\n' {
                self.line += 1;
                self.column = 1;
            } else {
                self.column = self.column.saturating_add(1);
            }
        }
        self.offset = offset;
        Position::new(self.line, self.column)
    }
}

/// Lex source text into tokens.
///
/// Fails only if the source is too large for 32-bit spans.
pub fn lex(source: &str) -> Result<LexOutput, SpanError> {
    let end = Span::try_from_range(source.len()..source.len())?;
    let mut tracker = LineTracker::new(source);
    let mut tokens = Vec::new();
    let mut diagnostics = Vec::new();
    let mut lexer = RawToken::lexer(source);

    while let Some(result) = lexer.next() {
        let range = lexer.span();
        let span = Span::try_from_range(range.clone())?;
        let position = tracker.position(range.start);
        let slice = lexer.slice();

        match result {
            Ok(raw) => tokens.push(Token::new(raw.kind(), slice, span, position)),
            Err(()) => {
                // Glue adjacent invalid characters into one error token.
                if let Some(prev) = tokens.last_mut() {
                    if prev.kind == TokenKind::Error && prev.span.end == span.start {
                        prev.span = prev.span.merge(span);
                        prev.lexeme.push_str(slice);
                        continue;
                    }
                }
                tokens.push(Token::new(TokenKind::Error, slice, span, position));
            }
        }
    }

    for token in tokens.iter().filter(|t| t.kind == TokenKind::Error) {
        diagnostics.push(
            Diagnostic::new(ErrorCode::E0001)
                .with_message(format!(
                    "invalid character{} {}",
                    plural(&token.lexeme),
                    token.describe()
                ))
                .at_token(token),
        );
    }

    let eof_position = tracker.position(source.len());
    tokens.push(Token::new(TokenKind::Eof, "", end, eof_position));
    let tokens = TokenList::new(tokens);
    debug!(
        tokens = tokens.len(),
        invalid = diagnostics.len(),
        "lexed source"
    );
    Ok(LexOutput {
        tokens,
        diagnostics,
    })
}

fn plural(lexeme: &str) -> &'static str {
    if lexeme.chars().count() == 1 {
        ""
    } else {
        "s"
    }
}
