//! LL(1) recursive descent parser for Quill.
//!
//! The parser pulls tokens from a [`TokenSource`], takes every choice from
//! one token of lookahead via the shared [`DecisionTable`], and builds the
//! typed parse tree of `quill_ir`. It never backtracks.
//!
//! Errors never stop the parse except in one case. A mismatch is recorded
//! as a [`Diagnostic`] and the parser recovers:
//! - a single missing terminal is inserted when the lookahead is a token
//!   that may follow it;
//! - at a repetition or option, unexpected tokens are skipped until the
//!   table accepts one;
//! - otherwise the error travels up to the nearest rule with a
//!   synchronization policy (declarations, parameter lists, functions,
//!   blocks, statements), which skips to a token it can resume at.
//!
//! Running out of input while skipping is unrecoverable: a final fatal
//! diagnostic is recorded and no further rule is attempted. Either way the
//! caller gets a tree, and every token ends up either in the tree or in
//! [`ParseOutput::skipped`].

mod grammar;
mod recovery;
mod source;
mod table;

pub use recovery::{sync_policy, SyncPolicy, TokenSet};
pub use source::{Cursor, TokenSource};
pub use table::{first, follow, nullable, Action, Decision, DecisionTable};

use quill_diagnostic::{unexpected_token, Diagnostic, ErrorCode};
use quill_ir::{GrammarRule, Span, Start, Terminal, Token, TokenKind, TokenList};
use tracing::{debug, trace};

use grammar::RuleNode;

/// Outcome of a parse: always a tree, plus what went wrong.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParseOutput {
    pub tree: Start,
    /// In the order they were found.
    pub diagnostics: Vec<Diagnostic>,
    /// Tokens dropped by recovery, in input order.
    pub skipped: Vec<Token>,
    /// Tokens taken from the source, matched or skipped (including `Eof`).
    pub consumed: usize,
}

impl ParseOutput {
    /// Any error (fatal or recoverable) was reported.
    pub fn has_errors(&self) -> bool {
        self.diagnostics.iter().any(Diagnostic::is_error)
    }

    /// The parse stopped early at an unrecoverable error.
    pub fn is_fatal(&self) -> bool {
        self.diagnostics.iter().any(Diagnostic::is_fatal)
    }

    /// No diagnostics and nothing skipped.
    pub fn is_clean(&self) -> bool {
        self.diagnostics.is_empty() && self.skipped.is_empty()
    }
}

/// Whether the parser is on track or skipping after an error.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum RecoveryState {
    Normal,
    /// An error was reported; further mismatches stay silent until the
    /// parser synchronizes.
    Recovering,
}

/// Marker for a failed rule. The diagnostic has already been recorded.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub(crate) struct SyntaxError;

pub(crate) type Step = Result<(), SyntaxError>;

/// Parser state for one parse.
pub struct Parser<'t, S> {
    source: S,
    table: &'t DecisionTable,
    state: RecoveryState,
    diagnostics: Vec<Diagnostic>,
    skipped: Vec<Token>,
    consumed: usize,
    /// End offset of the last consumed token.
    last_end: u32,
    aborted: bool,
}

impl<'t, S: TokenSource> Parser<'t, S> {
    pub fn new(source: S, table: &'t DecisionTable) -> Self {
        Parser {
            source,
            table,
            state: RecoveryState::Normal,
            diagnostics: Vec::new(),
            skipped: Vec::new(),
            consumed: 0,
            last_end: 0,
            aborted: false,
        }
    }

    /// Parse a whole program.
    pub fn parse(mut self) -> ParseOutput {
        let expected_len = self.source.len();
        let mut tree = Start::default();
        // Failures are fully reported and recovered inside `start`.
        let _ = self.start(&mut tree);
        debug!(
            consumed = self.consumed,
            diagnostics = self.diagnostics.len(),
            skipped = self.skipped.len(),
            aborted = self.aborted,
            "parse finished"
        );
        debug_assert_eq!(self.consumed, expected_len, "every token is accounted for");
        ParseOutput {
            tree,
            diagnostics: self.diagnostics,
            skipped: self.skipped,
            consumed: self.consumed,
        }
    }

    #[inline]
    pub fn state(&self) -> RecoveryState {
        self.state
    }

    // Token access

    #[inline]
    fn peek(&self) -> &Token {
        self.source.peek()
    }

    #[inline]
    fn peek_kind(&self) -> TokenKind {
        self.source.peek().kind
    }

    /// Consume the lookahead into the tree.
    fn bump(&mut self) -> Terminal {
        let token = self.source.advance();
        self.consumed += 1;
        self.last_end = token.span.end;
        Terminal::from_token(token)
    }

    /// Consume the lookahead as skipped input.
    fn skip(&mut self) {
        let token = self.source.advance();
        trace!(kind = %token.kind.display_name(), "skip");
        self.consumed += 1;
        self.last_end = token.span.end;
        self.skipped.push(token);
    }

    // Decisions

    /// Look up `decision` for the current lookahead.
    ///
    /// A `Reject` entry is reported once (`E1003`), then tokens are skipped
    /// until the table accepts one. Fails only when that runs into `Eof`.
    fn decide(&mut self, decision: Decision) -> Result<Action, SyntaxError> {
        loop {
            if self.aborted {
                return Err(SyntaxError);
            }
            let kind = self.peek_kind();
            match self.table.action(decision, kind) {
                Action::Reject if kind == TokenKind::Eof => {
                    self.fatal(decision.rule());
                    return Err(SyntaxError);
                }
                Action::Reject => {
                    if self.state == RecoveryState::Normal {
                        let expected = self.table.expected(decision).format_expected();
                        let diag = Diagnostic::new(ErrorCode::E1003)
                            .with_message(format!("unexpected {}", self.peek().describe()))
                            .at_token(self.peek())
                            .with_expected(expected)
                            .with_note(format!("while parsing {}", decision.rule().description()));
                        self.error(diag);
                    }
                    self.skip();
                }
                action => {
                    if self.state == RecoveryState::Recovering {
                        debug!(?decision, "resynchronized at repetition");
                        self.state = RecoveryState::Normal;
                    }
                    return Ok(action);
                }
            }
        }
    }

    /// Look up `decision` without skipping. For decisions whose `Reject`
    /// entries the caller handles itself.
    #[inline]
    fn peek_action(&self, decision: Decision) -> Action {
        self.table.action(decision, self.peek_kind())
    }

    // Matching

    /// Match a terminal of `kind`.
    ///
    /// If the lookahead is not `kind` but is in `follow` (tokens that may
    /// come right after this terminal here), the terminal is reported
    /// missing (`E1002`) and inserted without consuming anything.
    fn expect(
        &mut self,
        kind: TokenKind,
        follow: TokenSet,
        rule: GrammarRule,
    ) -> Result<Terminal, SyntaxError> {
        if self.aborted {
            return Err(SyntaxError);
        }
        let found = self.peek_kind();
        if found == kind {
            return Ok(self.bump());
        }
        if follow.contains(found) {
            debug!(missing = %kind.display_name(), "inserting missing token");
            let inserted = Terminal::inserted(kind, self.peek());
            let diag = Diagnostic::new(ErrorCode::E1002)
                .with_message(format!("missing {}", kind.display_name()))
                .before_token(self.peek())
                .with_expected(kind.display_name())
                .with_note(format!("while parsing {}", rule.description()));
            self.diagnostics.push(diag);
            return Ok(inserted);
        }
        let diag = unexpected_token(self.peek(), kind.display_name())
            .with_note(format!("while parsing {}", rule.description()));
        self.error(diag);
        Err(SyntaxError)
    }

    // Diagnostics

    /// Report a mismatch and enter recovery. Silent while already
    /// recovering.
    fn error(&mut self, diag: Diagnostic) {
        if self.state == RecoveryState::Recovering {
            trace!(code = %diag.code, "suppressed while recovering");
            return;
        }
        debug!(code = %diag.code, message = %diag.message, "syntax error");
        self.diagnostics.push(diag);
        self.state = RecoveryState::Recovering;
    }

    /// Record the unrecoverable end of input and stop parsing.
    fn fatal(&mut self, rule: GrammarRule) {
        debug!(rule = rule.name(), "end of input while recovering");
        let diag = Diagnostic::new(ErrorCode::E1006)
            .with_message("unexpected end of input while recovering from a syntax error")
            .before_token(self.peek())
            .with_note(format!("while parsing {}", rule.description()));
        self.diagnostics.push(diag);
        self.aborted = true;
    }

    // Rules

    /// Run `body` as rule `rule` on `node`.
    ///
    /// Sets the node's span and, for rules with a synchronization policy,
    /// recovers from the body's failure.
    fn rule<N: RuleNode>(
        &mut self,
        rule: GrammarRule,
        node: &mut N,
        body: impl FnOnce(&mut Self, &mut N) -> Step,
    ) -> Step {
        if self.aborted {
            return Err(SyntaxError);
        }
        trace!(rule = rule.name(), "enter");
        let start_consumed = self.consumed;
        let start = self.peek().span.start;

        let mut result = body(self, node);
        if result.is_err() && !self.aborted {
            if let Some(policy) = sync_policy(rule) {
                result = self.synchronize(rule, policy, node);
            }
        }

        *node.span_mut() = if self.consumed > start_consumed {
            Span::new(start, self.last_end)
        } else {
            Span::point(start)
        };
        trace!(rule = rule.name(), ok = result.is_ok(), "exit");
        result
    }

    /// Skip to a stop token of `policy`, consuming its terminator into
    /// `node` if that comes first.
    fn synchronize<N: RuleNode>(
        &mut self,
        rule: GrammarRule,
        policy: SyncPolicy,
        node: &mut N,
    ) -> Step {
        debug!(rule = rule.name(), "synchronizing");
        loop {
            let kind = self.peek_kind();
            if policy.terminator == Some(kind) {
                let terminator = self.bump();
                node.close(terminator);
                break;
            }
            if policy.stop.contains(kind) {
                break;
            }
            if kind == TokenKind::Eof {
                self.fatal(rule);
                return Err(SyntaxError);
            }
            self.skip();
        }
        debug!(rule = rule.name(), at = %self.peek_kind().display_name(), "resynchronized");
        self.state = RecoveryState::Normal;
        Ok(())
    }
}

/// Parse a token stream with the standard decision table.
pub fn parse<S: TokenSource>(source: S) -> ParseOutput {
    parse_with(source, DecisionTable::standard())
}

/// Parse a token stream with an explicit decision table.
pub fn parse_with<S: TokenSource>(source: S, table: &DecisionTable) -> ParseOutput {
    Parser::new(source, table).parse()
}

/// Parse a buffered token list.
pub fn parse_tokens(tokens: &TokenList) -> ParseOutput {
    parse(Cursor::new(tokens))
}

#[cfg(test)]
mod tests;
