//! Program structure: `start` and `main`.

use quill_diagnostic::{Diagnostic, ErrorCode};
use quill_ir::{GrammarRule, Main, Start, TokenKind};
use tracing::debug;

use crate::recovery::HEADER_SYNC;
use crate::table::first;
use crate::{Parser, RecoveryState, Step, SyntaxError, TokenSet, TokenSource};

impl<S: TokenSource> Parser<'_, S> {
    /// `start := 'program' ID ':' global_vars functions main EOF`
    ///
    /// Always ends by consuming the `Eof` sentinel, whatever happened
    /// before it.
    pub(crate) fn start(&mut self, node: &mut Start) -> Step {
        self.rule(GrammarRule::Start, node, |p, n| {
            let result = p.program(n);
            n.eof = p.bump();
            result
        })
    }

    fn program(&mut self, node: &mut Start) -> Step {
        if self.program_header(node).is_err() {
            self.resync_header()?;
        }
        self.global_vars(&mut node.global_vars)?;
        self.functions(&mut node.functions)?;
        match self.main(&mut node.main) {
            Ok(()) => {
                self.trailing_input();
                Ok(())
            }
            Err(SyntaxError) => {
                // `main` can only fail at `Eof`: there is nothing left to
                // synchronize on.
                if !self.aborted {
                    self.fatal(GrammarRule::Main);
                }
                Err(SyntaxError)
            }
        }
    }

    /// `'program' ID ':'`
    fn program_header(&mut self, node: &mut Start) -> Step {
        node.program_kw = self.expect(
            TokenKind::Program,
            TokenSet::single(TokenKind::Ident),
            GrammarRule::Start,
        )?;
        node.name = self.expect(
            TokenKind::Ident,
            TokenSet::single(TokenKind::Colon),
            GrammarRule::Start,
        )?;
        node.colon = self.expect(TokenKind::Colon, HEADER_SYNC, GrammarRule::Start)?;
        Ok(())
    }

    /// Skip a broken header up to the first declaration or `main`.
    fn resync_header(&mut self) -> Step {
        loop {
            let kind = self.peek_kind();
            if HEADER_SYNC.contains(kind) {
                break;
            }
            if kind == TokenKind::Eof {
                self.fatal(GrammarRule::Start);
                return Err(SyntaxError);
            }
            self.skip();
        }
        debug!("resynchronized after program header");
        self.state = RecoveryState::Normal;
        Ok(())
    }

    /// Report and skip anything between the main block and `Eof`.
    fn trailing_input(&mut self) {
        if self.source.at_end() {
            return;
        }
        let diag = Diagnostic::new(ErrorCode::E1005)
            .with_message("unexpected input after the main block")
            .at_token(self.peek())
            .with_expected(TokenKind::Eof.display_name())
            .with_note("a program ends with its main block");
        self.error(diag);
        while !self.source.at_end() {
            self.skip();
        }
        self.state = RecoveryState::Normal;
    }

    /// `main := 'main' block`
    pub(crate) fn main(&mut self, node: &mut Main) -> Step {
        self.rule(GrammarRule::Main, node, |p, n| {
            n.main_kw = p.expect(
                TokenKind::Main,
                first(GrammarRule::Block),
                GrammarRule::Main,
            )?;
            p.block(&mut n.block)
        })
    }
}
