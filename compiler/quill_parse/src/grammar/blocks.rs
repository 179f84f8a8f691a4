//! Blocks and statements.

use quill_ir::{Block, Expression, GrammarRule, Statement, TokenKind};

use crate::table::{first, follow};
use crate::{Action, Decision, Parser, Step, TokenSource};

impl<S: TokenSource> Parser<'_, S> {
    /// `block := '{' statement* '}'`
    pub(crate) fn block(&mut self, node: &mut Block) -> Step {
        const RULE: GrammarRule = GrammarRule::Block;
        self.rule(RULE, node, |p, n| {
            let after_open = first(GrammarRule::Statement).with(TokenKind::RBrace);
            n.lbrace = p.expect(TokenKind::LBrace, after_open, RULE)?;
            while let Action::Descend(_) = p.decide(Decision::BlockStatements)? {
                let mut statement = Statement::default();
                let result = p.statement(&mut statement);
                n.statements.push(statement);
                result?;
            }
            n.rbrace = p.expect(TokenKind::RBrace, follow(RULE), RULE)?;
            Ok(())
        })
    }

    /// `statement := expression ';'`
    pub(crate) fn statement(&mut self, node: &mut Statement) -> Step {
        const RULE: GrammarRule = GrammarRule::Statement;
        self.rule(RULE, node, |p, n| {
            p.expression(&mut n.expression)?;
            n.semicolon = p.expect(TokenKind::Semicolon, follow(RULE), RULE)?;
            Ok(())
        })
    }

    /// `expression := ε`
    ///
    /// The grammar has no expression syntax; the node only records where
    /// the empty expression sits.
    pub(crate) fn expression(&mut self, node: &mut Expression) -> Step {
        self.rule(GrammarRule::Expression, node, |_, _| Ok(()))
    }
}

