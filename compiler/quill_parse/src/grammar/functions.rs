//! Function declarations.

use quill_ir::{FunctionDecl, Functions, GrammarRule, Param, ParamList, TokenKind};

use crate::{Action, Decision, Parser, Step, TokenSet, TokenSource};

/// What may follow `(`: a parameter type or `)`.
const PARAMS_START: TokenSet = TokenSet::of(&[
    TokenKind::NumberType,
    TokenKind::BooleanType,
    TokenKind::RParen,
]);

/// What may follow `)`: local declarations or the body.
const AFTER_PARAMS: TokenSet = TokenSet::of(&[TokenKind::Var, TokenKind::LBrace]);

/// What may follow a parameter name.
const PARAM_FOLLOW: TokenSet = TokenSet::of(&[TokenKind::Comma, TokenKind::RParen]);

impl<S: TokenSource> Parser<'_, S> {
    /// `functions := function_decls*`
    pub(crate) fn functions(&mut self, node: &mut Functions) -> Step {
        self.rule(GrammarRule::Functions, node, |p, n| {
            while let Action::Descend(_) = p.decide(Decision::Functions)? {
                let mut decl = FunctionDecl::default();
                let result = p.function_decl(&mut decl);
                n.decls.push(decl);
                result?;
            }
            Ok(())
        })
    }

    /// `function_decls := 'function' ID '(' param_list? ')' local_vars block`
    pub(crate) fn function_decl(&mut self, node: &mut FunctionDecl) -> Step {
        const RULE: GrammarRule = GrammarRule::FunctionDecls;
        self.rule(RULE, node, |p, n| {
            n.function_kw = p.expect(TokenKind::Function, TokenSet::single(TokenKind::Ident), RULE)?;
            n.name = p.expect(TokenKind::Ident, TokenSet::single(TokenKind::LParen), RULE)?;
            n.lparen = p.expect(TokenKind::LParen, PARAMS_START, RULE)?;
            if let Action::Descend(_) = p.decide(Decision::ParamListOpt)? {
                let params = n.params.insert(ParamList::default());
                p.param_list(params)?;
            }
            n.rparen = p.expect(TokenKind::RParen, AFTER_PARAMS, RULE)?;
            p.local_vars(&mut n.local_vars)?;
            p.block(&mut n.body)
        })
    }

    /// `param_list := basic_type ID (',' basic_type ID)*`
    pub(crate) fn param_list(&mut self, node: &mut ParamList) -> Step {
        self.rule(GrammarRule::ParamList, node, |p, n| loop {
            let param = push_default(&mut n.params);
            p.basic_type(&mut param.ty)?;
            param.name = p.expect(TokenKind::Ident, PARAM_FOLLOW, GrammarRule::ParamList)?;
            match p.peek_action(Decision::ParamListTail) {
                Action::Match(_) => n.commas.push(p.bump()),
                _ => return Ok(()),
            }
        })
    }
}

fn push_default(params: &mut Vec<Param>) -> &mut Param {
    params.push(Param::default());
    let last = params.len() - 1;
    &mut params[last]
}
