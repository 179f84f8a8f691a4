//! Variable declarations and types.

use quill_diagnostic::{Diagnostic, ErrorCode};
use quill_ir::{
    BasicType, DimDecl, GlobalVars, GrammarRule, LocalVars, Type, TypeDim1, TypeDim2, TokenKind,
    VarDecl,
};

use crate::table::{first, follow};
use crate::{Action, Decision, Parser, Step, SyntaxError, TokenSet, TokenSource};

/// What may follow an identifier in a declaration list.
const ID_FOLLOW: TokenSet = TokenSet::of(&[TokenKind::Comma, TokenKind::Semicolon]);

impl<S: TokenSource> Parser<'_, S> {
    /// `global_vars := var_decl*`
    pub(crate) fn global_vars(&mut self, node: &mut GlobalVars) -> Step {
        self.rule(GrammarRule::GlobalVars, node, |p, n| {
            p.var_decls(Decision::GlobalVars, &mut n.decls)
        })
    }

    /// `local_vars := var_decl*`
    pub(crate) fn local_vars(&mut self, node: &mut LocalVars) -> Step {
        self.rule(GrammarRule::LocalVars, node, |p, n| {
            p.var_decls(Decision::LocalVars, &mut n.decls)
        })
    }

    fn var_decls(&mut self, decision: Decision, decls: &mut Vec<VarDecl>) -> Step {
        while let Action::Descend(_) = self.decide(decision)? {
            let mut decl = VarDecl::default();
            let result = self.var_decl(&mut decl);
            decls.push(decl);
            result?;
        }
        Ok(())
    }

    /// `var_decl := 'var' type ID (',' ID)* ';'`
    pub(crate) fn var_decl(&mut self, node: &mut VarDecl) -> Step {
        const RULE: GrammarRule = GrammarRule::VarDecl;
        self.rule(RULE, node, |p, n| {
            n.var_kw = p.expect(TokenKind::Var, first(GrammarRule::Type), RULE)?;
            p.ty(&mut n.ty)?;
            n.names.push(p.expect(TokenKind::Ident, ID_FOLLOW, RULE)?);
            while let Action::Match(_) = p.peek_action(Decision::VarDeclIds) {
                n.commas.push(p.bump());
                n.names.push(p.expect(TokenKind::Ident, ID_FOLLOW, RULE)?);
            }
            n.semicolon = p.expect(TokenKind::Semicolon, follow(RULE), RULE)?;
            Ok(())
        })
    }

    /// `type := basic_type type_dim_1? type_dim_2?`
    ///
    /// A third dimension is an error (`E1004`) handed to the declaration.
    pub(crate) fn ty(&mut self, node: &mut Type) -> Step {
        self.rule(GrammarRule::Type, node, |p, n| {
            p.basic_type(&mut n.basic)?;
            if !matches!(p.peek_action(Decision::TypeDim1), Action::Descend(_)) {
                return Ok(());
            }
            let dim_1 = n.dim_1.insert(TypeDim1::default());
            p.type_dim_1(dim_1)?;
            if !matches!(p.peek_action(Decision::TypeDim2), Action::Descend(_)) {
                return Ok(());
            }
            let dim_2 = n.dim_2.insert(TypeDim2::default());
            p.type_dim_2(dim_2)?;
            if p.peek_action(Decision::ExtraDim) == Action::Reject {
                p.too_many_dimensions();
                return Err(SyntaxError);
            }
            Ok(())
        })
    }

    fn too_many_dimensions(&mut self) {
        let diag = Diagnostic::new(ErrorCode::E1004)
            .with_message("too many array dimensions")
            .at_token(self.peek())
            .with_expected(TokenKind::Ident.display_name())
            .with_note("arrays have at most two dimensions");
        self.error(diag);
    }

    /// `basic_type := 'number' | 'boolean'`
    pub(crate) fn basic_type(&mut self, node: &mut BasicType) -> Step {
        self.rule(GrammarRule::BasicType, node, |p, n| {
            if let Action::Match(_) = p.peek_action(Decision::BasicType) {
                n.keyword = p.bump();
                return Ok(());
            }
            let expected = p.table.expected(Decision::BasicType).format_expected();
            let diag = quill_diagnostic::unexpected_token(p.peek(), expected)
                .with_note(format!("while parsing {}", GrammarRule::BasicType.description()));
            p.error(diag);
            Err(SyntaxError)
        })
    }

    /// `type_dim_1 := dim_decl`
    fn type_dim_1(&mut self, node: &mut TypeDim1) -> Step {
        self.rule(GrammarRule::TypeDim1, node, |p, n| p.dim_decl(&mut n.dim))
    }

    /// `type_dim_2 := dim_decl`
    fn type_dim_2(&mut self, node: &mut TypeDim2) -> Step {
        self.rule(GrammarRule::TypeDim2, node, |p, n| p.dim_decl(&mut n.dim))
    }

    /// `dim_decl := '[' NUM_CTE ']'`
    fn dim_decl(&mut self, node: &mut DimDecl) -> Step {
        const RULE: GrammarRule = GrammarRule::DimDecl;
        self.rule(RULE, node, |p, n| {
            n.lbracket = p.expect(TokenKind::LBracket, TokenSet::single(TokenKind::Int), RULE)?;
            n.size = p.expect(TokenKind::Int, TokenSet::single(TokenKind::RBracket), RULE)?;
            n.rbracket = p.expect(TokenKind::RBracket, follow(RULE), RULE)?;
            Ok(())
        })
    }
}
