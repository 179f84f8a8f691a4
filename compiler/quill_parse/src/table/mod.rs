//! The LL(1) decision table.
//!
//! Every point where the grammar chooses between alternatives (loop again
//! or stop, take an optional tail or skip it, which keyword) is a
//! [`Decision`]. The table maps a decision and the single lookahead token
//! to an [`Action`]. It is built at compile time, lives in a `static`, and
//! is only ever read.
//!
//! FIRST and FOLLOW sets of every rule are kept here too, for diagnostics
//! and for checking the table against the grammar.

use quill_ir::{GrammarRule, TokenKind};

use crate::recovery::TokenSet;

/// A lookahead decision point of the grammar.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Decision {
    /// `global_vars := var_decl*`: another declaration?
    GlobalVars,
    /// `var_decl`: another `, ID`?
    VarDeclIds,
    /// `type`: a first dimension?
    TypeDim1,
    /// `type`: a second dimension?
    TypeDim2,
    /// `type`: anything after the second dimension.
    ExtraDim,
    /// `functions := function_decls*`: another function?
    Functions,
    /// `function_decls`: is there a parameter list?
    ParamListOpt,
    /// `param_list`: another `, basic_type ID`?
    ParamListTail,
    /// `local_vars := var_decl*`: another declaration?
    LocalVars,
    /// `block`: another statement?
    BlockStatements,
    /// `basic_type := 'number' | 'boolean'`
    BasicType,
}

impl Decision {
    pub const COUNT: usize = 11;

    pub const ALL: [Decision; Self::COUNT] = [
        Decision::GlobalVars,
        Decision::VarDeclIds,
        Decision::TypeDim1,
        Decision::TypeDim2,
        Decision::ExtraDim,
        Decision::Functions,
        Decision::ParamListOpt,
        Decision::ParamListTail,
        Decision::LocalVars,
        Decision::BlockStatements,
        Decision::BasicType,
    ];

    /// The rule this decision is taken in.
    pub const fn rule(self) -> GrammarRule {
        match self {
            Decision::GlobalVars => GrammarRule::GlobalVars,
            Decision::VarDeclIds => GrammarRule::VarDecl,
            Decision::TypeDim1 | Decision::TypeDim2 | Decision::ExtraDim => GrammarRule::Type,
            Decision::Functions => GrammarRule::Functions,
            Decision::ParamListOpt => GrammarRule::FunctionDecls,
            Decision::ParamListTail => GrammarRule::ParamList,
            Decision::LocalVars => GrammarRule::LocalVars,
            Decision::BlockStatements => GrammarRule::Block,
            Decision::BasicType => GrammarRule::BasicType,
        }
    }
}

/// What to do for a decision and a lookahead token.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Action {
    /// Parse the given rule (take the loop body or optional tail).
    Descend(GrammarRule),
    /// Consume this terminal.
    Match(TokenKind),
    /// Take the empty alternative: leave the loop or skip the option.
    Epsilon,
    /// No alternative starts with this token.
    Reject,
}

type Row = [Action; TokenKind::COUNT];

const fn row(default: Action, entries: &[(TokenKind, Action)]) -> Row {
    let mut row = [default; TokenKind::COUNT];
    let mut i = 0;
    while i < entries.len() {
        let (kind, action) = entries[i];
        row[kind.discriminant_index() as usize] = action;
        i += 1;
    }
    row
}

/// Read-only `(Decision, TokenKind) -> Action` table.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DecisionTable {
    rows: [Row; Decision::COUNT],
}

static STANDARD: DecisionTable = DecisionTable::build();

impl DecisionTable {
    /// The table for the Quill grammar.
    pub fn standard() -> &'static DecisionTable {
        &STANDARD
    }

    const fn build() -> DecisionTable {
        use Action::{Descend, Epsilon, Match, Reject};
        use TokenKind as K;

        let mut rows = [[Reject; TokenKind::COUNT]; Decision::COUNT];

        rows[Decision::GlobalVars as usize] = row(
            Reject,
            &[
                (K::Var, Descend(GrammarRule::VarDecl)),
                (K::Function, Epsilon),
                (K::Main, Epsilon),
                (K::LBrace, Epsilon),
                (K::Eof, Epsilon),
            ],
        );
        rows[Decision::VarDeclIds as usize] =
            row(Epsilon, &[(K::Comma, Match(K::Comma))]);
        rows[Decision::TypeDim1 as usize] =
            row(Epsilon, &[(K::LBracket, Descend(GrammarRule::TypeDim1))]);
        rows[Decision::TypeDim2 as usize] =
            row(Epsilon, &[(K::LBracket, Descend(GrammarRule::TypeDim2))]);
        rows[Decision::ExtraDim as usize] = row(Epsilon, &[(K::LBracket, Reject)]);
        rows[Decision::Functions as usize] = row(
            Reject,
            &[
                (K::Function, Descend(GrammarRule::FunctionDecls)),
                (K::Main, Epsilon),
                (K::LBrace, Epsilon),
                (K::Eof, Epsilon),
            ],
        );
        rows[Decision::ParamListOpt as usize] = row(
            Reject,
            &[
                (K::NumberType, Descend(GrammarRule::ParamList)),
                (K::BooleanType, Descend(GrammarRule::ParamList)),
                (K::RParen, Epsilon),
                (K::Var, Epsilon),
                (K::LBrace, Epsilon),
                (K::Function, Epsilon),
                (K::Main, Epsilon),
                (K::Eof, Epsilon),
            ],
        );
        rows[Decision::ParamListTail as usize] =
            row(Epsilon, &[(K::Comma, Match(K::Comma))]);
        rows[Decision::LocalVars as usize] = row(
            Reject,
            &[
                (K::Var, Descend(GrammarRule::VarDecl)),
                (K::LBrace, Epsilon),
                (K::Function, Epsilon),
                (K::Main, Epsilon),
                (K::Eof, Epsilon),
            ],
        );
        rows[Decision::BlockStatements as usize] = row(
            Reject,
            &[
                (K::Semicolon, Descend(GrammarRule::Statement)),
                (K::RBrace, Epsilon),
                (K::Function, Epsilon),
                (K::Main, Epsilon),
                (K::Eof, Epsilon),
            ],
        );
        rows[Decision::BasicType as usize] = row(
            Reject,
            &[
                (K::NumberType, Match(K::NumberType)),
                (K::BooleanType, Match(K::BooleanType)),
            ],
        );

        DecisionTable { rows }
    }

    /// A copy of this table with one entry replaced.
    #[must_use]
    pub const fn with_action(
        mut self,
        decision: Decision,
        lookahead: TokenKind,
        action: Action,
    ) -> Self {
        self.rows[decision as usize][lookahead.discriminant_index() as usize] = action;
        self
    }

    /// The action for `decision` with `lookahead`.
    #[inline]
    pub fn action(&self, decision: Decision, lookahead: TokenKind) -> Action {
        self.rows[decision as usize][usize::from(lookahead.discriminant_index())]
    }

    /// Tokens that select a non-empty alternative at `decision`.
    pub fn expected(&self, decision: Decision) -> TokenSet {
        let mut set = TokenSet::new();
        for kind in TokenKind::ALL {
            if matches!(
                self.action(decision, kind),
                Action::Descend(_) | Action::Match(_)
            ) {
                set = set.with(kind);
            }
        }
        set
    }

    /// Tokens accepted at `decision` in any way, including leaving.
    pub fn accepted(&self, decision: Decision) -> TokenSet {
        let mut set = TokenSet::new();
        for kind in TokenKind::ALL {
            if self.action(decision, kind) != Action::Reject {
                set = set.with(kind);
            }
        }
        set
    }
}

/// FIRST set of `rule`. Rules that can derive ε are listed in [`nullable`].
pub const fn first(rule: GrammarRule) -> TokenSet {
    use TokenKind as K;
    match rule {
        GrammarRule::Start => TokenSet::single(K::Program),
        GrammarRule::GlobalVars | GrammarRule::VarDecl | GrammarRule::LocalVars => {
            TokenSet::single(K::Var)
        }
        GrammarRule::Type | GrammarRule::BasicType | GrammarRule::ParamList => {
            TokenSet::of(&[K::NumberType, K::BooleanType])
        }
        GrammarRule::TypeDim1 | GrammarRule::TypeDim2 | GrammarRule::DimDecl => {
            TokenSet::single(K::LBracket)
        }
        GrammarRule::Functions | GrammarRule::FunctionDecls => TokenSet::single(K::Function),
        GrammarRule::Block => TokenSet::single(K::LBrace),
        GrammarRule::Statement => TokenSet::single(K::Semicolon),
        GrammarRule::Expression => TokenSet::new(),
        GrammarRule::Main => TokenSet::single(K::Main),
    }
}

/// Whether `rule` can derive the empty string.
pub const fn nullable(rule: GrammarRule) -> bool {
    matches!(
        rule,
        GrammarRule::GlobalVars
            | GrammarRule::Functions
            | GrammarRule::LocalVars
            | GrammarRule::Expression
    )
}

/// FOLLOW set of `rule`; `Eof` stands for the end of input.
pub const fn follow(rule: GrammarRule) -> TokenSet {
    use TokenKind as K;
    match rule {
        GrammarRule::Start | GrammarRule::Main => TokenSet::single(K::Eof),
        GrammarRule::GlobalVars => TokenSet::of(&[K::Function, K::Main]),
        GrammarRule::VarDecl => TokenSet::of(&[K::Var, K::Function, K::Main, K::LBrace]),
        GrammarRule::Type | GrammarRule::TypeDim2 => TokenSet::single(K::Ident),
        GrammarRule::BasicType | GrammarRule::TypeDim1 | GrammarRule::DimDecl => {
            TokenSet::of(&[K::LBracket, K::Ident])
        }
        GrammarRule::Functions => TokenSet::single(K::Main),
        GrammarRule::FunctionDecls => TokenSet::of(&[K::Function, K::Main]),
        GrammarRule::ParamList => TokenSet::single(K::RParen),
        GrammarRule::LocalVars => TokenSet::single(K::LBrace),
        GrammarRule::Block => TokenSet::of(&[K::Function, K::Main, K::Eof]),
        GrammarRule::Statement => TokenSet::of(&[K::Semicolon, K::RBrace]),
        GrammarRule::Expression => TokenSet::single(K::Semicolon),
    }
}

#[cfg(test)]
mod tests;
