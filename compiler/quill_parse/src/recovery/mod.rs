//! Error recovery for the parser.
//!
//! Provides token sets and the per-rule synchronization policy used to
//! continue parsing after errors.

use quill_ir::{GrammarRule, TokenKind};

const _: () = assert!(
    TokenKind::COUNT <= 32,
    "TokenSet uses a u32 bitset; all discriminant indices must be < 32"
);

/// A set of token kinds as a bitset.
///
/// Each bit corresponds to a `TokenKind` discriminant index.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub struct TokenSet(u32);

impl TokenSet {
    /// Create an empty token set.
    #[inline]
    pub const fn new() -> Self {
        Self(0)
    }

    /// Create a token set containing a single token kind.
    #[inline]
    pub const fn single(kind: TokenKind) -> Self {
        Self(1u32 << kind.discriminant_index())
    }

    /// Build a set from a slice of kinds (usable in `const` items).
    pub const fn of(kinds: &[TokenKind]) -> Self {
        let mut bits = 0u32;
        let mut i = 0;
        while i < kinds.len() {
            bits |= 1u32 << kinds[i].discriminant_index();
            i += 1;
        }
        Self(bits)
    }

    /// Add a token kind to this set (builder pattern for const contexts).
    #[inline]
    #[must_use]
    pub const fn with(self, kind: TokenKind) -> Self {
        Self(self.0 | (1u32 << kind.discriminant_index()))
    }

    /// Check if this set contains a token kind.
    #[inline]
    pub const fn contains(&self, kind: TokenKind) -> bool {
        (self.0 & (1u32 << kind.discriminant_index())) != 0
    }

    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.0 == 0
    }

    #[inline]
    pub const fn count(&self) -> u32 {
        self.0.count_ones()
    }

    /// Kinds in this set, in discriminant order.
    pub fn iter(&self) -> impl Iterator<Item = TokenKind> + '_ {
        TokenKind::ALL.into_iter().filter(|kind| self.contains(*kind))
    }

    /// The only kind in the set, if it has exactly one.
    pub fn single_kind(&self) -> Option<TokenKind> {
        if self.count() == 1 {
            self.iter().next()
        } else {
            None
        }
    }

    /// Format this token set as a human-readable list for error messages.
    ///
    /// Returns a string like "`,`, `)`, or `}`" for multiple tokens,
    /// "`(`" for a single token, or "nothing" for the empty set.
    pub fn format_expected(&self) -> String {
        let names: Vec<String> = self.iter().map(TokenKind::display_name).collect();
        match names.as_slice() {
            [] => "nothing".to_string(),
            [single] => single.clone(),
            [first, second] => format!("{first} or {second}"),
            [rest @ .., last] => format!("{}, or {last}", rest.join(", ")),
        }
    }
}

/// Where a recovering rule may resume after an error.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SyncPolicy {
    /// Tokens at which the rule gives up and returns to its caller.
    pub stop: TokenSet,
    /// Token that closes the rule; consumed into the node when reached.
    pub terminator: Option<TokenKind>,
}

const DECL_STARTS: TokenSet = TokenSet::of(&[
    TokenKind::Var,
    TokenKind::Function,
    TokenKind::Main,
    TokenKind::LBrace,
]);

/// Synchronization policy of `rule`, or `None` for sub-phrase rules,
/// which hand their errors to the nearest enclosing rule that has one.
///
/// `Eof` is never a stop token: running out of input while skipping is
/// unrecoverable.
pub const fn sync_policy(rule: GrammarRule) -> Option<SyncPolicy> {
    match rule {
        GrammarRule::VarDecl => Some(SyncPolicy {
            stop: DECL_STARTS,
            terminator: Some(TokenKind::Semicolon),
        }),
        GrammarRule::ParamList => Some(SyncPolicy {
            stop: DECL_STARTS.with(TokenKind::RParen),
            terminator: None,
        }),
        GrammarRule::FunctionDecls => Some(SyncPolicy {
            stop: TokenSet::of(&[TokenKind::Function, TokenKind::Main]),
            terminator: None,
        }),
        GrammarRule::Block => Some(SyncPolicy {
            stop: TokenSet::of(&[TokenKind::Function, TokenKind::Main]),
            terminator: Some(TokenKind::RBrace),
        }),
        GrammarRule::Statement => Some(SyncPolicy {
            stop: TokenSet::single(TokenKind::RBrace),
            terminator: Some(TokenKind::Semicolon),
        }),
        GrammarRule::Start
        | GrammarRule::GlobalVars
        | GrammarRule::Type
        | GrammarRule::BasicType
        | GrammarRule::TypeDim1
        | GrammarRule::TypeDim2
        | GrammarRule::DimDecl
        | GrammarRule::Functions
        | GrammarRule::LocalVars
        | GrammarRule::Expression
        | GrammarRule::Main => None,
    }
}

/// Where `start` resumes after an error in the program header.
pub const HEADER_SYNC: TokenSet = DECL_STARTS;
