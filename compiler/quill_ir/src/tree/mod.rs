//! Parse tree for Quill programs.
//!
//! One struct per grammar rule. Each node owns the terminals it matched
//! directly and the nodes of the rules it invoked, in production order,
//! plus the span from its first through last consumed token.
//!
//! Nodes built under error recovery may be incomplete: terminals that were
//! never consumed are flagged with [`Terminal::missing`], optional tails
//! are `None` and repetitions may be shorter than written.

mod node_ref;

pub use node_ref::{Element, NodeRef};

use crate::{Position, Span, Spanned, Token, TokenKind};

/// A terminal matched by a rule.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct Terminal {
    pub kind: TokenKind,
    pub lexeme: String,
    pub span: Span,
    pub position: Position,
    /// Set when no token was consumed for this terminal, either because the
    /// parser inserted it during recovery or because the rule stopped early.
    pub missing: bool,
}

impl Terminal {
    /// A terminal for a consumed token.
    pub fn from_token(token: Token) -> Self {
        Terminal {
            kind: token.kind,
            lexeme: token.lexeme,
            span: token.span,
            position: token.position,
            missing: false,
        }
    }

    /// A terminal inserted in front of `at` without consuming anything.
    pub fn inserted(kind: TokenKind, at: &Token) -> Self {
        Terminal {
            kind,
            lexeme: String::new(),
            span: Span::point(at.span.start),
            position: at.position,
            missing: true,
        }
    }

    /// Placeholder for a terminal the parser has not reached.
    pub fn absent(kind: TokenKind) -> Self {
        Terminal {
            kind,
            lexeme: String::new(),
            span: Span::DUMMY,
            position: Position::START,
            missing: true,
        }
    }

    #[inline]
    pub fn is_missing(&self) -> bool {
        self.missing
    }

    /// The lexeme, or `None` for a missing terminal.
    pub fn text(&self) -> Option<&str> {
        (!self.missing).then_some(self.lexeme.as_str())
    }
}

/// `start := 'program' ID ':' global_vars functions main EOF`
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct Start {
    pub program_kw: Terminal,
    pub name: Terminal,
    pub colon: Terminal,
    pub global_vars: GlobalVars,
    pub functions: Functions,
    pub main: Main,
    pub eof: Terminal,
    pub span: Span,
}

impl Default for Start {
    fn default() -> Self {
        Start {
            program_kw: Terminal::absent(TokenKind::Program),
            name: Terminal::absent(TokenKind::Ident),
            colon: Terminal::absent(TokenKind::Colon),
            global_vars: GlobalVars::default(),
            functions: Functions::default(),
            main: Main::default(),
            eof: Terminal::absent(TokenKind::Eof),
            span: Span::DUMMY,
        }
    }
}

/// `global_vars := var_decl*`
#[derive(Clone, Eq, PartialEq, Hash, Debug, Default)]
pub struct GlobalVars {
    /// Declarations in source order.
    pub decls: Vec<VarDecl>,
    pub span: Span,
}

/// `var_decl := 'var' type ID (',' ID)* ';'`
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct VarDecl {
    pub var_kw: Terminal,
    pub ty: Type,
    /// Declared identifiers in source order.
    pub names: Vec<Terminal>,
    /// Separators; `commas[i]` follows `names[i]`.
    pub commas: Vec<Terminal>,
    pub semicolon: Terminal,
    pub span: Span,
}

impl Default for VarDecl {
    fn default() -> Self {
        VarDecl {
            var_kw: Terminal::absent(TokenKind::Var),
            ty: Type::default(),
            names: Vec::new(),
            commas: Vec::new(),
            semicolon: Terminal::absent(TokenKind::Semicolon),
            span: Span::DUMMY,
        }
    }
}

impl VarDecl {
    /// Names of the declared identifiers that were actually written.
    pub fn name_lexemes(&self) -> Vec<&str> {
        self.names.iter().filter_map(Terminal::text).collect()
    }
}

/// `type := basic_type type_dim_1? type_dim_2?`
#[derive(Clone, Eq, PartialEq, Hash, Debug, Default)]
pub struct Type {
    pub basic: BasicType,
    pub dim_1: Option<TypeDim1>,
    pub dim_2: Option<TypeDim2>,
    pub span: Span,
}

impl Type {
    /// Declared dimension sizes, outermost first, as written.
    pub fn dimensions(&self) -> Vec<&str> {
        [
            self.dim_1.as_ref().map(|d| &d.dim),
            self.dim_2.as_ref().map(|d| &d.dim),
        ]
        .into_iter()
        .flatten()
        .filter_map(|d| d.size.text())
        .collect()
    }
}

/// `basic_type := 'number' | 'boolean'`
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct BasicType {
    pub keyword: Terminal,
    pub span: Span,
}

impl Default for BasicType {
    fn default() -> Self {
        BasicType {
            keyword: Terminal::absent(TokenKind::NumberType),
            span: Span::DUMMY,
        }
    }
}

/// `type_dim_1 := dim_decl`
#[derive(Clone, Eq, PartialEq, Hash, Debug, Default)]
pub struct TypeDim1 {
    pub dim: DimDecl,
    pub span: Span,
}

/// `type_dim_2 := dim_decl`
#[derive(Clone, Eq, PartialEq, Hash, Debug, Default)]
pub struct TypeDim2 {
    pub dim: DimDecl,
    pub span: Span,
}

/// `dim_decl := '[' NUM_CTE ']'`
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct DimDecl {
    pub lbracket: Terminal,
    pub size: Terminal,
    pub rbracket: Terminal,
    pub span: Span,
}

impl Default for DimDecl {
    fn default() -> Self {
        DimDecl {
            lbracket: Terminal::absent(TokenKind::LBracket),
            size: Terminal::absent(TokenKind::Int),
            rbracket: Terminal::absent(TokenKind::RBracket),
            span: Span::DUMMY,
        }
    }
}

/// `functions := function_decls*`
#[derive(Clone, Eq, PartialEq, Hash, Debug, Default)]
pub struct Functions {
    pub decls: Vec<FunctionDecl>,
    pub span: Span,
}

/// `function_decls := 'function' ID '(' param_list? ')' local_vars block`
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct FunctionDecl {
    pub function_kw: Terminal,
    pub name: Terminal,
    pub lparen: Terminal,
    pub params: Option<ParamList>,
    pub rparen: Terminal,
    pub local_vars: LocalVars,
    pub body: Block,
    pub span: Span,
}

impl Default for FunctionDecl {
    fn default() -> Self {
        FunctionDecl {
            function_kw: Terminal::absent(TokenKind::Function),
            name: Terminal::absent(TokenKind::Ident),
            lparen: Terminal::absent(TokenKind::LParen),
            params: None,
            rparen: Terminal::absent(TokenKind::RParen),
            local_vars: LocalVars::default(),
            body: Block::default(),
            span: Span::DUMMY,
        }
    }
}

impl FunctionDecl {
    /// The parameters, or an empty slice when the list was omitted.
    pub fn param_slice(&self) -> &[Param] {
        self.params.as_ref().map_or(&[], |list| list.params.as_slice())
    }
}

/// One `basic_type ID` pair of a parameter list.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct Param {
    pub ty: BasicType,
    pub name: Terminal,
}

impl Default for Param {
    fn default() -> Self {
        Param {
            ty: BasicType::default(),
            name: Terminal::absent(TokenKind::Ident),
        }
    }
}

/// `param_list := basic_type ID (',' basic_type ID)*`
#[derive(Clone, Eq, PartialEq, Hash, Debug, Default)]
pub struct ParamList {
    pub params: Vec<Param>,
    /// Separators; `commas[i]` follows `params[i]`.
    pub commas: Vec<Terminal>,
    pub span: Span,
}

/// `local_vars := var_decl*`
#[derive(Clone, Eq, PartialEq, Hash, Debug, Default)]
pub struct LocalVars {
    pub decls: Vec<VarDecl>,
    pub span: Span,
}

/// `block := '{' statement* '}'`
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct Block {
    pub lbrace: Terminal,
    pub statements: Vec<Statement>,
    pub rbrace: Terminal,
    pub span: Span,
}

impl Default for Block {
    fn default() -> Self {
        Block {
            lbrace: Terminal::absent(TokenKind::LBrace),
            statements: Vec::new(),
            rbrace: Terminal::absent(TokenKind::RBrace),
            span: Span::DUMMY,
        }
    }
}

/// `statement := expression ';'`
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct Statement {
    pub expression: Expression,
    pub semicolon: Terminal,
    pub span: Span,
}

impl Default for Statement {
    fn default() -> Self {
        Statement {
            expression: Expression::default(),
            semicolon: Terminal::absent(TokenKind::Semicolon),
            span: Span::DUMMY,
        }
    }
}

/// `expression := ε`
///
/// The grammar defines no expression syntax, so this node never holds
/// anything beyond the (empty) point where it was recognised.
#[derive(Clone, Eq, PartialEq, Hash, Debug, Default)]
pub struct Expression {
    pub span: Span,
}

/// `main := 'main' block`
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct Main {
    pub main_kw: Terminal,
    pub block: Block,
    pub span: Span,
}

impl Default for Main {
    fn default() -> Self {
        Main {
            main_kw: Terminal::absent(TokenKind::Main),
            block: Block::default(),
            span: Span::DUMMY,
        }
    }
}

impl Start {
    /// Borrowed, rule-tagged view of the root.
    pub fn as_node(&self) -> NodeRef<'_> {
        NodeRef::Start(self)
    }

    /// Every consumed terminal, depth-first in source order.
    ///
    /// Missing terminals are left out, so for an input parsed without
    /// skipping this is exactly the token stream.
    pub fn terminals(&self) -> Vec<&Terminal> {
        let mut out = Vec::new();
        self.as_node().collect_terminals(&mut out);
        out
    }
}

macro_rules! impl_spanned {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Spanned for $ty {
                #[inline]
                fn span(&self) -> Span {
                    self.span
                }
            }
        )*
    };
}

impl_spanned!(
    Start,
    GlobalVars,
    VarDecl,
    Type,
    BasicType,
    TypeDim1,
    TypeDim2,
    DimDecl,
    Functions,
    FunctionDecl,
    ParamList,
    LocalVars,
    Block,
    Statement,
    Expression,
    Main,
    Terminal,
);
