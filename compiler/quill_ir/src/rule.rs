//! The grammar's productions, as a static enumeration.

use std::fmt;

/// Identifies one production of the Quill grammar.
///
/// Used to tag parse tree nodes, to dispatch in the parser, and to name
/// the construct being parsed in diagnostics.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum GrammarRule {
    Start,
    GlobalVars,
    VarDecl,
    Type,
    BasicType,
    TypeDim1,
    TypeDim2,
    DimDecl,
    Functions,
    FunctionDecls,
    ParamList,
    LocalVars,
    Block,
    Statement,
    Expression,
    Main,
}

impl GrammarRule {
    pub const COUNT: usize = 16;

    /// Every rule, in grammar order.
    pub const ALL: [GrammarRule; Self::COUNT] = [
        GrammarRule::Start,
        GrammarRule::GlobalVars,
        GrammarRule::VarDecl,
        GrammarRule::Type,
        GrammarRule::BasicType,
        GrammarRule::TypeDim1,
        GrammarRule::TypeDim2,
        GrammarRule::DimDecl,
        GrammarRule::Functions,
        GrammarRule::FunctionDecls,
        GrammarRule::ParamList,
        GrammarRule::LocalVars,
        GrammarRule::Block,
        GrammarRule::Statement,
        GrammarRule::Expression,
        GrammarRule::Main,
    ];

    /// The rule's name as written in the grammar.
    pub const fn name(self) -> &'static str {
        match self {
            GrammarRule::Start => "start",
            GrammarRule::GlobalVars => "global_vars",
            GrammarRule::VarDecl => "var_decl",
            GrammarRule::Type => "type",
            GrammarRule::BasicType => "basic_type",
            GrammarRule::TypeDim1 => "type_dim_1",
            GrammarRule::TypeDim2 => "type_dim_2",
            GrammarRule::DimDecl => "dim_decl",
            GrammarRule::Functions => "functions",
            GrammarRule::FunctionDecls => "function_decls",
            GrammarRule::ParamList => "param_list",
            GrammarRule::LocalVars => "local_vars",
            GrammarRule::Block => "block",
            GrammarRule::Statement => "statement",
            GrammarRule::Expression => "expression",
            GrammarRule::Main => "main",
        }
    }

    /// Phrase for "while parsing ..." notes.
    pub const fn description(self) -> &'static str {
        match self {
            GrammarRule::Start => "a program",
            GrammarRule::GlobalVars => "global variable declarations",
            GrammarRule::VarDecl => "a variable declaration",
            GrammarRule::Type => "a type",
            GrammarRule::BasicType => "a basic type",
            GrammarRule::TypeDim1 => "the first array dimension",
            GrammarRule::TypeDim2 => "the second array dimension",
            GrammarRule::DimDecl => "an array dimension",
            GrammarRule::Functions => "function declarations",
            GrammarRule::FunctionDecls => "a function declaration",
            GrammarRule::ParamList => "a parameter list",
            GrammarRule::LocalVars => "local variable declarations",
            GrammarRule::Block => "a block",
            GrammarRule::Statement => "a statement",
            GrammarRule::Expression => "an expression",
            GrammarRule::Main => "the main block",
        }
    }
}

impl fmt::Display for GrammarRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
