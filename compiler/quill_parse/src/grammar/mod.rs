//! Grammar Modules
//!
//! Each module extends `Parser` with one method per grammar rule:
//!
//! - [`program`]: `start`, `main`
//! - [`decls`]: `global_vars`, `local_vars`, `var_decl`, `type` and its parts
//! - [`functions`]: `functions`, `function_decls`, `param_list`
//! - [`blocks`]: `block`, `statement`, `expression`
//!
//! A rule method has the shape `fn rule(&mut self, node: &mut Node) -> Step`:
//! it fills the node in place, so whatever was parsed before a failure
//! stays in the tree. Methods run their body through `Parser::rule`, which
//! sets the span and applies the rule's synchronization policy.

mod blocks;
mod decls;
mod functions;
mod program;

use quill_ir::{
    BasicType, Block, DimDecl, Expression, FunctionDecl, Functions, GlobalVars, LocalVars, Main,
    ParamList, Span, Start, Statement, Terminal, Type, TypeDim1, TypeDim2, VarDecl,
};

/// A parse tree node a rule method fills in.
pub(crate) trait RuleNode {
    fn span_mut(&mut self) -> &mut Span;

    /// Store the terminator consumed while synchronizing.
    fn close(&mut self, _terminator: Terminal) {}
}

macro_rules! rule_node {
    ($($ty:ty),* $(,)?) => {
        $(
            impl RuleNode for $ty {
                fn span_mut(&mut self) -> &mut Span {
                    &mut self.span
                }
            }
        )*
    };
}

rule_node!(
    Start,
    GlobalVars,
    Type,
    BasicType,
    TypeDim1,
    TypeDim2,
    DimDecl,
    Functions,
    FunctionDecl,
    ParamList,
    LocalVars,
    Expression,
    Main,
);

impl RuleNode for VarDecl {
    fn span_mut(&mut self) -> &mut Span {
        &mut self.span
    }

    fn close(&mut self, terminator: Terminal) {
        self.semicolon = terminator;
    }
}

impl RuleNode for Block {
    fn span_mut(&mut self) -> &mut Span {
        &mut self.span
    }

    fn close(&mut self, terminator: Terminal) {
        self.rbrace = terminator;
    }
}

impl RuleNode for Statement {
    fn span_mut(&mut self) -> &mut Span {
        &mut self.span
    }

    fn close(&mut self, terminator: Terminal) {
        self.semicolon = terminator;
    }
}
