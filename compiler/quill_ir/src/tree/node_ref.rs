//! Rule-tagged borrowed view over parse tree nodes.

use super::{
    BasicType, Block, DimDecl, Expression, FunctionDecl, Functions, GlobalVars, LocalVars, Main,
    ParamList, Start, Statement, Terminal, Type, TypeDim1, TypeDim2, VarDecl,
};
use crate::{GrammarRule, Span, Spanned};

/// A borrowed reference to any parse tree node, tagged with its rule.
#[derive(Copy, Clone, Debug)]
pub enum NodeRef<'a> {
    Start(&'a Start),
    GlobalVars(&'a GlobalVars),
    VarDecl(&'a VarDecl),
    Type(&'a Type),
    BasicType(&'a BasicType),
    TypeDim1(&'a TypeDim1),
    TypeDim2(&'a TypeDim2),
    DimDecl(&'a DimDecl),
    Functions(&'a Functions),
    FunctionDecl(&'a FunctionDecl),
    ParamList(&'a ParamList),
    LocalVars(&'a LocalVars),
    Block(&'a Block),
    Statement(&'a Statement),
    Expression(&'a Expression),
    Main(&'a Main),
}

/// One child of a node: a terminal or a sub-node.
#[derive(Copy, Clone, Debug)]
pub enum Element<'a> {
    Terminal(&'a Terminal),
    Node(NodeRef<'a>),
}

impl Element<'_> {
    pub fn span(&self) -> Span {
        match self {
            Element::Terminal(t) => t.span,
            Element::Node(n) => n.span(),
        }
    }
}

impl<'a> NodeRef<'a> {
    /// The rule that produced this node.
    pub fn rule(&self) -> GrammarRule {
        match self {
            NodeRef::Start(_) => GrammarRule::Start,
            NodeRef::GlobalVars(_) => GrammarRule::GlobalVars,
            NodeRef::VarDecl(_) => GrammarRule::VarDecl,
            NodeRef::Type(_) => GrammarRule::Type,
            NodeRef::BasicType(_) => GrammarRule::BasicType,
            NodeRef::TypeDim1(_) => GrammarRule::TypeDim1,
            NodeRef::TypeDim2(_) => GrammarRule::TypeDim2,
            NodeRef::DimDecl(_) => GrammarRule::DimDecl,
            NodeRef::Functions(_) => GrammarRule::Functions,
            NodeRef::FunctionDecl(_) => GrammarRule::FunctionDecls,
            NodeRef::ParamList(_) => GrammarRule::ParamList,
            NodeRef::LocalVars(_) => GrammarRule::LocalVars,
            NodeRef::Block(_) => GrammarRule::Block,
            NodeRef::Statement(_) => GrammarRule::Statement,
            NodeRef::Expression(_) => GrammarRule::Expression,
            NodeRef::Main(_) => GrammarRule::Main,
        }
    }

    pub fn span(&self) -> Span {
        match self {
            NodeRef::Start(n) => n.span(),
            NodeRef::GlobalVars(n) => n.span(),
            NodeRef::VarDecl(n) => n.span(),
            NodeRef::Type(n) => n.span(),
            NodeRef::BasicType(n) => n.span(),
            NodeRef::TypeDim1(n) => n.span(),
            NodeRef::TypeDim2(n) => n.span(),
            NodeRef::DimDecl(n) => n.span(),
            NodeRef::Functions(n) => n.span(),
            NodeRef::FunctionDecl(n) => n.span(),
            NodeRef::ParamList(n) => n.span(),
            NodeRef::LocalVars(n) => n.span(),
            NodeRef::Block(n) => n.span(),
            NodeRef::Statement(n) => n.span(),
            NodeRef::Expression(n) => n.span(),
            NodeRef::Main(n) => n.span(),
        }
    }

    /// Children in production order. Missing terminals are included.
    pub fn children(&self) -> Vec<Element<'a>> {
        use Element::{Node, Terminal as T};
        match *self {
            NodeRef::Start(n) => vec![
                T(&n.program_kw),
                T(&n.name),
                T(&n.colon),
                Node(NodeRef::GlobalVars(&n.global_vars)),
                Node(NodeRef::Functions(&n.functions)),
                Node(NodeRef::Main(&n.main)),
                T(&n.eof),
            ],
            NodeRef::GlobalVars(n) => n.decls.iter().map(|d| Node(NodeRef::VarDecl(d))).collect(),
            NodeRef::LocalVars(n) => n.decls.iter().map(|d| Node(NodeRef::VarDecl(d))).collect(),
            NodeRef::VarDecl(n) => {
                let mut out = vec![T(&n.var_kw), Node(NodeRef::Type(&n.ty))];
                interleave(&mut out, n.names.iter().map(T), n.commas.iter().map(T));
                out.push(T(&n.semicolon));
                out
            }
            NodeRef::Type(n) => {
                let mut out = vec![Node(NodeRef::BasicType(&n.basic))];
                out.extend(n.dim_1.as_ref().map(|d| Node(NodeRef::TypeDim1(d))));
                out.extend(n.dim_2.as_ref().map(|d| Node(NodeRef::TypeDim2(d))));
                out
            }
            NodeRef::BasicType(n) => vec![T(&n.keyword)],
            NodeRef::TypeDim1(n) => vec![Node(NodeRef::DimDecl(&n.dim))],
            NodeRef::TypeDim2(n) => vec![Node(NodeRef::DimDecl(&n.dim))],
            NodeRef::DimDecl(n) => vec![T(&n.lbracket), T(&n.size), T(&n.rbracket)],
            NodeRef::Functions(n) => {
                n.decls.iter().map(|d| Node(NodeRef::FunctionDecl(d))).collect()
            }
            NodeRef::FunctionDecl(n) => {
                let mut out = vec![T(&n.function_kw), T(&n.name), T(&n.lparen)];
                out.extend(n.params.as_ref().map(|p| Node(NodeRef::ParamList(p))));
                out.push(T(&n.rparen));
                out.push(Node(NodeRef::LocalVars(&n.local_vars)));
                out.push(Node(NodeRef::Block(&n.body)));
                out
            }
            NodeRef::ParamList(n) => {
                let mut out = Vec::new();
                let params = n
                    .params
                    .iter()
                    .map(|p| [Node(NodeRef::BasicType(&p.ty)), T(&p.name)]);
                let commas = n.commas.iter().map(T);
                let mut commas = commas.fuse();
                for pair in params {
                    out.extend(pair);
                    out.extend(commas.next());
                }
                out.extend(commas);
                out
            }
            NodeRef::Block(n) => {
                let mut out = vec![T(&n.lbrace)];
                out.extend(n.statements.iter().map(|s| Node(NodeRef::Statement(s))));
                out.push(T(&n.rbrace));
                out
            }
            NodeRef::Statement(n) => {
                vec![Node(NodeRef::Expression(&n.expression)), T(&n.semicolon)]
            }
            NodeRef::Expression(_) => Vec::new(),
            NodeRef::Main(n) => vec![T(&n.main_kw), Node(NodeRef::Block(&n.block))],
        }
    }

    /// Sub-nodes only, in production order.
    pub fn child_nodes(&self) -> Vec<NodeRef<'a>> {
        self.children()
            .into_iter()
            .filter_map(|child| match child {
                Element::Node(node) => Some(node),
                Element::Terminal(_) => None,
            })
            .collect()
    }

    /// Consumed (non-missing) terminals under this node, depth-first.
    pub fn terminals(&self) -> Vec<&'a Terminal> {
        let mut out = Vec::new();
        self.collect_terminals(&mut out);
        out
    }

    pub(super) fn collect_terminals(&self, out: &mut Vec<&'a Terminal>) {
        for child in self.children() {
            match child {
                Element::Terminal(t) if !t.missing => out.push(t),
                Element::Terminal(_) => {}
                Element::Node(node) => node.collect_terminals(out),
            }
        }
    }

    /// Number of nodes in this subtree, including `self`.
    pub fn node_count(&self) -> usize {
        1 + self
            .child_nodes()
            .iter()
            .map(NodeRef::node_count)
            .sum::<usize>()
    }
}

/// Push `a[0], b[0], a[1], b[1], ...`, then whatever is left of either.
fn interleave<'a>(
    out: &mut Vec<Element<'a>>,
    a: impl Iterator<Item = Element<'a>>,
    b: impl Iterator<Item = Element<'a>>,
) {
    let mut b = b.fuse();
    for item in a {
        out.push(item);
        out.extend(b.next());
    }
    out.extend(b);
}
