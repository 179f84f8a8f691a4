//! Parse tree visitor.
//!
//! Default `visit_*` methods call the matching `walk_*` function, which
//! visits children in production order. Override a `visit_*` method to act
//! on a node and call `walk_*` from it to keep descending.
//!
//! # Example
//!
//! ```
//! use quill_ir::visitor::{walk_var_decl, Visitor};
//! use quill_ir::VarDecl;
//!
//! struct CountNames(usize);
//!
//! impl<'ast> Visitor<'ast> for CountNames {
//!     fn visit_var_decl(&mut self, decl: &'ast VarDecl) {
//!         self.0 += decl.name_lexemes().len();
//!         walk_var_decl(self, decl);
//!     }
//! }
//! ```

use crate::tree::{
    BasicType, Block, DimDecl, Expression, FunctionDecl, Functions, GlobalVars, LocalVars, Main,
    ParamList, Start, Statement, Terminal, Type, VarDecl,
};

/// Parse tree visitor. The tree itself is never mutated.
pub trait Visitor<'ast> {
    fn visit_start(&mut self, start: &'ast Start) {
        walk_start(self, start);
    }

    fn visit_global_vars(&mut self, vars: &'ast GlobalVars) {
        walk_global_vars(self, vars);
    }

    fn visit_local_vars(&mut self, vars: &'ast LocalVars) {
        walk_local_vars(self, vars);
    }

    fn visit_var_decl(&mut self, decl: &'ast VarDecl) {
        walk_var_decl(self, decl);
    }

    fn visit_type(&mut self, ty: &'ast Type) {
        walk_type(self, ty);
    }

    fn visit_basic_type(&mut self, ty: &'ast BasicType) {
        self.visit_terminal(&ty.keyword);
    }

    /// Visits both `type_dim_1` and `type_dim_2` dimensions.
    fn visit_dim_decl(&mut self, dim: &'ast DimDecl) {
        walk_dim_decl(self, dim);
    }

    fn visit_functions(&mut self, functions: &'ast Functions) {
        walk_functions(self, functions);
    }

    fn visit_function_decl(&mut self, decl: &'ast FunctionDecl) {
        walk_function_decl(self, decl);
    }

    fn visit_param_list(&mut self, params: &'ast ParamList) {
        walk_param_list(self, params);
    }

    fn visit_block(&mut self, block: &'ast Block) {
        walk_block(self, block);
    }

    fn visit_statement(&mut self, statement: &'ast Statement) {
        walk_statement(self, statement);
    }

    fn visit_expression(&mut self, _expression: &'ast Expression) {}

    fn visit_main(&mut self, main: &'ast Main) {
        walk_main(self, main);
    }

    /// Called for every terminal, including missing ones.
    fn visit_terminal(&mut self, _terminal: &'ast Terminal) {}
}

pub fn walk_start<'ast, V: Visitor<'ast> + ?Sized>(visitor: &mut V, start: &'ast Start) {
    visitor.visit_terminal(&start.program_kw);
    visitor.visit_terminal(&start.name);
    visitor.visit_terminal(&start.colon);
    visitor.visit_global_vars(&start.global_vars);
    visitor.visit_functions(&start.functions);
    visitor.visit_main(&start.main);
    visitor.visit_terminal(&start.eof);
}

pub fn walk_global_vars<'ast, V: Visitor<'ast> + ?Sized>(visitor: &mut V, vars: &'ast GlobalVars) {
    for decl in &vars.decls {
        visitor.visit_var_decl(decl);
    }
}

pub fn walk_local_vars<'ast, V: Visitor<'ast> + ?Sized>(visitor: &mut V, vars: &'ast LocalVars) {
    for decl in &vars.decls {
        visitor.visit_var_decl(decl);
    }
}

pub fn walk_var_decl<'ast, V: Visitor<'ast> + ?Sized>(visitor: &mut V, decl: &'ast VarDecl) {
    visitor.visit_terminal(&decl.var_kw);
    visitor.visit_type(&decl.ty);
    for (i, name) in decl.names.iter().enumerate() {
        visitor.visit_terminal(name);
        if let Some(comma) = decl.commas.get(i) {
            visitor.visit_terminal(comma);
        }
    }
    visitor.visit_terminal(&decl.semicolon);
}

pub fn walk_type<'ast, V: Visitor<'ast> + ?Sized>(visitor: &mut V, ty: &'ast Type) {
    visitor.visit_basic_type(&ty.basic);
    if let Some(dim) = &ty.dim_1 {
        visitor.visit_dim_decl(&dim.dim);
    }
    if let Some(dim) = &ty.dim_2 {
        visitor.visit_dim_decl(&dim.dim);
    }
}

pub fn walk_dim_decl<'ast, V: Visitor<'ast> + ?Sized>(visitor: &mut V, dim: &'ast DimDecl) {
    visitor.visit_terminal(&dim.lbracket);
    visitor.visit_terminal(&dim.size);
    visitor.visit_terminal(&dim.rbracket);
}

pub fn walk_functions<'ast, V: Visitor<'ast> + ?Sized>(
    visitor: &mut V,
    functions: &'ast Functions,
) {
    for decl in &functions.decls {
        visitor.visit_function_decl(decl);
    }
}

pub fn walk_function_decl<'ast, V: Visitor<'ast> + ?Sized>(
    visitor: &mut V,
    decl: &'ast FunctionDecl,
) {
    visitor.visit_terminal(&decl.function_kw);
    visitor.visit_terminal(&decl.name);
    visitor.visit_terminal(&decl.lparen);
    if let Some(params) = &decl.params {
        visitor.visit_param_list(params);
    }
    visitor.visit_terminal(&decl.rparen);
    visitor.visit_local_vars(&decl.local_vars);
    visitor.visit_block(&decl.body);
}

pub fn walk_param_list<'ast, V: Visitor<'ast> + ?Sized>(visitor: &mut V, params: &'ast ParamList) {
    for (i, param) in params.params.iter().enumerate() {
        visitor.visit_basic_type(&param.ty);
        visitor.visit_terminal(&param.name);
        if let Some(comma) = params.commas.get(i) {
            visitor.visit_terminal(comma);
        }
    }
}

pub fn walk_block<'ast, V: Visitor<'ast> + ?Sized>(visitor: &mut V, block: &'ast Block) {
    visitor.visit_terminal(&block.lbrace);
    for statement in &block.statements {
        visitor.visit_statement(statement);
    }
    visitor.visit_terminal(&block.rbrace);
}

pub fn walk_statement<'ast, V: Visitor<'ast> + ?Sized>(
    visitor: &mut V,
    statement: &'ast Statement,
) {
    visitor.visit_expression(&statement.expression);
    visitor.visit_terminal(&statement.semicolon);
}

pub fn walk_main<'ast, V: Visitor<'ast> + ?Sized>(visitor: &mut V, main: &'ast Main) {
    visitor.visit_terminal(&main.main_kw);
    visitor.visit_block(&main.block);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Span, TokenKind};

    #[derive(Default)]
    struct Collect {
        kinds: Vec<TokenKind>,
        blocks: usize,
    }

    impl<'ast> Visitor<'ast> for Collect {
        fn visit_block(&mut self, block: &'ast Block) {
            self.blocks += 1;
            walk_block(self, block);
        }

        fn visit_terminal(&mut self, terminal: &'ast Terminal) {
            if !terminal.missing {
                self.kinds.push(terminal.kind);
            }
        }
    }

    fn present(kind: TokenKind, at: u32) -> Terminal {
        Terminal {
            kind,
            lexeme: kind.to_string(),
            span: Span::new(at, at + 1),
            position: crate::Position::new(1, at + 1),
            missing: false,
        }
    }

    #[test]
    fn visits_terminals_in_source_order() {
        let mut start = Start::default();
        start.program_kw = present(TokenKind::Program, 0);
        start.main.main_kw = present(TokenKind::Main, 1);
        start.main.block.lbrace = present(TokenKind::LBrace, 2);
        start.main.block.statements.push(Statement {
            semicolon: present(TokenKind::Semicolon, 3),
            ..Statement::default()
        });
        start.main.block.rbrace = present(TokenKind::RBrace, 4);

        let mut v = Collect::default();
        v.visit_start(&start);
        assert_eq!(
            v.kinds,
            vec![
                TokenKind::Program,
                TokenKind::Main,
                TokenKind::LBrace,
                TokenKind::Semicolon,
                TokenKind::RBrace,
            ]
        );
        assert_eq!(v.blocks, 1);
    }
}
