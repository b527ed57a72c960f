//! Top-level statements and packages.

use ergo_core::Span;

use crate::decl::{Contract, Function};
use crate::expr::Expr;

/// A top-level statement.
#[derive(Debug, Clone, PartialEq)]
pub enum Statement<'ast> {
    /// A bare expression
    Expr(Expr<'ast>),
    /// `define variable name = value`
    Global(&'ast GlobalStmt<'ast>),
    /// `import name`
    Import(ImportStmt<'ast>),
    /// `define function ...`
    Function(&'ast Function<'ast>),
    /// `contract ...`
    Contract(&'ast Contract<'ast>),
}

/// A global binding.
#[derive(Debug, Clone, PartialEq)]
pub struct GlobalStmt<'ast> {
    pub name: &'ast str,
    pub value: Expr<'ast>,
    pub span: Span,
}

/// An import marker.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ImportStmt<'ast> {
    pub name: &'ast str,
    pub span: Span,
}

/// A package: the unit of translation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Package<'ast> {
    /// Package name; unqualified class references resolve against it
    pub name: &'ast str,
    /// Statements in source order
    pub statements: &'ast [Statement<'ast>],
}

impl<'ast> Package<'ast> {
    pub fn statements(&self) -> &'ast [Statement<'ast>] {
        self.statements
    }
}
