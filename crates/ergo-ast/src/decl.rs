//! Declaration AST nodes: closures, clauses, functions, and contracts.

use ergo_core::Span;

use crate::expr::Expr;

/// A declared type, kept as written.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TypeExpr<'ast> {
    pub text: &'ast str,
}

impl<'ast> TypeExpr<'ast> {
    pub fn new(text: &'ast str) -> Self {
        Self { text }
    }
}

/// A formal parameter.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Param<'ast> {
    /// Parameter name
    pub name: &'ast str,
    /// Declared type, if any
    pub ty: Option<TypeExpr<'ast>>,
}

/// Parameters, declared types and body of a callable unit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Closure<'ast> {
    /// Formal parameters in declaration order
    pub params: &'ast [Param<'ast>],
    /// Declared output type
    pub output: Option<TypeExpr<'ast>>,
    /// Declared throw type
    pub throws: Option<TypeExpr<'ast>>,
    /// Body
    pub body: &'ast Expr<'ast>,
    /// Source location
    pub span: Span,
}

/// A named function.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Function<'ast> {
    pub name: &'ast str,
    pub closure: Closure<'ast>,
}

/// A contract clause. Clause bodies additionally see `this` and `now`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Clause<'ast> {
    pub name: &'ast str,
    pub closure: Closure<'ast>,
}

/// A declaration inside a contract.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Declaration<'ast> {
    Clause(&'ast Clause<'ast>),
    Function(&'ast Function<'ast>),
}

impl<'ast> Declaration<'ast> {
    /// Name of the declared clause or function.
    pub fn name(&self) -> &'ast str {
        match self {
            Declaration::Clause(clause) => clause.name,
            Declaration::Function(function) => function.name,
        }
    }

    /// The declared closure.
    pub fn closure(&self) -> &Closure<'ast> {
        match self {
            Declaration::Clause(clause) => &clause.closure,
            Declaration::Function(function) => &function.closure,
        }
    }
}

/// A contract: a template plus its clauses and helper functions.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Contract<'ast> {
    /// Contract name
    pub name: &'ast str,
    /// Template type, passed through untouched
    pub template: TypeExpr<'ast>,
    /// Declarations in source order
    pub declarations: &'ast [Declaration<'ast>],
    /// Source location
    pub span: Span,
}
