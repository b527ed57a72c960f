//! Expression AST nodes for the Ergo surface language.
//!
//! Nodes are allocated in a `bumpalo` arena and borrowed for `'ast`. Compound
//! expressions hold references to their children, so [`Expr`] itself stays
//! small and cheap to clone.

use ergo_core::{BinaryOp, Data, Span, UnaryOp};

/// An expression.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr<'ast> {
    /// Variable reference
    Var(VarExpr<'ast>),
    /// Literal constant
    Literal(LiteralExpr),
    /// Array literal
    Array(ArrayExpr<'ast>),
    /// Unary operator application
    Unary(&'ast UnaryExpr<'ast>),
    /// Binary operator application
    Binary(&'ast BinaryExpr<'ast>),
    /// `if c then t else f`
    If(&'ast IfExpr<'ast>),
    /// Guarded conditional; the condition is negated and the branches swapped
    /// relative to `If`
    Guard(&'ast GuardExpr<'ast>),
    /// `let v = e1; e2`
    Let(&'ast LetExpr<'ast>),
    /// Object construction
    New(&'ast NewExpr<'ast>),
    /// Exception construction, shaped exactly like `New`
    Throw(&'ast NewExpr<'ast>),
    /// Function call by name
    Call(&'ast CallExpr<'ast>),
}

impl<'ast> Expr<'ast> {
    /// Get the span of this expression.
    pub fn span(&self) -> Span {
        match self {
            Self::Var(e) => e.span,
            Self::Literal(e) => e.span,
            Self::Array(e) => e.span,
            Self::Unary(e) => e.span,
            Self::Binary(e) => e.span,
            Self::If(e) => e.span,
            Self::Guard(e) => e.span,
            Self::Let(e) => e.span,
            Self::New(e) => e.span,
            Self::Throw(e) => e.span,
            Self::Call(e) => e.span,
        }
    }
}

/// A variable reference.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VarExpr<'ast> {
    /// Variable name
    pub name: &'ast str,
    /// Source location
    pub span: Span,
}

/// A literal constant.
#[derive(Debug, Clone, PartialEq)]
pub struct LiteralExpr {
    /// The literal value
    pub value: Data,
    /// Source location
    pub span: Span,
}

/// An array literal.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArrayExpr<'ast> {
    /// Elements in source order
    pub elements: &'ast [Expr<'ast>],
    /// Source location
    pub span: Span,
}

/// A unary operator application.
#[derive(Debug, Clone, PartialEq)]
pub struct UnaryExpr<'ast> {
    /// Operator
    pub op: UnaryOp,
    /// Operand
    pub operand: &'ast Expr<'ast>,
    /// Source location
    pub span: Span,
}

/// A binary operator application.
#[derive(Debug, Clone, PartialEq)]
pub struct BinaryExpr<'ast> {
    /// Left operand
    pub left: &'ast Expr<'ast>,
    /// Operator
    pub op: BinaryOp,
    /// Right operand
    pub right: &'ast Expr<'ast>,
    /// Source location
    pub span: Span,
}

/// `if condition then then_expr else else_expr`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IfExpr<'ast> {
    pub condition: &'ast Expr<'ast>,
    pub then_expr: &'ast Expr<'ast>,
    pub else_expr: &'ast Expr<'ast>,
    pub span: Span,
}

/// `guard(condition, then_expr, else_expr)`
///
/// Sugar for `if !condition then else_expr else then_expr`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GuardExpr<'ast> {
    pub condition: &'ast Expr<'ast>,
    pub then_expr: &'ast Expr<'ast>,
    pub else_expr: &'ast Expr<'ast>,
    pub span: Span,
}

/// A lexical let-binding.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LetExpr<'ast> {
    /// Bound name
    pub name: &'ast str,
    /// Bound expression
    pub value: &'ast Expr<'ast>,
    /// Body in which `name` is bound
    pub body: &'ast Expr<'ast>,
    /// Source location
    pub span: Span,
}

/// Reference to a class, optionally qualified by its package.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ClassRef<'ast> {
    /// Explicit package, if any
    pub package: Option<&'ast str>,
    /// Class name
    pub name: &'ast str,
}

impl<'ast> ClassRef<'ast> {
    /// An unqualified class reference.
    pub fn local(name: &'ast str) -> Self {
        Self {
            package: None,
            name,
        }
    }

    /// A class reference qualified with `package`.
    pub fn qualified(package: &'ast str, name: &'ast str) -> Self {
        Self {
            package: Some(package),
            name,
        }
    }
}

/// One `field: value` initializer of a construction.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldInit<'ast> {
    pub name: &'ast str,
    pub value: Expr<'ast>,
}

/// Object or exception construction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NewExpr<'ast> {
    /// Class being constructed
    pub class: ClassRef<'ast>,
    /// Field initializers in source order
    pub fields: &'ast [FieldInit<'ast>],
    /// Source location
    pub span: Span,
}

/// A call to a named function or operator.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CallExpr<'ast> {
    /// Callee name
    pub name: &'ast str,
    /// Arguments
    pub args: &'ast [Expr<'ast>],
    /// Source location
    pub span: Span,
}
