//! Arena-backed construction of surface syntax.
//!
//! [`AstBuilder`] is what a front end (or a test) uses to allocate nodes in a
//! `Bump` arena without spelling out every struct literal. Every node built
//! through one builder gets that builder's span; use [`AstBuilder::at`] to
//! build nodes at a specific location.
//!
//! # Example
//!
//! ```
//! use bumpalo::Bump;
//! use ergo_ast::{AstBuilder, Expr};
//!
//! let arena = Bump::new();
//! let b = AstBuilder::new(&arena);
//!
//! let expr = b.let_("x", b.nat(1), b.call("max", vec![b.var("x")]));
//! assert!(matches!(expr, Expr::Let(_)));
//! ```

use bumpalo::Bump;
use ergo_core::{BinaryOp, Data, Span, UnaryOp};

use crate::decl::{Clause, Closure, Contract, Declaration, Function, Param, TypeExpr};
use crate::expr::{
    ArrayExpr, BinaryExpr, CallExpr, ClassRef, Expr, FieldInit, GuardExpr, IfExpr, LetExpr,
    LiteralExpr, NewExpr, UnaryExpr, VarExpr,
};
use crate::stmt::{GlobalStmt, ImportStmt, Package, Statement};

/// Allocates surface nodes in an arena.
#[derive(Clone, Copy)]
pub struct AstBuilder<'ast> {
    arena: &'ast Bump,
    span: Span,
}

impl<'ast> AstBuilder<'ast> {
    pub fn new(arena: &'ast Bump) -> Self {
        Self {
            arena,
            span: Span::default(),
        }
    }

    /// A builder whose nodes are located at `span`.
    pub fn at(self, span: Span) -> Self {
        Self { span, ..self }
    }

    pub fn arena(&self) -> &'ast Bump {
        self.arena
    }

    fn str(&self, s: &str) -> &'ast str {
        self.arena.alloc_str(s)
    }

    fn slice<T>(&self, items: Vec<T>) -> &'ast [T] {
        self.arena.alloc_slice_fill_iter(items)
    }

    fn expr(&self, expr: Expr<'ast>) -> &'ast Expr<'ast> {
        self.arena.alloc(expr)
    }

    // ==========================================================================
    // Expressions
    // ==========================================================================

    pub fn var(&self, name: &str) -> Expr<'ast> {
        Expr::Var(VarExpr {
            name: self.str(name),
            span: self.span,
        })
    }

    pub fn lit(&self, value: Data) -> Expr<'ast> {
        Expr::Literal(LiteralExpr {
            value,
            span: self.span,
        })
    }

    pub fn nat(&self, n: i64) -> Expr<'ast> {
        self.lit(Data::Nat(n))
    }

    pub fn bool(&self, b: bool) -> Expr<'ast> {
        self.lit(Data::Bool(b))
    }

    pub fn string(&self, s: &str) -> Expr<'ast> {
        self.lit(Data::string(s))
    }

    pub fn array(&self, elements: Vec<Expr<'ast>>) -> Expr<'ast> {
        Expr::Array(ArrayExpr {
            elements: self.slice(elements),
            span: self.span,
        })
    }

    pub fn unary(&self, op: UnaryOp, operand: Expr<'ast>) -> Expr<'ast> {
        Expr::Unary(self.arena.alloc(UnaryExpr {
            op,
            operand: self.expr(operand),
            span: self.span,
        }))
    }

    pub fn not(&self, operand: Expr<'ast>) -> Expr<'ast> {
        self.unary(UnaryOp::Not, operand)
    }

    pub fn binary(&self, op: BinaryOp, left: Expr<'ast>, right: Expr<'ast>) -> Expr<'ast> {
        Expr::Binary(self.arena.alloc(BinaryExpr {
            left: self.expr(left),
            op,
            right: self.expr(right),
            span: self.span,
        }))
    }

    pub fn if_(
        &self,
        condition: Expr<'ast>,
        then_expr: Expr<'ast>,
        else_expr: Expr<'ast>,
    ) -> Expr<'ast> {
        Expr::If(self.arena.alloc(IfExpr {
            condition: self.expr(condition),
            then_expr: self.expr(then_expr),
            else_expr: self.expr(else_expr),
            span: self.span,
        }))
    }

    pub fn guard(
        &self,
        condition: Expr<'ast>,
        then_expr: Expr<'ast>,
        else_expr: Expr<'ast>,
    ) -> Expr<'ast> {
        Expr::Guard(self.arena.alloc(GuardExpr {
            condition: self.expr(condition),
            then_expr: self.expr(then_expr),
            else_expr: self.expr(else_expr),
            span: self.span,
        }))
    }

    pub fn let_(&self, name: &str, value: Expr<'ast>, body: Expr<'ast>) -> Expr<'ast> {
        Expr::Let(self.arena.alloc(LetExpr {
            name: self.str(name),
            value: self.expr(value),
            body: self.expr(body),
            span: self.span,
        }))
    }

    /// An unqualified class reference.
    pub fn class(&self, name: &str) -> ClassRef<'ast> {
        ClassRef::local(self.str(name))
    }

    /// A class reference with an explicit package.
    pub fn qualified_class(&self, package: &str, name: &str) -> ClassRef<'ast> {
        ClassRef::qualified(self.str(package), self.str(name))
    }

    fn construction(&self, class: ClassRef<'ast>, fields: Vec<(&str, Expr<'ast>)>) -> &'ast NewExpr<'ast> {
        let fields = fields
            .into_iter()
            .map(|(name, value)| FieldInit {
                name: self.str(name),
                value,
            })
            .collect();
        self.arena.alloc(NewExpr {
            class,
            fields: self.slice(fields),
            span: self.span,
        })
    }

    pub fn new_(&self, class: ClassRef<'ast>, fields: Vec<(&str, Expr<'ast>)>) -> Expr<'ast> {
        Expr::New(self.construction(class, fields))
    }

    pub fn throw(&self, class: ClassRef<'ast>, fields: Vec<(&str, Expr<'ast>)>) -> Expr<'ast> {
        Expr::Throw(self.construction(class, fields))
    }

    pub fn call(&self, name: &str, args: Vec<Expr<'ast>>) -> Expr<'ast> {
        Expr::Call(self.arena.alloc(CallExpr {
            name: self.str(name),
            args: self.slice(args),
            span: self.span,
        }))
    }

    // ==========================================================================
    // Declarations
    // ==========================================================================

    pub fn param(&self, name: &str) -> Param<'ast> {
        Param {
            name: self.str(name),
            ty: None,
        }
    }

    pub fn typed_param(&self, name: &str, ty: &str) -> Param<'ast> {
        Param {
            name: self.str(name),
            ty: Some(self.ty(ty)),
        }
    }

    pub fn ty(&self, text: &str) -> TypeExpr<'ast> {
        TypeExpr::new(self.str(text))
    }

    /// A closure over `params` with no declared output or throw type.
    pub fn closure(&self, params: Vec<Param<'ast>>, body: Expr<'ast>) -> Closure<'ast> {
        Closure {
            params: self.slice(params),
            output: None,
            throws: None,
            body: self.expr(body),
            span: self.span,
        }
    }

    pub fn function(&self, name: &str, closure: Closure<'ast>) -> &'ast Function<'ast> {
        self.arena.alloc(Function {
            name: self.str(name),
            closure,
        })
    }

    pub fn clause(&self, name: &str, closure: Closure<'ast>) -> &'ast Clause<'ast> {
        self.arena.alloc(Clause {
            name: self.str(name),
            closure,
        })
    }

    pub fn contract(
        &self,
        name: &str,
        template: &str,
        declarations: Vec<Declaration<'ast>>,
    ) -> &'ast Contract<'ast> {
        self.arena.alloc(Contract {
            name: self.str(name),
            template: self.ty(template),
            declarations: self.slice(declarations),
            span: self.span,
        })
    }

    // ==========================================================================
    // Statements
    // ==========================================================================

    pub fn global(&self, name: &str, value: Expr<'ast>) -> Statement<'ast> {
        Statement::Global(self.arena.alloc(GlobalStmt {
            name: self.str(name),
            value,
            span: self.span,
        }))
    }

    pub fn import(&self, name: &str) -> Statement<'ast> {
        Statement::Import(ImportStmt {
            name: self.str(name),
            span: self.span,
        })
    }

    pub fn package(&self, name: &str, statements: Vec<Statement<'ast>>) -> Package<'ast> {
        Package {
            name: self.str(name),
            statements: self.slice(statements),
        }
    }
}
