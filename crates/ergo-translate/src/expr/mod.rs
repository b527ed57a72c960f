//! Expression translator.
//!
//! [`ExprTranslator`] lowers one surface expression to one calculus
//! expression under a [`TranslationContext`]. Each expression form is handled
//! in its own submodule; all of them recurse back through
//! [`ExprTranslator::translate`].
//!
//! Translation is fail-fast: the first unresolved call anywhere in a subtree
//! aborts the whole subtree.
//!
//! # Example
//!
//! ```ignore
//! let translator = ExprTranslator::new(&ctx);
//! let ir = translator.translate(&expr)?;
//! ```

mod calls;
mod conditional;
mod construct;
mod identifiers;
mod literals;
mod operators;

use ergo_ast::Expr;
use ergo_core::TranslationError;
use ergo_ir::IrExpr;

use crate::context::TranslationContext;

type Result<T> = std::result::Result<T, TranslationError>;

/// Lowers surface expressions under a fixed context.
pub struct ExprTranslator<'a> {
    ctx: &'a TranslationContext,
}

impl<'a> ExprTranslator<'a> {
    pub fn new(ctx: &'a TranslationContext) -> Self {
        Self { ctx }
    }

    /// Translate one expression.
    pub fn translate(&self, expr: &Expr<'_>) -> Result<IrExpr> {
        match expr {
            Expr::Var(var) => Ok(identifiers::translate_var(self, var)),
            Expr::Literal(lit) => Ok(literals::translate_literal(lit)),
            Expr::Array(array) => literals::translate_array(self, array),
            Expr::Unary(un) => operators::translate_unary(self, un),
            Expr::Binary(bin) => operators::translate_binary(self, bin),
            Expr::If(cond) => conditional::translate_if(self, cond),
            Expr::Guard(guard) => conditional::translate_guard(self, guard),
            Expr::Let(let_expr) => conditional::translate_let(self, let_expr),
            Expr::New(new) | Expr::Throw(new) => construct::translate_construction(self, new),
            Expr::Call(call) => calls::translate_call(self, call),
        }
    }

    /// Translate a sequence, stopping at the first failure.
    pub fn translate_all(&self, exprs: &[Expr<'_>]) -> Result<Vec<IrExpr>> {
        exprs.iter().map(|expr| self.translate(expr)).collect()
    }

    pub fn ctx(&self) -> &TranslationContext {
        self.ctx
    }
}

/// Translate `expr` under `ctx`.
pub fn translate_expr(ctx: &TranslationContext, expr: &Expr<'_>) -> Result<IrExpr> {
    ExprTranslator::new(ctx).translate(expr)
}

#[cfg(test)]
pub(crate) mod test_support {
    use std::sync::Arc;

    use ergo_registry::ForeignTable;

    use crate::context::TranslationContext;

    /// Default tables, no foreign operators, package `p`.
    pub fn create_test_context() -> TranslationContext {
        TranslationContext::with_default_tables("p", Arc::new(ForeignTable::new()))
    }
}
