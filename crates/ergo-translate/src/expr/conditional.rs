//! Conditionals and let-bindings.
//!
//! All branches are translated eagerly; this is a static lowering, so a
//! failure in a branch that would never run still aborts translation.

use ergo_ast::{GuardExpr, IfExpr, LetExpr};
use ergo_ir::IrExpr;

use super::{ExprTranslator, Result};

/// `if c then t else f`
pub fn translate_if(translator: &ExprTranslator<'_>, expr: &IfExpr<'_>) -> Result<IrExpr> {
    let condition = translator.translate(expr.condition)?;
    let then_branch = translator.translate(expr.then_expr)?;
    let else_branch = translator.translate(expr.else_expr)?;
    Ok(IrExpr::if_(condition, then_branch, else_branch))
}

/// `guard(c, t, f)` lowers to `if !c then f else t`.
///
/// Branches are translated in the order they appear in the expansion, so a
/// guard fails exactly like the `if` it desugars to.
pub fn translate_guard(translator: &ExprTranslator<'_>, expr: &GuardExpr<'_>) -> Result<IrExpr> {
    let condition = translator.translate(expr.condition)?;
    let else_branch = translator.translate(expr.else_expr)?;
    let then_branch = translator.translate(expr.then_expr)?;
    Ok(IrExpr::if_(IrExpr::not(condition), else_branch, then_branch))
}

/// `let v = e1; e2`
///
/// The bound name is recorded as lexical for the body. That never overrides
/// an external parameter of the same name: parameters are checked first.
pub fn translate_let(translator: &ExprTranslator<'_>, expr: &LetExpr<'_>) -> Result<IrExpr> {
    let value = translator.translate(expr.value)?;
    let body_ctx = translator.ctx().with_lexical(expr.name);
    let body = ExprTranslator::new(&body_ctx).translate(expr.body)?;
    Ok(IrExpr::let_(expr.name, value, body))
}
