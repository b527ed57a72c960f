//! Variable references.
//!
//! A name bound as an external parameter (formal, `this`, `now`, or global)
//! becomes an external constant. Anything else is a lexical variable, even
//! if it is bound by nothing: unbound names are the type checker's concern.

use ergo_ast::VarExpr;
use ergo_ir::IrExpr;

use super::ExprTranslator;

/// Translate a variable reference.
pub fn translate_var(translator: &ExprTranslator<'_>, var: &VarExpr<'_>) -> IrExpr {
    if translator.ctx().is_param(var.name) {
        IrExpr::constant(var.name)
    } else {
        IrExpr::var(var.name)
    }
}
