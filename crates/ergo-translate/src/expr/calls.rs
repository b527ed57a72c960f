//! Function call translation.
//!
//! Arguments are translated first, left to right; then the callee name is
//! resolved against the context's table chain. A name no table knows is an
//! [`TranslationError::UnresolvedCall`]; the IR never contains an unresolved
//! call.

use ergo_ast::CallExpr;
use ergo_core::TranslationError;
use ergo_ir::IrExpr;
use tracing::{debug, trace};

use super::{ExprTranslator, Result};

/// Translate a call expression.
pub fn translate_call(translator: &ExprTranslator<'_>, call: &CallExpr<'_>) -> Result<IrExpr> {
    let args = translator.translate_all(call.args)?;

    match translator.ctx().functions().lookup_with_label(call.name) {
        Some((closure, table)) => {
            trace!(name = call.name, table, args = args.len(), "resolved call");
            Ok(IrExpr::call(call.name, closure, args))
        }
        None => {
            debug!(name = call.name, span = %call.span, "unresolved call");
            Err(TranslationError::unresolved_call(call.name, call.span))
        }
    }
}
