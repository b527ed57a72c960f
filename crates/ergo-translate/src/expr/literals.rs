//! Literal and array translation.
//!
//! Arrays have no calculus node of their own. `[e1, e2, e3]` becomes
//! `((bag(e1) ∪ bag(e2)) ∪ bag(e3))`: left-associative, first element
//! innermost. `[]` becomes the empty collection literal.

use ergo_ast::{ArrayExpr, LiteralExpr};
use ergo_ir::IrExpr;

use super::{ExprTranslator, Result};

/// Translate a literal. Literals are already calculus values.
pub fn translate_literal(lit: &LiteralExpr) -> IrExpr {
    IrExpr::literal(lit.value.clone())
}

/// Translate an array literal.
pub fn translate_array(translator: &ExprTranslator<'_>, array: &ArrayExpr<'_>) -> Result<IrExpr> {
    let mut elements = array.elements.iter();
    let Some(first) = elements.next() else {
        return Ok(IrExpr::empty_bag());
    };

    let first = IrExpr::bag(translator.translate(first)?);
    elements.try_fold(first, |acc, element| -> Result<IrExpr> {
        Ok(IrExpr::union(acc, IrExpr::bag(translator.translate(element)?)))
    })
}
