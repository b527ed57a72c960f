//! Object and exception construction.
//!
//! `New` and `Throw` lower identically: one brand wrapping one record.
//!
//! ```text
//! New(K, [])                    =>  brand[K]([])
//! New(K, [(a, e1)])             =>  brand[K](rec[a](e1))
//! New(K, [(a, e1), (b, e2)])    =>  brand[K]((rec[b](e2) +> rec[a](e1)))
//! ```
//!
//! Each later field is concatenated on the left of the record built so far.
//! Record concatenation lets the right operand win, so when a field name is
//! repeated the first initializer is the one that survives.

use ergo_ast::NewExpr;
use ergo_ir::IrExpr;

use super::{ExprTranslator, Result};

/// Translate a `New` or `Throw` expression.
pub fn translate_construction(
    translator: &ExprTranslator<'_>,
    expr: &NewExpr<'_>,
) -> Result<IrExpr> {
    let brand = translator.ctx().brand_for(&expr.class);

    let mut fields = expr.fields.iter();
    let record = match fields.next() {
        None => IrExpr::empty_record(),
        Some(first) => {
            let init = IrExpr::record(first.name, translator.translate(&first.value)?);
            fields.try_fold(init, |acc, field| -> Result<IrExpr> {
                let value = translator.translate(&field.value)?;
                Ok(IrExpr::concat(IrExpr::record(field.name, value), acc))
            })?
        }
    };

    Ok(IrExpr::brand(vec![brand.into()], record))
}
