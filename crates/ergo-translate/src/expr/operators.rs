//! Unary and binary operator applications.
//!
//! The surface language uses the calculus operator vocabulary directly, so
//! these only translate operands and rewrap them.

use ergo_ast::{BinaryExpr, UnaryExpr};
use ergo_ir::IrExpr;

use super::{ExprTranslator, Result};

pub fn translate_unary(translator: &ExprTranslator<'_>, expr: &UnaryExpr<'_>) -> Result<IrExpr> {
    let operand = translator.translate(expr.operand)?;
    Ok(IrExpr::unary(expr.op.clone(), operand))
}

/// Left operand is translated first; its failure wins.
pub fn translate_binary(translator: &ExprTranslator<'_>, expr: &BinaryExpr<'_>) -> Result<IrExpr> {
    let left = translator.translate(expr.left)?;
    let right = translator.translate(expr.right)?;
    Ok(IrExpr::binary(expr.op.clone(), left, right))
}
