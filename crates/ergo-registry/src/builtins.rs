//! Built-in operator tables.
//!
//! These are pure functions of the name: every lookup builds the closure
//! afresh, so the tables carry no state and can be shared freely.
//!
//! | table | names |
//! |---|---|
//! | [`UnaryTable`] | `max`, `min`, `flatten`, `toString` |
//! | [`BinaryTable`] | `concat` |
//! | [`BuiltinTable`] | `now` |

use std::sync::Arc;

use ergo_core::{BinaryOp, UnaryOp};
use ergo_ir::{IrClosure, IrExpr};

use crate::table::OperatorTable;

/// Name of the external constant holding the current instant.
pub const NOW: &str = "now";

/// A one-parameter closure applying `op` to its parameter.
pub fn unary_closure(op: UnaryOp) -> IrClosure {
    IrClosure::primitive(&["x"], IrExpr::unary(op, IrExpr::constant("x")))
}

/// A two-parameter closure applying `op` to its parameters.
pub fn binary_closure(op: BinaryOp) -> IrClosure {
    IrClosure::primitive(
        &["x", "y"],
        IrExpr::binary(op, IrExpr::constant("x"), IrExpr::constant("y")),
    )
}

/// Function-call synonyms for unary operators.
#[derive(Debug, Clone, Copy, Default)]
pub struct UnaryTable;

impl OperatorTable for UnaryTable {
    fn lookup(&self, name: &str) -> Option<Arc<IrClosure>> {
        let op = match name {
            "max" => UnaryOp::Max,
            "min" => UnaryOp::Min,
            "flatten" => UnaryOp::Flatten,
            "toString" => UnaryOp::ToString,
            _ => return None,
        };
        Some(Arc::new(unary_closure(op)))
    }

    fn label(&self) -> &str {
        "unary"
    }
}

/// Function-call synonyms for binary operators.
#[derive(Debug, Clone, Copy, Default)]
pub struct BinaryTable;

impl OperatorTable for BinaryTable {
    fn lookup(&self, name: &str) -> Option<Arc<IrClosure>> {
        match name {
            "concat" => Some(Arc::new(binary_closure(BinaryOp::StringConcat))),
            _ => None,
        }
    }

    fn label(&self) -> &str {
        "binary"
    }
}

/// Language built-ins.
#[derive(Debug, Clone, Copy, Default)]
pub struct BuiltinTable;

impl OperatorTable for BuiltinTable {
    fn lookup(&self, name: &str) -> Option<Arc<IrClosure>> {
        match name {
            NOW => Some(Arc::new(IrClosure::primitive(&[], IrExpr::constant(NOW)))),
            _ => None,
        }
    }

    fn label(&self) -> &str {
        "builtin"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unary_synonyms() {
        for (name, op) in [
            ("max", UnaryOp::Max),
            ("min", UnaryOp::Min),
            ("flatten", UnaryOp::Flatten),
            ("toString", UnaryOp::ToString),
        ] {
            let closure = UnaryTable.lookup(name).unwrap();
            assert_eq!(closure.arity(), 1);
            assert_eq!(closure.body, IrExpr::unary(op, IrExpr::constant("x")));
        }
        assert!(UnaryTable.lookup("concat").is_none());
    }

    #[test]
    fn concat_is_string_concatenation() {
        let closure = BinaryTable.lookup("concat").unwrap();
        assert_eq!(closure.arity(), 2);
        assert_eq!(closure.to_string(), "(x, y) { ($x ++ $y) }");
        assert!(BinaryTable.lookup("max").is_none());
    }

    #[test]
    fn now_yields_current_instant_constant() {
        let closure = BuiltinTable.lookup("now").unwrap();
        assert_eq!(closure.arity(), 0);
        assert_eq!(closure.body, IrExpr::constant(NOW));
        assert!(BuiltinTable.lookup("today").is_none());
    }
}
