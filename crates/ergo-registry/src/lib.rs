//! Operator tables for the Ergo translator.
//!
//! Call names are resolved against an ordered chain of tables:
//!
//! 1. functions declared earlier in the package (layered on at translation time)
//! 2. foreign operators supplied by the runtime ([`ForeignTable`])
//! 3. built-ins ([`BuiltinTable`])
//! 4. unary operator synonyms ([`UnaryTable`])
//! 5. binary operator synonyms ([`BinaryTable`])
//!
//! The first table that knows a name wins.

mod builtins;
mod foreign;
mod table;

use std::sync::Arc;

pub use builtins::{BinaryTable, BuiltinTable, NOW, UnaryTable, binary_closure, unary_closure};
pub use foreign::{ForeignModule, ForeignTable};
pub use table::{Compose, NamedClosure, OperatorTable, TableChain, compose};

/// The default chain: `foreign`, then built-ins, unary and binary synonyms.
pub fn default_chain(foreign: Arc<dyn OperatorTable>) -> TableChain {
    TableChain::from_tables([
        foreign,
        Arc::new(BuiltinTable) as Arc<dyn OperatorTable>,
        Arc::new(UnaryTable),
        Arc::new(BinaryTable),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use ergo_ir::{IrClosure, IrExpr};

    #[test]
    fn foreign_takes_precedence_over_builtins() {
        let mut foreign = ForeignTable::new();
        foreign
            .register("max", IrClosure::primitive(&["x"], IrExpr::constant("x")))
            .unwrap();

        let chain = default_chain(Arc::new(foreign));
        let (closure, label) = chain.lookup_with_label("max").unwrap();
        assert_eq!(label, "foreign");
        assert_eq!(closure.body, IrExpr::constant("x"));

        let (_, label) = chain.lookup_with_label("min").unwrap();
        assert_eq!(label, "unary");
        let (_, label) = chain.lookup_with_label("now").unwrap();
        assert_eq!(label, "builtin");
        let (_, label) = chain.lookup_with_label("concat").unwrap();
        assert_eq!(label, "binary");
    }

    #[test]
    fn default_chain_misses_unknown_names() {
        let chain = default_chain(Arc::new(ForeignTable::new()));
        assert_eq!(chain.depth(), 4);
        assert!(chain.lookup("undeclared").is_none());
    }
}
