//! Foreign operator registration.
//!
//! The foreign runtime (date/time values and other native services) is opaque
//! to the translator. It is described to it as a [`ForeignTable`]: a set of
//! named closures whose bodies apply `UnaryOp::Foreign` / `BinaryOp::Foreign`
//! (or anything else the runtime wants) to their parameters.

use std::sync::Arc;

use ergo_core::{BinaryOp, RegistrationError, UnaryOp};
use ergo_ir::{IrClosure, IrExpr};
use rustc_hash::FxHashMap;

use crate::builtins::{binary_closure, unary_closure};
use crate::table::OperatorTable;

/// Name-keyed registry of foreign operators.
#[derive(Debug, Clone, Default)]
pub struct ForeignTable {
    operators: FxHashMap<String, Arc<IrClosure>>,
}

impl ForeignTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `closure` under `name`.
    pub fn register(
        &mut self,
        name: impl Into<String>,
        closure: IrClosure,
    ) -> Result<&mut Self, RegistrationError> {
        let name = name.into();
        if self.operators.contains_key(&name) {
            return Err(RegistrationError::DuplicateOperator { name });
        }
        self.operators.insert(name, Arc::new(closure));
        Ok(self)
    }

    /// Register a foreign constant: a zero-parameter closure yielding the
    /// external constant of the same name.
    pub fn register_constant(&mut self, name: &str) -> Result<&mut Self, RegistrationError> {
        self.register(name, IrClosure::primitive(&[], IrExpr::constant(name)))
    }

    /// Register a one-argument runtime operator.
    pub fn register_unary(&mut self, name: &str) -> Result<&mut Self, RegistrationError> {
        self.register(name, unary_closure(UnaryOp::Foreign(name.to_string())))
    }

    /// Register a two-argument runtime operator.
    pub fn register_binary(&mut self, name: &str) -> Result<&mut Self, RegistrationError> {
        self.register(name, binary_closure(BinaryOp::Foreign(name.to_string())))
    }

    /// Move every operator of `other` into this table.
    pub fn merge(&mut self, other: ForeignTable) -> Result<&mut Self, RegistrationError> {
        for (name, closure) in other.operators {
            if self.operators.contains_key(&name) {
                return Err(RegistrationError::DuplicateOperator { name });
            }
            self.operators.insert(name, closure);
        }
        Ok(self)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.operators.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.operators.len()
    }

    pub fn is_empty(&self) -> bool {
        self.operators.is_empty()
    }
}

impl OperatorTable for ForeignTable {
    fn lookup(&self, name: &str) -> Option<Arc<IrClosure>> {
        self.operators.get(name).cloned()
    }

    fn label(&self) -> &str {
        "foreign"
    }
}

/// A named bundle of foreign operators, installed into a translator as one
/// unit.
#[derive(Debug, Clone)]
pub struct ForeignModule {
    name: String,
    table: ForeignTable,
}

impl ForeignModule {
    pub fn new(name: impl Into<String>, table: ForeignTable) -> Self {
        Self {
            name: name.into(),
            table,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn table(&self) -> &ForeignTable {
        &self.table
    }

    pub fn into_table(self) -> ForeignTable {
        self.table
    }
}
