//! The Ergo calculus: the intermediate representation surface programs are
//! lowered into.
//!
//! - [`IrExpr`]: calculus expressions
//! - [`IrClosure`] and the declaration types: translated callable units
//! - [`IrPackage`]: a translated package, statement for statement
//!
//! Every IR type implements `Display` (see [`printer`]).

mod decl;
mod expr;
pub mod printer;
mod visit;

pub use decl::{
    IrClause, IrClosure, IrContract, IrDeclaration, IrFunction, IrPackage, IrParam, IrStatement,
};
pub use expr::{IrCall, IrExpr};
