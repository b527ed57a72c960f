//! Surface syntax of the Ergo contract language.
//!
//! The AST is produced by the parser and concept checker (not part of this
//! workspace) and consumed by `ergo-translate`. All nodes live in a
//! `bumpalo::Bump` arena; [`AstBuilder`] allocates them.

mod builder;
mod decl;
mod expr;
mod stmt;

pub use builder::AstBuilder;
pub use decl::{Clause, Closure, Contract, Declaration, Function, Param, TypeExpr};
pub use expr::{
    ArrayExpr, BinaryExpr, CallExpr, ClassRef, Expr, FieldInit, GuardExpr, IfExpr, LetExpr,
    LiteralExpr, NewExpr, UnaryExpr, VarExpr,
};
pub use stmt::{GlobalStmt, ImportStmt, Package, Statement};
