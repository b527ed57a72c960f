//! Ergo contract-language translator.
//!
//! Lowers surface Ergo packages into a comprehension-calculus IR: variables
//! become lexical variables or external constants, arrays and objects become
//! collection and record operators, and calls are resolved against an
//! ordered chain of operator tables.
//!
//! ## Crates
//!
//! - [`ast`]: Surface AST and an arena-backed builder
//! - [`ir`]: The calculus and its textual form
//! - [`registry`]: Operator tables and foreign modules
//! - [`modules`]: Ready-made foreign modules
//! - [`translate`]: The translator itself
//!
//! Most users only need [`Translator`].

mod translator;

pub use ergo_ast as ast;
pub use ergo_core as core;
pub use ergo_ir as ir;
pub use ergo_modules as modules;
pub use ergo_registry as registry;
pub use ergo_translate as translate;

pub use translator::{Translator, TranslatorBuilder};

// Re-export main types
pub use ergo_ast::{AstBuilder, Package};
pub use ergo_core::{RegistrationError, Span, TranslationError, TranslationUnit};
pub use ergo_ir::{IrExpr, IrPackage};
pub use ergo_registry::{ForeignModule, ForeignTable, OperatorTable};
pub use ergo_translate::TranslationContext;
