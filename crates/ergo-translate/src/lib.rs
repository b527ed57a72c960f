//! Ergo Translator
//!
//! Lowers a surface [`Package`](ergo_ast::Package) into the comprehension
//! calculus of [`ergo_ir`].
//!
//! ## Architecture
//!
//! Translation is a single pass. Every step is a pure function of a
//! [`TranslationContext`] and an AST node; the package sequencer threads the
//! context from one statement to the next so that globals and functions are
//! visible only after their declaration.
//!
//! ## Modules
//!
//! - [`context`]: Immutable translation environment
//! - [`scope`]: Persistent name sets backing the context
//! - [`expr`]: Expression translator
//! - [`decl`]: Clause, function and contract translation
//! - [`package`]: Statement sequencing

pub mod context;
pub mod decl;
pub mod expr;
pub mod package;
pub mod scope;

pub use context::TranslationContext;
pub use decl::{
    CLAUSE_IMPLICIT_PARAMS, translate_clause, translate_closure, translate_contract,
    translate_declaration, translate_function,
};
pub use expr::{ExprTranslator, translate_expr};
pub use package::{translate_package, translate_statement, translate_statements};
pub use scope::ScopeChain;

// Re-export the error type for convenience
pub use ergo_core::TranslationError;
