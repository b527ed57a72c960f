//! Core types shared by every stage of the Ergo middle-end.
//!
//! - [`Span`]: source locations
//! - [`UnaryOp`] / [`BinaryOp`]: the operator vocabulary
//! - [`Data`]: literal values
//! - [`TypeAnnotation`]: opaque declared types
//! - [`QualifiedName`]: brand names for class references
//! - [`TranslationError`] / [`RegistrationError`]: error taxonomy

mod data;
mod error;
mod ops;
mod qualified_name;
mod span;
mod types;

pub use data::Data;
pub use error::{RegistrationError, TranslationError, TranslationUnit};
pub use ops::{BinaryOp, UnaryOp};
pub use qualified_name::QualifiedName;
pub use span::Span;
pub use types::TypeAnnotation;

pub use ordered_float::OrderedFloat;
