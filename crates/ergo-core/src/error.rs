//! Error types for the Ergo middle-end.
//!
//! ## Error Hierarchy
//!
//! ```text
//! TranslationError
//! ├── UnresolvedCall - a call name matches nothing in the composed table
//! └── Propagated     - the first failure inside a top-level unit, labelled
//!                      with that unit
//! RegistrationError  - building foreign operator tables
//! ```
//!
//! Translation is fail-fast: the first failure aborts the enclosing unit and
//! nothing is ever aggregated, so a `Propagated` error wraps exactly one
//! `UnresolvedCall`.

use std::fmt;

use thiserror::Error;

use crate::Span;

// ============================================================================
// Translation Errors
// ============================================================================

/// The top-level unit a translation failure was reported against.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TranslationUnit {
    /// A bare expression statement, by position in the package.
    Statement(usize),
    /// A global binding.
    Global(String),
    /// A package-level function.
    Function(String),
    /// A clause or function declared inside a contract.
    Declaration {
        /// Owning contract.
        contract: String,
        /// Clause or function name.
        name: String,
    },
}

impl fmt::Display for TranslationUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TranslationUnit::Statement(index) => write!(f, "statement #{}", index),
            TranslationUnit::Global(name) => write!(f, "global '{}'", name),
            TranslationUnit::Function(name) => write!(f, "function '{}'", name),
            TranslationUnit::Declaration { contract, name } => {
                write!(f, "'{}' in contract '{}'", name, contract)
            }
        }
    }
}

/// Errors that occur while lowering surface syntax to the calculus.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TranslationError {
    /// A call name matched no entry across the composed operator/function table.
    #[error("at {span}: unresolved call to '{name}'")]
    UnresolvedCall {
        /// The name that was called.
        name: String,
        /// Where the call occurred.
        span: Span,
    },

    /// A failure inside a top-level unit.
    #[error("in {unit}: {source}")]
    Propagated {
        /// The unit whose translation was aborted.
        unit: TranslationUnit,
        /// The failure that aborted it.
        #[source]
        source: Box<TranslationError>,
    },
}

impl TranslationError {
    /// Create an unresolved call error.
    pub fn unresolved_call(name: impl Into<String>, span: Span) -> Self {
        TranslationError::UnresolvedCall {
            name: name.into(),
            span,
        }
    }

    /// Label this error with the unit it aborted.
    ///
    /// An error that already names its unit is returned unchanged.
    pub fn in_unit(self, unit: TranslationUnit) -> Self {
        match self {
            err @ TranslationError::Propagated { .. } => err,
            err => TranslationError::Propagated {
                unit,
                source: Box::new(err),
            },
        }
    }

    /// The innermost error.
    pub fn root_cause(&self) -> &TranslationError {
        match self {
            TranslationError::Propagated { source, .. } => source.root_cause(),
            err => err,
        }
    }

    /// The unit this error was reported against, if any.
    pub fn unit(&self) -> Option<&TranslationUnit> {
        match self {
            TranslationError::Propagated { unit, .. } => Some(unit),
            TranslationError::UnresolvedCall { .. } => None,
        }
    }

    /// Name of the unresolved call at the root of this error.
    pub fn unresolved_name(&self) -> Option<&str> {
        match self.root_cause() {
            TranslationError::UnresolvedCall { name, .. } => Some(name),
            TranslationError::Propagated { .. } => None,
        }
    }

    /// Source location of the root failure.
    pub fn span(&self) -> Span {
        match self {
            TranslationError::UnresolvedCall { span, .. } => *span,
            TranslationError::Propagated { source, .. } => source.span(),
        }
    }
}

// ============================================================================
// Registration Errors
// ============================================================================

/// Errors that occur while assembling operator tables.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistrationError {
    /// The same operator name was registered twice in one table.
    #[error("operator '{name}' is already registered")]
    DuplicateOperator { name: String },
}
