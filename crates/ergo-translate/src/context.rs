//! TranslationContext - the environment threaded through translation.
//!
//! A context carries:
//! - the ambient package name, used to qualify unqualified class references
//! - the composed function table (declared functions over foreign, builtin,
//!   unary and binary tables)
//! - the names bound as lexical variables
//! - the names bound as external parameters (formals, `this`, `now`, globals)
//!
//! Contexts are never mutated. Every `with_*` method returns a new context
//! sharing all unchanged state with its parent, so cloning is O(1) and a
//! context can be handed to another thread.

use std::sync::Arc;

use ergo_ast::ClassRef;
use ergo_core::QualifiedName;
use ergo_ir::IrClosure;
use ergo_registry::{OperatorTable, TableChain, default_chain};

use crate::scope::ScopeChain;

/// Immutable translation environment.
#[derive(Debug, Clone)]
pub struct TranslationContext {
    package: Arc<str>,
    functions: TableChain,
    lexical: ScopeChain,
    params: ScopeChain,
}

impl TranslationContext {
    /// Create the initial context for `package` over `functions`.
    ///
    /// No globals, parameters or lexical variables are bound.
    pub fn new(package: &str, functions: TableChain) -> Self {
        Self {
            package: Arc::from(package),
            functions,
            lexical: ScopeChain::new(),
            params: ScopeChain::new(),
        }
    }

    /// Create the initial context for `package` over the default table chain
    /// headed by `foreign`.
    pub fn with_default_tables(package: &str, foreign: Arc<dyn OperatorTable>) -> Self {
        Self::new(package, default_chain(foreign))
    }

    // =========================================================================
    // Queries
    // =========================================================================

    /// The ambient package name.
    pub fn package(&self) -> &str {
        &self.package
    }

    pub fn functions(&self) -> &TableChain {
        &self.functions
    }

    /// Whether `name` is bound as an external parameter or global.
    pub fn is_param(&self, name: &str) -> bool {
        self.params.contains(name)
    }

    /// Whether `name` is bound as a lexical variable.
    pub fn is_lexical(&self, name: &str) -> bool {
        self.lexical.contains(name)
    }

    pub fn params(&self) -> &ScopeChain {
        &self.params
    }

    pub fn lexical(&self) -> &ScopeChain {
        &self.lexical
    }

    /// Resolve a call name against the function table.
    pub fn lookup_function(&self, name: &str) -> Option<Arc<IrClosure>> {
        self.functions.lookup(name)
    }

    /// The brand for a class reference: its own package if it names one,
    /// otherwise the ambient package.
    pub fn brand_for(&self, class: &ClassRef<'_>) -> QualifiedName {
        QualifiedName::resolve(class.package, class.name, &self.package)
    }

    // =========================================================================
    // Extension
    // =========================================================================

    /// Bind `names` as external parameters, in order.
    pub fn with_params<'n>(&self, names: impl IntoIterator<Item = &'n str>) -> Self {
        Self {
            params: self.params.with_all(names),
            ..self.clone()
        }
    }

    /// Bind a global. Globals are resolved exactly like parameters.
    pub fn with_global(&self, name: &str) -> Self {
        Self {
            params: self.params.with(name),
            ..self.clone()
        }
    }

    /// Bind a lexical variable.
    pub fn with_lexical(&self, name: &str) -> Self {
        Self {
            lexical: self.lexical.with(name),
            ..self.clone()
        }
    }

    /// Make `closure` callable as `name`, ahead of every existing table.
    pub fn with_function(&self, name: &str, closure: Arc<IrClosure>) -> Self {
        Self {
            functions: self.functions.with_function(name, closure),
            ..self.clone()
        }
    }
}
