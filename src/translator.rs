//! Translator configuration and entry point.
//!
//! A `Translator` owns the composed operator tables a package is translated
//! against. It is immutable once built and cheap to clone, so one translator
//! can serve many packages on many threads.
//!
//! # Example
//!
//! ```ignore
//! use bumpalo::Bump;
//! use ergo::{AstBuilder, Translator};
//!
//! let translator = Translator::with_default_modules()?;
//!
//! let arena = Bump::new();
//! let b = AstBuilder::new(&arena);
//! let package = b.package("org.acme", vec![b.global("start", b.call("dateTimeMin", vec![]))]);
//!
//! let ir = translator.translate_package(&package)?;
//! println!("{}", ir);
//! ```

use std::sync::Arc;

use ergo_ast::Package;
use ergo_core::{RegistrationError, TranslationError};
use ergo_ir::IrPackage;
use ergo_modules::default_modules;
use ergo_registry::{ForeignModule, ForeignTable, OperatorTable, TableChain, compose, default_chain};
use ergo_translate::{TranslationContext, translate_package};
use tracing::debug;

/// Builder for a [`Translator`].
///
/// Foreign tables added with [`foreign`](Self::foreign) are consulted in the
/// order they were added, ahead of every installed module. Installed modules
/// are merged into one table; two modules naming the same operator is an
/// error at [`build`](Self::build).
#[derive(Default)]
pub struct TranslatorBuilder {
    /// Foreign tables in precedence order
    foreign: Vec<Arc<dyn OperatorTable>>,
    /// Installed modules in installation order
    modules: Vec<ForeignModule>,
}

impl TranslatorBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a foreign table. Earlier tables take precedence.
    pub fn foreign(mut self, table: impl OperatorTable + 'static) -> Self {
        self.foreign.push(Arc::new(table));
        self
    }

    /// Install a foreign module.
    pub fn install(mut self, module: ForeignModule) -> Self {
        self.modules.push(module);
        self
    }

    /// Install every module in `modules`.
    pub fn install_all(self, modules: impl IntoIterator<Item = ForeignModule>) -> Self {
        modules.into_iter().fold(self, Self::install)
    }

    /// Compose the configured tables into a translator.
    ///
    /// # Errors
    ///
    /// Returns `RegistrationError::DuplicateOperator` if two installed
    /// modules register the same name.
    pub fn build(self) -> Result<Translator, RegistrationError> {
        let mut installed = ForeignTable::new();
        for module in self.modules {
            debug!(module = module.name(), operators = module.table().len(), "installing module");
            installed.merge(module.into_table())?;
        }

        let head = self
            .foreign
            .into_iter()
            .rev()
            .fold(Arc::new(installed) as Arc<dyn OperatorTable>, |acc, table| {
                Arc::new(compose(table, acc))
            });

        Ok(Translator {
            functions: default_chain(head),
        })
    }
}

/// Entry point for translating packages.
#[derive(Debug, Clone)]
pub struct Translator {
    functions: TableChain,
}

impl Translator {
    /// A translator with no foreign operators.
    pub fn new() -> Self {
        Self {
            functions: default_chain(Arc::new(ForeignTable::new())),
        }
    }

    pub fn builder() -> TranslatorBuilder {
        TranslatorBuilder::new()
    }

    /// A translator with the default foreign modules installed.
    ///
    /// # Errors
    ///
    /// Returns an error if a default module fails to build.
    pub fn with_default_modules() -> Result<Self, RegistrationError> {
        Self::builder().install_all(default_modules()?).build()
    }

    /// The composed table every package starts from.
    pub fn functions(&self) -> &TableChain {
        &self.functions
    }

    /// The initial context for a package named `package`: default tables and
    /// the package name, nothing bound.
    pub fn context_for(&self, package: &str) -> TranslationContext {
        TranslationContext::new(package, self.functions.clone())
    }

    /// Translate `package`.
    ///
    /// # Errors
    ///
    /// Returns the first failure, labelled with the top-level statement,
    /// global, function or contract declaration it occurred in.
    pub fn translate_package(&self, package: &Package<'_>) -> Result<IrPackage, TranslationError> {
        translate_package(&self.functions, package)
    }
}

impl Default for Translator {
    fn default() -> Self {
        Self::new()
    }
}
