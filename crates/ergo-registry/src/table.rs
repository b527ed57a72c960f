//! Operator table composition.
//!
//! An [`OperatorTable`] maps a call name to a ready-made closure. Tables are
//! combined by left-biased fallback: the first table that knows a name wins.
//!
//! [`TableChain`] holds an ordered list of tables as a persistent linked
//! chain. Layering a new table on top shares every existing layer, so a
//! package that declares many functions extends its table in O(1) per
//! declaration and older chains stay valid.

use std::fmt;
use std::sync::Arc;

use ergo_ir::IrClosure;

/// A name → closure lookup.
pub trait OperatorTable: Send + Sync {
    /// Look up the closure for `name`.
    fn lookup(&self, name: &str) -> Option<Arc<IrClosure>>;

    /// Short label for diagnostics.
    fn label(&self) -> &str {
        "table"
    }
}

impl<F> OperatorTable for F
where
    F: Fn(&str) -> Option<Arc<IrClosure>> + Send + Sync,
{
    fn lookup(&self, name: &str) -> Option<Arc<IrClosure>> {
        self(name)
    }

    fn label(&self) -> &str {
        "fn"
    }
}

// ============================================================================
// Compose
// ============================================================================

/// Two tables tried in order.
#[derive(Clone)]
pub struct Compose {
    first: Arc<dyn OperatorTable>,
    second: Arc<dyn OperatorTable>,
}

/// `compose(t1, t2)(name)` is `t1(name)` when present, else `t2(name)`.
pub fn compose(first: Arc<dyn OperatorTable>, second: Arc<dyn OperatorTable>) -> Compose {
    Compose { first, second }
}

impl OperatorTable for Compose {
    fn lookup(&self, name: &str) -> Option<Arc<IrClosure>> {
        self.first
            .lookup(name)
            .or_else(|| self.second.lookup(name))
    }

    fn label(&self) -> &str {
        "compose"
    }
}

// ============================================================================
// Single entries
// ============================================================================

/// A table with exactly one entry, used to layer a declared function.
#[derive(Debug, Clone)]
pub struct NamedClosure {
    name: String,
    closure: Arc<IrClosure>,
}

impl NamedClosure {
    pub fn new(name: impl Into<String>, closure: Arc<IrClosure>) -> Self {
        Self {
            name: name.into(),
            closure,
        }
    }
}

impl OperatorTable for NamedClosure {
    fn lookup(&self, name: &str) -> Option<Arc<IrClosure>> {
        (self.name == name).then(|| self.closure.clone())
    }

    fn label(&self) -> &str {
        "declared"
    }
}

// ============================================================================
// TableChain
// ============================================================================

struct Layer {
    table: Arc<dyn OperatorTable>,
    next: Option<Arc<Layer>>,
}

impl Drop for Layer {
    // Unlink iteratively so long chains don't recurse on drop.
    fn drop(&mut self) {
        let mut next = self.next.take();
        while let Some(layer) = next {
            match Arc::try_unwrap(layer) {
                Ok(mut layer) => next = layer.next.take(),
                Err(_) => break,
            }
        }
    }
}

/// An ordered, persistent list of operator tables. The top layer has the
/// highest precedence.
#[derive(Clone, Default)]
pub struct TableChain {
    head: Option<Arc<Layer>>,
    depth: usize,
}

impl TableChain {
    /// An empty chain; every lookup misses.
    pub fn new() -> Self {
        Self::default()
    }

    /// A chain over `tables`, highest precedence first.
    pub fn from_tables<I>(tables: I) -> Self
    where
        I: IntoIterator<Item = Arc<dyn OperatorTable>>,
        I::IntoIter: DoubleEndedIterator,
    {
        tables
            .into_iter()
            .rev()
            .fold(Self::new(), |chain, table| chain.layered(table))
    }

    /// A new chain with `table` on top of this one.
    pub fn layered(&self, table: Arc<dyn OperatorTable>) -> Self {
        Self {
            head: Some(Arc::new(Layer {
                table,
                next: self.head.clone(),
            })),
            depth: self.depth + 1,
        }
    }

    /// A new chain where `name` resolves to `closure` ahead of every
    /// existing layer.
    pub fn with_function(&self, name: impl Into<String>, closure: Arc<IrClosure>) -> Self {
        self.layered(Arc::new(NamedClosure::new(name, closure)))
    }

    /// Number of layers.
    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Look up `name`, reporting the label of the layer that resolved it.
    pub fn lookup_with_label(&self, name: &str) -> Option<(Arc<IrClosure>, &str)> {
        let mut layer = self.head.as_deref();
        while let Some(current) = layer {
            if let Some(closure) = current.table.lookup(name) {
                return Some((closure, current.table.label()));
            }
            layer = current.next.as_deref();
        }
        None
    }
}

impl OperatorTable for TableChain {
    fn lookup(&self, name: &str) -> Option<Arc<IrClosure>> {
        self.lookup_with_label(name).map(|(closure, _)| closure)
    }

    fn label(&self) -> &str {
        "chain"
    }
}

impl fmt::Debug for TableChain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut labels = Vec::with_capacity(self.depth);
        let mut layer = self.head.as_deref();
        while let Some(current) = layer {
            labels.push(current.table.label());
            layer = current.next.as_deref();
        }
        f.debug_struct("TableChain").field("layers", &labels).finish()
    }
}
