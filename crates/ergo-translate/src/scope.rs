//! Persistent name sets for translation scopes.
//!
//! A [`ScopeChain`] is an immutable linked list of names. Extending it shares
//! the existing chain, so every nested scope and every sequential global is
//! cheap to add and old contexts remain valid after new ones are derived from
//! them.
//!
//! Lookups stay logarithmic on long chains. The binding at position `d`
//! (1-based) covers the `d & -d` bindings ending at it, the same split a
//! Fenwick tree uses. Once that segment reaches `SEGMENT_MIN` bindings the
//! node keeps a hash index of the segment and a pointer past it, so a lookup
//! checks O(log n) indexes plus fewer than `SEGMENT_MIN` plain nodes.

use std::fmt;
use std::sync::Arc;

use rustc_hash::FxHashSet;

/// Smallest segment that gets a hash index.
const SEGMENT_MIN: usize = 16;

struct ScopeNode {
    name: Arc<str>,
    /// Names of the segment ending at this node, when it is indexed
    segment: Option<FxHashSet<Arc<str>>>,
    /// First node before the segment, when it is indexed
    skip: Option<Arc<ScopeNode>>,
    next: Option<Arc<ScopeNode>>,
}

impl Drop for ScopeNode {
    // Unlink iteratively so long chains don't recurse on drop.
    fn drop(&mut self) {
        self.skip = None;
        let mut next = self.next.take();
        while let Some(node) = next {
            match Arc::try_unwrap(node) {
                Ok(mut node) => {
                    node.skip = None;
                    next = node.next.take();
                }
                Err(_) => break,
            }
        }
    }
}

/// Number of bindings the node at 1-based `position` covers.
fn segment_len(position: usize) -> usize {
    1 << position.trailing_zeros()
}

/// An immutable set of bound names.
#[derive(Clone, Default)]
pub struct ScopeChain {
    head: Option<Arc<ScopeNode>>,
    len: usize,
}

impl ScopeChain {
    pub fn new() -> Self {
        Self::default()
    }

    /// A new chain that also binds `name`.
    pub fn with(&self, name: &str) -> Self {
        let len = self.len + 1;
        let name: Arc<str> = Arc::from(name);

        let covered = segment_len(len);
        let (segment, skip) = if covered >= SEGMENT_MIN {
            let mut segment = FxHashSet::default();
            segment.insert(name.clone());
            let mut node = self.head.as_ref();
            for _ in 1..covered {
                let Some(current) = node else { break };
                segment.insert(current.name.clone());
                node = current.next.as_ref();
            }
            (Some(segment), node.cloned())
        } else {
            (None, None)
        };

        Self {
            head: Some(Arc::new(ScopeNode {
                name,
                segment,
                skip,
                next: self.head.clone(),
            })),
            len,
        }
    }

    /// A new chain that also binds every name in `names`, in order.
    pub fn with_all<'n>(&self, names: impl IntoIterator<Item = &'n str>) -> Self {
        names
            .into_iter()
            .fold(self.clone(), |chain, name| chain.with(name))
    }

    pub fn contains(&self, name: &str) -> bool {
        let mut node = self.head.as_deref();
        while let Some(current) = node {
            match &current.segment {
                Some(segment) => {
                    if segment.contains(name) {
                        return true;
                    }
                    node = current.skip.as_deref();
                }
                None => {
                    if &*current.name == name {
                        return true;
                    }
                    node = current.next.as_deref();
                }
            }
        }
        false
    }

    /// Number of bindings, counting repeated names.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Bound names, most recent first.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        let mut node = self.head.as_deref();
        std::iter::from_fn(move || {
            let current = node?;
            node = current.next.as_deref();
            Some(&*current.name)
        })
    }
}

impl fmt::Debug for ScopeChain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}
