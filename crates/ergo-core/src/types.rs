//! Opaque type annotations.

use std::fmt;

/// A declared type, carried through translation without inspection.
///
/// The surface type checker owns the meaning of these; the translator only
/// copies them from surface closures and contracts onto their IR counterparts.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TypeAnnotation(pub String);

impl TypeAnnotation {
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TypeAnnotation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
