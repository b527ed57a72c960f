use std::fmt;

/// Fully-qualified class name, used as a brand.
///
/// # Examples
///
/// ```
/// use ergo_core::QualifiedName;
///
/// // Unqualified reference inside package "p"
/// let foo = QualifiedName::resolve(None, "Foo", "p");
/// assert_eq!(foo.to_string(), "p.Foo");
///
/// // Explicit qualifier ignores the ambient package
/// let foo = QualifiedName::resolve(Some("q"), "Foo", "p");
/// assert_eq!(foo.to_string(), "q.Foo");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct QualifiedName {
    /// Owning package
    pub package: String,
    /// Simple class name
    pub name: String,
}

impl QualifiedName {
    pub fn new(package: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            package: package.into(),
            name: name.into(),
        }
    }

    /// Qualify `name` with `package`, falling back to `ambient` when the
    /// reference carries no package of its own.
    pub fn resolve(package: Option<&str>, name: &str, ambient: &str) -> Self {
        Self::new(package.unwrap_or(ambient), name)
    }
}

impl fmt::Display for QualifiedName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.package, self.name)
    }
}

impl From<QualifiedName> for String {
    fn from(name: QualifiedName) -> Self {
        name.to_string()
    }
}
