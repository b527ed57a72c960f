//! Operator vocabulary shared by the surface language and the calculus.
//!
//! Surface unary/binary applications carry these operators directly and the
//! translator wraps them unchanged. The structural operators ([`UnaryOp::Bag`],
//! [`UnaryOp::Record`], [`UnaryOp::Brand`], [`BinaryOp::RecordConcat`],
//! [`BinaryOp::Union`]) are what array literals and object construction lower to.

use std::fmt;

/// A unary operator of the calculus.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum UnaryOp {
    /// Logical negation.
    Not,
    /// Numeric negation.
    Neg,
    /// Largest element of a collection.
    Max,
    /// Smallest element of a collection.
    Min,
    /// Flatten a collection of collections.
    Flatten,
    /// Render a value as a string.
    ToString,
    /// Number of elements in a collection.
    Count,
    /// Sum of a numeric collection.
    Sum,
    /// Remove duplicate elements from a collection.
    Distinct,
    /// Singleton collection.
    Bag,
    /// Single-field record.
    Record(String),
    /// Field access.
    Dot(String),
    /// Tag a record with nominal type labels.
    Brand(Vec<String>),
    /// Operator implemented by the foreign runtime.
    Foreign(String),
}

/// A binary operator of the calculus.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum BinaryOp {
    And,
    Or,
    Eq,
    Lt,
    Le,
    Add,
    Sub,
    Mul,
    Div,
    Mod,
    /// String concatenation.
    StringConcat,
    /// Record concatenation; fields of the right operand override the left.
    RecordConcat,
    /// Collection union.
    Union,
    /// Operator implemented by the foreign runtime.
    Foreign(String),
}

impl fmt::Display for UnaryOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UnaryOp::Not => write!(f, "!"),
            UnaryOp::Neg => write!(f, "-"),
            UnaryOp::Max => write!(f, "max"),
            UnaryOp::Min => write!(f, "min"),
            UnaryOp::Flatten => write!(f, "flatten"),
            UnaryOp::ToString => write!(f, "toString"),
            UnaryOp::Count => write!(f, "count"),
            UnaryOp::Sum => write!(f, "sum"),
            UnaryOp::Distinct => write!(f, "distinct"),
            UnaryOp::Bag => write!(f, "bag"),
            UnaryOp::Record(field) => write!(f, "rec[{}]", field),
            UnaryOp::Dot(field) => write!(f, "dot[{}]", field),
            UnaryOp::Brand(brands) => write!(f, "brand[{}]", brands.join(", ")),
            UnaryOp::Foreign(name) => write!(f, "foreign[{}]", name),
        }
    }
}

impl fmt::Display for BinaryOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let symbol = match self {
            BinaryOp::And => "&&",
            BinaryOp::Or => "||",
            BinaryOp::Eq => "==",
            BinaryOp::Lt => "<",
            BinaryOp::Le => "<=",
            BinaryOp::Add => "+",
            BinaryOp::Sub => "-",
            BinaryOp::Mul => "*",
            BinaryOp::Div => "/",
            BinaryOp::Mod => "%",
            BinaryOp::StringConcat => "++",
            BinaryOp::RecordConcat => "+>",
            BinaryOp::Union => "∪",
            BinaryOp::Foreign(name) => return write!(f, "foreign[{}]", name),
        };
        write!(f, "{}", symbol)
    }
}
