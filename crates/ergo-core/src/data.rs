//! Literal values.
//!
//! [`Data`] is the value domain of literal constants in both the surface
//! language and the calculus. Floats are wrapped in [`OrderedFloat`] so that
//! expressions stay `Eq + Hash` and can be compared structurally.

use std::fmt;

use ordered_float::OrderedFloat;

/// A literal value.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Data {
    /// The unit value.
    Unit,
    /// Boolean literal.
    Bool(bool),
    /// Integer literal.
    Nat(i64),
    /// Floating point literal.
    Float(OrderedFloat<f64>),
    /// String literal.
    String(String),
    /// Collection literal.
    Bag(Vec<Data>),
    /// Record literal; fields keep their declaration order.
    Record(Vec<(String, Data)>),
    /// A branded record.
    Brand(Vec<String>, Box<Data>),
}

impl Data {
    /// The empty collection.
    pub fn empty_bag() -> Self {
        Data::Bag(Vec::new())
    }

    /// The empty record.
    pub fn empty_record() -> Self {
        Data::Record(Vec::new())
    }

    pub fn float(value: f64) -> Self {
        Data::Float(OrderedFloat(value))
    }

    pub fn string(value: impl Into<String>) -> Self {
        Data::String(value.into())
    }

    /// Concatenate two records.
    ///
    /// A field present in both records takes the value from `right`. Fields
    /// of `left` keep their position; fields only in `right` follow them.
    /// Returns `None` unless both operands are records.
    pub fn concat_records(left: &Data, right: &Data) -> Option<Data> {
        let (Data::Record(left), Data::Record(right)) = (left, right) else {
            return None;
        };

        let mut fields: Vec<(String, Data)> = left
            .iter()
            .map(|(name, value)| {
                let value = right
                    .iter()
                    .find(|(other, _)| other == name)
                    .map_or(value, |(_, overriding)| overriding);
                (name.clone(), value.clone())
            })
            .collect();

        for (name, value) in right {
            if !left.iter().any(|(other, _)| other == name) {
                fields.push((name.clone(), value.clone()));
            }
        }

        Some(Data::Record(fields))
    }

    /// Look up a field of a record value.
    pub fn field(&self, name: &str) -> Option<&Data> {
        match self {
            Data::Record(fields) => fields.iter().find(|(n, _)| n == name).map(|(_, v)| v),
            Data::Brand(_, inner) => inner.field(name),
            _ => None,
        }
    }
}

impl fmt::Display for Data {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Data::Unit => write!(f, "unit"),
            Data::Bool(b) => write!(f, "{}", b),
            Data::Nat(n) => write!(f, "{}", n),
            Data::Float(x) => write!(f, "{:?}", x.into_inner()),
            Data::String(s) => write!(f, "\"{}\"", s.escape_debug()),
            Data::Bag(items) => {
                write!(f, "{{")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", item)?;
                }
                write!(f, "}}")
            }
            Data::Record(fields) => {
                write!(f, "[")?;
                for (i, (name, value)) in fields.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}: {}", name, value)?;
                }
                write!(f, "]")
            }
            Data::Brand(brands, inner) => write!(f, "<{}>{}", brands.join(", "), inner),
        }
    }
}
