//! Calculus expressions.
//!
//! The calculus is deliberately small: variables, external constants,
//! literals, unary/binary operators, conditionals, lets, and resolved calls.
//! Arrays and object construction have no dedicated nodes; they are spelled
//! with the structural operators (`bag`, `∪`, `rec[..]`, `+>`, `brand[..]`).

use std::sync::Arc;

use ergo_core::{BinaryOp, Data, UnaryOp};

use crate::decl::IrClosure;

/// A calculus expression.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum IrExpr {
    /// Lexically bound variable
    Var(String),
    /// Constant supplied by the invocation environment
    Const(String),
    /// Literal value
    Literal(Data),
    /// Unary operator application
    Unary {
        op: UnaryOp,
        operand: Box<IrExpr>,
    },
    /// Binary operator application
    Binary {
        op: BinaryOp,
        left: Box<IrExpr>,
        right: Box<IrExpr>,
    },
    /// Conditional
    If {
        condition: Box<IrExpr>,
        then_branch: Box<IrExpr>,
        else_branch: Box<IrExpr>,
    },
    /// Let-binding
    Let {
        name: String,
        value: Box<IrExpr>,
        body: Box<IrExpr>,
    },
    /// Application of a resolved closure
    Call(IrCall),
}

/// A call whose callee has already been resolved.
///
/// The closure is shared with the operator table it came from. Applying it to
/// the arguments is left to the calculus evaluator.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct IrCall {
    /// Name the call was written with
    pub name: String,
    /// Resolved callee
    pub closure: Arc<IrClosure>,
    /// Translated arguments
    pub args: Vec<IrExpr>,
}

impl IrExpr {
    pub fn var(name: impl Into<String>) -> Self {
        IrExpr::Var(name.into())
    }

    pub fn constant(name: impl Into<String>) -> Self {
        IrExpr::Const(name.into())
    }

    pub fn literal(value: Data) -> Self {
        IrExpr::Literal(value)
    }

    pub fn unary(op: UnaryOp, operand: IrExpr) -> Self {
        IrExpr::Unary {
            op,
            operand: Box::new(operand),
        }
    }

    pub fn binary(op: BinaryOp, left: IrExpr, right: IrExpr) -> Self {
        IrExpr::Binary {
            op,
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    pub fn if_(condition: IrExpr, then_branch: IrExpr, else_branch: IrExpr) -> Self {
        IrExpr::If {
            condition: Box::new(condition),
            then_branch: Box::new(then_branch),
            else_branch: Box::new(else_branch),
        }
    }

    pub fn let_(name: impl Into<String>, value: IrExpr, body: IrExpr) -> Self {
        IrExpr::Let {
            name: name.into(),
            value: Box::new(value),
            body: Box::new(body),
        }
    }

    pub fn call(name: impl Into<String>, closure: Arc<IrClosure>, args: Vec<IrExpr>) -> Self {
        IrExpr::Call(IrCall {
            name: name.into(),
            closure,
            args,
        })
    }

    // =========================================================================
    // Structural operators
    // =========================================================================

    pub fn not(operand: IrExpr) -> Self {
        Self::unary(UnaryOp::Not, operand)
    }

    /// Singleton collection.
    pub fn bag(element: IrExpr) -> Self {
        Self::unary(UnaryOp::Bag, element)
    }

    /// The empty collection literal.
    pub fn empty_bag() -> Self {
        IrExpr::Literal(Data::empty_bag())
    }

    /// Collection union.
    pub fn union(left: IrExpr, right: IrExpr) -> Self {
        Self::binary(BinaryOp::Union, left, right)
    }

    /// Single-field record.
    pub fn record(field: impl Into<String>, value: IrExpr) -> Self {
        Self::unary(UnaryOp::Record(field.into()), value)
    }

    /// The empty record literal.
    pub fn empty_record() -> Self {
        IrExpr::Literal(Data::empty_record())
    }

    /// Record concatenation; fields of `right` override fields of `left`.
    pub fn concat(left: IrExpr, right: IrExpr) -> Self {
        Self::binary(BinaryOp::RecordConcat, left, right)
    }

    /// Tag `record` with the given brands.
    pub fn brand(brands: Vec<String>, record: IrExpr) -> Self {
        Self::unary(UnaryOp::Brand(brands), record)
    }

    /// Whether this is a resolved call to `name`.
    pub fn is_call_to(&self, name: &str) -> bool {
        matches!(self, IrExpr::Call(call) if call.name == name)
    }
}
