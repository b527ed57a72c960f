//! Calculus closures, declarations, statements and packages.
//!
//! These mirror the surface declaration structure one-to-one: a translated
//! package has the same statement order and the same contract nesting as its
//! source.

use ergo_core::TypeAnnotation;

use crate::expr::IrExpr;

/// A formal parameter of a closure.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct IrParam {
    pub name: String,
    pub ty: Option<TypeAnnotation>,
}

impl IrParam {
    pub fn untyped(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ty: None,
        }
    }
}

/// A calculus closure.
///
/// Inside `body`, parameters are referenced as external constants
/// ([`IrExpr::Const`]): the caller's invocation environment binds them.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct IrClosure {
    pub params: Vec<IrParam>,
    pub output: Option<TypeAnnotation>,
    pub throws: Option<TypeAnnotation>,
    pub body: IrExpr,
}

impl IrClosure {
    /// An untyped closure over `params`.
    pub fn primitive(params: &[&str], body: IrExpr) -> Self {
        Self {
            params: params.iter().map(|p| IrParam::untyped(*p)).collect(),
            output: None,
            throws: None,
            body,
        }
    }

    /// Number of formal parameters.
    pub fn arity(&self) -> usize {
        self.params.len()
    }

    pub fn param_names(&self) -> impl Iterator<Item = &str> {
        self.params.iter().map(|p| p.name.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IrFunction {
    pub name: String,
    pub closure: IrClosure,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IrClause {
    pub name: String,
    pub closure: IrClosure,
}

/// A translated contract declaration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IrDeclaration {
    Clause(IrClause),
    Function(IrFunction),
}

impl IrDeclaration {
    pub fn name(&self) -> &str {
        match self {
            IrDeclaration::Clause(clause) => &clause.name,
            IrDeclaration::Function(function) => &function.name,
        }
    }

    pub fn closure(&self) -> &IrClosure {
        match self {
            IrDeclaration::Clause(clause) => &clause.closure,
            IrDeclaration::Function(function) => &function.closure,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IrContract {
    pub name: String,
    pub template: TypeAnnotation,
    pub declarations: Vec<IrDeclaration>,
}

/// A translated top-level statement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IrStatement {
    Expr(IrExpr),
    Global { name: String, value: IrExpr },
    Import(String),
    Function(IrFunction),
    Contract(IrContract),
}

/// A translated package.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IrPackage {
    pub name: String,
    pub statements: Vec<IrStatement>,
}

impl IrPackage {
    /// Find a translated package-level function by name.
    pub fn function(&self, name: &str) -> Option<&IrFunction> {
        self.statements.iter().find_map(|stmt| match stmt {
            IrStatement::Function(function) if function.name == name => Some(function),
            _ => None,
        })
    }

    /// Find a translated contract by name.
    pub fn contract(&self, name: &str) -> Option<&IrContract> {
        self.statements.iter().find_map(|stmt| match stmt {
            IrStatement::Contract(contract) if contract.name == name => Some(contract),
            _ => None,
        })
    }
}
