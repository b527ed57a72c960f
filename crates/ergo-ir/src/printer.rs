//! Textual rendering of the calculus.
//!
//! The format is stable and is what golden tests compare against:
//!
//! ```text
//! x                      lexical variable
//! $x                     external constant
//! op(e)                  unary operator
//! (l op r)               binary operator
//! (if c then t else f)
//! (let x = v in b)
//! name(a, b)             resolved call
//! ```

use std::fmt;

use crate::decl::{IrClosure, IrContract, IrDeclaration, IrPackage, IrStatement};
use crate::expr::IrExpr;

impl fmt::Display for IrExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IrExpr::Var(name) => write!(f, "{}", name),
            IrExpr::Const(name) => write!(f, "${}", name),
            IrExpr::Literal(data) => write!(f, "{}", data),
            IrExpr::Unary { op, operand } => write!(f, "{}({})", op, operand),
            IrExpr::Binary { op, left, right } => write!(f, "({} {} {})", left, op, right),
            IrExpr::If {
                condition,
                then_branch,
                else_branch,
            } => write!(
                f,
                "(if {} then {} else {})",
                condition, then_branch, else_branch
            ),
            IrExpr::Let { name, value, body } => write!(f, "(let {} = {} in {})", name, value, body),
            IrExpr::Call(call) => {
                write!(f, "{}(", call.name)?;
                write_list(f, &call.args)?;
                write!(f, ")")
            }
        }
    }
}

fn write_list(f: &mut fmt::Formatter<'_>, items: &[IrExpr]) -> fmt::Result {
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            write!(f, ", ")?;
        }
        write!(f, "{}", item)?;
    }
    Ok(())
}

impl fmt::Display for IrClosure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(")?;
        for (i, param) in self.params.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", param.name)?;
            if let Some(ty) = &param.ty {
                write!(f, ": {}", ty)?;
            }
        }
        write!(f, ")")?;
        if let Some(output) = &self.output {
            write!(f, " : {}", output)?;
        }
        if let Some(throws) = &self.throws {
            write!(f, " throws {}", throws)?;
        }
        write!(f, " {{ {} }}", self.body)
    }
}

fn write_contract(f: &mut fmt::Formatter<'_>, contract: &IrContract) -> fmt::Result {
    writeln!(f, "contract {} over {} {{", contract.name, contract.template)?;
    for decl in &contract.declarations {
        match decl {
            IrDeclaration::Clause(clause) => {
                writeln!(f, "  clause {}{}", clause.name, clause.closure)?
            }
            IrDeclaration::Function(function) => {
                writeln!(f, "  function {}{}", function.name, function.closure)?
            }
        }
    }
    write!(f, "}}")
}

impl fmt::Display for IrStatement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IrStatement::Expr(expr) => write!(f, "{};", expr),
            IrStatement::Global { name, value } => write!(f, "global {} = {};", name, value),
            IrStatement::Import(name) => write!(f, "import {};", name),
            IrStatement::Function(function) => {
                write!(f, "function {}{}", function.name, function.closure)
            }
            IrStatement::Contract(contract) => write_contract(f, contract),
        }
    }
}

impl fmt::Display for IrPackage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "package {}", self.name)?;
        for stmt in &self.statements {
            writeln!(f, "{}", stmt)?;
        }
        Ok(())
    }
}
