//! Package sequencing.
//!
//! A package is translated as a left-to-right fold over its statements. Each
//! step yields the translated statement and the context the next statement
//! sees:
//!
//! | statement  | context afterwards                          |
//! |------------|---------------------------------------------|
//! | expression | unchanged                                   |
//! | global     | name bound as an external parameter         |
//! | import     | unchanged                                   |
//! | function   | translated closure layered over the tables  |
//! | contract   | unchanged                                   |
//!
//! Earlier statements therefore never see later ones.

use std::sync::Arc;

use ergo_ast::{Package, Statement};
use ergo_core::{TranslationError, TranslationUnit};
use ergo_ir::{IrPackage, IrStatement};
use ergo_registry::TableChain;
use tracing::{debug, instrument};

use crate::context::TranslationContext;
use crate::decl::{translate_contract, translate_function};
use crate::expr::translate_expr;

type Result<T> = std::result::Result<T, TranslationError>;

/// Translate the statement at `index` and return it with the context for
/// the statement after it.
pub fn translate_statement(
    ctx: &TranslationContext,
    index: usize,
    stmt: &Statement<'_>,
) -> Result<(IrStatement, TranslationContext)> {
    match stmt {
        Statement::Expr(expr) => {
            let ir = translate_expr(ctx, expr)
                .map_err(|err| err.in_unit(TranslationUnit::Statement(index)))?;
            Ok((IrStatement::Expr(ir), ctx.clone()))
        }
        Statement::Global(global) => {
            let value = translate_expr(ctx, &global.value)
                .map_err(|err| err.in_unit(TranslationUnit::Global(global.name.to_string())))?;
            debug!(global = global.name, "bound global");
            Ok((
                IrStatement::Global {
                    name: global.name.to_string(),
                    value,
                },
                ctx.with_global(global.name),
            ))
        }
        Statement::Import(import) => Ok((IrStatement::Import(import.name.to_string()), ctx.clone())),
        Statement::Function(function) => {
            let ir = translate_function(ctx, function).map_err(|err| {
                err.in_unit(TranslationUnit::Function(function.name.to_string()))
            })?;
            debug!(function = function.name, params = ir.closure.arity(), "declared function");
            let next = ctx.with_function(function.name, Arc::new(ir.closure.clone()));
            Ok((IrStatement::Function(ir), next))
        }
        Statement::Contract(contract) => {
            let ir = translate_contract(ctx, contract)?;
            debug!(contract = contract.name, declarations = ir.declarations.len(), "translated contract");
            Ok((IrStatement::Contract(ir), ctx.clone()))
        }
    }
}

/// Translate every statement of `package`, threading the context from one
/// statement to the next, starting from `functions` and the package name.
///
/// The first failing statement aborts the package.
#[cfg_attr(feature = "profiling", profiling::function)]
#[instrument(skip_all, fields(package = %package.name))]
pub fn translate_package(functions: &TableChain, package: &Package<'_>) -> Result<IrPackage> {
    let initial = TranslationContext::new(package.name, functions.clone());
    translate_statements(initial, package).map(|(statements, _)| IrPackage {
        name: package.name.to_string(),
        statements,
    })
}

/// Fold `package`'s statements from `ctx`, returning the translated
/// statements and the final context.
pub fn translate_statements(
    ctx: TranslationContext,
    package: &Package<'_>,
) -> Result<(Vec<IrStatement>, TranslationContext)> {
    let statements = package.statements();
    debug!(statements = statements.len(), "translating package");

    statements.iter().enumerate().try_fold(
        (Vec::with_capacity(statements.len()), ctx),
        |(mut out, ctx), (index, stmt)| -> Result<_> {
            let (ir, next) = translate_statement(&ctx, index, stmt)?;
            out.push(ir);
            Ok((out, next))
        },
    )
}
