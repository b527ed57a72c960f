//! Clause, function and contract translation.
//!
//! A callable unit is translated by binding its formals as external
//! parameters and translating the body under that extended context. Clauses
//! additionally bind `this` and `now` ahead of their formals. The extension
//! is local to the one closure being translated.

use ergo_ast::{Clause, Closure, Contract, Declaration, Function, Param, TypeExpr};
use ergo_core::{TranslationError, TranslationUnit, TypeAnnotation};
use ergo_ir::{IrClause, IrClosure, IrContract, IrDeclaration, IrFunction, IrParam};
use ergo_registry::NOW;
use tracing::debug;

use crate::context::TranslationContext;
use crate::expr::translate_expr;

type Result<T> = std::result::Result<T, TranslationError>;

/// Names every clause body sees as external parameters, before its formals.
pub const CLAUSE_IMPLICIT_PARAMS: [&str; 2] = ["this", NOW];

fn type_annotation(ty: &TypeExpr<'_>) -> TypeAnnotation {
    TypeAnnotation::new(ty.text)
}

fn translate_param(param: &Param<'_>) -> IrParam {
    IrParam {
        name: param.name.to_string(),
        ty: param.ty.as_ref().map(type_annotation),
    }
}

/// Translate a closure whose body sees `implicit` and then its own formals
/// as external parameters.
pub fn translate_closure(
    ctx: &TranslationContext,
    closure: &Closure<'_>,
    implicit: &[&str],
) -> Result<IrClosure> {
    let scope = ctx.with_params(
        implicit
            .iter()
            .copied()
            .chain(closure.params.iter().map(|p| p.name)),
    );
    let body = translate_expr(&scope, closure.body)?;

    Ok(IrClosure {
        params: closure.params.iter().map(translate_param).collect(),
        output: closure.output.as_ref().map(type_annotation),
        throws: closure.throws.as_ref().map(type_annotation),
        body,
    })
}

/// Translate a function. Only its formals are bound.
pub fn translate_function(ctx: &TranslationContext, function: &Function<'_>) -> Result<IrFunction> {
    Ok(IrFunction {
        name: function.name.to_string(),
        closure: translate_closure(ctx, &function.closure, &[])?,
    })
}

/// Translate a clause. `this` and `now` are bound ahead of its formals.
pub fn translate_clause(ctx: &TranslationContext, clause: &Clause<'_>) -> Result<IrClause> {
    Ok(IrClause {
        name: clause.name.to_string(),
        closure: translate_closure(ctx, &clause.closure, &CLAUSE_IMPLICIT_PARAMS)?,
    })
}

pub fn translate_declaration(
    ctx: &TranslationContext,
    decl: &Declaration<'_>,
) -> Result<IrDeclaration> {
    match decl {
        Declaration::Clause(clause) => translate_clause(ctx, clause).map(IrDeclaration::Clause),
        Declaration::Function(function) => {
            translate_function(ctx, function).map(IrDeclaration::Function)
        }
    }
}

/// Translate every declaration of a contract, in order, under `ctx`.
///
/// A failing declaration aborts the contract; the error names the
/// declaration.
#[cfg_attr(feature = "profiling", profiling::function)]
pub fn translate_contract(ctx: &TranslationContext, contract: &Contract<'_>) -> Result<IrContract> {
    let declarations = contract
        .declarations
        .iter()
        .map(|decl| {
            debug!(contract = contract.name, declaration = decl.name(), "translating declaration");
            translate_declaration(ctx, decl).map_err(|err| {
                err.in_unit(TranslationUnit::Declaration {
                    contract: contract.name.to_string(),
                    name: decl.name().to_string(),
                })
            })
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(IrContract {
        name: contract.name.to_string(),
        template: type_annotation(&contract.template),
        declarations,
    })
}
