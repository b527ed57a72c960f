//! External constant collection.
//!
//! The translator only promises that external names are carried through
//! unchanged; whoever evaluates the IR has to supply their values. These
//! helpers list which names that is.
//!
//! Callee closures are shared between call sites, and a declared function's
//! body may call earlier functions. Free constants are therefore computed
//! once per closure and reused for every call that reaches it.

use rustc_hash::{FxHashMap, FxHashSet};

use crate::decl::{IrClosure, IrPackage, IrStatement};
use crate::expr::IrExpr;

/// Accumulates names in first-occurrence order without duplicates.
#[derive(Default)]
struct NameCollector {
    seen: FxHashSet<String>,
    names: Vec<String>,
}

impl NameCollector {
    fn push(&mut self, name: &str) {
        if !self.seen.contains(name) {
            self.seen.insert(name.to_string());
            self.names.push(name.to_string());
        }
    }

    fn extend(&mut self, names: &[String]) {
        for name in names {
            self.push(name);
        }
    }
}

/// Free constants of every closure visited so far, keyed by address.
///
/// Keys are only valid while the IR being walked is borrowed.
#[derive(Default)]
struct ClosureCache {
    free: FxHashMap<*const IrClosure, Vec<String>>,
}

impl ClosureCache {
    fn expr(&mut self, expr: &IrExpr, out: &mut NameCollector) {
        match expr {
            IrExpr::Var(_) | IrExpr::Literal(_) => {}
            IrExpr::Const(name) => out.push(name),
            IrExpr::Unary { operand, .. } => self.expr(operand, out),
            IrExpr::Binary { left, right, .. } => {
                self.expr(left, out);
                self.expr(right, out);
            }
            IrExpr::If {
                condition,
                then_branch,
                else_branch,
            } => {
                self.expr(condition, out);
                self.expr(then_branch, out);
                self.expr(else_branch, out);
            }
            IrExpr::Let { value, body, .. } => {
                self.expr(value, out);
                self.expr(body, out);
            }
            IrExpr::Call(call) => {
                for arg in &call.args {
                    self.expr(arg, out);
                }
                let callee: &IrClosure = &call.closure;
                self.with_free_constants(callee, |names| out.extend(names));
            }
        }
    }

    fn with_free_constants<R>(
        &mut self,
        closure: &IrClosure,
        f: impl FnOnce(&[String]) -> R,
    ) -> R {
        let key = closure as *const IrClosure;
        if !self.free.contains_key(&key) {
            let mut body = NameCollector::default();
            self.expr(&closure.body, &mut body);
            let free = body
                .names
                .into_iter()
                .filter(|name| !closure.param_names().any(|p| p == name))
                .collect();
            self.free.insert(key, free);
        }
        f(self.free.get(&key).map(Vec::as_slice).unwrap_or_default())
    }
}

impl IrExpr {
    /// External constants this expression needs, including those needed by
    /// the bodies of closures it calls.
    pub fn external_constants(&self) -> Vec<String> {
        let mut out = NameCollector::default();
        ClosureCache::default().expr(self, &mut out);
        out.names
    }
}

impl IrClosure {
    /// External constants of the body that are not formal parameters.
    pub fn free_constants(&self) -> Vec<String> {
        ClosureCache::default().with_free_constants(self, <[String]>::to_vec)
    }
}

impl IrPackage {
    /// External constants the invocation environment must supply.
    ///
    /// Globals bound earlier in the package are supplied by the package
    /// itself and are left out; a global referenced before its binding is
    /// still reported.
    pub fn required_constants(&self) -> Vec<String> {
        let mut globals: FxHashSet<&str> = FxHashSet::default();
        let mut cache = ClosureCache::default();
        let mut out = NameCollector::default();

        for stmt in &self.statements {
            let mut found = NameCollector::default();
            match stmt {
                IrStatement::Expr(expr) => cache.expr(expr, &mut found),
                IrStatement::Global { value, .. } => cache.expr(value, &mut found),
                IrStatement::Import(_) => {}
                IrStatement::Function(function) => {
                    cache.with_free_constants(&function.closure, |names| found.extend(names))
                }
                IrStatement::Contract(contract) => {
                    for decl in &contract.declarations {
                        cache.with_free_constants(decl.closure(), |names| found.extend(names));
                    }
                }
            }

            for name in &found.names {
                if !globals.contains(name.as_str()) {
                    out.push(name);
                }
            }
            if let IrStatement::Global { name, .. } = stmt {
                globals.insert(name.as_str());
            }
        }

        out.names
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use ergo_core::{Data, TypeAnnotation};

    use super::*;
    use crate::decl::{IrClause, IrContract, IrDeclaration, IrFunction};

    #[test]
    fn constants_in_first_occurrence_order() {
        let expr = IrExpr::if_(
            IrExpr::constant("b"),
            IrExpr::let_("x", IrExpr::constant("a"), IrExpr::var("x")),
            IrExpr::constant("b"),
        );
        assert_eq!(expr.external_constants(), ["b", "a"]);
    }

    #[test]
    fn call_includes_callee_free_constants() {
        let closure = Arc::new(IrClosure::primitive(
            &["x"],
            IrExpr::concat(IrExpr::constant("x"), IrExpr::constant("rate")),
        ));
        let expr = IrExpr::call("f", closure, vec![IrExpr::constant("this")]);
        assert_eq!(expr.external_constants(), ["this", "rate"]);
    }

    #[test]
    fn package_excludes_bound_globals() {
        let package = IrPackage {
            name: "p".into(),
            statements: vec![
                IrStatement::Expr(IrExpr::constant("early")),
                IrStatement::Global {
                    name: "early".into(),
                    value: IrExpr::literal(Data::Nat(1)),
                },
                IrStatement::Function(IrFunction {
                    name: "f".into(),
                    closure: IrClosure::primitive(&["y"], IrExpr::constant("early")),
                }),
                IrStatement::Contract(IrContract {
                    name: "C".into(),
                    template: TypeAnnotation::new("T"),
                    declarations: vec![IrDeclaration::Clause(IrClause {
                        name: "run".into(),
                        closure: IrClosure::primitive(
                            &["req"],
                            IrExpr::concat(IrExpr::constant("this"), IrExpr::constant("req")),
                        ),
                    })],
                }),
            ],
        };

        assert_eq!(package.required_constants(), ["early", "this"]);
    }

    /// `f0(x) = $x + $rate`, then `f{i}(x) = f{i-1}($x) + f{i-1}($x)`.
    fn doubling_chain(len: usize) -> IrPackage {
        let mut statements = Vec::with_capacity(len + 1);
        let mut previous: Option<Arc<IrClosure>> = None;

        for i in 0..len {
            let body = match &previous {
                None => IrExpr::binary(
                    ergo_core::BinaryOp::Add,
                    IrExpr::constant("x"),
                    IrExpr::constant("rate"),
                ),
                Some(callee) => {
                    let call = || {
                        IrExpr::call(
                            format!("f{}", i - 1),
                            Arc::clone(callee),
                            vec![IrExpr::constant("x")],
                        )
                    };
                    IrExpr::binary(ergo_core::BinaryOp::Add, call(), call())
                }
            };
            let closure = IrClosure::primitive(&["x"], body);
            previous = Some(Arc::new(closure.clone()));
            statements.push(IrStatement::Function(IrFunction {
                name: format!("f{}", i),
                closure,
            }));
        }

        if let Some(last) = previous {
            statements.push(IrStatement::Expr(IrExpr::call(
                format!("f{}", len - 1),
                last,
                vec![IrExpr::constant("input")],
            )));
        }

        IrPackage {
            name: "p".into(),
            statements,
        }
    }

    #[test]
    fn shared_callees_are_walked_once() {
        let package = doubling_chain(40);

        assert_eq!(package.required_constants(), ["rate", "input"]);

        let IrStatement::Expr(call) = &package.statements[40] else {
            panic!("expected the final call");
        };
        assert_eq!(call.external_constants(), ["input", "rate"]);

        let IrStatement::Function(last) = &package.statements[39] else {
            panic!("expected the last function");
        };
        assert_eq!(last.closure.free_constants(), ["rate"]);
    }
}
