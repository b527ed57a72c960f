//! Integration tests for the translator using `Translator` as the entry point.
//!
//! Packages are built with `AstBuilder` and the result is compared against
//! the textual form of the calculus, so these tests pin both the lowering
//! rules and the order in which translated pieces are emitted.

use std::sync::Arc;

use bumpalo::Bump;
use ergo::ast::{Declaration, Statement};
use ergo::core::{BinaryOp, Data, UnaryOp};
use ergo::ir::IrStatement;
use ergo::registry::{NOW, OperatorTable};
use ergo::{AstBuilder, IrExpr, Span, TranslationError, TranslationUnit, Translator};
use tracing_subscriber::EnvFilter;

/// Route translator logs to the test harness. Set `RUST_LOG=ergo_translate=trace`
/// to see call resolution.
fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// Evaluate the record-construction fragment of the calculus.
fn eval_construction(expr: &IrExpr) -> Data {
    match expr {
        IrExpr::Literal(data) => data.clone(),
        IrExpr::Unary {
            op: UnaryOp::Record(field),
            operand,
        } => Data::Record(vec![(field.clone(), eval_construction(operand))]),
        IrExpr::Unary {
            op: UnaryOp::Brand(brands),
            operand,
        } => Data::Brand(brands.clone(), Box::new(eval_construction(operand))),
        IrExpr::Binary {
            op: BinaryOp::RecordConcat,
            left,
            right,
        } => Data::concat_records(&eval_construction(left), &eval_construction(right))
            .unwrap_or_else(|| panic!("concatenation of non-records in {}", expr)),
        other => panic!("not a construction: {}", other),
    }
}

// =============================================================================
// Golden Packages
// =============================================================================

#[test]
fn test_late_delivery_package() {
    init_tracing();
    let arena = Bump::new();
    let b = AstBuilder::new(&arena);

    let mut late = b.closure(
        vec![b.typed_param("days", "Nat")],
        b.binary(BinaryOp::Mul, b.var("days"), b.var("rate")),
    );
    late.output = Some(b.ty("Nat"));

    let receipt = b.new_(
        b.class("Receipt"),
        vec![
            (
                "amount",
                b.call("late", vec![b.unary(UnaryOp::Dot("days".into()), b.var("req"))]),
            ),
            ("at", b.call("now", vec![])),
        ],
    );

    let package = b.package(
        "org.acme",
        vec![
            b.import("org.acme.base"),
            b.global("rate", b.nat(3)),
            Statement::Function(b.function("late", late)),
            Statement::Contract(b.contract(
                "Late",
                "LateTemplate",
                vec![Declaration::Clause(
                    b.clause("pay", b.closure(vec![b.param("req")], receipt)),
                )],
            )),
            Statement::Expr(b.array(vec![b.var("rate"), b.nat(1)])),
        ],
    );

    let ir = Translator::new().translate_package(&package).unwrap();
    assert_eq!(
        ir.to_string(),
        "package org.acme\n\
         import org.acme.base;\n\
         global rate = 3;\n\
         function late(days: Nat) : Nat { ($days * $rate) }\n\
         contract Late over LateTemplate {\n\
         \x20 clause pay(req) { brand[org.acme.Receipt]((rec[at](now()) +> rec[amount](late(dot[days]($req))))) }\n\
         }\n\
         (bag($rate) ∪ bag(1));\n"
    );
    assert_eq!(ir.required_constants(), ["now"]);
}

#[test]
fn test_guard_and_let() {
    init_tracing();
    let arena = Bump::new();
    let b = AstBuilder::new(&arena);

    let body = b.let_(
        "total",
        b.binary(BinaryOp::Add, b.var("base"), b.var("fee")),
        b.guard(
            b.binary(BinaryOp::Lt, b.var("total"), b.var("limit")),
            b.var("total"),
            b.throw(b.qualified_class("org.errors", "Overdrawn"), vec![]),
        ),
    );
    let package = b.package(
        "org.acme",
        vec![
            b.global("limit", b.nat(100)),
            Statement::Function(b.function("charge", b.closure(vec![b.param("fee")], body))),
        ],
    );

    let ir = Translator::new().translate_package(&package).unwrap();
    assert_eq!(
        ir.statements[1].to_string(),
        "function charge(fee) { (let total = (base + $fee) in \
         (if !((total < $limit)) then brand[org.errors.Overdrawn]([]) else total)) }"
    );
}

#[test]
fn test_empty_package() {
    let arena = Bump::new();
    let b = AstBuilder::new(&arena);

    let ir = Translator::new()
        .translate_package(&b.package("org.empty", vec![]))
        .unwrap();
    assert!(ir.statements.is_empty());
    assert_eq!(ir.to_string(), "package org.empty\n");
}

// =============================================================================
// Sequencing
// =============================================================================

#[test]
fn test_global_before_use_is_constant() {
    let arena = Bump::new();
    let b = AstBuilder::new(&arena);
    let translator = Translator::new();

    let declared_first = b.package(
        "p",
        vec![b.global("g", b.nat(1)), Statement::Expr(b.var("g"))],
    );
    let ir = translator.translate_package(&declared_first).unwrap();
    assert_eq!(ir.statements[1], IrStatement::Expr(IrExpr::constant("g")));

    let used_first = b.package(
        "p",
        vec![Statement::Expr(b.var("g")), b.global("g", b.nat(1))],
    );
    let ir = translator.translate_package(&used_first).unwrap();
    assert_eq!(ir.statements[0], IrStatement::Expr(IrExpr::var("g")));
    assert_eq!(ir.required_constants(), Vec::<String>::new());
}

#[test]
fn test_global_shadowed_by_let_stays_constant() {
    let arena = Bump::new();
    let b = AstBuilder::new(&arena);

    let package = b.package(
        "p",
        vec![
            b.global("x", b.nat(1)),
            Statement::Expr(b.let_("x", b.nat(2), b.var("x"))),
        ],
    );

    let ir = Translator::new().translate_package(&package).unwrap();
    assert_eq!(ir.statements[1].to_string(), "(let x = 2 in $x);");
}

#[test]
fn test_call_before_declaration_fails() {
    init_tracing();
    let arena = Bump::new();
    let b = AstBuilder::new(&arena);
    let span = Span::new(2, 5, 6);

    let package = b.package(
        "p",
        vec![
            b.global("total", b.at(span).call("double", vec![b.nat(2)])),
            Statement::Function(b.function(
                "double",
                b.closure(
                    vec![b.param("x")],
                    b.binary(BinaryOp::Add, b.var("x"), b.var("x")),
                ),
            )),
        ],
    );

    let err = Translator::new().translate_package(&package).unwrap_err();
    assert_eq!(
        err,
        TranslationError::unresolved_call("double", span)
            .in_unit(TranslationUnit::Global("total".into()))
    );
    assert_eq!(
        err.to_string(),
        "in global 'total': at 2:5: unresolved call to 'double'"
    );
    assert_eq!(err.span(), span);
}

#[test]
fn test_later_function_shadows_earlier() {
    let arena = Bump::new();
    let b = AstBuilder::new(&arena);

    let package = b.package(
        "p",
        vec![
            Statement::Function(b.function("fee", b.closure(vec![], b.nat(1)))),
            Statement::Expr(b.call("fee", vec![])),
            Statement::Function(b.function("fee", b.closure(vec![], b.nat(2)))),
            Statement::Expr(b.call("fee", vec![])),
        ],
    );

    let ir = Translator::new().translate_package(&package).unwrap();
    let bodies: Vec<String> = [&ir.statements[1], &ir.statements[3]]
        .into_iter()
        .map(|stmt| match stmt {
            IrStatement::Expr(IrExpr::Call(call)) => call.closure.body.to_string(),
            other => panic!("expected a call, got {}", other),
        })
        .collect();
    assert_eq!(bodies, ["1", "2"]);
}

#[test]
fn test_first_failure_aborts_package() {
    let arena = Bump::new();
    let b = AstBuilder::new(&arena);

    let package = b.package(
        "p",
        vec![
            Statement::Expr(b.nat(1)),
            Statement::Expr(b.call("first", vec![b.call("inner", vec![])])),
            Statement::Expr(b.call("second", vec![])),
        ],
    );

    let err = Translator::new().translate_package(&package).unwrap_err();
    assert_eq!(err.unit(), Some(&TranslationUnit::Statement(1)));
    assert_eq!(err.unresolved_name(), Some("inner"));
}

// =============================================================================
// Construction
// =============================================================================

#[test]
fn test_brand_resolution() {
    let arena = Bump::new();
    let b = AstBuilder::new(&arena);
    let translator = Translator::new();

    let ctx = translator.context_for("p");
    let local = ergo::translate::translate_expr(&ctx, &b.new_(b.class("Foo"), vec![])).unwrap();
    assert_eq!(local.to_string(), "brand[p.Foo]([])");

    let qualified =
        ergo::translate::translate_expr(&ctx, &b.new_(b.qualified_class("q", "Foo"), vec![]))
            .unwrap();
    assert_eq!(qualified.to_string(), "brand[q.Foo]([])");
}

#[test]
fn test_construction_field_order() {
    let arena = Bump::new();
    let b = AstBuilder::new(&arena);
    let ctx = Translator::new().context_for("p");

    let expr = b.new_(
        b.class("K"),
        vec![("a", b.nat(1)), ("b", b.nat(2))],
    );
    let ir = ergo::translate::translate_expr(&ctx, &expr).unwrap();
    assert_eq!(ir.to_string(), "brand[p.K]((rec[b](2) +> rec[a](1)))");
    assert_eq!(
        eval_construction(&ir),
        Data::Brand(
            vec!["p.K".into()],
            Box::new(Data::Record(vec![
                ("b".into(), Data::Nat(2)),
                ("a".into(), Data::Nat(1)),
            ])),
        )
    );
}

#[test]
fn test_duplicate_fields_keep_first_initializer() {
    let arena = Bump::new();
    let b = AstBuilder::new(&arena);
    let ctx = Translator::new().context_for("p");

    let expr = b.throw(
        b.class("K"),
        vec![("a", b.nat(1)), ("b", b.nat(2)), ("a", b.nat(3))],
    );
    let ir = ergo::translate::translate_expr(&ctx, &expr).unwrap();
    let value = eval_construction(&ir);

    assert_eq!(value.field("a"), Some(&Data::Nat(1)));
    assert_eq!(value.field("b"), Some(&Data::Nat(2)));
}

// =============================================================================
// Operator Tables
// =============================================================================

#[test]
fn test_builtin_calls() {
    let arena = Bump::new();
    let b = AstBuilder::new(&arena);
    let ctx = Translator::new().context_for("p");

    let expr = b.call(
        "concat",
        vec![
            b.call("toString", vec![b.call("max", vec![b.var("xs")])]),
            b.string("!"),
        ],
    );
    let ir = ergo::translate::translate_expr(&ctx, &expr).unwrap();
    assert_eq!(ir.to_string(), "concat(toString(max(xs)), \"!\")");

    let IrExpr::Call(call) = &ir else {
        panic!("expected a call, got {}", ir);
    };
    assert_eq!(call.closure.to_string(), "(x, y) { ($x ++ $y) }");
}

#[test]
fn test_datetime_module_calls() {
    init_tracing();
    let arena = Bump::new();
    let b = AstBuilder::new(&arena);
    let translator = Translator::with_default_modules().unwrap();

    let package = b.package(
        "org.acme",
        vec![Statement::Contract(b.contract(
            "Deadline",
            "DeadlineTemplate",
            vec![Declaration::Clause(b.clause(
                "isLate",
                b.closure(
                    vec![b.param("due")],
                    b.call("dateTimeIsAfter", vec![b.var(NOW), b.var("due")]),
                ),
            ))],
        ))],
    );

    let ir = translator.translate_package(&package).unwrap();
    let contract = ir.contract("Deadline").unwrap();
    let IrExpr::Call(call) = &contract.declarations[0].closure().body else {
        panic!("expected a call");
    };
    assert_eq!(call.name, "dateTimeIsAfter");
    assert_eq!(call.args, [IrExpr::constant("now"), IrExpr::constant("due")]);
    assert_eq!(
        call.closure.to_string(),
        "(x, y) { ($x foreign[dateTimeIsAfter] $y) }"
    );
}

#[test]
fn test_datetime_module_not_installed_by_default() {
    let arena = Bump::new();
    let b = AstBuilder::new(&arena);

    let package = b.package("p", vec![b.global("start", b.call("dateTimeMin", vec![]))]);
    let err = Translator::new().translate_package(&package).unwrap_err();
    assert_eq!(err.unresolved_name(), Some("dateTimeMin"));
}

#[test]
fn test_custom_foreign_table() {
    let arena = Bump::new();
    let b = AstBuilder::new(&arena);

    let mut rates = ergo::ForeignTable::new();
    rates.register_unary("exchangeRate").unwrap();
    let translator = Translator::builder()
        .foreign(rates)
        .install_all(ergo::modules::default_modules().unwrap())
        .build()
        .unwrap();

    assert!(translator.functions().lookup("exchangeRate").is_some());
    assert!(translator.functions().lookup("dateTimeAdd").is_some());

    let package = b.package(
        "p",
        vec![Statement::Expr(b.call("exchangeRate", vec![b.string("EUR")]))],
    );
    let ir = translator.translate_package(&package).unwrap();
    assert_eq!(ir.statements[0].to_string(), "exchangeRate(\"EUR\");");
}

// =============================================================================
// Concurrency
// =============================================================================

#[test]
fn test_translator_is_shared_across_threads() {
    let translator = Arc::new(Translator::with_default_modules().unwrap());

    let outputs: Vec<String> = std::thread::scope(|scope| {
        let handles: Vec<_> = (0..4)
            .map(|i| {
                let translator = Arc::clone(&translator);
                scope.spawn(move || {
                    let arena = Bump::new();
                    let b = AstBuilder::new(&arena);
                    let name = format!("pkg{}", i);
                    let package = b.package(
                        &name,
                        vec![
                            b.global("n", b.nat(i)),
                            Statement::Expr(b.new_(b.class("Item"), vec![("n", b.var("n"))])),
                        ],
                    );
                    translator
                        .translate_package(&package)
                        .map(|ir| ir.statements[1].to_string())
                })
            })
            .collect();
        handles
            .into_iter()
            .map(|handle| handle.join().unwrap().unwrap())
            .collect()
    });

    for (i, output) in outputs.iter().enumerate() {
        assert_eq!(output, &format!("brand[pkg{}.Item](rec[n]($n));", i));
    }
}
