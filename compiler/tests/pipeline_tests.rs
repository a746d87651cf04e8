//! Check-then-evaluate pipeline tests

use pretty_assertions::assert_eq;
use whilst::ast::build::*;
use whilst::{CheckFailed, Config, ConfigError, RuntimeError, Type, TypeError, Value};

#[test]
fn test_run_counting_loop() {
    let program = seq(
        decl("i", number(0)),
        seq(
            while_loop(
                lesser(var("i"), number(3)),
                assign("i", plus(var("i"), number(1))),
            ),
            print(var("i")),
        ),
    );
    let outcome = whilst::run(&program, &Config::default()).unwrap();
    assert_eq!(outcome.values.get("i"), Some(Value::Integer(3)));
    assert_eq!(outcome.types.get("i"), Some(Type::Int));
    assert_eq!(outcome.printed, vec![Value::Integer(3)]);
}

#[test]
fn test_run_strict_counting_loop() {
    let program = seq(
        decl("i", number(0)),
        while_loop(
            lesser(var("i"), number(3)),
            assign("i", plus(var("i"), number(1))),
        ),
    );
    let outcome = whilst::run(&program, &Config::strict()).unwrap();
    assert_eq!(outcome.values.get("i"), Some(Value::Integer(3)));
}

#[test]
fn test_run_rejects_before_evaluating() {
    let program = seq(print(number(1)), decl("x", var("missing")));
    let report = whilst::run(&program, &Config::default()).unwrap_err();
    let failed = report
        .downcast_ref::<CheckFailed>()
        .expect("expected a checking failure");
    assert_eq!(failed.program, "print 1; x := missing");
    assert_eq!(
        failed.errors,
        vec![
            TypeError::UndeclaredVariable {
                name: "missing".to_string()
            },
            TypeError::IllTypedBinding {
                name: "x".to_string(),
                stmt: "x := missing".to_string(),
            },
        ]
    );
}

#[test]
fn test_run_lax_guard_reaches_runtime_error() {
    // Accepted by the reference checker, rejected by the evaluator
    let program = ite(plus(number(1), number(1)), print(number(1)), print(number(2)));
    let report = whilst::run(&program, &Config::default()).unwrap_err();
    let err = report
        .downcast_ref::<RuntimeError>()
        .expect("expected a runtime error");
    assert_eq!(
        err,
        &RuntimeError::NonBooleanGuard {
            construct: "conditional",
            condition: "(1 + 1)".to_string(),
            value: Value::Integer(2),
        }
    );
}

#[test]
fn test_run_strict_guard_rejected_statically() {
    let program = ite(plus(number(1), number(1)), print(number(1)), print(number(2)));
    let report = whilst::run(&program, &Config::strict()).unwrap_err();
    assert!(report.downcast_ref::<CheckFailed>().is_some());
}

#[test]
fn test_run_config_from_toml() {
    let config = Config::from_toml_str("[eval]\nint_equals = \"equality\"\n").unwrap();
    let program = seq(decl("x", number(2)), decl("same", equals(var("x"), number(2))));
    let outcome = whilst::run(&program, &config).unwrap();
    assert_eq!(outcome.values.get("same"), Some(Value::Boolean(true)));

    let outcome = whilst::run(&program, &Config::default()).unwrap();
    assert_eq!(outcome.values.get("same"), Some(Value::Boolean(false)));
}

#[test]
fn test_run_reassignment_changes_both_environments() {
    let program = seq(
        decl("x", mult(number(2), number(2))),
        assign("x", boolean(true)),
    );
    let outcome = whilst::run(&program, &Config::default()).unwrap();
    assert_eq!(outcome.values.to_string(), "{x = true}");
    assert_eq!(outcome.types.to_string(), "{x = Bool}");

    assert!(whilst::run(&program, &Config::strict()).is_err());
}

#[test]
fn test_inspect_reports() {
    let report = whilst::inspect(&and(boolean(false), number(0)), &Config::default());
    assert_eq!(report.pretty, "(false && 0)");
    assert_eq!(report.value, Value::Boolean(false));
    assert_eq!(report.ty, Type::IllTyped);

    let report = whilst::inspect(&lesser(number(2), number(4)), &Config::strict());
    assert_eq!(report.value, Value::Boolean(true));
    assert_eq!(report.ty, Type::Bool);
}

#[test]
fn test_run_strict_rejects_loop_only_declaration() {
    let program = seq(
        decl("i", number(0)),
        seq(
            while_loop(lesser(var("i"), number(0)), decl("y", number(1))),
            print(plus(var("y"), number(1))),
        ),
    );
    let report = whilst::run(&program, &Config::strict()).unwrap_err();
    let failed = report
        .downcast_ref::<CheckFailed>()
        .expect("expected a checking failure");
    assert_eq!(
        failed.errors[0],
        TypeError::UndeclaredVariable {
            name: "y".to_string()
        }
    );

    // The reference policies keep the body's bindings
    let outcome = whilst::run(&program, &Config::default()).unwrap();
    assert_eq!(outcome.printed, vec![Value::Undefined]);
}

#[test]
fn test_run_strict_rejects_one_sided_declaration() {
    let program = seq(
        ite(boolean(false), decl("y", number(1)), decl("z", number(2))),
        print(plus(var("y"), number(1))),
    );
    assert!(
        whilst::run(&program, &Config::strict())
            .unwrap_err()
            .downcast_ref::<CheckFailed>()
            .is_some()
    );
}

#[test]
fn test_run_strict_accepts_declaration_on_both_branches() {
    let program = seq(
        ite(boolean(false), decl("y", number(1)), decl("y", number(2))),
        print(plus(var("y"), number(1))),
    );
    let outcome = whilst::run(&program, &Config::strict()).unwrap();
    assert_eq!(outcome.printed, vec![Value::Integer(3)]);
    assert_eq!(outcome.types.get("y"), Some(Type::Int));
}

#[test]
fn test_run_else_branch_type_matches_runtime() {
    let program = seq(
        decl("x", number(1)),
        ite(boolean(false), assign("x", boolean(true)), assign("x", number(5))),
    );
    let outcome = whilst::run(&program, &Config::default()).unwrap();
    assert_eq!(outcome.values.get("x"), Some(Value::Integer(5)));
    assert_eq!(outcome.types.get("x"), Some(Type::Int));
}

#[test]
fn test_config_bool_guards_alone_is_rejected() {
    let err = Config::from_toml_str("[check]\nrequire_bool_guards = true\n").unwrap_err();
    assert!(matches!(err, ConfigError::Conflict { .. }));
}
