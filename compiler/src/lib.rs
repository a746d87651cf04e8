//! whilst: a tiny while-language
//!
//! A tree-walking interpreter and static type checker for a small
//! imperative language: integers, booleans, variables, arithmetic, boolean
//! and comparison operators, declaration, assignment, conditionals, loops
//! and print.
//!
//! # Architecture
//!
//! ```text
//! build helpers → AST ─┬→ pretty          → String
//!                      ├→ check / infer   → bool / Type   (TypeEnv)
//!                      └→ exec / eval     → () / Value    (ValueEnv)
//! ```
//!
//! There is no parser: programs are built with [`ast::build`].
//!
//! # Example
//!
//! ```
//! use whilst::ast::build::*;
//! use whilst::{Config, Value};
//!
//! let program = seq(
//!     decl("x", number(5)),
//!     assign("x", plus(var("x"), number(1))),
//! );
//! let outcome = whilst::run(&program, &Config::default()).unwrap();
//! assert_eq!(outcome.values.get("x"), Some(Value::Integer(6)));
//! ```

pub mod ast;
pub mod check;
pub mod config;
pub mod diagnostics;
pub mod interp;
pub mod pretty;
pub mod types;

pub use ast::{BinaryOp, Expr, Literal, Stmt};
pub use check::{TypeChecker, TypeEnv};
pub use config::Config;
pub use diagnostics::{CheckFailed, ConfigError, RuntimeError, TypeError};
pub use interp::{Interpreter, Value, ValueEnv};
pub use types::Type;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Result of running a program
#[derive(Debug, Clone, PartialEq)]
pub struct Outcome {
    /// Runtime environment after execution
    pub values: ValueEnv,
    /// Static environment after checking
    pub types: TypeEnv,
    /// Values computed by `print` statements, in order
    pub printed: Vec<Value>,
}

/// Check a program, then evaluate it against fresh environments.
///
/// A program that fails checking is not evaluated; the error carries every
/// collected `TypeError`.
pub fn run(program: &Stmt, config: &Config) -> miette::Result<Outcome> {
    tracing::info!("Checking `{}`", program);

    let mut checker = TypeChecker::with_config(config.check);
    let mut types = TypeEnv::new();
    if !checker.check(program, &mut types) {
        return Err(CheckFailed {
            program: program.to_string(),
            errors: checker.take_errors(),
        }
        .into());
    }

    tracing::info!("Evaluating `{}`", program);
    let mut interpreter = Interpreter::with_config(config.eval);
    let mut values = ValueEnv::new();
    interpreter.exec(program, &mut values)?;

    tracing::info!("Finished with {}", values);
    Ok(Outcome {
        values,
        types,
        printed: interpreter.take_output(),
    })
}

/// An expression shown, evaluated and inferred under empty environments
#[derive(Debug, Clone, PartialEq)]
pub struct ExprReport {
    pub pretty: String,
    pub value: Value,
    pub ty: Type,
}

/// Pretty-print, evaluate and infer an expression with no bindings in scope
pub fn inspect(expr: &Expr, config: &Config) -> ExprReport {
    ExprReport {
        pretty: expr.pretty(),
        value: Interpreter::with_config(config.eval).eval_expr(expr, &ValueEnv::new()),
        ty: TypeChecker::with_config(config.check).infer(expr, &TypeEnv::new()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::build::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }

    #[test]
    fn test_inspect_ill_typed_negate() {
        let report = inspect(&negate(number(2)), &Config::default());
        assert_eq!(report.pretty, "not 2");
        assert_eq!(report.value, Value::Undefined);
        assert_eq!(report.ty, Type::IllTyped);
    }

    #[test]
    fn test_run_refuses_ill_typed_program() {
        let program = seq(decl("x", number(1)), print(plus(var("x"), boolean(true))));
        let err = run(&program, &Config::default()).unwrap_err();
        assert!(err.to_string().starts_with("Type checking failed"));
    }
}
