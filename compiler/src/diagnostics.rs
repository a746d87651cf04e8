//! Diagnostics for checking, evaluation and configuration
//!
//! The sentinel results (`Type::IllTyped`, `Value::Undefined`, a `false`
//! check) stay the primary failure channel. These types describe *why* a
//! program was rejected, and carry the one fatal runtime condition.

use miette::Diagnostic;
use thiserror::Error;

use crate::interp::Value;
use crate::types::Type;

/// Reason the checker rejected an expression or statement
#[derive(Error, Debug, Diagnostic, Clone, PartialEq, Eq)]
pub enum TypeError {
    #[error("Undeclared variable `{name}`")]
    #[diagnostic(
        code(typecheck::undeclared_var),
        help("declare it first: `{name} := ...`")
    )]
    UndeclaredVariable { name: String },

    #[error("Operator `{op}` expects {expected} operands, found {found} in `{expr}`")]
    #[diagnostic(code(typecheck::operand_mismatch))]
    OperandMismatch {
        op: &'static str,
        expected: &'static str,
        found: String,
        expr: String,
    },

    #[error("Cannot bind `{name}`: right-hand side is ill-typed in `{stmt}`")]
    #[diagnostic(code(typecheck::ill_typed_binding))]
    IllTypedBinding { name: String, stmt: String },

    #[error("Guard of {construct} is ill-typed: `{condition}`")]
    #[diagnostic(code(typecheck::ill_typed_guard))]
    IllTypedGuard {
        construct: &'static str,
        condition: String,
    },

    #[error("Guard of {construct} must be `Bool`, found `{found}`: `{condition}`")]
    #[diagnostic(
        code(typecheck::non_bool_guard),
        help("guards are required to be `Bool` when `require_bool_guards` is set")
    )]
    NonBoolGuard {
        construct: &'static str,
        condition: String,
        found: Type,
    },

    #[error("Cannot assign `{found}` to `{name}` of type `{declared}`")]
    #[diagnostic(
        code(typecheck::type_changed),
        help("assignments keep the variable's type under the `preserve_type` policy")
    )]
    TypeChanged {
        name: String,
        declared: Type,
        found: Type,
    },

    #[error("Cannot print an ill-typed expression: `{stmt}`")]
    #[diagnostic(code(typecheck::ill_typed_print))]
    IllTypedPrint { stmt: String },
}

/// A program failed checking; carries every collected reason
#[derive(Error, Debug, Diagnostic, Clone)]
#[error("Type checking failed for `{program}`")]
#[diagnostic(code(typecheck::failed), help("the program was not evaluated"))]
pub struct CheckFailed {
    pub program: String,
    #[related]
    pub errors: Vec<TypeError>,
}

/// Fatal evaluation error
///
/// Only raised for statements whose guard is not a `Boolean`, which a
/// checked program under strict guards can never reach.
#[derive(Error, Debug, Diagnostic, Clone, PartialEq)]
pub enum RuntimeError {
    #[error("Guard of {construct} evaluated to `{value}`, expected a boolean: `{condition}`")]
    #[diagnostic(
        code(runtime::non_boolean_guard),
        help("check the program before evaluating it")
    )]
    NonBooleanGuard {
        construct: &'static str,
        condition: String,
        value: Value,
    },
}

/// Configuration loading error
#[derive(Error, Debug, Diagnostic, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Failed to read configuration file `{path}`: {message}")]
    #[diagnostic(code(config::read))]
    Read { path: String, message: String },

    #[error("Invalid configuration: {message}")]
    #[diagnostic(code(config::parse))]
    Parse { message: String },

    #[error("Conflicting policies: {message}")]
    #[diagnostic(code(config::conflict))]
    Conflict { message: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        let e = TypeError::UndeclaredVariable { name: "x".into() };
        assert_eq!(e.to_string(), "Undeclared variable `x`");

        let e = TypeError::OperandMismatch {
            op: "+",
            expected: "Int",
            found: "Int and Bool".into(),
            expr: "(1 + true)".into(),
        };
        assert_eq!(
            e.to_string(),
            "Operator `+` expects Int operands, found Int and Bool in `(1 + true)`"
        );

        let e = RuntimeError::NonBooleanGuard {
            construct: "loop",
            condition: "(1 + 1)".into(),
            value: Value::Integer(2),
        };
        assert_eq!(
            e.to_string(),
            "Guard of loop evaluated to `2`, expected a boolean: `(1 + 1)`"
        );
    }

    #[test]
    fn test_check_failed_related() {
        let failed = CheckFailed {
            program: "x = y".into(),
            errors: vec![TypeError::UndeclaredVariable { name: "y".into() }],
        };
        let related: Vec<String> = failed
            .related()
            .into_iter()
            .flatten()
            .map(|d| d.to_string())
            .collect();
        assert_eq!(related, vec!["Undeclared variable `y`".to_string()]);
    }
}
