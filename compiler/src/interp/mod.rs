//! Tree-walking interpreter
//!
//! Evaluates expressions to `Value`s and executes statements against a
//! caller-owned `ValueEnv`.

pub mod env;
pub mod eval;
pub mod value;

pub use env::{Environment, ValueEnv};
pub use eval::Interpreter;
pub use value::Value;

use crate::ast::{Expr, Stmt};
use crate::diagnostics::RuntimeError;

/// Evaluate an expression with the default policies
pub fn eval(expr: &Expr, env: &ValueEnv) -> Value {
    Interpreter::new().eval_expr(expr, env)
}

/// Execute a statement with the default policies, discarding printed output
pub fn exec(stmt: &Stmt, env: &mut ValueEnv) -> Result<(), RuntimeError> {
    Interpreter::new().exec(stmt, env)
}
