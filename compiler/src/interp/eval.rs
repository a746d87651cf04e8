//! Tree-walking evaluator

use crate::ast::{BinaryOp, Expr, Stmt};
use crate::config::{EqualsPolicy, EvalConfig};
use crate::diagnostics::RuntimeError;

use super::env::ValueEnv;
use super::value::Value;

/// Tree-walking interpreter
#[derive(Debug, Default)]
pub struct Interpreter {
    config: EvalConfig,
    /// Values computed by `Print` statements, in execution order
    output: Vec<Value>,
}

impl Interpreter {
    /// Create an interpreter with the default policies
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: EvalConfig) -> Self {
        Interpreter {
            config,
            output: Vec::new(),
        }
    }

    pub fn config(&self) -> &EvalConfig {
        &self.config
    }

    /// Values printed so far
    pub fn output(&self) -> &[Value] {
        &self.output
    }

    /// Drain the output buffer
    pub fn take_output(&mut self) -> Vec<Value> {
        std::mem::take(&mut self.output)
    }

    pub fn clear_output(&mut self) {
        self.output.clear();
    }

    /// Execute a statement, mutating `env` in place
    pub fn exec(&mut self, stmt: &Stmt, env: &mut ValueEnv) -> Result<(), RuntimeError> {
        match stmt {
            Stmt::Sequence(first, second) => {
                self.exec(first, env)?;
                self.exec(second, env)
            }

            // Declaration and assignment only differ to the checker
            Stmt::Declaration { name, value } | Stmt::Assignment { name, value } => {
                let val = self.eval_expr(value, env);
                tracing::debug!("{} {} <- {}", stmt.kind_name(), name, val);
                env.bind(name.clone(), val);
                Ok(())
            }

            Stmt::Conditional {
                condition,
                then_branch,
                else_branch,
            } => {
                if self.eval_guard("conditional", condition, env)? {
                    self.exec(then_branch, env)
                } else {
                    self.exec(else_branch, env)
                }
            }

            Stmt::Loop { condition, body } => {
                let mut iterations: u64 = 0;
                // The guard is re-evaluated before every pass
                while self.eval_guard("loop", condition, env)? {
                    iterations += 1;
                    tracing::trace!("loop iteration {}", iterations);
                    self.exec(body, env)?;
                }
                tracing::debug!("loop `{}` finished after {} iterations", condition, iterations);
                Ok(())
            }

            Stmt::Print(expr) => {
                let val = self.eval_expr(expr, env);
                tracing::debug!("print {} => {}", expr, val);
                self.output.push(val);
                Ok(())
            }
        }
    }

    /// Evaluate a statement guard, which must produce a boolean
    fn eval_guard(
        &self,
        construct: &'static str,
        condition: &Expr,
        env: &ValueEnv,
    ) -> Result<bool, RuntimeError> {
        match self.eval_expr(condition, env) {
            Value::Boolean(b) => Ok(b),
            value => {
                tracing::error!("{} guard `{}` evaluated to {}", construct, condition, value);
                Err(RuntimeError::NonBooleanGuard {
                    construct,
                    condition: condition.to_string(),
                    value,
                })
            }
        }
    }

    /// Evaluate an expression
    ///
    /// Never fails: operand-kind mismatches produce `Value::Undefined`.
    pub fn eval_expr(&self, expr: &Expr, env: &ValueEnv) -> Value {
        match expr {
            Expr::Literal(lit) => Value::from(*lit),

            // Callers only evaluate checked programs; a missing name is
            // reported as `Undefined` rather than a panic.
            Expr::Variable(name) => env.get(name).unwrap_or(Value::Undefined),

            Expr::Negate(inner) => match self.eval_expr(inner, env) {
                Value::Boolean(b) => Value::Boolean(!b),
                _ => Value::Undefined,
            },

            Expr::Binary { op, left, right } => {
                let lhs = self.eval_expr(left, env);

                // Short-circuit for And/Or: the right operand is not evaluated
                match (op, lhs) {
                    (BinaryOp::And, Value::Boolean(false)) => return Value::Boolean(false),
                    (BinaryOp::Or, Value::Boolean(true)) => return Value::Boolean(true),
                    _ => {}
                }

                let rhs = self.eval_expr(right, env);
                self.eval_binary(*op, lhs, rhs)
            }

            Expr::Group(inner) => self.eval_expr(inner, env),
        }
    }

    /// Evaluate a binary operation on already-evaluated operands
    fn eval_binary(&self, op: BinaryOp, lhs: Value, rhs: Value) -> Value {
        match op {
            BinaryOp::Plus => match (lhs, rhs) {
                (Value::Integer(a), Value::Integer(b)) => Value::Integer(a.wrapping_add(b)),
                _ => Value::Undefined,
            },
            BinaryOp::Mult => match (lhs, rhs) {
                (Value::Integer(a), Value::Integer(b)) => Value::Integer(a.wrapping_mul(b)),
                _ => Value::Undefined,
            },
            BinaryOp::And => match (lhs, rhs) {
                (Value::Boolean(a), Value::Boolean(b)) => Value::Boolean(a && b),
                _ => Value::Undefined,
            },
            BinaryOp::Or => match (lhs, rhs) {
                (Value::Boolean(a), Value::Boolean(b)) => Value::Boolean(a || b),
                _ => Value::Undefined,
            },
            BinaryOp::Equals => match (lhs, rhs) {
                (Value::Boolean(a), Value::Boolean(b)) => Value::Boolean(a == b),
                (Value::Integer(a), Value::Integer(b)) => match self.config.int_equals {
                    EqualsPolicy::LessThan => Value::Boolean(a < b),
                    EqualsPolicy::Equality => Value::Boolean(a == b),
                },
                _ => Value::Undefined,
            },
            BinaryOp::Lesser => match (lhs, rhs) {
                (Value::Integer(a), Value::Integer(b)) => Value::Boolean(a < b),
                _ => Value::Undefined,
            },
        }
    }
}
