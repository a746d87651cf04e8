//! Static type checker for whilst
//!
//! `infer` assigns a `Type` to an expression under a `TypeEnv`; `check`
//! accepts or rejects a statement and records the types of declared and
//! assigned variables in the environment. Run it before evaluation: a
//! program accepted under `CheckConfig::strict()` never makes the evaluator
//! see an operand-kind mismatch or an unbound variable.
//!
//! Failures are reported through the sentinels (`Type::IllTyped`, `false`).
//! The checker also records one `TypeError` per root cause; composite
//! expressions over an already ill-typed part do not add further errors.

use crate::ast::{BinaryOp, Expr, Literal, Stmt};
use crate::config::{BranchBindings, CheckConfig, ReassignPolicy};
use crate::diagnostics::TypeError;
use crate::interp::Environment;
use crate::types::Type;

/// Static environment: variable name to type
pub type TypeEnv = Environment<Type>;

/// Infer an expression's type with the default policies
pub fn infer(expr: &Expr, env: &TypeEnv) -> Type {
    TypeChecker::new().infer(expr, env)
}

/// Check a statement with the default policies
pub fn check(stmt: &Stmt, env: &mut TypeEnv) -> bool {
    TypeChecker::new().check(stmt, env)
}

/// Type checker state
#[derive(Debug, Default)]
pub struct TypeChecker {
    config: CheckConfig,
    /// Errors accumulated during checking
    errors: Vec<TypeError>,
}

impl TypeChecker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: CheckConfig) -> Self {
        Self {
            config,
            errors: Vec::new(),
        }
    }

    pub fn config(&self) -> &CheckConfig {
        &self.config
    }

    pub fn errors(&self) -> &[TypeError] {
        &self.errors
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    pub fn take_errors(&mut self) -> Vec<TypeError> {
        std::mem::take(&mut self.errors)
    }

    /// Report a type error
    fn error(&mut self, error: TypeError) {
        tracing::debug!("type error: {}", error);
        self.errors.push(error);
    }

    /// Check a statement, updating `env` with its bindings
    pub fn check(&mut self, stmt: &Stmt, env: &mut TypeEnv) -> bool {
        match stmt {
            Stmt::Sequence(first, second) => {
                // Later statements see earlier declarations
                self.check(first, env) && self.check(second, env)
            }

            Stmt::Declaration { name, value } => {
                let ty = self.infer(value, env);
                if ty.is_ill_typed() {
                    self.error(TypeError::IllTypedBinding {
                        name: name.clone(),
                        stmt: stmt.to_string(),
                    });
                    return false;
                }
                env.bind(name.clone(), ty);
                true
            }

            Stmt::Assignment { name, value } => {
                let ty = self.infer(value, env);
                if ty.is_ill_typed() {
                    self.error(TypeError::IllTypedBinding {
                        name: name.clone(),
                        stmt: stmt.to_string(),
                    });
                    return false;
                }
                if let (ReassignPolicy::PreserveType, Some(declared)) =
                    (self.config.reassignment, env.get(name))
                {
                    if declared != ty {
                        self.error(TypeError::TypeChanged {
                            name: name.clone(),
                            declared,
                            found: ty,
                        });
                        return false;
                    }
                }
                env.bind(name.clone(), ty);
                true
            }

            Stmt::Conditional {
                condition,
                then_branch,
                else_branch,
            } => {
                if !self.check_guard("conditional", condition, env) {
                    return false;
                }

                // Both branches start from the incoming environment
                let mut else_env = env.clone();
                let then_ok = self.check(then_branch, env);
                let else_ok = self.check(else_branch, &mut else_env);

                match self.config.branch_bindings {
                    BranchBindings::Merge => {
                        for name in else_branch.bound_vars() {
                            if let Some(ty) = else_env.get(name) {
                                env.bind(name, ty);
                            }
                        }
                    }
                    BranchBindings::Common => {
                        env.retain(|name, ty| else_env.lookup(name) == Some(ty));
                    }
                }

                then_ok && else_ok
            }

            Stmt::Loop { condition, body } => match self.config.branch_bindings {
                BranchBindings::Merge => {
                    self.check_guard("loop", condition, env) && self.check(body, env)
                }
                BranchBindings::Common => self.check_loop_common(condition, body, env),
            },

            Stmt::Print(expr) => {
                if self.infer(expr, env).is_ill_typed() {
                    self.error(TypeError::IllTypedPrint {
                        stmt: stmt.to_string(),
                    });
                    return false;
                }
                true
            }
        }
    }

    /// Check a loop whose body may run any number of times.
    ///
    /// The guard and body are checked against the bindings that hold on
    /// every iteration; a binding the body introduces or retypes is dropped
    /// and the loop re-checked until the environment is stable.
    fn check_loop_common(&mut self, condition: &Expr, body: &Stmt, env: &mut TypeEnv) -> bool {
        loop {
            if !self.check_guard("loop", condition, env) {
                return false;
            }
            let mut body_env = env.clone();
            if !self.check(body, &mut body_env) {
                return false;
            }
            let before = env.len();
            env.retain(|name, ty| body_env.lookup(name) == Some(ty));
            if env.len() == before {
                return true;
            }
            tracing::trace!("loop body changed bindings, re-checking with {}", env);
        }
    }

    fn check_guard(&mut self, construct: &'static str, condition: &Expr, env: &TypeEnv) -> bool {
        let ty = self.infer(condition, env);
        if ty.is_ill_typed() {
            self.error(TypeError::IllTypedGuard {
                construct,
                condition: condition.to_string(),
            });
            return false;
        }
        if self.config.require_bool_guards && ty != Type::Bool {
            self.error(TypeError::NonBoolGuard {
                construct,
                condition: condition.to_string(),
                found: ty,
            });
            return false;
        }
        true
    }

    /// Infer the type of an expression
    pub fn infer(&mut self, expr: &Expr, env: &TypeEnv) -> Type {
        match expr {
            Expr::Literal(Literal::Bool(_)) => Type::Bool,
            Expr::Literal(Literal::Num(_)) => Type::Int,

            Expr::Variable(name) => match env.get(name) {
                Some(ty) => ty,
                None => {
                    self.error(TypeError::UndeclaredVariable { name: name.clone() });
                    Type::IllTyped
                }
            },

            Expr::Negate(inner) => match self.infer(inner, env) {
                Type::Bool => Type::Bool,
                Type::IllTyped => Type::IllTyped,
                found => {
                    self.error(TypeError::OperandMismatch {
                        op: "not",
                        expected: "Bool",
                        found: found.to_string(),
                        expr: expr.to_string(),
                    });
                    Type::IllTyped
                }
            },

            Expr::Binary { op, left, right } => {
                let lt = self.infer(left, env);
                let rt = self.infer(right, env);
                if lt.is_ill_typed() || rt.is_ill_typed() {
                    return Type::IllTyped;
                }
                match self.binary_result_type(*op, lt, rt) {
                    Some(ty) => ty,
                    None => {
                        self.error(TypeError::OperandMismatch {
                            op: op.symbol(),
                            expected: Self::expected_operands(*op),
                            found: format!("{} and {}", lt, rt),
                            expr: expr.to_string(),
                        });
                        Type::IllTyped
                    }
                }
            }

            Expr::Group(inner) => self.infer(inner, env),
        }
    }

    /// Result type of a binary operator over well-typed operands
    fn binary_result_type(&self, op: BinaryOp, lt: Type, rt: Type) -> Option<Type> {
        match (op, lt, rt) {
            (BinaryOp::Plus | BinaryOp::Mult, Type::Int, Type::Int) => Some(Type::Int),
            (BinaryOp::And | BinaryOp::Or, Type::Bool, Type::Bool) => Some(Type::Bool),
            (BinaryOp::Lesser, Type::Int, Type::Int) => Some(self.config.lesser_result.as_type()),
            (BinaryOp::Equals, Type::Int, Type::Int) | (BinaryOp::Equals, Type::Bool, Type::Bool) => {
                Some(Type::Bool)
            }
            _ => None,
        }
    }

    fn expected_operands(op: BinaryOp) -> &'static str {
        match op {
            BinaryOp::Plus | BinaryOp::Mult | BinaryOp::Lesser => "Int",
            BinaryOp::And | BinaryOp::Or => "Bool",
            BinaryOp::Equals => "matching Int or Bool",
        }
    }
}
