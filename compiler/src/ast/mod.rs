//! Abstract Syntax Tree for the whilst language
//!
//! Expressions and statements are closed sum types. Every traversal
//! (`pretty`, `eval`, `infer`/`check`) matches on them exhaustively, so a
//! new node kind cannot be added without updating all three.
//!
//! Children are exclusively owned by their parent: trees, no sharing.

pub mod build;

use serde::{Deserialize, Serialize};

/// Literal constant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Literal {
    Bool(bool),
    Num(i64),
}

/// Binary operators
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BinaryOp {
    /// Integer addition
    Plus,
    /// Integer multiplication
    Mult,
    /// Short-circuiting conjunction
    And,
    /// Short-circuiting disjunction
    Or,
    /// Equality (see `EqualsPolicy` for the integer case)
    Equals,
    /// Strict integer less-than
    Lesser,
}

impl BinaryOp {
    /// Concrete operator symbol
    pub fn symbol(&self) -> &'static str {
        match self {
            BinaryOp::Plus => "+",
            BinaryOp::Mult => "*",
            BinaryOp::And => "&&",
            BinaryOp::Or => "||",
            BinaryOp::Equals => "==",
            BinaryOp::Lesser => "<",
        }
    }

    pub fn is_arithmetic(&self) -> bool {
        matches!(self, BinaryOp::Plus | BinaryOp::Mult)
    }

    pub fn is_logical(&self) -> bool {
        matches!(self, BinaryOp::And | BinaryOp::Or)
    }
}

/// Expression
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Expr {
    /// Boolean or integer constant
    Literal(Literal),
    /// Variable reference
    Variable(String),
    /// Logical negation: `not e`
    Negate(Box<Expr>),
    /// Binary operation: `(left OP right)`
    Binary {
        op: BinaryOp,
        left: Box<Expr>,
        right: Box<Expr>,
    },
    /// Explicit parenthesization
    Group(Box<Expr>),
}

impl Expr {
    /// Number of nodes in this expression tree
    pub fn size(&self) -> usize {
        match self {
            Expr::Literal(_) | Expr::Variable(_) => 1,
            Expr::Negate(inner) | Expr::Group(inner) => 1 + inner.size(),
            Expr::Binary { left, right, .. } => 1 + left.size() + right.size(),
        }
    }

    /// Names of all variables referenced, in first-occurrence order
    pub fn free_vars(&self) -> Vec<&str> {
        let mut vars = Vec::new();
        self.collect_vars(&mut vars);
        vars
    }

    fn collect_vars<'a>(&'a self, vars: &mut Vec<&'a str>) {
        match self {
            Expr::Literal(_) => {}
            Expr::Variable(name) => {
                if !vars.contains(&name.as_str()) {
                    vars.push(name);
                }
            }
            Expr::Negate(inner) | Expr::Group(inner) => inner.collect_vars(vars),
            Expr::Binary { left, right, .. } => {
                left.collect_vars(vars);
                right.collect_vars(vars);
            }
        }
    }
}

/// Statement
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Stmt {
    /// `first; second`
    Sequence(Box<Stmt>, Box<Stmt>),
    /// `name := value`
    Declaration { name: String, value: Expr },
    /// `name = value`
    Assignment { name: String, value: Expr },
    /// `if condition {then_branch} else {else_branch}`
    Conditional {
        condition: Expr,
        then_branch: Box<Stmt>,
        else_branch: Box<Stmt>,
    },
    /// `while condition {body}`
    Loop { condition: Expr, body: Box<Stmt> },
    /// `print expr`
    Print(Expr),
}

impl Stmt {
    /// Short name of the statement kind, used in logs and diagnostics
    pub fn kind_name(&self) -> &'static str {
        match self {
            Stmt::Sequence(..) => "sequence",
            Stmt::Declaration { .. } => "declaration",
            Stmt::Assignment { .. } => "assignment",
            Stmt::Conditional { .. } => "conditional",
            Stmt::Loop { .. } => "loop",
            Stmt::Print(_) => "print",
        }
    }

    /// Names declared or assigned anywhere in this statement, in
    /// first-occurrence order
    pub fn bound_vars(&self) -> Vec<&str> {
        let mut vars = Vec::new();
        self.collect_bound(&mut vars);
        vars
    }

    fn collect_bound<'a>(&'a self, vars: &mut Vec<&'a str>) {
        match self {
            Stmt::Sequence(first, second) => {
                first.collect_bound(vars);
                second.collect_bound(vars);
            }
            Stmt::Declaration { name, .. } | Stmt::Assignment { name, .. } => {
                if !vars.contains(&name.as_str()) {
                    vars.push(name);
                }
            }
            Stmt::Conditional {
                then_branch,
                else_branch,
                ..
            } => {
                then_branch.collect_bound(vars);
                else_branch.collect_bound(vars);
            }
            Stmt::Loop { body, .. } => body.collect_bound(vars),
            Stmt::Print(_) => {}
        }
    }
}
