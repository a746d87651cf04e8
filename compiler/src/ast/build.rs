//! Construction helpers
//!
//! Build trees without spelling out `Box::new` and struct variants:
//!
//! ```
//! use whilst::ast::build::*;
//!
//! let program = seq(
//!     decl("i", number(0)),
//!     while_loop(lesser(var("i"), number(3)), assign("i", plus(var("i"), number(1)))),
//! );
//! assert_eq!(program.to_string(), "i := 0; while (i < 3) {i = (i + 1)}");
//! ```

use super::{BinaryOp, Expr, Literal, Stmt};

pub fn number(n: i64) -> Expr {
    Expr::Literal(Literal::Num(n))
}

pub fn boolean(b: bool) -> Expr {
    Expr::Literal(Literal::Bool(b))
}

pub fn var(name: impl Into<String>) -> Expr {
    Expr::Variable(name.into())
}

pub fn negate(e: Expr) -> Expr {
    Expr::Negate(Box::new(e))
}

pub fn group(e: Expr) -> Expr {
    Expr::Group(Box::new(e))
}

/// Generic binary node; the named helpers below forward here
pub fn binary(op: BinaryOp, left: Expr, right: Expr) -> Expr {
    Expr::Binary {
        op,
        left: Box::new(left),
        right: Box::new(right),
    }
}

pub fn plus(left: Expr, right: Expr) -> Expr {
    binary(BinaryOp::Plus, left, right)
}

pub fn mult(left: Expr, right: Expr) -> Expr {
    binary(BinaryOp::Mult, left, right)
}

pub fn and(left: Expr, right: Expr) -> Expr {
    binary(BinaryOp::And, left, right)
}

pub fn or(left: Expr, right: Expr) -> Expr {
    binary(BinaryOp::Or, left, right)
}

pub fn equals(left: Expr, right: Expr) -> Expr {
    binary(BinaryOp::Equals, left, right)
}

pub fn lesser(left: Expr, right: Expr) -> Expr {
    binary(BinaryOp::Lesser, left, right)
}

pub fn seq(first: Stmt, second: Stmt) -> Stmt {
    Stmt::Sequence(Box::new(first), Box::new(second))
}

pub fn decl(name: impl Into<String>, value: Expr) -> Stmt {
    Stmt::Declaration {
        name: name.into(),
        value,
    }
}

pub fn assign(name: impl Into<String>, value: Expr) -> Stmt {
    Stmt::Assignment {
        name: name.into(),
        value,
    }
}

/// If-then-else
pub fn ite(condition: Expr, then_branch: Stmt, else_branch: Stmt) -> Stmt {
    Stmt::Conditional {
        condition,
        then_branch: Box::new(then_branch),
        else_branch: Box::new(else_branch),
    }
}

pub fn while_loop(condition: Expr, body: Stmt) -> Stmt {
    Stmt::Loop {
        condition,
        body: Box::new(body),
    }
}

pub fn print(e: Expr) -> Stmt {
    Stmt::Print(e)
}

/// Fold statements into right-nested sequences.
///
/// Returns `None` for an empty list; there is no empty statement.
pub fn block(stmts: impl IntoIterator<Item = Stmt>) -> Option<Stmt> {
    let mut stmts: Vec<Stmt> = stmts.into_iter().collect();
    let mut acc = stmts.pop()?;
    while let Some(prev) = stmts.pop() {
        acc = seq(prev, acc);
    }
    Some(acc)
}
