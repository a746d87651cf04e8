//! Bundled demo programs
//!
//! Built with the construction helpers; there is no concrete syntax to read.

use whilst::ast::build::*;
use whilst::{Expr, Stmt};

pub enum Program {
    Expr(Expr),
    Stmt(Stmt),
}

pub struct Demo {
    pub name: &'static str,
    pub description: &'static str,
    pub program: Program,
}

impl Demo {
    fn expr(name: &'static str, description: &'static str, expr: Expr) -> Self {
        Demo {
            name,
            description,
            program: Program::Expr(expr),
        }
    }

    fn stmt(name: &'static str, description: &'static str, stmt: Stmt) -> Self {
        Demo {
            name,
            description,
            program: Program::Stmt(stmt),
        }
    }
}

pub fn all() -> Vec<Demo> {
    vec![
        Demo::expr(
            "arith",
            "integer arithmetic",
            plus(mult(number(1), number(2)), number(0)),
        ),
        Demo::expr(
            "and-short",
            "`&&` with a false left operand ignores the right one",
            and(boolean(false), number(0)),
        ),
        Demo::expr(
            "or-mismatch",
            "`||` with a false left operand needs a boolean right one",
            or(boolean(false), number(0)),
        ),
        Demo::expr("negate-int", "negating an integer", negate(number(2))),
        Demo::expr("lesser", "integer comparison", lesser(number(2), number(4))),
        Demo::expr(
            "group",
            "grouping is transparent",
            group(lesser(number(6), number(4))),
        ),
        Demo::stmt(
            "reassign",
            "assignment may change a variable's type",
            seq(assign("z", boolean(false)), assign("z", number(4))),
        ),
        Demo::stmt(
            "decl-assign",
            "declare, then assign a boolean",
            seq(
                decl("x", mult(number(2), number(2))),
                assign("x", boolean(true)),
            ),
        ),
        Demo::stmt(
            "branch",
            "if-then-else on a comparison",
            ite(
                lesser(number(5), number(4)),
                decl("x", boolean(true)),
                decl("y", number(3)),
            ),
        ),
        Demo::stmt(
            "count",
            "counting loop",
            seq(
                decl("i", number(0)),
                seq(
                    while_loop(
                        lesser(var("i"), number(3)),
                        assign("i", plus(var("i"), number(1))),
                    ),
                    print(var("i")),
                ),
            ),
        ),
    ]
}

pub fn find(name: &str) -> Option<Demo> {
    all().into_iter().find(|d| d.name == name)
}
