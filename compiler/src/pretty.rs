//! Pretty-printer for expressions and statements
//!
//! Renders a concrete-syntax-like string for display and debugging. The
//! output is never parsed back. Each case recurses only into the node's
//! children, so printing always terminates.

use std::fmt;

use crate::ast::{Expr, Literal, Stmt};

impl Expr {
    /// Render this expression
    pub fn pretty(&self) -> String {
        self.to_string()
    }
}

impl Stmt {
    /// Render this statement
    pub fn pretty(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Literal::Bool(b) => write!(f, "{}", b),
            Literal::Num(n) => write!(f, "{}", n),
        }
    }
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expr::Literal(lit) => write!(f, "{}", lit),
            Expr::Variable(name) => f.write_str(name),
            Expr::Negate(inner) => write!(f, "not {}", inner),
            Expr::Binary { op, left, right } => {
                write!(f, "({} {} {})", left, op.symbol(), right)
            }
            Expr::Group(inner) => write!(f, "({})", inner),
        }
    }
}

impl fmt::Display for Stmt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Stmt::Sequence(first, second) => write!(f, "{}; {}", first, second),
            Stmt::Declaration { name, value } => write!(f, "{} := {}", name, value),
            Stmt::Assignment { name, value } => write!(f, "{} = {}", name, value),
            Stmt::Conditional {
                condition,
                then_branch,
                else_branch,
            } => write!(
                f,
                "if {} {{{}}} else {{{}}}",
                condition, then_branch, else_branch
            ),
            Stmt::Loop { condition, body } => write!(f, "while {} {{{}}}", condition, body),
            Stmt::Print(expr) => write!(f, "print {}", expr),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::ast::build::*;

    #[test]
    fn test_literals() {
        assert_eq!(number(-3).pretty(), "-3");
        assert_eq!(boolean(false).pretty(), "false");
    }

    #[test]
    fn test_group_wraps_once() {
        assert_eq!(group(var("x")).pretty(), "(x)");
        assert_eq!(group(lesser(number(6), number(4))).pretty(), "((6 < 4))");
    }

    #[test]
    fn test_print_renders_inner_expression() {
        assert_eq!(print(plus(var("x"), number(1))).pretty(), "print (x + 1)");
    }

    #[test]
    fn test_nested_statements() {
        let s = ite(
            var("b"),
            seq(decl("x", number(1)), print(var("x"))),
            assign("x", number(2)),
        );
        assert_eq!(s.pretty(), "if b {x := 1; print x} else {x = 2}");
    }
}
