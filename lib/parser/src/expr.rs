use std::fmt::{self, Display, Formatter};

use itertools::Itertools;
use scanner::Operator;

/// A node of the syntax tree. Exactly two cases, so the evaluator's match
/// stays exhaustive and compiler-checked.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    Integer(i64),
    Operation { operator: Operator, arguments: Vec<Expr> },
}

impl Display for Expr {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Expr::Integer(n) => write!(f, "{}", n),
            Expr::Operation { operator, arguments } => {
                write!(f, "({} {})", operator, arguments.iter().join(" "))
            }
        }
    }
}

/// The ordered top-level operations parsed from one input. The parser only
/// ever puts `Expr::Operation` nodes in here.
#[derive(Debug, Clone, PartialEq)]
pub struct Program(pub Vec<Expr>);

impl Program {
    pub fn body(&self) -> &[Expr] {
        &self.0
    }
}

impl Display for Program {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.iter().join("\n"))
    }
}
