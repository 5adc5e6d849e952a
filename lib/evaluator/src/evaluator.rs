use errors::RabbitError;
use parser::{Expr, Parser, Program};
use scanner::{Operator, Scanner};

#[derive(Debug, thiserror::Error, PartialEq)]
pub enum RuntimeError {
    #[error("Tried to divide by zero")]
    DivisionByZero,
    #[error("Arithmetic overflow")]
    Overflow,
    #[error("Operator `{0}` applied to zero arguments")]
    MissingOperand(Operator),
}

/// Pipeline error, tagged with the stage that failed. A failing stage
/// aborts the remaining stages for that input.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum Error {
    #[error("{0}")]
    Lexical(RabbitError),
    #[error("{0}")]
    Syntax(RabbitError),
    #[error("runtime error: {0}")]
    Runtime(#[from] RuntimeError),
}

/// Runs a whole source string through scanner, parser and evaluator and
/// returns one value per top-level operation, in program order.
pub fn run_source(source: &str) -> Result<Vec<i64>, Error> {
    let tokens = Scanner::new(source).scan_tokens().map_err(Error::Lexical)?;
    log::trace!("tokens: {:?}", tokens);

    let program = Parser::new(tokens).parse().map_err(Error::Syntax)?;
    log::trace!("program: {}", program);

    Ok(Evaluator.evaluate(&program)?)
}

/// Post-order tree walk. Pure: the tree is never mutated and no state is
/// kept across calls.
#[derive(Debug, Default)]
pub struct Evaluator;

impl Evaluator {
    pub fn evaluate(&self, program: &Program) -> Result<Vec<i64>, RuntimeError> {
        program.body().iter().map(|expr| self.traverse(expr)).collect()
    }

    fn traverse(&self, expr: &Expr) -> Result<i64, RuntimeError> {
        match expr {
            Expr::Integer(n) => Ok(*n),
            Expr::Operation { operator, arguments } => {
                let values = arguments
                    .iter()
                    .map(|arg| self.traverse(arg))
                    .collect::<Result<Vec<_>, _>>()?;
                self.apply(*operator, &values)
            }
        }
    }

    // All arithmetic is checked: out-of-range results become a
    // RuntimeError instead of a panic, so one bad line cannot take down
    // the prompt loop. `i64::MIN / -1` overflows too, hence checked_div.
    fn apply(&self, operator: Operator, values: &[i64]) -> Result<i64, RuntimeError> {
        match operator {
            Operator::Plus => values
                .iter()
                .try_fold(0i64, |acc, v| acc.checked_add(*v).ok_or(RuntimeError::Overflow)),
            Operator::Star => values
                .iter()
                .try_fold(1i64, |acc, v| acc.checked_mul(*v).ok_or(RuntimeError::Overflow)),
            // Left folds from the first value. With a single argument the
            // result is that argument, not its negation or inverse.
            Operator::Minus => {
                let (first, rest) = self.first_operand(operator, values)?;
                rest.iter()
                    .try_fold(first, |acc, v| acc.checked_sub(*v).ok_or(RuntimeError::Overflow))
            }
            Operator::Slash => {
                let (first, rest) = self.first_operand(operator, values)?;
                rest.iter().try_fold(first, |acc, v| {
                    if *v == 0 {
                        Err(RuntimeError::DivisionByZero)
                    } else {
                        acc.checked_div(*v).ok_or(RuntimeError::Overflow)
                    }
                })
            }
        }
    }

    // The parser guarantees at least one argument; a hand-built tree may
    // not, and should get an error rather than a panic.
    fn first_operand<'v>(
        &self,
        operator: Operator,
        values: &'v [i64],
    ) -> Result<(i64, &'v [i64]), RuntimeError> {
        match values.split_first() {
            Some((first, rest)) => Ok((*first, rest)),
            None => Err(RuntimeError::MissingOperand(operator)),
        }
    }
}
