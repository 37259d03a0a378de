use thiserror::Error;

use crate::{
    data::{AngleMode, Operator},
    parser::{Item, Postfix},
};

#[derive(Error, Debug, PartialEq, Clone)]
pub enum EvalError {
    #[error("Nothing to evaluate")]
    Empty,

    #[error("Missing operand for `{0}`")]
    StackUnderflow(String),

    #[error("{0} values left over, expected exactly one")]
    LeftoverOperands(usize),

    #[error("Variable `x` is not bound")]
    UnboundVariable,

    #[error("Result is not a finite number: `{0}`")]
    NotFinite(f64),
}

fn pop(stack: &mut Vec<f64>, by: impl ToString) -> Result<f64, EvalError> {
    stack
        .pop()
        .ok_or_else(|| EvalError::StackUnderflow(by.to_string()))
}

/// Runs `postfix` on a fresh value stack. Trigonometric operands are read
/// in `mode`; `x` binds the free variable, if the expression has one.
pub fn run(postfix: &Postfix, mode: AngleMode, x: Option<f64>) -> Result<f64, EvalError> {
    let mut stack: Vec<f64> = Vec::with_capacity(postfix.items.len());

    for item in &postfix.items {
        let value = match item {
            Item::Number(n) => *n,
            Item::Variable => x.ok_or(EvalError::UnboundVariable)?,
            Item::Function(function) => {
                let operand = pop(&mut stack, function)?;
                if function.takes_angle() {
                    function.apply(mode.to_radians(operand))
                } else {
                    function.apply(operand)
                }
            }
            Item::Operator(Operator::Negate) => -pop(&mut stack, Operator::Negate)?,
            Item::Operator(op) => {
                let right = pop(&mut stack, op)?;
                let left = pop(&mut stack, op)?;
                match op {
                    Operator::Add => left + right,
                    Operator::Subtract => left - right,
                    Operator::Multiply => left * right,
                    Operator::Divide => left / right,
                    Operator::Power => left.powf(right),
                    Operator::Negate => unreachable!(),
                }
            }
        };
        stack.push(value);
    }

    match stack.as_slice() {
        [] => Err(EvalError::Empty),
        [result] if result.is_finite() => Ok(*result),
        [result] => Err(EvalError::NotFinite(*result)),
        rest => Err(EvalError::LeftoverOperands(rest.len())),
    }
}
