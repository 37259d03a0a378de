use std::fmt::Display;

use crate::{
    data::{Associativity, Function, Operator},
    tokeniser::Token,
    CompileError,
};

/// The name the free variable goes by when an expression is sampled.
pub const VARIABLE: &str = "x";

#[derive(Debug, PartialEq, Clone, Copy)]
pub enum Item {
    Number(f64),
    Variable,
    Operator(Operator),
    Function(Function),
}

/// An expression in postfix order, ready to be run against a value stack.
#[derive(Debug, PartialEq, Clone, Default)]
pub struct Postfix {
    pub items: Vec<Item>,
}

impl Display for Postfix {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, item) in self.items.iter().enumerate() {
            if i != 0 {
                f.write_str(" ")?;
            }
            match item {
                Item::Number(n) => write!(f, "{n}")?,
                Item::Variable => f.write_str(VARIABLE)?,
                Item::Operator(Operator::Negate) => f.write_str("neg")?,
                Item::Operator(op) => write!(f, "{op}")?,
                Item::Function(function) => write!(f, "{function}")?,
            }
        }
        Ok(())
    }
}

/// Entries held back on the operator stack until their operands are out.
#[derive(Debug, Clone, Copy)]
enum Pending {
    Operator(Operator),
    Function(Function),
    OpenBracket,
}

impl Pending {
    fn into_item(self) -> Option<Item> {
        match self {
            Pending::Operator(op) => Some(Item::Operator(op)),
            Pending::Function(function) => Some(Item::Function(function)),
            Pending::OpenBracket => None,
        }
    }
}

/// Reorders infix tokens into postfix with the shunting-yard algorithm.
pub fn postfixify(tokens: &[Token]) -> Result<Postfix, CompileError> {
    let mut output = Vec::new();
    let mut stack: Vec<Pending> = Vec::new();

    // a `-` or `+` here is a sign, not a binary operator
    let mut expecting_operand = true;

    for token in tokens {
        match token {
            Token::Number(n) => {
                output.push(Item::Number(*n));
                expecting_operand = false;
            }
            Token::Identifier(name) => {
                if let Some(function) = Function::from_name(name) {
                    stack.push(Pending::Function(function));
                    expecting_operand = true;
                } else if name == VARIABLE {
                    output.push(Item::Variable);
                    expecting_operand = false;
                } else {
                    return Err(CompileError::UnknownIdentifier(name.clone()));
                }
            }
            Token::OpenBracket => {
                stack.push(Pending::OpenBracket);
                expecting_operand = true;
            }
            Token::CloseBracket => {
                loop {
                    match stack.pop() {
                        Some(Pending::OpenBracket) => break,
                        Some(pending) => output.extend(pending.into_item()),
                        None => return Err(CompileError::UnmatchedCloseBracket),
                    }
                }
                if let Some(Pending::Function(function)) = stack.last() {
                    output.push(Item::Function(*function));
                    stack.pop();
                }
                expecting_operand = false;
            }
            Token::Operator(op) if expecting_operand => match op {
                Operator::Subtract => stack.push(Pending::Operator(Operator::Negate)),
                Operator::Add => {}
                op => return Err(CompileError::MissingOperand(*op)),
            },
            Token::Operator(op) => {
                while let Some(Pending::Operator(top)) = stack.last() {
                    let yields = top.precedence() > op.precedence()
                        || (top.precedence() == op.precedence()
                            && op.associativity() == Associativity::Left);
                    if !yields {
                        break;
                    }
                    output.push(Item::Operator(*top));
                    stack.pop();
                }
                stack.push(Pending::Operator(*op));
                expecting_operand = true;
            }
        }
    }

    while let Some(pending) = stack.pop() {
        match pending.into_item() {
            Some(item) => output.push(item),
            None => return Err(CompileError::UnclosedBracket),
        }
    }

    Ok(Postfix { items: output })
}
