use std::{fmt::Display, str::FromStr};

use calcula_proc_macro::FunctionTable;
use thiserror::Error;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Associativity {
    Left,
    Right,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Operator {
    Add,
    Subtract,
    Multiply,
    Divide,
    Power,
    /// Prefix `-`. The tokeniser only ever produces [`Operator::Subtract`];
    /// the parser decides from position whether a `-` is unary.
    Negate,
}

impl Operator {
    pub fn from_symbol(c: char) -> Option<Self> {
        match c {
            '+' => Some(Self::Add),
            '-' => Some(Self::Subtract),
            '*' => Some(Self::Multiply),
            '/' => Some(Self::Divide),
            '^' => Some(Self::Power),
            _ => None,
        }
    }

    pub fn symbol(&self) -> char {
        match self {
            Self::Add => '+',
            Self::Subtract | Self::Negate => '-',
            Self::Multiply => '*',
            Self::Divide => '/',
            Self::Power => '^',
        }
    }

    pub fn precedence(&self) -> u8 {
        match self {
            Self::Add | Self::Subtract => 2,
            Self::Multiply | Self::Divide => 3,
            Self::Power | Self::Negate => 4,
        }
    }

    pub fn associativity(&self) -> Associativity {
        match self {
            Self::Power | Self::Negate => Associativity::Right,
            _ => Associativity::Left,
        }
    }
}

impl Display for Operator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Every single-argument function an expression may call, by name.
#[derive(Clone, Copy, Debug, PartialEq, Eq, FunctionTable)]
pub enum Function {
    Abs,
    Acos,
    Acosh,
    Asin,
    Asinh,
    Atan,
    Atanh,
    Cbrt,
    Ceil,
    Cos,
    Cosh,
    Exp,
    Floor,
    Ln,
    Log,
    Round,
    Sign,
    Sin,
    Sinh,
    Sqrt,
    Tan,
    Tanh,
    Trunc,
}

impl Function {
    /// Whether the operand is an angle and so depends on [`AngleMode`].
    pub fn takes_angle(&self) -> bool {
        matches!(self, Self::Sin | Self::Cos | Self::Tan)
    }

    pub fn apply(&self, n: f64) -> f64 {
        match self {
            Self::Abs => n.abs(),
            Self::Acos => n.acos(),
            Self::Acosh => n.acosh(),
            Self::Asin => n.asin(),
            Self::Asinh => n.asinh(),
            Self::Atan => n.atan(),
            Self::Atanh => n.atanh(),
            Self::Cbrt => n.cbrt(),
            Self::Ceil => n.ceil(),
            Self::Cos => n.cos(),
            Self::Cosh => n.cosh(),
            Self::Exp => n.exp(),
            Self::Floor => n.floor(),
            Self::Ln => n.ln(),
            Self::Log => n.log10(),
            Self::Round => n.round(),
            // signum maps 0 to 1
            Self::Sign if n == 0.0 => n,
            Self::Sign => n.signum(),
            Self::Sin => n.sin(),
            Self::Sinh => n.sinh(),
            Self::Sqrt => n.sqrt(),
            Self::Tan => n.tan(),
            Self::Tanh => n.tanh(),
            Self::Trunc => n.trunc(),
        }
    }
}

impl Display for Function {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// How the operands of `sin`, `cos` and `tan` are read.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AngleMode {
    #[default]
    Deg,
    Rad,
}

impl AngleMode {
    pub fn toggled(self) -> Self {
        match self {
            Self::Deg => Self::Rad,
            Self::Rad => Self::Deg,
        }
    }

    pub fn to_radians(self, angle: f64) -> f64 {
        match self {
            Self::Deg => angle * std::f64::consts::PI / 180.0,
            Self::Rad => angle,
        }
    }
}

#[derive(Error, Debug, PartialEq)]
#[error("Unknown angle mode: `{0}`")]
pub struct ParseAngleModeError(String);

impl FromStr for AngleMode {
    type Err = ParseAngleModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "deg" | "degrees" => Ok(Self::Deg),
            "rad" | "radians" => Ok(Self::Rad),
            _ => Err(ParseAngleModeError(s.to_string())),
        }
    }
}

impl Display for AngleMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::Deg => "DEG",
            Self::Rad => "RAD",
        })
    }
}
