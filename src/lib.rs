mod data;
mod interpreter;
mod parser;
mod sampler;
mod session;
mod state;
mod tokeniser;


pub use data::{AngleMode, Associativity, Function, Operator, ParseAngleModeError};
pub use interpreter::{run, EvalError};
pub use parser::{Item, Postfix, VARIABLE};
pub use sampler::{Samples, Viewport};
pub use session::{Entry, Outcome, Session};
pub use tokeniser::{tokenise, Token, TokeniseError};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Clone)]
pub enum CompileError {
    #[error(transparent)]
    Tokenise(#[from] TokeniseError),

    #[error("Unknown identifier: `{0}`")]
    UnknownIdentifier(String),

    #[error("Missing operand before `{0}`")]
    MissingOperand(Operator),

    #[error("`)` without a matching `(`")]
    UnmatchedCloseBracket,

    #[error("`(` is never closed")]
    UnclosedBracket,
}

/// Any failure on the way from text to a number.
#[derive(Debug, Error, PartialEq, Clone)]
pub enum CalcError {
    #[error(transparent)]
    Compile(#[from] CompileError),

    #[error(transparent)]
    Eval(#[from] EvalError),
}

pub fn compile(expr: &str) -> Result<Postfix, CompileError> {
    let postfix = parser::postfixify(tokeniser::tokenise(expr)?.as_slice())?;
    log::debug!("compiled {expr:?} to [{postfix}]");
    Ok(postfix)
}

/// Evaluates `expr`, reading trigonometric operands in `mode`.
///
/// Returns `Ok(None)` when there is nothing to evaluate, which is not an
/// error: a blank display stays blank.
pub fn solve(expr: &str, mode: AngleMode) -> Result<Option<f64>, CalcError> {
    let result = evaluate(expr, mode);
    if let Err(error) = &result {
        log::debug!("failed to solve {expr:?}: {error}");
    }
    result
}

fn evaluate(expr: &str, mode: AngleMode) -> Result<Option<f64>, CalcError> {
    if expr.trim().is_empty() {
        return Ok(None);
    }
    let tokens = tokeniser::tokenise(expr).map_err(CompileError::from)?;
    let postfix = parser::postfixify(&tokens)?;
    Ok(Some(run(&postfix, mode, None)?))
}

/// Compiles `expr` once and samples it across `viewport` with `x` bound to
/// each column's position.
pub fn sample(
    expr: &str,
    viewport: Viewport,
    mode: AngleMode,
) -> Result<SampledCurve, CompileError> {
    Ok(SampledCurve {
        postfix: compile(expr)?,
        viewport,
        mode,
    })
}

/// An owned, compiled expression together with where to sample it.
#[derive(Debug, Clone)]
pub struct SampledCurve {
    postfix: Postfix,
    viewport: Viewport,
    mode: AngleMode,
}

impl SampledCurve {
    pub fn samples(&self) -> Samples<'_> {
        self.postfix.sample(self.viewport, self.mode)
    }
}

impl<'a> IntoIterator for &'a SampledCurve {
    type Item = (u32, f64);
    type IntoIter = Samples<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.samples()
    }
}
