use std::fmt::Display;

use crate::{data::AngleMode, sample, sampler::Viewport, solve, CompileError, SampledCurve};

/// What a calculator shows after evaluating a line.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Outcome {
    /// Nothing was entered.
    Empty,
    Value(f64),
    Error,
}

impl Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::Empty => Ok(()),
            Outcome::Value(n) => write!(f, "{n}"),
            Outcome::Error => f.write_str("Error"),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Entry {
    pub expression: String,
    pub outcome: Outcome,
}

/// The state a calculator front end keeps between evaluations: the angle
/// mode, the last answer and this session's history.
#[derive(Debug, Default)]
pub struct Session {
    angle_mode: AngleMode,
    answer: Option<f64>,
    history: Vec<Entry>,
}

impl Session {
    pub fn new(angle_mode: AngleMode) -> Self {
        Self {
            angle_mode,
            ..Default::default()
        }
    }

    pub fn answer(&self) -> Option<f64> {
        self.answer
    }

    pub fn history(&self) -> &[Entry] {
        &self.history
    }

    pub fn angle_mode(&self) -> AngleMode {
        self.angle_mode
    }

    pub fn set_angle_mode(&mut self, angle_mode: AngleMode) {
        self.angle_mode = angle_mode;
    }

    pub fn toggle_angle_mode(&mut self) -> AngleMode {
        self.angle_mode = self.angle_mode.toggled();
        self.angle_mode
    }

    /// Expands a line that starts with a binary operator into one that
    /// continues from the previous answer.
    fn chained(&self, line: &str) -> String {
        let line = line.trim();
        match (self.answer, line.chars().next()) {
            (Some(answer), Some('+' | '*' | '/' | '^' | '×' | '÷')) if answer.is_sign_negative() => {
                format!("({answer}){line}")
            }
            (Some(answer), Some('+' | '*' | '/' | '^' | '×' | '÷')) => format!("{answer}{line}"),
            _ => line.to_string(),
        }
    }

    pub fn evaluate(&mut self, line: &str) -> Outcome {
        let expression = self.chained(line);

        let outcome = match solve(&expression, self.angle_mode) {
            Ok(None) => Outcome::Empty,
            Ok(Some(n)) => Outcome::Value(n),
            Err(_) => Outcome::Error,
        };

        if let Outcome::Value(n) = outcome {
            self.answer = Some(n);
        }
        if outcome != Outcome::Empty {
            self.history.push(Entry {
                expression,
                outcome,
            });
        }

        outcome
    }

    /// Compiles `line` for plotting. The curve is sampled in the angle mode
    /// current at the time of this call.
    pub fn plot(&self, line: &str, viewport: Viewport) -> Result<SampledCurve, CompileError> {
        sample(line.trim(), viewport, self.angle_mode)
    }

    pub fn clear(&mut self) {
        self.answer = None;
        self.history.clear();
    }
}

#[cfg(test)]
mod test {
    use crate::{
        data::AngleMode,
        sampler::Viewport,
        session::{Outcome, Session},
    };

    #[test]
    fn chaining() {
        let mut session = Session::default();
        assert_eq!(Outcome::Value(4.0), session.evaluate("2+2"));
        assert_eq!(Outcome::Value(8.0), session.evaluate("*2"));
        assert_eq!(Outcome::Value(8.0), session.evaluate("4*2"));
        assert_eq!(Outcome::Value(11.0), session.evaluate("+ 3"));
    }

    #[test]
    fn chaining_negative_answer() {
        let mut session = Session::default();
        assert_eq!(Outcome::Value(-4.0), session.evaluate("1-5"));
        assert_eq!(Outcome::Value(16.0), session.evaluate("^2"));
    }

    #[test]
    fn chaining_negative_zero_answer() {
        let mut session = Session::default();
        session.evaluate("-1*0");
        assert!(session.answer().is_some_and(|n| n.is_sign_negative()));
        match session.evaluate("^2") {
            Outcome::Value(n) => assert!(n == 0.0 && n.is_sign_positive()),
            other => panic!("expected a value, got {other:?}"),
        }
        assert_eq!("(-0)^2", session.history()[1].expression);
    }

    #[test]
    fn only_skipped_characters_is_an_error() {
        let mut session = Session::default();
        assert_eq!(Outcome::Error, session.evaluate("$"));
        assert_eq!(1, session.history().len());
        assert_eq!(Outcome::Empty, session.evaluate("  "));
        assert_eq!(1, session.history().len());
    }

    #[test]
    fn leading_minus_is_not_chained() {
        let mut session = Session::default();
        session.evaluate("10");
        assert_eq!(Outcome::Value(-3.0), session.evaluate("-3"));
    }

    #[test]
    fn empty_and_error_are_distinct() {
        let mut session = Session::default();
        assert_eq!(Outcome::Empty, session.evaluate(""));
        assert_eq!(Outcome::Error, session.evaluate("1/0"));
        assert_eq!("", Outcome::Empty.to_string());
        assert_eq!("Error", Outcome::Error.to_string());
        assert_eq!(1, session.history().len());
        assert_eq!(None, session.answer());
    }

    #[test]
    fn error_keeps_previous_answer() {
        let mut session = Session::default();
        session.evaluate("6");
        session.evaluate("1/0");
        assert_eq!(Some(6.0), session.answer());
        assert_eq!(Outcome::Value(3.0), session.evaluate("/2"));
    }

    #[test]
    fn angle_mode_toggle() {
        let mut session = Session::new(AngleMode::Deg);
        assert_eq!(Outcome::Value(1.0), session.evaluate("sin(90)"));
        assert_eq!(AngleMode::Rad, session.toggle_angle_mode());
        assert_eq!(AngleMode::Rad, session.angle_mode());
        match session.evaluate("sin(90)") {
            Outcome::Value(n) => assert!((n - 0.8939966636005579).abs() < 1e-12),
            other => panic!("expected a value, got {other:?}"),
        }
    }

    #[test]
    fn set_angle_mode() {
        let mut session = Session::new(AngleMode::Rad);
        session.set_angle_mode(AngleMode::Deg);
        assert_eq!(AngleMode::Deg, session.angle_mode());
        match session.evaluate("sin(30)") {
            Outcome::Value(n) => assert!((n - 0.5).abs() < 1e-12),
            other => panic!("expected a value, got {other:?}"),
        }
    }

    #[test]
    fn plot() {
        let session = Session::new(AngleMode::Rad);
        let plot = session.plot("sin(x)", Viewport::new(200, 40.0)).unwrap();
        assert_eq!(200, plot.samples().count());
        assert!(session.plot("sin(x", Viewport::new(200, 40.0)).is_err());
    }

    #[test]
    fn clear() {
        let mut session = Session::default();
        session.evaluate("1+1");
        session.clear();
        assert!(session.history().is_empty());
        assert_eq!(Outcome::Error, session.evaluate("*2"));
    }
}
