use thiserror::Error;

use crate::{
    data::Operator,
    state::{drive, SequenceAction, State, Transition},
};

#[derive(Debug, PartialEq, Clone)]
pub enum Token {
    Number(f64),
    /// A function name, or the free variable `x`.
    Identifier(String),
    Operator(Operator),
    OpenBracket,
    CloseBracket,
}

#[derive(Error, Debug, PartialEq, Clone)]
pub enum TokeniseError {
    #[error("Invalid number: `{0}`")]
    InvalidNumber(String),
}

type TokenTransition = Transition<char, Token, TokeniseError>;

struct NormalState {}
impl State<char, Token, TokeniseError> for NormalState {
    fn handle(&mut self, c: Option<char>) -> Result<TokenTransition, TokeniseError> {
        match c {
            Some(c) if c.is_ascii_digit() || c == '.' => Ok((
                None,
                Some(Box::new(NumberState {
                    ..Default::default()
                })),
                SequenceAction::Hold,
            )),

            Some(c) if c.is_ascii_lowercase() => Ok((
                None,
                Some(Box::new(IdentifierState {
                    ..Default::default()
                })),
                SequenceAction::Hold,
            )),

            Some('×') => Ok((
                Some(Token::Operator(Operator::Multiply)),
                None,
                SequenceAction::Advance,
            )),
            Some('÷') => Ok((
                Some(Token::Operator(Operator::Divide)),
                None,
                SequenceAction::Advance,
            )),
            Some('(') => Ok((Some(Token::OpenBracket), None, SequenceAction::Advance)),
            Some(')') => Ok((Some(Token::CloseBracket), None, SequenceAction::Advance)),

            Some(c) => match Operator::from_symbol(c) {
                Some(op) => Ok((Some(Token::Operator(op)), None, SequenceAction::Advance)),
                None => {
                    if !c.is_whitespace() {
                        log::trace!("dropping unrecognised character {c:?}");
                    }
                    Ok((None, None, SequenceAction::Advance))
                }
            },
            None => Ok((None, None, SequenceAction::Done)),
        }
    }
}

#[derive(Default)]
struct NumberState {
    string: String,
}
impl NumberState {
    fn finish(&mut self) -> Result<Token, TokeniseError> {
        let string = std::mem::take(&mut self.string);
        string
            .parse()
            .map(Token::Number)
            .map_err(|_| TokeniseError::InvalidNumber(string))
    }
}
impl State<char, Token, TokeniseError> for NumberState {
    fn handle(&mut self, c: Option<char>) -> Result<TokenTransition, TokeniseError> {
        match c {
            Some(c) if c.is_ascii_digit() || c == '.' => {
                self.string.push(c);
                Ok((None, None, SequenceAction::Advance))
            }
            None => Ok((Some(self.finish()?), None, SequenceAction::Done)),
            _ => Ok((
                Some(self.finish()?),
                Some(Box::new(NormalState {})),
                SequenceAction::Hold,
            )),
        }
    }
}

#[derive(Default)]
struct IdentifierState {
    identifier: String,
}
impl State<char, Token, TokeniseError> for IdentifierState {
    fn handle(&mut self, c: Option<char>) -> Result<TokenTransition, TokeniseError> {
        match c {
            Some(c) if c.is_ascii_lowercase() => {
                self.identifier.push(c);
                Ok((None, None, SequenceAction::Advance))
            }
            None => Ok((
                Some(Token::Identifier(std::mem::take(&mut self.identifier))),
                None,
                SequenceAction::Done,
            )),
            _ => Ok((
                Some(Token::Identifier(std::mem::take(&mut self.identifier))),
                Some(Box::new(NormalState {})),
                SequenceAction::Hold,
            )),
        }
    }
}

/// Splits `input` into tokens. Characters outside the lexical classes
/// (whitespace, capitals, stray symbols) are skipped rather than rejected.
pub fn tokenise(input: &str) -> Result<Vec<Token>, TokeniseError> {
    let chars: Vec<char> = input.chars().collect();
    let tokens = drive::<char, Token, TokeniseError>(Box::new(NormalState {}), &chars)?;
    log::trace!("tokenised {input:?} into {tokens:?}");
    Ok(tokens)
}

#[cfg(test)]
mod test {
    use crate::{
        data::Operator,
        tokeniser::{tokenise, Token, TokeniseError},
    };

    #[test]
    fn number() {
        assert_eq!(vec![Token::Number(100.0)], tokenise("100.0").unwrap());
        assert_eq!(vec![Token::Number(0.5)], tokenise(".5").unwrap());
    }

    #[test]
    fn empty() {
        assert_eq!(Vec::<Token>::new(), tokenise("").unwrap());
        assert_eq!(Vec::<Token>::new(), tokenise("  \t").unwrap());
    }

    #[test]
    fn function() {
        assert_eq!(
            vec![
                Token::Identifier("sin".to_string()),
                Token::OpenBracket,
                Token::Number(1.0),
                Token::CloseBracket
            ],
            tokenise("sin(1)").unwrap()
        );
    }

    #[test]
    fn multiply() {
        assert_eq!(
            vec![
                Token::Number(100.0),
                Token::Operator(Operator::Multiply),
                Token::Number(99.0)
            ],
            tokenise("100.0*99").unwrap()
        );
    }

    #[test]
    fn glyphs() {
        assert_eq!(
            vec![
                Token::Number(6.0),
                Token::Operator(Operator::Multiply),
                Token::Number(3.0),
                Token::Operator(Operator::Divide),
                Token::Number(2.0)
            ],
            tokenise("6×3÷2").unwrap()
        );
    }

    #[test]
    fn skips_unknown_characters() {
        assert_eq!(
            vec![
                Token::Number(2.0),
                Token::Operator(Operator::Power),
                Token::Identifier("x".to_string())
            ],
            tokenise(" 2 ^ X x $").unwrap()
        );
    }

    #[test]
    fn identifiers_end_at_digits() {
        assert_eq!(
            vec![
                Token::Identifier("log".to_string()),
                Token::Number(10.0)
            ],
            tokenise("log10").unwrap()
        );
    }

    #[test]
    fn invalid_number() {
        assert_eq!(
            Err(TokeniseError::InvalidNumber("1.2.3".to_string())),
            tokenise("1.2.3+4")
        );
        assert_eq!(
            Err(TokeniseError::InvalidNumber(".".to_string())),
            tokenise("(.)")
        );
    }
}
