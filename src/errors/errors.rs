use std::fmt::Display;

use thiserror::Error;

use crate::Position;

#[derive(Debug, Clone, PartialEq)]
pub struct Error {
    internal_error: Box<ErrorImpl>,
    position: Option<Position>,
}

impl Error {
    /// `position` is `None` when the error was detected after the input ran out.
    pub fn new(error_impl: ErrorImpl, position: Option<Position>) -> Self {
        Error {
            internal_error: Box::new(error_impl),
            position,
        }
    }

    pub fn get_position(&self) -> Option<&Position> {
        self.position.as_ref()
    }

    pub fn get_line(&self) -> Option<u32> {
        self.position.as_ref().map(Position::line)
    }

    pub fn get_kind(&self) -> &ErrorImpl {
        &self.internal_error
    }

    pub fn get_error_name(&self) -> &str {
        match &*self.internal_error {
            ErrorImpl::UnrecognisedToken { .. } => "UnrecognisedToken",
            ErrorImpl::UnexpectedToken { .. } => "UnexpectedToken",
            ErrorImpl::ExpectedToken { .. } => "ExpectedToken",
            ErrorImpl::MissingToken { .. } => "MissingToken",
            ErrorImpl::TrailingInput { .. } => "TrailingInput",
            ErrorImpl::InvalidIncrementOperand { .. } => "InvalidIncrementOperand",
            ErrorImpl::NumberParseError { .. } => "NumberParseError",
            ErrorImpl::NestingTooDeep { .. } => "NestingTooDeep",
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        match &*self.internal_error {
            ErrorImpl::UnrecognisedToken { .. } => ErrorTip::None,
            ErrorImpl::UnexpectedToken { token } => ErrorTip::Suggestion(format!(
                "Unexpected token: `{}`, expected a number, an identifier or `(`",
                token
            )),
            ErrorImpl::ExpectedToken { expected, found } => ErrorTip::Suggestion(format!(
                "Expected `{}` but got `{}`",
                expected, found
            )),
            ErrorImpl::MissingToken { expected } => ErrorTip::Suggestion(format!(
                "Expected `{}` but reached the end of input",
                expected
            )),
            ErrorImpl::TrailingInput { token } => ErrorTip::Suggestion(format!(
                "Unexpected `{}` after the end of the program, did you forget a `{{`?",
                token
            )),
            ErrorImpl::InvalidIncrementOperand { operator, found } => {
                ErrorTip::Suggestion(format!(
                    "`{}` can only be applied to an identifier, found `{}`",
                    operator, found
                ))
            }
            ErrorImpl::NumberParseError { token } => {
                ErrorTip::Suggestion(format!("Invalid number: `{}`", token))
            }
            ErrorImpl::NestingTooDeep { limit } => ErrorTip::Suggestion(format!(
                "Blocks and parentheses can be nested at most {} levels deep",
                limit
            )),
        }
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.position {
            Some(position) => write!(f, "Error at line {}: {}", position.line(), self.internal_error),
            None => write!(f, "Error: {}", self.internal_error),
        }
    }
}

impl std::error::Error for Error {}

pub enum ErrorTip {
    None,
    Suggestion(String),
}

impl Display for ErrorTip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorTip::None => write!(f, ""),
            ErrorTip::Suggestion(suggestion) => write!(f, "{}", suggestion),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ErrorImpl {
    #[error("unrecognised token: {token:?}")]
    UnrecognisedToken { token: String },
    #[error("can't make rule \"base\" from {token:?}")]
    UnexpectedToken { token: String },
    #[error("expected symbol {expected:?} but got {found:?}")]
    ExpectedToken { expected: String, found: String },
    #[error("expected symbol {expected:?}")]
    MissingToken { expected: String },
    #[error("unexpected symbol at the end of expression: {token:?}")]
    TrailingInput { token: String },
    #[error("operand of {operator:?} must be an identifier, got {found:?}")]
    InvalidIncrementOperand { operator: String, found: String },
    #[error("error parsing number: {token:?}")]
    NumberParseError { token: String },
    #[error("nesting deeper than {limit} levels")]
    NestingTooDeep { limit: usize },
}

/// Every diagnostic reported by a failed parse, in the order they were found.
#[derive(Error, Debug, Clone, PartialEq)]
#[error("parsing failed with {} error(s)", .0.len())]
pub struct ParseErrors(pub Vec<Error>);

impl ParseErrors {
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Error> {
        self.0.iter()
    }

    pub fn first(&self) -> Option<&Error> {
        self.0.first()
    }
}

impl IntoIterator for ParseErrors {
    type Item = Error;
    type IntoIter = std::vec::IntoIter<Error>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a ParseErrors {
    type Item = &'a Error;
    type IntoIter = std::slice::Iter<'a, Error>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
