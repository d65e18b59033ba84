//! Unit tests for error handling.
//!
//! This module contains tests for error types and error reporting.

use crate::errors::errors::{Error, ErrorImpl, ErrorTip, ParseErrors};
use crate::Position;
use std::rc::Rc;

fn at_line(line: u32) -> Option<Position> {
    Some(Position(line, Rc::new("test.lang".to_string())))
}

#[test]
fn test_error_creation() {
    let error = Error::new(
        ErrorImpl::UnrecognisedToken {
            token: "@".to_string(),
        },
        at_line(1),
    );

    assert_eq!(error.get_error_name(), "UnrecognisedToken");
}

#[test]
fn test_error_position() {
    let error = Error::new(
        ErrorImpl::UnexpectedToken {
            token: "Semicolon".to_string(),
        },
        at_line(42),
    );

    assert_eq!(error.get_line(), Some(42));
    assert_eq!(error.get_position().map(|p| p.1.as_str()), Some("test.lang"));
}

#[test]
fn test_error_without_position() {
    let error = Error::new(
        ErrorImpl::MissingToken {
            expected: "CloseParen".to_string(),
        },
        None,
    );

    assert_eq!(error.get_line(), None);
    assert_eq!(error.get_error_name(), "MissingToken");
}

#[test]
fn test_display_with_line() {
    let error = Error::new(
        ErrorImpl::ExpectedToken {
            expected: "Semicolon".to_string(),
            found: "Assignment".to_string(),
        },
        at_line(3),
    );

    assert_eq!(
        error.to_string(),
        "Error at line 3: expected symbol \"Semicolon\" but got \"Assignment\""
    );
}

#[test]
fn test_display_at_end_of_input() {
    let error = Error::new(
        ErrorImpl::MissingToken {
            expected: "Semicolon".to_string(),
        },
        None,
    );

    assert_eq!(error.to_string(), "Error: expected symbol \"Semicolon\"");
}

#[test]
fn test_trailing_input_error() {
    let error = Error::new(
        ErrorImpl::TrailingInput {
            token: "Identifier".to_string(),
        },
        at_line(1),
    );

    assert_eq!(error.get_error_name(), "TrailingInput");
    assert_eq!(
        error.to_string(),
        "Error at line 1: unexpected symbol at the end of expression: \"Identifier\""
    );
}

#[test]
fn test_invalid_increment_operand_error() {
    let error = Error::new(
        ErrorImpl::InvalidIncrementOperand {
            operator: "PlusPlus".to_string(),
            found: "Number".to_string(),
        },
        at_line(1),
    );

    assert_eq!(error.get_error_name(), "InvalidIncrementOperand");
    assert_eq!(
        error.get_tip().to_string(),
        "`PlusPlus` can only be applied to an identifier, found `Number`"
    );
}

#[test]
fn test_number_parse_error() {
    let error = Error::new(
        ErrorImpl::NumberParseError {
            token: "1.2.3".to_string(),
        },
        at_line(1),
    );

    assert_eq!(error.get_error_name(), "NumberParseError");
}

#[test]
fn test_nesting_too_deep_error() {
    let error = Error::new(ErrorImpl::NestingTooDeep { limit: 64 }, at_line(3));

    assert_eq!(error.get_error_name(), "NestingTooDeep");
    assert_eq!(error.to_string(), "Error at line 3: nesting deeper than 64 levels");
    assert_eq!(
        error.get_tip().to_string(),
        "Blocks and parentheses can be nested at most 64 levels deep"
    );
}

#[test]
fn test_error_tip_none() {
    let error = Error::new(
        ErrorImpl::UnrecognisedToken {
            token: "@".to_string(),
        },
        at_line(1),
    );

    assert!(matches!(error.get_tip(), ErrorTip::None));
}

#[test]
fn test_error_tip_suggestion() {
    let error = Error::new(
        ErrorImpl::UnexpectedToken {
            token: "CloseCurly".to_string(),
        },
        at_line(1),
    );

    match error.get_tip() {
        ErrorTip::Suggestion(_) => (),
        _ => panic!("Expected suggestion tip"),
    }
}

#[test]
fn test_error_tip_display() {
    let tip = ErrorTip::Suggestion("Try this instead".to_string());
    assert_eq!(tip.to_string(), "Try this instead");

    let tip = ErrorTip::None;
    assert_eq!(tip.to_string(), "");
}

#[test]
fn test_parse_errors_summary() {
    let errors = ParseErrors(vec![
        Error::new(ErrorImpl::UnexpectedToken { token: "Semicolon".to_string() }, at_line(1)),
        Error::new(ErrorImpl::TrailingInput { token: "Identifier".to_string() }, at_line(2)),
    ]);

    assert_eq!(errors.len(), 2);
    assert!(!errors.is_empty());
    assert_eq!(errors.to_string(), "parsing failed with 2 error(s)");
    assert_eq!(errors.first().and_then(Error::get_line), Some(1));

    let lines: Vec<Option<u32>> = errors.iter().map(Error::get_line).collect();
    assert_eq!(lines, vec![Some(1), Some(2)]);
}
