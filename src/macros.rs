//! Utility macros for the tokenizer.
//!
//! - `MK_LEXEME!` - Creates a Lexeme instance
//! - `MK_DEFAULT_HANDLER!` - Creates a default lexer handler for operator tokens
//!
//! These macros reduce boilerplate in the lexer pattern table.

/// Creates a Lexeme instance.
///
/// # Arguments
///
/// * `$kind` - The TokenKind
/// * `$value` - The literal text, `None` for operators and punctuation
/// * `$line` - The 1-based source line
///
/// # Example
///
/// ```ignore
/// let lexeme = MK_LEXEME!(TokenKind::Number, Some("42".to_string()), 1);
/// ```
#[macro_export]
macro_rules! MK_LEXEME {
    ($kind:expr, $value:expr, $line:expr) => {
        $crate::lexer::tokens::Lexeme {
            kind: $kind,
            value: $value,
            line: $line,
        }
    };
}

/// Creates a default lexer handler for fixed-text operator patterns.
///
/// Generates a handler that pushes a value-less lexeme of the given kind on
/// the current line and advances the lexer past the operator text.
///
/// # Example
///
/// ```ignore
/// RegexPattern::new("^\\+", MK_DEFAULT_HANDLER!(TokenKind::Plus, "+"))
/// ```
#[macro_export]
macro_rules! MK_DEFAULT_HANDLER {
    ($kind:expr, $value:literal) => {
        |lexer: &mut $crate::lexer::lexer::Lexer, _regex: &::regex::Regex| {
            let line = lexer.line;
            lexer.push($crate::MK_LEXEME!($kind, None, line));
            lexer.advance_n($value.len());
        }
    };
}
