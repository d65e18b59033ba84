#![allow(clippy::module_inception)]

use std::rc::Rc;

use crate::errors::errors::{Error, ErrorTip};

pub mod ast;
pub mod errors;
pub mod lexer;
pub mod macros;
pub mod parser;

extern crate regex;

pub use ast::ast::{Literal, Node, NodeKind};
pub use errors::errors::ParseErrors;
pub use lexer::{lexer::tokenize, tokens::{Lexeme, TokenKind}};
pub use parser::parser::parse;

/// A 1-based source line together with the name of the source it belongs to.
#[derive(Debug, Clone, PartialEq)]
pub struct Position(pub u32, pub Rc<String>);

impl Position {
    pub fn line(&self) -> u32 {
        self.0
    }
}

/// Returns the text of the given 1-based line, without its line terminator.
pub fn get_source_line(source: &str, line: u32) -> Option<&str> {
    if line == 0 {
        return None;
    }

    source
        .split('\n')
        .nth((line - 1) as usize)
        .map(|text| text.trim_end_matches('\r'))
}


/// Formats an error against the source text it was reported for.
///
/// ```text
/// Error: ExpectedToken (Expected `Semicolon` but got `Assignment`)
/// -> final.lang
///    |
/// 20 | a = b = 1;
///    |
/// ```
pub fn render_error(error: &Error, source: &str) -> String {
    let mut out = String::new();

    if let ErrorTip::None = error.get_tip() {
        out.push_str(&format!("Error: {}\n", error.get_error_name()));
    } else {
        out.push_str(&format!("Error: {} ({})\n", error.get_error_name(), error.get_tip()));
    }

    let position = match error.get_position() {
        Some(position) => position,
        None => {
            out.push_str("-> <input>\n");
            return out;
        }
    };

    out.push_str(&format!("-> {}\n", position.1));

    let line_string = position.line().to_string();
    let padding = line_string.len() + 2;
    out.push_str(&format!("{:>padding$}\n", "|"));

    let line_text = get_source_line(source, position.line()).unwrap_or_default();
    out.push_str(&format!("{} | {}\n", line_string, line_text.trim()));
    out.push_str(&format!("{:>padding$}\n", "|"));

    out
}
