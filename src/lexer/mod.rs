//! Lexical analysis module.
//!
//! The parser consumes lexemes produced elsewhere; this module defines that
//! record and ships a reference tokenizer that produces it from source text:
//!
//! - Token kinds for every operator and punctuation the grammar knows
//! - Number and identifier literals carried as text
//! - A line-break lexeme per newline, with 1-based line tracking
//! - Comments and whitespace handling

pub mod lexer;
pub mod tokens;

#[cfg(test)]
mod tests;
