//! Parser module for building an Abstract Syntax Tree (AST).
//!
//! This module contains the recursive-descent parser that transforms a
//! stream of lexemes into a syntax tree. It handles:
//!
//! - Blocks and instructions, with brace-delimited nesting
//! - Assignment, recognised before descending into operators
//! - Binary operators via a precedence table walked by a single leveled rule
//! - Unary operators, prefix increment/decrement and parenthesised expressions
//! - Error reporting that keeps going after the first error
//!
//! Every rule takes the `Parser` by mutable reference and returns
//! `Result<Node, Error>`; errors are recorded once, where they are detected.

pub mod cursor;
pub mod expr;
pub mod lookups;
pub mod parser;
pub mod stmt;
