//! Error types and error handling for the parser.
//!
//! This module defines the error types reported while tokenizing and
//! parsing. It includes:
//!
//! - Error records carrying the source line they were detected on
//! - Specific error variants for every way the grammar can be violated
//! - The aggregate failure value returned by a failed parse
//! - Helpful error messages and suggestions

pub mod errors;

#[cfg(test)]
mod tests;
