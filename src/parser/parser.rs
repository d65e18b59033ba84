//! Parser state and entry point.
//!
//! The `Parser` owns everything a single parse mutates: the token cursor
//! and the error sink. A fresh instance is created per call to [`parse`]
//! and dropped when it returns, so independent parses never share state.

use std::rc::Rc;

use crate::{
    ast::ast::Node,
    errors::errors::{Error, ErrorImpl, ParseErrors},
    lexer::tokens::{Lexeme, TokenKind},
    Position,
};

use super::{cursor::TokenCursor, stmt::parse_block};

/// Deepest combined nesting of `{` blocks and `(` groups a parse accepts.
pub const MAX_NESTING_DEPTH: usize = 64;

/// The main parser structure that maintains parsing state.
pub struct Parser {
    /// Lookahead over the remaining lexemes
    cursor: TokenCursor,
    /// The name of the source being parsed
    file: Rc<String>,
    /// Every error reported so far; non-empty means the parse has failed
    errors: Vec<Error>,
    /// Blocks and parenthesised groups currently open
    depth: usize,
}

impl Parser {
    pub fn new(lexemes: Vec<Lexeme>, file: Rc<String>) -> Self {
        Parser {
            cursor: TokenCursor::new(lexemes),
            file,
            errors: vec![],
            depth: 0,
        }
    }

    /// Returns the lookahead token without advancing.
    pub fn current_token(&self) -> Option<&Lexeme> {
        self.cursor.current()
    }

    pub fn current_token_kind(&self) -> Option<TokenKind> {
        self.cursor.current_kind()
    }

    /// Advances to the next token and returns the previous one.
    pub fn advance(&mut self) -> Option<Lexeme> {
        self.cursor.advance()
    }

    pub fn next_raw_kind(&mut self) -> Option<TokenKind> {
        self.cursor.next_raw_kind()
    }

    /// Checks if there are more tokens to parse.
    pub fn has_tokens(&self) -> bool {
        !self.cursor.is_exhausted()
    }

    /// Tests the lookahead against a set of kinds without consuming it.
    ///
    /// Returns the matched kind, `None` on a mismatch or at end of input.
    pub fn accept(&self, kinds: &[TokenKind]) -> Option<TokenKind> {
        self.current_token_kind().filter(|kind| kinds.contains(kind))
    }

    /// Consumes the lookahead if it is one of `kinds`, reporting an error otherwise.
    pub fn expect(&mut self, kinds: &[TokenKind]) -> Result<Lexeme, Error> {
        self.expect_error(kinds, None)
    }

    /// Like [`Parser::expect`], with a custom error for a mismatching token.
    ///
    /// Running out of input is always reported as a missing token.
    pub fn expect_error(
        &mut self,
        kinds: &[TokenKind],
        error: Option<ErrorImpl>,
    ) -> Result<Lexeme, Error> {
        let expected = describe_kinds(kinds);

        match self.current_token_kind() {
            Some(kind) if kinds.contains(&kind) => self
                .advance()
                .ok_or_else(|| self.error(ErrorImpl::MissingToken { expected })),
            Some(kind) => {
                let error_impl = error.unwrap_or(ErrorImpl::ExpectedToken {
                    expected,
                    found: kind.to_string(),
                });
                Err(self.error(error_impl))
            }
            None => Err(self.error(ErrorImpl::MissingToken { expected })),
        }
    }

    /// Records an error at the lookahead's line and logs it.
    ///
    /// The returned value is the failure signal for the calling rule; callers
    /// forward it with `?` and never record it again.
    pub fn error(&mut self, error_impl: ErrorImpl) -> Error {
        let error = Error::new(error_impl, self.get_position());
        log::error!("{}", error);
        self.errors.push(error.clone());
        error
    }

    /// Opens a block or group at the lookahead, failing past [`MAX_NESTING_DEPTH`].
    ///
    /// Every successful call must be paired with [`Parser::leave_nested`].
    pub fn enter_nested(&mut self) -> Result<(), Error> {
        if self.depth >= MAX_NESTING_DEPTH {
            return Err(self.error(ErrorImpl::NestingTooDeep {
                limit: MAX_NESTING_DEPTH,
            }));
        }

        self.depth += 1;
        Ok(())
    }

    pub fn leave_nested(&mut self) {
        self.depth = self.depth.saturating_sub(1);
    }

    pub fn has_failed(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Errors reported so far, in source order.
    pub fn get_errors(&self) -> &[Error] {
        &self.errors
    }

    /// Position of the lookahead, `None` at end of input.
    pub fn get_position(&self) -> Option<Position> {
        self.current_token()
            .map(|lexeme| Position(lexeme.line, Rc::clone(&self.file)))
    }

    /// Consumes an identifier lookahead and returns its name.
    pub fn take_identifier(&mut self) -> Result<String, Error> {
        let lexeme = self.expect(&[TokenKind::Identifier])?;
        Ok(lexeme.value.unwrap_or_default())
    }

    /// Parses one top-level block and checks that nothing is left over.
    pub fn parse_program(mut self) -> Result<Node, ParseErrors> {
        let ast = parse_block(&mut self);

        if let Some(kind) = self.current_token_kind() {
            self.error(ErrorImpl::TrailingInput {
                token: kind.to_string(),
            });
        }

        match ast {
            Ok(node) if !self.has_failed() => Ok(node),
            _ => Err(ParseErrors(self.errors)),
        }
    }
}

fn describe_kinds(kinds: &[TokenKind]) -> String {
    kinds
        .iter()
        .map(TokenKind::to_string)
        .collect::<Vec<_>>()
        .join(" or ")
}

/// Parses a sequence of lexemes into a syntax tree.
///
/// This is the main entry point for parsing. The input is either one
/// brace-wrapped block or a single instruction, and must be consumed
/// completely.
///
/// # Arguments
///
/// * `lexemes` - Lexemes in source order, line breaks included
/// * `file` - Name of the source, used in error positions
///
/// # Returns
///
/// The root node, or every error that was reported. A tree built while
/// errors were being reported is never returned.
pub fn parse(lexemes: Vec<Lexeme>, file: Rc<String>) -> Result<Node, ParseErrors> {
    log::debug!("parsing {} lexemes from {}", lexemes.len(), file);

    let result = Parser::new(lexemes, file).parse_program();

    match &result {
        Ok(node) => log::debug!("parsed tree of depth {}", node.depth()),
        Err(errors) => log::debug!("{}", errors),
    }

    result
}
