use std::{iter::Peekable, vec::IntoIter};

use crate::lexer::tokens::{Lexeme, TokenKind};

/// Destructive, front-to-back view over the lexeme sequence.
///
/// Line breaks are never exposed as the current token. This is the only
/// place a parse keeps iteration state.
pub struct TokenCursor {
    lexemes: Peekable<IntoIter<Lexeme>>,
    current: Option<Lexeme>,
}

impl TokenCursor {
    /// Creates a cursor positioned on the first non-line-break lexeme.
    pub fn new(lexemes: Vec<Lexeme>) -> Self {
        let mut cursor = TokenCursor {
            lexemes: lexemes.into_iter().peekable(),
            current: None,
        };
        cursor.advance();
        cursor
    }

    /// The lookahead token, `None` once the input is exhausted.
    pub fn current(&self) -> Option<&Lexeme> {
        self.current.as_ref()
    }

    pub fn current_kind(&self) -> Option<TokenKind> {
        self.current.as_ref().map(|lexeme| lexeme.kind)
    }

    /// Discards the lookahead, pulls the next non-line-break lexeme and
    /// returns the discarded one.
    pub fn advance(&mut self) -> Option<Lexeme> {
        let previous = self.current.take();
        self.current = self
            .lexemes
            .by_ref()
            .find(|lexeme| lexeme.kind != TokenKind::Newline);
        previous
    }

    /// Kind of the raw lexeme right after the lookahead, line breaks included.
    pub fn next_raw_kind(&mut self) -> Option<TokenKind> {
        self.lexemes.peek().map(|lexeme| lexeme.kind)
    }

    pub fn is_exhausted(&self) -> bool {
        self.current.is_none()
    }
}
