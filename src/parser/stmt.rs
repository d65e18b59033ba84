use crate::{ast::ast::Node, errors::errors::Error, lexer::tokens::TokenKind};

use super::{expr::parse_assign, parser::Parser};

/// `block := "{" block* "}" | instruction`
///
/// A statement that fails inside braces has already been reported; the
/// block skips past it and keeps parsing its siblings.
pub fn parse_block(parser: &mut Parser) -> Result<Node, Error> {
    if parser.accept(&[TokenKind::OpenCurly]).is_none() {
        return parse_instruction(parser);
    }
    parser.enter_nested()?;
    parser.advance();

    let block = parse_block_body(parser);
    parser.leave_nested();

    block
}

fn parse_block_body(parser: &mut Parser) -> Result<Node, Error> {
    let mut children = vec![];

    while parser.has_tokens() && parser.accept(&[TokenKind::CloseCurly]).is_none() {
        match parse_block(parser) {
            Ok(child) => children.push(child),
            Err(_) => synchronize(parser),
        }
    }

    parser.expect(&[TokenKind::CloseCurly])?;

    Ok(Node::block(children))
}

/// `instruction := assign ";"`
pub fn parse_instruction(parser: &mut Parser) -> Result<Node, Error> {
    let node = parse_assign(parser)?;
    parser.expect(&[TokenKind::Semicolon])?;

    Ok(node)
}

/// Skips to just past the next `;`, or up to the enclosing `}`.
fn synchronize(parser: &mut Parser) {
    while let Some(kind) = parser.current_token_kind() {
        match kind {
            TokenKind::CloseCurly => return,
            TokenKind::Semicolon => {
                parser.advance();
                return;
            }
            _ => {
                parser.advance();
            }
        }
    }
}
