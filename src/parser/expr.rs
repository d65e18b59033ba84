use crate::{
    ast::ast::Node,
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::TokenKind,
};

use super::{
    lookups::{Operand, PRECEDENCE_TABLE},
    parser::Parser,
};

/// `assign := (identifier "=")? pipeline(0)`
///
/// Only an identifier immediately followed by `=` starts an assignment, so
/// `a = b = c` stops at the second `=`; `a = (b = c)` nests through `parse_base`.
pub fn parse_assign(parser: &mut Parser) -> Result<Node, Error> {
    if parser.accept(&[TokenKind::Identifier]).is_some()
        && parser.next_raw_kind() == Some(TokenKind::Assignment)
    {
        let target = parser.take_identifier()?;
        parser.expect(&[TokenKind::Assignment])?;
        let value = parse_operator_pipeline(parser, 0)?;

        return Ok(Node::assignment(target, value));
    }

    parse_operator_pipeline(parser, 0)
}

/// Parses every binary operator at `level` and above.
///
/// Operands come from the next level (or `parse_unary` at the last one) and
/// are folded left to right, so each level is left-associative.
pub fn parse_operator_pipeline(parser: &mut Parser, level: usize) -> Result<Node, Error> {
    let entry = &PRECEDENCE_TABLE[level];
    log::trace!("entering {:?} level", entry.precedence);

    let mut node = parse_operand(parser, level)?;

    while let Some(operator) = parser.accept(entry.operators) {
        parser.advance();
        let right = parse_operand(parser, level)?;
        node = Node::binary(operator, node, right);
    }

    Ok(node)
}

fn parse_operand(parser: &mut Parser, level: usize) -> Result<Node, Error> {
    match PRECEDENCE_TABLE[level].operand {
        Operand::NextLevel => parse_operator_pipeline(parser, level + 1),
        Operand::Unary => parse_unary(parser),
    }
}

pub fn parse_unary(parser: &mut Parser) -> Result<Node, Error> {
    if parser.accept(&[TokenKind::Dash]).is_some() {
        parser.advance();
        let operand = parse_base(parser)?;
        return Ok(Node::negate(operand));
    }

    if let Some(operator) = parser.accept(&[TokenKind::Not, TokenKind::Tilde]) {
        parser.advance();
        let operand = parse_base(parser)?;
        return Ok(Node::unary(operator, operand));
    }

    if let Some(operator) = parser.accept(&[TokenKind::PlusPlus, TokenKind::MinusMinus]) {
        parser.advance();
        let found = parser
            .current_token_kind()
            .map(|kind| kind.to_string())
            .unwrap_or_default();
        let error = ErrorImpl::InvalidIncrementOperand {
            operator: operator.to_string(),
            found,
        };
        let lexeme = parser.expect_error(&[TokenKind::Identifier], Some(error))?;

        return Ok(Node::increment(operator, lexeme.value.unwrap_or_default()));
    }

    // Unary plus produces no node.
    if parser.accept(&[TokenKind::Plus]).is_some() {
        parser.advance();
    }

    parse_base(parser)
}

/// `base := number | identifier | "(" assign ")"`
pub fn parse_base(parser: &mut Parser) -> Result<Node, Error> {
    match parser.current_token_kind() {
        Some(TokenKind::Number) => {
            let text = parser
                .current_token()
                .map(|lexeme| lexeme.value_str().to_string())
                .unwrap_or_default();

            match text.parse::<f64>() {
                Ok(value) => {
                    parser.advance();
                    Ok(Node::number(value))
                }
                Err(_) => Err(parser.error(ErrorImpl::NumberParseError { token: text })),
            }
        }
        Some(TokenKind::Identifier) => Ok(Node::identifier(parser.take_identifier()?)),
        Some(TokenKind::OpenParen) => {
            parser.enter_nested()?;
            parser.advance();
            let group = parse_group(parser);
            parser.leave_nested();

            group
        }
        Some(kind) => Err(parser.error(ErrorImpl::UnexpectedToken {
            token: kind.to_string(),
        })),
        None => Err(parser.error(ErrorImpl::MissingToken {
            expected: String::from("Number or Identifier or OpenParen"),
        })),
    }
}

fn parse_group(parser: &mut Parser) -> Result<Node, Error> {
    let node = parse_assign(parser)?;
    parser.expect(&[TokenKind::CloseParen])?;

    Ok(node)
}
