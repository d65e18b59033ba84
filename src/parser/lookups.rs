use crate::lexer::tokens::TokenKind;

/// Binary-operator precedence levels, weakest binding first.
#[derive(PartialEq, Eq, PartialOrd, Ord, Clone, Copy, Debug)]
pub enum Precedence {
    LogicalOr,
    LogicalAnd,
    BitwiseOr,
    BitwiseXor,
    BitwiseAnd,
    Equality,
    Relational,
    Shift,
    Additive,
    Multiplicative,
    Power,
}

/// What a level parses its operands with.
#[derive(PartialEq, Clone, Copy, Debug)]
pub enum Operand {
    NextLevel,
    Unary,
}

pub struct PrecedenceLevel {
    pub precedence: Precedence,
    pub operators: &'static [TokenKind],
    pub operand: Operand,
}

pub static PRECEDENCE_TABLE: [PrecedenceLevel; 11] = [
    PrecedenceLevel { precedence: Precedence::LogicalOr, operators: &[TokenKind::Or], operand: Operand::NextLevel },
    PrecedenceLevel { precedence: Precedence::LogicalAnd, operators: &[TokenKind::And], operand: Operand::NextLevel },
    PrecedenceLevel { precedence: Precedence::BitwiseOr, operators: &[TokenKind::Pipe], operand: Operand::NextLevel },
    PrecedenceLevel { precedence: Precedence::BitwiseXor, operators: &[TokenKind::Caret], operand: Operand::NextLevel },
    PrecedenceLevel { precedence: Precedence::BitwiseAnd, operators: &[TokenKind::Ampersand], operand: Operand::NextLevel },
    PrecedenceLevel { precedence: Precedence::Equality, operators: &[TokenKind::Equals, TokenKind::NotEquals], operand: Operand::NextLevel },
    PrecedenceLevel { precedence: Precedence::Relational, operators: &[TokenKind::LessEquals, TokenKind::Less, TokenKind::GreaterEquals, TokenKind::Greater], operand: Operand::NextLevel },
    PrecedenceLevel { precedence: Precedence::Shift, operators: &[TokenKind::ShiftLeft, TokenKind::ShiftRight], operand: Operand::NextLevel },
    PrecedenceLevel { precedence: Precedence::Additive, operators: &[TokenKind::Plus, TokenKind::Dash], operand: Operand::NextLevel },
    PrecedenceLevel { precedence: Precedence::Multiplicative, operators: &[TokenKind::Star, TokenKind::Slash, TokenKind::Percent], operand: Operand::NextLevel },
    // Exponentiation groups left to right like every other level.
    PrecedenceLevel { precedence: Precedence::Power, operators: &[TokenKind::Power], operand: Operand::Unary },
];

/// Level an operator token belongs to, if it is a binary operator at all.
pub fn precedence_of(kind: TokenKind) -> Option<Precedence> {
    PRECEDENCE_TABLE
        .iter()
        .find(|level| level.operators.contains(&kind))
        .map(|level| level.precedence)
}
