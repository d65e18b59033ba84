use std::fmt::Display;

use crate::lexer::tokens::TokenKind;

/// Node Kinds
///
/// The shape of a node, independent of the operator it carries.
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub enum NodeKind {
    Block,
    Assignment,
    Binary,
    Unary,
    Increment,
    Number,
    Identifier,
}

/// Scalar carried by a leaf node.
#[derive(PartialEq, Clone, Copy, Debug)]
pub enum Literal<'a> {
    Number(f64),
    Identifier(&'a str),
}

/// A syntax tree node.
///
/// Trees are assembled bottom-up; a node is never modified once a grammar
/// rule has returned it. `Assignment::target` and `Increment::target` are
/// always `Node::Identifier`.
#[derive(PartialEq, Clone, Debug)]
pub enum Node {
    Block(Vec<Node>),
    Assignment {
        target: Box<Node>,
        value: Box<Node>,
    },
    Binary {
        operator: TokenKind,
        left: Box<Node>,
        right: Box<Node>,
    },
    Unary {
        operator: TokenKind,
        operand: Box<Node>,
    },
    Increment {
        operator: TokenKind,
        target: Box<Node>,
    },
    Number(f64),
    Identifier(String),
}

impl Node {
    pub fn block(children: Vec<Node>) -> Self {
        Node::Block(children)
    }

    pub fn assignment(target: String, value: Node) -> Self {
        Node::Assignment {
            target: Box::new(Node::Identifier(target)),
            value: Box::new(value),
        }
    }

    pub fn binary(operator: TokenKind, left: Node, right: Node) -> Self {
        Node::Binary {
            operator,
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    /// `-x` is represented as `0 - x`.
    pub fn negate(operand: Node) -> Self {
        Node::binary(TokenKind::Dash, Node::Number(0.0), operand)
    }

    pub fn unary(operator: TokenKind, operand: Node) -> Self {
        Node::Unary {
            operator,
            operand: Box::new(operand),
        }
    }

    pub fn increment(operator: TokenKind, target: String) -> Self {
        Node::Increment {
            operator,
            target: Box::new(Node::Identifier(target)),
        }
    }

    pub fn number(value: f64) -> Self {
        Node::Number(value)
    }

    pub fn identifier(name: impl Into<String>) -> Self {
        Node::Identifier(name.into())
    }

    pub fn kind(&self) -> NodeKind {
        match self {
            Node::Block(_) => NodeKind::Block,
            Node::Assignment { .. } => NodeKind::Assignment,
            Node::Binary { .. } => NodeKind::Binary,
            Node::Unary { .. } => NodeKind::Unary,
            Node::Increment { .. } => NodeKind::Increment,
            Node::Number(_) => NodeKind::Number,
            Node::Identifier(_) => NodeKind::Identifier,
        }
    }

    /// The operator token an operator node is named after.
    pub fn operator(&self) -> Option<TokenKind> {
        match self {
            Node::Assignment { .. } => Some(TokenKind::Assignment),
            Node::Binary { operator, .. }
            | Node::Unary { operator, .. }
            | Node::Increment { operator, .. } => Some(*operator),
            _ => None,
        }
    }

    pub fn children(&self) -> Vec<&Node> {
        match self {
            Node::Block(children) => children.iter().collect(),
            Node::Assignment { target, value } => vec![&**target, &**value],
            Node::Binary { left, right, .. } => vec![&**left, &**right],
            Node::Unary { operand, .. } => vec![&**operand],
            Node::Increment { target, .. } => vec![&**target],
            Node::Number(_) | Node::Identifier(_) => vec![],
        }
    }

    pub fn value(&self) -> Option<Literal<'_>> {
        match self {
            Node::Number(value) => Some(Literal::Number(*value)),
            Node::Identifier(name) => Some(Literal::Identifier(name)),
            _ => None,
        }
    }

    /// Number of nodes on the longest root-to-leaf path.
    pub fn depth(&self) -> usize {
        1 + self.children().iter().map(|child| child.depth()).max().unwrap_or(0)
    }
}

impl Display for Node {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Node::Block(children) => {
                write!(f, "{{")?;
                for child in children {
                    write!(f, " {}", child)?;
                }
                write!(f, " }}")
            }
            Node::Assignment { target, value } => write!(f, "(= {} {})", target, value),
            Node::Binary { operator, left, right } => {
                write!(f, "({} {} {})", operator.symbol(), left, right)
            }
            Node::Unary { operator, operand } => write!(f, "({} {})", operator.symbol(), operand),
            Node::Increment { operator, target } => write!(f, "({} {})", operator.symbol(), target),
            Node::Number(value) => write!(f, "{}", value),
            Node::Identifier(name) => write!(f, "{}", name),
        }
    }
}
