use lazy_static::lazy_static;
use std::{collections::HashMap, fmt::Display};

use crate::Span;

lazy_static! {
    pub static ref RESERVED_LOOKUP: HashMap<&'static str, TokenKind> = {
        let mut map = HashMap::new();
        map.insert("if", TokenKind::If);
        map.insert("then", TokenKind::Then);
        map.insert("else", TokenKind::Else);
        map
    };
}

/// Relational operator recognised by the relop scanner.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum RelOp {
    Lt, // <
    Le, // <=
    Gt, // >
    Ge, // >=
    Eq, // =
    Ne, // <>
}

impl RelOp {
    pub fn spelling(&self) -> &'static str {
        match self {
            RelOp::Lt => "<",
            RelOp::Le => "<=",
            RelOp::Gt => ">",
            RelOp::Ge => ">=",
            RelOp::Eq => "=",
            RelOp::Ne => "<>",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            RelOp::Lt => "LT",
            RelOp::Le => "LE",
            RelOp::Gt => "GT",
            RelOp::Ge => "GE",
            RelOp::Eq => "EQ",
            RelOp::Ne => "NE",
        }
    }
}

impl Display for RelOp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum TokenKind {
    Identifier,
    Number,
    RelOp(RelOp),

    // Reserved
    If,
    Then,
    Else,
}

impl TokenKind {
    pub fn is_keyword(&self) -> bool {
        matches!(self, TokenKind::If | TokenKind::Then | TokenKind::Else)
    }
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TokenKind::RelOp(op) => write!(f, "RelOp({})", op),
            _ => write!(f, "{:?}", self),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Token {
    pub kind: TokenKind,
    pub value: String,
    pub span: Span,
}

/// Renders a token the way the driver prints it, one per line:
/// `reserved keyword 'if'`, `identifier 'x'`, `number 3.14`, `relop LE`.
impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.kind {
            TokenKind::If | TokenKind::Then | TokenKind::Else => {
                write!(f, "reserved keyword '{}'", self.value)
            }
            TokenKind::Identifier => write!(f, "identifier '{}'", self.value),
            TokenKind::Number => write!(f, "number {}", self.value),
            TokenKind::RelOp(op) => write!(f, "relop {}", op),
        }
    }
}

/// Tokens compare by kind and lexeme; spans are ignored.
impl PartialEq for Token {
    fn eq(&self, other: &Self) -> bool {
        self.kind == other.kind && self.value == other.value
    }
}

impl Eq for Token {}

impl Token {
    pub fn is_keyword(&self) -> bool {
        self.kind.is_keyword()
    }
}
