//! The operators that can appear in an expression tree.

use crate::{parser::Precedence, tokenizer::TokenKind};
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The unary operation that is being performed. Besides negation, the supported functions of a
/// single argument are unary operations as well.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum UnaryOpKind {
    Neg,
    Sin,
    Cos,
    Ln,
    Exp,
}

impl UnaryOpKind {
    /// Returns the function with the given name, if it is supported.
    pub fn from_function_name(name: &str) -> Option<Self> {
        match name {
            "sin" => Some(Self::Sin),
            "cos" => Some(Self::Cos),
            "ln" => Some(Self::Ln),
            "exp" => Some(Self::Exp),
            _ => None,
        }
    }

    /// Returns the precedence of the unary operation.
    pub fn precedence(&self) -> Precedence {
        Precedence::Unary
    }

    /// Returns true if the operation is written as a function call, `func(operand)`.
    pub fn is_function(&self) -> bool {
        !matches!(self, Self::Neg)
    }
}

impl fmt::Display for UnaryOpKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Neg => write!(f, "-"),
            Self::Sin => write!(f, "sin"),
            Self::Cos => write!(f, "cos"),
            Self::Ln => write!(f, "ln"),
            Self::Exp => write!(f, "exp"),
        }
    }
}

/// The binary operation that is being performed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum BinOpKind {
    Exp,
    Mul,
    Div,
    Add,
    Sub,
}

impl BinOpKind {
    /// Returns the binary operation that the given token represents, if any.
    pub fn from_token(kind: TokenKind) -> Option<Self> {
        match kind {
            TokenKind::Exp => Some(Self::Exp),
            TokenKind::Mul => Some(Self::Mul),
            TokenKind::Div => Some(Self::Div),
            TokenKind::Add => Some(Self::Add),
            TokenKind::Sub => Some(Self::Sub),
            _ => None,
        }
    }

    /// Returns the precedence of the binary operation.
    pub fn precedence(&self) -> Precedence {
        match self {
            Self::Exp => Precedence::Exp,
            Self::Mul | Self::Div => Precedence::Factor,
            Self::Add | Self::Sub => Precedence::Term,
        }
    }

    /// Returns true if `a op (b op' c)` equals `(a op b) op' c` for every operation `op'` of the
    /// same precedence.
    ///
    /// All binary operations are parsed left-associatively, so the right-hand side of a
    /// non-associative operation needs parentheses when it has the same precedence.
    pub fn is_associative(&self) -> bool {
        matches!(self, Self::Add | Self::Mul)
    }
}

impl fmt::Display for BinOpKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Exp => write!(f, "^"),
            Self::Mul => write!(f, "*"),
            Self::Div => write!(f, "/"),
            Self::Add => write!(f, "+"),
            Self::Sub => write!(f, "-"),
        }
    }
}
