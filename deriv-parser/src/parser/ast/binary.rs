use crate::parser::{ast::node::Node, token::op::BinOpKind};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A binary expression, such as `1 + 2`. Binary expressions can include nested expressions.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Binary<T> {
    /// The left-hand side of the binary expression.
    pub lhs: Box<Node<T>>,

    /// The operator of the binary expression.
    pub op: BinOpKind,

    /// The right-hand side of the binary expression.
    pub rhs: Box<Node<T>>,
}

impl<T> Binary<T> {
    /// Creates a new binary expression.
    pub fn new(lhs: Node<T>, op: BinOpKind, rhs: Node<T>) -> Self {
        Self {
            lhs: Box::new(lhs),
            op,
            rhs: Box::new(rhs),
        }
    }
}
