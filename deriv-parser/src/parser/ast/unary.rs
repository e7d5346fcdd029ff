use crate::parser::{ast::node::Node, token::op::UnaryOpKind};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A unary expression, such as `-x` or `sin(x)`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Unary<T> {
    /// The operand of the unary expression.
    pub operand: Box<Node<T>>,

    /// The operator of the unary expression.
    pub op: UnaryOpKind,
}

impl<T> Unary<T> {
    /// Creates a new unary expression.
    pub fn new(op: UnaryOpKind, operand: Node<T>) -> Self {
        Self {
            operand: Box::new(operand),
            op,
        }
    }
}
