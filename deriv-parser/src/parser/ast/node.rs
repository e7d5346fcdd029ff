use crate::{
    domain::Domain,
    parser::{
        ast::{binary::Binary, iter::NodeIter, unary::Unary},
        token::op::{BinOpKind, UnaryOpKind},
        Precedence,
    },
};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A node of an expression tree, generic over the numeric [`Domain`] of its constants.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Node<T> {
    /// A constant value, such as `2` or `3.5`.
    Constant(T),

    /// A variable, such as `x` or `rate`.
    Variable(String),

    /// A unary expression, such as `-x` or `sin(x)`.
    Unary(Unary<T>),

    /// A binary expression, such as `x + 1`.
    Binary(Binary<T>),
}

impl<T> Node<T> {
    /// Creates a constant node.
    pub fn constant(value: T) -> Self {
        Self::Constant(value)
    }

    /// Creates a variable node.
    pub fn variable(name: impl Into<String>) -> Self {
        Self::Variable(name.into())
    }

    /// Creates a unary node from the operator and operand.
    pub fn unary(op: UnaryOpKind, operand: Self) -> Self {
        Self::Unary(Unary::new(op, operand))
    }

    /// Creates a binary node from the operands and operator.
    pub fn binary(lhs: Self, op: BinOpKind, rhs: Self) -> Self {
        Self::Binary(Binary::new(lhs, op, rhs))
    }

    /// Returns the precedence of the node. Leaves have the highest precedence.
    pub fn precedence(&self) -> Precedence {
        match self {
            Self::Constant(_) | Self::Variable(_) => Precedence::Atom,
            Self::Unary(unary) => unary.op.precedence(),
            Self::Binary(binary) => binary.op.precedence(),
        }
    }

    /// Returns an iterator that traverses the tree in left-to-right post-order.
    pub fn post_order_iter(&self) -> NodeIter<'_, T> {
        NodeIter::new(self)
    }

    /// Returns true if a variable with the given name appears anywhere in the tree.
    pub fn mentions(&self, name: &str) -> bool {
        self.post_order_iter()
            .any(|node| matches!(node, Self::Variable(var) if var == name))
    }

    /// Returns the number of nodes in the tree.
    pub fn node_count(&self) -> usize {
        self.post_order_iter().count()
    }
}

impl<T: Domain> Node<T> {
    /// If the node is a [`Node::Constant`], returns the contained value.
    pub fn as_constant(&self) -> Option<T> {
        match self {
            Self::Constant(value) => Some(*value),
            _ => None,
        }
    }

    /// Returns true if the node is a [`Node::Constant`] exactly equal to `value`.
    pub fn is_constant_value(&self, value: T) -> bool {
        self.as_constant() == Some(value)
    }

    /// Returns true if the node is the constant zero of its domain.
    pub fn is_zero(&self) -> bool {
        self.is_constant_value(T::zero())
    }

    /// Returns true if the node is the constant one of its domain.
    pub fn is_one(&self) -> bool {
        self.is_constant_value(T::one())
    }
}

impl<T> From<Unary<T>> for Node<T> {
    fn from(unary: Unary<T>) -> Self {
        Self::Unary(unary)
    }
}

impl<T> From<Binary<T>> for Node<T> {
    fn from(binary: Binary<T>) -> Self {
        Self::Binary(binary)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use super::*;

    /// `x * (2 + y)`
    fn sample() -> Node<f64> {
        Node::binary(
            Node::variable("x"),
            BinOpKind::Mul,
            Node::binary(Node::constant(2.0), BinOpKind::Add, Node::variable("y")),
        )
    }

    #[test]
    fn post_order() {
        let tree = sample();
        let visited = tree.post_order_iter()
            .map(|node| match node {
                Node::Constant(value) => value.to_string(),
                Node::Variable(name) => name.clone(),
                Node::Unary(unary) => unary.op.to_string(),
                Node::Binary(binary) => binary.op.to_string(),
            })
            .collect::<Vec<_>>();
        assert_eq!(visited, vec!["x", "2", "y", "+", "*"]);
    }

    #[test]
    fn mentions_variable() {
        let tree = Node::unary(UnaryOpKind::Sin, sample());
        assert!(tree.mentions("x"));
        assert!(tree.mentions("y"));
        assert!(!tree.mentions("z"));
        assert_eq!(tree.node_count(), 6);
    }

    #[test]
    fn clone_is_deep() {
        let tree = sample();
        let mut copy = tree.clone();
        if let Node::Binary(binary) = &mut copy {
            *binary.lhs = Node::variable("z");
        }
        assert!(tree.mentions("x"));
        assert!(!copy.mentions("x"));
        assert_ne!(tree, copy);
    }

    #[test]
    fn zero_and_one() {
        assert!(Node::constant(0.0).is_zero());
        assert!(Node::constant(-0.0).is_zero());
        assert!(Node::constant(1.0).is_one());
        assert!(!Node::<f64>::variable("x").is_zero());
        assert!(!Node::constant(1.0).is_zero());
    }
}
