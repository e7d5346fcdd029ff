//! The expression tree produced by the parser.
//!
//! An expression is a tree of [`Node`]s. Leaves are [`Node::Constant`]s and [`Node::Variable`]s;
//! inner nodes are [`Unary`] operations (negation and the functions `sin`, `cos`, `ln`, `exp`)
//! and [`Binary`] operations (`+`, `-`, `*`, `/`, `^`). Each inner node owns its children, so the
//! tree never shares structure, and [`Clone`] always produces a deep copy.

pub mod binary;
pub mod iter;
pub mod node;
pub mod unary;

pub use binary::Binary;
pub use node::Node;
pub use unary::Unary;
