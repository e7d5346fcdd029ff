//! Module to simplify expressions.
//!
//! This module provides the [`simplify`] function, which makes a single bottom-up pass over the
//! tree: the operands of a node are simplified first, then the rules in [`rules`] are tried on
//! the node itself. The first rule that applies replaces the node.
//!
//! The pass is not repeated until no more rules apply, so a rewrite that exposes a new
//! opportunity higher up in the tree is picked up, but one that would need a second pass over
//! the same node is not.
//!
//! ```
//! use deriv_compute::symbolic::simplify;
//! use deriv_parser::parser::parse;
//!
//! let tree = parse::<f64>("1 * x + 0 * sin(y)").unwrap();
//! assert_eq!(simplify(tree).to_string(), "x");
//! ```

pub mod rules;
pub mod step;

use crate::symbolic::step_collector::StepCollector;
use deriv_parser::{
    domain::Domain,
    parser::ast::{Binary, Node, Unary},
};
use step::Step;

/// Base implementation of the simplification algorithm.
fn inner_simplify<T: Domain>(node: Node<T>, step_collector: &mut dyn StepCollector<Step>) -> Node<T> {
    match node {
        Node::Constant(_) | Node::Variable(_) => node,
        Node::Unary(Unary { operand, op }) => {
            Unary::new(op, inner_simplify(*operand, step_collector)).into()
        },
        Node::Binary(Binary { lhs, op, rhs }) => {
            let binary = Binary::new(
                inner_simplify(*lhs, step_collector),
                op,
                inner_simplify(*rhs, step_collector),
            );
            rules::all(&binary, step_collector).unwrap_or_else(|| binary.into())
        },
    }
}

/// Simplify the given expression tree.
pub fn simplify<T: Domain>(node: Node<T>) -> Node<T> {
    inner_simplify(node, &mut ())
}

/// Simplify the given expression tree, reporting every applied rule to the given step collector.
pub fn simplify_with<T: Domain>(node: Node<T>, step_collector: &mut dyn StepCollector<Step>) -> Node<T> {
    inner_simplify(node, step_collector)
}

/// Simplify the given expression tree. The steps taken by the simplifier will also be collected
/// and returned, in the order they were applied.
pub fn simplify_with_steps<T: Domain>(node: Node<T>) -> (Node<T>, Vec<Step>) {
    let mut steps = Vec::new();
    let node = inner_simplify(node, &mut steps);
    (node, steps)
}
