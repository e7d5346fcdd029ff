//! Implementation of the simplification rules.
//!
//! Each rule in this module is a function that takes a binary node whose operands are already
//! simplified, and returns `Some(node)` with the simplified node if the rule applies, or `None`
//! if the rule does not apply.

pub mod add;
pub mod multiply;

use crate::symbolic::step_collector::StepCollector;
use deriv_parser::{
    domain::Domain,
    parser::{ast::{Binary, Node}, token::op::BinOpKind},
};
use super::step::Step;
use tracing::trace;

/// If the node is an addition, calls the given transformation function with both operands.
///
/// Returns `Some(node)` with the transformed node if a transformation was applied.
pub(crate) fn do_add<T>(
    binary: &Binary<T>,
    f: impl Fn(&Node<T>, &Node<T>) -> Option<Node<T>>,
) -> Option<Node<T>> {
    if binary.op == BinOpKind::Add {
        f(&binary.lhs, &binary.rhs)
    } else {
        None
    }
}

/// If the node is a multiplication, calls the given transformation function with both operands.
///
/// Returns `Some(node)` with the transformed node if a transformation was applied.
pub(crate) fn do_multiply<T>(
    binary: &Binary<T>,
    f: impl Fn(&Node<T>, &Node<T>) -> Option<Node<T>>,
) -> Option<Node<T>> {
    if binary.op == BinOpKind::Mul {
        f(&binary.lhs, &binary.rhs)
    } else {
        None
    }
}

/// Reports an applied rule to the step collector.
pub(crate) fn record(step: Step, step_collector: &mut dyn StepCollector<Step>) {
    trace!(?step, "applied simplification rule");
    step_collector.push(step);
}

/// Applies the first rule that matches, in order: multiplication by zero, multiplication by one,
/// constant folding, then addition of zero.
pub fn all<T: Domain>(binary: &Binary<T>, step_collector: &mut dyn StepCollector<Step>) -> Option<Node<T>> {
    multiply::multiply_zero(binary, step_collector)
        .or_else(|| multiply::multiply_one(binary, step_collector))
        .or_else(|| multiply::fold_constants(binary, step_collector))
        .or_else(|| add::add_zero(binary, step_collector))
}
