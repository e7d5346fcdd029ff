//! Simplification rules for multiplication.

use crate::symbolic::{
    simplify::{rules::{do_multiply, record}, step::Step},
    step_collector::StepCollector,
};
use deriv_parser::{domain::Domain, parser::ast::{Binary, Node}};

/// `0*a = 0`
/// `a*0 = 0`
pub fn multiply_zero<T: Domain>(binary: &Binary<T>, step_collector: &mut dyn StepCollector<Step>) -> Option<Node<T>> {
    let opt = do_multiply(binary, |lhs, rhs| {
        if lhs.is_zero() || rhs.is_zero() {
            Some(Node::Constant(T::zero()))
        } else {
            None
        }
    })?;

    // keep the step collection logic outside of the closure to make it implement `Fn`
    record(Step::MultiplyZero, step_collector);
    Some(opt)
}

/// `1*a = a`
/// `a*1 = a`
pub fn multiply_one<T: Domain>(binary: &Binary<T>, step_collector: &mut dyn StepCollector<Step>) -> Option<Node<T>> {
    let opt = do_multiply(binary, |lhs, rhs| {
        if lhs.is_one() {
            Some(rhs.clone())
        } else if rhs.is_one() {
            Some(lhs.clone())
        } else {
            None
        }
    })?;

    record(Step::MultiplyOne, step_collector);
    Some(opt)
}

/// Multiplies two constants together.
///
/// `2*3 = 6`
pub fn fold_constants<T: Domain>(binary: &Binary<T>, step_collector: &mut dyn StepCollector<Step>) -> Option<Node<T>> {
    let opt = do_multiply(binary, |lhs, rhs| {
        Some(Node::Constant(lhs.as_constant()? * rhs.as_constant()?))
    })?;

    record(Step::FoldConstants, step_collector);
    Some(opt)
}
