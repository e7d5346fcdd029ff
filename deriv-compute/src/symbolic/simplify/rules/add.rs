//! Simplification rules for addition.

use crate::symbolic::{
    simplify::{rules::{do_add, record}, step::Step},
    step_collector::StepCollector,
};
use deriv_parser::{domain::Domain, parser::ast::{Binary, Node}};

/// `0+a = a`
/// `a+0 = a`
pub fn add_zero<T: Domain>(binary: &Binary<T>, step_collector: &mut dyn StepCollector<Step>) -> Option<Node<T>> {
    let opt = do_add(binary, |lhs, rhs| {
        if lhs.is_zero() {
            Some(rhs.clone())
        } else if rhs.is_zero() {
            Some(lhs.clone())
        } else {
            None
        }
    })?;

    // keep the step collection logic outside of the closure to make it implement `Fn`
    record(Step::AddZero, step_collector);
    Some(opt)
}

#[cfg(test)]
mod tests {
    use deriv_parser::parser::{parse, token::op::BinOpKind};
    use num_complex::Complex64;
    use pretty_assertions::assert_eq;
    use super::*;

    #[test]
    fn zero_either_side() {
        let binary = Binary::new(Node::constant(0.0), BinOpKind::Add, parse("x * y").unwrap());
        assert_eq!(add_zero(&binary, &mut ()), Some(parse("x * y").unwrap()));

        let binary = Binary::new(Node::variable("x"), BinOpKind::Add, Node::constant(0.0));
        assert_eq!(add_zero(&binary, &mut ()), Some(Node::variable("x")));
    }

    #[test]
    fn subtraction_is_untouched() {
        let binary = Binary::new(Node::variable("x"), BinOpKind::Sub, Node::constant(0.0));
        assert_eq!(add_zero(&binary, &mut ()), None);
    }

    #[test]
    fn complex_zero() {
        let binary = Binary::new(
            Node::constant(Complex64::new(0.0, 0.0)),
            BinOpKind::Add,
            Node::variable("z"),
        );
        assert_eq!(add_zero(&binary, &mut ()), Some(Node::variable("z")));

        // a purely imaginary constant is not zero
        let binary = Binary::new(
            Node::constant(Complex64::new(0.0, 1.0)),
            BinOpKind::Add,
            Node::variable("z"),
        );
        assert_eq!(add_zero(&binary, &mut ()), None);
    }
}
