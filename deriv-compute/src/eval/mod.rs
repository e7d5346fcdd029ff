//! Numerical evaluation of expression trees.
//!
//! Evaluation walks the tree bottom-up. A variable with no binding has no value, and any
//! operation with an operand that has no value has no value itself, so the evaluation of a tree
//! containing an unbound variable is [`None`] no matter what else is bound. This is not an error.
//!
//! Division by zero and functions evaluated outside of their real domain follow the usual
//! floating-point rules and produce infinities or NaN.
//!
//! ```
//! use deriv_compute::{ctxt::Bindings, eval::Eval};
//! use deriv_parser::parser::parse;
//!
//! let tree = parse::<f64>("x^2 + y").unwrap();
//! assert_eq!(tree.eval(&Bindings::new().with_var("x", 3.0).with_var("y", 1.0)), Some(10.0));
//! assert_eq!(tree.eval(&Bindings::new().with_var("x", 3.0)), None);
//! ```

mod binary;
mod unary;

use deriv_parser::{domain::Domain, parser::ast::Node};
use super::ctxt::Bindings;

/// Any type that can be evaluated to produce a value.
pub trait Eval<T> {
    /// Evaluate the expression to produce a value, using the given bindings. The expression
    /// returns [`None`] if it references a variable that is not bound.
    fn eval(&self, ctxt: &Bindings<T>) -> Option<T>;

    /// Evaluate the expression to produce a value, with no variables bound.
    fn eval_default(&self) -> Option<T> {
        self.eval(&Default::default())
    }
}

impl<T: Domain> Eval<T> for Node<T> {
    fn eval(&self, ctxt: &Bindings<T>) -> Option<T> {
        match self {
            Node::Constant(value) => Some(*value),
            Node::Variable(name) => ctxt.get_var(name),
            Node::Unary(unary) => unary.eval(ctxt),
            Node::Binary(binary) => binary.eval(ctxt),
        }
    }
}
