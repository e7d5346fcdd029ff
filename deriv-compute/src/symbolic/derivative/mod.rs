//! Symbolic differentiation of expression trees.
//!
//! [`derivative`] builds a new tree for the derivative of the input with respect to one variable,
//! leaving the input untouched. The result is not simplified; pass it through
//! [`simplify`](crate::symbolic::simplify()) to clean up the products with zero and one that the
//! rules produce.
//!
//! ```
//! use deriv_compute::symbolic::{derivative, simplify};
//! use deriv_parser::parser::parse;
//!
//! let tree = parse::<f64>("x * x").unwrap();
//! let derived = derivative(&tree, "x").unwrap();
//! assert_eq!(derived.to_string(), "x * 1 + x * 1");
//! assert_eq!(simplify(derived).to_string(), "x + x");
//! ```

mod function;

use crate::eval::Eval;
use deriv_parser::{
    domain::Domain,
    parser::{ast::{Binary, Node}, token::op::BinOpKind},
};
use std::fmt;
use tracing::{debug, trace};

/// Shorthand for building a binary node.
pub(crate) fn binary<T>(lhs: Node<T>, op: BinOpKind, rhs: Node<T>) -> Node<T> {
    Binary::new(lhs, op, rhs).into()
}

/// An error that can occur while computing a derivative.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DerivativeError {
    /// The derivative may exist, but computing it symbolically is not supported. This is the
    /// case for a power whose exponent depends on the variable, such as `2^x` or `x^x`.
    Unsupported,
}

impl fmt::Display for DerivativeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unsupported => write!(f, "the derivative of this expression cannot be computed symbolically"),
        }
    }
}

impl std::error::Error for DerivativeError {}

/// `(f + g)' = f' + g'`
/// `(f - g)' = f' - g'`
fn sum_rule<T: Domain>(lhs: &Node<T>, op: BinOpKind, rhs: &Node<T>, with: &str) -> Result<Node<T>, DerivativeError> {
    Ok(binary(derivative(lhs, with)?, op, derivative(rhs, with)?))
}

/// `(f * g)' = f * g' + g * f'`
fn product_rule<T: Domain>(lhs: &Node<T>, rhs: &Node<T>, with: &str) -> Result<Node<T>, DerivativeError> {
    Ok(binary(
        binary(lhs.clone(), BinOpKind::Mul, derivative(rhs, with)?),
        BinOpKind::Add,
        binary(rhs.clone(), BinOpKind::Mul, derivative(lhs, with)?),
    ))
}

/// `(f / g)' = (g * f' - f * g') / g^2`
fn quotient_rule<T: Domain>(lhs: &Node<T>, rhs: &Node<T>, with: &str) -> Result<Node<T>, DerivativeError> {
    let numerator = binary(
        binary(rhs.clone(), BinOpKind::Mul, derivative(lhs, with)?),
        BinOpKind::Sub,
        binary(lhs.clone(), BinOpKind::Mul, derivative(rhs, with)?),
    );
    let denominator = binary(rhs.clone(), BinOpKind::Exp, Node::Constant(T::from_real(2.0)));
    Ok(binary(numerator, BinOpKind::Div, denominator))
}

/// `(f^c)' = c * f^(c - 1) * f'`, for an exponent `c` that does not depend on the variable.
///
/// An exponent that is exactly the constant `2` is a shortcut: the result is `2 * f`, without
/// the chain factor `f'`. This is only the derivative when `f` is the variable itself.
fn power_rule<T: Domain>(base: &Node<T>, exponent: &Node<T>, with: &str) -> Result<Node<T>, DerivativeError> {
    let two = T::from_real(2.0);
    if exponent.is_constant_value(two) {
        return Ok(binary(Node::Constant(two), BinOpKind::Mul, base.clone()));
    }

    if exponent.mentions(with) {
        debug!(%exponent, with, "variable in the exponent is not supported");
        return Err(DerivativeError::Unsupported);
    }

    // fold `c - 1` into a single constant when the exponent has a value
    let reduced = match exponent.eval_default() {
        Some(value) => Node::Constant(value - T::one()),
        None => binary(exponent.clone(), BinOpKind::Sub, Node::Constant(T::one())),
    };

    Ok(binary(
        binary(
            exponent.clone(),
            BinOpKind::Mul,
            binary(base.clone(), BinOpKind::Exp, reduced),
        ),
        BinOpKind::Mul,
        derivative(base, with)?,
    ))
}

/// Computes the derivative of the given expression with respect to the variable `with`. Returns
/// [`Err`] if the derivative could not be symbolically computed.
pub fn derivative<T: Domain>(f: &Node<T>, with: &str) -> Result<Node<T>, DerivativeError> {
    match f {
        Node::Constant(_) => Ok(Node::Constant(T::zero())),
        Node::Variable(name) => {
            if name == with {
                Ok(Node::Constant(T::one()))
            } else {
                Ok(Node::Constant(T::zero()))
            }
        },
        Node::Unary(unary) => {
            trace!(op = %unary.op, "chain rule");
            function::function_derivative(unary.op, &unary.operand, with)
        },
        Node::Binary(Binary { lhs, op, rhs }) => {
            trace!(%op, "binary rule");
            match op {
                BinOpKind::Add | BinOpKind::Sub => sum_rule(lhs, *op, rhs, with),
                BinOpKind::Mul => product_rule(lhs, rhs, with),
                BinOpKind::Div => quotient_rule(lhs, rhs, with),
                BinOpKind::Exp => power_rule(lhs, rhs, with),
            }
        },
    }
}
