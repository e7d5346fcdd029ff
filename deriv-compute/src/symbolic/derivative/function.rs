//! Symbolic derivatives of negation and the supported functions.

use deriv_parser::{
    domain::Domain,
    parser::{ast::{Node, Unary}, token::op::{BinOpKind, UnaryOpKind}},
};
use super::{binary, derivative, DerivativeError};

/// Shorthand for building a unary node.
fn unary<T>(op: UnaryOpKind, operand: Node<T>) -> Node<T> {
    Unary::new(op, operand).into()
}

/// Computes the derivative of a unary operation and performs the chain rule.
pub(super) fn function_derivative<T: Domain>(
    op: UnaryOpKind,
    arg: &Node<T>,
    with: &str,
) -> Result<Node<T>, DerivativeError> {
    let inner = derivative(arg, with)?;

    Ok(match op {
        // (-f)' = -f'
        UnaryOpKind::Neg => unary(UnaryOpKind::Neg, inner),

        // sin(f)' = cos(f) * f'
        UnaryOpKind::Sin => binary(unary(UnaryOpKind::Cos, arg.clone()), BinOpKind::Mul, inner),

        // cos(f)' = -sin(f) * f'
        UnaryOpKind::Cos => binary(
            unary(UnaryOpKind::Neg, unary(UnaryOpKind::Sin, arg.clone())),
            BinOpKind::Mul,
            inner,
        ),

        // ln(f)' = f' / f
        UnaryOpKind::Ln => binary(inner, BinOpKind::Div, arg.clone()),

        // exp(f)' = exp(f) * f'
        UnaryOpKind::Exp => binary(unary(UnaryOpKind::Exp, arg.clone()), BinOpKind::Mul, inner),
    })
}
