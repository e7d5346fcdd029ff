//! The [`Expression`] type, which bundles an expression tree with every operation that can be
//! performed on it.

use crate::{
    ctxt::Bindings,
    eval::Eval,
    symbolic::{self, simplify::step::Step, DerivativeError},
};
use deriv_error::Error;
use deriv_parser::{
    domain::Domain,
    parser::{ast::{Binary, Node, Unary}, parse, token::op::{BinOpKind, UnaryOpKind}},
};
use std::{
    fmt,
    ops::{Add, BitXor, Div, Mul, Sub},
    str::FromStr,
};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A mathematical expression over the numeric domain `T`.
///
/// An expression owns exactly one root [`Node`]. Cloning an expression clones the whole tree,
/// and every operation returns a new expression, so expressions behave like plain values.
///
/// ```
/// use deriv_compute::{ctxt::Bindings, expression::Expression};
///
/// let expr = "sin(2x) - 10(x^3)".parse::<Expression<f64>>().unwrap();
/// assert_eq!(expr.to_string(), "sin(2 * x) - 10 * x ^ 3");
///
/// let derived = expr.differentiate("x").unwrap().simplify();
/// assert_eq!(derived.evaluate(&Bindings::new().with_var("x", 0.0)), Some(2.0));
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Expression<T> {
    /// The root of the expression tree.
    root: Node<T>,
}

impl<T: Domain> Expression<T> {
    /// Parses an expression from the given source.
    pub fn parse(source: &str) -> Result<Self, Error> {
        parse::<T>(source).map(Self::from)
    }

    /// Creates an expression made of a single constant.
    pub fn constant(value: T) -> Self {
        Self { root: Node::Constant(value) }
    }

    /// Creates an expression made of a single variable.
    pub fn variable(name: impl Into<String>) -> Self {
        Self { root: Node::variable(name) }
    }

    /// Returns the root of the expression tree.
    pub fn root(&self) -> &Node<T> {
        &self.root
    }

    /// Consumes the expression, returning the root of the expression tree.
    pub fn into_root(self) -> Node<T> {
        self.root
    }

    /// Evaluates the expression with the given variable bindings. Returns [`None`] if the
    /// expression contains a variable that is not bound.
    pub fn evaluate(&self, bindings: &Bindings<T>) -> Option<T> {
        self.root.eval(bindings)
    }

    /// Computes the derivative of the expression with respect to the variable `var`.
    ///
    /// The result is not simplified; call [`Expression::simplify`] on it to do so.
    pub fn differentiate(&self, var: &str) -> Result<Self, DerivativeError> {
        symbolic::derivative(&self.root, var).map(Self::from)
    }

    /// Simplifies the expression.
    pub fn simplify(&self) -> Self {
        symbolic::simplify(self.root.clone()).into()
    }

    /// Simplifies the expression, also returning the simplification steps that were applied.
    pub fn simplify_with_steps(&self) -> (Self, Vec<Step>) {
        let (root, steps) = symbolic::simplify_with_steps(self.root.clone());
        (root.into(), steps)
    }

    /// Replaces every occurrence of the variable `var` with a constant with the given value.
    pub fn substitute(&self, var: &str, value: T) -> Self {
        symbolic::substitute(&self.root, var, value).into()
    }

    /// Renders the expression like [`Display`](fmt::Display) does, but writes the value of every
    /// bound variable in place of its name.
    pub fn to_string_with_substitution(&self, bindings: &Bindings<T>) -> String {
        self.root
            .display_with(|name| bindings.get_var(name))
            .to_string()
    }

    /// Applies a unary operation to a copy of this expression.
    fn apply(&self, op: UnaryOpKind) -> Self {
        Unary::new(op, self.root.clone()).into()
    }

    /// Returns the sine of this expression.
    pub fn sin(&self) -> Self {
        self.apply(UnaryOpKind::Sin)
    }

    /// Returns the cosine of this expression.
    pub fn cos(&self) -> Self {
        self.apply(UnaryOpKind::Cos)
    }

    /// Returns the natural logarithm of this expression.
    pub fn ln(&self) -> Self {
        self.apply(UnaryOpKind::Ln)
    }

    /// Returns the natural exponential function of this expression.
    pub fn exp(&self) -> Self {
        self.apply(UnaryOpKind::Exp)
    }
}

impl<T> From<Node<T>> for Expression<T> {
    fn from(root: Node<T>) -> Self {
        Self { root }
    }
}

impl<T> From<Unary<T>> for Expression<T> {
    fn from(unary: Unary<T>) -> Self {
        Self { root: unary.into() }
    }
}

impl<T> From<Binary<T>> for Expression<T> {
    fn from(binary: Binary<T>) -> Self {
        Self { root: binary.into() }
    }
}

impl<T: Domain> FromStr for Expression<T> {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl<T: Domain> fmt::Display for Expression<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.root, f)
    }
}

/// Implements a binary operator trait for [`Expression`]s, both by value and by reference. `^`
/// ([`BitXor`]) builds a power.
macro_rules! impl_binary_op {
    ($($trait:ident :: $method:ident => $op:ident),* $(,)?) => {
        $(
            impl<T: Domain> $trait for Expression<T> {
                type Output = Expression<T>;

                fn $method(self, rhs: Self) -> Self::Output {
                    Binary::new(self.root, BinOpKind::$op, rhs.root).into()
                }
            }

            impl<T: Domain> $trait for &Expression<T> {
                type Output = Expression<T>;

                fn $method(self, rhs: Self) -> Self::Output {
                    Binary::new(self.root.clone(), BinOpKind::$op, rhs.root.clone()).into()
                }
            }
        )*
    };
}

impl_binary_op!(
    Add::add => Add,
    Sub::sub => Sub,
    Mul::mul => Mul,
    Div::div => Div,
    BitXor::bitxor => Exp,
);
