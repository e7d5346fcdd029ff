//! Symbolic manipulation of expression trees.
//!
//! The operations in this module turn one [`Node`](deriv_parser::parser::ast::Node) tree into
//! another. [`derivative()`] computes the derivative of a tree with respect to one variable,
//! [`simplify()`] applies a fixed set of algebraic rewrite rules, and [`substitute()`] replaces a
//! variable with a constant. None of them modify their input in place.
//!
//! A typical use is to differentiate, then simplify the result:
//!
//! ```
//! use deriv_compute::symbolic::{derivative, simplify};
//! use deriv_parser::parser::parse;
//!
//! let tree = parse::<f64>("sin(x)").unwrap();
//! let derived = simplify(derivative(&tree, "x").unwrap());
//! assert_eq!(derived.to_string(), "cos(x)");
//! ```
//!
//! For more information, see the [`mod@simplify`] module.

pub mod derivative;
pub mod simplify;
pub mod step_collector;
pub mod substitute;

pub use derivative::{derivative, DerivativeError};
pub use simplify::{simplify, simplify_with, simplify_with_steps};
pub use step_collector::StepCollector;
pub use substitute::substitute;
