//! Evaluation, symbolic differentiation, and simplification of expression trees produced by
//! [`deriv_parser`].
//!
//! Most users will only need the [`Expression`](expression::Expression) type, which bundles a
//! tree with every operation this crate provides:
//!
//! ```
//! use deriv_compute::{ctxt::Bindings, expression::Expression};
//!
//! let expr = Expression::<f64>::parse("x^2 + 3x").unwrap();
//! let derived = expr.differentiate("x").unwrap().simplify();
//! assert_eq!(derived.to_string(), "2 * x + 3");
//! assert_eq!(derived.evaluate(&Bindings::new().with_var("x", 2.0)), Some(7.0));
//! ```
//!
//! The lower level building blocks are also available:
//!
//! - [`eval`]: numerical evaluation of a [`Node`](deriv_parser::parser::ast::Node) given a set
//!   of [`Bindings`](ctxt::Bindings).
//! - [`symbolic`]: differentiation, simplification, and substitution of trees.
//!
//! # Features
//!
//! - `serde`: Derives `Serialize` and `Deserialize` for [`Expression`](expression::Expression)
//!   and [`Bindings`](ctxt::Bindings).

pub mod ctxt;
pub mod eval;
pub mod expression;
pub mod symbolic;
