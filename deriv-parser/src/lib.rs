//! Tokenizer, parser, and expression tree for symbolic differentiation.
//!
//! Expressions are parsed into a [`Node`](parser::ast::Node) tree that is generic over the
//! numeric [`Domain`](domain::Domain) of its constants, either [`f64`] or
//! [`Complex64`](num_complex::Complex64).
//!
//! ```
//! use deriv_parser::parser::{ast::Node, parse};
//! use num_complex::Complex64;
//!
//! let tree = parse::<f64>("sin(2x) - 10(x^3)").unwrap();
//! assert_eq!(tree.to_string(), "sin(2 * x) - 10 * x ^ 3");
//!
//! let tree = parse::<Complex64>("(2 + 3i)").unwrap();
//! assert_eq!(tree, Node::Constant(Complex64::new(2.0, 3.0)));
//! ```
//!
//! # Features
//!
//! - `serde`: Derives `Serialize` and `Deserialize` for the expression tree.

pub mod domain;
pub mod parser;
pub mod tokenizer;
