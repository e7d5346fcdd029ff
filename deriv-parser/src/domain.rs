//! The numeric domains an expression tree can be instantiated over.
//!
//! Every [`Node`](crate::parser::ast::Node) is generic over a [`Domain`], which provides the
//! arithmetic, the elementary functions, and the canonical rendering of constants. Two domains
//! are provided:
//!
//! - [`f64`], real double-precision numbers;
//! - [`Complex64`], complex numbers made of two `f64`s.
//!
//! The two domains differ in one place during parsing: only a domain with an
//! [imaginary unit](Domain::imaginary_unit) accepts the identifier `i`.
//!
//! ```
//! use deriv_parser::domain::Domain;
//! use num_complex::Complex64;
//!
//! assert_eq!(<f64 as Domain>::imaginary_unit(), None);
//! assert_eq!(Complex64::imaginary_unit(), Some(Complex64::new(0.0, 1.0)));
//! ```

use num_complex::Complex64;
use std::{
    fmt::{self, Debug, Formatter},
    ops::{Add, Div, Mul, Neg, Sub},
};

/// A numeric type that expressions can be evaluated in.
pub trait Domain:
    Copy
    + Debug
    + PartialEq
    + Send
    + Sync
    + 'static
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
    + Neg<Output = Self>
{
    /// The additive identity.
    fn zero() -> Self;

    /// The multiplicative identity.
    fn one() -> Self;

    /// Converts a real number, such as a parsed numeric literal, into this domain.
    fn from_real(value: f64) -> Self;

    /// The imaginary unit `i`, if this domain can represent it.
    fn imaginary_unit() -> Option<Self>;

    /// Sine, in radians.
    fn sin(self) -> Self;

    /// Cosine, in radians.
    fn cos(self) -> Self;

    /// Natural logarithm.
    fn ln(self) -> Self;

    /// Natural exponential function.
    fn exp(self) -> Self;

    /// Raises `self` to the power of `exp`.
    fn pow(self, exp: Self) -> Self;

    /// Writes the canonical rendering of a constant with this value.
    fn fmt_constant(&self, f: &mut Formatter<'_>) -> fmt::Result;
}

impl Domain for f64 {
    fn zero() -> Self {
        0.0
    }

    fn one() -> Self {
        1.0
    }

    fn from_real(value: f64) -> Self {
        value
    }

    fn imaginary_unit() -> Option<Self> {
        None
    }

    fn sin(self) -> Self {
        f64::sin(self)
    }

    fn cos(self) -> Self {
        f64::cos(self)
    }

    fn ln(self) -> Self {
        f64::ln(self)
    }

    fn exp(self) -> Self {
        f64::exp(self)
    }

    fn pow(self, exp: Self) -> Self {
        self.powf(exp)
    }

    fn fmt_constant(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self)
    }
}

impl Domain for Complex64 {
    fn zero() -> Self {
        Complex64::new(0.0, 0.0)
    }

    fn one() -> Self {
        Complex64::new(1.0, 0.0)
    }

    fn from_real(value: f64) -> Self {
        Complex64::new(value, 0.0)
    }

    fn imaginary_unit() -> Option<Self> {
        Some(Complex64::i())
    }

    fn sin(self) -> Self {
        Complex64::sin(self)
    }

    fn cos(self) -> Self {
        Complex64::cos(self)
    }

    fn ln(self) -> Self {
        Complex64::ln(self)
    }

    fn exp(self) -> Self {
        Complex64::exp(self)
    }

    fn pow(self, exp: Self) -> Self {
        self.powc(exp)
    }

    /// Complex constants with no imaginary part are written as plain real numbers, and as
    /// `(real, imag)` otherwise.
    fn fmt_constant(&self, f: &mut Formatter<'_>) -> fmt::Result {
        if self.im == 0.0 {
            write!(f, "{}", self.re)
        } else {
            write!(f, "({}, {})", self.re, self.im)
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use super::*;

    /// Renders a constant with [`Domain::fmt_constant`].
    fn render<T: Domain>(value: T) -> String {
        struct Constant<T>(T);

        impl<T: Domain> fmt::Display for Constant<T> {
            fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
                self.0.fmt_constant(f)
            }
        }

        Constant(value).to_string()
    }

    #[test]
    fn real_rendering() {
        assert_eq!(render(2.0), "2");
        assert_eq!(render(0.5), "0.5");
        assert_eq!(render(-10.0), "-10");
    }

    #[test]
    fn complex_rendering() {
        assert_eq!(render(Complex64::new(2.0, 0.0)), "2");
        assert_eq!(render(Complex64::new(2.0, 3.0)), "(2, 3)");
        assert_eq!(render(Complex64::new(0.0, -1.5)), "(0, -1.5)");
    }

    #[test]
    fn complex_functions() {
        // e^(i*pi) = -1
        let value = (Complex64::i() * std::f64::consts::PI).exp();
        assert!((value.re + 1.0).abs() < 1e-12);
        assert!(value.im.abs() < 1e-12);

        // ln(-1) = i*pi
        let value = Domain::ln(Complex64::new(-1.0, 0.0));
        assert!(value.re.abs() < 1e-12);
        assert!((value.im - std::f64::consts::PI).abs() < 1e-12);
    }

    #[test]
    fn real_power() {
        assert_eq!(Domain::pow(5.0, 5.0), 3125.0);
        assert!(Domain::ln(-1.0_f64).is_nan());
    }
}
