pub mod ast;
pub mod error;
pub mod expr;
pub mod fmt;
pub mod token;

use crate::{domain::Domain, tokenizer::{tokenize_complete, Token, TokenKind}};
use ast::Node;
use error::{Error, kind};
use deriv_error::ErrorKind;
use std::ops::Range;

/// A high-level parser for expressions. This is the type to use to parse an arbitrary piece of
/// text into an expression tree.
///
/// The parser holds a single cursor into the token stream and only ever moves it forward.
/// Whitespace tokens are kept in the stream and skipped on demand.
#[derive(Debug, Clone)]
pub struct Parser<'source> {
    /// The tokens that this parser is currently parsing.
    tokens: Box<[Token<'source>]>,

    /// The index of the **next** token to be parsed.
    cursor: usize,
}

impl<'source> Parser<'source> {
    /// Create a new parser for the given source.
    pub fn new(source: &'source str) -> Self {
        Self {
            tokens: tokenize_complete(source),
            cursor: 0,
        }
    }

    /// Creates an error that points at the current token, or the end of the source code if the
    /// cursor is at the end of the stream.
    pub fn error(&self, kind: impl ErrorKind + 'static) -> Error {
        Error::new(vec![self.span()], kind)
    }

    /// Returns a span pointing at the end of the source code.
    pub fn eof_span(&self) -> Range<usize> {
        self.tokens.last().map_or(0..0, |token| token.span.end..token.span.end)
    }

    /// Returns the span of the next non-whitespace token, or the end of the source code if there
    /// is none.
    pub fn span(&self) -> Range<usize> {
        self.peek_token()
            .map_or(self.eof_span(), |token| token.span.clone())
    }

    /// Returns the next non-whitespace token without moving the cursor. Returns [`None`] if there
    /// are no more tokens.
    pub fn peek_token(&self) -> Option<&Token<'source>> {
        self.tokens[self.cursor.min(self.tokens.len())..]
            .iter()
            .find(|token| !token.is_whitespace())
    }

    /// Returns true if the next non-whitespace token is of the given kind.
    pub fn peek_is(&self, kind: TokenKind) -> bool {
        self.peek_token().map_or(false, |token| token.kind == kind)
    }

    /// Returns the next token to be parsed, then advances the cursor. Whitespace tokens are
    /// skipped.
    ///
    /// Returns an EOF error if there are no more tokens.
    pub fn next_token(&mut self) -> Result<Token<'source>, Error> {
        while self.cursor < self.tokens.len() {
            let token = &self.tokens[self.cursor];
            self.cursor += 1;
            if token.is_whitespace() {
                continue;
            } else {
                // cloning is cheap: only Range<_> is cloned
                return Ok(token.clone());
            }
        }

        Err(self.error(kind::UnexpectedEof))
    }

    /// Consumes the next non-whitespace token if it is of the given kind.
    pub fn next_token_if(&mut self, kind: TokenKind) -> Option<Token<'source>> {
        if self.peek_is(kind) {
            self.next_token().ok()
        } else {
            None
        }
    }

    /// Attempts to parse a value from the given stream of tokens. All the tokens must be consumed
    /// by the parser; if not, an error is returned.
    pub fn try_parse_full<T: Parse>(&mut self) -> Result<T, Error> {
        let value = T::parse(self)?;
        match self.peek_token() {
            None => Ok(value),
            Some(token) if token.kind == TokenKind::CloseParen => Err(Error::new(
                vec![token.span.clone()],
                kind::UnclosedParenthesis { opening: false },
            )),
            Some(token) => Err(Error::new(
                vec![token.span.start..self.eof_span().end],
                kind::ExpectedEof,
            )),
        }
    }
}

/// Any type that can be parsed from a source of tokens.
pub trait Parse: Sized {
    /// Parses a value from the given stream of tokens, advancing the stream past the consumed
    /// tokens if parsing is successful.
    ///
    /// This function should be used by consumers of the library.
    fn parse(input: &mut Parser) -> Result<Self, Error>;
}

/// Parses the whole source into an expression tree over the domain `T`.
///
/// ```
/// use deriv_parser::parser::parse;
///
/// let tree = parse::<f64>("2x + 1").unwrap();
/// assert_eq!(tree.to_string(), "2 * x + 1");
/// ```
pub fn parse<T: Domain>(source: &str) -> Result<Node<T>, Error> {
    Parser::new(source).try_parse_full::<Node<T>>()
}

/// The precedence of an operation, in order from lowest precedence (evaluated last) to highest
/// precedence (evaluated first).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Precedence {
    /// Precedence of addition (`+`) and subtraction (`-`), which separate terms.
    Term,

    /// Precedence of multiplication (`*`) and division (`/`), which separate factors.
    Factor,

    /// Precedence of exponentiation (`^`).
    Exp,

    /// Precedence of negation and of the functions `sin`, `cos`, `ln`, and `exp`.
    Unary,

    /// Precedence of constants and variables, which never need parentheses.
    Atom,
}

impl PartialOrd for Precedence {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        let left = *self as u8;
        let right = *other as u8;
        left.partial_cmp(&right)
    }
}

#[cfg(test)]
mod tests {
    use num_complex::Complex64;
    use pretty_assertions::assert_eq;
    use super::*;

    use ast::{Binary, Unary};
    use token::op::{BinOpKind, UnaryOpKind};

    fn var(name: &str) -> Node<f64> {
        Node::variable(name)
    }

    fn num(value: f64) -> Node<f64> {
        Node::constant(value)
    }

    fn bin(lhs: Node<f64>, op: BinOpKind, rhs: Node<f64>) -> Node<f64> {
        Node::Binary(Binary::new(lhs, op, rhs))
    }

    fn un(op: UnaryOpKind, operand: Node<f64>) -> Node<f64> {
        Node::Unary(Unary::new(op, operand))
    }

    #[test]
    fn literal_number() {
        assert_eq!(parse::<f64>("16").unwrap(), num(16.0));
        assert_eq!(parse::<f64>("3.25").unwrap(), num(3.25));
        assert_eq!(parse::<f64>(".5").unwrap(), num(0.5));
        assert_eq!(parse::<f64>("  7.  ").unwrap(), num(7.0));
    }

    #[test]
    fn literal_number_overflow() {
        let huge = format!("1{}", "0".repeat(400));
        assert_eq!(parse::<f64>(&huge).unwrap(), num(f64::INFINITY));
    }

    #[test]
    fn literal_variable() {
        assert_eq!(parse::<f64>("rate").unwrap(), var("rate"));
    }

    #[test]
    fn binary_left_associativity() {
        assert_eq!(
            parse::<f64>("3 * x * 5").unwrap(),
            bin(bin(num(3.0), BinOpKind::Mul, var("x")), BinOpKind::Mul, num(5.0)),
        );
        assert_eq!(
            parse::<f64>("a - b - c").unwrap(),
            bin(bin(var("a"), BinOpKind::Sub, var("b")), BinOpKind::Sub, var("c")),
        );
    }

    #[test]
    fn exp_left_associativity() {
        assert_eq!(
            parse::<f64>("2^3^2").unwrap(),
            bin(bin(num(2.0), BinOpKind::Exp, num(3.0)), BinOpKind::Exp, num(2.0)),
        );
    }

    #[test]
    fn binary_mix_precedence() {
        assert_eq!(
            parse::<f64>("3 + 4 * a + b").unwrap(),
            bin(
                bin(num(3.0), BinOpKind::Add, bin(num(4.0), BinOpKind::Mul, var("a"))),
                BinOpKind::Add,
                var("b"),
            ),
        );
        assert_eq!(
            parse::<f64>("a * b ^ 2").unwrap(),
            bin(var("a"), BinOpKind::Mul, bin(var("b"), BinOpKind::Exp, num(2.0))),
        );
    }

    #[test]
    fn negation_binds_tighter_than_exp() {
        assert_eq!(
            parse::<f64>("-x^2").unwrap(),
            bin(un(UnaryOpKind::Neg, var("x")), BinOpKind::Exp, num(2.0)),
        );
        assert_eq!(
            parse::<f64>("--x").unwrap(),
            un(UnaryOpKind::Neg, un(UnaryOpKind::Neg, var("x"))),
        );
        assert_eq!(
            parse::<f64>("2 ^ -x").unwrap(),
            bin(num(2.0), BinOpKind::Exp, un(UnaryOpKind::Neg, var("x"))),
        );
    }

    #[test]
    fn implicit_multiplication() {
        assert_eq!(parse::<f64>("2x").unwrap(), bin(num(2.0), BinOpKind::Mul, var("x")));
        assert_eq!(parse::<f64>("2 x").unwrap(), bin(num(2.0), BinOpKind::Mul, var("x")));
        assert_eq!(
            parse::<f64>("3(x + 1)").unwrap(),
            bin(num(3.0), BinOpKind::Mul, bin(var("x"), BinOpKind::Add, num(1.0))),
        );
        assert_eq!(
            parse::<f64>("2sin(x)").unwrap(),
            bin(num(2.0), BinOpKind::Mul, un(UnaryOpKind::Sin, var("x"))),
        );
    }

    #[test]
    fn implicit_multiplication_binds_tighter_than_exp() {
        assert_eq!(
            parse::<f64>("2x^2").unwrap(),
            bin(bin(num(2.0), BinOpKind::Mul, var("x")), BinOpKind::Exp, num(2.0)),
        );
        assert_eq!(
            parse::<f64>("6 / 2x").unwrap(),
            bin(num(6.0), BinOpKind::Div, bin(num(2.0), BinOpKind::Mul, var("x"))),
        );
    }

    #[test]
    fn functions() {
        assert_eq!(
            parse::<f64>("sin(2x) - 10(x^3)").unwrap(),
            bin(
                un(UnaryOpKind::Sin, bin(num(2.0), BinOpKind::Mul, var("x"))),
                BinOpKind::Sub,
                bin(num(10.0), BinOpKind::Mul, bin(var("x"), BinOpKind::Exp, num(3.0))),
            ),
        );
        assert_eq!(
            parse::<f64>("exp(ln( cos (y)))").unwrap(),
            un(UnaryOpKind::Exp, un(UnaryOpKind::Ln, un(UnaryOpKind::Cos, var("y")))),
        );
    }

    #[test]
    fn nested_parentheses() {
        assert_eq!(
            parse::<f64>("((a + b)) * c").unwrap(),
            bin(bin(var("a"), BinOpKind::Add, var("b")), BinOpKind::Mul, var("c")),
        );
    }

    #[test]
    fn complex_literal() {
        assert_eq!(
            parse::<Complex64>("(2+3i)").unwrap(),
            Node::constant(Complex64::new(2.0, 3.0)),
        );
        assert_eq!(
            parse::<Complex64>("( 1.5 - 2 i )").unwrap(),
            Node::constant(Complex64::new(1.5, -2.0)),
        );
        assert_eq!(
            parse::<Complex64>("(4 + i)").unwrap(),
            Node::constant(Complex64::new(4.0, 1.0)),
        );
    }

    #[test]
    fn complex_literal_negative_parts() {
        assert_eq!(
            parse::<Complex64>("(-2 + 3i)").unwrap(),
            Node::constant(Complex64::new(-2.0, 3.0)),
        );
        assert_eq!(
            parse::<Complex64>("(-2 - i)").unwrap(),
            Node::constant(Complex64::new(-2.0, -1.0)),
        );
        assert_eq!(
            parse::<Complex64>("(2 + -3i)").unwrap(),
            Node::constant(Complex64::new(2.0, -3.0)),
        );
        assert_eq!(
            parse::<Complex64>("(-1.5 - -2i)").unwrap(),
            Node::constant(Complex64::new(-1.5, 2.0)),
        );
        assert_eq!(parse::<Complex64>("(-2 + 3i)").unwrap().to_string(), "(-2, 3)");
    }

    #[test]
    fn complex_imaginary_unit() {
        assert_eq!(parse::<Complex64>("i").unwrap(), Node::constant(Complex64::i()));
        assert_eq!(
            parse::<Complex64>("2i").unwrap(),
            Node::binary(Node::constant(Complex64::new(2.0, 0.0)), BinOpKind::Mul, Node::constant(Complex64::i())),
        );
    }

    #[test]
    fn complex_non_literal_parentheses() {
        // only `constant ± imaginary` collapses into a single constant
        assert_eq!(
            parse::<Complex64>("(x + 3i)").unwrap(),
            Node::binary(
                Node::variable("x"),
                BinOpKind::Add,
                Node::binary(Node::constant(Complex64::new(3.0, 0.0)), BinOpKind::Mul, Node::constant(Complex64::i())),
            ),
        );
    }

    #[test]
    fn imaginary_unit_unsupported_in_real_domain() {
        let err = parse::<f64>("(2+3i)").unwrap_err();
        assert!(err.is::<kind::ImaginaryUnitUnsupported>());
        assert_eq!(err.spans, vec![4..5]);

        assert!(parse::<f64>("i").unwrap_err().is::<kind::ImaginaryUnitUnsupported>());
    }

    #[test]
    fn unknown_symbol() {
        let err = parse::<f64>("3 + $").unwrap_err();
        assert_eq!(
            err.downcast_ref::<kind::UnknownSymbol>(),
            Some(&kind::UnknownSymbol { symbol: "$".to_string() }),
        );
        assert_eq!(err.spans, vec![4..5]);

        assert!(parse::<f64>("* 2").unwrap_err().is::<kind::UnknownSymbol>());
    }

    #[test]
    fn unexpected_eof() {
        assert!(parse::<f64>("").unwrap_err().is::<kind::UnexpectedEof>());
        assert!(parse::<f64>("   ").unwrap_err().is::<kind::UnexpectedEof>());

        let err = parse::<f64>("2 +").unwrap_err();
        assert!(err.is::<kind::UnexpectedEof>());
        assert_eq!(err.spans, vec![3..3]);
    }

    #[test]
    fn expected_eof() {
        let err = parse::<f64>("x y").unwrap_err();
        assert!(err.is::<kind::ExpectedEof>());
        assert_eq!(err.spans, vec![2..3]);

        assert!(parse::<f64>("(x) (y)").unwrap_err().is::<kind::ExpectedEof>());
    }

    #[test]
    fn unclosed_parenthesis() {
        let err = parse::<f64>("(x + 1").unwrap_err();
        assert_eq!(
            err.downcast_ref::<kind::UnclosedParenthesis>(),
            Some(&kind::UnclosedParenthesis { opening: true }),
        );
        assert_eq!(err.spans, vec![0..1]);

        let err = parse::<f64>("x + 1)").unwrap_err();
        assert_eq!(
            err.downcast_ref::<kind::UnclosedParenthesis>(),
            Some(&kind::UnclosedParenthesis { opening: false }),
        );
        assert_eq!(err.spans, vec![5..6]);
    }

    #[test]
    fn empty_parenthesis() {
        assert!(parse::<f64>("()").unwrap_err().is::<kind::EmptyParenthesis>());
        assert!(parse::<f64>("sin( )").unwrap_err().is::<kind::EmptyParenthesis>());
    }

    #[test]
    fn missing_function_argument() {
        let err = parse::<f64>("sin x").unwrap_err();
        assert_eq!(
            err.downcast_ref::<kind::MissingFunctionArgument>(),
            Some(&kind::MissingFunctionArgument { name: "sin".to_string() }),
        );
        assert_eq!(err.spans, vec![0..3]);

        assert!(parse::<f64>("ln").unwrap_err().is::<kind::MissingFunctionArgument>());
    }

    #[test]
    fn adjacent_numbers() {
        // `2.` followed by `.5` lexes as two numbers
        assert!(parse::<f64>("2..5").unwrap_err().is::<kind::ExpectedEof>());
    }

    #[test]
    fn precedence_order() {
        assert!(Precedence::Term < Precedence::Factor);
        assert!(Precedence::Factor < Precedence::Exp);
        assert!(Precedence::Exp < Precedence::Unary);
        assert!(Precedence::Unary < Precedence::Atom);
    }
}
