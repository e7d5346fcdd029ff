//! The grammar of expressions.
//!
//! From lowest to highest precedence:
//!
//! ```text
//! expression := term (('+' | '-') term)*
//! term       := factor (('*' | '/') factor)*
//! factor     := unary ('^' unary)*
//! unary      := '-' unary | primary
//! primary    := '-' primary
//!             | '(' expression ')'
//!             | number primary?      (implicit multiplication, only before a name or '(')
//!             | function '(' expression ')'
//!             | name
//! ```
//!
//! Negation sits above exponentiation, so `-x^2` is `(-x)^2`, and implicit multiplication is
//! resolved inside `primary`, so `2x^2` is `(2x)^2`.

use crate::{
    domain::Domain,
    parser::{
        ast::{Binary, Node, Unary},
        error::{kind, Error},
        token::op::{BinOpKind, UnaryOpKind},
        Parse,
        Parser,
    },
    tokenizer::{Token, TokenKind},
};

impl<T: Domain> Parse for Node<T> {
    fn parse(input: &mut Parser) -> Result<Self, Error> {
        parse_expression(input)
    }
}

/// Parses a left-associative chain of operands separated by any of the given operators.
fn parse_chain<T: Domain>(
    input: &mut Parser,
    ops: &[TokenKind],
    operand: fn(&mut Parser) -> Result<Node<T>, Error>,
) -> Result<Node<T>, Error> {
    let mut lhs = operand(input)?;

    while let Some(op) = input.peek_token()
        .filter(|token| ops.contains(&token.kind))
        .and_then(|token| BinOpKind::from_token(token.kind))
    {
        input.next_token()?;
        let rhs = operand(input)?;
        lhs = Binary::new(lhs, op, rhs).into();
    }

    Ok(lhs)
}

/// `expression := term (('+' | '-') term)*`
fn parse_expression<T: Domain>(input: &mut Parser) -> Result<Node<T>, Error> {
    parse_chain(input, &[TokenKind::Add, TokenKind::Sub], parse_term)
}

/// `term := factor (('*' | '/') factor)*`
fn parse_term<T: Domain>(input: &mut Parser) -> Result<Node<T>, Error> {
    parse_chain(input, &[TokenKind::Mul, TokenKind::Div], parse_factor)
}

/// `factor := unary ('^' unary)*`
fn parse_factor<T: Domain>(input: &mut Parser) -> Result<Node<T>, Error> {
    parse_chain(input, &[TokenKind::Exp], parse_unary)
}

/// `unary := '-' unary | primary`
fn parse_unary<T: Domain>(input: &mut Parser) -> Result<Node<T>, Error> {
    if input.next_token_if(TokenKind::Sub).is_some() {
        let operand = parse_unary(input)?;
        return Ok(Unary::new(UnaryOpKind::Neg, operand).into());
    }

    parse_primary(input)
}

/// Parses a constant, variable, function call, or parenthesized expression.
fn parse_primary<T: Domain>(input: &mut Parser) -> Result<Node<T>, Error> {
    let token = input.next_token()?;
    match token.kind {
        TokenKind::Sub => {
            let operand = parse_primary(input)?;
            Ok(Unary::new(UnaryOpKind::Neg, operand).into())
        },
        TokenKind::OpenParen => {
            let inner = parse_paren_inner(input, &token)?;
            Ok(fold_complex_literal(inner))
        },
        TokenKind::Number => {
            let value = parse_number::<T>(&token)?;

            // implicit multiplication, such as `2x` or `3(x + 1)`
            if input.peek_is(TokenKind::Name) || input.peek_is(TokenKind::OpenParen) {
                let rhs = parse_primary(input)?;
                Ok(Binary::new(Node::Constant(value), BinOpKind::Mul, rhs).into())
            } else {
                Ok(Node::Constant(value))
            }
        },
        TokenKind::Name => parse_name(input, &token),
        _ => Err(Error::new(
            vec![token.span.clone()],
            kind::UnknownSymbol { symbol: token.lexeme.to_string() },
        )),
    }
}

/// Parses the expression after an opening parenthesis, along with the closing parenthesis.
fn parse_paren_inner<T: Domain>(input: &mut Parser, open: &Token) -> Result<Node<T>, Error> {
    if input.peek_is(TokenKind::CloseParen) {
        return Err(Error::new(
            vec![open.span.start..input.span().end],
            kind::EmptyParenthesis,
        ));
    }

    let inner = parse_expression(input)?;
    if input.next_token_if(TokenKind::CloseParen).is_none() {
        return Err(Error::new(
            vec![open.span.clone()],
            kind::UnclosedParenthesis { opening: true },
        ));
    }

    Ok(inner)
}

/// Parses a numeric literal into a constant of the domain. Literals too large for `f64` become
/// infinity.
fn parse_number<T: Domain>(token: &Token) -> Result<T, Error> {
    // the tokenizer only produces lexemes that `f64` accepts
    token.lexeme
        .parse::<f64>()
        .map(T::from_real)
        .map_err(|_| Error::new(
            vec![token.span.clone()],
            kind::UnknownSymbol { symbol: token.lexeme.to_string() },
        ))
}

/// Parses a function call, the imaginary unit, or a variable.
fn parse_name<T: Domain>(input: &mut Parser, name: &Token) -> Result<Node<T>, Error> {
    if let Some(op) = UnaryOpKind::from_function_name(name.lexeme) {
        let open = input.next_token_if(TokenKind::OpenParen)
            .ok_or_else(|| Error::new(
                vec![name.span.clone()],
                kind::MissingFunctionArgument { name: name.lexeme.to_string() },
            ))?;
        let operand = parse_paren_inner(input, &open)?;
        return Ok(Unary::new(op, operand).into());
    }

    if name.lexeme == "i" {
        return T::imaginary_unit()
            .map(Node::Constant)
            .ok_or_else(|| Error::new(vec![name.span.clone()], kind::ImaginaryUnitUnsupported));
    }

    Ok(Node::Variable(name.lexeme.to_string()))
}

/// Returns the value of a constant, or of a negated constant such as `-2`.
fn signed_constant<T: Domain>(node: &Node<T>) -> Option<T> {
    match node {
        Node::Constant(value) => Some(*value),
        Node::Unary(Unary { operand, op: UnaryOpKind::Neg }) => signed_constant(operand).map(|value| -value),
        _ => None,
    }
}

/// Returns the value of an imaginary term: the imaginary unit `i`, a constant times it (`3i`), or
/// the negation of either (`-i`, `-3i`).
fn signed_imaginary<T: Domain>(node: &Node<T>, unit: T) -> Option<T> {
    match node {
        Node::Constant(value) if *value == unit => Some(*value),
        Node::Binary(Binary { lhs, op: BinOpKind::Mul, rhs }) => match &**rhs {
            Node::Constant(value) if *value == unit => signed_constant(lhs).map(|coeff| coeff * *value),
            _ => None,
        },
        Node::Unary(Unary { operand, op: UnaryOpKind::Neg }) => {
            signed_imaginary(operand, unit).map(|value| -value)
        },
        _ => None,
    }
}

/// Collapses a parenthesized `constant ± imaginary` pair, such as `(2 + 3i)`, `(1 - i)`, or
/// `(-2 + -3i)`, into a single constant. Any other tree is returned unchanged.
fn fold_complex_literal<T: Domain>(node: Node<T>) -> Node<T> {
    let Some(unit) = T::imaginary_unit() else {
        return node;
    };

    let binary = match node {
        Node::Binary(binary) => binary,
        node => return node,
    };

    let real = signed_constant(&binary.lhs);
    let imaginary = signed_imaginary(&binary.rhs, unit);
    match (binary.op, real, imaginary) {
        (BinOpKind::Add, Some(real), Some(imaginary)) => Node::Constant(real + imaginary),
        (BinOpKind::Sub, Some(real), Some(imaginary)) => Node::Constant(real - imaginary),
        _ => Node::Binary(binary),
    }
}
