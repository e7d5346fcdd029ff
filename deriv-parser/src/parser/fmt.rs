use std::fmt::{Display, Formatter, Result};
use crate::domain::Domain;
use super::ast::Node;

/// A wrapper type that implements [`Display`] for a [`Node`], rendering every variable for which
/// the lookup function returns a value as that value instead of its name.
///
/// This type is created by [`Node::display_with`].
pub struct SubstitutionFormatter<'a, T, F> {
    node: &'a Node<T>,
    lookup: F,
}

impl<T, F> Display for SubstitutionFormatter<'_, T, F>
where
    T: Domain,
    F: Fn(&str) -> Option<T>,
{
    fn fmt(&self, f: &mut Formatter) -> Result {
        fmt_node(self.node, f, &self.lookup)
    }
}

impl<T: Domain> Node<T> {
    /// Wraps the node in a [`SubstitutionFormatter`], which renders the variables known to
    /// `lookup` as their values.
    ///
    /// ```
    /// use deriv_parser::parser::parse;
    ///
    /// let tree = parse::<f64>("a * sin(b)").unwrap();
    /// let rendered = tree.display_with(|name| (name == "a").then_some(2.0)).to_string();
    /// assert_eq!(rendered, "2 * sin(b)");
    /// ```
    pub fn display_with<F>(&self, lookup: F) -> SubstitutionFormatter<'_, T, F>
    where
        F: Fn(&str) -> Option<T>,
    {
        SubstitutionFormatter { node: self, lookup }
    }
}

/// Renders the node canonically: binary operators are surrounded by single spaces, functions are
/// written as `func(operand)`, and parentheses are inserted only where the tree requires them.
impl<T: Domain> Display for Node<T> {
    fn fmt(&self, f: &mut Formatter) -> Result {
        fmt_node(self, f, &|_: &str| None)
    }
}

/// Helper to format a node, wrapped in parentheses if `paren` is true.
fn fmt_child<T, F>(node: &Node<T>, f: &mut Formatter, lookup: &F, paren: bool) -> Result
where
    T: Domain,
    F: Fn(&str) -> Option<T> + ?Sized,
{
    if paren {
        write!(f, "(")?;
        fmt_node(node, f, lookup)?;
        write!(f, ")")
    } else {
        fmt_node(node, f, lookup)
    }
}

fn fmt_node<T, F>(node: &Node<T>, f: &mut Formatter, lookup: &F) -> Result
where
    T: Domain,
    F: Fn(&str) -> Option<T> + ?Sized,
{
    match node {
        Node::Constant(value) => value.fmt_constant(f),
        Node::Variable(name) => match lookup(name.as_str()) {
            Some(value) => value.fmt_constant(f),
            None => write!(f, "{}", name),
        },
        Node::Unary(unary) => {
            write!(f, "{}", unary.op)?;
            let paren = unary.op.is_function() || matches!(*unary.operand, Node::Binary(_));
            fmt_child(&unary.operand, f, lookup, paren)
        },
        Node::Binary(binary) => {
            let precedence = binary.op.precedence();
            let rhs_precedence = binary.rhs.precedence();
            fmt_child(&binary.lhs, f, lookup, binary.lhs.precedence() < precedence)?;
            write!(f, " {} ", binary.op)?;
            fmt_child(
                &binary.rhs,
                f,
                lookup,
                rhs_precedence < precedence
                    || (rhs_precedence == precedence && !binary.op.is_associative()),
            )
        },
    }
}

#[cfg(test)]
mod tests {
    use num_complex::Complex64;
    use pretty_assertions::assert_eq;
    use super::*;

    use crate::parser::{parse, token::op::{BinOpKind, UnaryOpKind}};

    /// Parses the source over the real domain and renders it back.
    fn render(source: &str) -> String {
        parse::<f64>(source).unwrap().to_string()
    }

    #[test]
    fn canonical_fixed_point() {
        assert_eq!(render("a + b"), "a + b");
        assert_eq!(render("x * y - 3 / z"), "x * y - 3 / z");
        assert_eq!(render("sin(x) ^ 2"), "sin(x) ^ 2");
    }

    #[test]
    fn implicit_multiplication_is_explicit() {
        assert_eq!(render("sin(2x) - 10(x^3)"), "sin(2 * x) - 10 * x ^ 3");
        assert_eq!(render("3(x+1)"), "3 * (x + 1)");
        assert_eq!(render("2x^2"), "(2 * x) ^ 2");
    }

    #[test]
    fn whitespace_is_normalized() {
        assert_eq!(render("  a+b*  c "), "a + b * c");
        assert_eq!(render("(((x)))"), "x");
    }

    #[test]
    fn parenthesize_lower_precedence() {
        assert_eq!(render("(a + b) * c"), "(a + b) * c");
        assert_eq!(render("a * (b + c)"), "a * (b + c)");
        assert_eq!(render("(a * b) ^ c"), "(a * b) ^ c");
    }

    #[test]
    fn parenthesize_non_associative_rhs() {
        assert_eq!(render("a - (b - c)"), "a - (b - c)");
        assert_eq!(render("a - (b + c)"), "a - (b + c)");
        assert_eq!(render("a / (b * c)"), "a / (b * c)");
        assert_eq!(render("a ^ (b ^ c)"), "a ^ (b ^ c)");
        assert_eq!(render("(a - b) - c"), "a - b - c");
        assert_eq!(render("a + (b + c)"), "a + b + c");
    }

    #[test]
    fn negation() {
        assert_eq!(render("-x"), "-x");
        assert_eq!(render("-(x + 1)"), "-(x + 1)");
        assert_eq!(render("-x^2"), "-x ^ 2");
        assert_eq!(render("-(x^2)"), "-(x ^ 2)");
        assert_eq!(render("-sin(x)"), "-sin(x)");
    }

    #[test]
    fn functions_always_parenthesize() {
        let leaf = Node::unary(UnaryOpKind::Ln, Node::<f64>::variable("x"));
        assert_eq!(leaf.to_string(), "ln(x)");

        let nested = Node::unary(UnaryOpKind::Cos, Node::unary(UnaryOpKind::Neg, Node::constant(2.0)));
        assert_eq!(nested.to_string(), "cos(-2)");
        assert_eq!(render("exp(-(x + 1))"), "exp(-(x + 1))");
    }

    #[test]
    fn rendering_reparses_to_same_tree() {
        for source in ["a - (b - c)", "-(x ^ 2)", "2 ^ -x", "a / (b / c) * d", "ln(exp(x)) - -y"] {
            let tree = parse::<f64>(source).unwrap();
            assert_eq!(parse::<f64>(&tree.to_string()).unwrap(), tree);
        }
    }

    #[test]
    fn real_constants() {
        assert_eq!(render("2.50"), "2.5");
        assert_eq!(render("007"), "7");
        assert_eq!(Node::binary(Node::constant(0.1), BinOpKind::Mul, Node::constant(-3.0)).to_string(), "0.1 * -3");
    }

    #[test]
    fn complex_constants() {
        let tree = parse::<Complex64>("(2+3i) * x + 4").unwrap();
        assert_eq!(tree.to_string(), "(2, 3) * x + 4");
    }

    #[test]
    fn substitution() {
        let tree = parse::<f64>("a * sin(b) + c").unwrap();
        let rendered = tree
            .display_with(|name| match name {
                "a" => Some(2.0),
                "b" => Some(1.0),
                _ => None,
            })
            .to_string();
        assert_eq!(rendered, "2 * sin(1) + c");

        // the tree itself is unchanged
        assert_eq!(tree.to_string(), "a * sin(b) + c");
    }
}
