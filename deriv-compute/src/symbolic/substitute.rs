use deriv_parser::{
    domain::Domain,
    parser::ast::{Binary, Node, Unary},
};

/// Returns a new tree in which every occurrence of the variable `var` is replaced by a constant
/// with the given value. The input is left unchanged.
///
/// ```
/// use deriv_compute::symbolic::substitute;
/// use deriv_parser::parser::parse;
///
/// let tree = parse::<f64>("x^2 + y").unwrap();
/// assert_eq!(substitute(&tree, "x", 3.0).to_string(), "3 ^ 2 + y");
/// ```
pub fn substitute<T: Domain>(node: &Node<T>, var: &str, value: T) -> Node<T> {
    match node {
        Node::Variable(name) if name == var => Node::Constant(value),
        Node::Constant(_) | Node::Variable(_) => node.clone(),
        Node::Unary(unary) => Unary::new(unary.op, substitute(&unary.operand, var, value)).into(),
        Node::Binary(binary) => Binary::new(
            substitute(&binary.lhs, var, value),
            binary.op,
            substitute(&binary.rhs, var, value),
        ).into(),
    }
}
