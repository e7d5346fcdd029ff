use super::Node;

/// An iterator that iteratively traverses the tree of nodes in left-to-right post-order (i.e.
/// depth-first).
///
/// This iterator is created by [`Node::post_order_iter`].
pub struct NodeIter<'a, T> {
    stack: Vec<&'a Node<T>>,
    last_visited: Option<&'a Node<T>>,
}

impl<'a, T> NodeIter<'a, T> {
    /// Creates a new iterator that traverses the tree of nodes in left-to-right post-order (i.e.
    /// depth-first).
    pub fn new(node: &'a Node<T>) -> Self {
        Self {
            stack: vec![node],
            last_visited: None,
        }
    }

    /// Pops the current node in the stack and marks it as the last visited node.
    fn visit(&mut self) -> Option<&'a Node<T>> {
        self.last_visited = Some(self.stack.pop()?);
        self.last_visited
    }

    /// Returns true if the given node matches the last visited node.
    fn is_last_visited(&self, node: &'a Node<T>) -> bool {
        match self.last_visited {
            Some(last_visited) => std::ptr::eq(last_visited, node),
            None => false,
        }
    }
}

impl<'a, T> Iterator for NodeIter<'a, T> {
    type Item = &'a Node<T>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let node = *self.stack.last()?;
            match node {
                Node::Constant(_) | Node::Variable(_) => return self.visit(),
                Node::Unary(unary) => {
                    if self.is_last_visited(&unary.operand) {
                        return self.visit();
                    }
                    self.stack.push(&unary.operand);
                },
                Node::Binary(binary) => {
                    if self.is_last_visited(&binary.rhs) {
                        return self.visit();
                    }
                    self.stack.push(&binary.rhs);
                    self.stack.push(&binary.lhs);
                },
            }
        }
    }
}
