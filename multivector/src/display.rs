use std::fmt;

use crate::container::MultiVector;
use crate::node::Node;

impl<T> MultiVector<T> {
    /// Write the multivector as a bracketed list, e.g. `[1, [2, 3], 4]`,
    /// with each leaf written by `leaf`.
    fn write_nested<F>(&self, f: &mut fmt::Formatter<'_>, leaf: F) -> fmt::Result
    where
        F: Fn(&T, &mut fmt::Formatter<'_>) -> fmt::Result,
    {
        f.write_str("[")?;
        let mut stack = vec![(self.nodes.iter(), true)];
        while let Some((nodes, first)) = stack.last_mut() {
            match nodes.next() {
                Some(node) => {
                    if !*first {
                        f.write_str(", ")?;
                    }
                    *first = false;
                    match node {
                        Node::Leaf(value) => leaf(value, f)?,
                        Node::Branch(branch) => {
                            f.write_str("[")?;
                            stack.push((branch.nodes.iter(), true));
                        }
                    }
                }
                None => {
                    f.write_str("]")?;
                    stack.pop();
                }
            }
        }
        Ok(())
    }
}

impl<T: fmt::Display> fmt::Display for MultiVector<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_nested(f, |value, f| fmt::Display::fmt(value, f))
    }
}

impl<T: fmt::Debug> fmt::Debug for MultiVector<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_nested(f, |value, f| fmt::Debug::fmt(value, f))
    }
}

impl<T: fmt::Debug> fmt::Debug for Node<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Node::Leaf(value) => f.debug_tuple("Leaf").field(value).finish(),
            Node::Branch(branch) => f.debug_tuple("Branch").field(branch).finish(),
        }
    }
}
