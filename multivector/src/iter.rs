use std::iter::FusedIterator;

use crate::container::MultiVector;
use crate::node::Node;

impl<T> MultiVector<T> {
    /// Iterate over the direct nodes. Branches are single steps.
    pub fn iter(&self) -> std::slice::Iter<'_, Node<T>> {
        self.nodes.iter()
    }

    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, Node<T>> {
        self.nodes.iter_mut()
    }

    /// Iterate over all leaf values in depth-first order, ignoring branch
    /// boundaries.
    pub fn linear(&self) -> Linear<'_, T> {
        Linear::new(self)
    }

    /// Iterate mutably over all leaf values in depth-first order.
    pub fn linear_mut(&mut self) -> LinearMut<'_, T> {
        LinearMut::new(self)
    }

    /// Consume the multivector into its leaf values in depth-first order.
    pub fn into_linear(self) -> IntoLinear<T> {
        IntoLinear::new(self)
    }
}

impl<'a, T> IntoIterator for &'a MultiVector<T> {
    type Item = &'a Node<T>;
    type IntoIter = std::slice::Iter<'a, Node<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut MultiVector<T> {
    type Item = &'a mut Node<T>;
    type IntoIter = std::slice::IterMut<'a, Node<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

impl<T> IntoIterator for MultiVector<T> {
    type Item = Node<T>;
    type IntoIter = std::vec::IntoIter<Node<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.into_nodes().into_iter()
    }
}

/// A depth-first iterator over the leaf values of a multivector.
///
/// Keeps one slice iterator per open branch, so nesting depth costs heap,
/// not call stack.
pub struct Linear<'a, T> {
    stack: Vec<std::slice::Iter<'a, Node<T>>>,
}

impl<'a, T> Linear<'a, T> {
    fn new(multivector: &'a MultiVector<T>) -> Self {
        Self {
            stack: vec![multivector.nodes.iter()],
        }
    }
}

// not derived, as that would require T: Clone
impl<T> Clone for Linear<'_, T> {
    fn clone(&self) -> Self {
        Self {
            stack: self.stack.clone(),
        }
    }
}

impl<'a, T> Iterator for Linear<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        loop {
            let top = self.stack.last_mut()?;
            match top.next() {
                Some(Node::Leaf(value)) => return Some(value),
                Some(Node::Branch(branch)) => self.stack.push(branch.nodes.iter()),
                None => {
                    self.stack.pop();
                }
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        // the nodes left at the current level are a lower bound only if
        // they're all leaves, and branches may be empty
        (0, None)
    }
}

impl<T> FusedIterator for Linear<'_, T> {}

/// A depth-first iterator over mutable references to the leaf values of a
/// multivector.
pub struct LinearMut<'a, T> {
    stack: Vec<std::slice::IterMut<'a, Node<T>>>,
}

impl<'a, T> LinearMut<'a, T> {
    fn new(multivector: &'a mut MultiVector<T>) -> Self {
        Self {
            stack: vec![multivector.nodes.iter_mut()],
        }
    }
}

impl<'a, T> Iterator for LinearMut<'a, T> {
    type Item = &'a mut T;

    fn next(&mut self) -> Option<&'a mut T> {
        loop {
            let top = self.stack.last_mut()?;
            match top.next() {
                Some(Node::Leaf(value)) => return Some(value),
                Some(Node::Branch(branch)) => self.stack.push(branch.nodes.iter_mut()),
                None => {
                    self.stack.pop();
                }
            }
        }
    }
}

impl<T> FusedIterator for LinearMut<'_, T> {}

/// An owning depth-first iterator over the leaf values of a multivector.
pub struct IntoLinear<T> {
    stack: Vec<std::vec::IntoIter<Node<T>>>,
}

impl<T> IntoLinear<T> {
    fn new(multivector: MultiVector<T>) -> Self {
        Self {
            stack: vec![multivector.into_nodes().into_iter()],
        }
    }
}

impl<T> Iterator for IntoLinear<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        loop {
            let top = self.stack.last_mut()?;
            match top.next() {
                Some(Node::Leaf(value)) => return Some(value),
                Some(Node::Branch(branch)) => self.stack.push(branch.into_nodes().into_iter()),
                None => {
                    self.stack.pop();
                }
            }
        }
    }
}

impl<T> FusedIterator for IntoLinear<T> {}

impl<T> Drop for IntoLinear<T> {
    fn drop(&mut self) {
        // unconsumed nodes are dropped through MultiVector's iterative drop
        while let Some(rest) = self.stack.pop() {
            drop(MultiVector::from_nodes(rest.collect()));
        }
    }
}
