use tracing::trace;

use crate::container::MultiVector;
use crate::node::Node;

/// Create a [`MultiVector`] from a nested literal.
///
/// Bracketed items become branches, built recursively; any other item is an
/// expression that becomes a leaf.
///
/// ```
/// use multivector::multivector;
///
/// let mv = multivector![1, [2, [3, 4]], [], 5];
/// assert_eq!(mv.len(), 4);
/// assert_eq!(mv.linear_len(), 5);
/// assert_eq!(mv.to_string(), "[1, [2, [3, 4]], [], 5]");
/// ```
///
/// A leaf that is itself an array expression has to be wrapped in
/// parentheses, as a bare `[..]` is always read as a branch.
#[macro_export]
macro_rules! multivector {
    () => {
        $crate::MultiVector::new()
    };
    ($($items:tt)+) => {{
        let mut multivector = $crate::MultiVector::new();
        $crate::__multivector_items!(multivector; $($items)+);
        multivector
    }};
}

#[doc(hidden)]
#[macro_export]
macro_rules! __multivector_items {
    ($multivector:ident;) => {};
    ($multivector:ident; [ $($branch:tt)* ] $(, $($rest:tt)*)?) => {
        $multivector.push_branch($crate::multivector![$($branch)*]);
        $($crate::__multivector_items!($multivector; $($rest)*);)?
    };
    ($multivector:ident; $value:expr $(, $($rest:tt)*)?) => {
        $multivector.push($value);
        $($crate::__multivector_items!($multivector; $($rest)*);)?
    };
}

impl<T> MultiVector<T> {
    /// Create a flat multivector of `count` leaves, calling `generate` once
    /// per leaf in order.
    pub fn generate<F>(count: usize, mut generate: F) -> Self
    where
        F: FnMut() -> T,
    {
        trace!(count, "generating flat multivector");
        Self::from_nodes((0..count).map(|_| Node::Leaf(generate())).collect())
    }

    /// Create a multivector with a regular nested shape, calling `generate`
    /// once per leaf in depth-first order.
    ///
    /// `shape` gives the width at each level, outermost first; the last
    /// entry is the number of leaves in each innermost branch. An empty
    /// shape gives an empty multivector.
    ///
    /// ```
    /// use multivector::{multivector, MultiVector};
    ///
    /// let mut next = 0;
    /// let mv = MultiVector::generate_nested(&[2, 3], || {
    ///     next += 1;
    ///     next
    /// });
    /// assert_eq!(mv, multivector![[1, 2, 3], [4, 5, 6]]);
    /// ```
    pub fn generate_nested<F>(shape: &[usize], mut generate: F) -> Self
    where
        F: FnMut() -> T,
    {
        trace!(?shape, "generating nested multivector");
        let Some(&outer) = shape.first() else {
            return Self::new();
        };
        // one frame per level under construction: the slots still to fill
        // and the nodes built so far
        let mut stack: Vec<(usize, Vec<Node<T>>)> = vec![(outer, Vec::with_capacity(outer))];
        loop {
            let level = stack.len();
            let Some((remaining, built)) = stack.last_mut() else {
                break;
            };
            if *remaining > 0 {
                *remaining -= 1;
                match shape.get(level) {
                    None => built.push(Node::Leaf(generate())),
                    Some(&width) => stack.push((width, Vec::with_capacity(width))),
                }
                continue;
            }
            let finished = match stack.pop() {
                Some((_, built)) => Self::from_nodes(built),
                None => break,
            };
            match stack.last_mut() {
                Some((_, parent)) => parent.push(Node::Branch(finished)),
                None => return finished,
            }
        }
        Self::new()
    }

    /// Create a multivector with the same shape as `template`, calling
    /// `generate` once per leaf in depth-first order.
    pub fn generate_like<U, F>(template: &MultiVector<U>, mut generate: F) -> Self
    where
        F: FnMut() -> T,
    {
        template.rebuild(|_| generate())
    }

    /// Replace every leaf value in depth-first order with the next value
    /// from `generate`. The shape is left untouched.
    pub fn fill_with<F>(&mut self, mut generate: F)
    where
        F: FnMut() -> T,
    {
        for value in self.linear_mut() {
            *value = generate();
        }
    }

    /// Create a multivector with the same shape, mapping each leaf value.
    pub fn map<U, F>(&self, f: F) -> MultiVector<U>
    where
        F: FnMut(&T) -> U,
    {
        self.rebuild(f)
    }

    /// Rebuild the tree shape, producing each leaf from the original leaf in
    /// depth-first order.
    pub(crate) fn rebuild<U, F>(&self, mut leaf: F) -> MultiVector<U>
    where
        F: FnMut(&T) -> U,
    {
        let mut stack = vec![(self.nodes.iter(), Vec::with_capacity(self.nodes.len()))];
        while let Some((source, built)) = stack.last_mut() {
            match source.next() {
                Some(Node::Leaf(value)) => built.push(Node::Leaf(leaf(value))),
                Some(Node::Branch(branch)) => {
                    stack.push((branch.nodes.iter(), Vec::with_capacity(branch.nodes.len())))
                }
                None => {
                    let finished = match stack.pop() {
                        Some((_, built)) => MultiVector::from_nodes(built),
                        None => break,
                    };
                    match stack.last_mut() {
                        Some((_, parent)) => parent.push(Node::Branch(finished)),
                        None => return finished,
                    }
                }
            }
        }
        MultiVector::new()
    }
}

impl<T> From<Vec<T>> for MultiVector<T> {
    fn from(values: Vec<T>) -> Self {
        values.into_iter().collect()
    }
}

impl<T> From<Vec<Node<T>>> for MultiVector<T> {
    fn from(nodes: Vec<Node<T>>) -> Self {
        Self::from_nodes(nodes)
    }
}

impl<T> FromIterator<T> for MultiVector<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from_nodes(iter.into_iter().map(Node::Leaf).collect())
    }
}

impl<T> FromIterator<Node<T>> for MultiVector<T> {
    fn from_iter<I: IntoIterator<Item = Node<T>>>(iter: I) -> Self {
        Self::from_nodes(iter.into_iter().collect())
    }
}

impl<T> Extend<T> for MultiVector<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.nodes.extend(iter.into_iter().map(Node::Leaf));
    }
}

impl<T> Extend<Node<T>> for MultiVector<T> {
    fn extend<I: IntoIterator<Item = Node<T>>>(&mut self, iter: I) {
        self.nodes.extend(iter);
    }
}
