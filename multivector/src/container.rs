// creation.rs contains the literal macro, conversions and generation
// compare.rs contains equality, ordering and hashing
// iter.rs contains the shallow and linear iterators
// search.rs contains find, paths and cursors
// promote.rs contains promotion and flattening

use std::ops::{Index, IndexMut};

use tracing::trace;

use crate::error::{Error, Result};
use crate::node::Node;

/// An ordered sequence of [`Node`]s, each either a leaf value or a nested
/// `MultiVector`.
///
/// A multivector exclusively owns its nodes, and each branch exclusively
/// owns its nested multivector. The structure is therefore a strict tree.
///
/// Any structural mutation invalidates outstanding iterators over this
/// multivector and over every multivector containing it. The borrow checker
/// enforces this: an iterator borrows the whole tree.
pub struct MultiVector<T> {
    pub(crate) nodes: Vec<Node<T>>,
}

// a multivector is exactly as big as the vector it wraps
#[cfg(target_arch = "x86_64")]
static_assertions::assert_eq_size!(MultiVector<u8>, [u8; 24]);

impl<T> Default for MultiVector<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> MultiVector<T> {
    /// Create an empty multivector.
    pub fn new() -> Self {
        Self { nodes: Vec::new() }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            nodes: Vec::with_capacity(capacity),
        }
    }

    /// Create a multivector from its direct nodes.
    pub fn from_nodes(nodes: Vec<Node<T>>) -> Self {
        Self { nodes }
    }

    /// The shallow length: the number of direct nodes. A branch counts as
    /// one, whatever it contains.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// The linear length: the number of leaf values reachable at any depth.
    pub fn linear_len(&self) -> usize {
        self.linear().count()
    }

    /// The number of nesting levels below this multivector.
    ///
    /// A multivector without branches has depth 0; `[1, [2, [3]]]` has
    /// depth 2. An empty branch still counts as a level, so `[[]]` has
    /// depth 1.
    pub fn depth(&self) -> usize {
        let mut deepest = 0;
        let mut stack = vec![(self, 0)];
        while let Some((current, level)) = stack.pop() {
            deepest = deepest.max(level);
            for node in &current.nodes {
                if let Node::Branch(branch) = node {
                    stack.push((branch, level + 1));
                }
            }
        }
        deepest
    }

    /// The direct nodes as a slice.
    pub fn as_slice(&self) -> &[Node<T>] {
        &self.nodes
    }

    pub fn get(&self, index: usize) -> Option<&Node<T>> {
        self.nodes.get(index)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut Node<T>> {
        self.nodes.get_mut(index)
    }

    /// Access a direct node, reporting an out of range index as an error.
    pub fn at(&self, index: usize) -> Result<&Node<T>> {
        let len = self.nodes.len();
        self.nodes.get(index).ok_or(Error::OutOfRange { index, len })
    }

    pub fn at_mut(&mut self, index: usize) -> Result<&mut Node<T>> {
        let len = self.nodes.len();
        self.nodes.get_mut(index).ok_or(Error::OutOfRange { index, len })
    }

    pub fn first(&self) -> Option<&Node<T>> {
        self.nodes.first()
    }

    pub fn last(&self) -> Option<&Node<T>> {
        self.nodes.last()
    }

    /// The leaf value at `index`, if that node is a leaf.
    pub fn leaf(&self, index: usize) -> Option<&T> {
        self.nodes.get(index).and_then(Node::as_leaf)
    }

    /// The nested multivector at `index`, if that node is a branch.
    pub fn branch(&self, index: usize) -> Option<&MultiVector<T>> {
        self.nodes.get(index).and_then(Node::as_branch)
    }

    pub fn branch_mut(&mut self, index: usize) -> Option<&mut MultiVector<T>> {
        self.nodes.get_mut(index).and_then(Node::as_branch_mut)
    }

    /// Append a leaf value.
    pub fn push(&mut self, value: T) {
        self.nodes.push(Node::Leaf(value));
    }

    /// Append a nested multivector as a single branch.
    pub fn push_branch(&mut self, branch: MultiVector<T>) {
        self.nodes.push(Node::Branch(branch));
    }

    pub fn push_node(&mut self, node: Node<T>) {
        self.nodes.push(node);
    }

    /// Append a new empty branch and return it for filling in.
    pub fn push_empty_branch(&mut self) -> &mut MultiVector<T> {
        self.nodes.push(Node::Branch(MultiVector::new()));
        match self.nodes.last_mut() {
            Some(Node::Branch(branch)) => branch,
            _ => unreachable!("a branch was just pushed"),
        }
    }

    pub fn pop(&mut self) -> Option<Node<T>> {
        self.nodes.pop()
    }

    /// Insert a node before `index`. Inserting at `len()` appends.
    pub fn insert(&mut self, index: usize, node: Node<T>) -> Result<()> {
        let len = self.nodes.len();
        if index > len {
            return Err(Error::OutOfRange { index, len });
        }
        self.nodes.insert(index, node);
        Ok(())
    }

    /// Remove and return the direct node at `index`.
    pub fn remove(&mut self, index: usize) -> Result<Node<T>> {
        let len = self.nodes.len();
        if index >= len {
            return Err(Error::OutOfRange { index, len });
        }
        trace!(index, len, "removing node");
        Ok(self.nodes.remove(index))
    }

    /// Replace the direct node at `index`, returning the previous one.
    pub fn replace(&mut self, index: usize, node: Node<T>) -> Result<Node<T>> {
        let slot = self.at_mut(index)?;
        Ok(std::mem::replace(slot, node))
    }

    /// Move all nodes of `other` to the end of this multivector, leaving
    /// `other` empty.
    pub fn append(&mut self, other: &mut MultiVector<T>) {
        self.nodes.append(&mut other.nodes);
    }

    pub fn clear(&mut self) {
        // dropping the taken multivector releases the nodes iteratively
        drop(self.take());
    }

    /// Take the contents out in constant time, leaving this multivector
    /// empty but valid.
    pub fn take(&mut self) -> MultiVector<T> {
        std::mem::take(self)
    }

    /// Take the direct nodes out, leaving this multivector empty.
    pub(crate) fn take_nodes(&mut self) -> Vec<Node<T>> {
        std::mem::take(&mut self.nodes)
    }

    /// Consume the multivector into its direct nodes.
    pub fn into_nodes(mut self) -> Vec<Node<T>> {
        self.take_nodes()
    }
}

impl<T: Clone> Clone for MultiVector<T> {
    fn clone(&self) -> Self {
        self.rebuild(T::clone)
    }
}

impl<T> Drop for MultiVector<T> {
    fn drop(&mut self) {
        // detach nested multivectors onto a heap stack so that each one is
        // dropped with nothing but leaves and empty branches left in it
        let mut pending = Vec::new();
        detach_branches(&mut self.nodes, &mut pending);
        while let Some(mut branch) = pending.pop() {
            detach_branches(&mut branch.nodes, &mut pending);
        }
    }
}

fn detach_branches<T>(nodes: &mut [Node<T>], pending: &mut Vec<MultiVector<T>>) {
    for node in nodes {
        if let Node::Branch(branch) = node {
            if !branch.nodes.is_empty() {
                pending.push(branch.take());
            }
        }
    }
}

impl<T> Index<usize> for MultiVector<T> {
    type Output = Node<T>;

    fn index(&self, index: usize) -> &Node<T> {
        &self.nodes[index]
    }
}

impl<T> IndexMut<usize> for MultiVector<T> {
    fn index_mut(&mut self, index: usize) -> &mut Node<T> {
        &mut self.nodes[index]
    }
}
