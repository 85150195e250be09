use std::fmt;

use crate::container::MultiVector;
use crate::error::{Error, Result};
use crate::node::Node;

/// The location of a node inside a multivector: the shallow index taken at
/// each level, outermost first.
///
/// The empty path addresses the multivector itself rather than a node.
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Path(Vec<usize>);

impl Path {
    pub fn root() -> Self {
        Self(Vec::new())
    }

    pub fn is_root(&self) -> bool {
        self.0.is_empty()
    }

    pub fn indices(&self) -> &[usize] {
        &self.0
    }

    /// The number of steps; a direct node has depth 1.
    pub fn depth(&self) -> usize {
        self.0.len()
    }

    /// A path one level deeper.
    pub fn child(&self, index: usize) -> Self {
        let mut indices = Vec::with_capacity(self.0.len() + 1);
        indices.extend_from_slice(&self.0);
        indices.push(index);
        Self(indices)
    }

    /// The path of the enclosing branch, if this is not the root.
    pub fn parent(&self) -> Option<Self> {
        let (_, init) = self.0.split_last()?;
        Some(Self(init.to_vec()))
    }

    pub(crate) fn split_last(&self) -> Option<(usize, &[usize])> {
        self.0.split_last().map(|(last, init)| (*last, init))
    }
}

impl From<Vec<usize>> for Path {
    fn from(indices: Vec<usize>) -> Self {
        Self(indices)
    }
}

impl From<&[usize]> for Path {
    fn from(indices: &[usize]) -> Self {
        Self(indices.to_vec())
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return f.write_str("/");
        }
        for index in &self.0 {
            write!(f, "/{}", index)?;
        }
        Ok(())
    }
}

impl<T> MultiVector<T> {
    /// The shallow index of the first direct node equal to `needle`.
    pub fn find(&self, needle: &Node<T>) -> Option<usize>
    where
        T: PartialEq,
    {
        self.nodes.iter().position(|node| node == needle)
    }

    /// The shallow index of the first direct leaf equal to `value`.
    pub fn find_value(&self, value: &T) -> Option<usize>
    where
        T: PartialEq,
    {
        self.nodes
            .iter()
            .position(|node| node.as_leaf() == Some(value))
    }

    /// The shallow index of the first direct branch equal to `branch`.
    pub fn find_branch(&self, branch: &MultiVector<T>) -> Option<usize>
    where
        T: PartialEq,
    {
        self.nodes
            .iter()
            .position(|node| node.as_branch() == Some(branch))
    }

    /// The shallow index of the first direct node matching `predicate`.
    pub fn position<P>(&self, predicate: P) -> Option<usize>
    where
        P: FnMut(&Node<T>) -> bool,
    {
        self.nodes.iter().position(predicate)
    }

    /// The linear position of the first leaf, in depth-first order, whose
    /// value matches `predicate`. Branch boundaries are crossed.
    pub fn find_if<P>(&self, mut predicate: P) -> Option<usize>
    where
        P: FnMut(&T) -> bool,
    {
        self.linear().position(|value| predicate(value))
    }

    /// The path of the first leaf, in depth-first order, whose value matches
    /// `predicate`.
    pub fn find_path_if<P>(&self, mut predicate: P) -> Option<Path>
    where
        P: FnMut(&T) -> bool,
    {
        let mut indices = Vec::new();
        let mut stack = vec![self.nodes.iter().enumerate()];
        while let Some(top) = stack.last_mut() {
            match top.next() {
                Some((index, Node::Leaf(value))) => {
                    if predicate(value) {
                        indices.push(index);
                        return Some(Path(indices));
                    }
                }
                Some((index, Node::Branch(branch))) => {
                    indices.push(index);
                    stack.push(branch.nodes.iter().enumerate());
                }
                None => {
                    stack.pop();
                    indices.pop();
                }
            }
        }
        None
    }

    /// Whether any leaf, at any depth, equals `value`.
    pub fn contains_value(&self, value: &T) -> bool
    where
        T: PartialEq,
    {
        self.linear().any(|v| v == value)
    }

    /// The leaf value at a linear position.
    pub fn linear_get(&self, position: usize) -> Option<&T> {
        self.linear().nth(position)
    }

    /// The node addressed by `path`.
    pub fn get_path(&self, path: &Path) -> Option<&Node<T>> {
        let (last, init) = path.split_last()?;
        self.container_at(init)?.nodes.get(last)
    }

    pub fn get_path_mut(&mut self, path: &Path) -> Option<&mut Node<T>> {
        let (last, init) = path.split_last()?;
        self.container_at_mut(init)?.nodes.get_mut(last)
    }

    /// Remove and return the node addressed by `path`.
    ///
    /// Any step that does not address a node, the last one included, is
    /// `Error::PathNotFound`.
    pub fn remove_path(&mut self, path: &Path) -> Result<Node<T>> {
        let (last, init) = path.split_last().ok_or(Error::PathNotFound)?;
        self.container_at_mut(init)
            .ok_or(Error::PathNotFound)?
            .remove(last)
            .map_err(Error::into_path_error)
    }

    /// The multivector reached by following `indices` through branches.
    /// No indices means this multivector.
    pub(crate) fn container_at(&self, indices: &[usize]) -> Option<&MultiVector<T>> {
        let mut current = self;
        for &index in indices {
            current = current.branch(index)?;
        }
        Some(current)
    }

    pub(crate) fn container_at_mut(&mut self, indices: &[usize]) -> Option<&mut MultiVector<T>> {
        let mut current = self;
        for &index in indices {
            current = current.branch_mut(index)?;
        }
        Some(current)
    }

    /// A cursor at the root, for drilling down with chained searches.
    pub fn cursor(&self) -> Cursor<'_, T> {
        Cursor {
            root: self,
            path: Path::root(),
        }
    }
}

/// A read-only position inside a multivector.
///
/// A cursor at the root or on a branch scopes the next search to that
/// multivector, so `find` calls chain to drill down level by level:
///
/// ```
/// use multivector::{multivector, Node};
///
/// let mv = multivector![1, [2, [3, 4]], [2, [5]]];
/// let found = mv
///     .cursor()
///     .position(|node| node.as_branch().is_some_and(|b| b.contains_value(&5)))
///     .and_then(|cursor| cursor.position(Node::is_branch))
///     .and_then(|cursor| cursor.find_value(&5))
///     .unwrap();
/// assert_eq!(found.path().indices(), &[2, 1, 0]);
/// assert_eq!(found.leaf(), Some(&5));
/// ```
pub struct Cursor<'a, T> {
    root: &'a MultiVector<T>,
    path: Path,
}

impl<T> Clone for Cursor<'_, T> {
    fn clone(&self) -> Self {
        Self {
            root: self.root,
            path: self.path.clone(),
        }
    }
}

impl<'a, T> Cursor<'a, T> {
    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn into_path(self) -> Path {
        self.path
    }

    pub fn is_root(&self) -> bool {
        self.path.is_root()
    }

    /// The node under the cursor; `None` at the root.
    pub fn node(&self) -> Option<&'a Node<T>> {
        self.root.get_path(&self.path)
    }

    /// The leaf value under the cursor, if the cursor is on a leaf.
    pub fn leaf(&self) -> Option<&'a T> {
        self.node().and_then(Node::as_leaf)
    }

    /// The multivector the next search runs in: the root, or the branch
    /// under the cursor. `None` on a leaf.
    pub fn scope(&self) -> Option<&'a MultiVector<T>> {
        self.root.container_at(self.path.indices())
    }

    /// Move to the direct node at `index` in the current scope.
    pub fn descend(&self, index: usize) -> Option<Cursor<'a, T>> {
        let scope = self.scope()?;
        scope.get(index)?;
        Some(self.at(index))
    }

    /// Move to the enclosing scope.
    pub fn parent(&self) -> Option<Cursor<'a, T>> {
        Some(Cursor {
            root: self.root,
            path: self.path.parent()?,
        })
    }

    /// Search the current scope for the first direct node equal to `needle`.
    pub fn find(&self, needle: &Node<T>) -> Option<Cursor<'a, T>>
    where
        T: PartialEq,
    {
        let index = self.scope()?.find(needle)?;
        Some(self.at(index))
    }

    /// Search the current scope for the first direct leaf equal to `value`.
    pub fn find_value(&self, value: &T) -> Option<Cursor<'a, T>>
    where
        T: PartialEq,
    {
        let index = self.scope()?.find_value(value)?;
        Some(self.at(index))
    }

    /// Search the current scope for the first direct node matching
    /// `predicate`.
    pub fn position<P>(&self, predicate: P) -> Option<Cursor<'a, T>>
    where
        P: FnMut(&Node<T>) -> bool,
    {
        let index = self.scope()?.position(predicate)?;
        Some(self.at(index))
    }

    fn at(&self, index: usize) -> Cursor<'a, T> {
        Cursor {
            root: self.root,
            path: self.path.child(index),
        }
    }
}

impl<T> fmt::Debug for Cursor<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Cursor").field("path", &self.path).finish()
    }
}
