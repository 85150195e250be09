use crate::container::MultiVector;

/// A slot in a [`MultiVector`].
#[derive(Clone)]
pub enum Node<T> {
    /// A single value.
    Leaf(T),
    /// A nested multivector, representing a sub-sequence.
    Branch(MultiVector<T>),
}

impl<T> Node<T> {
    pub fn leaf(value: T) -> Self {
        Node::Leaf(value)
    }

    pub fn branch(branch: MultiVector<T>) -> Self {
        Node::Branch(branch)
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self, Node::Leaf(_))
    }

    pub fn is_branch(&self) -> bool {
        matches!(self, Node::Branch(_))
    }

    /// The value, if this is a leaf.
    pub fn as_leaf(&self) -> Option<&T> {
        match self {
            Node::Leaf(value) => Some(value),
            Node::Branch(_) => None,
        }
    }

    pub fn as_leaf_mut(&mut self) -> Option<&mut T> {
        match self {
            Node::Leaf(value) => Some(value),
            Node::Branch(_) => None,
        }
    }

    /// The nested multivector, if this is a branch.
    pub fn as_branch(&self) -> Option<&MultiVector<T>> {
        match self {
            Node::Leaf(_) => None,
            Node::Branch(branch) => Some(branch),
        }
    }

    pub fn as_branch_mut(&mut self) -> Option<&mut MultiVector<T>> {
        match self {
            Node::Leaf(_) => None,
            Node::Branch(branch) => Some(branch),
        }
    }

    pub fn into_leaf(self) -> Option<T> {
        match self {
            Node::Leaf(value) => Some(value),
            Node::Branch(_) => None,
        }
    }

    pub fn into_branch(self) -> Option<MultiVector<T>> {
        match self {
            Node::Leaf(_) => None,
            Node::Branch(branch) => Some(branch),
        }
    }

    /// The number of leaf values held by this node: one for a leaf, the
    /// linear length of the nested multivector for a branch.
    pub fn linear_len(&self) -> usize {
        match self {
            Node::Leaf(_) => 1,
            Node::Branch(branch) => branch.linear_len(),
        }
    }
}

impl<T> From<MultiVector<T>> for Node<T> {
    fn from(branch: MultiVector<T>) -> Self {
        Node::Branch(branch)
    }
}
