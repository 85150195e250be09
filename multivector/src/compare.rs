use std::cmp::Ordering;
use std::convert::Infallible;
use std::hash::{Hash, Hasher};

use crate::container::MultiVector;
use crate::node::Node;

impl<T> MultiVector<T> {
    /// Compare two multivectors lexicographically over their direct nodes,
    /// descending into pairs of branches.
    ///
    /// A leaf sorts before a branch, and a strict prefix sorts before the
    /// longer sequence. Leaves are compared by `leaf`; an error from it
    /// stops the walk.
    fn lexicographic<U, E, F>(&self, other: &MultiVector<U>, mut leaf: F) -> Result<Ordering, E>
    where
        F: FnMut(&T, &U) -> Result<Ordering, E>,
    {
        let mut stack = vec![(self.nodes.iter(), other.nodes.iter())];
        while let Some((a, b)) = stack.last_mut() {
            match (a.next(), b.next()) {
                (None, None) => {
                    stack.pop();
                }
                (None, Some(_)) => return Ok(Ordering::Less),
                (Some(_), None) => return Ok(Ordering::Greater),
                (Some(Node::Leaf(a)), Some(Node::Leaf(b))) => match leaf(a, b)? {
                    Ordering::Equal => {}
                    ordering => return Ok(ordering),
                },
                (Some(Node::Leaf(_)), Some(Node::Branch(_))) => return Ok(Ordering::Less),
                (Some(Node::Branch(_)), Some(Node::Leaf(_))) => return Ok(Ordering::Greater),
                (Some(Node::Branch(a)), Some(Node::Branch(b))) => {
                    stack.push((a.nodes.iter(), b.nodes.iter()))
                }
            }
        }
        Ok(Ordering::Equal)
    }
}

impl<T: PartialEq> PartialEq for MultiVector<T> {
    fn eq(&self, other: &Self) -> bool {
        if self.len() != other.len() {
            return false;
        }
        let walked = self.lexicographic(other, |a, b| {
            if a == b {
                Ok(Ordering::Equal)
            } else {
                Err(())
            }
        });
        matches!(walked, Ok(Ordering::Equal))
    }
}

impl<T: Eq> Eq for MultiVector<T> {}

impl<T: PartialOrd> PartialOrd for MultiVector<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.lexicographic(other, |a, b| a.partial_cmp(b).ok_or(()))
            .ok()
    }
}

impl<T: Ord> Ord for MultiVector<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        match self.lexicographic(other, |a, b| Ok::<_, Infallible>(a.cmp(b))) {
            Ok(ordering) => ordering,
            Err(never) => match never {},
        }
    }
}

impl<T: Hash> Hash for MultiVector<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        // lengths delimit each level, the same way a Vec hashes
        state.write_usize(self.nodes.len());
        let mut stack = vec![self.nodes.iter()];
        while let Some(top) = stack.last_mut() {
            match top.next() {
                Some(Node::Leaf(value)) => {
                    state.write_u8(0);
                    value.hash(state);
                }
                Some(Node::Branch(branch)) => {
                    state.write_u8(1);
                    state.write_usize(branch.nodes.len());
                    stack.push(branch.nodes.iter());
                }
                None => {
                    stack.pop();
                }
            }
        }
    }
}

impl<T: PartialEq> PartialEq for Node<T> {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Node::Leaf(a), Node::Leaf(b)) => a == b,
            (Node::Branch(a), Node::Branch(b)) => a == b,
            _ => false,
        }
    }
}

impl<T: Eq> Eq for Node<T> {}

impl<T: PartialOrd> PartialOrd for Node<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        match (self, other) {
            (Node::Leaf(a), Node::Leaf(b)) => a.partial_cmp(b),
            (Node::Branch(a), Node::Branch(b)) => a.partial_cmp(b),
            (Node::Leaf(_), Node::Branch(_)) => Some(Ordering::Less),
            (Node::Branch(_), Node::Leaf(_)) => Some(Ordering::Greater),
        }
    }
}

impl<T: Ord> Ord for Node<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Node::Leaf(a), Node::Leaf(b)) => a.cmp(b),
            (Node::Branch(a), Node::Branch(b)) => a.cmp(b),
            (Node::Leaf(_), Node::Branch(_)) => Ordering::Less,
            (Node::Branch(_), Node::Leaf(_)) => Ordering::Greater,
        }
    }
}

impl<T: Hash> Hash for Node<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        match self {
            Node::Leaf(value) => {
                state.write_u8(0);
                value.hash(state);
            }
            Node::Branch(branch) => {
                state.write_u8(1);
                branch.hash(state);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cmp::Ordering;

    use crate::{multivector, MultiVector};

    #[test]
    fn test_equal_shapes() {
        assert_eq!(multivector![1, [2, 3], 4], multivector![1, [2, 3], 4]);
        assert_ne!(multivector![1, [2, 3], 4], multivector![1, [2, 3, 4]]);
        assert_ne!(multivector![1, 2], multivector![[1, 2]]);
    }

    #[test]
    fn test_empty_branch_is_not_empty() {
        let empty: MultiVector<i32> = multivector![];
        let holding_empty: MultiVector<i32> = multivector![[]];
        assert_ne!(empty, holding_empty);
        assert_eq!(empty.linear_len(), holding_empty.linear_len());
    }

    #[test]
    fn test_leaf_before_branch() {
        assert!(multivector![9] < multivector![[0]]);
        assert!(multivector![[]] > multivector![100]);
    }

    #[test]
    fn test_prefix_sorts_first() {
        assert!(multivector![1, 2] < multivector![1, 2, 0]);
        assert!(multivector![[1]] < multivector![[1, 0]]);
        let empty: MultiVector<i32> = multivector![];
        assert!(empty < multivector![[]]);
    }

    #[test]
    fn test_descends_then_continues() {
        // equal nested branches defer to the following siblings
        assert_eq!(
            multivector![[1, [2]], 3].cmp(&multivector![[1, [2]], 4]),
            Ordering::Less
        );
        assert_eq!(
            multivector![[1, [3]], 0].cmp(&multivector![[1, [2]], 4]),
            Ordering::Greater
        );
    }

    #[test]
    fn test_partial_ord_with_nan() {
        let a = multivector![1.0, [f64::NAN]];
        let b = multivector![1.0, [2.0]];
        assert_eq!(a.partial_cmp(&b), None);
        assert_ne!(a, a.clone());
        assert!(multivector![1.0, [f64::NAN]] > multivector![0.5, [f64::NAN]]);
    }
}
