use tracing::{debug, trace};

use crate::container::MultiVector;
use crate::error::{Error, Result};
use crate::node::Node;
use crate::search::Path;

impl<T> MultiVector<T> {
    /// Replace the branch at `index` with its own direct nodes, in order.
    ///
    /// Returns the number of nodes spliced in. Promotion goes down one level
    /// only: branches among the spliced nodes stay branches. Promoting an
    /// empty branch removes the slot.
    ///
    /// Promoting a leaf is an error and leaves the multivector unchanged.
    ///
    /// ```
    /// use multivector::multivector;
    ///
    /// let mut mv = multivector![1, [2, [3]], 4];
    /// assert_eq!(mv.promote(1), Ok(2));
    /// assert_eq!(mv, multivector![1, 2, [3], 4]);
    /// ```
    pub fn promote(&mut self, index: usize) -> Result<usize> {
        let len = self.nodes.len();
        let children = match self.nodes.get_mut(index) {
            None => return Err(Error::OutOfRange { index, len }),
            Some(Node::Leaf(_)) => return Err(Error::NotABranch { index }),
            Some(Node::Branch(branch)) => branch.take_nodes(),
        };
        let count = children.len();
        self.nodes.splice(index..=index, children);
        trace!(index, count, "promoted branch");
        Ok(count)
    }

    /// Promote the branch addressed by `path`, which may be at any depth.
    ///
    /// A path that does not address a node is `Error::PathNotFound`; a path
    /// to a leaf is `Error::NotABranch`.
    pub fn promote_path(&mut self, path: &Path) -> Result<usize> {
        let (last, init) = path.split_last().ok_or(Error::PathNotFound)?;
        self.container_at_mut(init)
            .ok_or(Error::PathNotFound)?
            .promote(last)
            .map_err(Error::into_path_error)
    }

    /// Promote every direct branch once. Returns the number of branches
    /// promoted.
    pub fn promote_all(&mut self) -> usize {
        let mut promoted = 0;
        let mut nodes = Vec::with_capacity(self.nodes.len());
        for node in self.take_nodes() {
            match node {
                Node::Leaf(_) => nodes.push(node),
                Node::Branch(branch) => {
                    promoted += 1;
                    nodes.extend(branch.into_nodes());
                }
            }
        }
        self.nodes = nodes;
        trace!(promoted, "promoted all direct branches");
        promoted
    }

    /// Promote repeatedly until only leaves remain. The leaves keep their
    /// depth-first order.
    pub fn flatten(&mut self) {
        if self.nodes.iter().all(Node::is_leaf) {
            return;
        }
        let depth = self.depth();
        let leaves: Vec<T> = self.take().into_linear().collect();
        debug!(depth, leaves = leaves.len(), "flattened multivector");
        self.nodes = leaves.into_iter().map(Node::Leaf).collect();
    }
}
