/// An error raised by a positional operation on a
/// [`MultiVector`](crate::MultiVector).
///
/// Searches that find nothing are not errors; they return `None`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// Index out of range.
    ///
    /// The index lies beyond the shallow length of the multivector. Indexes
    /// are never clamped.
    #[error("index {index} out of range for multivector of length {len}")]
    OutOfRange { index: usize, len: usize },
    /// Not a branch.
    ///
    /// Only a branch can be promoted; a leaf cannot be flattened further.
    #[error("node at index {index} is a leaf and cannot be promoted")]
    NotABranch { index: usize },
    /// Path does not address a node.
    ///
    /// One of the steps went out of range or passed through a leaf.
    #[error("path does not address a node")]
    PathNotFound,
}

impl Error {
    // the last step of a path is positional too, but reported as the path
    pub(crate) fn into_path_error(self) -> Self {
        match self {
            Error::OutOfRange { .. } => Error::PathNotFound,
            other => other,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
