use thiserror::Error;

/// Errors returned by [`SplayTree`] operations that cannot be satisfied.
///
/// All errors are returned before the tree is modified.
///
/// [`SplayTree`]: crate::SplayTree
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// The requested value is not in the tree.
    #[error("value not found")]
    Lookup,

    /// The operation `op` requires at least one value in the tree.
    #[error("{op}() called on an empty tree")]
    Empty {
        /// The name of the rejected operation.
        op: &'static str,
    },

    /// The comparator cannot be replaced once the tree holds values, as the
    /// existing nodes are ordered by the current one.
    #[error("cannot replace the comparator of a non-empty tree")]
    State,
}

/// A [`Result`](std::result::Result) specialised to [`Error`].
pub type Result<T, E = Error> = std::result::Result<T, E>;
