//! A self-adjusting binary search tree (a [splay tree]) holding an ordered
//! set of values.
//!
//! Each access to a [`SplayTree`] moves the accessed value to the root of the
//! tree through a series of rotations, keeping frequently and recently used
//! values close to the root. All operations are amortised O(log n).
//!
//! Because reads restructure the tree, traversals are performed over a
//! [`Snapshot`]: an independent copy of the tree taken at a point in time.
//! A snapshot can be walked in-order, post-order or level-order using the
//! cursors in [`iter`], and is never affected by later changes to the tree.
//!
//! ```
//! use splaytree::{iter::TreeCursor, SplayTree};
//!
//! let mut t = [5, 3, 8, 1, 4, 7, 9].into_iter().collect::<SplayTree<_>>();
//!
//! // Reads splay the tree, and so take &mut self.
//! assert_eq!(t.get(&4), Ok(&4));
//! assert_eq!(t.last(), Ok(&9));
//!
//! let snap = t.snapshot();
//! t.remove(&5);
//!
//! // The snapshot still holds the removed value.
//! assert_eq!(
//!     snap.in_order().copied().collect::<Vec<_>>(),
//!     [1, 3, 4, 5, 7, 8, 9],
//! );
//!
//! // The root of a post-order traversal is always the last value yielded.
//! let c = snap.post_order();
//! assert!(c.valid());
//! assert_eq!(c.last(), snap.root().map(|v| v.value()));
//! ```
//!
//! The iterative splay, snapshot copy, traversals and deallocation never
//! recurse, so degenerate trees (as produced by inserting sorted values) of
//! any depth are supported.
//!
//! [splay tree]: https://en.wikipedia.org/wiki/Splay_tree

#![deny(rustdoc::broken_intra_doc_links)]
#![warn(clippy::dbg_macro, clippy::todo, missing_debug_implementations)]

mod binary_tree;
mod compare;
mod error;
pub mod iter;
mod node;
mod snapshot;
mod tree;

#[cfg(test)]
mod test_utils;

pub use binary_tree::*;
pub use compare::*;
pub use error::*;
pub use snapshot::*;
pub use tree::*;
