//! Traversals over a [`BinaryTreeNode`] tree.
//!
//! Each traversal is a cursor: it is positioned on a value (or exhausted) and
//! moved forward explicitly with [`TreeCursor::advance()`], restarting from
//! the first value with [`TreeCursor::rewind()`]. Every cursor is also an
//! [`Iterator`] yielding the current value before advancing.
//!
//! None of the cursors recurse, so trees of arbitrary depth can be walked.
//!
//! [`BinaryTreeNode`]: crate::BinaryTreeNode

mod in_order;
mod level_order;
mod owned_iter;
mod post_order;
mod ref_iter;

pub use in_order::*;
pub use level_order::*;
pub use owned_iter::*;
pub use post_order::*;
pub(crate) use ref_iter::*;

/// A restartable position within a traversal of a tree of `V`.
pub trait TreeCursor<'a, V: 'a> {
    /// Reset the cursor to the first value of the traversal.
    fn rewind(&mut self);

    /// Returns true when the cursor is positioned on a value.
    fn valid(&self) -> bool;

    /// The value the cursor is positioned on, if any.
    fn current(&self) -> Option<&'a V>;

    /// The zero-based position of [`TreeCursor::current()`] within the
    /// traversal, or [`None`] when the cursor is not [`TreeCursor::valid()`].
    fn key(&self) -> Option<usize>;

    /// Move to the next value of the traversal.
    ///
    /// Advancing an exhausted cursor is a no-op.
    fn advance(&mut self);

    /// The number of values in the tree, as provided when the cursor was
    /// constructed.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Implement [`Iterator`] for a [`TreeCursor`], yielding the current value and
/// then advancing.
macro_rules! cursor_iterator {
    ($cursor:ident) => {
        impl<'a, V> Iterator for $cursor<'a, V> {
            type Item = &'a V;

            fn next(&mut self) -> Option<Self::Item> {
                let v = self.current()?;
                self.advance();
                Some(v)
            }
        }
    };
}

pub(crate) use cursor_iterator;
