use std::fmt::Debug;

use tracing::trace;

use crate::{
    binary_tree::BinaryTreeNode,
    iter::{InOrder, IntoIter, LevelOrder, PostOrder},
    node::{deallocate_iteratively, SplayNode},
};

/// An immutable copy of the shape and values of a [`SplayTree`] at the time
/// it was taken.
///
/// A [`Snapshot`] shares no storage with the tree it was taken from; any
/// number of traversals may be performed over it while the source tree
/// continues to be read and modified (and splayed).
///
/// [`SplayTree`]: crate::SplayTree
pub struct Snapshot<V> {
    root: Option<Box<BinaryTreeNode<V>>>,
    len: usize,
}

impl<V> Snapshot<V> {
    pub(crate) fn new(root: Option<&SplayNode<V>>, len: usize) -> Self
    where
        V: Clone,
    {
        let root = copy_tree(root);
        trace!(len, "took tree snapshot");

        Self { root, len }
    }

    /// The root node of the copied tree, if any.
    pub fn root(&self) -> Option<&BinaryTreeNode<V>> {
        self.root.as_deref()
    }

    /// The number of values in the copied tree.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Visit the values in ascending order.
    pub fn in_order(&self) -> InOrder<'_, V> {
        InOrder::new(self.root(), self.len)
    }

    /// Visit the values of both subtrees of a node before the node itself.
    pub fn post_order(&self) -> PostOrder<'_, V> {
        PostOrder::new(self.root(), self.len)
    }

    /// Visit the values breadth-first, one depth at a time from the root.
    pub fn level_order(&self) -> LevelOrder<'_, V> {
        LevelOrder::new(self.root(), self.len)
    }
}

impl<V> IntoIterator for Snapshot<V> {
    type Item = V;
    type IntoIter = IntoIter<V>;

    fn into_iter(mut self) -> Self::IntoIter {
        IntoIter::new(self.root.take(), self.len)
    }
}

impl<V> Debug for Snapshot<V>
where
    V: Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_set().entries(self.in_order()).finish()
    }
}

impl<V> Drop for Snapshot<V> {
    fn drop(&mut self) {
        deallocate_iteratively(self.root.take());
    }
}

/// A copy of `src` that is pending the copies of its children.
struct Frame<'a, V> {
    /// The children of `src` still to be copied, popped left first.
    pending: Vec<(&'a SplayNode<V>, Side)>,

    /// The side of the parent this copy is linked to once complete.
    side: Side,

    copy: BinaryTreeNode<V>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Side {
    Left,
    Right,
}

impl<'a, V> Frame<'a, V>
where
    V: Clone,
{
    fn new(src: &'a SplayNode<V>, side: Side) -> Self {
        let pending = [(src.right(), Side::Right), (src.left(), Side::Left)]
            .into_iter()
            .filter_map(|(n, side)| Some((n?, side)))
            .collect();

        Self {
            pending,
            side,
            copy: BinaryTreeNode::new(src.value().clone()),
        }
    }
}

/// Deep-copy the subtree rooted at `root` into a tree of [`BinaryTreeNode`].
///
/// The copy is performed with an explicit stack of [`Frame`], one per node on
/// the path from `root` to the node being copied, so the depth of the tree is
/// bounded by the heap rather than the call stack.
///
/// An absent child in the source is an absent child on the same side in the
/// copy.
fn copy_tree<V>(root: Option<&SplayNode<V>>) -> Option<Box<BinaryTreeNode<V>>>
where
    V: Clone,
{
    // The side of the root frame is never read, as it has no parent.
    let mut stack = vec![Frame::new(root?, Side::Left)];

    while let Some(mut frame) = stack.pop() {
        // Descend into the next child of this copy, if any remain.
        if let Some((child, side)) = frame.pending.pop() {
            stack.push(frame);
            stack.push(Frame::new(child, side));
            continue;
        }

        // Otherwise the copy is complete and can be linked to its parent.
        match (stack.last_mut(), frame.side) {
            (Some(parent), Side::Left) => {
                parent.copy.set_left(Some(frame.copy));
            }
            (Some(parent), Side::Right) => {
                parent.copy.set_right(Some(frame.copy));
            }
            (None, _) => return Some(Box::new(frame.copy)),
        }
    }

    None
}
