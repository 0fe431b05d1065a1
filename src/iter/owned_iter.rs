use crate::{binary_tree::BinaryTreeNode, node::deallocate_iteratively};

/// An in-order iterator of owned values, consuming a [`Snapshot`].
///
/// Returned by [`SplayTree::iter()`], yielding the values in ascending order.
///
/// [`Snapshot`]: crate::Snapshot
/// [`SplayTree::iter()`]: crate::SplayTree::iter
#[derive(Debug)]
pub struct IntoIter<V> {
    stack: Vec<Box<BinaryTreeNode<V>>>,
    remaining: usize,
}

impl<V> IntoIter<V> {
    pub(crate) fn new(root: Option<Box<BinaryTreeNode<V>>>, len: usize) -> Self {
        let mut this = Self {
            stack: vec![],
            remaining: len,
        };

        // Descend down the left side of the tree.
        if let Some(root) = root {
            this.push_subtree(root);
        }

        this
    }

    fn push_subtree(&mut self, subtree_root: Box<BinaryTreeNode<V>>) {
        let mut ptr = Some(subtree_root);

        while let Some(mut v) = ptr {
            ptr = v.take_left();
            self.stack.push(v);
        }
    }
}

impl<V> Iterator for IntoIter<V> {
    type Item = V;

    fn next(&mut self) -> Option<Self::Item> {
        let mut v = self.stack.pop()?;

        // Descend down the left side of the right hand child of this node, if
        // any.
        if let Some(right) = v.take_right() {
            self.push_subtree(right);
        }

        self.remaining = self.remaining.saturating_sub(1);
        Some(v.into_value())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<V> ExactSizeIterator for IntoIter<V> {}

impl<V> Drop for IntoIter<V> {
    fn drop(&mut self) {
        // Each node on the stack may still own a right subtree.
        for v in self.stack.drain(..) {
            deallocate_iteratively(Some(v));
        }
    }
}
