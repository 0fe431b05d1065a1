use std::fmt::Debug;

use crate::{iter::InOrder, node::OwnedChildren};

/// A plain binary tree node, as produced by [`SplayTree::snapshot()`].
///
/// Unlike the nodes inside a [`SplayTree`], a [`BinaryTreeNode`] never
/// changes shape on read, so it can be walked by any of the traversal cursors
/// in [`crate::iter`].
///
/// [`SplayTree`]: crate::SplayTree
/// [`SplayTree::snapshot()`]: crate::SplayTree::snapshot
pub struct BinaryTreeNode<V> {
    value: V,
    left: Option<Box<BinaryTreeNode<V>>>,
    right: Option<Box<BinaryTreeNode<V>>>,
}

impl<V> BinaryTreeNode<V> {
    /// Construct a leaf holding `value`.
    pub fn new(value: V) -> Self {
        Self {
            value,
            left: None,
            right: None,
        }
    }

    pub fn value(&self) -> &V {
        &self.value
    }

    pub fn left(&self) -> Option<&Self> {
        self.left.as_deref()
    }

    pub fn right(&self) -> Option<&Self> {
        self.right.as_deref()
    }

    /// Link `n` as the left child, returning the previous left subtree.
    pub fn set_left(&mut self, n: Option<Self>) -> Option<Self> {
        std::mem::replace(&mut self.left, n.map(Box::new)).map(|v| *v)
    }

    /// Link `n` as the right child, returning the previous right subtree.
    pub fn set_right(&mut self, n: Option<Self>) -> Option<Self> {
        std::mem::replace(&mut self.right, n.map(Box::new)).map(|v| *v)
    }

    /// Remove the left child, if any.
    pub(crate) fn take_left(&mut self) -> Option<Box<Self>> {
        self.left.take()
    }

    /// Remove the right child, if any.
    pub(crate) fn take_right(&mut self) -> Option<Box<Self>> {
        self.right.take()
    }

    /// Explode this node into the value it contains, dropping any subtrees.
    pub fn into_value(self) -> V {
        self.value
    }
}

impl<V> OwnedChildren for BinaryTreeNode<V> {
    fn take_left_child(&mut self) -> Option<Box<Self>> {
        self.take_left()
    }

    fn take_right_child(&mut self) -> Option<Box<Self>> {
        self.take_right()
    }
}

/// Formats the values of the subtree in-order.
impl<V> Debug for BinaryTreeNode<V>
where
    V: Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // The in-order walk ends when the subtree is exhausted, so the length
        // is not needed.
        f.debug_set().entries(InOrder::new(Some(self), 0)).finish()
    }
}

/// Two subtrees are equal when they have the same shape and equal values at
/// each position.
impl<V> PartialEq for BinaryTreeNode<V>
where
    V: PartialEq,
{
    fn eq(&self, other: &Self) -> bool {
        let mut stack = vec![(self, other)];

        while let Some((a, b)) = stack.pop() {
            if a.value != b.value {
                return false;
            }

            for pair in [(a.left(), b.left()), (a.right(), b.right())] {
                match pair {
                    (None, None) => {}
                    (Some(a), Some(b)) => stack.push((a, b)),
                    _ => return false,
                }
            }
        }

        true
    }
}

impl<V> Eq for BinaryTreeNode<V> where V: Eq {}
