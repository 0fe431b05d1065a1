use super::{cursor_iterator, TreeCursor};
use crate::BinaryTreeNode;

/// A depth-first, in-order traversal (left subtree, node, right subtree).
///
/// For a snapshot of a [`SplayTree`] this yields the values in ascending
/// order.
///
/// [`SplayTree`]: crate::SplayTree
#[derive(Debug, Clone)]
pub struct InOrder<'a, V> {
    root: Option<&'a BinaryTreeNode<V>>,
    len: usize,

    /// Nodes whose left subtree is being visited.
    stack: Vec<&'a BinaryTreeNode<V>>,

    /// The root of the next subtree to descend into, if any.
    pending: Option<&'a BinaryTreeNode<V>>,

    current: Option<&'a BinaryTreeNode<V>>,
    emitted: usize,
}

impl<'a, V> InOrder<'a, V> {
    /// Construct a cursor over the tree rooted at `root` containing `len`
    /// values, positioned on the first value.
    pub fn new(root: Option<&'a BinaryTreeNode<V>>, len: usize) -> Self {
        let mut this = Self {
            root,
            len,
            stack: vec![],
            pending: None,
            current: None,
            emitted: 0,
        };

        this.rewind();
        this
    }
}

impl<'a, V> TreeCursor<'a, V> for InOrder<'a, V> {
    fn rewind(&mut self) {
        self.stack.clear();
        self.pending = self.root;
        self.current = None;
        self.emitted = 0;
        self.advance();
    }

    fn valid(&self) -> bool {
        self.current.is_some()
    }

    fn current(&self) -> Option<&'a V> {
        self.current.map(|v| v.value())
    }

    fn key(&self) -> Option<usize> {
        self.current.map(|_| self.emitted - 1)
    }

    fn advance(&mut self) {
        // Descend down the left side of the pending subtree, if any.
        while let Some(v) = self.pending {
            self.stack.push(v);
            self.pending = v.left();
        }

        self.current = self.stack.pop();

        // Visit the right subtree of the emitted node next.
        if let Some(v) = self.current {
            self.pending = v.right();
            self.emitted += 1;
        }
    }

    fn len(&self) -> usize {
        self.len
    }
}

cursor_iterator!(InOrder);
