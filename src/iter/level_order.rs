use std::collections::VecDeque;

use super::{cursor_iterator, TreeCursor};
use crate::BinaryTreeNode;

/// A breadth-first traversal, visiting all the nodes at each depth from left
/// to right before the next depth.
///
/// The traversal ends after the number of values provided at construction
/// have been visited, or when the tree has no more nodes.
#[derive(Debug, Clone)]
pub struct LevelOrder<'a, V> {
    root: Option<&'a BinaryTreeNode<V>>,
    len: usize,

    /// The nodes to visit, the front of which is the current node.
    queue: VecDeque<&'a BinaryTreeNode<V>>,
    key: usize,
}

impl<'a, V> LevelOrder<'a, V> {
    /// Construct a cursor over the tree rooted at `root` containing `len`
    /// values, positioned on the first value.
    pub fn new(root: Option<&'a BinaryTreeNode<V>>, len: usize) -> Self {
        let mut this = Self {
            root,
            len,
            queue: VecDeque::new(),
            key: 0,
        };

        this.rewind();
        this
    }
}

impl<'a, V> TreeCursor<'a, V> for LevelOrder<'a, V> {
    fn rewind(&mut self) {
        self.queue.clear();
        self.queue.extend(self.root);
        self.key = 0;
    }

    fn valid(&self) -> bool {
        self.key < self.len && !self.queue.is_empty()
    }

    fn current(&self) -> Option<&'a V> {
        if !self.valid() {
            return None;
        }
        self.queue.front().map(|v| v.value())
    }

    fn key(&self) -> Option<usize> {
        self.valid().then_some(self.key)
    }

    fn advance(&mut self) {
        let Some(v) = self.queue.pop_front() else {
            return;
        };

        self.key += 1;
        self.queue.extend(v.left());
        self.queue.extend(v.right());
    }

    fn len(&self) -> usize {
        self.len
    }
}

cursor_iterator!(LevelOrder);
