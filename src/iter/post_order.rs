use super::{cursor_iterator, TreeCursor};
use crate::BinaryTreeNode;

/// A depth-first, post-order traversal (left subtree, right subtree, node).
///
/// The root of the tree is always the last value yielded.
#[derive(Debug, Clone)]
pub struct PostOrder<'a, V> {
    root: Option<&'a BinaryTreeNode<V>>,
    len: usize,

    /// Nodes waiting to be emitted, interleaved with the right children that
    /// must be visited before them.
    ///
    /// A node's right child is always pushed immediately below the node
    /// itself, so finding it on top of the stack once the node is popped
    /// again means the right subtree has not yet been visited.
    stack: Vec<&'a BinaryTreeNode<V>>,

    /// The root of the next subtree to descend into, if any.
    pending: Option<&'a BinaryTreeNode<V>>,

    current: Option<&'a BinaryTreeNode<V>>,
    emitted: usize,
}

impl<'a, V> PostOrder<'a, V> {
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

    fn emit(&mut self, n: &'a BinaryTreeNode<V>) {
        self.current = Some(n);
        self.emitted += 1;
    }
}

impl<'a, V> TreeCursor<'a, V> for PostOrder<'a, V> {
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
        loop {
            // Descend down the left side of the pending subtree, deferring
            // each node (and its right child) until its left subtree has been
            // visited.
            if let Some(v) = self.pending.take() {
                self.stack.extend(v.right());
                self.stack.push(v);
                self.pending = v.left();
                continue;
            }

            let Some(v) = self.stack.pop() else {
                // Exhausted.
                self.current = None;
                return;
            };

            match v.right() {
                Some(right)
                    if self
                        .stack
                        .last()
                        .is_some_and(|&top| std::ptr::eq(top, right)) =>
                {
                    // The right subtree has yet to be visited - swap it with
                    // "v" so that "v" is emitted after it.
                    self.stack.pop();
                    self.stack.push(v);
                    self.pending = Some(right);
                }
                _ => {
                    self.emit(v);
                    return;
                }
            }
        }
    }

    fn len(&self) -> usize {
        self.len
    }
}

cursor_iterator!(PostOrder);
