use crate::node::SplayNode;

/// An in-order walk of the values held in a live tree of [`SplayNode`],
/// without copying it.
///
/// The tree cannot be splayed while it is borrowed, so this is only used
/// where the tree is inspected but not accessed, such as when formatting it.
pub(crate) struct RefIter<'a, V> {
    /// Nodes whose left subtree is being (or has been) visited, the top of
    /// which holds the next value.
    stack: Vec<&'a SplayNode<V>>,
}

impl<'a, V> RefIter<'a, V> {
    pub(crate) fn new(root: Option<&'a SplayNode<V>>) -> Self {
        let mut this = Self { stack: vec![] };
        this.push_left_spine(root);
        this
    }

    fn push_left_spine(&mut self, mut ptr: Option<&'a SplayNode<V>>) {
        while let Some(v) = ptr {
            self.stack.push(v);
            ptr = v.left();
        }
    }
}

impl<'a, V> Iterator for RefIter<'a, V> {
    type Item = &'a V;

    fn next(&mut self) -> Option<Self::Item> {
        let v = self.stack.pop()?;
        self.push_left_spine(v.right());
        Some(v.value())
    }
}
