use std::{cmp::Ordering, fmt::Debug};

use tracing::{debug, trace};

use crate::{
    compare::{Comparator, NaturalOrder},
    error::{Error, Result},
    iter::{IntoIter, RefIter},
    node::{deallocate_iteratively, splay, SplayNode},
    snapshot::Snapshot,
};

/// An ordered set of `V`, stored in a self-adjusting binary search tree.
///
/// Every lookup moves the value it accessed (or the closest value to it) to
/// the root of the tree, so recently accessed values are found faster. This
/// gives amortised O(log n) operations, at the cost of restructuring the tree
/// on reads, which is why [`SplayTree::get()`] and friends take `&mut self`.
///
/// Values are ordered by a [`Comparator`], which defaults to the [`Ord`] impl
/// of `V`. Values that compare as equal are the same entry: adding an equal
/// value replaces the stored one.
///
/// Iteration is performed over a [`Snapshot`] of the tree, which is
/// unaffected by any later modification.
///
/// ```
/// use splaytree::SplayTree;
///
/// let mut t = SplayTree::new();
/// t.add(42);
/// t.add(24);
/// t.add(12);
///
/// assert!(t.contains(&24));
/// assert_eq!(t.first(), Ok(&12));
/// assert_eq!(t.iter().collect::<Vec<_>>(), [12, 24, 42]);
/// ```
pub struct SplayTree<V, C = NaturalOrder> {
    root: Option<Box<SplayNode<V>>>,
    comparator: C,
    len: usize,
}

impl<V, C> Default for SplayTree<V, C>
where
    C: Default,
{
    fn default() -> Self {
        Self::with_comparator(C::default())
    }
}

impl<V> SplayTree<V> {
    /// Construct an empty tree ordered by the [`Ord`] impl of `V`.
    pub fn new() -> Self {
        Self::default()
    }
}

impl<V, C> SplayTree<V, C> {
    /// Construct an empty tree ordered by `comparator`.
    pub fn with_comparator(comparator: C) -> Self {
        Self {
            root: None,
            comparator,
            len: 0,
        }
    }

    /// Returns true if the tree holds no values.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// The number of values in the tree.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Remove all values from the tree.
    pub fn clear(&mut self) {
        deallocate_iteratively(self.root.take());
        self.len = 0;
    }

    /// Replace the [`Comparator`] used to order values.
    ///
    /// # Errors
    ///
    /// Returns [`Error::State`] if the tree is not empty, as the existing
    /// values are ordered by the current comparator.
    pub fn set_compare(&mut self, comparator: C) -> Result<()> {
        if !self.is_empty() {
            debug!(len = self.len, "rejected comparator change for non-empty tree");
            return Err(Error::State);
        }

        self.comparator = comparator;
        Ok(())
    }

    /// Copy the current shape of the tree into a [`Snapshot`].
    pub fn snapshot(&self) -> Snapshot<V>
    where
        V: Clone,
    {
        Snapshot::new(self.root.as_deref(), self.len)
    }

    /// Iterate over a copy of the values in ascending order.
    ///
    /// The iterator operates on a [`Snapshot`], so later changes to the tree
    /// are not observed by it.
    pub fn iter(&self) -> IntoIter<V>
    where
        V: Clone,
    {
        self.snapshot().into_iter()
    }

    #[cfg(test)]
    pub(crate) fn root(&self) -> Option<&SplayNode<V>> {
        self.root.as_deref()
    }

    #[cfg(test)]
    pub(crate) fn comparator(&self) -> &C {
        &self.comparator
    }
}

impl<V, C> SplayTree<V, C>
where
    C: Comparator<V>,
{
    /// Add `value` to the tree.
    ///
    /// If the tree already holds a value equal to `value`, it is replaced and
    /// the old value is returned.
    pub fn add(&mut self, value: V) -> Option<V> {
        let Some(root) = self.root.take() else {
            self.root = Some(Box::new(SplayNode::new(value)));
            self.len = 1;
            return None;
        };

        let mut root = splay(root, |v| self.comparator.compare(&value, v));

        // The root is now either equal to "value", or is the node that
        // "value" would be linked to as a leaf - the closest value either side
        // of it. The new node is placed above the root, splitting its
        // children.
        //
        //           root                     n
        //          /    \                   / \
        //         a      b    ------>      a   root
        //                                        \
        //                                         b
        //
        // Above is the case for "value" < root, mirrored for the opposite.
        let ordering = self.comparator.compare(&value, root.value());
        if ordering == Ordering::Equal {
            trace!(len = self.len, "replaced existing value");
            let old = root.replace_value(value);
            self.root = Some(root);
            return Some(old);
        }

        let mut n = Box::new(SplayNode::new(value));
        if ordering == Ordering::Less {
            n.set_left(root.take_left());
            n.set_right(Some(root));
        } else {
            n.set_right(root.take_right());
            n.set_left(Some(root));
        }

        self.root = Some(n);
        self.len += 1;
        trace!(len = self.len, "added value");

        None
    }

    /// Remove the value equal to `value` from the tree, returning it.
    ///
    /// Returns [`None`] if no such value exists.
    pub fn remove(&mut self, value: &V) -> Option<V> {
        let mut root = splay(self.root.take()?, |v| self.comparator.compare(value, v));

        if self.comparator.compare(value, root.value()) != Ordering::Equal {
            trace!(len = self.len, "remove of absent value");
            self.root = Some(root);
            return None;
        }

        // Unlink the root.
        //
        // If it has a left subtree, splaying the left subtree for "value"
        // brings the maximum of the subtree to its root, as every value in it
        // is less than "value". The maximum has no right child, leaving space
        // to link the right subtree of the removed root.
        self.root = match root.take_left() {
            None => root.take_right(),
            Some(left) => {
                let mut new_root = splay(left, |v| self.comparator.compare(value, v));
                debug_assert!(new_root.right().is_none());

                new_root.set_right(root.take_right());
                Some(new_root)
            }
        };

        self.len -= 1;
        debug_assert_eq!(self.root.is_none(), self.len == 0);
        trace!(len = self.len, "removed value");

        Some(root.into_value())
    }

    /// Return the stored value equal to `value`.
    ///
    /// The returned value may differ from `value` in any property the
    /// [`Comparator`] does not consider.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Lookup`] if no such value exists.
    pub fn get(&mut self, value: &V) -> Result<&V> {
        let root = self.root.take().ok_or(Error::Lookup)?;
        let root = self
            .root
            .insert(splay(root, |v| self.comparator.compare(value, v)));

        match self.comparator.compare(value, root.value()) {
            Ordering::Equal => Ok(root.value()),
            _ => Err(Error::Lookup),
        }
    }

    /// Returns true if the tree contains a value equal to `value`.
    pub fn contains(&mut self, value: &V) -> bool {
        self.get(value).is_ok()
    }

    /// Return the smallest value in the tree.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Empty`] if the tree is empty.
    pub fn first(&mut self) -> Result<&V> {
        self.splay_extremum("first", SplayNode::left, Ordering::Less)
    }

    /// Return the largest value in the tree.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Empty`] if the tree is empty.
    pub fn last(&mut self) -> Result<&V> {
        self.splay_extremum("last", SplayNode::right, Ordering::Greater)
    }

    /// Descend from the root following `step` until it yields no child, and
    /// splay the node found to the root.
    fn splay_extremum(
        &mut self,
        op: &'static str,
        step: fn(&SplayNode<V>) -> Option<&SplayNode<V>>,
        direction: Ordering,
    ) -> Result<&V> {
        let root = self.root.take().ok_or(Error::Empty { op })?;

        let mut n: &SplayNode<V> = &root;
        while let Some(next) = step(n) {
            n = next;
        }

        // The extremum is identified by address, as no borrow of it can be
        // held across the splay. Nodes are never moved out of their box.
        let target: *const V = n.value();
        let root = splay(root, |v| {
            if std::ptr::eq(v, target) {
                Ordering::Equal
            } else {
                direction
            }
        });

        Ok(self.root.insert(root).value())
    }
}

impl<V, C> Drop for SplayTree<V, C> {
    fn drop(&mut self) {
        deallocate_iteratively(self.root.take());
    }
}

impl<V, C> Debug for SplayTree<V, C>
where
    V: Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_set()
            .entries(RefIter::new(self.root.as_deref()))
            .finish()
    }
}

impl<V, C> Extend<V> for SplayTree<V, C>
where
    C: Comparator<V>,
{
    fn extend<T: IntoIterator<Item = V>>(&mut self, iter: T) {
        for v in iter {
            self.add(v);
        }
    }
}

impl<V, C> FromIterator<V> for SplayTree<V, C>
where
    C: Comparator<V> + Default,
{
    fn from_iter<T: IntoIterator<Item = V>>(iter: T) -> Self {
        let mut t = Self::default();
        t.extend(iter);
        t
    }
}

impl<'a, V, C> IntoIterator for &'a SplayTree<V, C>
where
    V: Clone,
{
    type Item = V;
    type IntoIter = IntoIter<V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
