use std::cmp::Ordering;

pub(crate) struct SplayNode<V> {
    /// Child nodes pointers.
    left: Option<Box<SplayNode<V>>>,
    right: Option<Box<SplayNode<V>>>,

    value: V,
}

impl<V> SplayNode<V> {
    pub(crate) fn new(value: V) -> Self {
        Self {
            value,
            left: None,
            right: None,
        }
    }

    pub(crate) fn value(&self) -> &V {
        &self.value
    }

    /// Replace the value held in this node, returning the old value.
    pub(crate) fn replace_value(&mut self, value: V) -> V {
        std::mem::replace(&mut self.value, value)
    }

    pub(crate) fn left(&self) -> Option<&Self> {
        self.left.as_deref()
    }

    pub(crate) fn right(&self) -> Option<&Self> {
        self.right.as_deref()
    }

    /// Remove the left child, if any.
    pub(crate) fn take_left(&mut self) -> Option<Box<Self>> {
        self.left.take()
    }

    /// Remove the right child, if any.
    pub(crate) fn take_right(&mut self) -> Option<Box<Self>> {
        self.right.take()
    }

    pub(crate) fn set_left(&mut self, n: Option<Box<Self>>) {
        self.left = n;
    }

    pub(crate) fn set_right(&mut self, n: Option<Box<Self>>) {
        self.right = n;
    }

    /// Explode this [`SplayNode`] into the value it contains.
    pub(crate) fn into_value(self) -> V {
        self.value
    }
}

/// A tree node owning its (optional) boxed children.
pub(crate) trait OwnedChildren: Sized {
    fn take_left_child(&mut self) -> Option<Box<Self>>;
    fn take_right_child(&mut self) -> Option<Box<Self>>;
}

impl<V> OwnedChildren for SplayNode<V> {
    fn take_left_child(&mut self) -> Option<Box<Self>> {
        self.take_left()
    }

    fn take_right_child(&mut self) -> Option<Box<Self>> {
        self.take_right()
    }
}

/// Deallocate the subtree rooted at `root` without recursing.
///
/// A splay tree (and any copy of it) can degrade into a chain as deep as the
/// number of values it holds, which would overflow the stack in the compiler
/// generated drop glue.
pub(crate) fn deallocate_iteratively<N>(root: Option<Box<N>>)
where
    N: OwnedChildren,
{
    let mut stack: Vec<Box<N>> = root.into_iter().collect();

    while let Some(mut n) = stack.pop() {
        stack.extend(n.take_left_child());
        stack.extend(n.take_right_child());
    }
}

/// Left rotate the given subtree rooted at `x` around the pivot point `P`.
///
/// ```text
///
///      x
///     / \                               P
///    1   P         Rotate Left        /   \
///       / \      --------------->    x     y
///      2   y                        / \   / \
///         / \                      1   2 3   4
///        3   4
/// ```
///
/// # Panics
///
/// Panics if `x` has no right pointer (cannot be rotated).
pub(crate) fn rotate_left<V>(x: &mut Box<SplayNode<V>>) {
    let mut p = x.right.take().unwrap();
    std::mem::swap(x, &mut p);

    p.right = x.left.take();
    x.left = Some(p);
}

/// Right rotate the given subtree rooted at `y` around the pivot point `P`.
///
/// ```text
///          y
///         / \                           P
///        P   4     Rotate Right       /   \
///       / \      --------------->    x     y
///      x   3                        / \   / \
///     / \                          1   2 3   4
///    1   2
/// ```
///
/// # Panics
///
/// Panics if `y` has no left pointer (cannot be rotated).
pub(crate) fn rotate_right<V>(y: &mut Box<SplayNode<V>>) {
    let mut p = y.left.take().unwrap();
    std::mem::swap(y, &mut p);

    p.left = y.right.take();
    y.right = Some(p);
}

/// Top-down splay of the subtree rooted at `root`, returning the new subtree
/// root.
///
/// `probe` orders the splay target relative to the value of a node, returning
/// [`Ordering::Less`] when the target sorts before it. The node matching the
/// target is moved to the root; if no node matches, the last node visited on
/// the search path is the new root instead.
///
/// While descending, nodes are unlinked from the search path and collected
/// into two temporary trees:
///
/// ```text
///
///     L (all < target)     t (search subtree)      R (all > target)
///
///        a                        t                        d
///         \                      / \                      /
///          b                    x   y                    c
///           \                                           /
///          [L frontier]                          [R frontier]
/// ```
///
/// Each step appends to the frontier of `L` (through right pointers) or `R`
/// (through left pointers). When the search ends, the children of `t` fill
/// the two frontiers and `L` and `R` become the children of `t`.
///
/// Two consecutive steps in the same direction (zig-zig) are collapsed by
/// first rotating `t` with its child, which halves the depth of the search
/// path and gives the amortised O(log n) bound.
pub(crate) fn splay<V, F>(root: Box<SplayNode<V>>, mut probe: F) -> Box<SplayNode<V>>
where
    F: FnMut(&V) -> Ordering,
{
    let mut t = root;

    let mut left_root: Option<Box<SplayNode<V>>> = None;
    let mut right_root: Option<Box<SplayNode<V>>> = None;

    // The empty child slot of the most recently linked node in each of the
    // accumulated trees.
    let mut left_frontier = &mut left_root;
    let mut right_frontier = &mut right_root;

    loop {
        match probe(&t.value) {
            Ordering::Less => {
                // Zig-zig: the target is also left of the left child.
                if t.left().is_some_and(|l| probe(l.value()) == Ordering::Less) {
                    rotate_right(&mut t);
                }

                let Some(next) = t.take_left() else {
                    break;
                };

                // Link "t" (and its right subtree) into R, all of which sorts
                // after the target.
                right_frontier = &mut right_frontier.insert(t).left;
                t = next;
            }
            Ordering::Greater => {
                // Zig-zig: the target is also right of the right child.
                if t
                    .right()
                    .is_some_and(|r| probe(r.value()) == Ordering::Greater)
                {
                    rotate_left(&mut t);
                }

                let Some(next) = t.take_right() else {
                    break;
                };

                // Link "t" (and its left subtree) into L, all of which sorts
                // before the target.
                left_frontier = &mut left_frontier.insert(t).right;
                t = next;
            }
            Ordering::Equal => break,
        }
    }

    // Reassemble.
    *left_frontier = t.left.take();
    *right_frontier = t.right.take();
    t.left = left_root;
    t.right = right_root;

    t
}
