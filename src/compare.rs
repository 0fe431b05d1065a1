use std::cmp::Ordering;

/// A three-way ordering over values of type `V`.
///
/// Any `Fn(&V, &V) -> Ordering` is a [`Comparator`], so closures and function
/// pointers can be handed to [`SplayTree::with_comparator()`] directly.
///
/// [`SplayTree::with_comparator()`]: crate::SplayTree::with_comparator
pub trait Comparator<V: ?Sized> {
    /// Order `a` relative to `b`.
    fn compare(&self, a: &V, b: &V) -> Ordering;
}

impl<V, F> Comparator<V> for F
where
    V: ?Sized,
    F: Fn(&V, &V) -> Ordering,
{
    fn compare(&self, a: &V, b: &V) -> Ordering {
        self(a, b)
    }
}

/// The default [`Comparator`], ordering values by their [`Ord`] impl.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct NaturalOrder;

impl<V> Comparator<V> for NaturalOrder
where
    V: Ord + ?Sized,
{
    fn compare(&self, a: &V, b: &V) -> Ordering {
        a.cmp(b)
    }
}

/// A type-erased [`Comparator`].
///
/// Unlike a closure type, every [`DynComparator`] has the same type, so a tree
/// built with one can have its ordering swapped with
/// [`SplayTree::set_compare()`].
///
/// [`SplayTree::set_compare()`]: crate::SplayTree::set_compare
pub type DynComparator<V> = Box<dyn Fn(&V, &V) -> Ordering + Send + Sync>;
