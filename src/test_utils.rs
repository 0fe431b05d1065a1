use std::{cmp::Ordering, fmt::Debug};

use crate::{compare::Comparator, iter::RefIter, SplayTree};

/// The size of the value domain used by property tests.
///
/// A small value domain encourages multiple operations to act on the same
/// value.
pub(crate) const N_VALUES: usize = 50;

/// Install a test-friendly [`tracing`] subscriber, filtered by `RUST_LOG`.
///
/// Safe to call from multiple tests.
pub(crate) fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// Assert the BST and size properties of `t`, ensuring the tree is
/// well-formed.
pub(crate) fn validate_tree_structure<V, C>(t: &SplayTree<V, C>)
where
    V: Debug,
    C: Comparator<V>,
{
    // Invariant 1: the root is only absent when the tree is empty.
    assert_eq!(t.root().is_none(), t.is_empty());
    assert_eq!(t.is_empty(), t.len() == 0);

    // Invariant 2: an in-order walk yields strictly increasing values.
    let mut n_values = 0;
    let mut last = None;
    for v in RefIter::new(t.root()) {
        if let Some(last) = last {
            assert_eq!(
                t.comparator().compare(last, v),
                Ordering::Less,
                "out of order values {last:?} and {v:?}",
            );
        }

        last = Some(v);
        n_values += 1;
    }

    // Invariant 3: the tree length is the number of reachable nodes.
    assert_eq!(n_values, t.len());
}
