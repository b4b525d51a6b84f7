//! Property tests run against the public API only.

mod traversals;
mod tree;

/// A reference sort of everything pushed, duplicates included.
pub(crate) fn sorted<T: Ord + Clone>(xs: &[T]) -> Vec<T> {
    let mut sorted = xs.to_vec();
    sorted.sort();
    sorted
}
