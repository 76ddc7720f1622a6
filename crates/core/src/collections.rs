//! Sequence helpers

use ahash::AHashSet;
use std::hash::Hash;

/// Remove duplicates, keeping the first occurrence of each item in order
pub fn unique<T: Eq + Hash + Clone>(items: &[T]) -> Vec<T> {
    let mut seen = AHashSet::with_capacity(items.len());
    items
        .iter()
        .filter(|item| seen.insert(*item))
        .cloned()
        .collect()
}
