//! Predicates, partitioning, deduplication and grouping.

use std::collections::{HashMap, HashSet};
use std::hash::Hash;

/// True if every element satisfies `predicate`. Vacuously true when empty.
pub fn all<T, F>(items: &[T], predicate: F) -> bool
where
    F: FnMut(&T) -> bool,
{
    items.iter().all(predicate)
}

/// True if at least one element satisfies `predicate`. False when empty.
pub fn any<T, F>(items: &[T], predicate: F) -> bool
where
    F: FnMut(&T) -> bool,
{
    items.iter().any(predicate)
}

/// Split `items` into the elements that satisfy `predicate` and those that
/// don't, preserving relative order within each half.
pub fn partition<T, F>(items: &[T], mut predicate: F) -> (Vec<T>, Vec<T>)
where
    T: Clone,
    F: FnMut(&T) -> bool,
{
    let mut matching = Vec::new();
    let mut non_matching = Vec::new();

    for item in items {
        if predicate(item) {
            matching.push(item.clone());
        } else {
            non_matching.push(item.clone());
        }
    }

    (matching, non_matching)
}

/// Remove duplicates, keeping the first occurrence of each element in
/// its original position.
pub fn distinct<T>(items: &[T]) -> Vec<T>
where
    T: Eq + Hash + Clone,
{
    let mut seen: HashSet<&T> = HashSet::with_capacity(items.len());
    let mut result = Vec::with_capacity(items.len());

    for item in items {
        if seen.insert(item) {
            result.push(item.clone());
        }
    }

    result
}

/// Remove elements whose key, as computed by `key_fn`, was already seen.
/// The first element for each key wins.
pub fn distinct_by<T, K, F>(items: &[T], mut key_fn: F) -> Vec<T>
where
    T: Clone,
    K: Eq + Hash,
    F: FnMut(&T) -> K,
{
    let mut seen_keys: HashSet<K> = HashSet::with_capacity(items.len());
    let mut result = Vec::with_capacity(items.len());

    for item in items {
        if seen_keys.insert(key_fn(item)) {
            result.push(item.clone());
        }
    }

    result
}

/// Group values by key.
///
/// `transform` maps each element to a `(key, value)` pair. Each key's
/// values keep the order of the elements that produced them. Only keys
/// produced by some element appear in the result.
pub fn group_by<T, K, V, F>(items: &[T], mut transform: F) -> HashMap<K, Vec<V>>
where
    K: Eq + Hash,
    F: FnMut(&T) -> (K, V),
{
    let mut groups: HashMap<K, Vec<V>> = HashMap::new();

    for item in items {
        let (key, value) = transform(item);
        groups.entry(key).or_default().push(value);
    }

    groups
}
