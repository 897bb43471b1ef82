//! Element-wise transformations and folds.
//!
//! Every function makes a single left-to-right pass over its input and
//! calls the supplied closure in sequence order. Inputs are borrowed and
//! never modified; results are freshly allocated.

use sift_common::{Result, SiftError};
use tracing::debug;

/// Apply `f` to every element.
pub fn map<T, R, F>(items: &[T], mut f: F) -> Vec<R>
where
    F: FnMut(&T) -> R,
{
    let mut result = Vec::with_capacity(items.len());
    for item in items {
        result.push(f(item));
    }
    result
}

/// Apply `f` to every element together with its index.
pub fn map_indexed<T, R, F>(items: &[T], mut f: F) -> Vec<R>
where
    F: FnMut(usize, &T) -> R,
{
    let mut result = Vec::with_capacity(items.len());
    for (index, item) in items.iter().enumerate() {
        result.push(f(index, item));
    }
    result
}

/// Keep the elements for which `predicate` returns true.
pub fn filter<T, F>(items: &[T], mut predicate: F) -> Vec<T>
where
    T: Clone,
    F: FnMut(&T) -> bool,
{
    items.iter().filter(|item| predicate(*item)).cloned().collect()
}

/// Keep the elements for which `predicate` returns true; the predicate also
/// receives the element's index.
pub fn filter_indexed<T, F>(items: &[T], mut predicate: F) -> Vec<T>
where
    T: Clone,
    F: FnMut(usize, &T) -> bool,
{
    items
        .iter()
        .enumerate()
        .filter(|(index, item)| predicate(*index, *item))
        .map(|(_, item)| item.clone())
        .collect()
}

/// Filter and map in one pass.
///
/// `f` returns `Some(value)` for elements to keep and `None` for elements
/// to drop.
pub fn filter_map<T, R, F>(items: &[T], f: F) -> Vec<R>
where
    F: FnMut(&T) -> Option<R>,
{
    items.iter().filter_map(f).collect()
}

/// Map every element to a collection and concatenate the results.
pub fn flat_map<T, R, I, F>(items: &[T], mut f: F) -> Vec<R>
where
    I: IntoIterator<Item = R>,
    F: FnMut(&T) -> I,
{
    let mut result = Vec::new();
    for item in items {
        result.extend(f(item));
    }
    result
}

/// Like [`flat_map`], with the element's index passed to `f`.
pub fn flat_map_indexed<T, R, I, F>(items: &[T], mut f: F) -> Vec<R>
where
    I: IntoIterator<Item = R>,
    F: FnMut(usize, &T) -> I,
{
    let mut result = Vec::with_capacity(items.len());
    for (index, item) in items.iter().enumerate() {
        result.extend(f(index, item));
    }
    result
}

/// Accumulate from `initial`, combining the accumulator with each element.
///
/// Returns `initial` unchanged for an empty input.
pub fn fold<T, R, F>(items: &[T], initial: R, mut f: F) -> R
where
    F: FnMut(R, &T) -> R,
{
    let mut accumulator = initial;
    for item in items {
        accumulator = f(accumulator, item);
    }
    accumulator
}

/// Like [`fold`], with the element's index passed to `f`.
pub fn fold_indexed<T, R, F>(items: &[T], initial: R, mut f: F) -> R
where
    F: FnMut(usize, R, &T) -> R,
{
    let mut accumulator = initial;
    for (index, item) in items.iter().enumerate() {
        accumulator = f(index, accumulator, item);
    }
    accumulator
}

/// Accumulate starting from the first element.
///
/// Fails with [`SiftError::EmptyInput`] when `items` is empty. A single
/// element is returned as-is without calling `f`.
pub fn reduce<T, F>(items: &[T], f: F) -> Result<T>
where
    T: Clone,
    F: FnMut(T, &T) -> T,
{
    let (first, rest) = split_first_or_err(items, "reduce")?;
    Ok(fold(rest, first.clone(), f))
}

/// Like [`reduce`], with the index of the element being combined passed to
/// `f`. The first call sees index 1.
pub fn reduce_indexed<T, F>(items: &[T], mut f: F) -> Result<T>
where
    T: Clone,
    F: FnMut(usize, T, &T) -> T,
{
    let (first, rest) = split_first_or_err(items, "reduce_indexed")?;
    Ok(fold_indexed(rest, first.clone(), |index, acc, item| {
        f(index + 1, acc, item)
    }))
}

fn split_first_or_err<'a, T>(items: &'a [T], operation: &str) -> Result<(&'a T, &'a [T])> {
    items.split_first().ok_or_else(|| {
        debug!("{} called on an empty sequence", operation);
        SiftError::empty_input(format!("{} called on an empty sequence", operation))
    })
}
