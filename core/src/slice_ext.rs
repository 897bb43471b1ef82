//! Method-call surface for the sequence algorithms.
//!
//! `SliceExt` is implemented for `[T]`, so every function in this crate can
//! be called as a method on arrays, slices and vectors:
//!
//! ```
//! use sift_core::SliceExt;
//!
//! let runs = [1, 2, 3, 2, 3].chunked_by(|a, b| a < b);
//! assert_eq!(runs, vec![vec![1, 2, 3], vec![2, 3]]);
//! ```
//!
//! Methods whose plain name is already taken by the inherent `[T; N]::map`
//! or by an `Iterator` adaptor (`filter`, `filter_map`, `flat_map`, `fold`,
//! `reduce`, `all`, `any`, `partition`, `zip`) carry a suffix, so an array
//! receiver never resolves to the inherent method and call sites do not read
//! as iterator chains. The `_indexed` variants and the other names have no
//! such counterpart and keep the function name.

use std::collections::HashMap;
use std::hash::Hash;

use sift_common::Result;

use crate::pair::Pair;
use crate::{combine, partition, segment, transform};

/// Extension trait exposing the sequence algorithms as methods.
pub trait SliceExt<T> {
    /// See [`crate::all`].
    fn all_match<F>(&self, predicate: F) -> bool
    where
        F: FnMut(&T) -> bool;

    /// See [`crate::any`].
    fn any_match<F>(&self, predicate: F) -> bool
    where
        F: FnMut(&T) -> bool;

    /// See [`crate::map`].
    fn map_to<R, F>(&self, f: F) -> Vec<R>
    where
        F: FnMut(&T) -> R;

    /// See [`crate::map_indexed`].
    fn map_indexed<R, F>(&self, f: F) -> Vec<R>
    where
        F: FnMut(usize, &T) -> R;

    /// See [`crate::filter`].
    fn filter_to<F>(&self, predicate: F) -> Vec<T>
    where
        T: Clone,
        F: FnMut(&T) -> bool;

    /// See [`crate::filter_indexed`].
    fn filter_indexed<F>(&self, predicate: F) -> Vec<T>
    where
        T: Clone,
        F: FnMut(usize, &T) -> bool;

    /// See [`crate::filter_map`].
    fn filter_map_to<R, F>(&self, f: F) -> Vec<R>
    where
        F: FnMut(&T) -> Option<R>;

    /// See [`crate::flat_map`].
    fn flat_map_to<R, I, F>(&self, f: F) -> Vec<R>
    where
        I: IntoIterator<Item = R>,
        F: FnMut(&T) -> I;

    /// See [`crate::flat_map_indexed`].
    fn flat_map_indexed<R, I, F>(&self, f: F) -> Vec<R>
    where
        I: IntoIterator<Item = R>,
        F: FnMut(usize, &T) -> I;

    /// See [`crate::fold`].
    fn fold_left<R, F>(&self, initial: R, f: F) -> R
    where
        F: FnMut(R, &T) -> R;

    /// See [`crate::fold_indexed`].
    fn fold_indexed<R, F>(&self, initial: R, f: F) -> R
    where
        F: FnMut(usize, R, &T) -> R;

    /// See [`crate::reduce`].
    fn reduce_left<F>(&self, f: F) -> Result<T>
    where
        T: Clone,
        F: FnMut(T, &T) -> T;

    /// See [`crate::reduce_indexed`].
    fn reduce_indexed<F>(&self, f: F) -> Result<T>
    where
        T: Clone,
        F: FnMut(usize, T, &T) -> T;

    /// See [`crate::partition`].
    fn partition_by<F>(&self, predicate: F) -> (Vec<T>, Vec<T>)
    where
        T: Clone,
        F: FnMut(&T) -> bool;

    /// See [`crate::distinct`].
    fn distinct(&self) -> Vec<T>
    where
        T: Eq + Hash + Clone;

    /// See [`crate::distinct_by`].
    fn distinct_by<K, F>(&self, key_fn: F) -> Vec<T>
    where
        T: Clone,
        K: Eq + Hash,
        F: FnMut(&T) -> K;

    /// See [`crate::group_by`].
    fn group_by<K, V, F>(&self, transform: F) -> HashMap<K, Vec<V>>
    where
        K: Eq + Hash,
        F: FnMut(&T) -> (K, V);

    /// See [`crate::chunked`].
    fn chunked(&self, size: usize) -> Result<Vec<Vec<T>>>
    where
        T: Clone;

    /// See [`crate::chunked_by`].
    fn chunked_by<F>(&self, belongs: F) -> Vec<Vec<T>>
    where
        T: Clone,
        F: FnMut(&T, &T) -> bool;

    /// See [`crate::windowed`].
    fn windowed(&self, size: usize, step: usize) -> Result<Vec<Vec<T>>>
    where
        T: Clone;

    /// See [`crate::zip`].
    fn zip_with<B>(&self, other: &[B]) -> Vec<Pair<T, B>>
    where
        T: Clone,
        B: Clone;
}

impl<T> SliceExt<T> for [T] {
    fn all_match<F>(&self, predicate: F) -> bool
    where
        F: FnMut(&T) -> bool,
    {
        partition::all(self, predicate)
    }

    fn any_match<F>(&self, predicate: F) -> bool
    where
        F: FnMut(&T) -> bool,
    {
        partition::any(self, predicate)
    }

    fn map_to<R, F>(&self, f: F) -> Vec<R>
    where
        F: FnMut(&T) -> R,
    {
        transform::map(self, f)
    }

    fn map_indexed<R, F>(&self, f: F) -> Vec<R>
    where
        F: FnMut(usize, &T) -> R,
    {
        transform::map_indexed(self, f)
    }

    fn filter_to<F>(&self, predicate: F) -> Vec<T>
    where
        T: Clone,
        F: FnMut(&T) -> bool,
    {
        transform::filter(self, predicate)
    }

    fn filter_indexed<F>(&self, predicate: F) -> Vec<T>
    where
        T: Clone,
        F: FnMut(usize, &T) -> bool,
    {
        transform::filter_indexed(self, predicate)
    }

    fn filter_map_to<R, F>(&self, f: F) -> Vec<R>
    where
        F: FnMut(&T) -> Option<R>,
    {
        transform::filter_map(self, f)
    }

    fn flat_map_to<R, I, F>(&self, f: F) -> Vec<R>
    where
        I: IntoIterator<Item = R>,
        F: FnMut(&T) -> I,
    {
        transform::flat_map(self, f)
    }

    fn flat_map_indexed<R, I, F>(&self, f: F) -> Vec<R>
    where
        I: IntoIterator<Item = R>,
        F: FnMut(usize, &T) -> I,
    {
        transform::flat_map_indexed(self, f)
    }

    fn fold_left<R, F>(&self, initial: R, f: F) -> R
    where
        F: FnMut(R, &T) -> R,
    {
        transform::fold(self, initial, f)
    }

    fn fold_indexed<R, F>(&self, initial: R, f: F) -> R
    where
        F: FnMut(usize, R, &T) -> R,
    {
        transform::fold_indexed(self, initial, f)
    }

    fn reduce_left<F>(&self, f: F) -> Result<T>
    where
        T: Clone,
        F: FnMut(T, &T) -> T,
    {
        transform::reduce(self, f)
    }

    fn reduce_indexed<F>(&self, f: F) -> Result<T>
    where
        T: Clone,
        F: FnMut(usize, T, &T) -> T,
    {
        transform::reduce_indexed(self, f)
    }

    fn partition_by<F>(&self, predicate: F) -> (Vec<T>, Vec<T>)
    where
        T: Clone,
        F: FnMut(&T) -> bool,
    {
        partition::partition(self, predicate)
    }

    fn distinct(&self) -> Vec<T>
    where
        T: Eq + Hash + Clone,
    {
        partition::distinct(self)
    }

    fn distinct_by<K, F>(&self, key_fn: F) -> Vec<T>
    where
        T: Clone,
        K: Eq + Hash,
        F: FnMut(&T) -> K,
    {
        partition::distinct_by(self, key_fn)
    }

    fn group_by<K, V, F>(&self, transform: F) -> HashMap<K, Vec<V>>
    where
        K: Eq + Hash,
        F: FnMut(&T) -> (K, V),
    {
        partition::group_by(self, transform)
    }

    fn chunked(&self, size: usize) -> Result<Vec<Vec<T>>>
    where
        T: Clone,
    {
        segment::chunked(self, size)
    }

    fn chunked_by<F>(&self, belongs: F) -> Vec<Vec<T>>
    where
        T: Clone,
        F: FnMut(&T, &T) -> bool,
    {
        segment::chunked_by(self, belongs)
    }

    fn windowed(&self, size: usize, step: usize) -> Result<Vec<Vec<T>>>
    where
        T: Clone,
    {
        segment::windowed(self, size, step)
    }

    fn zip_with<B>(&self, other: &[B]) -> Vec<Pair<T, B>>
    where
        T: Clone,
        B: Clone,
    {
        combine::zip(self, other)
    }
}
