//! Sift Core - algorithms over in-memory sequences and mappings
//!
//! This crate provides single-pass transformations, partitioning,
//! segmentation and pairing functions over slices, extension methods for
//! `HashMap`, and a memoizing key-value table.
//!
//! The free functions live in one module per family and are re-exported at
//! the crate root. [`SliceExt`] exposes the same functions as methods.

pub mod combine;
pub mod map_ext;
pub mod memo;
pub mod pair;
pub mod partition;
pub mod segment;
pub mod slice_ext;
pub mod transform;

pub use combine::{unzip, zip};
pub use map_ext::HashMapExt;
pub use memo::{MemoConfig, MemoStats, MemoTable, MemoTableBuilder};
pub use pair::Pair;
pub use partition::{all, any, distinct, distinct_by, group_by, partition};
pub use segment::{chunked, chunked_by, windowed};
pub use slice_ext::SliceExt;
pub use transform::{
    filter, filter_indexed, filter_map, flat_map, flat_map_indexed, fold, fold_indexed, map,
    map_indexed, reduce, reduce_indexed,
};

pub use sift_common::{Result, SiftError};
