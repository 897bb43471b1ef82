//! Memoizing key-value table.
//!
//! A [`MemoTable`] stores values that are expensive to compute and hands
//! them back on later requests. Entries are only ever added through
//! [`MemoTable::get_or_put`]; nothing removes or overwrites them, so the
//! compute function for a given key runs at most once for the lifetime of
//! the table.
//!
//! The table is not synchronized. Sharing one between threads requires a
//! caller-held lock around every `get_or_put`.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::collections::hash_map::{self, Entry};
use std::hash::Hash;
use tracing::{debug, trace};

use sift_common::{Result, SiftError};

/// Configuration for memo table creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MemoConfig {
    /// Number of entries to reserve space for up front.
    pub initial_capacity: Option<usize>,
}

impl MemoConfig {
    /// Largest initial capacity accepted by [`MemoConfig::validate`].
    pub const MAX_INITIAL_CAPACITY: usize = 1 << 24;

    /// Parse a configuration from a JSON document.
    ///
    /// Missing fields fall back to their defaults.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: MemoConfig = serde_json::from_str(json).map_err(|e| {
            SiftError::configuration_error_with_source("failed to parse memo table config", e)
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Check the configuration values are usable.
    pub fn validate(&self) -> Result<()> {
        match self.initial_capacity {
            Some(capacity) if capacity > Self::MAX_INITIAL_CAPACITY => {
                Err(SiftError::invalid_argument(format!(
                    "initial_capacity must be at most {}, got {}",
                    Self::MAX_INITIAL_CAPACITY,
                    capacity
                )))
            }
            _ => Ok(()),
        }
    }
}

impl Default for MemoConfig {
    fn default() -> Self {
        Self {
            initial_capacity: Some(16),
        }
    }
}

/// Builder for creating memo tables.
pub struct MemoTableBuilder {
    config: MemoConfig,
}

impl MemoTableBuilder {
    /// Create a new builder with default configuration.
    pub fn new() -> Self {
        Self {
            config: MemoConfig::default(),
        }
    }

    /// Set the initial capacity of the table.
    pub fn initial_capacity(mut self, capacity: usize) -> Self {
        self.config.initial_capacity = Some(capacity);
        self
    }

    /// Build a memo table with the specified configuration.
    pub fn build<K, V>(self) -> Result<MemoTable<K, V>>
    where
        K: Hash + Eq,
    {
        MemoTable::with_config(self.config)
    }
}

impl Default for MemoTableBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Memo table statistics.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MemoStats {
    /// `get_or_put` calls answered from a stored value.
    pub hit_count: u64,
    /// `get_or_put` calls that ran the compute function.
    pub miss_count: u64,
    /// Number of stored entries.
    pub entry_count: u64,
}

impl MemoStats {
    /// Calculate hit ratio.
    pub fn hit_ratio(&self) -> f64 {
        let total = self.hit_count + self.miss_count;
        if total == 0 {
            0.0
        } else {
            self.hit_count as f64 / total as f64
        }
    }
}

/// A key-value store with get-or-compute-and-store semantics.
#[derive(Debug, Clone)]
pub struct MemoTable<K, V> {
    entries: HashMap<K, V>,
    hits: u64,
    misses: u64,
}

impl<K, V> MemoTable<K, V>
where
    K: Hash + Eq,
{
    /// Create an empty table.
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
            hits: 0,
            misses: 0,
        }
    }

    /// Create an empty table from a configuration.
    pub fn with_config(config: MemoConfig) -> Result<Self> {
        config.validate()?;

        let entries = match config.initial_capacity {
            Some(capacity) => HashMap::with_capacity(capacity),
            None => HashMap::new(),
        };
        debug!(
            "Created memo table with initial capacity {:?}",
            config.initial_capacity
        );

        Ok(Self {
            entries,
            hits: 0,
            misses: 0,
        })
    }

    /// Return the value stored under `key`, computing and storing it first
    /// if the key is absent.
    ///
    /// `compute` runs only when `key` is absent. If it panics, the panic
    /// propagates and the key stays absent.
    pub fn get_or_put<F>(&mut self, key: K, compute: F) -> &V
    where
        F: FnOnce() -> V,
    {
        match self.entries.entry(key) {
            Entry::Occupied(entry) => {
                self.hits += 1;
                trace!("Memo hit");
                entry.into_mut()
            }
            Entry::Vacant(entry) => {
                self.misses += 1;
                trace!("Memo miss, computing value");
                entry.insert(compute())
            }
        }
    }

    /// Look up a stored value without computing anything.
    pub fn get(&self, key: &K) -> Option<&V> {
        self.entries.get(key)
    }

    /// Check if a value has been stored under `key`.
    pub fn contains_key(&self, key: &K) -> bool {
        self.entries.contains_key(key)
    }

    /// Get the number of stored entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the table is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over the stored entries in unspecified order.
    pub fn iter(&self) -> hash_map::Iter<'_, K, V> {
        self.entries.iter()
    }

    /// Get table statistics.
    pub fn stats(&self) -> MemoStats {
        MemoStats {
            hit_count: self.hits,
            miss_count: self.misses,
            entry_count: self.entries.len() as u64,
        }
    }
}

impl<K, V> Default for MemoTable<K, V>
where
    K: Hash + Eq,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<'a, K, V> IntoIterator for &'a MemoTable<K, V> {
    type Item = (&'a K, &'a V);
    type IntoIter = hash_map::Iter<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
