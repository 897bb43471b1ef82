//! Extension methods for `HashMap`.

use std::collections::HashMap;
use std::hash::Hash;

use crate::pair::Pair;

/// Entry-level helpers on `HashMap`.
pub trait HashMapExt<K, V> {
    /// Get the value for `key`, inserting `f(&key)` first if it is absent.
    ///
    /// `f` is not called when the key is already present.
    fn get_or_insert_with_key<F>(&mut self, key: K, f: F) -> &mut V
    where
        F: FnOnce(&K) -> V;

    /// Accumulate over every entry, in unspecified order.
    fn fold_entries<R, F>(&self, initial: R, f: F) -> R
    where
        F: FnMut(R, &K, &V) -> R;

    /// Build a new map from transformed entries. Entries for which `f`
    /// returns `None` are dropped; if two entries transform to the same
    /// key, one of them wins.
    fn transform_entries<F>(&self, f: F) -> HashMap<K, V>
    where
        F: FnMut(&K, &V) -> Option<(K, V)>;

    /// All entries as pairs, in unspecified order.
    fn entries(&self) -> Vec<Pair<K, V>>
    where
        K: Clone,
        V: Clone;
}

impl<K, V> HashMapExt<K, V> for HashMap<K, V>
where
    K: Eq + Hash,
{
    fn get_or_insert_with_key<F>(&mut self, key: K, f: F) -> &mut V
    where
        F: FnOnce(&K) -> V,
    {
        self.entry(key).or_insert_with_key(f)
    }

    fn fold_entries<R, F>(&self, initial: R, mut f: F) -> R
    where
        F: FnMut(R, &K, &V) -> R,
    {
        let mut accumulator = initial;
        for (key, value) in self {
            accumulator = f(accumulator, key, value);
        }
        accumulator
    }

    fn transform_entries<F>(&self, mut f: F) -> HashMap<K, V>
    where
        F: FnMut(&K, &V) -> Option<(K, V)>,
    {
        let mut result = HashMap::with_capacity(self.len());
        for (key, value) in self {
            if let Some((new_key, new_value)) = f(key, value) {
                result.insert(new_key, new_value);
            }
        }
        result
    }

    fn entries(&self) -> Vec<Pair<K, V>>
    where
        K: Clone,
        V: Clone,
    {
        self.iter()
            .map(|(key, value)| Pair::new(key.clone(), value.clone()))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_or_insert_with_key() {
        let mut map = HashMap::new();
        map.insert("key1", 10);

        let value = map.get_or_insert_with_key("key1", |_| panic!("should not be called"));
        assert_eq!(*value, 10);

        let value = map.get_or_insert_with_key("key22", |k| k.len() as i32);
        assert_eq!(*value, 5);
        *value += 1;
        assert_eq!(map["key22"], 6);
    }

    #[test]
    fn test_fold_entries() {
        let map: HashMap<&str, i32> = [("x", 2), ("y", 3), ("z", 5)].into_iter().collect();
        assert_eq!(map.fold_entries(0, |acc, _, v| acc + v), 10);
        assert_eq!(map.fold_entries(0, |acc, k, _| acc + k.len()), 3);

        let empty: HashMap<&str, i32> = HashMap::new();
        assert_eq!(empty.fold_entries(42, |acc, _, v| acc + v), 42);
    }

    #[test]
    fn test_transform_entries() {
        let map: HashMap<i32, i32> = [(1, 10), (2, 20), (3, 30)].into_iter().collect();
        let result = map.transform_entries(|k, v| {
            if *k == 2 {
                None
            } else {
                Some((k * 100, v + 1))
            }
        });

        assert_eq!(result.len(), 2);
        assert_eq!(result[&100], 11);
        assert_eq!(result[&300], 31);
        assert_eq!(map.len(), 3);
    }

    #[test]
    fn test_transform_entries_key_collision() {
        let map: HashMap<String, u32> = [("apple", 1), ("avocado", 2), ("banana", 3)]
            .into_iter()
            .map(|(k, v)| (k.to_string(), v))
            .collect();
        let by_initial = map.transform_entries(|k, v| Some((k[..1].to_string(), *v)));

        assert_eq!(by_initial.len(), 2);
        assert!(matches!(by_initial["a"], 1 | 2));
        assert_eq!(by_initial["b"], 3);
    }

    #[test]
    fn test_entries() {
        let map: HashMap<char, u8> = [('a', 1), ('b', 2)].into_iter().collect();
        let mut entries = map.entries();
        entries.sort();
        assert_eq!(entries, vec![Pair::new('a', 1), Pair::new('b', 2)]);

        let empty: HashMap<char, u8> = HashMap::new();
        assert!(empty.entries().is_empty());
    }
}
