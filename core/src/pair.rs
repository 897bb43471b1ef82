//! Two-element value tuple produced by `zip` and consumed by `unzip`.

use serde::{Deserialize, Serialize};
use std::fmt;

/// An immutable pair of values.
///
/// A `Pair` has no identity beyond its two components: two pairs with equal
/// components are equal, hash the same and order lexicographically.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize,
)]
pub struct Pair<A, B> {
    pub first: A,
    pub second: B,
}

impl<A, B> Pair<A, B> {
    pub fn new(first: A, second: B) -> Self {
        Self { first, second }
    }

    /// Split the pair back into a plain tuple.
    pub fn into_tuple(self) -> (A, B) {
        (self.first, self.second)
    }

    /// Borrow both components.
    pub fn by_ref(&self) -> Pair<&A, &B> {
        Pair {
            first: &self.first,
            second: &self.second,
        }
    }

    /// Return a pair with the components swapped.
    pub fn swap(self) -> Pair<B, A> {
        Pair {
            first: self.second,
            second: self.first,
        }
    }
}

impl<A, B> From<(A, B)> for Pair<A, B> {
    fn from((first, second): (A, B)) -> Self {
        Self { first, second }
    }
}

impl<A, B> From<Pair<A, B>> for (A, B) {
    fn from(pair: Pair<A, B>) -> Self {
        pair.into_tuple()
    }
}

impl<A: fmt::Display, B: fmt::Display> fmt::Display for Pair<A, B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.first, self.second)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(Pair::new(1, "one").to_string(), "(1, one)");
        assert_eq!(Pair::new('x', 2.5).to_string(), "(x, 2.5)");
    }

    #[test]
    fn test_tuple_conversions() {
        let pair: Pair<i32, &str> = (7, "seven").into();
        assert_eq!(pair.first, 7);
        assert_eq!(pair.second, "seven");

        let (a, b): (i32, &str) = pair.into();
        assert_eq!((a, b), (7, "seven"));
    }

    #[test]
    fn test_swap_and_by_ref() {
        let pair = Pair::new(String::from("k"), 3);
        assert_eq!(pair.by_ref(), Pair::new(&String::from("k"), &3));
        assert_eq!(pair.swap(), Pair::new(3, String::from("k")));
    }

    #[test]
    fn test_ordering_is_lexicographic() {
        let mut pairs = vec![Pair::new(2, 'a'), Pair::new(1, 'z'), Pair::new(1, 'b')];
        pairs.sort();
        assert_eq!(
            pairs,
            vec![Pair::new(1, 'b'), Pair::new(1, 'z'), Pair::new(2, 'a')]
        );
    }

    #[test]
    fn test_serde_json_shape() {
        let pair = Pair::new("id", 42);
        let json = serde_json::to_string(&pair).expect("Failed to serialize Pair");
        assert_eq!(json, r#"{"first":"id","second":42}"#);

        let back: Pair<String, u32> =
            serde_json::from_str(&json).expect("Failed to deserialize Pair");
        assert_eq!(back, Pair::new("id".to_string(), 42));
    }
}
