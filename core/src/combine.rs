//! Pairing two sequences element by element, and splitting pairs apart.

use crate::pair::Pair;

/// Pair up elements with the same index.
///
/// The result is as long as the shorter input; trailing elements of the
/// longer one are dropped.
pub fn zip<A, B>(first: &[A], second: &[B]) -> Vec<Pair<A, B>>
where
    A: Clone,
    B: Clone,
{
    let len = first.len().min(second.len());
    let mut pairs = Vec::with_capacity(len);
    for (a, b) in first[..len].iter().zip(&second[..len]) {
        pairs.push(Pair::new(a.clone(), b.clone()));
    }
    pairs
}

/// Split pairs into a sequence of first components and a sequence of
/// second components, both in the original order.
pub fn unzip<A, B, I>(pairs: I) -> (Vec<A>, Vec<B>)
where
    I: IntoIterator<Item = Pair<A, B>>,
{
    let pairs = pairs.into_iter();
    let (lower, _) = pairs.size_hint();
    let mut firsts = Vec::with_capacity(lower);
    let mut seconds = Vec::with_capacity(lower);

    for pair in pairs {
        firsts.push(pair.first);
        seconds.push(pair.second);
    }

    (firsts, seconds)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zip_truncates_to_shorter() {
        let pairs = zip(&[1, 2, 3], &["a", "b"]);
        assert_eq!(pairs, vec![Pair::new(1, "a"), Pair::new(2, "b")]);

        let pairs = zip(&['x'], &[true, false, true]);
        assert_eq!(pairs, vec![Pair::new('x', true)]);
    }

    #[test]
    fn test_zip_empty() {
        let empty: [i32; 0] = [];
        assert!(zip(&empty, &[1, 2]).is_empty());
        assert!(zip(&[1, 2], &empty).is_empty());
    }

    #[test]
    fn test_unzip() {
        let (nums, words) = unzip(vec![Pair::new(1, "one"), Pair::new(2, "two")]);
        assert_eq!(nums, vec![1, 2]);
        assert_eq!(words, vec!["one", "two"]);

        let (a, b): (Vec<i32>, Vec<char>) = unzip(Vec::new());
        assert!(a.is_empty() && b.is_empty());
    }

    #[test]
    fn test_unzip_inverts_zip() {
        let a = [1, 2, 3, 4];
        let b = ["w", "x", "y"];
        let (left, right) = unzip(zip(&a, &b));
        assert_eq!(left, a[..3].to_vec());
        assert_eq!(right, b.to_vec());
    }
}
