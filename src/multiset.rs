//! Duplicate-aware comparison of sequences.
//!
//! The functions in this module treat their inputs as multisets: the
//! number of times a value occurs matters, the order does not.
//!
//! Empty input is never a trivial subset. Every comparison returns `false`
//! as soon as either side is empty, including when both are.
//!
//! # Examples
//!
//! ```rust
//! use multiseq::multiset::{is_subset_of, is_subset_of_or_either};
//!
//! assert!(is_subset_of([1, 1, 2], [1, 1, 2, 3]));
//! assert!(!is_subset_of([1, 1, 2, 3], [1, 1, 2]));
//!
//! assert!(is_subset_of_or_either([1, 1, 2, 3], [1, 1, 2]));
//! assert!(!is_subset_of_or_either(Vec::<i32>::new(), vec![1]));
//! ```

use std::hash::Hash;

use crate::hashing::{self, HashMap};

/// Occurrence counts of every distinct value in a sequence.
type Frequencies<T> = HashMap<T, usize>;

fn frequencies<T, I>(sequence: I) -> Frequencies<T>
where
    T: Eq + Hash,
    I: IntoIterator<Item = T>,
{
    let iterator = sequence.into_iter();
    let mut counts = hashing::map_with_capacity(iterator.size_hint().0);
    for element in iterator {
        *counts.entry(element).or_insert(0) += 1;
    }
    counts
}

/// `true` when no value occurs in `smaller` more often than in `larger`.
fn is_contained<T: Eq + Hash>(smaller: &Frequencies<T>, larger: &Frequencies<T>) -> bool {
    smaller.len() <= larger.len()
        && smaller
            .iter()
            .all(|(value, count)| larger.get(value).is_some_and(|other| count <= other))
}

/// Returns `true` if `current` is a sub-multiset of `other`.
///
/// Every distinct value of `current` must occur in `other` at least as many
/// times as it occurs in `current`. Returns `false` if either sequence is
/// empty.
///
/// # Complexity
///
/// O(n + m)
///
/// # Examples
///
/// ```rust
/// use multiseq::multiset::is_subset_of;
///
/// assert!(is_subset_of([1], [1, 1]));
/// assert!(!is_subset_of([1, 1], [1]));
/// assert!(!is_subset_of(Vec::<i32>::new(), Vec::<i32>::new()));
/// ```
pub fn is_subset_of<T, A, B>(current: A, other: B) -> bool
where
    T: Eq + Hash,
    A: IntoIterator<Item = T>,
    B: IntoIterator<Item = T>,
{
    let current = frequencies(current);
    let other = frequencies(other);
    !current.is_empty() && !other.is_empty() && is_contained(&current, &other)
}

/// Returns `true` if either sequence is a sub-multiset of the other.
///
/// Both sequences are counted once. Returns `false` if either is empty.
///
/// # Examples
///
/// ```rust
/// use multiseq::multiset::is_subset_of_or_either;
///
/// assert!(is_subset_of_or_either(["a", "b"], ["b"]));
/// assert!(!is_subset_of_or_either(["a", "b"], ["c"]));
/// ```
pub fn is_subset_of_or_either<T, A, B>(current: A, other: B) -> bool
where
    T: Eq + Hash,
    A: IntoIterator<Item = T>,
    B: IntoIterator<Item = T>,
{
    let current = frequencies(current);
    let other = frequencies(other);
    if current.is_empty() || other.is_empty() {
        return false;
    }
    is_contained(&current, &other) || is_contained(&other, &current)
}

/// Returns `true` if both sequences hold the same values with the same
/// multiplicities, in any order. Returns `false` if either is empty.
///
/// # Examples
///
/// ```rust
/// use multiseq::multiset::is_multiset_equal;
///
/// assert!(is_multiset_equal([2, 1, 2], [2, 2, 1]));
/// assert!(!is_multiset_equal([2, 1], [2, 2, 1]));
/// ```
pub fn is_multiset_equal<T, A, B>(current: A, other: B) -> bool
where
    T: Eq + Hash,
    A: IntoIterator<Item = T>,
    B: IntoIterator<Item = T>,
{
    let current = frequencies(current);
    !current.is_empty() && current == frequencies(other)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(vec![1, 1, 2], vec![1, 1, 2, 3], true)]
    #[case(vec![1, 1, 2, 3], vec![1, 1, 2], false)]
    #[case(vec![1], vec![1, 1], true)]
    #[case(vec![1, 1], vec![1], false)]
    #[case(vec![3, 2, 1], vec![1, 2, 3], true)]
    #[case(vec![4], vec![1, 2, 3], false)]
    fn test_is_subset_of(#[case] current: Vec<i32>, #[case] other: Vec<i32>, #[case] expected: bool) {
        assert_eq!(is_subset_of(current, other), expected);
    }

    #[rstest]
    #[case(vec![], vec![1])]
    #[case(vec![1], vec![])]
    #[case(vec![], vec![])]
    fn test_empty_is_never_a_subset(#[case] current: Vec<i32>, #[case] other: Vec<i32>) {
        assert!(!is_subset_of(current.clone(), other.clone()));
        assert!(!is_subset_of_or_either(current.clone(), other.clone()));
        assert!(!is_multiset_equal(current, other));
    }

    #[rstest]
    fn test_is_subset_of_accepts_borrowed_elements() {
        let current = vec!["x".to_string()];
        let other = vec!["x".to_string(), "y".to_string()];
        assert!(is_subset_of(&current, &other));
        assert!(!is_subset_of(&other, &current));
    }

    #[rstest]
    fn test_is_subset_of_or_either_is_symmetric() {
        assert!(is_subset_of_or_either([1, 2], [1, 2, 2]));
        assert!(is_subset_of_or_either([1, 2, 2], [1, 2]));
        assert!(!is_subset_of_or_either([1, 3], [1, 2]));
    }

    #[rstest]
    fn test_zero_is_an_ordinary_value() {
        assert!(is_subset_of([0], [0, 1]));
        assert!(!is_subset_of([0, 0], [0, 1]));
    }
}
