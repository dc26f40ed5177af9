//! Insertion-ordered set used as the cell of a disjoint partition.
//!
//! This module provides [`Segment`], a set of distinct elements that
//! remembers the order in which its elements were first inserted. The
//! partitioner splits and shrinks segments constantly, so the
//! representation switches automatically between two states:
//!
//! - Small: up to 8 elements stored inline in a `SmallVec`, membership by
//!   linear scan
//! - Large: more than 8 elements stored in a `Vec` with a hash index
//!
//! Equality is set equality: two segments with the same elements are equal
//! whatever their insertion order.
//!
//! # Time Complexity
//!
//! | Operation      | Small (n <= 8)    | Large (n > 8)       |
//! |----------------|-------------------|---------------------|
//! | `insert`       | O(n)              | O(1) amortized      |
//! | `contains`     | O(n)              | O(1)                |
//! | `len`          | O(1)              | O(1)                |
//! | `iter`         | O(n) traversal    | O(n) traversal      |
//! | `is_disjoint`  | O(n * m)          | O(min(n, m))        |
//!
//! # Examples
//!
//! ```rust
//! use multiseq::Segment;
//!
//! let segment: Segment<i32> = [3, 1, 3, 2].into_iter().collect();
//! assert_eq!(segment.len(), 3);
//! assert_eq!(segment.as_slice(), &[3, 1, 2]);
//!
//! let reordered: Segment<i32> = [1, 2, 3].into_iter().collect();
//! assert_eq!(segment, reordered);
//! ```
//!
//! # State Transitions
//!
//! ```text
//!                 insert (n == 8)
//!     Small ─────────────────────────────► Large
//!       ▲                                    │
//!       └────────────────────────────────────┘
//!          split / remove_all (n <= 8 left)
//! ```

use smallvec::SmallVec;
use std::borrow::Borrow;
use std::hash::Hash;

use crate::hashing::{self, HashSet};

/// The threshold for transitioning between Small and Large states.
/// Segments with more than this many elements carry a hash index.
const SMALL_THRESHOLD: usize = 8;

/// Internal representation of the segment state.
#[derive(Clone)]
enum SegmentInner<T: Clone + Eq + Hash> {
    /// Up to 8 elements stored inline.
    Small(SmallVec<[T; SMALL_THRESHOLD]>),
    /// More than 8 elements, ordered in `elements` and indexed by `index`.
    Large { elements: Vec<T>, index: HashSet<T> },
}

/// A set of distinct elements that preserves first-insertion order.
///
/// # Type Parameters
///
/// * `T` - The element type. Must implement `Clone`, `Eq`, and `Hash`.
///
/// # Examples
///
/// ```rust
/// use multiseq::Segment;
///
/// let mut segment = Segment::new();
/// assert!(segment.insert("b"));
/// assert!(segment.insert("a"));
/// assert!(!segment.insert("b"));
///
/// let elements: Vec<&str> = segment.iter().copied().collect();
/// assert_eq!(elements, vec!["b", "a"]);
/// ```
#[derive(Clone)]
pub struct Segment<T: Clone + Eq + Hash> {
    inner: SegmentInner<T>,
}

impl<T: Clone + Eq + Hash> Segment<T> {
    /// Creates a new empty segment.
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self {
            inner: SegmentInner::Small(SmallVec::new()),
        }
    }

    /// Builds a segment from a vector already known to hold distinct elements.
    fn from_distinct_vec(elements: Vec<T>) -> Self {
        debug_assert!(
            {
                let mut seen = hashing::set_with_capacity(elements.len());
                elements.iter().all(|element| seen.insert(element))
            },
            "segment elements must be distinct"
        );
        if elements.len() <= SMALL_THRESHOLD {
            Self {
                inner: SegmentInner::Small(SmallVec::from_vec(elements)),
            }
        } else {
            let mut index = hashing::set_with_capacity(elements.len());
            index.extend(elements.iter().cloned());
            Self {
                inner: SegmentInner::Large { elements, index },
            }
        }
    }

    /// Returns the number of elements in the segment.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.as_slice().len()
    }

    /// Returns `true` if the segment contains no elements.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.as_slice().is_empty()
    }

    /// Returns `true` if the segment contains the specified element.
    ///
    /// Borrowed forms of the element type are accepted, so a
    /// `Segment<String>` can be queried with a `&str`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use multiseq::Segment;
    ///
    /// let segment: Segment<String> = ["apple".to_string()].into_iter().collect();
    /// assert!(segment.contains("apple"));
    /// assert!(!segment.contains("pear"));
    /// ```
    #[must_use]
    pub fn contains<Q>(&self, element: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: Eq + Hash + ?Sized,
    {
        match &self.inner {
            SegmentInner::Small(elements) => elements
                .iter()
                .any(|candidate| <T as Borrow<Q>>::borrow(candidate) == element),
            SegmentInner::Large { index, .. } => index.contains(element),
        }
    }

    /// Inserts an element at the end of the segment.
    ///
    /// Returns `false` and leaves the segment unchanged if the element was
    /// already present.
    pub fn insert(&mut self, element: T) -> bool {
        if self.contains(&element) {
            return false;
        }
        match &mut self.inner {
            SegmentInner::Small(elements) if elements.len() < SMALL_THRESHOLD => {
                elements.push(element);
            }
            SegmentInner::Small(elements) => {
                let mut promoted = std::mem::take(elements).into_vec();
                promoted.push(element);
                *self = Self::from_distinct_vec(promoted);
            }
            SegmentInner::Large { elements, index } => {
                index.insert(element.clone());
                elements.push(element);
            }
        }
        true
    }

    /// Returns the elements in insertion order.
    #[inline]
    #[must_use]
    pub fn as_slice(&self) -> &[T] {
        match &self.inner {
            SegmentInner::Small(elements) => elements.as_slice(),
            SegmentInner::Large { elements, .. } => elements.as_slice(),
        }
    }

    /// Returns an iterator over the elements in insertion order.
    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.as_slice().iter()
    }

    /// Consumes the segment and returns its elements in insertion order.
    #[must_use]
    pub fn into_vec(self) -> Vec<T> {
        match self.inner {
            SegmentInner::Small(elements) => elements.into_vec(),
            SegmentInner::Large { elements, .. } => elements,
        }
    }

    /// Returns `true` if the two segments share no element.
    #[must_use]
    pub fn is_disjoint(&self, other: &Self) -> bool {
        let (smaller, larger) = if self.len() <= other.len() {
            (self, other)
        } else {
            (other, self)
        };
        !smaller.iter().any(|element| larger.contains(element))
    }

    /// Returns `true` if every element of `self` is also in `other`.
    #[must_use]
    pub fn is_subset(&self, other: &Self) -> bool {
        self.len() <= other.len() && self.iter().all(|element| other.contains(element))
    }

    /// Moves the elements shared with `other` out of `self`.
    ///
    /// Both the returned intersection and the remainder left in `self`
    /// keep `self`'s insertion order.
    pub(crate) fn split_off_common(&mut self, other: &Self) -> Self {
        if self.is_disjoint(other) {
            return Self::new();
        }
        let (common, kept): (Vec<T>, Vec<T>) = std::mem::take(self)
            .into_vec()
            .into_iter()
            .partition(|element| other.contains(element));
        *self = Self::from_distinct_vec(kept);
        Self::from_distinct_vec(common)
    }

    /// Removes every element of `other` from `self`.
    pub(crate) fn remove_all(&mut self, other: &Self) {
        if self.is_disjoint(other) {
            return;
        }
        let mut kept = std::mem::take(self).into_vec();
        kept.retain(|element| !other.contains(element));
        *self = Self::from_distinct_vec(kept);
    }

    /// Removes every element.
    pub(crate) fn clear(&mut self) {
        *self = Self::new();
    }

    #[cfg(test)]
    const fn is_small_state(&self) -> bool {
        matches!(self.inner, SegmentInner::Small(_))
    }

    #[cfg(test)]
    const fn is_large_state(&self) -> bool {
        matches!(self.inner, SegmentInner::Large { .. })
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

impl<T: Clone + Eq + Hash> Default for Segment<T> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone + Eq + Hash + std::fmt::Debug> std::fmt::Debug for Segment<T> {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter.debug_set().entries(self.iter()).finish()
    }
}

impl<T: Clone + Eq + Hash> PartialEq for Segment<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.is_subset(other)
    }
}

impl<T: Clone + Eq + Hash> Eq for Segment<T> {}

impl<T: Clone + Eq + Hash> FromIterator<T> for Segment<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut segment = Self::new();
        segment.extend(iter);
        segment
    }
}

impl<T: Clone + Eq + Hash> Extend<T> for Segment<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for element in iter {
            self.insert(element);
        }
    }
}

impl<'a, T: Clone + Eq + Hash> IntoIterator for &'a Segment<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T: Clone + Eq + Hash> IntoIterator for Segment<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.into_vec().into_iter()
    }
}

#[cfg(feature = "serde")]
impl<T> serde::Serialize for Segment<T>
where
    T: Clone + Eq + Hash + serde::Serialize,
{
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.iter())
    }
}

#[cfg(feature = "serde")]
impl<'de, T> serde::Deserialize<'de> for Segment<T>
where
    T: Clone + Eq + Hash + serde::Deserialize<'de>,
{
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        <Vec<T> as serde::Deserialize<'de>>::deserialize(deserializer).map(Self::from_iter)
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn test_new_creates_empty_small_segment() {
        let segment: Segment<i32> = Segment::new();
        assert!(segment.is_empty());
        assert!(segment.is_small_state());
    }

    #[rstest]
    fn test_small_threshold_constant() {
        assert_eq!(SMALL_THRESHOLD, 8);
    }

    #[rstest]
    fn test_insert_ninth_element_promotes_to_large() {
        let mut segment: Segment<i32> = (1..=8).collect();
        assert!(segment.is_small_state());

        assert!(segment.insert(9));
        assert!(segment.is_large_state());
        assert_eq!(segment.as_slice(), &[1, 2, 3, 4, 5, 6, 7, 8, 9]);
        assert!(segment.contains(&9));
    }

    #[rstest]
    fn test_insert_duplicate_in_large_state_is_ignored() {
        let mut segment: Segment<i32> = (0..20).collect();
        assert!(!segment.insert(5));
        assert_eq!(segment.len(), 20);
    }

    #[rstest]
    fn test_from_iter_keeps_first_occurrence_order() {
        let segment: Segment<char> = "banana".chars().collect();
        assert_eq!(segment.as_slice(), &['b', 'a', 'n']);
    }

    #[rstest]
    fn test_split_off_common_keeps_order_on_both_sides() {
        let mut segment: Segment<i32> = [5, 1, 4, 2, 3].into_iter().collect();
        let other: Segment<i32> = [2, 5].into_iter().collect();

        let common = segment.split_off_common(&other);

        assert_eq!(common.as_slice(), &[5, 2]);
        assert_eq!(segment.as_slice(), &[1, 4, 3]);
    }

    #[rstest]
    fn test_split_off_common_of_disjoint_segments_is_empty() {
        let mut segment: Segment<i32> = [1, 2].into_iter().collect();
        let other: Segment<i32> = [3].into_iter().collect();

        assert!(segment.split_off_common(&other).is_empty());
        assert_eq!(segment.len(), 2);
    }

    #[rstest]
    fn test_split_off_common_demotes_large_remainder() {
        let mut segment: Segment<i32> = (0..12).collect();
        let other: Segment<i32> = (0..6).collect();

        let common = segment.split_off_common(&other);

        assert!(common.is_small_state());
        assert!(segment.is_small_state());
        assert_eq!(segment.as_slice(), &[6, 7, 8, 9, 10, 11]);
    }

    #[rstest]
    fn test_remove_all() {
        let mut segment: Segment<i32> = (0..10).collect();
        let other: Segment<i32> = [0, 9, 42].into_iter().collect();

        segment.remove_all(&other);

        assert_eq!(segment.as_slice(), &[1, 2, 3, 4, 5, 6, 7, 8]);
        assert!(segment.is_small_state());
    }

    #[rstest]
    fn test_clear() {
        let mut segment: Segment<i32> = (0..10).collect();
        segment.clear();
        assert!(segment.is_empty());
    }

    #[rstest]
    fn test_equality_ignores_order() {
        let forward: Segment<i32> = (0..12).collect();
        let backward: Segment<i32> = (0..12).rev().collect();
        assert_eq!(forward, backward);
    }

    #[rstest]
    fn test_inequality_different_lengths() {
        let segment1: Segment<i32> = [1, 2].into_iter().collect();
        let segment2: Segment<i32> = [1].into_iter().collect();
        assert_ne!(segment1, segment2);
    }

    #[rstest]
    fn test_is_subset_and_is_disjoint() {
        let small: Segment<i32> = [1, 2].into_iter().collect();
        let large: Segment<i32> = [2, 1, 3].into_iter().collect();
        let other: Segment<i32> = [7].into_iter().collect();

        assert!(small.is_subset(&large));
        assert!(!large.is_subset(&small));
        assert!(small.is_disjoint(&other));
        assert!(!small.is_disjoint(&large));
    }

    #[rstest]
    fn test_debug_formats_as_set() {
        let segment: Segment<i32> = [2, 1].into_iter().collect();
        assert_eq!(format!("{segment:?}"), "{2, 1}");
    }
}
