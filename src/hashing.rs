//! Hash builder selection.
//!
//! Every internal map and set in this crate hashes through [`HashBuilder`].
//! The concrete builder is chosen at compile time:
//!
//! - `fxhash` feature: `rustc_hash::FxBuildHasher` (fast, not `HashDoS` resistant)
//! - `ahash` feature: `ahash::RandomState`
//! - default: the standard library's `SipHash` based `RandomState`
//!
//! When both `fxhash` and `ahash` are enabled, `fxhash` wins.

use std::hash::{BuildHasher, Hash};

#[cfg(feature = "fxhash")]
pub(crate) type HashBuilder = rustc_hash::FxBuildHasher;

#[cfg(all(feature = "ahash", not(feature = "fxhash")))]
pub(crate) type HashBuilder = ahash::RandomState;

#[cfg(not(any(feature = "fxhash", feature = "ahash")))]
pub(crate) type HashBuilder = std::hash::RandomState;

/// Hash map keyed through the configured [`HashBuilder`].
pub(crate) type HashMap<K, V> = std::collections::HashMap<K, V, HashBuilder>;

/// Hash set keyed through the configured [`HashBuilder`].
pub(crate) type HashSet<T> = std::collections::HashSet<T, HashBuilder>;

/// Creates an empty map sized for `capacity` entries.
#[inline]
pub(crate) fn map_with_capacity<K, V>(capacity: usize) -> HashMap<K, V> {
    HashMap::with_capacity_and_hasher(capacity, HashBuilder::default())
}

/// Creates an empty set sized for `capacity` elements.
#[inline]
pub(crate) fn set_with_capacity<T>(capacity: usize) -> HashSet<T> {
    HashSet::with_capacity_and_hasher(capacity, HashBuilder::default())
}

/// Order-independent fingerprint of a collection of distinct elements.
///
/// Two collections holding the same elements produce the same fingerprint
/// under the same `builder`, whatever their iteration order. Unequal
/// collections may collide, so callers must confirm with a real comparison.
pub(crate) fn unordered_fingerprint<'a, T, I>(builder: &HashBuilder, elements: I) -> u64
where
    T: Hash + 'a,
    I: IntoIterator<Item = &'a T>,
{
    elements
        .into_iter()
        .map(|element| builder.hash_one(element))
        .fold(0_u64, u64::wrapping_add)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn test_fingerprint_ignores_order() {
        let builder = HashBuilder::default();
        let forward = unordered_fingerprint(&builder, &[1, 2, 3]);
        let backward = unordered_fingerprint(&builder, &[3, 2, 1]);
        assert_eq!(forward, backward);
    }

    #[rstest]
    fn test_fingerprint_of_empty_is_zero() {
        let builder = HashBuilder::default();
        let empty: [i32; 0] = [];
        assert_eq!(unordered_fingerprint(&builder, &empty), 0);
    }

    #[rstest]
    fn test_map_with_capacity_is_empty() {
        let map: HashMap<&str, usize> = map_with_capacity(16);
        assert!(map.is_empty());
        assert!(map.capacity() >= 16);
    }

    #[rstest]
    fn test_set_with_capacity_deduplicates() {
        let mut set = set_with_capacity(4);
        assert!(set.insert("a"));
        assert!(!set.insert("a"));
        assert_eq!(set.len(), 1);
    }
}
