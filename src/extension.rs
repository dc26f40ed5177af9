//! Method-call syntax for the algorithms of this crate.
//!
//! [`NestedSequences`] is implemented for every collection of collections
//! (anything iterable whose items are iterable), and [`MultisetExt`] for
//! every iterable. Both only forward to the free functions of the
//! respective modules.
//!
//! # Examples
//!
//! ```rust
//! use multiseq::prelude::*;
//!
//! let rows = vec![vec![1, 2, 3], vec![2, 3, 4]];
//!
//! assert_eq!(rows.clone().segmented().len(), 3);
//! assert_eq!(rows.clone().transponded().len(), 3);
//! assert_eq!(rows.cartesian_product().count(), 9);
//!
//! assert!(vec![1, 1].is_subset_of(vec![1, 1, 2]));
//! ```

use std::hash::Hash;

#[cfg(feature = "multiset")]
use crate::multiset;
#[cfg(feature = "neighbor")]
use crate::neighbor::{self, NeighborGroup, NeighborGrouping};
#[cfg(feature = "combinatoric")]
use crate::product::{self, CartesianProduct};
#[cfg(feature = "segmented")]
use crate::segment::Segment;
#[cfg(feature = "segmented")]
use crate::segmented::{self, Segmentation};
#[cfg(feature = "combinatoric")]
use crate::transpose;

/// Operations over a collection of sequences of `T`.
pub trait NestedSequences<T>: Sized {
    /// See [`segmented::segmented`].
    #[cfg(feature = "segmented")]
    fn segmented(self) -> Vec<Segment<T>>
    where
        T: Clone + Eq + Hash;

    /// See [`segmented::segmentation`].
    #[cfg(feature = "segmented")]
    fn segmentation(self) -> Segmentation<T>
    where
        T: Clone + Eq + Hash;

    /// See [`neighbor::to_neighbor_groups`].
    #[cfg(feature = "neighbor")]
    fn to_neighbor_groups<K, F>(self, key_selector: F) -> Vec<NeighborGroup<T>>
    where
        T: Clone,
        K: Eq + Hash,
        F: Fn(&T) -> K;

    /// See [`neighbor::to_neighbor_groups_with`].
    #[cfg(feature = "neighbor")]
    fn to_neighbor_groups_with<K, F>(
        self,
        key_selector: F,
        options: NeighborGrouping,
    ) -> Vec<NeighborGroup<T>>
    where
        T: Clone,
        K: Eq + Hash,
        F: Fn(&T) -> K;

    /// See [`transpose::transponded`].
    #[cfg(feature = "combinatoric")]
    fn transponded(self) -> Vec<Vec<Option<T>>>;

    /// See [`product::cartesian_product`].
    #[cfg(feature = "combinatoric")]
    fn cartesian_product(self) -> CartesianProduct<T>
    where
        T: Clone;
}

impl<T, I, S> NestedSequences<T> for I
where
    I: IntoIterator<Item = S>,
    S: IntoIterator<Item = T>,
{
    #[cfg(feature = "segmented")]
    fn segmented(self) -> Vec<Segment<T>>
    where
        T: Clone + Eq + Hash,
    {
        segmented::segmented(self)
    }

    #[cfg(feature = "segmented")]
    fn segmentation(self) -> Segmentation<T>
    where
        T: Clone + Eq + Hash,
    {
        segmented::segmentation(self)
    }

    #[cfg(feature = "neighbor")]
    fn to_neighbor_groups<K, F>(self, key_selector: F) -> Vec<NeighborGroup<T>>
    where
        T: Clone,
        K: Eq + Hash,
        F: Fn(&T) -> K,
    {
        neighbor::to_neighbor_groups(self, key_selector)
    }

    #[cfg(feature = "neighbor")]
    fn to_neighbor_groups_with<K, F>(
        self,
        key_selector: F,
        options: NeighborGrouping,
    ) -> Vec<NeighborGroup<T>>
    where
        T: Clone,
        K: Eq + Hash,
        F: Fn(&T) -> K,
    {
        neighbor::to_neighbor_groups_with(self, key_selector, options)
    }

    #[cfg(feature = "combinatoric")]
    fn transponded(self) -> Vec<Vec<Option<T>>> {
        transpose::transponded(self)
    }

    #[cfg(feature = "combinatoric")]
    fn cartesian_product(self) -> CartesianProduct<T>
    where
        T: Clone,
    {
        product::cartesian_product(self)
    }
}

/// Multiset comparisons between sequences of `T`.
#[cfg(feature = "multiset")]
pub trait MultisetExt<T>: IntoIterator<Item = T> + Sized {
    /// See [`multiset::is_subset_of`].
    fn is_subset_of<B: IntoIterator<Item = T>>(self, other: B) -> bool
    where
        T: Eq + Hash,
    {
        multiset::is_subset_of(self, other)
    }

    /// See [`multiset::is_subset_of_or_either`].
    fn is_subset_of_or_either<B: IntoIterator<Item = T>>(self, other: B) -> bool
    where
        T: Eq + Hash,
    {
        multiset::is_subset_of_or_either(self, other)
    }

    /// See [`multiset::is_multiset_equal`].
    fn is_multiset_equal<B: IntoIterator<Item = T>>(self, other: B) -> bool
    where
        T: Eq + Hash,
    {
        multiset::is_multiset_equal(self, other)
    }
}

#[cfg(feature = "multiset")]
impl<T, A: IntoIterator<Item = T>> MultisetExt<T> for A {}
