//! Disjoint segmentation of overlapping sets.
//!
//! Given several input collections, [`segmented`] produces pairwise-disjoint,
//! non-empty [`Segment`]s such that the distinct elements of every input are
//! exactly the union of some of the segments.
//!
//! # Algorithm
//!
//! Inputs are normalized first: empty inputs are dropped, each remaining
//! input is reduced to its distinct elements, and inputs with identical
//! element sets are kept only once (first occurrence wins).
//!
//! The partition then starts empty and is refined by each normalized set
//! `S` in turn. A working copy `D` of `S` is intersected with each existing
//! segment `E`, in partition order:
//!
//! - `E == D`: `D` is fully absorbed and the scan stops.
//! - `I = E ∩ D` non-empty: `E` shrinks to `E \ I` (and disappears if it
//!   becomes empty), `I` is inserted right after `E`, `D` shrinks to `D \ I`,
//!   and the scan resumes after `I`.
//!
//! Whatever is left of `D` at the end becomes a new segment.
//!
//! ```text
//!   partition        next set          refined partition
//!   {1,2,3}     +    {2,3,4}     =>    {1} {2,3} {4}
//! ```
//!
//! # Examples
//!
//! ```rust
//! use multiseq::segmented::segmented;
//!
//! let segments = segmented(vec![vec![1, 2, 3], vec![2, 3, 4]]);
//! let segments: Vec<Vec<i32>> = segments.into_iter().map(|s| s.into_vec()).collect();
//! assert_eq!(segments, vec![vec![1], vec![2, 3], vec![4]]);
//! ```

use std::hash::Hash;

use tracing::{debug, trace};

use crate::error::{self, ArgumentError};
use crate::hashing::{self, HashBuilder, HashMap};
use crate::segment::Segment;

/// The result of a segmentation together with its coverage witness.
///
/// Besides the disjoint segments, a `Segmentation` records for every
/// relevant input set (after dropping empty inputs and duplicates) which
/// segments it is made of.
///
/// # Examples
///
/// ```rust
/// use multiseq::segmented::segmentation;
///
/// let segmentation = segmentation(vec![vec!['a', 'b'], vec!['b', 'c'], vec![]]);
/// assert_eq!(segmentation.len(), 3);
/// assert_eq!(segmentation.relevant_count(), 2);
///
/// // {'b', 'c'} is the union of segments 1 and 2
/// assert_eq!(segmentation.cover(1), Some(&[1, 2][..]));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segmentation<T: Clone + Eq + Hash> {
    segments: Vec<Segment<T>>,
    covers: Vec<Vec<usize>>,
}

impl<T: Clone + Eq + Hash> Segmentation<T> {
    /// Returns the disjoint segments.
    #[inline]
    #[must_use]
    pub fn segments(&self) -> &[Segment<T>] {
        &self.segments
    }

    /// Consumes the segmentation and returns the disjoint segments.
    #[inline]
    #[must_use]
    pub fn into_segments(self) -> Vec<Segment<T>> {
        self.segments
    }

    /// Returns the number of segments.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// Returns `true` if there are no segments, i.e. no relevant input.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Returns the number of relevant input sets.
    #[inline]
    #[must_use]
    pub fn relevant_count(&self) -> usize {
        self.covers.len()
    }

    /// Returns the ascending indices of the segments whose union is the
    /// relevant input set at `relevant_index`.
    #[inline]
    #[must_use]
    pub fn cover(&self, relevant_index: usize) -> Option<&[usize]> {
        self.covers.get(relevant_index).map(Vec::as_slice)
    }

    /// Rebuilds the relevant input set at `relevant_index` from its segments.
    ///
    /// Elements come out segment by segment, in segment order.
    #[must_use]
    pub fn reconstruct(&self, relevant_index: usize) -> Option<Segment<T>> {
        self.cover(relevant_index).map(|cover| {
            cover
                .iter()
                .flat_map(|&segment_index| self.segments[segment_index].iter().cloned())
                .collect()
        })
    }
}

/// Splits the input collections into disjoint segments.
///
/// Empty inputs are ignored; duplicate elements inside an input and inputs
/// with identical element sets are collapsed. Every input is consumed once.
///
/// # Examples
///
/// ```rust
/// use multiseq::segmented::segmented;
///
/// let segments = segmented(vec![vec!["x", "y"], vec!["y", "x", "x"], vec!["z"]]);
/// assert_eq!(segments.len(), 2);
/// ```
pub fn segmented<T, I, S>(sequences: I) -> Vec<Segment<T>>
where
    T: Clone + Eq + Hash,
    I: IntoIterator<Item = S>,
    S: IntoIterator<Item = T>,
{
    segmentation(sequences).into_segments()
}

/// Like [`segmented`], but reports an absent argument instead of requiring one.
///
/// # Errors
///
/// Returns [`ArgumentError`] naming `sequences` if `sequences` is `None`.
///
/// # Examples
///
/// ```rust
/// use multiseq::segmented::try_segmented;
///
/// let missing: Option<Vec<Vec<i32>>> = None;
/// assert!(try_segmented(missing).is_err());
/// assert_eq!(try_segmented(Some(vec![vec![1]])).map(|s| s.len()), Ok(1));
/// ```
pub fn try_segmented<T, I, S>(sequences: Option<I>) -> Result<Vec<Segment<T>>, ArgumentError>
where
    T: Clone + Eq + Hash,
    I: IntoIterator<Item = S>,
    S: IntoIterator<Item = T>,
{
    error::required(sequences, "sequences").map(segmented)
}

/// Splits the input collections into disjoint segments and records how each
/// relevant input is covered by them.
pub fn segmentation<T, I, S>(sequences: I) -> Segmentation<T>
where
    T: Clone + Eq + Hash,
    I: IntoIterator<Item = S>,
    S: IntoIterator<Item = T>,
{
    let relevant = relevant_sets(sequences);

    let mut segments: Vec<Segment<T>> = Vec::new();
    for set in &relevant {
        refine(&mut segments, set.clone());
    }

    let covers = covers(&segments, &relevant);
    debug!(
        relevant = relevant.len(),
        segments = segments.len(),
        "segmentation complete"
    );
    Segmentation { segments, covers }
}

/// Reduces the inputs to their distinct, non-empty, pairwise different
/// element sets, in first-seen order.
fn relevant_sets<T, I, S>(sequences: I) -> Vec<Segment<T>>
where
    T: Clone + Eq + Hash,
    I: IntoIterator<Item = S>,
    S: IntoIterator<Item = T>,
{
    let builder = HashBuilder::default();
    let mut by_fingerprint: HashMap<u64, Vec<usize>> = HashMap::default();
    let mut relevant: Vec<Segment<T>> = Vec::new();
    let mut inputs = 0_usize;

    for sequence in sequences {
        inputs += 1;
        let set: Segment<T> = sequence.into_iter().collect();
        if set.is_empty() {
            continue;
        }
        let fingerprint = hashing::unordered_fingerprint(&builder, &set);
        let bucket = by_fingerprint.entry(fingerprint).or_default();
        if bucket.iter().any(|&index| relevant[index] == set) {
            continue;
        }
        bucket.push(relevant.len());
        relevant.push(set);
    }

    trace!(inputs, relevant = relevant.len(), "normalized input sets");
    relevant
}

/// Refines `partition` so that `set` becomes a union of its segments.
fn refine<T: Clone + Eq + Hash>(partition: &mut Vec<Segment<T>>, mut remaining: Segment<T>) {
    let mut position = 0;
    while position < partition.len() && !remaining.is_empty() {
        let existing = &mut partition[position];
        if *existing == remaining {
            remaining.clear();
            break;
        }

        let common = existing.split_off_common(&remaining);
        if common.is_empty() {
            position += 1;
            continue;
        }
        remaining.remove_all(&common);

        if existing.is_empty() {
            partition[position] = common;
            position += 1;
        } else {
            trace!(
                position,
                split = common.len(),
                kept = existing.len(),
                "segment split"
            );
            partition.insert(position + 1, common);
            position += 2;
        }
    }

    if !remaining.is_empty() {
        partition.push(remaining);
    }
}

/// For every relevant set, the ascending indices of the segments it covers.
fn covers<T: Clone + Eq + Hash>(segments: &[Segment<T>], relevant: &[Segment<T>]) -> Vec<Vec<usize>> {
    let mut owner: HashMap<&T, usize> =
        hashing::map_with_capacity(segments.iter().map(Segment::len).sum());
    for (index, segment) in segments.iter().enumerate() {
        owner.extend(segment.iter().map(|element| (element, index)));
    }

    relevant
        .iter()
        .map(|set| {
            let mut cover: Vec<usize> = set
                .iter()
                .filter_map(|element| owner.get(element).copied())
                .collect();
            cover.sort_unstable();
            cover.dedup();
            cover
        })
        .collect()
}
