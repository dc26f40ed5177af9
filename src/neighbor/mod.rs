//! Grouping of element occurrences by their neighbor context.
//!
//! [`to_neighbor_groups`] looks at every occurrence of every element in a
//! set of sequences through a [`Triplet`] `(previous, current, next)` and
//! groups the occurrences that plausibly stand at the same logical
//! position.
//!
//! # Algorithm
//!
//! 1. Empty sequences are dropped; every element of the others yields one
//!    triplet. Duplicates are kept.
//! 2. Triplets are clustered by the key of their current element. Distinct
//!    keys never share a group.
//! 3. Inside a cluster, triplets with both neighbors come first, then those
//!    with one, then those with none.
//! 4. Two candidate partitions are built: one keyed on previous neighbors,
//!    one on next neighbors. A triplet joins the first candidate whose
//!    representative agrees on the primary neighbor (a missing neighbor
//!    agrees with anything), on the opposite neighbor unless `merge_ends`
//!    is set, and which holds no member it crosses (see
//!    [`Triplet::crosses_by`]). A missing representative neighbor on the
//!    primary side is refined by the first joining triplet that has one.
//! 5. Groups are carved greedily: the candidate holding the most
//!    unassigned triplets becomes the next group, until none holds any.
//!    Ties follow [`TieBreak`]. Leftovers become singleton groups.
//!
//! Clusters are emitted in the order their keys were first seen.
//!
//! # Examples
//!
//! ```rust
//! use multiseq::neighbor::{to_neighbor_groups, Triplet};
//!
//! let groups = to_neighbor_groups(
//!     vec![vec!["A", "B"], vec!["A", "B", "C"], vec!["B", "C"]],
//!     |value| *value,
//! );
//!
//! let b_groups: Vec<&Vec<Triplet<&str>>> = groups
//!     .iter()
//!     .filter(|group| *group[0].current() == "B")
//!     .collect();
//! assert_eq!(b_groups.len(), 1);
//! assert_eq!(b_groups[0].len(), 3);
//! ```

mod candidate;
mod options;
mod triplet;

pub use options::{NeighborGrouping, TieBreak};
pub use triplet::Triplet;

use std::hash::Hash;

use tracing::debug;

use crate::error::{self, ArgumentError};
use crate::hashing::HashMap;
use triplet::NeighborKeys;

/// A set of triplets judged to stand at the same logical position.
pub type NeighborGroup<T> = Vec<Triplet<T>>;

/// Triplets sharing one current key, with their neighbor keys alongside.
struct Cluster<T, K> {
    triplets: Vec<Triplet<T>>,
    keys: Vec<NeighborKeys<K>>,
}

impl<T, K> Cluster<T, K> {
    const fn new() -> Self {
        Self {
            triplets: Vec::new(),
            keys: Vec::new(),
        }
    }

    fn push(&mut self, triplet: Triplet<T>, keys: NeighborKeys<K>) {
        self.triplets.push(triplet);
        self.keys.push(keys);
    }

    /// Orders the cluster by specificity, keeping input order among equals.
    fn into_specificity_order(self) -> (Vec<Triplet<T>>, Vec<NeighborKeys<K>>) {
        let mut entries: Vec<(Triplet<T>, NeighborKeys<K>)> =
            self.triplets.into_iter().zip(self.keys).collect();
        entries.sort_by_key(|(triplet, _)| triplet.absent_neighbors());
        entries.into_iter().unzip()
    }
}

/// Groups element occurrences by neighbor context with default options.
///
/// See the [module documentation](self) for the algorithm.
///
/// # Examples
///
/// ```rust
/// use multiseq::neighbor::to_neighbor_groups;
///
/// // "B" ending a sequence after "A" and "B" followed by "A" stay apart
/// let groups = to_neighbor_groups(
///     vec![vec!["A", "B"], vec!["A", "B"], vec!["C", "B", "A"]],
///     |value| *value,
/// );
/// let b_group_sizes: Vec<usize> = groups
///     .iter()
///     .filter(|group| *group[0].current() == "B")
///     .map(Vec::len)
///     .collect();
/// assert_eq!(b_group_sizes, vec![2, 1]);
/// ```
pub fn to_neighbor_groups<T, K, I, S, F>(sequences: I, key_selector: F) -> Vec<NeighborGroup<T>>
where
    T: Clone,
    K: Eq + Hash,
    I: IntoIterator<Item = S>,
    S: IntoIterator<Item = T>,
    F: Fn(&T) -> K,
{
    to_neighbor_groups_with(sequences, key_selector, NeighborGrouping::default())
}

/// Groups element occurrences by neighbor context.
///
/// # Examples
///
/// ```rust
/// use multiseq::neighbor::{to_neighbor_groups_with, NeighborGrouping};
///
/// let sequences = vec![vec!["x", "a", "y"], vec!["x", "a", "z"]];
///
/// let strict = to_neighbor_groups_with(sequences.clone(), |v| *v, NeighborGrouping::new());
/// let merged = to_neighbor_groups_with(
///     sequences,
///     |v| *v,
///     NeighborGrouping::new().with_merge_ends(true),
/// );
///
/// let count_a = |groups: &Vec<Vec<multiseq::neighbor::Triplet<&str>>>| {
///     groups.iter().filter(|group| *group[0].current() == "a").count()
/// };
/// assert_eq!(count_a(&strict), 2);
/// assert_eq!(count_a(&merged), 1);
/// ```
pub fn to_neighbor_groups_with<T, K, I, S, F>(
    sequences: I,
    key_selector: F,
    options: NeighborGrouping,
) -> Vec<NeighborGroup<T>>
where
    T: Clone,
    K: Eq + Hash,
    I: IntoIterator<Item = S>,
    S: IntoIterator<Item = T>,
    F: Fn(&T) -> K,
{
    let mut cluster_index: HashMap<K, usize> = HashMap::default();
    let mut clusters: Vec<Cluster<T, K>> = Vec::new();
    let mut sequence_count = 0_usize;
    let mut triplet_count = 0_usize;

    for sequence in sequences {
        let windows = Triplet::windows(sequence);
        if windows.is_empty() {
            continue;
        }
        sequence_count += 1;
        triplet_count += windows.len();

        for triplet in windows {
            let keys = NeighborKeys::of(&triplet, &key_selector);
            let position = *cluster_index
                .entry(key_selector(triplet.current()))
                .or_insert_with(|| {
                    clusters.push(Cluster::new());
                    clusters.len() - 1
                });
            clusters[position].push(triplet, keys);
        }
    }

    let cluster_count = clusters.len();
    let groups: Vec<NeighborGroup<T>> = clusters
        .into_iter()
        .flat_map(|cluster| {
            let (triplets, keys) = cluster.into_specificity_order();
            candidate::assemble(triplets, &keys, options)
        })
        .collect();

    debug!(
        sequences = sequence_count,
        triplets = triplet_count,
        clusters = cluster_count,
        groups = groups.len(),
        merge_ends = options.merge_ends(),
        "neighbor grouping complete"
    );
    groups
}

/// Like [`to_neighbor_groups_with`], but reports absent arguments instead of
/// requiring them.
///
/// # Errors
///
/// Returns [`ArgumentError`] naming `sequences` if `sequences` is `None`,
/// otherwise naming `key_selector` if `key_selector` is `None`.
///
/// # Examples
///
/// ```rust
/// use multiseq::neighbor::{try_to_neighbor_groups, NeighborGrouping};
///
/// let missing_selector: Option<fn(&i32) -> i32> = None;
/// let result = try_to_neighbor_groups(Some(vec![vec![1, 2]]), missing_selector, NeighborGrouping::new());
/// assert_eq!(result.unwrap_err().name(), "key_selector");
/// ```
pub fn try_to_neighbor_groups<T, K, I, S, F>(
    sequences: Option<I>,
    key_selector: Option<F>,
    options: NeighborGrouping,
) -> Result<Vec<NeighborGroup<T>>, ArgumentError>
where
    T: Clone,
    K: Eq + Hash,
    I: IntoIterator<Item = S>,
    S: IntoIterator<Item = T>,
    F: Fn(&T) -> K,
{
    let sequences = error::required(sequences, "sequences")?;
    let key_selector = error::required(key_selector, "key_selector")?;
    Ok(to_neighbor_groups_with(sequences, key_selector, options))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn identity(value: &&'static str) -> &'static str {
        *value
    }

    fn groups_of(
        groups: &[NeighborGroup<&'static str>],
        current: &str,
    ) -> Vec<Vec<(Option<&'static str>, Option<&'static str>)>> {
        groups
            .iter()
            .filter(|group| *group[0].current() == current)
            .map(|group| {
                group
                    .iter()
                    .map(|triplet| (triplet.previous().copied(), triplet.next().copied()))
                    .collect()
            })
            .collect()
    }

    #[rstest]
    fn test_crossing_contexts_are_split() {
        let groups = to_neighbor_groups(
            vec![vec!["A", "B"], vec!["A", "B"], vec!["C", "B", "A"]],
            identity,
        );

        assert_eq!(
            groups_of(&groups, "B"),
            vec![
                vec![(Some("A"), None), (Some("A"), None)],
                vec![(Some("C"), Some("A"))],
            ]
        );
    }

    #[rstest]
    fn test_compatible_contexts_are_joined() {
        let groups = to_neighbor_groups(
            vec![vec!["A", "B"], vec!["A", "B", "C"], vec!["B", "C"]],
            identity,
        );

        assert_eq!(
            groups_of(&groups, "B"),
            vec![vec![(Some("A"), Some("C")), (Some("A"), None), (None, Some("C"))]]
        );
    }

    #[rstest]
    fn test_clusters_follow_first_seen_key_order() {
        let groups = to_neighbor_groups(vec![vec!["x", "y"], vec!["z"]], identity);
        let currents: Vec<&str> = groups.iter().map(|group| *group[0].current()).collect();
        assert_eq!(currents, vec!["x", "y", "z"]);
    }

    #[rstest]
    fn test_key_selector_normalizes_case() {
        let groups = to_neighbor_groups(
            vec![vec!["a".to_string(), "B".to_string()], vec!["A".to_string(), "b".to_string()]],
            |value: &String| value.to_lowercase(),
        );
        assert_eq!(groups.len(), 2);
        assert!(groups.iter().all(|group| group.len() == 2));
    }

    #[rstest]
    fn test_empty_sequences_give_no_groups() {
        let groups = to_neighbor_groups(vec![Vec::<i32>::new(), Vec::new()], |value: &i32| *value);
        assert!(groups.is_empty());
    }

    #[rstest]
    fn test_zero_is_not_mistaken_for_a_missing_neighbor() {
        let groups = to_neighbor_groups(vec![vec![0, 1], vec![1]], |value: &i32| *value);
        let ones: Vec<&NeighborGroup<i32>> =
            groups.iter().filter(|group| *group[0].current() == 1).collect();
        assert_eq!(ones.len(), 1);
        assert!(ones[0].contains(&Triplet::new(Some(0), 1, None)));
        assert!(ones[0].contains(&Triplet::new(None, 1, None)));
    }

    #[rstest]
    fn test_try_to_neighbor_groups_checks_sequences_first() {
        let result = try_to_neighbor_groups::<i32, i32, Vec<Vec<i32>>, _, fn(&i32) -> i32>(
            None,
            None,
            NeighborGrouping::new(),
        );
        assert_eq!(result, Err(ArgumentError::new("sequences")));
    }

    #[rstest]
    fn test_try_to_neighbor_groups_runs_with_both_arguments() {
        let result = try_to_neighbor_groups(
            Some(vec![vec![1, 2, 1]]),
            Some(|value: &i32| *value),
            NeighborGrouping::new(),
        );
        assert_eq!(result.map(|groups| groups.len()), Ok(3));
    }
}
