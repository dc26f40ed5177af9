//! Candidate construction and greedy assembly within one cluster.
//!
//! A cluster holds every triplet whose current element maps to the same
//! key. Two candidate partitions are built over it, one keyed on the
//! previous neighbor and one on the next neighbor; the greedy pass then
//! carves output groups out of the largest candidates.

use tracing::trace;

use super::options::{NeighborGrouping, TieBreak};
use super::triplet::{NeighborKeys, Triplet};

/// The neighbor a candidate partition is primarily keyed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Axis {
    Previous,
    Next,
}

/// A set of mutually compatible triplets, identified by cluster index.
///
/// The representative's neighbors are borrowed from member triplets:
/// `previous_source` names the member whose previous key represents the
/// candidate, `next_source` likewise for the next key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Candidate {
    previous_source: Option<usize>,
    next_source: Option<usize>,
    members: Vec<usize>,
}

impl Candidate {
    fn start<K>(index: usize, keys: &NeighborKeys<K>) -> Self {
        Self {
            previous_source: keys.previous.as_ref().map(|_| index),
            next_source: keys.next.as_ref().map(|_| index),
            members: vec![index],
        }
    }

    pub(crate) fn members(&self) -> &[usize] {
        &self.members
    }

    fn representative_previous<'a, K>(&self, keys: &'a [NeighborKeys<K>]) -> Option<&'a K> {
        self.previous_source
            .and_then(|source| keys[source].previous.as_ref())
    }

    fn representative_next<'a, K>(&self, keys: &'a [NeighborKeys<K>]) -> Option<&'a K> {
        self.next_source.and_then(|source| keys[source].next.as_ref())
    }

    fn accepts<K: Eq>(
        &self,
        keys: &[NeighborKeys<K>],
        index: usize,
        axis: Axis,
        merge_ends: bool,
    ) -> bool {
        let incoming = &keys[index];
        let previous_compatible = NeighborKeys::side_compatible(
            self.representative_previous(keys),
            incoming.previous.as_ref(),
        );
        let next_compatible =
            NeighborKeys::side_compatible(self.representative_next(keys), incoming.next.as_ref());
        let (primary, secondary) = match axis {
            Axis::Previous => (previous_compatible, next_compatible),
            Axis::Next => (next_compatible, previous_compatible),
        };

        primary
            && (merge_ends || secondary)
            && !self
                .members
                .iter()
                .any(|&member| keys[member].crosses(incoming))
    }

    fn join<K>(&mut self, keys: &[NeighborKeys<K>], index: usize, axis: Axis) {
        let incoming = &keys[index];
        match axis {
            Axis::Previous if self.previous_source.is_none() && incoming.previous.is_some() => {
                self.previous_source = Some(index);
            }
            Axis::Next if self.next_source.is_none() && incoming.next.is_some() => {
                self.next_source = Some(index);
            }
            _ => {}
        }
        self.members.push(index);
    }
}

/// Partitions the cluster into candidates along `axis`.
///
/// Each triplet joins the first compatible candidate or starts a new one,
/// so every index appears in exactly one candidate.
pub(crate) fn build_candidates<K: Eq>(
    keys: &[NeighborKeys<K>],
    axis: Axis,
    merge_ends: bool,
) -> Vec<Candidate> {
    let mut candidates: Vec<Candidate> = Vec::new();
    for index in 0..keys.len() {
        match candidates
            .iter_mut()
            .find(|candidate| candidate.accepts(keys, index, axis, merge_ends))
        {
            Some(candidate) => candidate.join(keys, index, axis),
            None => candidates.push(Candidate::start(index, &keys[index])),
        }
    }
    candidates
}

/// Splits one cluster into neighbor groups.
///
/// `triplets` and `keys` are parallel and already in specificity order.
pub(crate) fn assemble<T, K: Eq>(
    triplets: Vec<Triplet<T>>,
    keys: &[NeighborKeys<K>],
    options: NeighborGrouping,
) -> Vec<Vec<Triplet<T>>> {
    let previous = build_candidates(keys, Axis::Previous, options.merge_ends());
    let next = build_candidates(keys, Axis::Next, options.merge_ends());
    let ordered: Vec<&Candidate> = match options.tie_break() {
        TieBreak::PreferPrevious => previous.iter().chain(next.iter()).collect(),
        TieBreak::PreferNext => next.iter().chain(previous.iter()).collect(),
    };
    trace!(
        triplets = triplets.len(),
        previous_candidates = previous.len(),
        next_candidates = next.len(),
        "cluster candidates built"
    );

    let mut remaining: Vec<Option<Triplet<T>>> = triplets.into_iter().map(Some).collect();
    let mut groups = Vec::new();

    loop {
        let mut best: Option<(&Candidate, usize)> = None;
        for &candidate in &ordered {
            let overlap = candidate
                .members()
                .iter()
                .filter(|&&member| remaining[member].is_some())
                .count();
            if overlap > best.map_or(0, |(_, best_overlap)| best_overlap) {
                best = Some((candidate, overlap));
            }
        }
        let Some((candidate, overlap)) = best else {
            break;
        };

        trace!(overlap, "neighbor group selected");
        groups.push(
            candidate
                .members()
                .iter()
                .filter_map(|&member| remaining[member].take())
                .collect(),
        );
    }

    groups.extend(
        remaining
            .into_iter()
            .flatten()
            .map(|triplet| vec![triplet]),
    );
    groups
}
