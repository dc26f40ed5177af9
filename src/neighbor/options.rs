//! Configuration of the neighbor grouper.

/// Which axis wins when a previous-axis and a next-axis candidate cover the
/// same number of unassigned triplets.
///
/// Within one axis the earliest created candidate always wins.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TieBreak {
    /// Prefer candidates grouped by matching previous neighbors.
    #[default]
    PreferPrevious,
    /// Prefer candidates grouped by matching next neighbors.
    PreferNext,
}

/// Options for [`to_neighbor_groups_with`](super::to_neighbor_groups_with).
///
/// # Examples
///
/// ```rust
/// use multiseq::neighbor::{NeighborGrouping, TieBreak};
///
/// let options = NeighborGrouping::new()
///     .with_merge_ends(true)
///     .with_tie_break(TieBreak::PreferNext);
/// assert!(options.merge_ends());
/// assert_eq!(options.tie_break(), TieBreak::PreferNext);
///
/// let defaults = NeighborGrouping::default();
/// assert!(!defaults.merge_ends());
/// assert_eq!(defaults.tie_break(), TieBreak::PreferPrevious);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct NeighborGrouping {
    merge_ends: bool,
    tie_break: TieBreak,
}

impl NeighborGrouping {
    /// Default options: sequence ends do not merge, ties prefer the
    /// previous axis.
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self {
            merge_ends: false,
            tie_break: TieBreak::PreferPrevious,
        }
    }

    /// When `true`, only the primary axis and crossing decide whether two
    /// triplets may share a candidate; the opposite neighbor is ignored, so
    /// occurrences at sequence boundaries merge freely.
    #[inline]
    #[must_use]
    pub const fn with_merge_ends(self, merge_ends: bool) -> Self {
        Self { merge_ends, ..self }
    }

    /// Sets the tie-break between equally large candidates.
    #[inline]
    #[must_use]
    pub const fn with_tie_break(self, tie_break: TieBreak) -> Self {
        Self { tie_break, ..self }
    }

    /// Whether sequence ends merge regardless of the opposite neighbor.
    #[inline]
    #[must_use]
    pub const fn merge_ends(&self) -> bool {
        self.merge_ends
    }

    /// The configured tie-break.
    #[inline]
    #[must_use]
    pub const fn tie_break(&self) -> TieBreak {
        self.tie_break
    }
}
