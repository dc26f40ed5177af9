//! # multiseq
//!
//! Generic algorithms over collections of collections.
//!
//! ## Overview
//!
//! Given several sequences (or sets) of elements, this library computes
//! derived structures:
//!
//! - **Segmentation**: the coarsest pairwise-disjoint sets such that every
//!   input is a union of some of them ([`segmented`])
//! - **Neighbor Groups**: occurrences grouped by their `(previous, current,
//!   next)` context ([`neighbor`])
//! - **Multiset Comparison**: duplicate-aware subset and equality tests
//!   ([`multiset`])
//! - **Cartesian Product** and **Transpose** ([`product`], [`transpose`])
//!
//! Every operation is a pure function of its input. Each input sequence is
//! consumed exactly once, so one-shot iterators are fine to pass.
//!
//! ## Feature Flags
//!
//! - `multiset`: Multiset comparison
//! - `segmented`: Disjoint segmentation and [`Segment`]
//! - `neighbor`: Neighbor grouping
//! - `combinatoric`: Cartesian product and transpose
//! - `serde`: `Serialize`/`Deserialize` for the result and option types
//! - `fxhash` / `ahash`: Faster hashing for the internal hash maps
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use multiseq::prelude::*;
//!
//! let segments = vec![vec![1, 2, 3], vec![2, 3, 4]].segmented();
//! let segments: Vec<Vec<i32>> = segments.into_iter().map(Segment::into_vec).collect();
//! assert_eq!(segments, vec![vec![1], vec![2, 3], vec![4]]);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// Re-exports the extension traits and the commonly used types.
///
/// # Usage
///
/// ```rust
/// use multiseq::prelude::*;
/// ```
pub mod prelude {
    pub use crate::error::ArgumentError;
    pub use crate::extension::NestedSequences;

    #[cfg(feature = "multiset")]
    pub use crate::extension::MultisetExt;

    #[cfg(feature = "segmented")]
    pub use crate::segment::Segment;

    #[cfg(feature = "segmented")]
    pub use crate::segmented::Segmentation;

    #[cfg(feature = "neighbor")]
    pub use crate::neighbor::{NeighborGroup, NeighborGrouping, TieBreak, Triplet};

    #[cfg(feature = "combinatoric")]
    pub use crate::product::CartesianProduct;
}

mod error;
mod extension;
mod hashing;

pub use error::ArgumentError;
pub use extension::NestedSequences;

#[cfg(feature = "multiset")]
pub use extension::MultisetExt;

#[cfg(feature = "multiset")]
pub mod multiset;

#[cfg(feature = "segmented")]
mod segment;

#[cfg(feature = "segmented")]
pub use segment::Segment;

#[cfg(feature = "segmented")]
pub mod segmented;

#[cfg(feature = "neighbor")]
pub mod neighbor;

#[cfg(feature = "combinatoric")]
pub mod product;

#[cfg(feature = "combinatoric")]
pub mod transpose;

// Results cross threads whenever their elements do.
static_assertions::assert_impl_all!(ArgumentError: Send, Sync, Copy, std::error::Error);

#[cfg(feature = "segmented")]
static_assertions::assert_impl_all!(Segment<String>: Send, Sync);

#[cfg(feature = "segmented")]
static_assertions::assert_impl_all!(segmented::Segmentation<String>: Send, Sync);

#[cfg(feature = "neighbor")]
static_assertions::assert_impl_all!(neighbor::Triplet<String>: Send, Sync);

#[cfg(feature = "neighbor")]
static_assertions::assert_impl_all!(neighbor::NeighborGrouping: Send, Sync, Copy);

#[cfg(feature = "combinatoric")]
static_assertions::assert_impl_all!(product::CartesianProduct<String>: Send, Sync);
