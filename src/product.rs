//! Cartesian product of several sequences.
//!
//! [`cartesian_product`] enumerates every way of choosing one element from
//! each input, in lexicographic order of the input positions: the last
//! sequence varies fastest.
//!
//! ```text
//!   [[1, 2], [3, 4]]  =>  [1, 3] [1, 4] [2, 3] [2, 4]
//! ```
//!
//! Zero sequences yield exactly one empty combination (the identity of the
//! product); any empty sequence yields none.

use smallvec::SmallVec;
use std::iter::FusedIterator;

/// Number of pools whose odometer indices are kept inline.
const INLINE_POOLS: usize = 8;

fn combination_count<T>(pools: &[Vec<T>]) -> Option<usize> {
    pools
        .iter()
        .try_fold(1_usize, |total, pool| total.checked_mul(pool.len()))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ProductState {
    /// Nothing yielded yet.
    Fresh,
    /// At least one combination yielded, more may follow.
    Running,
    /// Exhausted.
    Done,
}

/// Iterator over the combinations of a Cartesian product.
///
/// Created by [`cartesian_product`]. Inputs are materialized once at
/// construction; each combination is a freshly cloned `Vec<T>`.
///
/// # Examples
///
/// ```rust
/// use multiseq::product::cartesian_product;
///
/// let combinations: Vec<Vec<i32>> = cartesian_product(vec![vec![1, 2], vec![3, 4]]).collect();
/// assert_eq!(
///     combinations,
///     vec![vec![1, 3], vec![1, 4], vec![2, 3], vec![2, 4]]
/// );
/// ```
#[derive(Debug, Clone)]
pub struct CartesianProduct<T> {
    pools: Vec<Vec<T>>,
    indices: SmallVec<[usize; INLINE_POOLS]>,
    state: ProductState,
    remaining: Option<usize>,
}

impl<T: Clone> CartesianProduct<T> {
    fn new(pools: Vec<Vec<T>>) -> Self {
        let remaining = combination_count(&pools);
        let state = if remaining == Some(0) {
            ProductState::Done
        } else {
            ProductState::Fresh
        };
        Self {
            indices: SmallVec::from_elem(0, pools.len()),
            pools,
            state,
            remaining,
        }
    }

    /// Total number of combinations, or `None` if it overflows `usize`.
    #[must_use]
    pub fn total_size(&self) -> Option<usize> {
        combination_count(&self.pools)
    }

    fn current(&self) -> Vec<T> {
        self.indices
            .iter()
            .zip(&self.pools)
            .map(|(&index, pool)| pool[index].clone())
            .collect()
    }

    /// Moves the odometer one step, rightmost index first.
    fn advance(&mut self) -> bool {
        for position in (0..self.indices.len()).rev() {
            self.indices[position] += 1;
            if self.indices[position] < self.pools[position].len() {
                return true;
            }
            self.indices[position] = 0;
        }
        false
    }
}

impl<T: Clone> Iterator for CartesianProduct<T> {
    type Item = Vec<T>;

    fn next(&mut self) -> Option<Self::Item> {
        let produced = match self.state {
            ProductState::Done => return None,
            ProductState::Fresh => {
                self.state = ProductState::Running;
                true
            }
            ProductState::Running => self.advance(),
        };
        if !produced {
            self.state = ProductState::Done;
            return None;
        }
        self.remaining = self.remaining.map(|remaining| remaining.saturating_sub(1));
        Some(self.current())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match (self.state, self.remaining) {
            (ProductState::Done, _) => (0, Some(0)),
            (_, Some(remaining)) => (remaining, Some(remaining)),
            (_, None) => (usize::MAX, None),
        }
    }
}

impl<T: Clone> FusedIterator for CartesianProduct<T> {}

/// Returns an iterator over the Cartesian product of `sequences`.
///
/// # Examples
///
/// ```rust
/// use multiseq::product::cartesian_product;
///
/// let none: Vec<Vec<char>> = Vec::new();
/// assert_eq!(cartesian_product(none).collect::<Vec<_>>(), vec![Vec::<char>::new()]);
///
/// let with_empty = vec![vec!['a'], vec![]];
/// assert_eq!(cartesian_product(with_empty).count(), 0);
/// ```
pub fn cartesian_product<T, I, S>(sequences: I) -> CartesianProduct<T>
where
    T: Clone,
    I: IntoIterator<Item = S>,
    S: IntoIterator<Item = T>,
{
    CartesianProduct::new(
        sequences
            .into_iter()
            .map(|sequence| sequence.into_iter().collect())
            .collect(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn test_product_two_pools() {
        let combinations: Vec<Vec<i32>> = cartesian_product(vec![vec![1, 2], vec![3, 4]]).collect();
        assert_eq!(
            combinations,
            vec![vec![1, 3], vec![1, 4], vec![2, 3], vec![2, 4]]
        );
    }

    #[rstest]
    fn test_product_three_pools_last_varies_fastest() {
        let combinations: Vec<String> = cartesian_product(vec![vec!['a', 'b'], vec!['x'], vec!['1', '2']])
            .map(|combination| combination.into_iter().collect())
            .collect();
        assert_eq!(combinations, vec!["ax1", "ax2", "bx1", "bx2"]);
    }

    #[rstest]
    fn test_product_single_pool() {
        let combinations: Vec<Vec<i32>> = cartesian_product(vec![vec![5, 6]]).collect();
        assert_eq!(combinations, vec![vec![5], vec![6]]);
    }

    #[rstest]
    fn test_product_no_pools_yields_one_empty_combination() {
        let mut product = cartesian_product(Vec::<Vec<i32>>::new());
        assert_eq!(product.size_hint(), (1, Some(1)));
        assert_eq!(product.next(), Some(Vec::new()));
        assert_eq!(product.next(), None);
        assert_eq!(product.next(), None);
    }

    #[rstest]
    fn test_product_empty_pool_yields_nothing() {
        let mut product = cartesian_product(vec![vec![1, 2], vec![]]);
        assert_eq!(product.size_hint(), (0, Some(0)));
        assert_eq!(product.next(), None);
    }

    #[rstest]
    fn test_size_hint_counts_down() {
        let mut product = cartesian_product(vec![vec![1, 2, 3], vec![4, 5]]);
        assert_eq!(product.total_size(), Some(6));
        assert_eq!(product.size_hint(), (6, Some(6)));
        product.next();
        product.next();
        assert_eq!(product.size_hint(), (4, Some(4)));
        assert_eq!(product.by_ref().count(), 4);
        assert_eq!(product.size_hint(), (0, Some(0)));
    }

    #[rstest]
    fn test_many_pools_spill_indices_to_heap() {
        let pools: Vec<Vec<u8>> = (0..10).map(|_| vec![0, 1]).collect();
        assert_eq!(cartesian_product(pools).count(), 1 << 10);
    }
}
