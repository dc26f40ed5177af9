//! Rows to columns.
//!
//! [`transponded`] turns a collection of rows into columns. Rows may have
//! different lengths; a row too short to reach column `i` contributes
//! `None` there.
//!
//! ```text
//!   [a b c]        [a d]
//!   [d]      =>    [b -]
//!                  [c -]
//! ```

use tracing::trace;

use crate::error::{self, ArgumentError};

/// Transposes rows into columns, padding short rows with `None`.
///
/// Empty rows are dropped. Every row is consumed exactly once, before any
/// column is built, so expensive one-shot row producers are safe to pass.
/// The result has as many columns as the longest row has elements, and
/// every column has one entry per retained row, in row order.
///
/// # Examples
///
/// ```rust
/// use multiseq::transpose::transponded;
///
/// let columns = transponded(vec![vec!["a", "b"], vec!["c", "d"]]);
/// assert_eq!(
///     columns,
///     vec![vec![Some("a"), Some("c")], vec![Some("b"), Some("d")]]
/// );
///
/// let ragged = transponded(vec![vec![1, 2, 3], vec![], vec![4]]);
/// assert_eq!(
///     ragged,
///     vec![vec![Some(1), Some(4)], vec![Some(2), None], vec![Some(3), None]]
/// );
/// ```
pub fn transponded<T, I, S>(sequences: I) -> Vec<Vec<Option<T>>>
where
    I: IntoIterator<Item = S>,
    S: IntoIterator<Item = T>,
{
    let rows: Vec<Vec<T>> = sequences
        .into_iter()
        .map(|row| row.into_iter().collect::<Vec<T>>())
        .filter(|row| !row.is_empty())
        .collect();
    let width = rows.iter().map(Vec::len).max().unwrap_or(0);
    trace!(rows = rows.len(), width, "transposing");

    let mut columns: Vec<Vec<Option<T>>> =
        (0..width).map(|_| Vec::with_capacity(rows.len())).collect();
    for row in rows {
        let mut cells = row.into_iter();
        for column in &mut columns {
            column.push(cells.next());
        }
    }
    columns
}

/// Like [`transponded`], but reports an absent argument instead of requiring one.
///
/// # Errors
///
/// Returns [`ArgumentError`] naming `sequences` if `sequences` is `None`.
pub fn try_transponded<T, I, S>(sequences: Option<I>) -> Result<Vec<Vec<Option<T>>>, ArgumentError>
where
    I: IntoIterator<Item = S>,
    S: IntoIterator<Item = T>,
{
    error::required(sequences, "sequences").map(transponded)
}
