//! Per-row fan-out
//!
//! The row-independent phases of the matrix code go through
//! [`for_each_row`]. With the `rayon` feature the rows are filled on the
//! rayon pool, otherwise in order on the calling thread.

#[cfg(feature = "rayon")]
use rayon::prelude::*;

/// Call `f(index, row)` for every row
///
/// `f` must only write through the row it is handed.
pub(crate) fn for_each_row<R, F>(rows: &mut [R], f: F)
where
    R: Send,
    F: Fn(usize, &mut R) + Send + Sync,
{
    #[cfg(feature = "rayon")]
    rows.par_iter_mut().enumerate().for_each(|(i, row)| f(i, row));

    #[cfg(not(feature = "rayon"))]
    rows.iter_mut().enumerate().for_each(|(i, row)| f(i, row));
}
