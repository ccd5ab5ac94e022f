use ndarray::{Array2, ArrayView2, Axis};

use crate::{AnnErr, Result};

/// Sums the elements of a matrix along one of its axes.
///
/// # Arguments
/// * `axis` - 0 to sum every column (1 x cols), 1 to sum every row (rows x 1).
/// * `m` - The matrix to reduce.
///
/// # Returns
/// The reduced matrix or `AnnErr::InvalidAxis` for any other axis.
pub fn sum_along_axis(axis: usize, m: ArrayView2<f64>) -> Result<Array2<f64>> {
    match axis {
        0 => Ok(m.sum_axis(Axis(0)).insert_axis(Axis(0))),
        1 => Ok(m.sum_axis(Axis(1)).insert_axis(Axis(1))),
        _ => Err(AnnErr::InvalidAxis(axis)),
    }
}

/// Maps every element of `m` through `f`, which also receives the element's (row, col).
pub fn apply<F>(m: ArrayView2<f64>, mut f: F) -> Array2<f64>
where
    F: FnMut(usize, usize, f64) -> f64,
{
    Array2::from_shape_fn(m.dim(), |(i, j)| f(i, j, m[(i, j)]))
}
