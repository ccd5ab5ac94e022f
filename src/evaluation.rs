use log::warn;
use ndarray::ArrayView2;

use crate::{AnnErr, Result};

/// Computes the fraction of samples whose true class gets the row's highest prediction.
///
/// The true class of a row is the first column where its target equals `1`, column 0 if there
/// is none. A prediction counts as correct when the value at the true class is exactly equal to
/// the row's maximum, so ties at the maximum are correct for every tied class.
///
/// # Arguments
/// * `predictions` - The network's output, one row per sample.
/// * `targets` - The one-hot targets, row aligned with `predictions`.
///
/// # Returns
/// The accuracy in `[0, 1]`, `0` when there are no samples.
///
/// # Errors
/// `AnnErr::Shape` if the matrices' shapes differ.
pub fn accuracy(predictions: ArrayView2<f64>, targets: ArrayView2<f64>) -> Result<f64> {
    if predictions.nrows() != targets.nrows() {
        return Err(AnnErr::Shape {
            what: "target rows",
            got: targets.nrows(),
            expected: predictions.nrows(),
        });
    }
    if predictions.ncols() != targets.ncols() {
        return Err(AnnErr::Shape {
            what: "target columns",
            got: targets.ncols(),
            expected: predictions.ncols(),
        });
    }

    let samples = predictions.nrows();
    if samples == 0 {
        warn!("evaluating over zero samples, reporting an accuracy of 0");
        return Ok(0.);
    }

    let correct = predictions
        .rows()
        .into_iter()
        .zip(targets.rows())
        .filter(|(prediction, target)| {
            let class = target.iter().position(|&t| t == 1.).unwrap_or(0);
            let max = prediction.iter().copied().fold(f64::NEG_INFINITY, f64::max);
            prediction.get(class).is_some_and(|&p| p == max)
        })
        .count();

    Ok(correct as f64 / samples as f64)
}
