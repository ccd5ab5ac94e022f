use log::{debug, warn};
use ndarray::ArrayView2;

use super::forward;
use crate::{
    Result,
    activations::ActFn,
    matrix::{apply, sum_along_axis},
    network::{Config, Params},
};

/// Runs `config.epochs` full batch gradient steps over `(x, y)`.
///
/// Each epoch uses the parameters left by the previous one and updates all four matrices by
/// *adding* the scaled gradient of the negative error, which descends on the squared error as
/// long as `act_fn.df` is the derivative of `act_fn.f` (see [`ActFn`]).
///
/// Divergence is not an error, whatever the last epoch leaves is returned.
///
/// # Arguments
/// * `config` - Supplies the epoch count and learning rate.
/// * `act_fn` - The activation and its derivative.
/// * `x` - The inputs, `samples x input_size`.
/// * `y` - The one-hot targets, `samples x output_size`.
/// * `params` - The initial parameters.
///
/// # Returns
/// The parameters after the last epoch.
pub(crate) fn backpropagate<A: ActFn>(
    config: &Config,
    act_fn: &A,
    x: ArrayView2<f64>,
    y: ArrayView2<f64>,
    mut params: Params,
) -> Result<Params> {
    let rate = config.rate;
    let df = |i, j, v| act_fn.df(i, j, v);

    for epoch in 0..config.epochs {
        let (hidden, output) = forward(act_fn, x, &params);

        let err_out = &y - &output;
        let delta_out = err_out * &apply(output.view(), df);

        // Uses the output weights from before this epoch's update.
        let err_hidden = delta_out.dot(&params.w_out.t());
        let delta_hidden = err_hidden * &apply(hidden.view(), df);

        params.w_out.scaled_add(rate, &hidden.t().dot(&delta_out));
        params.b_out.scaled_add(rate, &sum_along_axis(0, delta_out.view())?);
        params.w_hidden.scaled_add(rate, &x.t().dot(&delta_hidden));
        params.b_hidden.scaled_add(rate, &sum_along_axis(0, delta_hidden.view())?);

        if epoch % 1000 == 0 {
            let sse: f64 = delta_out.iter().map(|d| d * d).sum();
            debug!("epoch {epoch}: squared output delta {sse}");
        }
    }

    if !params.is_finite() {
        warn!("training diverged, the parameters contain non finite values");
    }

    Ok(params)
}
