use ndarray::{Array2, ArrayView2};

use crate::{activations::ActFn, matrix, network::Params};

/// Makes a forward pass through the network.
///
/// # Arguments
/// * `act_fn` - The activation applied after each layer.
/// * `x` - The input data, one row per sample.
/// * `params` - The network's parameters.
///
/// # Returns
/// A tuple with the hidden layer's activations and the network's output.
pub(crate) fn forward<A: ActFn>(
    act_fn: &A,
    x: ArrayView2<f64>,
    params: &Params,
) -> (Array2<f64>, Array2<f64>) {
    let z = x.dot(&params.w_hidden) + &params.b_hidden;
    let hidden = matrix::apply(z.view(), |i, j, v| act_fn.f(i, j, v));

    let z = hidden.dot(&params.w_out) + &params.b_out;
    let output = matrix::apply(z.view(), |i, j, v| act_fn.f(i, j, v));

    (hidden, output)
}
