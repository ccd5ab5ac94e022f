use ndarray::Array2;

use super::Config;
use crate::{AnnErr, Result, initialization::ParamGen};

/// The trained state of a network.
///
/// Biases are single rows that get broadcast over every sample.
#[derive(Debug, Clone, PartialEq)]
pub struct Params {
    pub(crate) w_hidden: Array2<f64>,
    pub(crate) b_hidden: Array2<f64>,
    pub(crate) w_out: Array2<f64>,
    pub(crate) b_out: Array2<f64>,
}

impl Params {
    /// Creates a new `Params` checking every matrix against the shapes `config` dictates.
    ///
    /// # Arguments
    /// * `config` - The configuration the parameters belong to.
    /// * `w_hidden` - Hidden layer weights, `input_size x hidden_size`.
    /// * `b_hidden` - Hidden layer bias, `1 x hidden_size`.
    /// * `w_out` - Output layer weights, `hidden_size x output_size`.
    /// * `b_out` - Output layer bias, `1 x output_size`.
    ///
    /// # Errors
    /// `AnnErr::Shape` naming the first matrix with an unexpected shape.
    pub fn new(
        config: &Config,
        w_hidden: Array2<f64>,
        b_hidden: Array2<f64>,
        w_out: Array2<f64>,
        b_out: Array2<f64>,
    ) -> Result<Self> {
        let expected = Self::shapes(config);
        let got = [w_hidden.dim(), b_hidden.dim(), w_out.dim(), b_out.dim()];

        for ((what, (erows, ecols)), (rows, cols)) in expected.into_iter().zip(got) {
            if rows != erows {
                return Err(AnnErr::Shape {
                    what,
                    got: rows,
                    expected: erows,
                });
            }
            if cols != ecols {
                return Err(AnnErr::Shape {
                    what,
                    got: cols,
                    expected: ecols,
                });
            }
        }

        Ok(Self {
            w_hidden,
            b_hidden,
            w_out,
            b_out,
        })
    }

    /// Draws a fresh set of parameters from a generator, in the order hidden weights, hidden
    /// bias, output weights, output bias, each one row major.
    ///
    /// # Errors
    /// `AnnErr::Shape` if the generator runs out before every matrix is filled.
    pub fn init<P: ParamGen>(config: &Config, mut param_gen: P) -> Result<Self> {
        let [w_hidden, b_hidden, w_out, b_out] = Self::shapes(config);

        Ok(Self {
            w_hidden: draw(&mut param_gen, w_hidden)?,
            b_hidden: draw(&mut param_gen, b_hidden)?,
            w_out: draw(&mut param_gen, w_out)?,
            b_out: draw(&mut param_gen, b_out)?,
        })
    }

    fn shapes(config: &Config) -> [(&'static str, (usize, usize)); 4] {
        let &Config {
            input_size,
            hidden_size,
            output_size,
            ..
        } = config;

        [
            ("hidden weights", (input_size, hidden_size)),
            ("hidden bias", (1, hidden_size)),
            ("output weights", (hidden_size, output_size)),
            ("output bias", (1, output_size)),
        ]
    }

    /// Returns the hidden layer weights.
    pub fn w_hidden(&self) -> &Array2<f64> {
        &self.w_hidden
    }

    /// Returns the hidden layer bias row.
    pub fn b_hidden(&self) -> &Array2<f64> {
        &self.b_hidden
    }

    /// Returns the output layer weights.
    pub fn w_out(&self) -> &Array2<f64> {
        &self.w_out
    }

    /// Returns the output layer bias row.
    pub fn b_out(&self) -> &Array2<f64> {
        &self.b_out
    }

    /// Whether every parameter is a finite number.
    pub fn is_finite(&self) -> bool {
        [&self.w_hidden, &self.b_hidden, &self.w_out, &self.b_out]
            .iter()
            .all(|m| m.iter().all(|v| v.is_finite()))
    }
}

/// Fills a matrix of the given shape with the next values of `param_gen`.
fn draw<P: ParamGen>(
    param_gen: &mut P,
    (what, shape): (&'static str, (usize, usize)),
) -> Result<Array2<f64>> {
    let n = shape.0 * shape.1;
    let sample = param_gen.sample(n).unwrap_or_default();

    if sample.len() != n {
        return Err(AnnErr::Shape {
            what,
            got: sample.len(),
            expected: n,
        });
    }

    Array2::from_shape_vec(shape, sample).map_err(|e| AnnErr::Format(e.to_string()))
}
