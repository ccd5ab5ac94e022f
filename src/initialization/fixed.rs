use std::vec;

use super::ParamGen;
use crate::network::Params;

/// Replays a fixed sequence of parameter values, in order, until it runs out.
///
/// Built from a trained network's [`Params`] it lets a new training pick up where the previous
/// one stopped.
#[derive(Debug, Clone)]
pub struct FixedParamGen {
    values: vec::IntoIter<f64>,
}

impl FixedParamGen {
    pub fn new(values: Vec<f64>) -> Self {
        Self {
            values: values.into_iter(),
        }
    }

    /// `n` copies of `value`.
    pub fn constant(value: f64, n: usize) -> Self {
        Self::new(vec![value; n])
    }

    /// The values of `params` in the order [`Params::init`] draws them.
    pub fn from_params(params: &Params) -> Self {
        let values = [
            params.w_hidden(),
            params.b_hidden(),
            params.w_out(),
            params.b_out(),
        ]
        .into_iter()
        .flat_map(|m| m.iter().copied())
        .collect();

        Self::new(values)
    }
}

impl ParamGen for FixedParamGen {
    fn sample(&mut self, n: usize) -> Option<Vec<f64>> {
        if self.values.len() == 0 {
            return None;
        }

        Some(self.values.by_ref().take(n).collect())
    }
}
