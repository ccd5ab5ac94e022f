use serde::{Deserialize, Serialize};

use crate::{AnnErr, Result};

/// The hyperparameters of a network plus the accuracy of its last evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Config {
    pub input_size: usize,
    pub hidden_size: usize,
    pub output_size: usize,
    pub epochs: usize,
    pub rate: f64,
    /// Written by every evaluation, `0` until the first one.
    #[serde(default)]
    pub accuracy: f64,
    /// Seeds the parameter initialization, `None` draws a fresh seed from the OS.
    #[serde(default)]
    pub seed: Option<u64>,
}

impl Config {
    /// Creates a new unseeded `Config`.
    ///
    /// # Arguments
    /// * `input_size` - The amount of input features.
    /// * `hidden_size` - The amount of hidden units.
    /// * `output_size` - The amount of output classes.
    /// * `epochs` - The amount of full batch gradient steps taken by a training.
    /// * `rate` - The learning rate.
    ///
    /// # Errors
    /// `AnnErr::InvalidConfig` if a size or the epoch count is zero or the rate isn't a
    /// positive finite number.
    pub fn new(
        input_size: usize,
        hidden_size: usize,
        output_size: usize,
        epochs: usize,
        rate: f64,
    ) -> Result<Self> {
        let config = Self {
            input_size,
            hidden_size,
            output_size,
            epochs,
            rate,
            accuracy: 0.,
            seed: None,
        };

        config.validate()?;
        Ok(config)
    }

    /// Returns the same configuration with a fixed initialization seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Checks the invariants a configuration must hold, useful after deserializing one.
    pub fn validate(&self) -> Result<()> {
        let sizes = [
            ("input_size", self.input_size),
            ("hidden_size", self.hidden_size),
            ("output_size", self.output_size),
            ("epochs", self.epochs),
        ];

        if let Some((name, _)) = sizes.iter().find(|(_, v)| *v == 0) {
            return Err(AnnErr::InvalidConfig(format!("{name} must be greater than 0")));
        }

        if !(self.rate.is_finite() && self.rate > 0.) {
            return Err(AnnErr::InvalidConfig(format!(
                "rate must be a positive number, got {}",
                self.rate
            )));
        }

        Ok(())
    }

    /// Returns the amount of scalar parameters a network with this configuration has.
    pub fn num_params(&self) -> usize {
        (self.input_size + 1) * self.hidden_size + (self.hidden_size + 1) * self.output_size
    }
}
