use std::{
    fs,
    path::{Path, PathBuf},
};

use serde::{Deserialize, Serialize};

use crate::{
    Result,
    activations::{ActFn, Identity, Relu, Sigmoid},
    network::{Ann, Config},
    selection::{self, DEFAULT_CANDIDATES},
};

/// The activation pair a run trains with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActFnKind {
    Relu,
    Sigmoid,
    Identity,
}

/// Everything a best-of-N run needs, usually read from a json file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunConfig {
    pub config: Config,
    pub activation: ActFnKind,
    pub train: PathBuf,
    pub test: PathBuf,
    #[serde(default = "default_candidates")]
    pub candidates: usize,
    /// Where to save the winning network, see [`Ann::save_json`].
    #[serde(default)]
    pub output: Option<PathBuf>,
}

fn default_candidates() -> usize {
    DEFAULT_CANDIDATES
}

impl RunConfig {
    /// Reads a `RunConfig` from a json file.
    ///
    /// # Errors
    /// `AnnErr::Io` if the file can't be read, `AnnErr::Format` if it isn't a valid run
    /// configuration and `AnnErr::InvalidConfig` if the network configuration breaks its
    /// invariants.
    pub fn from_json<P: AsRef<Path>>(path: P) -> Result<Self> {
        let run: Self = serde_json::from_slice(&fs::read(path)?)?;
        run.config.validate()?;
        Ok(run)
    }

    /// Selects the best of `candidates` networks and saves it to `output` if there is one.
    ///
    /// # Returns
    /// The winning network's accuracy.
    ///
    /// # Errors
    /// Any error produced by the selection or while saving the winner.
    pub fn execute(&self) -> Result<f64> {
        match self.activation {
            ActFnKind::Relu => self.select(Relu),
            ActFnKind::Sigmoid => self.select(Sigmoid::default()),
            ActFnKind::Identity => self.select(Identity),
        }
    }

    fn select<A: ActFn + Clone>(&self, act_fn: A) -> Result<f64> {
        let ann: Ann<A> =
            selection::select_best(self.config, act_fn, &self.train, &self.test, self.candidates)?;

        if let Some(output) = &self.output {
            ann.save_json(output)?;
        }

        Ok(ann.config().accuracy)
    }
}
