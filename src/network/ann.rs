use std::path::Path;

use log::info;
use ndarray::{Array2, ArrayView2};
use rand::{SeedableRng, rngs::StdRng};
use uuid::Uuid;

use super::{Config, Params};
use crate::{
    AnnErr, Result,
    activations::ActFn,
    dataset::Dataset,
    evaluation,
    initialization::{ParamGen, RandParamGen},
    training,
};

/// A feed-forward network with a single hidden layer.
///
/// The network holds no parameters until it gets trained (or loaded), every training replaces
/// the four parameter matrices at once after its last epoch.
#[derive(Debug, Clone)]
pub struct Ann<A: ActFn> {
    pub(crate) config: Config,
    pub(crate) act_fn: A,
    pub(crate) params: Option<Params>,
    pub(crate) record_id: Uuid,
}

impl<A: ActFn> Ann<A> {
    /// Creates a new untrained `Ann`.
    ///
    /// # Arguments
    /// * `config` - The network's hyperparameters.
    /// * `act_fn` - The activation used by both layers and its derivative.
    ///
    /// # Returns
    /// A new `Ann` instance.
    pub fn new(config: Config, act_fn: A) -> Self {
        Self {
            config,
            act_fn,
            params: None,
            record_id: Uuid::nil(),
        }
    }

    /// Trains the network with the samples of a csv file, see [`Dataset::from_csv`].
    ///
    /// # Errors
    /// Any error produced while loading the dataset.
    pub fn train<P: AsRef<Path>>(&mut self, path: P) -> Result<()> {
        let dataset = self.read_dataset(path)?;
        self.train_on(&dataset)
    }

    /// Trains the network starting from uniform random parameters in `[0, 1)`.
    ///
    /// The generator is seeded with `config.seed`, or by the OS when there is none.
    ///
    /// # Errors
    /// `AnnErr::Shape` if the dataset's widths don't match the configuration.
    pub fn train_on(&mut self, dataset: &Dataset) -> Result<()> {
        let rng = match self.config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };

        let param_gen = RandParamGen::unit(rng, self.config.num_params())?;
        self.train_with(dataset, param_gen)
    }

    /// Trains the network starting from the parameters drawn out of `param_gen`.
    ///
    /// Passing [`FixedParamGen::from_params`](crate::initialization::FixedParamGen::from_params)
    /// with the current parameters continues the previous training.
    ///
    /// # Errors
    /// `AnnErr::Shape` if the dataset's widths don't match the configuration or the generator
    /// runs out of parameters.
    pub fn train_with<P: ParamGen>(&mut self, dataset: &Dataset, param_gen: P) -> Result<()> {
        self.check_width("input columns", dataset.inputs().ncols(), self.config.input_size)?;
        self.check_width("target columns", dataset.targets().ncols(), self.config.output_size)?;

        let Config {
            input_size,
            hidden_size,
            output_size,
            epochs,
            rate,
            ..
        } = self.config;
        info!(
            "training a {input_size}-{hidden_size}-{output_size} network on {} samples: \
             epochs={epochs} rate={rate}",
            dataset.len()
        );

        let initial = Params::init(&self.config, param_gen)?;
        let params = training::backpropagate(
            &self.config,
            &self.act_fn,
            dataset.inputs().view(),
            dataset.targets().view(),
            initial,
        )?;

        self.params = Some(params);
        Ok(())
    }

    /// Runs the network over the inputs of a csv file, its target columns are ignored.
    ///
    /// # Returns
    /// The activated output, one row per sample and one column per class.
    ///
    /// # Errors
    /// `AnnErr::UntrainedModel` before the network is trained, otherwise any error produced
    /// while loading the dataset.
    pub fn predict<P: AsRef<Path>>(&self, path: P) -> Result<Array2<f64>> {
        if self.params.is_none() {
            return Err(AnnErr::UntrainedModel);
        }

        let (inputs, _) = self.read_dataset(path)?.into_parts();
        self.predict_inputs(inputs.view())
    }

    /// Runs the network over an input matrix.
    ///
    /// # Errors
    /// `AnnErr::UntrainedModel` before the network is trained and `AnnErr::Shape` if the
    /// inputs' width doesn't match the configuration.
    pub fn predict_inputs(&self, inputs: ArrayView2<f64>) -> Result<Array2<f64>> {
        let params = self.params.as_ref().ok_or(AnnErr::UntrainedModel)?;
        self.check_width("input columns", inputs.ncols(), self.config.input_size)?;

        let (_, output) = training::forward(&self.act_fn, inputs, params);
        Ok(output)
    }

    /// Measures the network's accuracy over the samples of a csv file and stores it in the
    /// configuration.
    ///
    /// # Errors
    /// `AnnErr::UntrainedModel` before the network is trained, otherwise any error produced
    /// while loading the dataset.
    pub fn test<P: AsRef<Path>>(&mut self, path: P) -> Result<f64> {
        if self.params.is_none() {
            return Err(AnnErr::UntrainedModel);
        }

        let dataset = self.read_dataset(path)?;
        self.evaluate(&dataset)
    }

    /// Measures the network's accuracy over a dataset and stores it in the configuration, see
    /// [`evaluation::accuracy`].
    ///
    /// # Errors
    /// `AnnErr::UntrainedModel` before the network is trained and `AnnErr::Shape` if the
    /// dataset's widths don't match the configuration.
    pub fn evaluate(&mut self, dataset: &Dataset) -> Result<f64> {
        let predictions = self.predict_inputs(dataset.inputs().view())?;
        let accuracy = evaluation::accuracy(predictions.view(), dataset.targets().view())?;

        info!("accuracy over {} samples: {accuracy}", dataset.len());
        self.config.accuracy = accuracy;
        Ok(accuracy)
    }

    /// Returns the network's configuration, its accuracy included.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Returns the activation pair.
    pub fn act_fn(&self) -> &A {
        &self.act_fn
    }

    /// Returns the network's parameters, `None` until it's trained.
    pub fn params(&self) -> Option<&Params> {
        self.params.as_ref()
    }

    pub fn is_trained(&self) -> bool {
        self.params.is_some()
    }

    /// Returns the hidden layer weights, `None` until it's trained.
    pub fn w_hidden(&self) -> Option<&Array2<f64>> {
        self.params().map(Params::w_hidden)
    }

    /// Returns the hidden layer bias, `None` until it's trained.
    pub fn b_hidden(&self) -> Option<&Array2<f64>> {
        self.params().map(Params::b_hidden)
    }

    /// Returns the output layer weights, `None` until it's trained.
    pub fn w_out(&self) -> Option<&Array2<f64>> {
        self.params().map(Params::w_out)
    }

    /// Returns the output layer bias, `None` until it's trained.
    pub fn b_out(&self) -> Option<&Array2<f64>> {
        self.params().map(Params::b_out)
    }

    /// Returns the id of the record this network was last stored to or loaded from, nil if
    /// there is none.
    pub fn record_id(&self) -> Uuid {
        self.record_id
    }

    fn read_dataset<P: AsRef<Path>>(&self, path: P) -> Result<Dataset> {
        let Config {
            input_size,
            output_size,
            ..
        } = self.config;

        Dataset::from_csv(path, input_size, input_size, output_size)
    }

    fn check_width(&self, what: &'static str, got: usize, expected: usize) -> Result<()> {
        if got != expected {
            return Err(AnnErr::Shape {
                what,
                got,
                expected,
            });
        }

        Ok(())
    }
}
