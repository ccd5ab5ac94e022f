//! A feed-forward network with a single hidden layer, trained by full batch gradient descent
//! on csv datasets and persisted through pluggable repositories.

pub mod activations;
pub mod dataset;
pub mod error;
pub mod evaluation;
pub mod initialization;
pub mod matrix;
pub mod network;
pub mod run;
pub mod selection;
pub mod storage;
mod training;

pub use error::{AnnErr, Result};
pub use network::{Ann, Config, Params};
pub use selection::{select_best, select_best_on};
