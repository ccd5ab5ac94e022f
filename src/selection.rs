use std::path::Path;

use log::{debug, info};

use crate::{
    AnnErr, Result,
    activations::ActFn,
    dataset::Dataset,
    network::{Ann, Config},
};

/// The amount of candidates trained when the caller has no preference.
pub const DEFAULT_CANDIDATES: usize = 5;

/// Anything that can be ranked by its accuracy.
pub trait Scored {
    fn accuracy(&self) -> f64;
}

impl<A: ActFn> Scored for Ann<A> {
    fn accuracy(&self) -> f64 {
        self.config().accuracy
    }
}

/// Builds `n` candidates one after the other and keeps the most accurate.
///
/// The first candidate starts as the best and is only replaced by a later one with a strictly
/// greater accuracy, so ties keep the earliest.
///
/// # Arguments
/// * `n` - The amount of candidates.
/// * `candidate` - Builds the i-th candidate.
///
/// # Errors
/// `AnnErr::InvalidConfig` if `n` is zero, otherwise the first error returned by `candidate`,
/// in which case no further candidates are built.
pub fn select_best_by<C, F>(n: usize, mut candidate: F) -> Result<C>
where
    C: Scored,
    F: FnMut(usize) -> Result<C>,
{
    if n == 0 {
        return Err(AnnErr::InvalidConfig("at least one candidate is needed".into()));
    }

    let mut best = candidate(0)?;
    let mut best_idx = 0;
    debug!("candidate 0: accuracy={}", best.accuracy());

    for i in 1..n {
        let next = candidate(i)?;
        debug!("candidate {i}: accuracy={}", next.accuracy());

        if next.accuracy() > best.accuracy() {
            best = next;
            best_idx = i;
        }
    }

    info!("selected candidate {best_idx} of {n}: accuracy={}", best.accuracy());
    Ok(best)
}

/// Trains `n` independently initialized networks with the samples of `train`, tests each one
/// with the samples of `test` and returns the most accurate, see [`select_best_by`].
///
/// Both files are loaded again for every candidate. With a seeded configuration the i-th
/// candidate is seeded with `seed + i`.
///
/// # Errors
/// The first training or testing error, see [`Ann::train`] and [`Ann::test`].
pub fn select_best<A, P, Q>(
    config: Config,
    act_fn: A,
    train: P,
    test: Q,
    n: usize,
) -> Result<Ann<A>>
where
    A: ActFn + Clone,
    P: AsRef<Path>,
    Q: AsRef<Path>,
{
    select_best_by(n, |i| {
        let mut ann = Ann::new(candidate_config(config, i), act_fn.clone());
        ann.train(&train)?;
        ann.test(&test)?;
        Ok(ann)
    })
}

/// Same as [`select_best`] over datasets that are already loaded.
pub fn select_best_on<A>(
    config: Config,
    act_fn: A,
    train: &Dataset,
    test: &Dataset,
    n: usize,
) -> Result<Ann<A>>
where
    A: ActFn + Clone,
{
    select_best_by(n, |i| {
        let mut ann = Ann::new(candidate_config(config, i), act_fn.clone());
        ann.train_on(train)?;
        ann.evaluate(test)?;
        Ok(ann)
    })
}

fn candidate_config(mut config: Config, i: usize) -> Config {
    config.accuracy = 0.;
    config.seed = config.seed.map(|seed| seed.wrapping_add(i as u64));
    config
}
