//! Multi-class ensemble: one machine per class, pairwise training.

#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

use rand::Rng;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{
    Config, TsetlinMachine,
    error::{Error, Result},
    training::{EarlyStopTracker, FitOptions, FitResult},
    utils::{rng_from_seed, shuffle}
};

/// # Overview
///
/// Multi-class Tsetlin Machine.
///
/// Holds one independent single-class machine per label. Training is
/// pairwise: each example strengthens the machine of its own class and
/// weakens the machine of one other class drawn uniformly at random,
/// so an update touches exactly two machines no matter how many
/// classes exist. Prediction scores every machine and takes the
/// argmax, resolving ties toward the lowest class index.
///
/// # Examples
///
/// ```
/// use tsetlin_machine::{Config, MultiClass};
///
/// let config = Config::builder().clauses(10).features(2).build().unwrap();
/// let mut tm = MultiClass::with_seed(config, 2, 42).unwrap();
///
/// let x = vec![vec![0, 0], vec![0, 1], vec![1, 0], vec![1, 1]];
/// let y = vec![0, 1, 1, 0];
///
/// tm.fit(&x, &y, 200, 3.9, 42).unwrap();
/// assert!(tm.evaluate(&x, &y).unwrap() >= 0.5);
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct MultiClass {
    machines: Vec<TsetlinMachine>,
    config:   Config
}

impl MultiClass {
    /// # Overview
    ///
    /// Creates an ensemble of `n_classes` machines. At least two
    /// classes are required: pairwise training needs a distinct
    /// negative class to sample.
    pub fn new<R: Rng>(config: Config, n_classes: usize, rng: &mut R) -> Result<Self> {
        if n_classes < 2 {
            return Err(Error::TooFewClasses {
                got: n_classes
            });
        }
        config.validate()?;

        let machines = (0..n_classes)
            .map(|_| TsetlinMachine::from_validated(config, rng))
            .collect();

        Ok(Self {
            machines,
            config
        })
    }

    /// # Overview
    ///
    /// Creates an ensemble seeded from a u64 value.
    pub fn with_seed(config: Config, n_classes: usize, seed: u64) -> Result<Self> {
        Self::new(config, n_classes, &mut rng_from_seed(seed))
    }

    /// # Overview
    ///
    /// Discards all learned state, re-creating every machine from the
    /// stored configuration with fresh random automata.
    pub fn reset<R: Rng>(&mut self, rng: &mut R) {
        for machine in &mut self.machines {
            *machine = TsetlinMachine::from_validated(self.config, rng);
        }
    }

    #[inline]
    pub fn n_classes(&self) -> usize {
        self.machines.len()
    }

    #[inline]
    pub fn config(&self) -> &Config {
        &self.config
    }

    #[inline]
    pub fn machines(&self) -> &[TsetlinMachine] {
        &self.machines
    }

    /// # Overview
    ///
    /// Clamped vote sum of every per-class machine for `x`.
    pub fn class_votes(&self, x: &[u8]) -> Result<Vec<i32>> {
        self.machines.iter().map(|m| m.score(x)).collect()
    }

    /// # Overview
    ///
    /// Predicts the class with the highest vote sum. Ties go to the
    /// lowest class index.
    pub fn predict(&self, x: &[u8]) -> Result<usize> {
        let mut best_class = 0;
        let mut best_sum = self.machines[0].score(x)?;

        for (class, machine) in self.machines.iter().enumerate().skip(1) {
            let sum = machine.score(x)?;
            if sum > best_sum {
                best_sum = sum;
                best_class = class;
            }
        }

        Ok(best_class)
    }

    /// # Overview
    ///
    /// One pairwise online training step: a positive update to the
    /// target class's machine, then a negative update to one other
    /// class drawn uniformly at random.
    pub fn update<R: Rng>(
        &mut self,
        x: &[u8],
        target_class: usize,
        s: f32,
        rng: &mut R
    ) -> Result<()> {
        let n_classes = self.machines.len();
        if target_class >= n_classes {
            return Err(Error::LabelOutOfRange {
                label: target_class,
                n_classes
            });
        }

        self.machines[target_class].update(x, true, s, rng)?;

        let mut negative_class = rng.random_range(0..n_classes);
        while negative_class == target_class {
            negative_class = rng.random_range(0..n_classes);
        }

        self.machines[negative_class].update(x, false, s, rng)
    }

    /// # Overview
    ///
    /// Batch training: per epoch, per example in input order, one
    /// pairwise update. Examples are never reordered; use
    /// [`fit_with_options`](Self::fit_with_options) to opt into
    /// shuffling.
    pub fn fit(
        &mut self,
        x: &[Vec<u8>],
        y: &[usize],
        epochs: usize,
        s: f32,
        seed: u64
    ) -> Result<()> {
        self.fit_with_options(x, y, s, FitOptions::new(epochs, seed))
            .map(|_| ())
    }

    /// # Overview
    ///
    /// Batch training with optional shuffling, early stopping, and a
    /// per-epoch progress callback.
    pub fn fit_with_options(
        &mut self,
        x: &[Vec<u8>],
        y: &[usize],
        s: f32,
        mut opts: FitOptions
    ) -> Result<FitResult> {
        if x.is_empty() {
            return Err(Error::EmptyDataset);
        }
        if x.len() != y.len() {
            return Err(Error::SampleCountMismatch {
                inputs: x.len(),
                labels: y.len()
            });
        }

        let mut rng = rng_from_seed(opts.seed);
        let mut indices: Vec<usize> = (0..x.len()).collect();
        let mut tracker = opts.early_stop.as_ref().map(EarlyStopTracker::new);
        let mut stopped = false;
        let mut epochs_run = 0;
        let mut history = Vec::with_capacity(opts.epochs);

        for epoch in 0..opts.epochs {
            if opts.shuffle {
                shuffle(&mut indices, &mut rng);
            }

            for &i in &indices {
                self.update(&x[i], y[i], s, &mut rng)?;
            }

            epochs_run = epoch + 1;
            let accuracy = self.evaluate(x, y)?;
            history.push(accuracy);

            if let Some(ref mut callback) = opts.callback {
                if !callback(epoch + 1, accuracy) {
                    stopped = true;
                    break;
                }
            }

            if let Some(ref mut t) = tracker {
                if t.update(accuracy) {
                    stopped = true;
                    break;
                }
            }
        }

        let final_accuracy = self.evaluate(x, y)?;
        Ok(FitResult::with_history(
            epochs_run,
            final_accuracy,
            stopped,
            history
        ))
    }

    /// # Overview
    ///
    /// Accuracy of argmax prediction over a labeled dataset:
    /// `1 - errors / n`.
    pub fn evaluate(&self, x: &[Vec<u8>], y: &[usize]) -> Result<f32> {
        if x.is_empty() {
            return Err(Error::EmptyDataset);
        }
        if x.len() != y.len() {
            return Err(Error::SampleCountMismatch {
                inputs: x.len(),
                labels: y.len()
            });
        }

        let mut errors = 0usize;
        for (xi, &yi) in x.iter().zip(y) {
            if yi >= self.machines.len() {
                return Err(Error::LabelOutOfRange {
                    label:     yi,
                    n_classes: self.machines.len()
                });
            }
            if self.predict(xi)? != yi {
                errors += 1;
            }
        }

        Ok(1.0 - errors as f32 / x.len() as f32)
    }
}
