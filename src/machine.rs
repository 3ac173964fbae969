//! Single-class Tsetlin Machine: clause bank, vote aggregation, and
//! stochastic feedback dispatch.

#[cfg(not(feature = "std"))]
use alloc::{vec, vec::Vec};

use rand::Rng;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{
    Clause, Config, EvalMode, Polarity,
    error::{Error, Result},
    feedback::{type_i, type_ii},
    utils::rng_from_seed
};

/// # Overview
///
/// A single-class Tsetlin Machine.
///
/// Owns one clause per configured slot (even indices vote for the
/// class, odd indices against it) and two scratch buffers reused by
/// [`update`](Self::update). The buffers make concurrent `update`
/// calls on the same machine unsound; `&mut self` enforces that.
/// [`score`](Self::score) takes `&self` and never mutates.
///
/// # Examples
///
/// ```
/// use tsetlin_machine::{Config, TsetlinMachine, utils::rng_from_seed};
///
/// let config = Config::builder().clauses(10).features(3).build().unwrap();
/// let mut tm = TsetlinMachine::with_seed(config, 42).unwrap();
///
/// let mut rng = rng_from_seed(42);
/// tm.update(&[1, 0, 1], true, 3.9, &mut rng).unwrap();
///
/// let votes = tm.score(&[1, 0, 1]).unwrap();
/// assert!(votes.abs() <= config.threshold);
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TsetlinMachine {
    clauses:  Vec<Clause>,
    config:   Config,
    outputs:  Vec<u8>,
    feedback: Vec<i8>
}

impl TsetlinMachine {
    /// # Overview
    ///
    /// Creates a machine, validating the configuration and seeding
    /// every automata pair near the include/exclude boundary from
    /// `rng`.
    pub fn new<R: Rng>(config: Config, rng: &mut R) -> Result<Self> {
        config.validate()?;
        Ok(Self::from_validated(config, rng))
    }

    /// # Overview
    ///
    /// Creates a machine seeded from a u64 value.
    pub fn with_seed(config: Config, seed: u64) -> Result<Self> {
        Self::new(config, &mut rng_from_seed(seed))
    }

    pub(crate) fn from_validated<R: Rng>(config: Config, rng: &mut R) -> Self {
        let clauses = (0..config.n_clauses)
            .map(|j| Clause::new(config.n_features, config.n_states, Polarity::from_index(j), rng))
            .collect();

        Self {
            clauses,
            config,
            outputs: vec![0; config.n_clauses],
            feedback: vec![0; config.n_clauses]
        }
    }

    #[inline]
    pub fn config(&self) -> &Config {
        &self.config
    }

    #[inline]
    pub fn clauses(&self) -> &[Clause] {
        &self.clauses
    }

    /// # Overview
    ///
    /// State of one automaton, indexed by clause, feature, and literal
    /// kind (`negated = false` for x_k, `true` for NOT x_k). Intended
    /// for inspection and testing.
    pub fn automaton_state(&self, clause: usize, feature: usize, negated: bool) -> Option<i16> {
        let c = self.clauses.get(clause)?;
        if feature >= c.n_features() {
            return None;
        }
        Some(c.automata()[2 * feature + usize::from(negated)].state())
    }

    /// # Overview
    ///
    /// Clamped vote sum for `x` in predict mode. Read-only: repeated
    /// calls without an intervening `update` return the same value.
    pub fn score(&self, x: &[u8]) -> Result<i32> {
        self.check_input(x)?;

        let sum: i32 = self.clauses.iter().map(|c| c.vote(x, EvalMode::Predict)).sum();
        Ok(sum.clamp(-self.config.threshold, self.config.threshold))
    }

    /// # Overview
    ///
    /// One online training step.
    ///
    /// Computes train-mode clause outputs, sums votes, then draws a
    /// ternary feedback decision per clause: with probability
    /// `(T + (1 - 2*target)*class_sum) / 2T` the clause receives
    /// feedback signed by `(2*target - 1) * polarity`. Positive
    /// feedback applies Type I, negative feedback applies Type II to
    /// firing clauses, zero leaves the clause untouched. The closer
    /// `class_sum` already is to the target side of the threshold, the
    /// rarer feedback becomes.
    pub fn update<R: Rng>(&mut self, x: &[u8], target: bool, s: f32, rng: &mut R) -> Result<()> {
        self.check_input(x)?;
        if !(s > 1.0) {
            return Err(Error::InvalidSpecificity);
        }

        for (output, clause) in self.outputs.iter_mut().zip(&self.clauses) {
            *output = u8::from(clause.evaluate(x, EvalMode::Train));
        }

        let class_sum = self.clamped_vote_sum();
        let t = self.config.threshold as f32;
        let away = if target { -1.0 } else { 1.0 };
        let probability = (t + away * class_sum as f32) / (2.0 * t);
        let direction: i8 = if target { 1 } else { -1 };

        for (fb, clause) in self.feedback.iter_mut().zip(&self.clauses) {
            *fb = if rng.random::<f32>() <= probability {
                direction * clause.polarity().sign() as i8
            } else {
                0
            };
        }

        let boost = self.config.boost_true_positive;
        for j in 0..self.clauses.len() {
            let fired = self.outputs[j] == 1;
            match self.feedback[j] {
                1 => type_i(&mut self.clauses[j], x, fired, s, boost, rng),
                -1 if fired => type_ii(&mut self.clauses[j], x),
                _ => {}
            }
        }

        Ok(())
    }

    fn clamped_vote_sum(&self) -> i32 {
        let sum: i32 = self
            .outputs
            .iter()
            .zip(&self.clauses)
            .map(|(&output, clause)| i32::from(output) * clause.polarity().sign())
            .sum();
        sum.clamp(-self.config.threshold, self.config.threshold)
    }

    fn check_input(&self, x: &[u8]) -> Result<()> {
        if x.len() != self.config.n_features {
            return Err(Error::DimensionMismatch {
                expected: self.config.n_features,
                got:      x.len()
            });
        }
        Ok(())
    }
}
