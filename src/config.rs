//! Configuration and builder for Tsetlin Machine.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// # Overview
///
/// Construction-time parameters for a single-class Tsetlin Machine.
///
/// The specificity parameter `s` is not part of the configuration: it
/// is supplied per training call, so the same machine can be driven
/// with different specificity over its lifetime.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[must_use]
pub struct Config {
    pub n_clauses:           usize,
    pub n_features:          usize,
    pub n_states:            i16,
    pub threshold:           i32,
    pub boost_true_positive: bool
}

impl Config {
    /// # Overview
    ///
    /// Creates a new ConfigBuilder.
    #[inline]
    #[must_use]
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }

    /// # Overview
    ///
    /// Validates configuration parameters.
    pub fn validate(&self) -> Result<()> {
        if self.n_clauses == 0 {
            return Err(Error::MissingClauses);
        }
        if self.n_features == 0 {
            return Err(Error::MissingFeatures);
        }
        if self.n_states < 1 {
            return Err(Error::InvalidStates);
        }
        if self.threshold < 1 {
            return Err(Error::InvalidThreshold);
        }
        Ok(())
    }
}

/// # Overview
///
/// Builder for Config with validation.
#[derive(Debug, Default)]
pub struct ConfigBuilder {
    n_clauses:           Option<usize>,
    n_features:          Option<usize>,
    n_states:            Option<i16>,
    threshold:           Option<i32>,
    boost_true_positive: bool
}

impl ConfigBuilder {
    /// # Overview
    ///
    /// Sets the number of clauses.
    pub fn clauses(mut self, n: usize) -> Self {
        self.n_clauses = Some(n);
        self
    }

    /// # Overview
    ///
    /// Sets the number of input features.
    pub fn features(mut self, n: usize) -> Self {
        self.n_features = Some(n);
        self
    }

    /// # Overview
    ///
    /// Sets states per automaton action (default: 100).
    pub fn states(mut self, n: i16) -> Self {
        self.n_states = Some(n);
        self
    }

    /// # Overview
    ///
    /// Sets the vote clamping threshold (default: 15).
    pub fn threshold(mut self, t: i32) -> Self {
        self.threshold = Some(t);
        self
    }

    /// # Overview
    ///
    /// Makes Type I strengthening deterministic for matching literals
    /// of a firing clause (default: off).
    pub fn boost_true_positive(mut self, boost: bool) -> Self {
        self.boost_true_positive = boost;
        self
    }

    /// # Overview
    ///
    /// Builds and validates the Config.
    pub fn build(self) -> Result<Config> {
        let config = Config {
            n_clauses:           self.n_clauses.ok_or(Error::MissingClauses)?,
            n_features:          self.n_features.ok_or(Error::MissingFeatures)?,
            n_states:            self.n_states.unwrap_or(100),
            threshold:           self.threshold.unwrap_or(15),
            boost_true_positive: self.boost_true_positive
        };
        config.validate()?;
        Ok(config)
    }
}
