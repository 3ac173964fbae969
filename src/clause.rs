//! Clause - a conjunction of literals, one automata pair per feature.

#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

use rand::Rng;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::Automaton;

/// # Overview
///
/// Voting direction of a clause, fixed at construction.
///
/// Clauses at even indices gather evidence for the class, clauses at
/// odd indices gather evidence against it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Polarity {
    Positive,
    Negative
}

impl Polarity {
    /// # Overview
    ///
    /// Polarity for the clause at index `j`: even is positive.
    #[inline]
    pub fn from_index(j: usize) -> Self {
        if j % 2 == 0 { Self::Positive } else { Self::Negative }
    }

    /// # Overview
    ///
    /// Vote contribution of a firing clause: +1 or -1.
    #[inline]
    pub fn sign(self) -> i32 {
        match self {
            Self::Positive => 1,
            Self::Negative => -1
        }
    }
}

/// # Overview
///
/// Evaluation mode for clause output.
///
/// In `Predict` mode a clause with no included literals outputs 0 so it
/// cannot vote. In `Train` mode such a clause outputs 1, keeping it
/// reachable for feedback.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EvalMode {
    Train,
    Predict
}

/// # Overview
///
/// A clause with 2*n_features automata.
/// Cache-aligned for better performance.
///
/// - automata[2*k] controls literal x_k
/// - automata[2*k+1] controls literal NOT x_k
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[repr(align(64))]
pub struct Clause {
    automata:   Vec<Automaton>,
    polarity:   Polarity,
    n_features: usize
}

impl Clause {
    /// # Overview
    ///
    /// Creates a clause with every automata pair seeded at the
    /// include/exclude boundary: one side of each pair starts one step
    /// into the include region, the other just below it, chosen with
    /// probability 0.5 from `rng`.
    pub fn new<R: Rng>(n_features: usize, n_states: i16, polarity: Polarity, rng: &mut R) -> Self {
        let mut automata = Vec::with_capacity(2 * n_features);

        for _ in 0..n_features {
            if rng.random::<f32>() < 0.5 {
                automata.push(Automaton::included(n_states));
                automata.push(Automaton::new(n_states));
            } else {
                automata.push(Automaton::new(n_states));
                automata.push(Automaton::included(n_states));
            }
        }

        Self {
            automata,
            polarity,
            n_features
        }
    }

    #[inline(always)]
    pub fn polarity(&self) -> Polarity {
        self.polarity
    }

    #[inline(always)]
    pub fn n_features(&self) -> usize {
        self.n_features
    }

    #[inline(always)]
    pub fn automata(&self) -> &[Automaton] {
        &self.automata
    }

    #[inline(always)]
    pub fn automata_mut(&mut self) -> &mut [Automaton] {
        &mut self.automata
    }

    /// # Overview
    ///
    /// Evaluates the clause on binary input. Early exit on the first
    /// violated literal; in `Predict` mode a clause with no included
    /// literals at all outputs false.
    #[inline]
    pub fn evaluate(&self, x: &[u8], mode: EvalMode) -> bool {
        let automata = &self.automata;
        let n = self.n_features.min(x.len());
        let mut all_exclude = true;

        for k in 0..n {
            let include = unsafe { automata.get_unchecked(2 * k).action() };
            let negated = unsafe { automata.get_unchecked(2 * k + 1).action() };
            let xk = unsafe { *x.get_unchecked(k) };

            all_exclude = all_exclude && !(include || negated);

            if (include && xk == 0) || (negated && xk == 1) {
                return false;
            }
        }

        !(mode == EvalMode::Predict && all_exclude)
    }

    /// # Overview
    ///
    /// Returns the signed polarity if the clause fires, 0 otherwise.
    #[inline(always)]
    pub fn vote(&self, x: &[u8], mode: EvalMode) -> i32 {
        if self.evaluate(x, mode) { self.polarity.sign() } else { 0 }
    }
}
