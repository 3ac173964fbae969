//! Type I and Type II feedback mechanisms.

use rand::Rng;

use crate::Clause;

/// # Overview
///
/// Type I feedback: combats false negatives.
///
/// When the clause did not fire, every automaton decays toward
/// exclusion with probability 1/s, generalizing an overly specific
/// clause. When it fired, literals matching the input strengthen with
/// probability (s-1)/s (unconditionally when `boost` is set) while the
/// opposing literals decay with probability 1/s.
pub fn type_i<R: Rng>(clause: &mut Clause, x: &[u8], fired: bool, s: f32, boost: bool, rng: &mut R) {
    let prob_strengthen = (s - 1.0) / s;
    let prob_weaken = 1.0 / s;
    let automata = clause.automata_mut();

    if !fired {
        for a in automata.iter_mut() {
            if rng.random::<f32>() <= prob_weaken {
                a.decrement();
            }
        }
        return;
    }

    for (k, &xk) in x.iter().enumerate() {
        if xk == 1 {
            if boost || rng.random::<f32>() <= prob_strengthen {
                automata[2 * k].increment();
            }
            if rng.random::<f32>() <= prob_weaken {
                automata[2 * k + 1].decrement();
            }
        } else {
            if boost || rng.random::<f32>() <= prob_strengthen {
                automata[2 * k + 1].increment();
            }
            if rng.random::<f32>() <= prob_weaken {
                automata[2 * k].decrement();
            }
        }
    }
}

/// # Overview
///
/// Type II feedback: combats false positives.
///
/// For a firing clause, pushes toward inclusion the currently-excluded
/// literal that would have blocked the clause on this input: the plain
/// literal where x_k is 0, the negated literal where x_k is 1. Callers
/// apply this only to clauses that fired.
pub fn type_ii(clause: &mut Clause, x: &[u8]) {
    let automata = clause.automata_mut();

    for (k, &xk) in x.iter().enumerate() {
        if xk == 0 {
            if !automata[2 * k].action() {
                automata[2 * k].increment();
            }
        } else if !automata[2 * k + 1].action() {
            automata[2 * k + 1].increment();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Polarity, utils::rng_from_seed};

    fn fresh_clause(n_features: usize, n_states: i16) -> Clause {
        let mut rng = rng_from_seed(42);
        Clause::new(n_features, n_states, Polarity::Positive, &mut rng)
    }

    #[test]
    fn type_i_not_firing_decays() {
        let mut clause = fresh_clause(3, 100);
        let mut rng = rng_from_seed(42);

        for _ in 0..100 {
            type_i(&mut clause, &[1, 0, 1], false, 3.0, false, &mut rng);
        }

        assert!(clause.automata().iter().all(|a| a.state() <= 101));
        assert!(clause.automata().iter().any(|a| a.state() < 100));
    }

    #[test]
    fn type_i_firing_strengthens_matching() {
        let mut clause = fresh_clause(3, 50);
        let mut rng = rng_from_seed(42);

        for _ in 0..200 {
            type_i(&mut clause, &[1, 0, 1], true, 3.0, false, &mut rng);
        }

        // x = [1, 0, 1]: plain literals 0 and 2, negated literal 1.
        assert!(clause.automata()[0].action());
        assert!(clause.automata()[3].action());
        assert!(clause.automata()[4].action());
        assert!(!clause.automata()[1].action());
    }

    #[test]
    fn type_i_boost_is_deterministic() {
        let mut clause = fresh_clause(2, 50);
        let mut rng = rng_from_seed(42);
        let before: Vec<i16> = clause.automata().iter().map(|a| a.state()).collect();

        type_i(&mut clause, &[1, 0], true, 1.01, true, &mut rng);

        // With s this close to 1, (s-1)/s is below 1%; boost still
        // advances the matching literals unconditionally.
        assert_eq!(clause.automata()[0].state(), before[0] + 1);
        assert_eq!(clause.automata()[3].state(), before[3] + 1);
    }

    #[test]
    fn type_ii_blocks() {
        let mut clause = fresh_clause(3, 50);

        for _ in 0..100 {
            type_ii(&mut clause, &[1, 0, 1]);
        }

        assert!(clause.automata()[1].action());
        assert!(clause.automata()[2].action());
        assert!(clause.automata()[5].action());
    }

    #[test]
    fn type_ii_never_promotes_active_literals() {
        let mut clause = fresh_clause(2, 50);
        let before: Vec<i16> = clause.automata().iter().map(|a| a.state()).collect();

        type_ii(&mut clause, &[1, 1]);

        // Plain automata are untouched when x_k is 1; included negated
        // automata are already past the boundary and stay where they are.
        for (i, a) in clause.automata().iter().enumerate() {
            if i % 2 == 0 {
                assert_eq!(a.state(), before[i]);
            } else if before[i] > 50 {
                assert_eq!(a.state(), before[i]);
            } else {
                assert_eq!(a.state(), before[i] + 1);
            }
        }
    }
}
