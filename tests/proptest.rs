//! Property-based tests for the Tsetlin Machine.

use proptest::prelude::*;
use tsetlin_machine::{
    Automaton, Clause, Config, EvalMode, MultiClass, Polarity, TsetlinMachine,
    utils::rng_from_seed
};

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// Automaton state stays within bounds after any number of operations.
    #[test]
    fn automaton_state_bounds(
        n_states in 10i16..200,
        increments in 0usize..500,
        decrements in 0usize..500
    ) {
        let mut a = Automaton::new(n_states);

        for _ in 0..increments {
            a.increment();
        }
        for _ in 0..decrements {
            a.decrement();
        }

        let state = a.state();
        prop_assert!(state >= 1);
        prop_assert!(state <= 2 * n_states);
    }

    /// Construction seeds exactly one side of every automata pair as included.
    #[test]
    fn clause_seeding_balances_pairs(
        n_features in 1usize..32,
        seed in 0u64..1000
    ) {
        let mut rng = rng_from_seed(seed);
        let clause = Clause::new(n_features, 100, Polarity::Positive, &mut rng);

        for k in 0..n_features {
            let plain = clause.automata()[2 * k];
            let negated = clause.automata()[2 * k + 1];
            prop_assert_ne!(plain.action(), negated.action());
        }
    }

    /// Clause evaluation is deterministic in both modes.
    #[test]
    fn clause_evaluate_deterministic(
        n_features in 1usize..32,
        seed in 0u64..1000,
        input in prop::collection::vec(0u8..=1, 1..32)
    ) {
        let n = n_features.min(input.len());
        let mut rng = rng_from_seed(seed);
        let clause = Clause::new(n, 100, Polarity::Positive, &mut rng);

        for mode in [EvalMode::Train, EvalMode::Predict] {
            let result1 = clause.evaluate(&input[..n], mode);
            let result2 = clause.evaluate(&input[..n], mode);
            prop_assert_eq!(result1, result2);
        }
    }

    /// Score stays clamped to the threshold for any input and seed.
    #[test]
    fn score_within_threshold(
        threshold in 1i32..20,
        seed in 0u64..1000,
        input in prop::collection::vec(0u8..=1, 4)
    ) {
        let config = Config::builder()
            .clauses(30)
            .features(4)
            .threshold(threshold)
            .build()
            .unwrap();
        let tm = TsetlinMachine::with_seed(config, seed).unwrap();

        let score = tm.score(&input).unwrap();
        prop_assert!(score >= -threshold);
        prop_assert!(score <= threshold);
    }

    /// Automaton states stay in range after arbitrary training.
    #[test]
    fn update_preserves_state_bounds(
        n_states in 2i16..50,
        seed in 0u64..1000,
        targets in prop::collection::vec(any::<bool>(), 1..50)
    ) {
        let config = Config::builder()
            .clauses(6)
            .features(3)
            .states(n_states)
            .threshold(5)
            .build()
            .unwrap();
        let mut tm = TsetlinMachine::with_seed(config, seed).unwrap();
        let mut rng = rng_from_seed(seed);

        for (i, &target) in targets.iter().enumerate() {
            let x = [(i % 2) as u8, ((i / 2) % 2) as u8, (i % 3 == 0) as u8];
            tm.update(&x, target, 3.9, &mut rng).unwrap();
        }

        for j in 0..6 {
            for k in 0..3 {
                for negated in [false, true] {
                    let state = tm.automaton_state(j, k, negated).unwrap();
                    prop_assert!(state >= 1);
                    prop_assert!(state <= 2 * n_states);
                }
            }
        }
    }

    /// Prediction always lands in the configured class range.
    #[test]
    fn prediction_in_class_range(
        n_classes in 2usize..8,
        seed in 0u64..1000,
        input in prop::collection::vec(0u8..=1, 4)
    ) {
        let config = Config::builder().clauses(10).features(4).build().unwrap();
        let tm = MultiClass::with_seed(config, n_classes, seed).unwrap();

        prop_assert!(tm.predict(&input).unwrap() < n_classes);
    }

    /// Accuracy is between 0 and 1.
    #[test]
    fn accuracy_in_range(
        n_samples in 4usize..20,
        seed in 0u64..1000
    ) {
        let config = Config::builder().clauses(10).features(4).build().unwrap();
        let mut tm = MultiClass::with_seed(config, 3, seed).unwrap();

        let x: Vec<Vec<u8>> = (0..n_samples)
            .map(|i| (0..4).map(|j| ((i + j) % 2) as u8).collect())
            .collect();
        let y: Vec<usize> = (0..n_samples).map(|i| i % 3).collect();

        tm.fit(&x, &y, 10, 3.9, seed).unwrap();
        let acc = tm.evaluate(&x, &y).unwrap();

        prop_assert!(acc >= 0.0);
        prop_assert!(acc <= 1.0);
    }

    /// Same seed produces bit-identical machines.
    #[test]
    fn deterministic_training(
        seed in 0u64..1000
    ) {
        let config = Config::builder().clauses(10).features(2).build().unwrap();

        let x = vec![vec![0, 0], vec![0, 1], vec![1, 0], vec![1, 1]];
        let y = vec![0, 1, 1, 0];

        let mut tm1 = MultiClass::with_seed(config, 2, seed).unwrap();
        let mut tm2 = MultiClass::with_seed(config, 2, seed).unwrap();

        tm1.fit(&x, &y, 20, 3.9, seed).unwrap();
        tm2.fit(&x, &y, 20, 3.9, seed).unwrap();

        for (m1, m2) in tm1.machines().iter().zip(tm2.machines()) {
            for j in 0..10 {
                for k in 0..2 {
                    for negated in [false, true] {
                        prop_assert_eq!(
                            m1.automaton_state(j, k, negated),
                            m2.automaton_state(j, k, negated)
                        );
                    }
                }
            }
        }
    }

    /// Config validation rejects degenerate parameters.
    #[test]
    fn config_validation(
        n_clauses in 0usize..100,
        n_features in 0usize..50,
        n_states in -5i16..200,
        threshold in -5i32..50
    ) {
        let result = Config::builder()
            .clauses(n_clauses)
            .features(n_features)
            .states(n_states)
            .threshold(threshold)
            .build();

        if n_clauses == 0 || n_features == 0 || n_states < 1 || threshold < 1 {
            prop_assert!(result.is_err());
        } else {
            prop_assert!(result.is_ok());
        }
    }
}
