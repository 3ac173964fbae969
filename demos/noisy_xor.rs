//! Noisy XOR classification demo.
//!
//! Generates a synthetic dataset where the label is the XOR of the
//! first two features, ten distractor features carry no signal, and a
//! tenth of the training labels is flipped.

use rand::Rng;
use tsetlin_machine::{Config, FitOptions, MultiClass, utils::rng_from_seed};

fn noisy_xor(n: usize, label_noise: f32, seed: u64) -> (Vec<Vec<u8>>, Vec<usize>) {
    let mut rng = rng_from_seed(seed);
    let mut x = Vec::with_capacity(n);
    let mut y = Vec::with_capacity(n);

    for _ in 0..n {
        let xi: Vec<u8> = (0..12).map(|_| u8::from(rng.random::<bool>())).collect();
        let mut label = (xi[0] ^ xi[1]) as usize;
        if rng.random::<f32>() < label_noise {
            label = 1 - label;
        }
        x.push(xi);
        y.push(label);
    }

    (x, y)
}

fn main() {
    let config = Config::builder()
        .clauses(10)
        .features(12)
        .states(100)
        .threshold(15)
        .build()
        .expect("valid config");

    let mut tm = MultiClass::with_seed(config, 2, 42).expect("valid ensemble");

    let (x_train, y_train) = noisy_xor(300, 0.1, 42);
    let (x_test, y_test) = noisy_xor(100, 0.0, 123);

    println!("Training on noisy XOR (300 examples, 10% label noise)...");
    let opts = FitOptions::new(300, 42).with_callback(|epoch, acc| {
        if epoch % 50 == 0 {
            println!("  epoch {epoch:>4}: train accuracy {:.1}%", acc * 100.0);
        }
        true
    });
    tm.fit_with_options(&x_train, &y_train, 3.9, opts)
        .expect("training succeeds");

    let accuracy = tm.evaluate(&x_test, &y_test).expect("evaluation succeeds");
    println!("\nHeld-out accuracy: {:.1}%", accuracy * 100.0);

    println!("\nSample votes:");
    for xi in x_test.iter().take(4) {
        let votes = tm.class_votes(xi).expect("valid input");
        let predicted = tm.predict(xi).expect("valid input");
        println!("  {:?}... -> class {predicted} (votes {votes:?})", &xi[..4]);
    }
}
