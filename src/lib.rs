//! # Tsetlin Machine
//!
//! A Tsetlin Machine classifier: ensembles of propositional clauses
//! driven by teams of finite-state learning automata, operating on
//! boolean feature vectors.
//!
//! Each class owns an independent single-class machine. Training is
//! pairwise: an example reinforces the machine of its own class and
//! weakens the machine of one other class drawn at random, so the cost
//! of an update is independent of the number of classes. Prediction
//! scores every machine and takes the argmax.
//!
//! # Features
//!
//! - `std` (default): Standard library support
//! - `parallel`: Parallel batch scoring via rayon
//! - `serde`: Serialization support
//!
//! # Examples
//!
//! ```
//! use tsetlin_machine::{Config, MultiClass};
//!
//! let config = Config::builder().clauses(10).features(2).build().unwrap();
//!
//! let mut tm = MultiClass::with_seed(config, 2, 42).unwrap();
//!
//! let x = vec![vec![0, 0], vec![0, 1], vec![1, 0], vec![1, 1]];
//! let y = vec![0, 1, 1, 0];
//!
//! tm.fit(&x, &y, 200, 3.9, 42).unwrap();
//! assert!(tm.evaluate(&x, &y).unwrap() >= 0.5);
//! ```

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc;

mod automaton;
mod clause;
mod config;
pub mod error;
pub mod feedback;
mod machine;
mod multiclass;
mod training;
pub mod utils;

#[cfg(feature = "parallel")]
pub mod parallel;

pub use automaton::Automaton;
pub use clause::{Clause, EvalMode, Polarity};
pub use config::{Config, ConfigBuilder};
pub use error::{Error, Result};
pub use machine::TsetlinMachine;
pub use multiclass::MultiClass;
pub use training::{EarlyStop, FitOptions, FitResult};
