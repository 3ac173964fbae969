//! Parallel batch scoring and evaluation using rayon.
//!
//! Scoring is read-only per machine, so batches parallelize across
//! examples with no locking. Training stays sequential: `update`
//! mutates machine-owned buffers and takes `&mut self`.

use rayon::prelude::*;

use crate::{
    MultiClass, TsetlinMachine,
    error::{Error, Result}
};

/// # Overview
///
/// Parallel clamped vote sums for a single-class machine.
pub fn score_batch(tm: &TsetlinMachine, xs: &[Vec<u8>]) -> Result<Vec<i32>> {
    xs.par_iter().map(|x| tm.score(x)).collect()
}

/// # Overview
///
/// Parallel argmax prediction for a multi-class ensemble.
pub fn predict_batch(tm: &MultiClass, xs: &[Vec<u8>]) -> Result<Vec<usize>> {
    xs.par_iter().map(|x| tm.predict(x)).collect()
}

/// # Overview
///
/// Parallel accuracy evaluation for a multi-class ensemble.
pub fn evaluate_parallel(tm: &MultiClass, x: &[Vec<u8>], y: &[usize]) -> Result<f32> {
    if x.is_empty() {
        return Err(Error::EmptyDataset);
    }
    if x.len() != y.len() {
        return Err(Error::SampleCountMismatch {
            inputs: x.len(),
            labels: y.len()
        });
    }
    for &yi in y {
        if yi >= tm.n_classes() {
            return Err(Error::LabelOutOfRange {
                label:     yi,
                n_classes: tm.n_classes()
            });
        }
    }

    let verdicts: Vec<bool> = x
        .par_iter()
        .zip(y.par_iter())
        .map(|(xi, &yi)| Ok(tm.predict(xi)? == yi))
        .collect::<Result<_>>()?;

    let correct = verdicts.iter().filter(|&&v| v).count();
    Ok(correct as f32 / x.len() as f32)
}
