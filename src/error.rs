//! Error types for Tsetlin Machine.

use core::fmt;

/// # Overview
///
/// Errors that can occur when building or using a Tsetlin Machine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    MissingClauses,
    MissingFeatures,
    InvalidStates,
    InvalidThreshold,
    InvalidSpecificity,
    TooFewClasses { got: usize },
    EmptyDataset,
    DimensionMismatch { expected: usize, got: usize },
    LabelOutOfRange { label: usize, n_classes: usize },
    SampleCountMismatch { inputs: usize, labels: usize }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingClauses => write!(f, "n_clauses is required and must be > 0"),
            Self::MissingFeatures => write!(f, "n_features is required and must be > 0"),
            Self::InvalidStates => write!(f, "n_states must be > 0"),
            Self::InvalidThreshold => write!(f, "threshold must be > 0"),
            Self::InvalidSpecificity => write!(f, "s must be > 1.0"),
            Self::TooFewClasses {
                got
            } => {
                write!(f, "at least 2 classes are required, got {got}")
            }
            Self::EmptyDataset => write!(f, "dataset cannot be empty"),
            Self::DimensionMismatch {
                expected,
                got
            } => {
                write!(f, "input dimension mismatch: expected {expected}, got {got}")
            }
            Self::LabelOutOfRange {
                label,
                n_classes
            } => {
                write!(f, "label {label} out of range for {n_classes} classes")
            }
            Self::SampleCountMismatch {
                inputs,
                labels
            } => {
                write!(f, "sample count mismatch: {inputs} inputs, {labels} labels")
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

/// # Overview
///
/// Result type for Tsetlin Machine operations.
pub type Result<T> = core::result::Result<T, Error>;
