//! Input-boundary errors.
//!
//! The scoring functions are total over validated inputs. These errors are
//! only raised by the constructors that build those inputs from raw form
//! values, and by policy validation.

use thiserror::Error;

/// Rejected raw input for a likelihood or impact cost.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum QuantifyError {
    /// Numeric likelihood outside `[0, 100]` or not finite.
    #[error("likelihood percentage {value} is outside [0, 100]")]
    LikelihoodOutOfRange { value: f64 },
    /// Text that is neither a label nor a number.
    #[error("unrecognised likelihood '{input}' (expected Low, Medium, High or a percentage)")]
    UnknownLikelihood { input: String },
    /// Negative or non-finite impact cost.
    #[error("impact cost {value} must be a finite, non-negative amount")]
    InvalidImpactCost { value: f64 },
}

/// A quantification policy whose parameters contradict each other.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PolicyError {
    #[error("{field} = {value} is outside [0, 1]")]
    FractionOutOfRange { field: &'static str, value: f64 },
    #[error("{field} = {value} must be finite and non-negative")]
    InvalidAmount { field: &'static str, value: f64 },
    #[error("policy ordering violated: {0}")]
    Ordering(&'static str),
}
