//! Error types for the aggregation layer.

use thiserror::Error;

use cbr858_core::Cbr858Error;

/// A specialized Result type for aggregation operations.
pub type RiskResult<T> = Result<T, RiskError>;

/// The error type for risk aggregation.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RiskError {
    /// A table lookup failed (input outside the table's declared coverage).
    #[error(transparent)]
    Table(#[from] Cbr858Error),

    /// Malformed call shape: wrong-length vector, mismatched parallel slice
    /// lengths, or a parameter outside its enumerated domain.
    #[error("validation failed: {reason}")]
    Validation {
        /// Description of the malformed input.
        reason: String,
    },

    /// The pre-root sum of a quadratic form came out negative, which can
    /// only happen with malformed correlation data upstream.
    #[error("quadratic form is negative before square root: {value}")]
    NegativeUnderRoot {
        /// The offending pre-root sum.
        value: f64,
    },
}

impl RiskError {
    /// Creates a validation error.
    #[must_use]
    pub fn validation(reason: impl Into<String>) -> Self {
        Self::Validation {
            reason: reason.into(),
        }
    }
}
