//! Paired relative-change coefficients.

use serde::{Deserialize, Serialize};

/// A paired relative change in percent: how far a rate or price is shocked
/// upward and downward.
///
/// Every shock table in the regulation publishes both directions together;
/// `increase` is non-negative and `decrease` non-positive in all of them.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RateShock {
    /// Upward relative change, in percent.
    pub increase: f64,
    /// Downward relative change, in percent (negative).
    pub decrease: f64,
}

impl RateShock {
    /// Creates a shock pair.
    #[must_use]
    pub const fn new(increase: f64, decrease: f64) -> Self {
        Self { increase, decrease }
    }

    /// Creates a symmetric shock pair `(magnitude, -magnitude)`.
    #[must_use]
    pub const fn symmetric(magnitude: f64) -> Self {
        Self {
            increase: magnitude,
            decrease: -magnitude,
        }
    }
}
