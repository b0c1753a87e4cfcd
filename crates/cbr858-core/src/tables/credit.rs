//! Tables 1-2: credit quality lookups.
//!
//! Table 1 maps a credit quality group to its one-year probability of
//! default; Table 2 maps the same groups to a credit-spread change
//! coefficient. Both are keyed by a validated [`CreditQualityGroup`], so the
//! lookups themselves cannot fail.

use crate::types::CreditQualityGroup;

/// Table 1: one-year probability of default by group, in percent.
///
/// Index 0 holds group 1. Groups 8 and 9 are 0.012 and 0.017 as published
/// (smaller than group 7), and groups 21 and 22 share the 50.00 value.
const PROBABILITY_OF_DEFAULT: [f64; 23] = [
    0.01, 0.02, 0.03, 0.04, 0.05, 0.06, 0.07, 0.012, 0.017, 0.25, 0.50, 0.70, 1.30, 2.10, 3.50,
    5.00, 8.00, 15.00, 24.00, 35.00, 50.00, 50.00, 100.00,
];

/// Table 2: credit-spread change coefficient by group.
///
/// Groups 18-23 all share the 10.64 value as published.
const SPREAD_CHANGE: [f64; 23] = [
    0.22, 0.27, 0.27, 0.27, 0.34, 0.34, 0.34, 0.8, 0.8, 0.8, 1.15, 1.15, 1.15, 1.95, 1.95, 1.95,
    1.95, 10.64, 10.64, 10.64, 10.64, 10.64, 10.64,
];

/// Returns the one-year probability of default for a quality group, in
/// percent (Table 1).
#[must_use]
pub fn probability_of_default(group: CreditQualityGroup) -> f64 {
    PROBABILITY_OF_DEFAULT[usize::from(group.get()) - 1]
}

/// Returns the credit-spread change coefficient for a quality group
/// (Table 2).
#[must_use]
pub fn spread_change(group: CreditQualityGroup) -> f64 {
    SPREAD_CHANGE[usize::from(group.get()) - 1]
}
