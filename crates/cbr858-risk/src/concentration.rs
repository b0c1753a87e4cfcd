//! Concentration-excess formulas (раздел 6.5 and Приложение 1.1).
//!
//! Each formula measures how far an exposure exceeds a threshold share of
//! assets, floored at zero. The aggregate score combines per-entity
//! excesses with unit correlation, then adds the reinsurance and equity
//! excess terms.

use log::debug;

use crate::error::{RiskError, RiskResult};

/// Share of assets an ordinary-equity exposure may reach before it counts
/// as concentrated (п. 3.1.2).
const EQUITY_THRESHOLD: f64 = 0.15;

/// Total concentration excess on reinsurers: `max(0, sum(E_i) - k * Assets)`.
///
/// `factor_percent` is the k_Re coefficient: 20 for reinsurers licensed for
/// voluntary medical insurance, 60 for all others. Any other value fails
/// with [`RiskError::Validation`].
///
/// # Example
///
/// ```rust
/// use cbr858_risk::reinsurance_excess;
///
/// assert_eq!(reinsurance_excess(&[50.0, 30.0], 20.0, 100.0)?, 60.0);
/// # Ok::<(), cbr858_risk::RiskError>(())
/// ```
pub fn reinsurance_excess(
    exposures: &[f64],
    factor_percent: f64,
    assets: f64,
) -> RiskResult<f64> {
    if factor_percent != 20.0 && factor_percent != 60.0 {
        return Err(RiskError::validation(format!(
            "reinsurance factor must be 20 or 60 percent, got {factor_percent}"
        )));
    }
    let total: f64 = exposures.iter().sum();
    Ok((total - factor_percent / 100.0 * assets).max(0.0))
}

/// Concentration excess on ordinary shares held outside the п. 3.1.2
/// requirement: `max(0, E* - 0.15 * Assets)`.
#[must_use]
pub fn equity_excess(equity_exposure: f64, assets: f64) -> f64 {
    (equity_exposure - EQUITY_THRESHOLD * assets).max(0.0)
}

/// Aggregate concentration risk score R1conc (Приложение 1.1).
///
/// Per entity `i`, the excess is `max(0, E_i - CT_i * Assets_i * OAC_i)`
/// where `CT` is the concentration threshold and `OAC` the asset-quality
/// adjustment. Entity excesses combine with unit correlation — the
/// quadratic form collapses to the square of the plain sum — and the
/// reinsurance and equity excess terms are added on top.
///
/// The four parallel slices must have equal lengths; a mismatch fails with
/// [`RiskError::Validation`].
pub fn concentration_risk_score(
    exposures: &[f64],
    thresholds: &[f64],
    assets: &[f64],
    adjustments: &[f64],
    reinsurance_excess: f64,
    equity_excess: f64,
) -> RiskResult<f64> {
    let n = exposures.len();
    if thresholds.len() != n || assets.len() != n || adjustments.len() != n {
        return Err(RiskError::validation(format!(
            "mismatched concentration inputs: {} exposures, {} thresholds, {} assets, {} adjustments",
            n,
            thresholds.len(),
            assets.len(),
            adjustments.len()
        )));
    }

    // corr(i, j) = 1 for every pair, so the double sum over entity excesses
    // is (sum of excesses)^2.
    let total_excess: f64 = (0..n)
        .map(|i| (exposures[i] - thresholds[i] * assets[i] * adjustments[i]).max(0.0))
        .sum();

    let score = total_excess + reinsurance_excess + equity_excess;
    debug!("concentration risk score {score} over {n} entities");
    Ok(score)
}
