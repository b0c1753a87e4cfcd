//! Correlation-weighted quadratic forms (раздел 6.5).
//!
//! Both scores follow the same pattern: `sqrt(sum_ij corr(i,j) * r_i * r_j)`
//! over a fixed correlation matrix. The matrices are positive semi-definite
//! by construction, so the pre-root sum cannot be negative for tabulated
//! correlations; the guard before the square root exists to turn malformed
//! correlation data into a typed error instead of a NaN.

use log::debug;

use cbr858_core::tables::correlation::{risk_category_correlation, RISK_1_2};
use cbr858_core::types::RiskCategory;

use crate::error::{RiskError, RiskResult};

/// Takes the square root of a quadratic-form sum, rejecting negatives.
fn sqrt_checked(sum: f64) -> RiskResult<f64> {
    if sum < 0.0 {
        return Err(RiskError::NegativeUnderRoot { value: sum });
    }
    Ok(sum.sqrt())
}

/// Combined risk score РК: risks 1 and 2 aggregated over the Table 13
/// correlation matrix.
///
/// `r` must hold exactly two elements, the risk-1 and risk-2 scores.
///
/// # Example
///
/// ```rust
/// use cbr858_risk::combined_risk_score;
///
/// assert_eq!(combined_risk_score(&[0.0, 0.0])?, 0.0);
/// let score = combined_risk_score(&[1.0, 1.0])?;
/// assert!((score - 2.5_f64.sqrt()).abs() < 1e-12);
/// # Ok::<(), cbr858_risk::RiskError>(())
/// ```
pub fn combined_risk_score(r: &[f64]) -> RiskResult<f64> {
    if r.len() != 2 {
        return Err(RiskError::validation(format!(
            "expected exactly 2 risk components, got {}",
            r.len()
        )));
    }

    let mut sum = 0.0;
    for (i, &r_i) in r.iter().enumerate() {
        for (j, &r_j) in r.iter().enumerate() {
            let corr = RISK_1_2.get(i + 1, j + 1)?;
            sum += corr * r_i * r_j;
        }
    }

    let score = sqrt_checked(sum)?;
    debug!("combined risk score {score} from components {r:?}");
    Ok(score)
}

/// Risk-1 score (п. 6.5.1): category scalars aggregated over the Table 14
/// correlation matrix.
///
/// `components` may cover any subset of the seven categories (including
/// none, which scores zero); categories not supplied contribute nothing.
pub fn market_risk_score(components: &[(RiskCategory, f64)]) -> RiskResult<f64> {
    let mut sum = 0.0;
    for &(i, r_i) in components {
        for &(j, r_j) in components {
            sum += risk_category_correlation(i, j) * r_i * r_j;
        }
    }

    let score = sqrt_checked(sum)?;
    debug!(
        "risk 1 score {score} from {} category components",
        components.len()
    );
    Ok(score)
}
