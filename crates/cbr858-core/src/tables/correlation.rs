//! Tables 13-15: correlation matrices.
//!
//! The regulation numbers categories from 1, so the generic accessor takes
//! 1-based indices and validates them against the matrix dimension. The
//! risk-1 category matrix (Table 14) is additionally exposed keyed by
//! [`RiskCategory`], which makes that lookup infallible.

use crate::error::{Cbr858Error, CoreResult};
use crate::types::{CounterpartyCategory, RiskCategory};

/// A fixed symmetric correlation matrix with 1-based indexing.
#[derive(Debug, Clone, Copy)]
pub struct CorrelationMatrix<const N: usize> {
    name: &'static str,
    values: [[f64; N]; N],
}

impl<const N: usize> CorrelationMatrix<N> {
    /// Returns the matrix name used in error messages.
    #[must_use]
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Returns the matrix dimension.
    #[must_use]
    pub fn size(&self) -> usize {
        N
    }

    /// Returns the correlation between categories `i` and `j` (1-based).
    ///
    /// Fails with [`Cbr858Error::InvalidCorrelationIndex`] when either index
    /// is outside `1..=N`.
    pub fn get(&self, i: usize, j: usize) -> CoreResult<f64> {
        for index in [i, j] {
            if !(1..=N).contains(&index) {
                return Err(Cbr858Error::InvalidCorrelationIndex {
                    matrix: self.name,
                    index,
                    size: N,
                });
            }
        }
        Ok(self.values[i - 1][j - 1])
    }
}

/// Table 13: correlation between risk 1 and risk 2.
pub const RISK_1_2: CorrelationMatrix<2> = CorrelationMatrix {
    name: "risk 1/2",
    values: [[1.0, 0.25], [0.25, 1.0]],
};

/// Table 14: correlation between the risk-1 categories, in
/// [`RiskCategory`] order. Concentration risk is uncorrelated with every
/// other category; interest rate and currency exchange correlate at 0.75.
pub const RISK_CATEGORIES: CorrelationMatrix<7> = CorrelationMatrix {
    name: "risk 1 categories",
    values: [
        [1.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0],
        [0.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0],
        [0.0, 1.0, 1.0, 1.0, 0.75, 1.0, 1.0],
        [0.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0],
        [0.0, 1.0, 0.75, 1.0, 1.0, 1.0, 1.0],
        [0.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0],
        [0.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0],
    ],
};

/// Table 15: risk-2 correlation between counterparty categories.
///
/// The source publication prints only four distinct rows; the fifth row
/// equals the fourth by symmetry of the matrix.
pub const RISK_2: CorrelationMatrix<5> = CorrelationMatrix {
    name: "risk 2 counterparties",
    values: [
        [1.0, 0.75, 0.75, 0.25, 0.25],
        [0.75, 1.0, 1.0, 0.25, 0.25],
        [0.75, 1.0, 1.0, 0.25, 0.25],
        [0.25, 0.25, 0.25, 1.0, 1.0],
        [0.25, 0.25, 0.25, 1.0, 1.0],
    ],
};

/// Returns the Table 14 correlation between two risk-1 categories.
#[must_use]
pub fn risk_category_correlation(i: RiskCategory, j: RiskCategory) -> f64 {
    RISK_CATEGORIES.values[i.index()][j.index()]
}

/// Returns the Table 15 correlation between two counterparty categories.
#[must_use]
pub fn counterparty_correlation(i: CounterpartyCategory, j: CounterpartyCategory) -> f64 {
    RISK_2.values[usize::from(i.get()) - 1][usize::from(j.get()) - 1]
}
