//! # cbr858-risk
//!
//! The aggregation layer of the 858-P solvency calculation: combines
//! per-category risk scalars into aggregate scores.
//!
//! Two kinds of formula live here:
//!
//! - **Quadratic forms** ([`aggregate`]): correlation-weighted sums of the
//!   form `sqrt(sum_ij corr(i,j) * r_i * r_j)` over the Table 13 and
//!   Table 14 matrices of [`cbr858_core`]
//! - **Concentration excesses** ([`concentration`]): threshold-excess
//!   formulas of раздел 6.5 and Приложение 1.1
//!
//! Every function is pure and synchronous; inputs are ephemeral slices
//! assembled by the caller, and a call either returns a score or fails
//! immediately with a typed [`RiskError`].
//!
//! ## Example
//!
//! ```rust
//! use cbr858_risk::prelude::*;
//!
//! // Risks 1 and 2 of equal size combine at the Table 13 correlation.
//! let score = combined_risk_score(&[1.0, 1.0])?;
//! assert!((score - 2.5_f64.sqrt()).abs() < 1e-12);
//! # Ok::<(), cbr858_risk::RiskError>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]

pub mod aggregate;
pub mod concentration;
pub mod error;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::aggregate::{combined_risk_score, market_risk_score};
    pub use crate::concentration::{
        concentration_risk_score, equity_excess, reinsurance_excess,
    };
    pub use crate::error::{RiskError, RiskResult};
    pub use cbr858_core::types::RiskCategory;
}

// Re-export commonly used items at crate root
pub use aggregate::{combined_risk_score, market_risk_score};
pub use concentration::{concentration_risk_score, equity_excess, reinsurance_excess};
pub use error::{RiskError, RiskResult};
