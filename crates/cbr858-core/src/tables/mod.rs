//! The lookup tables of Приложение 2 to Regulation 858-P.
//!
//! Every numeric value reproduces the published table exactly, including
//! the duplicated runs (groups 21-22 of Table 1 both map to 50.00, groups
//! 18-23 of Table 2 all map to 10.64) and the coverage gaps of the duration
//! tables. Gaps and out-of-domain keys surface as [`crate::Cbr858Error`],
//! never as a fallthrough to an unrelated bucket.
//!
//! Module layout follows the table groupings:
//!
//! - [`credit`]: Tables 1-2 (PD and credit-spread change by quality group)
//! - [`interest_rate`]: Tables 3-5 (duration-bucketed rate shocks)
//! - [`equity`]: Tables 6-9 (share price, currency, house price shocks)
//! - [`concentration`]: Tables 10-12 and 16 (concentration coefficients)
//! - [`correlation`]: Tables 13-15 (correlation matrices)

pub mod concentration;
pub mod correlation;
pub mod credit;
pub mod equity;
pub mod interest_rate;
