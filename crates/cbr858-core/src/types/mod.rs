//! Domain types for the 858-P tables.
//!
//! This module provides type-safe representations of the identifiers the
//! regulation keys its tables by:
//!
//! - [`DateInterval`]: inclusive date range with optional bounds
//! - [`CurrencyClass`]: which interest-rate shock table applies
//! - [`RiskCategory`]: the seven risk-1 categories, in matrix order
//! - [`CreditQualityGroup`]: validated group 1-23
//! - [`CounterpartyCategory`]: validated category 1-5
//! - [`RateShock`]: a paired (increase, decrease) relative change in percent

mod category;
mod currency;
mod interval;
mod shock;

pub use category::{CounterpartyCategory, CreditQualityGroup, RiskCategory};
pub use currency::CurrencyClass;
pub use interval::DateInterval;
pub use shock::RateShock;
