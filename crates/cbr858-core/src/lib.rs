//! # cbr858-core
//!
//! Domain types and regulatory coefficient tables for solvency calculations
//! under Bank of Russia Regulation 858-P.
//!
//! This crate provides the foundational building blocks of the library:
//!
//! - **Types**: validated domain types like [`CreditQualityGroup`],
//!   [`RiskCategory`], [`CurrencyClass`], and [`DateInterval`]
//! - **Tables**: the lookup tables of Приложение 2 (Tables 1-16) —
//!   probabilities of default, interest-rate shocks, share-price shocks,
//!   concentration coefficients, and correlation matrices
//!
//! ## Design Philosophy
//!
//! - **Type Safety**: validated newtypes prevent out-of-domain table keys
//! - **Explicit Over Implicit**: every lookup returns the exact published
//!   value or a typed error; there is no silent defaulting
//! - **Data Over Control Flow**: bucket ladders are ordered rule lists, so
//!   the published tables' gaps and overlaps are visible data artifacts
//!
//! All tables are read-only after initialization and every function is pure,
//! so the whole API is safe to call concurrently without coordination.
//!
//! ## Example
//!
//! ```rust
//! use cbr858_core::prelude::*;
//!
//! let group = CreditQualityGroup::new(14)?;
//! assert_eq!(tables::credit::probability_of_default(group), 2.10);
//!
//! let shock = tables::interest_rate::rate_shock(CurrencyClass::Ruble, 1.5)?;
//! assert_eq!(shock.increase, 55.0);
//! # Ok::<(), cbr858_core::Cbr858Error>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::unreadable_literal)]
#![allow(clippy::unnecessary_map_or)]

pub mod error;
pub mod tables;
pub mod types;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::error::{Cbr858Error, CoreResult};
    pub use crate::tables;
    pub use crate::types::{
        CounterpartyCategory, CreditQualityGroup, CurrencyClass, DateInterval, RateShock,
        RiskCategory,
    };
}

// Re-export commonly used types at crate root
pub use error::{Cbr858Error, CoreResult};
pub use types::{
    CounterpartyCategory, CreditQualityGroup, CurrencyClass, DateInterval, RateShock, RiskCategory,
};
