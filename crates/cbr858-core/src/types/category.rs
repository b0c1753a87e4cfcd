//! Validated category identifiers used as table keys.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{Cbr858Error, CoreResult};

/// The seven risk-1 categories of п. 6.5.1, in the fixed order of the
/// Table 14 correlation matrix.
///
/// The ordering is part of the regulation's contract: each variant maps to
/// a fixed row/column of the 7x7 matrix via [`RiskCategory::index`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RiskCategory {
    /// Concentration risk (uncorrelated with every other category).
    Concentration,
    /// Credit spread risk.
    CreditSpread,
    /// Interest rate risk.
    InterestRate,
    /// Share price risk.
    SharePrice,
    /// Currency exchange rate risk.
    CurrencyExchange,
    /// House price risk.
    HousePrice,
    /// Risk on assets whose price risk is not otherwise assessed.
    OtherAssets,
}

impl RiskCategory {
    /// All categories in matrix order.
    pub const ALL: [RiskCategory; 7] = [
        RiskCategory::Concentration,
        RiskCategory::CreditSpread,
        RiskCategory::InterestRate,
        RiskCategory::SharePrice,
        RiskCategory::CurrencyExchange,
        RiskCategory::HousePrice,
        RiskCategory::OtherAssets,
    ];

    /// Row/column of this category in the Table 14 correlation matrix.
    #[must_use]
    pub fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for RiskCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            RiskCategory::Concentration => "concentration",
            RiskCategory::CreditSpread => "credit spread",
            RiskCategory::InterestRate => "interest rate",
            RiskCategory::SharePrice => "share price",
            RiskCategory::CurrencyExchange => "currency exchange",
            RiskCategory::HousePrice => "house price",
            RiskCategory::OtherAssets => "other assets",
        };
        f.write_str(name)
    }
}

/// A credit quality group, 1 (best) through 23 (default).
///
/// Keys Tables 1 and 2 (probability of default and credit-spread change).
/// Construction validates the domain, so lookups through a constructed
/// group are infallible.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CreditQualityGroup(u8);

impl CreditQualityGroup {
    /// Smallest valid group.
    pub const MIN: u8 = 1;
    /// Largest valid group.
    pub const MAX: u8 = 23;

    /// Creates a group, validating the 1-23 domain.
    pub fn new(group: u8) -> CoreResult<Self> {
        if (Self::MIN..=Self::MAX).contains(&group) {
            Ok(Self(group))
        } else {
            Err(Cbr858Error::InvalidCreditQuality { group })
        }
    }

    /// Returns the group identifier.
    #[must_use]
    pub fn get(self) -> u8 {
        self.0
    }
}

impl fmt::Display for CreditQualityGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A counterparty category, 1 through 5, indexing the risk-2 correlation
/// matrix (Table 15).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CounterpartyCategory(u8);

impl CounterpartyCategory {
    /// Creates a category, validating the 1-5 domain.
    pub fn new(category: u8) -> CoreResult<Self> {
        if (1..=5).contains(&category) {
            Ok(Self(category))
        } else {
            Err(Cbr858Error::InvalidCounterpartyCategory { category })
        }
    }

    /// Returns the category identifier.
    #[must_use]
    pub fn get(self) -> u8 {
        self.0
    }
}

impl fmt::Display for CounterpartyCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
