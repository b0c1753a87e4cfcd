//! Currency classification for interest-rate shock tables.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Which interest-rate shock table applies to an instrument.
///
/// Приложение 2 publishes three duration-bucketed shock tables: Table 3 for
/// ruble-denominated rates, Table 4 for yuan-denominated rates, and Table 5
/// for every other currency.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CurrencyClass {
    /// Russian ruble (Table 3).
    Ruble,
    /// Chinese yuan (Table 4).
    Yuan,
    /// Any currency other than the ruble and the yuan (Table 5).
    Other,
}

impl CurrencyClass {
    /// Returns a short human-readable name, used in error messages.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            CurrencyClass::Ruble => "ruble",
            CurrencyClass::Yuan => "yuan",
            CurrencyClass::Other => "other currency",
        }
    }
}

impl fmt::Display for CurrencyClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
