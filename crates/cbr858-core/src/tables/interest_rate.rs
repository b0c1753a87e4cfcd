//! Tables 3-5: interest-rate shocks by duration bucket.
//!
//! Each currency class has its own table of relative rate changes. Bucket
//! selection is an ordered rule list evaluated first-match-in-declared-order
//! with a terminal no-match error, so the published tables' gaps and
//! overlaps are explicit data artifacts rather than accidents of branch
//! ordering:
//!
//! - the ruble table (3) has no bucket covering `[20, 30]` years;
//! - the yuan table (4) has no bucket between "< 10" and "> 30" years;
//! - the "other currency" table (5) has no bucket covering `[7, 10]` years,
//!   and its `> 10` / `> 20` / `> 30` rows overlap — the first matching row
//!   in declared order wins, so a 25-year duration resolves to the `> 10`
//!   row.

use crate::error::{Cbr858Error, CoreResult};
use crate::types::{CurrencyClass, RateShock};

/// One side of a duration bucket condition.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DurationBound {
    /// Matches durations strictly below the threshold, in years.
    Below(f64),
    /// Matches durations strictly above the threshold, in years.
    Above(f64),
}

impl DurationBound {
    fn matches(self, duration: f64) -> bool {
        match self {
            DurationBound::Below(limit) => duration < limit,
            DurationBound::Above(limit) => duration > limit,
        }
    }
}

/// A single row of a shock table: the condition and the shock it selects.
pub type BucketRule = (DurationBound, RateShock);

/// Table 3: ruble-denominated rates.
const RUBLE: &[BucketRule] = &[
    (DurationBound::Below(0.25), RateShock::new(62.0, -38.0)),
    (DurationBound::Below(0.5), RateShock::new(59.0, -35.0)),
    (DurationBound::Below(1.0), RateShock::new(58.0, -31.0)),
    (DurationBound::Below(2.0), RateShock::new(55.0, -29.0)),
    (DurationBound::Below(3.0), RateShock::new(54.0, -28.0)),
    (DurationBound::Below(5.0), RateShock::new(48.0, -27.0)),
    (DurationBound::Below(7.0), RateShock::new(42.0, -26.0)),
    (DurationBound::Below(10.0), RateShock::new(34.0, -24.0)),
    (DurationBound::Below(20.0), RateShock::new(20.0, -18.0)),
    (DurationBound::Above(30.0), RateShock::new(14.0, -15.0)),
];

/// Table 4: yuan-denominated rates. The published table has no 20-year row.
const YUAN: &[BucketRule] = &[
    (DurationBound::Below(0.25), RateShock::new(74.0, -40.0)),
    (DurationBound::Below(0.5), RateShock::new(70.0, -40.0)),
    (DurationBound::Below(1.0), RateShock::new(68.0, -40.0)),
    (DurationBound::Below(3.0), RateShock::new(44.0, -27.0)),
    (DurationBound::Below(5.0), RateShock::new(35.0, -24.0)),
    (DurationBound::Below(7.0), RateShock::new(28.0, -22.0)),
    (DurationBound::Below(10.0), RateShock::new(25.0, -21.0)),
    (DurationBound::Above(30.0), RateShock::new(16.0, -17.0)),
];

/// Table 5: rates in any other currency.
const OTHER: &[BucketRule] = &[
    (DurationBound::Below(0.25), RateShock::new(526.0, -97.0)),
    (DurationBound::Below(0.5), RateShock::new(250.0, -74.0)),
    (DurationBound::Below(1.0), RateShock::new(140.0, -60.0)),
    (DurationBound::Below(2.0), RateShock::new(84.0, -55.0)),
    (DurationBound::Below(3.0), RateShock::new(81.0, -49.0)),
    (DurationBound::Below(5.0), RateShock::new(70.0, -41.0)),
    (DurationBound::Below(7.0), RateShock::new(58.0, -35.0)),
    (DurationBound::Above(10.0), RateShock::new(42.0, -30.0)),
    (DurationBound::Above(20.0), RateShock::new(29.0, -30.0)),
    (DurationBound::Above(30.0), RateShock::new(24.0, -27.0)),
];

/// Returns the rule list for a currency class, in declared order.
#[must_use]
pub fn bucket_rules(currency: CurrencyClass) -> &'static [BucketRule] {
    match currency {
        CurrencyClass::Ruble => RUBLE,
        CurrencyClass::Yuan => YUAN,
        CurrencyClass::Other => OTHER,
    }
}

/// Returns the relative rate shock for a duration, in percent (Tables 3-5).
///
/// Fails with [`Cbr858Error::UnmatchedDuration`] when the duration falls
/// into one of the published tables' coverage gaps.
pub fn rate_shock(currency: CurrencyClass, duration_years: f64) -> CoreResult<RateShock> {
    bucket_rules(currency)
        .iter()
        .find(|(bound, _)| bound.matches(duration_years))
        .map(|&(_, shock)| shock)
        .ok_or_else(|| Cbr858Error::unmatched_duration(currency, duration_years))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ruble_buckets() {
        assert_eq!(
            rate_shock(CurrencyClass::Ruble, 0.1).unwrap(),
            RateShock::new(62.0, -38.0)
        );
        assert_eq!(
            rate_shock(CurrencyClass::Ruble, 1.5).unwrap(),
            RateShock::new(55.0, -29.0)
        );
        assert_eq!(
            rate_shock(CurrencyClass::Ruble, 9.99).unwrap(),
            RateShock::new(34.0, -24.0)
        );
        assert_eq!(
            rate_shock(CurrencyClass::Ruble, 31.0).unwrap(),
            RateShock::new(14.0, -15.0)
        );
    }

    #[test]
    fn test_ruble_gap() {
        // No published bucket covers [20, 30] years.
        for duration in [20.0, 25.0, 30.0] {
            assert_eq!(
                rate_shock(CurrencyClass::Ruble, duration),
                Err(Cbr858Error::UnmatchedDuration {
                    currency: CurrencyClass::Ruble,
                    duration,
                })
            );
        }
    }

    #[test]
    fn test_yuan_buckets() {
        assert_eq!(
            rate_shock(CurrencyClass::Yuan, 0.3).unwrap(),
            RateShock::new(70.0, -40.0)
        );
        assert_eq!(
            rate_shock(CurrencyClass::Yuan, 8.0).unwrap(),
            RateShock::new(25.0, -21.0)
        );
        assert_eq!(
            rate_shock(CurrencyClass::Yuan, 40.0).unwrap(),
            RateShock::new(16.0, -17.0)
        );
    }

    #[test]
    fn test_yuan_gap_between_10_and_30() {
        for duration in [10.0, 15.0, 22.5, 30.0] {
            assert!(
                rate_shock(CurrencyClass::Yuan, duration).is_err(),
                "{duration} years should fall into the published gap"
            );
        }
    }

    #[test]
    fn test_other_currency_buckets() {
        assert_eq!(
            rate_shock(CurrencyClass::Other, 0.1).unwrap(),
            RateShock::new(526.0, -97.0)
        );
        assert_eq!(
            rate_shock(CurrencyClass::Other, 6.0).unwrap(),
            RateShock::new(58.0, -35.0)
        );
    }

    #[test]
    fn test_other_currency_overlap_resolves_in_declared_order() {
        // 25 years satisfies both "> 10" and "> 20"; the "> 10" row is
        // declared first and wins.
        assert_eq!(
            rate_shock(CurrencyClass::Other, 25.0).unwrap(),
            RateShock::new(42.0, -30.0)
        );
        assert_eq!(
            rate_shock(CurrencyClass::Other, 35.0).unwrap(),
            RateShock::new(42.0, -30.0)
        );
    }

    #[test]
    fn test_other_currency_gap_between_7_and_10() {
        for duration in [7.0, 8.5, 10.0] {
            assert!(rate_shock(CurrencyClass::Other, duration).is_err());
        }
    }

    #[test]
    fn test_all_tables_shock_signs() {
        for currency in [CurrencyClass::Ruble, CurrencyClass::Yuan, CurrencyClass::Other] {
            for (_, shock) in bucket_rules(currency) {
                assert!(shock.increase > 0.0);
                assert!(shock.decrease < 0.0);
            }
        }
    }
}
