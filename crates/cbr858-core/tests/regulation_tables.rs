//! Cross-module validation of the published table values.
//!
//! These tests read like the regulation: each case states a table key and
//! the exact coefficient Приложение 2 publishes for it.

use cbr858_core::prelude::*;
use chrono::NaiveDate;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test]
fn credit_quality_lookups_cover_the_whole_domain() {
    for g in 1..=23 {
        let group = CreditQualityGroup::new(g).unwrap();
        let pd = tables::credit::probability_of_default(group);
        let spread = tables::credit::spread_change(group);
        assert!(pd > 0.0 && pd <= 100.0, "group {g} PD {pd}");
        assert!(spread > 0.0, "group {g} spread change {spread}");
    }
}

#[test]
fn rate_shock_matches_published_ruble_rows() {
    let shock = tables::interest_rate::rate_shock(CurrencyClass::Ruble, 0.1).unwrap();
    assert_eq!((shock.increase, shock.decrease), (62.0, -38.0));

    let shock = tables::interest_rate::rate_shock(CurrencyClass::Ruble, 1.5).unwrap();
    assert_eq!((shock.increase, shock.decrease), (55.0, -29.0));
}

#[test]
fn yuan_gap_is_a_domain_error() {
    let err = tables::interest_rate::rate_shock(CurrencyClass::Yuan, 15.0).unwrap_err();
    assert_eq!(
        err,
        Cbr858Error::UnmatchedDuration {
            currency: CurrencyClass::Yuan,
            duration: 15.0,
        }
    );
}

#[test]
fn concentration_coefficient_schedule() {
    let lookup = tables::concentration::concentration_coefficient;
    assert_eq!(lookup(date(2025, 10, 1)).unwrap(), 9);
    assert_eq!(lookup(date(2029, 7, 1)).unwrap(), 5);
    assert!(matches!(
        lookup(date(2025, 1, 1)),
        Err(Cbr858Error::DateOutOfRange { .. })
    ));
}

#[test]
fn correlation_matrices_agree_with_symmetric_access() {
    assert_eq!(tables::correlation::RISK_1_2.get(1, 2).unwrap(), 0.25);
    assert_eq!(tables::correlation::RISK_1_2.get(2, 1).unwrap(), 0.25);

    use RiskCategory::{CurrencyExchange, InterestRate};
    assert_eq!(
        tables::correlation::risk_category_correlation(InterestRate, CurrencyExchange),
        tables::correlation::RISK_CATEGORIES
            .get(InterestRate.index() + 1, CurrencyExchange.index() + 1)
            .unwrap()
    );
}

#[test]
fn public_types_round_trip_through_serde() {
    let shock = tables::interest_rate::rate_shock(CurrencyClass::Other, 0.4).unwrap();
    let json = serde_json::to_string(&shock).unwrap();
    let back: RateShock = serde_json::from_str(&json).unwrap();
    assert_eq!(back, shock);

    let interval = DateInterval::starting(date(2029, 7, 1));
    let json = serde_json::to_string(&interval).unwrap();
    let back: DateInterval = serde_json::from_str(&json).unwrap();
    assert_eq!(back, interval);

    let category: RiskCategory = serde_json::from_str("\"InterestRate\"").unwrap();
    assert_eq!(category, RiskCategory::InterestRate);
}
