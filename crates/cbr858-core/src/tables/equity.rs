//! Tables 6-9: share price, currency, and property shocks.

use chrono::NaiveDate;
use std::sync::OnceLock;

use crate::error::{Cbr858Error, CoreResult};
use crate::types::{DateInterval, RateShock};

/// Table 7: revaluation of foreign currency against the ruble, in percent.
pub const CURRENCY_SHOCK: RateShock = RateShock::new(44.0, -9.0);

/// One effective-date window of Table 6 with its per-class shock magnitudes.
struct SharePriceWindow {
    window: DateInterval,
    /// Shock magnitude by coefficient class 1-3; applied symmetrically.
    magnitudes: [f64; 3],
}

/// Table 6 windows, in declared order.
static SHARE_PRICE_WINDOWS: OnceLock<[SharePriceWindow; 3]> = OnceLock::new();

fn share_price_windows() -> &'static [SharePriceWindow; 3] {
    SHARE_PRICE_WINDOWS.get_or_init(|| {
        let d = |y, m, day| NaiveDate::from_ymd_opt(y, m, day).unwrap();
        [
            SharePriceWindow {
                window: DateInterval::ending(d(2025, 12, 31)),
                magnitudes: [18.0, 25.0, 25.0],
            },
            SharePriceWindow {
                window: DateInterval::new(d(2026, 1, 1), d(2026, 12, 31)),
                magnitudes: [18.0, 25.0, 35.0],
            },
            SharePriceWindow {
                window: DateInterval::starting(d(2027, 1, 1)),
                magnitudes: [18.0, 25.0, 35.0],
            },
        ]
    })
}

/// First calculation date Table 6 is defined for.
fn share_price_first_effective() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 12, 31).unwrap()
}

/// Returns the share-price shock for a calculation date and coefficient
/// class 1-3 (Table 6).
///
/// Dates before the start of the first effective window (2025-12-31) fail
/// with [`Cbr858Error::DateOutOfRange`]; a class outside 1-3 fails with
/// [`Cbr858Error::InvalidCoefficientClass`].
pub fn share_price_shock(date: NaiveDate, class: u8) -> CoreResult<RateShock> {
    if !(1..=3).contains(&class) {
        return Err(Cbr858Error::invalid_class("share price change", class, 3));
    }
    if date < share_price_first_effective() {
        return Err(Cbr858Error::date_out_of_range("share price change", date));
    }
    share_price_windows()
        .iter()
        .find(|row| row.window.contains(date))
        .map(|row| RateShock::symmetric(row.magnitudes[usize::from(class) - 1]))
        .ok_or_else(|| Cbr858Error::date_out_of_range("share price change", date))
}

/// Returns the decline in property value for a class (Table 8), in percent:
/// 1 for residential property, 2 for non-residential.
pub fn house_price_decline(class: u8) -> CoreResult<f64> {
    match class {
        1 => Ok(10.0),
        2 => Ok(25.0),
        _ => Err(Cbr858Error::invalid_class("house price decline", class, 2)),
    }
}

/// Returns the shock for assets whose price risk is not assessed under the
/// enumerated items of пп. 6.5.1 (Table 9).
pub fn unassessed_asset_shock(class: u8) -> CoreResult<RateShock> {
    match class {
        1 => Ok(RateShock::symmetric(18.0)),
        2 => Ok(RateShock::symmetric(50.0)),
        _ => Err(Cbr858Error::invalid_class(
            "unassessed asset shock",
            class,
            2,
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn test_share_price_first_window() {
        let shock = share_price_shock(d(2025, 12, 31), 3).unwrap();
        assert_eq!(shock, RateShock::new(25.0, -25.0));
    }

    #[test]
    fn test_share_price_class_3_steps_up_in_2026() {
        assert_eq!(
            share_price_shock(d(2026, 6, 1), 3).unwrap(),
            RateShock::new(35.0, -35.0)
        );
        assert_eq!(
            share_price_shock(d(2030, 1, 1), 3).unwrap(),
            RateShock::new(35.0, -35.0)
        );
    }

    #[test]
    fn test_share_price_classes_1_and_2_are_stable() {
        for date in [d(2025, 12, 31), d(2026, 6, 1), d(2028, 3, 15)] {
            assert_eq!(share_price_shock(date, 1).unwrap().increase, 18.0);
            assert_eq!(share_price_shock(date, 2).unwrap().increase, 25.0);
        }
    }

    #[test]
    fn test_share_price_date_before_first_window() {
        let err = share_price_shock(d(2025, 6, 17), 1).unwrap_err();
        assert!(matches!(err, Cbr858Error::DateOutOfRange { .. }));
    }

    #[test]
    fn test_share_price_invalid_class() {
        let err = share_price_shock(d(2026, 1, 1), 4).unwrap_err();
        assert_eq!(
            err,
            Cbr858Error::InvalidCoefficientClass {
                table: "share price change",
                class: 4,
                max: 3,
            }
        );
        assert!(share_price_shock(d(2026, 1, 1), 0).is_err());
    }

    #[test]
    fn test_currency_shock() {
        assert_eq!(CURRENCY_SHOCK.increase, 44.0);
        assert_eq!(CURRENCY_SHOCK.decrease, -9.0);
    }

    #[test]
    fn test_house_price_decline() {
        assert_eq!(house_price_decline(1).unwrap(), 10.0);
        assert_eq!(house_price_decline(2).unwrap(), 25.0);
        assert!(house_price_decline(3).is_err());
    }

    #[test]
    fn test_unassessed_asset_shock() {
        assert_eq!(
            unassessed_asset_shock(1).unwrap(),
            RateShock::symmetric(18.0)
        );
        assert_eq!(
            unassessed_asset_shock(2).unwrap(),
            RateShock::symmetric(50.0)
        );
        assert!(unassessed_asset_shock(0).is_err());
    }
}
