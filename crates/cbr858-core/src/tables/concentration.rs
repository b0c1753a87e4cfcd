//! Tables 10-12 and 16: concentration and related scalar coefficients.

use chrono::NaiveDate;
use std::sync::OnceLock;

use crate::error::{Cbr858Error, CoreResult};
use crate::types::DateInterval;

/// Table 11: cutoff, in working days, for receivables from insurance agents
/// and (re)insurance brokers.
pub const WORKING_DAYS_LIMIT: u32 = 20;

/// Table 12: the risk-2 factor Q, in percent.
pub const RISK_2_FACTOR_PERCENT: f64 = 90.0;

/// Table 10 windows with their concentration coefficient (СТ) values, in
/// declared order; the last window is open-ended.
static CONCENTRATION_WINDOWS: OnceLock<[(DateInterval, u8); 5]> = OnceLock::new();

fn concentration_windows() -> &'static [(DateInterval, u8); 5] {
    CONCENTRATION_WINDOWS.get_or_init(|| {
        let d = |y, m, day| NaiveDate::from_ymd_opt(y, m, day).unwrap();
        [
            (DateInterval::new(d(2025, 9, 1), d(2026, 6, 30)), 9),
            (DateInterval::new(d(2026, 7, 1), d(2027, 6, 30)), 8),
            (DateInterval::new(d(2027, 7, 1), d(2028, 6, 30)), 7),
            (DateInterval::new(d(2028, 7, 1), d(2029, 6, 30)), 6),
            (DateInterval::starting(d(2029, 7, 1)), 5),
        ]
    })
}

/// Returns the concentration coefficient (СТ) for a calculation date
/// (Table 10).
///
/// The coefficient steps down by one each fiscal year from 9 to its final
/// value of 5. Dates before 2025-09-01 fail with
/// [`Cbr858Error::DateOutOfRange`].
pub fn concentration_coefficient(date: NaiveDate) -> CoreResult<u8> {
    concentration_windows()
        .iter()
        .find(|(window, _)| window.contains(date))
        .map(|&(_, coefficient)| coefficient)
        .ok_or_else(|| Cbr858Error::date_out_of_range("concentration coefficient", date))
}

/// Returns the z coefficient for a class (Table 16): 1 -> 2, 2 -> 1.
pub fn z_coefficient(class: u8) -> CoreResult<u8> {
    match class {
        1 => Ok(2),
        2 => Ok(1),
        _ => Err(Cbr858Error::invalid_class("z coefficient", class, 2)),
    }
}
