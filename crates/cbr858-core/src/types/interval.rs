//! Inclusive date interval with optional bounds.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// An inclusive date range; either bound may be absent, meaning unbounded
/// on that side.
///
/// The regulation's date-indexed tables (concentration coefficient,
/// share-price shock) select coefficients by effective-date windows, the
/// last of which is open-ended. Membership is inclusive at both present
/// bounds.
///
/// # Example
///
/// ```rust
/// use cbr858_core::types::DateInterval;
/// use chrono::NaiveDate;
///
/// let window = DateInterval::new(
///     NaiveDate::from_ymd_opt(2025, 9, 1).unwrap(),
///     NaiveDate::from_ymd_opt(2026, 6, 30).unwrap(),
/// );
/// assert!(window.contains(NaiveDate::from_ymd_opt(2025, 9, 1).unwrap()));
/// assert!(!window.contains(NaiveDate::from_ymd_opt(2026, 7, 1).unwrap()));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DateInterval {
    /// Inclusive lower bound; `None` matches any date from the past.
    pub start: Option<NaiveDate>,
    /// Inclusive upper bound; `None` matches any date going forward.
    pub end: Option<NaiveDate>,
}

impl DateInterval {
    /// Creates an interval bounded on both sides.
    #[must_use]
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self {
            start: Some(start),
            end: Some(end),
        }
    }

    /// Creates an open-ended interval starting at `start`.
    #[must_use]
    pub fn starting(start: NaiveDate) -> Self {
        Self {
            start: Some(start),
            end: None,
        }
    }

    /// Creates an interval covering everything up to and including `end`.
    #[must_use]
    pub fn ending(end: NaiveDate) -> Self {
        Self {
            start: None,
            end: Some(end),
        }
    }

    /// Returns whether `date` falls inside the interval.
    ///
    /// Inclusive at both present bounds; an absent bound matches any date
    /// on that side.
    #[must_use]
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start.map_or(true, |start| date >= start) && self.end.map_or(true, |end| date <= end)
    }
}

impl fmt::Display for DateInterval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.start {
            Some(start) => write!(f, "[{start}, ")?,
            None => write!(f, "(-inf, ")?,
        }
        match self.end {
            Some(end) => write!(f, "{end}]"),
            None => write!(f, "+inf)"),
        }
    }
}
