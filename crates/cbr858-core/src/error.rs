//! Error types for table lookups.
//!
//! Every variant represents an input outside a table's declared coverage.
//! The regulation's tables contain genuine gaps and the library surfaces
//! them as errors rather than falling through to a neighboring bucket.

use chrono::NaiveDate;
use thiserror::Error;

use crate::types::CurrencyClass;

/// A specialized Result type for table lookups.
pub type CoreResult<T> = Result<T, Cbr858Error>;

/// The error type for regulation table lookups.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Cbr858Error {
    /// No duration bucket of the currency's rate-shock table matches.
    ///
    /// The published tables have coverage gaps (e.g. the yuan table has no
    /// bucket between "< 10" and "> 30" years), so this is reachable with
    /// perfectly ordinary durations.
    #[error("no {currency} duration bucket matches {duration} years")]
    UnmatchedDuration {
        /// Rate-shock table that was queried.
        currency: CurrencyClass,
        /// Duration in years that fell outside every bucket.
        duration: f64,
    },

    /// Date precedes the earliest effective window of a date-indexed table.
    #[error("{date} is outside the effective windows of table {table}")]
    DateOutOfRange {
        /// Name of the table that was queried.
        table: &'static str,
        /// The out-of-range calculation date.
        date: NaiveDate,
    },

    /// Credit quality group outside the declared domain 1-23.
    #[error("invalid credit quality group {group} (expected 1-23)")]
    InvalidCreditQuality {
        /// The rejected group identifier.
        group: u8,
    },

    /// Counterparty category outside the declared domain 1-5.
    #[error("invalid counterparty category {category} (expected 1-5)")]
    InvalidCounterpartyCategory {
        /// The rejected category identifier.
        category: u8,
    },

    /// Coefficient class outside a table's declared domain.
    #[error("invalid class {class} for table {table} (expected 1-{max})")]
    InvalidCoefficientClass {
        /// Name of the table that was queried.
        table: &'static str,
        /// The rejected class identifier.
        class: u8,
        /// Largest valid class for the table.
        max: u8,
    },

    /// 1-based index outside a correlation matrix's domain.
    #[error("index {index} is outside correlation matrix {matrix} (size {size})")]
    InvalidCorrelationIndex {
        /// Name of the matrix that was queried.
        matrix: &'static str,
        /// The rejected 1-based index.
        index: usize,
        /// Dimension of the matrix.
        size: usize,
    },
}

impl Cbr858Error {
    /// Creates an unmatched-duration error.
    #[must_use]
    pub fn unmatched_duration(currency: CurrencyClass, duration: f64) -> Self {
        Self::UnmatchedDuration { currency, duration }
    }

    /// Creates a date-out-of-range error.
    #[must_use]
    pub fn date_out_of_range(table: &'static str, date: NaiveDate) -> Self {
        Self::DateOutOfRange { table, date }
    }

    /// Creates an invalid-coefficient-class error.
    #[must_use]
    pub fn invalid_class(table: &'static str, class: u8, max: u8) -> Self {
        Self::InvalidCoefficientClass { table, class, max }
    }
}
