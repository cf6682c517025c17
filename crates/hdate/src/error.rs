//! Error types for the luach-hdate crate.

use crate::month::HMonth;

/// Error type for all fallible operations in the luach-hdate crate.
///
/// Every variant describes input that was rejected synchronously. Nothing
/// in this crate silently repairs a bad date except the Adar II → Adar I
/// normalisation documented on [`HebrewDate::new`](crate::HebrewDate::new).
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum HDateError {
    /// Returned when a Hebrew year is below 1.
    #[error("invalid Hebrew year: {year} (must be >= 1)")]
    InvalidYear {
        /// The invalid year that was provided.
        year: i32,
    },

    /// Returned when a Hebrew month number is outside 1..=13.
    #[error("invalid Hebrew month number: {month} (must be 1..=13)")]
    InvalidMonthNumber {
        /// The invalid month number that was provided.
        month: u8,
    },

    /// Returned when a month name cannot be recognised.
    #[error("unable to parse Hebrew month name: {name:?}")]
    InvalidMonthName {
        /// The unparseable name.
        name: String,
    },

    /// Returned when a day exceeds the length of the Hebrew month.
    #[error("invalid day: {day} for {month} {year} (max {max_day})")]
    InvalidDay {
        /// Hebrew year of the rejected date.
        year: i32,
        /// Month of the rejected date.
        month: HMonth,
        /// The invalid day number that was provided.
        day: u8,
        /// The number of days in that month and year.
        max_day: u8,
    },

    /// Returned for Gregorian year 0, which does not exist.
    #[error("Gregorian year 0 does not exist (year -1 is followed by year 1)")]
    GregorianYearZero,

    /// Returned when a Gregorian month number is outside 1..=12.
    #[error("invalid Gregorian month: {month} (must be 1..=12)")]
    InvalidGregorianMonth {
        /// The invalid month number that was provided.
        month: u8,
    },

    /// Returned when a day exceeds the length of the Gregorian month.
    #[error("invalid day: {day} for Gregorian {year}-{month:02} (max {max_day})")]
    InvalidGregorianDay {
        /// Gregorian year of the rejected date.
        year: i32,
        /// Gregorian month of the rejected date.
        month: u8,
        /// The invalid day number that was provided.
        day: u8,
        /// The number of days in that month and year.
        max_day: u8,
    },

    /// Returned when an anniversary is requested for a year that does not
    /// follow the original date.
    #[error("year {target} occurs on or before original year {original}")]
    TargetYearNotAfter {
        /// The requested anniversary year.
        target: i32,
        /// Hebrew year of the original date.
        original: i32,
    },
}
