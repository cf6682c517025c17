//! Error types for the luach-sedra crate.

use chrono::Weekday;
use luach_hdate::{HDateError, YearKind};

/// Error type for all fallible operations in the luach-sedra crate.
///
/// [`UnmodeledYearType`](SedraError::UnmodeledYearType) and
/// [`PortionNotFound`](SedraError::PortionNotFound) indicate a calendar
/// combination the reading tables do not cover. They are never caused by
/// ordinary user input and callers should treat them as fatal.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SedraError {
    /// Returned when no reading table exists for the year's shape.
    #[error(
        "no reading table for year {year} (leap: {leap}, Rosh Hashana on {rosh_hashana}, \
         {kind:?} year, Israel: {il})"
    )]
    UnmodeledYearType {
        /// Hebrew year being classified.
        year: i32,
        /// Whether the year has 13 months.
        leap: bool,
        /// Weekday of 1 Tishrei.
        rosh_hashana: Weekday,
        /// Length class of the year.
        kind: YearKind,
        /// Whether the Israel schedule was requested.
        il: bool,
    },

    /// Returned when a portion is never read on its own in a given year.
    #[error("portion {number} is not read separately in year {year}")]
    PortionNotFound {
        /// Hebrew year searched.
        year: i32,
        /// 1-based portion number.
        number: u8,
    },

    /// Returned when a portion number is outside 1..=53.
    #[error("invalid portion number: {number} (must be 1..=53)")]
    InvalidPortionNumber {
        /// The invalid number that was provided.
        number: u8,
    },

    /// Returned when a date could not be constructed.
    #[error(transparent)]
    Date(#[from] HDateError),
}
