//! Error types for the luach-hebcal crate.

use luach_hdate::HDateError;
use luach_holidays::HolidayError;
use luach_sedra::SedraError;

use crate::cycle::CycleKind;

/// Returned by a study-cycle collaborator asked about a date it does not
/// cover.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CycleError {
    /// Returned for a date before the cycle's first day.
    #[error("{kind} had not started by absolute day {abs} (first day {first_day})")]
    NotStarted {
        /// Cycle that was asked.
        kind: CycleKind,
        /// Requested absolute day.
        abs: i64,
        /// Absolute day on which the cycle began.
        first_day: i64,
    },
}

/// Error type for all fallible operations in the luach-hebcal crate.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CalError {
    /// Returned when candle lighting is requested without a location.
    #[error("candle lighting requires a location")]
    MissingLocation,

    /// Returned when candle lighting is requested but no sun-time
    /// provider was supplied to the calendar.
    #[error("candle lighting requires a zmanim provider")]
    MissingZmanim,

    /// Returned when both Havdalah minutes and degrees are set.
    #[error("havdalah minutes ({mins}) and degrees ({degrees}) are mutually exclusive")]
    ConflictingHavdalah {
        /// Minutes after sunset that were requested.
        mins: u32,
        /// Solar depression that was requested.
        degrees: f64,
    },

    /// Returned when only one end of an explicit date range is given.
    #[error("a start date requires an end date and vice versa")]
    UnpairedRange,

    /// Returned when a Hebrew year below 1 is requested.
    #[error("invalid Hebrew year: {year} (must be >= 1)")]
    InvalidHebrewYear {
        /// The invalid year that was provided.
        year: i32,
    },

    /// Returned when the range start lies after its end.
    #[error("invalid range: start day {start} is after end day {end}")]
    InvalidRange {
        /// First absolute day requested.
        start: i64,
        /// Last absolute day requested.
        end: i64,
    },

    /// Returned when more years are requested than one run may cover.
    #[error("invalid num_years: {num_years} (at most {max})")]
    InvalidNumYears {
        /// The invalid count that was provided.
        num_years: u32,
        /// Largest accepted count.
        max: u32,
    },

    /// Returned when a requested year lies outside the supported range.
    #[error("year {year} (with {num_years} years) is out of range")]
    YearOutOfRange {
        /// First requested year.
        year: i32,
        /// Number of years requested.
        num_years: u32,
    },

    /// Returned when a Gregorian month outside 1..=12 is requested.
    #[error("invalid month: {month} (must be 1..=12)")]
    InvalidMonth {
        /// The invalid month that was provided.
        month: u8,
    },

    /// Returned when a study cycle is requested but no collaborator for it
    /// was registered.
    #[error("{kind} requested but no provider is registered")]
    MissingCycle {
        /// Requested cycle.
        kind: CycleKind,
    },

    /// Returned when a date could not be constructed.
    #[error(transparent)]
    Date(#[from] HDateError),

    /// Returned when the holiday calendar for a year could not be built.
    #[error(transparent)]
    Holiday(#[from] HolidayError),

    /// Returned when the reading schedule for a year could not be built.
    #[error(transparent)]
    Sedra(#[from] SedraError),

    /// Returned when a study cycle rejects a date.
    #[error(transparent)]
    Cycle(#[from] CycleError),
}
