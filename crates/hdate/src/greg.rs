//! Proleptic Gregorian calendar on absolute day numbers.
//!
//! There is no year 0: year -1 (1 BCE) is immediately followed by year 1.
//! Years before the common era mirror the leap rule of their positive
//! counterpart, and absolute day 0 is 31 December of year -1.

use std::fmt;

use chrono::{Datelike, NaiveDate};

use crate::error::HDateError;

#[rustfmt::skip]
const DAYS_IN_MONTH: [u8; 13] = [0, 31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];

/// `true` if the Gregorian year is a leap year.
pub fn is_gregorian_leap_year(year: i32) -> bool {
    let y = year.unsigned_abs();
    y % 4 == 0 && (y % 100 != 0 || y % 400 == 0)
}

/// Number of days in a Gregorian month; 0 for an invalid month.
pub fn gregorian_days_in_month(month: u8, year: i32) -> u8 {
    match month {
        2 if is_gregorian_leap_year(year) => 29,
        1..=12 => DAYS_IN_MONTH[usize::from(month)],
        _ => 0,
    }
}

fn year_length(year: i64) -> i64 {
    if is_leap(year) { 366 } else { 365 }
}

fn is_leap(year: i64) -> bool {
    let y = year.abs();
    y % 4 == 0 && (y % 100 != 0 || y % 400 == 0)
}

fn day_of_year(year: i64, month: u8, day: u8) -> i64 {
    let month = i64::from(month);
    let correction = match month {
        1 | 2 => 0,
        _ if is_leap(year) => -1,
        _ => -2,
    };
    (367 * month - 362).div_euclid(12) + correction + i64::from(day)
}

/// Days in all CE years before `year` (`year >= 1`).
fn days_before_year(year: i64) -> i64 {
    let py = year - 1;
    365 * py + py.div_euclid(4) - py.div_euclid(100) + py.div_euclid(400)
}

/// Year and day-of-year of a positive absolute day.
fn ce_year_and_doy(abs: i64) -> (i64, i64) {
    let d0 = abs - 1;
    let n400 = d0.div_euclid(146_097);
    let d1 = d0.rem_euclid(146_097);
    let n100 = d1 / 36_524;
    let d2 = d1 % 36_524;
    let n4 = d2 / 1_461;
    let d3 = d2 % 1_461;
    let n1 = d3 / 365;
    let year = 400 * n400 + 100 * n100 + 4 * n4 + n1;
    if n100 == 4 || n1 == 4 {
        // last day of a leap year
        return (year, 366);
    }
    (year + 1, d3 % 365 + 1)
}

fn month_and_day(year: i64, doy: i64) -> (u8, u8) {
    let mut remaining = doy;
    let mut month = 1u8;
    loop {
        let len = if month == 2 && is_leap(year) {
            29
        } else {
            i64::from(DAYS_IN_MONTH[usize::from(month)])
        };
        if remaining <= len || month == 12 {
            // doy never exceeds the year length
            return (month, remaining as u8);
        }
        remaining -= len;
        month += 1;
    }
}

/// A validated date in the proleptic Gregorian calendar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct GregorianDate {
    year: i32,
    month: u8,
    day: u8,
}

impl GregorianDate {
    /// Creates a new Gregorian date.
    ///
    /// # Errors
    ///
    /// Returns [`HDateError::GregorianYearZero`] for year 0, and
    /// [`HDateError::InvalidGregorianMonth`] or
    /// [`HDateError::InvalidGregorianDay`] for a malformed month or day.
    pub fn new(year: i32, month: u8, day: u8) -> Result<Self, HDateError> {
        if year == 0 {
            return Err(HDateError::GregorianYearZero);
        }
        if !(1..=12).contains(&month) {
            return Err(HDateError::InvalidGregorianMonth { month });
        }
        let max_day = gregorian_days_in_month(month, year);
        if day < 1 || day > max_day {
            return Err(HDateError::InvalidGregorianDay {
                year,
                month,
                day,
                max_day,
            });
        }
        Ok(Self { year, month, day })
    }

    /// Converts an absolute day to a Gregorian date.
    pub fn from_abs(abs: i64) -> Self {
        let (year, doy) = if abs > 0 {
            ce_year_and_doy(abs)
        } else {
            // mirror into the CE years and count back from year end
            let (mirror, mirror_doy) = ce_year_and_doy(1 - abs);
            (-mirror, year_length(mirror) + 1 - mirror_doy)
        };
        let (month, day) = month_and_day(year, doy);
        Self {
            year: year as i32,
            month,
            day,
        }
    }

    /// Returns the absolute day number of this date.
    pub fn to_abs(self) -> i64 {
        let year = i64::from(self.year);
        let doy = day_of_year(year, self.month, self.day);
        if year > 0 {
            days_before_year(year) + doy
        } else {
            let mirror = -year;
            -(days_before_year(mirror) + year_length(mirror) - doy)
        }
    }

    /// Returns the year (never 0).
    pub fn year(self) -> i32 {
        self.year
    }

    /// Returns the month (1..=12).
    pub fn month(self) -> u8 {
        self.month
    }

    /// Returns the day within the month.
    pub fn day(self) -> u8 {
        self.day
    }

    /// Returns the day within the year (1..=366).
    pub fn day_of_year(self) -> u16 {
        day_of_year(i64::from(self.year), self.month, self.day) as u16
    }

    /// Converts to a chrono date; `None` before the common era, where
    /// chrono's astronomical year numbering differs.
    pub fn to_naive_date(self) -> Option<NaiveDate> {
        if self.year < 1 {
            return None;
        }
        NaiveDate::from_ymd_opt(self.year, u32::from(self.month), u32::from(self.day))
    }
}

impl From<NaiveDate> for GregorianDate {
    fn from(date: NaiveDate) -> Self {
        if date.year() >= 1 {
            Self {
                year: date.year(),
                month: date.month() as u8,
                day: date.day() as u8,
            }
        } else {
            Self::from_abs(i64::from(date.num_days_from_ce()))
        }
    }
}

impl fmt::Display for GregorianDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year, self.month, self.day)
    }
}

/// Converts a Gregorian date to an absolute day number.
///
/// # Errors
///
/// Returns [`HDateError`] for year 0 or a malformed month or day.
pub fn gregorian_to_abs(year: i32, month: u8, day: u8) -> Result<i64, HDateError> {
    Ok(GregorianDate::new(year, month, day)?.to_abs())
}

/// Converts an absolute day number to `(year, month, day)`.
pub fn abs_to_gregorian(abs: i64) -> (i32, u8, u8) {
    let date = GregorianDate::from_abs(abs);
    (date.year, date.month, date.day)
}
