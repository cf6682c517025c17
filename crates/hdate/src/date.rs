//! Validated Hebrew date.

use std::cmp::Ordering;
use std::fmt;

use chrono::{NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

use crate::absolute::{abs_to_hebrew, day_on_or_before, hebrew_to_abs, weekday_of};
use crate::error::HDateError;
use crate::gematriya::gematriya;
use crate::greg::GregorianDate;
use crate::month::HMonth;
use crate::year::{days_in_month, is_leap_year};

/// A day in the Hebrew calendar.
///
/// A `HebrewDate` represents a whole day and has no notion of the time
/// of day; the evening start of the Hebrew day is the caller's concern.
/// The absolute day number is computed once at construction, so
/// comparisons and weekday queries are cheap.
///
/// Serialises as `{"year": 5769, "month": "Cheshvan", "day": 15}`. The
/// month is written by name so that Adar, Adar I and Adar II survive a
/// round trip.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "HebrewDateRepr", into = "HebrewDateRepr")]
pub struct HebrewDate {
    year: i32,
    month: HMonth,
    day: u8,
    abs: i64,
}

impl PartialOrd for HebrewDate {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for HebrewDate {
    fn cmp(&self, other: &Self) -> Ordering {
        self.abs.cmp(&other.abs)
    }
}

impl HebrewDate {
    /// Creates a new Hebrew date.
    ///
    /// Adar II in an ordinary year is normalised to Adar I (the year's
    /// only Adar).
    ///
    /// # Errors
    ///
    /// Returns [`HDateError::InvalidYear`] for years below 1 and
    /// [`HDateError::InvalidDay`] when the day is 0 or exceeds the month
    /// length; day 30 of a 29-day month is never accepted.
    pub fn new(year: i32, month: HMonth, day: u8) -> Result<Self, HDateError> {
        if year < 1 {
            return Err(HDateError::InvalidYear { year });
        }
        let month = if month == HMonth::Adar2 && !is_leap_year(year) {
            HMonth::Adar1
        } else {
            month
        };
        let max_day = days_in_month(month, year);
        if day < 1 || day > max_day {
            return Err(HDateError::InvalidDay {
                year,
                month,
                day,
                max_day,
            });
        }
        Ok(Self {
            year,
            month,
            day,
            abs: hebrew_to_abs(year, month, day),
        })
    }

    /// Converts an absolute day number to a Hebrew date.
    pub fn from_abs(abs: i64) -> Self {
        let (year, month, day) = abs_to_hebrew(abs);
        Self {
            year,
            month,
            day,
            abs,
        }
    }

    /// Converts a Gregorian date to a Hebrew date.
    pub fn from_gregorian(date: GregorianDate) -> Self {
        Self::from_abs(date.to_abs())
    }

    /// Converts a Gregorian `(year, month, day)` to a Hebrew date.
    ///
    /// # Errors
    ///
    /// Returns [`HDateError`] for Gregorian year 0 or a malformed month or day.
    pub fn from_ymd(year: i32, month: u8, day: u8) -> Result<Self, HDateError> {
        Ok(Self::from_gregorian(GregorianDate::new(year, month, day)?))
    }

    /// Returns the absolute day number.
    pub fn abs(&self) -> i64 {
        self.abs
    }

    /// Returns the Hebrew year.
    pub fn year(&self) -> i32 {
        self.year
    }

    /// Returns the Hebrew month.
    pub fn month(&self) -> HMonth {
        self.month
    }

    /// Returns the day of the month (1..=30).
    pub fn day(&self) -> u8 {
        self.day
    }

    /// `true` if this date's year has 13 months.
    pub fn is_leap_year(&self) -> bool {
        is_leap_year(self.year)
    }

    /// Number of days in this date's month.
    pub fn days_in_month(&self) -> u8 {
        days_in_month(self.month, self.year)
    }

    /// English month name; plain "Adar" in an ordinary year.
    pub fn month_name(&self) -> &'static str {
        if self.month == HMonth::Adar1 && !self.is_leap_year() {
            "Adar"
        } else {
            self.month.name()
        }
    }

    /// Hebrew month name; plain "אַדָר" in an ordinary year.
    pub fn hebrew_month_name(&self) -> &'static str {
        if self.month == HMonth::Adar1 && !self.is_leap_year() {
            "אַדָר"
        } else {
            self.month.hebrew_name()
        }
    }

    /// Renders the date in Hebrew letters ("ט״ו חֶשְׁוָן תשס״ט").
    pub fn render_hebrew(&self) -> String {
        format!(
            "{} {} {}",
            gematriya(u32::from(self.day)),
            self.hebrew_month_name(),
            gematriya(self.year.unsigned_abs())
        )
    }

    /// Returns the day of the week.
    pub fn weekday(&self) -> Weekday {
        weekday_of(self.abs)
    }

    /// Returns the following day.
    pub fn next(&self) -> Self {
        Self::from_abs(self.abs + 1)
    }

    /// Returns the preceding day.
    pub fn prev(&self) -> Self {
        Self::from_abs(self.abs - 1)
    }

    /// Returns the date `days` days away (negative to go back).
    pub fn add_days(&self, days: i64) -> Self {
        Self::from_abs(self.abs + days)
    }

    /// The `weekday` strictly before this date.
    pub fn before(&self, weekday: Weekday) -> Self {
        Self::from_abs(day_on_or_before(weekday, self.abs - 1))
    }

    /// The `weekday` on or before this date.
    pub fn on_or_before(&self, weekday: Weekday) -> Self {
        Self::from_abs(day_on_or_before(weekday, self.abs))
    }

    /// The `weekday` nearest to this date.
    pub fn nearest(&self, weekday: Weekday) -> Self {
        Self::from_abs(day_on_or_before(weekday, self.abs + 3))
    }

    /// The `weekday` on or after this date.
    pub fn on_or_after(&self, weekday: Weekday) -> Self {
        Self::from_abs(day_on_or_before(weekday, self.abs + 6))
    }

    /// The `weekday` strictly after this date.
    pub fn after(&self, weekday: Weekday) -> Self {
        Self::from_abs(day_on_or_before(weekday, self.abs + 7))
    }

    /// Returns the Gregorian date of this day.
    pub fn to_gregorian(&self) -> GregorianDate {
        GregorianDate::from_abs(self.abs)
    }

    /// Returns the chrono date of this day; `None` before the common era.
    pub fn to_naive_date(&self) -> Option<NaiveDate> {
        self.to_gregorian().to_naive_date()
    }
}

impl From<NaiveDate> for HebrewDate {
    fn from(date: NaiveDate) -> Self {
        Self::from_gregorian(GregorianDate::from(date))
    }
}

impl fmt::Display for HebrewDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.day, self.month_name(), self.year)
    }
}

/// Wire form of a [`HebrewDate`].
#[derive(Serialize, Deserialize)]
struct HebrewDateRepr {
    #[serde(alias = "hy")]
    year: i32,
    #[serde(alias = "hm")]
    month: String,
    #[serde(alias = "hd")]
    day: u8,
}

impl From<HebrewDate> for HebrewDateRepr {
    fn from(date: HebrewDate) -> Self {
        Self {
            year: date.year,
            month: date.month_name().to_string(),
            day: date.day,
        }
    }
}

impl TryFrom<HebrewDateRepr> for HebrewDate {
    type Error = HDateError;

    fn try_from(repr: HebrewDateRepr) -> Result<Self, Self::Error> {
        let month = repr.month.parse::<HMonth>()?;
        Self::new(repr.year, month, repr.day)
    }
}
