//! Absolute-day range covered by a generation run.

use chrono::{Datelike, Local};
use luach_hdate::{
    GregorianDate, HMonth, HebrewDate, gregorian_days_in_month, gregorian_to_abs,
};

use crate::error::CalError;
use crate::options::CalOptions;

/// Inclusive absolute-day range plus whether it starts in a Gregorian year
/// too early for candle lighting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct DayRange {
    pub start: i64,
    pub end: i64,
    pub early_years: bool,
}

/// Most years a single run may cover.
pub(crate) const MAX_NUM_YEARS: u32 = 10_000;
/// Largest magnitude of a requested year, in either calendar.
pub(crate) const MAX_YEAR: i32 = 1_000_000;

/// Number of years to cover, at least 1.
pub(crate) fn check_num_years(num_years: u32) -> Result<i32, CalError> {
    let invalid = || CalError::InvalidNumYears {
        num_years,
        max: MAX_NUM_YEARS,
    };
    if num_years > MAX_NUM_YEARS {
        return Err(invalid());
    }
    i32::try_from(num_years.max(1)).map_err(|_| invalid())
}

/// Fails unless `year` lies within `-MAX_YEAR..=MAX_YEAR`.
pub(crate) fn check_year(year: i32, num_years: u32) -> Result<(), CalError> {
    if (-MAX_YEAR..=MAX_YEAR).contains(&year) {
        Ok(())
    } else {
        Err(CalError::YearOutOfRange { year, num_years })
    }
}

/// Gregorian year `n` years after `year`, skipping year 0.
fn add_gregorian_years(year: i32, n: i32) -> Option<i32> {
    let next = year.checked_add(n)?;
    if year < 0 && next >= 0 {
        next.checked_add(1)
    } else {
        Some(next)
    }
}

/// Resolves the range requested by `opts`, using today's date when no
/// year is given.
///
/// A Hebrew year starts on Erev Rosh Hashana, the last day of the
/// previous year, so that its candle lighting is included.
pub(crate) fn resolve(opts: &CalOptions) -> Result<DayRange, CalError> {
    match (opts.start(), opts.end()) {
        (Some(start), Some(end)) => {
            if start.abs() > end.abs() {
                return Err(CalError::InvalidRange {
                    start: start.abs(),
                    end: end.abs(),
                });
            }
            return Ok(DayRange {
                start: start.abs(),
                end: end.abs(),
                early_years: false,
            });
        }
        (Some(_), None) | (None, Some(_)) => return Err(CalError::UnpairedRange),
        (None, None) => {}
    }

    let num_years = check_num_years(opts.num_years())?;
    let year = match opts.year() {
        Some(year) => year,
        None => {
            let today = Local::now().date_naive();
            if opts.is_hebrew_year() {
                let g = GregorianDate::new(today.year(), today.month() as u8, today.day() as u8)?;
                HebrewDate::from_gregorian(g).year()
            } else {
                today.year()
            }
        }
    };

    check_year(year, opts.num_years())?;
    let out_of_range = || CalError::YearOutOfRange {
        year,
        num_years: opts.num_years(),
    };

    if opts.is_hebrew_year() {
        if year < 1 {
            return Err(CalError::InvalidHebrewYear { year });
        }
        let mut start = HebrewDate::new(year, HMonth::Tishrei, 1)?.abs();
        if year > 1 {
            start -= 1;
        }
        let last = year.checked_add(num_years).ok_or_else(out_of_range)?;
        let end = HebrewDate::new(last, HMonth::Tishrei, 1)?.abs() - 1;
        return Ok(DayRange {
            start,
            end,
            early_years: false,
        });
    }

    let early_years = year < 100;
    if let Some(month) = opts.month() {
        if !(1..=12).contains(&month) {
            return Err(CalError::InvalidMonth { month });
        }
        let start = gregorian_to_abs(year, month, 1)?;
        let end = start + i64::from(gregorian_days_in_month(month, year)) - 1;
        return Ok(DayRange {
            start,
            end,
            early_years,
        });
    }
    let start = gregorian_to_abs(year, 1, 1)?;
    let last = add_gregorian_years(year, num_years).ok_or_else(out_of_range)?;
    let end = gregorian_to_abs(last, 1, 1)? - 1;
    Ok(DayRange {
        start,
        end,
        early_years,
    })
}
