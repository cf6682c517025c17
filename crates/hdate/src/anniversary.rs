//! Yahrzeit and birthday observance dates in later Hebrew years.
//!
//! Both follow Reingold & Dershowitz, *Calendrical Calculations*: the two
//! rule sets differ in how they treat Adar and the variable-length
//! Cheshvan and Kislev.

use crate::absolute::hebrew_to_abs;
use crate::date::HebrewDate;
use crate::error::HDateError;
use crate::month::HMonth;
use crate::year::{is_leap_year, long_cheshvan, short_kislev};

fn check_target(target_year: i32, original: &HebrewDate) -> Result<(), HDateError> {
    if target_year <= original.year() {
        return Err(HDateError::TargetYearNotAfter {
            target: target_year,
            original: original.year(),
        });
    }
    Ok(())
}

fn last_month(year: i32) -> HMonth {
    if is_leap_year(year) {
        HMonth::Adar2
    } else {
        HMonth::Adar1
    }
}

/// Observed date of a yahrzeit (anniversary of death) in `target_year`.
///
/// - Cheshvan 30 and Kislev 30 depend on the first anniversary: if that
///   year lacked the day, the yahrzeit is the day before the 1st of the
///   next month.
/// - Adar II moves to the last month of the target year.
/// - Adar I 30 becomes Sh'vat 30 in an ordinary target year.
///
/// # Errors
///
/// Returns [`HDateError::TargetYearNotAfter`] if `target_year` is not
/// after the year of death.
pub fn yahrzeit(target_year: i32, death: &HebrewDate) -> Result<HebrewDate, HDateError> {
    check_target(target_year, death)?;
    let first_anniversary = death.year() + 1;

    let (mut month, mut day) = (death.month(), death.day());
    if month == HMonth::Cheshvan && day == 30 && !long_cheshvan(first_anniversary) {
        let eve = HebrewDate::from_abs(hebrew_to_abs(target_year, HMonth::Kislev, 1) - 1);
        (month, day) = (eve.month(), eve.day());
    } else if month == HMonth::Kislev && day == 30 && short_kislev(first_anniversary) {
        let eve = HebrewDate::from_abs(hebrew_to_abs(target_year, HMonth::Tevet, 1) - 1);
        (month, day) = (eve.month(), eve.day());
    } else if month == HMonth::Adar2 {
        month = last_month(target_year);
    } else if month == HMonth::Adar1 && day == 30 && !is_leap_year(target_year) {
        month = HMonth::Shvat;
    }

    // the day itself may not exist in the target year
    if month == HMonth::Cheshvan && day == 30 && !long_cheshvan(target_year) {
        (month, day) = (HMonth::Kislev, 1);
    } else if month == HMonth::Kislev && day == 30 && short_kislev(target_year) {
        (month, day) = (HMonth::Tevet, 1);
    }

    HebrewDate::new(target_year, month, day)
}

/// Observed date of a birthday or other joyous anniversary in `target_year`.
///
/// - Born in Adar of an ordinary year, or Adar II of a leap year: the last
///   month of the target year.
/// - Born on Cheshvan 30, Kislev 30, or (in a leap year) Adar I 30: the
///   1st of the following month when the target year lacks that day.
///
/// # Errors
///
/// Returns [`HDateError::TargetYearNotAfter`] if `target_year` is not
/// after the year of the original date.
pub fn birthday_or_anniversary(
    target_year: i32,
    original: &HebrewDate,
) -> Result<HebrewDate, HDateError> {
    check_target(target_year, original)?;
    let original_leap = is_leap_year(original.year());

    let (mut month, mut day) = (original.month(), original.day());
    if (month == HMonth::Adar1 && !original_leap) || (month == HMonth::Adar2 && original_leap) {
        month = last_month(target_year);
    } else if month == HMonth::Cheshvan && day == 30 && !long_cheshvan(target_year) {
        (month, day) = (HMonth::Kislev, 1);
    } else if month == HMonth::Kislev && day == 30 && short_kislev(target_year) {
        (month, day) = (HMonth::Tevet, 1);
    } else if month == HMonth::Adar1 && day == 30 && original_leap && !is_leap_year(target_year) {
        (month, day) = (HMonth::Nisan, 1);
    }

    HebrewDate::new(target_year, month, day)
}
