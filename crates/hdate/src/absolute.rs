//! Hebrew date ↔ absolute day conversion and weekday anchoring.
//!
//! Absolute day 1 is 1 January of Gregorian year 1. Weekday numbering
//! follows the absolute day: `abs mod 7 == 0` is a Sunday.

use chrono::Weekday;

use crate::month::HMonth;
use crate::year::{AVG_YEAR_DAYS, EPOCH, days_in_month, elapsed_days, months_in_year};

/// Converts a Hebrew date to an absolute day number.
///
/// No validation is performed: day 30 of a 29-day month yields the
/// absolute day of the 1st of the following month.
pub fn hebrew_to_abs(year: i32, month: HMonth, day: u8) -> i64 {
    let mut total = i64::from(day);
    let month_len = |m: u8| -> i64 {
        HMonth::from_number(m).map_or(0, |m| i64::from(days_in_month(m, year)))
    };
    if month < HMonth::Tishrei {
        // months of the civil year that precede Nisan
        total += (HMonth::Tishrei.number()..=months_in_year(year))
            .map(month_len)
            .sum::<i64>();
        total += (HMonth::Nisan.number()..month.number())
            .map(month_len)
            .sum::<i64>();
    } else {
        total += (HMonth::Tishrei.number()..month.number())
            .map(month_len)
            .sum::<i64>();
    }
    EPOCH + elapsed_days(year) + total - 1
}

/// Converts an absolute day number to `(year, month, day)`.
///
/// Days before 1 Tishrei AM 1 produce a proleptic year below 1.
pub fn abs_to_hebrew(abs: i64) -> (i32, HMonth, u8) {
    let mut year = ((abs - EPOCH) as f64 / AVG_YEAR_DAYS).floor() as i32;
    while EPOCH + elapsed_days(year) <= abs {
        year += 1;
    }
    year -= 1;

    let mut month = if abs < hebrew_to_abs(year, HMonth::Nisan, 1) {
        HMonth::Tishrei
    } else {
        HMonth::Nisan
    };
    while abs > hebrew_to_abs(year, month, days_in_month(month, year)) {
        month = month.succ();
    }
    let day = 1 + abs - hebrew_to_abs(year, month, 1);
    // a month never exceeds 30 days
    (year, month, day as u8)
}

/// Weekday of an absolute day.
pub fn weekday_of(abs: i64) -> Weekday {
    match abs.rem_euclid(7) {
        0 => Weekday::Sun,
        1 => Weekday::Mon,
        2 => Weekday::Tue,
        3 => Weekday::Wed,
        4 => Weekday::Thu,
        5 => Weekday::Fri,
        _ => Weekday::Sat,
    }
}

/// Absolute day of the `weekday` on or before `abs`.
///
/// Applied to `abs + 6` this gives the weekday on or after `abs`; to
/// `abs + 3`, the nearest one; to `abs - 1`, the one strictly before; and
/// to `abs + 7`, the one strictly after.
pub fn day_on_or_before(weekday: Weekday, abs: i64) -> i64 {
    abs - (abs - i64::from(weekday.num_days_from_sunday())).rem_euclid(7)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hebrew_to_abs_known_values() {
        let cases = [
            ((5708, HMonth::Iyyar, 6), 711_262),
            ((3762, HMonth::Tishrei, 1), 249),
            ((3761, HMonth::Nisan, 1), 72),
            ((3761, HMonth::Tevet, 18), 1),
            ((3761, HMonth::Tevet, 17), 0),
            ((3761, HMonth::Tevet, 16), -1),
            ((3761, HMonth::Tevet, 1), -16),
            ((5765, HMonth::Tishrei, 1), 731_840),
            ((5765, HMonth::Shvat, 1), 731_957),
            ((5765, HMonth::Adar1, 1), 731_987),
            ((5765, HMonth::Adar2, 1), 732_017),
            ((5765, HMonth::Adar2, 22), 732_038),
            ((5765, HMonth::Nisan, 1), 732_046),
            ((5769, HMonth::Cheshvan, 15), 733_359),
            ((9999, HMonth::Elul, 29), 2_278_650),
        ];
        for ((y, m, d), abs) in cases {
            assert_eq!(hebrew_to_abs(y, m, d), abs, "{d} {m} {y}");
            assert_eq!(abs_to_hebrew(abs), (y, m, d), "abs {abs}");
        }
    }

    #[test]
    fn abs_before_common_era() {
        assert_eq!(abs_to_hebrew(-17), (3761, HMonth::Kislev, 30));
    }

    #[test]
    fn weekdays() {
        assert_eq!(weekday_of(hebrew_to_abs(5708, HMonth::Iyyar, 6)), Weekday::Sat);
        assert_eq!(weekday_of(hebrew_to_abs(3762, HMonth::Tishrei, 1)), Weekday::Thu);
        assert_eq!(weekday_of(hebrew_to_abs(3761, HMonth::Nisan, 1)), Weekday::Tue);
        assert_eq!(weekday_of(hebrew_to_abs(3761, HMonth::Tevet, 18)), Weekday::Mon);
        assert_eq!(weekday_of(hebrew_to_abs(3333, HMonth::Sivan, 29)), Weekday::Tue);
        assert_eq!(weekday_of(733_359), Weekday::Thu);
    }

    #[test]
    fn day_on_or_before_anchors() {
        // 2014-02-19 is a Wednesday
        let abs = 735_283;
        assert_eq!(day_on_or_before(Weekday::Wed, abs), abs);
        assert_eq!(day_on_or_before(Weekday::Sat, abs), abs - 4);
        assert_eq!(day_on_or_before(Weekday::Sat, abs + 6), abs + 3);
        assert_eq!(day_on_or_before(Weekday::Wed, abs - 1), abs - 7);
        assert_eq!(day_on_or_before(Weekday::Wed, abs + 7), abs + 7);
    }
}
