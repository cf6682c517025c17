//! Hebrew year arithmetic: leap cycle, molad-based new year, month lengths.
//!
//! All arithmetic is exact integer math in chalakim (1/1080 hour). The
//! only shared state is the elapsed-days memo, guarded by an `RwLock` so
//! that calendars for several years or regions can be built in parallel.

use std::collections::HashMap;
use std::sync::{OnceLock, RwLock};

use crate::month::HMonth;

/// Offset such that `EPOCH + elapsed_days(y)` is the absolute day of
/// 1 Tishrei of year `y`.
pub const EPOCH: i64 = -1_373_428;

/// Mean length of a Hebrew year in days, used only to estimate a year.
pub(crate) const AVG_YEAR_DAYS: f64 = 365.246_822_205_977_94;

static ELAPSED_DAYS: OnceLock<RwLock<HashMap<i32, i64>>> = OnceLock::new();

/// Returns `true` if the Hebrew year has 13 months.
///
/// Exactly 7 years of every 19-year cycle are leap years.
pub fn is_leap_year(year: i32) -> bool {
    (1 + 7 * i64::from(year)).rem_euclid(19) < 7
}

/// Number of months in the Hebrew year (12 or 13).
pub fn months_in_year(year: i32) -> u8 {
    if is_leap_year(year) { 13 } else { 12 }
}

/// Days from the epoch to 1 Tishrei of `year`, after postponements.
///
/// Memoised process-wide; the first call for a year computes the molad
/// of Tishrei and applies the dehiyot so Rosh Hashana never falls on
/// Sunday, Wednesday, or Friday.
pub fn elapsed_days(year: i32) -> i64 {
    let cache = ELAPSED_DAYS.get_or_init(|| RwLock::new(HashMap::new()));
    if let Ok(map) = cache.read() {
        if let Some(&days) = map.get(&year) {
            return days;
        }
    }
    let days = compute_elapsed_days(year);
    if let Ok(mut map) = cache.write() {
        map.insert(year, days);
    }
    days
}

fn compute_elapsed_days(year: i32) -> i64 {
    let prev_year = i64::from(year) - 1;
    let cycles = prev_year.div_euclid(19);
    let in_cycle = prev_year.rem_euclid(19);
    let months_elapsed = 235 * cycles + 12 * in_cycle + (7 * in_cycle + 1).div_euclid(19);

    let parts_elapsed = 204 + 793 * months_elapsed.rem_euclid(1080);
    let hours_elapsed = 5
        + 12 * months_elapsed
        + 793 * months_elapsed.div_euclid(1080)
        + parts_elapsed.div_euclid(1080);
    let parts = parts_elapsed.rem_euclid(1080) + 1080 * hours_elapsed.rem_euclid(24);
    let day = 1 + 29 * months_elapsed + hours_elapsed.div_euclid(24);

    // molad zaken, GaTaRaD, BeTU'TaKPaT
    let postponed = parts >= 19_440
        || (day.rem_euclid(7) == 2 && parts >= 9_924 && !is_leap_year(year))
        || (day.rem_euclid(7) == 1 && parts >= 16_789 && is_leap_year(year - 1));
    let alt_day = if postponed { day + 1 } else { day };

    // lo ADU rosh
    if matches!(alt_day.rem_euclid(7), 0 | 3 | 5) {
        alt_day + 1
    } else {
        alt_day
    }
}

/// Number of days in the Hebrew year (353–355 or 383–385).
pub fn days_in_year(year: i32) -> i64 {
    elapsed_days(year + 1) - elapsed_days(year)
}

/// `true` if Cheshvan has 30 days in `year`.
pub fn long_cheshvan(year: i32) -> bool {
    days_in_year(year) % 10 == 5
}

/// `true` if Kislev has 29 days in `year`.
pub fn short_kislev(year: i32) -> bool {
    days_in_year(year) % 10 == 3
}

/// Number of days in the given month of the given Hebrew year.
pub fn days_in_month(month: HMonth, year: i32) -> u8 {
    match month {
        HMonth::Iyyar | HMonth::Tamuz | HMonth::Elul | HMonth::Tevet | HMonth::Adar2 => 29,
        HMonth::Adar1 if !is_leap_year(year) => 29,
        HMonth::Cheshvan if !long_cheshvan(year) => 29,
        HMonth::Kislev if short_kislev(year) => 29,
        _ => 30,
    }
}

/// Classification of a year by the lengths of Cheshvan and Kislev.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum YearKind {
    /// Cheshvan and Kislev both have 29 days (353 or 383 days).
    Deficient,
    /// Cheshvan 29, Kislev 30 (354 or 384 days).
    Regular,
    /// Cheshvan and Kislev both have 30 days (355 or 385 days).
    Complete,
}

impl YearKind {
    /// Classifies a Hebrew year.
    pub fn of(year: i32) -> Self {
        match (long_cheshvan(year), short_kislev(year)) {
            (true, false) => Self::Complete,
            (false, true) => Self::Deficient,
            _ => Self::Regular,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn leap_years() {
        assert!(is_leap_year(5782));
        assert_eq!(months_in_year(5782), 13);
        assert!(!is_leap_year(5783));
        assert_eq!(months_in_year(5783), 12);
        assert!(is_leap_year(5784));
    }

    #[test]
    fn elapsed_days_known_values() {
        let cases = [
            (1, 1),
            (2, 356),
            (123, 44_563),
            (1234, 450_344),
            (3762, 1_373_677),
            (5708, 2_084_447),
            (5762, 2_104_174),
            (5763, 2_104_528),
            (5764, 2_104_913),
            (5765, 2_105_268),
            (5766, 2_105_651),
            (5780, 2_110_760),
        ];
        for (year, expected) in cases {
            assert_eq!(elapsed_days(year), expected, "year {year}");
        }
    }

    #[test]
    fn elapsed_days_is_memoised_consistently() {
        let first = elapsed_days(5790);
        let second = elapsed_days(5790);
        assert_eq!(first, second);
        assert_eq!(first, compute_elapsed_days(5790));
    }

    #[test]
    fn year_lengths() {
        let cases = [
            (1, 355),
            (2, 355),
            (123, 355),
            (1234, 353),
            (3671, 354),
            (3762, 383),
            (5761, 353),
            (5762, 354),
            (5763, 385),
            (5764, 355),
            (5765, 383),
            (5766, 354),
            (5779, 385),
            (5780, 355),
            (5781, 353),
            (5782, 384),
            (5783, 355),
            (5784, 383),
            (5785, 355),
            (5786, 354),
            (5787, 385),
            (5788, 355),
            (5789, 354),
        ];
        for (year, expected) in cases {
            assert_eq!(days_in_year(year), expected, "year {year}");
        }
    }

    #[test]
    fn cheshvan_kislev_follow_year_length() {
        assert!(long_cheshvan(5780));
        assert!(!short_kislev(5780));
        assert_eq!(days_in_month(HMonth::Cheshvan, 5780), 30);
        assert_eq!(days_in_month(HMonth::Kislev, 5780), 30);

        assert!(short_kislev(5781));
        assert_eq!(days_in_month(HMonth::Cheshvan, 5781), 29);
        assert_eq!(days_in_month(HMonth::Kislev, 5781), 29);

        assert_eq!(days_in_month(HMonth::Cheshvan, 5786), 29);
        assert_eq!(days_in_month(HMonth::Kislev, 5786), 30);
    }

    #[test]
    fn adar_lengths() {
        assert_eq!(days_in_month(HMonth::Adar1, 5782), 30);
        assert_eq!(days_in_month(HMonth::Adar2, 5782), 29);
        assert_eq!(days_in_month(HMonth::Adar1, 5783), 29);
    }

    #[test]
    fn year_kind() {
        assert_eq!(YearKind::of(5780), YearKind::Complete);
        assert_eq!(YearKind::of(5781), YearKind::Deficient);
        assert_eq!(YearKind::of(5786), YearKind::Regular);
    }
}
