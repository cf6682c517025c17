//! Calculated molad (mean lunar conjunction) of a Hebrew month.

use std::fmt;

use chrono::Weekday;

use crate::date::HebrewDate;
use crate::month::HMonth;
use crate::year::{EPOCH, is_leap_year};

/// Chalakim from the start of Sunday to molad BaHaRaD (1d 5h 204p).
const CHALAKIM_MOLAD_TOHU: i64 = 31_524;
const CHALAKIM_PER_MINUTE: i64 = 18;
const CHALAKIM_PER_HOUR: i64 = 1_080;
const CHALAKIM_PER_DAY: i64 = 25_920;
/// 29 days, 12 hours and 793 chalakim.
const CHALAKIM_PER_MONTH: i64 = 765_433;

/// The molad of a month: the day it falls on and the time after 18:00
/// of the preceding evening, in hours, minutes and chalakim.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Molad {
    date: HebrewDate,
    hours: u8,
    minutes: u8,
    chalakim: u8,
}

/// Month index counted from Tishrei = 1.
fn month_of_civil_year(year: i32, month: HMonth) -> i64 {
    let offset = i64::from(is_leap_year(year));
    (i64::from(month.number()) + offset + 5) % (offset + 12) + 1
}

fn chalakim_since_molad_tohu(year: i32, month: HMonth) -> i64 {
    let prev_year = i64::from(year) - 1;
    let cycles = prev_year.div_euclid(19);
    let in_cycle = prev_year.rem_euclid(19);
    let months_elapsed = 235 * cycles
        + 12 * in_cycle
        + (7 * in_cycle + 1).div_euclid(19)
        + month_of_civil_year(year, month)
        - 1;
    CHALAKIM_MOLAD_TOHU + CHALAKIM_PER_MONTH * months_elapsed
}

impl Molad {
    /// Computes the molad of `month` in Hebrew `year`.
    pub fn new(year: i32, month: HMonth) -> Self {
        let chalakim = chalakim_since_molad_tohu(year, month);
        let day = chalakim.div_euclid(CHALAKIM_PER_DAY);
        let parts = chalakim.rem_euclid(CHALAKIM_PER_DAY);

        let hours = parts / CHALAKIM_PER_HOUR;
        let rest = parts - hours * CHALAKIM_PER_HOUR;
        let minutes = rest / CHALAKIM_PER_MINUTE;
        let chalakim = rest - minutes * CHALAKIM_PER_MINUTE;

        // the molad day begins at 18:00 of the previous civil day
        let mut abs = day + EPOCH - 1;
        if hours >= 6 {
            abs += 1;
        }
        Self {
            date: HebrewDate::from_abs(abs),
            hours: ((hours + 18) % 24) as u8,
            minutes: minutes as u8,
            chalakim: chalakim as u8,
        }
    }

    /// Civil day on which the molad falls.
    pub fn date(&self) -> HebrewDate {
        self.date
    }

    /// Weekday of the molad.
    pub fn weekday(&self) -> Weekday {
        self.date.weekday()
    }

    /// Hour of the molad (0..=23).
    pub fn hours(&self) -> u8 {
        self.hours
    }

    /// Minutes past the hour (0..=59).
    pub fn minutes(&self) -> u8 {
        self.minutes
    }

    /// Chalakim past the minute (0..=17).
    pub fn chalakim(&self) -> u8 {
        self.chalakim
    }
}

impl fmt::Display for Molad {
    /// "Thu, 8 minutes and 13 chalakim after 14:00"
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}, {} minutes and {} chalakim after {}:00",
            self.weekday(),
            self.minutes,
            self.chalakim,
            self.hours
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn molad_iyyar_5783() {
        let molad = Molad::new(5783, HMonth::Iyyar);
        assert_eq!(molad.weekday(), Weekday::Thu);
        assert_eq!(molad.hours(), 14);
        assert_eq!(molad.minutes(), 8);
        assert_eq!(molad.chalakim(), 13);
        assert_eq!(
            molad.to_string(),
            "Thu, 8 minutes and 13 chalakim after 14:00"
        );
    }

    #[test]
    fn civil_month_index() {
        assert_eq!(month_of_civil_year(5783, HMonth::Tishrei), 1);
        assert_eq!(month_of_civil_year(5784, HMonth::Tishrei), 1);
        assert_eq!(month_of_civil_year(5783, HMonth::Nisan), 7);
        assert_eq!(month_of_civil_year(5784, HMonth::Nisan), 8);
        assert_eq!(month_of_civil_year(5784, HMonth::Adar2), 7);
    }

    #[test]
    fn molad_falls_near_rosh_chodesh() {
        let molad = Molad::new(5784, HMonth::Tishrei);
        let rh = HebrewDate::new(5784, HMonth::Tishrei, 1).unwrap();
        assert!((rh.abs() - molad.date().abs()).abs() <= 2);
    }
}
