//! Per-year reading schedule.

use chrono::Weekday;
use luach_hdate::{
    HMonth, HebrewDate, YearKind, day_on_or_before, hebrew_to_abs, is_leap_year, weekday_of,
};
use tracing::{debug, trace};

use crate::error::SedraError;
use crate::parsha::{PORTION_COUNT, Parsha};
use crate::table::SedraTable;

/// The weekly reading schedule of one Hebrew year for Israel or the
/// Diaspora.
///
/// Built once per year and immutable afterwards. [`lookup`](Sedra::lookup)
/// transparently consults the neighbouring year when the day lies outside
/// this year's table, so a forward scan can keep a single `Sedra` until it
/// crosses Rosh Hashana.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sedra {
    year: i32,
    il: bool,
    first_saturday: i64,
    table: SedraTable,
}

impl Sedra {
    /// Builds the schedule for Hebrew `year`.
    ///
    /// # Errors
    ///
    /// Returns [`SedraError::UnmodeledYearType`] if the year's shape has no
    /// reading table.
    #[tracing::instrument]
    pub fn new(year: i32, il: bool) -> Result<Self, SedraError> {
        let rosh_hashana = hebrew_to_abs(year, HMonth::Tishrei, 1);
        let weekday = weekday_of(rosh_hashana);
        let leap = is_leap_year(year);
        let kind = YearKind::of(year);

        let table = SedraTable::select(leap, weekday, kind, il).ok_or(
            SedraError::UnmodeledYearType {
                year,
                leap,
                rosh_hashana: weekday,
                kind,
                il,
            },
        )?;
        let first_saturday = day_on_or_before(Weekday::Sat, rosh_hashana + 6);
        debug!(?table, first_saturday, "selected reading table");

        Ok(Self {
            year,
            il,
            first_saturday,
            table,
        })
    }

    /// Hebrew year of this schedule.
    pub fn year(&self) -> i32 {
        self.year
    }

    /// True for the Israel schedule.
    pub fn is_israel(&self) -> bool {
        self.il
    }

    /// Absolute day of the first Shabbat on or after Rosh Hashana.
    pub fn first_saturday(&self) -> i64 {
        self.first_saturday
    }

    /// Reading for the Shabbat on or after absolute day `abs`.
    ///
    /// # Errors
    ///
    /// Returns [`SedraError::UnmodeledYearType`] if a neighbouring year has
    /// to be consulted and has no reading table.
    pub fn lookup(&self, abs: i64) -> Result<Parsha, SedraError> {
        let saturday = day_on_or_before(Weekday::Sat, abs + 6);
        let week = (saturday - self.first_saturday).div_euclid(7);
        if week < 0 {
            trace!(abs, year = self.year, "day precedes schedule, using previous year");
            return Self::new(self.year - 1, self.il)?.lookup(abs);
        }

        let entries = self.table.entries();
        match usize::try_from(week).ok().and_then(|w| entries.get(w)) {
            Some(&entry) => Ok(Parsha::from_entry(entry)),
            None => {
                trace!(abs, year = self.year, "day past schedule, using next year");
                Self::new(self.year + 1, self.il)?.lookup(abs)
            }
        }
    }

    /// Reading for the Shabbat on or after `date`.
    ///
    /// # Errors
    ///
    /// See [`lookup`](Sedra::lookup).
    pub fn lookup_date(&self, date: &HebrewDate) -> Result<Parsha, SedraError> {
        self.lookup(date.abs())
    }

    /// Shabbat on which portion `number` (1-based) is read on its own.
    ///
    /// # Errors
    ///
    /// Returns [`SedraError::InvalidPortionNumber`] outside 1..=53 and
    /// [`SedraError::PortionNotFound`] when the portion is only read doubled
    /// this year.
    pub fn find_parsha_num(&self, number: u8) -> Result<HebrewDate, SedraError> {
        if !(1..=PORTION_COUNT).contains(&number) {
            return Err(SedraError::InvalidPortionNumber { number });
        }
        let wanted = (number - 1) as i8;
        let week = self
            .table
            .entries()
            .iter()
            .position(|&entry| entry == wanted)
            .ok_or(SedraError::PortionNotFound {
                year: self.year,
                number,
            })?;
        Ok(HebrewDate::from_abs(self.first_saturday + 7 * week as i64))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use luach_hdate::GregorianDate;

    fn abs(year: i32, month: u8, day: u8) -> i64 {
        GregorianDate::new(year, month, day).unwrap().to_abs()
    }

    #[test]
    fn first_saturday_5781() {
        let sedra = Sedra::new(5781, false).unwrap();
        assert_eq!(sedra.first_saturday(), abs(2020, 9, 19));
        assert_eq!(sedra.table, SedraTable::SatShort);
    }

    #[test]
    fn table_choice_5749_and_5783() {
        assert_eq!(Sedra::new(5749, false).unwrap().table, SedraTable::MonShortLeap);
        assert_eq!(Sedra::new(5783, false).unwrap().table, SedraTable::MonLong);
        assert_eq!(Sedra::new(5783, true).unwrap().table, SedraTable::MonShort);
        assert_eq!(Sedra::new(5784, true).unwrap().table, SedraTable::SatShortLeap);
    }

    #[test]
    fn lookup_5781() {
        let sedra = Sedra::new(5781, false).unwrap();
        assert_eq!(sedra.lookup(abs(2020, 9, 19)).unwrap(), Parsha::Chag);
        assert_eq!(sedra.lookup(abs(2020, 10, 10)).unwrap(), Parsha::Chag);
        assert_eq!(sedra.lookup(abs(2020, 10, 17)).unwrap(), Parsha::Single(1));
        assert_eq!(sedra.lookup(abs(2021, 4, 17)).unwrap(), Parsha::Double(27));
        assert_eq!(sedra.lookup(abs(2021, 7, 10)).unwrap(), Parsha::Double(42));
        assert_eq!(sedra.lookup(abs(2021, 9, 4)).unwrap(), Parsha::Single(51));
    }

    #[test]
    fn weekday_resolves_to_following_shabbat() {
        let sedra = Sedra::new(5783, false).unwrap();
        // Wednesday 4 January 2023
        assert_eq!(sedra.lookup(abs(2023, 1, 4)).unwrap().names(), vec!["Vayechi"]);
    }

    #[test]
    fn lookup_crosses_into_next_year() {
        let sedra = Sedra::new(5783, false).unwrap();
        assert_eq!(sedra.lookup(abs(2023, 9, 16)).unwrap(), Parsha::Chag);
        assert_eq!(sedra.lookup(abs(2023, 9, 23)).unwrap(), Parsha::Single(53));
        assert_eq!(sedra.lookup(abs(2023, 10, 14)).unwrap(), Parsha::Single(1));
    }

    #[test]
    fn lookup_before_schedule_uses_previous_year() {
        let sedra = Sedra::new(5782, false).unwrap();
        // Nitzavim, the Shabbat before Rosh Hashana 5782
        let earlier = Sedra::new(5781, false).unwrap();
        let day = abs(2021, 9, 4);
        assert_eq!(sedra.lookup(day).unwrap(), earlier.lookup(day).unwrap());
    }

    #[test]
    fn find_beshalach_5749() {
        let sedra = Sedra::new(5749, false).unwrap();
        let date = sedra.find_parsha_num(16).unwrap();
        assert_eq!(date.abs(), abs(1989, 1, 21));
        assert_eq!(date.month(), HMonth::Shvat);
        assert_eq!(date.day(), 15);
    }

    #[test]
    fn find_doubled_portion_fails() {
        let sedra = Sedra::new(5783, false).unwrap();
        assert_eq!(
            sedra.find_parsha_num(22).unwrap_err(),
            SedraError::PortionNotFound {
                year: 5783,
                number: 22,
            }
        );
        assert_eq!(
            sedra.find_parsha_num(0).unwrap_err(),
            SedraError::InvalidPortionNumber { number: 0 }
        );
    }
}
